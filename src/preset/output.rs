use super::ModEntry;
use crate::config::ExtractionConfig;

/// One `download_template` fragment per entry, in entry order. Entries with
/// an empty id still get a fragment.
pub fn download_command(entries: &[ModEntry], pattern: &ExtractionConfig) -> String {
    let template = pattern.download_template.replace("{app_id}", &pattern.app_id);
    entries
        .iter()
        .map(|entry| template.replace("{id}", &entry.id))
        .collect()
}

/// Launch paths for every entry, wrapped once in `launch_wrapper`.
pub fn launch_mod_string(entries: &[ModEntry], pattern: &ExtractionConfig) -> String {
    let mods: String = entries
        .iter()
        .map(|entry| pattern.launch_path_template.replace("{id}", &entry.id))
        .collect();
    pattern.launch_wrapper.replace("{mods}", &mods)
}
