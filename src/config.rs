use anyhow::Context;
use path_clean::PathClean;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
    pub log_level: Option<String>,
    /// Where uploaded presets are written before extraction.
    pub storage_dir: PathBuf,
    /// Directory holding `index.html`.
    pub static_dir: PathBuf,
    pub max_upload_size: usize,
    pub keep_uploads: bool,
    pub extraction: ExtractionConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            workers: None,
            log_level: None,
            storage_dir: PathBuf::from("storage"),
            static_dir: PathBuf::from("static"),
            max_upload_size: 10 << 20,
            keep_uploads: false,
            extraction: ExtractionConfig::default(),
        }
    }
}

impl Config {
    /// Loads the YAML file at `path`. A missing file gives the defaults; a
    /// file that exists but doesn't parse is an error.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default().normalized());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("could not read config file {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file deserializes to unit, not to a mapping.
        if content.trim().is_empty() {
            return Ok(Self::default().normalized());
        }
        serde_yaml::from_str::<Self>(content).map(Self::normalized)
    }

    pub fn workers(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get).max(1)
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }

    fn normalized(mut self) -> Self {
        self.storage_dir = self.storage_dir.clean();
        self.static_dir = self.static_dir.clean();
        self
    }
}

/// The fixed strings that describe where mods live in an exported preset and
/// how the output commands are spelled.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ExtractionConfig {
    pub container_tag: String,
    /// Attribute key shared by the container marker and the field markers.
    pub marker_attr: String,
    pub container_marker: String,
    pub field_tag: String,
    pub name_marker: String,
    pub link_tag: String,
    pub link_attr: String,
    /// Everything after this in a link target is the workshop id.
    pub id_prefix: String,
    pub app_id: String,
    /// `{app_id}` and `{id}` are substituted per entry.
    pub download_template: String,
    /// `{id}` is substituted per entry.
    pub launch_path_template: String,
    /// `{mods}` receives the joined launch paths.
    pub launch_wrapper: String,
    /// Drop entries without a workshop id from every output.
    pub skip_empty_ids: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            container_tag: "tr".to_string(),
            marker_attr: "data-type".to_string(),
            container_marker: "ModContainer".to_string(),
            field_tag: "td".to_string(),
            name_marker: "DisplayName".to_string(),
            link_tag: "a".to_string(),
            link_attr: "href".to_string(),
            id_prefix: "steamcommunity.com/sharedfiles/filedetails/?id=".to_string(),
            app_id: "107410".to_string(),
            download_template: "+workshop_download_item {app_id} {id} ".to_string(),
            launch_path_template: "@/steamcmd/steamapps/workshop/content/{id};".to_string(),
            launch_wrapper: "mod=\"{mods}\"".to_string(),
            skip_empty_ids: false,
        }
    }
}
