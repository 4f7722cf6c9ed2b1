#[cfg(test)]
mod tests {
    use crate::config::ExtractionConfig;
    use crate::dom::parser;
    use crate::preset::{extract, ModEntry};

    const LINK: &str = "https://steamcommunity.com/sharedfiles/filedetails/?id=";

    fn row(name: &str, id: &str) -> String {
        format!(
            r#"<tr data-type="ModContainer">
                 <td data-type="DisplayName">{name}</td>
                 <td><span class="from-steam">Steam</span></td>
                 <td><a href="{LINK}{id}" data-type="Link">{LINK}{id}</a></td>
               </tr>"#
        )
    }

    fn preset(rows: &[String]) -> String {
        format!(
            r#"<?xml version="1.0" encoding="utf-8"?>
            <html>
              <head><meta name="arma:Type" content="preset" /><title>Arma 3</title></head>
              <body>
                <h1>Arma 3 - Preset <strong>Test</strong></h1>
                <div class="mod-list"><table>{}</table></div>
              </body>
            </html>"#,
            rows.concat()
        )
    }

    fn entry(name: &str, id: &str) -> ModEntry {
        ModEntry {
            name: name.to_string(),
            id: id.to_string(),
        }
    }

    #[test]
    fn test_single_mod() {
        let dom = parser::parse(&preset(&[row("Test Mod", "123456789")]));
        let result = extract(&dom, &ExtractionConfig::default());

        assert_eq!(result.entries, vec![entry("Test Mod", "123456789")]);
        assert!(result
            .download_command
            .contains("+workshop_download_item 107410 123456789 "));
        assert_eq!(
            result.launch_mod_string,
            "mod=\"@/steamcmd/steamapps/workshop/content/123456789;\""
        );
    }

    #[test]
    fn test_no_containers() {
        let dom = parser::parse("<html><body><table><tr><td>nothing</td></tr></table></body></html>");
        let result = extract(&dom, &ExtractionConfig::default());

        assert!(result.entries.is_empty());
        assert_eq!(result.download_command, "");
        assert_eq!(result.launch_mod_string, "mod=\"\"");
    }

    #[test]
    fn test_container_without_link() {
        let html = preset(&[r#"<tr data-type="ModContainer">
                <td data-type="DisplayName">Local Mod</td>
                <td><span class="from-local">Local</span></td>
            </tr>"#
            .to_string()]);
        let result = extract(&parser::parse(&html), &ExtractionConfig::default());

        assert_eq!(result.entries, vec![entry("Local Mod", "")]);
        assert_eq!(result.download_command, "+workshop_download_item 107410  ");
    }

    #[test]
    fn test_malformed_html_still_matches() {
        let html = r#"<html><body><table>
            <tr data-type="ModContainer"><td data-type="DisplayName">First
            <td><a href="https://steamcommunity.com/sharedfiles/filedetails/?id=111">x
            <tr data-type="ModContainer"><td data-type="DisplayName">Second
            <td><a href="https://steamcommunity.com/sharedfiles/filedetails/?id=222">y
            "#;
        let result = extract(&parser::parse(html), &ExtractionConfig::default());

        let ids: Vec<_> = result.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["111", "222"]);
        assert!(result.entries[0].name.starts_with("First"));
        assert!(result.entries[1].name.starts_with("Second"));
    }

    #[test]
    fn test_entries_in_document_order() {
        let rows = vec![row("Zeta", "3"), row("Alpha", "1"), row("Mid", "2")];
        let result = extract(&parser::parse(&preset(&rows)), &ExtractionConfig::default());

        assert_eq!(
            result.entries,
            vec![entry("Zeta", "3"), entry("Alpha", "1"), entry("Mid", "2")]
        );
    }

    #[test]
    fn test_download_command_has_one_fragment_per_entry() {
        let rows = vec![row("A", "10"), row("B", "20"), row("C", "30")];
        let result = extract(&parser::parse(&preset(&rows)), &ExtractionConfig::default());

        let ids: Vec<&str> = result
            .download_command
            .split("+workshop_download_item 107410 ")
            .skip(1)
            .map(str::trim_end)
            .collect();
        let expected: Vec<&str> = result.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_launch_string_has_one_path_per_entry() {
        let rows = vec![row("A", "10"), row("B", "20"), row("C", "30")];
        let result = extract(&parser::parse(&preset(&rows)), &ExtractionConfig::default());

        let inner = result
            .launch_mod_string
            .strip_prefix("mod=\"")
            .and_then(|s| s.strip_suffix('"'))
            .unwrap();
        let paths: Vec<&str> = inner.split(';').filter(|p| !p.is_empty()).collect();

        assert_eq!(paths.len(), result.entries.len());
        for (path, entry) in paths.iter().zip(&result.entries) {
            assert!(path.ends_with(&entry.id));
        }
    }

    #[test]
    fn test_name_field_without_text() {
        let html = preset(&[format!(
            r#"<tr data-type="ModContainer"><td data-type="DisplayName"></td><td><a href="{LINK}5">l</a></td></tr>"#
        )]);
        let result = extract(&parser::parse(&html), &ExtractionConfig::default());

        assert_eq!(result.entries, vec![entry("", "5")]);
    }

    #[test]
    fn test_name_uses_first_text_child() {
        let html = preset(&[r#"<tr data-type="ModContainer"><td data-type="DisplayName"><b>bold</b>plain</td></tr>"#
            .to_string()]);
        let result = extract(&parser::parse(&html), &ExtractionConfig::default());

        assert_eq!(result.entries[0].name, "plain");
    }

    #[test]
    fn test_link_without_known_prefix() {
        let html = preset(&[r#"<tr data-type="ModContainer">
                <td data-type="DisplayName">Elsewhere</td>
                <td><a href="https://example.com/mods/123">l</a></td>
            </tr>"#
            .to_string()]);
        let result = extract(&parser::parse(&html), &ExtractionConfig::default());

        assert_eq!(result.entries, vec![entry("Elsewhere", "")]);
    }

    #[test]
    fn test_field_with_name_and_link() {
        let html = preset(&[format!(
            r#"<tr data-type="ModContainer"><td data-type="DisplayName">Both<a href="{LINK}77">l</a></td></tr>"#
        )]);
        let result = extract(&parser::parse(&html), &ExtractionConfig::default());

        assert_eq!(result.entries, vec![entry("Both", "77")]);
    }

    #[test]
    fn test_nested_links_are_ignored() {
        // Only links that are direct children of a field count.
        let html = preset(&[format!(
            r#"<tr data-type="ModContainer"><td data-type="DisplayName">Deep</td><td><span><a href="{LINK}9">l</a></span></td></tr>"#
        )]);
        let result = extract(&parser::parse(&html), &ExtractionConfig::default());

        assert_eq!(result.entries, vec![entry("Deep", "")]);
    }

    #[test]
    fn test_rows_without_marker_are_ignored() {
        let html = preset(&[
            row("Kept", "1"),
            format!(r#"<tr data-type="DlcContainer"><td data-type="DisplayName">DLC</td><td><a href="{LINK}2">l</a></td></tr>"#),
        ]);
        let result = extract(&parser::parse(&html), &ExtractionConfig::default());

        assert_eq!(result.entries, vec![entry("Kept", "1")]);
    }

    #[test]
    fn test_skip_empty_ids_toggle() {
        let html = preset(&[
            row("Workshop", "1"),
            r#"<tr data-type="ModContainer"><td data-type="DisplayName">Local</td></tr>"#.to_string(),
        ]);
        let dom = parser::parse(&html);

        let kept = extract(&dom, &ExtractionConfig::default());
        assert_eq!(kept.entries.len(), 2);

        let pattern = ExtractionConfig {
            skip_empty_ids: true,
            ..Default::default()
        };
        let skipped = extract(&dom, &pattern);
        assert_eq!(skipped.entries, vec![entry("Workshop", "1")]);
        assert_eq!(skipped.download_command, "+workshop_download_item 107410 1 ");
        assert_eq!(
            skipped.launch_mod_string,
            "mod=\"@/steamcmd/steamapps/workshop/content/1;\""
        );
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let html = preset(&[row("A", "1"), row("B", "2")]);
        let dom = parser::parse(&html);
        let pattern = ExtractionConfig::default();

        let first = extract(&dom, &pattern);
        assert_eq!(first, extract(&dom, &pattern));
        assert_eq!(first, extract(&parser::parse(&html), &pattern));
    }

    #[test]
    fn test_custom_pattern() {
        let html = r#"<ul>
            <li class="mod"><span class="name">Custom</span><span><a data-url="mods/id/55">x</a></span></li>
            </ul>"#;
        let pattern = ExtractionConfig {
            container_tag: "li".to_string(),
            marker_attr: "class".to_string(),
            container_marker: "mod".to_string(),
            field_tag: "span".to_string(),
            name_marker: "name".to_string(),
            link_attr: "data-url".to_string(),
            id_prefix: "mods/id/".to_string(),
            ..Default::default()
        };
        let result = extract(&parser::parse(html), &pattern);

        assert_eq!(result.entries, vec![entry("Custom", "55")]);
    }
}
