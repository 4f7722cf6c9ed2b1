use super::{ExtractionResult, ModEntry};
use crate::config::ExtractionConfig;
use crate::dom::{Dom, Node, NodeId};

/// Walks the whole document in pre-order and turns every container row into
/// a [`ModEntry`]. Never fails: missing cells or links leave fields empty.
pub fn extract(dom: &Dom, pattern: &ExtractionConfig) -> ExtractionResult {
    let entries: Vec<ModEntry> = dom
        .descendants(dom.document())
        .filter(|&id| dom.get(id).is_some_and(|node| is_container(node, pattern)))
        .map(|id| read_container(dom, id, pattern))
        .collect();

    log::info!("Found {} mods", entries.len());

    let entries = if pattern.skip_empty_ids {
        let before = entries.len();
        let kept: Vec<ModEntry> = entries.into_iter().filter(|e| !e.id.is_empty()).collect();
        if kept.len() < before {
            log::debug!("Skipped {} mods without a workshop id", before - kept.len());
        }
        kept
    } else {
        entries
    };

    ExtractionResult::from_entries(entries, pattern)
}

pub fn is_container(node: &Node, pattern: &ExtractionConfig) -> bool {
    node.is_element(&pattern.container_tag)
        && node.has_attr(&pattern.marker_attr, &pattern.container_marker)
}

/// Reads the name and workshop id out of one container's direct field
/// children. When several fields match, the last one wins.
pub fn read_container(dom: &Dom, container: NodeId, pattern: &ExtractionConfig) -> ModEntry {
    let mut entry = ModEntry::default();

    for field_id in dom.children(container) {
        let Some(field) = dom.get(field_id) else {
            continue;
        };
        if !field.is_element(&pattern.field_tag) {
            continue;
        }

        // A cell may carry both the name marker and the link.
        if field.has_attr(&pattern.marker_attr, &pattern.name_marker) {
            if let Some(name) = first_text(dom, field_id) {
                entry.name = name.to_string();
            }
        }
        if let Some(id) = link_id(dom, field_id, pattern) {
            entry.id = id.to_string();
        }
    }

    entry
}

fn first_text(dom: &Dom, id: NodeId) -> Option<&str> {
    dom.children(id).find_map(|child| dom.get(child).and_then(Node::text))
}

/// Workshop id from the last matching link among the field's direct children.
fn link_id<'a>(dom: &'a Dom, field: NodeId, pattern: &ExtractionConfig) -> Option<&'a str> {
    dom.children(field)
        .filter_map(|child| dom.get(child))
        .filter(|node| node.is_element(&pattern.link_tag))
        .filter_map(|node| node.attr(&pattern.link_attr))
        .filter_map(|target| workshop_id(target, &pattern.id_prefix))
        .last()
}

/// Everything after the first occurrence of `prefix` in `target`.
pub fn workshop_id<'a>(target: &'a str, prefix: &str) -> Option<&'a str> {
    if prefix.is_empty() {
        return None;
    }
    target
        .find(prefix)
        .map(|start| &target[start + prefix.len()..])
}
