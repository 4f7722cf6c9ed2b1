use ego_tree::iter::Edge;
use scraper::{Html, Node as ScraperNode};
use std::io::Read;

use super::{Dom, NodeData, NodeId};
use crate::errors::ParseError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parses an HTML document. html5ever recovers from any markup error, so
/// this never fails.
pub fn parse(html: &str) -> Dom {
    let scraper_dom = Html::parse_document(html);
    let mut dom = Dom::new();
    // Nodes whose Open edge has been seen but not their Close edge.
    let mut open: Vec<NodeId> = Vec::new();

    for edge in scraper_dom.tree.root().traverse() {
        match edge {
            Edge::Open(scraper_node) => {
                let data = match scraper_node.value() {
                    ScraperNode::Document | ScraperNode::Fragment => {
                        open.push(dom.document());
                        continue;
                    }
                    ScraperNode::Element(el) => NodeData::Element {
                        tag_name: el.name().to_string(),
                        attributes: el
                            .attrs()
                            .map(|(k, v)| (k.to_string(), v.to_string()))
                            .collect(),
                    },
                    ScraperNode::Text(text) => NodeData::Text(text.text.to_string()),
                    ScraperNode::Comment(comment) => NodeData::Comment(comment.comment.to_string()),
                    _ => NodeData::Other,
                };
                let id = dom.create(data);
                let parent = open.last().copied().unwrap_or_else(|| dom.document());
                dom.append(parent, id);
                open.push(id);
            }
            Edge::Close(_) => {
                open.pop();
            }
        }
    }

    dom
}

/// Decodes `bytes` as UTF-8 and parses them.
pub fn parse_bytes(bytes: &[u8]) -> Result<Dom, ParseError> {
    if bytes.is_empty() {
        return Err(ParseError::Empty);
    }
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let html = std::str::from_utf8(bytes)?;
    Ok(parse(html))
}

/// Reads the whole stream into memory, then parses it.
pub fn parse_reader<R: Read>(mut reader: R) -> Result<Dom, ParseError> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    parse_bytes(&buffer)
}
