//! Flat listing of a chunk tree: one row per node in pre-order.

use iff::{describe, ChunkNode, FieldEntry};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Row<'a> {
    pub depth: usize,
    /// Chunk id indented with one dot per nesting level, e.g. `..BMHD`.
    pub label: String,
    pub type_key: &'a str,
    pub description: &'static str,
    pub size: u32,
    pub fields: Vec<FieldEntry>,
    #[serde(skip)]
    pub payload: &'a [u8],
}

impl Row<'_> {
    pub fn summary(&self) -> String {
        format!(
            "{:<16} Type: {} - Desc.: {} - Size: {}",
            self.label, self.type_key, self.description, self.size
        )
    }
}

pub fn rows(root: &ChunkNode) -> Vec<Row<'_>> {
    root.walk()
        .map(|(depth, node)| {
            let payload = node.payload().unwrap_or_default();
            let described = describe(node.type_key(), payload);
            Row {
                depth,
                label: format!("{}{}", ".".repeat(depth), node.id()),
                type_key: node.type_key(),
                description: described.description,
                size: node.declared_size(),
                fields: described.fields,
                payload,
            }
        })
        .collect()
}
