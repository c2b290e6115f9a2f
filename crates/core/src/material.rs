//! Reference material shown and narrated over the course of a session.
//!
//! Material is immutable for the life of a session. How much of it the
//! orchestration service gets to see at a given round is decided by the
//! disclosure policy, not here.

use serde::{Deserialize, Serialize};

/// The kind of a description block, matching the wire tags `p`, `h2` and `h3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    #[serde(rename = "p")]
    Paragraph,
    #[serde(rename = "h2")]
    Heading2,
    #[serde(rename = "h3")]
    Heading3,
}

/// One typed block of article prose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionBlock {
    #[serde(rename = "type")]
    pub kind: BlockKind,
    pub content: String,
}

impl DescriptionBlock {
    pub fn paragraph(content: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Paragraph,
            content: content.into(),
        }
    }

    pub fn heading2(content: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Heading2,
            content: content.into(),
        }
    }

    pub fn heading3(content: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Heading3,
            content: content.into(),
        }
    }
}

/// A complete piece of reference material: an article with an optional code
/// sample. Loaded once (usually from a JSON file) and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceMaterial {
    pub title: String,
    #[serde(default)]
    pub description: Vec<DescriptionBlock>,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub language: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_block_serializes_with_wire_tags() {
        let block = DescriptionBlock::paragraph("Some prose.");
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "p");
        assert_eq!(json["content"], "Some prose.");

        let h2 = serde_json::to_value(DescriptionBlock::heading2("Overview")).unwrap();
        assert_eq!(h2["type"], "h2");
        let h3 = serde_json::to_value(DescriptionBlock::heading3("Details")).unwrap();
        assert_eq!(h3["type"], "h3");
    }

    #[test]
    fn material_deserializes_with_missing_optional_fields() {
        let json = r#"{"title": "Only a title"}"#;
        let material: ReferenceMaterial = serde_json::from_str(json).unwrap();
        assert_eq!(material.title, "Only a title");
        assert!(material.description.is_empty());
        assert!(material.code.is_empty());
        assert!(material.language.is_empty());
    }

    #[test]
    fn material_round_trips_through_json() {
        let material = ReferenceMaterial {
            title: "Building a REST API in Go".to_string(),
            description: vec![
                DescriptionBlock::paragraph("This example demonstrates the Gin framework."),
                DescriptionBlock::heading2("Overview"),
            ],
            code: "package main".to_string(),
            language: "go".to_string(),
        };

        let json = serde_json::to_string(&material).unwrap();
        let parsed: ReferenceMaterial = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, material);
    }
}
