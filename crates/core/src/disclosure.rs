//! Disclosure Policy
//!
//! Decides which slice of the reference material the orchestration service is
//! allowed to see at a given round. The policy is a pure function of the
//! material and the round index, and the visible slice only ever grows as the
//! round advances: the title is always present, the description grows by
//! prefix, and the code sample appears only from round three onward.

use crate::material::{DescriptionBlock, ReferenceMaterial};
use serde::{Deserialize, Serialize};

/// The round at which the code sample (and its language tag) becomes visible.
pub const CODE_DISCLOSURE_ROUND: u32 = 3;

/// The subset of the reference material visible at one round. Derived on
/// demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisclosureSnapshot {
    pub title: String,
    pub description: Vec<DescriptionBlock>,
    pub code: String,
    pub language: String,
}

/// Computes the disclosure snapshot for `round`.
///
/// Round 0 exposes the title alone, round 1 adds the first description block,
/// round 2 the full description, and rounds at or past
/// [`CODE_DISCLOSURE_ROUND`] everything including the code sample. A material
/// with fewer than two description blocks simply yields identical snapshots
/// for rounds 1 and 2.
pub fn disclose(material: &ReferenceMaterial, round: u32) -> DisclosureSnapshot {
    let description = match round {
        0 => Vec::new(),
        1 => material.description.iter().take(1).cloned().collect(),
        _ => material.description.clone(),
    };
    let (code, language) = if round >= CODE_DISCLOSURE_ROUND {
        (material.code.clone(), material.language.clone())
    } else {
        (String::new(), String::new())
    };

    DisclosureSnapshot {
        title: material.title.clone(),
        description,
        code,
        language,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ReferenceMaterial {
        ReferenceMaterial {
            title: "Building a REST API in Go".to_string(),
            description: vec![
                DescriptionBlock::paragraph("First paragraph."),
                DescriptionBlock::heading2("Overview"),
                DescriptionBlock::paragraph("Second paragraph."),
            ],
            code: "package main".to_string(),
            language: "go".to_string(),
        }
    }

    #[test]
    fn round_zero_exposes_title_only() {
        let snapshot = disclose(&sample(), 0);
        assert_eq!(snapshot.title, "Building a REST API in Go");
        assert!(snapshot.description.is_empty());
        assert!(snapshot.code.is_empty());
        assert!(snapshot.language.is_empty());
    }

    #[test]
    fn round_one_exposes_first_block_only() {
        let snapshot = disclose(&sample(), 1);
        assert_eq!(snapshot.description.len(), 1);
        assert_eq!(snapshot.description[0].content, "First paragraph.");
        assert!(snapshot.code.is_empty());
    }

    #[test]
    fn round_two_exposes_full_description_without_code() {
        let snapshot = disclose(&sample(), 2);
        assert_eq!(snapshot.description.len(), 3);
        assert!(snapshot.code.is_empty());
        assert!(snapshot.language.is_empty());
    }

    #[test]
    fn round_three_and_beyond_expose_everything() {
        for round in [3, 4, 10, 1000] {
            let snapshot = disclose(&sample(), round);
            assert_eq!(snapshot.description.len(), 3);
            assert_eq!(snapshot.code, "package main");
            assert_eq!(snapshot.language, "go");
        }
    }

    #[test]
    fn disclosure_is_monotone_in_round() {
        let material = sample();
        for round in 1..8 {
            let earlier = disclose(&material, round - 1);
            let later = disclose(&material, round);
            assert!(later.description.len() >= earlier.description.len());
            assert_eq!(
                &later.description[..earlier.description.len()],
                &earlier.description[..]
            );
            assert!(later.code.len() >= earlier.code.len());
            assert_eq!(later.title, earlier.title);
        }
    }

    #[test]
    fn short_description_degrades_gracefully() {
        let material = ReferenceMaterial {
            title: "Tiny".to_string(),
            description: vec![DescriptionBlock::paragraph("Only block.")],
            code: String::new(),
            language: String::new(),
        };
        assert_eq!(disclose(&material, 1), disclose(&material, 2));
    }
}
