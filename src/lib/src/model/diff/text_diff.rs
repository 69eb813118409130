use crate::model::diff::change_type::ChangeType;
use serde::{Deserialize, Serialize};

/// One contiguous run of text that is shared, added, or removed.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct DiffSegment {
    pub modification: ChangeType,
    pub text: String,
}

/// An ordered sequence of segments covering both input texts.
///
/// Concatenating the `Unchanged` and `Removed` segments reproduces the
/// original text; concatenating the `Unchanged` and `Added` segments
/// reproduces the modified text.
#[derive(Default, Deserialize, Serialize, Debug, Clone)]
pub struct TextDiff {
    pub segments: Vec<DiffSegment>,
}

impl TextDiff {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Reassemble the original input from the segments.
    pub fn original_text(&self) -> String {
        self.concat(&[ChangeType::Unchanged, ChangeType::Removed])
    }

    /// Reassemble the modified input from the segments.
    pub fn modified_text(&self) -> String {
        self.concat(&[ChangeType::Unchanged, ChangeType::Added])
    }

    fn concat(&self, kinds: &[ChangeType]) -> String {
        self.segments
            .iter()
            .filter(|segment| kinds.contains(&segment.modification))
            .map(|segment| segment.text.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reassemble_both_sides() {
        let diff = TextDiff {
            segments: vec![
                DiffSegment {
                    modification: ChangeType::Unchanged,
                    text: "c".to_string(),
                },
                DiffSegment {
                    modification: ChangeType::Removed,
                    text: "a".to_string(),
                },
                DiffSegment {
                    modification: ChangeType::Added,
                    text: "o".to_string(),
                },
                DiffSegment {
                    modification: ChangeType::Unchanged,
                    text: "t".to_string(),
                },
            ],
        };

        assert_eq!(diff.original_text(), "cat");
        assert_eq!(diff.modified_text(), "cot");
    }

    #[test]
    fn test_empty_diff() {
        let diff = TextDiff::default();
        assert!(diff.is_empty());
        assert_eq!(diff.original_text(), "");
        assert_eq!(diff.modified_text(), "");
    }
}
