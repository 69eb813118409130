//! Computes the difference between two in-memory texts.
//!
//! The diff algorithm itself is external; this module maps its output onto
//! the [`TextDiff`] model and guarantees that no segment carries empty text.

use difference::{Changeset, Difference};

use crate::model::diff::change_type::ChangeType;
use crate::model::diff::text_diff::{DiffSegment, TextDiff};

/// Compute a character level diff between `text1` and `text2`.
///
/// The returned segments are ordered: removed text appears where it sat in
/// `text1`, added text where it sits in `text2`. Diffing two empty strings
/// yields an empty segment list.
pub fn diff_texts(text1: &str, text2: &str) -> TextDiff {
    let changeset = Changeset::new(text1, text2, "");

    let segments = changeset
        .diffs
        .into_iter()
        .filter_map(|diff| {
            let (modification, text) = match diff {
                Difference::Same(text) => (ChangeType::Unchanged, text),
                Difference::Add(text) => (ChangeType::Added, text),
                Difference::Rem(text) => (ChangeType::Removed, text),
            };
            if text.is_empty() {
                None
            } else {
                Some(DiffSegment { modification, text })
            }
        })
        .collect();

    TextDiff { segments }
}
