use serde::{Deserialize, Serialize};

use crate::diff;
use crate::view::html;

/// View model handed to the comparison results template. `diff` holds the
/// pre-rendered HTML fragment; `text1` and `text2` are the raw inputs.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct DiffView {
    pub text1: String,
    pub text2: String,
    pub diff: String,
}

impl DiffView {
    /// Compute the diff between the two texts and package it for rendering.
    pub fn from_texts(text1: String, text2: String) -> DiffView {
        let computed = diff::diff_texts(&text1, &text2);
        let markup = html::render_markup(&computed);
        DiffView {
            text1,
            text2,
            diff: markup,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_texts_keeps_raw_inputs() {
        let view = DiffView::from_texts("cat".to_string(), "cot".to_string());
        assert_eq!(view.text1, "cat");
        assert_eq!(view.text2, "cot");
        assert!(view.diff.contains("<span"));
    }

    #[test]
    fn test_from_texts_identical_inputs_have_plain_markup() {
        let view = DiffView::from_texts("abc".to_string(), "abc".to_string());
        assert_eq!(view.diff, "abc");
    }
}
