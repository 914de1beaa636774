//! Selector options and display-label parsing.
//!
//! Selectors carry the identifier alongside the rendered label, so callers
//! never need to parse it back out. The parsing helpers remain for labels
//! that arrive as plain text.

use serde::{Deserialize, Serialize};

/// One entry of a record selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub id: String,
    /// Stored on related records when this option is chosen.
    pub name: String,
}

/// Identifier inside the final parenthesis group of a label.
///
/// `"Jane Doe (P001)"` → `"P001"`. A label with no `(` is taken whole.
pub fn parse_selection_id(label: &str) -> &str {
    let label = label.trim();
    match label.rsplit_once('(') {
        Some((_, tail)) => tail.trim_end_matches(')'),
        None => label,
    }
}

/// Display name before the first `(` of a label, trimmed.
///
/// Only for typed labels; a chosen `SelectOption` already carries its name.
pub fn label_name(label: &str) -> &str {
    match label.split_once('(') {
        Some((head, _)) => head.trim(),
        None => label.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_from_name_label() {
        assert_eq!(parse_selection_id("Jane Doe (P001)"), "P001");
    }

    #[test]
    fn id_without_parentheses_is_whole_label() {
        assert_eq!(parse_selection_id("P001"), "P001");
        assert_eq!(parse_selection_id("  P001 "), "P001");
    }

    #[test]
    fn id_uses_final_group() {
        assert_eq!(parse_selection_id("Jane (Janie) Doe (P001)"), "P001");
        assert_eq!(parse_selection_id("Ali (D7))"), "D7");
    }

    #[test]
    fn name_before_first_parenthesis() {
        assert_eq!(label_name("Jane Doe (P001)"), "Jane Doe");
        assert_eq!(label_name(" Walk-in "), "Walk-in");
        assert_eq!(label_name("(P001)"), "");
    }
}
