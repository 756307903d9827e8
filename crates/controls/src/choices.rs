//! Choice list model and the pure list/geometry helpers behind the
//! multi-select dropdown header.

use leptos::children::ViewFn;
use serde::{Deserialize, Serialize};

/// One entry of a choice dropdown.
#[derive(Clone, Default)]
pub struct Choice {
    /// Unique identifier reported in selection payloads.
    pub key: String,
    /// Display text; the dropdown filter matches against it.
    pub label: String,
    /// Optional inline style for the label.
    pub style: Option<String>,
    /// Optional icon name resolved through [`crate::icons::icon`].
    pub icon: Option<String>,
    /// Optional inline style for the icon wrapper.
    pub icon_style: Option<String>,
    /// Optional leading content rendered before the label.
    pub prefix: Option<ViewFn>,
}

impl Choice {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            ..Default::default()
        }
    }
}

// Prefix views carry no comparable identity; entries compare by their data
// fields and prefix presence only.
impl PartialEq for Choice {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.label == other.label
            && self.style == other.style
            && self.icon == other.icon
            && self.icon_style == other.icon_style
            && self.prefix.is_some() == other.prefix.is_some()
    }
}

/// Payload of a selection notification: the full updated key list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionChange {
    pub value: Vec<String>,
    pub property: String,
}

/// Case-insensitive substring filter over choice labels, order preserved.
pub fn filter_choices(choices: &[Choice], filter: &str) -> Vec<Choice> {
    let needle = filter.to_lowercase();
    choices
        .iter()
        .filter(|choice| choice.label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Toggles a key in the ordered selection: present keys are removed,
/// absent keys are appended.
pub fn toggle_key(selected: &[String], key: &str) -> Vec<String> {
    let mut next = selected.to_vec();
    match next.iter().position(|k| k == key) {
        Some(index) => {
            next.remove(index);
        }
        None => next.push(key.to_string()),
    }
    next
}

/// Badge text next to the header label, empty when nothing is selected.
pub fn count_selected_label(selected: &[String]) -> String {
    if selected.is_empty() {
        String::new()
    } else {
        format!(" ({})", selected.len())
    }
}

/// Horizontal dropdown position: anchored to the control, clamped so the
/// dropdown never overflows the right viewport edge.
pub fn dropdown_left(anchor_x: f64, dropdown_width: f64, viewport_width: f64) -> f64 {
    if dropdown_width + anchor_x > viewport_width {
        viewport_width - dropdown_width
    } else {
        anchor_x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(choices: &[Choice]) -> Vec<&str> {
        choices.iter().map(|choice| choice.label.as_str()).collect()
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let choices = vec![
            Choice::new("1", "Abel"),
            Choice::new("2", "Cain"),
            Choice::new("3", "Abba"),
        ];
        assert_eq!(labels(&filter_choices(&choices, "ab")), vec!["Abel", "Abba"]);
        assert_eq!(labels(&filter_choices(&choices, "AIN")), vec!["Cain"]);
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let choices = vec![Choice::new("1", "Abel"), Choice::new("2", "Cain")];
        assert_eq!(filter_choices(&choices, "").len(), 2);
    }

    #[test]
    fn test_toggle_appends_absent_key() {
        let selected = vec!["a".to_string()];
        assert_eq!(toggle_key(&selected, "b"), vec!["a", "b"]);
    }

    #[test]
    fn test_toggle_removes_present_key() {
        let selected = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(toggle_key(&selected, "b"), vec!["a", "c"]);
    }

    #[test]
    fn test_toggle_pair_restores_original() {
        let selected = vec!["a".to_string(), "b".to_string()];
        let once = toggle_key(&selected, "c");
        assert_eq!(toggle_key(&once, "c"), selected);
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_selected_label(&[]), "");
        assert_eq!(count_selected_label(&["a".to_string(), "b".to_string()]), " (2)");
    }

    #[test]
    fn test_dropdown_stays_anchored_when_it_fits() {
        assert_eq!(dropdown_left(100.0, 200.0, 1000.0), 100.0);
    }

    #[test]
    fn test_dropdown_clamps_to_right_edge() {
        assert_eq!(dropdown_left(900.0, 200.0, 1000.0), 800.0);
    }
}
