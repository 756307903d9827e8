use serde::{Deserialize, Serialize};

/// Sort state of a header cell.
///
/// Every toggle advances one step through the cycle
/// `None -> Descending -> Ascending -> None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    None,
    Descending,
    Ascending,
}

impl SortDirection {
    /// The next direction in the toggle cycle.
    pub fn toggled(self) -> Self {
        match self {
            Self::None => Self::Descending,
            Self::Descending => Self::Ascending,
            Self::Ascending => Self::None,
        }
    }

    /// CSS modifier carried by the arrow button.
    pub fn as_class(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Descending => "desc",
            Self::Ascending => "asc",
        }
    }

    /// Tooltip for the toggle button: what the next click will do.
    pub fn tooltip(self) -> &'static str {
        match self {
            Self::None => "Sort Z-A",
            Self::Descending => "Sort A-Z",
            Self::Ascending => "Cancel sort",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_cycle() {
        let mut direction = SortDirection::None;
        direction = direction.toggled();
        assert_eq!(direction, SortDirection::Descending);
        direction = direction.toggled();
        assert_eq!(direction, SortDirection::Ascending);
        direction = direction.toggled();
        assert_eq!(direction, SortDirection::None);
    }

    #[test]
    fn test_toggle_never_repeats() {
        for direction in [
            SortDirection::None,
            SortDirection::Descending,
            SortDirection::Ascending,
        ] {
            assert_ne!(direction.toggled(), direction);
        }
    }

    #[test]
    fn test_class_modifiers() {
        assert_eq!(SortDirection::None.as_class(), "");
        assert_eq!(SortDirection::Descending.as_class(), "desc");
        assert_eq!(SortDirection::Ascending.as_class(), "asc");
    }
}
