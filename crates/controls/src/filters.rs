//! Filter payloads and the date-range filter state machine shared by the
//! filterable header cells.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Payload of a text filter notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterValueChange {
    /// Current filter text; `None` means the filter was cleared.
    pub value: Option<String>,
    /// Column name the filter is bound to.
    pub property: String,
}

/// Payload of a date filter notification. Bounds are epoch seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFilterChange {
    pub date_from: Option<i64>,
    pub date_to: Option<i64>,
    pub property: String,
}

/// Date bounds of a header filter, plus the single-date mode.
///
/// Transition methods report whether a filter notification fires; the
/// payload is always the post-transition bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRangeFilter {
    from: Option<i64>,
    to: Option<i64>,
    no_range: bool,
}

impl DateRangeFilter {
    pub fn new(no_range: bool) -> Self {
        Self {
            from: None,
            to: None,
            no_range,
        }
    }

    pub fn date_from(&self) -> Option<i64> {
        self.from
    }

    pub fn date_to(&self) -> Option<i64> {
        self.to
    }

    /// A new "from" bound was picked. Notifies only in single-date mode;
    /// otherwise the notification waits for the matching "to".
    pub fn from_changed(&mut self, value: i64) -> bool {
        self.from = Some(value);
        self.no_range
    }

    /// A new "to" bound was picked. Ignored until a "from" bound exists.
    pub fn to_changed(&mut self, value: i64) -> bool {
        if self.from.is_none() {
            return false;
        }
        self.to = Some(value);
        true
    }

    /// Explicit clear: drops both bounds and always notifies.
    pub fn clear(&mut self) -> bool {
        self.from = None;
        self.to = None;
        true
    }

    /// Deactivation without clear: drops both bounds silently.
    pub fn reset(&mut self) {
        self.from = None;
        self.to = None;
    }
}

/// Whether deactivating a text filter drops its value and notifies; empty
/// values count as no filter.
pub fn clears_on_deactivate(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|value| !value.is_empty())
}

/// Converts a native date input value (`yyyy-mm-dd`) to epoch seconds.
pub fn date_value_to_epoch(value: &str) -> Option<i64> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc().timestamp())
}

/// Converts epoch seconds back to a native date input value.
pub fn epoch_to_date_value(epoch: i64) -> String {
    DateTime::from_timestamp(epoch, 0)
        .map(|datetime| datetime.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Formats an epoch bound with a chrono pattern.
pub fn format_epoch(epoch: i64, format: &str) -> String {
    DateTime::from_timestamp(epoch, 0)
        .map(|datetime| datetime.format(format).to_string())
        .unwrap_or_default()
}

/// Display text for the current bounds: both dates when the range is
/// complete, the single date in single-date mode, empty otherwise.
pub fn format_range(from: Option<i64>, to: Option<i64>, no_range: bool, format: &str) -> String {
    match (from, to) {
        (Some(from), Some(to)) => {
            format!("{} {}", format_epoch(from, format), format_epoch(to, format))
        }
        (Some(from), None) if no_range => format_epoch(from, format),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_without_from_is_dropped() {
        let mut range = DateRangeFilter::new(false);
        assert!(!range.to_changed(1_700_000_000));
        assert_eq!(range.date_to(), None);
    }

    #[test]
    fn test_from_then_to_notifies_with_both_bounds() {
        let mut range = DateRangeFilter::new(false);
        assert!(!range.from_changed(1_700_000_000));
        assert!(range.to_changed(1_700_086_400));
        assert_eq!(range.date_from(), Some(1_700_000_000));
        assert_eq!(range.date_to(), Some(1_700_086_400));
    }

    #[test]
    fn test_single_date_mode_notifies_on_from() {
        let mut range = DateRangeFilter::new(true);
        assert!(range.from_changed(1_700_000_000));
        assert_eq!(range.date_from(), Some(1_700_000_000));
        assert_eq!(range.date_to(), None);
    }

    #[test]
    fn test_clear_drops_bounds_and_notifies() {
        let mut range = DateRangeFilter::new(false);
        range.from_changed(1_700_000_000);
        range.to_changed(1_700_086_400);
        assert!(range.clear());
        assert_eq!((range.date_from(), range.date_to()), (None, None));
    }

    #[test]
    fn test_reset_is_silent_state_drop() {
        let mut range = DateRangeFilter::new(false);
        range.from_changed(1_700_000_000);
        range.reset();
        assert_eq!((range.date_from(), range.date_to()), (None, None));
    }

    #[test]
    fn test_clears_on_deactivate() {
        assert!(clears_on_deactivate(&Some("abc".to_string())));
        assert!(!clears_on_deactivate(&Some(String::new())));
        assert!(!clears_on_deactivate(&None));
    }

    #[test]
    fn test_date_value_round_trip() {
        let epoch = date_value_to_epoch("2024-03-15").unwrap();
        assert_eq!(epoch_to_date_value(epoch), "2024-03-15");
    }

    #[test]
    fn test_date_value_rejects_garbage() {
        assert_eq!(date_value_to_epoch(""), None);
        assert_eq!(date_value_to_epoch("not a date"), None);
        assert_eq!(date_value_to_epoch("2024-13-45"), None);
    }

    #[test]
    fn test_format_range() {
        let from = date_value_to_epoch("2024-03-01").unwrap();
        let to = date_value_to_epoch("2024-03-31").unwrap();
        assert_eq!(
            format_range(Some(from), Some(to), false, "%d/%m/%Y"),
            "01/03/2024 31/03/2024"
        );
        assert_eq!(format_range(Some(from), None, true, "%d/%m/%Y"), "01/03/2024");
        assert_eq!(format_range(Some(from), None, false, "%d/%m/%Y"), "");
        assert_eq!(format_range(None, None, false, "%d/%m/%Y"), "");
    }
}
