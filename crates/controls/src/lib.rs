//! Sortable and filterable table header cells plus a pagination footer for
//! Leptos data tables.
//!
//! Each control owns its local state, consumes parent state through
//! `Signal` props and reports changes upward through typed `Callback`
//! payloads; nothing is applied on the parent's behalf.

pub mod choices;
pub mod components;
pub mod filters;
pub mod icons;
pub mod paging;
pub mod sort;

pub use choices::{Choice, SelectionChange};
pub use components::choice_header::ChoiceHeader;
pub use components::date_filter_sort_header::DateFilterSortHeader;
pub use components::date_range_input::{DateRangeInput, HorizontalAlign};
pub use components::filter_sort_header::FilterSortHeader;
pub use components::pagination_footer::{FooterPosition, PaginationFooter};
pub use components::sort_header::SortHeader;
pub use filters::{DateFilterChange, DateRangeFilter, FilterValueChange};
pub use paging::{PageChange, PageState};
pub use sort::SortDirection;
