use super::date_range_input::{DateRangeInput, HorizontalAlign};
use super::sort_header::SortHeader;
use crate::filters::{DateFilterChange, DateRangeFilter};
use crate::icons::icon;
use crate::sort::SortDirection;
use leptos::prelude::*;

/// Header cell combining the sort toggle with a collapsible date filter.
///
/// Active, it shows a [`DateRangeInput`]; picked bounds run through the
/// [`DateRangeFilter`] transitions, so a range only notifies once both
/// bounds exist, while single-date mode notifies on every "from" pick.
/// The clear button drops both bounds, notifies with two `None`s and
/// collapses the control.
#[component]
pub fn DateFilterSortHeader(
    /// Header text shown while the filter is collapsed.
    #[prop(into)]
    header: String,

    /// Column name carried on filter payloads.
    #[prop(optional, into)]
    property: String,

    /// chrono pattern for the formatted-bounds tooltip.
    #[prop(default = String::from("%d/%m/%Y"), into)]
    date_format: String,

    /// Sort state owned by this header; pass a shared handle to read or
    /// drive it from outside.
    #[prop(default = RwSignal::new(SortDirection::None))]
    direction: RwSignal<SortDirection>,

    /// Whether the date entry is shown instead of the static label.
    #[prop(default = RwSignal::new(false))]
    active: RwSignal<bool>,

    /// Restrict the filter to a single date instead of a range.
    #[prop(optional)]
    no_range: bool,

    #[prop(optional)] align: HorizontalAlign,

    #[prop(optional)]
    on_active_change: Option<Callback<bool>>,

    #[prop(optional)]
    on_direction_change: Option<Callback<SortDirection>>,

    #[prop(optional)]
    on_filter_change: Option<Callback<DateFilterChange>>,
) -> impl IntoView {
    let range = RwSignal::new(DateRangeFilter::new(no_range));
    let property = StoredValue::new(property);

    let dispatch_filter = move |state: DateRangeFilter| {
        if let Some(callback) = on_filter_change {
            callback.run(DateFilterChange {
                date_from: state.date_from(),
                date_to: state.date_to(),
                property: property.get_value(),
            });
        }
    };

    let toggle_active = move || {
        let now_active = !active.get_untracked();
        active.set(now_active);
        if let Some(callback) = on_active_change {
            callback.run(now_active);
        }
        if !now_active {
            range.update(|state| state.reset());
        }
    };

    let handle_from = move |value: i64| {
        let mut state = range.get_untracked();
        let notify = state.from_changed(value);
        range.set(state);
        if notify {
            dispatch_filter(state);
        }
    };

    let handle_to = move |value: i64| {
        let mut state = range.get_untracked();
        let notify = state.to_changed(value);
        range.set(state);
        if notify {
            dispatch_filter(state);
        }
    };

    let clear_date = move |_| {
        let mut state = range.get_untracked();
        state.clear();
        range.set(state);
        toggle_active();
        dispatch_filter(state);
    };

    // The inner toggle already advanced the shared state; pass it through.
    let handle_direction = move |value: SortDirection| {
        if let Some(callback) = on_direction_change {
            callback.run(value);
        }
    };

    let header_label = header;

    view! {
        <style>
            ".date-filter-header__row {
                display: flex;
                flex-direction: row;
                align-items: center;
                width: 100%;
            }
            .date-filter-header__label { flex: 1; margin-right: 16px; cursor: pointer; }
            .date-filter-header__entry { flex: 1; }
            .date-filter-header__icon-btn {
                background: none;
                border: none;
                cursor: pointer;
                padding: 0;
                width: 24px;
                height: 24px;
                display: flex;
                align-items: center;
                justify-content: center;
                color: inherit;
                border-radius: 50%;
                flex-shrink: 0;
            }
            .date-filter-header__icon-btn:hover { background: rgba(0, 0, 0, 0.08); }
            .date-filter-header__icon-btn svg { width: 18px; height: 18px; fill: currentColor; }"
        </style>
        <SortHeader direction=direction on_direction_change=Callback::new(handle_direction)>
            <Show
                when=move || active.get()
                fallback=move || {
                    view! {
                        <div class="date-filter-header__row">
                            <div class="date-filter-header__label" on:click=move |_| toggle_active()>
                                {header_label.clone()}
                            </div>
                            <button
                                class="date-filter-header__icon-btn"
                                title="Pick date"
                                on:click=move |_| toggle_active()
                            >
                                {icon("calendar")}
                            </button>
                        </div>
                    }
                }
            >
                <div class="date-filter-header__row">
                    <div class="date-filter-header__entry">
                        <DateRangeInput
                            date_from=Signal::derive(move || range.get().date_from())
                            date_to=Signal::derive(move || range.get().date_to())
                            no_range=no_range
                            date_format=date_format.clone()
                            align=align
                            autofocus=true
                            on_from_change=Callback::new(handle_from)
                            on_to_change=Callback::new(handle_to)
                        />
                    </div>
                    <button
                        class="date-filter-header__icon-btn"
                        title="Clear"
                        on:click=clear_date
                    >
                        {icon("x")}
                    </button>
                </div>
            </Show>
        </SortHeader>
    }
}
