use super::sort_header::SortHeader;
use crate::filters::{clears_on_deactivate, FilterValueChange};
use crate::icons::icon;
use crate::sort::SortDirection;
use leptos::prelude::*;

/// Header cell combining the sort toggle with a collapsible text filter.
///
/// Inactive, it shows the header text and a search button; active, it shows
/// a text input that reports edits through `on_filter_change`. Deactivating
/// with a non-empty value clears it and reports a single `None`.
#[component]
pub fn FilterSortHeader(
    /// Header text; also used as the input placeholder.
    #[prop(into)]
    header: String,

    /// Column name carried on filter payloads.
    #[prop(optional, into)]
    property: String,

    /// Sort state owned by this header; pass a shared handle to read or
    /// drive it from outside.
    #[prop(default = RwSignal::new(SortDirection::None))]
    direction: RwSignal<SortDirection>,

    /// Whether the filter input is shown instead of the static label.
    #[prop(default = RwSignal::new(false))]
    active: RwSignal<bool>,

    #[prop(optional)]
    on_active_change: Option<Callback<bool>>,

    #[prop(optional)]
    on_direction_change: Option<Callback<SortDirection>>,

    #[prop(optional)]
    on_filter_change: Option<Callback<FilterValueChange>>,
) -> impl IntoView {
    let filter_value = RwSignal::new(None::<String>);
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let property = StoredValue::new(property);
    // Last direction this header observed; equal re-assignments from the
    // inner toggle are not re-emitted.
    let seen_direction = StoredValue::new(direction.get_untracked());

    let dispatch_filter = move |value: Option<String>| {
        if let Some(callback) = on_filter_change {
            callback.run(FilterValueChange {
                value,
                property: property.get_value(),
            });
        }
    };

    let toggle_active = move |_| {
        let now_active = !active.get_untracked();
        active.set(now_active);
        if let Some(callback) = on_active_change {
            callback.run(now_active);
        }
        if !now_active && clears_on_deactivate(&filter_value.get_untracked()) {
            filter_value.set(None);
            dispatch_filter(None);
        }
    };

    // Focus the input once it is mounted after activation.
    Effect::new(move |_| {
        if active.get() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    // Outside writes to the shared signal count as observed too; the toggle
    // callback runs before this effect and still sees the prior value.
    Effect::new(move |_| {
        seen_direction.set_value(direction.get());
    });

    let handle_direction = move |value: SortDirection| {
        if seen_direction.get_value() != value {
            seen_direction.set_value(value);
            if let Some(callback) = on_direction_change {
                callback.run(value);
            }
        }
    };

    let handle_input = move |value: String| {
        if filter_value.get_untracked().as_deref() != Some(value.as_str()) {
            filter_value.set(Some(value.clone()));
            dispatch_filter(Some(value));
        }
    };

    let header_label = header.clone();
    let header_placeholder = header;

    view! {
        <style>
            ".filter-sort-header__row {
                display: flex;
                flex-direction: row;
                align-items: center;
                width: 100%;
            }
            .filter-sort-header__label { flex: 1; margin-right: 16px; cursor: pointer; }
            .filter-sort-header__icon-btn {
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
            .filter-sort-header__icon-btn:hover { background: rgba(0, 0, 0, 0.08); }
            .filter-sort-header__icon-btn svg { width: 18px; height: 18px; fill: currentColor; }
            .filter-sort-header__input {
                min-width: var(--datatable-filter-input-min-width, 120px);
                border: none;
                border-bottom: 1px solid rgba(0, 0, 0, 0.42);
                outline: none;
                font-size: 12px;
                padding: 2px 0;
                background: transparent;
                color: inherit;
                flex: 1;
            }
            .filter-sort-header__input:focus {
                border-bottom-color: var(--datatable-focus-color, #1976d2);
            }"
        </style>
        <SortHeader direction=direction on_direction_change=Callback::new(handle_direction)>
            <Show
                when=move || active.get()
                fallback=move || {
                    view! {
                        <div class="filter-sort-header__row">
                            <div class="filter-sort-header__label" on:click=toggle_active>
                                {header_label.clone()}
                            </div>
                            <button
                                class="filter-sort-header__icon-btn"
                                title="Search"
                                on:click=toggle_active
                            >
                                {icon("search")}
                            </button>
                        </div>
                    }
                }
            >
                <div class="filter-sort-header__row">
                    <input
                        node_ref=input_ref
                        class="filter-sort-header__input"
                        type="text"
                        placeholder=header_placeholder.clone()
                        prop:value=move || filter_value.get().unwrap_or_default()
                        on:input=move |ev| handle_input(event_target_value(&ev))
                    />
                    <button
                        class="filter-sort-header__icon-btn"
                        title="Clear"
                        on:click=toggle_active
                    >
                        {icon("x")}
                    </button>
                </div>
            </Show>
        </SortHeader>
    }
}
