use crate::filters::{date_value_to_epoch, epoch_to_date_value, format_range};
use leptos::prelude::*;

/// Horizontal placement of a control inside its header cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    #[default]
    Right,
}

/// Native date entry for a header filter: a "from" field and, unless
/// `no_range`, a "to" field.
///
/// Valid picks are reported as epoch seconds; empty or unparseable input is
/// a silent no-op. The row's `title` shows the current bounds formatted
/// with `date_format`.
#[component]
pub fn DateRangeInput(
    #[prop(into)] date_from: Signal<Option<i64>>,

    #[prop(into)] date_to: Signal<Option<i64>>,

    /// Restrict the entry to a single date.
    #[prop(optional)]
    no_range: bool,

    /// chrono pattern for the formatted-bounds tooltip.
    #[prop(default = String::from("%d/%m/%Y"), into)]
    date_format: String,

    #[prop(optional)] align: HorizontalAlign,

    /// Focus the first field once mounted.
    #[prop(optional)]
    autofocus: bool,

    #[prop(optional)] on_from_change: Option<Callback<i64>>,

    #[prop(optional)] on_to_change: Option<Callback<i64>>,
) -> impl IntoView {
    let from_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move |_| {
        if autofocus {
            if let Some(input) = from_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let handle_from = move |value: String| {
        if let (Some(epoch), Some(callback)) = (date_value_to_epoch(&value), on_from_change) {
            callback.run(epoch);
        }
    };

    let handle_to = move |value: String| {
        if let (Some(epoch), Some(callback)) = (date_value_to_epoch(&value), on_to_change) {
            callback.run(epoch);
        }
    };

    let title = move || format_range(date_from.get(), date_to.get(), no_range, &date_format);

    let row_class = match align {
        HorizontalAlign::Left => "date-range-input",
        HorizontalAlign::Right => "date-range-input date-range-input--right",
    };

    view! {
        <style>
            ".date-range-input {
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 4px;
            }
            .date-range-input--right { justify-content: flex-end; }
            .date-range-input input {
                min-width: var(--datatable-filter-input-min-width, 120px);
                border: none;
                border-bottom: 1px solid rgba(0, 0, 0, 0.42);
                outline: none;
                font-size: 12px;
                padding: 2px 0;
                background: transparent;
                color: inherit;
                cursor: pointer;
            }
            .date-range-input input:focus {
                border-bottom-color: var(--datatable-focus-color, #1976d2);
            }
            .date-range-input input::-webkit-calendar-picker-indicator { cursor: pointer; }"
        </style>
        <div class=row_class title=title>
            <input
                node_ref=from_ref
                type="date"
                prop:value=move || date_from.get().map(epoch_to_date_value).unwrap_or_default()
                on:input=move |ev| handle_from(event_target_value(&ev))
            />
            <Show when=move || !no_range>
                <span class="date-range-input__sep">"—"</span>
                <input
                    type="date"
                    prop:value=move || date_to.get().map(epoch_to_date_value).unwrap_or_default()
                    on:input=move |ev| handle_to(event_target_value(&ev))
                />
            </Show>
        </div>
    }
}
