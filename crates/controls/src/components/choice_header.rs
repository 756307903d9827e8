use crate::choices::{
    count_selected_label, dropdown_left, filter_choices, toggle_key, Choice, SelectionChange,
};
use crate::icons::icon;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Multi-select dropdown header cell with optional label filtering.
///
/// The dropdown is anchored below the cell and clamped to the viewport's
/// right edge; it closes on outside clicks and on Escape. Toggling an entry
/// reports the full updated key list through `on_selection_change`.
#[component]
pub fn ChoiceHeader(
    /// Candidate entries.
    #[prop(into)]
    choices: Signal<Vec<Choice>>,

    /// Show a text filter above the entries.
    #[prop(default = Signal::derive(|| false), into)]
    enable_filter: Signal<bool>,

    /// Column name carried on selection payloads.
    #[prop(optional, into)]
    property: String,

    /// Ordered list of selected keys owned by this header; pass a shared
    /// handle to read or drive it from outside.
    #[prop(default = RwSignal::new(Vec::new()))]
    selected: RwSignal<Vec<String>>,

    #[prop(optional)]
    on_selection_change: Option<Callback<SelectionChange>>,

    /// Header label content.
    children: Children,
) -> impl IntoView {
    let opened = RwSignal::new(false);
    let filter_value = RwSignal::new(String::new());
    let dropdown_pos = RwSignal::new((0.0f64, 0.0f64));
    let host_ref = NodeRef::<leptos::html::Div>::new();
    let dropdown_ref = NodeRef::<leptos::html::Div>::new();
    let filter_ref = NodeRef::<leptos::html::Input>::new();
    let property = StoredValue::new(property);

    let filtered = Memo::new(move |_| {
        let list = choices.get();
        if enable_filter.get() {
            filter_choices(&list, &filter_value.get())
        } else {
            list
        }
    });

    let fit_to_border = move || {
        let (Some(host), Some(dropdown)) = (host_ref.get_untracked(), dropdown_ref.get_untracked())
        else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        let viewport_width = window
            .document()
            .and_then(|document| document.document_element())
            .map(|root| root.client_width() as f64)
            .unwrap_or(0.0)
            .max(window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0));
        let rect = host.get_bounding_client_rect();
        let left = dropdown_left(rect.left(), dropdown.offset_width() as f64, viewport_width);
        let top = rect.top() + host.offset_height() as f64 + 9.0;
        dropdown_pos.set((left, top));
    };

    // Refit and prime the filter whenever the dropdown opens.
    Effect::new(move |_| {
        if opened.get() {
            fit_to_border();
            if enable_filter.get_untracked() {
                filter_value.set(String::new());
                if let Some(input) = filter_ref.get_untracked() {
                    let _ = input.focus();
                }
            }
        }
    });

    let _ = window_event_listener(leptos::ev::resize, move |_| {
        if opened.get_untracked() {
            fit_to_border();
        }
    });

    let _ = window_event_listener(leptos::ev::keyup, move |ev| {
        if opened.get_untracked() && ev.key() == "Escape" {
            opened.set(false);
        }
    });

    // Clicks inside the open control stay ours; anywhere else closes it.
    let _ = window_event_listener(leptos::ev::click, move |ev| {
        let Some(host) = host_ref.get_untracked() else {
            return;
        };
        let inside = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
            .is_some_and(|node| host.contains(Some(&node)));
        if inside {
            if opened.get_untracked() {
                ev.prevent_default();
            }
        } else if opened.get_untracked() {
            opened.set(false);
        }
    });

    let open_dropdown = move |_| {
        opened.update(|value| *value = !*value);
    };

    let tap_choice = move |key: String| {
        let next = toggle_key(&selected.get_untracked(), &key);
        selected.set(next.clone());
        if let Some(callback) = on_selection_change {
            callback.run(SelectionChange {
                value: next,
                property: property.get_value(),
            });
        }
    };

    view! {
        <style>
            ".choice-header { display: flex; flex-direction: row; align-items: center; }
            .choice-header__summary {
                display: flex;
                flex-direction: row;
                align-items: center;
                flex: 1;
            }
            .choice-header__label-slot { flex: 1; display: flex; flex-direction: row; }
            .choice-header__count {
                color: var(--datatable-accent-color, #1e73be);
                font-style: italic;
                margin-left: 4px;
            }
            .choice-header__icon-btn {
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
            .choice-header__icon-btn:hover { background: rgba(0, 0, 0, 0.08); }
            .choice-header__icon-btn svg { width: 18px; height: 18px; fill: currentColor; }
            .choice-header__dropdown {
                position: fixed;
                background: var(--datatable-dropdown-background, white);
                transform-origin: 50% 0;
                transition: transform 0.1s;
                transform: scaleY(1);
                box-shadow: 0 1px 3px rgba(0, 0, 0, 0.12), 0 1px 2px rgba(0, 0, 0, 0.24);
                width: max-content;
                z-index: 99;
                max-height: 300px;
                overflow: auto;
                color: var(--datatable-text-color, black);
            }
            .choice-header__dropdown--hide { transform: scaleY(0); }
            .choice-header__search {
                padding: 6px 6px 6px 10px;
                border-bottom: 1px solid #e0e0e0;
                display: flex;
                align-items: center;
            }
            .choice-header__search input {
                border: none;
                font-size: 16px;
                width: calc(100% - 30px);
                outline: none;
                background: transparent;
                height: 24px;
                padding: 0;
                min-width: 0;
            }
            .choice-header__search svg { width: 18px; height: 18px; fill: currentColor; flex-shrink: 0; }
            .choice-header__row {
                display: flex;
                flex-direction: row;
                align-items: center;
                cursor: pointer;
            }
            .choice-header__row:hover { background: rgba(0, 0, 0, 0.04); }
            .choice-header__checkbox {
                background: none;
                border: none;
                cursor: pointer;
                padding: 0;
                min-width: 40px;
                width: 40px;
                height: 40px;
                display: flex;
                align-items: center;
                justify-content: center;
                flex-shrink: 0;
            }
            .choice-header__checkbox svg { width: 18px; height: 18px; fill: currentColor; }
            .choice-header__checkbox--checked { color: var(--datatable-accent-color, #1e73be); }
            .choice-header__prefix { margin-right: 10px; }
            .choice-header__choice-label { font-size: 13px; font-weight: 400; margin-right: 16px; }
            .choice-header__choice-icon { margin-left: 24px; }
            .choice-header__choice-icon svg { width: 18px; height: 18px; fill: currentColor; }"
        </style>
        <div class="choice-header" node_ref=host_ref>
            <div class="choice-header__summary">
                <span class="choice-header__label-slot">
                    {children()}
                    {move || {
                        let label = count_selected_label(&selected.get());
                        if label.is_empty() {
                            view! { <></> }.into_any()
                        } else {
                            view! { <span class="choice-header__count">{label}</span> }.into_any()
                        }
                    }}
                </span>
                <button class="choice-header__icon-btn" title="Open" on:click=open_dropdown>
                    {icon("chevron-down")}
                </button>
            </div>

            <div
                class=move || {
                    if opened.get() {
                        "choice-header__dropdown"
                    } else {
                        "choice-header__dropdown choice-header__dropdown--hide"
                    }
                }
                node_ref=dropdown_ref
                style:left=move || format!("{}px", dropdown_pos.get().0)
                style:top=move || format!("{}px", dropdown_pos.get().1)
            >
                <Show when=move || enable_filter.get()>
                    <div class="choice-header__search">
                        <input
                            node_ref=filter_ref
                            type="text"
                            prop:value=move || filter_value.get()
                            on:input=move |ev| filter_value.set(event_target_value(&ev))
                        />
                        {icon("search")}
                    </div>
                </Show>
                <For
                    each=move || filtered.get()
                    key=|choice| choice.key.clone()
                    children=move |choice| {
                        let key_for_tap = choice.key.clone();
                        let key_for_class = choice.key.clone();
                        let key_for_icon = choice.key.clone();
                        view! {
                            <div class="choice-header__row" on:click=move |_| tap_choice(key_for_tap.clone())>
                                <button class=move || {
                                    if selected.get().iter().any(|k| k == &key_for_class) {
                                        "choice-header__checkbox choice-header__checkbox--checked"
                                    } else {
                                        "choice-header__checkbox"
                                    }
                                }>
                                    {move || {
                                        if selected.get().iter().any(|k| k == &key_for_icon) {
                                            icon("checkbox-checked")
                                        } else {
                                            icon("checkbox-blank")
                                        }
                                    }}
                                </button>
                                {choice
                                    .prefix
                                    .clone()
                                    .map(|prefix| view! { <div class="choice-header__prefix">{prefix.run()}</div> })}
                                <div
                                    class="choice-header__choice-label"
                                    style=choice.style.clone().unwrap_or_default()
                                >
                                    {choice.label.clone()}
                                </div>
                                {choice.icon.clone().map(|name| {
                                    view! {
                                        <div
                                            class="choice-header__choice-icon"
                                            style=choice.icon_style.clone().unwrap_or_default()
                                        >
                                            {icon(&name)}
                                        </div>
                                    }
                                })}
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
