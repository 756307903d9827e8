use crate::icons::icon;
use crate::sort::SortDirection;
use leptos::prelude::*;

/// Sortable header cell: label content on the left, a tri-state sort
/// toggle button on the right.
///
/// The direction cycles `None -> Descending -> Ascending -> None` on every
/// click and `on_direction_change` runs with the new value.
#[component]
pub fn SortHeader(
    /// Sort state owned by this header; pass a shared handle to read or
    /// drive it from outside.
    #[prop(default = RwSignal::new(SortDirection::None))]
    direction: RwSignal<SortDirection>,

    /// Called with the new direction after every toggle.
    #[prop(optional)]
    on_direction_change: Option<Callback<SortDirection>>,

    /// Extra controls rendered between the label and the toggle button.
    #[prop(optional)]
    actions: Option<ChildrenFn>,

    /// Header label content.
    children: Children,
) -> impl IntoView {
    let handle_sort = move |_| {
        let next = direction.get().toggled();
        direction.set(next);
        if let Some(callback) = on_direction_change {
            callback.run(next);
        }
    };

    view! {
        <style>
            ".sort-header { display: flex; flex-direction: row; align-items: center; }
            .sort-header__label { flex: 1; }
            .sort-header__btn {
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
            .sort-header__btn:hover { background: rgba(0, 0, 0, 0.08); }
            .sort-header__btn svg {
                width: 18px;
                height: 18px;
                transition: transform 0.2s;
                fill: currentColor;
            }
            .sort-header__btn.desc svg,
            .sort-header__btn.asc svg {
                color: var(--datatable-sort-arrow-color, #7cb342);
            }
            .sort-header__btn.asc svg { transform: rotate(180deg); }"
        </style>
        <div class="sort-header">
            <div class="sort-header__label">{children()}</div>
            {actions.map(|actions| actions())}
            <button
                class=move || format!("sort-header__btn {}", direction.get().as_class())
                title=move || direction.get().tooltip()
                on:click=handle_sort
            >
                {icon("sort-arrow")}
            </button>
        </div>
    }
}
