use crate::icons::icon;
use crate::paging::{next_allowed, parse_size, prev_allowed, range_end, range_start, PageChange};
use leptos::prelude::*;

/// Horizontal placement of the footer controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FooterPosition {
    #[default]
    Left,
    Right,
}

/// Table footer proposing page and size changes over externally owned
/// counts; it never applies a change locally.
///
/// Out-of-range navigation and non-numeric size values are silent no-ops.
#[component]
pub fn PaginationFooter(
    /// Zero-based current page.
    #[prop(into)]
    page: Signal<usize>,

    #[prop(into)] size: Signal<usize>,

    #[prop(into)] total_elements: Signal<usize>,

    #[prop(into)] total_pages: Signal<usize>,

    /// Selectable page sizes, in display order.
    #[prop(optional)]
    available_sizes: Option<Vec<usize>>,

    #[prop(optional)] footer_position: FooterPosition,

    #[prop(optional)]
    on_page_change: Option<Callback<PageChange>>,
) -> impl IntoView {
    let sizes = available_sizes.unwrap_or_else(|| vec![10, 25, 50, 100]);

    let dispatch = move |change: PageChange| {
        if let Some(callback) = on_page_change {
            callback.run(change);
        }
    };

    let next_page = move |_| {
        let current = page.get_untracked();
        if next_allowed(current, total_pages.get_untracked()) {
            dispatch(PageChange {
                page: current + 1,
                size: size.get_untracked(),
            });
        }
    };

    let prev_page = move |_| {
        let current = page.get_untracked();
        if prev_allowed(current) {
            dispatch(PageChange {
                page: current - 1,
                size: size.get_untracked(),
            });
        }
    };

    let controls_class = match footer_position {
        FooterPosition::Left => "pagination-footer__controls",
        FooterPosition::Right => "pagination-footer__controls pagination-footer__controls--end",
    };

    let handle_size = move |raw: String| {
        if let Some(new_size) = parse_size(&raw) {
            if new_size != size.get_untracked() {
                dispatch(PageChange {
                    page: 0,
                    size: new_size,
                });
            }
        }
    };

    view! {
        <style>
            ".pagination-footer {
                display: flex;
                flex-direction: row;
                align-items: center;
                font-size: 12px;
                font-weight: normal;
                height: 55px;
                border-top: 1px solid var(--datatable-divider-color, rgba(0, 0, 0, 0.12));
                padding: 0 14px;
                color: var(--datatable-footer-color, rgba(0, 0, 0, 0.54));
            }
            .pagination-footer__controls {
                display: flex;
                flex-direction: row;
                align-items: center;
            }
            .pagination-footer__controls--end { margin-left: auto; }
            .pagination-footer__sizes {
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 4px;
            }
            .pagination-footer__sizes select {
                width: 64px;
                text-align: right;
                font-size: 12px;
                font-weight: 500;
                color: var(--datatable-footer-color, rgba(0, 0, 0, 0.54));
                background: var(--datatable-footer-background, white);
                border: none;
                outline: none;
                cursor: pointer;
            }
            .pagination-footer__status { margin: 0 8px 0 32px; }
            .pagination-footer__nav {
                background: none;
                border: none;
                cursor: pointer;
                padding: 0;
                width: 24px;
                height: 24px;
                margin-left: 24px;
                display: flex;
                align-items: center;
                justify-content: center;
                color: var(--datatable-footer-color, rgba(0, 0, 0, 0.54));
                border-radius: 50%;
            }
            .pagination-footer__nav:hover:not(:disabled) { background: rgba(0, 0, 0, 0.08); }
            .pagination-footer__nav:disabled { opacity: 0.38; cursor: default; }
            .pagination-footer__nav svg { width: 20px; height: 20px; fill: currentColor; }"
        </style>
        <div class="pagination-footer">
            <div class=controls_class>
                <div class="pagination-footer__sizes">
                    <span>"Lines per page"</span>
                    <select
                        prop:value=move || size.get().to_string()
                        on:change=move |ev| handle_size(event_target_value(&ev))
                    >
                        {sizes
                            .iter()
                            .map(|&option_size| {
                                view! {
                                    <option
                                        value=option_size.to_string()
                                        selected=move || size.get() == option_size
                                    >
                                        {option_size.to_string()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div class="pagination-footer__status">
                    {move || {
                        format!(
                            "{}-{} of {}",
                            range_start(page.get(), size.get(), total_elements.get()),
                            range_end(page.get(), size.get(), total_elements.get()),
                            total_elements.get(),
                        )
                    }}
                </div>
                <button
                    class="pagination-footer__nav"
                    title="Previous page"
                    disabled=move || !prev_allowed(page.get())
                    on:click=prev_page
                >
                    {icon("chevron-left")}
                </button>
                <button
                    class="pagination-footer__nav"
                    title="Next page"
                    disabled=move || !next_allowed(page.get(), total_pages.get())
                    on:click=next_page
                >
                    {icon("chevron-right")}
                </button>
            </div>
        </div>
    }
}
