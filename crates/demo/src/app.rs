use datatable_controls::filters::date_value_to_epoch;
use datatable_controls::paging::page_count;
use datatable_controls::{
    Choice, ChoiceHeader, DateFilterChange, DateFilterSortHeader, FilterSortHeader,
    FilterValueChange, FooterPosition, PageChange, PageState, PaginationFooter, SelectionChange,
    SortDirection, SortHeader,
};
use leptos::children::ViewFn;
use leptos::prelude::*;
use std::cmp::Ordering;

const STATUSES: [(&str, &str, &str); 4] = [
    ("new", "New", "#1976d2"),
    ("paid", "Paid", "#7cb342"),
    ("shipped", "Shipped", "#f57c00"),
    ("cancelled", "Cancelled", "#e53935"),
];

#[derive(Clone, Debug, PartialEq)]
pub struct OrderRow {
    pub number: String,
    pub customer: String,
    pub status: String,
    pub created_at: i64,
    pub total: f64,
}

#[derive(Clone, Debug)]
pub struct OrdersListState {
    pub sort_field: String,
    pub direction: SortDirection,
    pub customer_filter: Option<String>,
    pub statuses: Vec<String>,
    pub created_from: Option<i64>,
    pub created_to: Option<i64>,
    pub paging: PageState,
}

impl Default for OrdersListState {
    fn default() -> Self {
        Self {
            sort_field: "number".to_string(),
            direction: SortDirection::None,
            customer_filter: None,
            statuses: Vec::new(),
            created_from: None,
            created_to: None,
            paging: PageState {
                size: 10,
                available_sizes: vec![5, 10, 25, 50],
                ..PageState::default()
            },
        }
    }
}

fn format_timestamp(epoch: i64) -> String {
    chrono::DateTime::from_timestamp(epoch, 0)
        .map(|dt| dt.format("%d.%m.%Y").to_string())
        .unwrap_or_default()
}

fn status_label(key: &str) -> String {
    STATUSES
        .iter()
        .find(|(status_key, _, _)| *status_key == key)
        .map(|(_, label, _)| label.to_string())
        .unwrap_or_else(|| key.to_string())
}

fn status_style(key: &str) -> String {
    STATUSES
        .iter()
        .find(|(status_key, _, _)| *status_key == key)
        .map(|(_, _, color)| format!("color: {color};"))
        .unwrap_or_default()
}

fn status_choices() -> Vec<Choice> {
    STATUSES
        .iter()
        .map(|&(key, label, color)| Choice {
            key: key.to_string(),
            label: label.to_string(),
            style: Some(format!("color: {color};")),
            prefix: Some(ViewFn::from(move || {
                view! { <span class="status-dot" style=format!("background: {color};")></span> }
            })),
            ..Default::default()
        })
        .collect()
}

fn order(number: &str, customer: &str, status: &str, created: &str, total: f64) -> OrderRow {
    OrderRow {
        number: number.to_string(),
        customer: customer.to_string(),
        status: status.to_string(),
        created_at: date_value_to_epoch(created).unwrap_or_default(),
        total,
    }
}

pub fn sample_orders() -> Vec<OrderRow> {
    vec![
        order("ORD-1001", "Acme Trading", "paid", "2024-01-12", 1250.00),
        order("ORD-1002", "Borealis Group", "new", "2024-01-15", 310.40),
        order("ORD-1003", "Cascade Supply", "shipped", "2024-01-21", 2780.00),
        order("ORD-1004", "Delta Logistics", "paid", "2024-02-02", 96.50),
        order("ORD-1005", "Evergreen Retail", "cancelled", "2024-02-05", 540.00),
        order("ORD-1006", "Foxglove Media", "new", "2024-02-11", 1899.99),
        order("ORD-1007", "Granite Works", "paid", "2024-02-18", 75.25),
        order("ORD-1008", "Harbor Foods", "shipped", "2024-02-27", 4420.10),
        order("ORD-1009", "Ironwood Tools", "paid", "2024-03-03", 215.00),
        order("ORD-1010", "Juniper Labs", "new", "2024-03-09", 1660.75),
        order("ORD-1011", "Kestrel Freight", "shipped", "2024-03-14", 830.30),
        order("ORD-1012", "Lumen Electric", "cancelled", "2024-03-20", 47.90),
        order("ORD-1013", "Meridian Textiles", "paid", "2024-03-28", 3125.60),
        order("ORD-1014", "Northwind Paper", "new", "2024-04-04", 505.00),
        order("ORD-1015", "Orchard Fresh", "paid", "2024-04-10", 1210.45),
        order("ORD-1016", "Pinnacle Sports", "shipped", "2024-04-17", 689.99),
        order("ORD-1017", "Quarry Stone", "paid", "2024-04-23", 2950.00),
        order("ORD-1018", "Riverbend Books", "new", "2024-05-01", 120.15),
        order("ORD-1019", "Summit Gear", "shipped", "2024-05-08", 1785.20),
        order("ORD-1020", "Tidewater Marine", "cancelled", "2024-05-16", 960.00),
        order("ORD-1021", "Umber Ceramics", "paid", "2024-05-22", 388.80),
        order("ORD-1022", "Vantage Optics", "new", "2024-05-29", 2240.00),
        order("ORD-1023", "Willow Home", "paid", "2024-06-05", 152.35),
        order("ORD-1024", "Zephyr Airways", "shipped", "2024-06-12", 5120.90),
    ]
}

fn matches_filters(row: &OrderRow, state: &OrdersListState) -> bool {
    if let Some(filter) = &state.customer_filter {
        if !filter.is_empty()
            && !row.customer.to_lowercase().contains(&filter.to_lowercase())
        {
            return false;
        }
    }
    if !state.statuses.is_empty() && !state.statuses.iter().any(|key| key == &row.status) {
        return false;
    }
    if let Some(from) = state.created_from {
        if row.created_at < from {
            return false;
        }
    }
    if let Some(to) = state.created_to {
        if row.created_at > to {
            return false;
        }
    }
    true
}

fn sort_rows(rows: &mut [OrderRow], field: &str, direction: SortDirection) {
    if direction == SortDirection::None {
        return;
    }
    rows.sort_by(|a, b| {
        let ordering = match field {
            "number" => a.number.cmp(&b.number),
            "customer" => a.customer.to_lowercase().cmp(&b.customer.to_lowercase()),
            "created" => a.created_at.cmp(&b.created_at),
            "total" => a.total.total_cmp(&b.total),
            _ => Ordering::Equal,
        };
        if direction == SortDirection::Ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
}

/// Demo page: an in-memory orders table driven entirely by the header and
/// footer controls.
#[component]
pub fn App() -> impl IntoView {
    let state = RwSignal::new(OrdersListState::default());
    let orders = StoredValue::new(sample_orders());

    // One direction handle per sortable column so activating one column
    // resets the arrows of the others.
    let number_direction = RwSignal::new(SortDirection::None);
    let customer_direction = RwSignal::new(SortDirection::None);
    let created_direction = RwSignal::new(SortDirection::None);
    let total_direction = RwSignal::new(SortDirection::None);

    let handle_sort = move |field: &'static str, value: SortDirection| {
        log::debug!("direction-changed: {field} -> {value:?}");
        let columns = [
            ("number", number_direction),
            ("customer", customer_direction),
            ("created", created_direction),
            ("total", total_direction),
        ];
        for (name, handle) in columns {
            if name != field {
                handle.set(SortDirection::None);
            }
        }
        state.update(|s| {
            s.sort_field = field.to_string();
            s.direction = value;
        });
    };

    let filtered = Memo::new(move |_| {
        let s = state.get();
        let mut rows: Vec<OrderRow> = orders
            .get_value()
            .into_iter()
            .filter(|row| matches_filters(row, &s))
            .collect();
        sort_rows(&mut rows, &s.sort_field, s.direction);
        rows
    });

    let total_pages = Memo::new(move |_| page_count(filtered.get().len(), state.get().paging.size));

    let page_rows = Memo::new(move |_| {
        let paging = state.with(|s| s.paging.clone());
        filtered
            .get()
            .into_iter()
            .skip(paging.page * paging.size)
            .take(paging.size)
            .collect::<Vec<_>>()
    });

    view! {
        <style>
            ".orders-page { font-family: Roboto, sans-serif; padding: 24px; }
            .orders-page h1 { font-size: 1.25rem; font-weight: 500; }
            .orders-table { border-collapse: collapse; width: 100%; }
            .orders-table th {
                text-align: left;
                font-size: 13px;
                font-weight: 500;
                color: rgba(0, 0, 0, 0.54);
                border-bottom: 1px solid rgba(0, 0, 0, 0.12);
                padding: 8px 12px;
            }
            .orders-table td {
                font-size: 13px;
                border-bottom: 1px solid rgba(0, 0, 0, 0.12);
                padding: 8px 12px;
            }
            .orders-table__num { text-align: right; }
            .status-dot {
                display: inline-block;
                width: 8px;
                height: 8px;
                border-radius: 50%;
            }"
        </style>
        <div class="orders-page">
            <h1>"Orders"</h1>
            <table class="orders-table">
                <thead>
                    <tr>
                        <th>
                            <SortHeader
                                direction=number_direction
                                on_direction_change=Callback::new(move |value| handle_sort("number", value))
                            >
                                "Order #"
                            </SortHeader>
                        </th>
                        <th>
                            <FilterSortHeader
                                header="Customer"
                                property="customer"
                                direction=customer_direction
                                on_direction_change=Callback::new(move |value| handle_sort("customer", value))
                                on_filter_change=Callback::new(move |change: FilterValueChange| {
                                    log::debug!("filter-value-changed: {change:?}");
                                    state.update(|s| {
                                        s.customer_filter = change.value;
                                        s.paging.page = 0;
                                    });
                                })
                            />
                        </th>
                        <th>
                            <ChoiceHeader
                                choices=Signal::derive(status_choices)
                                enable_filter=Signal::derive(|| true)
                                property="status"
                                on_selection_change=Callback::new(move |change: SelectionChange| {
                                    log::debug!("selected-choices-changed: {change:?}");
                                    state.update(|s| {
                                        s.statuses = change.value;
                                        s.paging.page = 0;
                                    });
                                })
                            >
                                "Status"
                            </ChoiceHeader>
                        </th>
                        <th>
                            <DateFilterSortHeader
                                header="Created"
                                property="created"
                                date_format="%d.%m.%Y"
                                direction=created_direction
                                on_direction_change=Callback::new(move |value| handle_sort("created", value))
                                on_filter_change=Callback::new(move |change: DateFilterChange| {
                                    log::debug!("filter: {change:?}");
                                    state.update(|s| {
                                        s.created_from = change.date_from;
                                        s.created_to = change.date_to;
                                        s.paging.page = 0;
                                    });
                                })
                            />
                        </th>
                        <th>
                            <SortHeader
                                direction=total_direction
                                on_direction_change=Callback::new(move |value| handle_sort("total", value))
                            >
                                "Total"
                            </SortHeader>
                        </th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || page_rows.get()
                        key=|row| row.number.clone()
                        children=move |row| {
                            view! {
                                <tr>
                                    <td>{row.number.clone()}</td>
                                    <td>{row.customer.clone()}</td>
                                    <td style=status_style(&row.status)>{status_label(&row.status)}</td>
                                    <td>{format_timestamp(row.created_at)}</td>
                                    <td class="orders-table__num">{format!("{:.2}", row.total)}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <PaginationFooter
                page=Signal::derive(move || state.get().paging.page)
                size=Signal::derive(move || state.get().paging.size)
                total_elements=Signal::derive(move || filtered.get().len())
                total_pages=total_pages
                available_sizes=vec![5, 10, 25, 50]
                footer_position=FooterPosition::Right
                on_page_change=Callback::new(move |change: PageChange| {
                    log::debug!("page-or-size-changed: {change:?}");
                    state.update(|s| {
                        s.paging.page = change.page;
                        s.paging.size = change.size;
                    });
                })
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_combine() {
        let rows = sample_orders();
        let state = OrdersListState {
            customer_filter: Some("ac".to_string()),
            statuses: vec!["paid".to_string()],
            ..Default::default()
        };
        let matching: Vec<&OrderRow> = rows
            .iter()
            .filter(|row| matches_filters(row, &state))
            .collect();
        assert!(matching.iter().all(|row| row.status == "paid"));
        assert!(matching
            .iter()
            .all(|row| row.customer.to_lowercase().contains("ac")));
        assert!(!matching.is_empty());
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        let rows = sample_orders();
        let state = OrdersListState {
            created_from: date_value_to_epoch("2024-01-12"),
            created_to: date_value_to_epoch("2024-01-21"),
            ..Default::default()
        };
        let matching: Vec<&OrderRow> = rows
            .iter()
            .filter(|row| matches_filters(row, &state))
            .collect();
        let numbers: Vec<&str> = matching.iter().map(|row| row.number.as_str()).collect();
        assert_eq!(numbers, vec!["ORD-1001", "ORD-1002", "ORD-1003"]);
    }

    #[test]
    fn test_sort_rows_by_total() {
        let mut rows = sample_orders();
        sort_rows(&mut rows, "total", SortDirection::Descending);
        assert_eq!(rows[0].number, "ORD-1024");
        sort_rows(&mut rows, "total", SortDirection::Ascending);
        assert_eq!(rows[0].number, "ORD-1012");
    }

    #[test]
    fn test_none_direction_keeps_order() {
        let mut rows = sample_orders();
        let original = rows.clone();
        sort_rows(&mut rows, "total", SortDirection::None);
        assert_eq!(rows, original);
    }
}
