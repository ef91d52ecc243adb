use crate::domain::models::HistoryRow;
use crate::domain::models::layout::TABLE_HEADERS;
use dioxus::prelude::*;

// Past searches table (BEM: c-history-table)
// First column is the wide "Search Term" column
#[component]
pub fn HistoryTable(rows: Vec<HistoryRow>) -> Element {
    let [term_header, date_header, time_header] = TABLE_HEADERS;

    rsx! {
        div { class: "c-history-table",
            div { class: "c-history-table__header",
                span { class: "c-history-table__cell c-history-table__cell--wide", "{term_header}" }
                span { class: "c-history-table__cell", "{date_header}" }
                span { class: "c-history-table__cell", "{time_header}" }
            }
            ul { class: "c-history-table__rows",
                // Index keys: the service may return the same search twice
                for (idx, row) in rows.into_iter().enumerate() {
                    li { key: "{idx}", class: "c-history-table__row",
                        span { class: "c-history-table__cell c-history-table__cell--wide", "{row.search_text}" }
                        span { class: "c-history-table__cell", "{row.date}" }
                        span { class: "c-history-table__cell", "{row.time}" }
                    }
                }
            }
        }
    }
}
