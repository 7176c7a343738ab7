//! Raw data records table.

use dioxus::prelude::*;
use std::rc::Rc;
use velora_data::table::{record_count_label, rows, HEADERS};
use velora_ocean::AnalysisResult;

#[derive(Props, Clone, PartialEq)]
pub struct DataTableProps {
    pub result: Rc<AnalysisResult>,
}

/// Sample rows of the answer; the header shows sample size against the total.
#[component]
pub fn DataTable(props: DataTableProps) -> Element {
    let rows = rows(&props.result);
    let count_label = record_count_label(&props.result);

    rsx! {
        div {
            class: "glass table-card",
            div {
                class: "table-header",
                div { class: "table-title", "📋 Raw Data Records" }
                span { class: "record-count", "{count_label}" }
            }
            div {
                style: "overflow-x: auto;",
                table {
                    class: "data-table",
                    thead {
                        tr {
                            for header in HEADERS.iter() {
                                th { key: "{header}", "{header}" }
                            }
                        }
                    }
                    tbody {
                        for (i, row) in rows.iter().enumerate() {
                            tr {
                                key: "{i}",
                                td { "{row.date}" }
                                td { "{row.latitude}" }
                                td { "{row.longitude}" }
                                td { class: "temp-cell", "{row.temperature}" }
                                td { class: "sal-cell", "{row.salinity}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
