//! Filterable table used by every admin listing page.

use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Stable identity for rendering and for row actions.
    pub key: String,
    pub cells: Vec<String>,
}

#[component]
pub fn DataTable(
    title: String,
    description: String,
    headers: Vec<String>,
    rows: ReadSignal<Vec<TableRow>>,
    action_label: Option<String>,
    on_action: Option<Callback<String>>,
) -> Element {
    let mut global_filter = use_signal(String::new);

    let visible_rows = use_memo(move || {
        let needle = global_filter.read().trim().to_lowercase();
        let rows = rows.read();
        if needle.is_empty() {
            return rows.clone();
        }
        rows.iter()
            .filter(|row| {
                row.cells
                    .iter()
                    .any(|cell| cell.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect::<Vec<_>>()
    });

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 14px; width: 100%;",

            div {
                h1 { style: "font-size: 26px; color: #e8eaf0; margin: 0;", "{title}" }
                p { style: "font-size: 15px; color: #7d8497; margin: 4px 0 0 0;", "{description}" }
            }

            input {
                r#type: "text",
                placeholder: "Filter rows...",
                value: "{global_filter}",
                style: "
                    width: 320px;
                    padding: 8px 12px;
                    border: 1px solid #394157;
                    border-radius: 6px;
                    background-color: #181e2e;
                    color: #e8eaf0;
                    font-size: 14px;
                    outline: none;
                ",
                oninput: move |e| {
                    global_filter.set(e.value());
                },
            }

            table {
                class: "x-admin-table",
                style: "width: 100%; border-collapse: collapse;",
                thead {
                    tr {
                        for header in headers.iter() {
                            th {
                                style: "
                                    text-align: left;
                                    padding: 10px 12px;
                                    font-size: 14px;
                                    color: #7d8497;
                                    border-bottom: 1px solid #2a3147;
                                ",
                                "{header}"
                            }
                        }
                        if action_label.is_some() {
                            th { style: "border-bottom: 1px solid #2a3147;" }
                        }
                    }
                }
                tbody {
                    for row in visible_rows.read().iter().cloned() {
                        tr {
                            key: "{row.key}",
                            for (i, cell) in row.cells.iter().enumerate() {
                                td {
                                    key: "{row.key}-{i}",
                                    style: "
                                        padding: 10px 12px;
                                        font-size: 14px;
                                        color: #e8eaf0;
                                        border-bottom: 1px solid #202739;
                                    ",
                                    "{cell}"
                                }
                            }
                            if let (Some(label), Some(on_action)) = (action_label.as_ref(), on_action) {
                                td {
                                    style: "padding: 10px 12px; border-bottom: 1px solid #202739;",
                                    RowActionButton {
                                        label: label.clone(),
                                        row_key: row.key.clone(),
                                        on_action,
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if visible_rows.read().is_empty() {
                div {
                    style: "padding: 24px; font-size: 15px; color: #7d8497;",
                    "Nothing to show."
                }
            }
        }
    }
}

#[component]
fn RowActionButton(label: String, row_key: String, on_action: Callback<String>) -> Element {
    rsx! {
        button {
            style: "
                padding: 6px 12px;
                border: 1px solid #394157;
                border-radius: 6px;
                background: transparent;
                color: #7aa2ff;
                font-size: 13px;
                cursor: pointer;
            ",
            onclick: move |_| {
                on_action.call(row_key.clone());
            },
            "{label}"
        }
    }
}
