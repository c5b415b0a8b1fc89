//! Admin order listing with the details dialog driven by the route.

use dioxus::prelude::*;

use common::order::Order;

use crate::api::admin_api::get_all_orders;
use crate::components::admin_components::data_table::{DataTable, TableRow};
use crate::components::admin_components::order_details_dialog::OrderDetailsDialog;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::suspend_boundary::SuspendWrapper;
use crate::data_definitions::session::SessionState;
use crate::data_definitions::url_param::UrlParam;
use crate::routes::Route;


/// Admin orders page
#[component]
pub fn AdminOrdersPage(selected_order: UrlParam<Option<String>>) -> Element {
    rsx! {
        Title { "Modelcraft - Admin Orders" }
        SuspendWrapper {
            AdminOrdersTable { selected_order: selected_order.0 }
        }
    }
}

#[component]
fn AdminOrdersTable(selected_order: ReadSignal<Option<String>>) -> Element {
    let session = use_context::<SessionState>();
    let token = session.token().unwrap_or_default();

    let orders = use_resource(move || get_all_orders(token.clone()))
        .suspend()?
        .cloned();
    let orders = match orders {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(orders) => orders,
    };

    // the open dialog lives in the route so it survives reloads
    let open_order = selected_order
        .read()
        .as_ref()
        .and_then(|id| orders.iter().find(|order| &order._id == id).cloned());

    let rows: Vec<TableRow> = orders
        .iter()
        .map(|order: &Order| TableRow {
            key: order._id.clone(),
            cells: vec![
                order._id.clone(),
                order.order_status.clone(),
                order.total_items().to_string(),
                format!("${:.2}", order.total_price),
                order.created_at.clone(),
            ],
        })
        .collect();

    rsx! {
        DataTable {
            title: "Orders".to_string(),
            description: "All orders placed through the storefront.".to_string(),
            headers: vec![
                "ID".to_string(),
                "Status".to_string(),
                "Items".to_string(),
                "Total".to_string(),
                "Placed".to_string(),
            ],
            rows,
            action_label: Some("View".to_string()),
            on_action: Some(Callback::new(move |order_id: String| {
                navigator().push(Route::AdminOrdersPage {
                    selected_order: UrlParam::from(Some(order_id)),
                });
            })),
        }

        if let Some(order) = open_order {
            OrderDetailsDialog {
                order,
                on_close: move |_| {
                    navigator().push(Route::admin_orders_page());
                },
            }
        }
    }
}
