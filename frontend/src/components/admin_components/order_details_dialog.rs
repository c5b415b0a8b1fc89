//! Modal dialog with the full order breakdown.

use dioxus::prelude::*;

use common::order::Order;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::MdClose;

#[component]
pub fn OrderDetailsDialog(order: ReadSignal<Order>, on_close: Callback<()>) -> Element {
    let order = order.read().clone();

    rsx! {
        // click-away backdrop
        div {
            style: "
                position: fixed;
                top: 0;
                left: 0;
                width: 100%;
                height: 100%;
                background-color: rgba(0,0,0,0.55);
                z-index: 1500;
            ",
            onclick: move |_| {
                on_close.call(());
            },
        }

        div {
            style: "
                position: fixed;
                top: 50%;
                left: 50%;
                transform: translate(-50%, -50%);
                width: 520px;
                max-width: 90vw;
                max-height: 80vh;
                overflow-y: auto;
                background-color: #181e2e;
                border: 1px solid #2a3147;
                border-radius: 12px;
                padding: 20px;
                z-index: 1600;
                display: flex;
                flex-direction: column;
                gap: 12px;
            ",

            div {
                style: "display: flex; flex-direction: row; align-items: center; justify-content: space-between;",
                h2 { style: "font-size: 20px; color: #e8eaf0; margin: 0;", "Order {order._id}" }
                button {
                    style: "background: transparent; border: none; color: #c4c9d6; cursor: pointer;",
                    onclick: move |_| {
                        on_close.call(());
                    },
                    Icon { icon: MdClose, style: "width: 22px; height: 22px;" }
                }
            }

            DetailLine { label: "Customer", value: order.user.clone() }
            DetailLine { label: "Status", value: order.order_status.clone() }
            DetailLine { label: "Placed", value: order.created_at.clone() }
            if let Some(delivered_at) = order.delivered_at.clone() {
                DetailLine { label: "Delivered", value: delivered_at }
            }
            DetailLine { label: "Payment", value: order.payment_method.clone() }
            DetailLine { label: "Shipping address", value: order.shipping_address.clone() }
            if !order.order_notes.is_empty() {
                DetailLine { label: "Notes", value: order.order_notes.clone() }
            }

            div {
                style: "border-top: 1px solid #2a3147; padding-top: 10px;",
                h3 { style: "font-size: 16px; color: #e8eaf0; margin: 0 0 8px 0;", "Items" }
                ul {
                    for item in order.order_items.iter() {
                        li {
                            key: "{item.product}",
                            style: "
                                display: flex;
                                flex-direction: row;
                                justify-content: space-between;
                                padding: 4px 0;
                                font-size: 14px;
                                color: #c4c9d6;
                            ",
                            span { "{item.quantity} x {item.name}" }
                            span { {format!("${:.2}", item.price)} }
                        }
                    }
                }
            }

            div {
                style: "border-top: 1px solid #2a3147; padding-top: 10px;",
                DetailLine { label: "Items", value: format!("${:.2}", order.items_price) }
                DetailLine { label: "Tax", value: format!("${:.2}", order.tax_price) }
                DetailLine { label: "Shipping", value: format!("${:.2}", order.shipping_price) }
                DetailLine { label: "Total", value: format!("${:.2}", order.total_price) }
            }
        }
    }
}

#[component]
fn DetailLine(label: String, value: String) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: row; gap: 8px; font-size: 14px;",
            span { style: "color: #7d8497; min-width: 130px;", "{label}" }
            span { style: "color: #e8eaf0;", "{value}" }
        }
    }
}
