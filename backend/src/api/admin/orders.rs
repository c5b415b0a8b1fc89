//! Order administration endpoint.

use common::order::Order;
use serde::Deserialize;

use crate::upstream::get_json;

#[derive(Debug, Deserialize)]
struct OrdersResponse {
    data: Vec<Order>,
}

pub async fn get_all_orders(token: String) -> anyhow::Result<Vec<Order>> {
    let response: OrdersResponse = get_json("/admin/orders", Some(&token)).await?;
    Ok(response.data)
}
