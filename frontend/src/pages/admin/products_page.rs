//! Admin product listing.

use dioxus::prelude::*;

use common::product::Product;

use crate::api::catalog_api::get_products;
use crate::components::admin_components::data_table::{DataTable, TableRow};
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::suspend_boundary::SuspendWrapper;
use crate::routes::Route;


/// Admin products page
#[component]
pub fn AdminProductsPage() -> Element {
    rsx! {
        Title { "Modelcraft - Admin Products" }
        SuspendWrapper {
            AdminProductsTable {}
        }
    }
}

#[component]
fn AdminProductsTable() -> Element {
    let products = use_resource(move || get_products(String::new()))
        .suspend()?
        .cloned();
    let products = match products {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(products) => products,
    };

    let rows: Vec<TableRow> = products
        .iter()
        .map(|product: &Product| TableRow {
            key: product._id.clone(),
            cells: vec![
                product._id.clone(),
                product.product_name.clone(),
                format!("${:.2}", product.price),
                product.stock.to_string(),
                format!("{:.1}", product.ratings),
            ],
        })
        .collect();

    rsx! {
        DataTable {
            title: "Products".to_string(),
            description: "Every product in the catalog.".to_string(),
            headers: vec![
                "ID".to_string(),
                "Name".to_string(),
                "Price".to_string(),
                "Stock".to_string(),
                "Rating".to_string(),
            ],
            rows,
            action_label: Some("Images".to_string()),
            on_action: Some(Callback::new(move |product_id: String| {
                navigator().push(Route::AdminProductImagesPage { product_id });
            })),
        }
    }
}
