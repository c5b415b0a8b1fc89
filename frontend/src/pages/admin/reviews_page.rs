//! Admin review listing.

use dioxus::prelude::*;

use common::review::Review;

use crate::api::admin_api::get_all_reviews;
use crate::components::admin_components::data_table::{DataTable, TableRow};
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::suspend_boundary::SuspendWrapper;
use crate::data_definitions::session::SessionState;


/// Admin reviews page
#[component]
pub fn AdminReviewsPage() -> Element {
    rsx! {
        Title { "Modelcraft - Admin Reviews" }
        SuspendWrapper {
            AdminReviewsTable {}
        }
    }
}

#[component]
fn AdminReviewsTable() -> Element {
    let session = use_context::<SessionState>();
    let token = session.token().unwrap_or_default();

    let reviews = use_resource(move || get_all_reviews(token.clone()))
        .suspend()?
        .cloned();
    let reviews = match reviews {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(reviews) => reviews,
    };

    let rows: Vec<TableRow> = reviews
        .iter()
        .map(|review: &Review| TableRow {
            key: review._id.clone(),
            cells: vec![
                review._id.clone(),
                review.product_name.clone(),
                format!("{:.1}", review.rating),
                review.comment.clone(),
                review.created_at.clone(),
            ],
        })
        .collect();

    rsx! {
        DataTable {
            title: "Reviews".to_string(),
            description: "Customer reviews across all products.".to_string(),
            headers: vec![
                "ID".to_string(),
                "Product".to_string(),
                "Rating".to_string(),
                "Comment".to_string(),
                "Posted".to_string(),
            ],
            rows,
        }
    }
}
