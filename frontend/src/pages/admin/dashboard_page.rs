//! Admin dashboard with headline counts.

use dioxus::prelude::*;

use crate::api::admin_api::{get_all_orders, get_all_reviews, get_all_users};
use crate::api::catalog_api::get_products;
use crate::data_definitions::session::SessionState;
use crate::routes::Route;


/// Admin dashboard page
#[component]
pub fn AdminDashboardPage() -> Element {
    let session = use_context::<SessionState>();
    let token = session.token().unwrap_or_default();

    let products = use_resource(move || get_products(String::new()));
    let orders = use_resource({
        let token = token.clone();
        move || get_all_orders(token.clone())
    });
    let users = use_resource({
        let token = token.clone();
        move || get_all_users(token.clone())
    });
    let reviews = use_resource({
        let token = token.clone();
        move || get_all_reviews(token.clone())
    });

    fn count_of<T>(resource: &Option<Result<Vec<T>, ServerFnError>>) -> String {
        match resource {
            Some(Ok(list)) => list.len().to_string(),
            Some(Err(_)) => "!".to_string(),
            None => "...".to_string(),
        }
    }

    rsx! {
        Title { "Modelcraft - Admin" }
        div {
            style: "display: flex; flex-direction: column; gap: 18px;",
            h1 { style: "font-size: 26px; color: #e8eaf0; margin: 0;", "Dashboard" }
            div {
                style: "
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
                    gap: 16px;
                ",
                DashboardCard {
                    label: "Products".to_string(),
                    value: count_of(&products.read()),
                    to: Route::AdminProductsPage {},
                }
                DashboardCard {
                    label: "Orders".to_string(),
                    value: count_of(&orders.read()),
                    to: Route::admin_orders_page(),
                }
                DashboardCard {
                    label: "Users".to_string(),
                    value: count_of(&users.read()),
                    to: Route::AdminUsersPage {},
                }
                DashboardCard {
                    label: "Reviews".to_string(),
                    value: count_of(&reviews.read()),
                    to: Route::AdminReviewsPage {},
                }
            }
        }
    }
}

#[component]
fn DashboardCard(label: String, value: String, to: Route) -> Element {
    rsx! {
        Link {
            to: to,
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 8px;
                    padding: 20px;
                    background-color: #181e2e;
                    border: 1px solid #2a3147;
                    border-radius: 12px;
                ",
                span { style: "font-size: 14px; color: #7d8497;", "{label}" }
                span { style: "font-size: 32px; font-weight: 700; color: #e8eaf0;", "{value}" }
            }
        }
    }
}
