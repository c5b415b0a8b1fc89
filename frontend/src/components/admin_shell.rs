//! Admin console layout, gated on a staff session.

use dioxus::prelude::*;

use dioxus_free_icons::{Icon, IconShape};
use dioxus_free_icons::icons::md_action_icons::{MdDashboard, MdShoppingCart, MdStore};
use dioxus_free_icons::icons::md_communication_icons::MdComment;
use dioxus_free_icons::icons::md_social_icons::MdGroup;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::data_definitions::session::SessionState;
use crate::routes::Route;


/// Layout for everything under `/admin`. Visitors without a session are sent
/// to the login page; signed-in customers get a refusal instead of the
/// console.
#[component]
pub fn AdminShell() -> Element {
    let session = use_context::<SessionState>();
    let user = session.user();

    use_effect(move || {
        if session.current().is_none() {
            navigator().replace(Route::LoginPage {});
        }
    });

    let Some(user) = user else {
        return rsx! {
            div {
                style: "padding: 40px; font-size: 20px; color: #c4c9d6;",
                "Redirecting to login..."
            }
        };
    };

    if !user.is_staff() {
        return rsx! {
            div {
                style: "padding: 40px; display: flex; flex-direction: column; gap: 16px;",
                h1 { style: "color: #ff6b6b; font-size: 30px;", "Not authorized" }
                p {
                    style: "color: #c4c9d6; font-size: 18px;",
                    "The admin console is only available to staff accounts."
                }
                Link {
                    to: Route::HomePage {},
                    span { style: "color: #7aa2ff; font-size: 18px;", "Back to the storefront" }
                }
            }
        };
    }

    rsx! {
        div {
            id: "x-admin-container",
            style: "
                display: flex;
                flex-direction: row;
                width: 100%;
                min-height: calc(100vh - 64px);
            ",

            div {
                id: "x-admin-sidebar",
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 6px;
                    width: 220px;
                    padding: 20px 12px;
                    background-color: #161b2a;
                    border-right: 1px solid #2a3147;
                ",
                SidebarLink { to: Route::AdminDashboardPage {}, icon: MdDashboard, label: "Dashboard" }
                SidebarLink { to: Route::AdminProductsPage {}, icon: MdStore, label: "Products" }
                SidebarLink { to: Route::admin_orders_page(), icon: MdShoppingCart, label: "Orders" }
                SidebarLink { to: Route::AdminUsersPage {}, icon: MdGroup, label: "Users" }
                SidebarLink { to: Route::AdminReviewsPage {}, icon: MdComment, label: "Reviews" }
            }

            div {
                style: "flex-grow: 1; min-width: 100px; padding: 24px;",
                GlobalErrorBoundary {
                    boundary_name: "AdminShell".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn SidebarLink<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            div {
                style: "
                    display: flex;
                    align-items: center;
                    gap: 10px;
                    padding: 10px 12px;
                    border-radius: 8px;
                    font-size: 16px;
                    color: #c4c9d6;
                ",
                Icon { icon: icon, style: "width: 20px; height: 20px;" }
                "{label}"
            }
        }
    }
}
