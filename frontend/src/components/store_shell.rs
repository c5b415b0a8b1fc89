//! Storefront layout: top navigation header around the routed pages.

use dioxus::prelude::*;

use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::{MdDashboard, MdExitToApp, MdStore};
use dioxus_free_icons::icons::md_social_icons::MdPerson;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::data_definitions::session::SessionState;
use crate::routes::Route;


/// Shared storefront shell: header on top, current page below.
#[component]
pub fn StoreShell() -> Element {
    rsx! {
        div {
            id: "x-store-container",
            style: "
                display: flex;
                flex-direction: column;
                width: 100%;
                min-height: 100vh;
            ",

            StoreHeader {}

            div {
                id: "x-page-container",
                style: "flex-grow: 1; min-height: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "StoreShell".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn StoreHeader() -> Element {
    let session = use_context::<SessionState>();
    let user = session.user();

    rsx! {
        div {
            id: "x-store-header",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 28px;
                height: 64px;
                padding: 0 28px;
                background-color: #181e2e;
                border-bottom: 1px solid #2a3147;
            ",

            Link {
                to: Route::HomePage {},
                div {
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 8px;
                        font-size: 22px;
                        font-weight: 600;
                        color: #e8eaf0;
                    ",
                    Icon { icon: MdStore, style: "width: 26px; height: 26px; color: #e05252;" }
                    "Modelcraft"
                }
            }

            Link {
                to: Route::products_page(),
                span { style: "font-size: 16px; color: #c4c9d6;", "Products" }
            }

            // push the account area to the right
            div { style: "flex-grow: 1;" }

            if let Some(user) = user {
                if user.is_staff() {
                    Link {
                        to: Route::AdminDashboardPage {},
                        span {
                            style: "display: flex; align-items: center; gap: 6px; font-size: 16px; color: #c4c9d6;",
                            Icon { icon: MdDashboard, style: "width: 20px; height: 20px;" }
                            "Admin"
                        }
                    }
                }
                span {
                    style: "display: flex; align-items: center; gap: 6px; font-size: 16px; color: #e8eaf0;",
                    Icon { icon: MdPerson, style: "width: 20px; height: 20px;" }
                    "{user.name}"
                }
                SignOutButton {}
            } else {
                Link {
                    to: Route::LoginPage {},
                    span { style: "font-size: 16px; color: #c4c9d6;", "Login" }
                }
                Link {
                    to: Route::RegisterPage {},
                    span { style: "font-size: 16px; color: #c4c9d6;", "Register" }
                }
            }
        }
    }
}

#[component]
fn SignOutButton() -> Element {
    let mut session = use_context::<SessionState>();

    rsx! {
        button {
            style: "
                display: flex;
                align-items: center;
                gap: 6px;
                background: transparent;
                border: 1px solid #394157;
                border-radius: 6px;
                color: #c4c9d6;
                font-size: 14px;
                padding: 6px 10px;
                cursor: pointer;
            ",
            onclick: move |_| {
                session.set(None);
                navigator().push(Route::HomePage {});
            },
            Icon { icon: MdExitToApp, style: "width: 18px; height: 18px;" }
            "Sign out"
        }
    }
}
