use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdSearch;

use crate::api::catalog_api::get_products;
use crate::components::product_components::product_grid::ProductGrid;
use crate::components::suspend_boundary::SuspendWrapper;
use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Modelcraft - Home" }
        div {
            id: "x-home-container",
            style: "
                display: flex;
                flex-direction: column;
                gap: 24px;
                width: 100%;
                padding: 36px 40px;
            ",

            MainTitle {}
            SubText {}
            SearchRow {}

            div {
                h2 { style: "font-size: 24px; color: #e8eaf0; margin: 12px 0;", "Latest Kits" }
                SuspendWrapper {
                    FeaturedProducts {}
                }
            }
        }
    }
}


#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                align-items: center;
                gap: 8px;
                font-size: 42px;
                font-weight: 600;
                letter-spacing: -0.02em;
                color: #e8eaf0;
            ",
            span { "Welcome to" }
            span { style: "color: #e05252;", "Modelcraft" }
        }
    }
}

#[component]
fn SubText() -> Element {
    rsx! {
        div {
            style: "
                color: #c4c9d6;
                font-size: 22px;
                line-height: 1.6;
                max-width: 640px;
            ",
            "Build kits from your favorite designers and collections. Browse the catalog, filter by skill level, and find the next model for your bench."
        }
    }
}

#[component]
fn SearchRow() -> Element {
    let mut search_q = use_signal(String::new);

    rsx! {
        div {
            style: "
                display: flex;
                align-items: center;
                gap: 10px;
                background-color: #181e2e;
                border: 1px solid #394157;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 44px;
                max-width: 460px;
            ",
            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color: #7d8497;" }
            input {
                r#type: "text",
                placeholder: "Search the catalog",
                style: "
                    flex: 1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #e8eaf0;
                    font-size: 15px;
                ",
                oninput: move |e| {
                    *search_q.write() = e.value();
                },
                onkeypress: move |e| {
                    if e.key() == Key::Enter {
                        e.prevent_default();
                        navigator().push(Route::ProductsPage {
                            search: format!("keyword={}", search_q.read().clone()),
                        });
                    }
                },
            }
        }
    }
}

#[component]
fn FeaturedProducts() -> Element {
    let products = use_resource(move || get_products(String::new()))
        .suspend()?
        .cloned();
    let products = match products {
        Err(e) => {
            return rsx! {
                crate::components::error_boundary::ComponentErrorDisplay { error_txt: format!("{:#?}", e) }
            };
        }
        Ok(products) => products,
    };
    // only a teaser row on the home page
    let featured: Vec<_> = products.into_iter().take(4).collect();

    rsx! {
        ProductGrid { products: featured }
        div {
            style: "display: flex; justify-content: center; padding: 18px 0;",
            Link {
                to: Route::products_page(),
                span {
                    style: "
                        padding: 10px 24px;
                        border-radius: 8px;
                        background-color: #e05252;
                        color: white;
                        font-size: 15px;
                        font-weight: 600;
                    ",
                    "View All Products"
                }
            }
        }
    }
}
