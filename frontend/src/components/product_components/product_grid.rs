//! Product grid and card presentation.

use dioxus::prelude::*;

use common::product::Product;

use crate::components::product_components::star_rating::StarRating;
use crate::routes::Route;

#[component]
pub fn ProductGrid(products: ReadSignal<Vec<Product>>) -> Element {
    let products = products.read().clone();

    if products.is_empty() {
        return rsx! {
            div {
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 60px 20px;
                    font-size: 18px;
                    color: #7d8497;
                ",
                "No products match the selected filters."
            }
        };
    }

    rsx! {
        div {
            id: "x-product-grid",
            style: "
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(230px, 1fr));
                gap: 18px;
                width: 100%;
            ",
            for product in products {
                ProductCard { key: "{product._id}", product }
            }
        }
    }
}

#[component]
fn ProductCard(product: ReadSignal<Product>) -> Element {
    let product = product.read().clone();
    let product_id = product._id.clone();

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                background-color: #181e2e;
                border: 1px solid #2a3147;
                border-radius: 12px;
                overflow: hidden;
            ",

            if let Some(url) = product.first_image_url() {
                img {
                    src: "{url}",
                    alt: "{product.product_name}",
                    style: "width: 100%; aspect-ratio: 1 / 1; object-fit: cover;",
                }
            } else {
                div {
                    style: "
                        width: 100%;
                        aspect-ratio: 1 / 1;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background-color: #11162233;
                        color: #7d8497;
                        font-size: 14px;
                    ",
                    "No image"
                }
            }

            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 8px;
                    padding: 12px;
                    flex-grow: 1;
                ",
                div {
                    style: "font-size: 16px; font-weight: 600; color: #e8eaf0; min-height: 40px;",
                    "{product.product_name}"
                }
                div {
                    style: "
                        display: flex;
                        flex-direction: row;
                        align-items: center;
                        justify-content: space-between;
                        margin-top: auto;
                    ",
                    span {
                        style: "color: #e05252; font-size: 18px; font-weight: 700;",
                        {format!("${:.2}", product.price)}
                    }
                    StarRating { rating: product.ratings }
                }
                button {
                    style: "
                        margin-top: 6px;
                        padding: 8px 0;
                        border: none;
                        border-radius: 6px;
                        background-color: #e05252;
                        color: white;
                        font-size: 14px;
                        font-weight: 600;
                        cursor: pointer;
                    ",
                    onclick: move |_| {
                        navigator().push(Route::ProductViewPage {
                            product_id: product_id.clone(),
                        });
                    },
                    "View Details"
                }
            }
        }
    }
}
