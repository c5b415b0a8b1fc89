//! Single product detail page.

use dioxus::prelude::*;

use common::product::Product;

use crate::api::catalog_api::get_product_details;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::product_components::star_rating::StarRating;
use crate::components::suspend_boundary::SuspendWrapper;


/// View product page
#[component]
pub fn ProductViewPage(product_id: String) -> Element {
    rsx! {
        Title { "Modelcraft - Product" }
        SuspendWrapper {
            ProductDetails { product_id }
        }
    }
}

#[component]
fn ProductDetails(product_id: ReadSignal<String>) -> Element {
    let product = use_resource(move || {
        let id = product_id.read().clone();
        get_product_details(id)
    })
    .suspend()?
    .cloned();
    let product = match product {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(product) => product,
    };

    rsx! {
        div {
            id: "x-product-view",
            style: "
                display: flex;
                flex-direction: row;
                gap: 32px;
                padding: 32px 40px;
                align-items: flex-start;
                flex-wrap: wrap;
            ",

            ProductImageColumn { product: product.clone() }

            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 14px;
                    max-width: 560px;
                ",
                h1 { style: "font-size: 30px; color: #e8eaf0; margin: 0;", "{product.product_name}" }
                div {
                    style: "display: flex; align-items: center; gap: 10px;",
                    StarRating { rating: product.ratings }
                    span { style: "color: #7d8497; font-size: 14px;", {format!("({:.1})", product.ratings)} }
                }
                div {
                    style: "color: #e05252; font-size: 26px; font-weight: 700;",
                    {format!("${:.2}", product.price)}
                }
                if product.stock > 0 {
                    span { style: "color: #57c26b; font-size: 15px;", "In stock ({product.stock})" }
                } else {
                    span { style: "color: #ff6b6b; font-size: 15px;", "Out of stock" }
                }
                p { style: "color: #c4c9d6; font-size: 16px; line-height: 1.6;", "{product.description}" }
                if !product.seller.is_empty() {
                    div {
                        style: "color: #7d8497; font-size: 14px;",
                        "Sold by {product.seller}"
                    }
                }
            }
        }
    }
}

#[component]
fn ProductImageColumn(product: ReadSignal<Product>) -> Element {
    let images = product.read().product_images.clone();
    let mut selected_index = use_signal(|| 0_usize);
    let selected_url = images
        .get(*selected_index.read())
        .or_else(|| images.first())
        .map(|img| img.url.clone());

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 10px; width: 380px;",

            if let Some(url) = selected_url {
                img {
                    src: "{url}",
                    style: "width: 100%; aspect-ratio: 1 / 1; object-fit: cover; border-radius: 12px; border: 1px solid #2a3147;",
                }
            } else {
                div {
                    style: "
                        width: 100%;
                        aspect-ratio: 1 / 1;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 12px;
                        border: 1px solid #2a3147;
                        color: #7d8497;
                    ",
                    "No image"
                }
            }

            if images.len() > 1 {
                div {
                    style: "display: flex; flex-direction: row; gap: 8px; flex-wrap: wrap;",
                    for (i, image) in images.iter().enumerate() {
                        img {
                            key: "{image.public_id}",
                            src: "{image.url}",
                            style: "width: 64px; height: 64px; object-fit: cover; border-radius: 6px; border: 1px solid #394157; cursor: pointer;",
                            onclick: move |_| {
                                selected_index.set(i);
                            },
                        }
                    }
                }
            }
        }
    }
}
