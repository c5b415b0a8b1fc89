//! Admin image management for a single product.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use dioxus::prelude::*;

use crate::api::admin_api::{delete_product_image, upload_product_images};
use crate::api::catalog_api::get_product_details;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::suspend_boundary::SuspendWrapper;
use crate::components::toast::ToastManager;
use crate::data_definitions::session::SessionState;
use crate::routes::Route;


/// Admin product images page
#[component]
pub fn AdminProductImagesPage(product_id: String) -> Element {
    rsx! {
        Title { "Modelcraft - Admin Product Images" }
        SuspendWrapper {
            ProductImagesEditor { product_id }
        }
    }
}

fn mime_for(file_name: &str) -> &'static str {
    match file_name.rsplit('.').next() {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "image/jpeg",
    }
}

#[component]
fn ProductImagesEditor(product_id: ReadSignal<String>) -> Element {
    let session = use_context::<SessionState>();
    let mut toasts = use_context::<ToastManager>();
    let token = session.token().unwrap_or_default();

    let mut product = use_resource(move || {
        let id = product_id.read().clone();
        get_product_details(id)
    });
    let loaded = product.suspend()?.cloned();
    let loaded = match loaded {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(product) => product,
    };

    // data URLs staged for upload
    let mut pending = use_signal(Vec::<String>::new);
    let mut is_uploading = use_signal(|| false);

    let read_selected_files = move |evt: FormEvent| {
        let files = evt.files();
        spawn(async move {
            for file in files {
                let name = file.name();
                match file.read_bytes().await {
                    Ok(bytes) => {
                        let data_url =
                            format!("data:{};base64,{}", mime_for(&name), STANDARD.encode(&bytes));
                        pending.write().push(data_url);
                    }
                    Err(e) => {
                        toasts.error(format!("Could not read {}: {}", name, e));
                    }
                }
            }
        });
    };

    let upload_token = token.clone();
    let upload = move |_| {
        if *is_uploading.peek() || pending.peek().is_empty() {
            return;
        }
        is_uploading.set(true);
        let token = upload_token.clone();
        let id = product_id.peek().clone();
        let images = pending.peek().clone();
        spawn(async move {
            match upload_product_images(token, id, images).await {
                Ok(message) => {
                    pending.set(Vec::new());
                    toasts.success(message);
                    navigator().push(Route::AdminProductsPage {});
                }
                Err(e) => {
                    toasts.error(format!("Upload failed: {}", e));
                }
            }
            is_uploading.set(false);
        });
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 20px; max-width: 720px;",

            div {
                h1 { style: "font-size: 26px; color: #e8eaf0; margin: 0;", "Images" }
                p {
                    style: "font-size: 15px; color: #7d8497; margin: 4px 0 0 0;",
                    "{loaded.product_name}"
                }
            }

            div {
                style: "display: flex; flex-direction: column; gap: 10px;",
                h2 { style: "font-size: 17px; color: #e8eaf0; margin: 0;", "Current images" }
                if loaded.product_images.is_empty() {
                    div { style: "color: #7d8497; font-size: 14px;", "This product has no images yet." }
                }
                div {
                    style: "display: flex; flex-direction: row; gap: 12px; flex-wrap: wrap;",
                    for image in loaded.product_images.iter().cloned() {
                        ExistingImageCard {
                            key: "{image.public_id}",
                            url: image.url.clone(),
                            on_delete: {
                                let token = token.clone();
                                let public_id = image.public_id.clone();
                                move |_| {
                                    let token = token.clone();
                                    let public_id = public_id.clone();
                                    let id = product_id.peek().clone();
                                    spawn(async move {
                                        match delete_product_image(token, id, public_id).await {
                                            Ok(message) => {
                                                toasts.success(message);
                                                product.restart();
                                            }
                                            Err(e) => {
                                                toasts.error(format!("Delete failed: {}", e));
                                            }
                                        }
                                    });
                                }
                            },
                        }
                    }
                }
            }

            div {
                style: "display: flex; flex-direction: column; gap: 10px;",
                h2 { style: "font-size: 17px; color: #e8eaf0; margin: 0;", "Upload new images" }
                input {
                    r#type: "file",
                    accept: "image/*",
                    multiple: true,
                    style: "color: #c4c9d6; font-size: 14px;",
                    onchange: read_selected_files,
                }

                if !pending.read().is_empty() {
                    div {
                        style: "display: flex; flex-direction: row; gap: 12px; flex-wrap: wrap;",
                        for (i, data_url) in pending.read().iter().enumerate() {
                            div {
                                key: "{i}",
                                style: "display: flex; flex-direction: column; gap: 4px;",
                                img {
                                    src: "{data_url}",
                                    style: "width: 96px; height: 96px; object-fit: cover; border-radius: 8px; border: 1px solid #394157;",
                                }
                                button {
                                    style: "border: none; background: transparent; color: #ff6b6b; font-size: 13px; cursor: pointer;",
                                    onclick: move |_| {
                                        pending.write().remove(i);
                                    },
                                    "Remove"
                                }
                            }
                        }
                    }
                }

                button {
                    style: "
                        width: 160px;
                        padding: 10px 0;
                        border: none;
                        border-radius: 8px;
                        background-color: #e05252;
                        color: white;
                        font-size: 15px;
                        font-weight: 600;
                        cursor: pointer;
                    ",
                    disabled: is_uploading() || pending.read().is_empty(),
                    onclick: upload,
                    if is_uploading() { "Uploading..." } else { "Upload" }
                }
            }
        }
    }
}

#[component]
fn ExistingImageCard(url: String, on_delete: Callback<()>) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px;",
            img {
                src: "{url}",
                style: "width: 96px; height: 96px; object-fit: cover; border-radius: 8px; border: 1px solid #394157;",
            }
            button {
                style: "border: none; background: transparent; color: #ff6b6b; font-size: 13px; cursor: pointer;",
                onclick: move |_| {
                    on_delete.call(());
                },
                "Delete"
            }
        }
    }
}
