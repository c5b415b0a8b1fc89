//! Error boundaries for rendering failures.
//!
//! Two flavors: the global one wraps whole route trees and offers a way back
//! to the home page; the component one wraps a single widget and lets the
//! user retry in place.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                rsx! {
                    div {
                        style: "
                            display: flex;
                            flex-direction: column;
                            gap: 14px;
                            margin: 40px auto;
                            max-width: 640px;
                            padding: 24px;
                            border: 1px solid #ff6b6b;
                            border-radius: 12px;
                            background-color: #181e2e;
                        ",
                        h1 {
                            style: "color: #ff6b6b; font-size: 30px; margin: 0;",
                            "Something went wrong"
                        }
                        p {
                            style: "color: #c4c9d6; font-size: 16px; margin: 0;",
                            "The {boundary_name} section failed to render."
                        }
                        pre {
                            style: "
                                color: #ffb4b4;
                                font-size: 13px;
                                padding: 12px;
                                border-radius: 8px;
                                background-color: #101522;
                                text-wrap: auto;
                                overflow-y: auto;
                                max-height: 320px;
                            ",
                            "{err:#?}"
                        }
                        a {
                            href: "/",
                            style: "color: #7aa2ff; font-size: 16px;",
                            "Return to the home page"
                        }
                    }
                }
            },
            children
        }
    }
}

/// Wraps a single widget; errors are contained and retryable without tearing
/// down the rest of the page.
#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(e) => format!("{:#?}", e.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "
                                color: #7aa2ff;
                                font-size: 15px;
                                border: 1px solid #7aa2ff;
                                background: transparent;
                                padding: 8px 18px;
                                border-radius: 6px;
                                margin-top: 10px;
                                cursor: pointer;
                            ",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "Try again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                height: "100%",
                {children}
            }
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                width: 100%;
                height: 100%;
                padding: 20px;
                gap: 8px;
            ",

            span {
                style: "color: #ff6b6b; font-size: 20px; font-weight: 600;",
                "This section could not be loaded"
            }

            pre {
                style: "
                    color: #ffb4b4;
                    font-size: 13px;
                    padding: 10px;
                    border: 1px solid #ff6b6b;
                    border-radius: 8px;
                    max-width: 500px;
                    max-height: 360px;
                    overflow-y: auto;
                    text-wrap: auto;
                ",
                "{error_txt}"
            }

            {children}
        }
    }
}
