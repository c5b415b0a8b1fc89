//! Suspense plumbing around async page content.

use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

/// Suspense plus error boundary in one wrapper; pages put their resource
/// reads inside and get the loading and failure states for free.
#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_ctx: SuspenseContext| rsx! {
                div {
                    style: "
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 100%;
                        height: 100%;
                        min-height: 200px;
                    ",
                    LoadingIndicator {}
                }
            },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            style: "
                color: #7d8497;
                font-size: 18px;
                border: 1px solid #394157;
                border-radius: 8px;
                padding: 12px 22px;
            ",
            "Loading..."
        }
    }
}
