use dioxus::prelude::*;

use crate::api::auth_api::current_user;
use crate::components::error_boundary::GlobalErrorBoundary;
use crate::components::toast::{ToastManager, ToastViewport};
use crate::data_definitions::session::{SessionState, reconcile_session};
use crate::routes::Route;
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    use_context_provider(ToastManager::new);
    let mut session = use_context_provider(SessionState::new);
    // pick up a session left in local storage by a previous visit; the
    // stored token may have been revoked since, so revalidate it
    use_effect(move || {
        let Some(stored) = session.restore() else {
            return;
        };
        spawn(async move {
            let verified = current_user(stored.token.clone()).await;
            session.set(reconcile_session(stored, verified));
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ToastViewport {}
        GlobalErrorBoundary {
            boundary_name: "App".to_string(),
            Router::<Route> {}
        }
    }
}
