//! Toast-style notifications for fetch failures and admin actions.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

const TOAST_DURATION_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

/// Context handle for pushing notifications. Toasts dismiss themselves after
/// a few seconds or on click.
#[derive(Clone, Copy)]
pub struct ToastManager {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(ToastKind::Success, text.into());
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(ToastKind::Error, text.into());
    }

    fn push(&mut self, kind: ToastKind, text: String) {
        let id = *self.next_id.peek();
        *self.next_id.write() = id + 1;
        self.toasts.write().push(Toast { id, kind, text });

        let mut toasts = self.toasts;
        spawn(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            toasts.write().retain(|toast| toast.id != id);
        });
    }

    fn dismiss(&mut self, id: u64) {
        self.toasts.write().retain(|toast| toast.id != id);
    }
}

#[component]
pub fn ToastViewport() -> Element {
    let manager = use_context::<ToastManager>();
    let toasts = manager.toasts.read().clone();

    rsx! {
        div {
            id: "x-toast-viewport",
            style: "
                position: fixed;
                top: 16px;
                right: 16px;
                display: flex;
                flex-direction: column;
                gap: 8px;
                z-index: 2000;
            ",
            for toast in toasts {
                ToastCard { key: "{toast.id}", toast }
            }
        }
    }
}

#[component]
fn ToastCard(toast: ReadSignal<Toast>) -> Element {
    let mut manager = use_context::<ToastManager>();
    let toast = toast.read().clone();
    let toast_id = toast.id;

    let background = match toast.kind {
        ToastKind::Success => "#1f7a3d",
        ToastKind::Error => "#a52834",
    };

    rsx! {
        div {
            style: "
                min-width: 260px;
                max-width: 420px;
                padding: 12px 16px;
                border-radius: 8px;
                color: white;
                font-size: 15px;
                cursor: pointer;
                box-shadow: 0 4px 14px rgba(0,0,0,0.35);
                background-color: {background};
            ",
            onclick: move |_| {
                manager.dismiss(toast_id);
            },
            "{toast.text}"
        }
    }
}
