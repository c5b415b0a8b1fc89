//! Login page.

use dioxus::prelude::*;

use crate::api::auth_api::login;
use crate::components::toast::ToastManager;
use crate::data_definitions::session::SessionState;
use crate::routes::Route;


/// Login page
#[component]
pub fn LoginPage() -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut is_submitting = use_signal(|| false);

    let mut session = use_context::<SessionState>();
    let mut toasts = use_context::<ToastManager>();

    let submit = move |_| {
        if *is_submitting.peek() {
            return;
        }
        is_submitting.set(true);
        let email = email.peek().clone();
        let password = password.peek().clone();
        spawn(async move {
            match login(email, password).await {
                Ok(auth) => {
                    let is_staff = auth.user.is_staff();
                    session.set(Some(auth));
                    toasts.success("Welcome back!");
                    if is_staff {
                        navigator().push(Route::AdminDashboardPage {});
                    } else {
                        navigator().push(Route::HomePage {});
                    }
                }
                Err(e) => {
                    toasts.error(format!("Login failed: {}", e));
                }
            }
            is_submitting.set(false);
        });
    };

    rsx! {
        Title { "Modelcraft - Login" }
        AuthFormFrame {
            heading: "Sign in".to_string(),

            AuthTextInput {
                label: "Email".to_string(),
                input_type: "email".to_string(),
                value: email,
                on_input: move |v| email.set(v),
            }
            AuthTextInput {
                label: "Password".to_string(),
                input_type: "password".to_string(),
                value: password,
                on_input: move |v| password.set(v),
            }

            button {
                style: "
                    margin-top: 8px;
                    padding: 10px 0;
                    border: none;
                    border-radius: 8px;
                    background-color: #e05252;
                    color: white;
                    font-size: 16px;
                    font-weight: 600;
                    cursor: pointer;
                ",
                disabled: is_submitting(),
                onclick: submit,
                if is_submitting() { "Signing in..." } else { "Sign in" }
            }

            div {
                style: "font-size: 14px; color: #7d8497;",
                "New here? "
                Link {
                    to: Route::RegisterPage {},
                    span { style: "color: #7aa2ff;", "Create an account" }
                }
            }
        }
    }
}

#[component]
pub fn AuthFormFrame(heading: String, children: Element) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                align-items: center;
                justify-content: center;
                min-height: calc(100vh - 64px);
            ",
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 14px;
                    width: 380px;
                    padding: 28px;
                    background-color: #181e2e;
                    border: 1px solid #2a3147;
                    border-radius: 12px;
                ",
                h1 { style: "font-size: 24px; color: #e8eaf0; margin: 0;", "{heading}" }
                {children}
            }
        }
    }
}

#[component]
pub fn AuthTextInput(
    label: String,
    input_type: String,
    value: ReadSignal<String>,
    on_input: Callback<String>,
) -> Element {
    rsx! {
        label {
            style: "display: flex; flex-direction: column; gap: 6px; font-size: 14px; color: #c4c9d6;",
            "{label}"
            input {
                r#type: "{input_type}",
                value: "{value}",
                style: "
                    padding: 10px 12px;
                    border: 1px solid #394157;
                    border-radius: 6px;
                    background-color: #101522;
                    color: #e8eaf0;
                    font-size: 15px;
                    outline: none;
                ",
                oninput: move |e| {
                    on_input.call(e.value());
                },
            }
        }
    }
}
