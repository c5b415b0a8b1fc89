//! Registration page.

use dioxus::prelude::*;

use crate::api::auth_api::register;
use crate::components::toast::ToastManager;
use crate::data_definitions::session::SessionState;
use crate::pages::login_page::{AuthFormFrame, AuthTextInput};
use crate::routes::Route;


/// Register page
#[component]
pub fn RegisterPage() -> Element {
    let mut name = use_signal(String::new);
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
        let name = name.peek().clone();
        let email = email.peek().clone();
        let password = password.peek().clone();
        spawn(async move {
            match register(name, email, password).await {
                Ok(auth) => {
                    session.set(Some(auth));
                    toasts.success("Account created.");
                    navigator().push(Route::HomePage {});
                }
                Err(e) => {
                    toasts.error(format!("Registration failed: {}", e));
                }
            }
            is_submitting.set(false);
        });
    };

    rsx! {
        Title { "Modelcraft - Register" }
        AuthFormFrame {
            heading: "Create an account".to_string(),

            AuthTextInput {
                label: "Name".to_string(),
                input_type: "text".to_string(),
                value: name,
                on_input: move |v| name.set(v),
            }
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
                if is_submitting() { "Creating..." } else { "Create account" }
            }

            div {
                style: "font-size: 14px; color: #7d8497;",
                "Already registered? "
                Link {
                    to: Route::LoginPage {},
                    span { style: "color: #7aa2ff;", "Sign in" }
                }
            }
        }
    }
}
