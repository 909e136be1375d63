//! Sign in page

use dioxus::prelude::*;

use crate::auth::{sign_in, use_auth};
use crate::routes::Route;

#[component]
pub fn SignIn() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    // Already signed in
    use_effect(move || {
        if !*auth.loading.read() && auth.is_authenticated() {
            navigator.replace(Route::Home {});
        }
    });

    let handle_sign_in = move |_| {
        let address = email().trim().to_string();
        let p = password();

        if address.is_empty() || p.is_empty() {
            error.set(Some("Please enter your email and password".to_string()));
            return;
        }

        spawn(async move {
            is_pending.set(true);
            error.set(None);

            match sign_in(address, p).await {
                Ok(_) => {
                    // Refresh auth state and redirect
                    auth.refresh().await;
                    navigator.push(Route::Home {});
                }
                Err(e) => error.set(Some(e.to_string())),
            }

            is_pending.set(false);
        });
    };

    rsx! {
        div {
            class: "min-h-screen bg-dark-1 text-light-1 flex items-center justify-center px-4",

            div {
                class: "sm:w-420 flex-center flex-col w-full max-w-md",

                div {
                    class: "mb-6 text-center",
                    h1 { class: "h3-bold md:h2-bold pt-5 sm:pt-12", "Log in to your account" }
                    p { class: "text-light-3 small-medium md:base-regular mt-2", "Welcome back! Please enter your details." }
                }

                if let Some(err) = error() {
                    div {
                        class: "mb-4 p-3 bg-orange-50 border border-orange-200 text-orange-800 rounded text-sm w-full",
                        "{err}"
                    }
                }

                form {
                    class: "flex flex-col gap-5 w-full mt-4",
                    onsubmit: handle_sign_in,
                    label {
                        class: "shad-form_label flex flex-col gap-2",
                        "Email"
                        input {
                            r#type: "email",
                            class: "shad-input",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                            disabled: is_pending()
                        }
                    }
                    label {
                        class: "shad-form_label flex flex-col gap-2",
                        "Password"
                        input {
                            r#type: "password",
                            class: "shad-input",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                            disabled: is_pending()
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "shad-button_primary py-2 rounded disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: is_pending(),
                        if is_pending() { "Signing in..." } else { "Log in" }
                    }
                }
            }
        }
    }
}
