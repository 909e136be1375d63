//! Top navigation bar

use dioxus::prelude::*;

use crate::auth::{sign_out, use_auth};
use crate::query::use_query_client;
use crate::routes::Route;

#[component]
pub fn TopBar() -> Element {
    let auth = use_auth();
    let queries = use_query_client();
    let navigator = use_navigator();

    let handle_sign_out = move |_| {
        spawn(async move {
            match sign_out().await {
                Ok(()) => {
                    auth.clear();
                    queries.clear();
                    navigator.push(Route::SignIn {});
                }
                Err(e) => tracing::warn!(error = %e, "sign out failed"),
            }
        });
    };

    rsx! {
        nav {
            class: "topbar sticky top-0 z-40 bg-dark-2 w-full px-5 py-4",
            div {
                class: "flex items-center justify-between",
                Link {
                    to: Route::Home {},
                    class: "text-xl font-bold text-primary-500",
                    "Snapgram"
                }
                div {
                    class: "flex items-center gap-4",
                    if let Some(user) = auth.user.read().as_ref() {
                        Link {
                            to: Route::Profile { id: user.id.clone() },
                            class: "flex items-center gap-2",
                            img {
                                src: user.image_url.clone().unwrap_or_else(|| PROFILE_PLACEHOLDER.to_string()),
                                alt: "profile",
                                class: "h-8 w-8 rounded-full"
                            }
                        }
                    }
                    button {
                        class: "text-sm text-light-3 hover:text-light-1 px-3 py-1.5 rounded",
                        onclick: handle_sign_out,
                        "Sign out"
                    }
                }
            }
        }
    }
}

pub const PROFILE_PLACEHOLDER: &str = "/assets/icons/profile-placeholder.svg";
