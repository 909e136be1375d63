//! Root application component

use dioxus::prelude::*;

use crate::auth::AuthProvider;
use crate::components::ToastProvider;
use crate::query::QueryProvider;
use crate::routes::Route;

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/main.css") }

        // Query cache, session and toasts wrap the router
        QueryProvider {
            AuthProvider {
                ToastProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}
