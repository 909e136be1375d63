//! Layout for signed-in pages

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::routes::Route;
use super::{Loader, TopBar};

/// Wraps every page that needs a session; visitors go to sign in
#[component]
pub fn RootLayout() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let loading = *auth.loading.read();
    let authenticated = auth.is_authenticated();

    use_effect(move || {
        if !*auth.loading.read() && !auth.is_authenticated() {
            navigator.replace(Route::SignIn {});
        }
    });

    if loading || !authenticated {
        return rsx! {
            div {
                class: "min-h-screen flex items-center justify-center bg-dark-1",
                Loader {}
            }
        };
    }

    rsx! {
        div {
            class: "w-full min-h-screen bg-dark-1 text-light-1",
            TopBar {}
            main {
                class: "flex flex-1 h-full",
                Outlet::<Route> {}
            }
        }
    }
}
