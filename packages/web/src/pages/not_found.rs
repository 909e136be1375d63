use dioxus::prelude::*;

use crate::routes::Route;

/// Fallback for unknown paths
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "min-h-screen flex flex-col items-center justify-center gap-4 bg-dark-1 text-light-1",
            h1 { class: "text-2xl font-bold", "Page not found" }
            p { class: "text-light-3", "Nothing lives at /{path}" }
            Link { to: Route::Home {}, class: "text-primary-500", "Back to the feed" }
        }
    }
}
