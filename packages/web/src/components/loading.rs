//! Loading components

use dioxus::prelude::*;

/// Centered spinner used while a query is pending
#[component]
pub fn Loader() -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center w-full py-10",
            div {
                class: "flex space-x-2",
                div { class: "w-3 h-3 bg-primary-500 rounded-full animate-bounce" }
                div { class: "w-3 h-3 bg-primary-500 rounded-full animate-bounce", style: "animation-delay: 0.1s" }
                div { class: "w-3 h-3 bg-primary-500 rounded-full animate-bounce", style: "animation-delay: 0.2s" }
            }
            p { class: "mt-4 text-sm text-light-3", "Loading..." }
        }
    }
}
