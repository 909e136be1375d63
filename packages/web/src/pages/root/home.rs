//! Home feed

use dioxus::prelude::*;

use crate::components::{Loader, PostCard};
use crate::posts::get_recent_posts;

/// Newest posts as an image grid
#[component]
pub fn Home() -> Element {
    let posts = use_server_future(get_recent_posts)?;

    rsx! {
        div {
            class: "flex flex-col flex-1 items-center gap-10 py-10 px-5 md:px-8 lg:p-14",
            h2 { class: "h3-bold md:h2-bold text-left w-full", "Home Feed" }

            match &*posts.read_unchecked() {
                Some(Ok(posts)) if !posts.is_empty() => rsx! {
                    ul {
                        class: "grid-container",
                        for post in posts.iter() {
                            li {
                                key: "{post.id}",
                                class: "relative min-w-80 h-80",
                                PostCard {
                                    id: post.id.clone(),
                                    image_url: post.image_url.clone(),
                                    caption: post.caption.clone()
                                }
                            }
                        }
                    }
                },
                Some(Ok(_)) => rsx! {
                    p { class: "text-light-4 mt-10 text-center w-full", "No posts yet." }
                },
                Some(Err(e)) => rsx! {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                        "Error loading posts: {e}"
                    }
                },
                None => rsx! { Loader {} }
            }
        }
    }
}
