//! Profile page

use dioxus::prelude::*;

use crate::components::{Loader, PostCard, PROFILE_PLACEHOLDER};
use crate::posts::get_user_profile;

#[component]
pub fn Profile(id: ReadOnlySignal<String>) -> Element {
    let profile = use_server_future(move || get_user_profile(id()))?;

    rsx! {
        div {
            class: "profile-container",
            match &*profile.read_unchecked() {
                Some(Ok(Some(user))) => rsx! {
                    div {
                        class: "profile-inner_container flex items-center gap-8",
                        img {
                            src: user.image_url.clone().unwrap_or_else(|| PROFILE_PLACEHOLDER.to_string()),
                            alt: "profile",
                            class: "w-28 h-28 lg:h-36 lg:w-36 rounded-full"
                        }
                        div {
                            class: "flex flex-col",
                            h1 { class: "h3-bold md:h1-semibold", "{user.name}" }
                            p { class: "small-regular md:body-medium text-light-3", "@{user.username}" }
                            p { class: "text-light-2 small-medium mt-2", "{user.posts.len()} posts" }
                            if let Some(bio) = &user.bio {
                                p { class: "small-medium md:base-medium mt-7 max-w-screen-sm", "{bio}" }
                            }
                        }
                    }
                    ul {
                        class: "grid-container mt-10",
                        for post in user.posts.iter() {
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
                Some(Ok(None)) => rsx! {
                    p { class: "text-light-3 p-10", "This profile does not exist." }
                },
                Some(Err(e)) => rsx! {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                        "Error loading profile: {e}"
                    }
                },
                None => rsx! { Loader {} }
            }
        }
    }
}
