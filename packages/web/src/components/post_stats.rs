//! Like counter under a post

use dioxus::prelude::*;

use crate::components::use_toast;
use crate::query::use_posts_api;
use crate::state::{Notifier, Toast};
use crate::types::Post;
use crate::utils::toggle_like;

/// Like ids for the post currently on screen
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LikeState {
    post_id: String,
    likes: Vec<String>,
}

impl LikeState {
    /// Replace everything with what `post` says
    pub fn follow(&mut self, post: &Post) {
        self.post_id = post.id.clone();
        self.likes = post.like_ids();
    }

    /// Set likes for `post_id`; dropped if another post is shown by now
    pub fn settle(&mut self, post_id: &str, likes: Vec<String>) {
        if self.post_id == post_id {
            self.likes = likes;
        }
    }

    pub fn is_liked_by(&self, user_id: &str) -> bool {
        self.likes.iter().any(|id| id == user_id)
    }

    pub fn count(&self) -> usize {
        self.likes.len()
    }
}

#[component]
pub fn PostStats(post: ReadOnlySignal<Post>, user_id: ReadOnlySignal<Option<String>>) -> Element {
    let api = use_posts_api();
    let toaster = use_toast();
    let mut state = use_signal(LikeState::default);
    let mut is_pending = use_signal(|| false);

    // Re-run whenever the parent hands over another post
    use_effect(move || {
        let post = post.read();
        state.write().follow(&post);
        is_pending.set(false);
    });

    let is_liked = user_id
        .read()
        .as_deref()
        .is_some_and(|id| state.read().is_liked_by(id));
    let count = state.read().count();

    let handle_like = move |_| {
        let Some(user_id) = user_id() else {
            return;
        };
        if is_pending() {
            return;
        }

        let post_id = post.read().id.clone();
        let previous = state.read().likes.clone();
        state
            .write()
            .settle(&post_id, toggle_like(&previous, &user_id));
        is_pending.set(true);

        spawn(async move {
            match api.toggle_like(&post_id).await {
                Ok(updated) => state.write().settle(&updated.id, updated.like_ids()),
                Err(e) => {
                    state.write().settle(&post_id, previous);
                    toaster.notify(Toast::error("Could not update like", e.to_string()));
                }
            }
            is_pending.set(false);
        });
    };

    rsx! {
        div {
            class: "flex justify-between items-center z-20",
            div {
                class: "flex gap-2 mr-5",
                button {
                    class: "cursor-pointer",
                    disabled: user_id.read().is_none() || is_pending(),
                    onclick: handle_like,
                    img {
                        src: if is_liked { "/assets/icons/liked.svg" } else { "/assets/icons/like.svg" },
                        alt: "like",
                        width: "20",
                        height: "20"
                    }
                }
                p { class: "small-medium lg:base-medium", "{count}" }
            }
        }
    }
}
