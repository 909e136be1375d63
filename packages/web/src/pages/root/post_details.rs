//! Post detail page

use chrono::Utc;
use dioxus::prelude::*;

use crate::auth::{is_post_owner, owner_only_class, use_auth};
use crate::components::{use_toast, ConfirmationModal, Loader, PostStats, PROFILE_PLACEHOLDER};
use crate::query::{use_get_post_by_id, use_posts_api};
use crate::routes::Route;
use crate::state::{DeleteState, DeleteTarget, DeleteWorkflow};
use crate::types::Post;
use crate::utils::multi_format_date_string;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this post?";

/// Single post with owner-only edit and delete
#[component]
pub fn PostDetails(id: ReadOnlySignal<String>) -> Element {
    let post = use_get_post_by_id(id);

    rsx! {
        div {
            class: "post_details-container",
            match &*post.read_unchecked() {
                None => rsx! { Loader {} },
                Some(Ok(Some(post))) => rsx! {
                    PostDetailsCard { route_id: id(), post: post.clone() }
                },
                Some(Ok(None)) => rsx! {
                    div {
                        class: "post_details-card flex-col items-center justify-center p-10 text-center",
                        p { class: "text-light-3", "This post does not exist or was removed." }
                        Link { to: Route::Home {}, class: "text-primary-500 mt-4", "Back to the feed" }
                    }
                },
                Some(Err(e)) => rsx! {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                        "Error loading post: {e}"
                    }
                },
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct PostDetailsCardProps {
    route_id: String,
    post: Post,
}

#[component]
fn PostDetailsCard(props: PostDetailsCardProps) -> Element {
    let auth = use_auth();
    let api = use_posts_api();
    let toaster = use_toast();
    let navigator = use_navigator();
    let delete_state = use_signal(DeleteState::default);

    let post = &props.post;
    let session_user = auth.user.read().clone();
    let is_owner = is_post_owner(session_user.as_ref(), Some(post));
    let owner_class = owner_only_class(is_owner);
    let created = multi_format_date_string(Some(&post.created_at), Utc::now());
    let creator_image = post
        .creator
        .image_url
        .clone()
        .unwrap_or_else(|| PROFILE_PLACEHOLDER.to_string());

    let handle_delete =
        move |_| DeleteWorkflow::new(&api, &toaster, &navigator, &delete_state).request();

    let cancel_delete =
        move |_| DeleteWorkflow::new(&api, &toaster, &navigator, &delete_state).cancel();

    let confirm_delete = {
        let target = DeleteTarget {
            post_id: props.route_id.clone(),
            image_id: post.image_id.clone(),
        };
        move |_| {
            let target = target.clone();
            spawn(async move {
                DeleteWorkflow::new(&api, &toaster, &navigator, &delete_state)
                    .confirm(&target)
                    .await;
            });
        }
    };

    rsx! {
        div {
            class: "post_details-card",
            img {
                src: "{post.image_url}",
                alt: "post",
                class: "post_details-img"
            }

            div {
                class: "post_details-info",
                div {
                    class: "flex-between w-full",

                    // Creator
                    Link {
                        to: Route::Profile { id: post.creator.id.clone() },
                        class: "flex items-center gap-3",
                        img {
                            src: "{creator_image}",
                            alt: "creator",
                            class: "rounded-full w-8 h-8 lg:w-12 lg:h-12",
                            loading: "lazy"
                        }
                        div {
                            class: "flex flex-col",
                            p { class: "base-medium lg:body-bold text-light-1", "{post.creator.name}" }
                            div {
                                class: "flex gap-1 text-light-3 items-center",
                                p { class: "subtle-semibold lg:small-regular", "{created}" }
                                "-"
                                p {
                                    class: "subtle-semibold lg:small-regular",
                                    {post.location.clone().unwrap_or_default()}
                                }
                            }
                        }
                    }

                    // Owner actions
                    div {
                        class: "flex-center",
                        Link {
                            to: Route::UpdatePost { id: post.id.clone() },
                            class: "{owner_class}",
                            img {
                                src: "/assets/icons/edit.svg",
                                alt: "edit",
                                width: "24",
                                height: "24"
                            }
                        }

                        if delete_state().confirmation.is_shown() {
                            ConfirmationModal {
                                message: DELETE_PROMPT.to_string(),
                                on_confirm: confirm_delete,
                                on_cancel: cancel_delete
                            }
                        }

                        button {
                            class: "ghost_details-delete_btn {owner_class}",
                            disabled: !is_owner || delete_state().deleting,
                            onclick: handle_delete,
                            img {
                                src: "/assets/icons/delete.svg",
                                alt: "delete",
                                width: "24",
                                height: "24"
                            }
                        }
                    }
                }

                hr { class: "border w-full border-dark-4/80" }

                div {
                    class: "flex flex-col flex-1 w-full small-medium lg:base-regular",
                    p { "{post.caption}" }
                    ul {
                        class: "flex gap-1 mt-2",
                        for tag in post.tags.iter() {
                            li { key: "{tag}", class: "text-light-3", "#{tag}" }
                        }
                    }
                }

                div {
                    class: "w-full",
                    PostStats {
                        post: post.clone(),
                        user_id: session_user.as_ref().map(|u| u.id.clone())
                    }
                }
            }
        }
    }
}
