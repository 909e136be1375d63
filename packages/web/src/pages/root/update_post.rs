//! Edit caption, location and tags of an existing post

use dioxus::prelude::*;

use crate::auth::{is_post_owner, use_auth};
use crate::components::{use_toast, Loader};
use crate::query::{use_get_post_by_id, use_posts_api};
use crate::routes::Route;
use crate::state::{Notifier, Toast};
use crate::types::Post;
use crate::utils::parse_tags;

#[component]
pub fn UpdatePost(id: ReadOnlySignal<String>) -> Element {
    let post = use_get_post_by_id(id);

    rsx! {
        div {
            class: "flex flex-1 flex-col gap-10 py-10 px-5 md:px-8 lg:p-14",
            h2 { class: "h3-bold md:h2-bold text-left w-full", "Edit Post" }

            match &*post.read_unchecked() {
                None => rsx! { Loader {} },
                Some(Ok(Some(post))) => rsx! {
                    EditPostForm { post: post.clone() }
                },
                Some(Ok(None)) => rsx! {
                    p { class: "text-light-3", "This post does not exist or was removed." }
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
struct EditPostFormProps {
    post: Post,
}

#[component]
fn EditPostForm(props: EditPostFormProps) -> Element {
    let auth = use_auth();
    let api = use_posts_api();
    let toaster = use_toast();
    let navigator = use_navigator();

    let mut caption = use_signal(|| props.post.caption.clone());
    let mut location = use_signal(|| props.post.location.clone().unwrap_or_default());
    let mut tags = use_signal(|| props.post.tags.join(","));
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    if !is_post_owner(auth.user.read().as_ref(), Some(&props.post)) {
        return rsx! {
            p { class: "text-light-3", "Only the creator can edit this post." }
        };
    }

    let post_id = props.post.id.clone();
    let handle_submit = move |_| {
        let post_id = post_id.clone();
        spawn(async move {
            is_pending.set(true);
            error.set(None);

            match api
                .update(&post_id, caption(), location(), parse_tags(&tags()))
                .await
            {
                Ok(post) => {
                    toaster.notify(Toast::success("Post updated"));
                    navigator.push(Route::PostDetails { id: post.id });
                }
                Err(e) => error.set(Some(e.to_string())),
            }

            is_pending.set(false);
        });
    };

    rsx! {
        form {
            class: "flex flex-col gap-9 w-full max-w-5xl",
            onsubmit: handle_submit,

            img {
                src: "{props.post.image_url}",
                alt: "post",
                class: "max-h-80 rounded-2xl object-cover"
            }

            if let Some(err) = error() {
                div {
                    class: "p-3 bg-orange-50 border border-orange-200 text-orange-800 rounded text-sm",
                    "{err}"
                }
            }

            label {
                class: "shad-form_label flex flex-col gap-2",
                "Caption"
                textarea {
                    class: "shad-textarea custom-scrollbar",
                    value: "{caption}",
                    oninput: move |e| caption.set(e.value()),
                    disabled: is_pending()
                }
            }
            label {
                class: "shad-form_label flex flex-col gap-2",
                "Add Location"
                input {
                    r#type: "text",
                    class: "shad-input",
                    value: "{location}",
                    oninput: move |e| location.set(e.value()),
                    disabled: is_pending()
                }
            }
            label {
                class: "shad-form_label flex flex-col gap-2",
                "Add Tags (separated by comma \" , \")"
                input {
                    r#type: "text",
                    class: "shad-input",
                    placeholder: "Art, Expression, Learn",
                    value: "{tags}",
                    oninput: move |e| tags.set(e.value()),
                    disabled: is_pending()
                }
            }

            div {
                class: "flex gap-4 items-center justify-end",
                button {
                    r#type: "button",
                    class: "shad-button_dark_4 px-4 py-2 rounded",
                    onclick: move |_| navigator.go_back(),
                    "Cancel"
                }
                button {
                    r#type: "submit",
                    class: "shad-button_primary px-4 py-2 rounded whitespace-nowrap disabled:opacity-50",
                    disabled: is_pending(),
                    if is_pending() { "Saving..." } else { "Update Post" }
                }
            }
        }
    }
}
