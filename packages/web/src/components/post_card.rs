//! Post thumbnail for grids

use dioxus::prelude::*;

use crate::routes::Route;

#[derive(Props, Clone, PartialEq)]
pub struct PostCardProps {
    pub id: String,
    pub image_url: String,
    pub caption: String,
}

/// Square image tile linking to the post detail page
#[component]
pub fn PostCard(props: PostCardProps) -> Element {
    rsx! {
        Link {
            to: Route::PostDetails { id: props.id.clone() },
            class: "grid-post_link block relative rounded-2xl overflow-hidden",
            img {
                src: "{props.image_url}",
                alt: "post",
                class: "h-full w-full object-cover aspect-square",
                loading: "lazy"
            }
            if !props.caption.is_empty() {
                p {
                    class: "absolute bottom-0 w-full p-3 bg-gradient-to-t from-dark-1 text-sm line-clamp-1",
                    "{props.caption}"
                }
            }
        }
    }
}
