//! Data hooks used by pages

use dioxus::prelude::*;

use super::use_query_client;
use crate::posts::{PostRepository, PostsApi, RepositoryError};
use crate::types::Post;

/// Cache-backed post access bound to the current query client
pub fn use_posts_api() -> PostsApi {
    PostsApi::new(use_query_client())
}

/// Load a post by id. Reruns when `id` changes.
pub fn use_get_post_by_id(
    id: ReadOnlySignal<String>,
) -> Resource<Result<Option<Post>, RepositoryError>> {
    let api = use_posts_api();

    use_resource(move || {
        let id = id();
        async move { api.get_by_id(&id).await }
    })
}
