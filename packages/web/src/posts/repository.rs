//! Post access as seen by the views

use async_trait::async_trait;
use dioxus::prelude::ServerFnError;

use super::server_fns::{delete_post, get_post, toggle_post_like, update_post};
use crate::query::QueryClient;
use crate::types::Post;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    #[error("{0}")]
    Server(String),
}

impl From<ServerFnError> for RepositoryError {
    fn from(err: ServerFnError) -> Self {
        match err {
            ServerFnError::ServerError(message) => RepositoryError::Server(message),
            other => RepositoryError::Server(other.to_string()),
        }
    }
}

/// Fetch and delete posts
#[async_trait(?Send)]
pub trait PostRepository {
    /// `Ok(None)` when no post has this id
    async fn get_by_id(&self, id: &str) -> Result<Option<Post>, RepositoryError>;

    /// Remove the post and its image
    async fn delete(&self, post_id: &str, image_id: &str) -> Result<(), RepositoryError>;
}

/// Posts through the server functions, cached in the query client
#[derive(Clone, Copy)]
pub struct PostsApi {
    queries: QueryClient,
}

impl PostsApi {
    pub fn new(queries: QueryClient) -> Self {
        Self { queries }
    }

    pub async fn update(
        &self,
        post_id: &str,
        caption: String,
        location: String,
        tags: Vec<String>,
    ) -> Result<Post, RepositoryError> {
        let post = update_post(post_id.to_string(), caption, location, tags).await?;
        self.queries.store_post(post.clone());
        Ok(post)
    }

    pub async fn toggle_like(&self, post_id: &str) -> Result<Post, RepositoryError> {
        let post = toggle_post_like(post_id.to_string()).await?;
        self.queries.store_post(post.clone());
        Ok(post)
    }
}

#[async_trait(?Send)]
impl PostRepository for PostsApi {
    async fn get_by_id(&self, id: &str) -> Result<Option<Post>, RepositoryError> {
        if id.is_empty() {
            return Ok(None);
        }
        if let Some(post) = self.queries.cached_post(id) {
            return Ok(Some(post));
        }

        let post = get_post(id.to_string()).await?;
        if let Some(post) = &post {
            self.queries.store_post(post.clone());
        }
        Ok(post)
    }

    async fn delete(&self, post_id: &str, image_id: &str) -> Result<(), RepositoryError> {
        delete_post(post_id.to_string(), image_id.to_string()).await?;
        self.queries.invalidate_post(post_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_message_is_kept_verbatim() {
        let source: ServerFnError = ServerFnError::new("Only the creator can change this post");
        let err = RepositoryError::from(source);
        assert_eq!(err.to_string(), "Only the creator can change this post");
    }
}
