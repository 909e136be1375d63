//! Server functions for posts and profiles
//!
//! These run on the server and talk to Appwrite with the project API key,
//! which bypasses document permissions. Every call needs a signed-in
//! session; mutations also check the session user against the post creator.

use dioxus::prelude::*;

use crate::types::{Post, UserProfile};

#[cfg(feature = "server")]
use crate::appwrite::{queries, AppwriteClient, ClientError};
#[cfg(feature = "server")]
use crate::auth::require_session_user;
#[cfg(feature = "server")]
use crate::config::AppwriteConfig;
#[cfg(feature = "server")]
use crate::types::{DocumentList, SessionUser};

/// Number of posts on the home feed
pub const RECENT_POSTS_LIMIT: u32 = 20;

/// Fetch one post, `None` if it does not exist
#[server]
pub async fn get_post(id: String) -> Result<Option<Post>, ServerFnError> {
    require_session_user().await?;
    let (client, config) = appwrite()?;

    client
        .get_document(&config.database_id, &config.post_collection_id, &id)
        .await
        .map_err(server_error)
}

/// Newest posts first
#[server]
pub async fn get_recent_posts() -> Result<Vec<Post>, ServerFnError> {
    require_session_user().await?;
    let (client, config) = appwrite()?;

    let list: DocumentList<Post> = client
        .list_documents(
            &config.database_id,
            &config.post_collection_id,
            &[queries::order_desc("$createdAt"), queries::limit(RECENT_POSTS_LIMIT)],
        )
        .await
        .map_err(server_error)?;

    Ok(list.documents)
}

/// Delete a post document and its image file
#[server]
pub async fn delete_post(post_id: String, image_id: String) -> Result<(), ServerFnError> {
    if post_id.is_empty() || image_id.is_empty() {
        return Err(ServerFnError::new("Post id and image id are required"));
    }

    let user = require_session_user().await?;
    let (client, config) = appwrite()?;
    let post = load_owned_post(&client, config, &post_id, &user).await?;

    if post.image_id != image_id {
        return Err(ServerFnError::new("Image does not belong to this post"));
    }

    client
        .delete_document(&config.database_id, &config.post_collection_id, &post_id)
        .await
        .map_err(server_error)?;

    // The post is gone at this point; a leftover file is only logged.
    if let Err(e) = client.delete_file(&config.storage_id, &image_id).await {
        tracing::warn!(post_id = %post_id, image_id = %image_id, error = %e, "failed to delete post image");
    }

    tracing::info!(post_id = %post_id, user_id = %user.id, "post deleted");
    Ok(())
}

/// Edit caption, location and tags of a post
#[server]
pub async fn update_post(
    post_id: String,
    caption: String,
    location: String,
    tags: Vec<String>,
) -> Result<Post, ServerFnError> {
    #[derive(serde::Serialize)]
    struct Patch {
        caption: String,
        location: String,
        tags: Vec<String>,
    }

    let user = require_session_user().await?;
    let (client, config) = appwrite()?;
    load_owned_post(&client, config, &post_id, &user).await?;

    let post: Post = client
        .update_document(
            &config.database_id,
            &config.post_collection_id,
            &post_id,
            &Patch {
                caption,
                location,
                tags,
            },
        )
        .await
        .map_err(server_error)?;

    tracing::info!(post_id = %post_id, "post updated");
    Ok(post)
}

/// Like or unlike a post as the session user
#[server]
pub async fn toggle_post_like(post_id: String) -> Result<Post, ServerFnError> {
    #[derive(serde::Serialize)]
    struct Patch {
        likes: Vec<String>,
    }

    let user = require_session_user().await?;
    let (client, config) = appwrite()?;

    let post: Post = client
        .get_document(&config.database_id, &config.post_collection_id, &post_id)
        .await
        .map_err(server_error)?
        .ok_or_else(|| ServerFnError::new("Post not found"))?;

    let likes = crate::utils::toggle_like(&post.like_ids(), &user.id);

    client
        .update_document(
            &config.database_id,
            &config.post_collection_id,
            &post_id,
            &Patch { likes },
        )
        .await
        .map_err(server_error)
}

/// Fetch a user profile with previews of their posts
#[server]
pub async fn get_user_profile(id: String) -> Result<Option<UserProfile>, ServerFnError> {
    require_session_user().await?;
    let (client, config) = appwrite()?;

    client
        .get_document(&config.database_id, &config.user_collection_id, &id)
        .await
        .map_err(server_error)
}

// ============================================================================
// Server-only helpers (not exposed as server functions)
// ============================================================================

#[cfg(feature = "server")]
pub(crate) fn appwrite() -> Result<(AppwriteClient, &'static AppwriteConfig), ServerFnError> {
    let config = crate::config::get().map_err(|e| {
        tracing::error!(error = %e, "appwrite is not configured");
        ServerFnError::new(format!("Appwrite is not configured: {}", e))
    })?;

    let client = AppwriteClient::new(&config.endpoint, &config.project_id).with_key(&config.api_key);
    Ok((client, config))
}

#[cfg(feature = "server")]
pub(crate) fn server_error(err: ClientError) -> ServerFnError {
    tracing::warn!(error = %err, "appwrite request failed");
    ServerFnError::new(err.to_string())
}

#[cfg(feature = "server")]
async fn load_owned_post(
    client: &AppwriteClient,
    config: &AppwriteConfig,
    post_id: &str,
    user: &SessionUser,
) -> Result<Post, ServerFnError> {
    let post: Post = client
        .get_document(&config.database_id, &config.post_collection_id, post_id)
        .await
        .map_err(server_error)?
        .ok_or_else(|| ServerFnError::new("Post not found"))?;

    if !crate::auth::is_post_owner(Some(user), Some(&post)) {
        tracing::warn!(post_id = %post_id, user_id = %user.id, "rejected change by non-owner");
        return Err(ServerFnError::new("Only the creator can change this post"));
    }

    Ok(post)
}
