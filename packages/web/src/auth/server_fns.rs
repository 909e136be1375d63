//! Server functions for authentication
//!
//! These run on the server and keep the Appwrite session secret in the
//! tower session; the browser only ever holds the session cookie.

use dioxus::prelude::*;

use crate::types::SessionUser;

#[cfg(feature = "server")]
use crate::appwrite::{queries, AppwriteClient};
#[cfg(feature = "server")]
use crate::posts::{appwrite, server_error};
#[cfg(feature = "server")]
use crate::types::{DocumentList, UserDocument};

#[cfg(feature = "server")]
const USER_KEY: &str = "user";
#[cfg(feature = "server")]
const APPWRITE_SESSION_KEY: &str = "appwrite_session";

/// Sign in with email and password and establish a session
#[server]
pub async fn sign_in(email: String, password: String) -> Result<SessionUser, ServerFnError> {
    let (admin, config) = appwrite()?;

    let token = admin
        .create_email_session(email.trim(), &password)
        .await
        .map_err(server_error)?;

    let account = AppwriteClient::new(&config.endpoint, &config.project_id)
        .with_session(&token.secret)
        .get_account()
        .await
        .map_err(server_error)?;

    let users: DocumentList<UserDocument> = admin
        .list_documents(
            &config.database_id,
            &config.user_collection_id,
            &[queries::equal("accountId", &account.id)],
        )
        .await
        .map_err(server_error)?;

    let user: SessionUser = users
        .documents
        .into_iter()
        .next()
        .ok_or_else(|| ServerFnError::new("No profile found for this account"))?
        .into();

    let session = current_session().await?;
    session
        .insert(USER_KEY, &user)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to set session: {}", e)))?;
    session
        .insert(APPWRITE_SESSION_KEY, &token.secret)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to set session: {}", e)))?;

    tracing::info!(user_id = %user.id, "user signed in");
    Ok(user)
}

/// Get the current authenticated user from the session
#[server]
pub async fn get_current_user() -> Result<Option<SessionUser>, ServerFnError> {
    session_user().await
}

/// Sign out - end the Appwrite session and clear ours
#[server]
pub async fn sign_out() -> Result<(), ServerFnError> {
    let session = current_session().await?;

    let secret: Option<String> = session
        .get(APPWRITE_SESSION_KEY)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to read session: {}", e)))?;

    if let Some(secret) = secret {
        let (_, config) = appwrite()?;
        let client = AppwriteClient::new(&config.endpoint, &config.project_id).with_session(secret);
        if let Err(e) = client.delete_current_session().await {
            tracing::warn!(error = %e, "failed to end appwrite session");
        }
    }

    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to clear session: {}", e)))?;

    Ok(())
}

// ============================================================================
// Server-only helpers (not exposed as server functions)
// ============================================================================

#[cfg(feature = "server")]
async fn current_session() -> Result<tower_sessions::Session, ServerFnError> {
    dioxus::fullstack::prelude::extract()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get session: {:?}", e)))
}

#[cfg(feature = "server")]
async fn session_user() -> Result<Option<SessionUser>, ServerFnError> {
    current_session()
        .await?
        .get(USER_KEY)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get user from session: {}", e)))
}

/// The signed-in user, or an error for anonymous requests
#[cfg(feature = "server")]
pub(crate) async fn require_session_user() -> Result<SessionUser, ServerFnError> {
    session_user()
        .await?
        .ok_or_else(|| ServerFnError::new("You must be signed in"))
}
