//! Authentication context provider

use dioxus::prelude::*;

use crate::types::SessionUser;
use super::server_fns::get_current_user;

/// Authentication context that provides user state to the entire app
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current authenticated user (if any)
    pub user: Signal<Option<SessionUser>>,
    /// Whether auth state is still loading
    pub loading: Signal<bool>,
}

impl AuthContext {
    /// Check if the user is authenticated
    pub fn is_authenticated(&self) -> bool {
        self.user.read().is_some()
    }

    /// Refresh the auth state from the server
    pub async fn refresh(&self) {
        let mut user = self.user;
        let mut loading = self.loading;

        match get_current_user().await {
            Ok(current) => user.set(current),
            Err(e) => {
                tracing::warn!(error = %e, "failed to load session user");
                user.set(None);
            }
        }
        loading.set(false);
    }

    /// Clear the auth state (sign out)
    pub fn clear(&self) {
        let mut user = self.user;
        user.set(None);
    }
}

/// Auth provider component that wraps the app
#[component]
pub fn AuthProvider(children: Element) -> Element {
    // Create auth signals
    let user = use_signal(|| None::<SessionUser>);
    let loading = use_signal(|| true);

    // Provide to children
    let auth = use_context_provider(|| AuthContext { user, loading });

    // Load initial auth state
    use_effect(move || {
        spawn(async move {
            auth.refresh().await;
        });
    });

    children
}

/// Hook to access the auth context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}
