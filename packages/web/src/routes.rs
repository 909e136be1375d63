//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::RootLayout;
use crate::pages::auth::SignIn;
use crate::pages::root::{Home, PostDetails, Profile, UpdatePost};
use crate::pages::PageNotFound;

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    // Signed-out routes
    #[route("/sign-in")]
    SignIn {},

    // Signed-in routes
    #[layout(RootLayout)]
        #[route("/")]
        Home {},

        #[route("/posts/:id")]
        PostDetails { id: String },

        #[route("/update-post/:id")]
        UpdatePost { id: String },

        #[route("/profile/:id")]
        Profile { id: String },
    #[end_layout]

    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn post_detail_path_carries_id() {
        let route = Route::from_str("/posts/abc123").unwrap();
        assert_eq!(route, Route::PostDetails { id: "abc123".to_string() });
        assert_eq!(route.to_string(), "/posts/abc123");
    }

    #[test]
    fn edit_and_profile_links() {
        assert_eq!(Route::UpdatePost { id: "abc123".to_string() }.to_string(), "/update-post/abc123");
        assert_eq!(Route::Profile { id: "u1".to_string() }.to_string(), "/profile/u1");
    }

    #[test]
    fn unknown_paths_fall_through() {
        let route = Route::from_str("/nope/here").unwrap();
        assert!(matches!(route, Route::PageNotFound { .. }));
    }
}
