//! Query cache provider

use chrono::Utc;
use dioxus::prelude::*;

use super::QueryCache;
use crate::types::Post;

/// Handle to the app-wide query cache
#[derive(Clone, Copy)]
pub struct QueryClient {
    posts: Signal<QueryCache<String, Post>>,
}

impl QueryClient {
    /// Fresh cached copy of a post, if any
    pub fn cached_post(&self, id: &str) -> Option<Post> {
        self.posts.peek().get(&id.to_string(), Utc::now()).cloned()
    }

    pub fn store_post(&self, post: Post) {
        let mut posts = self.posts;
        posts.write().insert(post.id.clone(), post, Utc::now());
    }

    pub fn invalidate_post(&self, id: &str) {
        let mut posts = self.posts;
        posts.write().invalidate(&id.to_string());
    }

    /// Forget everything, e.g. after the session changes
    pub fn clear(&self) {
        let mut posts = self.posts;
        posts.write().clear();
    }
}

/// Provides the query cache to the entire app
#[component]
pub fn QueryProvider(children: Element) -> Element {
    let posts = use_signal(QueryCache::<String, Post>::default);

    use_context_provider(|| QueryClient { posts });

    children
}

/// Hook to access the query cache
pub fn use_query_client() -> QueryClient {
    use_context::<QueryClient>()
}
