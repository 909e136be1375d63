//! Type definitions for Appwrite documents
//!
//! Field names follow the collections in the Appwrite database: system
//! attributes carry a `$` prefix, user attributes are camelCase.

use serde::{Deserialize, Serialize};

// ============================================================================
// User Types
// ============================================================================

/// A user as embedded in another document (post creator, likes)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Post preview embedded in a user document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPreview {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "$id")]
    pub id: String,
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub posts: Vec<PostPreview>,
}

// ============================================================================
// Post Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "$createdAt")]
    pub created_at: String,
    #[serde(default)]
    pub caption: String,
    pub image_url: String,
    pub image_id: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub creator: Creator,
    #[serde(default)]
    pub likes: Vec<Creator>,
}

impl Post {
    /// Ids of the users who liked this post
    pub fn like_ids(&self) -> Vec<String> {
        self.likes.iter().map(|user| user.id.clone()).collect()
    }
}

// ============================================================================
// Auth Types
// ============================================================================

/// The signed-in user as kept in the server session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub account_id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub image_url: Option<String>,
    pub bio: Option<String>,
}

/// User document as stored in the users collection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    #[serde(rename = "$id")]
    pub id: String,
    pub account_id: String,
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl From<UserDocument> for SessionUser {
    fn from(doc: UserDocument) -> Self {
        Self {
            id: doc.id,
            account_id: doc.account_id,
            name: doc.name,
            username: doc.username,
            email: doc.email,
            image_url: doc.image_url,
            bio: doc.bio,
        }
    }
}

// ============================================================================
// Appwrite Response Wrappers
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentList<T> {
    pub documents: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(rename = "$id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionToken {
    #[serde(default)]
    pub secret: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_deserializes_from_appwrite_document() {
        let json = serde_json::json!({
            "$id": "abc123",
            "$createdAt": "2024-03-01T10:00:00.000+00:00",
            "$collectionId": "posts",
            "caption": "Sunset",
            "imageUrl": "https://cloud.appwrite.io/v1/storage/buckets/b/files/img1/preview",
            "imageId": "img1",
            "tags": ["travel", "sea"],
            "location": "Lisbon",
            "creator": { "$id": "u1", "name": "Ana", "username": "ana", "imageUrl": null },
            "likes": [{ "$id": "u2" }]
        });

        let post: Post = serde_json::from_value(json).unwrap();
        assert_eq!(post.id, "abc123");
        assert_eq!(post.image_id, "img1");
        assert_eq!(post.tags, vec!["travel", "sea"]);
        assert_eq!(post.creator.id, "u1");
        assert_eq!(post.like_ids(), vec!["u2"]);
    }

    #[test]
    fn post_tolerates_missing_optional_fields() {
        let json = serde_json::json!({
            "$id": "p",
            "$createdAt": "2024-03-01T10:00:00.000+00:00",
            "imageUrl": "u",
            "imageId": "i",
            "creator": { "$id": "u1" }
        });

        let post: Post = serde_json::from_value(json).unwrap();
        assert!(post.tags.is_empty());
        assert!(post.location.is_none());
        assert!(post.likes.is_empty());
        assert_eq!(post.creator.name, "");
    }

    #[test]
    fn profile_does_not_carry_email_to_the_client() {
        let json = serde_json::json!({
            "$id": "u1",
            "name": "Ana",
            "username": "ana",
            "email": "someone@example.org",
            "accountId": "acc-1",
            "posts": [{ "$id": "p1", "imageUrl": "https://example.org/p1.png" }]
        });

        let profile: UserProfile = serde_json::from_value(json).unwrap();
        let wire = serde_json::to_string(&profile).unwrap();

        assert_eq!(profile.posts.len(), 1);
        assert!(!wire.contains("email"));
        assert!(!wire.contains("someone@example.org"));
    }
}
