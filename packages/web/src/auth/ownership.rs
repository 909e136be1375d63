//! Who may edit or delete a post

use crate::types::{Post, SessionUser};

/// True when the session user created the post.
///
/// Either side missing means not an owner.
pub fn is_post_owner(user: Option<&SessionUser>, post: Option<&Post>) -> bool {
    match (user, post) {
        (Some(user), Some(post)) => !user.id.is_empty() && user.id == post.creator.id,
        _ => false,
    }
}

/// Class for owner-only controls
pub fn owner_only_class(is_owner: bool) -> &'static str {
    if is_owner {
        ""
    } else {
        "hidden"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Creator;

    fn user(id: &str) -> SessionUser {
        SessionUser {
            id: id.to_string(),
            account_id: format!("acc-{id}"),
            name: "Someone".to_string(),
            username: "someone".to_string(),
            email: "someone@example.org".to_string(),
            image_url: None,
            bio: None,
        }
    }

    fn post_by(creator_id: &str) -> Post {
        Post {
            id: "abc123".to_string(),
            created_at: "2024-03-01T10:00:00.000+00:00".to_string(),
            caption: String::new(),
            image_url: String::new(),
            image_id: "img".to_string(),
            tags: vec![],
            location: None,
            creator: Creator {
                id: creator_id.to_string(),
                name: String::new(),
                username: String::new(),
                image_url: None,
            },
            likes: vec![],
        }
    }

    #[test]
    fn creator_sees_controls() {
        let post = post_by("u1");
        let is_owner = is_post_owner(Some(&user("u1")), Some(&post));

        assert!(is_owner);
        assert_eq!(owner_only_class(is_owner), "");
    }

    #[test]
    fn other_users_do_not() {
        let post = post_by("u1");
        let is_owner = is_post_owner(Some(&user("u2")), Some(&post));

        assert!(!is_owner);
        assert_eq!(owner_only_class(is_owner), "hidden");
    }

    #[test]
    fn missing_user_or_post_is_not_owner() {
        assert!(!is_post_owner(None, Some(&post_by("u1"))));
        assert!(!is_post_owner(Some(&user("u1")), None));
        assert!(!is_post_owner(None, None));
        assert!(!is_post_owner(Some(&user("")), Some(&post_by(""))));
    }

    #[test]
    fn repeated_evaluation_is_stable() {
        let post = post_by("u1");
        let owner = user("u1");
        let first = owner_only_class(is_post_owner(Some(&owner), Some(&post)));
        for _ in 0..3 {
            assert_eq!(owner_only_class(is_post_owner(Some(&owner), Some(&post))), first);
        }
    }
}
