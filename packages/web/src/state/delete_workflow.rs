//! Deleting a post from its detail page

use dioxus::prelude::{Navigator, Readable, Signal, Writable};

use super::{Confirmation, Notifier, Toast};
use crate::posts::PostRepository;

/// Browser history as seen by the delete workflow
pub trait History {
    /// Go back one entry
    fn back(&self);
}

impl History for Navigator {
    fn back(&self) {
        self.go_back();
    }
}

/// Prompt visibility plus whether a delete request is in flight
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DeleteState {
    pub confirmation: Confirmation,
    pub deleting: bool,
}

/// Where the view keeps its `DeleteState`
pub trait DeleteStateCell {
    fn load(&self) -> DeleteState;
    fn store(&self, state: DeleteState);
}

impl DeleteStateCell for Signal<DeleteState> {
    fn load(&self) -> DeleteState {
        *self.peek()
    }

    fn store(&self, state: DeleteState) {
        let mut signal = *self;
        signal.set(state);
    }
}

/// The post a delete request is about
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteTarget {
    pub post_id: String,
    pub image_id: String,
}

pub const DELETED_MESSAGE: &str = "Post has been successfully removed";
pub const CANCELED_MESSAGE: &str = "Deletion canceled";
pub const DELETE_FAILED_MESSAGE: &str = "Could not delete post";

/// Request, cancel and confirm handlers of the delete button
pub struct DeleteWorkflow<'a, R, N, H, S> {
    repository: &'a R,
    notifier: &'a N,
    history: &'a H,
    state: &'a S,
}

impl<'a, R, N, H, S> DeleteWorkflow<'a, R, N, H, S>
where
    R: PostRepository,
    N: Notifier,
    H: History,
    S: DeleteStateCell,
{
    pub fn new(repository: &'a R, notifier: &'a N, history: &'a H, state: &'a S) -> Self {
        Self {
            repository,
            notifier,
            history,
            state,
        }
    }

    /// Show the prompt. Ignored while a delete is in flight.
    pub fn request(&self) {
        let state = self.state.load();
        if state.deleting {
            return;
        }
        self.state.store(DeleteState {
            confirmation: state.confirmation.request(),
            ..state
        });
    }

    /// Hide the prompt and say nothing was deleted
    pub fn cancel(&self) {
        let state = self.state.load();
        self.state.store(DeleteState {
            confirmation: state.confirmation.cancel(),
            ..state
        });
        self.notifier.notify(Toast::info(CANCELED_MESSAGE));
    }

    /// Hide the prompt, delete the post, then report and leave the page.
    ///
    /// On failure the user stays on the page and sees the error. The
    /// delete button stays disabled after a successful delete.
    pub async fn confirm(&self, target: &DeleteTarget) {
        let state = self.state.load();
        if state.deleting {
            return;
        }
        self.state.store(DeleteState {
            confirmation: state.confirmation.confirm(),
            deleting: true,
        });

        match self
            .repository
            .delete(&target.post_id, &target.image_id)
            .await
        {
            Ok(()) => {
                tracing::info!(post_id = %target.post_id, "post deleted");
                self.notifier.notify(Toast::success(DELETED_MESSAGE));
                self.history.back();
            }
            Err(e) => {
                tracing::warn!(post_id = %target.post_id, error = %e, "post deletion failed");
                self.state.store(DeleteState {
                    deleting: false,
                    ..self.state.load()
                });
                self.notifier
                    .notify(Toast::error(DELETE_FAILED_MESSAGE, e.to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::posts::RepositoryError;
    use crate::state::ToastVariant;
    use crate::types::{Creator, Post};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    // =========================================================================
    // Mocks
    // =========================================================================

    #[derive(Default)]
    struct MockRepository {
        fail_with: Option<String>,
        delete_calls: Arc<Mutex<Vec<(String, String)>>>,
    }

    impl MockRepository {
        fn failing(message: &str) -> Self {
            Self {
                fail_with: Some(message.to_string()),
                ..Default::default()
            }
        }

        fn delete_calls(&self) -> Vec<(String, String)> {
            self.delete_calls.lock().unwrap().clone()
        }
    }

    #[async_trait(?Send)]
    impl PostRepository for MockRepository {
        async fn get_by_id(&self, _id: &str) -> Result<Option<Post>, RepositoryError> {
            Ok(None)
        }

        async fn delete(&self, post_id: &str, image_id: &str) -> Result<(), RepositoryError> {
            self.delete_calls
                .lock()
                .unwrap()
                .push((post_id.to_string(), image_id.to_string()));
            match &self.fail_with {
                Some(message) => Err(RepositoryError::Server(message.clone())),
                None => Ok(()),
            }
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        toasts: Arc<Mutex<Vec<Toast>>>,
    }

    impl RecordingNotifier {
        fn toasts(&self) -> Vec<Toast> {
            self.toasts.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, toast: Toast) {
            self.toasts.lock().unwrap().push(toast);
        }
    }

    #[derive(Default)]
    struct RecordingHistory {
        backs: Arc<Mutex<usize>>,
    }

    impl RecordingHistory {
        fn backs(&self) -> usize {
            *self.backs.lock().unwrap()
        }
    }

    impl History for RecordingHistory {
        fn back(&self) {
            *self.backs.lock().unwrap() += 1;
        }
    }

    #[derive(Default)]
    struct TestState {
        state: Arc<Mutex<DeleteState>>,
    }

    impl DeleteStateCell for TestState {
        fn load(&self) -> DeleteState {
            *self.state.lock().unwrap()
        }

        fn store(&self, state: DeleteState) {
            *self.state.lock().unwrap() = state;
        }
    }

    struct Fixture {
        repository: MockRepository,
        notifier: RecordingNotifier,
        history: RecordingHistory,
        state: TestState,
    }

    impl Fixture {
        fn new(repository: MockRepository) -> Self {
            Self {
                repository,
                notifier: RecordingNotifier::default(),
                history: RecordingHistory::default(),
                state: TestState::default(),
            }
        }

        fn workflow(
            &self,
        ) -> DeleteWorkflow<'_, MockRepository, RecordingNotifier, RecordingHistory, TestState>
        {
            DeleteWorkflow::new(&self.repository, &self.notifier, &self.history, &self.state)
        }

        fn prompt_shown(&self) -> bool {
            self.state.load().confirmation.is_shown()
        }
    }

    fn post() -> Post {
        Post {
            id: "abc123".to_string(),
            created_at: "2024-03-01T10:00:00.000+00:00".to_string(),
            caption: "Sunset".to_string(),
            image_url: "https://example.org/img.png".to_string(),
            image_id: "img-42".to_string(),
            tags: vec!["sea".to_string()],
            location: Some("Lisbon".to_string()),
            creator: Creator {
                id: "u1".to_string(),
                name: "Ana".to_string(),
                username: "ana".to_string(),
                image_url: None,
            },
            likes: vec![],
        }
    }

    fn target_for(route_id: &str, post: &Post) -> DeleteTarget {
        DeleteTarget {
            post_id: route_id.to_string(),
            image_id: post.image_id.clone(),
        }
    }

    // =========================================================================
    // Scenarios
    // =========================================================================

    #[test]
    fn request_shows_prompt_without_side_effects() {
        let fx = Fixture::new(MockRepository::default());

        fx.workflow().request();

        assert!(fx.prompt_shown());
        assert!(fx.repository.delete_calls().is_empty());
        assert!(fx.notifier.toasts().is_empty());
        assert_eq!(fx.history.backs(), 0);
    }

    #[test]
    fn cancel_hides_prompt_and_reports_info() {
        let fx = Fixture::new(MockRepository::default());

        fx.workflow().request();
        fx.workflow().cancel();

        assert!(!fx.prompt_shown());
        assert!(fx.repository.delete_calls().is_empty());
        let toasts = fx.notifier.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].variant, ToastVariant::Info);
        assert_eq!(toasts[0].title, CANCELED_MESSAGE);
        assert_eq!(fx.history.backs(), 0);
    }

    #[tokio::test]
    async fn confirm_deletes_once_then_notifies_and_goes_back() {
        let fx = Fixture::new(MockRepository::default());
        let post = post();

        fx.workflow().request();
        fx.workflow().confirm(&target_for("abc123", &post)).await;

        assert!(!fx.prompt_shown());
        assert_eq!(
            fx.repository.delete_calls(),
            vec![("abc123".to_string(), "img-42".to_string())]
        );
        let toasts = fx.notifier.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].variant, ToastVariant::Success);
        assert_eq!(toasts[0].title, DELETED_MESSAGE);
        assert_eq!(fx.history.backs(), 1);
    }

    #[tokio::test]
    async fn second_delete_is_ignored_after_success() {
        let fx = Fixture::new(MockRepository::default());
        let target = target_for("abc123", &post());

        fx.workflow().request();
        fx.workflow().confirm(&target).await;

        // History had nothing to go back to; the button is pressed again
        fx.workflow().request();
        fx.workflow().confirm(&target).await;

        assert!(!fx.prompt_shown());
        assert!(fx.state.load().deleting);
        assert_eq!(fx.repository.delete_calls().len(), 1);
        assert_eq!(fx.notifier.toasts().len(), 1);
        assert_eq!(fx.history.backs(), 1);
    }

    #[tokio::test]
    async fn failed_delete_reports_error_and_stays() {
        let fx = Fixture::new(MockRepository::failing("Document not found"));

        fx.workflow().request();
        fx.workflow().confirm(&target_for("abc123", &post())).await;

        assert!(!fx.prompt_shown());
        assert!(!fx.state.load().deleting);
        assert_eq!(fx.repository.delete_calls().len(), 1);
        let toasts = fx.notifier.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].variant, ToastVariant::Destructive);
        assert!(toasts[0]
            .description
            .as_deref()
            .unwrap_or_default()
            .contains("Document not found"));
        assert_eq!(fx.history.backs(), 0);
    }

    #[tokio::test]
    async fn retry_is_allowed_after_failure() {
        let fx = Fixture::new(MockRepository::failing("Network error"));
        let target = target_for("abc123", &post());

        fx.workflow().request();
        fx.workflow().confirm(&target).await;
        fx.workflow().request();

        assert!(fx.prompt_shown());
        fx.workflow().confirm(&target).await;
        assert_eq!(fx.repository.delete_calls().len(), 2);
    }
}
