//! Transient notifications

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Info,
    Destructive,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
    pub duration: Duration,
    pub closable: bool,
}

impl Toast {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            variant: ToastVariant::Success,
            duration: Duration::from_millis(5000),
            closable: true,
        }
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            variant: ToastVariant::Info,
            duration: Duration::from_millis(3000),
            closable: true,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
            variant: ToastVariant::Destructive,
            duration: Duration::from_millis(5000),
            closable: true,
        }
    }
}

/// Anything that can put a toast on screen
pub trait Notifier {
    fn notify(&self, toast: Toast);
}
