//! Two-step confirmation for destructive actions

/// Whether the confirmation prompt is on screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Confirmation {
    #[default]
    Hidden,
    Shown,
}

impl Confirmation {
    /// The user asked for the destructive action
    pub fn request(self) -> Self {
        Confirmation::Shown
    }

    /// The user accepted the prompt
    pub fn confirm(self) -> Self {
        Confirmation::Hidden
    }

    /// The user dismissed the prompt
    pub fn cancel(self) -> Self {
        Confirmation::Hidden
    }

    pub fn is_shown(self) -> bool {
        self == Confirmation::Shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert_eq!(Confirmation::default(), Confirmation::Hidden);
        assert!(!Confirmation::default().is_shown());
    }

    #[test]
    fn request_shows_prompt() {
        assert_eq!(Confirmation::Hidden.request(), Confirmation::Shown);
        assert_eq!(Confirmation::Shown.request(), Confirmation::Shown);
    }

    #[test]
    fn confirm_and_cancel_hide_prompt() {
        assert_eq!(Confirmation::Shown.confirm(), Confirmation::Hidden);
        assert_eq!(Confirmation::Shown.cancel(), Confirmation::Hidden);
        assert_eq!(Confirmation::Hidden.confirm(), Confirmation::Hidden);
        assert_eq!(Confirmation::Hidden.cancel(), Confirmation::Hidden);
    }
}
