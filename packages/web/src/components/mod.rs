//! Reusable UI components

mod confirmation_modal;
mod loading;
mod post_card;
mod post_stats;
mod root_layout;
mod toast;
mod top_bar;

pub use confirmation_modal::*;
pub use loading::*;
pub use post_card::*;
pub use post_stats::*;
pub use root_layout::*;
pub use toast::*;
pub use top_bar::*;
