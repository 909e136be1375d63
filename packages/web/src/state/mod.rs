//! View state shared between pages and components

mod confirmation;
mod delete_workflow;
mod toast;

pub use confirmation::*;
pub use delete_workflow::*;
pub use toast::*;
