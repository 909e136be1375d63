//! Pages behind the sign-in wall

mod home;
mod post_details;
mod profile;
mod update_post;

pub use home::*;
pub use post_details::*;
pub use profile::*;
pub use update_post::*;
