//! Application pages

pub mod auth;
mod not_found;
pub mod root;

pub use not_found::*;
