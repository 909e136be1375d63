//! Appwrite REST client used by the server functions

mod client;
pub mod queries;

pub use client::*;
