//! Post data access: server functions and the cache-backed repository

mod repository;
mod server_fns;

pub use repository::*;
pub use server_fns::*;
