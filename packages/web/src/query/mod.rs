//! Client-side query cache and the hooks built on it

mod cache;
mod hooks;
mod provider;

pub use cache::*;
pub use hooks::*;
pub use provider::*;
