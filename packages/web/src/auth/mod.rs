//! Authentication: session context, ownership checks and server functions

mod context;
mod ownership;
mod server_fns;

pub use context::*;
pub use ownership::*;
pub use server_fns::*;
