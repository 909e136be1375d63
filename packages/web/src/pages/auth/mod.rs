//! Pages for signed-out visitors

mod sign_in;

pub use sign_in::*;
