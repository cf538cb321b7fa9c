//! Output of ranked word lists.

pub mod reporter;

pub use reporter::*;
