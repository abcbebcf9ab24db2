//! Route handlers

pub mod api;
pub mod static_files;

pub use api::*;
pub use static_files::*;
