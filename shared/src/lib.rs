//! Shared types for the company use-case researcher
//!
//! Holds the data model passed between the research pipeline and the
//! web server, the shared error type, and tracing setup.

pub mod types;
pub mod errors;
pub mod logging;

pub use types::*;
pub use errors::*;
