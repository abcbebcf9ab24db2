//! Webserver for the company research pipeline
//!
//! Serves a small HTML form plus a JSON API that runs the research
//! pipeline for a company name.

pub mod error;
pub mod state;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use error::{WebServerError, WebServerResult};
pub use state::WebServerState;
pub use webserver_impl::WebServer;
