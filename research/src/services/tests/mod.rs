//! Tests for the HTTP clients against a local mock server

pub mod encyclopedia;
