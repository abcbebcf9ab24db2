//! HTTP clients for the encyclopedia and the language model

pub mod chat_completions;
pub mod encyclopedia;

#[cfg(test)]
pub mod tests;

pub use chat_completions::*;
pub use encyclopedia::*;
