//! Company research pipeline
//!
//! Resolves a short description for a company name, derives offerings,
//! focus areas and an industry label from it, and recommends AI/ML/GenAI
//! use cases. Every stage falls back to deterministic output when its
//! upstream service fails, so a run always completes.

pub mod config;
pub mod core;
pub mod error;
pub mod orchestrator;
pub mod services;
pub mod traits;
pub mod types;

pub use config::{EncyclopediaConfig, ModelConfig, ResearchConfig};
pub use error::{ResearchError, ResearchResult, UpstreamFailure};
pub use orchestrator::{HttpOrchestrator, Orchestrator};
pub use traits::*;
pub use types::*;
