//! health-compass: agentic RAG service for health questions
//!
//! A single HTTP endpoint that answers health questions from a local
//! document index, escalating to a live web search when the retrieved
//! passages are judged insufficient, and synthesizing a cited answer
//! with an LLM.

pub mod config;
pub mod error;
pub mod generation;
pub mod orchestrator;
pub mod providers;
pub mod server;
pub mod types;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use orchestrator::QueryOrchestrator;
pub use types::{
    query::QueryRequest,
    response::{QueryResponse, RetrievedSource, SourceKind},
};
