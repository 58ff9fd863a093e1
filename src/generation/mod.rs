//! Prompt construction, routing-decision parsing, and citation handling

pub mod citation;
pub mod decision;
pub mod prompt;

pub use decision::{Decision, DecisionParseError};
pub use prompt::PromptBuilder;
