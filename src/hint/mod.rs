//! LLM move hints.

mod prompt;
mod service;

pub use prompt::HintRequest;
pub use service::{FAILURE_MESSAGE, HintProvider, HintResponse, HintService, MISSING_KEY_MESSAGE};
