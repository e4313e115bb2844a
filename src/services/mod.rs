//! Outward-facing collaborators: prompt assembly, the LLM transport, and
//! raw-response extraction.

pub mod extract;
pub mod llm_client;
pub mod prompt;

pub use extract::extract_json;
pub use llm_client::LlmClient;
