// Image analysis: upload decoding, the vision model call, reply parsing, and
// scoring against the rubric.
// All model calls go through llm_client::VisionModel.

pub mod analyzer;
pub mod handlers;
pub mod parser;
pub mod prompts;
pub mod roast;
pub mod upload;
