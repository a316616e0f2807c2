//! Prompt domain
//!
//! Templates for the instruction, prompt and response schema sent to the model.

mod template;

pub use template::DecoderPromptTemplate;
