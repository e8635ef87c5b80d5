// Video prompt pipeline: parameter extraction, prompt enhancement, script generation.
// Every upstream call goes through llm_client::CompletionProvider.

pub mod handlers;
pub mod options;
pub mod pipeline;
pub mod prompts;
