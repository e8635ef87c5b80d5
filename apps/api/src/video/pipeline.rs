//! The three pipeline steps. Each builds its messages, makes one completion call,
//! and reshapes the reply.

use tracing::{debug, info};

use crate::errors::AppError;
use crate::llm_client::extract::extract_json_object;
use crate::llm_client::{ChatMessage, CompletionProvider};
use crate::video::options::VideoOptions;
use crate::video::prompts::{
    ENHANCE_PROMPT_PARAMS, ENHANCE_PROMPT_SYSTEM, EXTRACT_OPTIONS_PARAMS, EXTRACT_OPTIONS_SYSTEM,
    GENERATE_SCRIPT_PARAMS, GENERATE_SCRIPT_SYSTEM,
};

/// Asks the model for the five video parameters and best-effort parses its reply.
/// An unparseable reply yields all-blank options rather than an error.
pub async fn extract_options(
    prompt: &str,
    llm: &dyn CompletionProvider,
) -> Result<VideoOptions, AppError> {
    let messages = [
        ChatMessage::system(EXTRACT_OPTIONS_SYSTEM),
        ChatMessage::user(prompt),
    ];

    let reply = llm.complete(&messages, EXTRACT_OPTIONS_PARAMS).await?;
    let extracted = extract_json_object(&reply);
    if extracted.is_empty() {
        debug!("No JSON object found in extraction reply: {reply}");
    }

    Ok(VideoOptions::from_extracted(&extracted))
}

/// Builds the enhancement user message from the prompt and current parameters.
/// User text is inserted verbatim, braces included.
pub fn enhance_message(prompt: &str, options: &VideoOptions) -> String {
    format!(
        "Original Prompt:\n{prompt}\n\nParameters:\n{}\n\nEnhance it.",
        options.parameters_block()
    )
}

/// Rewrites the prompt into a cinematic, production-ready form.
pub async fn enhance_prompt(
    prompt: &str,
    options: &VideoOptions,
    llm: &dyn CompletionProvider,
) -> Result<String, AppError> {
    let messages = [
        ChatMessage::system(ENHANCE_PROMPT_SYSTEM),
        ChatMessage::user(enhance_message(prompt, options)),
    ];

    let enhanced = llm.complete(&messages, ENHANCE_PROMPT_PARAMS).await?;
    Ok(enhanced.trim().to_string())
}

/// Generates a 5–8 scene script for the prompt.
pub async fn generate_script(
    prompt: &str,
    llm: &dyn CompletionProvider,
) -> Result<String, AppError> {
    let messages = [
        ChatMessage::system(GENERATE_SCRIPT_SYSTEM),
        ChatMessage::user(prompt),
    ];

    let script = llm.complete(&messages, GENERATE_SCRIPT_PARAMS).await?;
    info!(
        "Generated script with {} scene(s) using {}",
        count_scenes(&script),
        llm.model()
    );

    Ok(script.trim().to_string())
}

/// Counts `SCENE n:` headers.
fn count_scenes(script: &str) -> usize {
    script
        .lines()
        .filter(|line| {
            let line = line.trim_start_matches(|c: char| c == '*' || c == '#' || c.is_whitespace());
            line.to_uppercase().starts_with("SCENE ")
        })
        .count()
}
