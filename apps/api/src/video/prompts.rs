// All LLM prompt constants for the video pipeline.

use crate::llm_client::CompletionParams;

/// System prompt for parameter extraction — enforces JSON-only output.
pub const EXTRACT_OPTIONS_SYSTEM: &str = "Extract video parameters from the prompt.
Return ONLY JSON with:
duration, language, platform, size (Landscape/Vertical/Square), category.
If not mentioned, use empty string.";

/// Low temperature: extraction should be deterministic.
pub const EXTRACT_OPTIONS_PARAMS: CompletionParams = CompletionParams {
    temperature: 0.1,
    max_tokens: 500,
};

pub const ENHANCE_PROMPT_SYSTEM: &str = "You are an expert cinematic prompt engineer.
Enhance the prompt to be highly detailed and production-ready.
Return ONLY the enhanced prompt.";

pub const ENHANCE_PROMPT_PARAMS: CompletionParams = CompletionParams {
    temperature: 0.7,
    max_tokens: 1000,
};

pub const GENERATE_SCRIPT_SYSTEM: &str = "You are a professional cinematic script writer.

Generate a detailed video script in this format:

TITLE: [Title]

SCENE 1:
VISUAL:
NARRATION:
MOOD:
DURATION:

Include 5-8 scenes.
Make it cinematic and dramatic.";

pub const GENERATE_SCRIPT_PARAMS: CompletionParams = CompletionParams {
    temperature: 0.8,
    max_tokens: 1500,
};

/// Placeholder for a parameter the user left blank.
pub const NOT_SPECIFIED: &str = "Not specified";
