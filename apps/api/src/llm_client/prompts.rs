// Shared prompt fragments.
// Each module that needs LLM calls defines its own prompts.rs alongside it.

/// System prompt that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// System prompt for the free-text resume analysis calls. Section headers are parsed
/// verbatim, so the model is told to keep them.
pub const SECTIONED_TEXT_SYSTEM: &str = "You are an expert career coach and resume reviewer. \
    Answer in plain text. Use the exact section headers requested, each followed by a colon \
    and one item per line. Separate sections with a blank line.";
