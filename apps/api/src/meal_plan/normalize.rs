//! Response Normalizer — strips non-JSON wrapping from raw model output.
//!
//! The model is told to return a bare array but regularly adds code fences or
//! a sentence before/after. Cosmetic wrapping must not fail the decode.

/// Max characters of offending text quoted in a decode error.
pub const ERROR_PREVIEW_CHARS: usize = 200;

/// Returns the span of `raw` most likely to be a JSON array.
///
/// 1. removes every ```` ```json ```` and ```` ``` ```` marker
/// 2. trims
/// 3. slices from the first `[` to the last `]` when both exist in that order
///
/// If no such span exists the trimmed text is returned unchanged so the decode
/// step fails loudly instead of guessing.
pub fn normalize_response(raw: &str) -> String {
    let unfenced = raw.replace("```json", "").replace("```", "");
    let trimmed = unfenced.trim();

    match (trimmed.find('['), trimmed.rfind(']')) {
        (Some(open), Some(close)) if close > open => trimmed[open..=close].to_string(),
        _ => trimmed.to_string(),
    }
}

/// First `max_chars` characters of `text`, with an ellipsis when cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}…")
    } else {
        head
    }
}
