// System prompt shared by every structured-output call.
// Pipeline-specific user prompts live next to their pipeline (see meal_plan/prompts.rs).

/// Asks for bare JSON. Models still sometimes wrap or annotate the output,
/// so callers normalize before decoding.
pub const JSON_ONLY_SYSTEM: &str = "You are a clinical nutrition assistant that writes meal plans as data. \
    Reply with valid JSON only, exactly in the shape the user asks for. \
    No prose before or after the JSON. \
    No markdown code fences. \
    No comments inside the JSON.";
