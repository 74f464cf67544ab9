// Meal Plan Generation Pipeline
// Implements: batch scheduling, prompt building, response normalization, plan assembly.
// All model calls go through the TextGenerator seam — no direct Anthropic calls here.

pub mod assembler;
pub mod batching;
pub mod generator;
pub mod handlers;
pub mod normalize;
pub mod prompts;
