//! Prompt augmentation.

/// Instruction appended to every user prompt to bias the model toward
/// code-only output.
pub const CODE_ONLY_SUFFIX: &str =
    "\nProvide only the code as output. Do not include any explanations, comments, or introductory text.";

/// Append the code-only instruction to a raw user prompt.
pub fn augment(prompt: &str) -> String {
    format!("{prompt}{CODE_ONLY_SUFFIX}")
}
