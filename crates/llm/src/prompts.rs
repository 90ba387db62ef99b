//! Fixed instruction strings for the persona chain

/// Task description for the base persona-post template
pub const PERSONA_POST_INSTRUCTION: &str =
    "Generate a LinkedIn post in the persona's unique style.";

/// Task description for the refinement template
pub const REFINEMENT_INSTRUCTION: &str =
    "Refine persona post for style, tone, and clarity.";

/// Wrap a draft post in the persona styling instructions
pub fn refinement_prompt(persona_name: &str, draft: &str) -> String {
    format!(
        "Refine the following LinkedIn post in {}-style:\n\n{}\n\n\
         Instructions:\n\
         - Keep tone inspirational and conversational\n\
         - Make post concise and engaging\n\
         - Include actionable points if possible\n\
         - Ensure readability for LinkedIn audience\n",
        persona_name, draft
    )
}
