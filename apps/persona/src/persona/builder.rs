//! Prompt Builder — fills the persona template with a user's activity blocks.
//!
//! The template is static; only the post and comment blocks vary. The built
//! prompt is checked against a token budget so an oversized history fails here
//! with a clear error instead of as an opaque rejection from the model.

use tracing::debug;

use crate::errors::AppError;
use crate::persona::prompts::PERSONA_PROMPT_TEMPLATE;

const POST_SLOT: &str = "{post_block}";
const COMMENT_SLOT: &str = "{comment_block}";
/// Rough characters-per-token ratio for English text.
const CHARS_PER_TOKEN: usize = 4;

/// A composed prompt, ready for the completion service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonaPrompt {
    pub text: String,
    pub estimated_tokens: usize,
}

/// Builds the persona prompt from formatted post and comment blocks.
///
/// Blocks are joined with a blank line. Fails with `PromptTooLarge` when the
/// estimated token count exceeds `max_tokens`.
pub fn build_prompt(
    username: &str,
    posts: &[String],
    comments: &[String],
    max_tokens: usize,
) -> Result<PersonaPrompt, AppError> {
    let post_block = posts.join("\n\n");
    let comment_block = comments.join("\n\n");

    let text = render_template(&post_block, &comment_block);
    let estimated_tokens = estimate_tokens(&text);
    debug!(
        "Built persona prompt for u/{username}: {} posts, {} comments, ~{estimated_tokens} tokens",
        posts.len(),
        comments.len()
    );

    if estimated_tokens > max_tokens {
        return Err(AppError::PromptTooLarge {
            estimated_tokens,
            limit: max_tokens,
        });
    }

    Ok(PersonaPrompt {
        text,
        estimated_tokens,
    })
}

/// Substitutes each slot exactly once, so placeholder-like text inside user
/// content is left untouched.
fn render_template(post_block: &str, comment_block: &str) -> String {
    let (head, rest) = PERSONA_PROMPT_TEMPLATE
        .split_once(POST_SLOT)
        .unwrap_or((PERSONA_PROMPT_TEMPLATE, ""));
    let (middle, tail) = rest.split_once(COMMENT_SLOT).unwrap_or((rest, ""));

    let mut out = String::with_capacity(
        PERSONA_PROMPT_TEMPLATE.len() + post_block.len() + comment_block.len(),
    );
    out.push_str(head);
    out.push_str(post_block);
    out.push_str(middle);
    out.push_str(comment_block);
    out.push_str(tail);
    out
}

fn estimate_tokens(text: &str) -> usize {
    text.chars().count().div_ceil(CHARS_PER_TOKEN)
}
