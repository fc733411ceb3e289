//! Multi-fragment response shaping
//!
//! Report output is built as an ordered sequence of small text fragments
//! (headers, per-member lines, separators). The shaper packs them greedily
//! into as few messages as fit the transport limit, never splitting a
//! fragment, so the concatenation the user sees equals the fragment join.

use crate::context::{CommandError, Context};
use thiserror::Error;
use tracing::debug;

/// Discord's hard per-message length limit, in characters
pub const MAX_MESSAGE_LEN: usize = 2000;

/// Response shaping errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    /// A single fragment cannot fit in any message; callers must size
    /// fragments conservatively (one per-member line at most)
    #[error("fragment of {len} characters exceeds the {limit} character message limit")]
    FragmentTooLarge { len: usize, limit: usize },
}

/// Pack fragments into messages of at most `limit` characters
///
/// Order-preserving and all-or-nothing: the whole sequence is validated
/// before the first message is produced.
pub fn pack(fragments: &[String], limit: usize) -> Result<Vec<String>, ShapeError> {
    for fragment in fragments {
        let len = fragment.chars().count();
        if len > limit {
            return Err(ShapeError::FragmentTooLarge { len, limit });
        }
    }

    let mut messages = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for fragment in fragments {
        let fragment_len = fragment.chars().count();
        if current_len + fragment_len > limit && !current.is_empty() {
            messages.push(std::mem::take(&mut current));
            current_len = 0;
        }
        current.push_str(fragment);
        current_len += fragment_len;
    }

    if !current.is_empty() {
        messages.push(current);
    }

    Ok(messages)
}

/// Pack fragments against the Discord limit and send them in order
///
/// Poise turns follow-on `say` calls on a slash invocation into interaction
/// follow-ups, so every packed message lands in the same reply channel.
pub async fn send_fragments(ctx: &Context<'_>, fragments: &[String]) -> Result<(), CommandError> {
    let messages = pack(fragments, MAX_MESSAGE_LEN)?;
    debug!(
        fragments = fragments.len(),
        messages = messages.len(),
        "sending shaped response"
    );

    for message in messages {
        ctx.say(message).await?;
    }

    Ok(())
}
