//! Engine error taxonomy.
//!
//! Exactly three kinds of failure can abort a computation:
//!
//! ```text
//! InvalidInput   — malformed resource identifier (caller bug)
//! *NotFound      — resource absent or deleted (404-equivalent)
//! Store          — a lookup store failed (propagated untouched)
//! ```
//!
//! No partial flags are ever returned alongside an error, and a
//! missing membership row is **not** an error — it resolves to the
//! public membership facts.

use crate::StoreError;
use agora_types::{CategoryId, PostId};
use thiserror::Error;

/// Failure modes of a permission computation.
///
/// The host API layer decides how each kind maps to a response; the
/// engine only guarantees the kinds are distinguishable.
///
/// # Example
///
/// ```
/// use agora_perm::PermissionError;
///
/// let err = PermissionError::InvalidInput {
///     reason: "resource id is not a UUID: 'text'".to_string(),
/// };
/// assert!(err.to_string().contains("invalid input"));
/// ```
#[derive(Debug, Error)]
pub enum PermissionError {
    /// The resource identifier is not well-formed. Surfaced
    /// immediately, never retried.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input.
        reason: String,
    },

    /// The post does not exist.
    #[error("post not found: {0}")]
    PostNotFound(PostId),

    /// The category does not exist.
    #[error("category not found: {0}")]
    CategoryNotFound(CategoryId),

    /// A lookup store failed. The computation aborts; nothing is
    /// downgraded to an empty permission set.
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_display() {
        let err = PermissionError::InvalidInput {
            reason: "resource id is not a UUID: 'text'".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("invalid input"), "got: {msg}");
        assert!(msg.contains("text"), "got: {msg}");
    }

    #[test]
    fn not_found_display_names_the_resource() {
        let post = PostId::new();
        let err = PermissionError::PostNotFound(post);
        assert!(err.to_string().contains(&post.to_string()), "got: {err}");

        let category = CategoryId::new();
        let err = PermissionError::CategoryNotFound(category);
        assert!(err.to_string().contains(&category.to_string()), "got: {err}");
    }

    #[test]
    fn store_error_is_transparent() {
        let err = PermissionError::from(StoreError("timeout".to_string()));
        assert_eq!(err.to_string(), "store error: timeout");
        assert!(matches!(err, PermissionError::Store(_)));
    }
}
