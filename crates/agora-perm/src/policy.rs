//! Post-resolution policy pipeline.
//!
//! Policies are pure functions applied in a fixed declared order
//! after the base resolver has computed flags. They encode lifecycle
//! rules that hold regardless of *who granted what* — the same
//! restriction applies whether the requester reached their base flags
//! via admin short-circuit, moderator override or assignment union.
//!
//! Policies only ever **restrict**; a resource kind with no policies
//! (categories) is the identity pipeline.
//!
//! # Registered Post Policies
//!
//! 1. [`only_author_edits`] — nobody edits a post they did not write,
//!    admins and moderators included.
//! 2. [`converted_post_restrictions`] — a post converted into a
//!    proposal becomes read-mostly: admins keep their flags, the
//!    author drops to view/delete, everyone else loses edit.

use crate::{Membership, PostOperation};
use agora_types::Post;

/// Everything a policy may inspect.
#[derive(Debug)]
pub struct PolicyContext<'a> {
    /// The post being resolved.
    pub post: &'a Post,
    /// The requester's membership facts.
    pub membership: &'a Membership,
}

impl PolicyContext<'_> {
    /// Returns `true` if the requester authored the post.
    #[must_use]
    pub fn is_author(&self) -> bool {
        self.membership.user_id == Some(self.post.author_id)
    }
}

/// A pure post-processing rule over computed flags.
pub type PostPolicy = fn(&PolicyContext<'_>, PostOperation) -> PostOperation;

/// The post policy pipeline, in application order.
pub const POST_POLICIES: &[PostPolicy] = &[only_author_edits, converted_post_restrictions];

/// Runs `flags` through every policy in [`POST_POLICIES`].
///
/// Later policies see the output of earlier ones.
#[must_use]
pub fn apply_post_policies(ctx: &PolicyContext<'_>, flags: PostOperation) -> PostOperation {
    POST_POLICIES
        .iter()
        .fold(flags, |flags, policy| policy(ctx, flags))
}

/// Only the author may edit a post.
///
/// Clears `EDIT` for any requester who did not write the post. This
/// applies to space admins, category admins and moderators alike:
/// their full bundles still include pin/lock/delete, but never
/// editing someone else's words.
#[must_use]
pub fn only_author_edits(ctx: &PolicyContext<'_>, flags: PostOperation) -> PostOperation {
    if ctx.is_author() {
        flags
    } else {
        flags - PostOperation::EDIT
    }
}

/// Restrictions on posts converted into proposals.
///
/// Once a post has been promoted, discussion moves to the proposal:
///
/// - admins keep whatever they already had;
/// - the author is restricted to `VIEW | DELETE` (any bonus granted
///   elsewhere is cleared);
/// - everyone else loses `EDIT`, with all other flags untouched.
#[must_use]
pub fn converted_post_restrictions(
    ctx: &PolicyContext<'_>,
    flags: PostOperation,
) -> PostOperation {
    if !ctx.post.is_converted() {
        return flags;
    }
    if ctx.membership.is_admin {
        return flags;
    }
    if ctx.is_author() {
        flags & (PostOperation::VIEW | PostOperation::DELETE)
    } else {
        flags - PostOperation::EDIT
    }
}
