//! Read-only store traits the engine consumes.
//!
//! The engine owns no storage. Hosts implement these traits over
//! their database; tests use [`MemoryStore`](crate::testing::MemoryStore).
//!
//! # Architecture
//!
//! ```text
//! ResourceStore / MembershipStore / AssignmentStore (agora-perm)  ← trait definitions
//!          │
//!          ├── host database adapters        ← production impls
//!          └── testing::MemoryStore          ← in-memory impl
//! ```
//!
//! # Failure Semantics
//!
//! A store failure fails the whole computation. The engine never
//! downgrades an error into an empty permission set — an
//! under-privileged-looking-but-wrong answer would be
//! indistinguishable from a real "no access" result. The only
//! sanctioned absence is a missing membership row, which is modelled
//! as `Ok(None)`, not as an error.

use crate::{CategoryPermission, SpaceGrant};
use agora_types::{CategoryId, Post, PostCategory, PostId, RoleId, SpaceId, SpaceRole, UserId};
use thiserror::Error;

/// An opaque failure raised by a store implementation.
///
/// The engine propagates these untouched; retry policy, if any,
/// belongs to the store client.
#[derive(Debug, Error)]
#[error("store error: {0}")]
pub struct StoreError(pub String);

impl StoreError {
    /// Wraps any error into a [`StoreError`], preserving its message.
    #[must_use]
    pub fn new(err: impl std::fmt::Display) -> Self {
        Self(err.to_string())
    }
}

/// Loads protected resources by id.
///
/// `Ok(None)` means the resource does not exist (or was deleted); the
/// resolver maps that to its NotFound error.
pub trait ResourceStore: Send + Sync {
    /// Loads a category by id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the lookup itself fails.
    fn load_category(&self, id: CategoryId) -> Result<Option<PostCategory>, StoreError>;

    /// Loads a post by id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the lookup itself fails.
    fn load_post(&self, id: PostId) -> Result<Option<Post>, StoreError>;
}

/// Loads membership facts and space-level role grants.
pub trait MembershipStore: Send + Sync {
    /// Loads the membership row for a (space, user) pair.
    ///
    /// `Ok(None)` is the normal answer for non-members — never an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the lookup itself fails.
    fn load_space_role(
        &self,
        space_id: SpaceId,
        user_id: UserId,
    ) -> Result<Option<SpaceRole>, StoreError>;

    /// Loads the space-level operation grants attached to any of the
    /// given roles.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the lookup itself fails.
    fn load_space_grants(
        &self,
        space_id: SpaceId,
        role_ids: &[RoleId],
    ) -> Result<Vec<SpaceGrant>, StoreError>;
}

/// Loads permission assignments.
pub trait AssignmentStore: Send + Sync {
    /// Loads every assignment attached to a category.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the lookup itself fails.
    fn load_category_permissions(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<CategoryPermission>, StoreError>;

    /// Loads assignments attached directly to a post.
    ///
    /// Usually empty — posts inherit their category's assignments.
    /// When non-empty, the post's own rows replace the category's.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the lookup itself fails.
    fn load_post_permissions(&self, post_id: PostId)
        -> Result<Vec<CategoryPermission>, StoreError>;
}
