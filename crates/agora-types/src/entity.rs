//! Read-only domain entities consumed by the permission engine.
//!
//! These structs mirror stored rows. The engine never mutates them —
//! they are created, edited and deleted by other subsystems and only
//! read during permission resolution.

use crate::{CategoryId, PostId, RoleId, SpaceId, UserId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user's membership record within a space.
///
/// Exactly one row exists per (user, space) pair; absence of a row
/// means the user is not a member and is treated as a member of the
/// public. Guests hold a row with `is_guest: true` and receive
/// deliberately weaker treatment during assignment filtering.
///
/// # Example
///
/// ```
/// use agora_types::{SpaceRole, SpaceId, UserId};
///
/// let membership = SpaceRole {
///     user_id: UserId::new(),
///     space_id: SpaceId::new(),
///     is_admin: false,
///     is_guest: false,
///     role_ids: vec![],
/// };
/// assert!(!membership.is_admin);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceRole {
    /// The member.
    pub user_id: UserId,
    /// The space this membership belongs to.
    pub space_id: SpaceId,
    /// Space administrators receive the full operation catalog for
    /// every resource in the space (policies still apply).
    pub is_admin: bool,
    /// Guest-level members only ever receive public assignments.
    pub is_guest: bool,
    /// Roles held via role assignment, resolved by the membership store.
    pub role_ids: Vec<RoleId>,
}

/// A post category: the container resource that carries permission
/// assignments for the posts inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostCategory {
    pub id: CategoryId,
    pub space_id: SpaceId,
}

/// A forum post: the leaf resource.
///
/// Permission assignments normally live on the owning category; a
/// post only carries its own when the host explicitly overrides them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub space_id: SpaceId,
    /// The category whose assignments this post inherits.
    pub category_id: CategoryId,
    /// The creator. Authors keep a floor of view/edit/delete on their
    /// own posts regardless of assignments.
    pub author_id: UserId,
    /// Set when the post has been converted into a proposal. Converted
    /// posts become read-mostly for everyone but admins.
    pub proposal_id: Option<Uuid>,
}

impl Post {
    /// Returns `true` if this post has been converted into a proposal.
    ///
    /// # Example
    ///
    /// ```
    /// use agora_types::{Post, PostId, CategoryId, SpaceId, UserId};
    ///
    /// let mut post = Post {
    ///     id: PostId::new(),
    ///     space_id: SpaceId::new(),
    ///     category_id: CategoryId::new(),
    ///     author_id: UserId::new(),
    ///     proposal_id: None,
    /// };
    /// assert!(!post.is_converted());
    ///
    /// post.proposal_id = Some(uuid::Uuid::new_v4());
    /// assert!(post.is_converted());
    /// ```
    #[must_use]
    pub fn is_converted(&self) -> bool {
        self.proposal_id.is_some()
    }
}
