//! Permission assignments and their assignees.
//!
//! An assignment attaches a [`PermissionLevel`] to an identity on a
//! category. Assignments are additive: the resolver unions the
//! operation sets of every applicable assignment and never subtracts.

use crate::PermissionLevel;
use agora_types::{CategoryId, RoleId, SpaceId, UserId};
use serde::{Deserialize, Serialize};

/// The identity a permission assignment targets.
///
/// # Example
///
/// ```
/// use agora_perm::PermissionAssignee;
/// use agora_types::UserId;
///
/// let assignee = PermissionAssignee::User(UserId::new());
/// assert!(matches!(assignee, PermissionAssignee::User(_)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PermissionAssignee {
    /// A single user.
    User(UserId),
    /// Every holder of a role.
    Role(RoleId),
    /// Every full member of a space. Guests and anonymous callers
    /// never match a space assignment.
    Space(SpaceId),
    /// Everyone: full members, guests, non-members and anonymous
    /// callers. A public assignment acts as a floor.
    Public,
}

/// A permission level granted to an assignee on a category.
///
/// Posts normally inherit their owning category's assignments; a post
/// carries its own rows only when the host explicitly overrides them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPermission {
    /// The category the assignment is attached to.
    pub category_id: CategoryId,
    /// The granted level.
    pub level: PermissionLevel,
    /// Who the grant targets.
    pub assignee: PermissionAssignee,
}
