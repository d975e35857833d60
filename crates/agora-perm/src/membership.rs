//! Requester membership facts.
//!
//! [`Membership`] is the engine's view of "who is asking": whether
//! they belong to the resource's space, at what level, and which
//! roles they hold. A missing membership row is a valid, common case
//! — it resolves to the public facts, never an error.

use agora_types::{RoleId, SpaceRole, UserId};
use std::collections::HashSet;

/// Membership facts for a requester within one space.
///
/// Constructed either from a stored [`SpaceRole`] row or as the
/// public facts for anonymous callers and non-members.
///
/// # Example
///
/// ```
/// use agora_perm::Membership;
/// use agora_types::UserId;
///
/// // Anonymous caller
/// let anon = Membership::public(None);
/// assert!(!anon.is_member);
///
/// // Authenticated but not a member of this space
/// let outsider = Membership::public(Some(UserId::new()));
/// assert!(!outsider.is_member);
/// assert!(outsider.user_id.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    /// The requester's id, if authenticated. Kept alongside the facts
    /// so the assignment filter can match user-targeted assignments.
    pub user_id: Option<UserId>,
    /// `true` if the requester holds a membership row in the space.
    pub is_member: bool,
    /// Space administrators bypass assignment scanning entirely.
    pub is_admin: bool,
    /// Guest-level members only receive public assignments.
    pub is_guest: bool,
    /// Roles held within the space. Empty for guests, non-members and
    /// anonymous callers.
    pub role_ids: HashSet<RoleId>,
}

impl Membership {
    /// Facts for a requester with no membership in the space:
    /// anonymous callers and authenticated non-members alike.
    #[must_use]
    pub fn public(user_id: Option<UserId>) -> Self {
        Self {
            user_id,
            is_member: false,
            is_admin: false,
            is_guest: false,
            role_ids: HashSet::new(),
        }
    }

    /// Facts derived from a stored membership row.
    ///
    /// Guests are stripped of their role ids here, at the single
    /// construction point: a guest's role grants are invisible to the
    /// whole engine, including the space-wide override check.
    #[must_use]
    pub fn from_space_role(role: &SpaceRole) -> Self {
        let role_ids = if role.is_guest {
            HashSet::new()
        } else {
            role.role_ids.iter().copied().collect()
        };
        Self {
            user_id: Some(role.user_id),
            is_member: true,
            is_admin: role.is_admin,
            is_guest: role.is_guest,
            role_ids,
        }
    }

    /// Returns `true` for members who are neither guests nor merely
    /// public — the only requesters eligible for space assignments.
    #[must_use]
    pub fn is_full_member(&self) -> bool {
        self.is_member && !self.is_guest
    }
}
