//! Applicable assignment filtering.
//!
//! Given every assignment attached to a category and the requester's
//! [`Membership`], returns the subset that actually applies. This is
//! the trickiest invariant in the engine: **membership level changes
//! which assignment kinds are visible**, not just which levels they
//! grant.
//!
//! | Requester | Visible assignment kinds |
//! |-----------|--------------------------|
//! | Full member | `User`, `Role`, `Space` (their space), `Public` |
//! | Guest member | `Public` only |
//! | Non-member / anonymous | `Public` only |
//!
//! The guest downgrade is deliberate: a guest's membership row exists,
//! but their user identity and role grants are intentionally invisible
//! to the assignment system. Relaxing this would silently widen guest
//! access across every space.

use crate::{CategoryPermission, Membership, PermissionAssignee};
use agora_types::SpaceId;

/// Filters `assignments` down to those applying to the requester.
///
/// `resource_space_id` is the space of the resource being resolved;
/// a `Space` assignment only matches full members of that exact
/// space, so a membership in some other space grants nothing.
///
/// Applicable assignments are additive — the caller unions their
/// operation sets, with no precedence between kinds.
///
/// # Example
///
/// ```
/// use agora_perm::{filter_applicable, CategoryPermission, Membership,
///                  PermissionAssignee, PermissionLevel};
/// use agora_types::{CategoryId, SpaceId};
///
/// let space = SpaceId::new();
/// let assignments = vec![
///     CategoryPermission {
///         category_id: CategoryId::new(),
///         level: PermissionLevel::FullAccess,
///         assignee: PermissionAssignee::Space(space),
///     },
///     CategoryPermission {
///         category_id: CategoryId::new(),
///         level: PermissionLevel::View,
///         assignee: PermissionAssignee::Public,
///     },
/// ];
///
/// // Anonymous callers only see the public assignment.
/// let anon = Membership::public(None);
/// let applicable = filter_applicable(&assignments, &anon, space);
/// assert_eq!(applicable.len(), 1);
/// assert_eq!(applicable[0].level, PermissionLevel::View);
/// ```
#[must_use]
pub fn filter_applicable<'a>(
    assignments: &'a [CategoryPermission],
    requester: &Membership,
    resource_space_id: SpaceId,
) -> Vec<&'a CategoryPermission> {
    // Guests are treated as if they held no user/role identity.
    let identity_visible = requester.is_full_member();

    assignments
        .iter()
        .filter(|assignment| match assignment.assignee {
            PermissionAssignee::Public => true,
            PermissionAssignee::User(user_id) => {
                identity_visible && requester.user_id == Some(user_id)
            }
            PermissionAssignee::Role(role_id) => {
                identity_visible && requester.role_ids.contains(&role_id)
            }
            PermissionAssignee::Space(space_id) => {
                identity_visible && space_id == resource_space_id
            }
        })
        .collect()
}
