//! Space-wide operation grants.
//!
//! Some operations are granted at the space level through roles,
//! independent of any per-category assignment — most importantly
//! forum moderation. A positive moderation check lets the resolver
//! skip assignment scanning entirely and hand out the `Moderator`
//! bundle.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Operations grantable space-wide through a role.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct SpaceOperation: u8 {
        /// Create new post categories.
        const CREATE_FORUM_CATEGORY = 0b001;
        /// Moderate every category and post in the space.
        const MODERATE_FORUMS       = 0b010;
        /// Delete any post regardless of author.
        const DELETE_ANY_POST       = 0b100;
    }
}

impl SpaceOperation {
    /// Returns a human-readable list of set operation names.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.contains(Self::CREATE_FORUM_CATEGORY) {
            names.push("CREATE_FORUM_CATEGORY");
        }
        if self.contains(Self::MODERATE_FORUMS) {
            names.push("MODERATE_FORUMS");
        }
        if self.contains(Self::DELETE_ANY_POST) {
            names.push("DELETE_ANY_POST");
        }
        names
    }
}

impl std::fmt::Display for SpaceOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = self.names();
        if names.is_empty() {
            write!(f, "(none)")
        } else {
            write!(f, "{}", names.join(" | "))
        }
    }
}

/// A space-level operation grant held by a role.
///
/// Loaded by the membership store for the roles the requester holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceGrant {
    /// The operations this grant confers.
    pub operations: SpaceOperation,
}
