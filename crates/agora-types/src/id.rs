//! Identifier types for Agora.
//!
//! All identifiers are UUID-based. Each entity kind gets its own
//! newtype so that a `PostId` can never be passed where a
//! `CategoryId` is expected — the permission resolver leans on this
//! to keep the category/post code paths apart.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for a Space (tenant boundary).
///
/// Every permission computation is scoped to exactly one space.
///
/// # Example
///
/// ```
/// use agora_types::SpaceId;
///
/// let a = SpaceId::new();
/// let b = SpaceId::new();
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpaceId(pub Uuid);

impl SpaceId {
    /// Creates a new [`SpaceId`] with a random UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SpaceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SpaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "space:{}", self.0)
    }
}

/// Identifier for a User.
///
/// A user exists independently of any space; membership in a space is
/// recorded separately as a [`SpaceRole`](crate::SpaceRole) row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Creates a new [`UserId`] with a random UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user:{}", self.0)
    }
}

/// Identifier for a Role (named grouping of users within a space).
///
/// The permission engine only ever references roles by id; role
/// membership and naming are owned by other subsystems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleId(pub Uuid);

impl RoleId {
    /// Creates a new [`RoleId`] with a random UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for RoleId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RoleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "role:{}", self.0)
    }
}

/// Identifier for a post Category (container resource).
///
/// Categories carry the permission assignments that posts inherit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub Uuid);

impl CategoryId {
    /// Creates a new [`CategoryId`] with a random UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for CategoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "category:{}", self.0)
    }
}

/// Identifier for a Post (leaf resource owned by a category).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostId(pub Uuid);

impl PostId {
    /// Creates a new [`PostId`] with a random UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "post:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        assert_ne!(SpaceId::new(), SpaceId::new());
        assert_ne!(UserId::new(), UserId::new());
        assert_ne!(RoleId::new(), RoleId::new());
        assert_ne!(CategoryId::new(), CategoryId::new());
        assert_ne!(PostId::new(), PostId::new());
    }

    #[test]
    fn display_has_kind_prefix() {
        assert!(SpaceId::new().to_string().starts_with("space:"));
        assert!(UserId::new().to_string().starts_with("user:"));
        assert!(RoleId::new().to_string().starts_with("role:"));
        assert!(CategoryId::new().to_string().starts_with("category:"));
        assert!(PostId::new().to_string().starts_with("post:"));
    }

    #[test]
    fn serde_roundtrip() {
        let id = PostId::new();
        let json = serde_json::to_string(&id).expect("serialize");
        let parsed: PostId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, id);
    }

    #[test]
    fn uuid_accessor_matches_inner() {
        let id = CategoryId::new();
        assert_eq!(id.uuid(), id.0);
    }
}
