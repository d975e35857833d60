//! Permission levels and their operation mappings.
//!
//! A [`PermissionLevel`] is a named bundle that expands to a fixed
//! subset of a resource kind's operation catalog. The enum is closed:
//! levels are controlled by this crate, never by user input, so the
//! mapping tables are exhaustive `match`es — adding an operation or a
//! level forces every table to be revisited at compile time.
//!
//! # Hierarchy Is Conventional Only
//!
//! `Moderator` happens to be a superset of `FullAccess` in practice,
//! but nothing here relies on that. The resolver always computes by
//! explicit union over applicable assignments.

use crate::{CategoryOperation, PostOperation};
use serde::{Deserialize, Serialize};

/// A named permission level assignable on a category.
///
/// # Example
///
/// ```
/// use agora_perm::{PermissionLevel, PostOperation};
///
/// let ops = PermissionLevel::View.post_operations();
/// assert_eq!(ops, PostOperation::VIEW);
///
/// let full = PermissionLevel::FullAccess.post_operations();
/// assert!(full.contains(PostOperation::EDIT));
/// assert!(!full.contains(PostOperation::PIN));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionLevel {
    /// Read-only access.
    View,
    /// Read plus commenting and voting.
    CommentVote,
    /// Member-level access: create and interact, edit own content.
    FullAccess,
    /// Moderation bundle; also granted via the space-wide
    /// moderation override.
    Moderator,
    /// Full control of the category and everything in it.
    CategoryAdmin,
}

impl PermissionLevel {
    /// Expands this level into the post operation catalog.
    #[must_use]
    pub fn post_operations(self) -> PostOperation {
        match self {
            Self::View => PostOperation::VIEW,
            Self::CommentVote => PostOperation::VIEW
                .union(PostOperation::ADD_COMMENT)
                .union(PostOperation::UPVOTE)
                .union(PostOperation::DOWNVOTE),
            Self::FullAccess => PostOperation::VIEW
                .union(PostOperation::EDIT)
                .union(PostOperation::ADD_COMMENT)
                .union(PostOperation::UPVOTE)
                .union(PostOperation::DOWNVOTE),
            Self::Moderator | Self::CategoryAdmin => PostOperation::ALL,
        }
    }

    /// Expands this level into the category operation catalog.
    #[must_use]
    pub fn category_operations(self) -> CategoryOperation {
        match self {
            Self::View => CategoryOperation::VIEW_POSTS,
            Self::CommentVote => {
                CategoryOperation::VIEW_POSTS.union(CategoryOperation::COMMENT_POSTS)
            }
            // A category moderator manages posts, not the category
            // itself: same category surface as a full member.
            Self::FullAccess | Self::Moderator => CategoryOperation::CREATE_POST
                .union(CategoryOperation::VIEW_POSTS)
                .union(CategoryOperation::COMMENT_POSTS),
            Self::CategoryAdmin => CategoryOperation::ALL,
        }
    }
}

impl std::fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::View => "view",
            Self::CommentVote => "comment_vote",
            Self::FullAccess => "full_access",
            Self::Moderator => "moderator",
            Self::CategoryAdmin => "category_admin",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVELS: [PermissionLevel; 5] = [
        PermissionLevel::View,
        PermissionLevel::CommentVote,
        PermissionLevel::FullAccess,
        PermissionLevel::Moderator,
        PermissionLevel::CategoryAdmin,
    ];

    #[test]
    fn every_level_maps_to_non_empty_sets() {
        for level in LEVELS {
            assert!(!level.post_operations().is_empty(), "post ops for {level}");
            assert!(
                !level.category_operations().is_empty(),
                "category ops for {level}"
            );
        }
    }

    #[test]
    fn view_is_read_only() {
        assert_eq!(PermissionLevel::View.post_operations(), PostOperation::VIEW);
        assert_eq!(
            PermissionLevel::View.category_operations(),
            CategoryOperation::VIEW_POSTS
        );
    }

    #[test]
    fn full_access_carries_edit_on_posts() {
        let ops = PermissionLevel::FullAccess.post_operations();
        assert!(ops.contains(PostOperation::EDIT));
        assert!(!ops.contains(PostOperation::PIN));
        assert!(!ops.contains(PostOperation::DELETE_COMMENTS));
    }

    #[test]
    fn moderator_spans_full_post_catalog() {
        assert_eq!(PermissionLevel::Moderator.post_operations(), PostOperation::ALL);
    }

    #[test]
    fn moderator_does_not_manage_the_category_itself() {
        let ops = PermissionLevel::Moderator.category_operations();
        assert!(ops.contains(CategoryOperation::CREATE_POST));
        assert!(!ops.contains(CategoryOperation::EDIT_CATEGORY));
        assert!(!ops.contains(CategoryOperation::MANAGE_PERMISSIONS));
    }

    #[test]
    fn category_admin_spans_both_catalogs() {
        assert_eq!(
            PermissionLevel::CategoryAdmin.category_operations(),
            CategoryOperation::ALL
        );
        assert_eq!(
            PermissionLevel::CategoryAdmin.post_operations(),
            PostOperation::ALL
        );
    }

    #[test]
    fn serde_uses_snake_case_names() {
        let json = serde_json::to_string(&PermissionLevel::FullAccess).expect("serialize");
        assert_eq!(json, "\"full_access\"");
        let parsed: PermissionLevel = serde_json::from_str("\"category_admin\"").expect("parse");
        assert_eq!(parsed, PermissionLevel::CategoryAdmin);
    }
}
