//! Operation catalogs per resource kind.
//!
//! Defines the fixed, enumerable set of atomic operations for each
//! protected resource kind. The resolver's output is a set drawn from
//! one of these catalogs.
//!
//! # Closed World
//!
//! A bitflags set is closed-world by construction: every operation in
//! the catalog has a defined answer (`contains` returns `false` for
//! absent bits), so callers never need to special-case missing keys.
//!
//! # Example
//!
//! ```
//! use agora_perm::PostOperation;
//!
//! let flags = PostOperation::VIEW | PostOperation::ADD_COMMENT;
//! assert!(flags.contains(PostOperation::VIEW));
//! assert!(!flags.contains(PostOperation::EDIT));
//! ```

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Atomic operations on a post.
    ///
    /// | Operation | Meaning |
    /// |-----------|---------|
    /// | [`VIEW`](Self::VIEW) | Read the post |
    /// | [`EDIT`](Self::EDIT) | Edit title/content |
    /// | [`DELETE`](Self::DELETE) | Delete the post |
    /// | [`ADD_COMMENT`](Self::ADD_COMMENT) | Comment on the post |
    /// | [`UPVOTE`](Self::UPVOTE) / [`DOWNVOTE`](Self::DOWNVOTE) | Vote |
    /// | [`PIN`](Self::PIN) / [`LOCK`](Self::LOCK) | Moderation controls |
    /// | [`DELETE_COMMENTS`](Self::DELETE_COMMENTS) | Moderate other users' comments |
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct PostOperation: u16 {
        /// Read the post.
        const VIEW            = 0b0_0000_0001;
        /// Edit the post's title and content.
        const EDIT            = 0b0_0000_0010;
        /// Delete the post.
        const DELETE          = 0b0_0000_0100;
        /// Add a comment.
        const ADD_COMMENT     = 0b0_0000_1000;
        /// Upvote the post.
        const UPVOTE          = 0b0_0001_0000;
        /// Downvote the post.
        const DOWNVOTE        = 0b0_0010_0000;
        /// Pin the post to the top of its category.
        const PIN             = 0b0_0100_0000;
        /// Lock the post against further comments.
        const LOCK            = 0b0_1000_0000;
        /// Delete other users' comments.
        const DELETE_COMMENTS = 0b1_0000_0000;
    }
}

impl PostOperation {
    /// The full post operation catalog.
    pub const ALL: Self = Self::all();

    /// The owner bonus: an author always keeps at least these on
    /// their own post, regardless of assignments.
    pub const OWNER_BONUS: Self = Self::VIEW.union(Self::EDIT).union(Self::DELETE);

    /// Returns a human-readable list of set operation names.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.contains(Self::VIEW) {
            names.push("VIEW");
        }
        if self.contains(Self::EDIT) {
            names.push("EDIT");
        }
        if self.contains(Self::DELETE) {
            names.push("DELETE");
        }
        if self.contains(Self::ADD_COMMENT) {
            names.push("ADD_COMMENT");
        }
        if self.contains(Self::UPVOTE) {
            names.push("UPVOTE");
        }
        if self.contains(Self::DOWNVOTE) {
            names.push("DOWNVOTE");
        }
        if self.contains(Self::PIN) {
            names.push("PIN");
        }
        if self.contains(Self::LOCK) {
            names.push("LOCK");
        }
        if self.contains(Self::DELETE_COMMENTS) {
            names.push("DELETE_COMMENTS");
        }
        names
    }
}

impl std::fmt::Display for PostOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = self.names();
        if names.is_empty() {
            write!(f, "(none)")
        } else {
            write!(f, "{}", names.join(" | "))
        }
    }
}

bitflags! {
    /// Atomic operations on a post category.
    ///
    /// | Operation | Meaning |
    /// |-----------|---------|
    /// | [`CREATE_POST`](Self::CREATE_POST) | Create a post inside the category |
    /// | [`VIEW_POSTS`](Self::VIEW_POSTS) | List and read the category's posts |
    /// | [`COMMENT_POSTS`](Self::COMMENT_POSTS) | Comment within the category |
    /// | [`EDIT_CATEGORY`](Self::EDIT_CATEGORY) | Rename/describe the category |
    /// | [`DELETE_CATEGORY`](Self::DELETE_CATEGORY) | Delete the category |
    /// | [`MANAGE_PERMISSIONS`](Self::MANAGE_PERMISSIONS) | Edit the category's assignments |
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CategoryOperation: u16 {
        /// Create a post inside the category.
        const CREATE_POST        = 0b00_0001;
        /// List and read the category's posts.
        const VIEW_POSTS         = 0b00_0010;
        /// Comment on posts within the category.
        const COMMENT_POSTS      = 0b00_0100;
        /// Rename or re-describe the category.
        const EDIT_CATEGORY      = 0b00_1000;
        /// Delete the category.
        const DELETE_CATEGORY    = 0b01_0000;
        /// Edit the category's permission assignments.
        const MANAGE_PERMISSIONS = 0b10_0000;
    }
}

impl CategoryOperation {
    /// The full category operation catalog.
    pub const ALL: Self = Self::all();

    /// Returns a human-readable list of set operation names.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.contains(Self::CREATE_POST) {
            names.push("CREATE_POST");
        }
        if self.contains(Self::VIEW_POSTS) {
            names.push("VIEW_POSTS");
        }
        if self.contains(Self::COMMENT_POSTS) {
            names.push("COMMENT_POSTS");
        }
        if self.contains(Self::EDIT_CATEGORY) {
            names.push("EDIT_CATEGORY");
        }
        if self.contains(Self::DELETE_CATEGORY) {
            names.push("DELETE_CATEGORY");
        }
        if self.contains(Self::MANAGE_PERMISSIONS) {
            names.push("MANAGE_PERMISSIONS");
        }
        names
    }
}

impl std::fmt::Display for CategoryOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = self.names();
        if names.is_empty() {
            write!(f, "(none)")
        } else {
            write!(f, "{}", names.join(" | "))
        }
    }
}
