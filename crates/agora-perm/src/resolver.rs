//! The base resolver: orchestrates a permission computation.
//!
//! Control flow per computation:
//!
//! ```text
//! validate id → load resource → resolve membership
//!     → admin short-circuit        (full catalog)
//!     → space-override short-circuit (Moderator bundle)
//!     → assignment scan            (filter + union)
//!     → ownership bonus            (posts only)
//!     → policy pipeline            (posts only)
//! ```
//!
//! The resolver is stateless and side-effect-free: every entry point
//! is a pure function of its inputs plus read-only store lookups.
//! Identical inputs against identical stored state always produce
//! identical flags.

use crate::{
    apply_post_policies, filter_applicable, AssignmentStore, CategoryOperation, Membership,
    MembershipStore, PermissionError, PermissionLevel, PolicyContext, PostOperation,
    ResourceStore, SpaceOperation, StoreError,
};
use agora_types::{CategoryId, PostId, SpaceId, SpaceRole, UserId};
use std::sync::Arc;
use uuid::Uuid;

/// Computes effective operation flags for (resource, requester) pairs.
///
/// Holds shared handles to the three read-only stores; cheap to clone
/// and safe to share across threads.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use agora_perm::testing::MemoryStore;
/// use agora_perm::{PermissionAssignee, PermissionLevel, PermissionResolver, PostOperation};
/// use agora_types::{CategoryId, Post, PostCategory, PostId, SpaceId, UserId};
///
/// let store = Arc::new(MemoryStore::default());
/// let space = SpaceId::new();
/// let category = PostCategory { id: CategoryId::new(), space_id: space };
/// let author = UserId::new();
/// let post = Post {
///     id: PostId::new(),
///     space_id: space,
///     category_id: category.id,
///     author_id: author,
///     proposal_id: None,
/// };
/// store.insert_category(category);
/// store.insert_post(post.clone());
///
/// let resolver = PermissionResolver::new(store.clone(), store.clone(), store);
/// let flags = resolver
///     .compute_post_permissions(&post.id.uuid().to_string(), Some(author), None)
///     .expect("resolves");
///
/// // The author floor: view, edit and delete on their own post.
/// assert!(flags.contains(PostOperation::VIEW | PostOperation::EDIT | PostOperation::DELETE));
/// ```
#[derive(Clone)]
pub struct PermissionResolver {
    resources: Arc<dyn ResourceStore>,
    memberships: Arc<dyn MembershipStore>,
    assignments: Arc<dyn AssignmentStore>,
}

impl PermissionResolver {
    /// Creates a resolver over the given stores.
    #[must_use]
    pub fn new(
        resources: Arc<dyn ResourceStore>,
        memberships: Arc<dyn MembershipStore>,
        assignments: Arc<dyn AssignmentStore>,
    ) -> Self {
        Self {
            resources,
            memberships,
            assignments,
        }
    }

    /// Computes the operation flags a requester holds on a category.
    ///
    /// `pre_computed` is an optimization hint: a membership row the
    /// caller already resolved in the same request. When it matches
    /// the resource's space and the requesting user it is used
    /// verbatim instead of a second lookup.
    ///
    /// # Errors
    ///
    /// - [`PermissionError::InvalidInput`] if `resource_id` is not a UUID
    /// - [`PermissionError::CategoryNotFound`] if no such category exists
    /// - [`PermissionError::Store`] if a lookup fails
    pub fn compute_category_permissions(
        &self,
        resource_id: &str,
        user_id: Option<UserId>,
        pre_computed: Option<&SpaceRole>,
    ) -> Result<CategoryOperation, PermissionError> {
        let category_id = CategoryId(parse_resource_id(resource_id)?);
        let category = self
            .resources
            .load_category(category_id)?
            .ok_or(PermissionError::CategoryNotFound(category_id))?;

        let membership = self.resolve_membership(category.space_id, user_id, pre_computed)?;

        if membership.is_admin {
            tracing::debug!(category = %category_id, "admin short-circuit");
            return Ok(CategoryOperation::ALL);
        }

        if self.has_space_wide_operation(
            category.space_id,
            &membership,
            SpaceOperation::MODERATE_FORUMS,
        )? {
            tracing::debug!(category = %category_id, "space-wide moderator short-circuit");
            return Ok(PermissionLevel::Moderator.category_operations());
        }

        let assignments = self.assignments.load_category_permissions(category_id)?;
        let applicable = filter_applicable(&assignments, &membership, category.space_id);
        let flags = applicable
            .iter()
            .fold(CategoryOperation::empty(), |flags, assignment| {
                flags | assignment.level.category_operations()
            });

        tracing::debug!(category = %category_id, flags = %flags, "resolved from assignments");
        Ok(flags)
    }

    /// Computes the operation flags a requester holds on a post,
    /// after the policy pipeline.
    ///
    /// # Errors
    ///
    /// - [`PermissionError::InvalidInput`] if `resource_id` is not a UUID
    /// - [`PermissionError::PostNotFound`] if no such post exists
    /// - [`PermissionError::Store`] if a lookup fails
    pub fn compute_post_permissions(
        &self,
        resource_id: &str,
        user_id: Option<UserId>,
        pre_computed: Option<&SpaceRole>,
    ) -> Result<PostOperation, PermissionError> {
        let post_id = PostId(parse_resource_id(resource_id)?);
        let post = self
            .resources
            .load_post(post_id)?
            .ok_or(PermissionError::PostNotFound(post_id))?;

        let membership = self.resolve_membership(post.space_id, user_id, pre_computed)?;
        let flags = self.base_post_flags(&post, &membership)?;

        let ctx = PolicyContext {
            post: &post,
            membership: &membership,
        };
        Ok(apply_post_policies(&ctx, flags))
    }

    /// Computes a post's flags *before* the policy pipeline.
    ///
    /// Exposed for hosts that need the raw grant picture, e.g. an
    /// administrative "who can do what" view. Regular access checks
    /// should use [`compute_post_permissions`](Self::compute_post_permissions).
    ///
    /// # Errors
    ///
    /// Same as [`compute_post_permissions`](Self::compute_post_permissions).
    pub fn compute_base_post_permissions(
        &self,
        resource_id: &str,
        user_id: Option<UserId>,
        pre_computed: Option<&SpaceRole>,
    ) -> Result<PostOperation, PermissionError> {
        let post_id = PostId(parse_resource_id(resource_id)?);
        let post = self
            .resources
            .load_post(post_id)?
            .ok_or(PermissionError::PostNotFound(post_id))?;

        let membership = self.resolve_membership(post.space_id, user_id, pre_computed)?;
        self.base_post_flags(&post, &membership)
    }

    fn base_post_flags(
        &self,
        post: &agora_types::Post,
        membership: &Membership,
    ) -> Result<PostOperation, PermissionError> {
        let mut flags = if membership.is_admin {
            tracing::debug!(post = %post.id, "admin short-circuit");
            PostOperation::ALL
        } else if self.has_space_wide_operation(
            post.space_id,
            membership,
            SpaceOperation::MODERATE_FORUMS,
        )? {
            tracing::debug!(post = %post.id, "space-wide moderator short-circuit");
            PermissionLevel::Moderator.post_operations()
        } else {
            // Post-level overrides replace the category's assignments
            // when present; the common case is inheriting the category.
            let mut assignments = self.assignments.load_post_permissions(post.id)?;
            if assignments.is_empty() {
                assignments = self
                    .assignments
                    .load_category_permissions(post.category_id)?;
            }
            let applicable = filter_applicable(&assignments, membership, post.space_id);
            applicable
                .iter()
                .fold(PostOperation::empty(), |flags, assignment| {
                    flags | assignment.level.post_operations()
                })
        };

        // The author floor holds on every branch; for admins and
        // moderators it is already contained in their bundle.
        if membership.user_id == Some(post.author_id) {
            flags |= PostOperation::OWNER_BONUS;
        }

        Ok(flags)
    }

    fn resolve_membership(
        &self,
        space_id: SpaceId,
        user_id: Option<UserId>,
        pre_computed: Option<&SpaceRole>,
    ) -> Result<Membership, PermissionError> {
        if let Some(row) = pre_computed {
            // Use the hint verbatim, but only when it actually belongs
            // to this space and this requester.
            if row.space_id == space_id && Some(row.user_id) == user_id {
                return Ok(Membership::from_space_role(row));
            }
        }

        let Some(user_id) = user_id else {
            return Ok(Membership::public(None));
        };

        match self.memberships.load_space_role(space_id, user_id)? {
            Some(row) => Ok(Membership::from_space_role(&row)),
            // Valid absence: an authenticated non-member resolves to
            // the public facts, never an error.
            None => Ok(Membership::public(Some(user_id))),
        }
    }

    fn has_space_wide_operation(
        &self,
        space_id: SpaceId,
        membership: &Membership,
        operation: SpaceOperation,
    ) -> Result<bool, StoreError> {
        if membership.is_admin {
            return Ok(true);
        }
        if membership.role_ids.is_empty() {
            return Ok(false);
        }

        let role_ids: Vec<_> = membership.role_ids.iter().copied().collect();
        let grants = self.memberships.load_space_grants(space_id, &role_ids)?;
        Ok(grants
            .iter()
            .any(|grant| grant.operations.contains(operation)))
    }
}

fn parse_resource_id(resource_id: &str) -> Result<Uuid, PermissionError> {
    Uuid::parse_str(resource_id).map_err(|_| PermissionError::InvalidInput {
        reason: format!("resource id is not a UUID: '{resource_id}'"),
    })
}
