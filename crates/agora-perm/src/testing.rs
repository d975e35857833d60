//! In-memory store harness for tests.
//!
//! [`MemoryStore`] implements all three store traits over hash maps,
//! so resolver behavior can be exercised without any database. It
//! uses interior mutability: tests keep one `Arc<MemoryStore>` and
//! may seed or mutate rows after the resolver has been constructed.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use agora_perm::testing::MemoryStore;
//! use agora_perm::PermissionResolver;
//! use agora_types::{PostCategory, CategoryId, SpaceId};
//!
//! let store = Arc::new(MemoryStore::default());
//! let category = PostCategory { id: CategoryId::new(), space_id: SpaceId::new() };
//! store.insert_category(category.clone());
//!
//! let resolver = PermissionResolver::new(store.clone(), store.clone(), store);
//! let flags = resolver
//!     .compute_category_permissions(&category.id.uuid().to_string(), None, None)
//!     .expect("resolves");
//! assert!(flags.is_empty());
//! ```

use crate::{
    AssignmentStore, CategoryPermission, MembershipStore, PermissionAssignee, PermissionLevel,
    ResourceStore, SpaceGrant, SpaceOperation, StoreError,
};
use agora_types::{CategoryId, Post, PostCategory, PostId, RoleId, SpaceId, SpaceRole, UserId};
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Debug, Default)]
struct Inner {
    categories: HashMap<CategoryId, PostCategory>,
    posts: HashMap<PostId, Post>,
    space_roles: HashMap<(SpaceId, UserId), SpaceRole>,
    space_grants: HashMap<(SpaceId, RoleId), SpaceOperation>,
    category_permissions: HashMap<CategoryId, Vec<CategoryPermission>>,
    post_permissions: HashMap<PostId, Vec<CategoryPermission>>,
    fail_with: Option<String>,
}

/// In-memory implementation of every engine store trait.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Inserts a category row.
    pub fn insert_category(&self, category: PostCategory) {
        self.write().categories.insert(category.id, category);
    }

    /// Inserts a post row.
    pub fn insert_post(&self, post: Post) {
        self.write().posts.insert(post.id, post);
    }

    /// Replaces a post row, e.g. to flip its conversion state.
    pub fn update_post(&self, post: Post) {
        self.insert_post(post);
    }

    /// Inserts a membership row.
    pub fn insert_space_role(&self, role: SpaceRole) {
        self.write()
            .space_roles
            .insert((role.space_id, role.user_id), role);
    }

    /// Attaches a space-level operation grant to a role.
    pub fn insert_space_grant(&self, space_id: SpaceId, role_id: RoleId, ops: SpaceOperation) {
        let mut inner = self.write();
        let entry = inner
            .space_grants
            .entry((space_id, role_id))
            .or_insert(SpaceOperation::empty());
        *entry |= ops;
    }

    /// Attaches a permission assignment to a category.
    pub fn insert_category_permission(
        &self,
        category_id: CategoryId,
        level: PermissionLevel,
        assignee: PermissionAssignee,
    ) {
        self.write()
            .category_permissions
            .entry(category_id)
            .or_default()
            .push(CategoryPermission {
                category_id,
                level,
                assignee,
            });
    }

    /// Attaches a post-level override assignment.
    pub fn insert_post_permission(
        &self,
        post_id: PostId,
        category_id: CategoryId,
        level: PermissionLevel,
        assignee: PermissionAssignee,
    ) {
        self.write()
            .post_permissions
            .entry(post_id)
            .or_default()
            .push(CategoryPermission {
                category_id,
                level,
                assignee,
            });
    }

    /// Makes every subsequent lookup fail with the given message,
    /// for store-failure propagation tests.
    pub fn fail_with(&self, message: impl Into<String>) {
        self.write().fail_with = Some(message.into());
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check_failure(inner: &Inner) -> Result<(), StoreError> {
        match &inner.fail_with {
            Some(message) => Err(StoreError(message.clone())),
            None => Ok(()),
        }
    }
}

impl ResourceStore for MemoryStore {
    fn load_category(&self, id: CategoryId) -> Result<Option<PostCategory>, StoreError> {
        let inner = self.read();
        Self::check_failure(&inner)?;
        Ok(inner.categories.get(&id).cloned())
    }

    fn load_post(&self, id: PostId) -> Result<Option<Post>, StoreError> {
        let inner = self.read();
        Self::check_failure(&inner)?;
        Ok(inner.posts.get(&id).cloned())
    }
}

impl MembershipStore for MemoryStore {
    fn load_space_role(
        &self,
        space_id: SpaceId,
        user_id: UserId,
    ) -> Result<Option<SpaceRole>, StoreError> {
        let inner = self.read();
        Self::check_failure(&inner)?;
        Ok(inner.space_roles.get(&(space_id, user_id)).cloned())
    }

    fn load_space_grants(
        &self,
        space_id: SpaceId,
        role_ids: &[RoleId],
    ) -> Result<Vec<SpaceGrant>, StoreError> {
        let inner = self.read();
        Self::check_failure(&inner)?;
        Ok(role_ids
            .iter()
            .filter_map(|role_id| inner.space_grants.get(&(space_id, *role_id)))
            .map(|&operations| SpaceGrant { operations })
            .collect())
    }
}

impl AssignmentStore for MemoryStore {
    fn load_category_permissions(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<CategoryPermission>, StoreError> {
        let inner = self.read();
        Self::check_failure(&inner)?;
        Ok(inner
            .category_permissions
            .get(&category_id)
            .cloned()
            .unwrap_or_default())
    }

    fn load_post_permissions(
        &self,
        post_id: PostId,
    ) -> Result<Vec<CategoryPermission>, StoreError> {
        let inner = self.read();
        Self::check_failure(&inner)?;
        Ok(inner
            .post_permissions
            .get(&post_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_return_seeded_rows() {
        let store = MemoryStore::default();
        let category = PostCategory {
            id: CategoryId::new(),
            space_id: SpaceId::new(),
        };
        store.insert_category(category.clone());

        let loaded = store
            .load_category(category.id)
            .expect("lookup succeeds")
            .expect("row exists");
        assert_eq!(loaded, category);
        assert!(store
            .load_category(CategoryId::new())
            .expect("lookup succeeds")
            .is_none());
    }

    #[test]
    fn space_grants_merge_per_role() {
        let store = MemoryStore::default();
        let space = SpaceId::new();
        let role = RoleId::new();
        store.insert_space_grant(space, role, SpaceOperation::MODERATE_FORUMS);
        store.insert_space_grant(space, role, SpaceOperation::DELETE_ANY_POST);

        let grants = store
            .load_space_grants(space, &[role])
            .expect("lookup succeeds");
        assert_eq!(grants.len(), 1);
        assert!(grants[0].operations.contains(SpaceOperation::MODERATE_FORUMS));
        assert!(grants[0].operations.contains(SpaceOperation::DELETE_ANY_POST));
    }

    #[test]
    fn fail_with_poisons_every_lookup() {
        let store = MemoryStore::default();
        store.fail_with("connection refused");

        let err = store.load_post(PostId::new()).expect_err("lookup fails");
        assert!(err.to_string().contains("connection refused"), "got: {err}");
    }
}
