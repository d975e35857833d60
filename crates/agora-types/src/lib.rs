//! Core types for the Agora permission engine.
//!
//! This crate provides the identifier newtypes and read-only domain
//! entities consumed by `agora-perm`. It contains **no permission
//! logic** — resolution lives entirely in `agora-perm`.
//!
//! # Crate Architecture
//!
//! ```text
//! agora-types  (ids, SpaceRole, PostCategory, Post)  ◄── HERE
//!      ↑
//! agora-perm   (catalogs, levels, resolver, policies)
//!      ↑
//! host service (API handlers, storage adapters)
//! ```
//!
//! # Identifier Design
//!
//! All identifiers are UUID-based:
//!
//! - **Network compatibility**: Safe to transmit across processes
//! - **Globally unique**: No coordination between tenants required
//! - **Serialization**: First-class serde support
//!
//! # Example
//!
//! ```
//! use agora_types::{SpaceId, UserId, PostCategory};
//!
//! let space = SpaceId::new();
//! let user = UserId::new();
//! assert_ne!(space.uuid(), user.uuid());
//!
//! let category = PostCategory { id: agora_types::CategoryId::new(), space_id: space };
//! assert_eq!(category.space_id, space);
//! ```

pub mod entity;
pub mod id;

pub use entity::{Post, PostCategory, SpaceRole};
pub use id::{CategoryId, PostId, RoleId, SpaceId, UserId};
