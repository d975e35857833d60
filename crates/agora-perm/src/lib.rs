//! Permission resolution engine for Agora forums.
//!
//! This crate answers one question: *which operations may this
//! requester perform on this resource?* The answer is always a
//! bitflag set, computed from scratch on every call — nothing is
//! cached, nothing is written.
//!
//! # Resolution Model
//!
//! ```text
//! Effective Flags = Overrides(WHO YOU ARE) ∪ Assignments(WHAT WAS GRANTED)
//!                   then Policies(LIFECYCLE) restrict
//! ```
//!
//! | Stage | Type | Controls |
//! |-------|------|----------|
//! | [`Membership`] | Struct | The requester's facts in the resource's space |
//! | [`PermissionLevel`] + [`PermissionAssignee`] | Enums | What was granted, and to whom |
//! | [`PostOperation`] / [`CategoryOperation`] | Bitflags | The operation catalogs being resolved |
//! | [`POST_POLICIES`] | Fn pipeline | Lifecycle restrictions applied last |
//!
//! # Crate Architecture
//!
//! ```text
//! agora-types  (ids, Post, PostCategory, SpaceRole)
//!       ↑
//! agora-perm  ◄── THIS CRATE
//!  ├── operation    operation catalogs (bitflags)
//!  ├── level        permission levels → catalog bundles
//!  ├── assignment   who a grant targets
//!  ├── membership   requester facts
//!  ├── filter       applicability of assignments to a requester
//!  ├── space_grant  space-wide operation grants
//!  ├── store        read-only store traits (impls live in hosts)
//!  ├── resolver     the base resolver (entry points)
//!  ├── policy       post-resolution policy pipeline
//!  └── testing      in-memory store harness
//! ```
//!
//! # Design Principles
//!
//! - **Trait definitions here, storage in consumers** — hosts adapt
//!   their database behind [`ResourceStore`], [`MembershipStore`] and
//!   [`AssignmentStore`]
//! - **Union, never precedence** — applicable assignments combine by
//!   bitwise OR; more identities never mean fewer flags
//! - **Policies only restrict** — grants decide the ceiling, lifecycle
//!   policies can only lower it

pub mod assignment;
pub mod error;
pub mod filter;
pub mod level;
pub mod membership;
pub mod operation;
pub mod policy;
pub mod resolver;
pub mod space_grant;
pub mod store;
pub mod testing;

pub use assignment::{CategoryPermission, PermissionAssignee};
pub use error::PermissionError;
pub use filter::filter_applicable;
pub use level::PermissionLevel;
pub use membership::Membership;
pub use operation::{CategoryOperation, PostOperation};
pub use policy::{
    apply_post_policies, converted_post_restrictions, only_author_edits, PolicyContext,
    PostPolicy, POST_POLICIES,
};
pub use resolver::PermissionResolver;
pub use space_grant::{SpaceGrant, SpaceOperation};
pub use store::{AssignmentStore, MembershipStore, ResourceStore, StoreError};
