//! Role-based permission checks for topicbar.
//!
//! This crate provides:
//! - `AuthenticationInfo` - the user's permissions as served by the server
//! - `RolesAccess` - permissions indexed by cluster and resource
//! - `is_permitted` / `PermissionEvaluator` - the per-item permission check

pub mod auth_info;
pub mod evaluator;
pub mod roles;

pub use auth_info::{AuthenticationInfo, UserInfo, UserPermission};
pub use evaluator::{is_permitted, PermissionEvaluator, RoleEvaluator};
pub use roles::{Grant, RbacError, RolesAccess, ValuePattern};
