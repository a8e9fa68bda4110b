//! Directory store abstraction.
//!
//! The storage seam of the engine: the gate and resolver only see this
//! trait, so test backends substitute for PostgreSQL without a live
//! database.

use std::future::Future;

use super::error::AccessResult;
use super::models::{ExplicitGrant, Group, Resource, Role, WildcardGrant};

/// Read-only access to groups, roles, resources, and the two grant
/// collections, keyed by code strings.
///
/// Implementations must return grant lists in primary-key insertion order;
/// the resolver's fold is order-sensitive. Store-level failures surface as
/// [`AccessError::StoreUnavailable`](super::error::AccessError), never as an
/// empty result.
pub trait DirectoryStore: Send + Sync {
    /// Look up a group by its unique code.
    fn group_by_code(&self, code: &str)
        -> impl Future<Output = AccessResult<Option<Group>>> + Send;

    /// Look up a role by its code.
    fn role_by_code(&self, code: &str) -> impl Future<Output = AccessResult<Option<Role>>> + Send;

    /// Look up a resource by its unique code.
    fn resource_by_code(
        &self,
        code: &str,
    ) -> impl Future<Output = AccessResult<Option<Resource>>> + Send;

    /// List groups; `include_internal = false` filters records flagged as
    /// internal out of end-user-facing listings.
    fn list_groups(
        &self,
        include_internal: bool,
    ) -> impl Future<Output = AccessResult<Vec<Group>>> + Send;

    /// List resources, with the same internal filtering as [`Self::list_groups`].
    fn list_resources(
        &self,
        include_internal: bool,
    ) -> impl Future<Output = AccessResult<Vec<Resource>>> + Send;

    /// All roles owned by a group, in position (code) order.
    fn roles_in_group(
        &self,
        group_code: &str,
    ) -> impl Future<Output = AccessResult<Vec<Role>>> + Send;

    /// All explicit grants whose role code is in `roles` and whose resource
    /// code equals `resource_code`, in insertion order.
    fn explicit_grants(
        &self,
        roles: &[String],
        resource_code: &str,
    ) -> impl Future<Output = AccessResult<Vec<ExplicitGrant>>> + Send;

    /// All wildcard grants whose role code is in `roles` and whose pattern
    /// matches `resource_code`, in insertion order.
    fn wildcard_grants(
        &self,
        roles: &[String],
        resource_code: &str,
    ) -> impl Future<Output = AccessResult<Vec<WildcardGrant>>> + Send;
}
