//! In-memory directory store.
//!
//! Fixture backend for tests and embedded use. Records live in insertion
//! order, which stands in for the primary-key order of the PostgreSQL
//! backend.

use chrono::Utc;
use uuid::Uuid;

use super::capability::Capabilities;
use super::error::AccessResult;
use super::models::{ExplicitGrant, Group, Resource, Role, WildcardGrant};
use super::resolver::wildcard_matches;
use super::store::DirectoryStore;

/// Directory store backed by plain vectors.
#[derive(Debug, Clone, Default)]
pub struct MemoryDirectoryStore {
    groups: Vec<Group>,
    roles: Vec<Role>,
    resources: Vec<Resource>,
    explicit: Vec<ExplicitGrant>,
    wildcard: Vec<WildcardGrant>,
}

impl MemoryDirectoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a group and return its id for role ownership.
    pub fn add_group(&mut self, code: &str, name: &str, internal: bool) -> Uuid {
        let id = Uuid::now_v7();
        let now = Utc::now();
        self.groups.push(Group {
            id,
            code: code.to_string(),
            name: name.to_string(),
            description: None,
            internal,
            created_at: now,
            updated_at: now,
        });
        id
    }

    /// Seed a role owned by `group_id`.
    pub fn add_role(&mut self, group_id: Uuid, code: &str, name: &str, internal: bool) -> Uuid {
        let id = Uuid::now_v7();
        let now = Utc::now();
        self.roles.push(Role {
            id,
            group_id,
            code: code.to_string(),
            name: name.to_string(),
            description: None,
            internal,
            created_at: now,
            updated_at: now,
        });
        id
    }

    /// Seed a resource.
    pub fn add_resource(&mut self, code: &str, name: &str, internal: bool) -> Uuid {
        let id = Uuid::now_v7();
        let now = Utc::now();
        self.resources.push(Resource {
            id,
            code: code.to_string(),
            name: name.to_string(),
            description: None,
            internal,
            created_at: now,
            updated_at: now,
        });
        id
    }

    /// Seed an explicit grant. Grants fold in the order they are added.
    pub fn add_explicit_grant(
        &mut self,
        role_code: &str,
        resource_code: &str,
        allow: Capabilities,
        deny: Capabilities,
    ) {
        self.explicit.push(ExplicitGrant {
            id: Uuid::now_v7(),
            role_code: role_code.to_string(),
            resource_code: resource_code.to_string(),
            allow_capabilities: allow,
            deny_capabilities: deny,
            created_at: Utc::now(),
        });
    }

    /// Seed a wildcard grant. Grants fold in the order they are added.
    pub fn add_wildcard_grant(
        &mut self,
        role_code: &str,
        resource_pattern: &str,
        allow: Capabilities,
        deny: Capabilities,
    ) {
        self.wildcard.push(WildcardGrant {
            id: Uuid::now_v7(),
            role_code: role_code.to_string(),
            resource_pattern: resource_pattern.to_string(),
            allow_capabilities: allow,
            deny_capabilities: deny,
            created_at: Utc::now(),
        });
    }
}

impl DirectoryStore for MemoryDirectoryStore {
    async fn group_by_code(&self, code: &str) -> AccessResult<Option<Group>> {
        Ok(self.groups.iter().find(|g| g.code == code).cloned())
    }

    async fn role_by_code(&self, code: &str) -> AccessResult<Option<Role>> {
        Ok(self.roles.iter().find(|r| r.code == code).cloned())
    }

    async fn resource_by_code(&self, code: &str) -> AccessResult<Option<Resource>> {
        Ok(self.resources.iter().find(|r| r.code == code).cloned())
    }

    async fn list_groups(&self, include_internal: bool) -> AccessResult<Vec<Group>> {
        let mut groups: Vec<Group> = self
            .groups
            .iter()
            .filter(|g| include_internal || !g.internal)
            .cloned()
            .collect();
        groups.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(groups)
    }

    async fn list_resources(&self, include_internal: bool) -> AccessResult<Vec<Resource>> {
        let mut resources: Vec<Resource> = self
            .resources
            .iter()
            .filter(|r| include_internal || !r.internal)
            .cloned()
            .collect();
        resources.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(resources)
    }

    async fn roles_in_group(&self, group_code: &str) -> AccessResult<Vec<Role>> {
        let Some(group) = self.groups.iter().find(|g| g.code == group_code) else {
            return Ok(Vec::new());
        };
        let mut roles: Vec<Role> = self
            .roles
            .iter()
            .filter(|r| r.group_id == group.id)
            .cloned()
            .collect();
        roles.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(roles)
    }

    async fn explicit_grants(
        &self,
        roles: &[String],
        resource_code: &str,
    ) -> AccessResult<Vec<ExplicitGrant>> {
        Ok(self
            .explicit
            .iter()
            .filter(|g| g.resource_code == resource_code && roles.contains(&g.role_code))
            .cloned()
            .collect())
    }

    async fn wildcard_grants(
        &self,
        roles: &[String],
        resource_code: &str,
    ) -> AccessResult<Vec<WildcardGrant>> {
        Ok(self
            .wildcard
            .iter()
            .filter(|g| {
                roles.contains(&g.role_code) && wildcard_matches(&g.resource_pattern, resource_code)
            })
            .cloned()
            .collect())
    }
}
