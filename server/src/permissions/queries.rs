//! PostgreSQL-backed directory store.
//!
//! Grant queries order by primary key; ids are UUIDv7, so primary-key order
//! reproduces insertion order as the resolver requires.

use sqlx::PgPool;

use super::error::AccessResult;
use super::models::{ExplicitGrant, Group, Resource, Role, WildcardGrant};
use super::resolver::wildcard_matches;
use super::store::DirectoryStore;

/// Directory store reading from the back-office PostgreSQL schema.
#[derive(Debug, Clone)]
pub struct PgDirectoryStore {
    pool: PgPool,
}

impl PgDirectoryStore {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl DirectoryStore for PgDirectoryStore {
    #[tracing::instrument(skip(self))]
    async fn group_by_code(&self, code: &str) -> AccessResult<Option<Group>> {
        sqlx::query_as::<_, Group>(
            r"
            SELECT id, code, name, description, internal, created_at, updated_at
            FROM groups
            WHERE code = $1
            ",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(Into::into)
    }

    #[tracing::instrument(skip(self))]
    async fn role_by_code(&self, code: &str) -> AccessResult<Option<Role>> {
        sqlx::query_as::<_, Role>(
            r"
            SELECT id, group_id, code, name, description, internal, created_at, updated_at
            FROM roles
            WHERE code = $1
            ",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(Into::into)
    }

    #[tracing::instrument(skip(self))]
    async fn resource_by_code(&self, code: &str) -> AccessResult<Option<Resource>> {
        sqlx::query_as::<_, Resource>(
            r"
            SELECT id, code, name, description, internal, created_at, updated_at
            FROM resources
            WHERE code = $1
            ",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(Into::into)
    }

    #[tracing::instrument(skip(self))]
    async fn list_groups(&self, include_internal: bool) -> AccessResult<Vec<Group>> {
        sqlx::query_as::<_, Group>(
            r"
            SELECT id, code, name, description, internal, created_at, updated_at
            FROM groups
            WHERE internal = FALSE OR $1
            ORDER BY code ASC
            ",
        )
        .bind(include_internal)
        .fetch_all(&self.pool)
        .await
        .map_err(Into::into)
    }

    #[tracing::instrument(skip(self))]
    async fn list_resources(&self, include_internal: bool) -> AccessResult<Vec<Resource>> {
        sqlx::query_as::<_, Resource>(
            r"
            SELECT id, code, name, description, internal, created_at, updated_at
            FROM resources
            WHERE internal = FALSE OR $1
            ORDER BY code ASC
            ",
        )
        .bind(include_internal)
        .fetch_all(&self.pool)
        .await
        .map_err(Into::into)
    }

    #[tracing::instrument(skip(self))]
    async fn roles_in_group(&self, group_code: &str) -> AccessResult<Vec<Role>> {
        sqlx::query_as::<_, Role>(
            r"
            SELECT r.id, r.group_id, r.code, r.name, r.description, r.internal,
                   r.created_at, r.updated_at
            FROM roles r
            INNER JOIN groups g ON g.id = r.group_id
            WHERE g.code = $1
            ORDER BY r.code ASC
            ",
        )
        .bind(group_code)
        .fetch_all(&self.pool)
        .await
        .map_err(Into::into)
    }

    #[tracing::instrument(skip(self, roles))]
    async fn explicit_grants(
        &self,
        roles: &[String],
        resource_code: &str,
    ) -> AccessResult<Vec<ExplicitGrant>> {
        sqlx::query_as::<_, ExplicitGrant>(
            r"
            SELECT id, role_code, resource_code,
                   allow_capabilities, deny_capabilities, created_at
            FROM role_resource_permissions
            WHERE role_code = ANY($1) AND resource_code = $2
            ORDER BY id ASC
            ",
        )
        .bind(roles)
        .bind(resource_code)
        .fetch_all(&self.pool)
        .await
        .map_err(Into::into)
    }

    #[tracing::instrument(skip(self, roles))]
    async fn wildcard_grants(
        &self,
        roles: &[String],
        resource_code: &str,
    ) -> AccessResult<Vec<WildcardGrant>> {
        // Segment matching lives with the resolver; filter after fetch.
        let grants = sqlx::query_as::<_, WildcardGrant>(
            r"
            SELECT id, role_code, resource_pattern,
                   allow_capabilities, deny_capabilities, created_at
            FROM role_wildcard_permissions
            WHERE role_code = ANY($1)
            ORDER BY id ASC
            ",
        )
        .bind(roles)
        .fetch_all(&self.pool)
        .await?;

        Ok(grants
            .into_iter()
            .filter(|grant| wildcard_matches(&grant.resource_pattern, resource_code))
            .collect())
    }
}
