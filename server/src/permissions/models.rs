//! Database models for the permission directory.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use super::capability::Capabilities;

/// Role group. Owns a collection of roles.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Group {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    /// Excluded from end-user-facing listings.
    pub internal: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Role within a group.
///
/// Role codes are treated as globally unique capability-bearing identities;
/// resolution never scopes by the owning group.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Role {
    pub id: Uuid,
    pub group_id: Uuid,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub internal: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Protected resource, identified by a dot-segmented code (e.g. `"car.expense"`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Resource {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub internal: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Allow/deny capability pair carried by every grant.
///
/// A bit set in both halves is legal input; within a single grant the deny
/// half wins for that bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Permission {
    pub allow: Capabilities,
    pub deny: Capabilities,
}

impl Permission {
    #[must_use]
    pub const fn new(allow: Capabilities, deny: Capabilities) -> Self {
        Self { allow, deny }
    }
}

/// Explicit grant: binds one role code to one exact resource code.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ExplicitGrant {
    pub id: Uuid,
    pub role_code: String,
    pub resource_code: String,
    #[sqlx(try_from = "i64")]
    pub allow_capabilities: Capabilities,
    #[sqlx(try_from = "i64")]
    pub deny_capabilities: Capabilities,
    pub created_at: DateTime<Utc>,
}

impl ExplicitGrant {
    /// The allow/deny pair this grant contributes to the fold.
    #[must_use]
    pub const fn permission(&self) -> Permission {
        Permission::new(self.allow_capabilities, self.deny_capabilities)
    }
}

/// Wildcard grant: binds one role code to a resource pattern with a trailing
/// wildcard segment (e.g. `"car.*"`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WildcardGrant {
    pub id: Uuid,
    pub role_code: String,
    pub resource_pattern: String,
    #[sqlx(try_from = "i64")]
    pub allow_capabilities: Capabilities,
    #[sqlx(try_from = "i64")]
    pub deny_capabilities: Capabilities,
    pub created_at: DateTime<Utc>,
}

impl WildcardGrant {
    /// The allow/deny pair this grant contributes to the fold.
    #[must_use]
    pub const fn permission(&self) -> Permission {
        Permission::new(self.allow_capabilities, self.deny_capabilities)
    }
}

// Implement From for Capabilities to work with sqlx
impl From<i64> for Capabilities {
    fn from(value: i64) -> Self {
        Self::from_db(value)
    }
}
