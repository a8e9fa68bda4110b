//! Permission Engine Error Types

use thiserror::Error;

/// Directory entity kinds, named in not-found errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Group,
    Role,
    Resource,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Group => "group",
            Self::Role => "role",
            Self::Resource => "resource",
        };
        f.write_str(name)
    }
}

/// Errors surfaced by the directory store and the authorization gate.
///
/// Every error reaching the gate's caller means the check could not be
/// performed; callers must treat it as not allowed.
#[derive(Debug, Error)]
pub enum AccessError {
    /// A referenced group/role/resource code does not exist.
    #[error("{kind} not found: {code}")]
    NotFound { kind: EntityKind, code: String },

    /// The persistence layer could not be reached or errored.
    ///
    /// Never collapsed into "no grant": a timed-out or failed store read
    /// must not masquerade as a successful empty result.
    #[error("directory store unavailable: {0}")]
    StoreUnavailable(String),
}

impl AccessError {
    /// Not-found constructor used by the gate and store backends.
    #[must_use]
    pub fn not_found(kind: EntityKind, code: &str) -> Self {
        Self::NotFound {
            kind,
            code: code.to_string(),
        }
    }
}

impl From<sqlx::Error> for AccessError {
    fn from(err: sqlx::Error) -> Self {
        Self::StoreUnavailable(err.to_string())
    }
}

/// Result type for permission engine operations.
pub type AccessResult<T> = Result<T, AccessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = AccessError::not_found(EntityKind::Resource, "car.expense");
        assert_eq!(err.to_string(), "resource not found: car.expense");
    }

    #[test]
    fn test_store_unavailable_display() {
        let err = AccessError::StoreUnavailable("connection refused".into());
        assert!(err.to_string().contains("unavailable"));
        assert!(err.to_string().contains("connection refused"));
    }
}
