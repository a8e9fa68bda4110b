//! Permission helper types for request handlers.
//!
//! Lets a handler resolve once and check several capabilities without
//! re-reading the grant tables.

use super::capability::Capabilities;
use super::evaluator::DenialReason;

/// Pre-resolved capability context for one (resource, role-set) pair.
///
/// Built by [`AccessGate::access_context`](super::gate::AccessGate::access_context);
/// checks against it are pure and involve no further store reads.
#[derive(Debug, Clone)]
pub struct AccessContext {
    /// The resource the vector was resolved for.
    pub resource_code: String,

    /// The caller's role codes the vector was resolved for.
    pub role_codes: Vec<String>,

    /// The folded capability vector.
    pub resolved: Capabilities,
}

impl AccessContext {
    /// Check if the resolved vector includes the given capability bit(s).
    #[must_use]
    pub const fn has(&self, capabilities: Capabilities) -> bool {
        self.resolved.contains(capabilities)
    }

    /// Require the given capability bit(s).
    ///
    /// Returns `Err(DenialReason::MissingCapabilities)` naming exactly the
    /// absent bits.
    pub const fn require(&self, capabilities: Capabilities) -> Result<(), DenialReason> {
        let missing = capabilities.difference(self.resolved);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DenialReason::MissingCapabilities(missing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(resolved: Capabilities) -> AccessContext {
        AccessContext {
            resource_code: "car.expense".to_string(),
            role_codes: vec!["manager".to_string()],
            resolved,
        }
    }

    #[test]
    fn test_has() {
        let ctx = context(Capabilities::READ | Capabilities::WRITE);
        assert!(ctx.has(Capabilities::READ));
        assert!(ctx.has(Capabilities::READ | Capabilities::WRITE));
        assert!(!ctx.has(Capabilities::DELETE));
    }

    #[test]
    fn test_require_success() {
        let ctx = context(Capabilities::READ | Capabilities::WRITE);
        assert!(ctx.require(Capabilities::READ).is_ok());
        assert!(ctx.require(Capabilities::READ | Capabilities::WRITE).is_ok());
    }

    #[test]
    fn test_require_names_missing_bits() {
        let ctx = context(Capabilities::READ);
        let err = ctx
            .require(Capabilities::READ | Capabilities::DELETE)
            .unwrap_err();
        assert_eq!(err, DenialReason::MissingCapabilities(Capabilities::DELETE));
    }
}
