//! Authorization gate.
//!
//! The boundary object invoked by request dispatch. Constructed once at
//! process start with a bound directory store and passed by reference;
//! never looked up through ambient global state.

use tracing::{debug, warn};

use super::capability::Capabilities;
use super::error::{AccessError, AccessResult, EntityKind};
use super::evaluator::{evaluate, AccessDecision};
use super::helpers::AccessContext;
use super::resolver::resolve_capabilities;
use super::store::DirectoryStore;

/// Composes directory store, grant resolver, and access evaluator.
///
/// Every check is a fresh, stateless computation over the current grant set;
/// the gate holds no cross-request state.
#[derive(Debug, Clone)]
pub struct AccessGate<S> {
    store: S,
}

impl<S: DirectoryStore> AccessGate<S> {
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The single entry point consumed by request dispatch.
    ///
    /// Returns `Ok(true)` iff every requested capability letter resolves to
    /// an allowed bit for the (resource, role-set) pair. Errors mean the
    /// check could not be performed (a store failure or an unregistered
    /// resource code) and callers must treat them as not allowed. The gate
    /// never reports `true` alongside an error.
    #[tracing::instrument(skip(self))]
    pub async fn check_permissions(
        &self,
        resource_code: &str,
        role_codes: &[String],
        requested: &[char],
    ) -> AccessResult<bool> {
        let decision = self.decide(resource_code, role_codes, requested).await?;
        Ok(decision.is_granted())
    }

    /// Structured verdict behind [`Self::check_permissions`].
    ///
    /// Empty requests and unknown capability letters deny via the decision's
    /// reason rather than the error channel; only directory failures error.
    #[tracing::instrument(skip(self))]
    pub async fn decide(
        &self,
        resource_code: &str,
        role_codes: &[String],
        requested: &[char],
    ) -> AccessResult<AccessDecision> {
        let resolved = match self.resolve(resource_code, role_codes).await {
            Ok(resolved) => resolved,
            Err(err) => {
                warn!(resource = resource_code, %err, "authorization check failed");
                return Err(err);
            }
        };

        let decision = evaluate(resolved, requested);
        if let AccessDecision::Denied(reason) = &decision {
            debug!(resource = resource_code, %reason, "access denied");
        }

        Ok(decision)
    }

    /// Pre-resolved capability context for handlers that perform several
    /// checks against one resource.
    #[tracing::instrument(skip(self))]
    pub async fn access_context(
        &self,
        resource_code: &str,
        role_codes: &[String],
    ) -> AccessResult<AccessContext> {
        let resolved = self.resolve(resource_code, role_codes).await?;
        Ok(AccessContext {
            resource_code: resource_code.to_string(),
            role_codes: role_codes.to_vec(),
            resolved,
        })
    }

    /// Gather grants for the pair and fold them: explicit first, wildcard
    /// second, each in store fetch order.
    async fn resolve(
        &self,
        resource_code: &str,
        role_codes: &[String],
    ) -> AccessResult<Capabilities> {
        let resource = self
            .store
            .resource_by_code(resource_code)
            .await?
            .ok_or_else(|| AccessError::not_found(EntityKind::Resource, resource_code))?;

        let explicit = self.store.explicit_grants(role_codes, &resource.code).await?;
        let wildcard = self.store.wildcard_grants(role_codes, &resource.code).await?;

        Ok(resolve_capabilities(&explicit, &wildcard))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permissions::evaluator::DenialReason;
    use crate::permissions::memory::MemoryDirectoryStore;

    fn roles(codes: &[&str]) -> Vec<String> {
        codes.iter().map(ToString::to_string).collect()
    }

    #[tokio::test]
    async fn test_unknown_resource_is_not_found() {
        let gate = AccessGate::new(MemoryDirectoryStore::new());
        let err = gate
            .check_permissions("car.expense", &roles(&["manager"]), &['R'])
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AccessError::NotFound {
                kind: EntityKind::Resource,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_no_grants_denies_any_request() {
        let mut store = MemoryDirectoryStore::new();
        store.add_resource("car.expense", "Car expenses", false);
        let gate = AccessGate::new(store);

        let allowed = gate
            .check_permissions("car.expense", &roles(&["manager"]), &['R'])
            .await
            .unwrap();
        assert!(!allowed);
    }

    #[tokio::test]
    async fn test_decide_reports_denial_reason() {
        let mut store = MemoryDirectoryStore::new();
        store.add_resource("car.expense", "Car expenses", false);
        store.add_explicit_grant(
            "manager",
            "car.expense",
            Capabilities::READ,
            Capabilities::empty(),
        );
        let gate = AccessGate::new(store);

        let decision = gate
            .decide("car.expense", &roles(&["manager"]), &['R', 'D'])
            .await
            .unwrap();
        assert_eq!(
            decision,
            AccessDecision::Denied(DenialReason::MissingCapabilities(Capabilities::DELETE))
        );
    }
}
