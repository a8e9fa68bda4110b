//! Grant resolution logic.
//!
//! Reduces the explicit and wildcard grants gathered for a (resource,
//! role-set) pair to a single effective capability vector.
//!
//! The fold is a strict left fold, not a commutative merge: a later grant's
//! deny bit erases an earlier allow, and a later grant's allow bit (with its
//! own deny clear) restores a bit a previous grant denied. Explicit grants
//! always fold before wildcard grants. Changing either property changes
//! observable authorization outcomes.

use super::capability::Capabilities;
use super::models::{ExplicitGrant, Permission, WildcardGrant};

/// Wildcard pattern match for dot-segmented resource codes.
///
/// A pattern `"seg1.seg2.*"` matches a resource code iff the code equals
/// `"seg1.seg2"` or starts with `"seg1.seg2."`. A bare `"*"` matches every
/// resource code. A pattern without a trailing wildcard segment only matches
/// the exact code.
///
/// # Examples
///
/// ```
/// use bo_server::permissions::wildcard_matches;
///
/// assert!(wildcard_matches("car.*", "car"));
/// assert!(wildcard_matches("car.*", "car.expense"));
/// assert!(!wildcard_matches("car.*", "carpool"));
/// ```
#[must_use]
pub fn wildcard_matches(pattern: &str, resource_code: &str) -> bool {
    if pattern == "*" {
        return true;
    }

    let Some(prefix) = pattern.strip_suffix(".*") else {
        return pattern == resource_code;
    };

    match resource_code.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('.'),
        None => false,
    }
}

/// Fold an ordered grant sequence into the effective capability vector.
///
/// Each of the four bits is computed independently per grant:
/// `acc[b] = (acc[b] OR allow[b]) AND NOT deny[b]`. With no grants the
/// result is all-false.
#[must_use]
pub fn fold_grants<I>(grants: I) -> Capabilities
where
    I: IntoIterator<Item = Permission>,
{
    grants
        .into_iter()
        .fold(Capabilities::empty(), |acc, grant| {
            (acc | grant.allow) & !grant.deny
        })
}

/// Resolve the capability vector for gathered grants: explicit first,
/// wildcard second, each sublist in store fetch order.
#[must_use]
pub fn resolve_capabilities(
    explicit: &[ExplicitGrant],
    wildcard: &[WildcardGrant],
) -> Capabilities {
    fold_grants(
        explicit
            .iter()
            .map(ExplicitGrant::permission)
            .chain(wildcard.iter().map(WildcardGrant::permission)),
    )
}
