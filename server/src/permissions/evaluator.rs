//! Access evaluation over a resolved capability vector.
//!
//! Fail-closed by construction: an empty request or an unrecognized
//! capability letter denies the whole request regardless of the vector.

use super::capability::Capabilities;

/// Outcome of evaluating a requested capability set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Every requested capability is present in the resolved vector.
    Granted,

    /// The request is refused.
    Denied(DenialReason),
}

impl AccessDecision {
    /// Collapse the decision to the boolean handed to dispatch.
    #[must_use]
    pub const fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Why a request was denied. Diagnostic only; every variant denies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    /// Zero capabilities were requested. An empty request is never
    /// satisfiable.
    EmptyRequest,

    /// A requested letter is outside `{R, W, X, D}`.
    UnknownCapability(char),

    /// Recognized capabilities absent from the resolved vector.
    MissingCapabilities(Capabilities),
}

impl std::fmt::Display for DenialReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyRequest => write!(f, "No capabilities requested"),
            Self::UnknownCapability(letter) => {
                write!(f, "Unknown capability letter: {letter:?}")
            }
            Self::MissingCapabilities(caps) => {
                write!(f, "Missing capabilities: {}", caps.letters())
            }
        }
    }
}

impl std::error::Error for DenialReason {}

/// Evaluate requested capability letters against a resolved vector.
///
/// Allows iff the request is non-empty, every letter is recognized, and
/// every mapped bit is set in `resolved`.
#[must_use]
pub fn evaluate(resolved: Capabilities, requested: &[char]) -> AccessDecision {
    if requested.is_empty() {
        return AccessDecision::Denied(DenialReason::EmptyRequest);
    }

    let mut needed = Capabilities::empty();
    for &letter in requested {
        match Capabilities::from_letter(letter) {
            Some(capability) => needed |= capability,
            None => return AccessDecision::Denied(DenialReason::UnknownCapability(letter)),
        }
    }

    let missing = needed & !resolved;
    if missing.is_empty() {
        AccessDecision::Granted
    } else {
        AccessDecision::Denied(DenialReason::MissingCapabilities(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request_denies() {
        let decision = evaluate(Capabilities::all(), &[]);
        assert_eq!(decision, AccessDecision::Denied(DenialReason::EmptyRequest));
    }

    #[test]
    fn test_unknown_letter_denies_whole_request() {
        // 'R' alone would be granted; the unknown letter poisons the call.
        let decision = evaluate(Capabilities::all(), &['R', 'Z']);
        assert_eq!(
            decision,
            AccessDecision::Denied(DenialReason::UnknownCapability('Z'))
        );
    }

    #[test]
    fn test_all_requested_present_grants() {
        let resolved = Capabilities::READ | Capabilities::WRITE;
        assert!(evaluate(resolved, &['R']).is_granted());
        assert!(evaluate(resolved, &['R', 'W']).is_granted());
    }

    #[test]
    fn test_missing_capability_denies() {
        let resolved = Capabilities::READ;
        let decision = evaluate(resolved, &['R', 'W']);
        assert_eq!(
            decision,
            AccessDecision::Denied(DenialReason::MissingCapabilities(Capabilities::WRITE))
        );
    }

    #[test]
    fn test_duplicate_letters_are_harmless() {
        assert!(evaluate(Capabilities::READ, &['R', 'R']).is_granted());
    }

    #[test]
    fn test_denial_reason_display() {
        assert!(DenialReason::EmptyRequest.to_string().contains("No capabilities"));
        assert!(DenialReason::UnknownCapability('Z').to_string().contains('Z'));
        assert!(DenialReason::MissingCapabilities(Capabilities::WRITE)
            .to_string()
            .contains('W'));
    }
}
