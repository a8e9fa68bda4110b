//! Permission-resolution engine.
//!
//! Role/resource access control for the back office: explicit grants (exact
//! resource + role) and wildcard grants (dot-segmented resource families)
//! each carry independent allow/deny bits for the four capability axes
//! (read, write, execute, delete) and fold into a single per-resource
//! decision.
//!
//! The fold is order-sensitive (explicit grants before wildcard grants, each
//! in store insertion order); see [`resolver`] for the exact semantics.

pub mod capability;
pub mod error;
pub mod evaluator;
pub mod gate;
pub mod helpers;
pub mod memory;
pub mod models;
pub mod queries;
pub mod resolver;
pub mod store;

pub use capability::Capabilities;
pub use error::{AccessError, AccessResult, EntityKind};
pub use evaluator::{evaluate, AccessDecision, DenialReason};
pub use gate::AccessGate;
pub use helpers::AccessContext;
pub use memory::MemoryDirectoryStore;
pub use models::*;
pub use queries::PgDirectoryStore;
pub use resolver::{fold_grants, resolve_capabilities, wildcard_matches};
pub use store::DirectoryStore;
