//! Reconciliation error taxonomy.
//!
//! All variants abort the current pass before any pool mutation; the
//! previously bound elements keep their frames. None are retried
//! automatically: reconciliation is pure in its inputs, so an identical
//! retry reproduces the identical error.

use lattice_core::NodeIdentity;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReconcileError {
    /// Two simultaneously visible render nodes resolved to the same
    /// identity, usually duplicate explicit keys among siblings.
    #[error("identity collision: two visible render nodes share {identity}")]
    IdentityCollision { identity: NodeIdentity },

    /// The render tree nests deeper than the enumeration guard allows.
    /// Owned trees cannot cycle, so this only fires on pathological
    /// nesting.
    #[error("render tree exceeds the maximum depth of {limit}")]
    DepthExceeded { limit: usize },

    /// A plan was applied against a pool other than the one it was
    /// computed from.
    #[error("plan is stale: pool has no entry for {identity}")]
    StalePlan { identity: NodeIdentity },
}
