//! Stable identity for render nodes across reconciliation passes.
//!
//! Identity is an explicit path encoding: one segment per tree level,
//! either the child's structural index or the explicit key stamped by
//! `Keyed`/`for_each`. Keyed segments survive reordering, which is what
//! lets the reconciler treat a moved item as an update instead of a
//! remove/create pair.

use smallvec::SmallVec;
use std::fmt;

/// One level of a node's identity path.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum IdentitySegment {
    /// Structural position among the parent's children.
    Index(u32),
    /// Explicit user-supplied key; stable under reordering.
    Key(u64),
}

/// Full identity of a render node: the path from the root, segment per
/// level. Cheap to clone while trees stay shallow.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct NodeIdentity(SmallVec<[IdentitySegment; 8]>);

impl NodeIdentity {
    /// Identity of the root node (empty path).
    pub fn root() -> Self {
        Self::default()
    }

    /// Identity of a child reached through `segment`.
    pub fn child(&self, segment: IdentitySegment) -> Self {
        let mut path = self.0.clone();
        path.push(segment);
        Self(path)
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn segments(&self) -> &[IdentitySegment] {
        &self.0
    }
}

impl fmt::Debug for NodeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeIdentity({self})")
    }
}

impl fmt::Display for NodeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.0 {
            match segment {
                IdentitySegment::Index(i) => write!(f, "/{i}")?,
                IdentitySegment::Key(k) => write!(f, "/#{k}")?,
            }
        }
        Ok(())
    }
}
