//! Element pooling.
//!
//! Two pools cooperate: the [`VisiblePool`] maps identity to the element
//! currently bound for it (document order preserved), and the
//! [`RecyclePool`] keeps bounded per-tag free lists of detached elements
//! so creates can reuse instead of allocating.

use indexmap::IndexMap;
use lattice_core::collections::map::HashMap;
use lattice_core::{NodeIdentity, Rect, ReuseTag};

/// Default number of detached elements kept per reuse tag.
pub const DEFAULT_RECYCLE_CAPACITY: usize = 7;

/// A bound element: handle, tag and the frame last applied for it.
#[derive(Clone, Debug)]
pub struct PoolEntry<H> {
    pub element: H,
    pub tag: ReuseTag,
    pub frame: Rect,
}

/// Identity → bound element for the current visible set.
///
/// Iteration order is insertion order, which the reconciler keeps equal to
/// document order on every rebuild.
pub struct VisiblePool<H> {
    entries: IndexMap<NodeIdentity, PoolEntry<H>>,
}

impl<H> Default for VisiblePool<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> VisiblePool<H> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, identity: &NodeIdentity) -> Option<&PoolEntry<H>> {
        self.entries.get(identity)
    }

    pub fn insert(&mut self, identity: NodeIdentity, entry: PoolEntry<H>) {
        self.entries.insert(identity, entry);
    }

    /// Removes and returns the entry for `identity`, preserving the order
    /// of the remaining entries.
    pub fn take(&mut self, identity: &NodeIdentity) -> Option<PoolEntry<H>> {
        self.entries.shift_remove(identity)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeIdentity, &PoolEntry<H>)> {
        self.entries.iter()
    }

    pub fn identities(&self) -> impl Iterator<Item = &NodeIdentity> {
        self.entries.keys()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = (NodeIdentity, PoolEntry<H>)> + '_ {
        self.entries.drain(..)
    }
}

/// Policy controlling the recycle pool.
#[derive(Clone, Copy, Debug)]
pub struct RecyclePolicy {
    /// Maximum detached elements kept per tag; overflow is discarded.
    pub max_per_tag: usize,
    pub enabled: bool,
}

impl Default for RecyclePolicy {
    fn default() -> Self {
        Self {
            max_per_tag: DEFAULT_RECYCLE_CAPACITY,
            enabled: true,
        }
    }
}

impl RecyclePolicy {
    pub fn new(max_per_tag: usize) -> Self {
        Self {
            max_per_tag,
            enabled: true,
        }
    }

    /// Disables element reuse entirely.
    pub fn disabled() -> Self {
        Self {
            max_per_tag: 0,
            enabled: false,
        }
    }
}

/// Bounded per-tag free lists of detached elements.
pub struct RecyclePool<H> {
    available: HashMap<ReuseTag, Vec<H>>,
    policy: RecyclePolicy,
}

impl<H> Default for RecyclePool<H> {
    fn default() -> Self {
        Self::with_policy(RecyclePolicy::default())
    }
}

impl<H> RecyclePool<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: RecyclePolicy) -> Self {
        Self {
            available: HashMap::default(),
            policy,
        }
    }

    /// Takes a detached element of matching tag, if any.
    pub fn try_take(&mut self, tag: ReuseTag) -> Option<H> {
        if !self.policy.enabled {
            return None;
        }
        self.available.get_mut(&tag).and_then(Vec::pop)
    }

    /// Returns an element to the free list. Gives the element back when
    /// the bucket is full or reuse is disabled; the caller discards it
    /// through the host.
    pub fn put(&mut self, tag: ReuseTag, element: H) -> Option<H> {
        if !self.policy.enabled {
            return Some(element);
        }
        let bucket = self.available.entry(tag).or_default();
        if bucket.len() >= self.policy.max_per_tag {
            return Some(element);
        }
        bucket.push(element);
        None
    }

    /// Total detached elements across all tags.
    pub fn len(&self) -> usize {
        self.available.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn drain(&mut self) -> impl Iterator<Item = H> + '_ {
        self.available.drain().flat_map(|(_, bucket)| bucket)
    }
}

/// Element lifecycle statistics, for tests and diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Elements currently bound to visible render nodes.
    pub in_use: usize,
    /// Detached elements waiting in the recycle pool.
    pub in_pool: usize,
    /// Elements ever created by the host factory.
    pub total_created: usize,
    /// Creates satisfied from the recycle pool instead of the factory.
    pub reuse_count: usize,
}
