//! The reconciliation algorithm.
//!
//! [`plan`] is pure: it walks the render tree and the previous pool and
//! produces the ordered operation list, failing without side effects on an
//! identity collision or depth violation. [`apply`] performs a plan
//! against the host, draws creates from the recycle pool, consults the
//! animator once per operation and rebuilds the visible pool in document
//! order.

use lattice_core::collections::map::HashSet;
use lattice_core::{ElementContent, NodeIdentity, Rect, RenderNode, ReuseTag};

use crate::animator::{Animator, RemovalChoice};
use crate::error::ReconcileError;
use crate::host::ElementHost;
use crate::pool::{PoolEntry, RecyclePool, VisiblePool};
use crate::visible::collect_visible;

/// One planned operation, in document order.
#[derive(Clone, Debug)]
pub enum PlannedOp {
    Create {
        identity: NodeIdentity,
        frame: Rect,
        content: ElementContent,
    },
    /// Reposition and re-apply content on an element kept from the
    /// previous pass.
    Update {
        identity: NodeIdentity,
        from: Rect,
        to: Rect,
        content: ElementContent,
    },
    Remove {
        identity: NodeIdentity,
        frame: Rect,
        tag: ReuseTag,
    },
}

/// Ordered operations computed by [`plan`].
#[derive(Clone, Debug, Default)]
pub struct ReconcilePlan {
    pub ops: Vec<PlannedOp>,
}

impl ReconcilePlan {
    pub fn creates(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, PlannedOp::Create { .. }))
            .count()
    }

    pub fn updates(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, PlannedOp::Update { .. }))
            .count()
    }

    pub fn removes(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, PlannedOp::Remove { .. }))
            .count()
    }
}

/// Computes the operations turning the previous visible set into the one
/// implied by `root` and `viewport`.
///
/// Matching is by identity path; a pooled element is only kept when its
/// reuse tag also matches, otherwise it is removed and a fresh create is
/// planned. Stale pool entries are removed after all visit-derived
/// operations, and every operation stays in document order.
pub fn plan<H>(
    root: &RenderNode,
    viewport: Rect,
    pool: &VisiblePool<H>,
) -> Result<ReconcilePlan, ReconcileError> {
    let visible = collect_visible(root, viewport)?;

    let mut visited: HashSet<NodeIdentity> = HashSet::default();
    let mut ops = Vec::with_capacity(visible.len());
    for node in visible {
        visited.insert(node.identity.clone());
        match pool.get(&node.identity) {
            Some(entry) if entry.tag == node.content.tag => ops.push(PlannedOp::Update {
                identity: node.identity,
                from: entry.frame,
                to: node.frame,
                content: node.content,
            }),
            Some(entry) => {
                // Same identity, different element type: the old element
                // cannot be rebound, replace it.
                ops.push(PlannedOp::Remove {
                    identity: node.identity.clone(),
                    frame: entry.frame,
                    tag: entry.tag,
                });
                ops.push(PlannedOp::Create {
                    identity: node.identity,
                    frame: node.frame,
                    content: node.content,
                });
            }
            None => ops.push(PlannedOp::Create {
                identity: node.identity,
                frame: node.frame,
                content: node.content,
            }),
        }
    }

    for (identity, entry) in pool.iter() {
        if !visited.contains(identity) {
            ops.push(PlannedOp::Remove {
                identity: identity.clone(),
                frame: entry.frame,
                tag: entry.tag,
            });
        }
    }
    Ok(ReconcilePlan { ops })
}

/// An element whose removal the animator deferred. It stays out of the
/// recycle pool until handed to `Surface::finish_removal`.
#[derive(Debug)]
pub struct DeferredRemoval<H> {
    pub identity: NodeIdentity,
    pub element: H,
    pub tag: ReuseTag,
}

/// Outcome of one [`apply`] pass.
#[derive(Debug)]
pub struct ReconcileReport<H> {
    /// Elements built by the host factory.
    pub created: usize,
    /// Creates satisfied from the recycle pool.
    pub reused: usize,
    pub updated: usize,
    pub removed: usize,
    /// Creates skipped because the host has no factory for the tag.
    pub skipped: usize,
    pub deferred: Vec<DeferredRemoval<H>>,
}

impl<H> Default for ReconcileReport<H> {
    fn default() -> Self {
        Self {
            created: 0,
            reused: 0,
            updated: 0,
            removed: 0,
            skipped: 0,
            deferred: Vec::new(),
        }
    }
}

impl<H> ReconcileReport<H> {
    /// True when the pass changed nothing but frames/content of kept
    /// elements.
    pub fn is_incremental(&self) -> bool {
        self.created == 0 && self.reused == 0 && self.removed == 0 && self.skipped == 0
    }
}

/// Performs a plan against the host.
///
/// Removals detach first so their elements can be recycled into this
/// pass's creates; updates and creates then run in document order, which
/// is the order the pool is rebuilt in. The plan must have been computed
/// from `pool`; a mismatch fails with [`ReconcileError::StalePlan`]
/// before any mutation.
pub fn apply<H: ElementHost, A: Animator>(
    plan: ReconcilePlan,
    pool: &mut VisiblePool<H::Handle>,
    recycler: &mut RecyclePool<H::Handle>,
    host: &mut H,
    animator: &mut A,
) -> Result<ReconcileReport<H::Handle>, ReconcileError> {
    // Validate before touching anything: every kept or removed identity
    // must still be pooled.
    for op in &plan.ops {
        let identity = match op {
            PlannedOp::Update { identity, .. } | PlannedOp::Remove { identity, .. } => identity,
            PlannedOp::Create { .. } => continue,
        };
        if pool.get(identity).is_none() {
            return Err(ReconcileError::StalePlan {
                identity: identity.clone(),
            });
        }
    }

    let mut next: VisiblePool<H::Handle> = VisiblePool::new();
    let mut report = ReconcileReport::default();

    // Detach exiting elements first so they can serve this pass's creates;
    // binds stay in document order, which is what z-order depends on.
    let (removes, binds): (Vec<_>, Vec<_>) = plan
        .ops
        .into_iter()
        .partition(|op| matches!(op, PlannedOp::Remove { .. }));

    for op in removes {
        let PlannedOp::Remove {
            identity,
            frame,
            tag,
        } = op
        else {
            unreachable!("partitioned above");
        };
        let entry = pool.take(&identity).expect("validated above");
        match animator.on_remove(&identity, frame) {
            RemovalChoice::Recycle => {
                host.prepare_for_reuse(&entry.element);
                if let Some(overflow) = recycler.put(tag, entry.element) {
                    log::debug!("recycle pool full for {tag}, discarding element");
                    host.discard(overflow);
                }
            }
            RemovalChoice::Deferred => report.deferred.push(DeferredRemoval {
                identity,
                element: entry.element,
                tag,
            }),
        }
        report.removed += 1;
    }

    for op in binds {
        match op {
            PlannedOp::Update {
                identity,
                from,
                to,
                content,
            } => {
                let entry = pool.take(&identity).expect("validated above");
                let applied = animator.on_update(&identity, from, to);
                host.set_frame(&entry.element, applied);
                host.apply_content(&entry.element, content.applier.as_ref());
                report.updated += 1;
                next.insert(
                    identity,
                    PoolEntry {
                        element: entry.element,
                        tag: entry.tag,
                        frame: to,
                    },
                );
            }
            PlannedOp::Create {
                identity,
                frame,
                content,
            } => {
                let element = match recycler.try_take(content.tag) {
                    Some(element) => {
                        report.reused += 1;
                        element
                    }
                    None => match host.create(content.tag) {
                        Ok(element) => {
                            report.created += 1;
                            element
                        }
                        Err(err) => {
                            log::warn!("skipping element create for {identity}: {err}");
                            report.skipped += 1;
                            continue;
                        }
                    },
                };
                let initial = animator.on_insert(&identity, frame).unwrap_or(frame);
                host.set_frame(&element, initial);
                host.apply_content(&element, content.applier.as_ref());
                next.insert(
                    identity,
                    PoolEntry {
                        element,
                        tag: content.tag,
                        frame,
                    },
                );
            }
            PlannedOp::Remove { .. } => unreachable!("partitioned above"),
        }
    }

    debug_assert!(
        pool.is_empty(),
        "every previous pool entry must be consumed by the plan"
    );
    *pool = next;
    Ok(report)
}
