//! The container owning one render tree and one element pool.
//!
//! A [`Surface`] is the seam between the host view system and the
//! layout/reconcile pipeline: the host feeds it bounds, viewport and root
//! changes, and drives [`Surface::flush`] on its refresh boundary. All
//! types here are `!Send` by construction and every mutation takes
//! `&mut self`, which makes the single-execution-context requirement a
//! compile-time property instead of a convention.

use std::rc::Rc;

use lattice_core::{AnyComponent, Component, Constraints, Rect, RenderNode, Size};

use crate::animator::Animator;
use crate::error::ReconcileError;
use crate::host::ElementHost;
use crate::pool::{PoolStats, RecyclePolicy, RecyclePool, VisiblePool};
use crate::reconcile::{apply, plan, DeferredRemoval, ReconcileReport};

/// Owned handle to the host's refresh loop. Invalidation requests a
/// frame; the owner later calls [`Surface::flush`]. Rapid invalidations
/// coalesce: a frame is only requested when the surface was clean.
pub trait FrameScheduler {
    fn request_frame(&self);
}

/// Scheduler for hosts that flush manually (tests, offline rendering).
impl FrameScheduler for () {
    fn request_frame(&self) {}
}

/// Lifecycle of a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfacePhase {
    /// No layout performed yet (or torn down).
    Idle,
    /// Root render node computed for the current bounds, visible subset
    /// not yet bound.
    LaidOut,
    /// Visible subset bound to host elements.
    Reconciled,
}

/// One active container: root component, laid-out tree, visible pool and
/// recycler.
pub struct Surface<H: ElementHost> {
    scheduler: Rc<dyn FrameScheduler>,
    root: Option<AnyComponent>,
    bounds: Size,
    visible_rect: Rect,
    phase: SurfacePhase,
    render_root: Option<RenderNode>,
    pool: VisiblePool<H::Handle>,
    recycler: RecyclePool<H::Handle>,
    needs_layout: bool,
    needs_reconcile: bool,
    reload_pending: bool,
    total_created: usize,
    reuse_count: usize,
}

impl<H: ElementHost> Surface<H> {
    pub fn new(scheduler: Rc<dyn FrameScheduler>) -> Self {
        Self::with_policy(scheduler, RecyclePolicy::default())
    }

    pub fn with_policy(scheduler: Rc<dyn FrameScheduler>, policy: RecyclePolicy) -> Self {
        Self {
            scheduler,
            root: None,
            bounds: Size::ZERO,
            visible_rect: Rect::ZERO,
            phase: SurfacePhase::Idle,
            render_root: None,
            pool: VisiblePool::new(),
            recycler: RecyclePool::with_policy(policy),
            needs_layout: false,
            needs_reconcile: false,
            reload_pending: false,
            total_created: 0,
            reuse_count: 0,
        }
    }

    pub fn phase(&self) -> SurfacePhase {
        self.phase
    }

    /// The root render node of the most recent layout pass.
    pub fn render_root(&self) -> Option<&RenderNode> {
        self.render_root.as_ref()
    }

    /// Replaces the root component. Triggers a full reload: the previous
    /// pool is discarded wholesale on the next flush.
    pub fn set_root(&mut self, component: impl Component + 'static) {
        self.root = Some(Box::new(component));
        self.reload_pending = true;
        self.invalidate_layout();
    }

    /// Resizes the layout bounds. A no-op when unchanged.
    pub fn set_bounds(&mut self, bounds: Size) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.invalidate_layout();
        }
    }

    /// Moves the viewport. Only reconciliation reruns; the laid-out tree
    /// is reused.
    pub fn set_visible_rect(&mut self, rect: Rect) {
        if self.visible_rect != rect {
            self.visible_rect = rect;
            self.invalidate_reconcile();
        }
    }

    /// Requests a full reload: re-layout plus a rebuilt pool, with no
    /// frame reuse across the boundary.
    pub fn set_needs_reload(&mut self) {
        self.reload_pending = true;
        self.invalidate_layout();
    }

    fn invalidate_layout(&mut self) {
        let was_clean = !self.needs_layout && !self.needs_reconcile;
        self.needs_layout = true;
        self.needs_reconcile = true;
        if was_clean {
            self.scheduler.request_frame();
        }
    }

    fn invalidate_reconcile(&mut self) {
        let was_clean = !self.needs_layout && !self.needs_reconcile;
        self.needs_reconcile = true;
        if was_clean {
            self.scheduler.request_frame();
        }
    }

    /// Runs the pending layout and/or reconciliation passes.
    ///
    /// On a reconciliation error the pool is left untouched, previously
    /// bound elements keep their frames and the surface stays laid out;
    /// the caller decides what to do with the error.
    pub fn flush<A: Animator>(
        &mut self,
        host: &mut H,
        animator: &mut A,
    ) -> Result<ReconcileReport<H::Handle>, ReconcileError> {
        if self.reload_pending {
            self.reload_pending = false;
            // Frames never survive a reload: detach everything into the
            // recycler so the rebuild draws fresh binds from it.
            for (_, entry) in self.pool.drain() {
                host.prepare_for_reuse(&entry.element);
                if let Some(overflow) = self.recycler.put(entry.tag, entry.element) {
                    host.discard(overflow);
                }
            }
        }

        let Some(root) = self.root.as_ref() else {
            return Ok(ReconcileReport::default());
        };

        if self.needs_layout {
            self.render_root = Some(root.layout(Constraints::loose(self.bounds)));
            self.needs_layout = false;
            self.needs_reconcile = true;
            self.phase = SurfacePhase::LaidOut;
        }

        let mut report = ReconcileReport::default();
        if self.needs_reconcile {
            let render_root = self
                .render_root
                .as_ref()
                .expect("laid out before reconciling");
            let plan = plan(render_root, self.visible_rect, &self.pool)?;
            report = apply(plan, &mut self.pool, &mut self.recycler, host, animator)?;
            self.needs_reconcile = false;
            self.phase = SurfacePhase::Reconciled;
            self.total_created += report.created;
            self.reuse_count += report.reused;
        }
        Ok(report)
    }

    /// Completes a removal the animator deferred: the element finally
    /// detaches into the recycle pool (or is discarded on overflow).
    pub fn finish_removal(&mut self, host: &mut H, removal: DeferredRemoval<H::Handle>) {
        host.prepare_for_reuse(&removal.element);
        if let Some(overflow) = self.recycler.put(removal.tag, removal.element) {
            host.discard(overflow);
        }
    }

    /// Deactivates the surface: every bound and pooled element is
    /// released to the host and the laid-out state dropped. The root
    /// component is kept so a later flush can rebuild from scratch.
    pub fn teardown(&mut self, host: &mut H) {
        for (_, entry) in self.pool.drain() {
            host.discard(entry.element);
        }
        for element in self.recycler.drain() {
            host.discard(element);
        }
        self.render_root = None;
        self.phase = SurfacePhase::Idle;
        self.needs_layout = self.root.is_some();
        self.needs_reconcile = self.root.is_some();
    }

    pub fn stats(&self) -> PoolStats {
        PoolStats {
            in_use: self.pool.len(),
            in_pool: self.recycler.len(),
            total_created: self.total_created,
            reuse_count: self.reuse_count,
        }
    }
}
