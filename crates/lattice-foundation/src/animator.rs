//! Pluggable animation hook.
//!
//! The reconciler consults the animator synchronously, exactly once per
//! performed operation, before that operation's pool bookkeeping. Actual
//! animation runs on the host's clock; the engine only honors the
//! animator's immediate decisions (initial frame override, applied update
//! frame, deferred detachment).

use lattice_core::{NodeIdentity, Rect};

/// What to do with an element whose render node left the visible set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemovalChoice {
    /// Detach immediately into the recycle pool.
    Recycle,
    /// Keep the element alive for an exit animation; it is handed back in
    /// the report and detached later via `Surface::finish_removal`.
    Deferred,
}

/// Injected strategy intercepting create/update/remove operations.
pub trait Animator {
    /// Optional initial frame for a freshly created element. The pool
    /// records the target frame either way; driving the element from the
    /// override to the target is the animator's business.
    fn on_insert(&mut self, identity: &NodeIdentity, target: Rect) -> Option<Rect> {
        let _ = (identity, target);
        None
    }

    /// The frame actually applied for an update. Defaults to the target.
    fn on_update(&mut self, identity: &NodeIdentity, from: Rect, to: Rect) -> Rect {
        let _ = (identity, from);
        to
    }

    /// Disposition of a removed element.
    fn on_remove(&mut self, identity: &NodeIdentity, frame: Rect) -> RemovalChoice {
        let _ = (identity, frame);
        RemovalChoice::Recycle
    }
}

/// Pass-through animator: no overrides, immediate removal.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoAnimation;

impl Animator for NoAnimation {}
