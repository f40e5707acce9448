//! The capability contract the engine requires from the host view system.

use lattice_core::{ContentApplier, Rect, ReuseTag};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    /// The host has no element factory for this tag. The create operation
    /// is skipped and the render node stays unbound rather than crashing
    /// the host.
    #[error("no element factory registered for reuse tag `{0}`")]
    UnregisteredTag(ReuseTag),
}

/// Host-owned visual elements, addressed by cheap clonable handles.
///
/// The engine never constructs host types: it only creates elements
/// through the factory, positions them, pushes content appliers at them
/// and hands them back for recycling. Element mutation is not
/// reentrant-safe; all calls happen on the single execution context that
/// owns the [`crate::Surface`].
pub trait ElementHost {
    type Handle: Clone;

    /// Builds a fresh element for `tag`.
    fn create(&mut self, tag: ReuseTag) -> Result<Self::Handle, HostError>;

    fn set_frame(&mut self, element: &Self::Handle, frame: Rect);

    /// Applies a render node's content to a bound element. The host
    /// downcasts the applier according to the element's tag.
    fn apply_content(&mut self, element: &Self::Handle, applier: &dyn ContentApplier);

    /// Resets an element that is entering the recycle pool.
    fn prepare_for_reuse(&mut self, element: &Self::Handle);

    /// Permanently releases an element (recycle-pool overflow, teardown).
    fn discard(&mut self, element: Self::Handle);
}
