//! Element content: the opaque payload a render node carries for the host.
//!
//! The engine never interprets content. A [`ReuseTag`] selects which host
//! factory builds (and which recycle bucket may supply) the element; the
//! [`ContentApplier`] carries the observable properties and is downcast by
//! the host per tag.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// Classifier determining which elements may be recycled for which render
/// nodes. Elements only ever move between nodes with an identical tag.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReuseTag(pub &'static str);

impl fmt::Debug for ReuseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReuseTag({})", self.0)
    }
}

impl fmt::Display for ReuseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Capability that configures a bound element's observable properties.
///
/// Implementations are plain data (text string, image source, ...) exposed
/// through `Any` so the host can downcast by tag. Appliers are shared via
/// `Rc` and must stay immutable once attached to a render node.
pub trait ContentApplier: 'static {
    fn as_any(&self) -> &dyn Any;
}

/// Tag plus applier. A render node with content is bindable to exactly one
/// visual element per reconciliation pass.
#[derive(Clone)]
pub struct ElementContent {
    pub tag: ReuseTag,
    pub applier: Rc<dyn ContentApplier>,
}

impl ElementContent {
    pub fn new(tag: ReuseTag, applier: Rc<dyn ContentApplier>) -> Self {
        Self { tag, applier }
    }
}

impl fmt::Debug for ElementContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementContent")
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}
