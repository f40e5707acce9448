//! Test doubles for the engine's host-facing seams.
//!
//! [`RecordingHost`] implements the element capability contract against
//! plain structs and records every call so tests can assert on the exact
//! operation stream. [`ManualScheduler`] counts frame requests without a
//! real refresh loop.

use std::cell::Cell;
use std::rc::Rc;

use lattice_core::collections::map::{HashMap, HashSet};
use lattice_core::{ContentApplier, Rect, ReuseTag};
use lattice_foundation::{ElementHost, FrameScheduler, HostError};
use lattice_ui::{ImageContent, TextContent};

/// A fake visual element.
#[derive(Clone, Debug)]
pub struct TestElement {
    pub tag: ReuseTag,
    pub frame: Rect,
    /// Human-readable rendition of the last applied content.
    pub content: Option<String>,
    /// Times this element went through recycle-reset.
    pub reset_count: usize,
}

/// One recorded host call.
#[derive(Clone, Debug, PartialEq)]
pub enum HostOp {
    Create { id: u64, tag: ReuseTag },
    SetFrame { id: u64, frame: Rect },
    ApplyContent { id: u64, content: String },
    PrepareForReuse { id: u64 },
    Discard { id: u64 },
}

/// Element host that materializes elements as plain structs and records
/// every operation in order.
///
/// By default every tag is registered; [`RecordingHost::with_registered`]
/// restricts the factory so unregistered-tag handling can be exercised.
pub struct RecordingHost {
    elements: HashMap<u64, TestElement>,
    next_id: u64,
    registered: Option<HashSet<ReuseTag>>,
    pub ops: Vec<HostOp>,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingHost {
    /// A host accepting every reuse tag.
    pub fn new() -> Self {
        Self {
            elements: HashMap::default(),
            next_id: 0,
            registered: None,
            ops: Vec::new(),
        }
    }

    /// A host that only builds elements for the given tags.
    pub fn with_registered(tags: &[ReuseTag]) -> Self {
        let mut host = Self::new();
        host.registered = Some(tags.iter().copied().collect());
        host
    }

    pub fn element(&self, id: u64) -> Option<&TestElement> {
        self.elements.get(&id)
    }

    /// Elements currently alive (bound or pooled, not discarded).
    pub fn live_count(&self) -> usize {
        self.elements.len()
    }

    /// Recorded operations of the given constructor, in order.
    pub fn ops_matching(&self, predicate: impl Fn(&HostOp) -> bool) -> Vec<&HostOp> {
        self.ops.iter().filter(|op| predicate(op)).collect()
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    fn describe(applier: &dyn ContentApplier) -> String {
        if let Some(text) = applier.as_any().downcast_ref::<TextContent>() {
            format!("text:{}", text.text)
        } else if let Some(image) = applier.as_any().downcast_ref::<ImageContent>() {
            format!("image:{}", image.source)
        } else {
            "opaque".to_string()
        }
    }
}

impl ElementHost for RecordingHost {
    type Handle = u64;

    fn create(&mut self, tag: ReuseTag) -> Result<u64, HostError> {
        if let Some(registered) = &self.registered {
            if !registered.contains(&tag) {
                return Err(HostError::UnregisteredTag(tag));
            }
        }
        let id = self.next_id;
        self.next_id += 1;
        self.elements.insert(
            id,
            TestElement {
                tag,
                frame: Rect::ZERO,
                content: None,
                reset_count: 0,
            },
        );
        self.ops.push(HostOp::Create { id, tag });
        Ok(id)
    }

    fn set_frame(&mut self, element: &u64, frame: Rect) {
        if let Some(el) = self.elements.get_mut(element) {
            el.frame = frame;
        }
        self.ops.push(HostOp::SetFrame {
            id: *element,
            frame,
        });
    }

    fn apply_content(&mut self, element: &u64, applier: &dyn ContentApplier) {
        let content = Self::describe(applier);
        if let Some(el) = self.elements.get_mut(element) {
            el.content = Some(content.clone());
        }
        self.ops.push(HostOp::ApplyContent {
            id: *element,
            content,
        });
    }

    fn prepare_for_reuse(&mut self, element: &u64) {
        if let Some(el) = self.elements.get_mut(element) {
            el.content = None;
            el.reset_count += 1;
        }
        self.ops.push(HostOp::PrepareForReuse { id: *element });
    }

    fn discard(&mut self, element: u64) {
        self.elements.remove(&element);
        self.ops.push(HostOp::Discard { id: element });
    }
}

/// Frame scheduler that only counts requests.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    requests: Rc<Cell<usize>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requested(&self) -> usize {
        self.requests.get()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&self) {
        self.requests.set(self.requests.get() + 1);
    }
}
