//! Enumeration of the render nodes visible inside a viewport.
//!
//! Walks the tree depth-first in document order, accumulating absolute
//! frames and identity paths. Subtrees whose precomputed bounds miss the
//! viewport are skipped wholesale, which is what makes scroll
//! reconciliation proportional to the visible set rather than the tree.

use lattice_core::collections::map::HashSet;
use lattice_core::{
    ElementContent, IdentitySegment, NodeIdentity, Point, Rect, RenderNode,
};

use crate::error::ReconcileError;

/// Depth guard for the enumeration walk. Pure recursive layout cannot
/// produce cycles in an owned tree; the cap bounds pathological nesting.
pub const MAX_TREE_DEPTH: usize = 256;

/// A content-bearing render node intersecting the viewport.
#[derive(Clone, Debug)]
pub struct VisibleNode {
    pub identity: NodeIdentity,
    /// Absolute frame, relative to the root's origin.
    pub frame: Rect,
    pub content: ElementContent,
}

/// Collects visible content nodes in depth-first document order.
///
/// A node's identity is its path from the root: the explicit key where
/// one was stamped, the structural child index otherwise. Fails without
/// partial output on an identity collision or an exceeded depth guard.
pub fn collect_visible(
    root: &RenderNode,
    viewport: Rect,
) -> Result<Vec<VisibleNode>, ReconcileError> {
    let mut out = Vec::new();
    let mut seen: HashSet<NodeIdentity> = HashSet::default();
    walk(
        root,
        Point::ZERO,
        NodeIdentity::root(),
        viewport,
        0,
        &mut seen,
        &mut out,
    )?;
    Ok(out)
}

fn walk(
    node: &RenderNode,
    origin: Point,
    identity: NodeIdentity,
    viewport: Rect,
    depth: usize,
    seen: &mut HashSet<NodeIdentity>,
    out: &mut Vec<VisibleNode>,
) -> Result<(), ReconcileError> {
    if depth > MAX_TREE_DEPTH {
        return Err(ReconcileError::DepthExceeded {
            limit: MAX_TREE_DEPTH,
        });
    }
    let subtree = node.subtree_bounds().translate(origin.x, origin.y);
    if !subtree.intersects(&viewport) {
        return Ok(());
    }

    if let Some(content) = node.content() {
        let frame = Rect::from_origin_size(origin, node.size());
        if frame.intersects(&viewport) {
            if !seen.insert(identity.clone()) {
                return Err(ReconcileError::IdentityCollision { identity });
            }
            out.push(VisibleNode {
                identity: identity.clone(),
                frame,
                content: content.clone(),
            });
        }
    }

    for (index, child) in node.children().iter().enumerate() {
        let segment = match child.node.key() {
            Some(key) => IdentitySegment::Key(key),
            None => IdentitySegment::Index(index as u32),
        };
        walk(
            &child.node,
            origin.offset(child.offset.x, child.offset.y),
            identity.child(segment),
            viewport,
            depth + 1,
            seen,
            out,
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattice_core::{ContentApplier, RenderChild, ReuseTag, Size};
    use std::any::Any;
    use std::rc::Rc;

    struct Probe;
    impl ContentApplier for Probe {
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn content() -> ElementContent {
        ElementContent::new(ReuseTag("probe"), Rc::new(Probe))
    }

    fn cell(size: Size) -> RenderNode {
        RenderNode::with_content(size, content())
    }

    fn column(heights: &[f32]) -> RenderNode {
        let mut y = 0.0;
        let mut children = Vec::new();
        for &h in heights {
            children.push(RenderChild::new(
                Point::new(0.0, y),
                cell(Size::new(100.0, h)),
            ));
            y += h;
        }
        RenderNode::container(Size::new(100.0, y), children)
    }

    #[test]
    fn test_enumerates_only_intersecting_nodes() {
        let root = column(&[50.0, 50.0, 50.0, 50.0]);
        let visible = collect_visible(&root, Rect::new(0.0, 40.0, 100.0, 70.0)).unwrap();
        let ys: Vec<f32> = visible.iter().map(|v| v.frame.y).collect();
        assert_eq!(ys, vec![0.0, 50.0, 100.0]);
    }

    #[test]
    fn test_document_order_and_paths() {
        let root = column(&[50.0, 50.0]);
        let visible = collect_visible(&root, Rect::new(0.0, 0.0, 100.0, 100.0)).unwrap();
        let paths: Vec<String> = visible.iter().map(|v| v.identity.to_string()).collect();
        assert_eq!(paths, vec!["/0", "/1"]);
    }

    #[test]
    fn test_keyed_children_use_key_segments() {
        let child = cell(Size::new(10.0, 10.0)).keyed(99);
        let root = RenderNode::container(
            Size::new(10.0, 10.0),
            vec![RenderChild::new(Point::ZERO, child)],
        );
        let visible = collect_visible(&root, Rect::new(0.0, 0.0, 10.0, 10.0)).unwrap();
        assert_eq!(visible[0].identity.to_string(), "/#99");
    }

    #[test]
    fn test_duplicate_keys_collide() {
        let a = cell(Size::new(10.0, 10.0)).keyed(7);
        let b = cell(Size::new(10.0, 10.0)).keyed(7);
        let root = RenderNode::container(
            Size::new(20.0, 10.0),
            vec![
                RenderChild::new(Point::ZERO, a),
                RenderChild::new(Point::new(10.0, 0.0), b),
            ],
        );
        let err = collect_visible(&root, Rect::new(0.0, 0.0, 20.0, 10.0)).unwrap_err();
        assert!(matches!(err, ReconcileError::IdentityCollision { .. }));
    }

    #[test]
    fn test_offscreen_keyed_duplicate_is_not_a_collision() {
        // Only *simultaneously visible* nodes may not share identity.
        let a = cell(Size::new(10.0, 10.0)).keyed(7);
        let b = cell(Size::new(10.0, 10.0)).keyed(7);
        let root = RenderNode::container(
            Size::new(20.0, 2000.0),
            vec![
                RenderChild::new(Point::ZERO, a),
                RenderChild::new(Point::new(0.0, 1000.0), b),
            ],
        );
        let visible = collect_visible(&root, Rect::new(0.0, 0.0, 20.0, 100.0)).unwrap();
        assert_eq!(visible.len(), 1);
    }

    #[test]
    fn test_out_of_bounds_child_still_enumerated() {
        // An overlay placed after its parent's trailing edge is covered by
        // the subtree bounds and must not be culled with the parent frame.
        let overlay = cell(Size::new(10.0, 10.0));
        let root = RenderNode::container(
            Size::new(50.0, 50.0),
            vec![RenderChild::new(Point::new(55.0, 0.0), overlay)],
        );
        let visible = collect_visible(&root, Rect::new(50.0, 0.0, 30.0, 30.0)).unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].frame.x, 55.0);
    }

    #[test]
    fn test_depth_guard_trips() {
        let mut node = cell(Size::new(1.0, 1.0));
        for _ in 0..(MAX_TREE_DEPTH + 1) {
            node = RenderNode::container(
                Size::new(1.0, 1.0),
                vec![RenderChild::new(Point::ZERO, node)],
            );
        }
        let err = collect_visible(&node, Rect::new(0.0, 0.0, 10.0, 10.0)).unwrap_err();
        assert_eq!(
            err,
            ReconcileError::DepthExceeded {
                limit: MAX_TREE_DEPTH
            }
        );
    }
}
