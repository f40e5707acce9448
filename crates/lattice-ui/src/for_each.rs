//! Data-driven child expansion.

use lattice_core::{AnyComponent, Component, Constraints, RenderNode};

/// Stamps an explicit identity key on the node its child produces.
///
/// Keyed children keep their identity when reordered inside a container,
/// so the reconciler sees moves instead of remove/create pairs.
pub struct Keyed {
    key: u64,
    child: AnyComponent,
}

impl Keyed {
    pub fn new(key: u64, child: impl Component + 'static) -> Self {
        Self {
            key,
            child: Box::new(child),
        }
    }
}

impl Component for Keyed {
    fn layout(&self, constraints: Constraints) -> RenderNode {
        self.child.layout(constraints).keyed(self.key)
    }
}

/// Expands `items` into one keyed child per item, preserving input order.
///
/// Not a component itself: the returned children are spliced into a stack,
/// flow or overlay. `key` must be unique per item; duplicate keys among
/// simultaneously visible siblings are an identity collision the
/// reconciler rejects.
pub fn for_each<T, I, K, B, C>(items: I, key: K, build: B) -> Vec<AnyComponent>
where
    I: IntoIterator<Item = T>,
    K: Fn(&T) -> u64,
    B: Fn(&T) -> C,
    C: Component + 'static,
{
    items
        .into_iter()
        .map(|item| {
            let k = key(&item);
            Box::new(Keyed::new(k, build(&item))) as AnyComponent
        })
        .collect()
}

/// Positional variant: children are identified by their index, so
/// reordering the data reorders identities with it.
pub fn for_each_indexed<T, I, B, C>(items: I, build: B) -> Vec<AnyComponent>
where
    I: IntoIterator<Item = T>,
    B: Fn(usize, &T) -> C,
    C: Component + 'static,
{
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| Box::new(build(i, &item)) as AnyComponent)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::VStack;
    use crate::widgets::Space;

    #[test]
    fn test_for_each_preserves_order_and_keys() {
        let children = for_each([3u64, 1, 2], |&n| n, |&n| Space::new(n as f32, 10.0));
        let node = VStack(children).layout(Constraints::unbounded());
        let keys: Vec<_> = node.children().iter().map(|c| c.node.key()).collect();
        assert_eq!(keys, vec![Some(3), Some(1), Some(2)]);
        assert_eq!(node.children()[0].node.size().width, 3.0);
    }

    #[test]
    fn test_for_each_indexed_leaves_children_unkeyed() {
        let children = for_each_indexed(["a", "b"], |i, _| Space::new(i as f32 + 1.0, 1.0));
        let node = VStack(children).layout(Constraints::unbounded());
        assert!(node.children().iter().all(|c| c.node.key().is_none()));
        assert_eq!(node.children()[1].node.size().width, 2.0);
    }

    #[test]
    fn test_keyed_wrapper_is_transparent_in_layout() {
        let node = Keyed::new(9, Space::new(10.0, 20.0)).layout(Constraints::unbounded());
        assert_eq!(node.size(), lattice_core::Size::new(10.0, 20.0));
        assert_eq!(node.key(), Some(9));
    }
}
