//! The four ways of walking a [`Tree`]. Each order is offered twice: as an iterator over the keys,
//! which can be restarted by asking the tree for a new one, and as a `*_with` method that hands
//! every [`Node`] to a visitor in the same order.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let tree = Tree::from_sorted(vec![1, 2, 3, 4, 5, 6, 7]);
//!
//! assert_eq!(tree.level_order().copied().collect::<Vec<_>>(), vec![4, 2, 6, 1, 3, 5, 7]);
//! assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6, 7]);
//! assert_eq!(tree.preorder().copied().collect::<Vec<_>>(), vec![4, 2, 1, 3, 6, 5, 7]);
//! assert_eq!(tree.postorder().copied().collect::<Vec<_>>(), vec![1, 3, 2, 5, 7, 6, 4]);
//!
//! let mut leaves = Vec::new();
//! tree.inorder_with(|node| {
//!     if node.is_leaf() {
//!         leaves.push(*node.key());
//!     }
//! });
//! assert_eq!(leaves, vec![1, 3, 5, 7]);
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::tree::{Node, Tree};

impl<K> Tree<K> {
    /// Iterates over the keys breadth first: the root, then every node one level down from left
    /// to right, and so on.
    pub fn level_order(&self) -> LevelOrder<'_, K> {
        LevelOrder {
            queue: self.root().into_iter().collect(),
        }
    }

    /// Iterates over the keys in ascending order: left subtree, node, right subtree.
    pub fn inorder(&self) -> InOrder<'_, K> {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left_spine(self.root());
        iter
    }

    /// Iterates over the keys node first: node, left subtree, right subtree.
    pub fn preorder(&self) -> PreOrder<'_, K> {
        PreOrder {
            stack: self.root().into_iter().collect(),
        }
    }

    /// Iterates over the keys children first: left subtree, right subtree, node.
    pub fn postorder(&self) -> PostOrder<'_, K> {
        PostOrder::starting_at(self.root())
    }

    /// Same as [`Tree::inorder`].
    pub fn keys(&self) -> InOrder<'_, K> {
        self.inorder()
    }

    /// Calls `visit` on every node in [level order][Tree::level_order].
    pub fn level_order_with(&self, visit: impl FnMut(&Node<K>)) {
        walk(self.level_order(), LevelOrder::next_node, visit);
    }

    /// Calls `visit` on every node in [inorder][Tree::inorder].
    pub fn inorder_with(&self, visit: impl FnMut(&Node<K>)) {
        walk(self.inorder(), InOrder::next_node, visit);
    }

    /// Calls `visit` on every node in [preorder][Tree::preorder].
    pub fn preorder_with(&self, visit: impl FnMut(&Node<K>)) {
        walk(self.preorder(), PreOrder::next_node, visit);
    }

    /// Calls `visit` on every node in [postorder][Tree::postorder].
    pub fn postorder_with(&self, visit: impl FnMut(&Node<K>)) {
        walk(self.postorder(), PostOrder::next_node, visit);
    }
}

fn walk<'a, K: 'a, I>(
    mut iter: I,
    mut next_node: impl FnMut(&mut I) -> Option<&'a Node<K>>,
    mut visit: impl FnMut(&Node<K>),
) {
    while let Some(node) = next_node(&mut iter) {
        visit(node);
    }
}

/// Breadth first iterator returned by [`Tree::level_order`].
pub struct LevelOrder<'a, K> {
    queue: VecDeque<&'a Node<K>>,
}

impl<'a, K> LevelOrder<'a, K> {
    fn next_node(&mut self) -> Option<&'a Node<K>> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node)
    }
}

impl<'a, K> Iterator for LevelOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_node().map(Node::key)
    }
}

impl<K> FusedIterator for LevelOrder<'_, K> {}

/// Ascending iterator returned by [`Tree::inorder`].
pub struct InOrder<'a, K> {
    /// Nodes whose left subtree has been pushed but which haven't been yielded yet.
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> InOrder<'a, K> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }

    fn next_node(&mut self) -> Option<&'a Node<K>> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node)
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_node().map(Node::key)
    }
}

impl<K> FusedIterator for InOrder<'_, K> {}

/// Node first iterator returned by [`Tree::preorder`].
pub struct PreOrder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> PreOrder<'a, K> {
    fn next_node(&mut self) -> Option<&'a Node<K>> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree comes off the stack first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node)
    }
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_node().map(Node::key)
    }
}

impl<K> FusedIterator for PreOrder<'_, K> {}

/// Children first iterator returned by [`Tree::postorder`].
pub struct PostOrder<'a, K> {
    /// Each node is pushed once unexpanded and, after its children are pushed above it, once more
    /// marked as expanded so it's yielded after them.
    stack: Vec<(&'a Node<K>, bool)>,
}

impl<'a, K> PostOrder<'a, K> {
    /// Walks the subtree under `root` only.
    pub(crate) fn starting_at(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.map(|root| (root, false)).into_iter().collect(),
        }
    }

    pub(crate) fn next_node(&mut self) -> Option<&'a Node<K>> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node);
            }

            self.stack.push((node, true));
            self.stack.extend(node.right().map(|right| (right, false)));
            self.stack.extend(node.left().map(|left| (left, false)));
        }
    }
}

impl<'a, K> Iterator for PostOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_node().map(Node::key)
    }
}

impl<K> FusedIterator for PostOrder<'_, K> {}


#[cfg(test)]
mod quicktests {
    use super::*;

    quickcheck::quickcheck! {
        fn every_order_visits_every_key_once(xs: Vec<i8>) -> bool {
            let mut tree = Tree::new();
            for x in &xs {
                let _ = tree.insert(*x);
            }
            let sorted: Vec<i8> = tree.inorder().copied().collect();

            [
                tree.level_order().copied().collect::<Vec<_>>(),
                tree.preorder().copied().collect(),
                tree.postorder().copied().collect(),
            ]
            .into_iter()
            .all(|mut keys| {
                keys.sort_unstable();
                keys == sorted
            })
        }
    }

    quickcheck::quickcheck! {
        fn visitors_match_iterators(xs: Vec<i8>) -> bool {
            let mut tree = Tree::new();
            for x in &xs {
                let _ = tree.insert(*x);
            }

            let mut level_order = Vec::new();
            tree.level_order_with(|node| level_order.push(*node.key()));
            let mut preorder = Vec::new();
            tree.preorder_with(|node| preorder.push(*node.key()));
            let mut postorder = Vec::new();
            tree.postorder_with(|node| postorder.push(*node.key()));

            tree.level_order().copied().eq(level_order)
                && tree.preorder().copied().eq(preorder)
                && tree.postorder().copied().eq(postorder)
        }
    }

    quickcheck::quickcheck! {
        fn preorder_starts_at_root_and_postorder_ends_there(xs: Vec<i8>) -> bool {
            let tree: Tree<_> = xs.into_iter().collect();
            let root = tree.root().map(Node::key);

            tree.preorder().next() == root
                && tree.postorder().last() == root
                && tree.level_order().next() == root
        }
    }
}
