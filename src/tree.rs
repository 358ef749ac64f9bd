//! A Binary Search Tree over unique keys that is rebuilt into minimal height on demand. Each
//! `Node` exclusively owns its children so the tree is a plain `Box` graph with no parent
//! pointers and no sharing.
//!
//! Inserts and deletes do *not* keep the tree balanced. A tree built with
//! [`Tree::from_sorted`] (or `collect`) is height-balanced, and [`Tree::rebalance`] restores that
//! shape after any sequence of mutations.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let mut tree: Tree<i32> = [3, 1, 2].into_iter().collect();
//! assert!(tree.find(&2));
//!
//! // Ascending inserts lean the tree to the right.
//! for key in 4..8 {
//!     tree.insert(key).unwrap();
//! }
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6, 7]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::{debug, trace};

use crate::error::DuplicateKey;
use crate::traversal::PostOrder;
use crate::util::{is_strictly_ascending, sorted_unique};

/// A Binary Search Tree of unique keys.
///
/// Nothing here recurses along the height of the tree (except `Debug`), so even a tree that has
/// degenerated into a long chain can be walked, rebalanced, cloned and dropped.
pub struct Tree<K> {
    root: Link<K>,
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        // Detach children before each node drops so `Box` never recurses down a chain.
        let mut stack: Vec<Box<Node<K>>> = self.root.0.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.0.take());
            stack.extend(node.right.0.take());
        }
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        // Children come out of a postorder walk before their parent, so by the time a node is
        // copied its copied subtrees are the top of `built`.
        let mut built: Vec<Box<Node<K>>> = Vec::new();
        let mut nodes = PostOrder::starting_at(self.root());
        while let Some(node) = nodes.next_node() {
            let right = node.right().and_then(|_| built.pop());
            let left = node.left().and_then(|_| built.pop());
            built.push(Box::new(Node {
                key: node.key.clone(),
                left: Link(left),
                right: Link(right),
            }));
        }
        Self {
            root: Link(built.pop()),
        }
    }
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root()).finish()
    }
}

/// Renders the tree sideways: the right subtree is printed above a node and the left subtree
/// below it. The layout is only meant for eyeballing a tree's shape.
///
/// ```
/// use balanced_bst::Tree;
///
/// let tree = Tree::from_sorted(vec![1, 2, 3]);
/// assert_eq!(tree.to_string(), "│   ┌── 3\n└── 2\n    └── 1\n");
/// ```
impl<K> fmt::Display for Tree<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Step<'a, K> {
            Visit(&'a Node<K>, String, bool),
            Print(&'a Node<K>, String, bool),
        }

        // Right subtree, node, left subtree: pushed in reverse so they pop in that order.
        let mut steps: Vec<Step<'_, K>> = self
            .root()
            .map(|root| Step::Visit(root, String::new(), true))
            .into_iter()
            .collect();
        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(node, prefix, is_left) => {
                    if let Some(left) = node.left() {
                        let guide = if is_left { "    " } else { "│   " };
                        steps.push(Step::Visit(left, format!("{prefix}{guide}"), true));
                    }
                    if let Some(right) = node.right() {
                        let guide = if is_left { "│   " } else { "    " };
                        steps.push(Step::Print(node, prefix.clone(), is_left));
                        steps.push(Step::Visit(right, format!("{prefix}{guide}"), false));
                    } else {
                        steps.push(Step::Print(node, prefix, is_left));
                    }
                }
                Step::Print(node, prefix, is_left) => {
                    let connector = if is_left { "└── " } else { "┌── " };
                    writeln!(f, "{prefix}{connector}{}", node.key)?;
                }
            }
        }
        Ok(())
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    /// Builds a balanced tree from keys in any order. Duplicates are dropped.
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        Self::from_sorted(sorted_unique(keys))
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: Link(None) }
    }

    /// Builds a height-balanced tree holding exactly `keys`, which must already be sorted in
    /// strictly ascending order. Use [`sorted_unique`] (or `collect`) for arbitrary input.
    ///
    /// The middle key of the slice becomes the root and the halves on either side are built the
    /// same way, so `n` keys give a tree of height `⌈log2(n + 1)⌉ - 1`.
    ///
    /// # Panics
    ///
    /// In debug builds, when `keys` isn't strictly ascending.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::from_sorted(vec![20, 30, 32, 34, 36, 40, 50, 60, 65, 70, 75, 80, 85]);
    ///
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(50));
    /// assert_eq!(tree.height(), 3);
    /// assert!(tree.is_balanced());
    /// ```
    pub fn from_sorted(keys: Vec<K>) -> Self
    where
        K: Ord,
    {
        if cfg!(debug_assertions) {
            assert!(
                is_strictly_ascending(&keys),
                "`from_sorted` requires unique keys in ascending order"
            );
        }

        let tree = Self {
            root: Link::build(keys),
        };

        if cfg!(debug_assertions) {
            assert!(tree.is_balanced());
        }
        tree
    }

    /// The root node, if the tree has any keys.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.node()
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.0.is_none()
    }

    /// The number of keys in the tree. This walks every node.
    pub fn len(&self) -> usize {
        self.inorder().count()
    }

    /// The number of edges on the longest path from the root down to a leaf.
    ///
    /// **Note** an empty tree reports a height of `0`, the same as a tree with a single key,
    /// even though an empty *subtree* counts as `-1` when computing the height of its parent.
    /// Use [`Tree::is_empty`] to tell the two apart. Heights of other nodes are available
    /// through [`Node::height`].
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.insert(1).unwrap();
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.insert(2).unwrap();
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// Whether, for every node, the heights of its left and right subtrees differ by at most one.
    /// An empty tree is balanced.
    pub fn is_balanced(&self) -> bool {
        fold_heights(self.root(), |left, right| left.abs_diff(right) <= 1).is_some()
    }
}

impl<K> Tree<K>
where
    K: Ord,
{
    /// Inserts the key as a new leaf. The tree is not rebalanced afterwards.
    ///
    /// # Errors
    ///
    /// When the key is already present the tree is left untouched and the key is handed back
    /// inside [`DuplicateKey`].
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{DuplicateKey, Tree};
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.insert(1), Ok(()));
    /// assert_eq!(tree.insert(1), Err(DuplicateKey(1)));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> Result<(), DuplicateKey<K>> {
        let slot = self.root.search_mut(&key);
        if slot.0.is_some() {
            trace!("rejected duplicate insert");
            return Err(DuplicateKey(key));
        }

        slot.0 = Some(Node::new_boxed(key));
        Ok(())
    }

    /// Deletes the node holding `key` and returns the key. Deleting a key that isn't in the tree
    /// does nothing and returns `None`. The tree is not rebalanced afterwards.
    ///
    /// A node with two children is replaced by its inorder successor (the smallest key of its
    /// right subtree).
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree: Tree<_> = (1..=7).collect();
    ///
    /// assert_eq!(tree.delete(&4), Some(4));
    /// assert_eq!(tree.delete(&4), None);
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(5));
    /// ```
    pub fn delete(&mut self, key: &K) -> Option<K> {
        let deleted = self.root.search_mut(key).remove_node();
        if deleted.is_none() {
            trace!("delete of an absent key is a no-op");
        }
        deleted
    }

    /// Whether `key` is in the tree.
    pub fn find(&self, key: &K) -> bool {
        self.find_node(key).is_some()
    }

    /// The node holding `key`, if any.
    pub fn find_node(&self, key: &K) -> Option<&Node<K>> {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// The number of edges between the root and the node holding `key`, or `None` when the key
    /// isn't in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::from_sorted(vec![20, 30, 32, 34, 36, 40, 50, 60, 65, 70, 75, 80, 85]);
    ///
    /// assert_eq!(tree.depth(&50), Some(0));
    /// assert_eq!(tree.depth(&32), Some(1));
    /// assert_eq!(tree.depth(&30), Some(3));
    /// assert_eq!(tree.depth(&777), None);
    /// ```
    pub fn depth(&self, key: &K) -> Option<usize> {
        let mut depth = 0;
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(depth),
                Ordering::Greater => node.right(),
            };
            depth += 1;
        }
        None
    }

    /// Rebuilds the tree into minimal height from its keys in sorted order. Afterwards
    /// [`Tree::is_balanced`] is `true`.
    pub fn rebalance(&mut self) {
        let old_height = self.height();

        let mut keys = Vec::new();
        self.root.take().into_sorted_keys(&mut keys);
        let num_keys = keys.len();
        *self = Self::from_sorted(keys);

        debug!(
            "rebalanced {} keys from height {} to {}",
            num_keys,
            old_height,
            self.height()
        );
    }
}

/// An optional, exclusively owned child. `None` marks the empty spot below a leaf.
struct Link<K>(Option<Box<Node<K>>>);

impl<K> Link<K> {
    fn node(&self) -> Option<&Node<K>> {
        self.0.as_deref()
    }

    fn take(&mut self) -> Self {
        Link(self.0.take())
    }

    /// The child on the `ordering` side of this link's node.
    ///
    /// ## Panics
    ///
    /// When called on an empty link.
    fn child_mut(&mut self, ordering: Ordering) -> &mut Self {
        match (&mut self.0, ordering) {
            (Some(node), Ordering::Less) => &mut node.left,
            (Some(node), _) => &mut node.right,
            (None, _) => unreachable!("descending requires a node"),
        }
    }

    /// Builds a balanced subtree from strictly ascending keys.
    fn build(mut keys: Vec<K>) -> Self {
        if keys.is_empty() {
            return Link(None);
        }

        // Middle of the closed range `[0, len - 1]`, rounding down.
        let mid = (keys.len() - 1) / 2;
        let right = keys.split_off(mid + 1);
        let Some(key) = keys.pop() else {
            return Link(None);
        };

        Link(Some(Box::new(Node {
            key,
            left: Self::build(keys),
            right: Self::build(right),
        })))
    }

    /// Moves every key of this subtree into `keys` in ascending order, consuming the nodes.
    fn into_sorted_keys(self, keys: &mut Vec<K>) {
        let mut stack: Vec<Box<Node<K>>> = Vec::new();
        let mut current = self.0;
        loop {
            while let Some(mut node) = current {
                current = node.left.0.take();
                stack.push(node);
            }
            let Some(node) = stack.pop() else {
                return;
            };
            let Node { key, right, .. } = *node;
            keys.push(key);
            current = right.0;
        }
    }

    /// Walks down to the link holding `key`, or to the empty link where it would be attached.
    fn search_mut(&mut self, key: &K) -> &mut Self
    where
        K: Ord,
    {
        let mut link = self;
        loop {
            // Greater goes right, anything else goes left.
            match link.node().map(|node| key.cmp(&node.key)) {
                None | Some(Ordering::Equal) => return link,
                Some(ordering) => link = link.child_mut(ordering),
            }
        }
    }

    /// Removes the node at this link and returns its key. A node with two children takes the key
    /// of its inorder successor instead, and the successor is removed from the right subtree.
    fn remove_node(&mut self) -> Option<K>
    where
        K: Ord,
    {
        let node = self.0.as_mut()?;
        if node.left.0.is_some() && node.right.0.is_some() {
            // The right subtree isn't empty so it always has a smallest key.
            let successor = node.right.pop_min()?;
            let deleted = mem::replace(&mut node.key, successor);

            if cfg!(debug_assertions) {
                node.assert_children_ordered();
            }
            return Some(deleted);
        }

        let Node {
            key: deleted,
            left,
            right,
        } = *self.0.take()?;
        *self = if left.0.is_some() { left } else { right };
        Some(deleted)
    }

    /// Removes the leftmost node of this subtree and returns its key.
    fn pop_min(&mut self) -> Option<K>
    where
        K: Ord,
    {
        let mut link = self;
        while link.node().is_some_and(|node| node.left.0.is_some()) {
            link = link.child_mut(Ordering::Less);
        }
        // No left child, so this splices the right child up.
        link.remove_node()
    }
}

/// Computes subtree heights bottom up (an empty subtree counts as `-1`) and returns the height of
/// `root`. Gives up with `None` as soon as `accept` rejects the child heights of some node.
fn fold_heights<K>(
    root: Option<&Node<K>>,
    mut accept: impl FnMut(isize, isize) -> bool,
) -> Option<isize> {
    // Postorder leaves each finished subtree's height on top of the stack, right above its left
    // sibling's.
    let mut heights: Vec<isize> = Vec::new();
    let mut nodes = PostOrder::starting_at(root);
    while let Some(node) = nodes.next_node() {
        let right = match node.right() {
            Some(_) => heights.pop()?,
            None => -1,
        };
        let left = match node.left() {
            Some(_) => heights.pop()?,
            None => -1,
        };
        if !accept(left, right) {
            return None;
        }
        heights.push(left.max(right) + 1);
    }
    Some(heights.pop().unwrap_or(-1))
}

/// A `Node` stores a key and owns up to two children.
pub struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> fmt::Debug for Node<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: Link(None),
            right: Link(None),
        })
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree.
    pub fn left(&self) -> Option<&Self> {
        self.left.node()
    }

    /// The root of the right subtree.
    pub fn right(&self) -> Option<&Self> {
        self.right.node()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.0.is_none() && self.right.0.is_none()
    }

    /// The number of edges on the longest path from this node down to a leaf. A leaf has a
    /// height of `0`.
    pub fn height(&self) -> usize {
        // A present node is at least a leaf so this is never negative.
        fold_heights(Some(self), |_, _| true).map_or(0, |height| height.max(0) as usize)
    }

    fn assert_children_ordered(&self)
    where
        K: Ord,
    {
        if let Some(left) = self.left() {
            assert!(self.key > left.key);
        }
        if let Some(right) = self.right() {
            assert!(self.key < right.key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: [i32; 13] = [20, 30, 32, 34, 36, 40, 50, 60, 65, 70, 75, 80, 85];

    fn preorder(tree: &Tree<i32>) -> Vec<i32> {
        tree.preorder().copied().collect()
    }

    #[test]
    fn empty_tree() {
        let tree = Tree::<i32>::new();

        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert!(tree.is_balanced());
        assert!(!tree.find(&1));
        assert_eq!(tree.depth(&1), None);
        assert!(tree.root().is_none());
        assert_eq!(tree.to_string(), "");
    }

    #[test]
    fn from_sorted_empty() {
        let tree = Tree::<i32>::from_sorted(Vec::new());

        assert!(tree.is_empty());
        assert!(tree.is_balanced());
    }

    #[test]
    fn from_sorted_picks_lower_middle() {
        let tree = Tree::from_sorted(vec![1, 2, 3, 4]);

        assert_eq!(preorder(&tree), vec![2, 1, 3, 4]);
    }

    #[test]
    fn from_sorted_shape() {
        let tree = Tree::from_sorted(KEYS.to_vec());

        assert_eq!(
            preorder(&tree),
            vec![50, 32, 20, 30, 36, 34, 40, 70, 60, 65, 80, 75, 85]
        );
        assert_eq!(tree.height(), 3);
        assert_eq!(tree.len(), KEYS.len());
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn from_sorted_rejects_unsorted() {
        let _tree = Tree::from_sorted(vec![2, 1]);
    }

    #[test]
    fn collect_dedupes_and_sorts() {
        let tree: Tree<_> = [1, 7, 4, 23, 8, 9, 4, 3, 5, 7, 9, 67, 6345, 324]
            .into_iter()
            .collect();

        assert_eq!(
            tree.inorder().copied().collect::<Vec<_>>(),
            vec![1, 3, 4, 5, 7, 8, 9, 23, 67, 324, 6345]
        );
        assert!(tree.is_balanced());
    }

    #[test]
    fn insert_into_empty_sets_root() {
        let mut tree = Tree::new();
        tree.insert(31).unwrap();

        assert_eq!(tree.root().map(Node::key), Some(&31));
        assert!(tree.root().unwrap().is_leaf());
    }

    #[test]
    fn insert_attaches_leaf() {
        let mut tree = Tree::from_sorted(KEYS.to_vec());
        tree.insert(31).unwrap();

        let thirty = tree.find_node(&30).unwrap();
        assert_eq!(thirty.right().map(Node::key), Some(&31));
        assert_eq!(tree.depth(&31), Some(4));
        assert_eq!(tree.height(), 4);
    }

    #[test]
    fn insert_duplicate_is_rejected() {
        let mut tree = Tree::from_sorted(KEYS.to_vec());

        assert_eq!(tree.insert(50), Err(DuplicateKey(50)));
        assert_eq!(tree.insert(85), Err(DuplicateKey(85)));
        assert_eq!(tree.len(), KEYS.len());
        assert_eq!(
            preorder(&tree),
            vec![50, 32, 20, 30, 36, 34, 40, 70, 60, 65, 80, 75, 85]
        );
    }

    #[test]
    fn delete_no_children() {
        let mut tree = Tree::from_sorted(KEYS.to_vec());

        assert_eq!(tree.delete(&30), Some(30));
        assert!(!tree.find(&30));
        assert!(tree.find_node(&20).unwrap().is_leaf());
        for key in KEYS.iter().filter(|&&k| k != 30) {
            assert!(tree.find(key));
        }
    }

    #[test]
    fn delete_one_child() {
        let mut tree = Tree::from_sorted(KEYS.to_vec());

        // 20 only has a right child, 30, which takes its place.
        assert_eq!(tree.delete(&20), Some(20));
        assert_eq!(tree.find_node(&32).unwrap().left().map(Node::key), Some(&30));
    }

    #[test]
    fn delete_two_children_uses_successor() {
        let mut tree = Tree::from_sorted(KEYS.to_vec());
        tree.delete(&30);

        // The successor of 50 is 60 whose right child, 65, moves up under 70.
        assert_eq!(tree.delete(&50), Some(50));
        assert_eq!(
            preorder(&tree),
            vec![60, 32, 20, 36, 34, 40, 70, 65, 80, 75, 85]
        );
    }

    #[test]
    fn delete_two_children_with_deeper_successor() {
        let mut tree = Tree::new();
        for key in [5, 3, 8, 2, 6, 9, 7] {
            tree.insert(key).unwrap();
        }

        assert_eq!(tree.delete(&5), Some(5));
        assert_eq!(preorder(&tree), vec![6, 3, 2, 8, 7, 9]);
    }

    #[test]
    fn delete_root() {
        let mut tree = Tree::new();
        tree.insert(5).unwrap();

        assert_eq!(tree.delete(&5), Some(5));
        assert!(tree.is_empty());
    }

    #[test]
    fn delete_missing_is_noop() {
        let mut tree = Tree::from_sorted(KEYS.to_vec());

        assert_eq!(tree.delete(&777), None);
        assert_eq!(Tree::<i32>::new().delete(&1), None);
        assert_eq!(
            preorder(&tree),
            vec![50, 32, 20, 30, 36, 34, 40, 70, 60, 65, 80, 75, 85]
        );
    }

    #[test]
    fn find_present_and_missing() {
        let tree = Tree::from_sorted(KEYS.to_vec());

        assert!(tree.find(&50));
        assert!(tree.find(&80));
        assert!(tree.find(&85));
        assert!(!tree.find(&777));
    }

    #[test]
    fn depth() {
        let tree = Tree::from_sorted(KEYS.to_vec());

        assert_eq!(tree.depth(&50), Some(0));
        assert_eq!(tree.depth(&32), Some(1));
        assert_eq!(tree.depth(&36), Some(2));
        assert_eq!(tree.depth(&30), Some(3));
        assert_eq!(tree.depth(&31), None);
    }

    #[test]
    fn node_heights() {
        let tree = Tree::from_sorted(KEYS.to_vec());

        assert_eq!(tree.find_node(&50).map(Node::height), Some(3));
        assert_eq!(tree.find_node(&32).map(Node::height), Some(2));
        assert_eq!(tree.find_node(&20).map(Node::height), Some(1));
        assert_eq!(tree.find_node(&30).map(Node::height), Some(0));
    }

    #[test]
    fn single_key_height() {
        let tree = Tree::from_sorted(vec![1]);

        assert_eq!(tree.height(), 0);
        assert!(tree.is_balanced());
    }

    #[test]
    fn unbalanced_then_rebalanced() {
        let mut tree = Tree::new();
        for key in [4, 3, 5, 2, 6, 1, 7] {
            tree.insert(key).unwrap();
        }

        assert!(!tree.is_balanced());
        assert_eq!(tree.height(), 3);

        tree.rebalance();

        assert!(tree.is_balanced());
        assert_eq!(tree.height(), 2);
        assert_eq!(preorder(&tree), vec![4, 2, 1, 3, 6, 5, 7]);
    }

    #[test]
    fn rebalance_empty() {
        let mut tree = Tree::<i32>::new();
        tree.rebalance();

        assert!(tree.is_empty());
    }

    #[test]
    fn rebalance_balanced_keeps_shape() {
        let mut tree = Tree::from_sorted(KEYS.to_vec());
        let before = preorder(&tree);
        tree.rebalance();

        assert_eq!(preorder(&tree), before);
    }

    #[test]
    fn balanced_checks_every_node() {
        // The root's subtrees differ by one but the subtree under 1 leans by two.
        let mut tree = Tree::new();
        for key in [4, 1, 6, 2, 5, 3] {
            tree.insert(key).unwrap();
        }
        assert_eq!(tree.find_node(&1).map(Node::height), Some(2));
        assert!(!tree.is_balanced());
    }

    #[test]
    fn long_chain_is_walked_without_recursion() {
        const NUM_KEYS: i32 = 20_000;

        let mut tree = Tree::new();
        for key in 0..NUM_KEYS {
            tree.insert(key).unwrap();
        }

        assert_eq!(tree.height(), NUM_KEYS as usize - 1);
        assert_eq!(tree.depth(&(NUM_KEYS - 1)), Some(NUM_KEYS as usize - 1));
        assert!(!tree.is_balanced());
        assert_eq!(tree.insert(NUM_KEYS - 1), Err(DuplicateKey(NUM_KEYS - 1)));

        let copy = tree.clone();
        assert_eq!(tree.delete(&(NUM_KEYS - 1)), Some(NUM_KEYS - 1));
        assert_eq!(tree.delete(&0), Some(0));

        tree.rebalance();

        assert!(tree.is_balanced());
        assert_eq!(tree.height(), (NUM_KEYS as usize - 2).ilog2() as usize);
        assert!(tree.inorder().copied().eq(1..NUM_KEYS - 1));

        assert_eq!(copy.height(), NUM_KEYS as usize - 1);
        drop(copy);
    }

    #[test]
    fn clone_keeps_shape() {
        let mut tree = Tree::new();
        for key in [4, 1, 6, 2, 5, 3] {
            tree.insert(key).unwrap();
        }

        let copy = tree.clone();
        assert!(copy.preorder().eq(tree.preorder()));
        assert!(copy.postorder().eq(tree.postorder()));
    }

    #[test]
    fn display_renders_sideways() {
        let tree = Tree::from_sorted(vec![1, 2, 3, 4, 5, 6, 7]);

        let expected = "\
│       ┌── 7
│   ┌── 6
│   │   └── 5
└── 4
    │   ┌── 3
    └── 2
        └── 1
";
        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn debug_shows_structure() {
        let tree = Tree::from_sorted(vec![1]);

        assert_eq!(
            format!("{:?}", tree),
            "Tree { root: Some(Node { key: 1, left: None, right: None }) }"
        );
    }

    #[test]
    fn clone_is_independent() {
        let mut tree = Tree::from_sorted(KEYS.to_vec());
        let copy = tree.clone();
        tree.delete(&50);

        assert!(copy.find(&50));
        assert!(!tree.find(&50));
    }
}
