//! Pairing heap implementation
//!
//! A pairing heap is a heap-ordered multi-way tree with:
//! - O(1) amortized insert and merge
//! - O(log n) amortized delete_min
//! - O(n) search, delete and adjust of arbitrary elements
//!
//! The pairing heap is simpler than Fibonacci heaps while still providing
//! excellent amortized performance when keys change after insertion.
//!
//! Nodes live in an index-based arena ([`slotmap::SlotMap`]), so parent
//! references are plain keys rather than owning pointers: ownership stays
//! strictly tree-shaped and dropping the heap never recurses.

use smallvec::SmallVec;
use std::cmp::Ordering;
use std::mem;

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    struct NodeKey;
}

/// Ordered child sequence. Pairing heap nodes rarely accumulate more than a
/// handful of children between delete_min calls, so a few slots live inline.
type ChildList = SmallVec<[NodeKey; 4]>;

#[derive(Clone, Debug)]
struct Node<T> {
    /// `None` only on the empty-root sentinel.
    item: Option<T>,
    children: ChildList,
    /// Non-owning back-reference; `None` for the root or a node that has
    /// been detached and is waiting to be merged back in.
    parent: Option<NodeKey>,
}

impl<T> Node<T> {
    fn sentinel() -> Self {
        Node {
            item: None,
            children: ChildList::new(),
            parent: None,
        }
    }

    fn leaf(item: T) -> Self {
        Node {
            item: Some(item),
            children: ChildList::new(),
            parent: None,
        }
    }
}

/// Min-heap-ordered pairing tree.
///
/// Every node's item is less than or equal to every item in its subtree.
/// The root node always exists: an empty heap is represented by a root
/// holding no item, which keeps every operation total.
///
/// Not safe for concurrent use; wrap it in a lock or confine it to one
/// thread.
///
/// # Example
///
/// ```rust
/// use pairing_tree::PairingTree;
///
/// let mut heap = PairingTree::new();
/// heap.insert(5);
/// heap.insert(3);
/// heap.insert(8);
/// assert_eq!(heap.find_min(), Some(&3));
/// assert_eq!(heap.delete_min(), Some(3));
/// assert_eq!(heap.adjust(&8, 1), Some(&1));
/// assert_eq!(heap.find_min(), Some(&1));
/// ```
#[derive(Clone, Debug)]
pub struct PairingTree<T: Ord> {
    nodes: SlotMap<NodeKey, Node<T>>,
    root: NodeKey,
}

impl<T: Ord> PairingTree<T> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node::sentinel());
        PairingTree { nodes, root }
    }

    /// Returns true if the heap holds no items.
    ///
    /// # Time Complexity
    /// O(1)
    pub fn is_empty(&self) -> bool {
        self.nodes[self.root].item.is_none()
    }

    /// Removes every item, resetting the root to the empty sentinel.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = self.nodes.insert(Node::sentinel());
    }

    /// Returns the smallest item, or `None` if the heap is empty.
    ///
    /// # Time Complexity
    /// O(1)
    pub fn find_min(&self) -> Option<&T> {
        self.nodes[self.root].item.as_ref()
    }

    /// Inserts an item and returns a reference to it in its new position.
    ///
    /// # Time Complexity
    /// O(1) amortized
    pub fn insert(&mut self, item: T) -> &T {
        let leaf = self.nodes.insert(Node::leaf(item));
        self.root = self.merge(self.root, leaf);
        self.nodes[leaf]
            .item
            .as_ref()
            .expect("freshly inserted node holds an item")
    }

    /// Removes and returns the smallest item, or `None` if the heap is
    /// empty. When the last item is removed the root node is reset to the
    /// empty sentinel rather than freed.
    ///
    /// # Time Complexity
    /// O(log n) amortized
    pub fn delete_min(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let children = mem::take(&mut self.nodes[self.root].children);
        if children.is_empty() {
            return self.nodes[self.root].item.take();
        }
        let old_root = self.root;
        self.root = self.merge_pairs(children);
        self.nodes.remove(old_root).and_then(|node| node.item)
    }

    /// Removes the first item comparing equal to `item` and returns it, or
    /// `None` if no such item is held. Every other item stays in the heap.
    ///
    /// # Time Complexity
    /// O(n) to locate the item, O(log n) amortized to repair the tree
    pub fn delete(&mut self, item: &T) -> Option<T> {
        let found = self.find_node(item)?;
        if found == self.root {
            return self.delete_min();
        }
        let orphans = self.detach(found);
        let mut pending = mem::take(&mut self.nodes[self.root].children);
        pending.extend(orphans);
        if !pending.is_empty() {
            let folded = self.merge_pairs(pending);
            self.root = self.merge(self.root, folded);
        }
        self.nodes.remove(found).and_then(|node| node.item)
    }

    /// Replaces the first item comparing equal to `old` with `new` and
    /// returns a reference to the stored `new`, or `None` if no item matches
    /// `old`. The adjusted node competes for the root position regardless of
    /// whether the key moved up or down.
    ///
    /// # Time Complexity
    /// O(n) to locate the item, O(log n) amortized to repair the tree
    pub fn adjust(&mut self, old: &T, new: T) -> Option<&T> {
        let found = self.find_node(old)?;
        if found == self.root {
            // Any key change at the root is handled uniformly by removing
            // and reinserting.
            self.delete_min();
            return Some(self.insert(new));
        }
        let orphans = self.detach(found);
        self.nodes[found].item = Some(new);
        let mut pending = mem::take(&mut self.nodes[self.root].children);
        pending.push(found);
        pending.extend(orphans);
        let folded = self.merge_pairs(pending);
        self.root = self.merge(self.root, folded);
        self.nodes[found].item.as_ref()
    }

    /// Exhaustive search for an item comparing equal to `item`.
    ///
    /// # Time Complexity
    /// O(n)
    pub fn find(&self, item: &T) -> Option<&T> {
        let key = self.find_node(item)?;
        self.nodes[key].item.as_ref()
    }

    /// Calls `visit` on every item, each parent strictly before any of its
    /// descendants, children in sequence order. No order holds between
    /// siblings' subtrees beyond that. Taking `&self` means `visit` cannot
    /// mutate the heap.
    pub fn traverse<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        if self.is_empty() {
            return;
        }
        let mut stack = vec![self.root];
        while let Some(key) = stack.pop() {
            let node = &self.nodes[key];
            if let Some(item) = node.item.as_ref() {
                visit(item);
            }
            stack.extend(node.children.iter().rev().copied());
        }
    }

    /// Merges two heap-ordered trees, returning the winning root.
    ///
    /// If `a` is the empty sentinel it is discarded and `b` becomes the
    /// root outright. On equal items `b` wins; only a strictly smaller `a`
    /// keeps its position. The loser becomes the winner's first child.
    ///
    /// # Time Complexity
    /// O(1)
    fn merge(&mut self, a: NodeKey, b: NodeKey) -> NodeKey {
        if self.nodes[a].item.is_none() {
            self.nodes.remove(a);
            return b;
        }
        let a_wins = self.nodes[a].item.cmp(&self.nodes[b].item) == Ordering::Less;
        if a_wins {
            self.nodes[b].parent = Some(a);
            self.nodes[a].children.insert(0, b);
            a
        } else {
            self.nodes[a].parent = Some(b);
            self.nodes[b].children.insert(0, a);
            b
        }
    }

    /// Folds a sequence of sibling trees into one tree and returns its root,
    /// with the root's parent reference cleared.
    ///
    /// This is a left-to-right fold rather than the textbook two-pass
    /// pairing (pair adjacent trees, then combine right to left). The heap
    /// property is unaffected, but the O(log n) amortized delete_min bound
    /// from the pairing-heap literature is proved for the two-pass variant
    /// only.
    ///
    /// Panics on an empty sequence; callers guarantee at least one sibling.
    fn merge_pairs(&mut self, pending: ChildList) -> NodeKey {
        let mut siblings = pending.into_iter();
        let mut merged = siblings
            .next()
            .expect("merge_pairs called with no siblings");
        for next in siblings {
            merged = self.merge(merged, next);
        }
        self.nodes[merged].parent = None;
        merged
    }

    /// Removes `key` from its parent's child sequence and returns its
    /// former children, now parent-less and pending a re-merge. Detaching
    /// the root is a no-op returning an empty sequence.
    fn detach(&mut self, key: NodeKey) -> ChildList {
        let Some(parent) = self.nodes[key].parent.take() else {
            return ChildList::new();
        };
        let orphans = mem::take(&mut self.nodes[key].children);
        for &child in &orphans {
            self.nodes[child].parent = None;
        }
        let pos = self.nodes[parent]
            .children
            .iter()
            .position(|&c| c == key)
            .expect("detached node missing from its parent's child list");
        self.nodes[parent].children.remove(pos);
        orphans
    }

    /// Depth-first preorder search for the first node whose item compares
    /// equal to `item`. Uses an explicit stack: tree depth is O(n) in the
    /// worst case, so recursion is not safe here.
    fn find_node(&self, item: &T) -> Option<NodeKey> {
        let mut stack = vec![self.root];
        while let Some(key) = stack.pop() {
            let node = &self.nodes[key];
            if node.item.as_ref() == Some(item) {
                return Some(key);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        None
    }
}

impl<T: Ord> Default for PairingTree<T> {
    fn default() -> Self {
        Self::new()
    }
}
