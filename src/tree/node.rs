use std::fmt;
use std::ptr;

use super::{IterPreorder, IterMutPreorder, IntoIterPreorder, IterInorder, IterPostorder};

#[cfg(test)]
use static_assertions::const_assert_eq;

/// A single node of a binary tree
///
/// Each node exclusively owns its children. Since a child can only have one owner, a tree built
/// out of nodes can never contain a cycle or a node with more than one parent.
///
/// Dropping, cloning, comparing and formatting a node never recurse, so a standalone node can root
/// an arbitrarily deep subtree.
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

/// An owned child slot that frees the subtree below it without recursing
///
/// Dropping a `Box<Node<T>>` normally drops its children recursively, which overflows the call
/// stack on deep (e.g. skewed) trees. Here each node is detached from its children before it is
/// dropped, so the depth of the subtree never turns into call depth.
struct Link<T>(Option<Box<Node<T>>>);

impl<T> Drop for Link<T> {
    fn drop(&mut self) {
        let mut stack: Vec<_> = self.0.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            let (left, right) = node.take_children();
            stack.extend(left);
            stack.extend(right);
            // `node` is a leaf now, so dropping it here is O(1)
        }
    }
}

// An absent child costs nothing beyond the pointer itself
#[cfg(test)]
const_assert_eq!(std::mem::size_of::<Link<u64>>(), std::mem::size_of::<usize>());

impl<T> Node<T> {
    /// Creates a new node with the given value and children
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Node;
    ///
    /// let node = Node::new(2, Some(Node::leaf(4)), None);
    /// assert_eq!(node.value(), &2);
    /// assert_eq!(node.left().map(Node::value), Some(&4));
    /// assert!(node.right().is_none());
    /// ```
    pub fn new(value: T, left: Option<Node<T>>, right: Option<Node<T>>) -> Self {
        Self {
            value,
            left: Link(left.map(Box::new)),
            right: Link(right.map(Box::new)),
        }
    }

    /// Creates a new node with no children
    pub fn leaf(value: T) -> Self {
        Self::new(value, None, None)
    }

    /// Returns the value of this node
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the value of this node
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Returns true if this node has a left subtree
    pub fn has_left(&self) -> bool {
        self.left.0.is_some()
    }

    /// Returns true if this node has a right subtree
    pub fn has_right(&self) -> bool {
        self.right.0.is_some()
    }

    /// Returns true if this node has neither a left nor a right subtree
    pub fn is_leaf(&self) -> bool {
        !self.has_left() && !self.has_right()
    }

    /// Returns the left child node (subtree) of this node, if any
    pub fn left(&self) -> Option<&Self> {
        self.left.0.as_deref()
    }

    /// Returns the right child node (subtree) of this node, if any
    pub fn right(&self) -> Option<&Self> {
        self.right.0.as_deref()
    }

    /// Returns the left child node (subtree) of this node mutably, if any
    ///
    /// This is a low-level API meant to be used for implementing custom traversals. The shape of
    /// the tree cannot be changed through it, only the values stored in the subtree.
    pub fn left_mut(&mut self) -> Option<&mut Self> {
        self.left.0.as_deref_mut()
    }

    /// Returns the right child node (subtree) of this node mutably, if any
    ///
    /// See [`Node::left_mut`].
    pub fn right_mut(&mut self) -> Option<&mut Self> {
        self.right.0.as_deref_mut()
    }

    /// Performs a pre-order traversal of the subtree rooted at this node
    pub fn iter_preorder(&self) -> IterPreorder<T> {
        IterPreorder::new(Some(self))
    }

    /// Performs a pre-order traversal of the subtree rooted at this node, yielding each value
    /// mutably
    pub fn iter_mut_preorder(&mut self) -> IterMutPreorder<T> {
        IterMutPreorder::new(Some(self))
    }

    /// Performs a pre-order traversal of the subtree rooted at this node, consuming it
    pub fn into_iter_preorder(self) -> IntoIterPreorder<T> {
        IntoIterPreorder::new(Some(Box::new(self)))
    }

    /// Performs an in-order traversal of the subtree rooted at this node
    pub fn iter_inorder(&self) -> IterInorder<T> {
        IterInorder::new(Some(self))
    }

    /// Performs a post-order traversal of the subtree rooted at this node
    pub fn iter_postorder(&self) -> IterPostorder<T> {
        IterPostorder::new(Some(self))
    }

    /// Splits this node into disjoint mutable borrows of its value and its children
    pub(crate) fn split_mut(&mut self) -> (&mut T, Option<&mut Self>, Option<&mut Self>) {
        let Self {value, left, right} = self;
        (value, left.0.as_deref_mut(), right.0.as_deref_mut())
    }

    /// Detaches both children from this node, leaving it a leaf
    pub(crate) fn take_children(&mut self) -> (Option<Box<Self>>, Option<Box<Self>>) {
        (self.left.0.take(), self.right.0.take())
    }

    /// Returns the value of this node, consuming the node in the process
    pub(crate) fn into_value(self) -> T {
        debug_assert!(self.is_leaf());
        self.value
    }
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        // Post-order reaches both children before their parent, so each parent finds its cloned
        // children on top of `built`
        let mut built: Vec<Box<Node<T>>> = Vec::new();
        for node in self.iter_postorder() {
            let right = if node.has_right() { built.pop() } else { None };
            let left = if node.has_left() { built.pop() } else { None };
            built.push(Box::new(Node {
                value: node.value.clone(),
                left: Link(left),
                right: Link(right),
            }));
        }

        match built.pop() {
            Some(root) => *root,
            None => unreachable!("bug: post-order traversal did not visit its root"),
        }
    }
}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        if ptr::eq(self, other) {
            return true;
        }

        // Two subtrees are equal when their pre-order traversals agree on every value and on
        // which children each node has
        let mut nodes = self.iter_preorder();
        let mut other_nodes = other.iter_preorder();
        loop {
            match (nodes.next(), other_nodes.next()) {
                (Some(node), Some(other_node)) => {
                    if node.has_left() != other_node.has_left() ||
                        node.has_right() != other_node.has_right() ||
                        node.value != other_node.value {
                        return false;
                    }
                },
                (None, None) => return true,
                _ => return false,
            }
        }
    }
}

impl<T: Eq> Eq for Node<T> {}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Children are shown by their values only
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}

/// Conversion into an optional child slot, used by the `node!` macro
///
/// Implemented for `Node<T>` (a present child) and `Option<Node<T>>` (a possibly absent child).
pub trait IntoChild<T> {
    fn into_child(self) -> Option<Node<T>>;
}

impl<T> IntoChild<T> for Node<T> {
    fn into_child(self) -> Option<Node<T>> {
        Some(self)
    }
}

impl<T> IntoChild<T> for Option<Node<T>> {
    fn into_child(self) -> Option<Node<T>> {
        self
    }
}
