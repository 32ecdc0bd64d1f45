use std::iter::FusedIterator;

use super::Node;

/// A pre-order traversal: each node, then its left subtree, then its right subtree
pub struct IterPreorder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> IterPreorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

// See: https://www.geeksforgeeks.org/iterative-preorder-traversal/
impl<'a, T> Iterator for IterPreorder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so that the whole left subtree is popped before it
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node)
    }
}

impl<'a, T> FusedIterator for IterPreorder<'a, T> {}

/// A pre-order traversal that yields a mutable reference to each value
pub struct IterMutPreorder<'a, T> {
    stack: Vec<&'a mut Node<T>>,
}

impl<'a, T> IterMutPreorder<'a, T> {
    pub(crate) fn new(root: Option<&'a mut Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for IterMutPreorder<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // The children are handed to the stack as borrows disjoint from the value we yield
        let (value, left, right) = node.split_mut();
        self.stack.extend(right);
        self.stack.extend(left);
        Some(value)
    }
}

impl<'a, T> FusedIterator for IterMutPreorder<'a, T> {}

/// A pre-order traversal that takes ownership of the nodes and yields their values
pub struct IntoIterPreorder<T> {
    stack: Vec<Box<Node<T>>>,
}

impl<T> IntoIterPreorder<T> {
    pub(crate) fn new(root: Option<Box<Node<T>>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<T> Iterator for IntoIterPreorder<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        let (left, right) = node.take_children();
        self.stack.extend(right);
        self.stack.extend(left);
        Some((*node).into_value())
    }
}

impl<T> FusedIterator for IntoIterPreorder<T> {}
