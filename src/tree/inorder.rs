use std::iter::FusedIterator;

use super::Node;

/// An in-order traversal: the left subtree, then the node, then the right subtree
pub struct IterInorder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

// See: https://www.geeksforgeeks.org/inorder-tree-traversal-without-recursion/
impl<'a, T> IterInorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self {stack: Vec::new()};
        iter.push_left_spine(root);
        iter
    }

    /// Pushes `node` and each of its left descendants, so the leftmost one ends up on top
    fn push_left_spine(&mut self, mut current: Option<&'a Node<T>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left();
        }
    }
}

// See: https://www.geeksforgeeks.org/inorder-tree-traversal-without-recursion/
impl<'a, T> Iterator for IterInorder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node)
    }
}

impl<'a, T> FusedIterator for IterInorder<'a, T> {}
