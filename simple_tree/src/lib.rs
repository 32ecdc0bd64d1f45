mod node;

pub use node::*;

/// A "simple" binary tree whose traversals are all written recursively, the way you would write
/// them on paper
///
/// Used to test and benchmark the `bintree` crate. Every traversal collects into a `Vec` up front
/// and recurses once per level of the tree, so deep trees will overflow the stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleTree<T> {
    root: Option<Box<Node<T>>>,
}

impl<T> Default for SimpleTree<T> {
    fn default() -> Self {
        Self {root: None}
    }
}

impl<T> SimpleTree<T> {
    pub fn new(root: Option<Node<T>>) -> Self {
        Self {
            root: root.map(Box::new),
        }
    }

    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Returns the number of nodes in the tree
    pub fn len(&self) -> usize {
        fn count<T>(node: Option<&Node<T>>) -> usize {
            match node {
                Some(node) => 1 + count(node.left()) + count(node.right()),
                None => 0,
            }
        }

        count(self.root())
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the values of the tree in pre-order
    pub fn preorder(&self) -> Vec<&T> {
        fn visit<'a, T>(node: Option<&'a Node<T>>, out: &mut Vec<&'a T>) {
            if let Some(node) = node {
                out.push(&node.value);
                visit(node.left(), out);
                visit(node.right(), out);
            }
        }

        let mut out = Vec::new();
        visit(self.root(), &mut out);
        out
    }

    /// Calls `f` on each value of the tree in pre-order
    pub fn preorder_mut<F: FnMut(&mut T)>(&mut self, mut f: F) {
        fn visit<T, F: FnMut(&mut T)>(node: Option<&mut Node<T>>, f: &mut F) {
            if let Some(node) = node {
                f(&mut node.value);
                visit(node.left.as_deref_mut(), f);
                visit(node.right.as_deref_mut(), f);
            }
        }

        visit(self.root.as_deref_mut(), &mut f);
    }

    /// Returns the values of the tree in-order
    pub fn inorder(&self) -> Vec<&T> {
        fn visit<'a, T>(node: Option<&'a Node<T>>, out: &mut Vec<&'a T>) {
            if let Some(node) = node {
                visit(node.left(), out);
                out.push(&node.value);
                visit(node.right(), out);
            }
        }

        let mut out = Vec::new();
        visit(self.root(), &mut out);
        out
    }

    /// Returns the values of the tree in post-order
    pub fn postorder(&self) -> Vec<&T> {
        fn visit<'a, T>(node: Option<&'a Node<T>>, out: &mut Vec<&'a T>) {
            if let Some(node) = node {
                visit(node.left(), out);
                visit(node.right(), out);
                out.push(&node.value);
            }
        }

        let mut out = Vec::new();
        visit(self.root(), &mut out);
        out
    }
}
