mod node;
mod preorder;
mod inorder;
mod postorder;

pub use node::*;
pub use preorder::*;
pub use inorder::*;
pub use postorder::*;

use std::fmt;

/// A binary tree that owns all of its nodes
///
/// The tree itself holds no traversal state. Each call to one of the iteration methods creates a
/// fresh, independent iterator with its own stack, so the tree can be traversed any number of
/// times. None of the traversals recurse, and neither do dropping, cloning, comparing or formatting
/// the tree, so arbitrarily deep (e.g. completely skewed) trees are supported.
pub struct Tree<T> {
    root: Option<Box<Node<T>>>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self {
            root: None,
        }
    }
}

impl<T> From<Node<T>> for Tree<T> {
    fn from(root: Node<T>) -> Self {
        Self::new(Some(root))
    }
}

impl<T> Tree<T> {
    /// Creates a tree from the given root node, or an empty tree if `root` is `None`
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{Tree, node};
    ///
    /// let tree = Tree::new(Some(node!(1, node!(2), node!(3))));
    /// assert_eq!(tree.len(), 3);
    ///
    /// let empty: Tree<i32> = Tree::new(None);
    /// assert!(empty.is_empty());
    /// ```
    pub fn new(root: Option<Node<T>>) -> Self {
        Self {
            root: root.map(Box::new),
        }
    }

    /// Returns the number of nodes in the tree
    ///
    /// Time complexity: `O(n)`
    pub fn len(&self) -> usize {
        self.iter_preorder().count()
    }

    /// Returns true if the tree has no nodes
    ///
    /// Time complexity: `O(1)`
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the root node of the tree, or `None` if the tree is empty
    ///
    /// This is a low-level API meant to be used for implementing custom traversals.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Returns the root node of the tree, or `None` if the tree is empty
    ///
    /// This is a low-level API meant to be used for implementing custom traversals.
    pub fn root_mut(&mut self) -> Option<&mut Node<T>> {
        self.root.as_deref_mut()
    }

    /// Performs a pre-order traversal of the tree
    ///
    /// Each node is visited before its left subtree, and the left subtree is visited before the
    /// right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{Tree, node};
    ///
    /// let tree = Tree::from(node!(1, node!(2, node!(4), node!(5)), node!(3)));
    ///
    /// let values: Vec<_> = tree.iter_preorder().map(|node| *node.value()).collect();
    /// assert_eq!(values, [1, 2, 4, 5, 3]);
    /// ```
    pub fn iter_preorder(&self) -> IterPreorder<T> {
        IterPreorder::new(self.root())
    }

    /// Performs a pre-order traversal of the tree, yielding a mutable reference to each value
    ///
    /// Changes made during the traversal are seen by every traversal that comes after it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{Tree, node};
    ///
    /// let mut tree = Tree::from(node!(1, node!(2, node!(4), node!(5)), node!(3)));
    /// for value in tree.iter_mut_preorder() {
    ///     *value *= 10;
    /// }
    ///
    /// let values: Vec<_> = tree.iter_preorder().map(|node| *node.value()).collect();
    /// assert_eq!(values, [10, 20, 40, 50, 30]);
    /// ```
    pub fn iter_mut_preorder(&mut self) -> IterMutPreorder<T> {
        IterMutPreorder::new(self.root_mut())
    }

    /// Performs an in-order traversal of the tree
    pub fn iter_inorder(&self) -> IterInorder<T> {
        IterInorder::new(self.root())
    }

    /// Performs a post-order traversal of the tree
    pub fn iter_postorder(&self) -> IterPostorder<T> {
        IterPostorder::new(self.root())
    }
}

impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        Self {
            root: self.root().map(|root| Box::new(root.clone())),
        }
    }
}

impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.root() == other.root()
    }
}

impl<T: Eq> Eq for Tree<T> {}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter_preorder()).finish()
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a Node<T>;
    type IntoIter = IterPreorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_preorder()
    }
}

impl<'a, T> IntoIterator for &'a mut Tree<T> {
    type Item = &'a mut T;
    type IntoIter = IterMutPreorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut_preorder()
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIterPreorder<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIterPreorder::new(self.root)
    }
}
