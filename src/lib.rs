//! Binary trees with explicit-stack traversals
//!
//! Every traversal in this crate is a lazy iterator driven by its own stack rather than by
//! recursion, so the depth of a tree is never limited by the size of the call stack.
//!
//! ```
//! use bintree::{Tree, node};
//!
//! let mut tree = Tree::from(node!(1, node!(2, node!(4), node!(5)), node!(3)));
//!
//! for value in &mut tree {
//!     *value *= 10;
//! }
//!
//! let values: Vec<_> = tree.iter_preorder().map(|node| *node.value()).collect();
//! assert_eq!(values, [10, 20, 40, 50, 30]);
//! ```

pub mod tree;

pub use tree::{Node, Tree};

/// Creates a [`Node`]
///
/// `node!(value)` creates a leaf. `node!(value, left, right)` creates a node with the given
/// children, where each child is either a `Node` or an `Option<Node>` (use `None` for a missing
/// child).
///
/// ```
/// use bintree::{Node, node};
///
/// let root = node!(1, node!(2), None);
/// assert_eq!(root, Node::new(1, Some(Node::leaf(2)), None));
/// ```
#[macro_export]
macro_rules! node {
    ($value:expr $(,)?) => ($crate::Node::leaf($value));

    ($value:expr, $left:expr, $right:expr $(,)?) => {
        $crate::Node::new(
            $value,
            $crate::tree::IntoChild::into_child($left),
            $crate::tree::IntoChild::into_child($right),
        )
    };
}
