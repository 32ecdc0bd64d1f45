use std::ptr;
use std::iter::FusedIterator;

use super::Node;

/// A post-order traversal: the left subtree, then the right subtree, then the node
pub struct IterPostorder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

// See: https://www.geeksforgeeks.org/iterative-postorder-traversal-using-stack/
impl<'a, T> IterPostorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self {stack: Vec::new()};
        if let Some(root) = root {
            iter.descend(root);
        }
        iter
    }

    /// Walks down the left spine starting at `node`, pushing each node's right child (if any)
    /// underneath the node itself
    fn descend(&mut self, mut node: &'a Node<T>) {
        loop {
            self.stack.extend(node.right());
            self.stack.push(node);

            match node.left() {
                Some(left) => node = left,
                None => break,
            }
        }
    }
}

/// Compares two nodes for equality using pointer equality only
fn node_eq<T>(left: Option<&&Node<T>>, right: &Node<T>) -> bool {
    left.map(|&left| ptr::eq(left, right))
        // default to not equal
        .unwrap_or(false)
}

// See: https://www.geeksforgeeks.org/iterative-postorder-traversal-using-stack/
impl<'a, T> Iterator for IterPostorder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            // If the top of the stack is the current node's right child, that subtree still needs
            // to be visited before this node
            match node.right() {
                Some(right) if node_eq(self.stack.last(), right) => {
                    // Remove right from stack
                    self.stack.pop();

                    // Push the current node back onto the stack
                    self.stack.push(node);

                    self.descend(right);
                },

                _ => return Some(node),
            }
        }

        None
    }
}

impl<'a, T> FusedIterator for IterPostorder<'a, T> {}

#[cfg(test)]
mod tests {
    use crate::node;

    #[test]
    fn postorder() {
        //        4
        //     2     6
        //   1   3     7
        let root = node!(4, node!(2, node!(1), node!(3)), node!(6, None, node!(7)));
        let values: Vec<_> = root.iter_postorder().map(|node| *node.value()).collect();
        assert_eq!(&values, &[1, 3, 2, 7, 6, 4]);
    }

    #[test]
    fn postorder_duplicate_values() {
        // Equal values in different nodes must not confuse the right-child check
        let root = node!(0, node!(0, None, node!(0)), node!(0, node!(0), None));
        assert_eq!(root.iter_postorder().count(), 5);

        let root = node!(1, node!(2, None, node!(3)), node!(4, node!(5), None));
        let values: Vec<_> = root.iter_postorder().map(|node| *node.value()).collect();
        assert_eq!(&values, &[3, 2, 5, 4, 1]);
    }

    #[test]
    fn postorder_single() {
        let values: Vec<_> = node!("leaf").iter_postorder().map(|node| *node.value()).collect();
        assert_eq!(&values, &["leaf"]);
    }
}
