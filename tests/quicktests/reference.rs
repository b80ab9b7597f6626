//! A recursive BST that rebuilds each subtree on the way back up. It removes entries with two
//! children the same way `bstree::Tree` does (by promoting the in-order successor) so the two
//! must always have the same shape.

use std::cmp::Ordering;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

pub struct Reference<T> {
    root: Link<T>,
}

impl<T> Reference<T>
where
    T: Ord + Clone,
{
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn insert(&mut self, value: T) {
        self.root = insert(self.root.take(), value);
    }

    pub fn remove(&mut self, value: &T) -> Option<T> {
        let (root, removed) = remove(self.root.take(), value);
        self.root = root;
        removed
    }

    pub fn pre_order(&self) -> Vec<T> {
        let mut values = Vec::new();
        pre_order(&self.root, &mut values);
        values
    }
}

fn insert<T: Ord>(link: Link<T>, value: T) -> Link<T> {
    let mut node = match link {
        None => {
            return Some(Box::new(Node {
                value,
                left: None,
                right: None,
            }))
        }
        Some(node) => node,
    };

    match value.cmp(&node.value) {
        Ordering::Less => node.left = insert(node.left.take(), value),
        Ordering::Equal => {}
        Ordering::Greater => node.right = insert(node.right.take(), value),
    }
    Some(node)
}

/// Returns the rebuilt subtree and the removed value.
fn remove<T: Ord>(link: Link<T>, value: &T) -> (Link<T>, Option<T>) {
    let Some(mut node) = link else {
        return (None, None);
    };

    match value.cmp(&node.value) {
        Ordering::Less => {
            let (left, removed) = remove(node.left.take(), value);
            node.left = left;
            (Some(node), removed)
        }
        Ordering::Greater => {
            let (right, removed) = remove(node.right.take(), value);
            node.right = right;
            (Some(node), removed)
        }
        Ordering::Equal => {
            let Node { value, left, right } = *node;
            let rebuilt = match (left, right) {
                (None, right) => right,
                (left, None) => left,
                (Some(left), Some(right)) => {
                    let (successor, right) = take_min(right);
                    Some(Box::new(Node {
                        value: successor,
                        left: Some(left),
                        right,
                    }))
                }
            };
            (rebuilt, Some(value))
        }
    }
}

/// Returns the smallest value in the subtree and the subtree without it.
fn take_min<T>(mut node: Box<Node<T>>) -> (T, Link<T>) {
    match node.left.take() {
        None => {
            let Node { value, right, .. } = *node;
            (value, right)
        }
        Some(left) => {
            let (min, left) = take_min(left);
            node.left = left;
            (min, Some(node))
        }
    }
}

fn pre_order<T: Clone>(link: &Link<T>, values: &mut Vec<T>) {
    if let Some(node) = link {
        values.push(node.value.clone());
        pre_order(&node.left, values);
        pre_order(&node.right, values);
    }
}
