//! An unbalanced BST over values ordered by a caller-supplied comparator. Every child is owned by
//! its parent through a `Box` so there are no parent pointers and no `unsafe`.
//!
//! # Examples
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use bstree::Tree;
//!
//! let released = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&released);
//! let mut tree = Tree::with_release(
//!     |x: &i32, y: &i32| x.cmp(y),
//!     move |_value: i32| counter.set(counter.get() + 1),
//! );
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&1), None);
//!
//! assert_eq!(tree.insert(&1), &1);
//! assert_eq!(tree.search(&1), Some(&1));
//!
//! // Inserting an equal value is a no-op.
//! tree.insert(&1);
//! assert_eq!(tree.len(), 1);
//!
//! // Removing a value hands back a copy and releases the stored one.
//! assert_eq!(tree.remove(&1), Some(1));
//! assert_eq!(tree.search(&1), None);
//! assert_eq!(released.get(), 1);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::{debug, trace};

/// A three-way comparison used to place values in a [`Tree`]. It must be a total order.
pub type Comparator<'a, T> = dyn Fn(&T, &T) -> Ordering + 'a;

/// Receives each stored value when a [`Tree`] releases it.
pub type Release<'a, T> = dyn FnMut(T) + 'a;

type Link<T> = Option<Box<Entry<T>>>;

/// An unbalanced Binary Search Tree. This can be used for inserting, searching, and removing
/// values. Values are ordered by the comparator given at construction and values comparing
/// [`Equal`][Ordering::Equal] are only ever stored once.
///
/// The tree stores its own copy of every inserted value. When a stored value leaves the tree,
/// either through [`Tree::remove`] or when the tree is destroyed, it is handed to the release
/// function given at construction (or simply dropped if there isn't one).
///
/// The comparator and release function may borrow from their surroundings for `'a`.
pub struct Tree<'a, T> {
    root: Link<T>,
    len: usize,
    compare: Box<Comparator<'a, T>>,
    release: Option<Box<Release<'a, T>>>,
}

impl<'a, T> Tree<'a, T> {
    /// Generates a new, empty `Tree` ordered by `compare`. Released values are dropped.
    ///
    /// ## Panics
    ///
    /// When `T` is zero-sized.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// // Largest first.
    /// let mut tree = Tree::new(|x: &u8, y: &u8| y.cmp(x));
    /// tree.insert(&1);
    /// tree.insert(&2);
    ///
    /// let mut values = Vec::new();
    /// tree.traverse_in_order(|value| values.push(*value));
    /// assert_eq!(values, [2, 1]);
    /// ```
    pub fn new<C>(compare: C) -> Self
    where
        C: Fn(&T, &T) -> Ordering + 'a,
    {
        Self::build(Box::new(compare), None)
    }

    /// Generates a new, empty `Tree` ordered by `compare`. Every stored value is passed to
    /// `release` when the tree lets go of it.
    ///
    /// ## Panics
    ///
    /// When `T` is zero-sized.
    pub fn with_release<C, R>(compare: C, release: R) -> Self
    where
        C: Fn(&T, &T) -> Ordering + 'a,
        R: FnMut(T) + 'a,
    {
        Self::build(Box::new(compare), Some(Box::new(release)))
    }

    fn build(compare: Box<Comparator<'a, T>>, release: Option<Box<Release<'a, T>>>) -> Self {
        assert!(
            mem::size_of::<T>() > 0,
            "A `Tree` cannot store zero-sized values."
        );
        Self {
            root: None,
            len: 0,
            compare,
            release,
        }
    }

    /// The size in bytes of every stored value.
    pub fn element_size(&self) -> usize {
        mem::size_of::<T>()
    }

    /// How many values are stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree stores no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// How many entries are on the longest path from the root to a leaf. An empty tree has a
    /// height of 0.
    pub fn height(&self) -> usize {
        let mut pending: Vec<(&Entry<T>, usize)> =
            self.root.as_deref().map(|root| (root, 1)).into_iter().collect();
        let mut height = 0;

        while let Some((entry, depth)) = pending.pop() {
            height = height.max(depth);
            pending.extend(entry.left.as_deref().map(|left| (left, depth + 1)));
            pending.extend(entry.right.as_deref().map(|right| (right, depth + 1)));
        }

        height
    }

    /// Stores a copy of `value` in the tree and returns the stored value. If the tree already
    /// holds a value comparing equal to `value`, nothing changes and that value is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// // Order by length only so "b" and "c" are equal.
    /// let mut tree = Tree::new(|x: &String, y: &String| x.len().cmp(&y.len()));
    ///
    /// assert_eq!(tree.insert(&"b".to_string()), "b");
    /// assert_eq!(tree.insert(&"c".to_string()), "b");
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: &T) -> &T
    where
        T: Clone,
    {
        let slot = Self::locate(&mut self.root, value, &*self.compare);
        if slot.is_none() {
            trace!("creating a new entry");
            self.len += 1;
        } else {
            trace!("equal value already stored, skipping insert");
        }

        &slot.get_or_insert_with(|| Entry::new_boxed(value.clone())).value
    }

    /// Potentially finds the stored value comparing equal to `value`. If there isn't one, `None`
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::ordered();
    /// tree.insert(&1);
    ///
    /// assert_eq!(tree.search(&1), Some(&1));
    /// assert_eq!(tree.search(&42), None);
    /// ```
    pub fn search(&self, value: &T) -> Option<&T> {
        let mut cursor = self.root.as_deref();
        while let Some(entry) = cursor {
            match (self.compare)(value, &entry.value) {
                Ordering::Less => cursor = entry.left.as_deref(),
                Ordering::Equal => return Some(&entry.value),
                Ordering::Greater => cursor = entry.right.as_deref(),
            }
        }

        None
    }

    /// Removes the entry holding the value comparing equal to `value` and returns a copy of the
    /// stored value. The stored value itself is released. If no value compares equal, nothing
    /// happens and `None` is returned.
    ///
    /// An entry with two children is replaced by its in-order successor, the left-most entry of
    /// its right subtree. The successor entry is moved, not copied.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::ordered();
    /// for value in [10, 5, 15, 3, 7] {
    ///     tree.insert(&value);
    /// }
    ///
    /// assert_eq!(tree.remove(&5), Some(5));
    /// assert_eq!(tree.remove(&5), None);
    ///
    /// let mut values = Vec::new();
    /// tree.traverse_in_order(|value| values.push(*value));
    /// assert_eq!(values, [3, 7, 10, 15]);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: Clone,
    {
        let slot = Self::locate(&mut self.root, value, &*self.compare);
        let mut removed = slot.take()?;

        *slot = match (removed.left.take(), removed.right.take()) {
            (None, None) => {
                trace!("removing a leaf entry");
                None
            }
            (Some(child), None) | (None, Some(child)) => {
                trace!("removing an entry with one child");
                Some(child)
            }
            (Some(left), Some(mut right)) if right.left.is_none() => {
                trace!("removing an entry whose successor is its right child");
                right.left = Some(left);
                Some(right)
            }
            (Some(left), Some(mut right)) => {
                trace!("removing an entry whose successor is deeper in its right subtree");
                let mut successor = right.take_leftmost_descendant();
                successor.left = Some(left);
                successor.right = Some(right);
                Some(successor)
            }
        };
        self.len -= 1;

        let Entry { value: stored, .. } = *removed;
        let copy = stored.clone();
        self.release_value(stored);

        Some(copy)
    }

    /// Calls `visit` with every stored value in pre-order: an entry's value, then every value in
    /// its left subtree, then every value in its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::ordered();
    /// for value in [5, 3, 8, 1, 4] {
    ///     tree.insert(&value);
    /// }
    ///
    /// let mut values = Vec::new();
    /// tree.traverse(|value| values.push(*value));
    /// assert_eq!(values, [5, 3, 1, 4, 8]);
    /// ```
    pub fn traverse<'t, F>(&'t self, mut visit: F)
    where
        F: FnMut(&'t T),
    {
        let mut pending: Vec<&Entry<T>> = self.root.as_deref().into_iter().collect();
        while let Some(entry) = pending.pop() {
            visit(&entry.value);
            // Right first so the left subtree is popped first.
            pending.extend(entry.right.as_deref());
            pending.extend(entry.left.as_deref());
        }
    }

    /// Calls `visit` with every stored value in ascending order according to the tree's
    /// comparator.
    pub fn traverse_in_order<'t, F>(&'t self, mut visit: F)
    where
        F: FnMut(&'t T),
    {
        let mut pending: Vec<&Entry<T>> = Vec::new();
        let mut cursor = self.root.as_deref();

        loop {
            while let Some(entry) = cursor {
                pending.push(entry);
                cursor = entry.left.as_deref();
            }
            let Some(entry) = pending.pop() else {
                return;
            };
            visit(&entry.value);
            cursor = entry.right.as_deref();
        }
    }

    /// Releases every stored value and the tree itself. Children are always released before
    /// their parent. Dropping the tree does the same thing.
    pub fn destroy(self) {
        drop(self);
    }

    /// Walks down from `slot` to the link holding the value comparing equal to `value` or, if
    /// there isn't one, to the empty link where it would be inserted.
    fn locate<'s>(
        mut slot: &'s mut Link<T>,
        value: &T,
        compare: &Comparator<'_, T>,
    ) -> &'s mut Link<T> {
        loop {
            match slot.as_deref().map(|entry| compare(value, &entry.value)) {
                None | Some(Ordering::Equal) => return slot,
                Some(ordering) => {
                    slot = slot
                        .as_mut()
                        .expect("Compared against an entry => entry")
                        .child_mut(ordering);
                }
            }
        }
    }

    fn release_value(&mut self, value: T) {
        match self.release.as_mut() {
            Some(release) => release(value),
            None => drop(value),
        }
    }
}

impl<'a, T> Tree<'a, T>
where
    T: Ord + 'a,
{
    /// Generates a new, empty `Tree` ordered by `T`'s [`Ord`] implementation.
    pub fn ordered() -> Self {
        Self::new(|x: &T, y: &T| x.cmp(y))
    }
}

impl<'a, T> Default for Tree<'a, T>
where
    T: Ord + 'a,
{
    fn default() -> Self {
        Self::ordered()
    }
}

impl<T> Drop for Tree<'_, T> {
    fn drop(&mut self) {
        let released = self.len;
        let mut pending: Vec<Box<Entry<T>>> = self.root.take().into_iter().collect();

        while let Some(mut entry) = pending.pop() {
            if entry.left.is_none() && entry.right.is_none() {
                let Entry { value, .. } = *entry;
                self.release_value(value);
            } else {
                // Revisit this entry once both of its subtrees are gone.
                let left = entry.left.take();
                let right = entry.right.take();
                pending.push(entry);
                pending.extend(right);
                pending.extend(left);
            }
        }

        self.len = 0;
        debug!("destroyed tree, released {} entries", released);
    }
}

impl<T> fmt::Debug for Tree<'_, T>
where
    T: fmt::Debug,
{
    // Goes through `traverse` so list-shaped trees don't recurse.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pre_order = Vec::with_capacity(self.len);
        self.traverse(|value| pre_order.push(value));
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("pre_order", &pre_order)
            .finish()
    }
}

struct Entry<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Entry<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    fn child_mut(&mut self, ordering: Ordering) -> &mut Link<T> {
        match ordering {
            Ordering::Less => &mut self.left,
            Ordering::Greater => &mut self.right,
            Ordering::Equal => unreachable!("An equal value ends the descent."),
        }
    }

    /// Detaches the left-most entry below `self` and puts that entry's right subtree where it
    /// was. Must only be called when `self` has a left child.
    ///
    /// ## Panics
    ///
    /// When `self` has no left child.
    fn take_leftmost_descendant(&mut self) -> Box<Self> {
        let mut slot = &mut self.left;
        while slot.as_ref().is_some_and(|entry| entry.left.is_some()) {
            slot = &mut slot.as_mut().expect("Has a left child => exists").left;
        }

        let mut leftmost = slot.take().expect("Taking leftmost descendant => left child");
        *slot = leftmost.right.take();
        leftmost
    }
}
