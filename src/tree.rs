use std::cmp::Ordering;

use generational_arena::{Arena, Index};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::errors::{TreeError, TreeResult};

/// Replacement rule applied when deleting a node that has two children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeleteStrategy {
    /// Promote the maximum key of the left subtree.
    Predecessor,
    /// Promote the minimum key of the right subtree.
    Successor,
}

/// Tree node stored in the arena. Links are arena indices; parentage is
/// implicit in the link structure, never stored.
#[derive(Debug)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Option<Index>,
    pub(crate) right: Option<Index>,
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Child slot a descent step went through.
#[derive(Debug, Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// Unbalanced binary search tree backed by a generational arena.
///
/// Keys in a node's left subtree compare less than the node's key, keys in
/// the right subtree greater. No rebalancing is performed. Nodes are
/// addressed by arena indices, so every operation runs as an iterative
/// descent with no recursion depth tied to the tree shape.
///
/// Every arena slot is reachable from the root: insertions link the new slot
/// before returning and deletions unlink exactly the removed slot, so the
/// arena length always equals the node count.
#[derive(Debug)]
pub struct Tree<K> {
    arena: Arena<Node<K>>,
    root: Option<Index>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Total number of nodes. O(1) via the arena length.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every node. Succeeds on an empty tree as well.
    #[instrument(level = "debug", skip(self))]
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    pub(crate) fn arena(&self) -> &Arena<Node<K>> {
        &self.arena
    }

    pub(crate) fn root_index(&self) -> Option<Index> {
        self.root
    }
}

impl<K: Ord> Tree<K> {
    /// Inserts `key` at its ordered position.
    ///
    /// Fails with [`TreeError::DuplicateKey`], handing the key back, if it is
    /// already present; the tree is unchanged in that case.
    #[instrument(level = "trace", skip_all)]
    pub fn insert(&mut self, key: K) -> TreeResult<(), K> {
        let Some(mut current) = self.root else {
            self.root = Some(self.arena.insert(Node::new(key)));
            return Ok(());
        };
        loop {
            match key.cmp(&self.arena[current].key) {
                Ordering::Equal => return Err(TreeError::DuplicateKey(key)),
                Ordering::Less => match self.arena[current].left {
                    Some(next) => current = next,
                    None => {
                        let leaf = self.arena.insert(Node::new(key));
                        self.arena[current].left = Some(leaf);
                        return Ok(());
                    }
                },
                Ordering::Greater => match self.arena[current].right {
                    Some(next) => current = next,
                    None => {
                        let leaf = self.arena.insert(Node::new(key));
                        self.arena[current].right = Some(leaf);
                        return Ok(());
                    }
                },
            }
        }
    }

    /// Attaches `child` as a new leaf directly under the node holding
    /// `parent`, without descending further.
    ///
    /// The side is chosen against the parent key alone: left if
    /// `child < parent`, right otherwise (ties go right). Fails with
    /// [`TreeError::NodeNotFound`] if the parent is absent and with
    /// [`TreeError::SlotOccupied`] if the chosen slot already holds a child.
    ///
    /// This deliberately bypasses ordered placement relative to ancestors
    /// above the parent, so ordered operations (`contains`, `delete`) only
    /// see the attached node when it happens to lie on their comparison
    /// path.
    #[instrument(level = "trace", skip_all)]
    pub fn insert_child(&mut self, parent: &K, child: K) -> TreeResult<(), K>
    where
        K: Clone,
    {
        let Some(parent_idx) = self.locate(parent) else {
            return Err(TreeError::NodeNotFound(parent.clone()));
        };
        let goes_left = child < self.arena[parent_idx].key;
        let slot = if goes_left {
            self.arena[parent_idx].left
        } else {
            self.arena[parent_idx].right
        };
        if slot.is_some() {
            return Err(TreeError::SlotOccupied {
                parent: parent.clone(),
                child,
            });
        }
        let leaf = self.arena.insert(Node::new(child));
        let node = &mut self.arena[parent_idx];
        if goes_left {
            node.left = Some(leaf);
        } else {
            node.right = Some(leaf);
        }
        Ok(())
    }

    pub fn contains(&self, key: &K) -> bool {
        self.locate(key).is_some()
    }

    /// Removes the node holding `key`.
    ///
    /// Leaves are unlinked from their parent slot, single-child nodes are
    /// spliced out, and two-child nodes have their key replaced by the donor
    /// the `strategy` selects; the donor node (which has at most one child)
    /// is then unlinked the same way. Fails with
    /// [`TreeError::NodeNotFound`], leaving the tree unchanged, if the key
    /// is absent.
    #[instrument(level = "trace", skip_all)]
    pub fn delete(&mut self, key: &K, strategy: DeleteStrategy) -> TreeResult<(), K>
    where
        K: Clone,
    {
        let mut parent: Option<(Index, Side)> = None;
        let mut current = self.root;
        while let Some(idx) = current {
            match key.cmp(&self.arena[idx].key) {
                Ordering::Equal => break,
                Ordering::Less => {
                    parent = Some((idx, Side::Left));
                    current = self.arena[idx].left;
                }
                Ordering::Greater => {
                    parent = Some((idx, Side::Right));
                    current = self.arena[idx].right;
                }
            }
        }
        let Some(target) = current else {
            return Err(TreeError::NodeNotFound(key.clone()));
        };

        let (left, right) = (self.arena[target].left, self.arena[target].right);
        match (left, right) {
            (Some(left_child), Some(right_child)) => {
                let donor_key = match strategy {
                    DeleteStrategy::Predecessor => self.unlink_rightmost(target, left_child),
                    DeleteStrategy::Successor => self.unlink_leftmost(target, right_child),
                };
                self.arena[target].key = donor_key;
            }
            (Some(only), None) | (None, Some(only)) => {
                self.relink(parent, Some(only));
                self.arena.remove(target);
            }
            (None, None) => {
                self.relink(parent, None);
                self.arena.remove(target);
            }
        }
        Ok(())
    }

    /// Key at the root, if any. Entry point of the structural walk used by
    /// rendering collaborators.
    pub fn root_key(&self) -> Option<&K> {
        self.root.map(|idx| &self.arena[idx].key)
    }

    /// Left and right child keys of the node holding `key`, or `None` if the
    /// key is absent.
    pub fn children_of(&self, key: &K) -> Option<(Option<&K>, Option<&K>)> {
        let node = &self.arena[self.locate(key)?];
        let key_at = |idx: Option<Index>| idx.map(|i| &self.arena[i].key);
        Some((key_at(node.left), key_at(node.right)))
    }

    /// Ordered descent to the node holding `key`.
    pub(crate) fn locate(&self, key: &K) -> Option<Index> {
        let mut current = self.root;
        while let Some(idx) = current {
            match key.cmp(&self.arena[idx].key) {
                Ordering::Equal => return Some(idx),
                Ordering::Less => current = self.arena[idx].left,
                Ordering::Greater => current = self.arena[idx].right,
            }
        }
        None
    }

    /// Unlinks the rightmost node of the subtree rooted at `start` (the left
    /// child of `anchor`) and returns its key. The rightmost node has no
    /// right child, so its left subtree moves into the vacated slot.
    fn unlink_rightmost(&mut self, anchor: Index, start: Index) -> K {
        let mut parent = (anchor, Side::Left);
        let mut donor = start;
        while let Some(next) = self.arena[donor].right {
            parent = (donor, Side::Right);
            donor = next;
        }
        let orphan = self.arena[donor].left;
        self.relink(Some(parent), orphan);
        self.arena
            .remove(donor)
            .map(|node| node.key)
            .expect("donor is linked from the tree")
    }

    /// Mirror of [`Self::unlink_rightmost`]: takes the leftmost node under
    /// the right child of `anchor`.
    fn unlink_leftmost(&mut self, anchor: Index, start: Index) -> K {
        let mut parent = (anchor, Side::Right);
        let mut donor = start;
        while let Some(next) = self.arena[donor].left {
            parent = (donor, Side::Left);
            donor = next;
        }
        let orphan = self.arena[donor].right;
        self.relink(Some(parent), orphan);
        self.arena
            .remove(donor)
            .map(|node| node.key)
            .expect("donor is linked from the tree")
    }

    /// Points the given parent slot (or the root, for `None`) at `child`.
    fn relink(&mut self, parent: Option<(Index, Side)>, child: Option<Index>) {
        match parent {
            Some((idx, Side::Left)) => self.arena[idx].left = child,
            Some((idx, Side::Right)) => self.arena[idx].right = child,
            None => self.root = child,
        }
    }
}
