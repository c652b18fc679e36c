use std::collections::VecDeque;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::tree::{Node, Tree};

impl<K> Tree<K> {
    /// Node, then left subtree, then right subtree.
    #[instrument(level = "trace", skip(self))]
    pub fn preorder(&self) -> Preorder<'_, K> {
        Preorder::new(self)
    }

    /// Left subtree, node, right subtree. Yields keys in ascending order for
    /// trees built through ordered insertion.
    #[instrument(level = "trace", skip(self))]
    pub fn inorder(&self) -> Inorder<'_, K> {
        Inorder::new(self)
    }

    /// Left subtree, right subtree, then the node.
    #[instrument(level = "trace", skip(self))]
    pub fn postorder(&self) -> Postorder<'_, K> {
        Postorder::new(self)
    }

    /// Breadth-first, level by level, children left to right.
    #[instrument(level = "trace", skip(self))]
    pub fn level_order(&self) -> LevelOrder<'_, K> {
        LevelOrder::new(self)
    }
}

/// Stack-driven preorder walk.
pub struct Preorder<'a, K> {
    arena: &'a Arena<Node<K>>,
    stack: Vec<Index>,
}

impl<'a, K> Preorder<'a, K> {
    fn new(tree: &'a Tree<K>) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root_index() {
            stack.push(root);
        }
        Self {
            arena: tree.arena(),
            stack,
        }
    }
}

impl<'a, K> Iterator for Preorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        let idx = self.stack.pop()?;
        let node = &arena[idx];
        // Right pushed first so the left subtree pops before it
        if let Some(right) = node.right {
            self.stack.push(right);
        }
        if let Some(left) = node.left {
            self.stack.push(left);
        }
        Some(&node.key)
    }
}

/// Inorder walk keeping the pending ancestors on an explicit stack.
pub struct Inorder<'a, K> {
    arena: &'a Arena<Node<K>>,
    stack: Vec<Index>,
    current: Option<Index>,
}

impl<'a, K> Inorder<'a, K> {
    fn new(tree: &'a Tree<K>) -> Self {
        Self {
            arena: tree.arena(),
            stack: Vec::new(),
            current: tree.root_index(),
        }
    }
}

impl<'a, K> Iterator for Inorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        while let Some(idx) = self.current {
            self.stack.push(idx);
            self.current = arena[idx].left;
        }
        let idx = self.stack.pop()?;
        self.current = arena[idx].right;
        Some(&arena[idx].key)
    }
}

/// Postorder walk over a stack of (index, children expanded) pairs.
pub struct Postorder<'a, K> {
    arena: &'a Arena<Node<K>>,
    stack: Vec<(Index, bool)>,
}

impl<'a, K> Postorder<'a, K> {
    fn new(tree: &'a Tree<K>) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root_index() {
            stack.push((root, false));
        }
        Self {
            arena: tree.arena(),
            stack,
        }
    }
}

impl<'a, K> Iterator for Postorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        while let Some((idx, expanded)) = self.stack.pop() {
            let node = &arena[idx];
            if expanded {
                return Some(&node.key);
            }
            self.stack.push((idx, true));
            if let Some(right) = node.right {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left {
                self.stack.push((left, false));
            }
        }
        None
    }
}

/// Queue-driven breadth-first walk.
pub struct LevelOrder<'a, K> {
    arena: &'a Arena<Node<K>>,
    queue: VecDeque<Index>,
}

impl<'a, K> LevelOrder<'a, K> {
    fn new(tree: &'a Tree<K>) -> Self {
        let mut queue = VecDeque::new();
        if let Some(root) = tree.root_index() {
            queue.push_back(root);
        }
        Self {
            arena: tree.arena(),
            queue,
        }
    }
}

impl<'a, K> Iterator for LevelOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        let idx = self.queue.pop_front()?;
        let node = &arena[idx];
        if let Some(left) = node.left {
            self.queue.push_back(left);
        }
        if let Some(right) = node.right {
            self.queue.push_back(right);
        }
        Some(&node.key)
    }
}
