use std::collections::VecDeque;

use tracing::instrument;

use crate::tree::Tree;

impl<K> Tree<K> {
    /// Longest root-to-leaf path, counted in nodes: 0 for an empty tree, 1
    /// for a lone root. Breadth-first with a depth counter per queue entry.
    #[instrument(level = "debug", skip(self))]
    pub fn height(&self) -> usize {
        let Some(root) = self.root_index() else {
            return 0;
        };
        let arena = self.arena();
        let mut max_depth = 0;
        let mut queue = VecDeque::new();
        queue.push_back((root, 1));
        while let Some((idx, depth)) = queue.pop_front() {
            max_depth = max_depth.max(depth);
            let node = &arena[idx];
            if let Some(left) = node.left {
                queue.push_back((left, depth + 1));
            }
            if let Some(right) = node.right {
                queue.push_back((right, depth + 1));
            }
        }
        max_depth
    }

    /// Number of nodes with no children.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_count(&self) -> usize {
        let Some(root) = self.root_index() else {
            return 0;
        };
        let arena = self.arena();
        let mut count = 0;
        let mut stack = vec![root];
        while let Some(idx) = stack.pop() {
            let node = &arena[idx];
            if node.is_leaf() {
                count += 1;
                continue;
            }
            if let Some(right) = node.right {
                stack.push(right);
            }
            if let Some(left) = node.left {
                stack.push(left);
            }
        }
        count
    }

    /// Whether the levels fill left to right without gaps: once a missing
    /// child is seen in breadth-first order, no later visited node may have
    /// any child. Empty trees are complete.
    #[instrument(level = "debug", skip(self))]
    pub fn is_complete(&self) -> bool {
        let Some(root) = self.root_index() else {
            return true;
        };
        let arena = self.arena();
        let mut gap = false;
        let mut queue = VecDeque::new();
        queue.push_back(root);
        while let Some(idx) = queue.pop_front() {
            let node = &arena[idx];
            match node.left {
                Some(left) => {
                    if gap {
                        return false;
                    }
                    queue.push_back(left);
                }
                None => gap = true,
            }
            match node.right {
                Some(right) => {
                    if gap {
                        return false;
                    }
                    queue.push_back(right);
                }
                None => gap = true,
            }
        }
        true
    }

    /// Whether the occupied levels are perfectly doubled: no node has a
    /// right child without a left child, and any level with children at all
    /// holds exactly twice as many nodes as its parent level. A lone root is
    /// full; so is an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn is_full(&self) -> bool {
        let Some(root) = self.root_index() else {
            return true;
        };
        let arena = self.arena();
        let mut level = vec![root];
        while !level.is_empty() {
            let mut next = Vec::new();
            for &idx in &level {
                let node = &arena[idx];
                if node.left.is_none() && node.right.is_some() {
                    return false;
                }
                if let Some(left) = node.left {
                    next.push(left);
                }
                if let Some(right) = node.right {
                    next.push(right);
                }
            }
            if !next.is_empty() && next.len() != 2 * level.len() {
                return false;
            }
            level = next;
        }
        true
    }
}
