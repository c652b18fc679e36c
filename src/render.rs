use std::fmt::Display;

use tracing::instrument;

use crate::tree::Tree;

impl<K: Ord + Display> Tree<K> {
    /// Renders the tree for terminal display, going through the structural
    /// walk interface only (root key plus per-key child lookup) rather than
    /// arena internals. Children carry `(L)`/`(R)` markers.
    #[instrument(level = "debug", skip(self))]
    pub fn render(&self) -> termtree::Tree<String> {
        let Some(root) = self.root_key() else {
            return termtree::Tree::new("empty tree".to_string());
        };

        // Key lookup cannot tell apart duplicate keys attached through
        // insert_child, so the descent is capped at the structural height.
        fn build<K: Ord + Display>(
            tree: &Tree<K>,
            key: &K,
            label: String,
            budget: usize,
        ) -> termtree::Tree<String> {
            let mut out = termtree::Tree::new(label);
            if budget == 0 {
                return out;
            }
            if let Some((left, right)) = tree.children_of(key) {
                if let Some(left) = left {
                    out.push(build(tree, left, format!("{left} (L)"), budget - 1));
                }
                if let Some(right) = right {
                    out.push(build(tree, right, format!("{right} (R)"), budget - 1));
                }
            }
            out
        }

        build(self, root, root.to_string(), self.height().saturating_sub(1))
    }
}
