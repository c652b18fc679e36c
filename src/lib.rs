//! Arena-backed binary search tree with structural queries, classic
//! traversals, and an interactive shell.
//!
//! The tree keeps every key at its ordered position: left subtrees hold
//! smaller keys, right subtrees larger ones, and nothing rebalances. Nodes
//! live in a generational arena addressed by stable indices, and every core
//! operation descends iteratively, so stack depth never depends on the tree
//! shape.
//!
//! ```
//! use rsbst::{DeleteStrategy, Tree};
//!
//! let mut tree = Tree::new();
//! for key in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(key).unwrap();
//! }
//! assert!(tree.contains(&4));
//! tree.delete(&5, DeleteStrategy::Predecessor).unwrap();
//! let keys: Vec<i32> = tree.inorder().copied().collect();
//! assert_eq!(keys, vec![1, 3, 4, 7, 8, 9]);
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod exitcode;
mod query;
mod render;
pub mod traverse;
pub mod tree;
pub mod util;


pub use errors::{TreeError, TreeResult};
pub use traverse::{Inorder, LevelOrder, Postorder, Preorder};
pub use tree::{DeleteStrategy, Tree};
