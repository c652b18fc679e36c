use thiserror::Error;

/// Failure modes of tree operations.
///
/// Every variant is recoverable: the tree is left unchanged and the caller
/// gets the offending key back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError<K> {
    #[error("Duplicate key: {0}")]
    DuplicateKey(K),

    #[error("Node not found: {0}")]
    NodeNotFound(K),

    #[error("Child slot under {parent} already occupied, cannot attach {child}")]
    SlotOccupied {
        parent: K,
        child: K,
    },
}

pub type TreeResult<T, K> = Result<T, TreeError<K>>;
