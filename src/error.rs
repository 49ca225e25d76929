//! The failures a tree or node operation can report.

/// Errors triggered by tree and node operations. None of these are fatal: each is handed back to
/// the caller and the tree it came from is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error<T> {
    /// The tree handle itself doesn't exist (as opposed to existing but having no nodes).
    #[error("the tree is absent")]
    TreeAbsent,
    /// The tree exists but holds no nodes.
    #[error("the tree is empty")]
    TreeEmpty,
    /// A link accessor was called on a node that doesn't exist.
    #[error("the node is absent")]
    NodeAbsent,
    /// The value is already stored in the binary search tree. The rejected value is handed back.
    #[error("the binary search tree already has the value attempting to be inserted: {0}")]
    DuplicateValue(T),
    /// A balanced tree was requested from an empty input.
    #[error("there are no values in the input")]
    NoValues,
}
