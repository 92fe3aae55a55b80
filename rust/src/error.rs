//! Error handling and result types for BTree operations.
//!
//! Lookup and insertion failures are ordinary outcomes and are returned to the
//! caller. The remaining variants describe broken internal invariants; a
//! correct tree never produces them, but they are propagated rather than
//! allowed to corrupt the structure silently.

/// Error type for B-tree operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BTreeError {
    /// Key not found in the tree.
    KeyNotFound,
    /// Key is already present; the tree was left unchanged.
    DuplicateKey,
    /// Invalid branching factor specified at construction.
    InvalidBranchingFactor(String),
    /// Entry index outside the bounds of a node.
    IndexOutOfRange(String),
    /// Split requested on a child that does not need one.
    InvalidSplit(String),
    /// Tree corruption detected.
    CorruptedTree(String),
}

impl BTreeError {
    /// Create an InvalidBranchingFactor error with context
    pub fn invalid_branching_factor(branching_factor: usize, min_required: usize) -> Self {
        Self::InvalidBranchingFactor(format!(
            "Branching factor {} is invalid (minimum required: {})",
            branching_factor, min_required
        ))
    }

    /// Create an InvalidBranchingFactor error for a factor above the maximum
    pub fn branching_factor_too_large(branching_factor: usize, max_allowed: usize) -> Self {
        Self::InvalidBranchingFactor(format!(
            "Branching factor {} is invalid (maximum allowed: {})",
            branching_factor, max_allowed
        ))
    }

    /// Create an IndexOutOfRange error with context
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange(format!(
            "index {} out of range for node of size {}", index, len
        ))
    }

    /// Create an InvalidSplit error with context
    pub fn invalid_split(child_index: usize, details: &str) -> Self {
        Self::InvalidSplit(format!("child {}: {}", child_index, details))
    }

    /// Create a CorruptedTree error with context
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} corruption: {}", component, details))
    }

    /// Check if this error reports a broken internal invariant rather than a
    /// caller-visible outcome.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::IndexOutOfRange(_) | Self::InvalidSplit(_) | Self::CorruptedTree(_)
        )
    }
}

impl std::fmt::Display for BTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BTreeError::KeyNotFound => write!(f, "Key not found in tree"),
            BTreeError::DuplicateKey => write!(f, "Key already present in tree"),
            BTreeError::InvalidBranchingFactor(msg) => {
                write!(f, "Invalid branching factor: {}", msg)
            }
            BTreeError::IndexOutOfRange(msg) => write!(f, "Index out of range: {}", msg),
            BTreeError::InvalidSplit(msg) => write!(f, "Invalid split: {}", msg),
            BTreeError::CorruptedTree(msg) => write!(f, "Corrupted tree: {}", msg),
        }
    }
}

impl std::error::Error for BTreeError {}

/// Internal result type for node-level operations
pub(crate) type TreeResult<T> = Result<T, BTreeError>;

/// Public result type for tree operations that may fail
pub type BTreeResult<T> = Result<T, BTreeError>;

/// Result type for key lookup operations
pub type KeyResult<T> = Result<T, BTreeError>;

/// Result type for tree modification operations
pub type ModifyResult<T> = Result<T, BTreeError>;

/// Result type for tree construction
pub type InitResult<T> = Result<T, BTreeError>;

/// Result extension trait for attaching context to internal errors
pub trait BTreeResultExt<T> {
    /// Prefix the message of an internal error with `context`.
    ///
    /// `KeyNotFound` and `DuplicateKey` carry no message and pass through
    /// unchanged.
    fn with_context(self, context: &str) -> BTreeResult<T>;

    /// Convert to a BTreeResult with operation context
    fn with_operation(self, operation: &str) -> BTreeResult<T>;
}

impl<T> BTreeResultExt<T> for Result<T, BTreeError> {
    fn with_context(self, context: &str) -> BTreeResult<T> {
        self.map_err(|e| match e {
            BTreeError::KeyNotFound => BTreeError::KeyNotFound,
            BTreeError::DuplicateKey => BTreeError::DuplicateKey,
            BTreeError::InvalidBranchingFactor(msg) => {
                BTreeError::InvalidBranchingFactor(format!("{}: {}", context, msg))
            }
            BTreeError::IndexOutOfRange(msg) => {
                BTreeError::IndexOutOfRange(format!("{}: {}", context, msg))
            }
            BTreeError::InvalidSplit(msg) => {
                BTreeError::InvalidSplit(format!("{}: {}", context, msg))
            }
            BTreeError::CorruptedTree(msg) => BTreeError::corrupted_tree(context, &msg),
        })
    }

    fn with_operation(self, operation: &str) -> BTreeResult<T> {
        self.with_context(&format!("Operation '{}'", operation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(BTreeError::KeyNotFound.to_string(), "Key not found in tree");
        assert_eq!(
            BTreeError::DuplicateKey.to_string(),
            "Key already present in tree"
        );
        assert_eq!(
            BTreeError::invalid_branching_factor(0, 1).to_string(),
            "Invalid branching factor: Branching factor 0 is invalid (minimum required: 1)"
        );
    }

    #[test]
    fn test_with_operation_prefixes_internal_errors() {
        let result: BTreeResult<()> = Err(BTreeError::index_out_of_range(5, 3));
        let err = result.with_operation("insert").unwrap_err();
        assert_eq!(
            err,
            BTreeError::IndexOutOfRange(
                "Operation 'insert': index 5 out of range for node of size 3".to_string()
            )
        );
        assert!(err.is_internal());
    }

    #[test]
    fn test_with_context_keeps_caller_errors() {
        let result: BTreeResult<()> = Err(BTreeError::DuplicateKey);
        assert_eq!(result.with_context("insert"), Err(BTreeError::DuplicateKey));
        assert!(!BTreeError::KeyNotFound.is_internal());
    }
}
