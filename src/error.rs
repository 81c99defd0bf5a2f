//! Error types for table configuration and rendering

/// Errors surfaced while configuring or rendering a table
///
/// Request state parsing never fails; malformed query parameters fall back
/// to defaults instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
	/// A filtering threshold must be at least one character
	#[error("filtering threshold must be greater than zero, got {0}")]
	InvalidThreshold(usize),

	/// An explicitly configured page size must hold at least one row
	#[error("page size must be greater than zero, got {0}")]
	InvalidPageSize(usize),

	/// Paging, sorting or filtering is configured but no update URL is set
	#[error("an update url is required when paging, sorting or filtering is configured")]
	MissingUpdateUrl,
}

/// Result alias for table operations
pub type Result<T> = std::result::Result<T, TableError>;
