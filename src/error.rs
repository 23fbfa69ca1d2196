//! Error types for element tree operations

use thiserror::Error;

/// Errors that can occur while working with an element tree
#[derive(Debug, Error)]
pub enum ElementError {
	/// No child is registered under the requested name
	#[error("Child not found: {name}")]
	ChildNotFound {
		/// The name that was looked up
		name: String,
	},
}

/// Result type for element tree operations
pub type Result<T> = std::result::Result<T, ElementError>;
