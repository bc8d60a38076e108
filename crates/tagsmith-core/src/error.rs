//! Error types for tagsmith-core
//!
//! Building markup never fails. These errors only surface at the edges of the
//! crate: converting loosely typed JSON into arguments and property bags, and
//! loading [`BuilderOptions`](crate::BuilderOptions) from configuration.

use thiserror::Error;

/// Errors raised while converting external values into builder arguments.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
	/// A property value has no attribute representation.
	#[error("Unsupported value for property '{key}': {kind} has no attribute form")]
	UnsupportedValue {
		/// Property key, dotted for nested entries (`style.color`).
		key: String,
		/// JSON kind of the rejected value.
		kind: &'static str,
	},
}

/// Errors raised while loading builder options.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The options document could not be parsed.
	#[error("Failed to parse builder options: {0}")]
	Parse(#[source] Box<dyn std::error::Error + Send + Sync>),

	/// The configured fallback tag is blank.
	#[error("Default tag cannot be empty")]
	EmptyDefaultTag,
}
