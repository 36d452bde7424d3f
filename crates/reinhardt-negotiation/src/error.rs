//! Errors raised while parsing media ranges

/// Result type for negotiation operations
pub type Result<T> = std::result::Result<T, NegotiationError>;

/// Errors raised while parsing an Accept header or building a [`MediaType`]
///
/// Malformed quality values and absent headers are not errors.
///
/// [`MediaType`]: crate::MediaType
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NegotiationError {
	/// The part before `/` is empty
	#[error("Media range has no type: '{0}'")]
	InvalidMediaType(String),

	/// The part after `/` is empty, or there is no `/` at all
	#[error("Media range has no subtype: '{0}'")]
	InvalidSubtype(String),

	/// A non-blank parameter without a `=` separator
	#[error("Media range parameter is not a key=value pair: '{0}'")]
	InvalidParameter(String),
}
