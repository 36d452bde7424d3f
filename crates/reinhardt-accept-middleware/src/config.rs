//! Accept middleware configuration

use serde::{Deserialize, Serialize};

/// Configuration for [`AcceptMiddleware`](crate::AcceptMiddleware)
///
/// # Examples
///
/// ```
/// use reinhardt_accept_middleware::AcceptMiddlewareConfig;
///
/// let config = AcceptMiddlewareConfig::default();
/// assert!(config.reject_invalid);
///
/// let lenient = AcceptMiddlewareConfig::new().with_reject_invalid(false);
/// assert!(!lenient.reject_invalid);
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcceptMiddlewareConfig {
	/// Answer `400 Bad Request` when the Accept header cannot be parsed.
	/// When false the request continues as if no header had been sent.
	///
	/// Header values carrying bytes outside visible ASCII (obs-text such as
	/// latin-1 `é`) count as unparsable; they are not decoded.
	pub reject_invalid: bool,
}

impl AcceptMiddlewareConfig {
	/// Create a configuration with default settings
	pub fn new() -> Self {
		Self::default()
	}

	/// Set whether unparsable headers are rejected
	pub fn with_reject_invalid(mut self, reject_invalid: bool) -> Self {
		self.reject_invalid = reject_invalid;
		self
	}
}

impl Default for AcceptMiddlewareConfig {
	fn default() -> Self {
		Self {
			reject_invalid: true,
		}
	}
}
