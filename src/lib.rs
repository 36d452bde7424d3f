//! # Reinhardt Accept
//!
//! Content negotiation on the HTTP `Accept` header for Reinhardt.
//!
//! The header is parsed into [`MediaType`] entries sorted from most to least
//! preferred, and [`best_match`] picks which of the server's representations
//! to send. With the `middleware` feature (default), [`AcceptMiddleware`]
//! does the parsing once per request and rejects unparsable headers with
//! `400 Bad Request`.
//!
//! ## Feature Flags
//!
//! - `middleware` (default) - request hook over `http::Request`
//!
//! ## Quick Example
//!
//! ```rust
//! use reinhardt_accept::{best_match, parse};
//!
//! let accepted = parse(Some("text/html;q=0.8, application/json")).unwrap();
//! let chosen = best_match(["text/html", "application/json"], &accepted);
//! assert_eq!(chosen, Some("application/json"));
//! ```

pub use reinhardt_negotiation::{
	AcceptedTypes, AsMimetype, MediaType, NegotiationError, Params, best_match, best_match_or,
	parse,
};

#[cfg(feature = "middleware")]
pub use reinhardt_accept_middleware::{
	AcceptHeaderError, AcceptMiddleware, AcceptMiddlewareConfig, AcceptRequestExt,
	accepted_types_from_headers,
};

/// Commonly used types
pub mod prelude {
	pub use reinhardt_negotiation::{AcceptedTypes, MediaType, best_match, best_match_or, parse};

	#[cfg(feature = "middleware")]
	pub use reinhardt_accept_middleware::{AcceptMiddleware, AcceptRequestExt};
}
