//! # Reinhardt Negotiation
//!
//! Parsing of the HTTP `Accept` header and selection of the representation
//! a client prefers.
//!
//! - [`MediaType`]: one weighted media range with its parameters
//! - [`parse`]: header value to media types, most preferred first
//! - [`best_match`]: picks one of the server's representations
//! - [`AcceptedTypes`]: the parsed preferences as carried by a request
//!
//! ## Example
//!
//! ```
//! use reinhardt_negotiation::{best_match_or, parse};
//!
//! let accepted = parse(Some("text/html;q=0.9, application/json, */*;q=0.1")).unwrap();
//! assert_eq!(accepted[0].mimetype(), "application/json");
//!
//! let chosen = best_match_or(["text/html", "text/csv"], &accepted, "text/plain");
//! assert_eq!(chosen, "text/html");
//! ```

pub mod accepted;
pub mod error;
pub mod media_type;
pub mod negotiator;

pub use accepted::AcceptedTypes;
pub use error::{NegotiationError, Result};
pub use media_type::{AsMimetype, MediaType, Params};
pub use negotiator::{best_match, best_match_or, parse};
