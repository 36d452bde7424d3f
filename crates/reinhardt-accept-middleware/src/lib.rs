//! # Reinhardt Accept Middleware
//!
//! Request hook that parses the `Accept` header of every incoming request.
//!
//! - A parsable header is stored on the request as
//!   [`AcceptedTypes`](reinhardt_negotiation::AcceptedTypes).
//! - An unparsable header short-circuits the request with
//!   `400 Bad Request`, unless the middleware is configured to be lenient.
//! - Handlers read the preferences through [`AcceptRequestExt`].

pub mod config;
pub mod ext;
pub mod middleware;

pub use config::AcceptMiddlewareConfig;
pub use ext::AcceptRequestExt;
pub use middleware::{AcceptHeaderError, AcceptMiddleware, accepted_types_from_headers};
