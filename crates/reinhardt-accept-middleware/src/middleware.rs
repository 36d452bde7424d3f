//! Accept header middleware
//!
//! Parses the `Accept` header once per request and stores the result in the
//! request extensions as [`AcceptedTypes`], where views read it back through
//! [`AcceptRequestExt`](crate::AcceptRequestExt).

use bytes::Bytes;
use http::header::{ACCEPT, ToStrError};
use http::{HeaderMap, Request, Response, StatusCode};
use reinhardt_negotiation::{AcceptedTypes, NegotiationError};

use crate::config::AcceptMiddlewareConfig;

/// Reasons an `Accept` header cannot be turned into [`AcceptedTypes`]
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum AcceptHeaderError {
	/// A header value holds bytes outside visible ASCII
	#[error("Accept header contains non-visible ASCII characters")]
	InvalidEncoding(#[from] ToStrError),

	/// The header text is not a valid list of media ranges
	#[error(transparent)]
	Negotiation(#[from] NegotiationError),
}

/// Reads every `Accept` value from `headers` and parses them
///
/// Repeated `Accept` fields are joined with `, ` before parsing. A missing
/// header gives an empty [`AcceptedTypes`]. Values with obs-text bytes are
/// rejected with [`AcceptHeaderError::InvalidEncoding`] rather than decoded.
///
/// # Examples
///
/// ```
/// use http::{HeaderMap, HeaderValue, header::ACCEPT};
/// use reinhardt_accept_middleware::accepted_types_from_headers;
///
/// let mut headers = HeaderMap::new();
/// headers.append(ACCEPT, HeaderValue::from_static("text/html;q=0.5"));
/// headers.append(ACCEPT, HeaderValue::from_static("application/json"));
///
/// let accepted = accepted_types_from_headers(&headers).unwrap();
/// assert_eq!(accepted.accepted_types()[0].mimetype(), "application/json");
/// ```
pub fn accepted_types_from_headers(
	headers: &HeaderMap,
) -> Result<AcceptedTypes, AcceptHeaderError> {
	let values = headers
		.get_all(ACCEPT)
		.iter()
		.map(|value| value.to_str())
		.collect::<Result<Vec<_>, _>>()?;

	let header = (!values.is_empty()).then(|| values.join(", "));
	Ok(AcceptedTypes::parse(header.as_deref())?)
}

/// Middleware that attaches the client's Accept preferences to each request
///
/// # Examples
///
/// ```
/// use bytes::Bytes;
/// use http::{Request, Response, StatusCode, header::ACCEPT};
/// use reinhardt_accept_middleware::{AcceptMiddleware, AcceptRequestExt};
///
/// let middleware = AcceptMiddleware::default();
///
/// let request = Request::builder()
///     .header(ACCEPT, "application/json, text/html;q=0.9")
///     .body(())
///     .unwrap();
///
/// let response = middleware.process(request, |request| {
///     let body = if request.accepts("application/json") { "{}" } else { "<p></p>" };
///     Response::new(Bytes::from(body))
/// });
/// assert_eq!(response.status(), StatusCode::OK);
/// assert_eq!(response.body(), "{}");
///
/// let bad = Request::builder().header(ACCEPT, "/json").body(()).unwrap();
/// let response = middleware.process(bad, |_| Response::new(Bytes::new()));
/// assert_eq!(response.status(), StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AcceptMiddleware {
	config: AcceptMiddlewareConfig,
}

impl AcceptMiddleware {
	/// Create a new AcceptMiddleware with the given configuration
	pub fn new(config: AcceptMiddlewareConfig) -> Self {
		Self { config }
	}

	/// Returns the configuration this middleware was built with
	pub fn config(&self) -> &AcceptMiddlewareConfig {
		&self.config
	}

	/// Parses the request's Accept header and stores the result on it
	///
	/// # Errors
	///
	/// Returns a `400 Bad Request` response when the header cannot be parsed
	/// and [`AcceptMiddlewareConfig::reject_invalid`] is set. The caller
	/// must send it back instead of running the handler.
	pub fn process_request<B>(&self, request: &mut Request<B>) -> Result<(), Response<Bytes>> {
		let accepted = match accepted_types_from_headers(request.headers()) {
			Ok(accepted) => {
				tracing::debug!(entries = accepted.len(), "parsed Accept header");
				accepted
			}
			Err(error) if self.config.reject_invalid => {
				tracing::warn!(%error, "rejecting request with invalid Accept header");
				return Err(bad_request());
			}
			Err(error) => {
				tracing::warn!(%error, "ignoring invalid Accept header");
				AcceptedTypes::default()
			}
		};

		request.extensions_mut().insert(accepted);
		Ok(())
	}

	/// Runs [`process_request`](Self::process_request), then `next` unless the
	/// request was rejected
	pub fn process<B, F>(&self, mut request: Request<B>, next: F) -> Response<Bytes>
	where
		F: FnOnce(Request<B>) -> Response<Bytes>,
	{
		match self.process_request(&mut request) {
			Ok(()) => next(request),
			Err(response) => response,
		}
	}
}

fn bad_request() -> Response<Bytes> {
	let mut response = Response::new(Bytes::new());
	*response.status_mut() = StatusCode::BAD_REQUEST;
	response
}
