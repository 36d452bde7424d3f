//! Request accessors for the stored Accept preferences

use http::Request;
use reinhardt_negotiation::AcceptedTypes;

/// Access to the [`AcceptedTypes`] stored by [`AcceptMiddleware`]
///
/// [`AcceptMiddleware`]: crate::AcceptMiddleware
pub trait AcceptRequestExt {
	/// The parsed Accept preferences, or `None` if the middleware did not run
	fn accepted_types(&self) -> Option<&AcceptedTypes>;

	/// Whether the client accepts `mimetype`
	///
	/// False when the middleware did not run or no Accept header was sent.
	fn accepts(&self, mimetype: &str) -> bool {
		self.accepted_types()
			.is_some_and(|accepted| accepted.accepts(mimetype))
	}
}

impl<B> AcceptRequestExt for Request<B> {
	fn accepted_types(&self) -> Option<&AcceptedTypes> {
		self.extensions().get::<AcceptedTypes>()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_without_middleware() {
		let request = Request::new(());
		assert!(request.accepted_types().is_none());
		assert!(!request.accepts("text/html"));
	}

	#[rstest]
	fn test_with_stored_types() {
		let mut request = Request::new(());
		request
			.extensions_mut()
			.insert(AcceptedTypes::parse(Some("text/*")).unwrap());

		assert!(request.accepts("text/csv"));
		assert!(!request.accepts("application/json"));
	}
}
