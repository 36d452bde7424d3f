//! Parsed Accept preferences carried with a request

use std::slice;

use crate::error::Result;
use crate::media_type::MediaType;
use crate::negotiator;

/// The media types a client accepts, most preferred first
///
/// Built once per request from the `Accept` header and handed to views,
/// which ask it whether a representation is acceptable or which of several
/// representations to serve.
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::AcceptedTypes;
///
/// let accepted = AcceptedTypes::parse(Some("text/html, application/*;q=0.5")).unwrap();
/// assert!(accepted.accepts("text/html"));
/// assert!(accepted.accepts("application/xml"));
/// assert!(!accepted.accepts("image/png"));
/// assert_eq!(
///     accepted.best_match(["application/json", "text/html"]),
///     Some("text/html")
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AcceptedTypes {
	types: Vec<MediaType>,
}

impl AcceptedTypes {
	/// Wraps media types, sorting them into preference order
	///
	/// Uses the same stable sort by [`MediaType::compare`] as
	/// [`negotiator::parse`], so input that is already sorted is unchanged.
	pub fn new(mut types: Vec<MediaType>) -> Self {
		types.sort_by(|a, b| a.compare(b));
		Self { types }
	}

	/// Parses an Accept header value
	///
	/// # Errors
	///
	/// Propagates the parse error of [`negotiator::parse`].
	pub fn parse(header: Option<&str>) -> Result<Self> {
		negotiator::parse(header).map(Self::new)
	}

	/// The parsed media types, most preferred first
	pub fn accepted_types(&self) -> &[MediaType] {
		&self.types
	}

	/// Whether any accepted entry covers `mimetype`
	///
	/// Always false when the client sent no Accept header.
	pub fn accepts(&self, mimetype: &str) -> bool {
		self.types.iter().any(|accepted| accepted.matches(mimetype))
	}

	/// See [`negotiator::best_match`]
	pub fn best_match<I, S>(&self, desired: I) -> Option<S>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		negotiator::best_match(desired, &self.types)
	}

	/// See [`negotiator::best_match_or`]
	pub fn best_match_or<I, S>(&self, desired: I, default: S) -> S
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		negotiator::best_match_or(desired, &self.types, default)
	}

	/// Whether the client sent no usable preferences
	pub fn is_empty(&self) -> bool {
		self.types.is_empty()
	}

	/// Number of parsed media ranges
	pub fn len(&self) -> usize {
		self.types.len()
	}

	/// Iterates the media types, most preferred first
	pub fn iter(&self) -> slice::Iter<'_, MediaType> {
		self.types.iter()
	}

	/// Consumes the wrapper, returning the sorted media types
	pub fn into_inner(self) -> Vec<MediaType> {
		self.types
	}
}

impl<'a> IntoIterator for &'a AcceptedTypes {
	type Item = &'a MediaType;
	type IntoIter = slice::Iter<'a, MediaType>;

	fn into_iter(self) -> Self::IntoIter {
		self.types.iter()
	}
}

impl From<Vec<MediaType>> for AcceptedTypes {
	fn from(types: Vec<MediaType>) -> Self {
		Self::new(types)
	}
}
