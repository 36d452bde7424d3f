//! Weighted media type entries of an Accept header

use std::cmp::Ordering;
use std::fmt;

use indexmap::IndexMap;

use crate::error::{NegotiationError, Result};

/// Extension parameters of a media range, in header order
pub type Params = IndexMap<String, String>;

/// Values that compare against a [`MediaType`] through their mimetype string
pub trait AsMimetype {
	/// Returns the `type/subtype` string used for equality
	fn as_mimetype(&self) -> &str;
}

impl AsMimetype for str {
	fn as_mimetype(&self) -> &str {
		self
	}
}

impl AsMimetype for String {
	fn as_mimetype(&self) -> &str {
		self.as_str()
	}
}

impl AsMimetype for MediaType {
	fn as_mimetype(&self) -> &str {
		self.mimetype()
	}
}

impl<T: AsMimetype + ?Sized> AsMimetype for &T {
	fn as_mimetype(&self) -> &str {
		(**self).as_mimetype()
	}
}

/// One entry of a parsed Accept header
///
/// A `type/subtype` pair with a quality weight and extension parameters.
/// Validated once on construction and never mutated afterwards.
///
/// Two media types are equal when their mimetype strings are equal;
/// quality and parameters do not take part in equality.
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::MediaType;
///
/// let html = MediaType::with_quality("text/html", 0.8).unwrap();
/// assert_eq!(html.mediatype(), "text");
/// assert_eq!(html.subtype(), "html");
/// assert_eq!(html.mimetype(), "text/html");
/// assert_eq!(html.to_string(), "text/html; q=0.8");
/// ```
#[derive(Debug, Clone)]
pub struct MediaType {
	mimetype: String,
	slash: usize,
	quality: f64,
	params: Params,
}

impl MediaType {
	/// Creates a media type with quality 1.0 and no parameters
	///
	/// # Errors
	///
	/// Returns [`NegotiationError::InvalidMediaType`] when the type is empty
	/// and [`NegotiationError::InvalidSubtype`] when the subtype is empty or
	/// missing.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::{MediaType, NegotiationError};
	///
	/// let json = MediaType::new("application/json").unwrap();
	/// assert_eq!(json.quality(), 1.0);
	/// assert!(json.params().is_empty());
	///
	/// assert!(matches!(
	///     MediaType::new("/json"),
	///     Err(NegotiationError::InvalidMediaType(_))
	/// ));
	/// assert!(matches!(
	///     MediaType::new("text"),
	///     Err(NegotiationError::InvalidSubtype(_))
	/// ));
	/// ```
	pub fn new(raw: impl Into<String>) -> Result<Self> {
		Self::with_params(raw, 1.0, Params::new())
	}

	/// Creates a media type with the given quality and no parameters
	pub fn with_quality(raw: impl Into<String>, quality: f64) -> Result<Self> {
		Self::with_params(raw, quality, Params::new())
	}

	/// Creates a media type with quality and extension parameters
	///
	/// The quality is stored as given, without clamping.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::{MediaType, Params};
	///
	/// let mut params = Params::new();
	/// params.insert("level".to_string(), "1".to_string());
	///
	/// let html = MediaType::with_params("text/html", 0.5, params).unwrap();
	/// assert_eq!(html.param("level"), Some("1"));
	/// assert_eq!(html.to_string(), "text/html; q=0.5; level=1");
	/// ```
	pub fn with_params(raw: impl Into<String>, quality: f64, params: Params) -> Result<Self> {
		let mimetype = raw.into();
		let (mediatype, _) = split_mimetype(&mimetype)?;
		let slash = mediatype.len();

		Ok(Self {
			mimetype,
			slash,
			quality,
			params,
		})
	}

	/// Returns the `type/subtype` string
	pub fn mimetype(&self) -> &str {
		&self.mimetype
	}

	/// Returns the top-level type, e.g. `text` in `text/html`
	pub fn mediatype(&self) -> &str {
		&self.mimetype[..self.slash]
	}

	/// Returns the subtype, e.g. `html` in `text/html`
	pub fn subtype(&self) -> &str {
		&self.mimetype[self.slash + 1..]
	}

	/// Returns the quality weight
	pub fn quality(&self) -> f64 {
		self.quality
	}

	/// Shorthand for [`quality`](Self::quality)
	pub fn q(&self) -> f64 {
		self.quality
	}

	/// Returns the extension parameters in header order
	pub fn params(&self) -> &Params {
		&self.params
	}

	/// Returns the value of an extension parameter, if present
	pub fn param(&self, key: &str) -> Option<&str> {
		self.params.get(key).map(String::as_str)
	}

	/// Whether this is the `*/*` range
	pub fn all_types(&self) -> bool {
		self.mediatype() == "*" && self.subtype() == "*"
	}

	/// Whether the subtype is `*`, whatever the type
	pub fn all_subtypes(&self) -> bool {
		self.subtype() == "*"
	}

	/// Exact, case-sensitive comparison of mimetype strings
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::MediaType;
	///
	/// let a = MediaType::with_quality("text/html", 0.2).unwrap();
	/// let b = MediaType::new("text/html").unwrap();
	///
	/// assert!(a.equals(&b));
	/// assert!(a.equals("text/html"));
	/// assert!(!a.equals("text/HTML"));
	/// ```
	pub fn equals<T: AsMimetype + ?Sized>(&self, other: &T) -> bool {
		self.mimetype == other.as_mimetype()
	}

	/// Whether this Accept entry covers the candidate mimetype
	///
	/// The candidate is split on its first `/` as is, without trimming or
	/// dropping parameters, so `text/html; charset=utf-8` has the subtype
	/// `html; charset=utf-8`. A candidate that is not a valid `type/subtype`
	/// never matches.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::MediaType;
	///
	/// assert!(MediaType::new("*/*").unwrap().matches("image/png"));
	/// assert!(MediaType::new("image/*").unwrap().matches("image/png"));
	/// assert!(!MediaType::new("image/png").unwrap().matches("image/jpeg"));
	/// // Not symmetric
	/// assert!(!MediaType::new("image/png").unwrap().matches("image/*"));
	/// ```
	pub fn matches(&self, candidate: &str) -> bool {
		let Ok((mediatype, subtype)) = split_mimetype(candidate) else {
			return false;
		};

		if self.all_types() {
			return true;
		}
		self.mediatype() == mediatype && (self.all_subtypes() || self.subtype() == subtype)
	}

	/// Preference ordering between two Accept entries
	///
	/// `Less` means `self` is preferred and sorts earlier. Checked in order:
	/// higher quality, then non-wildcard before wildcard (subtype wildcard
	/// and `*/*` tested together), then more parameters. Anything else is
	/// `Equal`, leaving the order to a stable sort.
	///
	/// # Examples
	///
	/// ```
	/// use std::cmp::Ordering;
	/// use reinhardt_negotiation::MediaType;
	///
	/// let basic = MediaType::new("audio/basic").unwrap();
	/// let any_audio = MediaType::new("audio/*").unwrap();
	/// let low = MediaType::with_quality("audio/basic", 0.2).unwrap();
	///
	/// assert_eq!(basic.compare(&any_audio), Ordering::Less);
	/// assert_eq!(any_audio.compare(&basic), Ordering::Greater);
	/// assert_eq!(any_audio.compare(&low), Ordering::Less);
	/// ```
	pub fn compare(&self, other: &MediaType) -> Ordering {
		if self.quality > other.quality {
			return Ordering::Less;
		}
		if self.quality < other.quality {
			return Ordering::Greater;
		}

		if (!self.all_subtypes() && other.all_subtypes())
			|| (!self.all_types() && other.all_types())
		{
			return Ordering::Less;
		}
		if (self.all_subtypes() && !other.all_subtypes())
			|| (self.all_types() && !other.all_types())
		{
			return Ordering::Greater;
		}

		other.params.len().cmp(&self.params.len())
	}
}

impl fmt::Display for MediaType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}; q=", self.mimetype)?;
		// Integral weights keep one decimal so `q=1.0` reads back the same
		if self.quality.is_finite() && self.quality.fract() == 0.0 {
			write!(f, "{:.1}", self.quality)?;
		} else {
			write!(f, "{}", self.quality)?;
		}
		for (key, value) in &self.params {
			write!(f, "; {key}={value}")?;
		}
		Ok(())
	}
}

impl PartialEq for MediaType {
	fn eq(&self, other: &Self) -> bool {
		self.equals(other)
	}
}

impl Eq for MediaType {}

impl PartialEq<str> for MediaType {
	fn eq(&self, other: &str) -> bool {
		self.equals(other)
	}
}

impl PartialEq<&str> for MediaType {
	fn eq(&self, other: &&str) -> bool {
		self.equals(*other)
	}
}

impl PartialEq<String> for MediaType {
	fn eq(&self, other: &String) -> bool {
		self.equals(other)
	}
}

/// Splits `type/subtype` on the first `/`, rejecting empty halves
fn split_mimetype(raw: &str) -> Result<(&str, &str)> {
	let (mediatype, subtype) = raw.split_once('/').unwrap_or((raw, ""));
	if mediatype.is_empty() {
		return Err(NegotiationError::InvalidMediaType(raw.to_string()));
	}
	if subtype.is_empty() {
		return Err(NegotiationError::InvalidSubtype(raw.to_string()));
	}
	Ok((mediatype, subtype))
}
