//! Accept header parsing and best-match selection

use crate::error::{NegotiationError, Result};
use crate::media_type::{MediaType, Params};

/// Header name some clients leave in front of the value
const HEADER_PREFIX: &str = "Accept:";

/// Parses an Accept header value into media types, most preferred first
///
/// An absent or empty header yields an empty list. Segments that are blank
/// are skipped, and a malformed `q` value leaves the quality at its previous
/// value. Non-finite weights such as `q=inf` or `q=NaN` count as malformed.
/// Entries that rank equal keep their header order.
///
/// # Errors
///
/// Fails on the first media range with an empty type or subtype, or with a
/// parameter that is not a `key=value` pair. No partial result is returned.
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::parse;
///
/// let accepted = parse(Some("text/html;q=0.8, application/json;q=0.9")).unwrap();
/// assert_eq!(accepted.len(), 2);
/// assert_eq!(accepted[0].mimetype(), "application/json");
/// assert_eq!(accepted[1].quality(), 0.8);
///
/// assert!(parse(None).unwrap().is_empty());
/// assert!(parse(Some("/html")).is_err());
/// ```
pub fn parse(header: Option<&str>) -> Result<Vec<MediaType>> {
	let Some(header) = header.filter(|value| !value.is_empty()) else {
		return Ok(Vec::new());
	};

	let mut media_types = strip_header_name(header)
		.split(',')
		.map(str::trim)
		.filter(|range| !range.is_empty())
		.map(parse_media_range)
		.collect::<Result<Vec<_>>>()?;

	// sort_by is stable
	media_types.sort_by(|a, b| a.compare(b));

	Ok(media_types)
}

/// Picks the desired mimetype the client accepts with the highest quality
///
/// `accepted` must be sorted as returned by [`parse`]. Candidates are tried
/// in the given order, so among candidates reaching the same quality the
/// first one wins. Entries with quality 0 never match.
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::{best_match, parse};
///
/// let accepted = parse(Some("text/html;q=1.0, application/json;q=1.0")).unwrap();
/// assert_eq!(
///     best_match(["application/json", "text/html"], &accepted),
///     Some("application/json")
/// );
///
/// let rejected = parse(Some("text/html;q=0")).unwrap();
/// assert_eq!(best_match(["text/html"], &rejected), None);
/// ```
pub fn best_match<I, S>(desired: I, accepted: &[MediaType]) -> Option<S>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut best_quality = -1.0;
	let mut result = None;

	for mimetype in desired {
		let mut improved = false;
		for client_item in accepted {
			if client_item.quality() <= best_quality {
				break;
			}
			if client_item.quality() > 0.0 && client_item.matches(mimetype.as_ref()) {
				best_quality = client_item.quality();
				improved = true;
			}
		}
		if improved {
			result = Some(mimetype);
		}
	}

	result
}

/// Same as [`best_match`], returning `default` when nothing matches
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::{best_match_or, parse};
///
/// let accepted = parse(Some("image/*")).unwrap();
/// assert_eq!(best_match_or(["text/html"], &accepted, "text/plain"), "text/plain");
/// assert_eq!(best_match_or(["image/webp"], &accepted, "text/plain"), "image/webp");
/// ```
pub fn best_match_or<I, S>(desired: I, accepted: &[MediaType], default: S) -> S
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	best_match(desired, accepted).unwrap_or(default)
}

/// Drops a leading `Accept:` plus one whitespace character
fn strip_header_name(header: &str) -> &str {
	header
		.strip_prefix(HEADER_PREFIX)
		.and_then(|rest| {
			let mut chars = rest.chars();
			chars
				.next()
				.filter(|c| c.is_whitespace())
				.map(|_| chars.as_str())
		})
		.unwrap_or(header)
}

/// Parses one `type/subtype;key=value;...` segment
fn parse_media_range(range: &str) -> Result<MediaType> {
	let mut parts = range.split(';');
	let raw = parts.next().unwrap_or_default().trim();

	let mut quality = 1.0;
	let mut params = Params::new();

	for part in parts {
		let part = part.trim();
		if part.is_empty() {
			continue;
		}

		let Some((key, value)) = part.split_once('=') else {
			return Err(NegotiationError::InvalidParameter(part.to_string()));
		};
		let key = key.trim();
		let value = unquote(value.trim());

		if key == "q" {
			if let Ok(q) = value.parse::<f64>()
				&& q.is_finite()
			{
				quality = q;
			}
		} else {
			params.insert(key.to_string(), value.to_string());
		}
	}

	MediaType::with_params(raw, quality, params)
}

/// Removes one layer of matching `"` or `'` quotes
fn unquote(value: &str) -> &str {
	for quote in ['"', '\''] {
		if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
			return &value[1..value.len() - 1];
		}
	}
	value
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("Accept: text/html", "text/html")]
	#[case("Accept:\ttext/html", "text/html")]
	#[case("Accept:text/html", "Accept:text/html")]
	#[case("text/html", "text/html")]
	fn test_strip_header_name(#[case] header: &str, #[case] expected: &str) {
		assert_eq!(strip_header_name(header), expected);
	}

	#[rstest]
	#[case("\"utf-8\"", "utf-8")]
	#[case("'utf-8'", "utf-8")]
	#[case("\"\"utf-8\"\"", "\"utf-8\"")]
	#[case("\"utf-8'", "\"utf-8'")]
	#[case("\"", "\"")]
	#[case("plain", "plain")]
	fn test_unquote(#[case] value: &str, #[case] expected: &str) {
		assert_eq!(unquote(value), expected);
	}

	#[rstest]
	fn test_parse_media_range_collects_params() {
		let mt = parse_media_range("text/html; level=1; q=0.4; charset=\"utf-8\"").unwrap();
		assert_eq!(mt.quality(), 0.4);
		let params: Vec<_> = mt
			.params()
			.iter()
			.map(|(k, v)| (k.as_str(), v.as_str()))
			.collect();
		assert_eq!(params, vec![("level", "1"), ("charset", "utf-8")]);
	}

	#[rstest]
	fn test_parse_media_range_value_keeps_later_equals() {
		let mt = parse_media_range("text/html;token=a=b").unwrap();
		assert_eq!(mt.param("token"), Some("a=b"));
	}

	#[rstest]
	#[case("text/html;q=abc")]
	#[case("text/html;q=")]
	#[case("text/html;q=NaN")]
	#[case("text/html;q=inf")]
	fn test_parse_media_range_ignores_bad_quality(#[case] range: &str) {
		assert_eq!(parse_media_range(range).unwrap().quality(), 1.0);
	}

	#[rstest]
	fn test_parse_media_range_bad_quality_keeps_earlier_value() {
		let mt = parse_media_range("text/html;q=0.3;q=oops").unwrap();
		assert_eq!(mt.quality(), 0.3);
	}

	#[rstest]
	fn test_parse_media_range_skips_blank_params() {
		let mt = parse_media_range("text/html;;q=0.5;").unwrap();
		assert_eq!(mt.quality(), 0.5);
		assert!(mt.params().is_empty());
	}

	#[rstest]
	fn test_parse_media_range_rejects_bare_param() {
		assert_eq!(
			parse_media_range("text/html;level"),
			Err(NegotiationError::InvalidParameter("level".to_string()))
		);
	}

	#[rstest]
	fn test_best_match_stops_at_lower_quality() {
		let accepted = parse(Some("application/json;q=0.9, text/html;q=0.5")).unwrap();
		assert_eq!(
			best_match(["text/html", "application/json"], &accepted),
			Some("application/json")
		);
	}
}
