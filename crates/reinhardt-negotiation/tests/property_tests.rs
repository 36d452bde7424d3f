//! Property-based tests for Accept header parsing

use proptest::prelude::*;
use reinhardt_negotiation::{MediaType, best_match, parse};
use rstest::*;
use std::cmp::Ordering;

fn media_range() -> impl Strategy<Value = (String, u8, usize)> {
	(
		prop::sample::select(vec![
			"*/*",
			"text/*",
			"text/html",
			"text/plain",
			"application/json",
			"image/*",
			"image/png",
		]),
		0u8..=10,
		0usize..3,
	)
		.prop_map(|(mimetype, tenths, extra)| (mimetype.to_string(), tenths, extra))
}

/// Renders ranges as a header, tagging each with its position as `i=N`
fn render(ranges: &[(String, u8, usize)]) -> String {
	ranges
		.iter()
		.enumerate()
		.map(|(i, (mimetype, tenths, extra))| {
			let mut range = format!("{mimetype};q={}.{}", tenths / 10, tenths % 10);
			range.push_str(&format!(";i={i}"));
			for n in 0..*extra {
				range.push_str(&format!(";p{n}=v"));
			}
			range
		})
		.collect::<Vec<_>>()
		.join(", ")
}

fn position(media_type: &MediaType) -> usize {
	media_type.param("i").and_then(|i| i.parse().ok()).unwrap()
}

proptest! {
	/// Test: parse output is sorted by descending quality
	///
	/// Category: Property
	#[rstest]
	fn prop_parse_sorted_by_quality(ranges in prop::collection::vec(media_range(), 1..12)) {
		let header = render(&ranges);
		let accepted = parse(Some(header.as_str())).unwrap();

		prop_assert_eq!(accepted.len(), ranges.len());
		for pair in accepted.windows(2) {
			prop_assert!(pair[0].quality() >= pair[1].quality());
			prop_assert_ne!(pair[0].compare(&pair[1]), Ordering::Greater);
		}
	}

	/// Test: equally ranked entries keep header order
	///
	/// Category: Property
	#[rstest]
	fn prop_parse_stable_on_ties(ranges in prop::collection::vec(media_range(), 1..12)) {
		let header = render(&ranges);
		let accepted = parse(Some(header.as_str())).unwrap();

		for pair in accepted.windows(2) {
			if pair[0].compare(&pair[1]) == Ordering::Equal {
				prop_assert!(position(&pair[0]) < position(&pair[1]));
			}
		}
	}

	/// Test: best_match only returns desired candidates with positive quality
	///
	/// Category: Property
	#[rstest]
	fn prop_best_match_is_acceptable(
		ranges in prop::collection::vec(media_range(), 0..8),
		desired in prop::collection::vec(
			prop::sample::select(vec!["text/html", "application/json", "image/png", "text/csv"]),
			0..4,
		),
	) {
		let header = render(&ranges);
		let accepted = parse(Some(header.as_str())).unwrap();

		if let Some(chosen) = best_match(desired.iter().copied(), &accepted) {
			prop_assert!(desired.contains(&chosen));
			prop_assert!(accepted.iter().any(|mt| mt.quality() > 0.0 && mt.matches(chosen)));
		} else {
			for candidate in &desired {
				let granted = accepted.iter().any(|mt| mt.quality() > 0.0 && mt.matches(candidate));
				prop_assert!(!granted);
			}
		}
	}

	/// Test: parse never panics on arbitrary input
	///
	/// Category: Fuzz
	#[rstest]
	fn prop_parse_never_panics(header in "\\PC*") {
		let _ = parse(Some(header.as_str()));
	}
}
