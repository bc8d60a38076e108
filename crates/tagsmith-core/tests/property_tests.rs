//! Property-based tests for selector parsing and attribute merging.

use proptest::prelude::*;
use rstest::*;
use tagsmith_core::{Arg, PropValue, ParsedSelector, build, props};

fn no_args() -> Vec<Arg> {
	Vec::new()
}

proptest! {
	/// Test: tag-only selectors
	///
	/// Category: Property
	/// A selector without delimiters is the tag itself.
	#[rstest]
	fn prop_plain_selector_is_tag(tag in "[a-z][a-z0-9-]{0,12}") {
		let html = build(&tag, no_args());
		prop_assert_eq!(html, format!("<{tag}></{tag}>"));
	}

	/// Test: selector id
	///
	/// Category: Property
	/// `tag#id` always renders the id, and a later `id` prop replaces it.
	#[rstest]
	fn prop_id_override(id in "[a-z][a-z0-9_-]{0,10}", other in "[a-z][a-z0-9_-]{0,10}") {
		let from_selector = build(format!("div#{id}"), no_args());
		let expected_selector_id = format!(r#"id="{}""#, id);
		prop_assert!(from_selector.contains(&expected_selector_id));

		let overridden = build(format!("div#{id}"), [props! { "id" => other.clone() }]);
		prop_assert_eq!(overridden, format!(r#"<div id="{other}"></div>"#));
	}

	/// Test: class ordering
	///
	/// Category: Property
	/// Selector classes come first, then property classes, without dedup.
	#[rstest]
	fn prop_class_order(
		selector_classes in prop::collection::vec("[a-z]{1,6}", 1..5),
		prop_classes in prop::collection::vec("[a-z]{1,6}", 0..5),
	) {
		let selector = format!("p.{}", selector_classes.join("."));
		let html = build(&selector, [props! { "className" => prop_classes.join(" ") }]);

		let all: Vec<String> = selector_classes.iter().chain(&prop_classes).cloned().collect();
		prop_assert_eq!(html, format!(r#"<p class="{}"></p>"#, all.join(" ")));
	}

	/// Test: boolean coercion
	///
	/// Category: Property
	/// Booleans always render as the literal strings.
	#[rstest]
	fn prop_boolean_coercion(flag in any::<bool>()) {
		let html = build("input", [props! { "checked" => flag }]);
		prop_assert_eq!(html, format!(r#"<input checked="{flag}"></input>"#));
	}

	/// Test: nullish values
	///
	/// Category: Property
	/// Null and undefined never reach the output.
	#[rstest]
	fn prop_nullish_dropped(key in "[a-z]{1,8}", use_null in any::<bool>()) {
		let value = if use_null { PropValue::Null } else { PropValue::Undefined };
		let html = build("div", [props! { key.clone() => value }]);
		prop_assert_eq!(html, "<div></div>");
	}

	/// Test: selector round trip
	///
	/// Category: Property
	/// Displaying a parsed selector and parsing it again is stable.
	#[rstest]
	fn prop_selector_display_stable(
		tag in "[a-z]{1,6}",
		id in proptest::option::of("[a-z]{1,6}"),
		classes in prop::collection::vec("[a-z]{1,6}", 0..4),
	) {
		let mut selector = tag.clone();
		if let Some(id) = &id {
			selector.push('#');
			selector.push_str(id);
		}
		for class in &classes {
			selector.push('.');
			selector.push_str(class);
		}

		let parsed = ParsedSelector::parse(&selector);
		prop_assert_eq!(parsed.to_string(), selector.clone());
		prop_assert_eq!(ParsedSelector::parse(&parsed.to_string()), parsed);
	}
}
