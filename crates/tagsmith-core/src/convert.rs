//! Key conversion helpers shared by the normalizer.
//!
//! These mirror the browser conventions for `element.style` and
//! `element.dataset`: camelCase names map to kebab-case, and CSS custom
//! properties (`--name`) are left untouched.

use std::borrow::Cow;

/// Converts a camelCase key to kebab-case.
///
/// A hyphen is inserted before every ASCII uppercase letter and the whole key
/// is then lowercased, non-ASCII letters included. Keys without any uppercase
/// letter are returned borrowed.
///
/// # Examples
///
/// ```
/// use tagsmith_core::convert::to_kebab_case;
///
/// assert_eq!(to_kebab_case("backgroundColor"), "background-color");
/// assert_eq!(to_kebab_case("isReady"), "is-ready");
/// assert_eq!(to_kebab_case("color"), "color");
/// ```
pub fn to_kebab_case(key: &str) -> Cow<'_, str> {
	if !key.contains(char::is_uppercase) {
		return Cow::Borrowed(key);
	}

	let mut kebab = String::with_capacity(key.len() + 4);
	for c in key.chars() {
		if c.is_ascii_uppercase() {
			kebab.push('-');
		}
		kebab.push(c);
	}
	Cow::Owned(kebab.to_lowercase())
}

/// Converts a style object key to a CSS property name.
///
/// Custom properties (`--my-color`) are kept verbatim; everything else goes
/// through [`to_kebab_case`].
///
/// # Examples
///
/// ```
/// use tagsmith_core::convert::css_property_name;
///
/// assert_eq!(css_property_name("fontFamily"), "font-family");
/// assert_eq!(css_property_name("--mainColor"), "--mainColor");
/// ```
pub fn css_property_name(key: &str) -> Cow<'_, str> {
	if key.starts_with("--") {
		Cow::Borrowed(key)
	} else {
		to_kebab_case(key)
	}
}

/// Converts a dataset key to its `data-*` attribute name.
pub fn dataset_attribute_name(key: &str) -> String {
	format!("data-{}", to_kebab_case(key))
}

/// Strips leading and trailing semicolons and whitespace from raw CSS text.
///
/// Interior declarations are left as written.
///
/// # Examples
///
/// ```
/// use tagsmith_core::convert::normalize_css_text;
///
/// assert_eq!(normalize_css_text(" ;color: red; "), "color: red");
/// assert_eq!(normalize_css_text(";;"), "");
/// ```
pub fn normalize_css_text(css: &str) -> &str {
	css.trim_matches(|c: char| c == ';' || c.is_whitespace())
}
