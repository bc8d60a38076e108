//! Selector parsing.
//!
//! A selector has the shape `tag#id.class1.class2`; every segment is
//! optional. Parsing is best-effort and never fails: empty segments are
//! skipped, a later `#id` replaces an earlier one, and tag names are not
//! validated.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Tag used when the selector does not name one.
pub const DEFAULT_TAG: &str = "div";

const DELIMITERS: [char; 2] = ['#', '.'];

/// Tag, id and classes extracted from a selector string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSelector {
	/// Element tag. Never empty.
	pub tag: String,
	/// Element id, empty when the selector has none.
	pub id: String,
	/// Classes in selector order.
	pub classes: Vec<String>,
}

impl ParsedSelector {
	/// Parses `selector`, falling back to [`DEFAULT_TAG`] when it has no tag.
	///
	/// # Examples
	///
	/// ```
	/// use tagsmith_core::ParsedSelector;
	///
	/// let parsed = ParsedSelector::parse("section#main.foo.bar");
	/// assert_eq!(parsed.tag, "section");
	/// assert_eq!(parsed.id, "main");
	/// assert_eq!(parsed.classes, vec!["foo", "bar"]);
	///
	/// assert_eq!(ParsedSelector::parse("").tag, "div");
	/// ```
	pub fn parse(selector: &str) -> Self {
		Self::parse_with_default(selector, DEFAULT_TAG)
	}

	/// Parses `selector`, falling back to `default_tag` when it has no tag.
	///
	/// A blank `default_tag` is ignored in favour of [`DEFAULT_TAG`] so the
	/// resulting tag is never empty.
	pub fn parse_with_default(selector: &str, default_tag: &str) -> Self {
		let (tag, mut rest) = match selector.find(DELIMITERS) {
			Some(pos) => selector.split_at(pos),
			None => (selector, ""),
		};

		let tag = if !tag.is_empty() {
			tag
		} else if !default_tag.trim().is_empty() {
			default_tag
		} else {
			DEFAULT_TAG
		};

		let mut id = String::new();
		let mut classes = Vec::new();

		// `rest` is either empty or starts with a single-byte delimiter.
		while let Some(delimiter) = rest.chars().next() {
			let body = &rest[1..];
			let end = body.find(DELIMITERS).unwrap_or(body.len());
			let value = &body[..end];
			rest = &body[end..];

			if value.is_empty() {
				continue;
			}
			if delimiter == '#' {
				id = value.to_string();
			} else {
				classes.extend(value.split_whitespace().map(str::to_string));
			}
		}

		Self {
			tag: tag.to_string(),
			id,
			classes,
		}
	}

	/// Returns `true` for custom element tags (names containing a hyphen).
	pub fn is_custom_element(&self) -> bool {
		self.tag.contains('-')
	}
}

impl Default for ParsedSelector {
	fn default() -> Self {
		Self::parse("")
	}
}

impl FromStr for ParsedSelector {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self::parse(s))
	}
}

impl fmt::Display for ParsedSelector {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.tag)?;
		if !self.id.is_empty() {
			write!(f, "#{}", self.id)?;
		}
		for class in &self.classes {
			write!(f, ".{}", class)?;
		}
		Ok(())
	}
}

/// Parses a selector with the default fallback tag.
pub fn parse_selector(selector: &str) -> ParsedSelector {
	ParsedSelector::parse(selector)
}
