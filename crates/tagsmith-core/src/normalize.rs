//! Property normalization.
//!
//! Walks the builder arguments in call order and folds them into a
//! [`NormalizedProps`]: the running id, the class list, the two style part
//! lists, the attribute set and the inner content. Keys are dispatched
//! explicitly:
//!
//! | Key                   | Handling                                              |
//! |-----------------------|-------------------------------------------------------|
//! | `style`               | string: trimmed CSS text; mapping: `key: value` parts |
//! | `dataset`             | mapping entries become `data-<kebab-key>`             |
//! | `id`                  | replaces the running id                               |
//! | `class`, `className`  | whitespace-split, appended                            |
//! | `data-*`, `aria-*`    | recorded under the literal key                        |
//! | anything else         | recorded under the literal key                        |
//!
//! Nullish values are skipped everywhere. Function values are skipped and
//! reported to the [`DiagnosticSink`].

use indexmap::IndexMap;
use indexmap::map::Iter;

use crate::convert::{css_property_name, dataset_attribute_name, normalize_css_text};
use crate::diagnostics::DiagnosticSink;
use crate::props::{Arg, PropertyBag};
use crate::selector::ParsedSelector;
use crate::value::PropValue;

/// Separator between style declarations in the merged `style` attribute.
pub const STYLE_SEPARATOR: &str = "; ";

/// Generic attributes in first-insertion order.
///
/// Setting an existing name replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
	entries: IndexMap<String, String>,
}

impl AttributeSet {
	/// Creates an empty set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets `name` to `value`.
	pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.entries.insert(name.into(), value.into());
	}

	/// Returns the value for `name`.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.entries.get(name).map(String::as_str)
	}

	/// Number of attributes.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if no attribute was recorded.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over `(name, value)` pairs in insertion order.
	pub fn iter(&self) -> Iter<'_, String, String> {
		self.entries.iter()
	}
}

/// Everything the serializer needs besides the tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedProps {
	/// Final id; not rendered when empty.
	pub id: String,
	/// Selector classes followed by property classes.
	pub classes: Vec<String>,
	/// Declarations from style mappings, in encounter order.
	pub style_object_parts: Vec<String>,
	/// Trimmed CSS text from string styles, in encounter order.
	pub style_string_parts: Vec<String>,
	/// Dataset, `data-*`, `aria-*` and generic attributes.
	pub attributes: AttributeSet,
	/// Raw inner content fragments.
	pub inner: Vec<String>,
}

impl NormalizedProps {
	/// Merged `style` value, or `None` when there is nothing to render.
	///
	/// Mapping-derived declarations always come before string-derived ones.
	pub fn style(&self) -> Option<String> {
		let style = self
			.style_object_parts
			.iter()
			.chain(&self.style_string_parts)
			.map(String::as_str)
			.collect::<Vec<_>>()
			.join(STYLE_SEPARATOR);
		(!style.is_empty()).then_some(style)
	}
}

/// Folds builder arguments into [`NormalizedProps`].
pub struct PropertyNormalizer<'a> {
	sink: &'a dyn DiagnosticSink,
	props: NormalizedProps,
}

impl<'a> PropertyNormalizer<'a> {
	/// Starts from the id and classes of `selector`.
	pub fn new(selector: &ParsedSelector, sink: &'a dyn DiagnosticSink) -> Self {
		Self {
			sink,
			props: NormalizedProps {
				id: selector.id.clone(),
				classes: selector.classes.clone(),
				..NormalizedProps::default()
			},
		}
	}

	/// Processes one argument.
	pub fn push(&mut self, arg: Arg) {
		match arg {
			Arg::Content(content) => self.props.inner.push(content),
			Arg::Props(bag) => self.push_bag(bag),
			Arg::Skip => {}
		}
	}

	/// Processes every entry of a property bag in insertion order.
	pub fn push_bag(&mut self, bag: PropertyBag) {
		for (key, value) in bag {
			self.push_prop(key, value);
		}
	}

	/// Returns the accumulated result.
	pub fn finish(self) -> NormalizedProps {
		self.props
	}

	fn push_prop(&mut self, key: String, value: PropValue) {
		if value.is_nullish() {
			return;
		}
		if value.is_function() {
			self.sink.dropped_function(&key);
			return;
		}

		match (key.as_str(), value) {
			("style", PropValue::Str(css)) => {
				let css = normalize_css_text(&css);
				if !css.is_empty() {
					self.props.style_string_parts.push(css.to_string());
				}
			}
			("style", PropValue::Map(declarations)) => self.push_style_map(declarations),
			("style", other) => {
				tracing::debug!(kind = other.kind(), "Ignoring style value without CSS form");
			}
			("dataset", PropValue::Map(entries)) => self.push_dataset(entries),
			("id", value) => {
				if let Some(id) = value.attribute_value() {
					self.props.id = id.into_owned();
				}
			}
			("class" | "className", value) => {
				if let Some(classes) = value.attribute_value() {
					self.props
						.classes
						.extend(classes.split_whitespace().map(str::to_string));
				}
			}
			(name, value) => self.push_attribute(name, &value),
		}
	}

	fn push_style_map(&mut self, declarations: PropertyBag) {
		for (name, value) in declarations {
			if value.is_nullish() {
				continue;
			}
			if value.is_function() {
				self.sink.dropped_function(&format!("style.{name}"));
				continue;
			}
			match value.attribute_value() {
				Some(value) => self
					.props
					.style_object_parts
					.push(format!("{}: {}", css_property_name(&name), value)),
				None => tracing::debug!(property = %name, "Ignoring nested style value"),
			}
		}
	}

	fn push_dataset(&mut self, entries: PropertyBag) {
		for (name, value) in entries {
			if value.is_nullish() {
				continue;
			}
			if value.is_function() {
				self.sink.dropped_function(&format!("dataset.{name}"));
				continue;
			}
			match value.attribute_value() {
				Some(value) => self
					.props
					.attributes
					.set(dataset_attribute_name(&name), value),
				None => tracing::debug!(key = %name, "Ignoring nested dataset value"),
			}
		}
	}

	/// Generic, `data-*` and `aria-*` keys all land here verbatim; only the
	/// value is coerced.
	fn push_attribute(&mut self, key: &str, value: &PropValue) {
		match value.attribute_value() {
			Some(coerced) => self.props.attributes.set(key, coerced),
			None => tracing::debug!(
				key,
				kind = value.kind(),
				"Ignoring attribute without string form"
			),
		}
	}
}

/// Normalizes `args` on top of the id and classes of `selector`.
pub fn normalize<I>(
	selector: &ParsedSelector,
	args: I,
	sink: &dyn DiagnosticSink,
) -> NormalizedProps
where
	I: IntoIterator,
	I::Item: Into<Arg>,
{
	let mut normalizer = PropertyNormalizer::new(selector, sink);
	for arg in args {
		normalizer.push(arg.into());
	}
	normalizer.finish()
}
