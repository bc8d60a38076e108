//! Property bags and builder arguments.

use indexmap::IndexMap;
use indexmap::map::{IntoIter, Iter};

use crate::value::PropValue;

/// Insertion-ordered mapping from property name to value.
///
/// Inserting a key that is already present replaces the value but keeps the
/// key at its original position, matching how object literals behave.
///
/// ## Example
///
/// ```
/// use tagsmith_core::{PropertyBag, props};
///
/// let bag = PropertyBag::new()
///     .prop("title", "my title")
///     .prop("disabled", true);
/// assert_eq!(bag.len(), 2);
///
/// let same = props! { "title" => "my title", "disabled" => true };
/// assert_eq!(same.keys().collect::<Vec<_>>(), vec!["title", "disabled"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropertyBag {
	entries: IndexMap<String, PropValue>,
}

impl PropertyBag {
	/// Creates an empty bag.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty bag with room for `capacity` entries.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			entries: IndexMap::with_capacity(capacity),
		}
	}

	/// Adds a property and returns the bag (builder style).
	pub fn prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
		self.insert(key, value);
		self
	}

	/// Inserts a property, returning the previous value for that key.
	pub fn insert(
		&mut self,
		key: impl Into<String>,
		value: impl Into<PropValue>,
	) -> Option<PropValue> {
		self.entries.insert(key.into(), value.into())
	}

	/// Returns the value stored under `key`.
	pub fn get(&self, key: &str) -> Option<&PropValue> {
		self.entries.get(key)
	}

	/// Returns `true` if the bag holds `key`.
	pub fn contains_key(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	/// Number of entries, nullish ones included.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if the bag has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over keys in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	/// Iterates over entries in insertion order.
	pub fn iter(&self) -> Iter<'_, String, PropValue> {
		self.entries.iter()
	}
}

impl<K, V> FromIterator<(K, V)> for PropertyBag
where
	K: Into<String>,
	V: Into<PropValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut bag = PropertyBag::new();
		bag.extend(iter);
		bag
	}
}

impl<K, V> Extend<(K, V)> for PropertyBag
where
	K: Into<String>,
	V: Into<PropValue>,
{
	fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
		for (key, value) in iter {
			self.insert(key, value);
		}
	}
}

impl IntoIterator for PropertyBag {
	type Item = (String, PropValue);
	type IntoIter = IntoIter<String, PropValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

impl<'a> IntoIterator for &'a PropertyBag {
	type Item = (&'a String, &'a PropValue);
	type IntoIter = Iter<'a, String, PropValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

/// One positional argument to the builder.
#[derive(Debug, Clone)]
pub enum Arg {
	/// Inner content, inserted verbatim without escaping.
	Content(String),
	/// Attributes, style, dataset, id and class overrides.
	Props(PropertyBag),
	/// Null or absent argument.
	Skip,
}

impl From<&str> for Arg {
	fn from(value: &str) -> Self {
		Arg::Content(value.to_string())
	}
}

impl From<String> for Arg {
	fn from(value: String) -> Self {
		Arg::Content(value)
	}
}

impl From<&String> for Arg {
	fn from(value: &String) -> Self {
		Arg::Content(value.clone())
	}
}

impl From<PropertyBag> for Arg {
	fn from(value: PropertyBag) -> Self {
		Arg::Props(value)
	}
}

impl From<()> for Arg {
	fn from(_: ()) -> Self {
		Arg::Skip
	}
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
	fn from(value: Option<T>) -> Self {
		value.map_or(Arg::Skip, Into::into)
	}
}

/// Builds a [`PropertyBag`] from `key => value` pairs.
///
/// Values go through [`Into<PropValue>`](crate::PropValue), so nested bags
/// (for `style` and `dataset`) are written with a nested `props!`.
///
/// ```
/// use tagsmith_core::props;
///
/// let bag = props! {
///     "className" => "bar baz",
///     "style" => props! { "fontFamily" => "Arial" },
/// };
/// assert!(bag.contains_key("style"));
/// ```
#[macro_export]
macro_rules! props {
	() => {
		$crate::PropertyBag::new()
	};
	($($key:expr => $value:expr),+ $(,)?) => {{
		let mut bag = $crate::PropertyBag::new();
		$(
			bag.insert($key, $value);
		)+
		bag
	}};
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_insert_preserves_order() {
		let bag = props! { "b" => 1, "a" => 2, "c" => 3 };
		assert_eq!(bag.keys().collect::<Vec<_>>(), vec!["b", "a", "c"]);
	}

	#[rstest]
	fn test_reinsert_keeps_position_and_replaces_value() {
		let mut bag = props! { "id" => "first", "title" => "t" };
		let previous = bag.insert("id", "second");

		assert!(matches!(previous, Some(PropValue::Str(ref s)) if s == "first"));
		assert_eq!(bag.keys().collect::<Vec<_>>(), vec!["id", "title"]);
		assert!(matches!(bag.get("id"), Some(PropValue::Str(s)) if s == "second"));
	}

	#[rstest]
	fn test_from_iterator() {
		let bag: PropertyBag = vec![("role", "button"), ("type", "submit")]
			.into_iter()
			.collect();
		assert_eq!(bag.len(), 2);
		assert!(bag.contains_key("role"));
	}

	#[rstest]
	fn test_empty_props_macro() {
		let bag = props! {};
		assert!(bag.is_empty());
	}

	#[rstest]
	fn test_arg_conversions() {
		assert!(matches!(Arg::from("child"), Arg::Content(ref s) if s == "child"));
		assert!(matches!(Arg::from(String::new()), Arg::Content(ref s) if s.is_empty()));
		assert!(matches!(Arg::from(None::<PropertyBag>), Arg::Skip));
		assert!(matches!(Arg::from(()), Arg::Skip));
		assert!(matches!(Arg::from(Some(props! {})), Arg::Props(_)));
	}
}
