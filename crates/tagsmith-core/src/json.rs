//! `serde_json` interop.
//!
//! Lets property bags come from JSON documents (request payloads, fixture
//! files, configuration) instead of being assembled in code. Object key order
//! is preserved, so attribute order follows the document.
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//! use tagsmith_core::Builder;
//!
//! let html = Builder::new()
//!     .build_json("span#myid.foo", &[json!({
//!         "className": "bar",
//!         "dataset": { "helloWorld": "hi" },
//!         "title": "my title"
//!     })])
//!     .unwrap();
//!
//! assert_eq!(
//!     html,
//!     r#"<span id="myid" class="foo bar" data-hello-world="hi" title="my title"></span>"#
//! );
//! ```

use serde::de::{Deserialize, Deserializer, Error as _};
use serde_json::{Map, Number, Value};

use crate::error::ConversionError;
use crate::props::{Arg, PropertyBag};
use crate::value::PropValue;

fn number_value(number: &Number) -> PropValue {
	match number.as_i64() {
		Some(n) => PropValue::Int(n),
		// u64 beyond i64 and every non-integer land here
		None => PropValue::Float(number.as_f64().unwrap_or(f64::NAN)),
	}
}

fn convert_value(path: &str, value: Value) -> Result<PropValue, ConversionError> {
	match value {
		Value::Null => Ok(PropValue::Null),
		Value::Bool(b) => Ok(PropValue::Bool(b)),
		Value::Number(n) => Ok(number_value(&n)),
		Value::String(s) => Ok(PropValue::Str(s)),
		Value::Object(map) => convert_map(Some(path), map).map(PropValue::Map),
		Value::Array(items) => {
			let mut joined = String::new();
			join_array(path, items, &mut joined)?;
			Ok(PropValue::Str(joined))
		}
	}
}

fn join_array(path: &str, items: Vec<Value>, out: &mut String) -> Result<(), ConversionError> {
	for (i, item) in items.into_iter().enumerate() {
		if i > 0 {
			out.push(',');
		}
		match item {
			Value::Null => {}
			Value::Bool(b) => out.push_str(if b { "true" } else { "false" }),
			Value::Number(n) => {
				if let Some(n) = number_value(&n).attribute_value() {
					out.push_str(&n);
				}
			}
			Value::String(s) => out.push_str(&s),
			Value::Array(nested) => join_array(path, nested, out)?,
			Value::Object(_) => {
				return Err(ConversionError::UnsupportedValue {
					key: path.to_string(),
					kind: "object",
				});
			}
		}
	}
	Ok(())
}

fn convert_map(
	parent: Option<&str>,
	map: Map<String, Value>,
) -> Result<PropertyBag, ConversionError> {
	let mut bag = PropertyBag::with_capacity(map.len());
	for (key, value) in map {
		let path = match parent {
			Some(parent) => format!("{parent}.{key}"),
			None => key.clone(),
		};
		let value = convert_value(&path, value)?;
		bag.insert(key, value);
	}
	Ok(bag)
}

impl TryFrom<Map<String, Value>> for PropertyBag {
	type Error = ConversionError;

	fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
		convert_map(None, map)
	}
}

impl TryFrom<Value> for PropValue {
	type Error = ConversionError;

	/// A rejected bare value is reported with an empty key.
	fn try_from(value: Value) -> Result<Self, Self::Error> {
		convert_value("", value)
	}
}

impl TryFrom<Value> for Arg {
	type Error = ConversionError;

	/// Strings become content and objects become property bags. Every other
	/// top-level kind is skipped.
	fn try_from(value: Value) -> Result<Self, Self::Error> {
		match value {
			Value::String(s) => Ok(Arg::Content(s)),
			Value::Object(map) => PropertyBag::try_from(map).map(Arg::Props),
			Value::Null => Ok(Arg::Skip),
			other => {
				tracing::debug!(
					value = %other,
					"Skipping argument that is neither content nor props"
				);
				Ok(Arg::Skip)
			}
		}
	}
}

impl<'de> Deserialize<'de> for PropertyBag {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let map = Map::<String, Value>::deserialize(deserializer)?;
		PropertyBag::try_from(map).map_err(D::Error::custom)
	}
}
