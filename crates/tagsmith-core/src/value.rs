//! Property values and attribute coercion.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::props::PropertyBag;

/// A function-valued property.
///
/// Functions cannot be serialized into markup. The builder drops them and
/// reports the key to its [`DiagnosticSink`](crate::DiagnosticSink); the
/// wrapped closure is kept so that callers who inspect a bag can still invoke
/// it.
#[derive(Clone)]
pub struct Callback(Arc<dyn Fn() + Send + Sync + 'static>);

impl Callback {
	/// Wraps a closure.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn() + Send + Sync + 'static,
	{
		Self(Arc::new(f))
	}

	/// Invokes the wrapped closure.
	pub fn call(&self) {
		(self.0)()
	}
}

impl fmt::Debug for Callback {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Callback(..)")
	}
}

/// A single value inside a [`PropertyBag`].
#[derive(Debug, Clone, Default)]
pub enum PropValue {
	/// Explicit null. Always dropped.
	Null,
	/// Absent value. Always dropped.
	#[default]
	Undefined,
	/// Rendered as the literal `"true"` or `"false"`.
	Bool(bool),
	/// Integer number.
	Int(i64),
	/// Floating point number.
	Float(f64),
	/// Text, rendered verbatim.
	Str(String),
	/// Nested mapping, consumed by the `style` and `dataset` keys.
	Map(PropertyBag),
	/// Function value. Dropped and reported.
	Function(Callback),
}

impl PropValue {
	/// Creates a function value from a closure.
	pub fn function<F>(f: F) -> Self
	where
		F: Fn() + Send + Sync + 'static,
	{
		PropValue::Function(Callback::new(f))
	}

	/// Returns `true` for `Null` and `Undefined`.
	pub fn is_nullish(&self) -> bool {
		matches!(self, PropValue::Null | PropValue::Undefined)
	}

	/// Returns `true` for function values.
	pub fn is_function(&self) -> bool {
		matches!(self, PropValue::Function(_))
	}

	/// Returns the string form used for attribute values.
	///
	/// Booleans become `"true"`/`"false"` rather than following HTML
	/// boolean-attribute presence semantics. Nullish values, nested mappings
	/// and functions have no attribute form and yield `None`.
	///
	/// # Examples
	///
	/// ```
	/// use tagsmith_core::PropValue;
	///
	/// assert_eq!(PropValue::Bool(false).attribute_value().as_deref(), Some("false"));
	/// assert_eq!(PropValue::Int(42).attribute_value().as_deref(), Some("42"));
	/// assert_eq!(PropValue::Null.attribute_value(), None);
	/// ```
	pub fn attribute_value(&self) -> Option<Cow<'_, str>> {
		match self {
			PropValue::Str(s) => Some(Cow::Borrowed(s.as_str())),
			PropValue::Bool(true) => Some(Cow::Borrowed("true")),
			PropValue::Bool(false) => Some(Cow::Borrowed("false")),
			PropValue::Int(n) => Some(Cow::Owned(n.to_string())),
			PropValue::Float(n) => Some(Cow::Owned(format_float(*n))),
			PropValue::Null | PropValue::Undefined | PropValue::Map(_) | PropValue::Function(_) => {
				None
			}
		}
	}

	/// Short name of the value kind, used in diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			PropValue::Null => "null",
			PropValue::Undefined => "undefined",
			PropValue::Bool(_) => "boolean",
			PropValue::Int(_) | PropValue::Float(_) => "number",
			PropValue::Str(_) => "string",
			PropValue::Map(_) => "object",
			PropValue::Function(_) => "function",
		}
	}
}

/// Formats a float the way script engines stringify numbers.
///
/// Integral values lose their fraction, infinities are spelled out and
/// negative zero is `0`. Magnitudes from `1e21` up and below `1e-6` switch to
/// exponent notation with an explicit sign (`1e+21`, `1.5e-7`).
fn format_float(n: f64) -> String {
	if n.is_nan() {
		"NaN".to_string()
	} else if n.is_infinite() {
		if n.is_sign_positive() {
			"Infinity".to_string()
		} else {
			"-Infinity".to_string()
		}
	} else if n == 0.0 {
		"0".to_string()
	} else if n.abs() >= 1e21 || n.abs() < 1e-6 {
		let exp = format!("{n:e}");
		match exp.split_once('e') {
			Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
			_ => exp,
		}
	} else {
		n.to_string()
	}
}

impl From<&str> for PropValue {
	fn from(value: &str) -> Self {
		PropValue::Str(value.to_string())
	}
}

impl From<String> for PropValue {
	fn from(value: String) -> Self {
		PropValue::Str(value)
	}
}

impl From<&String> for PropValue {
	fn from(value: &String) -> Self {
		PropValue::Str(value.clone())
	}
}

impl From<Cow<'_, str>> for PropValue {
	fn from(value: Cow<'_, str>) -> Self {
		PropValue::Str(value.into_owned())
	}
}

impl From<bool> for PropValue {
	fn from(value: bool) -> Self {
		PropValue::Bool(value)
	}
}

macro_rules! impl_from_int {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for PropValue {
				fn from(value: $ty) -> Self {
					PropValue::Int(i64::from(value))
				}
			}
		)*
	};
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for PropValue {
	fn from(value: f32) -> Self {
		PropValue::Float(f64::from(value))
	}
}

impl From<f64> for PropValue {
	fn from(value: f64) -> Self {
		PropValue::Float(value)
	}
}

impl From<PropertyBag> for PropValue {
	fn from(value: PropertyBag) -> Self {
		PropValue::Map(value)
	}
}

impl From<Callback> for PropValue {
	fn from(value: Callback) -> Self {
		PropValue::Function(value)
	}
}

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(PropValue::Null, Into::into)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::sync::atomic::{AtomicUsize, Ordering};

	#[rstest]
	#[case(PropValue::Bool(true), Some("true"))]
	#[case(PropValue::Bool(false), Some("false"))]
	#[case(PropValue::Int(-7), Some("-7"))]
	#[case(PropValue::Float(1.5), Some("1.5"))]
	#[case(PropValue::Float(2.0), Some("2"))]
	#[case(PropValue::Float(-0.0), Some("0"))]
	#[case(PropValue::Float(f64::INFINITY), Some("Infinity"))]
	#[case(PropValue::Float(f64::NEG_INFINITY), Some("-Infinity"))]
	#[case(PropValue::Float(f64::NAN), Some("NaN"))]
	#[case(PropValue::Float(1e21), Some("1e+21"))]
	#[case(PropValue::Float(-2.5e30), Some("-2.5e+30"))]
	#[case(PropValue::Float(1e20), Some("100000000000000000000"))]
	#[case(PropValue::Float(1e-7), Some("1e-7"))]
	#[case(PropValue::Float(1.5e-7), Some("1.5e-7"))]
	#[case(PropValue::Float(0.000001), Some("0.000001"))]
	#[case(PropValue::Str("my title".to_string()), Some("my title"))]
	#[case(PropValue::Str(String::new()), Some(""))]
	#[case(PropValue::Null, None)]
	#[case(PropValue::Undefined, None)]
	#[case(PropValue::Map(PropertyBag::new()), None)]
	fn test_attribute_value(#[case] value: PropValue, #[case] expected: Option<&str>) {
		assert_eq!(value.attribute_value().as_deref(), expected);
	}

	#[rstest]
	fn test_function_has_no_attribute_value() {
		let value = PropValue::function(|| {});
		assert!(value.is_function());
		assert_eq!(value.attribute_value(), None);
		assert_eq!(value.kind(), "function");
	}

	#[rstest]
	fn test_callback_call_invokes_closure() {
		let calls = Arc::new(AtomicUsize::new(0));
		let counter = Arc::clone(&calls);
		let callback = Callback::new(move || {
			counter.fetch_add(1, Ordering::SeqCst);
		});

		callback.call();
		callback.clone().call();

		assert_eq!(calls.load(Ordering::SeqCst), 2);
		assert_eq!(format!("{:?}", callback), "Callback(..)");
	}

	#[rstest]
	fn test_option_conversion() {
		assert!(PropValue::from(None::<&str>).is_nullish());
		assert!(matches!(PropValue::from(Some(3u8)), PropValue::Int(3)));
		assert!(matches!(PropValue::from(Some("x")), PropValue::Str(ref s) if s == "x"));
	}

	#[rstest]
	fn test_default_is_undefined() {
		assert!(matches!(PropValue::default(), PropValue::Undefined));
		assert!(PropValue::default().is_nullish());
	}
}
