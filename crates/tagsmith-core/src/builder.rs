//! The builder: selector parsing, normalization and serialization in one call.

use std::fmt;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

use crate::diagnostics::{DiagnosticSink, NoopSink};
use crate::error::ConfigError;
use crate::normalize::normalize;
use crate::props::Arg;
use crate::render::render;
use crate::selector::{DEFAULT_TAG, ParsedSelector};

/// Options for [`Builder`].
///
/// Deserializes with every field optional, so a partial document only
/// overrides what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderOptions {
	/// Tag used when the selector has none.
	pub default_tag: String,
	/// Whether dropped function values are reported to the sink.
	pub report_dropped_functions: bool,
}

impl Default for BuilderOptions {
	fn default() -> Self {
		Self {
			default_tag: DEFAULT_TAG.to_string(),
			report_dropped_functions: true,
		}
	}
}

impl BuilderOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the fallback tag.
	pub fn default_tag(mut self, tag: impl Into<String>) -> Self {
		self.default_tag = tag.into();
		self
	}

	/// Enables or disables sink reporting.
	pub fn report_dropped_functions(mut self, enable: bool) -> Self {
		self.report_dropped_functions = enable;
		self
	}

	/// Checks that the options can be used as-is.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.default_tag.trim().is_empty() {
			return Err(ConfigError::EmptyDefaultTag);
		}
		Ok(())
	}

	/// Loads and validates options from a JSON document.
	///
	/// # Examples
	///
	/// ```
	/// use tagsmith_core::BuilderOptions;
	///
	/// let options = BuilderOptions::from_json_str(r#"{ "default_tag": "span" }"#).unwrap();
	/// assert_eq!(options.default_tag, "span");
	/// assert!(options.report_dropped_functions);
	///
	/// assert!(BuilderOptions::from_json_str(r#"{ "default_tag": "" }"#).is_err());
	/// ```
	#[cfg(feature = "json")]
	pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
		let options: Self =
			serde_json::from_str(json).map_err(|e| ConfigError::Parse(Box::new(e)))?;
		options.validate()?;
		Ok(options)
	}
}

/// Builds element markup from a selector and arguments.
///
/// A builder holds no per-call state and can be shared between threads.
///
/// ## Example
///
/// ```
/// use tagsmith_core::{Builder, BuilderOptions, TracingSink, props};
///
/// let builder = Builder::with_options(BuilderOptions::new().default_tag("span"))
///     .sink(TracingSink);
///
/// let html = builder.build(".note", [props! { "role" => "note" }]);
/// assert_eq!(html, r#"<span class="note" role="note"></span>"#);
/// ```
#[derive(Clone)]
pub struct Builder {
	options: BuilderOptions,
	sink: Arc<dyn DiagnosticSink>,
}

impl Default for Builder {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for Builder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Builder")
			.field("options", &self.options)
			.finish_non_exhaustive()
	}
}

impl Builder {
	/// Creates a builder with default options and a no-op sink.
	pub fn new() -> Self {
		Self::with_options(BuilderOptions::default())
	}

	/// Creates a builder with custom options and a no-op sink.
	pub fn with_options(options: BuilderOptions) -> Self {
		Self {
			options,
			sink: Arc::new(NoopSink),
		}
	}

	/// Replaces the diagnostic sink.
	pub fn sink<S>(mut self, sink: S) -> Self
	where
		S: DiagnosticSink + 'static,
	{
		self.sink = Arc::new(sink);
		self
	}

	/// Returns the options.
	pub fn options(&self) -> &BuilderOptions {
		&self.options
	}

	/// Builds a single element.
	///
	/// Arguments are applied in order: strings become inner content, bags
	/// contribute attributes, and `None`/[`Arg::Skip`] are ignored. This never
	/// fails.
	pub fn build<S, I>(&self, selector: S, args: I) -> String
	where
		S: AsRef<str>,
		I: IntoIterator,
		I::Item: Into<Arg>,
	{
		let selector =
			ParsedSelector::parse_with_default(selector.as_ref(), &self.options.default_tag);
		let sink: &dyn DiagnosticSink = if self.options.report_dropped_functions {
			self.sink.as_ref()
		} else {
			&NoopSink
		};

		let props = normalize(&selector, args, sink);
		let html = render(&selector.tag, &props);
		tracing::trace!(
			tag = %selector.tag,
			attributes = props.attributes.len(),
			fragments = props.inner.len(),
			len = html.len(),
			"Built element"
		);
		html
	}

	/// Converts JSON arguments and builds a single element.
	///
	/// Top-level values that are neither strings nor objects are skipped and
	/// arrays inside bags are comma-joined. Fails only when an object is
	/// nested in an array; see [`ConversionError`](crate::error::ConversionError).
	#[cfg(feature = "json")]
	pub fn build_json<S>(
		&self,
		selector: S,
		args: &[serde_json::Value],
	) -> Result<String, crate::error::ConversionError>
	where
		S: AsRef<str>,
	{
		let args = args
			.iter()
			.cloned()
			.map(Arg::try_from)
			.collect::<Result<Vec<_>, _>>()?;
		Ok(self.build(selector, args))
	}
}

/// Builds a single element with the default [`Builder`].
///
/// # Examples
///
/// ```
/// use tagsmith_core::{build, props};
///
/// assert_eq!(build("", Vec::<&str>::new()), "<div></div>");
/// assert_eq!(
///     build("div.foo", [props! { "className" => "bar baz" }]),
///     r#"<div class="foo bar baz"></div>"#
/// );
/// ```
pub fn build<S, I>(selector: S, args: I) -> String
where
	S: AsRef<str>,
	I: IntoIterator,
	I::Item: Into<Arg>,
{
	static DEFAULT_BUILDER: OnceLock<Builder> = OnceLock::new();
	DEFAULT_BUILDER.get_or_init(Builder::new).build(selector, args)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::props;
	use crate::value::PropValue;
	use rstest::rstest;
	use std::sync::atomic::{AtomicUsize, Ordering};

	#[rstest]
	fn test_options_defaults() {
		let options = BuilderOptions::default();
		assert_eq!(options.default_tag, "div");
		assert!(options.report_dropped_functions);
		assert!(options.validate().is_ok());
	}

	#[rstest]
	#[case("")]
	#[case("   ")]
	fn test_options_reject_blank_default_tag(#[case] tag: &str) {
		let options = BuilderOptions::new().default_tag(tag);
		assert!(matches!(options.validate(), Err(ConfigError::EmptyDefaultTag)));
	}

	#[cfg(feature = "json")]
	#[rstest]
	fn test_options_from_json_parse_error() {
		let err = BuilderOptions::from_json_str("{ not json").unwrap_err();
		assert!(matches!(err, ConfigError::Parse(_)));
		assert!(err.to_string().starts_with("Failed to parse builder options"));
	}

	#[cfg(feature = "json")]
	#[rstest]
	fn test_options_round_trip_through_json() {
		let options = BuilderOptions::new()
			.default_tag("li")
			.report_dropped_functions(false);
		let json = serde_json::to_string(&options).unwrap();
		assert_eq!(BuilderOptions::from_json_str(&json).unwrap(), options);
	}

	#[cfg(feature = "json")]
	#[rstest]
	fn test_build_json_degrades_like_build() {
		let html = Builder::new()
			.build_json(
				"div",
				&[
					serde_json::json!(5),
					serde_json::json!({ "class": ["a", "b"], "data-ids": [1, 2] }),
					serde_json::json!(false),
					serde_json::json!(["ignored"]),
				],
			)
			.unwrap();
		assert_eq!(html, r#"<div class="a,b" data-ids="1,2"></div>"#);
	}

	#[cfg(feature = "json")]
	#[rstest]
	fn test_build_json_rejects_object_in_array() {
		let err = Builder::new()
			.build_json("div", &[serde_json::json!({ "title": [{ "a": 1 }] })])
			.unwrap_err();
		assert!(matches!(
			err,
			crate::error::ConversionError::UnsupportedValue { ref key, kind: "object" } if key == "title"
		));
	}

	#[rstest]
	fn test_custom_default_tag() {
		let builder = Builder::with_options(BuilderOptions::new().default_tag("span"));
		assert_eq!(builder.build("", Vec::<Arg>::new()), "<span></span>");
		assert_eq!(builder.build("p", Vec::<Arg>::new()), "<p></p>");
	}

	#[rstest]
	fn test_sink_called_once_per_function() {
		let calls = Arc::new(AtomicUsize::new(0));
		let counter = Arc::clone(&calls);
		let builder = Builder::new().sink(move |_key: &str| {
			counter.fetch_add(1, Ordering::SeqCst);
		});

		let html = builder.build(
			"button",
			[
				props! { "onClick" => PropValue::function(|| {}), "type" => "button" },
				props! { "onHover" => PropValue::function(|| {}) },
			],
		);

		assert_eq!(html, r#"<button type="button"></button>"#);
		assert_eq!(calls.load(Ordering::SeqCst), 2);
	}

	#[rstest]
	fn test_reporting_can_be_disabled() {
		let calls = Arc::new(AtomicUsize::new(0));
		let counter = Arc::clone(&calls);
		let builder = Builder::with_options(BuilderOptions::new().report_dropped_functions(false))
			.sink(move |_key: &str| {
				counter.fetch_add(1, Ordering::SeqCst);
			});

		let html = builder.build("a", [props! { "onClick" => PropValue::function(|| {}) }]);

		assert_eq!(html, "<a></a>");
		assert_eq!(calls.load(Ordering::SeqCst), 0);
	}

	#[rstest]
	fn test_builder_is_send_and_sync() {
		fn assert_send_sync<T: Send + Sync>() {}
		assert_send_sync::<Builder>();
	}

	#[rstest]
	fn test_debug_hides_sink() {
		let debug = format!("{:?}", Builder::new());
		assert!(debug.starts_with("Builder"));
		assert!(debug.contains("default_tag"));
	}
}
