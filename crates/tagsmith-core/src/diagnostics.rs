//! Diagnostic side channel for properties the builder cannot render.
//!
//! The only condition reported today is a function-valued property, which is
//! dropped from the output. Reporting is fire-and-forget: a sink cannot fail
//! and cannot influence the produced markup.
//!
//! ## Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use tagsmith_core::{Builder, PropValue, props};
//!
//! let dropped = Arc::new(Mutex::new(Vec::new()));
//! let record = Arc::clone(&dropped);
//! let builder = Builder::new().sink(move |key: &str| {
//!     record.lock().unwrap().push(key.to_string());
//! });
//!
//! let html = builder.build("button", [props! { "onClick" => PropValue::function(|| {}) }]);
//! assert_eq!(html, "<button></button>");
//! assert_eq!(*dropped.lock().unwrap(), vec!["onClick".to_string()]);
//! ```

/// Receiver for dropped-property notifications.
pub trait DiagnosticSink: Send + Sync {
	/// Called once for every function-valued property that was dropped.
	///
	/// `key` is the property name; entries nested in `style` or `dataset`
	/// are reported as `style.<key>` / `dataset.<key>`.
	fn dropped_function(&self, key: &str);
}

/// Sink that discards every notification. Used by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
	fn dropped_function(&self, _key: &str) {}
}

/// Sink that forwards notifications to `tracing` at WARN level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
	fn dropped_function(&self, key: &str) {
		tracing::warn!(
			key,
			"Skipping function prop \"{}\": functions cannot be serialized into an HTML string",
			key
		);
	}
}

impl<F> DiagnosticSink for F
where
	F: Fn(&str) + Send + Sync,
{
	fn dropped_function(&self, key: &str) {
		self(key)
	}
}
