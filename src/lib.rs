//! # tagsmith
//!
//! Builds HTML element strings from a selector and a list of children and
//! property bags, for server-side or string-based templating where no DOM is
//! available.
//!
//! This crate re-exports [`tagsmith_core`] and adds a [`prelude`].
//!
//! ## Feature Flags
//!
//! - `json` (default) - build from `serde_json` values and load
//!   [`BuilderOptions`] from JSON
//!
//! ## Quick Example
//!
//! ```rust
//! use tagsmith::prelude::*;
//!
//! let card = h!(
//!     "article#post-1.card",
//!     props! {
//!         "className" => "featured",
//!         "style" => props! { "borderColor" => "gold", "--card-gap" => "4px" },
//!         "dataset" => props! { "postId" => 1 },
//!     },
//!     h!("h2", "Title"),
//!     h!("p", "Body"),
//! );
//!
//! assert_eq!(
//!     card,
//!     r#"<article id="post-1" class="card featured" style="border-color: gold; --card-gap: 4px" data-post-id="1"><h2>Title</h2><p>Body</p></article>"#
//! );
//! ```
//!
//! ## Escaping
//!
//! String children and attribute values are emitted verbatim. Escape untrusted
//! input before handing it to the builder.

pub use tagsmith_core::*;

/// Commonly used types and macros.
pub mod prelude {
	pub use tagsmith_core::{
		Arg, Builder, BuilderOptions, DiagnosticSink, NoopSink, PropValue, PropertyBag,
		TracingSink, build, h, props,
	};
}
