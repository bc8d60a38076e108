//! # tagsmith-core
//!
//! Builds HTML element strings from a CSS-selector-like descriptor and a list
//! of children and property bags, without a DOM.
//!
//! ## Pipeline
//!
//! Each call runs four stateless stages:
//!
//! 1. [`selector`]: `tag#id.class1.class2` into tag, id and classes
//! 2. [`normalize`]: arguments into id, classes, style parts, attributes and
//!    inner content
//! 3. [`value`] / [`convert`]: value coercion and key conversion shared by
//!    the normalizer
//! 4. [`render`]: the final `<tag attrs>inner</tag>` string
//!
//! ## Escaping
//!
//! Nothing is escaped. String children are treated as pre-rendered markup and
//! attribute values are written as given; callers own escaping of untrusted
//! input.
//!
//! ## Example
//!
//! ```
//! use tagsmith_core::{h, props};
//!
//! let html = h!(
//!     "ul#menu.nav",
//!     props! { "aria-label" => "Main", "dataset" => props! { "isOpen" => false } },
//!     h!("li.item", "Home"),
//!     h!("li.item", "About"),
//! );
//!
//! assert_eq!(
//!     html,
//!     r#"<ul id="menu" class="nav" aria-label="Main" data-is-open="false"><li class="item">Home</li><li class="item">About</li></ul>"#
//! );
//! ```

pub mod builder;
pub mod convert;
pub mod diagnostics;
pub mod error;
#[cfg(feature = "json")]
pub mod json;
pub mod normalize;
pub mod props;
pub mod render;
pub mod selector;
pub mod value;

pub use builder::{Builder, BuilderOptions, build};
pub use diagnostics::{DiagnosticSink, NoopSink, TracingSink};
pub use error::{ConfigError, ConversionError};
pub use normalize::{AttributeSet, NormalizedProps, PropertyNormalizer};
pub use props::{Arg, PropertyBag};
pub use selector::{DEFAULT_TAG, ParsedSelector, parse_selector};
pub use value::{Callback, PropValue};

/// Builds an element with the default [`Builder`].
///
/// The first argument is the selector; every following argument goes through
/// [`Arg::from`], so strings, `String`s, [`PropertyBag`]s and `Option`s of
/// those can be mixed freely. `h!()` builds an empty `div`.
///
/// ```
/// use tagsmith_core::{h, props};
///
/// assert_eq!(h!(), "<div></div>");
/// assert_eq!(h!("div", h!("p", "child")), "<div><p>child</p></div>");
/// assert_eq!(
///     h!("div", props! { "style" => props! { "fontFamily" => "Arial" } }),
///     r#"<div style="font-family: Arial"></div>"#
/// );
/// ```
#[macro_export]
macro_rules! h {
	() => {
		$crate::h!("")
	};
	($selector:expr $(, $arg:expr)* $(,)?) => {{
		let args: ::std::vec::Vec<$crate::Arg> = ::std::vec![$($crate::Arg::from($arg)),*];
		$crate::build($selector, args)
	}};
}
