//! Markup serialization.
//!
//! Attribute order is fixed: `id`, `class`, `style`, then the remaining
//! attributes in insertion order. Values and inner content are written as
//! given; nothing is escaped. Every element gets a closing tag, including
//! elements HTML treats as void.

use crate::normalize::NormalizedProps;

/// Attribute names owned by the dedicated slots; never taken from the
/// generic set.
const RESERVED_ATTRS: [&str; 3] = ["id", "class", "style"];

/// Renders `<tag ...>inner</tag>`.
///
/// # Examples
///
/// ```
/// use tagsmith_core::normalize::NormalizedProps;
/// use tagsmith_core::render::render;
///
/// let mut props = NormalizedProps::default();
/// props.id = "main".to_string();
/// props.classes = vec!["a".to_string(), "b".to_string()];
/// props.inner.push("<p>hi</p>".to_string());
///
/// assert_eq!(render("section", &props), r#"<section id="main" class="a b"><p>hi</p></section>"#);
/// ```
pub fn render(tag: &str, props: &NormalizedProps) -> String {
	let inner_len: usize = props.inner.iter().map(String::len).sum();
	let mut output = String::with_capacity(tag.len() * 2 + inner_len + 32);

	output.push('<');
	output.push_str(tag);

	if !props.id.is_empty() {
		push_attr(&mut output, "id", &props.id);
	}
	if !props.classes.is_empty() {
		push_attr(&mut output, "class", &props.classes.join(" "));
	}
	if let Some(style) = props.style() {
		push_attr(&mut output, "style", &style);
	}
	for (name, value) in props.attributes.iter() {
		if RESERVED_ATTRS.contains(&name.as_str()) {
			continue;
		}
		push_attr(&mut output, name, value);
	}

	output.push('>');
	for fragment in &props.inner {
		output.push_str(fragment);
	}
	output.push_str("</");
	output.push_str(tag);
	output.push('>');
	output
}

fn push_attr(output: &mut String, name: &str, value: &str) {
	output.push(' ');
	output.push_str(name);
	output.push_str("=\"");
	output.push_str(value);
	output.push('"');
}
