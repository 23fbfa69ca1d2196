//! Attribute model and serialization
//!
//! Attributes are kept in an insertion-ordered map so that repeated renders
//! produce byte-identical markup. A value is either text (escaped when the
//! attribute list is serialized) or absent, which renders the attribute as a
//! bare name the way `disabled` or `hidden` are written by hand.

use indexmap::IndexMap;

use crate::escape::escape_attr;

/// Value of a single HTML attribute
///
/// # Examples
///
/// ```
/// use fluent_html::AttrValue;
///
/// let text: AttrValue = "btn".into();
/// assert_eq!(text.as_text(), Some("btn"));
///
/// let flag: AttrValue = None.into();
/// assert_eq!(flag, AttrValue::Empty);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
	/// Regular attribute value, escaped at serialization time
	Text(String),
	/// Valueless (boolean) attribute, serialized as the bare name
	Empty,
}

impl AttrValue {
	/// Returns the text value, or `None` for a valueless attribute
	pub fn as_text(&self) -> Option<&str> {
		match self {
			AttrValue::Text(value) => Some(value),
			AttrValue::Empty => None,
		}
	}
}

impl From<&str> for AttrValue {
	fn from(value: &str) -> Self {
		AttrValue::Text(value.to_string())
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		AttrValue::Text(value)
	}
}

impl From<Option<&str>> for AttrValue {
	fn from(value: Option<&str>) -> Self {
		match value {
			Some(value) => AttrValue::Text(value.to_string()),
			None => AttrValue::Empty,
		}
	}
}

/// Insertion-ordered attribute mapping
///
/// Re-assigning a name keeps its original position, so mutation does not
/// shuffle the serialized output.
pub type AttrMap = IndexMap<String, AttrValue>;

/// Serialize an attribute map to its markup form
///
/// Pairs appear in insertion order, separated by single spaces, with no
/// leading or trailing whitespace. Text values are escaped; valueless
/// attributes contribute just their name.
///
/// # Examples
///
/// ```
/// use fluent_html::attrs::{attributes_markup, AttrMap, AttrValue};
///
/// let mut attrs = AttrMap::new();
/// attrs.insert("href".to_string(), "/home".into());
/// attrs.insert("disabled".to_string(), AttrValue::Empty);
/// assert_eq!(attributes_markup(&attrs), r#"href="/home" disabled"#);
/// ```
pub fn attributes_markup(attrs: &AttrMap) -> String {
	let mut result = String::new();
	for (name, value) in attrs {
		if !result.is_empty() {
			result.push(' ');
		}
		result.push_str(name);
		if let AttrValue::Text(value) = value {
			result.push('=');
			result.push('"');
			result.push_str(&escape_attr(value));
			result.push('"');
		}
	}
	result
}
