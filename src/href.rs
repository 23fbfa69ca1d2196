//! Hyperlink element specialization
//!
//! A thin layer over [`Element`]: an `<a>` node plus helpers for the link
//! target, the `target` attribute, and an inline confirmation dialog. The
//! wrapper derefs to the base node, so every base mutator chains through.

use std::ops::Deref;

use crate::attrs::AttrValue;
use crate::confirmation::Confirmation;
use crate::element::{Child, Element};
use crate::escape::urlencode;

/// An `<a>` element with link, target, and confirmation helpers
///
/// # Examples
///
/// ```
/// use fluent_html::HrefElement;
///
/// let link = HrefElement::new();
/// link.set_link_with_query("/orders/delete", &[("id", "42")])
///     .set_confirmation("Are you sure?")
///     .set_text_content("Delete");
///
/// let markup = link.to_markup();
/// assert!(markup.starts_with(r#"<a href="/orders/delete?id=42""#));
/// assert!(markup.ends_with(">Delete</a>"));
/// ```
#[derive(Clone, Debug)]
pub struct HrefElement {
	element: Element,
}

impl HrefElement {
	/// Creates an empty `<a>` node
	pub fn new() -> Self {
		Self {
			element: Element::new("a"),
		}
	}

	/// Creates an `<a>` node and applies attributes and text through the
	/// public mutators
	pub fn prepared<K, V>(
		attributes: impl IntoIterator<Item = (K, V)>,
		text: Option<&str>,
	) -> Self
	where
		K: Into<String>,
		V: Into<AttrValue>,
	{
		let link = Self::new();
		link.set_attributes(attributes);
		if let Some(text) = text {
			link.set_text_content(text);
		}
		link
	}

	/// Sets the `href` attribute
	pub fn set_link(&self, link: impl Into<String>) -> &Self {
		self.element.set_attribute("href", link.into());
		self
	}

	/// Sets the `href` attribute with an encoded query string appended
	///
	/// # Examples
	///
	/// ```
	/// use fluent_html::HrefElement;
	///
	/// let link = HrefElement::new();
	/// link.set_link_with_query("/search", &[("q", "a b"), ("page", "2")]);
	/// assert_eq!(
	///     link.get_attributes_markup(),
	///     r#"href="/search?q=a+b&amp;page=2""#
	/// );
	/// ```
	pub fn set_link_with_query(&self, link: impl Into<String>, query: &[(&str, &str)]) -> &Self {
		let mut href = link.into();
		if !query.is_empty() {
			href.push('?');
			let pairs: Vec<String> = query
				.iter()
				.map(|(name, value)| format!("{}={}", urlencode(name), urlencode(value)))
				.collect();
			href.push_str(&pairs.join("&"));
		}
		self.element.set_attribute("href", href);
		self
	}

	/// Sets the `target` attribute
	pub fn set_target(&self, kind: impl Into<String>) -> &Self {
		self.element.set_attribute("target", kind.into());
		self
	}

	/// Toggles `target="_blank"`; `false` removes the attribute
	pub fn set_target_blank(&self, enabled: bool) -> &Self {
		if enabled {
			self.element.set_attribute("target", "_blank");
		} else {
			self.element.remove_attribute("target");
		}
		self
	}

	/// Sets an `onclick` confirmation dialog
	pub fn set_confirmation(&self, text: impl Into<String>) -> &Self {
		self.set_confirmation_for("onclick", text)
	}

	/// Sets a confirmation dialog on the given event attribute
	pub fn set_confirmation_for(&self, event: impl Into<String>, text: impl Into<String>) -> &Self {
		self.element
			.set_attribute(event.into(), Confirmation::new(text));
		self
	}

	/// Consumes the wrapper and returns the underlying node
	pub fn into_element(self) -> Element {
		self.element
	}
}

impl Default for HrefElement {
	fn default() -> Self {
		Self::new()
	}
}

impl Deref for HrefElement {
	type Target = Element;

	fn deref(&self) -> &Self::Target {
		&self.element
	}
}

impl From<HrefElement> for Child {
	fn from(link: HrefElement) -> Self {
		Child::Node(link.element)
	}
}

impl From<&HrefElement> for Child {
	fn from(link: &HrefElement) -> Self {
		Child::Node(link.element.clone())
	}
}
