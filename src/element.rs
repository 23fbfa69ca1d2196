//! The core element node: a mutable markup tree with lazily cached rendering
//!
//! [`Element`] is a cheap-to-clone handle; clones share one underlying node.
//! Mutators mark the node dirty and return the handle for chaining, and a
//! render call rebuilds the cached markup only when something changed since
//! the last walk.
//!
//! ## Cloning
//!
//! `Element` implements `Clone` and shares its state via `Rc<RefCell<_>>`.
//! All clones of the same element observe the same mutations, which is what
//! lets a caller keep a handle to a child that is also attached to a parent.
//!
//! ## Cache staleness
//!
//! Invalidation does not bubble upward: mutating a child dirties only the
//! child. A parent that already holds a clean cache will keep serving it
//! until something dirties the parent itself — [`Element::invalidate`] is
//! the explicit way to force the recompute.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use indexmap::IndexMap;

use crate::attrs::{AttrMap, AttrValue, attributes_markup};
use crate::error::{ElementError, Result};
use crate::escape::escape;

/// Element names that never take a closing tag
const VOID_TAGS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
	"track", "wbr",
];

/// A child slot of an element
///
/// Children are either nested nodes, rendered (and re-parented) during the
/// parent's render walk, or prebuilt markup fragments inserted verbatim.
/// Raw fragments are trusted: they bypass escaping entirely.
#[derive(Debug, Clone)]
pub enum Child {
	/// A nested element node
	Node(Element),
	/// A trusted raw markup fragment
	Raw(String),
}

impl Child {
	/// Returns the nested element, or `None` for a raw fragment
	pub fn as_node(&self) -> Option<&Element> {
		match self {
			Child::Node(node) => Some(node),
			Child::Raw(_) => None,
		}
	}

	/// Returns the raw fragment, or `None` for a nested element
	pub fn as_raw(&self) -> Option<&str> {
		match self {
			Child::Raw(markup) => Some(markup),
			Child::Node(_) => None,
		}
	}
}

impl From<Element> for Child {
	fn from(node: Element) -> Self {
		Child::Node(node)
	}
}

impl From<&Element> for Child {
	fn from(node: &Element) -> Self {
		Child::Node(node.clone())
	}
}

impl From<&str> for Child {
	fn from(markup: &str) -> Self {
		Child::Raw(markup.to_string())
	}
}

impl From<String> for Child {
	fn from(markup: String) -> Self {
		Child::Raw(markup)
	}
}

/// The rendered form of an element
///
/// Holds the start tag, the inner markup (children plus escaped text), and
/// the end tag separately so a caller can stream its own content between
/// the tags. `Display` concatenates the three pieces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
	start_tag: String,
	inner: String,
	end_tag: String,
	attrs_markup: String,
}

impl Rendered {
	/// The opening tag, e.g. `<a href="/home">`; empty for tag-less nodes
	pub fn start_tag(&self) -> &str {
		&self.start_tag
	}

	/// The closing tag, e.g. `</a>`; empty for tag-less and void nodes
	pub fn end_tag(&self) -> &str {
		&self.end_tag
	}

	/// The markup between the tags
	pub fn inner(&self) -> &str {
		&self.inner
	}

	/// The serialized attribute list of the start tag
	pub fn attributes_markup(&self) -> &str {
		&self.attrs_markup
	}
}

impl fmt::Display for Rendered {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}{}{}", self.start_tag, self.inner, self.end_tag)
	}
}

struct ElementInner {
	tag: Option<String>,
	attributes: AttrMap,
	default_class: String,
	extra_class: String,
	text: String,
	children: IndexMap<String, Child>,
	hidden: bool,
	parent: Weak<RefCell<ElementInner>>,
	dirty: bool,
	cached: Option<Rendered>,
	before_render: Option<Rc<dyn Fn(&Element)>>,
}

impl ElementInner {
	fn combined_class(&self) -> String {
		let mut tokens: Vec<&str> = self.default_class.split_whitespace().collect();
		tokens.extend(self.extra_class.split_whitespace());
		tokens.join(" ")
	}
}

impl fmt::Debug for ElementInner {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ElementInner")
			.field("tag", &self.tag)
			.field("attributes", &self.attributes)
			.field("default_class", &self.default_class)
			.field("extra_class", &self.extra_class)
			.field("text", &self.text)
			.field("children", &self.children)
			.field("hidden", &self.hidden)
			.field("dirty", &self.dirty)
			.finish_non_exhaustive()
	}
}

/// A mutable HTML element node with lazily cached rendering
///
/// # Examples
///
/// ```
/// use fluent_html::Element;
///
/// let badge = Element::new("span");
/// badge
///     .set_default_class("badge")
///     .add_extra_class("badge-info")
///     .set_text_content("3 new");
///
/// assert_eq!(
///     badge.to_markup(),
///     r#"<span class="badge badge-info">3 new</span>"#
/// );
/// ```
#[derive(Clone)]
pub struct Element {
	inner: Rc<RefCell<ElementInner>>,
}

impl Element {
	/// Creates a node with the given element tag
	pub fn new(tag: impl Into<String>) -> Self {
		Self::build(Some(tag.into()))
	}

	/// Creates a tag-less node that renders only its children and text
	pub fn container() -> Self {
		Self::build(None)
	}

	/// Creates a node and applies attributes and text through the public
	/// mutators, so anything layered on top of them takes effect
	///
	/// # Examples
	///
	/// ```
	/// use fluent_html::Element;
	///
	/// let cell = Element::prepared("td", [("colspan", "2")], Some("Total"));
	/// assert_eq!(cell.to_markup(), r#"<td colspan="2">Total</td>"#);
	/// ```
	pub fn prepared<K, V>(
		tag: impl Into<String>,
		attributes: impl IntoIterator<Item = (K, V)>,
		text: Option<&str>,
	) -> Self
	where
		K: Into<String>,
		V: Into<AttrValue>,
	{
		let element = Self::new(tag);
		element.set_attributes(attributes);
		if let Some(text) = text {
			element.set_text_content(text);
		}
		element
	}

	fn build(tag: Option<String>) -> Self {
		Self {
			inner: Rc::new(RefCell::new(ElementInner {
				tag,
				attributes: AttrMap::new(),
				default_class: String::new(),
				extra_class: String::new(),
				text: String::new(),
				children: IndexMap::new(),
				hidden: false,
				parent: Weak::new(),
				dirty: true,
				cached: None,
				before_render: None,
			})),
		}
	}

	/// Returns `true` when both handles point at the same node
	pub fn ptr_eq(&self, other: &Element) -> bool {
		Rc::ptr_eq(&self.inner, &other.inner)
	}

	// Every mutator funnels through here: apply the change, mark dirty.
	fn mutate(&self, apply: impl FnOnce(&mut ElementInner)) -> &Self {
		let mut inner = self.inner.borrow_mut();
		apply(&mut inner);
		inner.dirty = true;
		self
	}

	/// Replaces the element tag, keeping attributes and children
	pub fn set_tag(&self, tag: impl Into<String>) -> &Self {
		let tag = tag.into();
		self.mutate(|inner| inner.tag = Some(tag))
	}

	/// Removes the element tag, turning the node into a bare container
	pub fn clear_tag(&self) -> &Self {
		self.mutate(|inner| inner.tag = None)
	}

	/// Replaces the text content
	pub fn set_text_content(&self, text: impl Into<String>) -> &Self {
		let text = text.into();
		self.mutate(|inner| inner.text = text)
	}

	/// Appends to the text content
	pub fn add_text_content(&self, text: impl Into<String>) -> &Self {
		let text = text.into();
		self.mutate(|inner| inner.text.push_str(&text))
	}

	/// Sets one attribute; an [`AttrValue::Empty`] value (`None`) renders
	/// the attribute as a bare name
	pub fn set_attribute(&self, name: impl Into<String>, value: impl Into<AttrValue>) -> &Self {
		let name = name.into();
		let value = value.into();
		self.mutate(|inner| {
			inner.attributes.insert(name, value);
		})
	}

	/// Sets several attributes at once, in iteration order
	pub fn set_attributes<K, V>(&self, attributes: impl IntoIterator<Item = (K, V)>) -> &Self
	where
		K: Into<String>,
		V: Into<AttrValue>,
	{
		let pairs: Vec<(String, AttrValue)> = attributes
			.into_iter()
			.map(|(name, value)| (name.into(), value.into()))
			.collect();
		self.mutate(|inner| {
			for (name, value) in pairs {
				inner.attributes.insert(name, value);
			}
		})
	}

	/// Removes an attribute; missing names are ignored
	pub fn remove_attribute(&self, name: &str) -> &Self {
		self.mutate(|inner| {
			inner.attributes.shift_remove(name);
		})
	}

	/// Sets a `data-` attribute; a `None` value coerces to the empty string,
	/// unlike plain attributes where `None` means valueless
	pub fn set_data_attribute(&self, name: impl Into<String>, value: impl Into<AttrValue>) -> &Self {
		let name = format!("data-{}", name.into());
		let value = match value.into() {
			AttrValue::Empty => AttrValue::Text(String::new()),
			value => value,
		};
		self.mutate(|inner| {
			inner.attributes.insert(name, value);
		})
	}

	/// Sets several `data-` attributes at once
	pub fn set_data_attributes<K, V>(&self, attributes: impl IntoIterator<Item = (K, V)>) -> &Self
	where
		K: Into<String>,
		V: Into<AttrValue>,
	{
		for (name, value) in attributes {
			self.set_data_attribute(name, value);
		}
		self
	}

	/// Overwrites the base CSS class reserved for the defining component
	pub fn set_default_class(&self, class: impl Into<String>) -> &Self {
		let class = class.into();
		self.mutate(|inner| inner.default_class = class)
	}

	/// Overwrites the caller-mutable CSS class
	pub fn set_extra_class(&self, class: impl Into<String>) -> &Self {
		let class = class.into();
		self.mutate(|inner| inner.extra_class = class)
	}

	/// Appends to the caller-mutable CSS class; duplicates are kept
	pub fn add_extra_class(&self, class: impl Into<String>) -> &Self {
		let class = class.into();
		self.mutate(|inner| {
			if inner.extra_class.is_empty() {
				inner.extra_class = class;
			} else {
				inner.extra_class.push(' ');
				inner.extra_class.push_str(&class);
			}
		})
	}

	/// Removes the first token equal to `token` from the caller-mutable
	/// class; the base class is left alone
	pub fn remove_class_token(&self, token: &str) -> &Self {
		self.mutate(|inner| {
			let mut tokens: Vec<&str> = inner.extra_class.split_whitespace().collect();
			if let Some(position) = tokens.iter().position(|t| *t == token) {
				tokens.remove(position);
			}
			let remaining = tokens.join(" ");
			inner.extra_class = remaining;
		})
	}

	/// Shows or hides the node
	///
	/// Visibility is not part of the cached render: toggling it leaves the
	/// cache valid, so un-hiding an otherwise unchanged node serves the
	/// previous markup without a recompute.
	pub fn set_hidden(&self, hidden: bool) -> &Self {
		self.inner.borrow_mut().hidden = hidden;
		self
	}

	/// Sets the `title` attribute
	pub fn set_title(&self, title: impl Into<AttrValue>) -> &Self {
		self.set_attribute("title", title)
	}

	/// Adds a named child, silently replacing any existing child of the
	/// same name
	///
	/// # Examples
	///
	/// ```
	/// use fluent_html::Element;
	///
	/// let list = Element::new("ul");
	/// let item = Element::new("li");
	/// item.set_text_content("one");
	/// list.add_child("first", item);
	/// list.add_child("raw", "<li>two</li>");
	///
	/// assert_eq!(list.to_markup(), "<ul><li>one</li><li>two</li></ul>");
	/// ```
	pub fn add_child(&self, name: impl Into<String>, child: impl Into<Child>) -> &Self {
		let name = name.into();
		let child = child.into();
		self.mutate(|inner| {
			inner.children.insert(name, child);
		})
	}

	/// Appends a `<span>` child under an auto-generated name
	pub fn add_span_element<K, V>(
		&self,
		class: Option<&str>,
		attributes: impl IntoIterator<Item = (K, V)>,
	) -> &Self
	where
		K: Into<String>,
		V: Into<AttrValue>,
	{
		self.add_named_element("span", class, attributes)
	}

	/// Appends an `<i>` icon child under an auto-generated name
	pub fn add_icon_element<K, V>(
		&self,
		class: Option<&str>,
		attributes: impl IntoIterator<Item = (K, V)>,
	) -> &Self
	where
		K: Into<String>,
		V: Into<AttrValue>,
	{
		self.add_named_element("i", class, attributes)
	}

	fn add_named_element<K, V>(
		&self,
		tag: &str,
		class: Option<&str>,
		attributes: impl IntoIterator<Item = (K, V)>,
	) -> &Self
	where
		K: Into<String>,
		V: Into<AttrValue>,
	{
		let child = Element::prepared(tag, attributes, None);
		if let Some(class) = class {
			child.set_attribute("class", class);
		}
		let name = format!("{tag}{}", self.inner.borrow().children.len());
		self.add_child(name, child)
	}

	/// Sets or clears the parent back-reference by hand
	///
	/// Render walks maintain this automatically; the setter exists for
	/// callers assembling detached fragments.
	pub fn set_parent(&self, parent: Option<&Element>) -> &Self {
		self.mutate(|inner| {
			inner.parent = match parent {
				Some(parent) => Rc::downgrade(&parent.inner),
				None => Weak::new(),
			};
		})
	}

	/// Installs the hook run at the start of every render call, even for
	/// hidden nodes
	pub fn set_before_render(&self, hook: impl Fn(&Element) + 'static) -> &Self {
		let hook: Rc<dyn Fn(&Element)> = Rc::new(hook);
		self.mutate(|inner| inner.before_render = Some(hook))
	}

	/// Marks the cached render stale without any other side effect
	///
	/// This is the one way to pick up a child's mutation after this node
	/// already rendered; see the module notes on cache staleness.
	pub fn invalidate(&self) -> &Self {
		self.inner.borrow_mut().dirty = true;
		self
	}

	/// Returns the element tag, or `None` for a bare container
	pub fn tag(&self) -> Option<String> {
		self.inner.borrow().tag.clone()
	}

	/// Looks up a named child
	///
	/// # Errors
	///
	/// Returns [`ElementError::ChildNotFound`] when no child is registered
	/// under `name`.
	pub fn get_child(&self, name: &str) -> Result<Child> {
		self.inner
			.borrow()
			.children
			.get(name)
			.cloned()
			.ok_or_else(|| ElementError::ChildNotFound {
				name: name.to_string(),
			})
	}

	/// Returns a snapshot of the named children, in insertion order
	pub fn get_children(&self) -> IndexMap<String, Child> {
		self.inner.borrow().children.clone()
	}

	/// Returns the parent this node was last attached to, if it is still
	/// alive
	pub fn get_parent(&self) -> Option<Element> {
		self.inner
			.borrow()
			.parent
			.upgrade()
			.map(|inner| Element { inner })
	}

	/// Returns whether the node is hidden
	pub fn is_hidden(&self) -> bool {
		self.inner.borrow().hidden
	}

	/// Joins the base and caller-mutable classes with a single space,
	/// collapsing internal whitespace and trimming the ends
	///
	/// # Examples
	///
	/// ```
	/// use fluent_html::Element;
	///
	/// let node = Element::new("div");
	/// assert_eq!(node.build_combined_class(), "");
	/// node.set_default_class("a");
	/// assert_eq!(node.build_combined_class(), "a");
	/// node.set_extra_class("  b   c ");
	/// assert_eq!(node.build_combined_class(), "a b c");
	/// ```
	pub fn build_combined_class(&self) -> String {
		self.inner.borrow().combined_class()
	}

	/// Returns the serialized attribute list, rendering first when the
	/// cache is stale
	///
	/// The attribute list depends on the computed class, so a dirty node
	/// renders before answering. A hidden, never-rendered node yields an
	/// empty string.
	pub fn get_attributes_markup(&self) -> String {
		if self.inner.borrow().dirty {
			let _ = self.render();
		}
		self.inner
			.borrow()
			.cached
			.as_ref()
			.map(|rendered| rendered.attributes_markup().to_string())
			.unwrap_or_default()
	}

	/// Renders the node and its subtree, reusing the cache when clean
	///
	/// The pre-render hook runs first, unconditionally. A hidden node
	/// yields `None` and leaves the cache untouched. A clean node returns
	/// the cached markup without revisiting children — mutations made
	/// directly to a child after this node last rendered are not picked up
	/// until something dirties this node again.
	pub fn render(&self) -> Option<Rendered> {
		let hook = self.inner.borrow().before_render.clone();
		if let Some(hook) = hook {
			hook(self);
		}

		if self.inner.borrow().hidden {
			return None;
		}

		{
			let inner = self.inner.borrow();
			if !inner.dirty
				&& let Some(cached) = &inner.cached
			{
				tracing::trace!(tag = inner.tag.as_deref().unwrap_or(""), "serving cached render");
				return Some(cached.clone());
			}
		}

		// Snapshot the children so their own render calls can re-borrow.
		let children: Vec<Child> = self.inner.borrow().children.values().cloned().collect();

		let mut markup = String::new();
		for child in &children {
			match child {
				Child::Raw(fragment) => markup.push_str(fragment),
				Child::Node(node) => {
					node.attach_parent(self);
					if let Some(rendered) = node.render() {
						markup.push_str(&rendered.to_string());
					}
				}
			}
		}

		let mut inner = self.inner.borrow_mut();
		if !inner.text.is_empty() {
			markup.push_str(&escape(&inner.text));
		}

		let combined_class = inner.combined_class();
		if !combined_class.is_empty() {
			inner
				.attributes
				.insert("class".to_string(), AttrValue::Text(combined_class));
		}

		let attrs_markup = attributes_markup(&inner.attributes);
		let (start_tag, end_tag) = match &inner.tag {
			Some(tag) => {
				let start = if attrs_markup.is_empty() {
					format!("<{tag}>")
				} else {
					format!("<{tag} {attrs_markup}>")
				};
				let end = if VOID_TAGS.contains(&tag.as_str()) {
					String::new()
				} else {
					format!("</{tag}>")
				};
				(start, end)
			}
			None => (String::new(), String::new()),
		};

		tracing::debug!(
			tag = inner.tag.as_deref().unwrap_or(""),
			children = children.len(),
			"rebuilt element markup"
		);

		let rendered = Rendered {
			start_tag,
			inner: markup,
			end_tag,
			attrs_markup,
		};
		inner.cached = Some(rendered.clone());
		inner.dirty = false;
		Some(rendered)
	}

	/// Renders and returns only the opening tag
	pub fn render_start_tag(&self) -> Option<String> {
		self.render()
			.map(|rendered| rendered.start_tag().to_string())
	}

	/// Renders and returns only the closing tag
	pub fn render_end_tag(&self) -> Option<String> {
		self.render().map(|rendered| rendered.end_tag().to_string())
	}

	/// Renders to a markup string; hidden nodes yield the empty string
	pub fn to_markup(&self) -> String {
		self.render()
			.map(|rendered| rendered.to_string())
			.unwrap_or_default()
	}

	// Attaching during a render walk must not dirty the child, so this
	// bypasses the public mutator.
	fn attach_parent(&self, parent: &Element) {
		self.inner.borrow_mut().parent = Rc::downgrade(&parent.inner);
	}
}

impl Default for Element {
	fn default() -> Self {
		Self::container()
	}
}

impl fmt::Debug for Element {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Element").field(&self.inner.borrow()).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn text_element(tag: &str, text: &str) -> Element {
		let element = Element::new(tag);
		element.set_text_content(text);
		element
	}

	#[test]
	fn test_render_simple_element() {
		let node = Element::new("p");
		node.set_text_content("hello");
		assert_eq!(node.to_markup(), "<p>hello</p>");
	}

	#[test]
	fn test_render_container_without_tag() {
		let node = Element::container();
		node.set_text_content("just text");
		assert_eq!(node.to_markup(), "just text");
	}

	#[test]
	fn test_text_is_escaped() {
		let node = Element::new("p");
		node.set_text_content("5 < 6 & \"q\"");
		assert_eq!(node.to_markup(), "<p>5 &lt; 6 &amp; &quot;q&quot;</p>");
	}

	#[test]
	fn test_add_text_content_appends() {
		let node = Element::new("p");
		node.set_text_content("a").add_text_content("b");
		assert_eq!(node.to_markup(), "<p>ab</p>");
	}

	#[test]
	fn test_void_element_has_no_end_tag() {
		let node = Element::new("br");
		assert_eq!(node.to_markup(), "<br>");
		assert_eq!(node.render_end_tag().unwrap(), "");
	}

	#[test]
	fn test_valueless_attribute() {
		let node = Element::new("input");
		node.set_attribute("type", "checkbox").set_attribute("checked", None);
		assert_eq!(node.to_markup(), r#"<input type="checkbox" checked>"#);
	}

	#[test]
	fn test_data_attribute_none_coerces_to_empty_string() {
		let node = Element::new("div");
		node.set_data_attribute("state", None);
		assert_eq!(node.to_markup(), r#"<div data-state=""></div>"#);
	}

	#[test]
	fn test_data_attributes_bulk() {
		let node = Element::new("div");
		node.set_data_attributes([("a", "1"), ("b", "2")]);
		assert_eq!(node.to_markup(), r#"<div data-a="1" data-b="2"></div>"#);
	}

	#[test]
	fn test_set_tag_preserves_attributes_and_children() {
		let node = Element::new("div");
		node.set_attribute("id", "x");
		node.add_child("inner", Element::new("span"));
		node.set_tag("section");
		assert_eq!(node.to_markup(), r#"<section id="x"><span></span></section>"#);
	}

	#[test]
	fn test_combined_class_cases() {
		let node = Element::new("div");
		assert_eq!(node.build_combined_class(), "");
		node.set_default_class("a");
		assert_eq!(node.build_combined_class(), "a");
		node.set_default_class("").set_extra_class("b");
		assert_eq!(node.build_combined_class(), "b");
		node.set_default_class("a");
		assert_eq!(node.build_combined_class(), "a b");
	}

	#[test]
	fn test_combined_class_overrides_class_attribute() {
		let node = Element::new("div");
		node.set_attribute("class", "manual").set_default_class("base");
		assert_eq!(node.to_markup(), r#"<div class="base"></div>"#);
	}

	#[test]
	fn test_class_attribute_kept_when_no_combined_class() {
		let node = Element::new("div");
		node.set_attribute("class", "manual");
		assert_eq!(node.to_markup(), r#"<div class="manual"></div>"#);
	}

	#[test]
	fn test_add_extra_class_allows_duplicates() {
		let node = Element::new("div");
		node.add_extra_class("x").add_extra_class("x");
		assert_eq!(node.build_combined_class(), "x x");
	}

	#[test]
	fn test_remove_class_token_by_value() {
		let node = Element::new("div");
		node.set_extra_class("a b c b");
		node.remove_class_token("b");
		assert_eq!(node.build_combined_class(), "a c b");
		node.remove_class_token("missing");
		assert_eq!(node.build_combined_class(), "a c b");
	}

	#[test]
	fn test_remove_class_token_leaves_default_class() {
		let node = Element::new("div");
		node.set_default_class("base").set_extra_class("extra");
		node.remove_class_token("base");
		assert_eq!(node.build_combined_class(), "base extra");
	}

	#[test]
	fn test_render_twice_is_identical_while_clean() {
		let node = Element::new("div");
		node.set_text_content("stable");
		let first = node.render().unwrap();
		let second = node.render().unwrap();
		assert_eq!(first, second);
	}

	#[test]
	fn test_clean_parent_does_not_revisit_children() {
		let parent = Element::new("div");
		let child = Element::new("span");
		child.set_text_content("old");
		parent.add_child("c", &child);

		assert_eq!(parent.to_markup(), "<div><span>old</span></div>");

		// The child is dirtied, the parent is not: the parent keeps
		// serving its cache.
		child.set_text_content("new");
		assert_eq!(parent.to_markup(), "<div><span>old</span></div>");

		parent.invalidate();
		assert_eq!(parent.to_markup(), "<div><span>new</span></div>");
	}

	#[test]
	fn test_hidden_render_returns_none_and_keeps_cache() {
		let node = Element::new("div");
		node.set_text_content("visible");
		let before = node.render().unwrap();

		node.set_hidden(true);
		assert!(node.render().is_none());
		assert_eq!(node.to_markup(), "");

		// Un-hiding serves the prior cache without a recompute.
		node.set_hidden(false);
		assert_eq!(node.render().unwrap(), before);
	}

	#[test]
	fn test_hidden_never_rendered_node() {
		let node = Element::new("div");
		node.set_hidden(true);
		assert!(node.render().is_none());
		assert_eq!(node.get_attributes_markup(), "");
	}

	#[test]
	fn test_add_child_replaces_by_name() {
		let parent = Element::new("div");
		let first = text_element("span", "first");
		let second = text_element("span", "second");
		parent.add_child("slot", &first).add_child("slot", &second);

		let children = parent.get_children();
		assert_eq!(children.len(), 1);
		assert!(children["slot"].as_node().unwrap().ptr_eq(&second));
		assert_eq!(parent.to_markup(), "<div><span>second</span></div>");
	}

	#[test]
	fn test_children_render_in_insertion_order() {
		let parent = Element::new("ul");
		parent.add_child("b", text_element("li", "B"));
		parent.add_child("a", text_element("li", "A"));
		assert_eq!(parent.to_markup(), "<ul><li>B</li><li>A</li></ul>");
	}

	#[test]
	fn test_raw_child_is_not_escaped() {
		let parent = Element::new("div");
		parent.add_child("raw", "<b>bold</b>");
		assert_eq!(parent.to_markup(), "<div><b>bold</b></div>");
	}

	#[test]
	fn test_get_child_missing_fails_with_name() {
		let parent = Element::new("div");
		let err = parent.get_child("missing").unwrap_err();
		match err {
			ElementError::ChildNotFound { name } => assert_eq!(name, "missing"),
		}
	}

	#[test]
	fn test_parent_backref_set_during_render() {
		let parent = Element::new("div");
		let child = Element::new("span");
		parent.add_child("c", &child);

		assert!(child.get_parent().is_none());
		parent.render();
		assert!(child.get_parent().unwrap().ptr_eq(&parent));
	}

	#[test]
	fn test_before_render_hook_runs_even_when_hidden() {
		use std::cell::Cell;

		let node = Element::new("div");
		let calls = Rc::new(Cell::new(0));
		let seen = Rc::clone(&calls);
		node.set_before_render(move |_| seen.set(seen.get() + 1));

		node.set_hidden(true);
		assert!(node.render().is_none());
		node.set_hidden(false);
		node.render();
		assert_eq!(calls.get(), 2);
	}

	#[test]
	fn test_before_render_hook_can_mutate_the_node() {
		let node = Element::new("div");
		node.set_before_render(|element| {
			element.set_attribute("data-ready", "yes");
		});
		assert_eq!(node.to_markup(), r#"<div data-ready="yes"></div>"#);
	}

	#[test]
	fn test_render_start_and_end_tags() {
		let node = Element::new("a");
		node.set_attribute("href", "/home").set_text_content("Home");
		assert_eq!(node.render_start_tag().unwrap(), r#"<a href="/home">"#);
		assert_eq!(node.render_end_tag().unwrap(), "</a>");
	}

	#[test]
	fn test_get_attributes_markup_renders_when_dirty() {
		let node = Element::new("div");
		node.set_attribute("id", "x").set_default_class("box");
		assert_eq!(node.get_attributes_markup(), r#"id="x" class="box""#);
	}

	#[test]
	fn test_invalidate_forces_recompute() {
		let node = Element::new("div");
		node.set_text_content("v1");
		node.render();
		node.invalidate();
		// Nothing changed, but the walk happens again and lands on the
		// same markup.
		assert_eq!(node.to_markup(), "<div>v1</div>");
	}

	#[test]
	fn test_clone_shares_state() {
		let node = Element::new("div");
		let alias = node.clone();
		alias.set_text_content("shared");
		assert_eq!(node.to_markup(), "<div>shared</div>");
		assert!(node.ptr_eq(&alias));
	}

	#[test]
	fn test_set_parent_manual() {
		let parent = Element::new("div");
		let child = Element::new("span");
		child.set_parent(Some(&parent));
		assert!(child.get_parent().unwrap().ptr_eq(&parent));
		child.set_parent(None);
		assert!(child.get_parent().is_none());
	}

	#[test]
	fn test_add_span_and_icon_elements() {
		let node = Element::new("button");
		node.add_icon_element(Some("icon-save"), [("aria-hidden", "true")]);
		node.add_span_element(Some("label"), std::iter::empty::<(&str, &str)>());
		node.set_text_content("Save");
		assert_eq!(
			node.to_markup(),
			r#"<button><i aria-hidden="true" class="icon-save"></i><span class="label"></span>Save</button>"#
		);
	}

	#[test]
	fn test_prepared_applies_attributes_then_text() {
		let node = Element::prepared("a", [("href", "/x")], Some("go"));
		assert_eq!(node.to_markup(), r#"<a href="/x">go</a>"#);
	}
}
