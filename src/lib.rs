//! Fluent HTML element construction with lazily cached rendering
//!
//! This crate assembles markup fragments programmatically: each
//! [`Element`] wraps a tag, attributes, CSS classes, text, and named
//! children, and renders itself (and its subtree) into a markup string on
//! demand. Renders are cached and recomputed only after a mutation, which
//! makes repeated rendering of a stable fragment cheap.
//!
//! # Features
//!
//! - **Fluent mutation**: every mutator returns the node, so construction
//!   reads as one chain
//! - **Lazy rendering**: a dirty flag guards a cached render; clean nodes
//!   serve the cache without revisiting children
//! - **Named children**: children are keyed, so a slot can be replaced or
//!   looked up later; raw markup fragments mix freely with nested nodes
//! - **Escaping**: text and attribute values are escaped at render time;
//!   raw fragments are trusted and inserted verbatim
//! - **Hyperlink helper**: [`HrefElement`] layers link, target, and
//!   confirmation-dialog helpers over the base node
//!
//! # Example
//!
//! ```
//! use fluent_html::{Element, HrefElement};
//!
//! let actions = Element::new("div");
//! actions.set_default_class("actions");
//!
//! let delete = HrefElement::new();
//! delete
//!     .set_link_with_query("/items/delete", &[("id", "7")])
//!     .set_confirmation("Delete item 7?")
//!     .set_text_content("Delete");
//! actions.add_child("delete", delete);
//!
//! let markup = actions.to_markup();
//! assert!(markup.contains(r#"href="/items/delete?id=7""#));
//! assert!(markup.starts_with(r#"<div"#));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod attrs;
pub mod confirmation;
pub mod element;
pub mod error;
pub mod escape;
pub mod href;

// Re-exports for convenience
pub use attrs::{AttrMap, AttrValue};
pub use confirmation::Confirmation;
pub use element::{Child, Element, Rendered};
pub use error::{ElementError, Result};
pub use href::HrefElement;
