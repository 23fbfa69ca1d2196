//! Inline confirmation-dialog expression helper

use std::fmt;

use crate::attrs::AttrValue;

/// Builds the inline `confirm()` expression used as an event-handler
/// attribute value
///
/// The message is interpolated as-is; quoting or escaping it is the
/// caller's responsibility.
///
/// # Examples
///
/// ```
/// use fluent_html::Confirmation;
///
/// let confirmation = Confirmation::new("Delete this record?");
/// assert_eq!(
///     confirmation.expression(),
///     "return confirm('Delete this record?');"
/// );
/// assert_eq!(confirmation.to_string(), confirmation.expression());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
	text: String,
}

impl Confirmation {
	/// Creates a confirmation with the given message
	pub fn new(text: impl Into<String>) -> Self {
		Self { text: text.into() }
	}

	/// The confirmation message
	pub fn text(&self) -> &str {
		&self.text
	}

	/// The event-handler expression for this message
	pub fn expression(&self) -> String {
		format!("return confirm('{}');", self.text)
	}
}

impl fmt::Display for Confirmation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.expression())
	}
}

impl From<Confirmation> for AttrValue {
	fn from(confirmation: Confirmation) -> Self {
		AttrValue::Text(confirmation.expression())
	}
}
