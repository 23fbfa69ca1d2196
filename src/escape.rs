//! Escaping primitives for markup output
//!
//! Text content and attribute values pass through these functions exactly
//! once, at render time. Raw markup fragments attached as children bypass
//! them entirely.

/// Escape HTML special characters in text content
///
/// # Examples
///
/// ```
/// use fluent_html::escape::escape;
///
/// assert_eq!(escape("Hello, World!"), "Hello, World!");
/// assert_eq!(escape("<script>alert('XSS')</script>"),
///            "&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;/script&gt;");
/// assert_eq!(escape("5 < 10 & 10 > 5"), "5 &lt; 10 &amp; 10 &gt; 5");
/// ```
pub fn escape(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			_ => result.push(ch),
		}
	}
	result
}

/// Escape a value for use inside a quoted HTML attribute
///
/// Covers the same characters as [`escape`] plus literal whitespace control
/// characters, which would otherwise survive into the attribute string.
///
/// # Examples
///
/// ```
/// use fluent_html::escape::escape_attr;
///
/// assert_eq!(escape_attr("value"), "value");
/// assert_eq!(escape_attr("value with \"quotes\""),
///            "value with &quot;quotes&quot;");
/// assert_eq!(escape_attr("line\nbreak"), "line&#10;break");
/// ```
pub fn escape_attr(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			'\n' => result.push_str("&#10;"),
			'\r' => result.push_str("&#13;"),
			'\t' => result.push_str("&#9;"),
			_ => result.push(ch),
		}
	}
	result
}

/// URL encode a string for use in a query component
///
/// Uses `application/x-www-form-urlencoded` rules: unreserved characters
/// pass through, space becomes `+`, everything else is percent-encoded
/// per UTF-8 byte.
///
/// # Examples
///
/// ```
/// use fluent_html::escape::urlencode;
///
/// assert_eq!(urlencode("hello world"), "hello+world");
/// assert_eq!(urlencode("hello@world.com"), "hello%40world.com");
/// assert_eq!(urlencode("test&value=1"), "test%26value%3D1");
/// ```
pub fn urlencode(text: &str) -> String {
	let mut result = String::with_capacity(text.len() * 3);
	for byte in text.as_bytes() {
		match byte {
			b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
				result.push(*byte as char);
			}
			b' ' => result.push('+'),
			_ => {
				result.push('%');
				result.push_str(&format!("{:02X}", byte));
			}
		}
	}
	result
}


#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		#[test]
		fn prop_escape_no_special_chars(s in "\\PC*") {
			let escaped = escape(&s);
			assert!(!escaped.contains('<'));
			assert!(!escaped.contains('>'));
			assert!(!escaped.contains('"'));
			assert!(!escaped.contains('\''));
		}

		#[test]
		fn prop_escape_attr_no_raw_whitespace_controls(s in "\\PC*") {
			let escaped = escape_attr(&s);
			assert!(!escaped.contains('\n'));
			assert!(!escaped.contains('\r'));
			assert!(!escaped.contains('\t'));
			assert!(!escaped.contains('"'));
		}

		#[test]
		fn prop_escape_roundtrip_safe_input(s in "[a-zA-Z0-9 .,!?-]*") {
			// Inputs with no special characters come back unchanged
			assert_eq!(escape(&s), s);
			assert_eq!(escape_attr(&s), s);
		}

		#[test]
		fn prop_urlencode_ascii_output(s in "\\PC*") {
			let encoded = urlencode(&s);
			assert!(encoded.is_ascii());
			assert!(!encoded.contains(' '));
			assert!(!encoded.contains('&'));
			assert!(!encoded.contains('='));
		}
	}
}
