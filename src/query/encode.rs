//! Percent-encoding helpers for `search_query` terms.
//!
//! Only the wrapping characters are encoded. The wrapped text is passed
//! through untouched, so callers are responsible for its content.

use url::form_urlencoded::byte_serialize;

/// Form-encode a literal fragment (space becomes `+`)
pub(crate) fn encode(fragment: &str) -> String {
    byte_serialize(fragment.as_bytes()).collect()
}

/// Wrap `s` in encoded double quotes: `test` → `%22test%22`
pub fn enquote(s: &str) -> String {
    let quote = encode("\"");
    format!("{quote}{s}{quote}")
}

/// Wrap `s` in encoded parentheses: `test` → `%28test%29`
pub fn parenthesize(s: &str) -> String {
    format!("{}{}{}", encode("("), s, encode(")"))
}
