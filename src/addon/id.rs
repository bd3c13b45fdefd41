//! Item id codec.
//!
//! Ids have the form `<prefix>:<payload>` where the payload (a file path or a
//! series name) is percent-encoded with the same unreserved set as
//! JavaScript's `encodeURIComponent`, so an encoded payload never contains a
//! raw colon.

use std::borrow::Cow;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Prefix of movie ids; the payload is the movie's absolute path.
pub const MOVIE_PREFIX: &str = "local-movie";
/// Prefix of series ids; the payload is the series directory name.
pub const SERIES_PREFIX: &str = "local-series";

/// Everything except ASCII alphanumerics and `- _ . ! ~ * ' ( )` is escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode(payload: &str) -> Cow<'_, str> {
    utf8_percent_encode(payload, COMPONENT).into()
}

/// Inverse of [`encode`]. Returns None when the decoded bytes are not UTF-8.
pub fn decode(payload: &str) -> Option<Cow<'_, str>> {
    percent_decode_str(payload).decode_utf8().ok()
}

pub fn format_id(prefix: &str, payload: &str) -> String {
    format!("{}:{}", prefix, encode(payload))
}

/// Split an id on its first colon and decode the payload.
///
/// Returns None for an id without a colon or with an undecodable payload.
pub fn parse_id(id: &str) -> Option<(&str, Cow<'_, str>)> {
    let (prefix, payload) = id.split_once(':')?;
    Some((prefix, decode(payload)?))
}
