//! Safe embedding of caller-supplied identifiers in request paths.
//!
//! Service ids, application names, and user ids come from callers and may
//! contain reserved characters; interpolating them raw would change the
//! route the server sees. Everything outside the URL "unreserved" set is
//! percent-encoded.

use percent_encoding::{utf8_percent_encode, AsciiSet, PercentEncode, NON_ALPHANUMERIC};

/// Everything except RFC 3986 unreserved characters gets encoded. This is
/// strict enough for both path segments and query values.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Encodes a value for use as a single path segment.
///
/// The return value implements `Display`, so it can be interpolated into
/// path templates directly.
pub fn segment(value: &str) -> PercentEncode<'_> {
    utf8_percent_encode(value, COMPONENT)
}

/// Encodes a value for use in a query string.
pub fn query_value(value: &str) -> PercentEncode<'_> {
    utf8_percent_encode(value, COMPONENT)
}
