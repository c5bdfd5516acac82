//! Cookie header parsing
//!
//! Extracts the anti-forgery token from a raw `Cookie` header value.

/// Name of the cookie holding the anti-forgery token
pub const CSRF_COOKIE: &str = "csrftoken";

/// Find the cookie called `name` in a `Cookie` header and URL-decode it
///
/// Entries are separated by `;`. The first match wins. Returns `None` when
/// the header is empty, the cookie is absent, or its value is not valid
/// percent-encoded UTF-8.
pub fn get_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(name)?.strip_prefix('='))
        .and_then(|raw| urlencoding::decode(raw).ok())
        .map(|value| value.into_owned())
}

/// The `csrftoken` cookie of a `Cookie` header
pub fn csrf_token_from_cookie(header: &str) -> Option<String> {
    get_cookie(header, CSRF_COOKIE)
}
