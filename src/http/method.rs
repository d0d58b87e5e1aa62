//! HTTP method constants and utilities

/// HTTP GET method
pub const GET: &str = "GET";

/// HTTP POST method
pub const POST: &str = "POST";

/// HTTP PUT method
pub const PUT: &str = "PUT";

/// HTTP PATCH method
pub const PATCH: &str = "PATCH";

/// HTTP DELETE method
pub const DELETE: &str = "DELETE";

/// HTTP HEAD method
pub const HEAD: &str = "HEAD";

/// HTTP OPTIONS method
pub const OPTIONS: &str = "OPTIONS";

/// All standard HTTP methods
pub const STANDARD_METHODS: &[&str] = &[GET, POST, PUT, PATCH, DELETE, HEAD, OPTIONS];

/// Check if a string is a standard HTTP method
///
/// Non-standard methods are still emitted; the CLI only uses this to warn.
pub fn is_standard(method: &str) -> bool {
    STANDARD_METHODS.iter().any(|&m| m.eq_ignore_ascii_case(method))
}

/// Method used when none is given: POST when the request has a body
pub fn infer(has_data: bool) -> &'static str {
    if has_data {
        POST
    } else {
        GET
    }
}
