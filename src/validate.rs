//! Structural validation of method and URL

use url::Url;

use crate::errors::{CurlgenError, Result};

/// Reject an empty method, an empty URL, or a URL without a scheme.
///
/// Runs before any token is produced, so a failure never leaves a
/// partially built command behind.
pub fn validate(method: &str, url: &str) -> Result<()> {
    if method.is_empty() {
        return Err(CurlgenError::invalid("Method cannot be empty"));
    }

    if url.is_empty() {
        return Err(CurlgenError::invalid("URL cannot be empty"));
    }

    parse_url(url).map(|_| ())
}

/// Parse `url` as an absolute URL; any scheme is accepted
pub fn parse_url(url: &str) -> Result<Url> {
    match Url::parse(url) {
        Ok(parsed) => Ok(parsed),
        Err(url::ParseError::RelativeUrlWithoutBase) => Err(CurlgenError::invalid(format!(
            "Invalid URL: {} (URL must include a scheme such as https://)",
            url
        ))),
        Err(e) => Err(CurlgenError::invalid(format!("Invalid URL: {} ({})", url, e))),
    }
}
