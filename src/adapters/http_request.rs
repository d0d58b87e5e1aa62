//! Extraction from `http::Request<B>`

use bytes::Bytes;

use super::{body_from_bytes, read_header_map, RequestLike, RequestParts};

/// Request bodies that are fully in memory
pub trait HttpBody {
    /// Body bytes; `None` when there is no body
    fn body_bytes(&self) -> Option<&[u8]>;
}

impl HttpBody for () {
    fn body_bytes(&self) -> Option<&[u8]> {
        None
    }
}

impl HttpBody for String {
    fn body_bytes(&self) -> Option<&[u8]> {
        Some(self.as_bytes())
    }
}

impl HttpBody for &str {
    fn body_bytes(&self) -> Option<&[u8]> {
        Some(self.as_bytes())
    }
}

impl HttpBody for Vec<u8> {
    fn body_bytes(&self) -> Option<&[u8]> {
        Some(self.as_slice())
    }
}

impl HttpBody for Bytes {
    fn body_bytes(&self) -> Option<&[u8]> {
        Some(self.as_ref())
    }
}

impl<B: HttpBody> RequestLike for http::Request<B> {
    fn extract(&self) -> RequestParts {
        let uri = self.uri();
        let mut parts = RequestParts {
            method: Some(self.method().as_str().to_string()),
            url: Some(uri.to_string()),
            ..RequestParts::default()
        };

        if uri.scheme().is_none() {
            parts.warn(format!("Request URI '{}' has no scheme", uri));
        }

        read_header_map(self.headers(), &mut parts);

        if let Some(bytes) = self.body().body_bytes() {
            parts.body = body_from_bytes(bytes, &mut parts);
        }

        parts
    }
}
