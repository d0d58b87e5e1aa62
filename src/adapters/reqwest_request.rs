//! Extraction from `reqwest::Request`

use super::{body_from_bytes, read_header_map, RequestLike, RequestParts};

impl RequestLike for reqwest::Request {
    fn extract(&self) -> RequestParts {
        let mut parts = RequestParts {
            method: Some(self.method().as_str().to_string()),
            url: Some(self.url().as_str().to_string()),
            ..RequestParts::default()
        };

        read_header_map(self.headers(), &mut parts);

        if let Some(body) = self.body() {
            match body.as_bytes() {
                Some(bytes) => parts.body = body_from_bytes(bytes, &mut parts),
                None => parts.warn("Streaming request body cannot be shown and was omitted"),
            }
        }

        parts
    }
}
