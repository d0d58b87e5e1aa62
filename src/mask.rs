//! Sensitive header masking
//!
//! Header values whose names appear in a case-insensitive deny-list are
//! replaced by [`MASK`] when masking is enabled.

use indexmap::IndexSet;
use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder emitted instead of a masked header value
pub const MASK: &str = "********";

/// Header names masked when the host has not overridden the list
pub const DEFAULT_SENSITIVE_HEADERS: &[&str] = &[
    "authorization",
    "api-key",
    "apikey",
    "x-api-key",
    "token",
    "secret",
    "password",
    "access-token",
    "refresh-token",
    "session-token",
];

/// Case-insensitive, insertion-ordered set of header names
///
/// Names are stored lower-cased, so `Authorization` and `AUTHORIZATION`
/// are the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SensitiveHeaders(IndexSet<String>);

impl Default for SensitiveHeaders {
    fn default() -> Self {
        DEFAULT_SENSITIVE_HEADERS.iter().copied().collect()
    }
}

impl SensitiveHeaders {
    /// An empty set (nothing is ever masked)
    pub fn empty() -> Self {
        Self(IndexSet::new())
    }

    /// Add a name; returns false if it was already present
    pub fn insert(&mut self, name: impl AsRef<str>) -> bool {
        self.0.insert(name.as_ref().to_lowercase())
    }

    /// Remove a name; returns true if it was present
    pub fn remove(&mut self, name: &str) -> bool {
        self.0.shift_remove(&name.to_lowercase())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(&name.to_lowercase())
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the stored (lower-cased) names
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for SensitiveHeaders {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::empty();
        set.extend(iter);
        set
    }
}

impl<S: AsRef<str>> Extend<S> for SensitiveHeaders {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name);
        }
    }
}

impl<'de> Deserialize<'de> for SensitiveHeaders {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;
        Ok(names.into_iter().collect())
    }
}

/// Decide whether the value of `header_name` must be redacted
pub fn should_mask(header_name: &str, masking_enabled: bool, sensitive: &SensitiveHeaders) -> bool {
    if !masking_enabled {
        return false;
    }
    sensitive.contains(header_name)
}

/// Return the value to emit for a header: the mask or the original
pub fn masked_value<'a>(
    header_name: &str,
    value: &'a str,
    masking_enabled: bool,
    sensitive: &SensitiveHeaders,
) -> &'a str {
    if should_mask(header_name, masking_enabled, sensitive) {
        MASK
    } else {
        value
    }
}
