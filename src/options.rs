//! Transport flags and their merge with configured defaults

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// curl-level behaviour switches, independent of the request itself
///
/// Values are never mutated by the merge; [`TransportFlags::merged_over`]
/// builds a new instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportFlags {
    /// `--insecure`
    pub insecure: bool,
    /// `--compressed`
    pub compressed: bool,
    /// `--verbose`
    pub verbose: bool,
    /// `--location` (follow redirects)
    pub location: bool,
    /// `--max-time <N>` in seconds
    pub max_time: Option<u64>,
    /// Raw flag strings appended after the known flags, emitted verbatim
    pub custom_flags: Vec<String>,
}

impl TransportFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }

    pub fn with_compressed(mut self, compressed: bool) -> Self {
        self.compressed = compressed;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_location(mut self, location: bool) -> Self {
        self.location = location;
        self
    }

    pub fn with_max_time(mut self, seconds: u64) -> Self {
        self.max_time = Some(seconds);
        self
    }

    pub fn with_custom_flag(mut self, flag: impl Into<String>) -> Self {
        self.custom_flags.push(flag.into());
        self
    }

    /// Combine these (caller) flags with `defaults`.
    ///
    /// Booleans are OR-ed, the caller's `max_time` wins when set and
    /// custom flags keep the defaults first.
    pub fn merged_over(&self, defaults: &TransportFlags) -> TransportFlags {
        TransportFlags {
            insecure: self.insecure || defaults.insecure,
            compressed: self.compressed || defaults.compressed,
            verbose: self.verbose || defaults.verbose,
            location: self.location || defaults.location,
            max_time: self.max_time.or(defaults.max_time),
            custom_flags: defaults
                .custom_flags
                .iter()
                .chain(self.custom_flags.iter())
                .cloned()
                .collect(),
        }
    }

    /// Command-line tokens for these flags in their fixed emission order
    pub fn to_tokens(&self) -> Vec<String> {
        let mut tokens = Vec::new();

        if self.insecure {
            tokens.push("--insecure".to_string());
        }
        if self.compressed {
            tokens.push("--compressed".to_string());
        }
        if self.verbose {
            tokens.push("--verbose".to_string());
        }
        if self.location {
            tokens.push("--location".to_string());
        }
        if let Some(seconds) = self.max_time {
            tokens.push(format!("--max-time {}", seconds));
        }
        tokens.extend(self.custom_flags.iter().cloned());

        tokens
    }
}

/// Resolve the effective flags for one call.
///
/// A new value is built only when both sides are present; otherwise the
/// present side (or `None`) is handed back borrowed.
pub fn merge<'a>(
    caller: Option<&'a TransportFlags>,
    defaults: Option<&'a TransportFlags>,
) -> Option<Cow<'a, TransportFlags>> {
    match (caller, defaults) {
        (Some(caller), Some(defaults)) => Some(Cow::Owned(caller.merged_over(defaults))),
        (None, Some(defaults)) => Some(Cow::Borrowed(defaults)),
        (caller, None) => caller.map(Cow::Borrowed),
    }
}
