//! Config value and config file handling

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::errors::CurlgenError;
use crate::mask::SensitiveHeaders;
use crate::options::TransportFlags;

/// Receives every generated command when debug output is enabled
pub type LoggingSink = Arc<dyn Fn(&str) + Send + Sync>;

/// Defaults applied to every `create` call that does not override them
#[derive(Clone)]
pub struct Config {
    /// Hand each generated command to the logging sink
    pub show_debug_output: bool,
    /// Replace sensitive header values with the mask
    pub mask_sensitive: bool,
    /// Use line continuations between tokens
    pub formatted: bool,
    /// Flags merged into every command
    pub transport_flags: Option<TransportFlags>,
    /// Header names whose values are masked
    pub sensitive_headers: SensitiveHeaders,
    /// Custom sink; `None` logs through `tracing`
    pub logging_sink: Option<LoggingSink>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_debug_output: true,
            mask_sensitive: false,
            formatted: false,
            transport_flags: None,
            sensitive_headers: SensitiveHeaders::default(),
            logging_sink: None,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("show_debug_output", &self.show_debug_output)
            .field("mask_sensitive", &self.mask_sensitive)
            .field("formatted", &self.formatted)
            .field("transport_flags", &self.transport_flags)
            .field("sensitive_headers", &self.sensitive_headers)
            .field("logging_sink", &self.logging_sink.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl Config {
    /// Load configuration from the default config file (TOML format)
    ///
    /// A missing file is not an error and yields the built-in defaults.
    pub fn load() -> Result<Self, CurlgenError> {
        let config_file = Self::default_config_dir().join("config.toml");

        if !config_file.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&config_file)
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self, CurlgenError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CurlgenError::Config(format!("Failed to read config {}: {}", path.display(), e)))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text, starting from the built-in defaults
    pub fn from_toml_str(content: &str) -> Result<Self, CurlgenError> {
        let toml_value: toml::Value = toml::from_str(content)
            .map_err(|e| CurlgenError::Config(format!("Invalid config TOML: {}", e)))?;

        let mut config = Self::default();

        if let Some(defaults) = toml_value.get("defaults") {
            if let Some(v) = Self::get_bool(defaults, "show_debug_output")? {
                config.show_debug_output = v;
            }
            if let Some(v) = Self::get_bool(defaults, "mask_sensitive")? {
                config.mask_sensitive = v;
            }
            if let Some(v) = Self::get_bool(defaults, "formatted")? {
                config.formatted = v;
            }

            if let Some(transport) = defaults.get("transport") {
                let flags: TransportFlags = transport
                    .clone()
                    .try_into()
                    .map_err(|e| CurlgenError::Config(format!("Invalid [defaults.transport]: {}", e)))?;
                config.transport_flags = Some(flags);
            }
        }

        if let Some(masking) = toml_value.get("masking") {
            if let Some(names) = Self::get_string_list(masking, "sensitive_headers")? {
                config.sensitive_headers = names.into_iter().collect();
            }
            if let Some(extra) = Self::get_string_list(masking, "extra_sensitive_headers")? {
                config.sensitive_headers.extend(extra);
            }
        }

        Ok(config)
    }

    fn get_bool(table: &toml::Value, key: &str) -> Result<Option<bool>, CurlgenError> {
        match table.get(key) {
            None => Ok(None),
            Some(v) => v
                .as_bool()
                .map(Some)
                .ok_or_else(|| CurlgenError::Config(format!("'{}' must be a boolean", key))),
        }
    }

    fn get_string_list(table: &toml::Value, key: &str) -> Result<Option<Vec<String>>, CurlgenError> {
        let Some(value) = table.get(key) else {
            return Ok(None);
        };

        let arr = value
            .as_array()
            .ok_or_else(|| CurlgenError::Config(format!("'{}' must be an array of strings", key)))?;

        arr.iter()
            .map(|v| {
                v.as_str()
                    .map(String::from)
                    .ok_or_else(|| CurlgenError::Config(format!("'{}' must be an array of strings", key)))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    /// Get the default config directory
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|p| p.join("curlgen"))
            .unwrap_or_else(|| PathBuf::from(".curlgen"))
    }

    pub fn with_logging_sink<F>(mut self, sink: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.logging_sink = Some(Arc::new(sink));
        self
    }
}
