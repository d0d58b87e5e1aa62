//! Process-wide default configuration
//!
//! The global [`Config`] sits behind a lock. [`global`] hands out a clone,
//! so a `create` call reads the configuration once and is unaffected by
//! writes that happen while it runs. Writers go through [`update`],
//! [`replace`], [`set_logging_sink`] and [`reset`].

mod config;

pub use config::{Config, LoggingSink};

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use once_cell::sync::Lazy;

static GLOBAL: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

// Config holds plain data, so a panic during a write cannot leave it in a
// state worth refusing to read.
fn read_lock() -> RwLockReadGuard<'static, Config> {
    GLOBAL.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_lock() -> RwLockWriteGuard<'static, Config> {
    GLOBAL.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Snapshot of the current global configuration
pub fn global() -> Config {
    read_lock().clone()
}

/// Mutate the global configuration in place
pub fn update<F>(f: F)
where
    F: FnOnce(&mut Config),
{
    f(&mut write_lock());
}

/// Replace the global configuration wholesale
pub fn replace(config: Config) {
    *write_lock() = config;
}

/// Install a custom logging sink
pub fn set_logging_sink<F>(sink: F)
where
    F: Fn(&str) + Send + Sync + 'static,
{
    write_lock().logging_sink = Some(Arc::new(sink));
}

/// Restore the built-in defaults, including removing any custom sink
pub fn reset() {
    replace(Config::default());
}
