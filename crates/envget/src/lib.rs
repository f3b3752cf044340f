//! Typed configuration values from environment variables and secret files
//!
//! A value named `NAME` may come from the file named by `NAME_FILE`, from the
//! file named by `NAME`, from `NAME` itself, or from the caller's default,
//! in that order. The default's type decides how the text is converted, and
//! any failure along the way falls back to the default.
//!
//! ```no_run
//! use std::time::Duration;
//!
//! let port: i32 = envget::resolve("PORT", 8080);
//! let timeout = envget::resolve("REQUEST_TIMEOUT", Duration::from_secs(30));
//! let password = envget::resolve("DB_PASSWORD", String::new());
//! ```
//!
//! Use a [`Resolver`] over a [`MapEnv`] to resolve against something other
//! than the process environment.

pub mod constants;
pub mod convert;
pub mod duration;
pub mod error;
pub mod resolver;
pub mod source;

pub use convert::{EnvValue, Json, convert, try_convert};
pub use duration::{DurationError, parse_duration};
pub use error::{Error, Result};
pub use resolver::{RawValue, Resolver, Source};
pub use source::{EnvSource, MapEnv, ProcessEnv};

use serde::de::DeserializeOwned;

/// Resolve `name` from the process environment, falling back to `default`.
pub fn resolve<T: EnvValue>(name: &str, default: T) -> T {
    Resolver::new().resolve(name, default)
}

/// Resolve a JSON-encoded structured value from the process environment.
pub fn resolve_json<T: DeserializeOwned>(name: &str, default: T) -> T {
    Resolver::new().resolve_json(name, default)
}

/// Resolve `name` from the process environment, reporting failures.
pub fn try_resolve<T: EnvValue>(name: &str) -> Result<T> {
    Resolver::new().try_resolve(name)
}

/// Find the raw text for `name` in the process environment.
pub fn lookup(name: &str) -> Option<RawValue> {
    Resolver::new().lookup(name)
}
