//! Priority chain for resolving one value
//!
//! For a variable `NAME` the sources are tried in this order:
//!
//! 1. `NAME_FILE`, trimmed, as a path. A readable file wins.
//! 2. `NAME`, trimmed, as a path. A readable file wins.
//! 3. `NAME` as the literal value, untrimmed, if it is set at all.
//! 4. The caller's default.
//!
//! Once a file is read, lower levels are skipped even if its content does
//! not convert.

use std::fmt;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::constants::FILE_SUFFIX;
use crate::convert::{EnvValue, Json, convert, try_convert};
use crate::source::{EnvSource, ProcessEnv, read_file};
use crate::{Error, Result};

/// The priority level that supplied a raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Content of the file named by the file-indirection variable.
    FileVariable { variable: String, path: PathBuf },
    /// Content of the file named by the variable itself.
    DirectPath { variable: String, path: PathBuf },
    /// The variable's own value.
    Literal { variable: String },
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::FileVariable { variable, path } => {
                write!(f, "file {} (via {})", path.display(), variable)
            }
            Source::DirectPath { variable, path } => {
                write!(f, "file {} (path in {})", path.display(), variable)
            }
            Source::Literal { variable } => write!(f, "variable {}", variable),
        }
    }
}

/// Unconverted text together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawValue {
    pub source: Source,
    /// Exactly as read: file content or variable value, not trimmed.
    pub text: String,
}

/// Resolves typed values from an [`EnvSource`] and the filesystem.
///
/// A resolver holds no state besides its configuration; every call reads
/// the environment and files afresh.
#[derive(Debug, Clone)]
pub struct Resolver<E = ProcessEnv> {
    env: E,
    file_suffix: String,
}

impl Default for Resolver<ProcessEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver<ProcessEnv> {
    /// Create a resolver over the process environment.
    pub fn new() -> Self {
        Self::with_env(ProcessEnv)
    }
}

impl<E: EnvSource> Resolver<E> {
    /// Create a resolver over a custom environment.
    pub fn with_env(env: E) -> Self {
        Self {
            env,
            file_suffix: FILE_SUFFIX.to_string(),
        }
    }

    /// Use `suffix` instead of `_FILE` to name file-indirection variables.
    pub fn with_file_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.file_suffix = suffix.into();
        self
    }

    pub fn file_suffix(&self) -> &str {
        &self.file_suffix
    }

    /// Resolve `name` as `T`, falling back to `default`.
    ///
    /// Missing sources, unreadable files and unparseable text all end in
    /// `default`; this never fails.
    pub fn resolve<T: EnvValue>(&self, name: &str, default: T) -> T {
        match self.lookup(name) {
            Some(raw) => convert(&raw.text, default),
            None => default,
        }
    }

    /// Resolve a structured value decoded from JSON.
    pub fn resolve_json<T: DeserializeOwned>(&self, name: &str, default: T) -> T {
        self.resolve(name, Json(default)).into_inner()
    }

    /// Resolve `name` as `T`, reporting why no value was produced.
    ///
    /// Follows the same priority and short-circuit rules as
    /// [`Resolver::resolve`].
    pub fn try_resolve<T: EnvValue>(&self, name: &str) -> Result<T> {
        let raw = self.lookup(name).ok_or_else(|| Error::NotSet {
            variable: name.to_string(),
        })?;
        try_convert(&raw.text)
    }

    /// Find the raw text for `name` without converting it.
    ///
    /// Returns `None` when no source supplies text.
    pub fn lookup(&self, name: &str) -> Option<RawValue> {
        let file_variable = format!("{}{}", name, self.file_suffix);
        if let Some((path, text)) = self.read_path_variable(&file_variable) {
            let source = Source::FileVariable {
                variable: file_variable,
                path,
            };
            return Some(self.found(source, text));
        }

        if let Some((path, text)) = self.read_path_variable(name) {
            let source = Source::DirectPath {
                variable: name.to_string(),
                path,
            };
            return Some(self.found(source, text));
        }

        // Read again: the literal keeps surrounding whitespace.
        if let Some(text) = self.env.var(name) {
            let source = Source::Literal {
                variable: name.to_string(),
            };
            return Some(self.found(source, text));
        }

        trace!(variable = name, "no source set");
        None
    }

    fn found(&self, source: Source, text: String) -> RawValue {
        debug!(%source, "resolved configuration value");
        RawValue { source, text }
    }

    /// Treat a variable's trimmed value as a path and read that file.
    fn read_path_variable(&self, variable: &str) -> Option<(PathBuf, String)> {
        let value = self.env.var(variable)?;
        let path = value.trim();
        if path.is_empty() {
            return None;
        }

        match read_file(path) {
            Ok(text) => Some((PathBuf::from(path), text)),
            Err(e) => {
                trace!(variable, error = %e, "path not readable");
                None
            }
        }
    }
}
