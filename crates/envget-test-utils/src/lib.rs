//! Shared test utilities for the envget workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`secrets`]: [`SecretDir`] for writing value files into a temp dir
//! - [`vars`]: unique variable names for tests that touch the process environment

pub mod secrets;
pub mod vars;

pub use secrets::SecretDir;
pub use vars::unique_var;
