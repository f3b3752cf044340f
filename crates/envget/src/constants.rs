//! Fixed names and literals shared across the crate

/// Suffix appended to a variable name to form its file-indirection variable.
///
/// `DB_PASSWORD` is paired with `DB_PASSWORD_FILE`.
pub const FILE_SUFFIX: &str = "_FILE";

/// Spellings accepted as boolean `true`.
pub const TRUE_LITERALS: &[&str] = &["1", "t", "T", "TRUE", "true", "True"];

/// Spellings accepted as boolean `false`.
pub const FALSE_LITERALS: &[&str] = &["0", "f", "F", "FALSE", "false", "False"];
