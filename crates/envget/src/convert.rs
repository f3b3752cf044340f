//! Conversion of raw text into typed values
//!
//! Each supported target type implements [`EnvValue`]. The implementation is
//! picked by the type of the default passed to [`crate::Resolver::resolve`],
//! so the choice is made at compile time.
//!
//! | type | accepted text |
//! |---|---|
//! | `String`, `PathBuf` | anything |
//! | integers | base-10, optional sign |
//! | `f32`, `f64` | decimal or scientific notation, signed `inf`, unsigned `nan` |
//! | `bool` | `1 t T TRUE true True` and `0 f F FALSE false False` |
//! | `Duration` | see [`crate::duration`] |
//! | [`Json<T>`] | a JSON document decodable into `T` |

use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::constants::{FALSE_LITERALS, TRUE_LITERALS};
use crate::duration::parse_duration;
use crate::{Error, Result};

/// A type that can be read from the text of an environment value.
pub trait EnvValue: Sized {
    /// Parse already-trimmed text.
    fn parse_env(text: &str) -> Result<Self>;
}

/// Trim `raw` and parse it as `T`.
pub fn try_convert<T: EnvValue>(raw: &str) -> Result<T> {
    T::parse_env(raw.trim())
}

/// Trim `raw` and parse it as `T`, returning `default` if that fails.
///
/// ```
/// use envget::convert;
///
/// assert_eq!(convert("  42\n", 0_i32), 42);
/// assert_eq!(convert("forty-two", 7_i32), 7);
/// ```
pub fn convert<T: EnvValue>(raw: &str, default: T) -> T {
    try_convert(raw).unwrap_or(default)
}

impl EnvValue for String {
    fn parse_env(text: &str) -> Result<Self> {
        Ok(text.to_string())
    }
}

impl EnvValue for PathBuf {
    fn parse_env(text: &str) -> Result<Self> {
        Ok(PathBuf::from(text))
    }
}

macro_rules! impl_integer {
    ($($ty:ty),* $(,)?) => {$(
        impl EnvValue for $ty {
            fn parse_env(text: &str) -> Result<Self> {
                text.parse::<$ty>()
                    .map_err(|e| Error::parse(stringify!($ty), text, e))
            }
        }
    )*};
}

impl_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Whether float text spells out an infinity rather than overflowing to one.
fn names_infinity(text: &str) -> bool {
    let unsigned = text.trim_start_matches(['+', '-']);
    unsigned
        .get(..3)
        .is_some_and(|head| head.eq_ignore_ascii_case("inf"))
}

macro_rules! impl_float {
    ($($ty:ty),* $(,)?) => {$(
        impl EnvValue for $ty {
            fn parse_env(text: &str) -> Result<Self> {
                let value = text
                    .parse::<$ty>()
                    .map_err(|e| Error::parse(stringify!($ty), text, e))?;
                if value.is_infinite() && !names_infinity(text) {
                    return Err(Error::parse(stringify!($ty), text, "value out of range"));
                }
                // Only infinities take a sign.
                if value.is_nan() && text.starts_with(['+', '-']) {
                    return Err(Error::parse(stringify!($ty), text, "signed NaN"));
                }
                Ok(value)
            }
        }
    )*};
}

impl_float!(f32, f64);

impl EnvValue for bool {
    fn parse_env(text: &str) -> Result<Self> {
        if TRUE_LITERALS.contains(&text) {
            Ok(true)
        } else if FALSE_LITERALS.contains(&text) {
            Ok(false)
        } else {
            Err(Error::parse("bool", text, "not a boolean literal"))
        }
    }
}

impl EnvValue for Duration {
    fn parse_env(text: &str) -> Result<Self> {
        parse_duration(text).map_err(|reason| Error::Duration {
            input: text.to_string(),
            reason,
        })
    }
}

/// A structured value carried as JSON text.
///
/// Wrap a default in `Json` to have the resolved text decoded with
/// `serde_json`. Fields absent from the text, and `null`, fail decoding and
/// yield the default unless the type marks them `#[serde(default)]`.
///
/// ```
/// use envget::{convert, Json};
/// use serde::Deserialize;
///
/// #[derive(Debug, Deserialize, PartialEq)]
/// struct Limits {
///     burst: u32,
/// }
///
/// let Json(limits) = convert(r#"{"burst": 20}"#, Json(Limits { burst: 5 }));
/// assert_eq!(limits, Limits { burst: 20 });
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Json<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> From<T> for Json<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T: DeserializeOwned> EnvValue for Json<T> {
    fn parse_env(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map(Json)
            .map_err(|e| Error::parse("JSON", text, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_is_trimmed() {
        assert_eq!(convert("\t hello world \n", String::new()), "hello world");
    }

    #[test]
    fn test_integer_widths() {
        assert_eq!(convert("-2147483648", 0_i32), i32::MIN);
        assert_eq!(convert("2147483648", 1_i32), 1);
        assert_eq!(convert("2147483648", 1_i64), 2_147_483_648);
        assert_eq!(convert("+17", 0_i64), 17);
        assert_eq!(convert("-1", 9_u16), 9);
        assert_eq!(convert("1_000", 3_i32), 3);
        assert_eq!(convert("0x10", 3_i32), 3);
    }

    #[test]
    fn test_float_forms() {
        assert_eq!(convert("2.5", 0.0_f64), 2.5);
        assert_eq!(convert("1e3", 0.0_f64), 1000.0);
        assert_eq!(convert("-Inf", 0.0_f64), f64::NEG_INFINITY);
        assert!(convert("NaN", 0.0_f64).is_nan());
        assert!(convert("nan", 0.0_f32).is_nan());
        assert_eq!(convert("-nan", 7.0_f64), 7.0);
        assert_eq!(convert("+NaN", 7.0_f64), 7.0);
        assert_eq!(convert("+inf", 7.0_f64), f64::INFINITY);
        assert_eq!(convert("1e400", 4.0_f64), 4.0);
        assert_eq!(convert("abc", 4.0_f64), 4.0);
    }

    #[test]
    fn test_bool_is_case_sensitive_beyond_listed_forms() {
        assert!(convert("True", false));
        assert!(!convert("tRuE", false));
        assert!(convert("fALSE", true));
    }

    #[test]
    fn test_json_decode() {
        let Json(values) = convert("[1, 2, 3]", Json(Vec::<u8>::new()));
        assert_eq!(values, vec![1, 2, 3]);

        let Json(values) = convert("[1, 2,", Json(vec![9_u8]));
        assert_eq!(values, vec![9]);
    }

    #[test]
    fn test_parse_error_reports_kind() {
        let err = try_convert::<u8>("300").unwrap_err();
        assert!(matches!(err, Error::Parse { kind: "u8", .. }));
        assert!(err.to_string().contains("\"300\""));
    }
}
