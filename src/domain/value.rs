// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed conversion of stored values.
//!
//! Every value in an [`Ini`](crate::domain::Ini) is stored as text. This module
//! provides the `FromIniValue` trait, which turns that text into a scalar type.
//! A conversion only succeeds if it consumes the whole (trimmed) string.

use crate::domain::errors::{IniError, Result};
use crate::domain::text::{trim, WHITESPACE};

/// A type that can be produced from a stored INI value.
///
/// Implementations exist for every primitive integer, `f32`, `f64`, `bool`, `char`
/// and `String`. Booleans accept `true` and `false` in any ASCII case. Floats must be
/// finite: `inf`, `NaN` and values that overflow to infinity are rejected.
///
/// # Examples
///
/// ```
/// use inicfg::domain::value::FromIniValue;
///
/// assert_eq!(u16::from_ini_value("port", "8080").unwrap(), 8080);
/// assert_eq!(bool::from_ini_value("debug", "TRUE").unwrap(), true);
/// assert!(i32::from_ini_value("n", "42abc").is_err());
/// ```
pub trait FromIniValue: Sized {
    /// Converts `raw` into `Self`.
    ///
    /// `key` is only used to describe the failure.
    fn from_ini_value(key: &str, raw: &str) -> Result<Self>;
}

macro_rules! impl_from_ini_value_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromIniValue for $ty {
                fn from_ini_value(key: &str, raw: &str) -> Result<Self> {
                    trim(raw, WHITESPACE)
                        .parse::<$ty>()
                        .map_err(|e| IniError::from_parse_int_error(key.to_string(), e))
                }
            }
        )*
    };
}

impl_from_ini_value_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_from_ini_value_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromIniValue for $ty {
                fn from_ini_value(key: &str, raw: &str) -> Result<Self> {
                    let value = trim(raw, WHITESPACE)
                        .parse::<$ty>()
                        .map_err(|e| IniError::from_parse_float_error(key.to_string(), e))?;
                    if value.is_finite() {
                        Ok(value)
                    } else {
                        Err(IniError::TypeConversionError {
                            key: key.to_string(),
                            target_type: "float".to_string(),
                            source: format!("non-finite value '{}'", trim(raw, WHITESPACE)).into(),
                        })
                    }
                }
            }
        )*
    };
}

impl_from_ini_value_float!(f32, f64);

impl FromIniValue for bool {
    fn from_ini_value(key: &str, raw: &str) -> Result<Self> {
        let raw = trim(raw, WHITESPACE);
        if raw.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if raw.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            // Both accepted forms are handled above; this only builds the ParseBoolError.
            raw.parse::<bool>()
                .map_err(|e| IniError::from_parse_bool_error(key.to_string(), e))
        }
    }
}

impl FromIniValue for char {
    fn from_ini_value(key: &str, raw: &str) -> Result<Self> {
        trim(raw, WHITESPACE)
            .parse::<char>()
            .map_err(|e| IniError::TypeConversionError {
                key: key.to_string(),
                target_type: "char".to_string(),
                source: Box::new(e),
            })
    }
}

impl FromIniValue for String {
    fn from_ini_value(_key: &str, raw: &str) -> Result<Self> {
        Ok(raw.to_string())
    }
}
