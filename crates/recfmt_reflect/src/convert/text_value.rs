use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use core::any::Any;

use thiserror::Error;

// -----------------------------------------------------------------------------
// ParseTextError

/// A text could not be converted into the requested value type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ParseTextError(Cow<'static, str>);

impl ParseTextError {
    /// Creates an error with the given reason.
    #[inline]
    pub fn new(reason: impl Into<Cow<'static, str>>) -> Self {
        Self(reason.into())
    }

    /// Returns the reason text.
    #[inline]
    pub fn reason(&self) -> &str {
        &self.0
    }
}

// -----------------------------------------------------------------------------
// TextValue

/// A member value type that can be written to and read from text.
///
/// For every value `v` the engine encodes, `from_text(&v.to_text())` must
/// give back `v`. The reverse is not required: `"+5"` may parse to `5`.
///
/// # Examples
///
/// ```
/// use recfmt_reflect::convert::{ParseTextError, TextValue};
///
/// #[derive(Debug, PartialEq)]
/// struct Celsius(i32);
///
/// impl TextValue for Celsius {
///     fn to_text(&self) -> String {
///         format!("{}C", self.0)
///     }
///
///     fn from_text(text: &str) -> Result<Self, ParseTextError> {
///         let digits = text.strip_suffix('C').ok_or(ParseTextError::new("missing unit"))?;
///         digits.parse().map(Celsius).map_err(|e| ParseTextError::new(format!("{e}")))
///     }
/// }
///
/// assert_eq!(Celsius(-4).to_text(), "-4C");
/// assert_eq!(Celsius::from_text("21C"), Ok(Celsius(21)));
/// ```
pub trait TextValue: Any + Send + Sync + Sized {
    /// Converts the value into its text form.
    fn to_text(&self) -> String;

    /// Parses a value out of its text form.
    fn from_text(text: &str) -> Result<Self, ParseTextError>;
}

macro_rules! impl_text_value_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TextValue for $ty {
                #[inline]
                fn to_text(&self) -> String {
                    self.to_string()
                }

                #[inline]
                fn from_text(text: &str) -> Result<Self, ParseTextError> {
                    text.parse::<$ty>()
                        .map_err(|e| ParseTextError::new(e.to_string()))
                }
            }
        )*
    };
}

impl_text_value_from_str!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl TextValue for char {
    #[inline]
    fn to_text(&self) -> String {
        self.to_string()
    }

    fn from_text(text: &str) -> Result<Self, ParseTextError> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            (None, _) => Err(ParseTextError::new("expected one character, found none")),
            (Some(_), Some(_)) => Err(ParseTextError::new("expected one character, found several")),
        }
    }
}

impl TextValue for String {
    #[inline]
    fn to_text(&self) -> String {
        self.clone()
    }

    #[inline]
    fn from_text(text: &str) -> Result<Self, ParseTextError> {
        Ok(text.into())
    }
}

// -----------------------------------------------------------------------------
// Tests
