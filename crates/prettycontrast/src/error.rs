//! Utility module with prettycontrast's errors.
//!
//! Only the strict, opt-in entry points return these errors. The permissive
//! defaults, [`hex_to_rgb`](crate::hex_to_rgb) and [`TextSize as
//! From<&str>`](crate::TextSize), never fail.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An erroneous hexadecimal color.
///
/// A well-formed hexadecimal color has an optional leading `#` followed by
/// exactly six hexadecimal digits, two for each of red, green, and blue.
/// Letters may be upper- or lowercase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HexFormatError {
    /// A color with the wrong number of characters. For example, `#fff` is
    /// three digits short and `#ff00001` has one digit too many.
    UnexpectedLength,

    /// A color with the right length but with characters that are not
    /// hexadecimal digits. For example, `#00gg00` has two.
    MalformedHex,
}

impl core::fmt::Display for HexFormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use HexFormatError::*;

        match self {
            UnexpectedLength => {
                f.write_str("hex color should have 6 digits after an optional `#`")
            }
            MalformedHex => f.write_str("hex color should contain only hexadecimal digits"),
        }
    }
}

impl core::error::Error for HexFormatError {}

#[cfg(feature = "pyffi")]
impl From<HexFormatError> for PyErr {
    fn from(value: HexFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An unknown text size.
///
/// Strict parsing of [`TextSize`](crate::TextSize) only accepts the exact,
/// lowercase strings `small` and `large`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextSizeError {
    /// The rejected text size.
    pub value: String,
}

impl TextSizeError {
    /// Create a new text size error.
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_owned(),
        }
    }
}

impl core::fmt::Display for TextSizeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "text size should be `small` or `large` but is `{}`",
            self.value
        ))
    }
}

impl core::error::Error for TextSizeError {}

#[cfg(feature = "pyffi")]
impl From<TextSizeError> for PyErr {
    fn from(value: TextSizeError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::{HexFormatError, TextSizeError};

    #[test]
    fn test_display() {
        assert_eq!(
            HexFormatError::UnexpectedLength.to_string(),
            "hex color should have 6 digits after an optional `#`"
        );
        assert_eq!(
            TextSizeError::new("huge").to_string(),
            "text size should be `small` or `large` but is `huge`"
        );
    }
}
