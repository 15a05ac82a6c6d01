//! Classifying contrast ratios as accessible or not.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::contrast_ratio;
use crate::error::TextSizeError;
use crate::Float;

/// The size of text shown on a background.
///
/// The text size determines the minimum contrast ratio a pair of colors must
/// meet to be accessible: 3 for [`TextSize::Small`] and 4.5 for
/// [`TextSize::Large`].
///
/// Converting from a string with [`TextSize as
/// From<&str>`](enum.TextSize.html#impl-From%3C%26str%3E-for-TextSize) is
/// permissive: Only the exact string `small` selects [`TextSize::Small`] and
/// every other string, including `Small` and the empty string, selects
/// [`TextSize::Large`]. Parsing with [`TextSize as
/// FromStr`](enum.TextSize.html#impl-FromStr-for-TextSize) is strict and
/// rejects anything but `small` and `large`.
///
/// ```
/// # use prettycontrast::TextSize;
/// assert_eq!(TextSize::from("small"), TextSize::Small);
/// assert_eq!(TextSize::from("Small"), TextSize::Large);
/// assert!("Small".parse::<TextSize>().is_err());
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "prettycontrast.contrast")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextSize {
    /// Small text, accessible from a contrast ratio of 3 up.
    Small,
    /// Large text, accessible from a contrast ratio of 4.5 up.
    #[default]
    Large,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl TextSize {
    /// Resolve the string to a text size, falling back on large text. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn resolve(s: &str) -> Self {
        Self::from(s)
    }

    /// Parse the string as a text size, accepting `small` and `large` only.
    /// <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(s: &str) -> Result<Self, TextSizeError> {
        s.parse()
    }

    /// Get this text size's lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Large => "large",
        }
    }

    /// Get the minimum contrast ratio for accessible text of this size.
    pub fn threshold(&self) -> Float {
        match self {
            Self::Small => 3.0,
            Self::Large => 4.5,
        }
    }

    /// Determine whether the contrast ratio is accessible for text of this
    /// size. Ratios equal to the threshold are accessible.
    pub fn is_accessible(&self, ratio: Float) -> bool {
        self.threshold() <= ratio
    }
}

impl From<&str> for TextSize {
    fn from(value: &str) -> Self {
        match value {
            "small" => Self::Small,
            "large" => Self::Large,
            _ => {
                tracing::debug!(input = value, "falling back on large text for unknown text size");
                Self::Large
            }
        }
    }
}

impl core::str::FromStr for TextSize {
    type Err = TextSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(Self::Small),
            "large" => Ok(Self::Large),
            _ => Err(TextSizeError::new(s)),
        }
    }
}

impl core::fmt::Display for TextSize {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// ====================================================================================================================

/// The contrast between two colors.
///
/// A contrast combines the WCAG 2.x contrast ratio, which ranges from 1 to 21,
/// with the text size it was classified for and the verdict on whether the
/// ratio is accessible for that text size. Its display shows the ratio with
/// two digits after the decimal by default.
///
/// ```
/// # use prettycontrast::{calculate, TextSize};
/// let contrast = calculate([255, 0, 0], [0, 0, 0], "small");
/// assert!(contrast.is_accessible());
/// assert_eq!(contrast.text_size(), TextSize::Small);
/// assert_eq!(format!("{}", contrast), "5.25:1");
/// assert_eq!(format!("{:.1}", contrast), "5.3:1");
/// ```
#[cfg_attr(feature = "pyffi", pyclass(frozen, module = "prettycontrast.contrast"))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Contrast {
    ratio: Float,
    text_size: TextSize,
    is_accessible: bool,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Contrast {
    /// Create a new contrast from the ratio and text size. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[new]
    pub fn py_new(ratio: Float, text_size: TextSize) -> Self {
        Self::new(ratio, text_size)
    }

    /// Get the contrast ratio.
    pub fn ratio(&self) -> Float {
        self.ratio
    }

    /// Get the text size the ratio was classified for.
    pub fn text_size(&self) -> TextSize {
        self.text_size
    }

    /// Determine whether the ratio is accessible for the text size.
    pub fn is_accessible(&self) -> bool {
        self.is_accessible
    }

    /// Convert this contrast to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!(
            "Contrast(ratio={}, text_size={}, is_accessible={})",
            self.ratio, self.text_size, self.is_accessible
        )
    }

    /// Convert this contrast to a ratio string. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl Contrast {
    /// Create a new contrast, classifying the ratio for the text size.
    pub fn new(ratio: Float, text_size: TextSize) -> Self {
        Self {
            ratio,
            text_size,
            is_accessible: text_size.is_accessible(ratio),
        }
    }
}

impl core::fmt::Display for Contrast {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let precision = f.precision().unwrap_or(2);
        f.write_fmt(format_args!("{:.*}:1", precision, self.ratio))
    }
}

/// Calculate the contrast between two RGB colors for the given text size.
///
/// This function computes the WCAG 2.x contrast ratio with
/// [`contrast_ratio`](crate::contrast_ratio), so the order of the two colors
/// does not matter. It then classifies the ratio for the text size resolved
/// with [`TextSize as
/// From<&str>`](enum.TextSize.html#impl-From%3C%26str%3E-for-TextSize), i.e.,
/// `small` requires a ratio of at least 3 and any other string a ratio of at
/// least 4.5.
///
/// ```
/// # use prettycontrast::calculate;
/// let contrast = calculate([0, 0, 0], [255, 255, 255], "large");
/// assert!((contrast.ratio() - 21.0).abs() < 1e-9);
/// assert!(contrast.is_accessible());
///
/// let contrast = calculate([0, 0, 0], [0, 0, 255], "whatever");
/// assert!(!contrast.is_accessible());
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn calculate(rgb1: [u8; 3], rgb2: [u8; 3], text_size: &str) -> Contrast {
    Contrast::new(contrast_ratio(rgb1, rgb2), TextSize::from(text_size))
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{calculate, Contrast, TextSize};
    use crate::assert_close_enough;
    use crate::error::TextSizeError;
    use rand::Rng;

    #[test]
    fn test_text_size() -> Result<(), TextSizeError> {
        assert_eq!(TextSize::from("small"), TextSize::Small);
        assert_eq!(TextSize::from("large"), TextSize::Large);
        assert_eq!(TextSize::from("SMALL"), TextSize::Large);
        assert_eq!(TextSize::from(" small"), TextSize::Large);
        assert_eq!(TextSize::from(""), TextSize::Large);
        assert_eq!(TextSize::default(), TextSize::Large);

        assert_eq!("small".parse::<TextSize>()?, TextSize::Small);
        assert_eq!("large".parse::<TextSize>()?, TextSize::Large);
        assert_eq!("medium".parse::<TextSize>(), Err(TextSizeError::new("medium")));

        assert_eq!(TextSize::Small.to_string(), "small");
        assert_eq!(TextSize::Large.to_string(), "large");
        Ok(())
    }

    #[test]
    fn test_thresholds() {
        assert!(TextSize::Small.is_accessible(3.0));
        assert!(!TextSize::Small.is_accessible(2.999_999));
        assert!(TextSize::Large.is_accessible(4.5));
        assert!(!TextSize::Large.is_accessible(4.499_999));

        assert!(Contrast::new(3.0, TextSize::Small).is_accessible());
        assert!(!Contrast::new(3.0, TextSize::Large).is_accessible());
        assert!(Contrast::new(4.5, TextSize::from("huge")).is_accessible());
        assert!(!Contrast::new(4.499_999, TextSize::from("huge")).is_accessible());
    }

    #[test]
    fn test_calculate() {
        for (rgb1, rgb2, ratio) in [
            ([0, 0, 0], [255, 255, 255], 21.0),
            ([255, 255, 255], [0, 0, 0], 21.0),
            ([255, 0, 0], [0, 0, 0], 5.252),
            ([0, 0, 0], [255, 0, 0], 5.252),
            ([0, 0, 0], [0, 255, 0], 15.304),
        ] {
            for text_size in ["small", "large"] {
                let contrast = calculate(rgb1, rgb2, text_size);
                assert_close_enough!(contrast.ratio(), ratio);
                assert!(contrast.is_accessible());
            }
        }

        // Blue on black passes neither threshold.
        let contrast = calculate([0, 0, 0], [0, 0, 255], "large");
        assert_close_enough!(contrast.ratio(), 2.444);
        assert!(!contrast.is_accessible());
        assert!(!calculate([0, 0, 0], [0, 0, 255], "small").is_accessible());

        // #898989 on white sits between the two thresholds at 3.5.
        let gray = [0x89, 0x89, 0x89];
        let white = [255, 255, 255];
        assert!(calculate(gray, white, "small").is_accessible());
        assert!(!calculate(gray, white, "large").is_accessible());
        assert!(!calculate(gray, white, "medium").is_accessible());
        assert_eq!(calculate(gray, white, "medium").text_size(), TextSize::Large);
    }

    #[test]
    fn test_calculate_is_commutative() {
        let mut rng = rand::rng();
        for _ in 0..1_000 {
            let rgb1: [u8; 3] = rng.random();
            let rgb2: [u8; 3] = rng.random();
            let c1 = calculate(rgb1, rgb2, "small");
            let c2 = calculate(rgb2, rgb1, "small");
            assert_eq!(c1, c2, "{:?} {:?}", rgb1, rgb2);
            assert!((1.0..=21.0 + 1e-9).contains(&c1.ratio()), "{:?} {:?}", rgb1, rgb2);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Contrast::new(21.0, TextSize::Large)), "21.00:1");
        assert_eq!(format!("{:.0}", Contrast::new(4.56, TextSize::Small)), "5:1");
    }
}
