#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{contrast_ratio, hsl_to_rgb, parse_hex, relative_luminance, rgb_to_hsl};
use crate::error::HexFormatError;
use crate::{Contrast, Float, TextSize};

/// A 24-bit RGB color.
///
/// # Examples
///
/// Rust code can create a new RGB color with [`Rgb::new`], [`Rgb as
/// From<[u8; 3]>`](struct.Rgb.html#impl-From%3C%5Bu8;+3%5D%3E-for-Rgb), or
/// by strictly parsing a hashed hexadecimal string with [`Rgb as
/// FromStr`](struct.Rgb.html#impl-FromStr-for-Rgb).
///
/// ```
/// # use prettycontrast::Rgb;
/// # use prettycontrast::error::HexFormatError;
/// let blue = Rgb::new(0xae, 0xe8, 0xfb);
/// assert_eq!(Rgb::from([0xae, 0xe8, 0xfb]), blue);
/// assert_eq!("#AEE8FB".parse::<Rgb>(), Ok(blue));
/// assert_eq!("#aee8f".parse::<Rgb>(), Err(HexFormatError::UnexpectedLength));
/// ```
/// <div class=color-swatch>
/// <div style="background-color: #aee8fb;"></div>
/// </div>
/// <br>
///
/// It can access the coordinates with [`Rgb as AsRef<[u8;
/// 3]>`](struct.Rgb.html#impl-AsRef%3C%5Bu8;+3%5D%3E-for-Rgb) or
/// with [`Rgb as
/// Index<usize>`](struct.Rgb.html#impl-Index%3Cusize%3E-for-Rgb).
/// ```
/// # use prettycontrast::Rgb;
/// let sea_foam = Rgb::new(0xb6, 0xeb, 0xd4);
/// assert_eq!(sea_foam.as_ref(), &[182_u8, 235, 212]);
/// assert_eq!(sea_foam[1], 235);
/// ```
/// <div class=color-swatch>
/// <div style="background-color: #b6ebd4;"></div>
/// </div>
/// <br>
///
/// Finally, it can convert to and from HSL, compute its relative luminance
/// and its contrast against another color, and format itself in uppercase
/// hashed hexadecimal notation with [`Rgb as
/// Display`](struct.Rgb.html#impl-Display-for-Rgb).
/// ```
/// # use prettycontrast::{Rgb, TextSize};
/// let sand = Rgb::new(0xee, 0xdc, 0xad);
/// assert_eq!(Rgb::from_hsl(sand.to_hsl()), sand);
/// assert!(sand.contrast(&Rgb::new(0, 0, 0), TextSize::Large).is_accessible());
/// assert_eq!(format!("{}", sand), "#EEDCAD");
/// ```
/// <div class=color-swatch>
/// <div style="background-color: #eedcad;"></div>
/// </div>
/// <br>
///
#[cfg_attr(
    feature = "pyffi",
    doc = "Since there is no Python feature equivalent to trait implementations in
    Rust, the Python class for `Rgb` provides equivalent functionality
    through [`Rgb::parse`], [`Rgb::coordinates`], [`Rgb::__len__`], and
    [`Rgb::__getitem__`]. These methods are not available in Rust."
)]
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, sequence, module = "prettycontrast.contrast")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb([u8; 3]);

#[cfg(feature = "pyffi")]
#[pymethods]
impl Rgb {
    /// Create a new RGB color from its coordinates. <i
    /// class=python-only>Python only!</i>
    #[new]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Strictly parse the hashed hexadecimal string as an RGB color. <i
    /// class=python-only>Python only!</i>
    #[staticmethod]
    pub fn parse(s: &str) -> Result<Self, HexFormatError> {
        s.parse()
    }

    /// Create a new RGB color from HSL coordinates. <i
    /// class=python-only>Python only!</i>
    #[staticmethod]
    #[pyo3(name = "from_hsl")]
    pub fn py_from_hsl(hsl: [Float; 3]) -> Self {
        Self::from_hsl(hsl)
    }

    /// Access this RGB color's coordinates. <i class=python-only>Python
    /// only!</i>
    pub fn coordinates(&self) -> [u8; 3] {
        self.0
    }

    /// Get this RGB color's length, which is 3. <i
    /// class=python-only>Python only!</i>
    ///
    /// This method improves integration with Python's runtime and hence is
    /// available in Python only.
    pub fn __len__(&self) -> usize {
        3
    }

    /// Get the coordinate at the given index. <i class=python-only>Python
    /// only!</i>
    ///
    /// This method improves integration with Python's runtime and hence is
    /// available in Python only.
    pub fn __getitem__(&self, index: isize) -> PyResult<u8> {
        match index {
            -3..=-1 => Ok(self.0[(3 + index) as usize]),
            0..=2 => Ok(self.0[index as usize]),
            _ => Err(pyo3::exceptions::PyIndexError::new_err(
                "Invalid coordinate index",
            )),
        }
    }

    /// Convert this RGB color to HSL.
    #[pyo3(name = "to_hsl")]
    pub fn py_to_hsl(&self) -> [Float; 3] {
        self.to_hsl()
    }

    /// Compute this RGB color's relative luminance.
    #[pyo3(name = "luminance")]
    pub fn py_luminance(&self) -> Float {
        self.luminance()
    }

    /// Compute the contrast between this and the other RGB color.
    #[pyo3(name = "contrast")]
    pub fn py_contrast(&self, other: &Rgb, text_size: TextSize) -> Contrast {
        self.contrast(other, text_size)
    }

    /// Convert this RGB color to its debug representation. <i
    /// class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        format!("Rgb({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }

    /// Convert this RGB color to hashed hexadecimal notation. <i
    /// class=python-only>Python only!</i>
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

#[cfg(not(feature = "pyffi"))]
impl Rgb {
    /// Create a new RGB color from its coordinates.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }
}

impl Rgb {
    /// Create a new RGB color from HSL coordinates.
    ///
    /// The coordinates are hue in degrees as well as saturation and lightness
    /// in percent. See [`hsl_to_rgb`](crate::hsl_to_rgb).
    pub fn from_hsl(hsl: [Float; 3]) -> Self {
        Self(hsl_to_rgb(hsl))
    }

    /// Convert this RGB color to HSL coordinates.
    ///
    /// See [`rgb_to_hsl`](crate::rgb_to_hsl).
    pub fn to_hsl(&self) -> [Float; 3] {
        rgb_to_hsl(self.0)
    }

    /// Compute this RGB color's relative luminance.
    ///
    /// See [`relative_luminance`](crate::relative_luminance).
    pub fn luminance(&self) -> Float {
        relative_luminance(self.0)
    }

    /// Compute the contrast between this and the other RGB color for the
    /// given text size.
    ///
    /// Unlike [`calculate`](crate::calculate), this method takes a
    /// [`TextSize`] and hence has no fallback for unknown sizes.
    pub fn contrast(&self, other: &Rgb, text_size: TextSize) -> Contrast {
        Contrast::new(contrast_ratio(self.0, other.0), text_size)
    }
}

impl AsRef<[u8; 3]> for Rgb {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl core::ops::Index<usize> for Rgb {
    type Output = u8;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        value.0
    }
}

impl core::str::FromStr for Rgb {
    type Err = HexFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s).map(Self)
    }
}

impl core::fmt::Display for Rgb {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let [r, g, b] = self.0;
        f.write_fmt(format_args!("#{:02X}{:02X}{:02X}", r, g, b))
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::Rgb;
    use crate::error::HexFormatError;
    use crate::{assert_close_enough, rgb_to_hex, TextSize};

    #[test]
    fn test_parse_and_display() -> Result<(), HexFormatError> {
        let orange: Rgb = "#ff8000".parse()?;
        assert_eq!(orange, Rgb::new(255, 128, 0));
        assert_eq!(orange.to_string(), "#FF8000");
        assert_eq!(orange.to_string(), rgb_to_hex(orange.into()));
        assert_eq!("00000".parse::<Rgb>(), Err(HexFormatError::UnexpectedLength));
        assert_eq!("#00x000".parse::<Rgb>(), Err(HexFormatError::MalformedHex));
        Ok(())
    }

    #[test]
    fn test_conversions() {
        let red = Rgb::new(255, 0, 0);
        assert_eq!(red.to_hsl(), [0.0, 100.0, 50.0]);
        assert_eq!(Rgb::from_hsl([0.0, 0.0, 50.0]), Rgb::new(128, 128, 128));
        assert_eq!(<[u8; 3]>::from(red), [255, 0, 0]);
        assert_eq!(red[0], 255);
        assert_eq!(Rgb::default(), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_contrast() {
        let red = Rgb::new(255, 0, 0);
        let black = Rgb::default();

        assert_close_enough!(red.luminance(), 0.2126);
        assert_close_enough!(black.luminance(), 0.0);

        let contrast = red.contrast(&black, TextSize::Small);
        assert_close_enough!(contrast.ratio(), 5.252);
        assert!(contrast.is_accessible());
        assert_eq!(contrast, black.contrast(&red, TextSize::Small));
        assert!(red.contrast(&black, TextSize::Large).is_accessible());
        assert!(!red.contrast(&red, TextSize::Small).is_accessible());
    }
}
