//! # Pretty 🌸 Contrast
//!
//! Prettycontrast converts between hashed hexadecimal, RGB, and HSL colors and
//! computes the [WCAG 2.x](https://www.w3.org/TR/WCAG21/#dfn-contrast-ratio)
//! contrast ratio between two colors, classifying the pair as accessible or
//! not for a given text size. Every function is a pure, stateless computation
//! and hence safe to call from any number of threads.
//!
//!
//! ## 1. Overview
//!
//! Data flows in one direction. Hexadecimal strings become RGB triples, RGB
//! triples become HSL triples or relative luminance, and relative luminance
//! becomes contrast:
//!
//!   * [`hex_to_rgb`] and [`rgb_to_hex`] convert between `#RRGGBB` strings and
//!     `[u8; 3]` triples.
//!   * [`rgb_to_hsl`] and [`hsl_to_rgb`] convert between RGB triples and HSL
//!     triples with hue in degrees as well as saturation and lightness in
//!     percent. [`hue_to_rgb`] is the helper computing one RGB coordinate.
//!   * [`to_linear`] undoes sRGB's gamma encoding for one coordinate and
//!     [`relative_luminance`] combines all three.
//!   * [`contrast_ratio`] computes the ratio between two colors and
//!     [`calculate`] classifies it for a text size as a [`Contrast`].
//!
//! [`Rgb`] packages the same functionality as methods on a 24-bit color.
//!
//! ```
//! # use prettycontrast::{calculate, hex_to_rgb, rgb_to_hsl};
//! let red = hex_to_rgb("#ff0000");
//! assert_eq!(red, [255, 0, 0]);
//! assert_eq!(rgb_to_hsl(red), [0.0, 100.0, 50.0]);
//!
//! let contrast = calculate(red, [0, 0, 0], "small");
//! assert!((contrast.ratio() - 5.252).abs() < 1e-9);
//! assert!(contrast.is_accessible());
//! ```
//!
//!
//! ## 2. Permissive by Default
//!
//! The default entry points never fail. [`hex_to_rgb`] falls back on black
//! for malformed input and [`calculate`] treats every text size other than
//! `small` as large text. Both fallbacks emit a `debug` event through
//! [tracing](https://docs.rs/tracing) but are otherwise silent. Applications
//! that need to detect malformed input opt into strict parsing with
//! [`parse_hex`], [`Rgb as FromStr`](struct.Rgb.html#impl-FromStr-for-Rgb),
//! or [`TextSize as FromStr`](enum.TextSize.html#impl-FromStr-for-TextSize),
//! which return the errors in [`error`].
//!
//! Since RGB coordinates are `u8`, out-of-range RGB colors cannot be
//! represented. HSL coordinates are not validated; RGB coordinates computed
//! from out-of-range HSL coordinates saturate at 0 and 255.
//!
//!
//! ## 3. Optional Features
//!
//! Prettycontrast supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`pyffi`** controls prettycontrast's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod error;
mod object;
mod wcag;

#[cfg(feature = "pyffi")]
pub use core::close_enough;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use core::{
    contrast_ratio, hex_to_rgb, hsl_to_rgb, hue_to_rgb, parse_hex, relative_luminance,
    rgb_to_hex, rgb_to_hsl, to_linear,
};
pub use object::Rgb;
pub use wcag::{calculate, Contrast, TextSize};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn contrast(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(close_enough, m)?)?;

    // ------------------------------------------------------------------- conversion
    m.add_function(wrap_pyfunction!(parse_hex, m)?)?;
    m.add_function(wrap_pyfunction!(hex_to_rgb, m)?)?;
    m.add_function(wrap_pyfunction!(rgb_to_hex, m)?)?;
    m.add_function(wrap_pyfunction!(rgb_to_hsl, m)?)?;
    m.add_function(wrap_pyfunction!(hsl_to_rgb, m)?)?;
    m.add_function(wrap_pyfunction!(hue_to_rgb, m)?)?;

    // ------------------------------------------------------------- luminance/contrast
    m.add_function(wrap_pyfunction!(to_linear, m)?)?;
    m.add_function(wrap_pyfunction!(relative_luminance, m)?)?;
    m.add_function(wrap_pyfunction!(contrast_ratio, m)?)?;
    m.add_function(wrap_pyfunction!(calculate, m)?)?;

    m.add_class::<Contrast>()?;
    m.add_class::<Rgb>()?;
    m.add_class::<TextSize>()?;

    Ok(())
}
