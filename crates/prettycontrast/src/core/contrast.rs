#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::Float;

/// The coefficients for computing relative luminance from linear sRGB
/// coordinates, as defined by WCAG 2.x.
const SRGB_LUMINANCE: &[Float; 3] = &[0.2126, 0.7152, 0.0722];

/// The largest gamma-encoded value on the linear segment of the sRGB curve.
/// WCAG 2.x uses this value, not the 0.04045 of IEC 61966-2-1.
const LINEAR_THRESHOLD: Float = 0.03928;

/// Linearize an 8-bit sRGB coordinate.
///
/// This function undoes sRGB's gamma encoding. It first scales the coordinate
/// to `0..=1`. Values up to 0.03928 sit on the linear segment near black and
/// are divided by 12.92. Larger values are decoded with the 2.4 power curve.
///
/// ```
/// # use prettycontrast::to_linear;
/// assert_eq!(to_linear(0), 0.0);
/// assert_eq!(to_linear(255), 1.0);
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn to_linear(channel: u8) -> Float {
    let value = channel as Float / 255.0;
    if value <= LINEAR_THRESHOLD {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of the RGB color.
///
/// The result is the WCAG 2.x relative luminance, i.e., the weighted sum of
/// the linearized coordinates, with 0 for black and 1 for white.
///
/// ```
/// # use prettycontrast::relative_luminance;
/// assert_eq!(relative_luminance([0, 0, 0]), 0.0);
/// assert!((relative_luminance([255, 255, 255]) - 1.0).abs() < 1e-12);
/// ```
#[allow(clippy::suboptimal_flops)]
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn relative_luminance(rgb: [u8; 3]) -> Float {
    let [c1, c2, c3] = *SRGB_LUMINANCE;
    let [r, g, b] = rgb;

    c1 * to_linear(r) + c2 * to_linear(g) + c3 * to_linear(b)
}

/// Compute the WCAG 2.x contrast ratio between the two colors.
///
/// The ratio divides the larger relative luminance by the smaller one, after
/// adding 0.05 to both for ambient light. It hence is symmetric in its
/// arguments and ranges from 1 for identical luminance to 21 for black and
/// white.
///
/// ```
/// # use prettycontrast::contrast_ratio;
/// let ratio = contrast_ratio([0, 0, 0], [255, 255, 255]);
/// assert!((ratio - 21.0).abs() < 1e-9);
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn contrast_ratio(rgb1: [u8; 3], rgb2: [u8; 3]) -> Float {
    let mut darker = relative_luminance(rgb1);
    let mut lighter = relative_luminance(rgb2);

    if lighter < darker {
        core::mem::swap(&mut darker, &mut lighter);
    }

    (lighter + 0.05) / (darker + 0.05)
}

// ====================================================================================================================
