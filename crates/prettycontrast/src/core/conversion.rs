#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(rgb: [u8; 3]) -> [Float; 3] {
    let [r, g, b] = rgb;
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert the floating point coordinates to 24-bit representation.
///
/// Each coordinate is scaled by 255 and rounded half away from zero. Since
/// `as` casts saturate, coordinates outside `0..=1` end up as `0x00` or
/// `0xff` and not-a-number ends up as `0x00`.
#[inline]
pub(crate) fn to_24bit(coordinates: [Float; 3]) -> [u8; 3] {
    let [r, g, b] = coordinates;
    [
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert RGB to HSL.
///
/// The result has hue in degrees `0..360` and saturation as well as lightness
/// in percent `0..=100`. Achromatic colors, i.e., grays including black and
/// white, have hue and saturation zero.
///
/// ```
/// # use prettycontrast::rgb_to_hsl;
/// assert_eq!(rgb_to_hsl([255, 0, 0]), [0.0, 100.0, 50.0]);
/// assert_eq!(rgb_to_hsl([0, 0, 255]), [240.0, 100.0, 50.0]);
/// assert_eq!(rgb_to_hsl([255, 255, 255]), [0.0, 0.0, 100.0]);
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn rgb_to_hsl(rgb: [u8; 3]) -> [Float; 3] {
    let [r, g, b] = from_24bit(rgb);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;

    if max == min {
        return [0.0, 0.0, 100.0 * lightness];
    }

    let delta = max - min;
    let saturation = if 0.5 < lightness {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    // Ties go to the first channel in red, green, blue order.
    let hue = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    [60.0 * hue, 100.0 * saturation, 100.0 * lightness]
}

/// Compute one RGB coordinate from the HSL helper values `p` and `q`.
///
/// This function wraps `t` into `0..=1` by adding or subtracting one at most
/// once, then interpolates piecewise linearly between `p` and `q`: rising
/// until 1/6, holding `q` until 1/2, falling until 2/3, and holding `p` for
/// the rest.
#[allow(clippy::suboptimal_flops)]
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn hue_to_rgb(p: Float, q: Float, t: Float) -> Float {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if 1.0 < t {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Convert HSL to RGB.
///
/// This function expects hue in degrees and saturation as well as lightness
/// in percent. It does not validate its arguments. Lightness or saturation
/// outside `0..=100` yield coordinates that saturate at 0 or 255.
///
/// ```
/// # use prettycontrast::hsl_to_rgb;
/// assert_eq!(hsl_to_rgb([0.0, 0.0, 50.0]), [128, 128, 128]);
/// assert_eq!(hsl_to_rgb([120.0, 100.0, 50.0]), [0, 255, 0]);
/// ```
#[allow(clippy::suboptimal_flops)]
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn hsl_to_rgb(hsl: [Float; 3]) -> [u8; 3] {
    let [h, s, l] = hsl;
    let (hue, saturation, lightness) = (h / 360.0, s / 100.0, l / 100.0);

    if saturation == 0.0 {
        return to_24bit([lightness, lightness, lightness]);
    }

    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    to_24bit([
        hue_to_rgb(p, q, hue + 1.0 / 3.0),
        hue_to_rgb(p, q, hue),
        hue_to_rgb(p, q, hue - 1.0 / 3.0),
    ])
}

// ====================================================================================================================
