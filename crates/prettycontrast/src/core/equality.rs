#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use super::FloatExt;
use crate::{Bits, Float};

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Test macro for asserting that two HSL triples describe the same color.
///
/// Hue is compared modulo 360 degrees, so that 0 and 360 are equal. All
/// three coordinates are then normalized with [`to_eq_bits`].
///
/// # Panics
///
/// This macro panics if the normalized triples differ.
#[cfg(test)]
macro_rules! assert_same_hsl {
    ($hsl1:expr, $hsl2:expr $(,)?) => {
        let (hsl1, hsl2) = ($hsl1, $hsl2);
        let bits1 = $crate::core::to_eq_hsl(&hsl1);
        let bits2 = $crate::core::to_eq_hsl(&hsl2);
        assert_eq!(bits1, bits2, "HSL coordinates differ:\n{:?}\n{:?}", hsl1, hsl2);
    };
}

#[cfg(test)]
pub(crate) use assert_same_hsl;

// --------------------------------------------------------------------------------------------------------------------

/// Normalize HSL coordinates for equality testing.
#[cfg(test)]
pub(crate) fn to_eq_hsl(hsl: &[Float; 3]) -> [Bits; 3] {
    let [h, s, l] = *hsl;
    [to_eq_bits(h.rem_euclid(360.0)), to_eq_bits(s), to_eq_bits(l)]
}

/// Determine whether the two floats are close enough to be considered equal.
/// <i class=python-only>Python only!</i>
///
/// This function relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
#[cfg(feature = "pyffi")]
#[pyfunction]
pub fn close_enough(f1: Float, f2: Float) -> bool {
    to_eq_bits(f1) == to_eq_bits(f2)
}

/// Helper function to normalize a floating point number before equality
/// testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a bit
/// string. It is only public because the [`assert_close_enough`] test macro
/// uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (<Float as FloatExt>::ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0;
    }

    f.to_bits()
}
