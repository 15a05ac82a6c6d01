mod contrast;
mod conversion;
mod equality;
mod math;
mod string;

// contrast
pub use contrast::{contrast_ratio, relative_luminance, to_linear};

// conversion
pub use conversion::{hsl_to_rgb, hue_to_rgb, rgb_to_hsl};

// equality
#[cfg(test)]
pub(crate) use equality::{assert_same_hsl, to_eq_hsl};
#[cfg(feature = "pyffi")]
pub use equality::close_enough;
pub use equality::to_eq_bits;

// math
pub(crate) use math::FloatExt;

// string
pub use string::{hex_to_rgb, parse_hex, rgb_to_hex};
