#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::HexFormatError;

/// Parse a color in hashed hexadecimal format.
///
/// This function accepts exactly six hexadecimal digits, optionally preceded
/// by a single `#`. Digits may be upper- or lowercase. It does not trim white
/// space and does not accept the three-digit shorthand. If successful, it
/// returns the red, green, and blue coordinates.
///
/// ```
/// # use prettycontrast::{parse_hex, error::HexFormatError};
/// assert_eq!(parse_hex("#fF8000"), Ok([255, 128, 0]));
/// assert_eq!(parse_hex("0080ff"), Ok([0, 128, 255]));
/// assert_eq!(parse_hex("#fff"), Err(HexFormatError::UnexpectedLength));
/// assert_eq!(parse_hex("#00gg00"), Err(HexFormatError::MalformedHex));
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn parse_hex(s: &str) -> Result<[u8; 3], HexFormatError> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 6 {
        return Err(HexFormatError::UnexpectedLength);
    } else if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        // from_str_radix() tolerates a leading `+`, the format does not.
        return Err(HexFormatError::MalformedHex);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, HexFormatError> {
        let t = s
            .get(2 * index..2 * index + 2)
            .ok_or(HexFormatError::MalformedHex)?;
        u8::from_str_radix(t, 16).map_err(|_| HexFormatError::MalformedHex)
    }

    let c1 = parse_coordinate(digits, 0)?;
    let c2 = parse_coordinate(digits, 1)?;
    let c3 = parse_coordinate(digits, 2)?;
    Ok([c1, c2, c3])
}

/// Convert a color in hashed hexadecimal format to RGB.
///
/// This function accepts the same format as [`parse_hex`]. But instead of
/// failing on malformed input, it silently falls back on black. Callers that
/// need to tell black from garbage should use [`parse_hex`] instead.
///
/// ```
/// # use prettycontrast::hex_to_rgb;
/// assert_eq!(hex_to_rgb("#ff0000"), [255, 0, 0]);
/// assert_eq!(hex_to_rgb("not-a-color"), [0, 0, 0]);
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn hex_to_rgb(hex: &str) -> [u8; 3] {
    parse_hex(hex).unwrap_or_else(|error| {
        tracing::debug!(input = hex, %error, "falling back on black for malformed hex color");
        [0, 0, 0]
    })
}

/// Format the RGB color in hashed hexadecimal format.
///
/// The result always has a leading `#` followed by six uppercase hexadecimal
/// digits.
///
/// ```
/// # use prettycontrast::rgb_to_hex;
/// assert_eq!(rgb_to_hex([255, 0, 255]), "#FF00FF");
/// assert_eq!(rgb_to_hex([1, 2, 3]), "#010203");
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn rgb_to_hex(rgb: [u8; 3]) -> String {
    let [r, g, b] = rgb;
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{hex_to_rgb, parse_hex, rgb_to_hex};
    use crate::error::HexFormatError;
    use rand::Rng;

    #[test]
    fn test_parse_hex() -> Result<(), HexFormatError> {
        assert_eq!(parse_hex("#000000")?, [0, 0, 0]);
        assert_eq!(parse_hex("#ffffff")?, [255, 255, 255]);
        assert_eq!(parse_hex("#FFFFFF")?, [255, 255, 255]);
        assert_eq!(parse_hex("#aBcDeF")?, [0xab, 0xcd, 0xef]);
        assert_eq!(parse_hex("123456")?, [0x12, 0x34, 0x56]);

        assert_eq!(parse_hex(""), Err(HexFormatError::UnexpectedLength));
        assert_eq!(parse_hex("#"), Err(HexFormatError::UnexpectedLength));
        assert_eq!(parse_hex("#123"), Err(HexFormatError::UnexpectedLength));
        assert_eq!(parse_hex("#1234567"), Err(HexFormatError::UnexpectedLength));
        assert_eq!(parse_hex("##123456"), Err(HexFormatError::UnexpectedLength));
        assert_eq!(parse_hex(" #123456"), Err(HexFormatError::UnexpectedLength));
        assert_eq!(parse_hex("#123456\n"), Err(HexFormatError::UnexpectedLength));
        assert_eq!(parse_hex("#12345g"), Err(HexFormatError::MalformedHex));
        assert_eq!(parse_hex("#+1+2+3"), Err(HexFormatError::MalformedHex));
        assert_eq!(parse_hex("#💩00"), Err(HexFormatError::MalformedHex));

        Ok(())
    }

    #[test]
    fn test_hex_to_rgb() {
        for (hex, rgb) in [
            ("#000000", [0, 0, 0]),
            ("#ffffff", [255, 255, 255]),
            ("#ff0000", [255, 0, 0]),
            ("#00ff00", [0, 255, 0]),
            ("#0000ff", [0, 0, 255]),
            ("#ff00ff", [255, 0, 255]),
            ("#00ffff", [0, 255, 255]),
            ("#ffff00", [255, 255, 0]),
        ] {
            assert_eq!(hex_to_rgb(hex), rgb, "{}", hex);
        }
    }

    #[test]
    fn test_hex_to_rgb_falls_back_on_black() {
        for input in ["not-a-color", "", "#", "#ff00", "#ff00000", "#gg0000", "rgb(1,2,3)"] {
            assert_eq!(hex_to_rgb(input), [0, 0, 0], "{:?}", input);
        }
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex([0, 0, 0]), "#000000");
        assert_eq!(rgb_to_hex([255, 255, 255]), "#FFFFFF");
        assert_eq!(rgb_to_hex([255, 0, 0]), "#FF0000");
        assert_eq!(rgb_to_hex([0, 255, 0]), "#00FF00");
        assert_eq!(rgb_to_hex([0, 0, 255]), "#0000FF");
        assert_eq!(rgb_to_hex([15, 16, 171]), "#0F10AB");
    }

    #[test]
    fn test_hex_round_trip() {
        let mut rng = rand::rng();
        for _ in 0..1_000 {
            let rgb: [u8; 3] = rng.random();
            let hex = rgb_to_hex(rgb);
            assert_eq!(hex_to_rgb(&hex), rgb, "{}", hex);
            assert_eq!(hex_to_rgb(&hex.to_ascii_lowercase()), rgb, "{}", hex);
        }

        // Corners, since random sampling is unlikely to hit all of them.
        for rgb in [[0, 0, 0], [255, 255, 255], [0, 255, 0], [16, 15, 0]] {
            assert_eq!(hex_to_rgb(&rgb_to_hex(rgb)), rgb);
        }
    }
}
