//! Hex color validation, normalization, and serialization.

use matisse_error::{ColorError, ColorErrorKind, MatisseResult};
use regex::Regex;
use std::sync::LazyLock;

static HEX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").expect("valid regex"));

/// Validate a fallback hex color and expand the 3-digit shorthand.
///
/// A 6-digit color is returned unchanged, casing included. A 3-digit color
/// expands by doubling each digit. Anything else fails with
/// [`ColorErrorKind::InvalidHex`].
///
/// # Examples
///
/// ```
/// use matisse_core::normalize_hex;
///
/// assert_eq!(normalize_hex("#A1B2C3").unwrap(), "#A1B2C3");
/// assert_eq!(normalize_hex("#abc").unwrap(), "#aabbcc");
/// assert!(normalize_hex("abc").is_err());
/// ```
pub fn normalize_hex(hex: &str) -> MatisseResult<String> {
    if !HEX_PATTERN.is_match(hex) {
        return Err(ColorError::new(ColorErrorKind::InvalidHex(hex.to_string())).into());
    }

    if hex.len() == 7 {
        return Ok(hex.to_string());
    }

    let digits: Vec<char> = hex.chars().collect();
    Ok(format!(
        "#{a}{a}{b}{b}{c}{c}",
        a = digits[1],
        b = digits[2],
        c = digits[3]
    ))
}

/// Parse a normalized `#RRGGBB` string into a packed RGB integer.
///
/// This is a second, stricter stage than [`normalize_hex`]: it only accepts
/// the full 6-digit form and fails with [`ColorErrorKind::Unparseable`]
/// otherwise.
///
/// # Examples
///
/// ```
/// use matisse_core::parse_hex;
///
/// assert_eq!(parse_hex("#112233").unwrap(), 0x112233);
/// assert!(parse_hex("#fff").is_err());
/// ```
pub fn parse_hex(hex: &str) -> MatisseResult<u32> {
    let digits = hex
        .strip_prefix('#')
        .filter(|d| d.len() == 6)
        .ok_or_else(|| ColorError::new(ColorErrorKind::Unparseable(hex.to_string())))?;

    u32::from_str_radix(digits, 16)
        .map_err(|_| ColorError::new(ColorErrorKind::Unparseable(hex.to_string())).into())
}

/// Serialize a packed RGB integer as `#RRGGBB`.
///
/// The value is masked to the low 24 bits and always renders as exactly six
/// uppercase hex digits.
///
/// # Examples
///
/// ```
/// use matisse_core::format_rgb;
///
/// assert_eq!(format_rgb(0xFF00FF), "#FF00FF");
/// assert_eq!(format_rgb(0x1FF00FF), "#FF00FF");
/// assert_eq!(format_rgb(0x00000A), "#00000A");
/// ```
pub fn format_rgb(rgb: u32) -> String {
    format!("#{:06X}", rgb & 0xFFFFFF)
}
