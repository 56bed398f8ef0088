//! Conversions between `#rrggbb` strings and RGB triples

use std::convert::TryFrom;

use thiserror::Error;

pub type Color = palette::Srgb<u8>;

#[derive(Debug, Error, PartialEq)]
pub enum ColorError {
    #[error("expected 7 characters, got {0}")]
    Length(usize),
    #[error("color must start with '#'")]
    MissingHash,
    #[error("invalid hex digits: {0}")]
    Digits(#[from] hex::FromHexError),
}

/// Parse a `#rrggbb` string into its three channels
pub fn hex_to_rgb(hex: &str) -> Result<Color, ColorError> {
    if hex.len() != 7 {
        return Err(ColorError::Length(hex.len()));
    }

    let digits = hex.strip_prefix('#').ok_or(ColorError::MissingHash)?;

    let mut channels = [0u8; 3];
    hex::decode_to_slice(digits, &mut channels)?;

    let [r, g, b] = channels;
    Ok(Color::new(r, g, b))
}

/// Format a color as `#` followed by six lowercase hex digits
pub fn rgb_to_hex(color: Color) -> String {
    let (r, g, b) = color.into_components();
    format!("#{}", hex::encode([r, g, b]))
}

/// Same as [rgb_to_hex], for channels that may fall outside of 0-255
pub fn rgb_to_hex_clamped(r: i64, g: i64, b: i64) -> String {
    let clamp = |c: i64| u8::try_from(c.clamp(0, 255)).unwrap_or(u8::MAX);
    rgb_to_hex(Color::new(clamp(r), clamp(g), clamp(b)))
}
