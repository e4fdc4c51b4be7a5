use crate::error::ColorParseError;

/// Parse a `#rrggbb` string (as produced by `<input type=color>`) into `[0, 1]`
/// RGB components. No gamma conversion is applied; the renderer writes through
/// an sRGB view so these values are encoded on output.
pub fn parse_hex_color(s: &str) -> Result<[f32; 3], ColorParseError> {
    let trimmed = s.trim();
    let hex = trimmed
        .strip_prefix('#')
        .ok_or_else(|| ColorParseError::MissingHash(trimmed.to_string()))?;
    if hex.len() != 6 {
        return Err(ColorParseError::BadLength(trimmed.to_string()));
    }
    let mut out = [0.0_f32; 3];
    for (i, slot) in out.iter_mut().enumerate() {
        let pair = hex
            .get(i * 2..i * 2 + 2)
            .filter(|p| p.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| ColorParseError::BadDigit(trimmed.to_string()))?;
        let byte = u8::from_str_radix(pair, 16)
            .map_err(|_| ColorParseError::BadDigit(trimmed.to_string()))?;
        *slot = byte as f32 / 255.0;
    }
    Ok(out)
}

#[inline]
pub fn rgb_to_hex(rgb: [f32; 3]) -> String {
    let to_byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        to_byte(rgb[0]),
        to_byte(rgb[1]),
        to_byte(rgb[2])
    )
}
