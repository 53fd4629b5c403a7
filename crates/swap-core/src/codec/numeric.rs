use super::{Codec, CodecError};

/// Rewrites Fortran exponent markers (`1.d-5`, `9.65D+3`) into `e` notation.
pub fn normalize_exponent(raw: &str) -> String {
    let trimmed = raw.trim();
    let bytes = trimmed.as_bytes();
    let mut normalized = String::with_capacity(trimmed.len());
    for (index, character) in trimmed.char_indices() {
        let previous = index.checked_sub(1).map(|previous| bytes[previous]);
        let next = bytes.get(index + 1);
        let is_exponent_marker = matches!(character, 'd' | 'D')
            && previous.is_some_and(|previous| previous.is_ascii_digit() || previous == b'.')
            && next.is_some_and(|next| next.is_ascii_digit() || matches!(next, b'+' | b'-'));
        if is_exponent_marker {
            normalized.push('e');
        } else {
            normalized.push(character.to_ascii_lowercase());
        }
    }
    normalized
}

pub fn parse_number(raw: &str) -> Result<f64, CodecError> {
    let normalized = normalize_exponent(raw);
    let value = normalized
        .parse::<f64>()
        .map_err(|_| CodecError::new("a number"))?;
    finite(value)
}

pub fn finite(value: f64) -> Result<f64, CodecError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CodecError::new("a finite number"))
    }
}

pub fn parse_integer(raw: &str) -> Result<i64, CodecError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| CodecError::new("an integer"))
}

/// Rounds to a fixed number of decimal places; negative zero collapses to zero.
/// Fails when the scaled value leaves the finite range.
pub fn quantize(value: f64, places: u8) -> Result<f64, CodecError> {
    let scale = 10f64.powi(i32::from(places));
    let quantized = finite((finite(value)? * scale).round() / scale)?;
    Ok(if quantized == 0.0 { 0.0 } else { quantized })
}

pub fn format_fixed(value: f64, places: u8) -> String {
    let precision = usize::from(places);
    format!("{value:.precision$}")
}

pub fn format_fixed_width(value: f64, width: usize, places: u8) -> String {
    let precision = usize::from(places);
    format!("{value:>width$.precision$}")
}

/// Shortest text that reads back to the same value, switching to `e`
/// notation for very small or very large magnitudes.
pub fn format_scientific(value: f64) -> String {
    if value == 0.0 {
        return "0.0".to_string();
    }
    let magnitude = value.abs();
    if (1.0e-3..1.0e7).contains(&magnitude) {
        let plain = format!("{value}");
        if plain.contains('.') {
            plain
        } else {
            format!("{plain}.0")
        }
    } else {
        format!("{value:e}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerCodec;

impl Codec for IntegerCodec {
    type Item = i64;

    fn parse(&self, raw: &str) -> Result<i64, CodecError> {
        parse_integer(raw)
    }

    fn render(&self, value: &i64) -> String {
        value.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDecimalCodec {
    pub places: u8,
}

impl Codec for FixedDecimalCodec {
    type Item = f64;

    fn parse(&self, raw: &str) -> Result<f64, CodecError> {
        parse_number(raw).and_then(|value| quantize(value, self.places))
    }

    fn render(&self, value: &f64) -> String {
        format_fixed(*value, self.places)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScientificCodec;

impl Codec for ScientificCodec {
    type Item = f64;

    fn parse(&self, raw: &str) -> Result<f64, CodecError> {
        parse_number(raw)
    }

    fn render(&self, value: &f64) -> String {
        format_scientific(*value)
    }
}
