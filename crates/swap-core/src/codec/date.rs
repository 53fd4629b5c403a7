use super::text::unquote;
use super::{Codec, CodecError};
use crate::domain::DayMonth;
use chrono::NaiveDate;

/// Rendering format of a date field. Parsing detects any supported form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// `2002-01-31`
    #[default]
    Iso,
    /// `31-jan-2002`
    DayMonthName,
}

impl DateFormat {
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Iso => "YYYY-MM-DD",
            Self::DayMonthName => "DD-mon-YYYY",
        }
    }
}

/// Detects the layout of `raw` from its shape: a four digit leading part is
/// ISO, an alphabetic middle part is a month name, anything else is numeric
/// day-month-year.
pub fn parse_date(raw: &str) -> Result<NaiveDate, CodecError> {
    let text = unquote(raw.trim());
    let parts: Vec<&str> = text.split('-').collect();
    let [first, middle, last] = parts.as_slice() else {
        return Err(date_error());
    };
    if first.is_empty() || middle.is_empty() || last.is_empty() {
        return Err(date_error());
    }

    let pattern = if first.len() == 4 && first.chars().all(|c| c.is_ascii_digit()) {
        "%Y-%m-%d"
    } else if middle.chars().all(|c| c.is_ascii_alphabetic()) {
        "%d-%b-%Y"
    } else {
        "%d-%m-%Y"
    };
    NaiveDate::parse_from_str(text, pattern).map_err(|_| date_error())
}

pub fn format_date(date: NaiveDate, format: DateFormat) -> String {
    match format {
        DateFormat::Iso => date.format("%Y-%m-%d").to_string(),
        DateFormat::DayMonthName => date.format("%d-%b-%Y").to_string().to_ascii_lowercase(),
    }
}

fn date_error() -> CodecError {
    CodecError::new("a date as YYYY-MM-DD, DD-mon-YYYY or DD-MM-YYYY")
}

pub fn parse_day_month(raw: &str) -> Result<DayMonth, CodecError> {
    let error = || CodecError::new("day and month as 'DD MM'");
    let mut tokens = unquote(raw.trim()).split_whitespace();
    let (Some(day), Some(month), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(error());
    };
    let day = day.parse::<u8>().map_err(|_| error())?;
    let month = month.parse::<u8>().map_err(|_| error())?;
    DayMonth::new(day, month).ok_or_else(error)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateCodec {
    pub format: DateFormat,
}

impl Codec for DateCodec {
    type Item = NaiveDate;

    fn parse(&self, raw: &str) -> Result<NaiveDate, CodecError> {
        parse_date(raw)
    }

    fn render(&self, value: &NaiveDate) -> String {
        format_date(*value, self.format)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayMonthCodec;

impl Codec for DayMonthCodec {
    type Item = DayMonth;

    fn parse(&self, raw: &str) -> Result<DayMonth, CodecError> {
        parse_day_month(raw)
    }

    fn render(&self, value: &DayMonth) -> String {
        value.to_string()
    }
}
