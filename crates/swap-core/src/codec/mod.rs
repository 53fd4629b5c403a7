//! Parse/render pairs for every semantic field type.
//!
//! Builder values and raw file text go through the same [`FieldType::coerce`]
//! path, so a value accepted from code renders to text that parses back to
//! the identical value.

pub mod date;
pub mod numeric;
pub mod text;

pub use date::{DateCodec, DateFormat, DayMonthCodec};
pub use numeric::{FixedDecimalCodec, IntegerCodec, ScientificCodec};
pub use text::{QuotedTextCodec, SpaceListCodec, TextListCodec};

use crate::domain::Value;
use crate::schema::TableSchema;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected}")]
pub struct CodecError {
    pub expected: String,
}

impl CodecError {
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

pub trait Codec {
    type Item;

    fn parse(&self, raw: &str) -> Result<Self::Item, CodecError>;

    fn render(&self, value: &Self::Item) -> String;
}

/// Semantic type of a field or table column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldType {
    /// Integer restricted to an enumerated domain.
    Switch(&'static [i64]),
    Integer,
    /// Decimal rendered with a fixed number of places.
    Decimal(u8),
    /// Decimal rendered in shortest round-trip form.
    Float,
    Text,
    Date(DateFormat),
    DayMonth,
    FloatList(u8),
    IntList,
    TextList,
    Table(&'static TableSchema),
}

impl FieldType {
    pub const fn is_switch(&self) -> bool {
        matches!(self, Self::Switch(_))
    }

    pub const fn is_table(&self) -> bool {
        matches!(self, Self::Table(_))
    }

    pub const fn domain(&self) -> Option<&'static [i64]> {
        match self {
            Self::Switch(domain) => Some(domain),
            _ => None,
        }
    }

    pub const fn table(&self) -> Option<&'static TableSchema> {
        match self {
            Self::Table(schema) => Some(schema),
            _ => None,
        }
    }

    pub fn expected(&self) -> String {
        match self {
            Self::Switch(domain) => format!(
                "one of {}",
                domain
                    .iter()
                    .map(i64::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            Self::Integer => "an integer".to_string(),
            Self::Decimal(places) => format!("a decimal number ({places} places)"),
            Self::Float => "a decimal number".to_string(),
            Self::Text => "quoted text".to_string(),
            Self::Date(format) => format!("a date ({})", format.pattern()),
            Self::DayMonth => "day and month as 'DD MM'".to_string(),
            Self::FloatList(_) => "space separated decimal numbers".to_string(),
            Self::IntList => "space separated integers".to_string(),
            Self::TextList => "comma separated names".to_string(),
            Self::Table(schema) => format!("table {}", schema.name),
        }
    }

    /// Decodes one raw file token, quotes included.
    pub fn parse(&self, raw: &str) -> Result<Value, CodecError> {
        match self {
            Self::Text => QuotedTextCodec.parse(raw).map(Value::Text),
            _ => self.coerce(Value::Text(text::unquote(raw).to_string())),
        }
    }

    /// Converts a supplied value into the canonical stored form of this
    /// type. Unquoted text is decoded with the type's codec; integers widen
    /// to decimals; decimals are quantised. Text for a text field is stored
    /// as given or rejected.
    pub fn coerce(&self, value: Value) -> Result<Value, CodecError> {
        let mismatch = || CodecError::new(self.expected());
        match (self, value) {
            (Self::Switch(_) | Self::Integer, Value::Int(value)) => Ok(Value::Int(value)),
            (Self::Switch(_) | Self::Integer, Value::Text(raw)) => {
                IntegerCodec.parse(&raw).map(Value::Int)
            }

            (Self::Decimal(places), Value::Float(value)) => {
                numeric::quantize(value, *places).map(Value::Float)
            }
            (Self::Decimal(places), Value::Int(value)) => {
                numeric::quantize(value as f64, *places).map(Value::Float)
            }
            (Self::Decimal(places), Value::Text(raw)) => FixedDecimalCodec { places: *places }
                .parse(&raw)
                .map(Value::Float),

            (Self::Float, Value::Float(value)) => numeric::finite(value).map(Value::Float),
            (Self::Float, Value::Int(value)) => Ok(Value::Float(value as f64)),
            (Self::Float, Value::Text(raw)) => ScientificCodec.parse(&raw).map(Value::Float),

            (Self::Text, Value::Text(value)) => text::check_text(&value).map(|()| Value::Text(value)),

            (Self::Date(_), Value::Date(value)) => Ok(Value::Date(value)),
            (Self::Date(format), Value::Text(raw)) => {
                DateCodec { format: *format }.parse(&raw).map(Value::Date)
            }

            (Self::DayMonth, Value::DayMonth(value)) => Ok(Value::DayMonth(value)),
            (Self::DayMonth, Value::Text(raw)) => DayMonthCodec.parse(&raw).map(Value::DayMonth),

            (Self::FloatList(places), Value::FloatList(values)) => values
                .into_iter()
                .map(|value| numeric::quantize(value, *places))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::FloatList),
            (Self::FloatList(places), Value::IntList(values)) => values
                .into_iter()
                .map(|value| numeric::quantize(value as f64, *places))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::FloatList),
            (Self::FloatList(places), Value::Text(raw)) => SpaceListCodec {
                item: FixedDecimalCodec { places: *places },
            }
            .parse(&raw)
            .map(Value::FloatList),

            (Self::IntList, Value::IntList(values)) => Ok(Value::IntList(values)),
            (Self::IntList, Value::Text(raw)) => SpaceListCodec { item: IntegerCodec }
                .parse(&raw)
                .map(Value::IntList),

            (Self::TextList, Value::TextList(values)) => {
                for value in &values {
                    text::check_name(value)?;
                }
                Ok(Value::TextList(values))
            }
            (Self::TextList, Value::IntList(values)) if values.is_empty() => {
                Ok(Value::TextList(Vec::new()))
            }
            (Self::TextList, Value::Text(raw)) => TextListCodec.parse(&raw).map(Value::TextList),

            (Self::Table(_), Value::Table(table)) => Ok(Value::Table(table)),

            _ => Err(mismatch()),
        }
    }

    /// Renders a stored value as a single token. Tables are rendered as
    /// blocks by the renderer, not here.
    pub fn render(&self, value: &Value) -> String {
        match (self, value) {
            (Self::Switch(_) | Self::Integer, Value::Int(value)) => IntegerCodec.render(value),
            (Self::Decimal(places), Value::Float(value)) => {
                FixedDecimalCodec { places: *places }.render(value)
            }
            (Self::Float, Value::Float(value)) => ScientificCodec.render(value),
            (Self::Text, Value::Text(value)) => QuotedTextCodec.render(value),
            (Self::Date(format), Value::Date(value)) => DateCodec { format: *format }.render(value),
            (Self::DayMonth, Value::DayMonth(value)) => DayMonthCodec.render(value),
            (Self::FloatList(places), Value::FloatList(values)) => SpaceListCodec {
                item: FixedDecimalCodec { places: *places },
            }
            .render(values),
            (Self::IntList, Value::IntList(values)) => {
                SpaceListCodec { item: IntegerCodec }.render(values)
            }
            (Self::TextList, Value::TextList(values)) => TextListCodec.render(values),
            (_, other) => other.describe(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DateFormat, FieldType};
    use crate::domain::{DayMonth, Value};
    use chrono::NaiveDate;

    #[test]
    fn legacy_exponents_normalise_to_the_same_decimal() {
        let field = FieldType::Decimal(2);
        let legacy = field.parse("9.65d-5").expect("legacy exponent");
        let modern = field.parse("9.65e-5").expect("modern exponent");

        assert_eq!(legacy, modern);
        assert_eq!(field.render(&legacy), "0.00");
        assert_eq!(field.render(&legacy), field.render(&modern));

        let float = FieldType::Float;
        assert_eq!(
            float.parse("9.65D-5").expect("float exponent"),
            Value::Float(9.65e-5)
        );
    }

    #[test]
    fn builder_and_text_inputs_share_the_canonical_form() {
        let field = FieldType::Decimal(3);
        assert_eq!(
            field.coerce(Value::Int(2)).expect("integer widens"),
            field.parse("2.000").expect("text")
        );
        assert_eq!(
            field.coerce(Value::Float(0.12345)).expect("quantised"),
            Value::Float(0.123)
        );

        let date = FieldType::Date(DateFormat::Iso);
        let expected = Value::Date(NaiveDate::from_ymd_opt(2002, 1, 1).expect("valid date"));
        assert_eq!(date.parse("01-jan-2002").expect("month name"), expected);
        assert_eq!(
            date.coerce(Value::Text("2002-01-01".to_string()))
                .expect("json text"),
            expected
        );
    }

    #[test]
    fn floats_are_never_narrowed_to_integers() {
        assert!(FieldType::Integer.coerce(Value::Float(3.0)).is_err());
        assert!(FieldType::Switch(&[0, 1]).parse("1.0").is_err());
        assert!(FieldType::Decimal(2).parse("inf").is_err());
        assert!(FieldType::Text.coerce(Value::Int(3)).is_err());
    }

    #[test]
    fn overflowing_decimals_are_rejected_on_every_path() {
        let field = FieldType::Decimal(3);
        assert!(field.coerce(Value::Float(1.0e306)).is_err());
        assert!(field.parse("1.0e306").is_err());
        assert!(FieldType::Decimal(0).coerce(Value::Int(i64::MAX)).is_ok());
        assert!(FieldType::FloatList(2).coerce(Value::FloatList(vec![1.0, f64::NAN])).is_err());
        assert!(FieldType::FloatList(3).coerce(Value::FloatList(vec![1.0e306])).is_err());
        assert_eq!(
            FieldType::FloatList(1).coerce(Value::IntList(vec![1, 2])).expect("integers widen"),
            Value::FloatList(vec![1.0, 2.0])
        );
    }

    #[test]
    fn builder_text_is_stored_as_given_or_rejected() {
        let field = FieldType::Text;
        assert_eq!(
            field.coerce(Value::from("maize crop")).expect("inner spaces"),
            Value::from("maize crop")
        );
        assert!(field.coerce(Value::from("  padded  ")).is_err());
        assert!(field.coerce(Value::from("'quoted'")).is_err());
        assert_eq!(field.parse("'hupsel'").expect("file token"), Value::from("hupsel"));
    }

    #[test]
    fn scalar_tokens_render_in_file_format() {
        let cases = [
            (FieldType::Switch(&[0, 1]), Value::Int(1), "1"),
            (FieldType::Decimal(2), Value::Float(52.0), "52.00"),
            (FieldType::Float, Value::Float(1.0e-6), "1e-6"),
            (FieldType::Text, Value::from("hupsel"), "'hupsel'"),
            (
                FieldType::Date(DateFormat::DayMonthName),
                Value::Date(NaiveDate::from_ymd_opt(2002, 12, 31).expect("valid date")),
                "31-dec-2002",
            ),
            (
                FieldType::DayMonth,
                Value::DayMonth(DayMonth { day: 1, month: 4 }),
                "01 04",
            ),
            (FieldType::FloatList(1), Value::FloatList(vec![1.0, 2.5]), "1.0 2.5"),
            (FieldType::IntList, Value::IntList(vec![1, 2, 3]), "1 2 3"),
            (
                FieldType::TextList,
                Value::TextList(vec!["rain".to_string(), "drainage".to_string()]),
                "'rain,drainage'",
            ),
        ];

        for (field, value, expected) in cases {
            assert_eq!(field.render(&value), expected);
            assert_eq!(field.parse(expected).expect("rendered token parses"), value);
        }
    }
}
