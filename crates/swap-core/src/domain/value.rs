use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Day and month without a year, as used by fixed yearly output dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DayMonth {
    pub day: u8,
    pub month: u8,
}

impl DayMonth {
    /// Leap year 2000 is used as reference so that 29 February is accepted.
    pub fn new(day: u8, month: u8) -> Option<Self> {
        NaiveDate::from_ymd_opt(2000, u32::from(month), u32::from(day))
            .map(|_| Self { day, month })
    }
}

impl Display for DayMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02} {:02}", self.day, self.month)
    }
}

/// A field value, either as supplied by a caller or as stored after
/// validation. Raw text is decoded by the codec of the target field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    DayMonth(DayMonth),
    IntList(Vec<i64>),
    FloatList(Vec<f64>),
    TextList(Vec<String>),
    Table(Table),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::Float(_) => "decimal",
            Self::Text(_) => "text",
            Self::Date(_) => "date",
            Self::DayMonth(_) => "day-month",
            Self::IntList(_) => "integer list",
            Self::FloatList(_) => "decimal list",
            Self::TextList(_) => "text list",
            Self::Table(_) => "table",
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            Self::Int(value) => Some(*value as f64),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Self::Table(table) => Some(table),
            _ => None,
        }
    }

    /// Short human readable form used in diagnostics.
    pub fn describe(&self) -> String {
        match self {
            Self::Int(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::Text(value) => value.clone(),
            Self::Date(value) => value.format("%Y-%m-%d").to_string(),
            Self::DayMonth(value) => value.to_string(),
            Self::IntList(values) => join_display(values),
            Self::FloatList(values) => join_display(values),
            Self::TextList(values) => values.join(","),
            Self::Table(table) => format!("<table of {} rows>", table.len()),
        }
    }
}

fn join_display<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<DayMonth> for Value {
    fn from(value: DayMonth) -> Self {
        Self::DayMonth(value)
    }
}

impl From<Vec<i64>> for Value {
    fn from(values: Vec<i64>) -> Self {
        Self::IntList(values)
    }
}

impl From<Vec<f64>> for Value {
    fn from(values: Vec<f64>) -> Self {
        Self::FloatList(values)
    }
}

impl From<Vec<String>> for Value {
    fn from(values: Vec<String>) -> Self {
        Self::TextList(values)
    }
}

impl From<Table> for Value {
    fn from(table: Table) -> Self {
        Self::Table(table)
    }
}

/// Rows of values under named columns. Column names compare
/// case-insensitively; validation reorders them into schema order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn row(mut self, values: Vec<Value>) -> Self {
        self.rows.push(values);
        self
    }

    pub fn push_row(&mut self, values: Vec<Value>) {
        self.rows.push(values);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|column| column.eq_ignore_ascii_case(name))
    }

    pub fn column(&self, name: &str) -> Option<Vec<&Value>> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().filter_map(|row| row.get(index)).collect())
    }

    pub fn floats(&self, name: &str) -> Vec<f64> {
        self.column(name)
            .unwrap_or_default()
            .into_iter()
            .filter_map(Value::as_float)
            .collect()
    }

    pub fn ints(&self, name: &str) -> Vec<i64> {
        self.column(name)
            .unwrap_or_default()
            .into_iter()
            .filter_map(Value::as_int)
            .collect()
    }

    pub fn dates(&self, name: &str) -> Vec<NaiveDate> {
        self.column(name)
            .unwrap_or_default()
            .into_iter()
            .filter_map(Value::as_date)
            .collect()
    }

    pub fn texts(&self, name: &str) -> Vec<&str> {
        self.column(name)
            .unwrap_or_default()
            .into_iter()
            .filter_map(Value::as_text)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{DayMonth, Table, Value};

    #[test]
    fn day_month_accepts_leap_day_and_rejects_impossible_dates() {
        assert_eq!(DayMonth::new(29, 2), Some(DayMonth { day: 29, month: 2 }));
        assert_eq!(DayMonth::new(31, 4), None);
        assert_eq!(DayMonth::new(0, 1), None);
        assert_eq!(DayMonth::new(31, 12).map(|d| d.to_string()).as_deref(), Some("31 12"));
    }

    #[test]
    fn table_columns_resolve_case_insensitively() {
        let table = Table::new(["DVS", "LAI"])
            .row(vec![Value::from(0.0), Value::from(0.05)])
            .row(vec![Value::from(1.0), Value::from(3.5)]);

        assert_eq!(table.len(), 2);
        assert_eq!(table.column_index("lai"), Some(1));
        assert_eq!(table.floats("dvs"), vec![0.0, 1.0]);
        assert!(table.column("missing").is_none());
    }

    #[test]
    fn untagged_json_values_keep_their_shape() {
        let parsed: Vec<Value> =
            serde_json::from_str(r#"[1, 2.5, "text", [1, 2], [0.5], ["a"], {"day": 31, "month": 12}]"#)
                .expect("values should deserialize");

        assert_eq!(
            parsed,
            vec![
                Value::Int(1),
                Value::Float(2.5),
                Value::Text("text".to_string()),
                Value::IntList(vec![1, 2]),
                Value::FloatList(vec![0.5]),
                Value::TextList(vec!["a".to_string()]),
                Value::DayMonth(DayMonth { day: 31, month: 12 }),
            ]
        );
    }
}
