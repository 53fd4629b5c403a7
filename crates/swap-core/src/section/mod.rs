//! Validated sections.
//!
//! A [`Section`] is built all at once from named values and is read-only
//! afterwards. Construction resolves the switch rules, fills defaults,
//! decodes every value through its codec and runs the named checks of the
//! section kind.

mod checks;

use crate::codec::{CodecError, FieldType};
use crate::domain::{Allowed, DayMonth, SectionKind, SwapError, SwapResult, Table, Value};
use crate::rules::{self, LegalFields};
use crate::schema::{self, FieldSpec, SectionSchema, TableSchema};
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    kind: SectionKind,
    values: BTreeMap<&'static str, Value>,
}

impl Section {
    pub fn builder(kind: SectionKind) -> SectionBuilder {
        SectionBuilder::new(kind)
    }

    /// Validates `fields` against the schema and rules of `kind`.
    ///
    /// Names compare case-insensitively. Values may be typed or raw text.
    pub fn construct<I, K>(kind: SectionKind, fields: I) -> SwapResult<Self>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        let schema = schema::section(kind);
        let section = kind.key();

        let mut supplied: BTreeMap<String, Value> = BTreeMap::new();
        let mut repeated = Vec::new();
        for (name, value) in fields {
            let name = name.as_ref().trim().to_ascii_lowercase();
            if supplied.contains_key(&name) {
                repeated.push(name);
            } else {
                supplied.insert(name, value);
            }
        }
        if !repeated.is_empty() {
            return Err(SwapError::UnexpectedField {
                section: section.to_string(),
                fields: repeated,
            });
        }

        let mut switch_values = BTreeMap::new();
        let mut values: BTreeMap<&'static str, Value> = BTreeMap::new();
        for field in schema.switches() {
            if let Some(raw) = supplied.remove(field.name) {
                let value = decode(kind, field, raw)?;
                let Some(switch) = value.as_int() else {
                    continue;
                };
                check_domain(kind, field, switch)?;
                switch_values.insert(field.name, switch);
                values.insert(field.name, value);
            }
        }

        let legal = rules::legal_fields(kind, &switch_values)?;

        for field in schema.fields() {
            if !legal.contains(field.name) || values.contains_key(field.name) {
                continue;
            }
            if let Some(raw) = supplied.remove(field.name) {
                values.insert(field.name, raw);
            } else if let Some(default) = field.default_value() {
                values.insert(field.name, default);
            }
        }

        let missing: Vec<String> = schema
            .fields()
            .filter(|field| legal.is_required(field.name) && !values.contains_key(field.name))
            .map(|field| field.name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(SwapError::MissingField {
                section: section.to_string(),
                fields: missing,
            });
        }

        let unexpected = unexpected_fields(schema, &legal, &values, supplied.into_keys());
        if !unexpected.is_empty() {
            return Err(SwapError::UnexpectedField {
                section: section.to_string(),
                fields: unexpected,
            });
        }

        let mut validated = BTreeMap::new();
        for field in schema.fields() {
            let Some(value) = values.remove(field.name) else {
                continue;
            };
            let value = match field.ty {
                FieldType::Table(table) => Value::Table(validate_table(kind, field, table, value)?),
                FieldType::Switch(_) => value,
                _ => {
                    let value = decode(kind, field, value)?;
                    check_range(kind, field, &value)?;
                    value
                }
            };
            validated.insert(field.name, value);
        }

        let section = Self {
            kind,
            values: validated,
        };
        checks::check_section(&section)?;
        tracing::debug!(section = %kind, fields = section.values.len(), "constructed section");
        Ok(section)
    }

    /// A section of `kind` built from declared defaults alone.
    pub fn defaulted(kind: SectionKind) -> SwapResult<Self> {
        Self::construct(kind, std::iter::empty::<(&str, Value)>())
    }

    /// Returns a copy with one value replaced, validated from scratch.
    /// Values that the new switch setting makes illegal are reported, not
    /// dropped.
    pub fn with(&self, name: &str, value: impl Into<Value>) -> SwapResult<Self> {
        let name = name.trim().to_ascii_lowercase();
        let mut fields: BTreeMap<String, Value> = self
            .values
            .iter()
            .map(|(field, value)| ((*field).to_string(), value.clone()))
            .collect();
        fields.insert(name, value.into());
        Self::construct(self.kind, fields)
    }

    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    pub fn schema(&self) -> &'static SectionSchema {
        schema::section(self.kind)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        let field = self.schema().field(name)?;
        self.values.get(field.name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn int(&self, name: &str) -> Option<i64> {
        self.get(name)?.as_int()
    }

    pub fn float(&self, name: &str) -> Option<f64> {
        self.get(name)?.as_float()
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name)?.as_text()
    }

    pub fn date(&self, name: &str) -> Option<NaiveDate> {
        self.get(name)?.as_date()
    }

    pub fn day_month(&self, name: &str) -> Option<DayMonth> {
        match self.get(name)? {
            Value::DayMonth(value) => Some(*value),
            _ => None,
        }
    }

    pub fn floats(&self, name: &str) -> Option<&[f64]> {
        match self.get(name)? {
            Value::FloatList(values) => Some(values),
            _ => None,
        }
    }

    pub fn texts(&self, name: &str) -> Option<&[String]> {
        match self.get(name)? {
            Value::TextList(values) => Some(values),
            _ => None,
        }
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.get(name)?.as_table()
    }

    pub fn switch_values(&self) -> BTreeMap<&'static str, i64> {
        self.schema()
            .switches()
            .filter_map(|field| Some((field.name, self.values.get(field.name)?.as_int()?)))
            .collect()
    }

    /// Present values in schema order.
    pub fn values(&self) -> impl Iterator<Item = (&'static FieldSpec, &Value)> + '_ {
        self.schema()
            .fields()
            .filter_map(|field| Some((field, self.values.get(field.name)?)))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Collects values for [`Section::construct`].
#[derive(Debug, Clone)]
pub struct SectionBuilder {
    kind: SectionKind,
    fields: Vec<(String, Value)>,
}

impl SectionBuilder {
    pub fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            fields: Vec::new(),
        }
    }

    pub fn set(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.push((name.to_string(), value.into()));
        self
    }

    pub fn build(self) -> SwapResult<Section> {
        Section::construct(self.kind, self.fields)
    }
}

fn unexpected_fields(
    schema: &SectionSchema,
    legal: &LegalFields,
    values: &BTreeMap<&'static str, Value>,
    leftover: impl Iterator<Item = String>,
) -> Vec<String> {
    let mut unexpected: Vec<String> = schema
        .switches()
        .filter(|field| values.contains_key(field.name) && !legal.contains(field.name))
        .map(|field| field.name.to_string())
        .collect();
    unexpected.extend(leftover);
    unexpected
}

fn decode_error(kind: SectionKind, field: &str, value: &Value, error: CodecError) -> SwapError {
    SwapError::Decode {
        section: kind.key().to_string(),
        field: field.to_string(),
        raw: value.describe(),
        expected: error.expected,
    }
}

fn decode(kind: SectionKind, field: &FieldSpec, value: Value) -> SwapResult<Value> {
    let description = value.describe();
    field.ty.coerce(value).map_err(|error| SwapError::Decode {
        section: kind.key().to_string(),
        field: field.name.to_string(),
        raw: description,
        expected: error.expected,
    })
}

fn check_domain(kind: SectionKind, field: &FieldSpec, value: i64) -> SwapResult<()> {
    match field.ty.domain() {
        Some(domain) if !domain.contains(&value) => Err(SwapError::Range {
            section: kind.key().to_string(),
            field: field.name.to_string(),
            column: None,
            row: None,
            value: value.to_string(),
            allowed: Allowed::Domain(domain.to_vec()),
        }),
        _ => Ok(()),
    }
}

enum Source {
    Column(usize),
    Default(Value),
}

struct Cell<'a> {
    column: Option<&'a str>,
    row: Option<usize>,
}

fn range_error(kind: SectionKind, field: &FieldSpec, cell: Cell<'_>, value: String, allowed: Allowed) -> SwapError {
    SwapError::Range {
        section: kind.key().to_string(),
        field: field.name.to_string(),
        column: cell.column.map(str::to_string),
        row: cell.row,
        value,
        allowed,
    }
}

/// Numeric bounds for numbers and list items, length bounds for text.
fn check_value(
    kind: SectionKind,
    field: &FieldSpec,
    spec: &FieldSpec,
    column: Option<&str>,
    row: Option<usize>,
    value: &Value,
) -> SwapResult<()> {
    let bounds = spec.bounds;
    if let Some(domain) = spec.ty.domain()
        && let Some(switch) = value.as_int()
        && !domain.contains(&switch)
    {
        return Err(range_error(
            kind,
            field,
            Cell { column, row },
            switch.to_string(),
            Allowed::Domain(domain.to_vec()),
        ));
    }
    if bounds.is_unbounded() {
        return Ok(());
    }
    let rendered = |value: &Value| spec.ty.render(value);
    match value {
        Value::Int(_) | Value::Float(_) => {
            let number = value.as_float().unwrap_or_default();
            if !bounds.contains(number) {
                return Err(range_error(
                    kind,
                    field,
                    Cell { column, row },
                    rendered(value),
                    Allowed::Interval(bounds),
                ));
            }
        }
        Value::FloatList(items) => {
            if let Some((index, item)) = items.iter().enumerate().find(|(_, item)| !bounds.contains(**item)) {
                return Err(range_error(
                    kind,
                    field,
                    Cell { column, row: Some(index + 1) },
                    item.to_string(),
                    Allowed::Interval(bounds),
                ));
            }
        }
        Value::IntList(items) => {
            if let Some((index, item)) = items
                .iter()
                .enumerate()
                .find(|(_, item)| !bounds.contains(**item as f64))
            {
                return Err(range_error(
                    kind,
                    field,
                    Cell { column, row: Some(index + 1) },
                    item.to_string(),
                    Allowed::Interval(bounds),
                ));
            }
        }
        Value::Text(text) => {
            let length = text.chars().count() as f64;
            if !bounds.contains(length) {
                return Err(range_error(
                    kind,
                    field,
                    Cell { column, row },
                    text.clone(),
                    Allowed::Length(bounds),
                ));
            }
        }
        _ => {}
    }
    Ok(())
}

fn check_range(kind: SectionKind, field: &FieldSpec, value: &Value) -> SwapResult<()> {
    check_value(kind, field, field, None, None, value)
}

fn validate_table(
    kind: SectionKind,
    field: &FieldSpec,
    schema: &'static TableSchema,
    value: Value,
) -> SwapResult<Table> {
    let section = kind.key();
    let table = match value {
        Value::Table(table) => table,
        other => {
            return Err(decode_error(
                kind,
                field.name,
                &other,
                CodecError::new(field.ty.expected()),
            ));
        }
    };

    let mut positions: Vec<(usize, &'static FieldSpec)> = Vec::with_capacity(table.columns.len());
    let mut seen = BTreeSet::new();
    let mut unexpected = Vec::new();
    for (index, name) in table.columns.iter().enumerate() {
        match schema.column(name) {
            Some(column) if seen.insert(column.name) => positions.push((index, column)),
            _ => unexpected.push(format!("{}.{}", field.name, name.trim())),
        }
    }
    if !unexpected.is_empty() {
        return Err(SwapError::UnexpectedField {
            section: section.to_string(),
            fields: unexpected,
        });
    }

    let missing: Vec<String> = schema
        .columns
        .iter()
        .filter(|column| !seen.contains(column.name) && !column.optional && column.default.is_none())
        .map(|column| format!("{}.{}", field.name, column.name))
        .collect();
    if !missing.is_empty() {
        return Err(SwapError::MissingField {
            section: section.to_string(),
            fields: missing,
        });
    }

    // Output columns in schema order: supplied ones plus defaulted ones.
    let layout: Vec<(&'static FieldSpec, Source)> = schema
        .columns
        .iter()
        .filter_map(|column| {
            let supplied = positions
                .iter()
                .find(|(_, spec)| spec.name == column.name)
                .map(|(index, _)| Source::Column(*index));
            let source = supplied.or_else(|| column.default_value().map(Source::Default))?;
            Some((column, source))
        })
        .collect();

    let width = table.columns.len();
    let mut validated = Table::new(layout.iter().map(|(column, _)| column.name));
    for (index, row) in table.rows.into_iter().enumerate() {
        let row_number = index + 1;
        if row.len() != width {
            return Err(SwapError::Decode {
                section: section.to_string(),
                field: field.name.to_string(),
                raw: format!("row {row_number} with {} values", row.len()),
                expected: format!("{width} values per row"),
            });
        }
        let mut cells = Vec::with_capacity(layout.len());
        for (column, source) in &layout {
            let raw = match source {
                Source::Column(index) => row[*index].clone(),
                Source::Default(value) => value.clone(),
            };
            let description = raw.describe();
            let cell = column.ty.coerce(raw).map_err(|error| SwapError::Decode {
                section: section.to_string(),
                field: format!("{}.{} (row {row_number})", field.name, column.name),
                raw: description,
                expected: error.expected,
            })?;
            check_value(kind, field, column, Some(column.name), Some(row_number), &cell)?;
            cells.push(cell);
        }
        validated.push_row(cells);
    }

    if !schema.rows.contains(validated.len() as f64) {
        return Err(range_error(
            kind,
            field,
            Cell { column: None, row: None },
            validated.len().to_string(),
            Allowed::RowCount(schema.rows),
        ));
    }
    Ok(validated)
}

#[cfg(test)]
mod tests {
    use super::Section;
    use crate::domain::{Allowed, Bounds, SectionKind, SwapError, Table, Value};

    fn soil_profile(rows: &[(i64, i64, f64, f64, i64)]) -> Table {
        let mut table = Table::new(["ISOILLAY", "ISUBLAY", "HSUBLAY", "HCOMP", "NCOMP"]);
        for (layer, sublayer, thickness, compartment, count) in rows {
            table.push_row(vec![
                Value::from(*layer),
                Value::from(*sublayer),
                Value::from(*thickness),
                Value::from(*compartment),
                Value::from(*count),
            ]);
        }
        table
    }

    #[test]
    fn snow_section_follows_its_switch() {
        let off = Section::builder(SectionKind::SnowAndFrost)
            .build()
            .expect("defaults are enough when snow is off");
        assert_eq!(off.int("swsnow"), Some(0));
        assert!(!off.contains("snowinco"));

        let error = Section::builder(SectionKind::SnowAndFrost)
            .set("SWSNOW", 1)
            .build()
            .expect_err("snow parameters are required");
        assert_eq!(
            error,
            SwapError::MissingField {
                section: "snow_and_frost".to_string(),
                fields: vec![
                    "snowinco".to_string(),
                    "teprrain".to_string(),
                    "teprsnow".to_string()
                ],
            }
        );

        let error = Section::builder(SectionKind::SnowAndFrost)
            .set("swsnow", 0)
            .set("snowinco", 22.0)
            .build()
            .expect_err("snowinco is not legal with swsnow = 0");
        assert!(matches!(error, SwapError::UnexpectedField { ref fields, .. } if fields == &["snowinco"]));
    }

    #[test]
    fn raw_text_and_typed_values_build_the_same_section() {
        let typed = Section::builder(SectionKind::SnowAndFrost)
            .set("swsnow", 1)
            .set("snowinco", 22)
            .set("teprrain", 2.0)
            .set("teprsnow", -2.0)
            .build()
            .expect("typed values");
        let raw = Section::builder(SectionKind::SnowAndFrost)
            .set("swsnow", "1")
            .set("snowinco", "22.0")
            .set("teprrain", "2.0d0")
            .set("teprsnow", "-2.00")
            .build()
            .expect("raw values");

        assert_eq!(typed, raw);
        assert_eq!(typed.float("snowinco"), Some(22.0));
    }

    #[test]
    fn unknown_and_repeated_names_are_unexpected() {
        let error = Section::builder(SectionKind::SnowAndFrost)
            .set("snowfall", 1)
            .build()
            .expect_err("snowfall is not a field");
        assert_eq!(error.field(), Some("snowfall"));

        let error = Section::builder(SectionKind::SnowAndFrost)
            .set("swsnow", 0)
            .set("SWSNOW", 0)
            .build()
            .expect_err("swsnow given twice");
        assert_eq!(error.placeholder(), "INPUT.UNEXPECTED_FIELD");
    }

    #[test]
    fn scalar_bounds_are_inclusive() {
        let build = |teprrain: &str| {
            Section::builder(SectionKind::SnowAndFrost)
                .set("swsnow", 1)
                .set("snowinco", 0.0)
                .set("teprrain", teprrain)
                .set("teprsnow", -2.0)
                .build()
        };
        assert!(build("10.0").is_ok());
        let error = build("10.01").expect_err("teprrain above bound");
        assert!(matches!(
            error,
            SwapError::Range { ref field, allowed: Allowed::Interval(_), .. } if field == "teprrain"
        ));
    }

    #[test]
    fn table_cells_report_row_column_and_bound() {
        let mut table = soil_profile(&[(1, 1, 10.0, 1.0, 10), (1, 2, 20.0, 2.0, 10)]);
        table.rows[1][2] = Value::from(-20.0);

        let error = Section::builder(SectionKind::SoilProfile)
            .set("soilprofile", table)
            .set("swsophy", 1)
            .set("filenamesophy", vec!["clay.csv".to_string()])
            .set("swhyst", 0)
            .set("swmacro", 0)
            .build()
            .expect_err("negative sublayer thickness");

        match error {
            SwapError::Range {
                field,
                column,
                row,
                allowed,
                ..
            } => {
                assert_eq!(field, "soilprofile");
                assert_eq!(column.as_deref(), Some("HSUBLAY"));
                assert_eq!(row, Some(2));
                assert!(matches!(allowed, Allowed::Interval(bounds) if bounds.min == Some(0.0)));
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn table_columns_are_reordered_into_schema_order() {
        let table = Table::new(["h", "zi"])
            .row(vec![Value::from(-100.0), Value::from(-5.0)])
            .row(vec![Value::from(-200.0), Value::from(-150.0)]);
        let section = Section::builder(SectionKind::SoilMoisture)
            .set("swinco", 1)
            .set("inithead", table)
            .build()
            .expect("initial heads");

        let stored = section.table("inithead").expect("table stored");
        assert_eq!(stored.columns, vec!["ZI".to_string(), "H".to_string()]);
        assert_eq!(stored.floats("zi"), vec![-5.0, -150.0]);
    }

    #[test]
    fn table_shape_errors_are_reported() {
        let build = |table: Table| {
            Section::builder(SectionKind::SoilMoisture)
                .set("swinco", 1)
                .set("inithead", table)
                .build()
        };

        let unknown = Table::new(["ZI", "H", "THETA"]).row(vec![
            Value::from(-5.0),
            Value::from(-100.0),
            Value::from(0.3),
        ]);
        assert_eq!(
            build(unknown).expect_err("unknown column").placeholder(),
            "INPUT.UNEXPECTED_FIELD"
        );

        let missing = Table::new(["ZI"]).row(vec![Value::from(-5.0)]);
        assert_eq!(
            build(missing).expect_err("missing column").field(),
            Some("inithead.H")
        );

        let ragged = Table::new(["ZI", "H"]).row(vec![Value::from(-5.0)]);
        assert_eq!(build(ragged).expect_err("short row").placeholder(), "INPUT.DECODE");

        let empty = Table::new(["ZI", "H"]);
        assert!(matches!(
            build(empty).expect_err("no rows"),
            SwapError::Range { allowed: Allowed::RowCount(Bounds { min: Some(_), .. }), .. }
        ));
    }

    #[test]
    fn with_revalidates_the_whole_section() {
        let base = Section::builder(SectionKind::SnowAndFrost)
            .build()
            .expect("defaults");

        let error = base.with("swsnow", 1).expect_err("dependents now missing");
        assert_eq!(error.placeholder(), "INPUT.MISSING_FIELD");

        let frost = base
            .with("swfrost", 1)
            .and_then(|section| section.with("tfroststa", 0.0))
            .expect_err("tfrostend still missing");
        assert_eq!(frost.placeholder(), "INPUT.MISSING_FIELD");

        let snow = Section::builder(SectionKind::SnowAndFrost)
            .set("swsnow", 1)
            .set("snowinco", 22.0)
            .set("teprrain", 2.0)
            .set("teprsnow", -2.0)
            .build()
            .expect("snow on");
        let updated = snow.with("snowinco", 30.0).expect("value updated");
        assert_eq!(updated.float("snowinco"), Some(30.0));
        assert_eq!(snow.float("snowinco"), Some(22.0));

        let error = snow.with("swsnow", 0).expect_err("snow parameters become illegal");
        assert_eq!(error.placeholder(), "INPUT.UNEXPECTED_FIELD");
    }

    #[test]
    fn switch_values_report_resolved_switches() {
        let section = Section::builder(SectionKind::SnowAndFrost)
            .build()
            .expect("defaults");
        let switches = section.switch_values();
        assert_eq!(switches.get("swsnow"), Some(&0));
        assert_eq!(switches.get("swfrost"), Some(&0));
    }
}
