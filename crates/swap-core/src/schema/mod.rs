//! Static description of every section: fields, tables, bounds, defaults.

mod catalog;

pub use catalog::{all_sections, section};

use crate::codec::{DateFormat, FieldType};
use crate::domain::{BlobRole, Bounds, SectionKind, Value};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    Int(i64),
    Float(f64),
    Text(&'static str),
}

impl DefaultValue {
    pub fn to_value(self) -> Value {
        match self {
            Self::Int(value) => Value::Int(value),
            Self::Float(value) => Value::Float(value),
            Self::Text(value) => Value::Text(value.to_string()),
        }
    }

    pub fn as_int(self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(value),
            _ => None,
        }
    }
}

/// One field of a section or one column of a table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Lower case for section fields, file spelling for table columns.
    pub name: &'static str,
    pub ty: FieldType,
    pub bounds: Bounds,
    pub default: Option<DefaultValue>,
    pub optional: bool,
    /// Role of the satellite file this value names.
    pub reference: Option<BlobRole>,
    pub doc: &'static str,
}

impl FieldSpec {
    const fn new(name: &'static str, ty: FieldType, doc: &'static str) -> Self {
        Self {
            name,
            ty,
            bounds: Bounds::UNBOUNDED,
            default: None,
            optional: false,
            reference: None,
            doc,
        }
    }

    pub const fn switch(name: &'static str, domain: &'static [i64], doc: &'static str) -> Self {
        Self::new(name, FieldType::Switch(domain), doc)
    }

    pub const fn integer(name: &'static str, doc: &'static str) -> Self {
        Self::new(name, FieldType::Integer, doc)
    }

    pub const fn decimal(name: &'static str, places: u8, doc: &'static str) -> Self {
        Self::new(name, FieldType::Decimal(places), doc)
    }

    pub const fn float(name: &'static str, doc: &'static str) -> Self {
        Self::new(name, FieldType::Float, doc)
    }

    pub const fn text(name: &'static str, doc: &'static str) -> Self {
        Self::new(name, FieldType::Text, doc)
    }

    pub const fn date(name: &'static str, doc: &'static str) -> Self {
        Self::new(name, FieldType::Date(DateFormat::Iso), doc)
    }

    pub const fn day_month(name: &'static str, doc: &'static str) -> Self {
        Self::new(name, FieldType::DayMonth, doc)
    }

    pub const fn float_list(name: &'static str, places: u8, doc: &'static str) -> Self {
        Self::new(name, FieldType::FloatList(places), doc)
    }

    pub const fn text_list(name: &'static str, doc: &'static str) -> Self {
        Self::new(name, FieldType::TextList, doc)
    }

    pub const fn table(name: &'static str, schema: &'static TableSchema) -> Self {
        Self::new(name, FieldType::Table(schema), schema.doc)
    }

    pub const fn between(mut self, min: f64, max: f64) -> Self {
        self.bounds = Bounds::between(min, max);
        self
    }

    pub const fn at_least(mut self, min: f64) -> Self {
        self.bounds = Bounds::at_least(min);
        self
    }

    pub const fn at_most(mut self, max: f64) -> Self {
        self.bounds = Bounds::at_most(max);
        self
    }

    pub const fn default_int(mut self, value: i64) -> Self {
        self.default = Some(DefaultValue::Int(value));
        self
    }

    pub const fn default_float(mut self, value: f64) -> Self {
        self.default = Some(DefaultValue::Float(value));
        self
    }

    pub const fn default_text(mut self, value: &'static str) -> Self {
        self.default = Some(DefaultValue::Text(value));
        self
    }

    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub const fn references(mut self, role: BlobRole) -> Self {
        self.reference = Some(role);
        self
    }

    pub const fn with_format(mut self, format: DateFormat) -> Self {
        if let FieldType::Date(_) = self.ty {
            self.ty = FieldType::Date(format);
        }
        self
    }

    pub fn is_switch(&self) -> bool {
        self.ty.is_switch()
    }

    pub fn is_table(&self) -> bool {
        self.ty.is_table()
    }

    pub fn default_value(&self) -> Option<Value> {
        self.default.map(DefaultValue::to_value)
    }

    /// Upper case spelling used in files.
    pub fn key(&self) -> String {
        self.name.to_ascii_uppercase()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStyle {
    /// A header line of column names opens the table.
    Headed,
    /// A `NAME =` line opens the table; rows follow without a header.
    Tagged,
    /// Comma separated with a header line; runs to the end of the section.
    Csv,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableSchema {
    pub name: &'static str,
    pub style: TableStyle,
    pub columns: &'static [FieldSpec],
    pub rows: Bounds,
    pub doc: &'static str,
}

impl TableSchema {
    pub const fn headed(name: &'static str, columns: &'static [FieldSpec], doc: &'static str) -> Self {
        Self {
            name,
            style: TableStyle::Headed,
            columns,
            rows: Bounds::at_least(1.0),
            doc,
        }
    }

    pub const fn tagged(name: &'static str, columns: &'static [FieldSpec], doc: &'static str) -> Self {
        Self {
            name,
            style: TableStyle::Tagged,
            columns,
            rows: Bounds::at_least(1.0),
            doc,
        }
    }

    pub const fn csv(name: &'static str, columns: &'static [FieldSpec], doc: &'static str) -> Self {
        Self {
            name,
            style: TableStyle::Csv,
            columns,
            rows: Bounds::at_least(1.0),
            doc,
        }
    }

    pub const fn row_count(mut self, min: f64, max: f64) -> Self {
        self.rows = Bounds::between(min, max);
        self
    }

    pub fn column(&self, name: &str) -> Option<&'static FieldSpec> {
        self.columns
            .iter()
            .find(|column| column.name.eq_ignore_ascii_case(name))
    }

    pub fn column_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|column| column.name)
    }
}

/// How a section's absence is treated when a blob is composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    /// Built from declared defaults when absent.
    Defaulted,
    /// Exactly one section of the group must be present.
    Alternative(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSchema {
    pub kind: SectionKind,
    pub presence: Presence,
    /// Field groups in render order. Groups let sections share field runs.
    pub groups: &'static [&'static [FieldSpec]],
}

impl SectionSchema {
    pub fn fields(&self) -> impl Iterator<Item = &'static FieldSpec> + '_ {
        self.groups.iter().flat_map(|group| group.iter())
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields()
            .find(|field| field.name.eq_ignore_ascii_case(name))
    }

    pub fn tables(&self) -> impl Iterator<Item = (&'static FieldSpec, &'static TableSchema)> + '_ {
        self.fields()
            .filter_map(|field| field.ty.table().map(|table| (field, table)))
    }

    pub fn switches(&self) -> impl Iterator<Item = &'static FieldSpec> + '_ {
        self.fields().filter(|field| field.is_switch())
    }
}

#[cfg(test)]
mod tests {
    use super::{all_sections, section, Presence, TableStyle};
    use crate::domain::{BlobRole, SectionKind};
    use std::collections::BTreeSet;

    #[test]
    fn every_section_kind_has_exactly_one_schema() {
        let kinds: Vec<SectionKind> = all_sections().iter().map(|schema| schema.kind).collect();
        assert_eq!(kinds, SectionKind::ALL.to_vec());
        for kind in SectionKind::ALL {
            assert_eq!(section(kind).kind, kind);
        }
    }

    #[test]
    fn field_names_are_unique_lower_case_within_a_section() {
        for schema in all_sections() {
            let mut seen = BTreeSet::new();
            for field in schema.fields() {
                assert_eq!(field.name, field.name.to_ascii_lowercase(), "{}", field.name);
                assert!(seen.insert(field.name), "{}.{} declared twice", schema.kind, field.name);
            }
        }
    }

    #[test]
    fn defaults_and_bounds_are_consistent() {
        for schema in all_sections() {
            for field in schema.fields() {
                if let Some(default) = field.default_value() {
                    let coerced = field
                        .ty
                        .coerce(default)
                        .unwrap_or_else(|error| panic!("{}.{}: {error}", schema.kind, field.name));
                    if let Some(value) = coerced.as_float() {
                        assert!(field.bounds.contains(value), "{}.{}", schema.kind, field.name);
                    }
                    if let (Some(domain), Some(value)) = (field.ty.domain(), coerced.as_int()) {
                        assert!(domain.contains(&value), "{}.{}", schema.kind, field.name);
                    }
                }
            }
        }
    }

    #[test]
    fn defaulted_sections_can_be_built_from_defaults_alone() {
        for schema in all_sections() {
            if schema.presence != Presence::Defaulted {
                continue;
            }
            for field in schema.switches() {
                assert!(
                    field.default.is_some(),
                    "{}.{} needs a default",
                    schema.kind,
                    field.name
                );
            }
        }
    }

    #[test]
    fn csv_tables_only_appear_in_meteo_files() {
        for schema in all_sections() {
            for (_, table) in schema.tables() {
                if table.style == TableStyle::Csv {
                    assert_eq!(schema.kind.role(), BlobRole::Meteo);
                }
                let mut columns = BTreeSet::new();
                for column in table.columns {
                    assert!(!column.is_table());
                    assert!(columns.insert(column.name.to_ascii_uppercase()));
                }
            }
        }
    }
}
