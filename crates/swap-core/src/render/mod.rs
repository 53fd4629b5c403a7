//! Text rendering of composed models.
//!
//! Output is byte-stable: the same model always renders to the same text.

use crate::domain::{BlobKey, Table, Value};
use crate::model::SwapModel;
use crate::schema::{FieldSpec, TableSchema, TableStyle};
use crate::section::Section;
use std::collections::BTreeMap;

pub type RenderedFiles = BTreeMap<BlobKey, String>;

pub const RULE_WIDTH: usize = 78;
pub const END_OF_TABLE: &str = "* End of table";
const ASSIGNMENT_WIDTH: usize = 40;

pub fn rule_line() -> String {
    "*".repeat(RULE_WIDTH)
}

pub fn render(model: &SwapModel) -> RenderedFiles {
    model
        .blobs()
        .into_iter()
        .map(|(key, sections)| {
            let text = render_blob(&key, sections);
            (key, text)
        })
        .collect()
}

pub fn render_blob(key: &BlobKey, sections: &[Section]) -> String {
    let mut out = String::new();
    out.push_str(&format!("* {}: SWAP {} input file\n", key.file_name(), key.role));
    out.push_str("* Lines starting with * are comments, text after ! is ignored\n");
    out.push('\n');
    for section in sections {
        out.push_str(&render_section(section));
    }
    out
}

pub fn render_section(section: &Section) -> String {
    let rule = rule_line();
    let mut out = String::new();
    out.push_str(&format!("{rule}\n"));
    out.push_str(&format!("* {}\n", section.kind().title()));
    out.push_str(&format!("{rule}\n"));
    out.push('\n');

    let (tables, scalars): (Vec<_>, Vec<_>) = section.values().partition(|(field, _)| field.is_table());
    if !scalars.is_empty() {
        for (field, value) in &scalars {
            out.push_str(&render_assignment(field, value));
            out.push('\n');
        }
        out.push('\n');
    }
    for (field, value) in tables {
        if let (Some(schema), Value::Table(table)) = (field.ty.table(), value) {
            out.push_str(&render_table(field, schema, table));
            out.push('\n');
        }
    }
    out
}

fn render_assignment(field: &FieldSpec, value: &Value) -> String {
    let assignment = format!("{} = {}", field.key(), field.ty.render(value));
    if field.doc.is_empty() {
        assignment
    } else {
        format!("{assignment:<ASSIGNMENT_WIDTH$} ! {}", field.doc)
    }
}

fn render_table(field: &FieldSpec, schema: &TableSchema, table: &Table) -> String {
    let mut out = String::new();
    out.push_str(&format!("* {}\n", schema.doc));

    let cells: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| {
            schema
                .columns
                .iter()
                .filter_map(|column| {
                    let index = table.column_index(column.name)?;
                    Some(column.ty.render(row.get(index)?))
                })
                .collect()
        })
        .collect();
    let headers: Vec<&str> = schema
        .columns
        .iter()
        .map(|column| column.name)
        .filter(|name| table.column_index(name).is_some())
        .collect();

    match schema.style {
        TableStyle::Csv => {
            out.push_str(&format!("{}\n", headers.join(",")));
            for row in &cells {
                out.push_str(&format!("{}\n", row.join(",")));
            }
        }
        TableStyle::Headed => {
            let widths = column_widths(Some(&headers), &cells);
            out.push_str(&format!("{}\n", align(headers.iter().copied(), &widths)));
            for row in &cells {
                out.push_str(&format!("{}\n", align(row.iter().map(String::as_str), &widths)));
            }
            out.push_str(&format!("{END_OF_TABLE}\n"));
        }
        TableStyle::Tagged => {
            let widths = column_widths(None, &cells);
            out.push_str(&format!("{} =\n", field.key()));
            for row in &cells {
                out.push_str(&format!("{}\n", align(row.iter().map(String::as_str), &widths)));
            }
            out.push_str(&format!("{END_OF_TABLE}\n"));
        }
    }
    out
}

fn column_widths(headers: Option<&[&str]>, cells: &[Vec<String>]) -> Vec<usize> {
    let columns = headers
        .map(<[&str]>::len)
        .or_else(|| cells.first().map(Vec::len))
        .unwrap_or_default();
    (0..columns)
        .map(|index| {
            let header = headers
                .and_then(|headers| headers.get(index))
                .map_or(0, |header| header.len());
            cells
                .iter()
                .filter_map(|row| row.get(index))
                .map(String::len)
                .fold(header, usize::max)
        })
        .collect()
}

fn align<'a>(tokens: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    tokens
        .zip(widths)
        .map(|(token, width)| format!("{token:>width$}"))
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::{render_section, END_OF_TABLE};
    use crate::domain::{SectionKind, Table, Value};
    use crate::section::Section;

    #[test]
    fn section_renders_banner_assignments_and_docs() {
        let section = Section::builder(SectionKind::SnowAndFrost)
            .set("swsnow", 1)
            .set("snowinco", 22.0)
            .set("teprrain", 2.0)
            .set("teprsnow", -2.0)
            .build()
            .expect("snow section");
        let text = render_section(&section);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "*".repeat(78));
        assert_eq!(lines[1], "* Snow and frost");
        assert_eq!(lines[2], "*".repeat(78));
        assert_eq!(lines[3], "");
        assert!(lines[4].starts_with("SWSNOW = 1 "));
        assert!(lines[4].ends_with("! Calculation of snow accumulation and melt"));
        assert_eq!(lines[4].find('!'), Some(41));
        assert!(lines[5].starts_with("SNOWINCO = 22.00 "));
        assert!(text.contains("TEPRSNOW = -2.00"));
        assert!(text.contains("SWFROST = 0"));
    }

    #[test]
    fn headed_tables_are_right_aligned_and_terminated() {
        let table = Table::new(["ZI", "H"])
            .row(vec![Value::from(-5.0), Value::from(-100.0)])
            .row(vec![Value::from(-195.0), Value::from(-93.0)]);
        let section = Section::builder(SectionKind::SoilMoisture)
            .set("swinco", 1)
            .set("inithead", table)
            .build()
            .expect("initial heads");
        let text = render_section(&section);

        let expected = [
            "    ZI       H",
            "  -5.0  -100.0",
            "-195.0   -93.0",
            END_OF_TABLE,
        ]
        .join("\n");
        assert!(text.contains(&expected), "{text}");
    }

    #[test]
    fn tagged_tables_open_with_their_name() {
        let dates = Table::new(["OUTDAT"])
            .row(vec![Value::from("2002-12-31")])
            .row(vec![Value::from("2003-12-31")]);
        let section = Section::builder(SectionKind::GeneralSettings)
            .set("tstart", "2002-01-01")
            .set("tend", "2003-12-31")
            .set("swmonth", 1)
            .set("swyrvar", 1)
            .set("outdat", dates)
            .set("swcsv", 0)
            .set("swcsv_tz", 0)
            .set("swafo", 0)
            .set("swaun", 0)
            .set("swdiscrvert", 0)
            .build()
            .expect("general settings");
        let text = render_section(&section);

        assert!(
            text.contains("OUTDAT =\n31-dec-2002\n31-dec-2003\n* End of table"),
            "{text}"
        );
    }
}
