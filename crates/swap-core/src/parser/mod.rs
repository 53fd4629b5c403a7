//! Reading rendered (or hand written) SWAP text back into sections.
//!
//! A blob with section banners is split into one span per banner. A blob
//! without any recognised banner is read as legacy input: every key and
//! table is routed to the section of the blob role that declares it.

use crate::codec::text::{split_tokens, strip_inline_comment, unquote};
use crate::domain::{BlobKey, BlobRole, SectionKind, SwapError, SwapResult, Table, Value};
use crate::model::{SatelliteFile, SwapModel};
use crate::render::END_OF_TABLE;
use crate::schema::{self, TableSchema, TableStyle};
use crate::section::Section;
use std::collections::{BTreeMap, BTreeSet};

/// Shortest run of `*` accepted as a banner rule.
const MIN_RULE_WIDTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind<'a> {
    Blank,
    Rule,
    EndOfTable,
    Comment(&'a str),
    Content(&'a str),
}

#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    number: usize,
    kind: LineKind<'a>,
}

fn tokenize(text: &str) -> Vec<Line<'_>> {
    text.lines()
        .enumerate()
        .map(|(index, raw)| {
            let trimmed = raw.trim();
            let kind = if trimmed.is_empty() {
                LineKind::Blank
            } else if trimmed.len() >= MIN_RULE_WIDTH && trimmed.chars().all(|c| c == '*') {
                LineKind::Rule
            } else if trimmed.eq_ignore_ascii_case(END_OF_TABLE) {
                LineKind::EndOfTable
            } else if let Some(comment) = trimmed.strip_prefix('*') {
                LineKind::Comment(comment.trim())
            } else {
                LineKind::Content(trimmed)
            };
            Line {
                number: index + 1,
                kind,
            }
        })
        .collect()
}

struct Banner<'a> {
    /// Index of the opening rule in the line list.
    index: usize,
    number: usize,
    title: &'a str,
}

fn find_banners<'a>(lines: &[Line<'a>]) -> Vec<Banner<'a>> {
    lines
        .windows(3)
        .enumerate()
        .filter_map(|(index, window)| match (window[0].kind, window[1].kind, window[2].kind) {
            (LineKind::Rule, LineKind::Comment(title), LineKind::Rule) => Some(Banner {
                index,
                number: window[1].number,
                title,
            }),
            _ => None,
        })
        .collect()
}

/// One key or table read from a span, before validation.
#[derive(Debug, Clone)]
struct Entry {
    name: String,
    value: Value,
    line: usize,
    /// Source line of every table row.
    rows: Vec<usize>,
}

struct OpenTable {
    field: &'static str,
    delimiter: Option<char>,
    table: Table,
    line: usize,
    rows: Vec<usize>,
}

impl OpenTable {
    fn new(field: &'static str, schema: &TableSchema, columns: Vec<String>, line: usize) -> Self {
        Self {
            field,
            delimiter: (schema.style == TableStyle::Csv).then_some(','),
            table: Table::new(columns),
            line,
            rows: Vec::new(),
        }
    }

    fn push(&mut self, text: &str, line: usize) {
        let cells = split_tokens(text, self.delimiter)
            .iter()
            .map(|token| Value::Text(unquote(token).to_string()))
            .collect();
        self.table.push_row(cells);
        self.rows.push(line);
    }

    fn close(self) -> Entry {
        Entry {
            name: self.field.to_string(),
            value: Value::Table(self.table),
            line: self.line,
            rows: self.rows,
        }
    }
}

fn structural(blob: &str, line: usize, message: String) -> SwapError {
    SwapError::StructuralParse {
        blob: blob.to_string(),
        line,
        message,
    }
}

/// Splits `NAME = value` on the first `=` outside quotes.
fn split_assignment(text: &str) -> Option<(&str, &str)> {
    let mut open: Option<char> = None;
    for (index, character) in text.char_indices() {
        match (open, character) {
            (None, '\'' | '"') => open = Some(character),
            (Some(quote), current) if quote == current => open = None,
            (None, '=') => return Some((text[..index].trim(), text[index + 1..].trim())),
            _ => {}
        }
    }
    None
}

fn is_key(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn tagged_table(scope: &[SectionKind], name: &str) -> Option<(&'static str, &'static TableSchema)> {
    scope.iter().find_map(|kind| {
        schema::section(*kind)
            .tables()
            .find(|(field, table)| table.style == TableStyle::Tagged && field.name.eq_ignore_ascii_case(name))
            .map(|(field, table)| (field.name, table))
    })
}

/// Opens a headed or csv table when every token of `text` is one of its
/// column names.
fn headed_table(scope: &[SectionKind], text: &str, line: usize) -> Option<OpenTable> {
    let delimiter = text.contains(',').then_some(',');
    let tokens = split_tokens(text, delimiter);
    if tokens.is_empty() || tokens.iter().any(String::is_empty) {
        return None;
    }
    let style = if delimiter.is_some() {
        TableStyle::Csv
    } else {
        TableStyle::Headed
    };
    scope.iter().find_map(|kind| {
        schema::section(*kind)
            .tables()
            .find(|(_, table)| {
                table.style == style && tokens.iter().all(|token| table.column(token).is_some())
            })
            .map(|(field, table)| OpenTable::new(field.name, table, tokens.clone(), line))
    })
}

fn ensure_unique(blob: &str, entries: &[Entry], name: &str, line: usize) -> SwapResult<()> {
    match entries.iter().find(|entry| entry.name.eq_ignore_ascii_case(name)) {
        Some(first) => Err(structural(
            blob,
            line,
            format!(
                "{} is given more than once (first on line {})",
                name.to_ascii_uppercase(),
                first.line
            ),
        )),
        None => Ok(()),
    }
}

fn close(open: &mut Option<OpenTable>, entries: &mut Vec<Entry>) {
    if let Some(table) = open.take() {
        entries.push(table.close());
    }
}

/// Reads the keys and tables of one span. `scope` lists the sections whose
/// tables may appear in it.
fn collect(blob: &str, lines: &[Line<'_>], scope: &[SectionKind]) -> SwapResult<Vec<Entry>> {
    let mut entries: Vec<Entry> = Vec::new();
    let mut open: Option<OpenTable> = None;

    for line in lines {
        let text = match line.kind {
            LineKind::Blank | LineKind::EndOfTable => {
                close(&mut open, &mut entries);
                continue;
            }
            LineKind::Rule | LineKind::Comment(_) => continue,
            LineKind::Content(text) => strip_inline_comment(text).trim(),
        };
        if text.is_empty() {
            continue;
        }

        if let Some((name, value)) = split_assignment(text) {
            close(&mut open, &mut entries);
            if !is_key(name) {
                return Err(structural(blob, line.number, format!("'{name}' is not a valid key")));
            }
            ensure_unique(blob, &entries, name, line.number)?;
            if !value.is_empty() {
                entries.push(Entry {
                    name: name.to_ascii_lowercase(),
                    value: Value::Text(unquote(value).to_string()),
                    line: line.number,
                    rows: Vec::new(),
                });
                continue;
            }
            let Some((field, table)) = tagged_table(scope, name) else {
                return Err(structural(
                    blob,
                    line.number,
                    format!("{} has no value", name.to_ascii_uppercase()),
                ));
            };
            let columns = table.column_names().map(str::to_string).collect();
            open = Some(OpenTable::new(field, table, columns, line.number));
            continue;
        }

        if let Some(table) = open.as_mut() {
            table.push(text, line.number);
            continue;
        }
        if let Some(table) = headed_table(scope, text, line.number) {
            ensure_unique(blob, &entries, table.field, line.number)?;
            open = Some(table);
            continue;
        }
        return Err(structural(blob, line.number, format!("cannot interpret '{text}'")));
    }
    close(&mut open, &mut entries);
    Ok(entries)
}

/// Source line an error refers to: the offending table row when known,
/// otherwise the key or table start.
fn error_line(error: &SwapError, entries: &[Entry]) -> Option<usize> {
    let field = error.field()?;
    let name = field.split(['.', ' ']).next()?;
    let entry = entries
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))?;
    let row = match error.root() {
        SwapError::Range { row: Some(row), .. } => Some(*row),
        _ => field
            .split_once("(row ")
            .and_then(|(_, rest)| rest.trim_end_matches(')').parse::<usize>().ok()),
    };
    row.and_then(|row| row.checked_sub(1))
        .and_then(|index| entry.rows.get(index))
        .copied()
        .or(Some(entry.line))
}

fn build_section(blob: &str, kind: SectionKind, entries: &[Entry], start: usize) -> SwapResult<Section> {
    let fields = entries
        .iter()
        .map(|entry| (entry.name.as_str(), entry.value.clone()));
    Section::construct(kind, fields).map_err(|error| {
        let line = error_line(&error, entries).unwrap_or(start);
        error.at_line(blob, line)
    })
}

/// Parses one blob into validated sections in canonical order.
pub fn parse_blob(key: &BlobKey, text: &str) -> SwapResult<Vec<Section>> {
    let blob = key.file_name();
    let lines = tokenize(text);
    let banners = find_banners(&lines);
    let recognised = banners
        .iter()
        .any(|banner| SectionKind::from_title(key.role, banner.title).is_some());
    if !recognised {
        return parse_legacy(key, &lines);
    }

    let first = banners.first().map_or(0, |banner| banner.index);
    if let Some(stray) = lines[..first]
        .iter()
        .find(|line| matches!(line.kind, LineKind::Content(_)))
    {
        return Err(structural(
            &blob,
            stray.number,
            "content before the first section banner".to_string(),
        ));
    }

    let mut seen = BTreeSet::new();
    let mut previous: Option<SectionKind> = None;
    let mut sections = Vec::with_capacity(banners.len());
    for (position, banner) in banners.iter().enumerate() {
        let kind = SectionKind::from_title(key.role, banner.title).ok_or_else(|| {
            structural(
                &blob,
                banner.number,
                format!("'{}' is not a {} file section", banner.title, key.role),
            )
        })?;
        if !seen.insert(kind) {
            return Err(structural(
                &blob,
                banner.number,
                format!("section '{}' appears more than once", banner.title),
            ));
        }
        if let Some(previous) = previous
            && kind < previous
        {
            return Err(structural(
                &blob,
                banner.number,
                format!("section '{}' must come before '{}'", kind.title(), previous.title()),
            ));
        }
        previous = Some(kind);

        let end = banners
            .get(position + 1)
            .map_or(lines.len(), |next| next.index);
        let body = lines.get(banner.index + 3..end).unwrap_or_default();
        let entries = collect(&blob, body, &[kind])?;
        sections.push(build_section(&blob, kind, &entries, banner.number)?);
    }
    Ok(sections)
}

/// Picks the crop development section from its distinguishing keys.
fn crop_development(entries: &[Entry]) -> Option<SectionKind> {
    let has = |name: &str| entries.iter().any(|entry| entry.name == name);
    if has("idev") {
        Some(SectionKind::CropDevelopmentFixed)
    } else if has("idsl") || has("tdwi") {
        Some(SectionKind::CropDevelopmentWofost)
    } else {
        None
    }
}

fn parse_legacy(key: &BlobKey, lines: &[Line<'_>]) -> SwapResult<Vec<Section>> {
    let blob = key.file_name();
    let development = crop_development_scope(key.role);
    let scope: Vec<SectionKind> = key.role.sections().collect();
    let entries = collect(&blob, lines, &scope)?;
    let chosen = crop_development(&entries);

    let candidates: Vec<SectionKind> = scope
        .iter()
        .copied()
        .filter(|kind| match chosen {
            Some(chosen) if development.contains(kind) => *kind == chosen,
            _ => true,
        })
        .collect();

    let mut routed: BTreeMap<SectionKind, Vec<Entry>> = BTreeMap::new();
    for entry in entries {
        let kind = candidates
            .iter()
            .copied()
            .find(|kind| schema::section(*kind).field(&entry.name).is_some())
            .ok_or_else(|| {
                structural(
                    &blob,
                    entry.line,
                    format!(
                        "{} is not a field of any {} file section",
                        entry.name.to_ascii_uppercase(),
                        key.role
                    ),
                )
            })?;
        routed.entry(kind).or_default().push(entry);
    }
    tracing::debug!(blob = %blob, sections = routed.len(), "routed legacy input");

    routed
        .into_iter()
        .map(|(kind, entries)| {
            let start = entries.first().map_or(1, |entry| entry.line);
            build_section(&blob, kind, &entries, start)
        })
        .collect()
}

fn crop_development_scope(role: BlobRole) -> Vec<SectionKind> {
    role.sections()
        .filter(|kind| {
            matches!(
                schema::section(*kind).presence,
                schema::Presence::Alternative(_)
            )
        })
        .collect()
}

/// Parses a set of blobs and composes them into a model.
pub fn parse(blobs: &BTreeMap<BlobKey, String>) -> SwapResult<SwapModel> {
    let mut main: Option<(&BlobKey, Vec<Section>)> = None;
    let mut satellites = Vec::new();
    for (key, text) in blobs {
        let sections = parse_blob(key, text)?;
        if key.role != BlobRole::Main {
            satellites.push(SatelliteFile::compose(key.role, key.name.clone(), sections)?);
            continue;
        }
        if let Some((first, _)) = &main {
            return Err(structural(
                &key.file_name(),
                1,
                format!("a second main file was supplied next to {first}"),
            ));
        }
        main = Some((key, sections));
    }
    let Some((_, sections)) = main else {
        return Err(structural(
            &BlobKey::main().file_name(),
            0,
            "no main file was supplied".to_string(),
        ));
    };
    SwapModel::compose(sections, satellites)
}

#[cfg(test)]
mod tests {
    use super::{parse_blob, split_assignment};
    use crate::domain::{BlobKey, BlobRole, SectionKind, SwapError};
    use crate::render::render_section;
    use crate::section::Section;

    fn main_key() -> BlobKey {
        BlobKey::main()
    }

    fn banner(title: &str) -> String {
        let rule = "*".repeat(78);
        format!("{rule}\n* {title}\n{rule}\n")
    }

    #[test]
    fn assignments_split_outside_quotes() {
        assert_eq!(split_assignment("PROJECT = 'a = b'"), Some(("PROJECT", "'a = b'")));
        assert_eq!(split_assignment("OUTDAT ="), Some(("OUTDAT", "")));
        assert_eq!(split_assignment("'x = y'"), None);
    }

    #[test]
    fn rendered_section_reads_back() {
        let section = Section::builder(SectionKind::SnowAndFrost)
            .set("swsnow", 1)
            .set("snowinco", 22.0)
            .set("teprrain", 2.0)
            .set("teprsnow", -2.0)
            .build()
            .expect("snow section");
        let parsed = parse_blob(&main_key(), &render_section(&section)).expect("parse");
        assert_eq!(parsed, vec![section]);
    }

    #[test]
    fn headed_tables_close_at_blank_lines_and_accept_any_column_order() {
        let text = format!(
            "{}SWINCO = 1\n\n  H  ZI\n-100.0 -5.0\n-93.0 -195.0\n\n",
            banner("Initial soil moisture")
        );
        let parsed = parse_blob(&main_key(), &text).expect("parse");
        let table = parsed[0].table("inithead").expect("table");
        assert_eq!(table.floats("ZI"), vec![-5.0, -195.0]);
        assert_eq!(table.floats("H"), vec![-100.0, -93.0]);
    }

    #[test]
    fn content_before_the_first_banner_is_rejected() {
        let text = format!("SWSNOW = 0\n{}", banner("Snow and frost"));
        let error = parse_blob(&main_key(), &text).expect_err("stray key");
        assert_eq!(
            error,
            SwapError::StructuralParse {
                blob: "swap.swp".to_string(),
                line: 1,
                message: "content before the first section banner".to_string(),
            }
        );
    }

    #[test]
    fn unknown_duplicate_and_misordered_banners_are_rejected() {
        let unknown = format!("{}{}", banner("Snow and frost"), banner("Nonexistent part"));
        let error = parse_blob(&main_key(), &unknown).expect_err("unknown title");
        assert_eq!(error.line(), Some(5));

        let duplicate = format!("{}{}", banner("Snow and frost"), banner("Snow and frost"));
        let error = parse_blob(&main_key(), &duplicate).expect_err("duplicate section");
        assert!(error.to_string().contains("more than once"), "{error}");

        let reversed = format!("{}{}", banner("Snow and frost"), banner("Initial soil moisture"));
        let error = parse_blob(&main_key(), &reversed).expect_err("wrong order");
        assert!(error.to_string().contains("must come before"), "{error}");
    }

    #[test]
    fn duplicate_keys_are_structural_errors() {
        let text = format!("{}SWSNOW = 0\nSWSNOW = 0\n", banner("Snow and frost"));
        let error = parse_blob(&main_key(), &text).expect_err("repeated key");
        assert_eq!(error.placeholder(), "PARSE.STRUCTURE");
        assert_eq!(error.line(), Some(5));
    }

    #[test]
    fn validation_errors_carry_the_line_of_the_field() {
        let text = format!(
            "{}SWSNOW = 1\nSNOWINCO = 22.0\nTEPRRAIN = 12.0\nTEPRSNOW = -2.0\n",
            banner("Snow and frost")
        );
        let error = parse_blob(&main_key(), &text).expect_err("rain threshold too high");
        assert_eq!(error.line(), Some(6));
        assert_eq!(error.placeholder(), "INPUT.RANGE");
        assert!(error.to_string().starts_with("swap.swp line 6: snow_and_frost: teprrain"));
    }

    #[test]
    fn table_cell_errors_point_at_the_row() {
        let text = format!(
            "{}SWINCO = 1\n\n* heads\nZI H\n-5.0 -100.0\n10.0 -93.0\n* End of table\n",
            banner("Initial soil moisture")
        );
        let error = parse_blob(&main_key(), &text).expect_err("positive depth");
        assert_eq!(error.line(), Some(9));
        assert_eq!(error.placeholder(), "INPUT.RANGE");
    }

    #[test]
    fn legacy_input_routes_keys_by_declaring_section() {
        let text = "* Irrigation events\n\
                    SWIRFIX = 0\n\
                    SWSNOW = 1 ! snow\n\
                    SNOWINCO = 22.0\n\
                    TEPRRAIN = 2.0\n\
                    TEPRSNOW = -2.0\n";
        let sections = parse_blob(&main_key(), text).expect("legacy parse");
        let kinds: Vec<SectionKind> = sections.iter().map(Section::kind).collect();
        assert_eq!(kinds, vec![SectionKind::FixedIrrigation, SectionKind::SnowAndFrost]);
    }

    #[test]
    fn legacy_crop_files_pick_development_from_distinguishing_keys() {
        let key = BlobKey::new(BlobRole::Crop, "potato");

        let error = parse_blob(&key, "IDEV = 1\n").expect_err("incomplete fixed crop");
        assert!(error.to_string().contains("crop_development_fixed"), "{error}");

        let error = parse_blob(&key, "IDSL = 0\n").expect_err("incomplete wofost crop");
        assert!(error.to_string().contains("crop_development_wofost"), "{error}");

        let error = parse_blob(&key, "IDSL = 0\nIDEV = 1\n").expect_err("mixed crop keys");
        assert_eq!(error.placeholder(), "PARSE.STRUCTURE");
        assert_eq!(error.line(), Some(1));
    }
}
