//! Reading what a SWAP run leaves behind: the log and the csv outputs.

use crate::codec::numeric::parse_number;
use crate::codec::text::{split_tokens, unquote};
use crate::domain::{SectionKind, SwapError, SwapResult};
use crate::model::SwapModel;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;

const ITERATION_STATISTICS: &str = "Iteration statistics";

/// The two csv outputs SWAP can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Csv,
    CsvTz,
}

impl OutputKind {
    pub const fn index_column(self) -> &'static str {
        match self {
            Self::Csv => "DATETIME",
            Self::CsvTz => "DATE",
        }
    }

    pub const fn file_suffix(self) -> &'static str {
        match self {
            Self::Csv => "_output.csv",
            Self::CsvTz => "_output_tz.csv",
        }
    }

    /// The general settings switch that turns this output on.
    pub const fn switch(self) -> &'static str {
        match self {
            Self::Csv => "swcsv",
            Self::CsvTz => "swcsv_tz",
        }
    }
}

/// Log lines that start with "warning", in order of appearance.
pub fn identify_warnings(log: &str) -> Vec<String> {
    log.lines()
        .map(str::trim)
        .filter(|line| {
            line.get(..7)
                .is_some_and(|start| start.eq_ignore_ascii_case("warning"))
        })
        .map(str::to_string)
        .collect()
}

/// The tail of the log from the last iteration statistics header on.
pub fn iteration_stats(log: &str) -> Option<&str> {
    log.rfind(ITERATION_STATISTICS).map(|start| &log[start..])
}

/// Numeric columns indexed by date-time.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    pub index_column: String,
    pub columns: Vec<String>,
    pub index: Vec<NaiveDateTime>,
    /// One row per index entry, one value per column.
    pub rows: Vec<Vec<f64>>,
}

/// Column sums per calendar year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearlySums {
    pub columns: Vec<String>,
    pub years: BTreeMap<i32, Vec<f64>>,
}

impl TimeSeries {
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        let position = self
            .columns
            .iter()
            .position(|column| column.eq_ignore_ascii_case(name))?;
        Some(self.rows.iter().map(|row| row[position]).collect())
    }

    pub fn yearly_sums(&self) -> YearlySums {
        let mut years: BTreeMap<i32, Vec<f64>> = BTreeMap::new();
        for (moment, row) in self.index.iter().zip(&self.rows) {
            let sums = years
                .entry(moment.year())
                .or_insert_with(|| vec![0.0; self.columns.len()]);
            for (sum, value) in sums.iter_mut().zip(row) {
                *sum += value;
            }
        }
        YearlySums {
            columns: self.columns.clone(),
            years,
        }
    }
}

fn output_error(index_column: &str, line: usize, field: &str, raw: &str, expected: &str) -> SwapError {
    SwapError::Decode {
        section: "output".to_string(),
        field: field.to_string(),
        raw: raw.to_string(),
        expected: expected.to_string(),
    }
    .at_line(format!("{index_column} output"), line)
}

fn parse_moment(raw: &str) -> Option<NaiveDateTime> {
    let text = unquote(raw);
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"]
        .into_iter()
        .find_map(|pattern| NaiveDateTime::parse_from_str(text, pattern).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Parses a SWAP csv output. Lines starting with `*` are comments; the
/// first other line is the header and `index_column` must be its first
/// column.
pub fn parse_output_csv(text: &str, index_column: &str) -> SwapResult<TimeSeries> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('*'));

    let Some((header_line, header)) = lines.next() else {
        return Err(SwapError::MissingField {
            section: "output".to_string(),
            fields: vec![index_column.to_string()],
        });
    };
    let mut names = split_tokens(header, Some(','))
        .into_iter()
        .map(|name| unquote(&name).to_string());
    match names.next() {
        Some(first) if first.eq_ignore_ascii_case(index_column) => {}
        first => {
            return Err(output_error(
                index_column,
                header_line,
                index_column,
                first.as_deref().unwrap_or_default(),
                "the index column first in the header",
            ));
        }
    }
    let columns: Vec<String> = names.collect();

    let mut series = TimeSeries {
        index_column: index_column.to_string(),
        columns,
        index: Vec::new(),
        rows: Vec::new(),
    };
    for (number, line) in lines {
        let cells = split_tokens(line, Some(','));
        if cells.len() != series.columns.len() + 1 {
            return Err(output_error(
                index_column,
                number,
                index_column,
                line,
                &format!("{} comma separated values", series.columns.len() + 1),
            ));
        }
        let moment = parse_moment(&cells[0]).ok_or_else(|| {
            output_error(index_column, number, index_column, &cells[0], "a date or date-time")
        })?;
        let row = cells[1..]
            .iter()
            .zip(&series.columns)
            .map(|(cell, column)| {
                parse_number(cell).map_err(|error| {
                    output_error(index_column, number, column, cell, &error.expected)
                })
            })
            .collect::<SwapResult<Vec<f64>>>()?;
        series.index.push(moment);
        series.rows.push(row);
    }
    tracing::debug!(index = index_column, rows = series.len(), "parsed output csv");
    Ok(series)
}

/// Everything read back after a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    pub log: String,
    pub warnings: Vec<String>,
    pub output: Option<TimeSeries>,
    pub output_tz: Option<TimeSeries>,
}

impl RunResult {
    /// Collects the run outputs, reading only the csv files the model's
    /// general settings switch on.
    pub fn assemble(
        model: &SwapModel,
        log: impl Into<String>,
        output_csv: Option<&str>,
        output_tz_csv: Option<&str>,
    ) -> SwapResult<Self> {
        let log = log.into();
        let warnings = identify_warnings(&log);
        let output = read_enabled(model, OutputKind::Csv, output_csv)?;
        let output_tz = read_enabled(model, OutputKind::CsvTz, output_tz_csv)?;
        Ok(Self {
            log,
            warnings,
            output,
            output_tz,
        })
    }

    pub fn iteration_stats(&self) -> Option<&str> {
        iteration_stats(&self.log)
    }

    pub fn yearly_sums(&self) -> Option<YearlySums> {
        self.output.as_ref().map(TimeSeries::yearly_sums)
    }
}

fn read_enabled(model: &SwapModel, kind: OutputKind, text: Option<&str>) -> SwapResult<Option<TimeSeries>> {
    let enabled = model
        .section(SectionKind::GeneralSettings)
        .and_then(|settings| settings.int(kind.switch()))
        == Some(1);
    if !enabled {
        return Ok(None);
    }
    match text {
        Some(text) => parse_output_csv(text, kind.index_column()).map(Some),
        None => {
            tracing::warn!(
                output = kind.file_suffix(),
                "expected output file was not found"
            );
            Ok(None)
        }
    }
}
