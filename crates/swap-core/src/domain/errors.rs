use super::Bounds;
use std::fmt::{Display, Formatter};

pub type SwapResult<T> = Result<T, SwapError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapErrorCategory {
    Success,
    InputValidationError,
    IoSystemError,
    StructureError,
    ConfigurationError,
}

impl SwapErrorCategory {
    pub const fn exit_placeholder(self) -> ExitPlaceholder {
        match self {
            Self::Success => ExitPlaceholder {
                exit_code: 0,
                rust_category: "Success",
            },
            Self::InputValidationError => ExitPlaceholder {
                exit_code: 2,
                rust_category: "InputValidationError",
            },
            Self::IoSystemError => ExitPlaceholder {
                exit_code: 3,
                rust_category: "IoSystemError",
            },
            Self::StructureError => ExitPlaceholder {
                exit_code: 4,
                rust_category: "StructureError",
            },
            Self::ConfigurationError => ExitPlaceholder {
                exit_code: 5,
                rust_category: "ConfigurationError",
            },
        }
    }

    pub const fn exit_code(self) -> i32 {
        self.exit_placeholder().exit_code
    }

    pub const fn rust_category(self) -> &'static str {
        self.exit_placeholder().rust_category
    }

    pub const fn is_fatal(self) -> bool {
        !matches!(self, Self::Success)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitPlaceholder {
    pub exit_code: i32,
    pub rust_category: &'static str,
}

/// What a value was checked against when a [`SwapError::Range`] is raised.
#[derive(Debug, Clone, PartialEq)]
pub enum Allowed {
    Interval(Bounds),
    Domain(Vec<i64>),
    Length(Bounds),
    RowCount(Bounds),
}

impl Display for Allowed {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Interval(bounds) => write!(f, "{bounds}"),
            Self::Domain(values) => {
                let values = values
                    .iter()
                    .map(i64::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{{{values}}}")
            }
            Self::Length(bounds) => write!(f, "length {bounds}"),
            Self::RowCount(bounds) => write!(f, "row count {bounds}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SwapError {
    #[error("{section}: cannot decode {field} from '{raw}', expected {expected}")]
    Decode {
        section: String,
        field: String,
        raw: String,
        expected: String,
    },
    #[error(
        "{section}: {field}{} = {value} is outside {allowed}",
        cell_suffix(.column, .row)
    )]
    Range {
        section: String,
        field: String,
        column: Option<String>,
        row: Option<usize>,
        value: String,
        allowed: Allowed,
    },
    #[error("{section}: missing required field(s) {}", .fields.join(", "))]
    MissingField { section: String, fields: Vec<String> },
    #[error("{section}: unexpected field(s) {}", .fields.join(", "))]
    UnexpectedField { section: String, fields: Vec<String> },
    #[error("{section}: {field} references {role} file '{reference}' which was not supplied")]
    Reference {
        section: String,
        field: String,
        role: String,
        reference: String,
    },
    #[error("{blob} line {line}: {message}")]
    StructuralParse {
        blob: String,
        line: usize,
        message: String,
    },
    #[error("{section}: cannot resolve legal fields, switch {switch} {message}")]
    Configuration {
        section: String,
        switch: String,
        message: String,
    },
    #[error("{blob}: required section {section} is missing")]
    MissingSection { blob: String, section: String },
    #[error("check '{rule}' failed for {section}.{field}: {message}")]
    Invariant {
        rule: &'static str,
        section: String,
        field: String,
        message: String,
    },
    #[error("conditional rule table is inconsistent: {0}")]
    RuleTable(String),
    #[error("{blob} line {line}: {source}")]
    AtLine {
        blob: String,
        line: usize,
        source: Box<SwapError>,
    },
}

fn cell_suffix(column: &Option<String>, row: &Option<usize>) -> String {
    match (column.as_deref(), row) {
        (Some(column), Some(row)) => format!(".{column} (row {row})"),
        (Some(column), None) => format!(".{column}"),
        (None, Some(row)) => format!(" (row {row})"),
        (None, None) => String::new(),
    }
}

impl SwapError {
    pub fn at_line(self, blob: impl Into<String>, line: usize) -> Self {
        match self {
            located @ Self::AtLine { .. } => located,
            Self::StructuralParse { .. } => self,
            other => Self::AtLine {
                blob: blob.into(),
                line,
                source: Box::new(other),
            },
        }
    }

    /// The error underneath any line annotation.
    pub fn root(&self) -> &SwapError {
        match self {
            Self::AtLine { source, .. } => source.root(),
            other => other,
        }
    }

    pub fn line(&self) -> Option<usize> {
        match self {
            Self::AtLine { line, .. } | Self::StructuralParse { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// The field an error is about, if it names exactly one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Decode { field, .. }
            | Self::Range { field, .. }
            | Self::Reference { field, .. }
            | Self::Invariant { field, .. } => Some(field),
            Self::Configuration { switch, .. } => Some(switch),
            Self::MissingField { fields, .. } | Self::UnexpectedField { fields, .. } => {
                fields.first().map(String::as_str)
            }
            Self::AtLine { source, .. } => source.field(),
            Self::StructuralParse { .. } | Self::MissingSection { .. } | Self::RuleTable(_) => {
                None
            }
        }
    }

    pub fn category(&self) -> SwapErrorCategory {
        match self {
            Self::Decode { .. }
            | Self::Range { .. }
            | Self::MissingField { .. }
            | Self::UnexpectedField { .. }
            | Self::Invariant { .. } => SwapErrorCategory::InputValidationError,
            Self::Reference { .. } | Self::StructuralParse { .. } | Self::MissingSection { .. } => {
                SwapErrorCategory::StructureError
            }
            Self::Configuration { .. } | Self::RuleTable(_) => {
                SwapErrorCategory::ConfigurationError
            }
            Self::AtLine { source, .. } => source.category(),
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Decode { .. } => "INPUT.DECODE",
            Self::Range { .. } => "INPUT.RANGE",
            Self::MissingField { .. } => "INPUT.MISSING_FIELD",
            Self::UnexpectedField { .. } => "INPUT.UNEXPECTED_FIELD",
            Self::Invariant { .. } => "INPUT.INVARIANT",
            Self::Reference { .. } => "MODEL.REFERENCE",
            Self::MissingSection { .. } => "MODEL.MISSING_SECTION",
            Self::StructuralParse { .. } => "PARSE.STRUCTURE",
            Self::Configuration { .. } => "RULES.CONFIGURATION",
            Self::RuleTable(_) => "RULES.TABLE",
            Self::AtLine { source, .. } => source.placeholder(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.category().exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        let severity = if self.category().is_fatal() {
            "ERROR"
        } else {
            "INFO"
        };
        format!("{}: [{}] {}", severity, self.placeholder(), self)
    }

    pub fn fatal_exit_line(&self) -> Option<String> {
        self.category()
            .is_fatal()
            .then(|| format!("FATAL EXIT CODE: {}", self.exit_code()))
    }
}

#[cfg(test)]
mod tests {
    use super::{Allowed, SwapError, SwapErrorCategory};
    use crate::domain::Bounds;

    #[test]
    fn exit_mapping_is_stable() {
        let cases = [
            (SwapErrorCategory::Success, 0, "Success"),
            (
                SwapErrorCategory::InputValidationError,
                2,
                "InputValidationError",
            ),
            (SwapErrorCategory::IoSystemError, 3, "IoSystemError"),
            (SwapErrorCategory::StructureError, 4, "StructureError"),
            (SwapErrorCategory::ConfigurationError, 5, "ConfigurationError"),
        ];

        for (category, exit_code, rust_category) in cases {
            let placeholder = category.exit_placeholder();
            assert_eq!(placeholder.exit_code, exit_code);
            assert_eq!(placeholder.rust_category, rust_category);
        }
    }

    #[test]
    fn range_error_renders_cell_position_and_bounds() {
        let error = SwapError::Range {
            section: "soil_profile".to_string(),
            field: "soilprofile".to_string(),
            column: Some("HSUBLAY".to_string()),
            row: Some(2),
            value: "-1.00".to_string(),
            allowed: Allowed::Interval(Bounds::between(0.0, 1.0e4)),
        };

        assert_eq!(
            error.to_string(),
            "soil_profile: soilprofile.HSUBLAY (row 2) = -1.00 is outside [0..10000]"
        );
        assert_eq!(error.placeholder(), "INPUT.RANGE");
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn line_annotation_keeps_root_classification() {
        let error = SwapError::MissingField {
            section: "snow_and_frost".to_string(),
            fields: vec!["snowinco".to_string(), "teprrain".to_string()],
        }
        .at_line("swap.swp", 41);

        assert_eq!(error.line(), Some(41));
        assert_eq!(error.placeholder(), "INPUT.MISSING_FIELD");
        assert_eq!(error.field(), Some("snowinco"));
        assert!(matches!(error.root(), SwapError::MissingField { .. }));
        assert_eq!(
            error.diagnostic_line(),
            "ERROR: [INPUT.MISSING_FIELD] swap.swp line 41: snow_and_frost: missing required field(s) snowinco, teprrain"
        );
        assert_eq!(
            error.fatal_exit_line().as_deref(),
            Some("FATAL EXIT CODE: 2")
        );
    }

    #[test]
    fn domain_listing_uses_braces() {
        let allowed = Allowed::Domain(vec![0, 1, 3]);
        assert_eq!(allowed.to_string(), "{0, 1, 3}");
    }
}
