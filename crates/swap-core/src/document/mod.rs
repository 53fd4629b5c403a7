//! JSON configuration documents.
//!
//! A document lists raw `name -> value` maps per section. Loading it runs
//! the same construction and composition as the builder API.

use crate::domain::{BlobRole, SectionKind, SwapResult, Value};
use crate::model::{SatelliteFile, SwapModel};
use crate::section::Section;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub type SectionValues = BTreeMap<SectionKind, BTreeMap<String, Value>>;

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct ConfigDocument {
    #[serde(default)]
    pub sections: SectionValues,
    #[serde(default)]
    pub satellites: Vec<SatelliteDocument>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SatelliteDocument {
    pub role: BlobRole,
    pub name: String,
    #[serde(default)]
    pub sections: SectionValues,
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("failed to read configuration document '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse configuration document '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

fn construct_all(sections: SectionValues) -> SwapResult<Vec<Section>> {
    sections
        .into_iter()
        .map(|(kind, values)| Section::construct(kind, values))
        .collect()
}

fn export(sections: &[Section]) -> SectionValues {
    sections
        .iter()
        .map(|section| {
            let values = section
                .values()
                .map(|(field, value)| (field.name.to_string(), value.clone()))
                .collect();
            (section.kind(), values)
        })
        .collect()
}

impl ConfigDocument {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&source).map_err(|source| DocumentError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn into_model(self) -> SwapResult<SwapModel> {
        let sections = construct_all(self.sections)?;
        let satellites = self
            .satellites
            .into_iter()
            .map(|satellite| {
                SatelliteFile::compose(satellite.role, satellite.name, construct_all(satellite.sections)?)
            })
            .collect::<SwapResult<Vec<_>>>()?;
        SwapModel::compose(sections, satellites)
    }

    /// Exports every stored value, defaults included.
    pub fn from_model(model: &SwapModel) -> Self {
        Self {
            sections: export(model.sections()),
            satellites: model
                .satellites()
                .map(|satellite| SatelliteDocument {
                    role: satellite.role(),
                    name: satellite.name().to_string(),
                    sections: export(satellite.sections()),
                })
                .collect(),
        }
    }
}
