//! Composition of validated sections into blobs and a whole model.

mod checks;

use crate::domain::{BlobKey, BlobRole, SectionKind, SwapError, SwapResult, Value};
use crate::rules;
use crate::schema::{self, Presence};
use crate::section::Section;
use std::collections::BTreeMap;

/// Sections of one non-main blob, in canonical order.
#[derive(Debug, Clone, PartialEq)]
pub struct SatelliteFile {
    key: BlobKey,
    sections: Vec<Section>,
}

impl SatelliteFile {
    pub fn compose(role: BlobRole, name: impl Into<String>, sections: Vec<Section>) -> SwapResult<Self> {
        let key = BlobKey::new(role, name);
        if role == BlobRole::Main {
            return Err(SwapError::Invariant {
                rule: "satellite_role_is_not_main",
                section: String::new(),
                field: String::new(),
                message: format!("{key} cannot be composed as a satellite"),
            });
        }
        let sections = arrange(&key, sections)?;
        Ok(Self { key, sections })
    }

    pub fn key(&self) -> &BlobKey {
        &self.key
    }

    pub fn role(&self) -> BlobRole {
        self.key.role
    }

    pub fn name(&self) -> &str {
        &self.key.name
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|section| section.kind() == kind)
    }
}

/// The root of a SWAP configuration: main file sections plus satellites.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapModel {
    sections: Vec<Section>,
    satellites: BTreeMap<BlobKey, SatelliteFile>,
}

impl SwapModel {
    /// Orders, completes and cross-checks a set of sections and satellites.
    /// Input order does not matter.
    pub fn compose(sections: Vec<Section>, satellites: Vec<SatelliteFile>) -> SwapResult<Self> {
        let sections = arrange(&BlobKey::main(), sections)?;

        let mut by_key = BTreeMap::new();
        for satellite in satellites {
            let key = satellite.key.clone();
            let duplicate = by_key
                .keys()
                .any(|existing: &BlobKey| same_blob(existing, &key));
            if duplicate {
                return Err(SwapError::Invariant {
                    rule: "satellite_names_unique",
                    section: String::new(),
                    field: String::new(),
                    message: format!("{key} is supplied more than once"),
                });
            }
            by_key.insert(key, satellite);
        }

        let model = Self {
            sections,
            satellites: by_key,
        };
        model.resolve_references()?;
        model.enforce_external_gates()?;
        checks::check_model(&model)?;

        let rules = rules::rules()?;
        for (key, sections) in model.blobs() {
            for section in sections {
                if let Some(note) = rules.incomplete(section.kind()) {
                    tracing::debug!(blob = %key, section = %section.kind(), note, "rule coverage is incomplete");
                }
            }
        }
        tracing::debug!(
            sections = model.sections.len(),
            satellites = model.satellites.len(),
            "composed model"
        );
        Ok(model)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|section| section.kind() == kind)
    }

    pub fn satellites(&self) -> impl Iterator<Item = &SatelliteFile> {
        self.satellites.values()
    }

    /// Finds a satellite by the name a reference field carries.
    pub fn satellite(&self, role: BlobRole, name: &str) -> Option<&SatelliteFile> {
        let wanted = BlobKey::new(role, name);
        self.satellites
            .values()
            .find(|satellite| same_blob(&satellite.key, &wanted))
    }

    /// Every blob with its sections, main blob first.
    pub fn blobs(&self) -> Vec<(BlobKey, &[Section])> {
        let mut blobs = vec![(BlobKey::main(), self.sections.as_slice())];
        blobs.extend(
            self.satellites
                .values()
                .map(|satellite| (satellite.key.clone(), satellite.sections.as_slice())),
        );
        blobs
    }

    fn resolve_references(&self) -> SwapResult<()> {
        let mut referenced = Vec::new();
        for (_, sections) in self.blobs() {
            for section in sections {
                for (reference, role, name) in references(section) {
                    if self.satellite(role, &name).is_none() {
                        return Err(SwapError::Reference {
                            section: section.kind().key().to_string(),
                            field: reference,
                            role: role.to_string(),
                            reference: name,
                        });
                    }
                    referenced.push(BlobKey::new(role, name));
                }
            }
        }
        for key in self.satellites.keys() {
            if !referenced.iter().any(|reference| same_blob(reference, key)) {
                tracing::debug!(blob = %key, "satellite is not referenced by any section");
            }
        }
        Ok(())
    }

    fn enforce_external_gates(&self) -> SwapResult<()> {
        let rules = rules::rules()?;
        for (_, sections) in self.blobs() {
            for section in sections {
                for gate in rules.external_gates(section.kind()) {
                    let source = self
                        .section(gate.source)
                        .or_else(|| sections.iter().find(|candidate| candidate.kind() == gate.source))
                        .ok_or_else(|| SwapError::Configuration {
                            section: section.kind().key().to_string(),
                            switch: gate.switch.to_string(),
                            message: format!(
                                "gates {} but section {} is not part of the model",
                                gate.field, gate.source
                            ),
                        })?;
                    let open = source.int(gate.switch).is_some_and(|value| gate.is_open(value));
                    let present = section.contains(gate.field);
                    if open && gate.required && !present {
                        return Err(SwapError::MissingField {
                            section: section.kind().key().to_string(),
                            fields: vec![gate.field.to_string()],
                        });
                    }
                    if !open && present {
                        return Err(SwapError::UnexpectedField {
                            section: section.kind().key().to_string(),
                            fields: vec![gate.field.to_string()],
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

fn same_blob(left: &BlobKey, right: &BlobKey) -> bool {
    left.role == right.role && left.file_name().eq_ignore_ascii_case(&right.file_name())
}

/// Reference values a section carries: `(field, role, name)`.
fn references(section: &Section) -> Vec<(String, BlobRole, String)> {
    let mut found = Vec::new();
    for (field, value) in section.values() {
        if let (Some(role), Some(name)) = (field.reference, value.as_text()) {
            found.push((field.name.to_string(), role, name.to_string()));
        }
        if let (Some(table_schema), Value::Table(table)) = (field.ty.table(), value) {
            for column in table_schema.columns {
                let Some(role) = column.reference else {
                    continue;
                };
                for name in table.texts(column.name) {
                    found.push((format!("{}.{}", field.name, column.name), role, name.to_string()));
                }
            }
        }
    }
    found
}

/// Orders the sections of one blob and fills in what presence rules allow.
fn arrange(key: &BlobKey, sections: Vec<Section>) -> SwapResult<Vec<Section>> {
    let blob = key.file_name();
    let mut by_kind: BTreeMap<SectionKind, Section> = BTreeMap::new();
    for section in sections {
        let kind = section.kind();
        if kind.role() != key.role {
            return Err(SwapError::Invariant {
                rule: "section_belongs_to_blob",
                section: kind.key().to_string(),
                field: String::new(),
                message: format!("{kind} belongs in a {} file, not {blob}", kind.role()),
            });
        }
        if by_kind.insert(kind, section).is_some() {
            return Err(SwapError::Invariant {
                rule: "section_unique_in_blob",
                section: kind.key().to_string(),
                field: String::new(),
                message: format!("{kind} is supplied more than once for {blob}"),
            });
        }
    }

    let mut alternatives: BTreeMap<&'static str, Vec<SectionKind>> = BTreeMap::new();
    for kind in key.role.sections() {
        match schema::section(kind).presence {
            Presence::Required if !by_kind.contains_key(&kind) => {
                return Err(SwapError::MissingSection {
                    blob,
                    section: kind.key().to_string(),
                });
            }
            Presence::Defaulted if !by_kind.contains_key(&kind) => {
                tracing::debug!(blob = %blob, section = %kind, "filled section from defaults");
                by_kind.insert(kind, Section::defaulted(kind)?);
            }
            Presence::Alternative(group) => alternatives.entry(group).or_default().push(kind),
            _ => {}
        }
    }

    for (group, kinds) in alternatives {
        let present: Vec<SectionKind> = kinds
            .iter()
            .copied()
            .filter(|kind| by_kind.contains_key(kind))
            .collect();
        match present.as_slice() {
            [_] => {}
            [] => {
                return Err(SwapError::MissingSection {
                    blob,
                    section: kinds
                        .iter()
                        .map(|kind| kind.key())
                        .collect::<Vec<_>>()
                        .join(" | "),
                });
            }
            [first, ..] => {
                return Err(SwapError::Invariant {
                    rule: "crop_development_alternatives_exclusive",
                    section: first.key().to_string(),
                    field: String::new(),
                    message: format!("only one section of {group} may be given in {blob}"),
                });
            }
        }
    }

    Ok(by_kind.into_values().collect())
}

#[cfg(test)]
mod tests {
    use super::{SatelliteFile, SwapModel};
    use crate::domain::{BlobRole, SectionKind, SwapError};
    use crate::section::Section;

    fn snow() -> Section {
        Section::builder(SectionKind::SnowAndFrost)
            .build()
            .expect("defaults")
    }

    #[test]
    fn satellite_sections_must_match_the_role() {
        let error = SatelliteFile::compose(BlobRole::Drainage, "swa", vec![snow()])
            .expect_err("snow settings belong to the main file");
        assert!(matches!(
            error,
            SwapError::Invariant { rule: "section_belongs_to_blob", .. }
        ));
    }

    #[test]
    fn missing_required_sections_are_named() {
        let error = SatelliteFile::compose(BlobRole::Drainage, "swa", Vec::new())
            .expect_err("drainage settings are required");
        assert_eq!(
            error,
            SwapError::MissingSection {
                blob: "swa.dra".to_string(),
                section: "drainage_file".to_string(),
            }
        );
    }

    #[test]
    fn crop_files_need_exactly_one_development_section() {
        let error = SatelliteFile::compose(BlobRole::Crop, "maizes", Vec::new())
            .expect_err("crop files need several required sections");
        assert_eq!(error.placeholder(), "MODEL.MISSING_SECTION");
    }

    #[test]
    fn duplicate_sections_are_rejected() {
        let error = SwapModel::compose(vec![snow(), snow()], Vec::new())
            .expect_err("snow settings given twice");
        assert!(matches!(
            error,
            SwapError::Invariant { rule: "section_unique_in_blob", .. }
        ));
    }
}
