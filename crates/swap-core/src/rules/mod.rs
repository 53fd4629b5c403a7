//! Declarative switch gating.
//!
//! The table lives in `conditional.yaml`, is parsed once, and is checked
//! against the schema catalog before first use. [`RuleTable::legal_fields`]
//! turns a set of switch values into the required and optional field names
//! of one section.

use crate::domain::{Allowed, SectionKind, SwapError, SwapResult};
use crate::schema::{self, DefaultValue, FieldSpec, SectionSchema};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet, VecDeque};

const CONDITIONAL_RULES: &str = include_str!("conditional.yaml");

static RULES: Lazy<SwapResult<RuleTable>> = Lazy::new(|| RuleTable::from_yaml(CONDITIONAL_RULES));

/// The embedded rule table.
pub fn rules() -> SwapResult<&'static RuleTable> {
    RULES.as_ref().map_err(Clone::clone)
}

/// Shorthand for [`RuleTable::legal_fields`] on the embedded table.
pub fn legal_fields(kind: SectionKind, switch_values: &BTreeMap<&str, i64>) -> SwapResult<LegalFields> {
    rules()?.legal_fields(kind, switch_values)
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SectionDoc {
    #[serde(default)]
    switches: BTreeMap<String, BTreeMap<i64, CaseDoc>>,
    #[serde(default)]
    external: BTreeMap<String, ExternalDoc>,
    #[serde(default)]
    incomplete: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CaseDoc {
    #[serde(default)]
    required: Vec<String>,
    #[serde(default)]
    optional: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ExternalDoc {
    section: String,
    switch: String,
    values: Vec<i64>,
    #[serde(default = "default_true")]
    required: bool,
}

fn default_true() -> bool {
    true
}

/// Fields that become legal under one switch value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Case {
    pub required: Vec<&'static str>,
    pub optional: Vec<&'static str>,
}

/// A field whose legality is decided by a switch of another section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalGate {
    pub field: &'static str,
    pub source: SectionKind,
    pub switch: &'static str,
    pub values: Vec<i64>,
    /// Whether the field must be present when the gate is open.
    pub required: bool,
}

impl ExternalGate {
    pub fn is_open(&self, value: i64) -> bool {
        self.values.contains(&value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionRules {
    pub switches: BTreeMap<&'static str, BTreeMap<i64, Case>>,
    pub external: Vec<ExternalGate>,
    pub incomplete: Option<String>,
}

impl SectionRules {
    pub fn case(&self, switch: &str, value: i64) -> Option<&Case> {
        self.switches.get(switch)?.get(&value)
    }

    /// Every field that only becomes legal through a rule.
    pub fn gated(&self) -> BTreeSet<&'static str> {
        let cases = self
            .switches
            .values()
            .flat_map(BTreeMap::values)
            .flat_map(|case| case.required.iter().chain(&case.optional).copied());
        cases
            .chain(self.external.iter().map(|gate| gate.field))
            .collect()
    }
}

/// Result of resolving the switches of one section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegalFields {
    pub required: BTreeSet<&'static str>,
    pub optional: BTreeSet<&'static str>,
}

impl LegalFields {
    pub fn contains(&self, name: &str) -> bool {
        self.required.contains(name) || self.optional.contains(name)
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.contains(name)
    }

    fn add(&mut self, field: &'static FieldSpec, required: bool) {
        if required && field.default.is_none() && !field.optional {
            self.optional.remove(field.name);
            self.required.insert(field.name);
        } else if !self.required.contains(field.name) {
            self.optional.insert(field.name);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTable {
    sections: BTreeMap<SectionKind, SectionRules>,
}

impl RuleTable {
    /// Parses and self-checks a rule table.
    pub fn from_yaml(yaml: &str) -> SwapResult<Self> {
        let document: BTreeMap<String, SectionDoc> = serde_yaml::from_str(yaml)
            .map_err(|error| SwapError::RuleTable(format!("YAML parse error: {error}")))?;

        let mut sections = BTreeMap::new();
        for (key, doc) in document {
            let kind = SectionKind::from_key(&key)
                .ok_or_else(|| SwapError::RuleTable(format!("unknown section '{key}'")))?;
            sections.insert(kind, build_section(kind, doc)?);
        }

        let table = Self { sections };
        table.check()?;
        tracing::debug!(sections = table.sections.len(), "loaded conditional rule table");
        Ok(table)
    }

    pub fn section(&self, kind: SectionKind) -> Option<&SectionRules> {
        self.sections.get(&kind)
    }

    pub fn external_gates(&self, kind: SectionKind) -> &[ExternalGate] {
        self.section(kind)
            .map(|rules| rules.external.as_slice())
            .unwrap_or_default()
    }

    pub fn incomplete(&self, kind: SectionKind) -> Option<&str> {
        self.section(kind)?.incomplete.as_deref()
    }

    /// Resolves which fields of `kind` are legal for the given switch values.
    ///
    /// Switches missing from `switch_values` fall back to their default.
    /// Values supplied for switches that are not reached are ignored here;
    /// callers report them as unexpected.
    pub fn legal_fields(
        &self,
        kind: SectionKind,
        switch_values: &BTreeMap<&str, i64>,
    ) -> SwapResult<LegalFields> {
        let schema = schema::section(kind);
        let rules = self.section(kind);
        let gated = rules.map(SectionRules::gated).unwrap_or_default();

        let mut legal = LegalFields::default();
        let mut pending = VecDeque::new();
        for field in schema.fields() {
            if gated.contains(field.name) {
                continue;
            }
            if field.is_switch() {
                legal.required.insert(field.name);
                pending.push_back(field);
            } else {
                legal.add(field, true);
            }
        }
        if let Some(rules) = rules {
            for gate in &rules.external {
                if let Some(field) = schema.field(gate.field) {
                    legal.add(field, false);
                }
            }
        }

        let mut resolved = BTreeSet::new();
        while let Some(switch) = pending.pop_front() {
            if !resolved.insert(switch.name) {
                continue;
            }
            let value = switch_value(kind, switch, switch_values)?;
            let Some(case) = rules.and_then(|rules| rules.case(switch.name, value)) else {
                continue;
            };
            let dependents = case
                .required
                .iter()
                .map(|name| (name, true))
                .chain(case.optional.iter().map(|name| (name, false)));
            for (name, required) in dependents {
                let Some(field) = schema.field(name) else {
                    continue;
                };
                if field.is_switch() {
                    legal.required.insert(field.name);
                    pending.push_back(field);
                } else {
                    legal.add(field, required);
                }
            }
        }
        Ok(legal)
    }

    fn check(&self) -> SwapResult<()> {
        for (kind, rules) in &self.sections {
            let schema = schema::section(*kind);
            let mut nested: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
            for (switch, cases) in &rules.switches {
                let children = nested.entry(*switch).or_default();
                for case in cases.values() {
                    for name in case.required.iter().chain(&case.optional) {
                        if let Some(field) = schema.field(name)
                            && field.is_switch()
                        {
                            children.push(field.name);
                        }
                    }
                }
            }
            if let Some(cycle) = find_cycle(&nested) {
                return Err(SwapError::RuleTable(format!(
                    "{kind}: switch nesting is cyclic through {cycle}"
                )));
            }
            for gate in &rules.external {
                if gate.source == *kind {
                    return Err(SwapError::RuleTable(format!(
                        "{kind}: external gate for {} points at its own section",
                        gate.field
                    )));
                }
            }
        }
        Ok(())
    }
}

fn rule_error(kind: SectionKind, message: String) -> SwapError {
    SwapError::RuleTable(format!("{kind}: {message}"))
}

fn build_section(kind: SectionKind, doc: SectionDoc) -> SwapResult<SectionRules> {
    let schema = schema::section(kind);
    let mut switches = BTreeMap::new();
    for (name, cases) in doc.switches {
        let switch = schema
            .field(&name)
            .filter(|field| field.is_switch())
            .ok_or_else(|| rule_error(kind, format!("'{name}' is not a switch of this section")))?;
        let domain = switch.ty.domain().unwrap_or_default();

        let mut resolved = BTreeMap::new();
        for (value, case) in cases {
            if !domain.contains(&value) {
                return Err(rule_error(
                    kind,
                    format!(
                        "case {value} of {} is outside {}",
                        switch.name,
                        Allowed::Domain(domain.to_vec())
                    ),
                ));
            }
            let case = Case {
                required: dependents(kind, schema, switch, &case.required)?,
                optional: dependents(kind, schema, switch, &case.optional)?,
            };
            resolved.insert(value, case);
        }
        switches.insert(switch.name, resolved);
    }

    let mut external = Vec::new();
    for (name, gate) in doc.external {
        let field = schema
            .field(&name)
            .ok_or_else(|| rule_error(kind, format!("external gate names unknown field '{name}'")))?;
        let source = SectionKind::from_key(&gate.section).ok_or_else(|| {
            rule_error(kind, format!("external gate for {name} names unknown section '{}'", gate.section))
        })?;
        let source_switch = schema::section(source)
            .field(&gate.switch)
            .filter(|switch| switch.is_switch())
            .ok_or_else(|| {
                rule_error(
                    kind,
                    format!("external gate for {name} names '{}' which is not a switch of {source}", gate.switch),
                )
            })?;
        let domain = source_switch.ty.domain().unwrap_or_default();
        if let Some(value) = gate.values.iter().find(|value| !domain.contains(value)) {
            return Err(rule_error(
                kind,
                format!("external gate for {name} uses {value} outside the domain of {}", source_switch.name),
            ));
        }
        external.push(ExternalGate {
            field: field.name,
            source,
            switch: source_switch.name,
            values: gate.values,
            required: gate.required,
        });
    }

    Ok(SectionRules {
        switches,
        external,
        incomplete: doc.incomplete,
    })
}

fn dependents(
    kind: SectionKind,
    schema: &SectionSchema,
    switch: &FieldSpec,
    names: &[String],
) -> SwapResult<Vec<&'static str>> {
    names
        .iter()
        .map(|name| {
            let field = schema.field(name).ok_or_else(|| {
                rule_error(kind, format!("{} gates unknown field '{name}'", switch.name))
            })?;
            if field.name == switch.name {
                return Err(rule_error(kind, format!("{} gates itself", switch.name)));
            }
            Ok(field.name)
        })
        .collect()
}

/// Depth-first search over switch nesting; returns a switch on a cycle.
fn find_cycle<'a>(nested: &BTreeMap<&'a str, Vec<&'a str>>) -> Option<&'a str> {
    #[derive(Clone, Copy, PartialEq)]
    enum Mark {
        Active,
        Done,
    }

    fn visit<'a>(
        node: &'a str,
        nested: &BTreeMap<&'a str, Vec<&'a str>>,
        marks: &mut BTreeMap<&'a str, Mark>,
    ) -> Option<&'a str> {
        match marks.get(node) {
            Some(Mark::Active) => return Some(node),
            Some(Mark::Done) => return None,
            None => {}
        }
        marks.insert(node, Mark::Active);
        for child in nested.get(node).into_iter().flatten() {
            if let Some(cycle) = visit(*child, nested, marks) {
                return Some(cycle);
            }
        }
        marks.insert(node, Mark::Done);
        None
    }

    let mut marks = BTreeMap::new();
    nested.keys().find_map(|node| visit(*node, nested, &mut marks))
}

fn switch_value(
    kind: SectionKind,
    switch: &FieldSpec,
    switch_values: &BTreeMap<&str, i64>,
) -> SwapResult<i64> {
    let value = switch_values
        .get(switch.name)
        .copied()
        .or_else(|| switch.default.and_then(DefaultValue::as_int))
        .ok_or_else(|| SwapError::Configuration {
            section: kind.key().to_string(),
            switch: switch.name.to_string(),
            message: "has no value and no default".to_string(),
        })?;
    let domain = switch.ty.domain().unwrap_or_default();
    if domain.contains(&value) {
        Ok(value)
    } else {
        Err(SwapError::Range {
            section: kind.key().to_string(),
            field: switch.name.to_string(),
            column: None,
            row: None,
            value: value.to_string(),
            allowed: Allowed::Domain(domain.to_vec()),
        })
    }
}
