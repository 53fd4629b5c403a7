#![allow(dead_code)]

use chrono::NaiveDate;
use std::collections::BTreeMap;
use swap_core::codec::FieldType;
use swap_core::domain::{Bounds, DayMonth};
use swap_core::rules::{self, LegalFields};
use swap_core::schema::{self, FieldSpec};
use swap_core::{BlobKey, BlobRole, SatelliteFile, Section, SectionKind, SwapError, SwapModel, Table, Value};

pub const METEO_FILE: &str = "hupsel.met";
pub const CROP_FILE: &str = "maizes";
pub const DRAINAGE_FILE: &str = "swa";

pub fn date(year: i32, month: u32, day: u32) -> Value {
    Value::Date(NaiveDate::from_ymd_opt(year, month, day).expect("valid date"))
}

fn floats(values: &[f64]) -> Vec<Value> {
    values.iter().copied().map(Value::from).collect()
}

fn tagged(columns: [&str; 2], rows: &[(f64, f64)]) -> Table {
    rows.iter().fold(Table::new(columns), |table, (left, right)| {
        table.row(floats(&[*left, *right]))
    })
}

pub fn settings() -> Section {
    Section::builder(SectionKind::GeneralSettings)
        .set("tstart", date(2002, 1, 1))
        .set("tend", date(2004, 12, 31))
        .set("swmonth", 1)
        .set("swyrvar", 0)
        .set("datefix", DayMonth::new(31, 12).expect("valid day and month"))
        .set("swcsv", 1)
        .set("inlist_csv", vec!["rain".to_string(), "drainage".to_string()])
        .build()
        .expect("valid general settings")
}

pub fn meteorology() -> Section {
    Section::builder(SectionKind::Meteorology)
        .set("metfil", METEO_FILE)
        .set("lat", 52.0)
        .set("alt", 10.0)
        .set("altw", 10.0)
        .set("angstroma", 0.25)
        .set("angstromb", 0.5)
        .set("swetr", 0)
        .set("swdivide", 1)
        .set("swmetdetail", 0)
        .build()
        .expect("valid meteorology")
}

pub fn rotation() -> Table {
    Table::new(["CROPSTART", "CROPEND", "CROPFIL", "CROPTYPE"])
        .row(vec![
            date(2002, 5, 1),
            date(2002, 10, 15),
            Value::from(CROP_FILE),
            Value::from(1),
        ])
        .row(vec![
            date(2003, 5, 1),
            date(2003, 10, 15),
            Value::from(CROP_FILE),
            Value::from(1),
        ])
}

pub fn crop() -> Section {
    Section::builder(SectionKind::Crop)
        .set("swcrop", 1)
        .set("rds", 200.0)
        .set("croprotation", rotation())
        .build()
        .expect("valid crop rotation")
}

pub fn soil_moisture() -> Section {
    Section::builder(SectionKind::SoilMoisture)
        .set("swinco", 2)
        .set("gwli", -75.0)
        .build()
        .expect("valid initial soil moisture")
}

pub fn surface_flow() -> Section {
    Section::builder(SectionKind::SurfaceFlow)
        .set("swpondmx", 0)
        .set("pondmx", 0.2)
        .set("rsro", 0.5)
        .set("rsroexp", 1.0)
        .set("swrunon", 0)
        .build()
        .expect("valid surface flow")
}

pub fn evaporation() -> Section {
    Section::builder(SectionKind::Evaporation)
        .set("swcfbs", 0)
        .set("swredu", 1)
        .set("cofredbl", 0.35)
        .set("rsigni", 0.5)
        .set("rsoil", 30.0)
        .build()
        .expect("valid evaporation")
}

pub fn profile_table() -> Table {
    Table::new(["ISOILLAY", "ISUBLAY", "HSUBLAY", "HCOMP", "NCOMP"])
        .row(vec![1.into(), 1.into(), 10.0.into(), 1.0.into(), 10.into()])
        .row(vec![1.into(), 2.into(), 20.0.into(), 2.0.into(), 10.into()])
        .row(vec![2.into(), 3.into(), 170.0.into(), 5.0.into(), 34.into()])
}

pub fn hydraulic_table(layers: usize) -> Table {
    let mut table = Table::new([
        "ORES", "OSAT", "ALFA", "NPAR", "LEXP", "KSATFIT", "H_ENPR", "KSATEXM", "BDENS",
    ]);
    for layer in 0..layers {
        let saturated = 0.42 - 0.02 * layer as f64;
        table.push_row(floats(&[
            0.01, saturated, 0.0276, 1.491, -1.06, 12.52, 0.0, 12.52, 1315.0,
        ]));
    }
    table
}

pub fn soil_profile() -> Section {
    Section::builder(SectionKind::SoilProfile)
        .set("soilprofile", profile_table())
        .set("swsophy", 0)
        .set("soilhydrfunc", hydraulic_table(2))
        .set("swhyst", 0)
        .set("swmacro", 0)
        .build()
        .expect("valid soil profile")
}

pub fn lateral_drainage() -> Section {
    Section::builder(SectionKind::LateralDrainage)
        .set("swdra", 1)
        .set("drfil", DRAINAGE_FILE)
        .build()
        .expect("valid lateral drainage")
}

pub fn bottom_boundary() -> Section {
    let levels = Table::new(["DATE1", "GWLEVEL"])
        .row(vec![date(2002, 1, 1), Value::from(-95.0)])
        .row(vec![date(2004, 12, 31), Value::from(-110.0)]);
    Section::builder(SectionKind::BottomBoundary)
        .set("swbbcfile", 0)
        .set("swbotb", 1)
        .set("gwlevel", levels)
        .build()
        .expect("valid bottom boundary")
}

pub fn main_sections() -> Vec<Section> {
    vec![
        Section::builder(SectionKind::Metadata)
            .set("project", "hupsel")
            .build()
            .expect("valid metadata"),
        settings(),
        meteorology(),
        crop(),
        soil_moisture(),
        surface_flow(),
        evaporation(),
        soil_profile(),
        lateral_drainage(),
        bottom_boundary(),
    ]
}

pub fn crop_sections() -> Vec<Section> {
    vec![
        Section::builder(SectionKind::CropDevelopmentFixed)
            .set("idev", 1)
            .set("lcc", 168)
            .set("swgc", 1)
            .set("gctb", tagged(["DVS", "LAI"], &[(0.0, 0.05), (1.0, 3.5), (2.0, 0.8)]))
            .set("kdif", 0.6)
            .set("kdir", 0.75)
            .set("swcf", 1)
            .set("cftb", tagged(["DVS", "CF"], &[(0.0, 1.0), (2.0, 1.0)]))
            .set("swrd", 1)
            .set("rdtb", tagged(["DVS", "RD"], &[(0.0, 5.0), (2.0, 50.0)]))
            .build()
            .expect("valid fixed crop development"),
        Section::builder(SectionKind::OxygenStress)
            .set("swoxygen", 1)
            .set("swwrtnonox", 0)
            .set("hlim1", -10.0)
            .set("hlim2u", -25.0)
            .set("hlim2l", -25.0)
            .build()
            .expect("valid oxygen stress"),
        Section::builder(SectionKind::DroughtStress)
            .set("swdrought", 1)
            .set("hlim3h", -320.0)
            .set("hlim3l", -600.0)
            .set("hlim4", -8000.0)
            .set("adcrh", 0.5)
            .set("adcrl", 0.1)
            .build()
            .expect("valid drought stress"),
        Section::builder(SectionKind::Interception)
            .set("swinter", 1)
            .set("cofab", 0.25)
            .build()
            .expect("valid interception"),
    ]
}

pub fn meteo_records() -> Table {
    let columns = [
        "Station", "DD", "MM", "YYYY", "RAD", "Tmin", "Tmax", "HUM", "WIND", "RAIN", "ETref", "WET",
    ];
    let days = [(1, 2002, 1800.0, -1.5, 4.2, 0.62, 3.1, 2.4), (2, 2002, 2100.0, 0.3, 6.8, 0.71, 4.0, 0.0)];
    days.iter().fold(Table::new(columns), |table, (day, year, rad, tmin, tmax, hum, wind, rain)| {
        let mut row = vec![
            Value::from("Hupsel"),
            Value::from(*day),
            Value::from(1),
            Value::from(*year),
        ];
        row.extend(floats(&[*rad, *tmin, *tmax, *hum, *wind, *rain, 0.4, 0.0]));
        table.row(row)
    })
}

pub fn meteo_file() -> SatelliteFile {
    let records = Section::builder(SectionKind::MeteoData)
        .set("meteodata", meteo_records())
        .build()
        .expect("valid meteo records");
    SatelliteFile::compose(BlobRole::Meteo, METEO_FILE, vec![records]).expect("valid meteo file")
}

pub fn crop_file() -> SatelliteFile {
    SatelliteFile::compose(BlobRole::Crop, CROP_FILE, crop_sections()).expect("valid crop file")
}

pub fn drainage_section(swdivd: i64) -> Section {
    let fluxes = Table::new(["QDRAIN", "GWL"])
        .row(floats(&[0.0, -200.0]))
        .row(floats(&[1.0, 0.0]));
    let mut builder = Section::builder(SectionKind::DrainageFile)
        .set("dramet", 1)
        .set("swdivd", swdivd)
        .set("lm1", 100.0)
        .set("qdrntb", fluxes);
    if swdivd == 1 {
        builder = builder.set("cofani", vec![1.0, 2.0]);
    }
    builder.build().expect("valid drainage file section")
}

pub fn drainage_file() -> SatelliteFile {
    SatelliteFile::compose(BlobRole::Drainage, DRAINAGE_FILE, vec![drainage_section(0)])
        .expect("valid drainage file")
}

pub fn satellites() -> Vec<SatelliteFile> {
    vec![meteo_file(), crop_file(), drainage_file()]
}

/// A complete model: main file plus meteo, crop and drainage files.
pub fn hupsel() -> SwapModel {
    SwapModel::compose(main_sections(), satellites()).expect("valid model")
}

/// Main sections with one section replaced.
pub fn main_sections_with(replacement: Section) -> Vec<Section> {
    main_sections()
        .into_iter()
        .map(|section| {
            if section.kind() == replacement.kind() {
                replacement.clone()
            } else {
                section
            }
        })
        .collect()
}

pub fn rendered_blobs(model: &SwapModel) -> BTreeMap<BlobKey, String> {
    swap_core::render(model)
}

fn sample_number(bounds: Bounds) -> f64 {
    match (bounds.min, bounds.max) {
        (Some(min), Some(max)) => (min + max) / 2.0,
        (Some(min), None) => min,
        (None, Some(max)) => max,
        (None, None) => 1.0,
    }
}

fn sample_text(bounds: Bounds) -> String {
    let length = bounds.min.unwrap_or(1.0).max(1.0);
    let length = bounds.max.map_or(length, |max| length.min(max)) as usize;
    "a".repeat(length)
}

/// A value of the field's type inside its bounds. Tables get one row with
/// every non-optional column.
pub fn sample_value(field: &FieldSpec) -> Value {
    match field.ty {
        FieldType::Switch(domain) => Value::Int(domain[0]),
        FieldType::Integer => Value::Int(sample_number(field.bounds).floor() as i64),
        FieldType::Decimal(_) | FieldType::Float => Value::Float(sample_number(field.bounds)),
        FieldType::Text => Value::Text(sample_text(field.bounds)),
        FieldType::Date(_) if field.name == "tend" => date(2004, 12, 31),
        FieldType::Date(_) => date(2002, 1, 1),
        FieldType::DayMonth => Value::DayMonth(DayMonth::new(1, 1).expect("valid day and month")),
        FieldType::FloatList(_) => Value::FloatList(vec![sample_number(field.bounds)]),
        FieldType::IntList => Value::IntList(vec![sample_number(field.bounds).floor() as i64]),
        FieldType::TextList => Value::TextList(vec![sample_text(field.bounds)]),
        FieldType::Table(schema) => {
            let columns: Vec<&FieldSpec> = schema.columns.iter().filter(|column| !column.optional).collect();
            Value::Table(
                Table::new(columns.iter().map(|column| column.name))
                    .row(columns.iter().map(|column| sample_value(column)).collect()),
            )
        }
    }
}

/// Values for fields whose section checks relate several cells, so that a
/// section built from samples passes them.
pub fn consistent_value(kind: SectionKind, field: &FieldSpec) -> Value {
    match (kind, field.name) {
        (SectionKind::SoilProfile, "soilprofile") => Value::Table(profile_table()),
        (SectionKind::SoilProfile, "soilhydrfunc") => Value::Table(hydraulic_table(2)),
        (SectionKind::Crop, "croprotation") => Value::Table(rotation()),
        _ => sample_value(field),
    }
}

fn first_value(field: &FieldSpec) -> i64 {
    field
        .default_value()
        .and_then(|value| value.as_int())
        .or_else(|| field.ty.domain().and_then(|domain| domain.first().copied()))
        .expect("switch has a domain")
}

/// The switch whose case lists `name`, with that case value.
pub fn parent_of(kind: SectionKind, name: &str) -> Option<(&'static str, i64)> {
    let rules = rules::rules().expect("rule table loads").section(kind)?;
    rules.switches.iter().find_map(|(switch, cases)| {
        cases.iter().find_map(|(value, case)| {
            case.required
                .iter()
                .chain(&case.optional)
                .any(|field| *field == name)
                .then_some((*switch, *value))
        })
    })
}

/// Switch values that make `name` legal, with every other reached switch
/// at its default or first domain value.
pub fn reach(kind: SectionKind, name: &str) -> (BTreeMap<&'static str, i64>, LegalFields) {
    let mut assigned = BTreeMap::new();
    let mut child = name;
    while let Some((parent, value)) = parent_of(kind, child) {
        assigned.insert(parent, value);
        child = parent;
    }
    settle(kind, assigned)
}

/// Switch values that reach `switch = value`.
pub fn resolve(kind: SectionKind, switch: &'static str, value: i64) -> (BTreeMap<&'static str, i64>, LegalFields) {
    let (mut assigned, _) = reach(kind, switch);
    assigned.insert(switch, value);
    settle(kind, assigned)
}

fn settle(kind: SectionKind, mut assigned: BTreeMap<&'static str, i64>) -> (BTreeMap<&'static str, i64>, LegalFields) {
    let schema = schema::section(kind);
    for _ in 0..32 {
        match rules::legal_fields(kind, &assigned) {
            Ok(legal) => {
                assigned.retain(|name, _| legal.contains(name));
                return (assigned, legal);
            }
            Err(SwapError::Configuration { switch: missing, .. }) => {
                let field = schema.field(&missing).expect("switch is in the schema");
                assigned.insert(field.name, first_value(field));
            }
            Err(other) => panic!("{kind}: {assigned:?} does not resolve: {other}"),
        }
    }
    panic!("{kind}: {assigned:?} does not settle");
}

/// The switches plus a consistent value for every required field.
pub fn supply(kind: SectionKind, assigned: &BTreeMap<&'static str, i64>, legal: &LegalFields) -> BTreeMap<String, Value> {
    let mut fields: BTreeMap<String, Value> = assigned
        .iter()
        .map(|(name, value)| (name.to_string(), Value::Int(*value)))
        .collect();
    for field in schema::section(kind).fields() {
        if legal.is_required(field.name) && !field.is_switch() {
            fields.insert(field.name.to_string(), consistent_value(kind, field));
        }
    }
    fields
}
