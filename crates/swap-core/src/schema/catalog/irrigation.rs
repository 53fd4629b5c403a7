use super::{DVS, UNIT, YEAR};
use crate::domain::BlobRole;
use crate::schema::{FieldSpec, TableSchema};

const OFF_ON: &[i64] = &[0, 1];

const EVENTS: TableSchema = TableSchema::headed(
    "irrigevents",
    &[
        FieldSpec::date("IRDATE", "Date of irrigation"),
        FieldSpec::decimal("IRDEPTH", 1, "Amount of water [0..1000 mm]").between(0.0, 1000.0),
        FieldSpec::decimal("IRCONC", 1, "Concentration of irrigation water [0..1000 mg/cm3]").between(0.0, 1000.0),
        FieldSpec::integer("IRTYPE", "Sprinkling (0) or surface (1) irrigation").between(0.0, 1.0),
    ],
    "Fixed irrigation events",
);

pub(super) const FIXED_IRRIGATION: &[FieldSpec] = &[
    FieldSpec::switch("swirfix", OFF_ON, "Fixed irrigation applications").default_int(0),
    FieldSpec::switch("swirgfil", OFF_ON, "Irrigation events in this file (0) or in a separate file (1)"),
    FieldSpec::table("irrigevents", &EVENTS),
    FieldSpec::text("irgfil", "Name of file with irrigation events, without extension")
        .references(BlobRole::Irrigation),
];

pub(super) const IRRIGATION_EVENTS: &[FieldSpec] = &[FieldSpec::table("irrigevents", &EVENTS)];

const TC1TB: TableSchema = TableSchema::tagged(
    "tc1tb",
    &[
        FieldSpec::decimal("DVS_TC1", 2, "Development stage").between(DVS.0, DVS.1),
        FieldSpec::decimal("TREL", 2, "Minimum ratio of actual and potential transpiration").between(UNIT.0, UNIT.1),
    ],
    "Ratio actual/potential transpiration as function of development stage",
);

const TC2TB: TableSchema = TableSchema::tagged(
    "tc2tb",
    &[
        FieldSpec::decimal("DVS_TC2", 2, "Development stage").between(DVS.0, DVS.1),
        FieldSpec::decimal("RAW", 2, "Minimum fraction of readily available water").between(UNIT.0, UNIT.1),
    ],
    "Fraction of readily available water as function of development stage",
);

const TC3TB: TableSchema = TableSchema::tagged(
    "tc3tb",
    &[
        FieldSpec::decimal("DVS_TC3", 2, "Development stage").between(DVS.0, DVS.1),
        FieldSpec::decimal("TAW", 2, "Minimum fraction of totally available water").between(UNIT.0, UNIT.1),
    ],
    "Fraction of totally available water as function of development stage",
);

const TC4TB: TableSchema = TableSchema::tagged(
    "tc4tb",
    &[
        FieldSpec::decimal("DVS_TC4", 2, "Development stage").between(DVS.0, DVS.1),
        FieldSpec::decimal("DWA", 2, "Maximum depletion of water [mm]").between(0.0, 500.0),
    ],
    "Depletion of available water as function of development stage",
);

const TC7TB: TableSchema = TableSchema::tagged(
    "tc7tb",
    &[
        FieldSpec::decimal("DVS_TC7", 2, "Development stage").between(DVS.0, DVS.1),
        FieldSpec::decimal("HCRI", 1, "Critical pressure head [cm]").between(-1000.0, -100.0),
    ],
    "Critical pressure head at sensor depth as function of development stage",
);

const TC8TB: TableSchema = TableSchema::tagged(
    "tc8tb",
    &[
        FieldSpec::decimal("DVS_TC8", 2, "Development stage").between(DVS.0, DVS.1),
        FieldSpec::decimal("TCRI", 2, "Critical water content").between(UNIT.0, UNIT.1),
    ],
    "Critical water content at sensor depth as function of development stage",
);

const DC1TB: TableSchema = TableSchema::tagged(
    "dc1tb",
    &[
        FieldSpec::decimal("DVS_DC1", 2, "Development stage").between(DVS.0, DVS.1),
        FieldSpec::decimal("DI", 1, "Fixed irrigation depth [mm]").between(0.0, 100.0),
    ],
    "Fixed irrigation depth as function of development stage",
);

pub(super) const SCHEDULED_IRRIGATION: &[FieldSpec] = &[
    FieldSpec::switch("schedule", OFF_ON, "Application of irrigation scheduling").default_int(0),
    FieldSpec::day_month("startirr", "Day and month at which irrigation scheduling starts"),
    FieldSpec::day_month("endirr", "Day and month at which irrigation scheduling stops"),
    FieldSpec::decimal("cirrs", 2, "Solute concentration of irrigation water [0..100 mg/cm3]").between(0.0, 100.0),
    FieldSpec::switch("isuas", OFF_ON, "Sprinkling (0) or surface (1) irrigation"),
    FieldSpec::switch("tcs", &[1, 2, 3, 4, 6, 7, 8], "Timing criterion of irrigation"),
    FieldSpec::table("tc1tb", &TC1TB),
    FieldSpec::table("tc2tb", &TC2TB),
    FieldSpec::table("tc3tb", &TC3TB),
    FieldSpec::table("tc4tb", &TC4TB),
    FieldSpec::decimal("irgthreshold", 2, "Threshold value for weekly irrigation [0..20 mm]").between(0.0, 20.0),
    FieldSpec::decimal("dcrit", 2, "Depth of sensor [-100..0 cm]").between(-100.0, 0.0),
    FieldSpec::table("tc7tb", &TC7TB),
    FieldSpec::table("tc8tb", &TC8TB),
    FieldSpec::switch("tcsfix", OFF_ON, "Fixed minimum interval between irrigation events"),
    FieldSpec::integer("irgdayfix", "Minimum number of days between irrigation events").between(YEAR.0, YEAR.1),
    FieldSpec::switch("dcs", OFF_ON, "Irrigation depth: back to field capacity (0) or fixed depth (1)"),
    FieldSpec::decimal("phfieldcapacity", 2, "Soil water pressure head for field capacity [-1000..0 cm]")
        .between(-1000.0, 0.0),
    FieldSpec::switch("swcirrthres", OFF_ON, "Over-irrigation of surplus water"),
    FieldSpec::decimal("cirrthres", 2, "Threshold salinity concentration above which over-irrigation occurs [mg/cm3]")
        .between(0.0, 100.0),
    FieldSpec::decimal("perirrsurp", 2, "Over-irrigation as percentage of irrigation amount [%]").between(0.0, 100.0),
    FieldSpec::table("dc1tb", &DC1TB),
    FieldSpec::switch("dcslim", OFF_ON, "Limit irrigation depth"),
    FieldSpec::decimal("irgdepmin", 2, "Minimum irrigation depth [0..100 mm]").between(0.0, 100.0),
    FieldSpec::decimal("irgdepmax", 2, "Maximum irrigation depth [mm]").between(0.0, 1.0e7),
];
