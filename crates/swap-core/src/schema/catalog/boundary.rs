use super::{UNIT, YEAR};
use crate::domain::BlobRole;
use crate::schema::{FieldSpec, TableSchema};

const OFF_ON: &[i64] = &[0, 1];
const ONE_TWO: &[i64] = &[1, 2];

/// Only the main file carries the choice between inline and file input.
pub(super) const BOUNDARY_SOURCE: &[FieldSpec] = &[
    FieldSpec::switch("swbbcfile", OFF_ON, "Bottom boundary in this file (0) or in a separate file (1)"),
    FieldSpec::text("bbcfil", "Name of file with bottom boundary data, without extension")
        .references(BlobRole::BottomBoundary),
];

const GWLEVEL: TableSchema = TableSchema::headed(
    "gwlevel",
    &[
        FieldSpec::date("DATE1", "Date"),
        FieldSpec::decimal("GWLEVEL", 1, "Groundwater level [cm]").between(-1.0e4, 1000.0),
    ],
    "Groundwater level as function of time",
);

const QBOT2: TableSchema = TableSchema::headed(
    "qbot2",
    &[
        FieldSpec::date("DATE2", "Date"),
        FieldSpec::decimal("QBOT2", 3, "Bottom flux, positive upward [cm/d]").between(-100.0, 100.0),
    ],
    "Bottom flux as function of time",
);

const HAQUIF: TableSchema = TableSchema::headed(
    "haquif",
    &[
        FieldSpec::date("DATE3", "Date"),
        FieldSpec::decimal("HAQUIF", 1, "Hydraulic head of the aquifer [cm]").between(-1.0e4, 1000.0),
    ],
    "Hydraulic head of the aquifer as function of time",
);

const QBOT4: TableSchema = TableSchema::headed(
    "qbot4",
    &[
        FieldSpec::date("DATE4", "Date"),
        FieldSpec::decimal("QBOT4", 3, "Extra groundwater flux, positive upward [cm/d]").between(-100.0, 100.0),
    ],
    "Extra groundwater flux as function of time",
);

const QTAB: TableSchema = TableSchema::headed(
    "qtab",
    &[
        FieldSpec::decimal("HTAB", 1, "Groundwater level [cm]").between(-1.0e4, 1000.0),
        FieldSpec::decimal("QTAB", 3, "Bottom flux, positive upward [cm/d]").between(-100.0, 100.0),
    ],
    "Bottom flux as function of groundwater level",
);

const HBOT5: TableSchema = TableSchema::headed(
    "hbot5",
    &[
        FieldSpec::date("DATE5", "Date"),
        FieldSpec::decimal("HBOT5", 1, "Pressure head of the bottom compartment [cm]").between(-1.0e10, 1000.0),
    ],
    "Pressure head of the bottom compartment as function of time",
);

/// Shared by the main file and the separate bottom boundary file.
pub(super) const BOUNDARY_CONDITIONS: &[FieldSpec] = &[
    FieldSpec::switch("swbotb", &[1, 2, 3, 4, 5, 6, 7, 8], "Type of bottom boundary"),
    FieldSpec::table("gwlevel", &GWLEVEL),
    FieldSpec::switch("sw2", ONE_TWO, "Bottom flux from sine function (1) or table (2)"),
    FieldSpec::decimal("sinave", 2, "Average value of bottom flux [-10..10 cm/d]").between(-10.0, 10.0),
    FieldSpec::decimal("sinamp", 2, "Amplitude of bottom flux sine function [-10..10 cm/d]").between(-10.0, 10.0),
    FieldSpec::decimal("sinmax", 2, "Time of the year with maximum bottom flux [0..366 d]").between(YEAR.0, YEAR.1),
    FieldSpec::table("qbot2", &QBOT2),
    FieldSpec::decimal("shape", 2, "Shape factor to derive average groundwater level [0..1]")
        .between(UNIT.0, UNIT.1),
    FieldSpec::decimal("hdrain", 1, "Mean drain base to correct for average groundwater level [-1e4..0 cm]")
        .between(-1.0e4, 0.0),
    FieldSpec::decimal("rimlay", 1, "Vertical resistance of aquitard [0..1e5 d]").between(0.0, 1.0e5),
    FieldSpec::switch("swbotb3resvert", OFF_ON, "Vertical resistance of aquitard included in flux"),
    FieldSpec::switch("swbotb3impl", OFF_ON, "Numerical solution of bottom flux: explicit (0) or implicit (1)"),
    FieldSpec::switch("sw3", ONE_TWO, "Aquifer head from sine function (1) or table (2)"),
    FieldSpec::decimal("aqave", 1, "Average hydraulic head in underlaying aquifer [-1e4..1000 cm]")
        .between(-1.0e4, 1000.0),
    FieldSpec::decimal("aqamp", 1, "Amplitude hydraulic head sinus wave [0..1000 cm]").between(0.0, 1000.0),
    FieldSpec::decimal("aqtmax", 1, "First time of the year with maximum hydraulic head [0..366 d]")
        .between(YEAR.0, YEAR.1),
    FieldSpec::decimal("aqper", 1, "Period of hydraulic head sinus wave [0..366 d]").between(YEAR.0, YEAR.1),
    FieldSpec::table("haquif", &HAQUIF),
    FieldSpec::switch("sw4", OFF_ON, "Extra groundwater flux in addition to aquifer flux"),
    FieldSpec::table("qbot4", &QBOT4),
    FieldSpec::switch("swqhbot", ONE_TWO, "Flux-groundwater level relation exponential (1) or tabulated (2)"),
    FieldSpec::decimal("cofqha", 3, "Coefficient A [-100..100 cm/d]").between(-100.0, 100.0),
    FieldSpec::decimal("cofqhb", 3, "Coefficient B [-1..1 /cm]").between(-1.0, 1.0),
    FieldSpec::decimal("cofqhc", 3, "Coefficient C [-10..10 cm/d]").between(-10.0, 10.0),
    FieldSpec::table("qtab", &QTAB),
    FieldSpec::table("hbot5", &HBOT5),
];
