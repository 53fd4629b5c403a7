use super::UNIT;
use crate::domain::BlobRole;
use crate::schema::{FieldSpec, TableSchema};

const OFF_ON: &[i64] = &[0, 1];

pub(super) const LATERAL_DRAINAGE: &[FieldSpec] = &[
    FieldSpec::switch("swdra", &[0, 1, 2], "Lateral drainage: none (0), basic (1), extended (2)"),
    FieldSpec::text("drfil", "Name of file with drainage input data, without extension")
        .references(BlobRole::Drainage),
];

const FLUX_TABLE: TableSchema = TableSchema::headed(
    "qdrntb",
    &[
        FieldSpec::decimal("QDRAIN", 3, "Drainage flux [cm/d]").between(-100.0, 1000.0),
        FieldSpec::decimal("GWL", 1, "Groundwater level [cm]").between(-1000.0, 1000.0),
    ],
    "Drainage flux QDRAIN as function of groundwater level GWL",
);

const LEVEL_TABLE: TableSchema = TableSchema::headed(
    "drntb",
    &[
        FieldSpec::integer("LEVEL", "Drainage level number").between(1.0, 5.0),
        FieldSpec::decimal("DRARES", 1, "Drainage resistance [10..1e5 d]").between(10.0, 1.0e5),
        FieldSpec::decimal("INFRES", 1, "Infiltration resistance [10..1e5 d]").between(10.0, 1.0e5),
        FieldSpec::integer("SWALLO", "Drainage and infiltration (1), drainage only (2), infiltration only (3)")
            .between(1.0, 3.0),
        FieldSpec::decimal("L", 1, "Drain spacing [1..1e5 m]").between(1.0, 1.0e5),
        FieldSpec::decimal("ZBOTDR", 1, "Level of drainage medium bottom [-1000..0 cm]").between(-1000.0, 0.0),
        FieldSpec::integer("SWDTYP", "Drainage medium: open (1) or closed (2)").between(1.0, 2.0),
    ],
    "Drainage characteristics per drainage level",
)
.row_count(1.0, 5.0);

pub(super) const DRAINAGE_FILE: &[FieldSpec] = &[
    FieldSpec::switch("dramet", &[1, 2, 3], "Drainage method: flux table (1), Hooghoudt or Ernst (2), resistances (3)"),
    FieldSpec::switch("swdivd", OFF_ON, "Divide drainage flux over the soil profile"),
    FieldSpec::float_list("cofani", 2, "Anisotropy factor horizontal/vertical conductivity per soil layer")
        .between(0.0, 1000.0),
    FieldSpec::switch("swdislay", &[0, 1, 2, 3], "Adjust drainage flux distribution to the top of the model discharge layer")
        .default_int(0),
    FieldSpec::decimal("lm1", 1, "Drain spacing [1..1000 m]").between(1.0, 1000.0),
    FieldSpec::table("qdrntb", &FLUX_TABLE),
    FieldSpec::decimal("lm2", 1, "Drain spacing [1..1000 m]").between(1.0, 1000.0),
    FieldSpec::decimal("shape", 2, "Shape factor to account for actual location between drain and water divide")
        .between(UNIT.0, UNIT.1),
    FieldSpec::decimal("wetper", 2, "Wet perimeter of the drain [0..1000 cm]").between(0.0, 1000.0),
    FieldSpec::decimal("zbotdr", 1, "Level of drain bottom [-1000..0 cm]").between(-1000.0, 0.0),
    FieldSpec::decimal("entres", 1, "Drain entry resistance [0..1000 d]").between(0.0, 1000.0),
    FieldSpec::switch("ipos", &[1, 2, 3, 4, 5], "Position of drain"),
    FieldSpec::decimal("basegw", 1, "Level of impervious layer [-1e4..0 cm]").between(-1.0e4, 0.0),
    FieldSpec::decimal("khtop", 2, "Horizontal hydraulic conductivity top layer [0..1000 cm/d]")
        .between(0.0, 1000.0),
    FieldSpec::decimal("khbot", 2, "Horizontal hydraulic conductivity bottom layer [0..1000 cm/d]")
        .between(0.0, 1000.0),
    FieldSpec::decimal("zintf", 1, "Interface between top and bottom layer [-1e4..0 cm]").between(-1.0e4, 0.0),
    FieldSpec::decimal("kvtop", 2, "Vertical hydraulic conductivity top layer [0..1000 cm/d]").between(0.0, 1000.0),
    FieldSpec::decimal("kvbot", 2, "Vertical hydraulic conductivity bottom layer [0..1000 cm/d]")
        .between(0.0, 1000.0),
    FieldSpec::decimal("geofac", 2, "Geometric factor of Ernst [0..100]").between(0.0, 100.0),
    FieldSpec::integer("nrlevs", "Number of drainage levels").between(1.0, 5.0),
    FieldSpec::switch("swintfl", OFF_ON, "Interflow for highest drainage level"),
    FieldSpec::decimal("cofintflb", 2, "Coefficient for interflow relation [0.01..10 d]").between(0.01, 10.0),
    FieldSpec::decimal("expintflb", 2, "Exponent for interflow relation [0.1..1]").between(0.1, 1.0),
    FieldSpec::table("drntb", &LEVEL_TABLE),
];
