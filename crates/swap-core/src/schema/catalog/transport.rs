use super::{UNIT, YEAR};
use crate::schema::{FieldSpec, TableSchema};

const OFF_ON: &[i64] = &[0, 1];

const SOIL_TEXTURES: TableSchema = TableSchema::headed(
    "soiltextures",
    &[
        FieldSpec::decimal("PSAND", 2, "Sand fraction").between(UNIT.0, UNIT.1),
        FieldSpec::decimal("PSILT", 2, "Silt fraction").between(UNIT.0, UNIT.1),
        FieldSpec::decimal("PCLAY", 2, "Clay fraction").between(UNIT.0, UNIT.1),
        FieldSpec::decimal("ORGMAT", 2, "Organic matter fraction").between(UNIT.0, UNIT.1),
    ],
    "Soil texture per soil layer",
);

const INITIAL_TEMPERATURE: TableSchema = TableSchema::headed(
    "initsoiltemp",
    &[
        FieldSpec::decimal("ZH", 1, "Soil depth [-1e5..0 cm]").between(-1.0e5, 0.0),
        FieldSpec::decimal("TSOIL", 1, "Initial soil temperature [-50..50 C]").between(-50.0, 50.0),
    ],
    "Initial soil temperature as function of depth",
);

const BOTTOM_TEMPERATURE: TableSchema = TableSchema::headed(
    "bbctsoil",
    &[
        FieldSpec::date("DATET", "Date"),
        FieldSpec::decimal("TBOT", 1, "Bottom temperature [-50..50 C]").between(-50.0, 50.0),
    ],
    "Bottom soil temperature as function of time",
);

pub(super) const HEAT_FLOW: &[FieldSpec] = &[
    FieldSpec::switch("swhea", OFF_ON, "Simulate heat flow").default_int(0),
    FieldSpec::switch("swcalt", &[1, 2], "Analytical method (1) or numerical method (2)"),
    FieldSpec::decimal("tampli", 2, "Amplitude of annual temperature wave at soil surface [0..50 C]")
        .between(0.0, 50.0),
    FieldSpec::decimal("tmean", 2, "Mean annual temperature at soil surface [-10..30 C]").between(-10.0, 30.0),
    FieldSpec::decimal("timref", 2, "Time in the year with top of sine temperature wave [0..366 d]")
        .between(YEAR.0, YEAR.1),
    FieldSpec::decimal("ddamp", 2, "Damping depth of temperature wave in soil [1..500 cm]").between(1.0, 500.0),
    FieldSpec::table("soiltextures", &SOIL_TEXTURES),
    FieldSpec::table("initsoiltemp", &INITIAL_TEMPERATURE),
    FieldSpec::switch("swtopbhea", &[1, 2], "Top boundary from air temperature (1) or file (2)"),
    FieldSpec::text("tsoilfile", "Name of file with soil surface temperatures"),
    FieldSpec::switch("swbotbhea", &[1, 2], "Bottom boundary: no heat flux (1) or prescribed temperature (2)"),
    FieldSpec::table("bbctsoil", &BOTTOM_TEMPERATURE),
];

const INITIAL_CONCENTRATION: TableSchema = TableSchema::headed(
    "inissoil",
    &[
        FieldSpec::decimal("ZC", 1, "Soil depth [-1e5..0 cm]").between(-1.0e5, 0.0),
        FieldSpec::decimal("CML", 2, "Initial solute concentration [0..1000 mg/cm3]").between(0.0, 1000.0),
    ],
    "Initial solute concentration as function of soil depth",
);

const LAYER_TRANSPORT: TableSchema = TableSchema::headed(
    "misc",
    &[
        FieldSpec::integer("ISOILLAY", "Soil layer number").at_least(1.0),
        FieldSpec::decimal("LDIS", 2, "Dispersion length [0..100 cm]").between(0.0, 100.0),
        FieldSpec::float("KF", "Freundlich adsorption coefficient [0..100 cm3/mg]").between(0.0, 100.0),
        FieldSpec::float("DECPOT", "Potential decomposition rate [0..10 /d]").between(0.0, 10.0),
        FieldSpec::decimal("FDEPTH", 2, "Reduction of decomposition with depth [0..1]").between(UNIT.0, UNIT.1),
    ],
    "Solute transport parameters per soil layer",
);

const SEEPAGE_CONCENTRATION: TableSchema = TableSchema::headed(
    "cseeparrtb",
    &[
        FieldSpec::date("DATEC", "Date"),
        FieldSpec::decimal("CSEEPARR", 2, "Solute concentration of seepage water [0..100 mg/cm3]")
            .between(0.0, 100.0),
    ],
    "Solute concentration of seepage water as function of time",
);

pub(super) const SOLUTE_TRANSPORT: &[FieldSpec] = &[
    FieldSpec::switch("swsolu", OFF_ON, "Simulate solute transport").default_int(0),
    FieldSpec::decimal("cpre", 2, "Solute concentration in precipitation [0..100 mg/cm3]").between(0.0, 100.0),
    FieldSpec::decimal("cdrain", 2, "Solute concentration in surface water [0..100 mg/cm3]").between(0.0, 100.0),
    FieldSpec::switch("swbotbc", &[0, 1, 2], "Groundwater concentration for seepage: equal to drainage (0), constant (1), table (2)"),
    FieldSpec::decimal("cseep", 2, "Solute concentration in upward seepage water [0..100 mg/cm3]")
        .between(0.0, 100.0),
    FieldSpec::table("cseeparrtb", &SEEPAGE_CONCENTRATION),
    FieldSpec::decimal("ddif", 2, "Molecular diffusion coefficient [0..10 cm2/d]").between(0.0, 10.0),
    FieldSpec::decimal("tscf", 2, "Relative uptake of solutes by roots [0..10]").between(0.0, 10.0),
    FieldSpec::switch("swsp", OFF_ON, "Consider solute adsorption"),
    FieldSpec::decimal("frexp", 2, "Freundlich exponent [0..10]").between(0.0, 10.0),
    FieldSpec::decimal("cref", 2, "Reference solute concentration for Freundlich adsorption [0..1000 mg/cm3]")
        .between(0.0, 1000.0),
    FieldSpec::switch("swdc", OFF_ON, "Consider solute decomposition"),
    FieldSpec::decimal("gampar", 2, "Factor reduction decomposition due to temperature [0..0.5 /C]")
        .between(0.0, 0.5),
    FieldSpec::decimal("rtheta", 2, "Minimum water content for potential decomposition [0..0.4]")
        .between(0.0, 0.4),
    FieldSpec::decimal("bexp", 2, "Exponent in reduction decomposition due to dryness [0..2]").between(0.0, 2.0),
    FieldSpec::table("misc", &LAYER_TRANSPORT),
    FieldSpec::table("inissoil", &INITIAL_CONCENTRATION),
    FieldSpec::switch("swbr", OFF_ON, "Consider mixed reservoir of saturated zone"),
    FieldSpec::decimal("daquif", 2, "Thickness saturated part of aquifer [0..10000 cm]").between(0.0, 1.0e4),
    FieldSpec::decimal("poros", 2, "Porosity of aquifer [0..0.6]").between(0.0, 0.6),
    FieldSpec::decimal("kfsat", 2, "Linear adsorption coefficient in aquifer [0..100 cm3/mg]").between(0.0, 100.0),
    FieldSpec::decimal("decsat", 2, "Decomposition rate in aquifer [0..10 /d]").between(0.0, 10.0),
    FieldSpec::decimal("cdraini", 2, "Initial solute concentration in groundwater [0..100 mg/cm3]")
        .between(0.0, 100.0),
];
