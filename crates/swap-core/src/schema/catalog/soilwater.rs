use super::UNIT;
use crate::schema::{FieldSpec, TableSchema};

const OFF_ON: &[i64] = &[0, 1];

const INITIAL_HEAD: TableSchema = TableSchema::headed(
    "inithead",
    &[
        FieldSpec::decimal("ZI", 1, "Soil depth [cm]").between(-1.0e5, 0.0),
        FieldSpec::float("H", "Initial soil water pressure head [cm]").between(-1.0e10, 1.0e4),
    ],
    "Initial pressure head H [-1e10..1e4 cm] as function of soil depth ZI [-1e5..0 cm]",
);

pub(super) const SOIL_MOISTURE: &[FieldSpec] = &[
    FieldSpec::switch("swinco", &[1, 2, 3], "Initial condition: pressure heads (1), hydrostatic (2), from file (3)"),
    FieldSpec::table("inithead", &INITIAL_HEAD),
    FieldSpec::decimal("gwli", 1, "Initial groundwater level [-1e4..100 cm]").between(-1.0e4, 100.0),
    FieldSpec::text("inifil", "File with pressure heads from previous simulation"),
];

const PONDING_TABLE: TableSchema = TableSchema::headed(
    "mxpondtb",
    &[
        FieldSpec::date("DATEPMX", "Date"),
        FieldSpec::decimal("PONDMXTB", 1, "Minimum ponding depth [cm]").between(0.0, 1000.0),
    ],
    "Minimum thickness for runoff PONDMXTB [0..1000 cm] as function of time",
);

pub(super) const SURFACE_FLOW: &[FieldSpec] = &[
    FieldSpec::switch("swpondmx", OFF_ON, "Ponding threshold for runoff constant (0) or time dependent (1)"),
    FieldSpec::decimal("pondmx", 1, "Minimum thickness for runoff [0..1000 cm]").between(0.0, 1000.0),
    FieldSpec::table("mxpondtb", &PONDING_TABLE),
    FieldSpec::decimal("rsro", 3, "Drainage resistance for surface runoff [0.001..1 d]").between(0.001, 1.0),
    FieldSpec::decimal("rsroexp", 2, "Exponent in drainage equation of surface runoff").between(0.01, 10.0),
    FieldSpec::switch("swrunon", OFF_ON, "Use runon data"),
    FieldSpec::text("rufil", "File name with runon data"),
];

pub(super) const EVAPORATION: &[FieldSpec] = &[
    FieldSpec::decimal("cfevappond", 2, "Evaporation coefficient of ponding layer, only when SWETR = 1")
        .between(0.0, 3.0),
    FieldSpec::switch("swcfbs", OFF_ON, "Use soil factor CFBS to calculate Epot from ETref"),
    FieldSpec::decimal("cfbs", 2, "Coefficient to derive Epot from ETref").between(0.5, 1.5),
    FieldSpec::decimal("rsoil", 2, "Soil resistance of wet soil [0..1000 s/m], only when SWDIVIDE = 1")
        .between(0.0, 1000.0),
    FieldSpec::switch("swredu", &[0, 1, 2], "Reduction of soil evaporation: none (0), Black (1), Boesten and Stroosnijder (2)"),
    FieldSpec::decimal("cofredbl", 2, "Soil evaporation coefficient of Black [0..1 cm/d1/2]")
        .between(UNIT.0, UNIT.1),
    FieldSpec::decimal("rsigni", 2, "Minimum rainfall to reset method of Black [0..100 cm/d]").between(0.0, 100.0),
    FieldSpec::decimal("cofredbo", 2, "Soil evaporation coefficient of Boesten and Stroosnijder [0..1 cm1/2]")
        .between(UNIT.0, UNIT.1),
];

const PROFILE_TABLE: TableSchema = TableSchema::headed(
    "soilprofile",
    &[
        FieldSpec::integer("ISOILLAY", "Soil layer number").at_least(1.0),
        FieldSpec::integer("ISUBLAY", "Sub layer number").at_least(1.0),
        FieldSpec::decimal("HSUBLAY", 2, "Height of sub layer [cm]").between(0.0, 1.0e4),
        FieldSpec::decimal("HCOMP", 2, "Height of compartments in sub layer [cm]").between(0.0, 1.0e3),
        FieldSpec::integer("NCOMP", "Number of compartments in sub layer").at_least(1.0),
    ],
    "Vertical discretisation of soil profile",
);

const HYDRAULIC_FUNCTIONS: TableSchema = TableSchema::headed(
    "soilhydrfunc",
    &[
        FieldSpec::decimal("ORES", 3, "Residual water content").between(UNIT.0, UNIT.1),
        FieldSpec::decimal("OSAT", 3, "Saturated water content").between(UNIT.0, UNIT.1),
        FieldSpec::float("ALFA", "Shape parameter alfa of main drying curve [1/cm]").between(1.0e-4, 100.0),
        FieldSpec::float("NPAR", "Shape parameter n").between(1.001, 9.0),
        FieldSpec::float("LEXP", "Exponent in hydraulic conductivity function").between(-25.0, 25.0),
        FieldSpec::float("KSATFIT", "Fitting parameter Ksat of hydraulic conductivity function [cm/d]")
            .between(1.0e-5, 1.0e5),
        FieldSpec::decimal("H_ENPR", 2, "Air entry pressure head [cm]").between(-40.0, 0.0),
        FieldSpec::float("KSATEXM", "Measured hydraulic conductivity at saturated conditions [cm/d]")
            .between(1.0e-5, 1.0e5),
        FieldSpec::decimal("BDENS", 1, "Dry soil bulk density [mg/cm3]").between(100.0, 1.0e4),
        FieldSpec::float("ALFAW", "Alfa parameter of main wetting curve [1/cm]")
            .between(1.0e-4, 100.0)
            .optional(),
    ],
    "Soil hydraulic functions, one row per soil layer",
);

pub(super) const SOIL_PROFILE: &[FieldSpec] = &[
    FieldSpec::table("soilprofile", &PROFILE_TABLE),
    FieldSpec::switch("swsophy", OFF_ON, "Analytical functions (0) or tabulated input (1)"),
    FieldSpec::table("soilhydrfunc", &HYDRAULIC_FUNCTIONS),
    FieldSpec::text_list("filenamesophy", "Names of input files with soil hydraulic tables, one per layer"),
    FieldSpec::switch("swhyst", &[0, 1, 2], "Hysteresis: none (0), initial drying (1), initial wetting (2)"),
    FieldSpec::decimal("tau", 2, "Minimum pressure head difference to change wetting-drying [cm]")
        .between(0.0, 1000.0),
    FieldSpec::switch("swmacro", OFF_ON, "Preferential flow due to macropores"),
];

pub(super) const SNOW_AND_FROST: &[FieldSpec] = &[
    FieldSpec::switch("swsnow", OFF_ON, "Calculation of snow accumulation and melt").default_int(0),
    FieldSpec::decimal("snowinco", 2, "Initial snow water equivalent [0..1000 cm]").between(0.0, 1000.0),
    FieldSpec::decimal("teprrain", 2, "Temperature above which all precipitation is rain [0..10 C]")
        .between(0.0, 10.0),
    FieldSpec::decimal("teprsnow", 2, "Temperature below which all precipitation is snow [-10..0 C]")
        .between(-10.0, 0.0),
    FieldSpec::switch("swfrost", OFF_ON, "In case of frost, reduce soil water flow").default_int(0),
    FieldSpec::decimal("tfroststa", 2, "Soil temperature where reduction of water fluxes starts [-10..5 C]")
        .between(-10.0, 5.0),
    FieldSpec::decimal("tfrostend", 2, "Soil temperature where reduction of water fluxes ends [-10..5 C]")
        .between(-10.0, 5.0),
];
