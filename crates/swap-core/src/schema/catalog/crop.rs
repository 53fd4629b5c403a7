use super::{DVS, UNIT, YEAR};
use crate::domain::BlobRole;
use crate::schema::{FieldSpec, TableSchema};

const OFF_ON: &[i64] = &[0, 1];

const DVS_COLUMN: FieldSpec = FieldSpec::decimal("DVS", 2, "Development stage").between(DVS.0, DVS.1);

const ROTATION: TableSchema = TableSchema::headed(
    "croprotation",
    &[
        FieldSpec::date("CROPSTART", "Date of crop emergence"),
        FieldSpec::date("CROPEND", "Date of crop harvest"),
        FieldSpec::text("CROPFIL", "Name of crop file, without extension").references(BlobRole::Crop),
        FieldSpec::integer("CROPTYPE", "Simple (1), detailed WOFOST (2) or detailed grass (3)")
            .between(1.0, 3.0),
    ],
    "Crop rotation scheme",
);

pub(super) const CROP_ROTATION: &[FieldSpec] = &[
    FieldSpec::switch("swcrop", OFF_ON, "Bare soil (0) or crops (1)"),
    FieldSpec::decimal("rds", 2, "Rooting depth allowed by soil [1..5000 cm]").between(1.0, 5000.0),
    FieldSpec::table("croprotation", &ROTATION),
];

pub(super) const PREPARATION: &[FieldSpec] = &[
    FieldSpec::switch("swprep", OFF_ON, "Simulate preparation before crop growth").default_int(0),
    FieldSpec::decimal("zprep", 2, "Depth of preparation check [-100..0 cm]").between(-100.0, 0.0),
    FieldSpec::decimal("hprep", 2, "Maximum pressure head during preparation [-200..0 cm]").between(-200.0, 0.0),
    FieldSpec::integer("maxprepdelay", "Maximum delay of preparation from start of growing season [d]")
        .between(1.0, 366.0),
    FieldSpec::switch("swsow", OFF_ON, "Simulate sowing").default_int(0),
    FieldSpec::decimal("zsow", 2, "Depth of sowing check [-100..0 cm]").between(-100.0, 0.0),
    FieldSpec::decimal("hsow", 2, "Maximum pressure head during sowing [-200..0 cm]").between(-200.0, 0.0),
    FieldSpec::decimal("ztempsow", 2, "Depth of soil temperature check for sowing [-100..0 cm]")
        .between(-100.0, 0.0),
    FieldSpec::decimal("tempsow", 2, "Soil temperature needed for sowing [0..30 C]").between(0.0, 30.0),
    FieldSpec::integer("maxsowdelay", "Maximum delay of sowing from start of growing season [d]")
        .between(1.0, 366.0),
    FieldSpec::switch("swgerm", &[0, 1, 2], "Germination: none (0), temperature sum (1), temperature sum and water potential (2)")
        .default_int(0),
    FieldSpec::decimal("tsumemeopt", 2, "Temperature sum needed for crop emergence [C d]").between(0.0, 1000.0),
    FieldSpec::decimal("tbasem", 2, "Minimum temperature used for germination [C]").between(0.0, 1000.0),
    FieldSpec::decimal("teffmx", 2, "Maximum effective temperature used for germination [C]")
        .between(0.0, 1000.0),
    FieldSpec::decimal("hdrygerm", 2, "Pressure head at dry side of germination [cm]").between(-1000.0, 1000.0),
    FieldSpec::decimal("hwetgerm", 2, "Pressure head at wet side of germination [cm]").between(-100.0, 1000.0),
    FieldSpec::decimal("zgerm", 2, "Depth of germination check [cm]").between(-100.0, 1000.0),
    FieldSpec::decimal("agerm", 2, "Parameter of germination [cm2/d]").between(0.0, 1000.0),
    FieldSpec::switch("swharv", OFF_ON, "Harvest at end date (0) or at development stage DVSEND (1)")
        .default_int(0),
    FieldSpec::decimal("dvsend", 2, "Development stage at harvest [0..3]").between(0.0, 3.0),
];

const GCTB: TableSchema = TableSchema::tagged(
    "gctb",
    &[
        DVS_COLUMN,
        FieldSpec::decimal("LAI", 2, "Leaf area index [m2/m2]").between(0.0, 12.0),
    ],
    "Leaf area index or soil cover fraction as function of development stage",
);

const KYTB: TableSchema = TableSchema::tagged(
    "kytb",
    &[
        DVS_COLUMN,
        FieldSpec::decimal("KY", 2, "Yield response factor").between(0.0, 5.0),
    ],
    "Yield response factor as function of development stage",
);

pub(super) const FIXED_DEVELOPMENT: &[FieldSpec] = &[
    FieldSpec::switch("idev", &[1, 2], "Length of crop cycle fixed (1) or temperature driven (2)"),
    FieldSpec::integer("lcc", "Duration of the crop cycle [1..366 d]").between(1.0, YEAR.1),
    FieldSpec::decimal("tsumea", 1, "Temperature sum from emergence to anthesis [C d]").between(0.0, 1.0e4),
    FieldSpec::decimal("tsumam", 1, "Temperature sum from anthesis to maturity [C d]").between(0.0, 1.0e4),
    FieldSpec::decimal("tbase", 1, "Start value of temperature sum [-10..30 C]").between(-10.0, 30.0),
    FieldSpec::switch("swgc", &[1, 2], "Leaf area index (1) or soil cover fraction (2) in GCTB"),
    FieldSpec::table("gctb", &GCTB),
    FieldSpec::table("kytb", &KYTB).optional(),
];

const CFTB: TableSchema = TableSchema::tagged(
    "cftb",
    &[
        DVS_COLUMN,
        FieldSpec::decimal("CF", 2, "Crop factor").between(0.0, 2.0),
    ],
    "Crop factor as function of development stage",
);

const CHTB: TableSchema = TableSchema::tagged(
    "chtb",
    &[
        DVS_COLUMN,
        FieldSpec::decimal("CH", 2, "Crop height [cm]").between(0.0, 1000.0),
    ],
    "Crop height as function of development stage",
);

const RDTB: TableSchema = TableSchema::tagged(
    "rdtb",
    &[
        DVS_COLUMN,
        FieldSpec::decimal("RD", 2, "Rooting depth [cm]").between(0.0, 100.0),
    ],
    "Rooting depth as function of development stage",
);

const RLWTB: TableSchema = TableSchema::tagged(
    "rlwtb",
    &[
        FieldSpec::decimal("RW", 2, "Root weight [kg/ha]").between(0.0, 5000.0),
        FieldSpec::decimal("RL", 2, "Rooting depth [cm]").between(0.0, 5000.0),
    ],
    "Rooting depth as function of root weight",
);

const RDCTB: TableSchema = TableSchema::tagged(
    "rdctb",
    &[
        FieldSpec::decimal("RRD", 2, "Relative rooting depth").between(0.0, 100.0),
        FieldSpec::decimal("RDENS", 2, "Relative root density").between(UNIT.0, UNIT.1),
    ],
    "Root density distribution as function of relative rooting depth",
);

pub(super) const DEVELOPMENT_COMMON: &[FieldSpec] = &[
    FieldSpec::decimal("kdif", 2, "Extinction coefficient for diffuse visible light [0..2]").between(0.0, 2.0),
    FieldSpec::decimal("kdir", 2, "Extinction coefficient for direct visible light [0..2]").between(0.0, 2.0),
    FieldSpec::switch("swcf", &[1, 2], "Crop factor (1) or crop height (2)"),
    FieldSpec::table("cftb", &CFTB),
    FieldSpec::table("chtb", &CHTB),
    FieldSpec::decimal("albedo", 2, "Crop reflection coefficient [0..1]").between(UNIT.0, UNIT.1),
    FieldSpec::decimal("rsc", 1, "Minimum canopy resistance [0..1e6 s/m]").between(0.0, 1.0e6),
    FieldSpec::decimal("rsw", 1, "Canopy resistance of intercepted water [0..1e6 s/m]").between(0.0, 1.0e6),
    FieldSpec::switch("swrd", &[1, 2, 3], "Rooting depth from development stage (1), growth rate (2) or root weight (3)"),
    FieldSpec::table("rdtb", &RDTB),
    FieldSpec::decimal("rdi", 2, "Initial rooting depth [0..1000 cm]").between(0.0, 1000.0),
    FieldSpec::decimal("rri", 2, "Maximum daily increase in rooting depth [0..100 cm/d]").between(0.0, 100.0),
    FieldSpec::decimal("rdc", 2, "Maximum rooting depth of crop [0..1000 cm]").between(0.0, 1000.0),
    FieldSpec::switch("swdmi2rd", OFF_ON, "Rooting depth increase related to dry matter increase"),
    FieldSpec::table("rlwtb", &RLWTB),
    FieldSpec::decimal("wrtmax", 2, "Maximum root weight [0..1e5 kg/ha]").between(0.0, 1.0e5),
    FieldSpec::switch("swrdc", OFF_ON, "Calculate root density distribution").default_int(0),
    FieldSpec::table("rdctb", &RDCTB),
];

const VERNTB: TableSchema = TableSchema::tagged(
    "verntb",
    &[
        FieldSpec::decimal("TAV", 2, "Mean daily temperature [C]").between(-10.0, 50.0),
        FieldSpec::decimal("VERNRATE", 2, "Vernalisation rate [1/d]").between(0.0, 1.0),
    ],
    "Vernalisation rate as function of mean temperature",
);

const DTSMTB: TableSchema = TableSchema::tagged(
    "dtsmtb",
    &[
        FieldSpec::decimal("TAV", 2, "Mean daily temperature [C]").between(0.0, 100.0),
        FieldSpec::decimal("DTSM", 2, "Increase in temperature sum [C]").between(0.0, 60.0),
    ],
    "Increase in temperature sum as function of daily average temperature",
);

pub(super) const WOFOST_PHENOLOGY: &[FieldSpec] = &[
    FieldSpec::switch("idsl", &[0, 1, 2], "Development driven by temperature (0), day length (1) or both with vernalisation (2)"),
    FieldSpec::decimal("dlo", 2, "Optimum day length for crop development [0..24 h]").between(0.0, 24.0),
    FieldSpec::decimal("dlc", 2, "Minimum day length [0..24 h]").between(0.0, 24.0),
    FieldSpec::decimal("vernsat", 2, "Saturated vernalisation requirement [0..100 d]").between(0.0, 100.0),
    FieldSpec::decimal("vernbase", 2, "Base vernalisation requirement [0..100 d]").between(0.0, 100.0),
    FieldSpec::decimal("verndvs", 2, "Critical development stage after which vernalisation has no effect")
        .between(0.0, 0.3),
    FieldSpec::table("verntb", &VERNTB),
    FieldSpec::decimal("tsumea", 1, "Temperature sum from emergence to anthesis [C d]").between(0.0, 1.0e4),
    FieldSpec::decimal("tsumam", 1, "Temperature sum from anthesis to maturity [C d]").between(0.0, 1.0e4),
    FieldSpec::table("dtsmtb", &DTSMTB),
];

const SLATB: TableSchema = TableSchema::tagged(
    "slatb",
    &[
        DVS_COLUMN,
        FieldSpec::decimal("SLA", 4, "Specific leaf area [ha/kg]").between(UNIT.0, UNIT.1),
    ],
    "Specific leaf area as function of development stage",
);

const AMAXTB: TableSchema = TableSchema::tagged(
    "amaxtb",
    &[
        DVS_COLUMN,
        FieldSpec::decimal("AMAX", 2, "Maximum CO2 assimilation rate [kg/ha/hr]").between(0.0, 100.0),
    ],
    "Maximum CO2 assimilation rate as function of development stage",
);

const TMPFTB: TableSchema = TableSchema::tagged(
    "tmpftb",
    &[
        FieldSpec::decimal("TAVD", 2, "Average daytime temperature [C]").between(-10.0, 50.0),
        FieldSpec::decimal("TMPF", 2, "Reduction factor").between(UNIT.0, UNIT.1),
    ],
    "Reduction factor of AMAX as function of average daytime temperature",
);

const TMNFTB: TableSchema = TableSchema::tagged(
    "tmnftb",
    &[
        FieldSpec::decimal("TMNR", 2, "Minimum temperature [C]").between(-10.0, 50.0),
        FieldSpec::decimal("TMNF", 2, "Reduction factor").between(UNIT.0, UNIT.1),
    ],
    "Reduction factor of gross assimilation as function of minimum temperature",
);

const RFSETB: TableSchema = TableSchema::tagged(
    "rfsetb",
    &[
        DVS_COLUMN,
        FieldSpec::decimal("RFSE", 2, "Reduction factor of senescence").between(UNIT.0, UNIT.1),
    ],
    "Reduction factor of senescence as function of development stage",
);

const FRTB: TableSchema = TableSchema::tagged(
    "frtb",
    &[
        DVS_COLUMN,
        FieldSpec::decimal("FR", 2, "Fraction of dry matter to roots").between(UNIT.0, UNIT.1),
    ],
    "Fraction of total dry matter increase partitioned to the roots",
);

const FLTB: TableSchema = TableSchema::tagged(
    "fltb",
    &[
        DVS_COLUMN,
        FieldSpec::decimal("FL", 2, "Fraction of above ground dry matter to leaves").between(UNIT.0, UNIT.1),
    ],
    "Fraction of above ground dry matter increase partitioned to the leaves",
);

const FSTB: TableSchema = TableSchema::tagged(
    "fstb",
    &[
        DVS_COLUMN,
        FieldSpec::decimal("FS", 2, "Fraction of above ground dry matter to stems").between(UNIT.0, UNIT.1),
    ],
    "Fraction of above ground dry matter increase partitioned to the stems",
);

const FOTB: TableSchema = TableSchema::tagged(
    "fotb",
    &[
        DVS_COLUMN,
        FieldSpec::decimal("FO", 2, "Fraction of above ground dry matter to storage organs")
            .between(UNIT.0, UNIT.1),
    ],
    "Fraction of above ground dry matter increase partitioned to the storage organs",
);

const RDRRTB: TableSchema = TableSchema::tagged(
    "rdrrtb",
    &[
        DVS_COLUMN,
        FieldSpec::decimal("RDRR", 3, "Relative death rate of roots [kg/kg/d]").at_least(0.0),
    ],
    "Relative death rates of roots as function of development stage",
);

const RDRSTB: TableSchema = TableSchema::tagged(
    "rdrstb",
    &[
        DVS_COLUMN,
        FieldSpec::decimal("RDRS", 3, "Relative death rate of stems [kg/kg/d]").at_least(0.0),
    ],
    "Relative death rates of stems as function of development stage",
);

pub(super) const WOFOST_GROWTH: &[FieldSpec] = &[
    FieldSpec::decimal("tdwi", 2, "Initial total crop dry weight [0..10000 kg/ha]").between(0.0, 1.0e4),
    FieldSpec::decimal("laiem", 4, "Leaf area index at emergence [0..10 m2/m2]").between(0.0, 10.0),
    FieldSpec::decimal("rgrlai", 4, "Maximum relative increase in LAI [0..1 m2/m2/d]").between(UNIT.0, UNIT.1),
    FieldSpec::decimal("spa", 4, "Specific pod area [0..1 ha/kg]")
        .between(UNIT.0, UNIT.1)
        .optional(),
    FieldSpec::decimal("ssa", 4, "Specific stem area [0..1 ha/kg]").between(UNIT.0, UNIT.1),
    FieldSpec::decimal("span", 2, "Life span under leaves under optimum conditions [0..366 d]")
        .between(YEAR.0, YEAR.1),
    FieldSpec::table("slatb", &SLATB),
    FieldSpec::decimal("eff", 2, "Light use efficiency [0..10 kg/ha/hr/(J/m2/s)]").between(0.0, 10.0),
    FieldSpec::table("amaxtb", &AMAXTB),
    FieldSpec::table("tmpftb", &TMPFTB),
    FieldSpec::table("tmnftb", &TMNFTB),
    FieldSpec::decimal("cvl", 3, "Efficiency of conversion into leaves [0..1 kg/kg]").between(UNIT.0, UNIT.1),
    FieldSpec::decimal("cvo", 3, "Efficiency of conversion into storage organs [0..1 kg/kg]")
        .between(UNIT.0, UNIT.1)
        .optional(),
    FieldSpec::decimal("cvr", 3, "Efficiency of conversion into roots [0..1 kg/kg]").between(UNIT.0, UNIT.1),
    FieldSpec::decimal("cvs", 3, "Efficiency of conversion into stems [0..1 kg/kg]").between(UNIT.0, UNIT.1),
    FieldSpec::decimal("q10", 2, "Increase in respiration rate with temperature [0..5 /10 C]").between(0.0, 5.0),
    FieldSpec::decimal("rml", 3, "Maintenance respiration rate of leaves [0..1 kgCH2O/kg/d]")
        .between(UNIT.0, UNIT.1),
    FieldSpec::decimal("rmo", 3, "Maintenance respiration rate of storage organs [0..1 kgCH2O/kg/d]")
        .between(UNIT.0, UNIT.1)
        .optional(),
    FieldSpec::decimal("rmr", 3, "Maintenance respiration rate of roots [0..1 kgCH2O/kg/d]")
        .between(UNIT.0, UNIT.1),
    FieldSpec::decimal("rms", 3, "Maintenance respiration rate of stems [0..1 kgCH2O/kg/d]")
        .between(UNIT.0, UNIT.1),
    FieldSpec::table("rfsetb", &RFSETB),
    FieldSpec::table("frtb", &FRTB),
    FieldSpec::table("fltb", &FLTB),
    FieldSpec::table("fstb", &FSTB),
    FieldSpec::table("fotb", &FOTB).optional(),
    FieldSpec::decimal("perdl", 2, "Maximum relative death rate of leaves due to water stress [0..3 /d]")
        .between(0.0, 3.0),
    FieldSpec::table("rdrrtb", &RDRRTB),
    FieldSpec::table("rdrstb", &RDRSTB),
];

const MRFTB: TableSchema = TableSchema::tagged(
    "mrftb",
    &[
        DVS_COLUMN,
        FieldSpec::decimal("MAX_RESP_FACTOR", 2, "Ratio of root total respiration to maintenance respiration")
            .between(1.0, 5.0),
    ],
    "Ratio root total respiration / maintenance respiration as function of development stage",
);

const WRTB: TableSchema = TableSchema::tagged(
    "wrtb",
    &[
        DVS_COLUMN,
        FieldSpec::decimal("W_ROOT_SS", 2, "Dry weight of roots at soil surface [kg/m3]").between(0.0, 10.0),
    ],
    "Dry weight of roots at soil surface as function of development stage",
);

pub(super) const OXYGEN_STRESS: &[FieldSpec] = &[
    FieldSpec::switch("swoxygen", &[0, 1, 2], "Oxygen stress: none (0), Feddes (1), physical processes (2)"),
    FieldSpec::switch("swwrtnonox", OFF_ON, "Check aerobic conditions in root zone for root water uptake"),
    FieldSpec::decimal("aeratecrit", 4, "Threshold to stop root water uptake [0.0001..1]").between(1.0e-4, 1.0),
    FieldSpec::decimal("hlim1", 2, "No water extraction at higher pressure heads [-100..100 cm]")
        .between(-100.0, 100.0),
    FieldSpec::decimal("hlim2u", 2, "H below which optimum water extraction starts, top layer [cm]")
        .between(-1000.0, 100.0),
    FieldSpec::decimal("hlim2l", 2, "H below which optimum water extraction starts, sub layer [cm]")
        .between(-1000.0, 100.0),
    FieldSpec::decimal("q10_microbial", 2, "Relative increase in microbial respiration at 10 C [1..4]")
        .between(1.0, 4.0),
    FieldSpec::decimal("specific_resp_humus", 3, "Respiration rate of humus at 25 C [0..1 kg O2/kg/d]")
        .between(UNIT.0, UNIT.1),
    FieldSpec::float("srl", "Specific root length [0..1e10 m root/kg root]").between(0.0, 1.0e10),
    FieldSpec::switch("swrootradius", &[1, 2], "Calculate root radius (1) or give it (2)"),
    FieldSpec::decimal("dry_mat_cont_roots", 3, "Dry matter content of roots [0..1]").between(UNIT.0, UNIT.1),
    FieldSpec::decimal("air_filled_root_por", 3, "Air filled root porosity [0..1]").between(UNIT.0, UNIT.1),
    FieldSpec::decimal("spec_weight_root_tissue", 2, "Specific weight of non-airfilled root tissue [kg/m3]")
        .between(0.0, 1.0e5),
    FieldSpec::decimal("var_a", 3, "Variance of root radius [0..1]").between(UNIT.0, UNIT.1),
    FieldSpec::float("root_radiuso2", "Root radius for oxygen stress [1e-6..0.1 m]").between(1.0e-6, 0.1),
    FieldSpec::decimal("q10_root", 2, "Relative increase in root respiration at 10 C [1..4]").between(1.0, 4.0),
    FieldSpec::decimal("f_senes", 2, "Reduction factor for senescence [0..1]").between(UNIT.0, UNIT.1),
    FieldSpec::decimal("c_mroot", 3, "Maintenance coefficient of root [0..1 kg/kg/d]").between(UNIT.0, UNIT.1),
    FieldSpec::table("mrftb", &MRFTB),
    FieldSpec::table("wrtb", &WRTB),
];

pub(super) const DROUGHT_STRESS: &[FieldSpec] = &[
    FieldSpec::switch("swdrought", &[1, 2], "Drought stress according to Feddes (1) or de Jong van Lier (2)"),
    FieldSpec::decimal("hlim3h", 2, "Pressure head below which water uptake reduction starts at high Tpot [cm]")
        .between(-1.0e4, 100.0),
    FieldSpec::decimal("hlim3l", 2, "Pressure head below which water uptake reduction starts at low Tpot [cm]")
        .between(-1.0e4, 100.0),
    FieldSpec::decimal("hlim4", 2, "No water extraction at lower soil water pressure heads [cm]")
        .between(-1.6e4, 100.0),
    FieldSpec::decimal("adcrh", 2, "Level of high atmospheric demand [0..5 cm/d]").between(0.0, 5.0),
    FieldSpec::decimal("adcrl", 2, "Level of low atmospheric demand [0..5 cm/d]").between(0.0, 5.0),
    FieldSpec::float("wiltpoint", "Minimum pressure head in leaves [-1e8..-1e2 cm]").between(-1.0e8, -1.0e2),
    FieldSpec::float("kstem", "Hydraulic conductance between leaf and root xylem [1e-10..10 /d]")
        .between(1.0e-10, 10.0),
    FieldSpec::float("rxylem", "Xylem radius [1e-4..1 cm]").between(1.0e-4, 1.0),
    FieldSpec::float("rootradius", "Root radius [1e-4..1 cm]").between(1.0e-4, 1.0),
    FieldSpec::float("kroot", "Radial hydraulic conductivity of root tissue [1e-10..1e10 cm/d]")
        .between(1.0e-10, 1.0e10),
    FieldSpec::decimal("rootcoefa", 2, "Relative distance between roots at which mean pressure head occurs [0..1]")
        .between(UNIT.0, UNIT.1),
    FieldSpec::switch("swhydrlift", OFF_ON, "Possibility of hydraulic lift"),
    FieldSpec::decimal("rooteff", 2, "Root system efficiency factor [0..1]").between(UNIT.0, UNIT.1),
    FieldSpec::decimal("stephr", 2, "Step between values of hroot and hxylem in iteration cycle [0..10 cm]")
        .between(0.0, 10.0),
    FieldSpec::decimal("criterhr", 3, "Maximum difference of hroot between iterations [0..10 cm]")
        .between(0.0, 10.0),
    FieldSpec::float("taccur", "Maximum absolute difference between calculated and demanded transpiration [1e-5..1e-2 cm]")
        .between(1.0e-5, 1.0e-2),
];

pub(super) const SALT_STRESS: &[FieldSpec] = &[
    FieldSpec::switch("swsalinity", &[0, 1, 2], "Salt stress: none (0), Maas and Hoffman (1), osmotic head (2)")
        .default_int(0),
    FieldSpec::decimal("saltmax", 2, "Threshold salt concentration in soil water [0..100 mg/cm3]")
        .between(0.0, 100.0),
    FieldSpec::decimal("saltslope", 2, "Decline of root water uptake above threshold [0..1 cm3/mg]")
        .between(UNIT.0, UNIT.1),
    FieldSpec::decimal("salthead", 2, "Conversion factor salt concentration to osmotic head [0..1000 cm]")
        .between(0.0, 1000.0),
];

pub(super) const COMPENSATE_RWU: &[FieldSpec] = &[
    FieldSpec::switch("swcompensate", &[0, 1, 2], "Compensation of root water uptake: none (0), Jarvis (1), Walsum (2)")
        .default_int(0),
    FieldSpec::switch("swstressor", &[1, 2, 3, 4, 5], "Stressors that are compensated"),
    FieldSpec::decimal("alphacrit", 2, "Critical stress index for compensation [0.2..1]").between(0.2, 1.0),
    FieldSpec::decimal("dcritrtz", 2, "Threshold of rootzone thickness after which compensation occurs [0.02..100 cm]")
        .between(0.02, 100.0),
];

const INTERTB: TableSchema = TableSchema::headed(
    "intertb",
    &[
        FieldSpec::decimal("T", 1, "Time [d]").between(YEAR.0, YEAR.1),
        FieldSpec::decimal("PFREE", 2, "Free throughfall coefficient").between(UNIT.0, UNIT.1),
        FieldSpec::decimal("PSTEM", 2, "Stem flow coefficient").between(UNIT.0, UNIT.1),
        FieldSpec::decimal("SCANOPY", 2, "Storage capacity of canopy [cm]").between(0.0, 10.0),
        FieldSpec::decimal("AVPREC", 2, "Average rainfall intensity [cm/d]").between(0.0, 100.0),
        FieldSpec::decimal("AVEVAP", 2, "Average evaporation intensity during rainfall [cm/d]").between(0.0, 10.0),
    ],
    "Interception parameters of Gash as function of time",
);

pub(super) const INTERCEPTION: &[FieldSpec] = &[
    FieldSpec::switch("swinter", &[0, 1, 2], "Rainfall interception: none (0), agricultural crops (1), trees and forests (2)"),
    FieldSpec::decimal("cofab", 2, "Interception coefficient Von Hoyningen-Hune and Braden [0..1 cm]")
        .between(UNIT.0, UNIT.1),
    FieldSpec::table("intertb", &INTERTB),
];
