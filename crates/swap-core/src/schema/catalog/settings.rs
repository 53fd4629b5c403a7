use super::YEAR;
use crate::codec::DateFormat;
use crate::schema::{FieldSpec, TableSchema};

const OFF_ON: &[i64] = &[0, 1];

pub(super) const METADATA: &[FieldSpec] = &[FieldSpec::text("project", "Project description")];

const OUTDATINT: TableSchema = TableSchema::tagged(
    "outdatint",
    &[FieldSpec::date("OUTDATINT", "Extra output date").with_format(DateFormat::DayMonthName)],
    "Specify all extra output dates",
);

const OUTDAT: TableSchema = TableSchema::tagged(
    "outdat",
    &[FieldSpec::date("OUTDAT", "Balance output date").with_format(DateFormat::DayMonthName)],
    "Specify all water balance output dates",
);

pub(super) const GENERAL_SETTINGS: &[FieldSpec] = &[
    FieldSpec::text("pathwork", "Path to work folder").default_text("./"),
    FieldSpec::text("pathatm", "Path to folder with weather files").default_text("./"),
    FieldSpec::text("pathcrop", "Path to folder with crop files").default_text("./"),
    FieldSpec::text("pathdrain", "Path to folder with drainage files").default_text("./"),
    FieldSpec::switch("swscre", &[0, 1, 3], "Display progression of run to screen").default_int(0),
    FieldSpec::switch("swerror", OFF_ON, "Print errors to screen").default_int(0),
    FieldSpec::date("tstart", "Start date of simulation run"),
    FieldSpec::date("tend", "End date of simulation run"),
    FieldSpec::integer("nprintday", "Number of output times during a day")
        .between(1.0, 1440.0)
        .default_int(1),
    FieldSpec::switch("swmonth", OFF_ON, "Output each month"),
    FieldSpec::integer("period", "Fixed output interval").between(YEAR.0, YEAR.1),
    FieldSpec::switch("swres", OFF_ON, "Reset output interval counter each year"),
    FieldSpec::switch("swodat", OFF_ON, "Extra output dates are given in table"),
    FieldSpec::table("outdatint", &OUTDATINT),
    FieldSpec::switch("swyrvar", OFF_ON, "Balance output at fixed date (0) or listed dates (1)"),
    FieldSpec::day_month("datefix", "Fixed date for balance output"),
    FieldSpec::table("outdat", &OUTDAT),
    FieldSpec::text("outfil", "Generic file name of output files").default_text("result"),
    FieldSpec::switch("swheader", OFF_ON, "Print header at start of each balance period").default_int(0),
    FieldSpec::switch("swwba", OFF_ON, "Output daily water balance").default_int(0),
    FieldSpec::switch("swend", OFF_ON, "Output end conditions").default_int(0),
    FieldSpec::switch("swvap", OFF_ON, "Output soil profiles of moisture, solute and temperature").default_int(0),
    FieldSpec::switch("swbal", OFF_ON, "Output file with yearly water balance").default_int(0),
    FieldSpec::switch("swblc", OFF_ON, "Output file with detailed yearly water balance").default_int(0),
    FieldSpec::switch("swsba", OFF_ON, "Output file of cumulative solute balance").default_int(0),
    FieldSpec::switch("swate", OFF_ON, "Output file with soil temperature profiles").default_int(0),
    FieldSpec::switch("swbma", OFF_ON, "Output file with water fluxes, only for macropore flow").default_int(0),
    FieldSpec::switch("swdrf", OFF_ON, "Output of drainage fluxes").default_int(0),
    FieldSpec::switch("swswb", OFF_ON, "Output surface water reservoir").default_int(0),
    FieldSpec::switch("swini", OFF_ON, "Output of initial SoilPhysParam and HeatParam").default_int(0),
    FieldSpec::switch("swinc", OFF_ON, "Output of water balance increments").default_int(0),
    FieldSpec::switch("swcrp", OFF_ON, "Output of simulated crop growth").default_int(0),
    FieldSpec::switch("swstr", OFF_ON, "Output of stress values for wetness, drought, salinity and frost").default_int(0),
    FieldSpec::switch("swirg", OFF_ON, "Output of irrigation gifts").default_int(0),
    FieldSpec::switch("swcsv", OFF_ON, "Output of variables in csv file").default_int(0),
    FieldSpec::text_list("inlist_csv", "Variables written to the csv output"),
    FieldSpec::switch("swcsv_tz", OFF_ON, "Output of depth dependent variables in csv file").default_int(0),
    FieldSpec::text_list("inlist_csv_tz", "Variables written to the depth csv output"),
    FieldSpec::switch("swafo", &[0, 1, 2], "Output file with formatted hydrological data").default_int(0),
    FieldSpec::switch("swaun", &[0, 1, 2], "Output file with unformatted hydrological data").default_int(0),
    FieldSpec::float("critdevmasbal", "Critical deviation in water balance during PERIOD").between(0.0, 1.0),
    FieldSpec::switch("swdiscrvert", OFF_ON, "Convert vertical discretisation").default_int(0),
    FieldSpec::integer("numnodnew", "New number of nodes").at_least(1.0),
    FieldSpec::float_list("dznew", 2, "Thickness of new compartments [cm]").between(0.0, 1.0e4),
];

pub(super) const RICHARDS: &[FieldSpec] = &[
    FieldSpec::switch("swkmean", &[1, 2, 3, 4, 5, 6], "Averaging method of hydraulic conductivity").default_int(1),
    FieldSpec::switch("swkimpl", OFF_ON, "Update hydraulic conductivity during iteration").default_int(0),
    FieldSpec::float("dtmin", "Minimum timestep [1e-7..0.1 d]")
        .between(1.0e-7, 0.1)
        .default_float(1.0e-6),
    FieldSpec::float("dtmax", "Maximum timestep [dtmin..1 d]")
        .between(1.0e-6, 1.0)
        .default_float(0.04),
    FieldSpec::float("gwlconv", "Maximum difference of groundwater level between time steps [cm]")
        .between(1.0e-5, 1000.0)
        .default_float(100.0),
    FieldSpec::float("critdevh1cp", "Maximum relative difference in pressure heads per compartment")
        .between(1.0e-10, 1.0e3)
        .default_float(0.01),
    FieldSpec::float("critdevh2cp", "Maximum absolute difference in pressure heads per compartment [cm]")
        .between(1.0e-10, 1.0e3)
        .default_float(0.1),
    FieldSpec::float("critdevponddt", "Maximum water balance error of ponding layer [cm]")
        .between(1.0e-6, 0.1)
        .default_float(1.0e-4),
    FieldSpec::integer("maxit", "Maximum number of iteration cycles")
        .between(5.0, 100.0)
        .default_int(30),
    FieldSpec::integer("maxbacktr", "Maximum number of back track cycles within an iteration cycle")
        .between(1.0, 10.0)
        .default_int(3),
];
