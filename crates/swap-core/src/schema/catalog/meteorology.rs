use super::{UNIT, YEAR};
use crate::domain::BlobRole;
use crate::schema::{FieldSpec, TableSchema};

const OFF_ON: &[i64] = &[0, 1];

const RAINFLUX: TableSchema = TableSchema::headed(
    "rainflux",
    &[
        FieldSpec::float("TIME", "Day number").between(YEAR.0, YEAR.1),
        FieldSpec::decimal("RAINFLUX", 2, "Rainfall intensity [cm/d]").between(0.0, 1000.0),
    ],
    "Mean rainfall intensity RAINFLUX [0..1000 cm/d] as function of time TIME [0..366 d]",
)
.row_count(1.0, 30.0);

pub(super) const METEOROLOGY: &[FieldSpec] = &[
    FieldSpec::text("metfil", "File name of meteorological data, including extension")
        .references(BlobRole::Meteo),
    FieldSpec::decimal("lat", 2, "Latitude of meteo station [-90..90 degrees]").between(-90.0, 90.0),
    FieldSpec::decimal("alt", 2, "Altitude of meteo station [-400..3000 m]").between(-400.0, 3000.0),
    FieldSpec::decimal("altw", 2, "Height of wind speed measurement above soil surface [m]").between(0.0, 99.0),
    FieldSpec::decimal("angstroma", 2, "Fraction of extraterrestrial radiation on overcast days")
        .between(UNIT.0, UNIT.1),
    FieldSpec::decimal("angstromb", 2, "Additional fraction of extraterrestrial radiation on clear days")
        .between(UNIT.0, UNIT.1),
    FieldSpec::switch("swetr", OFF_ON, "Use reference evapotranspiration with crop factors (1)"),
    FieldSpec::switch("swdivide", OFF_ON, "Divide E and T with Penman-Monteith (1)"),
    FieldSpec::switch("swmetdetail", OFF_ON, "Time interval of weather data: daily (0) or sub-daily (1)"),
    FieldSpec::integer("nmetdetail", "Number of weather data records each day").between(1.0, 96.0),
    FieldSpec::switch("swetsine", OFF_ON, "Distribute daily Tp and Ep according to sinus wave").default_int(0),
    FieldSpec::switch("swrain", &[0, 1, 2, 3], "Use of actual rainfall intensity").default_int(0),
    FieldSpec::table("rainflux", &RAINFLUX),
    FieldSpec::text("rainfil", "File name of detailed rainfall records"),
];

const DAILY_RECORDS: TableSchema = TableSchema::csv(
    "meteodata",
    &[
        FieldSpec::text("Station", "Station name"),
        FieldSpec::integer("DD", "Day").between(1.0, 31.0),
        FieldSpec::integer("MM", "Month").between(1.0, 12.0),
        FieldSpec::integer("YYYY", "Year").between(1.0, 9999.0),
        FieldSpec::float("RAD", "Global radiation [kJ/m2/d]"),
        FieldSpec::float("Tmin", "Minimum temperature [C]"),
        FieldSpec::float("Tmax", "Maximum temperature [C]"),
        FieldSpec::float("HUM", "Actual vapour pressure [kPa]"),
        FieldSpec::float("WIND", "Mean wind speed [m/s]"),
        FieldSpec::float("RAIN", "Rainfall [mm/d]"),
        FieldSpec::float("ETref", "Reference evapotranspiration [mm/d]"),
        FieldSpec::float("WET", "Rainfall duration [d]"),
    ],
    "Daily meteorological records",
);

pub(super) const METEO_DATA: &[FieldSpec] = &[FieldSpec::table("meteodata", &DAILY_RECORDS)];
