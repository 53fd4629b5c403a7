mod boundary;
mod crop;
mod drainage;
mod irrigation;
mod meteorology;
mod settings;
mod soilwater;
mod transport;

use super::{Presence, SectionSchema};
use crate::domain::SectionKind;

const UNIT: (f64, f64) = (0.0, 1.0);
const YEAR: (f64, f64) = (0.0, 366.0);
const DVS: (f64, f64) = (0.0, 2.0);

const fn schema(
    kind: SectionKind,
    presence: Presence,
    groups: &'static [&'static [super::FieldSpec]],
) -> SectionSchema {
    SectionSchema {
        kind,
        presence,
        groups,
    }
}

const CROP_DEVELOPMENT: Presence = Presence::Alternative("crop_development");

/// Indexed by `SectionKind` discriminant.
static SECTIONS: [SectionSchema; 28] = [
    schema(SectionKind::Metadata, Presence::Required, &[settings::METADATA]),
    schema(
        SectionKind::GeneralSettings,
        Presence::Required,
        &[settings::GENERAL_SETTINGS],
    ),
    schema(
        SectionKind::Meteorology,
        Presence::Required,
        &[meteorology::METEOROLOGY],
    ),
    schema(SectionKind::Crop, Presence::Required, &[crop::CROP_ROTATION]),
    schema(
        SectionKind::FixedIrrigation,
        Presence::Defaulted,
        &[irrigation::FIXED_IRRIGATION],
    ),
    schema(
        SectionKind::SoilMoisture,
        Presence::Required,
        &[soilwater::SOIL_MOISTURE],
    ),
    schema(
        SectionKind::SurfaceFlow,
        Presence::Required,
        &[soilwater::SURFACE_FLOW],
    ),
    schema(
        SectionKind::Evaporation,
        Presence::Required,
        &[soilwater::EVAPORATION],
    ),
    schema(
        SectionKind::SoilProfile,
        Presence::Required,
        &[soilwater::SOIL_PROFILE],
    ),
    schema(
        SectionKind::SnowAndFrost,
        Presence::Defaulted,
        &[soilwater::SNOW_AND_FROST],
    ),
    schema(SectionKind::Richards, Presence::Defaulted, &[settings::RICHARDS]),
    schema(
        SectionKind::LateralDrainage,
        Presence::Required,
        &[drainage::LATERAL_DRAINAGE],
    ),
    schema(
        SectionKind::BottomBoundary,
        Presence::Required,
        &[boundary::BOUNDARY_SOURCE, boundary::BOUNDARY_CONDITIONS],
    ),
    schema(SectionKind::HeatFlow, Presence::Defaulted, &[transport::HEAT_FLOW]),
    schema(
        SectionKind::SoluteTransport,
        Presence::Defaulted,
        &[transport::SOLUTE_TRANSPORT],
    ),
    schema(SectionKind::Preparation, Presence::Defaulted, &[crop::PREPARATION]),
    schema(
        SectionKind::CropDevelopmentFixed,
        CROP_DEVELOPMENT,
        &[crop::FIXED_DEVELOPMENT, crop::DEVELOPMENT_COMMON],
    ),
    schema(
        SectionKind::CropDevelopmentWofost,
        CROP_DEVELOPMENT,
        &[
            crop::WOFOST_PHENOLOGY,
            crop::DEVELOPMENT_COMMON,
            crop::WOFOST_GROWTH,
        ],
    ),
    schema(SectionKind::OxygenStress, Presence::Required, &[crop::OXYGEN_STRESS]),
    schema(
        SectionKind::DroughtStress,
        Presence::Required,
        &[crop::DROUGHT_STRESS],
    ),
    schema(SectionKind::SaltStress, Presence::Defaulted, &[crop::SALT_STRESS]),
    schema(
        SectionKind::CompensateRwu,
        Presence::Defaulted,
        &[crop::COMPENSATE_RWU],
    ),
    schema(SectionKind::Interception, Presence::Required, &[crop::INTERCEPTION]),
    schema(
        SectionKind::ScheduledIrrigation,
        Presence::Defaulted,
        &[irrigation::SCHEDULED_IRRIGATION],
    ),
    schema(
        SectionKind::DrainageFile,
        Presence::Required,
        &[drainage::DRAINAGE_FILE],
    ),
    schema(
        SectionKind::BottomBoundaryFile,
        Presence::Required,
        &[boundary::BOUNDARY_CONDITIONS],
    ),
    schema(SectionKind::MeteoData, Presence::Required, &[meteorology::METEO_DATA]),
    schema(
        SectionKind::IrrigationEvents,
        Presence::Required,
        &[irrigation::IRRIGATION_EVENTS],
    ),
];

pub fn all_sections() -> &'static [SectionSchema] {
    &SECTIONS
}

pub fn section(kind: SectionKind) -> &'static SectionSchema {
    &SECTIONS[kind as usize]
}
