pub mod errors;
mod value;

pub use errors::{Allowed, ExitPlaceholder, SwapError, SwapErrorCategory, SwapResult};
pub use value::{DayMonth, Table, Value};

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The physical file a section is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlobRole {
    Main,
    Crop,
    Drainage,
    BottomBoundary,
    Meteo,
    Irrigation,
}

impl BlobRole {
    pub const ALL: [BlobRole; 6] = [
        Self::Main,
        Self::Crop,
        Self::Drainage,
        Self::BottomBoundary,
        Self::Meteo,
        Self::Irrigation,
    ];

    pub const fn extension(self) -> &'static str {
        match self {
            Self::Main => "swp",
            Self::Crop => "crp",
            Self::Drainage => "dra",
            Self::BottomBoundary => "bbc",
            Self::Meteo => "met",
            Self::Irrigation => "irg",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Crop => "crop",
            Self::Drainage => "drainage",
            Self::BottomBoundary => "bottom boundary",
            Self::Meteo => "meteo",
            Self::Irrigation => "irrigation",
        }
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|role| role.extension().eq_ignore_ascii_case(extension))
    }

    /// METFIL names its file including the extension; every other reference
    /// uses the bare stem.
    pub const fn reference_keeps_extension(self) -> bool {
        matches!(self, Self::Meteo)
    }

    pub fn sections(self) -> impl Iterator<Item = SectionKind> {
        SectionKind::ALL
            .into_iter()
            .filter(move |kind| kind.role() == self)
    }
}

impl Display for BlobRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// Identifies one rendered or parsed text blob.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlobKey {
    pub role: BlobRole,
    pub name: String,
}

impl BlobKey {
    pub const MAIN_NAME: &'static str = "swap";

    pub fn new(role: BlobRole, name: impl Into<String>) -> Self {
        Self {
            role,
            name: name.into(),
        }
    }

    pub fn main() -> Self {
        Self::new(BlobRole::Main, Self::MAIN_NAME)
    }

    pub fn file_name(&self) -> String {
        let suffix = format!(".{}", self.role.extension());
        if self.name.to_ascii_lowercase().ends_with(&suffix) {
            self.name.clone()
        } else {
            format!("{}{}", self.name, suffix)
        }
    }

    /// Maps a file name back to a blob key, if its extension names a role.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (stem, extension) = file_name.rsplit_once('.')?;
        let role = BlobRole::from_extension(extension)?;
        if stem.is_empty() {
            return None;
        }
        let name = if role.reference_keeps_extension() {
            file_name.to_string()
        } else {
            stem.to_string()
        };
        Some(Self::new(role, name))
    }
}

impl Display for BlobKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.file_name())
    }
}

/// Every section the engine reads. Declaration order is the canonical
/// output order inside each blob role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Metadata,
    GeneralSettings,
    Meteorology,
    Crop,
    FixedIrrigation,
    SoilMoisture,
    SurfaceFlow,
    Evaporation,
    SoilProfile,
    SnowAndFrost,
    Richards,
    LateralDrainage,
    BottomBoundary,
    HeatFlow,
    SoluteTransport,
    Preparation,
    CropDevelopmentFixed,
    CropDevelopmentWofost,
    OxygenStress,
    DroughtStress,
    SaltStress,
    CompensateRwu,
    Interception,
    ScheduledIrrigation,
    DrainageFile,
    BottomBoundaryFile,
    MeteoData,
    IrrigationEvents,
}

impl SectionKind {
    pub const ALL: [SectionKind; 28] = [
        Self::Metadata,
        Self::GeneralSettings,
        Self::Meteorology,
        Self::Crop,
        Self::FixedIrrigation,
        Self::SoilMoisture,
        Self::SurfaceFlow,
        Self::Evaporation,
        Self::SoilProfile,
        Self::SnowAndFrost,
        Self::Richards,
        Self::LateralDrainage,
        Self::BottomBoundary,
        Self::HeatFlow,
        Self::SoluteTransport,
        Self::Preparation,
        Self::CropDevelopmentFixed,
        Self::CropDevelopmentWofost,
        Self::OxygenStress,
        Self::DroughtStress,
        Self::SaltStress,
        Self::CompensateRwu,
        Self::Interception,
        Self::ScheduledIrrigation,
        Self::DrainageFile,
        Self::BottomBoundaryFile,
        Self::MeteoData,
        Self::IrrigationEvents,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Self::Metadata => "metadata",
            Self::GeneralSettings => "general_settings",
            Self::Meteorology => "meteorology",
            Self::Crop => "crop",
            Self::FixedIrrigation => "fixed_irrigation",
            Self::SoilMoisture => "soil_moisture",
            Self::SurfaceFlow => "surface_flow",
            Self::Evaporation => "evaporation",
            Self::SoilProfile => "soil_profile",
            Self::SnowAndFrost => "snow_and_frost",
            Self::Richards => "richards",
            Self::LateralDrainage => "lateral_drainage",
            Self::BottomBoundary => "bottom_boundary",
            Self::HeatFlow => "heat_flow",
            Self::SoluteTransport => "solute_transport",
            Self::Preparation => "preparation",
            Self::CropDevelopmentFixed => "crop_development_fixed",
            Self::CropDevelopmentWofost => "crop_development_wofost",
            Self::OxygenStress => "oxygen_stress",
            Self::DroughtStress => "drought_stress",
            Self::SaltStress => "salt_stress",
            Self::CompensateRwu => "compensate_rwu",
            Self::Interception => "interception",
            Self::ScheduledIrrigation => "scheduled_irrigation",
            Self::DrainageFile => "drainage_file",
            Self::BottomBoundaryFile => "bottom_boundary_file",
            Self::MeteoData => "meteo_data",
            Self::IrrigationEvents => "irrigation_events",
        }
    }

    /// Banner title written above the section.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Metadata => "Metadata",
            Self::GeneralSettings => "General settings",
            Self::Meteorology => "Meteorology",
            Self::Crop => "Crop rotation",
            Self::FixedIrrigation => "Fixed irrigation",
            Self::SoilMoisture => "Initial soil moisture",
            Self::SurfaceFlow => "Surface flow",
            Self::Evaporation => "Soil evaporation",
            Self::SoilProfile => "Soil profile",
            Self::SnowAndFrost => "Snow and frost",
            Self::Richards => "Richards equation",
            Self::LateralDrainage => "Lateral drainage",
            Self::BottomBoundary => "Bottom boundary",
            Self::HeatFlow => "Heat flow",
            Self::SoluteTransport => "Solute transport",
            Self::Preparation => "Crop preparation, sowing and germination",
            Self::CropDevelopmentFixed => "Crop development (fixed)",
            Self::CropDevelopmentWofost => "Crop development (WOFOST)",
            Self::OxygenStress => "Oxygen stress",
            Self::DroughtStress => "Drought stress",
            Self::SaltStress => "Salt stress",
            Self::CompensateRwu => "Compensation of root water uptake",
            Self::Interception => "Interception",
            Self::ScheduledIrrigation => "Irrigation scheduling",
            Self::DrainageFile => "Lateral drainage settings",
            Self::BottomBoundaryFile => "Bottom boundary settings",
            Self::MeteoData => "Daily meteorological data",
            Self::IrrigationEvents => "Irrigation events",
        }
    }

    pub const fn role(self) -> BlobRole {
        match self {
            Self::Metadata
            | Self::GeneralSettings
            | Self::Meteorology
            | Self::Crop
            | Self::FixedIrrigation
            | Self::SoilMoisture
            | Self::SurfaceFlow
            | Self::Evaporation
            | Self::SoilProfile
            | Self::SnowAndFrost
            | Self::Richards
            | Self::LateralDrainage
            | Self::BottomBoundary
            | Self::HeatFlow
            | Self::SoluteTransport => BlobRole::Main,
            Self::Preparation
            | Self::CropDevelopmentFixed
            | Self::CropDevelopmentWofost
            | Self::OxygenStress
            | Self::DroughtStress
            | Self::SaltStress
            | Self::CompensateRwu
            | Self::Interception
            | Self::ScheduledIrrigation => BlobRole::Crop,
            Self::DrainageFile => BlobRole::Drainage,
            Self::BottomBoundaryFile => BlobRole::BottomBoundary,
            Self::MeteoData => BlobRole::Meteo,
            Self::IrrigationEvents => BlobRole::Irrigation,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.key().eq_ignore_ascii_case(key))
    }

    pub fn from_title(role: BlobRole, title: &str) -> Option<Self> {
        let title = title.trim();
        role.sections()
            .find(|kind| kind.title().eq_ignore_ascii_case(title))
    }
}

impl Display for SectionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).key())
    }
}

/// Inclusive numeric interval; either side may be open.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Bounds {
    pub const UNBOUNDED: Bounds = Bounds {
        min: None,
        max: None,
    };

    pub const fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub const fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub const fn at_most(max: f64) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    pub const fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

impl Display for Bounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let side = |value: Option<f64>| match value {
            Some(value) => format_bound(value),
            None => String::new(),
        };
        write!(f, "[{}..{}]", side(self.min), side(self.max))
    }
}

fn format_bound(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1.0e-3..1.0e6).contains(&magnitude) {
        format!("{value:e}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::{BlobKey, BlobRole, Bounds, SectionKind};

    #[test]
    fn every_role_lists_its_sections_in_declaration_order() {
        let main: Vec<SectionKind> = BlobRole::Main.sections().collect();
        assert_eq!(main.first(), Some(&SectionKind::Metadata));
        assert_eq!(main.last(), Some(&SectionKind::SoluteTransport));
        assert_eq!(main.len(), 15);

        let mut sorted = main.clone();
        sorted.sort();
        assert_eq!(main, sorted);

        for role in BlobRole::ALL {
            assert!(role.sections().next().is_some(), "{role} has no sections");
        }
    }

    #[test]
    fn section_keys_and_titles_are_unique_per_role() {
        for kind in SectionKind::ALL {
            assert_eq!(SectionKind::from_key(kind.key()), Some(kind));
            assert_eq!(
                SectionKind::from_title(kind.role(), &kind.title().to_uppercase()),
                Some(kind)
            );
        }
    }

    #[test]
    fn file_names_follow_role_extensions() {
        assert_eq!(BlobKey::main().file_name(), "swap.swp");
        assert_eq!(
            BlobKey::new(BlobRole::Crop, "maizes").file_name(),
            "maizes.crp"
        );
        assert_eq!(BlobKey::new(BlobRole::Meteo, "283.met").file_name(), "283.met");

        assert_eq!(
            BlobKey::from_file_name("283.met"),
            Some(BlobKey::new(BlobRole::Meteo, "283.met"))
        );
        assert_eq!(
            BlobKey::from_file_name("swa.dra"),
            Some(BlobKey::new(BlobRole::Drainage, "swa"))
        );
        assert_eq!(BlobKey::from_file_name("notes.txt"), None);
        assert_eq!(BlobKey::from_file_name(".crp"), None);
    }

    #[test]
    fn bounds_are_inclusive_and_render_compactly() {
        let bounds = Bounds::between(-1.0e10, 1.0e4);
        assert!(bounds.contains(-1.0e10));
        assert!(bounds.contains(1.0e4));
        assert!(!bounds.contains(1.0e4 + 1.0));
        assert_eq!(bounds.to_string(), "[-1e10..10000]");
        assert_eq!(Bounds::at_least(1.0).to_string(), "[1..]");
        assert!(Bounds::UNBOUNDED.contains(f64::MAX));
    }
}
