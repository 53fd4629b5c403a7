use super::SwapModel;
use crate::domain::{BlobRole, SectionKind, SwapError, SwapResult};
use crate::section::Section;

const THICKNESS_TOLERANCE: f64 = 1.0e-6;

fn violation(rule: &'static str, section: SectionKind, field: &str, message: String) -> SwapError {
    SwapError::Invariant {
        rule,
        section: section.key().to_string(),
        field: field.to_string(),
        message,
    }
}

pub(super) fn check_model(model: &SwapModel) -> SwapResult<()> {
    crop_rotation_within_simulation_period(model)?;
    crop_type_matches_development_settings(model)?;
    anisotropy_factors_match_soil_layers(model)?;
    heat_textures_match_soil_layers(model)?;
    output_discretisation_matches_profile(model)
}

/// Number of soil layers in the profile table, zero when absent.
fn soil_layers(model: &SwapModel) -> usize {
    model
        .section(SectionKind::SoilProfile)
        .and_then(|section| section.table("soilprofile"))
        .and_then(|table| table.ints("ISOILLAY").into_iter().max())
        .and_then(|layers| usize::try_from(layers).ok())
        .unwrap_or_default()
}

fn crop_rotation_within_simulation_period(model: &SwapModel) -> SwapResult<()> {
    let (Some(settings), Some(rotation)) = (
        model.section(SectionKind::GeneralSettings),
        model
            .section(SectionKind::Crop)
            .and_then(|crop| crop.table("croprotation")),
    ) else {
        return Ok(());
    };
    let (Some(start), Some(end)) = (settings.date("tstart"), settings.date("tend")) else {
        return Ok(());
    };
    let crops = rotation
        .dates("CROPSTART")
        .into_iter()
        .zip(rotation.dates("CROPEND"));
    for (index, (crop_start, crop_end)) in crops.enumerate() {
        if crop_start < start || crop_end > end {
            return Err(violation(
                "crop_rotation_within_simulation_period",
                SectionKind::Crop,
                "croprotation",
                format!(
                    "row {}: crop from {crop_start} to {crop_end} falls outside the simulation period {start} to {end}",
                    index + 1
                ),
            ));
        }
    }
    Ok(())
}

fn crop_type_matches_development_settings(model: &SwapModel) -> SwapResult<()> {
    let Some(rotation) = model
        .section(SectionKind::Crop)
        .and_then(|crop| crop.table("croprotation"))
    else {
        return Ok(());
    };
    let crops = rotation
        .texts("CROPFIL")
        .into_iter()
        .zip(rotation.ints("CROPTYPE"));
    for (index, (name, crop_type)) in crops.enumerate() {
        let Some(file) = model.satellite(BlobRole::Crop, name) else {
            continue;
        };
        let expected = if crop_type == 1 {
            SectionKind::CropDevelopmentFixed
        } else {
            SectionKind::CropDevelopmentWofost
        };
        if file.section(expected).is_none() {
            return Err(violation(
                "crop_type_matches_development_settings",
                SectionKind::Crop,
                "croprotation",
                format!(
                    "row {}: CROPTYPE {crop_type} needs {expected} in {}",
                    index + 1,
                    file.key()
                ),
            ));
        }
    }
    Ok(())
}

fn anisotropy_factors_match_soil_layers(model: &SwapModel) -> SwapResult<()> {
    let layers = soil_layers(model);
    for satellite in model.satellites() {
        let Some(drainage) = satellite.section(SectionKind::DrainageFile) else {
            continue;
        };
        if drainage.int("swdivd") != Some(1) {
            continue;
        }
        let factors = drainage.floats("cofani").map(<[f64]>::len).unwrap_or_default();
        if factors != layers {
            return Err(violation(
                "anisotropy_factors_match_soil_layers",
                SectionKind::DrainageFile,
                "cofani",
                format!(
                    "{} lists {factors} anisotropy factors for {layers} soil layers",
                    satellite.key()
                ),
            ));
        }
    }
    Ok(())
}

fn heat_textures_match_soil_layers(model: &SwapModel) -> SwapResult<()> {
    let Some(heat) = model.section(SectionKind::HeatFlow) else {
        return Ok(());
    };
    if heat.int("swcalt") != Some(2) {
        return Ok(());
    }
    let layers = soil_layers(model);
    let textures = heat
        .table("soiltextures")
        .map(|table| table.len())
        .unwrap_or_default();
    if textures != layers {
        return Err(violation(
            "heat_textures_match_soil_layers",
            SectionKind::HeatFlow,
            "soiltextures",
            format!("{textures} texture rows given for {layers} soil layers"),
        ));
    }
    Ok(())
}

fn profile_depth(section: &Section) -> f64 {
    section
        .table("soilprofile")
        .map(|table| table.floats("HSUBLAY").iter().sum())
        .unwrap_or_default()
}

fn output_discretisation_matches_profile(model: &SwapModel) -> SwapResult<()> {
    let (Some(settings), Some(profile)) = (
        model.section(SectionKind::GeneralSettings),
        model.section(SectionKind::SoilProfile),
    ) else {
        return Ok(());
    };
    if settings.int("swdiscrvert") != Some(1) {
        return Ok(());
    }
    let output: f64 = settings.floats("dznew").unwrap_or_default().iter().sum();
    let depth = profile_depth(profile);
    if (output - depth).abs() > THICKNESS_TOLERANCE * depth.abs().max(1.0) {
        return Err(violation(
            "output_discretisation_matches_profile",
            SectionKind::GeneralSettings,
            "dznew",
            format!("DZNEW sums to {output} cm but the soil profile is {depth} cm deep"),
        ));
    }
    Ok(())
}
