use super::Section;
use crate::domain::{SectionKind, SwapError, SwapResult};

/// Relative tolerance for comparing layer thicknesses.
const THICKNESS_TOLERANCE: f64 = 1.0e-6;

fn violation(rule: &'static str, section: &Section, field: &str, message: String) -> SwapError {
    SwapError::Invariant {
        rule,
        section: section.kind().key().to_string(),
        field: field.to_string(),
        message,
    }
}

pub(super) fn check_section(section: &Section) -> SwapResult<()> {
    match section.kind() {
        SectionKind::GeneralSettings => {
            simulation_period_ordered(section)?;
            new_discretisation_count(section)
        }
        SectionKind::Richards => time_step_bounds_ordered(section),
        SectionKind::SoilProfile => {
            sublayers_sequential(section)?;
            compartments_fill_sublayers(section)?;
            hydraulic_functions_per_layer(section)
        }
        SectionKind::Crop => crop_rotation_ordered(section),
        SectionKind::DrainageFile => drainage_levels_within_nrlevs(section),
        _ => Ok(()),
    }
}

fn simulation_period_ordered(section: &Section) -> SwapResult<()> {
    if let (Some(start), Some(end)) = (section.date("tstart"), section.date("tend"))
        && start >= end
    {
        return Err(violation(
            "simulation_period_ordered",
            section,
            "tend",
            format!("TEND {end} must be after TSTART {start}"),
        ));
    }
    Ok(())
}

fn new_discretisation_count(section: &Section) -> SwapResult<()> {
    if let (Some(count), Some(thicknesses)) = (section.int("numnodnew"), section.floats("dznew"))
        && usize::try_from(count).ok() != Some(thicknesses.len())
    {
        return Err(violation(
            "new_discretisation_count",
            section,
            "dznew",
            format!(
                "NUMNODNEW is {count} but DZNEW lists {} thicknesses",
                thicknesses.len()
            ),
        ));
    }
    Ok(())
}

fn time_step_bounds_ordered(section: &Section) -> SwapResult<()> {
    if let (Some(minimum), Some(maximum)) = (section.float("dtmin"), section.float("dtmax"))
        && minimum > maximum
    {
        return Err(violation(
            "time_step_bounds_ordered",
            section,
            "dtmax",
            format!("DTMIN {minimum} exceeds DTMAX {maximum}"),
        ));
    }
    Ok(())
}

fn sublayers_sequential(section: &Section) -> SwapResult<()> {
    let Some(profile) = section.table("soilprofile") else {
        return Ok(());
    };
    for (index, sublayer) in profile.ints("ISUBLAY").into_iter().enumerate() {
        let expected = index as i64 + 1;
        if sublayer != expected {
            return Err(violation(
                "sublayers_sequential",
                section,
                "soilprofile",
                format!("ISUBLAY in row {expected} is {sublayer}, expected {expected}"),
            ));
        }
    }

    let layers = profile.ints("ISOILLAY");
    if let Some(position) = layers.windows(2).position(|pair| pair[1] < pair[0] || pair[1] > pair[0] + 1) {
        return Err(violation(
            "sublayers_sequential",
            section,
            "soilprofile",
            format!(
                "ISOILLAY jumps from {} to {} in row {}",
                layers[position],
                layers[position + 1],
                position + 2
            ),
        ));
    }
    if layers.first().is_some_and(|first| *first != 1) {
        return Err(violation(
            "sublayers_sequential",
            section,
            "soilprofile",
            "ISOILLAY must start at 1".to_string(),
        ));
    }
    Ok(())
}

fn compartments_fill_sublayers(section: &Section) -> SwapResult<()> {
    let Some(profile) = section.table("soilprofile") else {
        return Ok(());
    };
    let thicknesses = profile.floats("HSUBLAY");
    let compartments = profile.floats("HCOMP");
    let counts = profile.ints("NCOMP");
    for (index, ((thickness, compartment), count)) in thicknesses
        .iter()
        .zip(&compartments)
        .zip(&counts)
        .enumerate()
    {
        let filled = compartment * *count as f64;
        if (filled - thickness).abs() > THICKNESS_TOLERANCE * thickness.abs().max(1.0) {
            return Err(violation(
                "compartments_fill_sublayers",
                section,
                "soilprofile",
                format!(
                    "row {}: HCOMP {compartment} x NCOMP {count} = {filled} differs from HSUBLAY {thickness}",
                    index + 1
                ),
            ));
        }
    }
    Ok(())
}

fn hydraulic_functions_per_layer(section: &Section) -> SwapResult<()> {
    let (Some(profile), Some(functions)) = (section.table("soilprofile"), section.table("soilhydrfunc"))
    else {
        return Ok(());
    };
    let layers = profile.ints("ISOILLAY").into_iter().max().unwrap_or_default();
    if usize::try_from(layers).ok() != Some(functions.len()) {
        return Err(violation(
            "hydraulic_functions_per_layer",
            section,
            "soilhydrfunc",
            format!(
                "{} rows given for {layers} soil layers",
                functions.len()
            ),
        ));
    }
    Ok(())
}

fn crop_rotation_ordered(section: &Section) -> SwapResult<()> {
    let Some(rotation) = section.table("croprotation") else {
        return Ok(());
    };
    let starts = rotation.dates("CROPSTART");
    let ends = rotation.dates("CROPEND");
    let mut previous_end = None;
    for (index, (start, end)) in starts.iter().zip(&ends).enumerate() {
        if start >= end {
            return Err(violation(
                "crop_rotation_ordered",
                section,
                "croprotation",
                format!("row {}: CROPSTART {start} is not before CROPEND {end}", index + 1),
            ));
        }
        if let Some(previous) = previous_end
            && start <= previous
        {
            return Err(violation(
                "crop_rotation_ordered",
                section,
                "croprotation",
                format!(
                    "row {}: CROPSTART {start} overlaps the previous crop ending {previous}",
                    index + 1
                ),
            ));
        }
        previous_end = Some(end);
    }
    Ok(())
}

fn drainage_levels_within_nrlevs(section: &Section) -> SwapResult<()> {
    let (Some(levels), Some(table)) = (section.int("nrlevs"), section.table("drntb")) else {
        return Ok(());
    };
    let mut seen = Vec::new();
    for level in table.ints("LEVEL") {
        if level > levels || seen.contains(&level) {
            return Err(violation(
                "drainage_levels_within_nrlevs",
                section,
                "drntb",
                format!("LEVEL {level} is repeated or exceeds NRLEVS {levels}"),
            ));
        }
        seen.push(level);
    }
    Ok(())
}
