mod common;

use common::*;
use swap_core::render::RULE_WIDTH;
use swap_core::{parse, parse_blob, render, BlobKey, BlobRole, SectionKind, SwapError};

/// Drops the banner rules, leaving a flat file in the old hand written style.
fn without_banners(text: &str) -> String {
    let rule = "*".repeat(RULE_WIDTH);
    text.lines()
        .filter(|line| *line != rule)
        .map(|line| format!("{line}\n"))
        .collect()
}

const DRAINAGE: &str = "\
**********************************************************************************
* Filename: swa.dra
* Contents: SWAP 4 - Lateral drainage, flux table
**********
* Method
  DRAMET = 1          ! 1 = table of drainage flux - groundwater level relation
  SWDIVD = 0          ! no division over the soil layers
  LM1 = 100.0d0       ! drain spacing [m]

* Table with drainage flux - groundwater level relation
  QDRAIN     GWL
   0.0     -200.0
   1.0d0      0.0
* End of table
";

#[test]
fn flat_files_parse_to_the_same_model() {
    let model = hupsel();
    let legacy: std::collections::BTreeMap<BlobKey, String> = render(&model)
        .into_iter()
        .map(|(key, text)| (key, without_banners(&text)))
        .collect();
    assert!(!legacy[&BlobKey::main()].contains(&"*".repeat(RULE_WIDTH)));

    let parsed = parse(&legacy).expect("flat files parse");
    assert_eq!(parsed, model);
    assert_eq!(render(&parsed), render(&model));
}

#[test]
fn hand_written_drainage_file_matches_the_built_one() {
    let key = BlobKey::new(BlobRole::Drainage, DRAINAGE_FILE);
    let sections = parse_blob(&key, DRAINAGE).expect("legacy drainage file");
    assert_eq!(sections, vec![drainage_section(0)]);
    assert_eq!(sections[0].float("lm1"), Some(100.0));
}

#[test]
fn keys_no_section_declares_are_rejected_with_their_line() {
    let text = DRAINAGE.replace("  SWDIVD = 0", "  SWDIVD = 0\n  DRAINS = 2");
    let key = BlobKey::new(BlobRole::Drainage, DRAINAGE_FILE);
    let error = parse_blob(&key, &text).expect_err("DRAINS is not a drainage key");
    match &error {
        SwapError::StructuralParse { blob, line, message } => {
            assert_eq!(blob, "swa.dra");
            assert_eq!(*line, 8);
            assert!(message.contains("DRAINS"), "{message}");
        }
        other => panic!("expected a structural error, got {other}"),
    }
}

#[test]
fn flat_values_out_of_range_keep_their_line() {
    let text = DRAINAGE.replace("LM1 = 100.0d0", "LM1 = 2.0d3");
    let key = BlobKey::new(BlobRole::Drainage, DRAINAGE_FILE);
    let error = parse_blob(&key, &text).expect_err("drain spacing above 1000 m");
    assert_eq!(error.line(), Some(8));
    assert_eq!(error.field(), Some("lm1"));
    assert!(error.to_string().starts_with("swa.dra line 8: drainage_file: lm1"));
}

#[test]
fn flat_crop_file_selects_its_development_section() {
    let model = hupsel();
    let key = BlobKey::new(BlobRole::Crop, CROP_FILE);
    let flat = without_banners(&render(&model)[&key]);

    let sections = parse_blob(&key, &flat).expect("flat crop file");
    let kinds: Vec<SectionKind> = sections.iter().map(|section| section.kind()).collect();
    assert!(kinds.contains(&SectionKind::CropDevelopmentFixed));
    assert!(!kinds.contains(&SectionKind::CropDevelopmentWofost));
    assert_eq!(
        Some(sections.as_slice()),
        model.satellite(BlobRole::Crop, CROP_FILE).map(|file| file.sections())
    );
}
