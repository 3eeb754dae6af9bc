//! End-to-end checks over the bundled sample dataset through the public API.

use std::path::PathBuf;

use chrono::NaiveDate;
use school_health::health::domain::{RiskCategory, SchoolId, Status, SubDomain};
use school_health::health::{
    aggregate_national, build_risk_register, generate_risk_flags, national_summary,
    write_school_rows_csv, SchoolHealthReport,
};
use school_health::registry::SchoolDataset;

fn sample_dataset() -> SchoolDataset {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/schools.json");
    SchoolDataset::from_path(path).expect("sample dataset loads")
}

fn status_of(dataset: &SchoolDataset, id: &str) -> Status {
    let school = dataset
        .find(&SchoolId(id.to_string()))
        .expect("school present");
    SchoolHealthReport::build(school).status()
}

#[test]
fn sample_schools_cover_every_status() {
    let dataset = sample_dataset();

    assert_eq!(status_of(&dataset, "fgc-enugu"), Status::Green);
    assert_eq!(status_of(&dataset, "fgc-kano"), Status::Amber);
    assert_eq!(status_of(&dataset, "fsc-sokoto"), Status::Red);
    assert_eq!(status_of(&dataset, "fgc-ijanikin"), Status::Red);
}

#[test]
fn national_counts_sum_to_school_total() {
    let dataset = sample_dataset();
    let aggregates = aggregate_national(dataset.schools());

    assert_eq!(aggregates.total_schools, 4);
    assert_eq!(aggregates.total_students, 720 + 960 + 1000 + 640);
    assert_eq!(aggregates.schools_by_status.green, 1);
    assert_eq!(aggregates.schools_by_status.amber, 1);
    assert_eq!(aggregates.schools_by_status.red, 2);

    let as_of = NaiveDate::from_ymd_opt(2025, 9, 1).expect("valid date");
    let summary = national_summary(dataset.schools(), as_of);
    let counted: usize = summary
        .schools_by_status
        .iter()
        .map(|entry| entry.count)
        .sum();
    assert_eq!(counted, summary.total_schools);
}

#[test]
fn amber_school_flags_never_exceed_amber() {
    let dataset = sample_dataset();
    let kano = dataset
        .find(&SchoolId("fgc-kano".to_string()))
        .expect("school present");

    let flags = generate_risk_flags(kano);
    assert!(!flags.is_empty());
    assert!(flags.iter().all(|flag| flag.severity == Status::Amber));
    assert!(flags
        .iter()
        .all(|flag| flag.source != SubDomain::Overcrowding));
}

#[test]
fn missing_computer_labs_land_in_services_register() {
    let dataset = sample_dataset();
    let register = build_risk_register(dataset.schools());

    assert_eq!(register.schools_at_risk, 2);
    let services = register
        .categories
        .iter()
        .find(|group| group.category == RiskCategory::Services)
        .expect("services group");
    let ids: Vec<&str> = services
        .schools
        .iter()
        .map(|school| school.school_id.0.as_str())
        .collect();
    assert_eq!(ids, vec!["fsc-sokoto", "fgc-ijanikin"]);
}

#[test]
fn csv_export_has_one_line_per_school() {
    let dataset = sample_dataset();
    let rows: Vec<_> = dataset
        .schools()
        .iter()
        .map(|school| SchoolHealthReport::build(school).row())
        .collect();

    let mut buffer = Vec::new();
    write_school_rows_csv(&rows, &mut buffer).expect("csv written");
    let output = String::from_utf8(buffer).expect("utf8");

    assert_eq!(output.lines().count(), 1 + dataset.len());
    assert!(output.contains("fgc-kano,Federal Government Girls College Kano,Kano,960,600,amber"));
}
