use super::common::*;
use crate::health::classify::{
    classify_classroom, classify_computer_labs, classify_equipment, classify_facilities,
    classify_hostel, classify_overcrowding, classify_power, classify_school,
    classify_teacher_staffing, classify_utilization, classify_water, combine_worst,
    total_boarding_capacity, SchoolAssessment,
};
use crate::health::domain::{Condition, OperationalStatus, Status, WaterReliability};

#[test]
fn combine_worst_of_nothing_is_green() {
    assert_eq!(combine_worst(Vec::new()), Status::Green);
}

#[test]
fn combine_worst_is_order_independent() {
    let forward = [Status::Green, Status::Amber, Status::Red, Status::Green];
    let mut backward = forward;
    backward.reverse();

    assert_eq!(combine_worst(forward), Status::Red);
    assert_eq!(combine_worst(backward), Status::Red);
    assert_eq!(combine_worst([Status::Green, Status::Amber]), Status::Amber);
    assert_eq!(combine_worst([Status::Green, Status::Green]), Status::Green);
}

#[test]
fn combine_worst_ignores_repeats() {
    assert_eq!(
        combine_worst([Status::Amber, Status::Amber, Status::Green]),
        combine_worst([Status::Amber, Status::Green])
    );
    assert_eq!(
        combine_worst([Status::Red, Status::Red]),
        combine_worst([Status::Red])
    );
}

#[test]
fn hostel_without_beds_is_not_overcrowded() {
    assert_eq!(classify_hostel(&hostel(0, 0)), Status::Green);
    assert_eq!(classify_hostel(&hostel(0, 35)), Status::Green);
}

#[test]
fn hostel_occupancy_thresholds_are_strict() {
    assert_eq!(classify_hostel(&hostel(100, 100)), Status::Green);
    assert_eq!(classify_hostel(&hostel(100, 101)), Status::Amber);
    assert_eq!(classify_hostel(&hostel(100, 120)), Status::Amber);
    assert_eq!(classify_hostel(&hostel(100, 121)), Status::Red);
}

#[test]
fn hostel_condition_and_operation_drive_status() {
    let mut fair = hostel(100, 50);
    fair.condition = Condition::Fair;
    assert_eq!(classify_hostel(&fair), Status::Amber);

    let mut partial = hostel(100, 50);
    partial.operational_status = OperationalStatus::Partial;
    assert_eq!(classify_hostel(&partial), Status::Amber);

    let mut closed = hostel(100, 50);
    closed.operational_status = OperationalStatus::Closed;
    assert_eq!(classify_hostel(&closed), Status::Red);

    let mut poor = hostel(100, 50);
    poor.condition = Condition::Poor;
    assert_eq!(classify_hostel(&poor), Status::Red);
}

#[test]
fn classroom_without_ventilation_needs_attention() {
    let mut stuffy = classroom(40, 30);
    stuffy.ventilation_adequacy = false;
    assert_eq!(classify_classroom(&stuffy), Status::Amber);
    assert_eq!(classify_classroom(&classroom(40, 30)), Status::Green);
    assert_eq!(classify_classroom(&classroom(40, 49)), Status::Red);
    assert_eq!(classify_classroom(&classroom(0, 12)), Status::Green);
}

#[test]
fn classroom_condition_drives_status() {
    let mut poor = classroom(40, 20);
    poor.condition = Condition::Poor;
    assert_eq!(classify_classroom(&poor), Status::Red);

    let mut fair = classroom(40, 20);
    fair.condition = Condition::Fair;
    assert_eq!(classify_classroom(&fair), Status::Amber);
}

#[test]
fn one_constant_source_outweighs_broken_ones() {
    let mut sources = vec![water(true, WaterReliability::Constant)];
    sources.extend((0..9).map(|_| water(false, WaterReliability::None)));

    assert_eq!(classify_water(&sources), Status::Green);
}

#[test]
fn water_tiers_only_count_functional_sources() {
    assert_eq!(classify_water(&[]), Status::Red);
    assert_eq!(
        classify_water(&[water(false, WaterReliability::Constant)]),
        Status::Red
    );
    assert_eq!(
        classify_water(&[water(true, WaterReliability::None)]),
        Status::Red
    );
    assert_eq!(
        classify_water(&[
            water(false, WaterReliability::Constant),
            water(true, WaterReliability::Intermittent),
        ]),
        Status::Amber
    );
}

#[test]
fn six_hours_without_backup_is_amber_not_red() {
    assert_eq!(classify_power(&[power(6.0, false)]), Status::Amber);
    assert_eq!(classify_power(&[power(5.9, false)]), Status::Red);
    assert_eq!(classify_power(&[power(5.0, true)]), Status::Amber);
    assert_eq!(classify_power(&[power(12.0, false)]), Status::Amber);
    assert_eq!(classify_power(&[power(12.0, true)]), Status::Green);
}

#[test]
fn power_uses_best_operational_source() {
    let mut offline = power(24.0, true);
    offline.operational_status = false;

    assert_eq!(classify_power(&[]), Status::Red);
    assert_eq!(classify_power(&[offline.clone()]), Status::Red);
    assert_eq!(
        classify_power(&[power(4.0, false), offline, power(13.0, true)]),
        Status::Green
    );
}

#[test]
fn earliest_source_wins_power_ties() {
    assert_eq!(
        classify_power(&[power(13.0, true), power(13.0, false)]),
        Status::Green
    );
    assert_eq!(
        classify_power(&[power(13.0, false), power(13.0, true)]),
        Status::Amber
    );
}

#[test]
fn well_staffed_but_underqualified_school_is_red() {
    assert_eq!(classify_teacher_staffing(&teachers(40, 22), 1000), Status::Red);
}

#[test]
fn staffing_ratio_and_qualification_bands() {
    assert_eq!(classify_teacher_staffing(&teachers(20, 20), 600), Status::Green);
    assert_eq!(classify_teacher_staffing(&teachers(20, 20), 620), Status::Amber);
    assert_eq!(classify_teacher_staffing(&teachers(20, 20), 720), Status::Red);
    assert_eq!(classify_teacher_staffing(&teachers(20, 14), 400), Status::Amber);
    assert_eq!(classify_teacher_staffing(&teachers(0, 0), 0), Status::Red);
}

#[test]
fn equipment_bands() {
    assert_eq!(classify_equipment(&[]), Status::Red);
    assert_eq!(
        classify_equipment(&[equipment(10, 7, Condition::Good)]),
        Status::Amber
    );
    assert_eq!(
        classify_equipment(&[equipment(10, 5, Condition::Good)]),
        Status::Red
    );

    let mostly_poor = vec![
        equipment(10, 10, Condition::Poor),
        equipment(10, 10, Condition::Poor),
        equipment(10, 10, Condition::Good),
    ];
    assert_eq!(classify_equipment(&mostly_poor), Status::Red);

    let some_poor = vec![
        equipment(10, 10, Condition::Poor),
        equipment(10, 10, Condition::Poor),
        equipment(10, 10, Condition::Good),
        equipment(10, 10, Condition::Good),
        equipment(10, 10, Condition::Good),
    ];
    assert_eq!(classify_equipment(&some_poor), Status::Amber);

    let half_poor = vec![
        equipment(10, 10, Condition::Poor),
        equipment(10, 10, Condition::Good),
    ];
    assert_eq!(classify_equipment(&half_poor), Status::Amber);
}

#[test]
fn computer_lab_bands() {
    assert_eq!(classify_computer_labs(&[]), Status::Red);
    assert_eq!(
        classify_computer_labs(&[computer_lab(20, 20, OperationalStatus::Closed)]),
        Status::Red
    );
    assert_eq!(
        classify_computer_labs(&[computer_lab(20, 20, OperationalStatus::Partial)]),
        Status::Amber
    );
    assert_eq!(
        classify_computer_labs(&[computer_lab(20, 14, OperationalStatus::Functional)]),
        Status::Amber
    );
    assert_eq!(
        classify_computer_labs(&[computer_lab(20, 9, OperationalStatus::Functional)]),
        Status::Red
    );
}

#[test]
fn poor_lab_is_red_even_with_every_computer_working() {
    let mut poor = computer_lab(20, 20, OperationalStatus::Functional);
    poor.condition = Condition::Poor;
    let healthy = computer_lab(20, 20, OperationalStatus::Functional);

    assert_eq!(classify_computer_labs(&[healthy, poor]), Status::Red);
}

#[test]
fn missing_facilities_need_attention_only() {
    assert_eq!(classify_facilities(&[]), Status::Amber);
}

#[test]
fn facility_closure_shares() {
    let functional = || facility(Condition::Good, OperationalStatus::Functional);
    let closed = || facility(Condition::Good, OperationalStatus::Closed);

    let two_of_five = vec![closed(), closed(), functional(), functional(), functional()];
    assert_eq!(classify_facilities(&two_of_five), Status::Amber);

    let three_of_five = vec![closed(), closed(), closed(), functional(), functional()];
    assert_eq!(classify_facilities(&three_of_five), Status::Red);

    let one_partial = vec![
        functional(),
        facility(Condition::Good, OperationalStatus::Partial),
    ];
    assert_eq!(classify_facilities(&one_partial), Status::Amber);
}

#[test]
fn facility_poor_condition_shares() {
    let good = || facility(Condition::Good, OperationalStatus::Functional);
    let poor = || facility(Condition::Poor, OperationalStatus::Functional);

    let one_of_four = vec![poor(), good(), good(), good()];
    assert_eq!(classify_facilities(&one_of_four), Status::Green);

    let one_of_three = vec![poor(), good(), good()];
    assert_eq!(classify_facilities(&one_of_three), Status::Amber);

    let two_of_four = vec![poor(), poor(), good(), good()];
    assert_eq!(classify_facilities(&two_of_four), Status::Amber);

    let two_of_three = vec![poor(), poor(), good()];
    assert_eq!(classify_facilities(&two_of_three), Status::Red);
}

#[test]
fn aggregate_occupancy_can_disagree_with_hostels() {
    let hostels = vec![hostel(100, 130), hostel(100, 100)];
    assert_eq!(classify_hostel(&hostels[0]), Status::Red);
    assert_eq!(classify_overcrowding(&hostels), Status::Amber);

    let annex = vec![hostel(0, 50), hostel(100, 100)];
    assert!(annex.iter().all(|h| classify_hostel(h) == Status::Green));
    assert_eq!(classify_overcrowding(&annex), Status::Red);
}

#[test]
fn aggregate_occupancy_matches_school_utilization() {
    let mut school = healthy_school();
    for hostels in [
        vec![hostel(100, 90)],
        vec![hostel(100, 130), hostel(100, 100)],
        vec![hostel(0, 50), hostel(100, 100)],
        Vec::new(),
    ] {
        school.hostels = hostels;
        assert_eq!(
            classify_overcrowding(&school.hostels),
            classify_utilization(school.boarding_utilization_pct())
        );
    }
}

#[test]
fn boarding_capacity_sums_past_u32() {
    let mut school = healthy_school();
    school.hostels = vec![hostel(u32::MAX, 0), hostel(u32::MAX, 0)];

    assert_eq!(total_boarding_capacity(&school), 2 * u64::from(u32::MAX));
}

#[test]
fn healthy_school_is_green_everywhere() {
    let school = healthy_school();
    let assessment = SchoolAssessment::assess(&school);

    assert_eq!(assessment.hostel_status(), Status::Green);
    assert_eq!(assessment.classroom_status(), Status::Green);
    assert_eq!(assessment.overall(), Status::Green);
    assert_eq!(total_boarding_capacity(&school), 100);
}

#[test]
fn one_closed_hostel_turns_the_school_red() {
    let mut school = healthy_school();
    school.hostels = (0..10).map(|_| hostel(100, 80)).collect();
    school.hostels[7].operational_status = OperationalStatus::Closed;

    let assessment = SchoolAssessment::assess(&school);
    assert_eq!(assessment.hostels.len(), 10);
    assert_eq!(assessment.hostel_status(), Status::Red);
    assert_eq!(classify_school(&school), Status::Red);
}

#[test]
fn school_status_is_worst_domain() {
    let mut school = healthy_school();
    school.facilities.clear();
    assert_eq!(classify_school(&school), Status::Amber);

    school.water_sources.clear();
    assert_eq!(classify_school(&school), Status::Red);
}
