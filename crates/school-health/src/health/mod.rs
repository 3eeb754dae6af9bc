//! Facility health classification for boarding schools.
//!
//! Everything under this module is a pure function of its inputs: raw
//! records are classified per sub-domain, collapsed with the worst-status
//! rule, turned into risk flags, and rolled up nationally.

pub mod classify;
pub mod domain;
pub mod flags;
pub mod national;
pub mod report;

#[cfg(test)]
pub(crate) mod tests;

pub use classify::{
    classify_classroom, classify_computer_labs, classify_equipment, classify_facilities,
    classify_hostel, classify_overcrowding, classify_power, classify_school,
    classify_teacher_staffing, classify_water, combine_worst, total_boarding_capacity,
    SchoolAssessment,
};
pub use domain::{
    Classroom, ComputerLab, Condition, Equipment, EquipmentCategory, Facility, FacilityType,
    Hostel, OperationalStatus, PowerSource, RiskCategory, School, SchoolId, Status, SubDomain,
    TeacherSummary, WaterReliability, WaterSource,
};
pub use flags::{generate_risk_flags, RiskFigures, RiskFlag};
pub use national::{aggregate_national, NationalAggregates, StatusCounts};
pub use report::{
    build_risk_register, national_summary, write_school_rows_csv, SchoolHealthReport,
};
