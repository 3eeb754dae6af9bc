mod rules;

pub use rules::{
    best_power_source, classify_classroom, classify_computer_labs, classify_equipment,
    classify_facilities, classify_hostel, classify_power, classify_teacher_staffing,
    classify_utilization, classify_water, computer_lab_figures, equipment_figures,
    facility_figures, staffing_figures, ComputerLabFigures, EquipmentFigures, FacilityFigures,
    StaffingFigures,
};

use super::domain::{boarding_utilization_pct, Hostel, School, Status};
use serde::Serialize;

/// Red if any status is Red, else Amber if any is Amber, else Green.
///
/// An empty sequence is Green.
pub fn combine_worst<I>(statuses: I) -> Status
where
    I: IntoIterator<Item = Status>,
{
    statuses.into_iter().max().unwrap_or(Status::Green)
}

/// School-wide occupancy check over summed beds and occupants.
///
/// Runs in addition to each hostel's own occupancy check; the two can
/// disagree because they use different denominators.
pub fn classify_overcrowding(hostels: &[Hostel]) -> Status {
    classify_utilization(boarding_utilization_pct(hostels))
}

/// Sum of hostel beds.
pub fn total_boarding_capacity(school: &School) -> u64 {
    school.total_beds()
}

/// Every classifier output for one school, computed once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchoolAssessment {
    pub hostels: Vec<Status>,
    pub classrooms: Vec<Status>,
    pub water: Status,
    pub power: Status,
    pub overcrowding: Status,
    pub teacher_staffing: Status,
    pub equipment: Status,
    pub computer_labs: Status,
    pub facilities: Status,
}

impl SchoolAssessment {
    pub fn assess(school: &School) -> Self {
        Self {
            hostels: school.hostels.iter().map(classify_hostel).collect(),
            classrooms: school.classrooms.iter().map(classify_classroom).collect(),
            water: classify_water(&school.water_sources),
            power: classify_power(&school.power_sources),
            overcrowding: classify_overcrowding(&school.hostels),
            teacher_staffing: classify_teacher_staffing(
                &school.teacher_summary,
                school.total_students,
            ),
            equipment: classify_equipment(&school.equipment),
            computer_labs: classify_computer_labs(&school.computer_labs),
            facilities: classify_facilities(&school.facilities),
        }
    }

    pub fn hostel_status(&self) -> Status {
        combine_worst(self.hostels.iter().copied())
    }

    pub fn classroom_status(&self) -> Status {
        combine_worst(self.classrooms.iter().copied())
    }

    pub fn overall(&self) -> Status {
        let domains = [
            self.water,
            self.power,
            self.teacher_staffing,
            self.equipment,
            self.computer_labs,
            self.facilities,
            self.overcrowding,
        ];

        combine_worst(
            self.hostels
                .iter()
                .chain(self.classrooms.iter())
                .copied()
                .chain(domains),
        )
    }
}

pub fn classify_school(school: &School) -> Status {
    SchoolAssessment::assess(school).overall()
}
