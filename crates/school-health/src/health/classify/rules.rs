use super::super::domain::{
    percentage, Classroom, ComputerLab, Condition, Equipment, Facility, Hostel, OperationalStatus,
    PowerSource, Status, TeacherSummary, WaterReliability, WaterSource,
};
use serde::Serialize;

const OCCUPANCY_RED_PCT: f64 = 120.0;
const OCCUPANCY_AMBER_PCT: f64 = 100.0;

const POWER_RED_HOURS: f64 = 6.0;
const POWER_AMBER_HOURS: f64 = 12.0;

const STUDENTS_PER_TEACHER_RED: f64 = 35.0;
const STUDENTS_PER_TEACHER_AMBER: f64 = 30.0;
const QUALIFIED_RED_PCT: f64 = 60.0;
const QUALIFIED_AMBER_PCT: f64 = 75.0;

const EQUIPMENT_FUNCTIONAL_RED_PCT: f64 = 60.0;
const EQUIPMENT_FUNCTIONAL_AMBER_PCT: f64 = 80.0;
const EQUIPMENT_POOR_RED_PCT: f64 = 50.0;
const EQUIPMENT_POOR_AMBER_PCT: f64 = 30.0;

const COMPUTERS_FUNCTIONAL_RED_PCT: f64 = 50.0;
const COMPUTERS_FUNCTIONAL_AMBER_PCT: f64 = 75.0;

const FACILITIES_CLOSED_RED_PCT: f64 = 40.0;
const FACILITIES_CLOSED_AMBER_PCT: f64 = 20.0;
const FACILITIES_POOR_RED_PCT: f64 = 50.0;
const FACILITIES_POOR_AMBER_PCT: f64 = 30.0;

/// Shared occupancy bands for a single hostel and for the school-wide total.
pub fn classify_utilization(utilization_pct: f64) -> Status {
    if utilization_pct > OCCUPANCY_RED_PCT {
        Status::Red
    } else if utilization_pct > OCCUPANCY_AMBER_PCT {
        Status::Amber
    } else {
        Status::Green
    }
}

pub fn classify_hostel(hostel: &Hostel) -> Status {
    let utilization = hostel.occupancy_pct();

    if hostel.condition == Condition::Poor
        || utilization > OCCUPANCY_RED_PCT
        || hostel.operational_status == OperationalStatus::Closed
    {
        return Status::Red;
    }

    if hostel.condition == Condition::Fair
        || utilization > OCCUPANCY_AMBER_PCT
        || hostel.operational_status == OperationalStatus::Partial
    {
        return Status::Amber;
    }

    Status::Green
}

pub fn classify_classroom(classroom: &Classroom) -> Status {
    let load = classroom.load_pct();

    if load > OCCUPANCY_RED_PCT || classroom.condition == Condition::Poor {
        return Status::Red;
    }

    if load > OCCUPANCY_AMBER_PCT
        || classroom.condition == Condition::Fair
        || !classroom.ventilation_adequacy
    {
        return Status::Amber;
    }

    Status::Green
}

/// Only functional sources count towards the reliability tiers.
pub fn classify_water(sources: &[WaterSource]) -> Status {
    let mut functional = sources.iter().filter(|source| source.functional_status).peekable();
    if functional.peek().is_none() {
        return Status::Red;
    }

    let mut has_intermittent = false;
    for source in functional {
        match source.reliability {
            WaterReliability::Constant => return Status::Green,
            WaterReliability::Intermittent => has_intermittent = true,
            WaterReliability::None => {}
        }
    }

    if has_intermittent {
        Status::Amber
    } else {
        Status::Red
    }
}

/// Operational source with the most hours per day; the earliest listed wins ties.
pub fn best_power_source(sources: &[PowerSource]) -> Option<&PowerSource> {
    sources
        .iter()
        .filter(|source| source.operational_status)
        .reduce(|best, current| {
            if current.average_hours_per_day > best.average_hours_per_day {
                current
            } else {
                best
            }
        })
}

pub fn classify_power(sources: &[PowerSource]) -> Status {
    let Some(best) = best_power_source(sources) else {
        return Status::Red;
    };

    if best.average_hours_per_day < POWER_RED_HOURS && !best.backup_available {
        return Status::Red;
    }

    if best.average_hours_per_day < POWER_AMBER_HOURS || !best.backup_available {
        return Status::Amber;
    }

    Status::Green
}

/// Staffing ratios with zero teachers reported as 0 rather than infinite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StaffingFigures {
    pub students_per_teacher: f64,
    pub qualified_pct: f64,
}

pub fn staffing_figures(summary: &TeacherSummary, total_students: u32) -> StaffingFigures {
    let students_per_teacher = if summary.total == 0 {
        0.0
    } else {
        f64::from(total_students) / f64::from(summary.total)
    };

    StaffingFigures {
        students_per_teacher,
        qualified_pct: percentage(summary.qualified.into(), summary.total.into()),
    }
}

pub fn classify_teacher_staffing(summary: &TeacherSummary, total_students: u32) -> Status {
    let figures = staffing_figures(summary, total_students);

    if figures.students_per_teacher > STUDENTS_PER_TEACHER_RED
        || figures.qualified_pct < QUALIFIED_RED_PCT
    {
        return Status::Red;
    }

    if figures.students_per_teacher > STUDENTS_PER_TEACHER_AMBER
        || figures.qualified_pct < QUALIFIED_AMBER_PCT
    {
        return Status::Amber;
    }

    Status::Green
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EquipmentFigures {
    pub rows: usize,
    pub total_items: u64,
    pub functional_items: u64,
    pub functional_pct: f64,
    pub poor_rows: usize,
    pub poor_pct: f64,
}

pub fn equipment_figures(equipment: &[Equipment]) -> EquipmentFigures {
    let total_items = equipment.iter().map(|row| u64::from(row.total_count)).sum();
    let functional_items = equipment
        .iter()
        .map(|row| u64::from(row.functional_count))
        .sum();
    let poor_rows = equipment
        .iter()
        .filter(|row| row.condition == Condition::Poor)
        .count();

    EquipmentFigures {
        rows: equipment.len(),
        total_items,
        functional_items,
        functional_pct: percentage(functional_items, total_items),
        poor_rows,
        poor_pct: percentage(poor_rows as u64, equipment.len() as u64),
    }
}

pub fn classify_equipment(equipment: &[Equipment]) -> Status {
    if equipment.is_empty() {
        return Status::Red;
    }

    let figures = equipment_figures(equipment);

    if figures.functional_pct < EQUIPMENT_FUNCTIONAL_RED_PCT
        || figures.poor_pct > EQUIPMENT_POOR_RED_PCT
    {
        return Status::Red;
    }

    if figures.functional_pct < EQUIPMENT_FUNCTIONAL_AMBER_PCT
        || figures.poor_pct > EQUIPMENT_POOR_AMBER_PCT
    {
        return Status::Amber;
    }

    Status::Green
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComputerLabFigures {
    pub labs: usize,
    pub total_computers: u64,
    pub functional_computers: u64,
    pub functional_pct: f64,
}

pub fn computer_lab_figures(labs: &[ComputerLab]) -> ComputerLabFigures {
    let total_computers = labs.iter().map(|lab| u64::from(lab.total_computers)).sum();
    let functional_computers = labs
        .iter()
        .map(|lab| u64::from(lab.functional_computers))
        .sum();

    ComputerLabFigures {
        labs: labs.len(),
        total_computers,
        functional_computers,
        functional_pct: percentage(functional_computers, total_computers),
    }
}

pub fn classify_computer_labs(labs: &[ComputerLab]) -> Status {
    if labs.is_empty() {
        return Status::Red;
    }

    let figures = computer_lab_figures(labs);
    let any_poor = labs.iter().any(|lab| lab.condition == Condition::Poor);
    let any_closed = labs
        .iter()
        .any(|lab| lab.operational_status == OperationalStatus::Closed);

    if figures.functional_pct < COMPUTERS_FUNCTIONAL_RED_PCT || any_poor || any_closed {
        return Status::Red;
    }

    let any_partial = labs
        .iter()
        .any(|lab| lab.operational_status == OperationalStatus::Partial);

    if figures.functional_pct < COMPUTERS_FUNCTIONAL_AMBER_PCT || any_partial {
        return Status::Amber;
    }

    Status::Green
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FacilityFigures {
    pub facilities: usize,
    pub closed: usize,
    pub partial: usize,
    pub poor: usize,
    pub closed_pct: f64,
    pub poor_pct: f64,
}

pub fn facility_figures(facilities: &[Facility]) -> FacilityFigures {
    let count_status = |status: OperationalStatus| {
        facilities
            .iter()
            .filter(|facility| facility.operational_status == status)
            .count()
    };
    let closed = count_status(OperationalStatus::Closed);
    let partial = count_status(OperationalStatus::Partial);
    let poor = facilities
        .iter()
        .filter(|facility| facility.condition == Condition::Poor)
        .count();
    let total = facilities.len() as u64;

    FacilityFigures {
        facilities: facilities.len(),
        closed,
        partial,
        poor,
        closed_pct: percentage(closed as u64, total),
        poor_pct: percentage(poor as u64, total),
    }
}

/// An empty facility list is Amber, not Red.
pub fn classify_facilities(facilities: &[Facility]) -> Status {
    if facilities.is_empty() {
        return Status::Amber;
    }

    let figures = facility_figures(facilities);

    if figures.closed_pct > FACILITIES_CLOSED_RED_PCT || figures.poor_pct > FACILITIES_POOR_RED_PCT
    {
        return Status::Red;
    }

    if figures.closed_pct > FACILITIES_CLOSED_AMBER_PCT
        || figures.poor_pct > FACILITIES_POOR_AMBER_PCT
        || figures.partial > 0
    {
        return Status::Amber;
    }

    Status::Green
}
