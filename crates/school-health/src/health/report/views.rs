use super::super::classify::{ComputerLabFigures, EquipmentFigures, FacilityFigures};
use super::super::domain::{RiskCategory, SchoolId, Status, SubDomain};
use super::super::flags::{RiskFigures, RiskFlag};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RiskFlagView {
    pub category: RiskCategory,
    pub category_label: &'static str,
    pub source: SubDomain,
    pub severity: Status,
    pub severity_label: &'static str,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub figures: Option<RiskFigures>,
}

impl From<&RiskFlag> for RiskFlagView {
    fn from(flag: &RiskFlag) -> Self {
        Self {
            category: flag.category,
            category_label: flag.category.label(),
            source: flag.source,
            severity: flag.severity,
            severity_label: flag.severity.label(),
            description: flag.description.clone(),
            figures: flag.figures,
        }
    }
}

/// Raw figures summarising one sub-domain on the school detail view.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DomainSummary {
    Hostels {
        hostels: usize,
        total_beds: u64,
        occupied: u64,
    },
    Classrooms {
        classrooms: usize,
        seating_capacity: u64,
        students: u64,
    },
    Water {
        sources: usize,
        functional: usize,
    },
    Power {
        sources: usize,
        operational: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        best_hours_per_day: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        best_has_backup: Option<bool>,
    },
    Overcrowding {
        utilization_pct: f64,
    },
    TeacherStaffing {
        teachers: u32,
        qualified: u32,
        students_per_teacher: f64,
        qualified_pct: f64,
    },
    Equipment(EquipmentFigures),
    ComputerLabs(ComputerLabFigures),
    Facilities(FacilityFigures),
}

#[derive(Debug, Clone, Serialize)]
pub struct DomainStatusEntry {
    pub domain: SubDomain,
    pub domain_label: &'static str,
    pub status: Status,
    pub status_label: &'static str,
    pub summary: DomainSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct SchoolHealthView {
    pub school_id: SchoolId,
    pub name: String,
    pub state: String,
    pub total_students: u32,
    pub total_staff: u32,
    pub boarding_capacity: u64,
    pub status: Status,
    pub status_label: &'static str,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub notes: String,
    pub domains: Vec<DomainStatusEntry>,
    pub risk_flags: Vec<RiskFlagView>,
}

/// One line of the schools table.
#[derive(Debug, Clone, Serialize)]
pub struct SchoolRow {
    pub school_id: SchoolId,
    pub name: String,
    pub state: String,
    pub total_students: u32,
    pub boarding_capacity: u64,
    pub status: Status,
    pub status_label: &'static str,
    pub teacher_status: Status,
    pub equipment_status: Status,
    pub facility_status: Status,
    pub active_flags: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusCountEntry {
    pub status: Status,
    pub status_label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct NationalSummaryView {
    pub as_of: NaiveDate,
    pub total_schools: usize,
    pub total_students: u64,
    pub schools_by_status: Vec<StatusCountEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskRegisterSchool {
    pub school_id: SchoolId,
    pub name: String,
    pub state: String,
    pub status: Status,
    pub status_label: &'static str,
    pub flags: Vec<RiskFlagView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskCategoryGroup {
    pub category: RiskCategory,
    pub category_label: &'static str,
    pub school_count: usize,
    pub schools: Vec<RiskRegisterSchool>,
}

/// Schools carrying urgent (Red) flags, grouped by flag category.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RiskRegister {
    pub schools_at_risk: usize,
    pub categories: Vec<RiskCategoryGroup>,
}
