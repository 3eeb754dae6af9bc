use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-level health classification.
///
/// Variants are declared from least to most severe so the derived `Ord`
/// matches the roll-up ordering: `Red > Amber > Green`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Green,
    Amber,
    Red,
}

impl Status {
    pub const fn ordered() -> [Self; 3] {
        [Self::Green, Self::Amber, Self::Red]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Green => "Good",
            Self::Amber => "Attention",
            Self::Red => "Urgent",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Amber => "amber",
            Self::Red => "red",
        }
    }

    pub const fn is_green(self) -> bool {
        matches!(self, Self::Green)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a status filter string does not name a status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status '{0}', expected green, amber or red")]
pub struct UnknownStatus(pub String);

impl std::str::FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "green" | "good" => Ok(Self::Green),
            "amber" | "attention" => Ok(Self::Amber),
            "red" | "urgent" => Ok(Self::Red),
            _ => Err(UnknownStatus(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Good,
    Fair,
    Poor,
}

impl Condition {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationalStatus {
    Functional,
    Partial,
    Closed,
}

impl OperationalStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Functional => "Functional",
            Self::Partial => "Partial",
            Self::Closed => "Closed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterReliability {
    Constant,
    Intermittent,
    None,
}

impl WaterReliability {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Constant => "Constant",
            Self::Intermittent => "Intermittent",
            Self::None => "None",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Infrastructure,
    Water,
    Power,
    Overcrowding,
    Services,
    Facilities,
}

impl RiskCategory {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Infrastructure,
            Self::Water,
            Self::Power,
            Self::Overcrowding,
            Self::Services,
            Self::Facilities,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Infrastructure => "Infrastructure",
            Self::Water => "Water",
            Self::Power => "Power",
            Self::Overcrowding => "Overcrowding",
            Self::Services => "Services",
            Self::Facilities => "Facilities",
        }
    }
}

/// Independently classified facet of a school, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubDomain {
    Hostels,
    Classrooms,
    Water,
    Power,
    Overcrowding,
    TeacherStaffing,
    Equipment,
    ComputerLabs,
    Facilities,
}

impl SubDomain {
    pub const fn ordered() -> [Self; 9] {
        [
            Self::Hostels,
            Self::Classrooms,
            Self::Water,
            Self::Power,
            Self::Overcrowding,
            Self::TeacherStaffing,
            Self::Equipment,
            Self::ComputerLabs,
            Self::Facilities,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Hostels => "Hostels",
            Self::Classrooms => "Classrooms",
            Self::Water => "Water",
            Self::Power => "Power",
            Self::Overcrowding => "Boarding Occupancy",
            Self::TeacherStaffing => "Teachers",
            Self::Equipment => "Equipment",
            Self::ComputerLabs => "Computer Labs",
            Self::Facilities => "Facilities",
        }
    }

    /// Category carried by a risk flag raised for this sub-domain.
    pub const fn risk_category(self) -> RiskCategory {
        match self {
            Self::Hostels | Self::Classrooms => RiskCategory::Infrastructure,
            Self::Water => RiskCategory::Water,
            Self::Power => RiskCategory::Power,
            Self::Overcrowding => RiskCategory::Overcrowding,
            Self::TeacherStaffing | Self::Equipment | Self::ComputerLabs => RiskCategory::Services,
            Self::Facilities => RiskCategory::Facilities,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostelType {
    Male,
    Female,
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructionType {
    Concrete,
    Block,
    Prefab,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterSourceType {
    Borehole,
    Pipe,
    Well,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerSourceType {
    Grid,
    Generator,
    Solar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentCategory {
    Computers,
    LabEquipment,
    SportsEquipment,
    Furniture,
    LibraryBooks,
    AudioVisual,
    Other,
}

impl EquipmentCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Computers => "Computers",
            Self::LabEquipment => "Lab Equipment",
            Self::SportsEquipment => "Sports Equipment",
            Self::Furniture => "Furniture",
            Self::LibraryBooks => "Library Books",
            Self::AudioVisual => "Audio Visual",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacilityType {
    ScienceLab,
    ComputerLab,
    Library,
    SportsCenter,
    StaffQuarters,
    Auditorium,
    Cafeteria,
    Clinic,
    Workshop,
}

impl FacilityType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::ScienceLab => "Science Lab",
            Self::ComputerLab => "Computer Lab",
            Self::Library => "Library",
            Self::SportsCenter => "Sports Center",
            Self::StaffQuarters => "Staff Quarters",
            Self::Auditorium => "Auditorium",
            Self::Cafeteria => "Cafeteria",
            Self::Clinic => "Clinic",
            Self::Workshop => "Workshop",
        }
    }
}

/// Identifier wrapper for schools in the national dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchoolId(pub String);

impl fmt::Display for SchoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostelBlock {
    pub id: String,
    pub hostel_id: String,
    pub name: String,
    pub floors: u32,
    pub rooms_per_floor: u32,
    pub condition: Condition,
    pub fire_safety: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hostel {
    pub id: String,
    pub school_id: SchoolId,
    pub name: String,
    pub hostel_type: HostelType,
    pub construction_type: ConstructionType,
    pub year_built: u16,
    pub condition: Condition,
    pub operational_status: OperationalStatus,
    pub total_rooms: u32,
    pub total_beds: u32,
    pub current_occupancy: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<HostelBlock>,
}

impl Hostel {
    /// Occupancy as a percentage of beds; 0 when the hostel has no beds.
    pub fn occupancy_pct(&self) -> f64 {
        percentage(self.current_occupancy.into(), self.total_beds.into())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classroom {
    pub id: String,
    pub school_id: SchoolId,
    pub academic_block_name: String,
    pub seating_capacity: u32,
    pub current_students: u32,
    pub construction_type: ConstructionType,
    pub ventilation_adequacy: bool,
    pub condition: Condition,
}

impl Classroom {
    /// Students seated as a percentage of capacity; 0 when capacity is 0.
    pub fn load_pct(&self) -> f64 {
        percentage(self.current_students.into(), self.seating_capacity.into())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterSource {
    pub id: String,
    pub school_id: SchoolId,
    pub source_type: WaterSourceType,
    pub capacity_litres_per_day: u32,
    pub functional_status: bool,
    pub reliability: WaterReliability,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_maintenance_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerSource {
    pub id: String,
    pub school_id: SchoolId,
    pub source_type: PowerSourceType,
    pub capacity_kw: f64,
    pub average_hours_per_day: f64,
    pub operational_status: bool,
    pub backup_available: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualificationBreakdown {
    pub b_ed: u32,
    pub m_ed: u32,
    pub phd: u32,
    pub other: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectAreaBreakdown {
    pub science: u32,
    pub arts: u32,
    pub commercial: u32,
    pub technical: u32,
    pub languages: u32,
    pub mathematics: u32,
    pub social_studies: u32,
    pub physical_education: u32,
}

/// Staffing snapshot. The breakdowns are informational and never classified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherSummary {
    pub total: u32,
    pub qualified: u32,
    #[serde(default)]
    pub by_qualification: QualificationBreakdown,
    #[serde(default)]
    pub by_subject_area: SubjectAreaBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: String,
    pub school_id: SchoolId,
    pub category: EquipmentCategory,
    pub total_count: u32,
    pub functional_count: u32,
    pub condition: Condition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputerLab {
    pub id: String,
    pub school_id: SchoolId,
    pub name: String,
    pub total_computers: u32,
    pub functional_computers: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_maintenance_date: Option<NaiveDate>,
    pub condition: Condition,
    pub operational_status: OperationalStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub id: String,
    pub school_id: SchoolId,
    pub facility_type: FacilityType,
    pub name: String,
    pub capacity: u32,
    pub current_usage: u32,
    pub condition: Condition,
    pub operational_status: OperationalStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_count: Option<u32>,
}

/// Aggregate root for one institution and everything it owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    pub id: SchoolId,
    pub name: String,
    pub state: String,
    pub total_students: u32,
    pub total_staff: u32,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub hostels: Vec<Hostel>,
    #[serde(default)]
    pub classrooms: Vec<Classroom>,
    #[serde(default)]
    pub water_sources: Vec<WaterSource>,
    #[serde(default)]
    pub power_sources: Vec<PowerSource>,
    pub teacher_summary: TeacherSummary,
    #[serde(default)]
    pub equipment: Vec<Equipment>,
    #[serde(default)]
    pub computer_labs: Vec<ComputerLab>,
    #[serde(default)]
    pub facilities: Vec<Facility>,
}

impl School {
    pub fn total_beds(&self) -> u64 {
        total_beds(&self.hostels)
    }

    pub fn total_occupancy(&self) -> u64 {
        total_occupancy(&self.hostels)
    }

    pub fn boarding_utilization_pct(&self) -> f64 {
        boarding_utilization_pct(&self.hostels)
    }
}

pub fn total_beds(hostels: &[Hostel]) -> u64 {
    hostels.iter().map(|hostel| u64::from(hostel.total_beds)).sum()
}

pub fn total_occupancy(hostels: &[Hostel]) -> u64 {
    hostels
        .iter()
        .map(|hostel| u64::from(hostel.current_occupancy))
        .sum()
}

/// Summed occupancy over summed beds across every hostel.
pub fn boarding_utilization_pct(hostels: &[Hostel]) -> f64 {
    percentage(total_occupancy(hostels), total_beds(hostels))
}

/// `numerator / denominator * 100`, or 0 when the denominator is 0.
pub fn percentage(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64 * 100.0
    }
}
