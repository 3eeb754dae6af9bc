use crate::health::domain::{
    Classroom, ComputerLab, Condition, ConstructionType, Equipment, EquipmentCategory, Facility,
    FacilityType, Hostel, HostelType, OperationalStatus, PowerSource, PowerSourceType, School,
    SchoolId, TeacherSummary, WaterReliability, WaterSource, WaterSourceType,
};

pub(crate) const SCHOOL_ID: &str = "sch-001";

fn owner() -> SchoolId {
    SchoolId(SCHOOL_ID.to_string())
}

pub(crate) fn hostel(total_beds: u32, current_occupancy: u32) -> Hostel {
    Hostel {
        id: "hst-1".to_string(),
        school_id: owner(),
        name: "Zik Hall".to_string(),
        hostel_type: HostelType::Mixed,
        construction_type: ConstructionType::Concrete,
        year_built: 2004,
        condition: Condition::Good,
        operational_status: OperationalStatus::Functional,
        total_rooms: 20,
        total_beds,
        current_occupancy,
        blocks: Vec::new(),
    }
}

pub(crate) fn classroom(seating_capacity: u32, current_students: u32) -> Classroom {
    Classroom {
        id: "cls-1".to_string(),
        school_id: owner(),
        academic_block_name: "Block A".to_string(),
        seating_capacity,
        current_students,
        construction_type: ConstructionType::Block,
        ventilation_adequacy: true,
        condition: Condition::Good,
    }
}

pub(crate) fn water(functional_status: bool, reliability: WaterReliability) -> WaterSource {
    WaterSource {
        id: "wtr-1".to_string(),
        school_id: owner(),
        source_type: WaterSourceType::Borehole,
        capacity_litres_per_day: 20_000,
        functional_status,
        reliability,
        last_maintenance_date: None,
    }
}

pub(crate) fn power(average_hours_per_day: f64, backup_available: bool) -> PowerSource {
    PowerSource {
        id: "pwr-1".to_string(),
        school_id: owner(),
        source_type: PowerSourceType::Grid,
        capacity_kw: 50.0,
        average_hours_per_day,
        operational_status: true,
        backup_available,
    }
}

pub(crate) fn teachers(total: u32, qualified: u32) -> TeacherSummary {
    TeacherSummary {
        total,
        qualified,
        ..TeacherSummary::default()
    }
}

pub(crate) fn equipment(total_count: u32, functional_count: u32, condition: Condition) -> Equipment {
    Equipment {
        id: "eqp-1".to_string(),
        school_id: owner(),
        category: EquipmentCategory::LabEquipment,
        total_count,
        functional_count,
        condition,
    }
}

pub(crate) fn computer_lab(
    total_computers: u32,
    functional_computers: u32,
    operational_status: OperationalStatus,
) -> ComputerLab {
    ComputerLab {
        id: "lab-1".to_string(),
        school_id: owner(),
        name: "ICT Centre".to_string(),
        total_computers,
        functional_computers,
        last_maintenance_date: None,
        condition: Condition::Good,
        operational_status,
    }
}

pub(crate) fn facility(condition: Condition, operational_status: OperationalStatus) -> Facility {
    Facility {
        id: "fac-1".to_string(),
        school_id: owner(),
        facility_type: FacilityType::Library,
        name: "Main Library".to_string(),
        capacity: 120,
        current_usage: 80,
        condition,
        operational_status,
        equipment_count: None,
    }
}

/// A school that classifies Green in every sub-domain.
pub(crate) fn healthy_school() -> School {
    School {
        id: owner(),
        name: "Federal Government College Enugu".to_string(),
        state: "Enugu".to_string(),
        total_students: 400,
        total_staff: 45,
        notes: String::new(),
        hostels: vec![hostel(100, 90)],
        classrooms: vec![classroom(40, 35)],
        water_sources: vec![water(true, WaterReliability::Constant)],
        power_sources: vec![power(24.0, true)],
        teacher_summary: teachers(20, 18),
        equipment: vec![equipment(10, 10, Condition::Good)],
        computer_labs: vec![computer_lab(20, 20, OperationalStatus::Functional)],
        facilities: vec![facility(Condition::Good, OperationalStatus::Functional)],
    }
}

pub(crate) fn school_with_id(id: &str, total_students: u32) -> School {
    School {
        id: SchoolId(id.to_string()),
        total_students,
        ..healthy_school()
    }
}
