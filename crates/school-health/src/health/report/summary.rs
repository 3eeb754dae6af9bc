use super::super::classify::{
    best_power_source, computer_lab_figures, equipment_figures, facility_figures,
    staffing_figures, total_boarding_capacity, SchoolAssessment,
};
use super::super::domain::{School, Status, SubDomain};
use super::super::flags::{domain_status, flags_for_assessment, RiskFlag};
use super::super::national::aggregate_national;
use super::views::{
    DomainStatusEntry, DomainSummary, NationalSummaryView, RiskFlagView, SchoolHealthView,
    SchoolRow, StatusCountEntry,
};
use chrono::NaiveDate;

/// Classified view of one school: per-domain statuses plus its flags.
#[derive(Debug)]
pub struct SchoolHealthReport<'a> {
    school: &'a School,
    assessment: SchoolAssessment,
    flags: Vec<RiskFlag>,
}

impl<'a> SchoolHealthReport<'a> {
    pub fn build(school: &'a School) -> Self {
        let assessment = SchoolAssessment::assess(school);
        let flags = flags_for_assessment(school, &assessment);
        Self {
            school,
            assessment,
            flags,
        }
    }

    pub fn school(&self) -> &School {
        self.school
    }

    pub fn assessment(&self) -> &SchoolAssessment {
        &self.assessment
    }

    pub fn status(&self) -> Status {
        self.assessment.overall()
    }

    pub fn flags(&self) -> &[RiskFlag] {
        &self.flags
    }

    pub fn red_flags(&self) -> impl Iterator<Item = &RiskFlag> {
        self.flags
            .iter()
            .filter(|flag| flag.active && flag.severity == Status::Red)
    }

    pub fn domain_status(&self, domain: SubDomain) -> Status {
        domain_status(&self.assessment, domain)
    }

    pub fn domains(&self) -> Vec<DomainStatusEntry> {
        SubDomain::ordered()
            .into_iter()
            .map(|domain| {
                let status = self.domain_status(domain);
                DomainStatusEntry {
                    domain,
                    domain_label: domain.label(),
                    status,
                    status_label: status.label(),
                    summary: self.domain_summary(domain),
                }
            })
            .collect()
    }

    fn domain_summary(&self, domain: SubDomain) -> DomainSummary {
        let school = self.school;
        match domain {
            SubDomain::Hostels => DomainSummary::Hostels {
                hostels: school.hostels.len(),
                total_beds: school.total_beds(),
                occupied: school.total_occupancy(),
            },
            SubDomain::Classrooms => DomainSummary::Classrooms {
                classrooms: school.classrooms.len(),
                seating_capacity: school
                    .classrooms
                    .iter()
                    .map(|room| u64::from(room.seating_capacity))
                    .sum(),
                students: school
                    .classrooms
                    .iter()
                    .map(|room| u64::from(room.current_students))
                    .sum(),
            },
            SubDomain::Water => DomainSummary::Water {
                sources: school.water_sources.len(),
                functional: school
                    .water_sources
                    .iter()
                    .filter(|source| source.functional_status)
                    .count(),
            },
            SubDomain::Power => {
                let best = best_power_source(&school.power_sources);
                DomainSummary::Power {
                    sources: school.power_sources.len(),
                    operational: school
                        .power_sources
                        .iter()
                        .filter(|source| source.operational_status)
                        .count(),
                    best_hours_per_day: best.map(|source| source.average_hours_per_day),
                    best_has_backup: best.map(|source| source.backup_available),
                }
            }
            SubDomain::Overcrowding => DomainSummary::Overcrowding {
                utilization_pct: school.boarding_utilization_pct(),
            },
            SubDomain::TeacherStaffing => {
                let figures = staffing_figures(&school.teacher_summary, school.total_students);
                DomainSummary::TeacherStaffing {
                    teachers: school.teacher_summary.total,
                    qualified: school.teacher_summary.qualified,
                    students_per_teacher: figures.students_per_teacher,
                    qualified_pct: figures.qualified_pct,
                }
            }
            SubDomain::Equipment => DomainSummary::Equipment(equipment_figures(&school.equipment)),
            SubDomain::ComputerLabs => {
                DomainSummary::ComputerLabs(computer_lab_figures(&school.computer_labs))
            }
            SubDomain::Facilities => {
                DomainSummary::Facilities(facility_figures(&school.facilities))
            }
        }
    }

    pub fn row(&self) -> SchoolRow {
        let school = self.school;
        let status = self.status();
        SchoolRow {
            school_id: school.id.clone(),
            name: school.name.clone(),
            state: school.state.clone(),
            total_students: school.total_students,
            boarding_capacity: total_boarding_capacity(school),
            status,
            status_label: status.label(),
            teacher_status: self.assessment.teacher_staffing,
            equipment_status: self.assessment.equipment,
            facility_status: self.assessment.facilities,
            active_flags: self.flags.iter().filter(|flag| flag.active).count(),
        }
    }

    pub fn view(&self) -> SchoolHealthView {
        let school = self.school;
        let status = self.status();
        SchoolHealthView {
            school_id: school.id.clone(),
            name: school.name.clone(),
            state: school.state.clone(),
            total_students: school.total_students,
            total_staff: school.total_staff,
            boarding_capacity: total_boarding_capacity(school),
            status,
            status_label: status.label(),
            notes: school.notes.clone(),
            domains: self.domains(),
            risk_flags: self.flags.iter().map(RiskFlagView::from).collect(),
        }
    }
}

/// National aggregates stamped with the date they describe.
pub fn national_summary(schools: &[School], as_of: NaiveDate) -> NationalSummaryView {
    let aggregates = aggregate_national(schools);
    NationalSummaryView {
        as_of,
        total_schools: aggregates.total_schools,
        total_students: aggregates.total_students,
        schools_by_status: Status::ordered()
            .into_iter()
            .map(|status| StatusCountEntry {
                status,
                status_label: status.label(),
                count: aggregates.schools_by_status.get(status),
            })
            .collect(),
    }
}
