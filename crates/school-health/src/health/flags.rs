use super::classify::{
    computer_lab_figures, equipment_figures, facility_figures, staffing_figures, SchoolAssessment,
    StaffingFigures,
};
use super::domain::{RiskCategory, School, Status, SubDomain};
use serde::{Deserialize, Serialize};

/// One active concern for one school.
///
/// Severity is the raising sub-domain's own status, never the school's
/// overall status. Green never produces a flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFlag {
    pub category: RiskCategory,
    pub source: SubDomain,
    pub severity: Status,
    pub description: String,
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub figures: Option<RiskFigures>,
}

/// Raw numbers behind a flag, for callers that format their own text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RiskFigures {
    Utilization { utilization_pct: f64 },
    Staffing { students_per_teacher: f64, qualified_pct: f64 },
    Functional { functional_pct: f64 },
    Facilities { closed: usize, poor: usize },
}

impl From<StaffingFigures> for RiskFigures {
    fn from(value: StaffingFigures) -> Self {
        Self::Staffing {
            students_per_teacher: value.students_per_teacher,
            qualified_pct: value.qualified_pct,
        }
    }
}

/// Emits at most one flag per sub-domain, in `SubDomain::ordered()` order.
pub fn generate_risk_flags(school: &School) -> Vec<RiskFlag> {
    flags_for_assessment(school, &SchoolAssessment::assess(school))
}

pub(crate) fn flags_for_assessment(
    school: &School,
    assessment: &SchoolAssessment,
) -> Vec<RiskFlag> {
    SubDomain::ordered()
        .into_iter()
        .filter_map(|source| {
            let severity = domain_status(assessment, source);
            if severity.is_green() {
                return None;
            }

            let (description, figures) = describe(school, source, severity == Status::Red);
            Some(RiskFlag {
                category: source.risk_category(),
                source,
                severity,
                description,
                active: true,
                figures,
            })
        })
        .collect()
}

pub(crate) fn domain_status(assessment: &SchoolAssessment, domain: SubDomain) -> Status {
    match domain {
        SubDomain::Hostels => assessment.hostel_status(),
        SubDomain::Classrooms => assessment.classroom_status(),
        SubDomain::Water => assessment.water,
        SubDomain::Power => assessment.power,
        SubDomain::Overcrowding => assessment.overcrowding,
        SubDomain::TeacherStaffing => assessment.teacher_staffing,
        SubDomain::Equipment => assessment.equipment,
        SubDomain::ComputerLabs => assessment.computer_labs,
        SubDomain::Facilities => assessment.facilities,
    }
}

/// Flag wording and the figures it quotes, one arm per sub-domain.
fn describe(school: &School, source: SubDomain, critical: bool) -> (String, Option<RiskFigures>) {
    let pick = |red: &'static str, amber: &'static str| if critical { red } else { amber };

    match source {
        SubDomain::Hostels => (
            format!(
                "Hostel infrastructure issues: {} condition or capacity problems",
                pick("Critical", "Moderate")
            ),
            None,
        ),
        SubDomain::Classrooms => (
            format!(
                "Classroom issues: {}",
                pick("Severe overcrowding", "Overcrowding or condition concerns")
            ),
            None,
        ),
        SubDomain::Water => (
            pick(
                "No reliable water source functional",
                "Intermittent water supply",
            )
            .to_string(),
            None,
        ),
        SubDomain::Power => (
            pick(
                "Insufficient power availability (<6hrs/day without backup)",
                "Limited power availability or no backup",
            )
            .to_string(),
            None,
        ),
        SubDomain::Overcrowding => {
            let utilization_pct = school.boarding_utilization_pct();
            (
                format!(
                    "{}: {}% capacity utilization",
                    pick("Severe overcrowding", "Overcrowding"),
                    fixed(utilization_pct, 0)
                ),
                Some(RiskFigures::Utilization { utilization_pct }),
            )
        }
        SubDomain::TeacherStaffing => {
            let figures = staffing_figures(&school.teacher_summary, school.total_students);
            (
                format!(
                    "{}: {}:1 ratio or {}% qualified",
                    pick("Critical teacher shortage", "Teacher shortage"),
                    fixed(figures.students_per_teacher, 1),
                    fixed(figures.qualified_pct, 0)
                ),
                Some(figures.into()),
            )
        }
        SubDomain::Equipment => {
            let functional_pct = equipment_figures(&school.equipment).functional_pct;
            (
                format!(
                    "{}: {}% functional",
                    pick("Critical equipment failure", "Equipment issues"),
                    fixed(functional_pct, 0)
                ),
                Some(RiskFigures::Functional { functional_pct }),
            )
        }
        SubDomain::ComputerLabs => {
            let functional_pct = computer_lab_figures(&school.computer_labs).functional_pct;
            (
                format!(
                    "{}: {}% functional",
                    pick("Critical computer lab issues", "Computer lab issues"),
                    fixed(functional_pct, 0)
                ),
                Some(RiskFigures::Functional { functional_pct }),
            )
        }
        SubDomain::Facilities => {
            let figures = facility_figures(&school.facilities);
            (
                format!(
                    "{}: {} closed, {} in poor condition",
                    pick("Critical facility issues", "Facility concerns"),
                    figures.closed,
                    figures.poor
                ),
                Some(RiskFigures::Facilities {
                    closed: figures.closed,
                    poor: figures.poor,
                }),
            )
        }
    }
}

/// Fixed-point text with halves rounded away from zero (`12.5` -> `13`).
fn fixed(value: f64, places: usize) -> String {
    let scale = 10f64.powi(places as i32);
    let rounded = (value * scale).round() / scale;
    format!("{rounded:.places$}")
}
