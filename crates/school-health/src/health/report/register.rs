use super::super::domain::{RiskCategory, School};
use super::summary::SchoolHealthReport;
use super::views::{RiskCategoryGroup, RiskFlagView, RiskRegister, RiskRegisterSchool};
use std::collections::HashMap;

/// Groups schools with active Red flags by the category of those flags.
///
/// A school appears once per category it has Red flags in, carrying only
/// that category's Red flags. Amber flags never enter the register.
pub fn build_risk_register(schools: &[School]) -> RiskRegister {
    let mut grouped: HashMap<RiskCategory, Vec<RiskRegisterSchool>> = HashMap::new();
    let mut schools_at_risk = 0;

    for school in schools {
        let report = SchoolHealthReport::build(school);
        let mut red_by_category: HashMap<RiskCategory, Vec<RiskFlagView>> = HashMap::new();
        for flag in report.red_flags() {
            red_by_category
                .entry(flag.category)
                .or_default()
                .push(RiskFlagView::from(flag));
        }

        if red_by_category.is_empty() {
            continue;
        }
        schools_at_risk += 1;

        let status = report.status();
        for (category, flags) in red_by_category {
            grouped.entry(category).or_default().push(RiskRegisterSchool {
                school_id: school.id.clone(),
                name: school.name.clone(),
                state: school.state.clone(),
                status,
                status_label: status.label(),
                flags,
            });
        }
    }

    let categories = RiskCategory::ordered()
        .into_iter()
        .filter_map(|category| {
            grouped.remove(&category).map(|schools| RiskCategoryGroup {
                category,
                category_label: category.label(),
                school_count: schools.len(),
                schools,
            })
        })
        .collect();

    RiskRegister {
        schools_at_risk,
        categories,
    }
}
