use crate::cli::DataArgs;
use crate::infra::{load_cli_service, parse_date};
use chrono::{Local, NaiveDate};
use clap::Args;
use school_health::error::AppError;
use school_health::health::report::views::{
    NationalSummaryView, RiskRegister, SchoolHealthView, SchoolRow,
};
use school_health::health::{write_school_rows_csv, SchoolId};
use school_health::Status;
use serde::Serialize;

#[derive(Args, Debug, Default)]
pub(crate) struct NationalArgs {
    /// Reporting date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Emit JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
    #[command(flatten)]
    pub(crate) data: DataArgs,
}

#[derive(Args, Debug, Default)]
pub(crate) struct SchoolsArgs {
    /// Only list schools with this overall status (green, amber, red)
    #[arg(long)]
    pub(crate) status: Option<Status>,
    /// Emit CSV instead of a text table
    #[arg(long)]
    pub(crate) csv: bool,
    #[command(flatten)]
    pub(crate) data: DataArgs,
}

#[derive(Args, Debug)]
pub(crate) struct SchoolArgs {
    /// Identifier of the school to inspect
    pub(crate) school_id: String,
    /// Emit JSON instead of a text breakdown
    #[arg(long)]
    pub(crate) json: bool,
    #[command(flatten)]
    pub(crate) data: DataArgs,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RisksArgs {
    /// Emit JSON instead of a text register
    #[arg(long)]
    pub(crate) json: bool,
    #[command(flatten)]
    pub(crate) data: DataArgs,
}

pub(crate) fn run_national(args: NationalArgs) -> Result<(), AppError> {
    let service = load_cli_service(args.data.path)?;
    let as_of = args.as_of.unwrap_or_else(|| Local::now().date_naive());
    let summary = service.national(as_of)?;

    if args.json {
        print_json(&summary);
    } else {
        print!("{}", render_national(&summary));
    }
    Ok(())
}

pub(crate) fn run_schools(args: SchoolsArgs) -> Result<(), AppError> {
    let service = load_cli_service(args.data.path)?;
    let rows = service.rows(args.status)?;

    if args.csv {
        write_school_rows_csv(&rows, std::io::stdout().lock())?;
    } else {
        print!("{}", render_rows(&rows));
    }
    Ok(())
}

pub(crate) fn run_school(args: SchoolArgs) -> Result<(), AppError> {
    let service = load_cli_service(args.data.path)?;
    let view = service.report(&SchoolId(args.school_id))?;

    if args.json {
        print_json(&view);
    } else {
        print!("{}", render_school(&view));
    }
    Ok(())
}

pub(crate) fn run_risks(args: RisksArgs) -> Result<(), AppError> {
    let service = load_cli_service(args.data.path)?;
    let register = service.risk_register()?;

    if args.json {
        print_json(&register);
    } else {
        print!("{}", render_register(&register));
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("JSON output unavailable: {err}"),
    }
}

pub(crate) fn render_national(summary: &NationalSummaryView) -> String {
    let mut out = format!("National school health as of {}\n", summary.as_of);
    out.push_str(&format!(
        "- {} schools | {} students\n",
        summary.total_schools, summary.total_students
    ));
    for entry in &summary.schools_by_status {
        out.push_str(&format!(
            "- {} ({}): {}\n",
            entry.status_label, entry.status, entry.count
        ));
    }
    out
}

pub(crate) fn render_rows(rows: &[SchoolRow]) -> String {
    if rows.is_empty() {
        return "No schools match.\n".to_string();
    }

    let mut out = String::new();
    for row in rows {
        out.push_str(&format!(
            "{} | {} ({}) | {} students | {} beds | {} | teachers {} | equipment {} | facilities {} | {} flags\n",
            row.school_id,
            row.name,
            row.state,
            row.total_students,
            row.boarding_capacity,
            row.status_label,
            row.teacher_status,
            row.equipment_status,
            row.facility_status,
            row.active_flags
        ));
    }
    out
}

pub(crate) fn render_school(view: &SchoolHealthView) -> String {
    let mut out = format!(
        "{} ({}) - {} [{}]\n",
        view.name, view.school_id, view.state, view.status_label
    );
    out.push_str(&format!(
        "- {} students | {} staff | {} boarding beds\n",
        view.total_students, view.total_staff, view.boarding_capacity
    ));
    if !view.notes.is_empty() {
        out.push_str(&format!("- Notes: {}\n", view.notes));
    }

    out.push_str("Domains:\n");
    for entry in &view.domains {
        out.push_str(&format!(
            "  - {}: {}\n",
            entry.domain_label, entry.status_label
        ));
    }

    if view.risk_flags.is_empty() {
        out.push_str("Risk flags: none\n");
    } else {
        out.push_str("Risk flags:\n");
        for flag in &view.risk_flags {
            out.push_str(&format!(
                "  - [{}] {}: {}\n",
                flag.severity_label, flag.category_label, flag.description
            ));
        }
    }
    out
}

pub(crate) fn render_register(register: &RiskRegister) -> String {
    if register.categories.is_empty() {
        return "Risk register: no schools with urgent flags\n".to_string();
    }

    let mut out = format!(
        "Risk register: {} schools with urgent flags\n",
        register.schools_at_risk
    );
    for group in &register.categories {
        out.push_str(&format!(
            "{} ({} schools)\n",
            group.category_label, group.school_count
        ));
        for school in &group.schools {
            out.push_str(&format!("  - {} ({}) {}\n", school.name, school.school_id, school.state));
            for flag in &school.flags {
                out.push_str(&format!("      {}\n", flag.description));
            }
        }
    }
    out
}
