use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use school_health::config::AppConfig;
use school_health::error::AppError;
use school_health::registry::{InMemorySchoolRepository, SchoolDataset, SchoolHealthService};
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

pub(crate) type DashboardService = SchoolHealthService<InMemorySchoolRepository>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// A `--data` flag wins over the configured dataset path.
pub(crate) fn resolve_data_path(config: &AppConfig, flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(|| config.data.path.clone())
}

pub(crate) fn load_service(path: &Path) -> Result<Arc<DashboardService>, AppError> {
    let dataset = SchoolDataset::from_path(path)?;
    let repository = Arc::new(InMemorySchoolRepository::new(dataset));
    Ok(Arc::new(SchoolHealthService::new(repository)))
}

/// Loads configuration and the dataset for one-shot CLI commands.
pub(crate) fn load_cli_service(flag: Option<PathBuf>) -> Result<Arc<DashboardService>, AppError> {
    let config = AppConfig::load()?;
    load_service(&resolve_data_path(&config, flag))
}
