use crate::health::domain::{School, SchoolId};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read school dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid school dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("school {0} appears more than once in the dataset")]
    DuplicateSchool(SchoolId),
}

/// Snapshot of every school record, loaded once and never mutated.
#[derive(Debug, Clone, Default)]
pub struct SchoolDataset {
    schools: Vec<School>,
}

impl SchoolDataset {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let dataset = Self::from_reader(file)?;
        info!(path = %path.display(), schools = dataset.len(), "school dataset loaded");
        Ok(dataset)
    }

    /// Reads a JSON array of schools.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let schools: Vec<School> = serde_json::from_reader(reader)?;
        Self::from_schools(schools)
    }

    pub fn from_schools(schools: Vec<School>) -> Result<Self, DatasetError> {
        let mut seen = HashSet::new();
        for school in &schools {
            if !seen.insert(&school.id) {
                return Err(DatasetError::DuplicateSchool(school.id.clone()));
            }
            warn_on_foreign_records(school);
        }

        Ok(Self { schools })
    }

    pub fn schools(&self) -> &[School] {
        &self.schools
    }

    pub fn find(&self, id: &SchoolId) -> Option<&School> {
        self.schools.iter().find(|school| &school.id == id)
    }

    pub fn len(&self) -> usize {
        self.schools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schools.is_empty()
    }

    pub fn into_schools(self) -> Vec<School> {
        self.schools
    }
}

/// Child records keyed to another school are kept but reported.
fn warn_on_foreign_records(school: &School) {
    let owners = school
        .hostels
        .iter()
        .map(|record| &record.school_id)
        .chain(school.classrooms.iter().map(|record| &record.school_id))
        .chain(school.water_sources.iter().map(|record| &record.school_id))
        .chain(school.power_sources.iter().map(|record| &record.school_id))
        .chain(school.equipment.iter().map(|record| &record.school_id))
        .chain(school.computer_labs.iter().map(|record| &record.school_id))
        .chain(school.facilities.iter().map(|record| &record.school_id));

    let foreign = owners.filter(|owner| *owner != &school.id).count();
    if foreign > 0 {
        warn!(school = %school.id, foreign, "records reference a different school id");
    }
}
