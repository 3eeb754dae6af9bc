use super::classify::classify_school;
use super::domain::{School, Status};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub green: usize,
    pub amber: usize,
    pub red: usize,
}

impl StatusCounts {
    pub fn record(&mut self, status: Status) {
        match status {
            Status::Green => self.green += 1,
            Status::Amber => self.amber += 1,
            Status::Red => self.red += 1,
        }
    }

    pub fn get(&self, status: Status) -> usize {
        match status {
            Status::Green => self.green,
            Status::Amber => self.amber,
            Status::Red => self.red,
        }
    }

    pub fn total(&self) -> usize {
        self.green + self.amber + self.red
    }
}

impl FromIterator<Status> for StatusCounts {
    fn from_iter<I: IntoIterator<Item = Status>>(iter: I) -> Self {
        let mut counts = Self::default();
        for status in iter {
            counts.record(status);
        }
        counts
    }
}

/// National roll-up. `schools_by_status.total() == total_schools` always.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NationalAggregates {
    pub total_schools: usize,
    pub total_students: u64,
    pub schools_by_status: StatusCounts,
}

pub fn aggregate_national(schools: &[School]) -> NationalAggregates {
    NationalAggregates {
        total_schools: schools.len(),
        total_students: schools
            .iter()
            .map(|school| u64::from(school.total_students))
            .sum(),
        schools_by_status: schools.iter().map(classify_school).collect(),
    }
}
