//! School infrastructure health: classification engine, dataset loading and
//! the read-only HTTP surface over it.

pub mod config;
pub mod error;
pub mod health;
pub mod registry;
pub mod telemetry;

pub use health::{
    classify_school, generate_risk_flags, Status, SchoolHealthReport, SubDomain,
};
