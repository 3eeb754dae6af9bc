mod export;
mod register;
mod summary;
pub mod views;

pub use export::write_school_rows_csv;
pub use register::build_risk_register;
pub use summary::{national_summary, SchoolHealthReport};
