//! gradebook-core — Course, mark, and weighted-grade model.
//!
//! This crate owns the grade arithmetic: how a mark's percentage and
//! weighted contribution are derived, and how a course keeps its totals in
//! step with its marks. Everything else (state files, terminal output) lives
//! in `gradebook-cli`.

pub mod catalog;
pub mod config;
pub mod course;
pub mod edit;
pub mod error;
pub mod generate;
pub mod mark;
pub mod report;
pub mod shared;

pub use catalog::CourseCatalog;
pub use course::Course;
pub use error::{EntityKind, GradeError, Result};
pub use mark::Mark;
