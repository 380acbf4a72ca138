//! Grade ledger: students, lecturers and reviewers exchanging course grades.
//!
//! The models and rating rules live in [`ledger_core`] and are re-exported
//! here. This crate adds configuration, reports and the sample roster driven
//! by the `ledger` binary.

pub mod config;
pub mod demo;
pub mod report;

pub use ledger_core::{error, grade, gradebook, grading, models};
pub use ledger_core::{
    cmp_by_average, course_average_grade, rank_by_average, rate, rate_grade, Grade, GradeBook,
    Graded, InvalidGrade, RateError, Rateable, Rates, Side,
};
