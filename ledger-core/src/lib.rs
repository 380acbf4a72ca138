//! Core of the grade ledger: people, courses and the grades they exchange.
//!
//! # Core Concepts
//!
//! - [`models::Student`]: enrolls in courses, receives homework grades from reviewers
//!   and rates the lectures of the courses they attend.
//! - [`models::Mentor`]: a person attached to courses. [`models::Lecturer`] and
//!   [`models::Reviewer`] are built on top of it.
//! - [`grade::Grade`]: an integer in `1..=10`, validated on construction.
//! - [`gradebook::GradeBook`]: per-course, append-only grade lists.
//! - [`grading`]: who may rate whom, averages and ordering by average grade.

pub mod error;
pub mod grade;
pub mod gradebook;
pub mod grading;
pub mod models;

pub use error::{InvalidGrade, RateError, Side};
pub use grade::Grade;
pub use gradebook::GradeBook;
pub use grading::{
    cmp_by_average, course_average_grade, rank_by_average, rate, rate_grade, Graded, Rateable,
    Rates,
};
