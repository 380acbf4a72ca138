//! People of the ledger.
//!
//! - [`Student`]: takes courses, gets homework grades, rates lectures.
//! - [`Mentor`]: attached to courses; on its own it neither rates nor gets rated.
//! - [`Lecturer`]: a mentor whose lectures are rated by students.
//! - [`Reviewer`]: a mentor who grades students' homework.

mod mentor;
mod person;
mod student;

pub use mentor::*;
pub use person::*;
pub use student::*;
