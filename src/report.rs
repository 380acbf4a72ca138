//! Human-readable and JSON reports over ledger people.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ledger_core::models::{Lecturer, Mentor, Person, Reviewer, Role, Student};
use ledger_core::Graded;

/// Flat view of one person, used for JSON output.
///
/// Only the fields meaningful for the person's role are filled in; the others
/// are left out of the serialized form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonSummary {
    pub id: Uuid,
    pub role: Role,
    pub name: String,
    pub surname: String,
    /// Average grade rounded to the configured precision. `None` for roles
    /// that never receive grades.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_grade: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub courses_in_progress: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub finished_courses: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub courses_attached: Vec<String>,
}

impl PersonSummary {
    fn base(person: &impl Person) -> Self {
        Self {
            id: person.id(),
            role: person.role(),
            name: person.name().to_string(),
            surname: person.surname().to_string(),
            average_grade: None,
            courses_in_progress: Vec::new(),
            finished_courses: Vec::new(),
            courses_attached: Vec::new(),
        }
    }

    pub fn student(student: &Student, precision: usize) -> Self {
        Self {
            average_grade: Some(round_to(student.average_grade(), precision)),
            courses_in_progress: student.courses_in_progress().to_vec(),
            finished_courses: student.finished_courses().to_vec(),
            ..Self::base(student)
        }
    }

    pub fn lecturer(lecturer: &Lecturer, precision: usize) -> Self {
        Self {
            average_grade: Some(round_to(lecturer.average_grade(), precision)),
            courses_attached: lecturer.courses_attached().to_vec(),
            ..Self::base(lecturer)
        }
    }

    pub fn reviewer(reviewer: &Reviewer) -> Self {
        Self {
            courses_attached: reviewer.courses_attached().to_vec(),
            ..Self::base(reviewer)
        }
    }

    pub fn mentor(mentor: &Mentor) -> Self {
        Self {
            courses_attached: mentor.courses_attached().to_vec(),
            ..Self::base(mentor)
        }
    }
}

/// Round half away from zero to `precision` decimals.
pub fn round_to(value: f64, precision: usize) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// One line of the course average report, e.g.
/// `Average grade of students for course 'Python': 9.33`.
pub fn course_average_line(group: &str, course: &str, average: f64, precision: usize) -> String {
    format!("Average grade of {group} for course '{course}': {average:.precision$}")
}

/// All six relational operators between two people of the same role.
///
/// ```text
/// student_1 < student_2: false
/// student_1 == student_2: false
/// ...
/// ```
pub fn comparison_report<T: Ord>(left: &str, a: &T, right: &str, b: &T) -> String {
    let rows = [
        ("<", a < b),
        ("==", a == b),
        ("!=", a != b),
        (">", a > b),
        (">=", a >= b),
        ("<=", a <= b),
    ];

    let mut output = String::new();
    for (op, result) in rows {
        output.push_str(&format!("{left} {op} {right}: {result}\n"));
    }
    output
}
