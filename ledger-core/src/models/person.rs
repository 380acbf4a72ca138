use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The concrete role a person plays in the ledger.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Mentor,
    Lecturer,
    Reviewer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Mentor => "mentor",
            Self::Lecturer => "lecturer",
            Self::Reviewer => "reviewer",
        }
    }
}

/// Fields every person has, whatever their role.
pub trait Person {
    fn id(&self) -> Uuid;
    fn name(&self) -> &str;
    fn surname(&self) -> &str;
    fn role(&self) -> Role;

    fn full_name(&self) -> String {
        format!("{} {}", self.name(), self.surname())
    }
}

/// Append `course` unless it is already listed. Returns whether it was added.
pub(crate) fn push_unique(courses: &mut Vec<String>, course: String) -> bool {
    if courses.contains(&course) {
        return false;
    }
    courses.push(course);
    true
}
