use std::fmt;

use uuid::Uuid;

use super::person::{push_unique, Person, Role};
use crate::gradebook::GradeBook;
use crate::grading::Graded;

/// A person attached to a set of courses.
///
/// A plain `Mentor` can be created and listed but has no rating rights and
/// receives no grades. [`Lecturer`] and [`Reviewer`] wrap one.
#[derive(Debug, Clone)]
pub struct Mentor {
    pub id: Uuid,
    pub name: String,
    pub surname: String,
    courses_attached: Vec<String>,
}

impl Mentor {
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            surname: surname.into(),
            courses_attached: Vec::new(),
        }
    }

    pub fn courses_attached(&self) -> &[String] {
        &self.courses_attached
    }

    pub fn is_attached(&self, course: &str) -> bool {
        self.courses_attached.iter().any(|c| c == course)
    }

    /// Returns `false` if the course was already attached.
    pub fn attach_course(&mut self, course: impl Into<String>) -> bool {
        push_unique(&mut self.courses_attached, course.into())
    }
}

impl Person for Mentor {
    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn surname(&self) -> &str {
        &self.surname
    }

    fn role(&self) -> Role {
        Role::Mentor
    }
}

impl fmt::Display for Mentor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        write!(f, "Surname: {}", self.surname)
    }
}

/// A mentor who lectures. Students of the attached courses rate the lectures.
#[derive(Debug, Clone)]
pub struct Lecturer {
    pub mentor: Mentor,
    pub(crate) grades: GradeBook,
}

impl Lecturer {
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            mentor: Mentor::new(name, surname),
            grades: GradeBook::new(),
        }
    }

    pub fn courses_attached(&self) -> &[String] {
        self.mentor.courses_attached()
    }

    pub fn attach_course(&mut self, course: impl Into<String>) -> bool {
        self.mentor.attach_course(course)
    }

    /// Whether this lecturer teaches `course`.
    pub fn teaches(&self, course: &str) -> bool {
        self.mentor.is_attached(course)
    }
}

impl Person for Lecturer {
    fn id(&self) -> Uuid {
        self.mentor.id
    }

    fn name(&self) -> &str {
        &self.mentor.name
    }

    fn surname(&self) -> &str {
        &self.mentor.surname
    }

    fn role(&self) -> Role {
        Role::Lecturer
    }
}

impl fmt::Display for Lecturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.mentor)?;
        write!(f, "Average lecture grade: {:.1}", self.average_grade())
    }
}

/// A mentor who grades homework for the attached courses.
#[derive(Debug, Clone)]
pub struct Reviewer {
    pub mentor: Mentor,
}

impl Reviewer {
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            mentor: Mentor::new(name, surname),
        }
    }

    pub fn courses_attached(&self) -> &[String] {
        self.mentor.courses_attached()
    }

    pub fn attach_course(&mut self, course: impl Into<String>) -> bool {
        self.mentor.attach_course(course)
    }

    pub fn is_attached(&self, course: &str) -> bool {
        self.mentor.is_attached(course)
    }
}

impl Person for Reviewer {
    fn id(&self) -> Uuid {
        self.mentor.id
    }

    fn name(&self) -> &str {
        &self.mentor.name
    }

    fn surname(&self) -> &str {
        &self.mentor.surname
    }

    fn role(&self) -> Role {
        Role::Reviewer
    }
}

impl fmt::Display for Reviewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.mentor, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_course_ignores_repeats() {
        let mut lecturer = Lecturer::new("Irina", "Sergeeva");
        assert!(lecturer.attach_course("Python"));
        assert!(!lecturer.attach_course("Python"));
        assert!(lecturer.teaches("Python"));
        assert!(!lecturer.teaches("Git"));
    }

    #[test]
    fn display_layouts() {
        let reviewer = Reviewer::new("Oleg", "Aleksandrov");
        assert_eq!(reviewer.to_string(), "Name: Oleg\nSurname: Aleksandrov");

        let lecturer = Lecturer::new("Irina", "Sergeeva");
        assert_eq!(
            lecturer.to_string(),
            "Name: Irina\nSurname: Sergeeva\nAverage lecture grade: 0.0"
        );
    }

    #[test]
    fn roles() {
        assert_eq!(Mentor::new("Mikhail", "Mikhailov").role(), Role::Mentor);
        assert_eq!(Lecturer::new("Irina", "Sergeeva").role(), Role::Lecturer);
        assert_eq!(Reviewer::new("Oleg", "Aleksandrov").role(), Role::Reviewer);
    }
}
