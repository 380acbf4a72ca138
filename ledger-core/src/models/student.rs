use std::fmt;

use uuid::Uuid;

use super::person::{push_unique, Person, Role};
use crate::gradebook::GradeBook;
use crate::grading::Graded;

/// Whether a course may appear more than once in a student's finished list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    #[default]
    Suppress,
    Allow,
}

/// A student taking courses.
///
/// `grades` holds homework grades given by reviewers. They can only be
/// recorded for a course listed in `courses_in_progress` at the time of
/// rating, which is why the list is not writable from outside.
#[derive(Debug, Clone)]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    pub surname: String,
    pub gender: String,
    finished_courses: Vec<String>,
    courses_in_progress: Vec<String>,
    pub(crate) grades: GradeBook,
}

impl Student {
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            surname: surname.into(),
            gender: gender.into(),
            finished_courses: Vec::new(),
            courses_in_progress: Vec::new(),
            grades: GradeBook::new(),
        }
    }

    pub fn finished_courses(&self) -> &[String] {
        &self.finished_courses
    }

    pub fn courses_in_progress(&self) -> &[String] {
        &self.courses_in_progress
    }

    pub fn is_enrolled(&self, course: &str) -> bool {
        self.courses_in_progress.iter().any(|c| c == course)
    }

    /// Start a course. Returns `false` if it was already in progress.
    pub fn enroll(&mut self, course: impl Into<String>) -> bool {
        push_unique(&mut self.courses_in_progress, course.into())
    }

    /// Record a course as finished. The in-progress list is left as is.
    pub fn add_finished_course(
        &mut self,
        course: impl Into<String>,
        policy: DuplicatePolicy,
    ) -> bool {
        let course = course.into();
        match policy {
            DuplicatePolicy::Suppress => push_unique(&mut self.finished_courses, course),
            DuplicatePolicy::Allow => {
                self.finished_courses.push(course);
                true
            }
        }
    }
}

impl Person for Student {
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
        Role::Student
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Surname: {}", self.surname)?;
        writeln!(f, "Average homework grade: {:.1}", self.average_grade())?;
        writeln!(
            f,
            "Courses in progress: {}",
            self.courses_in_progress.join(", ")
        )?;
        write!(f, "Finished courses: {}", self.finished_courses.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enroll_ignores_repeats() {
        let mut student = Student::new("Ruoy", "Eman", "female");
        assert!(student.enroll("Python"));
        assert!(!student.enroll("Python"));
        assert!(student.enroll("Git"));
        assert_eq!(student.courses_in_progress(), &["Python", "Git"]);
    }

    #[test]
    fn finishing_a_course_only_appends() {
        let mut student = Student::new("Ruoy", "Eman", "female");
        student.enroll("Python");
        student.enroll("Git");

        assert!(student.add_finished_course("Python", DuplicatePolicy::Suppress));
        assert_eq!(student.courses_in_progress(), &["Python", "Git"]);
        assert_eq!(student.finished_courses(), &["Python"]);
        assert!(student.is_enrolled("Python"));
    }

    #[test]
    fn duplicate_policy_controls_finished_list() {
        let mut student = Student::new("Ruoy", "Eman", "female");
        student.add_finished_course("Intro", DuplicatePolicy::Suppress);
        assert!(!student.add_finished_course("Intro", DuplicatePolicy::Suppress));
        assert_eq!(student.finished_courses().len(), 1);

        assert!(student.add_finished_course("Intro", DuplicatePolicy::Allow));
        assert_eq!(student.finished_courses(), &["Intro", "Intro"]);
    }

    #[test]
    fn display_without_grades() {
        let mut student = Student::new("Ruoy", "Eman", "female");
        student.enroll("Python");
        student.enroll("Git");
        student.add_finished_course("Intro", DuplicatePolicy::Suppress);

        assert_eq!(
            student.to_string(),
            "Name: Ruoy\nSurname: Eman\nAverage homework grade: 0.0\n\
             Courses in progress: Python, Git\nFinished courses: Intro"
        );
    }
}
