//! The sample roster used by the `ledger` binary.
//!
//! Two students, two lecturers, two reviewers and two plain mentors, with the
//! same courses and ratings as the original classroom exercise.

use thiserror::Error;

use ledger_core::models::{Lecturer, Mentor, Person, Reviewer, Student};
use ledger_core::{course_average_grade, RateError};

use crate::config::LedgerConfig;
use crate::report::{comparison_report, course_average_line, PersonSummary};

/// Errors from looking people up in a roster.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("No student #{0} in the roster")]
    UnknownStudent(usize),

    #[error("No reviewer #{0} in the roster")]
    UnknownReviewer(usize),
}

/// Every person of one ledger session.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub students: Vec<Student>,
    pub lecturers: Vec<Lecturer>,
    pub reviewers: Vec<Reviewer>,
    pub mentors: Vec<Mentor>,
}

impl Roster {
    /// Build the sample roster and apply its ratings.
    pub fn sample(config: &LedgerConfig) -> Self {
        let mut student_1 = Student::new("Ivan", "Andreev", "male");
        let mut student_2 = Student::new("Andrey", "Ivanov", "male");

        let mut lecturer_1 = Lecturer::new("Irina", "Sergeeva");
        let mut lecturer_2 = Lecturer::new("Maria", "Sidorova");

        let mut reviewer_1 = Reviewer::new("Oleg", "Aleksandrov");
        let mut reviewer_2 = Reviewer::new("Aleksey", "Petrov");

        let mentor_1 = Mentor::new("Mikhail", "Mikhailov");
        let mentor_2 = Mentor::new("Vasya", "Vasiliev");

        for course in ["Python", "Git"] {
            student_1.enroll(course);
            lecturer_1.attach_course(course);
            reviewer_1.attach_course(course);
        }
        for course in ["Python", "SQL"] {
            student_2.enroll(course);
            lecturer_2.attach_course(course);
            reviewer_2.attach_course(course);
        }
        student_1.add_finished_course("Introduction to programming", config.finished_courses);

        let results = [
            reviewer_1.rate_hw(&mut student_1, "Python", 10),
            reviewer_1.rate_hw(&mut student_1, "Python", 9),
            reviewer_1.rate_hw(&mut student_1, "Git", 8),
            reviewer_2.rate_hw(&mut student_2, "Python", 9),
            reviewer_2.rate_hw(&mut student_2, "SQL", 7),
            reviewer_2.rate_hw(&mut student_2, "SQL", 8),
            student_1.rate_lecture(&mut lecturer_1, "Python", 10),
            student_1.rate_lecture(&mut lecturer_1, "Git", 9),
            student_2.rate_lecture(&mut lecturer_2, "Python", 9),
            student_2.rate_lecture(&mut lecturer_2, "SQL", 8),
        ];
        for result in results {
            log_rejection(result);
        }

        Self {
            students: vec![student_1, student_2],
            lecturers: vec![lecturer_1, lecturer_2],
            reviewers: vec![reviewer_1, reviewer_2],
            mentors: vec![mentor_1, mentor_2],
        }
    }

    /// Have reviewer `#reviewer` grade the homework of student `#student`
    /// (both 1-based, as printed by the text report).
    pub fn rate_homework(
        &mut self,
        reviewer: usize,
        student: usize,
        course: &str,
        grade: i64,
    ) -> Result<Result<(), RateError>, RosterError> {
        let rater = reviewer
            .checked_sub(1)
            .and_then(|i| self.reviewers.get(i))
            .ok_or(RosterError::UnknownReviewer(reviewer))?;
        let index = student
            .checked_sub(1)
            .ok_or(RosterError::UnknownStudent(student))?;
        let ratee = self
            .students
            .get_mut(index)
            .ok_or(RosterError::UnknownStudent(student))?;

        let result = rater.rate_hw(ratee, course, grade);
        if let Err(err) = &result {
            tracing::warn!(
                reviewer = %rater.full_name(),
                student = %ratee.full_name(),
                "Rating refused: {}",
                err
            );
        }
        Ok(result)
    }

    pub fn summaries(&self, config: &LedgerConfig) -> Vec<PersonSummary> {
        let students = self
            .students
            .iter()
            .map(|s| PersonSummary::student(s, config.precision));
        let lecturers = self
            .lecturers
            .iter()
            .map(|l| PersonSummary::lecturer(l, config.precision));
        let reviewers = self.reviewers.iter().map(PersonSummary::reviewer);
        let mentors = self.mentors.iter().map(PersonSummary::mentor);

        students
            .chain(lecturers)
            .chain(reviewers)
            .chain(mentors)
            .collect()
    }

    /// Course average lines for students and lecturers.
    pub fn course_averages(&self, course: &str, config: &LedgerConfig) -> String {
        let students = course_average_grade(&self.students, course);
        let lecturers = course_average_grade(&self.lecturers, course);
        format!(
            "{}\n{}\n",
            course_average_line("students", course, students, config.precision),
            course_average_line("lecturers", course, lecturers, config.precision),
        )
    }

    /// The full text report: every person, pairwise comparisons of the first
    /// two students and lecturers, then course averages.
    pub fn render_text(&self, config: &LedgerConfig) -> String {
        let mut output = String::new();

        for (i, student) in self.students.iter().enumerate() {
            output.push_str(&format!("Student {}:\n{}\n\n", i + 1, student));
        }
        for (i, lecturer) in self.lecturers.iter().enumerate() {
            output.push_str(&format!("Lecturer {}:\n{}\n\n", i + 1, lecturer));
        }
        for (i, reviewer) in self.reviewers.iter().enumerate() {
            output.push_str(&format!("Reviewer {}:\n{}\n\n", i + 1, reviewer));
        }

        if let [a, b, ..] = self.students.as_slice() {
            output.push_str("Student comparison:\n");
            output.push_str(&comparison_report("student_1", a, "student_2", b));
            output.push('\n');
        }
        if let [a, b, ..] = self.lecturers.as_slice() {
            output.push_str("Lecturer comparison:\n");
            output.push_str(&comparison_report("lecturer_1", a, "lecturer_2", b));
            output.push('\n');
        }

        output.push_str(&course_average_line(
            "students",
            "Python",
            course_average_grade(&self.students, "Python"),
            config.precision,
        ));
        output.push('\n');
        output.push_str(&course_average_line(
            "lecturers",
            "Git",
            course_average_grade(&self.lecturers, "Git"),
            config.precision,
        ));
        output.push('\n');
        output
    }
}

fn log_rejection(result: Result<(), RateError>) {
    if let Err(err) = result {
        tracing::warn!("Rating refused: {}", err);
    }
}
