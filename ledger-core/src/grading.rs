//! Rating rules, averages and ordering by average grade.
//!
//! Only two rater/ratee pairs exist: a [`Reviewer`] grades a [`Student`]'s
//! homework and a [`Student`] rates a [`Lecturer`]'s lectures. Any other pair
//! is rejected by the compiler because no [`Rates`] impl exists for it.
//! Course membership is still checked at runtime on every call.

use std::cmp::Ordering;

use crate::error::{RateError, Side};
use crate::grade::Grade;
use crate::gradebook::{mean, GradeBook};
use crate::models::{Lecturer, Person, Reviewer, Student};

mod sealed {
    use crate::gradebook::GradeBook;

    pub trait GradeSink {
        fn grade_book_mut(&mut self) -> &mut GradeBook;
    }

    pub trait Rater {}
}

/// A person who receives grades.
pub trait Graded {
    fn grades(&self) -> &GradeBook;

    /// Mean of every grade across all courses, `0.0` without grades.
    fn average_grade(&self) -> f64 {
        self.grades().average()
    }

    fn course_average(&self, course: &str) -> f64 {
        self.grades().course_average(course)
    }
}

impl Graded for Student {
    fn grades(&self) -> &GradeBook {
        &self.grades
    }
}

impl Graded for Lecturer {
    fn grades(&self) -> &GradeBook {
        &self.grades
    }
}

/// A person grades can be written to, given the course accepts them.
pub trait Rateable: Graded + Person + sealed::GradeSink {
    /// Whether this person may receive grades for `course`.
    fn accepts_course(&self, course: &str) -> bool;
}

impl sealed::GradeSink for Student {
    fn grade_book_mut(&mut self) -> &mut GradeBook {
        &mut self.grades
    }
}

impl Rateable for Student {
    fn accepts_course(&self, course: &str) -> bool {
        self.is_enrolled(course)
    }
}

impl sealed::GradeSink for Lecturer {
    fn grade_book_mut(&mut self) -> &mut GradeBook {
        &mut self.grades
    }
}

impl Rateable for Lecturer {
    fn accepts_course(&self, course: &str) -> bool {
        self.teaches(course)
    }
}

/// `Self` may rate a `T` within the courses it is authorized for.
pub trait Rates<T: Rateable>: Person + sealed::Rater {
    fn may_rate(&self, course: &str) -> bool;
}

impl sealed::Rater for Reviewer {}

impl Rates<Student> for Reviewer {
    fn may_rate(&self, course: &str) -> bool {
        self.is_attached(course)
    }
}

impl sealed::Rater for Student {}

impl Rates<Lecturer> for Student {
    fn may_rate(&self, course: &str) -> bool {
        self.is_enrolled(course)
    }
}

/// Validate `grade` and record it for `ratee` under `course`.
///
/// Nothing is written unless every check passes.
pub fn rate<R, T>(rater: &R, ratee: &mut T, course: &str, grade: i64) -> Result<(), RateError>
where
    R: Rates<T>,
    T: Rateable,
{
    let grade = Grade::new(grade).inspect_err(|err| {
        tracing::debug!(rater = %rater.full_name(), course, %err, "grade rejected");
    })?;
    rate_grade(rater, ratee, course, grade)
}

/// Same as [`rate`] for an already validated grade.
pub fn rate_grade<R, T>(
    rater: &R,
    ratee: &mut T,
    course: &str,
    grade: Grade,
) -> Result<(), RateError>
where
    R: Rates<T>,
    T: Rateable,
{
    if !rater.may_rate(course) {
        tracing::debug!(
            rater = %rater.full_name(),
            role = rater.role().as_str(),
            course,
            "rater is not eligible for course"
        );
        return Err(RateError::ineligible(Side::Rater, course));
    }
    if !ratee.accepts_course(course) {
        tracing::debug!(
            ratee = %ratee.full_name(),
            role = ratee.role().as_str(),
            course,
            "ratee is not eligible for course"
        );
        return Err(RateError::ineligible(Side::Ratee, course));
    }

    ratee.grade_book_mut().record(course, grade);
    tracing::debug!(
        rater = %rater.full_name(),
        ratee = %ratee.full_name(),
        course,
        grade = grade.value(),
        "grade recorded"
    );
    Ok(())
}

impl Reviewer {
    /// Grade a student's homework for `course`.
    pub fn rate_hw(&self, student: &mut Student, course: &str, grade: i64) -> Result<(), RateError> {
        rate(self, student, course, grade)
    }
}

impl Student {
    /// Rate a lecturer's lectures for `course`.
    pub fn rate_lecture(
        &self,
        lecturer: &mut Lecturer,
        course: &str,
        grade: i64,
    ) -> Result<(), RateError> {
        rate(self, lecturer, course, grade)
    }
}

/// Mean of all grades recorded under `course` across `people`, `0.0` if none.
pub fn course_average_grade<'a, T, I>(people: I, course: &str) -> f64
where
    T: Graded + 'a,
    I: IntoIterator<Item = &'a T>,
{
    mean(
        people
            .into_iter()
            .flat_map(|p| p.grades().course_grades(course).iter().copied()),
    )
}

/// Total order on average grade.
pub fn cmp_by_average<T: Graded>(a: &T, b: &T) -> Ordering {
    a.average_grade().total_cmp(&b.average_grade())
}

/// Highest average first. Ties keep their input order.
pub fn rank_by_average<'a, T, I>(people: I) -> Vec<&'a T>
where
    T: Graded + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut ranked: Vec<&T> = people.into_iter().collect();
    ranked.sort_by(|a, b| cmp_by_average(*b, *a));
    ranked
}

// Students and lecturers compare by average grade, and only with their own role.

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        cmp_by_average(self, other).is_eq()
    }
}

impl Eq for Student {}

impl PartialOrd for Student {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Student {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_by_average(self, other)
    }
}

impl PartialEq for Lecturer {
    fn eq(&self, other: &Self) -> bool {
        cmp_by_average(self, other).is_eq()
    }
}

impl Eq for Lecturer {}

impl PartialOrd for Lecturer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Lecturer {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_by_average(self, other)
    }
}
