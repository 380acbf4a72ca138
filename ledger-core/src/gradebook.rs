use crate::grade::Grade;

/// All grades received for one course, in the order they were given.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CourseGrades {
    course: String,
    grades: Vec<Grade>,
}

/// Per-course grade lists of a single person.
///
/// Courses keep the order in which their first grade arrived and each course
/// has exactly one list. Lists only ever grow; [`record`](Self::record) is the
/// only way in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GradeBook {
    entries: Vec<CourseGrades>,
}

impl GradeBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a grade to `course`, creating the list on first use.
    pub fn record(&mut self, course: &str, grade: Grade) {
        match self.entries.iter_mut().find(|e| e.course == course) {
            Some(entry) => entry.grades.push(grade),
            None => self.entries.push(CourseGrades {
                course: course.to_string(),
                grades: vec![grade],
            }),
        }
    }

    /// Grades for `course`, empty when none were recorded.
    pub fn course_grades(&self, course: &str) -> &[Grade] {
        self.entries
            .iter()
            .find(|e| e.course == course)
            .map(|e| e.grades.as_slice())
            .unwrap_or(&[])
    }

    pub fn courses(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.course.as_str())
    }

    /// Every grade across all courses.
    pub fn all_grades(&self) -> impl Iterator<Item = Grade> + '_ {
        self.entries.iter().flat_map(|e| e.grades.iter().copied())
    }

    /// Total number of grades.
    pub fn len(&self) -> usize {
        self.entries.iter().map(|e| e.grades.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn average(&self) -> f64 {
        mean(self.all_grades())
    }

    pub fn course_average(&self, course: &str) -> f64 {
        mean(self.course_grades(course).iter().copied())
    }
}

/// Arithmetic mean, `0.0` for an empty sequence.
pub fn mean(grades: impl IntoIterator<Item = Grade>) -> f64 {
    let (sum, count) = grades
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), g| {
            (sum + u64::from(g.value()), count + 1)
        });
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}
