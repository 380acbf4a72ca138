use grade_ledger::config::LedgerConfig;
use grade_ledger::demo::{Roster, RosterError};
use grade_ledger::models::*;
use grade_ledger::{Graded, Side};
use speculate2::speculate;

speculate! {
    before {
        let config = LedgerConfig::default();
        let mut roster = Roster::sample(&config);
    }

    describe "sample roster" {
        it "applies every sample rating" {
            let [student_1, student_2] = roster.students.as_slice() else {
                panic!("expected two students");
            };
            assert_eq!(student_1.grades().len(), 3);
            assert_eq!(student_1.average_grade(), 9.0);
            assert_eq!(student_2.average_grade(), 8.0);

            assert_eq!(roster.lecturers[0].average_grade(), 9.5);
            assert_eq!(roster.lecturers[1].average_grade(), 8.5);
        }

        it "orders the sample students" {
            assert!(roster.students[0] > roster.students[1]);
            assert!(roster.lecturers[0] > roster.lecturers[1]);
        }
    }

    describe "render_text" {
        it "prints people in the classic layout" {
            let text = roster.render_text(&config);

            assert!(text.starts_with(
                "Student 1:\nName: Ivan\nSurname: Andreev\nAverage homework grade: 9.0\n\
                 Courses in progress: Python, Git\nFinished courses: Introduction to programming\n"
            ));
            assert!(text.contains("Lecturer 2:\nName: Maria\nSurname: Sidorova\nAverage lecture grade: 8.5\n"));
            assert!(text.contains("Reviewer 1:\nName: Oleg\nSurname: Aleksandrov\n"));
        }

        it "prints comparisons and course averages" {
            let text = roster.render_text(&config);

            assert!(text.contains("student_1 < student_2: false\n"));
            assert!(text.contains("student_1 >= student_2: true\n"));
            assert!(text.contains("lecturer_1 == lecturer_2: false\n"));
            assert!(text.ends_with(
                "Average grade of students for course 'Python': 9.33\n\
                 Average grade of lecturers for course 'Git': 9.00\n"
            ));
        }

        it "honors the configured precision" {
            let precise = LedgerConfig::default().with_precision(3);
            let text = roster.render_text(&precise);
            assert!(text.contains("course 'Python': 9.333\n"));
        }
    }

    describe "course_averages" {
        it "reports zero for an unknown course" {
            assert_eq!(
                roster.course_averages("Rust", &config),
                "Average grade of students for course 'Rust': 0.00\n\
                 Average grade of lecturers for course 'Rust': 0.00\n"
            );
        }
    }

    describe "summaries" {
        it "lists every person with role-specific fields" {
            let summaries = roster.summaries(&config);
            assert_eq!(summaries.len(), 8);

            let roles: Vec<Role> = summaries.iter().map(|s| s.role).collect();
            assert_eq!(roles[..2], [Role::Student, Role::Student]);
            assert_eq!(roles[6..], [Role::Mentor, Role::Mentor]);

            assert_eq!(summaries[2].average_grade, Some(9.5));
            assert_eq!(summaries[4].average_grade, None);
            assert_eq!(summaries[4].courses_attached, vec!["Python", "Git"]);
        }
    }

    describe "rate_homework" {
        it "records a grade through roster positions" {
            let outcome = roster.rate_homework(1, 1, "Git", 10).expect("known people");
            assert!(outcome.is_ok());
            assert_eq!(roster.students[0].course_average("Git"), 9.0);
        }

        it "returns the refusal for an ineligible course" {
            let outcome = roster.rate_homework(1, 2, "SQL", 10).expect("known people");
            assert_eq!(outcome.unwrap_err().side(), Some(Side::Rater));
        }

        it "rejects unknown positions" {
            assert!(matches!(
                roster.rate_homework(3, 1, "Python", 5),
                Err(RosterError::UnknownReviewer(3))
            ));
            assert!(matches!(
                roster.rate_homework(1, 0, "Python", 5),
                Err(RosterError::UnknownStudent(0))
            ));
        }
    }
}
