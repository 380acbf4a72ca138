use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use grade_ledger::config::LedgerConfig;
use grade_ledger::demo::Roster;
use grade_ledger::Grade;

#[derive(Parser)]
#[command(name = "ledger")]
#[command(about = "In-memory grade ledger for students, lecturers and reviewers")]
struct Cli {
    /// Decimal places for averages (overrides GRADE_LEDGER_PRECISION)
    #[arg(long, global = true)]
    precision: Option<usize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every person of the sample roster, comparisons and course averages
    Demo {
        /// Print summaries as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the students' and lecturers' average grade for one course
    CourseAverage {
        #[arg(short, long)]
        course: String,
    },
    /// Grade a student's homework on the sample roster and print the result
    Rate {
        /// Reviewer number as shown in the report (1-based)
        #[arg(long, default_value = "1")]
        reviewer: usize,
        /// Student number as shown in the report (1-based)
        #[arg(long, default_value = "1")]
        student: usize,
        #[arg(short, long)]
        course: String,
        /// Whole number between 1 and 10
        #[arg(short, long)]
        grade: String,
    },
}

/// Initialize tracing on stderr so reports on stdout stay clean
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "grade_ledger=info,ledger_core=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = LedgerConfig::from_env();
    if let Some(precision) = cli.precision {
        config = config.with_precision(precision);
    }
    tracing::debug!(?config, "Loaded configuration");

    let mut roster = Roster::sample(&config);

    match cli.command {
        Some(Commands::Demo { json: true }) => {
            let summaries = roster.summaries(&config);
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
        Some(Commands::Demo { json: false }) | None => {
            print!("{}", roster.render_text(&config));
        }
        Some(Commands::CourseAverage { course }) => {
            print!("{}", roster.course_averages(&course, &config));
        }
        Some(Commands::Rate {
            reviewer,
            student,
            course,
            grade,
        }) => {
            let grade: Grade = grade
                .parse()
                .with_context(|| format!("Cannot use {grade:?} as a grade"))?;
            match roster.rate_homework(reviewer, student, &course, grade.into())? {
                Ok(()) => {
                    tracing::info!(reviewer, student, %course, %grade, "Grade recorded");
                    println!("{}", roster.students[student - 1]);
                }
                Err(err) => println!("Rating refused: {err}"),
            }
        }
    }

    Ok(())
}
