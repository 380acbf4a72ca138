use thiserror::Error;

/// Why a raw value could not become a [`Grade`](crate::Grade).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidGrade {
    #[error("grade must be between 1 and 10, got {0}")]
    OutOfRange(String),

    #[error("grade must be a whole number, got {0:?}")]
    NotAnInteger(String),
}

/// The party of a rating call that failed the course check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Rater,
    Ratee,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rater => "rater",
            Self::Ratee => "ratee",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rating that was refused. Nothing is recorded when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RateError {
    #[error("invalid grade: {0}")]
    Validation(#[from] InvalidGrade),

    #[error("{side} is not eligible for course '{course}'")]
    Eligibility { side: Side, course: String },
}

impl RateError {
    pub(crate) fn ineligible(side: Side, course: &str) -> Self {
        Self::Eligibility {
            side,
            course: course.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_eligibility(&self) -> bool {
        matches!(self, Self::Eligibility { .. })
    }

    /// The failing side for eligibility errors, `None` for validation errors.
    pub fn side(&self) -> Option<Side> {
        match self {
            Self::Validation(_) => None,
            Self::Eligibility { side, .. } => Some(*side),
        }
    }
}
