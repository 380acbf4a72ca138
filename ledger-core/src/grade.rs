use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidGrade;

/// A single grade, always within `Grade::MIN..=Grade::MAX`.
///
/// The only ways to obtain one are the fallible conversions below, so a
/// `Grade` held anywhere in the ledger has already been validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Grade(u8);

impl Grade {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: i64) -> Result<Self, InvalidGrade> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(InvalidGrade::OutOfRange(value.to_string()));
        }
        Ok(Self(value as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Grade {
    type Error = InvalidGrade;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i32> for Grade {
    type Error = InvalidGrade;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

/// Whole-valued floats (`9.0`) are accepted, anything with a fraction is not.
impl TryFrom<f64> for Grade {
    type Error = InvalidGrade;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(InvalidGrade::NotAnInteger(value.to_string()));
        }
        if value < f64::from(Self::MIN) || value > f64::from(Self::MAX) {
            return Err(InvalidGrade::OutOfRange(value.to_string()));
        }
        Ok(Self(value as u8))
    }
}

impl FromStr for Grade {
    type Err = InvalidGrade;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Self::new(value);
        }
        match trimmed.parse::<f64>() {
            Ok(value) => Self::try_from(value),
            Err(_) => Err(InvalidGrade::NotAnInteger(trimmed.to_string())),
        }
    }
}

impl From<Grade> for i64 {
    fn from(grade: Grade) -> Self {
        i64::from(grade.0)
    }
}

impl From<Grade> for f64 {
    fn from(grade: Grade) -> Self {
        f64::from(grade.0)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert_eq!(Grade::new(1).map(Grade::value), Ok(1));
        assert_eq!(Grade::new(10).map(Grade::value), Ok(10));
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(Grade::new(0), Err(InvalidGrade::OutOfRange("0".to_string())));
        assert_eq!(Grade::new(11), Err(InvalidGrade::OutOfRange("11".to_string())));
        assert_eq!(Grade::new(-3), Err(InvalidGrade::OutOfRange("-3".to_string())));
    }

    #[test]
    fn huge_floats_report_their_own_value() {
        assert_eq!(
            Grade::try_from(1e20),
            Err(InvalidGrade::OutOfRange("100000000000000000000".to_string()))
        );
        assert_eq!(
            Grade::try_from(-12.0),
            Err(InvalidGrade::OutOfRange("-12".to_string()))
        );
        assert_eq!(
            "1e20".parse::<Grade>(),
            Err(InvalidGrade::OutOfRange("100000000000000000000".to_string()))
        );
    }

    #[test]
    fn rejects_fractional_floats() {
        assert!(matches!(
            Grade::try_from(9.5),
            Err(InvalidGrade::NotAnInteger(_))
        ));
        assert!(matches!(
            Grade::try_from(f64::NAN),
            Err(InvalidGrade::NotAnInteger(_))
        ));
        assert_eq!(Grade::try_from(9.0).map(Grade::value), Ok(9));
    }

    #[test]
    fn parses_strings() {
        assert_eq!(" 7 ".parse::<Grade>().map(Grade::value), Ok(7));
        assert_eq!("12".parse::<Grade>(), Err(InvalidGrade::OutOfRange("12".to_string())));
        assert_eq!(
            "9.5".parse::<Grade>(),
            Err(InvalidGrade::NotAnInteger("9.5".to_string()))
        );
        assert_eq!(
            "ten".parse::<Grade>(),
            Err(InvalidGrade::NotAnInteger("ten".to_string()))
        );
    }

    #[test]
    fn deserialization_validates() {
        let ok: Grade = serde_json::from_str("8").expect("valid grade");
        assert_eq!(ok.value(), 8);
        assert!(serde_json::from_str::<Grade>("0").is_err());
    }
}
