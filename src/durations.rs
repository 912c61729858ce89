//! Durations

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when converting minutes into a bookable duration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DurationError {
    /// The session length is not one of the offered durations.
    #[error("unsupported duration: {0} minutes (expected 60, 90 or 120)")]
    Unsupported(u32),
}

/// Session lengths offered for booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum StandardDuration {
    /// 60 minutes.
    Sixty,

    /// 90 minutes.
    Ninety,

    /// 120 minutes.
    OneTwenty,
}

impl StandardDuration {
    /// Every offered duration, shortest first.
    pub const ALL: [StandardDuration; 3] = [Self::Sixty, Self::Ninety, Self::OneTwenty];

    /// Session length in minutes.
    pub const fn minutes(self) -> u32 {
        match self {
            Self::Sixty => 60,
            Self::Ninety => 90,
            Self::OneTwenty => 120,
        }
    }
}

impl TryFrom<u32> for StandardDuration {
    type Error = DurationError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|duration| duration.minutes() == minutes)
            .ok_or(DurationError::Unsupported(minutes))
    }
}

impl From<StandardDuration> for u32 {
    fn from(duration: StandardDuration) -> Self {
        duration.minutes()
    }
}

impl fmt::Display for StandardDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.minutes())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn standard_minutes_convert() -> TestResult {
        assert_eq!(StandardDuration::try_from(60)?, StandardDuration::Sixty);
        assert_eq!(StandardDuration::try_from(90)?, StandardDuration::Ninety);
        assert_eq!(StandardDuration::try_from(120)?, StandardDuration::OneTwenty);

        Ok(())
    }

    #[test]
    fn other_minutes_are_rejected() {
        assert_eq!(
            StandardDuration::try_from(45),
            Err(DurationError::Unsupported(45))
        );
        assert_eq!(
            StandardDuration::try_from(0),
            Err(DurationError::Unsupported(0))
        );
    }

    #[test]
    fn displays_minutes() {
        assert_eq!(StandardDuration::Ninety.to_string(), "90 min");
    }
}
