//! League scheduling phase: a numbered week or the preseason.

use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// First week of the regular season.
pub const FIRST_WEEK: u8 = 1;
/// Last week of the regular season.
pub const LAST_WEEK: u8 = 14;
const PRESEASON_LABEL: &str = "preseason";

/// Current scheduling phase of the league.
///
/// Serialized as a bare integer for numbered weeks and as the string `"preseason"` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Week {
    /// Regular-season week in `FIRST_WEEK..=LAST_WEEK`.
    Numbered(u8),
    /// Before week one.
    Preseason,
}

/// Rejected week values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WeekError {
    /// A label other than `"preseason"`.
    #[error("Week must be preseason or between 1 and 14")]
    UnknownLabel(String),
    /// An integer outside the regular season.
    #[error("Week must be between 1 and 14")]
    OutOfRange(i64),
    /// A number that is not a whole `i64`, kept as its JSON text.
    #[error("Week must be between 1 and 14")]
    NotWhole(String),
}

impl Week {
    /// Build a numbered week, rejecting values outside the regular season.
    pub fn numbered(value: i64) -> Result<Self, WeekError> {
        u8::try_from(value)
            .ok()
            .filter(|week| (FIRST_WEEK..=LAST_WEEK).contains(week))
            .map(Week::Numbered)
            .ok_or(WeekError::OutOfRange(value))
    }

    /// Build a week from its textual label. Only `"preseason"` is accepted.
    pub fn from_label(label: &str) -> Result<Self, WeekError> {
        if label == PRESEASON_LABEL {
            Ok(Week::Preseason)
        } else {
            Err(WeekError::UnknownLabel(label.to_owned()))
        }
    }
}

impl Default for Week {
    fn default() -> Self {
        Week::Numbered(FIRST_WEEK)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Week::Numbered(week) => write!(f, "week {week}"),
            Week::Preseason => f.write_str(PRESEASON_LABEL),
        }
    }
}

impl Serialize for Week {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Week::Numbered(week) => serializer.serialize_u8(*week),
            Week::Preseason => serializer.serialize_str(PRESEASON_LABEL),
        }
    }
}
