//! Current-week request and response payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::week::{Week, WeekError};

/// Raw week value as sent by clients: an integer or a label.
///
/// Fractional numbers and integers beyond `i64` land in `Other` so they are rejected as
/// invalid weeks instead of failing to deserialize.
#[derive(Debug, Clone, Deserialize, ToSchema, PartialEq)]
#[serde(untagged)]
pub enum WeekValue {
    Number(i64),
    Other(f64),
    Label(String),
}

impl TryFrom<WeekValue> for Week {
    type Error = WeekError;

    fn try_from(value: WeekValue) -> Result<Self, Self::Error> {
        match value {
            WeekValue::Number(number) => Week::numbered(number),
            WeekValue::Other(number) => Err(WeekError::NotWhole(number.to_string())),
            WeekValue::Label(label) => Week::from_label(&label),
        }
    }
}

/// Body of `PUT /current-week`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct WeekUpdateRequest {
    pub week: WeekValue,
}

/// Current week, serialized as `{"week": 3}` or `{"week": "preseason"}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct WeekResponse {
    #[schema(value_type = WeekValue)]
    pub week: Week,
}

impl From<Week> for WeekResponse {
    fn from(week: Week) -> Self {
        Self { week }
    }
}
