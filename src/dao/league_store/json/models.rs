use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::state::week::Week;

/// Shape of `current_week.json` when written.
#[derive(Debug, Serialize)]
pub struct CurrentWeekDocument {
    pub week: Week,
}

/// Shape of `current_week.json` when read back; older files may carry the week as a string.
#[derive(Debug, Deserialize)]
pub struct StoredWeekDocument {
    #[serde(default)]
    pub week: Option<StoredWeek>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum StoredWeek {
    Number(i64),
    Label(String),
}

impl StoredWeekDocument {
    /// Resolve the persisted value, falling back to the default week when it is unusable.
    pub fn into_week(self) -> Week {
        let Some(stored) = self.week else {
            return Week::default();
        };

        let resolved = match &stored {
            StoredWeek::Number(number) => Week::numbered(*number),
            StoredWeek::Label(label) => match label.trim().parse::<i64>() {
                Ok(number) => Week::numbered(number),
                Err(_) => Week::from_label(label),
            },
        };

        resolved.unwrap_or_else(|err| {
            warn!(stored = ?stored, error = %err, "ignoring invalid persisted week");
            Week::default()
        })
    }
}
