//! Validation helpers for DTOs.

use time::{Date, macros::format_description};
use validator::ValidationError;

use crate::state::week::{FIRST_WEEK, LAST_WEEK};

/// Validates that a game date is a real calendar day written as `YYYY-MM-DD`.
///
/// # Examples
///
/// ```ignore
/// validate_game_date("2025-09-14") // Ok
/// validate_game_date("2025-02-30") // Err - no such day
/// validate_game_date("09/14/2025") // Err - wrong format
/// ```
pub fn validate_game_date(value: &str) -> Result<(), ValidationError> {
    let format = format_description!("[year]-[month]-[day]");
    if Date::parse(value, &format).is_err() {
        let mut err = ValidationError::new("game_date_format");
        err.message = Some(format!("Date must use YYYY-MM-DD (got `{value}`)").into());
        return Err(err);
    }

    Ok(())
}

/// Validates that a scheduled game falls inside the regular season.
pub fn validate_game_week(week: i64) -> Result<(), ValidationError> {
    if !(i64::from(FIRST_WEEK)..=i64::from(LAST_WEEK)).contains(&week) {
        let mut err = ValidationError::new("game_week_range");
        err.message = Some(
            format!("Week must be between {FIRST_WEEK} and {LAST_WEEK} (got {week})").into(),
        );
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_game_date_valid() {
        assert!(validate_game_date("2025-09-14").is_ok());
        assert!(validate_game_date("2024-02-29").is_ok()); // leap day
    }

    #[test]
    fn test_validate_game_date_invalid() {
        assert!(validate_game_date("2025-02-30").is_err());
        assert!(validate_game_date("2025-9-14").is_err());
        assert!(validate_game_date("09/14/2025").is_err());
        assert!(validate_game_date("").is_err());
    }

    #[test]
    fn test_validate_game_week() {
        assert!(validate_game_week(1).is_ok());
        assert!(validate_game_week(14).is_ok());
        assert!(validate_game_week(0).is_err());
        assert!(validate_game_week(15).is_err());
        assert!(validate_game_week(-1).is_err());
        assert!(validate_game_week(300).is_err());
    }
}
