use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::{
    dao::models::GameEntity,
    dto::validation::{validate_game_date, validate_game_week},
};

/// Schedule entry as exchanged over the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct GameDto {
    #[serde(default)]
    pub id: Option<u32>,
    pub team_a_id: u32,
    pub team_b_id: u32,
    pub score_a: u32,
    pub score_b: u32,
    /// Calendar date, `YYYY-MM-DD`.
    #[serde(default)]
    pub date: Option<String>,
    /// Regular-season week (1-14). Accepted as any integer so out-of-range values are
    /// reported as validation failures.
    #[serde(default)]
    pub week: Option<i64>,
}

impl Validate for GameDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(ref date) = self.date {
            if let Err(e) = validate_game_date(date) {
                errors.add("date", e);
            }
        }

        if let Some(week) = self.week {
            if let Err(e) = validate_game_week(week) {
                errors.add("week", e);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl From<GameDto> for GameEntity {
    fn from(dto: GameDto) -> Self {
        Self {
            id: dto.id,
            team_a_id: dto.team_a_id,
            team_b_id: dto.team_b_id,
            score_a: dto.score_a,
            score_b: dto.score_b,
            date: dto.date,
            week: dto.week.and_then(|week| u8::try_from(week).ok()),
        }
    }
}

impl From<GameEntity> for GameDto {
    fn from(entity: GameEntity) -> Self {
        Self {
            id: entity.id,
            team_a_id: entity.team_a_id,
            team_b_id: entity.team_b_id,
            score_a: entity.score_a,
            score_b: entity.score_b,
            date: entity.date,
            week: entity.week.map(i64::from),
        }
    }
}
