use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dao::models::TeamEntity;

/// Team as exchanged over the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct TeamDto {
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
    pub player1_id: u32,
    pub player2_id: u32,
    pub player3_id: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
}

impl From<TeamDto> for TeamEntity {
    fn from(dto: TeamDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            player1_id: dto.player1_id,
            player2_id: dto.player2_id,
            player3_id: dto.player3_id,
            wins: dto.wins,
            losses: dto.losses,
        }
    }
}

impl From<TeamEntity> for TeamDto {
    fn from(entity: TeamEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            player1_id: entity.player1_id,
            player2_id: entity.player2_id,
            player3_id: entity.player3_id,
            wins: entity.wins,
            losses: entity.losses,
        }
    }
}
