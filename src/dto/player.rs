use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dao::models::PlayerEntity;

/// Player as exchanged over the API. The same shape is accepted on create and update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct PlayerDto {
    /// Assigned on create when omitted.
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
    /// Lower is better; used for display ordering.
    pub rank: i32,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub table_hits: u32,
    #[serde(default)]
    pub throws: u32,
    #[serde(default)]
    pub catches: u32,
    #[serde(default)]
    pub drops: u32,
    #[serde(default)]
    pub fifas: u32,
}

impl From<PlayerDto> for PlayerEntity {
    fn from(dto: PlayerDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            rank: dto.rank,
            points: dto.points,
            table_hits: dto.table_hits,
            throws: dto.throws,
            catches: dto.catches,
            drops: dto.drops,
            fifas: dto.fifas,
        }
    }
}

impl From<PlayerEntity> for PlayerDto {
    fn from(entity: PlayerEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            rank: entity.rank,
            points: entity.points,
            table_hits: entity.table_hits,
            throws: entity.throws,
            catches: entity.catches,
            drops: entity.drops,
            fifas: entity.fifas,
        }
    }
}
