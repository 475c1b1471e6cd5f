use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A named container owning zero or more pontos
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Mapa {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// List projection of a mapa with its owned-ponto count
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MapaSummary {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub point_count: i64,
}
