use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::database::models::{Mapa, MapaSummary};
use crate::database::MapaRepository;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct CreateMapaRequest {
    pub name: Option<String>,
}

/// GET /api/mapas - list all mapas with their ponto counts
pub async fn list(State(pool): State<SqlitePool>) -> Result<Json<Vec<MapaSummary>>, ApiError> {
    let mapas = MapaRepository::new(pool).list_with_counts().await?;
    Ok(Json(mapas))
}

/// POST /api/mapas - create a mapa; name must be present and non-empty
pub async fn create(
    State(pool): State<SqlitePool>,
    Json(payload): Json<CreateMapaRequest>,
) -> Result<(StatusCode, Json<Mapa>), ApiError> {
    let name = match payload.name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => return Err(ApiError::bad_request("map name is required")),
    };

    let mapa = MapaRepository::new(pool).create(name).await?;
    Ok((StatusCode::CREATED, Json(mapa)))
}

/// DELETE /api/mapas/:id - delete a mapa and every ponto it owns
pub async fn remove(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    MapaRepository::new(pool).delete_cascade(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
