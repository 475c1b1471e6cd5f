use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::database::models::Ponto;
use crate::database::PontoRepository;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct CreatePontoRequest {
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePontoRequest {
    pub name: Option<String>,
}

/// GET /api/mapas/:id/pontos - pontos of a mapa. An unknown mapa id
/// yields an empty list, not a 404.
pub async fn list(
    State(pool): State<SqlitePool>,
    Path(mapa_id): Path<i64>,
) -> Result<Json<Vec<Ponto>>, ApiError> {
    let pontos = PontoRepository::new(pool).list_for_mapa(mapa_id).await?;
    Ok(Json(pontos))
}

/// POST /api/mapas/:id/pontos - create a ponto; name, latitude and
/// longitude are all required. The mapa itself is not looked up.
pub async fn create(
    State(pool): State<SqlitePool>,
    Path(mapa_id): Path<i64>,
    Json(payload): Json<CreatePontoRequest>,
) -> Result<(StatusCode, Json<Ponto>), ApiError> {
    let (Some(name), Some(latitude), Some(longitude)) =
        (payload.name, payload.latitude, payload.longitude)
    else {
        return Err(ApiError::bad_request("all point fields are required"));
    };

    let ponto = PontoRepository::new(pool)
        .create(mapa_id, &name, latitude, longitude)
        .await?;
    Ok((StatusCode::CREATED, Json(ponto)))
}

/// PUT /api/pontos/:id - rename a ponto. A body without a name changes
/// nothing and still returns the current representation.
pub async fn update(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePontoRequest>,
) -> Result<Json<Ponto>, ApiError> {
    let repository = PontoRepository::new(pool);
    let ponto = repository.get_by_id(id).await?;

    let ponto = match payload.name {
        Some(name) => repository.rename(ponto.id, &name).await?,
        None => ponto,
    };

    Ok(Json(ponto))
}

/// DELETE /api/pontos/:id - delete a single ponto
pub async fn remove(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    PontoRepository::new(pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/mapas/:id/pontos - delete every ponto of a mapa; succeeds
/// even when the mapa has none
pub async fn remove_all(
    State(pool): State<SqlitePool>,
    Path(mapa_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let removed = PontoRepository::new(pool).delete_for_mapa(mapa_id).await?;
    tracing::debug!("removed {} pontos from mapa {}", removed, mapa_id);
    Ok(StatusCode::NO_CONTENT)
}
