use chrono::Utc;
use sqlx::SqlitePool;

use crate::database::models::{Mapa, MapaSummary, Ponto};
use crate::database::DatabaseError;

pub struct MapaRepository {
    pool: SqlitePool,
}

impl MapaRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All mapas with their ponto counts, in store order
    pub async fn list_with_counts(&self) -> Result<Vec<MapaSummary>, DatabaseError> {
        let mapas = sqlx::query_as::<_, MapaSummary>(
            r#"
            SELECT m.id, m.name, m.created_at, COUNT(p.id) AS point_count
            FROM mapas m
            LEFT JOIN pontos p ON p.mapa_id = m.id
            GROUP BY m.id, m.name, m.created_at
            ORDER BY m.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(mapas)
    }

    pub async fn create(&self, name: &str) -> Result<Mapa, DatabaseError> {
        let mapa = sqlx::query_as::<_, Mapa>(
            "INSERT INTO mapas (name, created_at) VALUES (?, ?) RETURNING id, name, created_at",
        )
        .bind(name)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(mapa)
    }

    /// Delete a mapa and every ponto it owns in a single transaction.
    /// Children go first; the engine-level constraint is not relied on.
    pub async fn delete_cascade(&self, id: i64) -> Result<(), DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let found = sqlx::query_scalar::<_, i64>("SELECT id FROM mapas WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        if found.is_none() {
            return Err(DatabaseError::NotFound(format!("mapa {} not found", id)));
        }

        sqlx::query("DELETE FROM pontos WHERE mapa_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM mapas WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}

pub struct PontoRepository {
    pool: SqlitePool,
}

impl PontoRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Pontos owned by a mapa. An unknown mapa id yields an empty list,
    /// not an error.
    pub async fn list_for_mapa(&self, mapa_id: i64) -> Result<Vec<Ponto>, DatabaseError> {
        let pontos = sqlx::query_as::<_, Ponto>(
            "SELECT id, name, latitude, longitude, mapa_id FROM pontos WHERE mapa_id = ? ORDER BY id",
        )
        .bind(mapa_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(pontos)
    }

    /// Insert a ponto under the given mapa. The mapa id is taken as-is;
    /// whether it references an existing mapa is not checked here.
    pub async fn create(
        &self,
        mapa_id: i64,
        name: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<Ponto, DatabaseError> {
        let ponto = sqlx::query_as::<_, Ponto>(
            r#"
            INSERT INTO pontos (name, latitude, longitude, mapa_id)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, latitude, longitude, mapa_id
            "#,
        )
        .bind(name)
        .bind(latitude)
        .bind(longitude)
        .bind(mapa_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(ponto)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Ponto, DatabaseError> {
        let ponto = sqlx::query_as::<_, Ponto>(
            "SELECT id, name, latitude, longitude, mapa_id FROM pontos WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        ponto.ok_or_else(|| DatabaseError::NotFound(format!("ponto {} not found", id)))
    }

    /// Change a ponto's name; coordinates are untouched
    pub async fn rename(&self, id: i64, name: &str) -> Result<Ponto, DatabaseError> {
        let ponto = sqlx::query_as::<_, Ponto>(
            r#"
            UPDATE pontos SET name = ?
            WHERE id = ?
            RETURNING id, name, latitude, longitude, mapa_id
            "#,
        )
        .bind(name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        ponto.ok_or_else(|| DatabaseError::NotFound(format!("ponto {} not found", id)))
    }

    pub async fn delete(&self, id: i64) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM pontos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!("ponto {} not found", id)));
        }

        Ok(())
    }

    /// Delete every ponto owned by a mapa. Deleting zero rows is not an
    /// error; the count of removed rows is returned.
    pub async fn delete_for_mapa(&self, mapa_id: i64) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM pontos WHERE mapa_id = ?")
            .bind(mapa_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
