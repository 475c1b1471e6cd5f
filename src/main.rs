use axum::{routing::get, Router};
use sqlx::SqlitePool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use mapas_api::config::AppConfig;
use mapas_api::database;
use mapas_api::handlers;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up MAPAS_DB_PATH, MAPAS_API_PORT, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    tracing::info!("Starting mapas API in {:?} mode", config.environment);

    let pool = database::connect(&config.database).await?;
    database::ensure_schema(&pool).await?;

    let app = app(pool);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    println!("🚀 Mapas API listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

fn app(pool: SqlitePool) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health::health))
        .merge(mapa_routes())
        .merge(ponto_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}

fn mapa_routes() -> Router<SqlitePool> {
    use axum::routing::delete;
    use mapas_api::handlers::{mapas, pontos};

    Router::new()
        // Collection operations
        .route("/api/mapas", get(mapas::list).post(mapas::create))
        .route("/api/mapas/:id", delete(mapas::remove))
        // Pontos scoped to a mapa
        .route(
            "/api/mapas/:id/pontos",
            get(pontos::list)
                .post(pontos::create)
                .delete(pontos::remove_all),
        )
}

fn ponto_routes() -> Router<SqlitePool> {
    use axum::routing::put;
    use mapas_api::handlers::pontos;

    Router::new()
        // Individual ponto operations
        .route("/api/pontos/:id", put(pontos::update).delete(pontos::remove))
}
