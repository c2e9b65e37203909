use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use serde::Serialize;
use time::OffsetDateTime;

use crate::error::AppError;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct Banner {
    status: &'static str,
    message: &'static str,
}

/// GET /
pub async fn root() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(Banner {
        status: "ok",
        message: "Wordle backend is running",
    }))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    app_version: String,
    db: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<String>,
    migrations: String,
    time: String,
}

/// GET /health
async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let app_version = env!("CARGO_PKG_VERSION").to_string();

    let time = OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    let (db, db_error) = match app_state.store().ping().await {
        Ok(()) if app_state.db().is_some() => ("ok".to_string(), None),
        Ok(()) => ("memory".to_string(), None),
        Err(e) => ("error".to_string(), Some(format!("DB ping failed: {e}"))),
    };

    let migrations = match app_state.db() {
        Some(conn) if db_error.is_none() => match get_latest_migration_version(conn).await {
            Ok(Some(version)) => version,
            Ok(None) => "no_migrations".to_string(),
            Err(_) => "unknown".to_string(),
        },
        Some(_) => "unknown".to_string(),
        None => "n/a".to_string(),
    };

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        app_version,
        db,
        db_error,
        migrations,
        time,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(health));
}
