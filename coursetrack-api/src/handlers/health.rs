use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::database::Database;

pub async fn health(db: web::Data<Arc<Database>>) -> HttpResponse {
    let connected = match db.async_connection.lock().await {
        Ok(conn) => conn
            .query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
            .is_ok(),
        Err(e) => {
            tracing::warn!("Health check could not reach the database: {}", e);
            false
        }
    };

    if connected {
        HttpResponse::Ok().json(serde_json::json!({
            "status": "healthy",
            "database": "connected"
        }))
    } else {
        HttpResponse::InternalServerError().json(serde_json::json!({
            "status": "unhealthy",
            "database": "disconnected"
        }))
    }
}
