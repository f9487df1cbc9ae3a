use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub time: DateTime<Utc>,
}

pub async fn health_handler() -> Json<Health> {
    Json(Health {
        status: "healthy",
        time: Utc::now(),
    })
}
