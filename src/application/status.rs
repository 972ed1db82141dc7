use actix_web::web::Data;
use actix_web::{HttpResponse, Responder};
use chrono::Utc;
use log::error;
use serde::{Deserialize, Serialize};

use crate::science::ScienceSettings;

#[derive(Serialize, Deserialize, Debug)]
pub struct HealthCheckResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub checks: HealthChecks,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct HealthChecks {
    pub configuration: CheckStatus,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CheckStatus {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub async fn health(settings: Data<ScienceSettings>) -> impl Responder {
    let configuration = match settings.science_yield() {
        Ok(_) => CheckStatus {
            status: "healthy".to_string(),
            message: None,
        },
        Err(e) => {
            error!("Configuration health check failed: {e}");
            CheckStatus {
                status: "unhealthy".to_string(),
                message: Some(e.to_string()),
            }
        }
    };
    let healthy = configuration.message.is_none();

    let response = HealthCheckResponse {
        status: if healthy { "healthy" } else { "unhealthy" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        checks: HealthChecks { configuration },
    };

    if healthy {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
