use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use super::SystemService;
use crate::models::{ApiResponse, AppStartTime, system::responses::HealthResponse};

pub async fn health(service: &SystemService, req: &HttpRequest) -> ActixResult<HttpResponse> {
    let config = service.get_config();

    let uptime_seconds = req
        .app_data::<web::Data<AppStartTime>>()
        .map(|start| {
            chrono::Utc::now()
                .signed_duration_since(start.start_datetime)
                .num_seconds()
        })
        .unwrap_or_default();

    let response = HealthResponse {
        status: "ok".to_string(),
        system_name: config.app.system_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: config.app.environment.clone(),
        uptime_seconds,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Service is healthy")))
}
