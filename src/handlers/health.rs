//! 헬스체크 엔드포인트

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::db::Database;

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 사용합니다. 데이터베이스 ping이 실패하면
/// 503과 함께 `"status": "degraded"`를 반환합니다.
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "productos_api",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z",
///   "database": "up"
/// }
/// ```
#[get("/health")]
pub async fn health_check(db: web::Data<Database>) -> HttpResponse {
    let database_up = match db.ping().await {
        Ok(()) => true,
        Err(e) => {
            log::error!("헬스체크 DB ping 실패: {}", e);
            false
        }
    };

    let body = json!({
        "status": if database_up { "healthy" } else { "degraded" },
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "database": if database_up { "up" } else { "down" },
    });

    if database_up {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
