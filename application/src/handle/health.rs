use actix_web::{get, Responder};

/// GET /health
///
/// 存活探针，不检查任何依赖
#[get("/health")]
pub async fn health() -> impl Responder {
    "OK"
}
