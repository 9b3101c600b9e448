use actix_web::{error::JsonPayloadError, web, HttpResponse};

use crate::error::ErrorBody;

/// 自定义 JSON 错误处理器
///
/// 请求体缺失或不是合法 JSON 时走不到 handler，
/// 在这里统一转成 400 的 {"error": ...} 响应
pub fn json_error_handler(err: JsonPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    let error_msg = match &err {
        JsonPayloadError::ContentType => "Missing request body".to_string(),
        JsonPayloadError::Deserialize(e) => {
            format!("Invalid request body: {}", e)
        }
        JsonPayloadError::Overflow { limit } => {
            format!("Request body exceeds limit of {} bytes", limit)
        }
        _ => "Missing request body".to_string(),
    };

    actix_web::error::InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(ErrorBody { error: error_msg }),
    )
    .into()
}

/// 注册 JSON 错误处理器的辅助函数
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}
