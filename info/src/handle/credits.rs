use actix_web::{get, web, HttpResponse, Responder};

use common::error::AppError;
use orm::entities::Credit;

use crate::state::AppState;

/// GET /accounts/{account_sid}/credits
///
/// 按账户列出已发放的信贷，按 start_date 倒序；没有记录返回空数组
#[get("/accounts/{account_sid}/credits")]
pub async fn list_credits(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let account_sid = path.into_inner();

    // 连接获取失败与语句执行失败分开处理：前者对外只返回固定文案
    let conn = state.rb.acquire().await.map_err(|e| {
        log::error!("数据库连接失败: {}", e);
        AppError::Connection
    })?;

    let credits = Credit::select_by_account_sid(&conn, &account_sid).await?;

    log::info!(
        "信贷查询: accountSid={}, 返回 {} 条记录",
        account_sid,
        credits.len()
    );
    Ok(HttpResponse::Ok().json(credits))
}
