use actix_web::{post, web, HttpResponse, Responder};
use rbatis::rbdc::datetime::DateTime;

use common::error::AppError;
use common::models::{CreditApplicationReq, SubmissionResponse};
use orm::entities::CreditApplication;

use crate::state::AppState;

/// POST /accounts/{account_sid}/credit-applications
///
/// 申请只做记录，不做任何审批判断
#[post("/accounts/{account_sid}/credit-applications")]
pub async fn submit_application(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<CreditApplicationReq>,
) -> Result<impl Responder, AppError> {
    let account_sid = path.into_inner();
    let valid = payload.into_inner().validate()?;

    log::info!(
        "收到授信申请: accountSid={}, accountId={}",
        account_sid,
        valid.account_id
    );

    // 连接获取失败与语句执行失败分开处理：前者对外只返回固定文案
    let conn = state.rb.acquire().await.map_err(|e| {
        log::error!("数据库连接失败: {}", e);
        AppError::Connection
    })?;

    let application = CreditApplication {
        id: None,
        account_sid,
        account_id: valid.account_id,
        monthly_income: valid.monthly_income,
        monthly_expenses: valid.monthly_expenses,
        dependents: valid.dependents,
        requested_amount: valid.requested_amount,
        application_date: Some(DateTime::now()),
    };

    let result = CreditApplication::insert(&conn, &application).await?;
    let application_id = result
        .last_insert_id
        .as_i64()
        .ok_or_else(|| AppError::internal("insert returned no id"))?;

    log::info!("授信申请已保存: applicationId={}", application_id);
    Ok(HttpResponse::Created().json(SubmissionResponse::submitted(application_id)))
}
