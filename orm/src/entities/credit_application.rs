use rbatis::crud;
use rbatis::rbdc::datetime::DateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 授信申请表
///
/// 本系统只写入，申请被记录后不在这里评估或修改
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditApplication {
    pub id: Option<i64>,
    pub account_sid: String,
    pub account_id: String,
    pub monthly_income: Decimal,
    pub monthly_expenses: Decimal,
    // dependents 接受任意非负数值，入库时由 MySQL 收敛为整数
    pub dependents: Decimal,
    pub requested_amount: Decimal,
    pub application_date: Option<DateTime>,
}

crud!(CreditApplication {}, "credit_applications");

impl CreditApplication {
    pub const TABLE_NAME: &'static str = "credit_applications";
}
