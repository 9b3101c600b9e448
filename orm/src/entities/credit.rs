use rbatis::{crud, impl_select};
use rbatis::rbdc::datetime::DateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 已发放的信贷记录
///
/// 由外部系统写入，这里只按账户读取；序列化即对外响应格式：
/// 金额输出为数字，start_date 输出为 ISO-8601 字符串
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credit {
    pub id: Option<i64>,
    #[serde(serialize_with = "common::utils::serde_helpers::decimal_number::serialize")]
    pub balance: Decimal,
    #[serde(serialize_with = "common::utils::serde_helpers::decimal_number::serialize")]
    pub principal_amount: Decimal,
    #[serde(serialize_with = "common::utils::serde_helpers::iso_datetime::serialize")]
    pub start_date: Option<DateTime>,
    pub term: i32,
}

crud!(Credit {}, "credits");
impl_select!(Credit{select_by_account_sid(account_sid: &str) => "`where account_sid = #{account_sid} order by start_date desc`"}, "credits");

impl Credit {
    pub const TABLE_NAME: &'static str = "credits";
}
