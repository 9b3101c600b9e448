use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// 授信申请请求体
///
/// 数值字段以原始 JSON 值接收：缺失和类型错误都必须报出具体字段名，
/// 不能在反序列化阶段被 serde 的通用报错吞掉
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreditApplicationReq {
    #[serde(rename = "accountId")]
    pub account_id: Option<String>,
    #[serde(rename = "monthlyIncome")]
    pub monthly_income: Option<Value>,
    #[serde(rename = "monthlyExpenses")]
    pub monthly_expenses: Option<Value>,
    pub dependents: Option<Value>,
    #[serde(rename = "requestedAmount")]
    pub requested_amount: Option<Value>,
}

/// 校验通过的申请数据
#[derive(Debug, Clone)]
pub struct ValidCreditApplication {
    pub account_id: String,
    pub monthly_income: Decimal,
    pub monthly_expenses: Decimal,
    pub dependents: Decimal,
    pub requested_amount: Decimal,
}

impl CreditApplicationReq {
    /// 两轮校验，都只报出第一个不合格的字段：
    /// 先按声明顺序检查五个必填字段是否存在，
    /// 再按同样顺序检查四个数值字段的类型与范围
    pub fn validate(self) -> AppResult<ValidCreditApplication> {
        let account_id = self.account_id.ok_or_else(|| missing("accountId"))?;
        let monthly_income = self.monthly_income.ok_or_else(|| missing("monthlyIncome"))?;
        let monthly_expenses = self
            .monthly_expenses
            .ok_or_else(|| missing("monthlyExpenses"))?;
        let dependents = self.dependents.ok_or_else(|| missing("dependents"))?;
        let requested_amount = self
            .requested_amount
            .ok_or_else(|| missing("requestedAmount"))?;

        let monthly_income = require_amount("monthlyIncome", &monthly_income)?;
        let monthly_expenses = require_amount("monthlyExpenses", &monthly_expenses)?;
        let dependents = require_amount("dependents", &dependents)?;
        let requested_amount = require_amount("requestedAmount", &requested_amount)?;

        Ok(ValidCreditApplication {
            account_id,
            monthly_income,
            monthly_expenses,
            dependents,
            requested_amount,
        })
    }
}

fn missing(field: &str) -> AppError {
    AppError::validation(format!("Missing required field: {}", field))
}

fn invalid(field: &str) -> AppError {
    AppError::validation(format!("{} must be a positive number", field))
}

/// 非负数值检查
///
/// serde_json::Number 先经十进制解析再比较，金额不走浮点
fn require_amount(field: &str, value: &Value) -> AppResult<Decimal> {
    let amount = match value {
        Value::Number(n) => n.to_string().parse::<Decimal>().ok(),
        _ => None,
    }
    .ok_or_else(|| invalid(field))?;

    if amount < Decimal::ZERO {
        return Err(invalid(field));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: serde_json::Value) -> CreditApplicationReq {
        serde_json::from_value(body).unwrap()
    }

    fn full_body() -> serde_json::Value {
        json!({
            "accountId": "AC123",
            "monthlyIncome": 5000,
            "monthlyExpenses": 2000,
            "dependents": 2,
            "requestedAmount": 10000
        })
    }

    #[test]
    fn test_valid_payload() {
        let valid = parse(full_body()).validate().unwrap();
        assert_eq!(valid.account_id, "AC123");
        assert_eq!(valid.monthly_income, Decimal::from(5000));
        assert_eq!(valid.monthly_expenses, Decimal::from(2000));
        assert_eq!(valid.dependents, Decimal::from(2));
        assert_eq!(valid.requested_amount, Decimal::from(10000));
    }

    #[test]
    fn test_zero_amounts_are_valid() {
        let mut body = full_body();
        body["monthlyIncome"] = json!(0);
        body["requestedAmount"] = json!(0.0);
        assert!(parse(body).validate().is_ok());
    }

    #[test]
    fn test_fractional_amounts_are_valid() {
        let mut body = full_body();
        body["monthlyIncome"] = json!(5000.75);
        let valid = parse(body).validate().unwrap();
        assert_eq!(valid.monthly_income, "5000.75".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_missing_fields_reported_in_order() {
        let err = parse(json!({})).validate().unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: accountId");

        let mut body = full_body();
        body.as_object_mut().unwrap().remove("monthlyExpenses");
        let err = parse(body).validate().unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: monthlyExpenses");

        let mut body = full_body();
        body.as_object_mut().unwrap().remove("dependents");
        body.as_object_mut().unwrap().remove("requestedAmount");
        let err = parse(body).validate().unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: dependents");
    }

    #[test]
    fn test_presence_checked_before_ranges() {
        // requestedAmount 缺失且 monthlyIncome 为负：先报缺失
        let mut body = full_body();
        body["monthlyIncome"] = json!(-1);
        body.as_object_mut().unwrap().remove("requestedAmount");
        let err = parse(body).validate().unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: requestedAmount");
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut body = full_body();
        body["requestedAmount"] = json!(-10000);
        let err = parse(body).validate().unwrap_err();
        assert_eq!(err.to_string(), "requestedAmount must be a positive number");
    }

    #[test]
    fn test_non_numeric_amount_rejected() {
        let mut body = full_body();
        body["monthlyIncome"] = json!("5000");
        let err = parse(body).validate().unwrap_err();
        assert_eq!(err.to_string(), "monthlyIncome must be a positive number");

        let mut body = full_body();
        body["dependents"] = json!(true);
        let err = parse(body).validate().unwrap_err();
        assert_eq!(err.to_string(), "dependents must be a positive number");
    }

    #[test]
    fn test_numeric_fields_reported_in_order() {
        let mut body = full_body();
        body["monthlyExpenses"] = json!(-1);
        body["requestedAmount"] = json!("abc");
        let err = parse(body).validate().unwrap_err();
        assert_eq!(err.to_string(), "monthlyExpenses must be a positive number");
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let mut body = full_body();
        body["extra"] = json!(1);
        assert!(serde_json::from_value::<CreditApplicationReq>(body).is_err());
    }
}
