/// Serde 序列化辅助函数
///
/// 提供常用的自定义序列化功能

/// Rbatis DateTime 的 ISO-8601 格式化模块
pub mod iso_datetime {
    use rbatis::rbdc::DateTime;
    use serde::Serializer;

    /// 将 Rbatis DateTime 序列化为 "YYYY-MM-DDTHH:MM:SS"，None 序列化为 null
    ///
    /// # Example (在 common crate 内部)
    /// ```
    /// use serde::Serialize;
    /// use rbatis::rbdc::DateTime;
    ///
    /// #[derive(Serialize)]
    /// struct MyStruct {
    ///     #[serde(serialize_with = "common::utils::serde_helpers::iso_datetime::serialize")]
    ///     pub start_date: Option<DateTime>,
    /// }
    /// ```
    pub fn serialize<S>(date: &Option<DateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(dt) => {
                let formatted = format!(
                    "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
                    dt.year(),
                    dt.mon(),
                    dt.day(),
                    dt.hour(),
                    dt.minute(),
                    dt.sec()
                );
                serializer.serialize_str(&formatted)
            }
            None => serializer.serialize_none(),
        }
    }
}

/// Decimal 按 JSON 数字输出
///
/// rust_decimal 默认序列化为字符串，对外接口的金额字段要求数字
pub mod decimal_number {
    use rust_decimal::prelude::ToPrimitive;
    use rust_decimal::Decimal;
    use serde::Serializer;

    pub fn serialize<S>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let value = amount
            .to_f64()
            .ok_or_else(|| serde::ser::Error::custom("Decimal out of f64 range"))?;
        serializer.serialize_f64(value)
    }
}

#[cfg(test)]
mod tests {
    use rbatis::rbdc::DateTime;
    use rust_decimal::Decimal;
    use serde::Serialize;
    use std::str::FromStr;

    #[derive(Serialize)]
    struct Row {
        #[serde(serialize_with = "super::iso_datetime::serialize")]
        start_date: Option<DateTime>,
        #[serde(serialize_with = "super::decimal_number::serialize")]
        balance: Decimal,
    }

    #[test]
    fn test_iso_datetime_and_decimal_number() {
        let row = Row {
            start_date: Some(DateTime::from_str("2024-01-15T10:30:00Z").unwrap()),
            balance: Decimal::from_str("1250.50").unwrap(),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["start_date"], "2024-01-15T10:30:00");
        assert_eq!(json["balance"], 1250.5);
    }

    #[test]
    fn test_none_datetime_serializes_as_null() {
        let row = Row {
            start_date: None,
            balance: Decimal::ZERO,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert!(json["start_date"].is_null());
    }
}
