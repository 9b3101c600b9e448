use serde::Serialize;

/// 授信申请提交成功响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub success: bool,
    pub message: String,
    pub application_id: i64,
}

impl SubmissionResponse {
    pub fn submitted(application_id: i64) -> Self {
        Self {
            success: true,
            message: "Credit application submitted successfully".to_string(),
            application_id,
        }
    }
}
