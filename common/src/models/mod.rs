// 数据模型

pub mod dto;
pub mod req;

pub use dto::SubmissionResponse;
pub use req::{CreditApplicationReq, ValidCreditApplication};
