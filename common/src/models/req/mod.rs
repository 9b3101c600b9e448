pub mod credit_application_req;

pub use credit_application_req::{CreditApplicationReq, ValidCreditApplication};
