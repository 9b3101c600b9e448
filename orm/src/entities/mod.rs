pub mod credit;
pub mod credit_application;

pub use credit::Credit;
pub use credit_application::CreditApplication;
