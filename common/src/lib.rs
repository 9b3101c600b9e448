// 公共模块
// 提供配置、数据库、日志、错误处理等通用功能

pub mod config;
pub mod database;
pub mod error;
pub mod logger;
pub mod middleware;
pub mod models;
pub mod utils;

// 重新导出常用类型和函数
pub use config::{AppConfig, DatabaseConfig, ServerConfig};
pub use error::{AppError, AppResult};
pub use logger::init_logger;

// 数据库相关
pub use database::{init_db, test_connection as test_db_connection};
