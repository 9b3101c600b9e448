// 配置模块

pub mod app_config;

pub use app_config::{AppConfig, DatabaseConfig, ServerConfig};
