// 数据库连接模块
use rbatis::RBatis;
use rbdc_mysql::driver::MysqlDriver;

use crate::config::DatabaseConfig;
use crate::error::{AppError, AppResult};

/// 创建数据库连接池
///
/// 这里只注册驱动，不立即建连接：数据库暂时不可达时服务照常启动，
/// 失败在每个请求的 acquire 阶段暴露
pub fn init_db(config: &DatabaseConfig) -> AppResult<RBatis> {
    let rb = RBatis::new();
    rb.init(MysqlDriver {}, &config.url())
        .map_err(|e| AppError::Database(e.to_string()))?;
    Ok(rb)
}

/// 测试数据库连接
pub async fn test_connection(rb: &RBatis) -> AppResult<()> {
    rb.query("SELECT 1", vec![]).await?;
    log::info!("✅ 数据库连接测试成功");
    Ok(())
}
