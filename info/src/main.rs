use std::sync::Arc;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};

use common::AppConfig;

mod handle;
mod state;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = AppConfig::from_env().expect("配置加载失败");

    common::init_logger();
    log::info!("启动信贷查询服务...");

    // 惰性初始化连接池：数据库暂时不可达时服务照常启动，
    // 失败在请求阶段以固定文案暴露
    let rb = common::init_db(&config.database).expect("数据库连接池初始化失败");

    // 测试数据库连接
    if let Err(e) = common::test_db_connection(&rb).await {
        log::error!("数据库连接测试失败: {}", e);
    }

    let state = state::AppState { rb: Arc::new(rb) };
    let state_data = web::Data::new(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    log::info!("🚀 信贷查询服务启动在: {}", addr);
    HttpServer::new(move || {
        App::new()
            // 全局中间件配置
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            // 注册全局数据
            .app_data(state_data.clone())
            .service(handle::health::health)
            .service(handle::credits::list_credits)
    })
    .bind(&addr)?
    .run()
    .await
}
