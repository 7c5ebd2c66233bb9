//! 行情看板服务
//!
//! 拉取持仓与观察列表的 5 年日K线，计算各窗口涨跌幅，
//! 通过浏览器页面和 JSON 接口展示。数据来源：Yahoo Finance

mod config;     // 配置加载
mod error;      // 错误类型
mod handlers;   // HTTP 请求处理器
mod models;     // 数据模型定义
mod services;   // 业务逻辑服务

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use crate::config::AppConfig;
use crate::handlers::AppState;
use crate::models::default_groups;
use crate::services::dashboard::DashboardPage;
use crate::services::quote::YahooChartSource;

/// 未设置 RUST_LOG 时的默认过滤规则：依赖库 info，本服务不设上限（由配置收紧）
fn default_log_filter() -> String {
    format!("info,{}=trace", env!("CARGO_CRATE_NAME"))
}

/// 应用程序入口
///
/// 启动 HTTP 服务器，监听地址见配置（默认 0.0.0.0:8080）
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 初始化日志系统；未设置 RUST_LOG 时依赖库最多输出到 info，
    // 本服务的日志级别由配置文件决定（默认 info），调低时同样作用于依赖库
    env_logger::init_from_env(Env::default().default_filter_or(default_log_filter()));

    let config = AppConfig::load();
    if std::env::var_os("RUST_LOG").is_none() {
        log::set_max_level(config.log.level_filter());
    }

    let page = DashboardPage::new().map_err(|e| {
        log::error!("加载看板模板失败: {:?}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;

    let source = YahooChartSource::new(config.provider.clone()).map_err(|e| {
        log::error!("创建 HTTP 客户端失败: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;

    let state = web::Data::new(AppState {
        source: Arc::new(source),
        groups: default_groups(),
        absent_cell: config.display.absent_cell,
        page,
    });

    let bind_addr = config.bind_addr();
    log::info!("启动行情看板服务: http://{}", bind_addr);

    // 创建并启动 HTTP 服务器
    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())  // 添加请求日志中间件
            .app_data(state.clone())
            .configure(handlers::config)  // 配置路由
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(bind_addr)?.run().await
}
