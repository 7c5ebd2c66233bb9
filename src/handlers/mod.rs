pub mod dashboard;
pub mod health;
pub mod report;

use std::sync::Arc;

use actix_web::web;

use crate::config::AbsentCellStyle;
use crate::models::TickerGroups;
use crate::services::dashboard::DashboardPage;
use crate::services::quote::QuoteSource;

/// 各请求共享的只读状态
pub struct AppState {
    pub source: Arc<dyn QuoteSource>,
    pub groups: TickerGroups,
    pub absent_cell: AbsentCellStyle,
    pub page: DashboardPage,
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.configure(dashboard::config).service(
        web::scope("/api/v1")
            .configure(health::config)
            .configure(report::config)
    );
}
