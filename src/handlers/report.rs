//! 报表接口处理器
//!
//! ## API 列表
//! - GET /reports - 所有分组的计算结果（数值）
//! - GET /reports/{group} - 单个分组的表格（格式化后的单元格）
//! - GET /quotes/{symbol} - 单只股票的计算结果

use actix_web::{web, HttpResponse, Result};

use super::AppState;
use crate::models::{ApiResponse, DashboardReport, GroupTable, QuoteRecord, TickerEntry};
use crate::services::format::render_table;
use crate::services::metrics::compute_record;
use crate::services::report_service::ReportBuilder;

/// 获取所有分组的报表
///
/// GET /api/v1/reports
pub async fn get_reports(state: web::Data<AppState>) -> Result<HttpResponse> {
    let mut builder = ReportBuilder::new(state.source.as_ref());
    let report: DashboardReport = builder.build_all(&state.groups).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(report)))
}

/// 获取单个分组的表格
///
/// GET /api/v1/reports/{group}
///
/// # 参数
/// - group: 分组名称（忽略大小写，如 portfolio、watchlist）
pub async fn get_group_report(
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let name = path.into_inner();

    let group = match state.groups.find(&name) {
        Some(group) => group,
        None => {
            let response = ApiResponse::<GroupTable>::error(format!("未知分组: {}", name));
            return Ok(HttpResponse::NotFound().json(response));
        }
    };

    let mut builder = ReportBuilder::new(state.source.as_ref());
    let report = builder.build_group(group).await;
    let table = render_table(&report, state.absent_cell);
    Ok(HttpResponse::Ok().json(ApiResponse::success(table)))
}

/// 获取单只股票的计算结果
///
/// GET /api/v1/quotes/{symbol}
pub async fn get_quote(
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let symbol = path.into_inner();

    match state.source.fetch_history(&symbol).await {
        Ok(series) => {
            let record = compute_record(&TickerEntry::new(&symbol, &symbol), &series);
            Ok(HttpResponse::Ok().json(ApiResponse::success(record)))
        }
        Err(e) => {
            log::warn!("获取 {} 行情失败: {}", symbol, e);
            let response = ApiResponse::<QuoteRecord>::error(e.to_string());
            Ok(HttpResponse::BadGateway().json(response))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/reports")
            .route("", web::get().to(get_reports))
            .route("/{group}", web::get().to(get_group_report))
    )
    .route("/quotes/{symbol}", web::get().to(get_quote));
}
