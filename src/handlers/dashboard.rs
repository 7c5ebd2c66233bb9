//! 看板页面
//!
//! GET / - 每次请求重新获取行情并渲染 Portfolio、Watchlist 两张表

use actix_web::{http::header::ContentType, web, HttpResponse, Result};

use super::AppState;
use crate::models::ApiResponse;
use crate::services::report_service::ReportBuilder;

pub async fn index(state: web::Data<AppState>) -> Result<HttpResponse> {
    let mut builder = ReportBuilder::new(state.source.as_ref());
    let report = builder.build_all(&state.groups).await;
    log::info!("看板生成完成，共请求 {} 只股票", builder.fetch_count());

    match state.page.render(&report, state.absent_cell) {
        Ok(html) => Ok(HttpResponse::Ok().content_type(ContentType::html()).body(html)),
        Err(e) => {
            log::error!("看板页面渲染失败: {:?}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error(format!("页面渲染失败: {}", e))))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AbsentCellStyle;
    use crate::models::default_groups;
    use crate::services::dashboard::DashboardPage;
    use crate::services::report_service::tests::MockSource;
    use actix_web::{test, App};
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_index_renders_both_groups() {
        let source = Arc::new(MockSource::new(&[
            ("MSFT", &[100.0, 90.0][..]),
            ("PPL", &[30.0, 31.5][..]),
        ]));
        let state = web::Data::new(AppState {
            source: source.clone(),
            groups: default_groups(),
            absent_cell: AbsentCellStyle::Blank,
            page: DashboardPage::new().unwrap(),
        });
        let app = test::init_service(App::new().app_data(state).configure(config)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains("<h2>Portfolio</h2>"));
        assert!(html.contains("<h2>Watchlist</h2>"));
        assert!(html.contains("<td class=\"negative\">-10.0%</td>"));
        assert!(html.contains("Failed to fetch data for CX"));
        assert_eq!(source.calls_for("PPL"), 1);
    }
}
