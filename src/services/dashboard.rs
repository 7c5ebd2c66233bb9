//! 看板页面渲染
//!
//! 每个分组一个标题、失败提示和一张表格，跌幅单元格标红。
//! 页面结构见 templates/dashboard.html，由 tera 负责转义

use serde::Serialize;
use tera::{Context, Tera};

use crate::config::AbsentCellStyle;
use crate::models::{DashboardReport, GroupTable};
use crate::services::format::render_table;

const TEMPLATE_NAME: &str = "dashboard.html";
const TEMPLATE: &str = include_str!("../../templates/dashboard.html");

#[derive(Serialize)]
struct PageData<'a> {
    generated_at: &'a str,
    groups: Vec<GroupTable>,
}

/// 看板页面模板，启动时编译一次，各请求共享
pub struct DashboardPage {
    tera: Tera,
}

impl DashboardPage {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        // 模板名以 .html 结尾，tera 默认开启自动转义
        tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;
        Ok(Self { tera })
    }

    /// 渲染完整看板页面
    pub fn render(
        &self,
        report: &DashboardReport,
        absent: AbsentCellStyle,
    ) -> Result<String, tera::Error> {
        let data = PageData {
            generated_at: &report.generated_at,
            groups: report
                .groups
                .iter()
                .map(|group| render_table(group, absent))
                .collect(),
        };
        let context = Context::from_serialize(&data)?;
        self.tera.render(TEMPLATE_NAME, &context)
    }
}
