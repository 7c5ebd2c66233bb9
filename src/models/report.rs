//! 报表模型
//!
//! 数值结果（GroupReport / DashboardReport）与展示结果（GroupTable）分开定义

use serde::Serialize;

use super::quote::QuoteRecord;

/// 表格列名
pub const COLUMNS: [&str; 9] = [
    "Ticker", "Price", "3-d", "7-d", "30-d", "90-d", "180-d", "1-yr", "5-yr",
];

/// 一个分组的计算结果
#[derive(Debug, Clone, Serialize)]
pub struct GroupReport {
    pub name: String,
    pub records: Vec<QuoteRecord>,
    /// 获取失败的提示信息，每只失败的股票一条
    pub warnings: Vec<String>,
}

/// 一次完整运行的结果
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    /// 生成时间（美东时间，RFC 3339）
    pub generated_at: String,
    pub groups: Vec<GroupReport>,
}

/// 单元格样式，由数值正负决定；序列化后即页面上的 CSS class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellStyle {
    Positive,
    Negative,
    Neutral,
    Missing,
}

impl CellStyle {
    pub fn from_value(value: f64) -> Self {
        if value > 0.0 {
            CellStyle::Positive
        } else if value < 0.0 {
            CellStyle::Negative
        } else {
            CellStyle::Neutral
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub text: Option<String>,
    pub style: CellStyle,
}

impl Cell {
    pub fn new(text: String, style: CellStyle) -> Self {
        Self { text: Some(text), style }
    }

    pub fn missing() -> Self {
        Self { text: None, style: CellStyle::Missing }
    }
}

/// 表格中的一行：Ticker 之后依次为 Price 和各窗口
#[derive(Debug, Clone, Serialize)]
pub struct QuoteRow {
    pub ticker: String,
    pub name: String,
    pub cells: Vec<Cell>,
}

/// 渲染后的分组表格
#[derive(Debug, Clone, Serialize)]
pub struct GroupTable {
    pub name: String,
    pub columns: Vec<&'static str>,
    pub rows: Vec<QuoteRow>,
    pub warnings: Vec<String>,
}
