//! 展示格式化
//!
//! 把数值结果转换为带样式提示的单元格文本

use crate::config::AbsentCellStyle;
use crate::models::{
    Cell, CellStyle, GroupReport, GroupTable, QuoteRecord, QuoteRow, WindowChange, COLUMNS,
    WINDOWS,
};

/// 旧版脚本中缺失值的占位文本
const LEGACY_PLACEHOLDER: &str = "None";

/// 格式化为美元金额，如 `$1,234.50`、`-$0.75`
///
/// 与 `round1` 一致，按二进制精确值舍入到分，居中时取偶数位
pub fn format_usd(value: f64) -> String {
    let text = format!("{:.2}", value.abs());
    let (dollars, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let is_zero = text.bytes().all(|b| b == b'0' || b == b'.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    format!("{}${}.{}", sign, group_thousands(dollars), cents)
}

/// 千位分隔
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// 格式化百分比，保留一位小数，如 `10.0%`
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

pub fn price_cell(price: Option<f64>) -> Cell {
    match price {
        Some(p) => Cell::new(format_usd(p), CellStyle::Neutral),
        None => Cell::missing(),
    }
}

pub fn change_cell(change: WindowChange, absent: AbsentCellStyle) -> Cell {
    match change {
        WindowChange::Percent(v) => Cell::new(format_percent(v), CellStyle::from_value(v)),
        WindowChange::ZeroBase => Cell::new("n/a".to_string(), CellStyle::Missing),
        WindowChange::Insufficient => match absent {
            AbsentCellStyle::Blank => Cell::missing(),
            AbsentCellStyle::Legacy => Cell::new(
                format!("{}%", LEGACY_PLACEHOLDER),
                CellStyle::Missing,
            ),
        },
    }
}

/// 生成表格行；获取失败的股票整行为空
pub fn render_row(record: &QuoteRecord, absent: AbsentCellStyle) -> QuoteRow {
    let cells = match &record.metrics {
        Some(metrics) => std::iter::once(price_cell(metrics.price))
            .chain(metrics.windows.iter().map(|w| change_cell(w.change, absent)))
            .collect(),
        None => vec![Cell::missing(); 1 + WINDOWS.len()],
    };

    QuoteRow {
        ticker: record.symbol.clone(),
        name: record.name.clone(),
        cells,
    }
}

pub fn render_table(report: &GroupReport, absent: AbsentCellStyle) -> GroupTable {
    GroupTable {
        name: report.name.clone(),
        columns: COLUMNS.to_vec(),
        rows: report
            .records
            .iter()
            .map(|r| render_row(r, absent))
            .collect(),
        warnings: report.warnings.clone(),
    }
}
