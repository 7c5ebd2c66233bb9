//! 行情数据模型
//!
//! 收盘价序列、统计窗口以及单只股票的计算结果

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 单日收盘价
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// 按日期升序排列的收盘价序列
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// 构造序列：丢弃非有限值，并按日期升序排序
    pub fn new(mut points: Vec<PricePoint>) -> Self {
        points.retain(|p| p.close.is_finite());
        points.sort_by_key(|p| p.date);
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// 最近一个交易日
    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// 最近 n 个交易日；不足 n 个时返回 None
    pub fn tail(&self, n: usize) -> Option<&[PricePoint]> {
        if n > self.points.len() {
            return None;
        }
        Some(&self.points[self.points.len() - n..])
    }
}

#[cfg(test)]
impl PriceSeries {
    /// 测试用：从 2020-01-01 起逐日生成序列
    pub fn from_closes(closes: &[f64]) -> Self {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let points = closes
            .iter()
            .enumerate()
            .map(|(i, close)| PricePoint {
                date: start + chrono::Duration::days(i as i64),
                close: *close,
            })
            .collect();
        Self::new(points)
    }
}

/// 窗口长度：固定交易日数，或整个序列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowLength {
    Days(usize),
    FullSeries,
}

impl WindowLength {
    /// 针对给定序列解析出实际的交易日数
    pub fn resolve(&self, series: &PriceSeries) -> usize {
        match self {
            WindowLength::Days(n) => *n,
            WindowLength::FullSeries => series.len(),
        }
    }
}

/// 统计窗口：标签 + 长度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSpec {
    pub label: &'static str,
    pub length: WindowLength,
}

/// 所有统计窗口，按表格列顺序排列（1 年按 252 个交易日计）
pub const WINDOWS: [WindowSpec; 7] = [
    WindowSpec { label: "3-d", length: WindowLength::Days(3) },
    WindowSpec { label: "7-d", length: WindowLength::Days(7) },
    WindowSpec { label: "30-d", length: WindowLength::Days(30) },
    WindowSpec { label: "90-d", length: WindowLength::Days(90) },
    WindowSpec { label: "180-d", length: WindowLength::Days(180) },
    WindowSpec { label: "1-yr", length: WindowLength::Days(252) },
    WindowSpec { label: "5-yr", length: WindowLength::FullSeries },
];

/// 单个窗口的涨跌幅
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum WindowChange {
    /// 百分比，保留一位小数
    Percent(f64),
    /// 数据点不足
    Insufficient,
    /// 窗口起始价为 0，无法计算
    ZeroBase,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowMetric {
    pub label: &'static str,
    /// 实际使用的交易日数
    pub days: usize,
    pub change: WindowChange,
}

/// 计算结果：最新价 + 各窗口涨跌幅
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    pub price: Option<f64>,
    pub windows: Vec<WindowMetric>,
}

impl Metrics {
    pub fn window(&self, label: &str) -> Option<&WindowMetric> {
        self.windows.iter().find(|w| w.label == label)
    }
}

/// 单只股票的一行结果
///
/// 获取行情失败时 `metrics` 为 None，`error` 记录原因
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteRecord {
    pub symbol: String,
    pub name: String,
    pub metrics: Option<Metrics>,
    pub error: Option<String>,
}

impl QuoteRecord {
    pub fn failed(symbol: &str, name: &str, reason: String) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            metrics: None,
            error: Some(reason),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.metrics.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_sorted_and_filtered() {
        let d = |day| NaiveDate::from_ymd_opt(2024, 3, day).unwrap();
        let series = PriceSeries::new(vec![
            PricePoint { date: d(3), close: 12.0 },
            PricePoint { date: d(1), close: 10.0 },
            PricePoint { date: d(2), close: f64::NAN },
        ]);

        assert_eq!(series.len(), 2);
        assert_eq!(series.points()[0].date, d(1));
        assert_eq!(series.last().unwrap().close, 12.0);
    }

    #[test]
    fn test_tail() {
        let series = PriceSeries::from_closes(&[1.0, 2.0, 3.0]);
        assert_eq!(series.tail(2).unwrap()[0].close, 2.0);
        assert_eq!(series.tail(3).unwrap().len(), 3);
        assert!(series.tail(4).is_none());
        assert!(series.tail(0).unwrap().is_empty());
    }

    #[test]
    fn test_window_labels() {
        let labels: Vec<_> = WINDOWS.iter().map(|w| w.label).collect();
        assert_eq!(labels, ["3-d", "7-d", "30-d", "90-d", "180-d", "1-yr", "5-yr"]);

        let series = PriceSeries::from_closes(&[1.0; 10]);
        assert_eq!(WINDOWS[5].length.resolve(&series), 252);
        assert_eq!(WINDOWS[6].length.resolve(&series), 10);
    }
}
