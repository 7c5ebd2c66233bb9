//! 涨跌幅计算
//!
//! 窗口按交易日（数据点）计数，不按自然日

use crate::error::MetricsError;
use crate::models::{
    Metrics, PriceSeries, QuoteRecord, TickerEntry, WindowChange, WindowMetric, WINDOWS,
};

/// 保留一位小数，并把 -0.0 归一为 0.0
///
/// 按二进制精确值舍入，恰好居中时取偶数位（0.25 -> 0.2，-7.25 -> -7.2）
pub fn round1(value: f64) -> f64 {
    let rounded = format!("{:.1}", value).parse::<f64>().unwrap_or(value);
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// 计算最近 n 个数据点的涨跌幅（百分比，一位小数）
///
/// - 数据点不足 n 个（或 n 为 0）时返回 `Ok(None)`
/// - 窗口起始价为 0 时返回 `MetricsError::ZeroStartPrice`
pub fn window_change(series: &PriceSeries, n: usize) -> Result<Option<f64>, MetricsError> {
    if n == 0 {
        return Ok(None);
    }
    let window = match series.tail(n) {
        Some(window) => window,
        None => return Ok(None),
    };

    let start = window[0].close;
    let end = window[window.len() - 1].close;
    if start == 0.0 {
        return Err(MetricsError::ZeroStartPrice { window: n });
    }

    Ok(Some(round1((end - start) / start * 100.0)))
}

/// 计算所有窗口的涨跌幅以及最新价
pub fn compute_metrics(series: &PriceSeries) -> Metrics {
    let windows = WINDOWS
        .iter()
        .map(|spec| {
            let days = spec.length.resolve(series);
            let change = match window_change(series, days) {
                Ok(Some(pct)) => WindowChange::Percent(pct),
                Ok(None) => WindowChange::Insufficient,
                Err(e) => {
                    log::warn!("{} 窗口无法计算涨跌幅: {}", spec.label, e);
                    WindowChange::ZeroBase
                }
            };
            WindowMetric { label: spec.label, days, change }
        })
        .collect();

    Metrics {
        price: series.last().map(|p| p.close),
        windows,
    }
}

/// 为单只股票生成结果行
pub fn compute_record(entry: &TickerEntry, series: &PriceSeries) -> QuoteRecord {
    QuoteRecord {
        symbol: entry.symbol.clone(),
        name: entry.name.clone(),
        metrics: Some(compute_metrics(series)),
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(metrics: &Metrics, label: &str) -> WindowChange {
        metrics.window(label).unwrap().change
    }

    /// 3 个数据点，3 日窗口：100 -> 110 = +10.0%
    #[test]
    fn test_three_point_window() {
        let series = PriceSeries::from_closes(&[100.0, 105.0, 110.0]);
        assert_eq!(window_change(&series, 3), Ok(Some(10.0)));

        let metrics = compute_metrics(&series);
        assert_eq!(change(&metrics, "3-d"), WindowChange::Percent(10.0));
        assert_eq!(metrics.price, Some(110.0));
    }

    /// 数据点不足时窗口缺失
    #[test]
    fn test_insufficient_points() {
        let series = PriceSeries::from_closes(&[100.0]);
        assert_eq!(window_change(&series, 7), Ok(None));

        let metrics = compute_metrics(&series);
        for label in ["3-d", "7-d", "30-d", "90-d", "180-d", "1-yr"] {
            assert_eq!(change(&metrics, label), WindowChange::Insufficient);
        }
        // 单点序列的 5 年窗口起止相同
        assert_eq!(change(&metrics, "5-yr"), WindowChange::Percent(0.0));
    }

    /// 空序列：最新价与所有窗口均缺失
    #[test]
    fn test_empty_series() {
        let metrics = compute_metrics(&PriceSeries::default());
        assert_eq!(metrics.price, None);
        assert_eq!(metrics.windows.len(), 7);
        assert!(metrics
            .windows
            .iter()
            .all(|w| w.change == WindowChange::Insufficient));
    }

    /// 起始价为 0：返回领域错误，汇总结果标记为 ZeroBase
    #[test]
    fn test_zero_start_price() {
        let series = PriceSeries::from_closes(&[50.0, 0.0, 25.0]);
        assert_eq!(
            window_change(&series, 2),
            Err(MetricsError::ZeroStartPrice { window: 2 })
        );
        // 3 点窗口从 50 开始，正常计算
        assert_eq!(window_change(&series, 3), Ok(Some(-50.0)));

        let zero_start = PriceSeries::from_closes(&[0.0, 1.0, 2.0]);
        let metrics = compute_metrics(&zero_start);
        assert_eq!(change(&metrics, "3-d"), WindowChange::ZeroBase);
        assert_eq!(change(&metrics, "5-yr"), WindowChange::ZeroBase);
    }

    /// 各窗口结果与 round((c[-1] - c[-n]) / c[-n] * 100, 1) 的参考值一致
    #[test]
    fn test_window_matches_reference() {
        let series =
            PriceSeries::from_closes(&[40.0, 42.5, 41.25, 43.0, 44.75, 39.5, 45.0, 46.25]);

        let cases = [
            (2, 2.8),
            (3, 17.1),
            (4, 3.4),
            (5, 7.6),
            (6, 12.1),
            (7, 8.8),
            // 15.625 恰好居中，取偶数位
            (8, 15.6),
        ];
        for (n, expected) in cases {
            assert_eq!(window_change(&series, n), Ok(Some(expected)), "n = {}", n);
        }
        assert_eq!(window_change(&series, 9), Ok(None));
    }

    /// 以 0.25 美元为步长的价格会出现居中值：0.25% -> 0.2%，-0.25% -> -0.2%
    #[test]
    fn test_quarter_step_ties() {
        let up = PriceSeries::from_closes(&[100.0, 100.25]);
        let down = PriceSeries::from_closes(&[100.0, 99.75]);
        println!("  up = {:?}, down = {:?}", window_change(&up, 2), window_change(&down, 2));

        assert_eq!(window_change(&up, 2), Ok(Some(0.2)));
        assert_eq!(window_change(&down, 2), Ok(Some(-0.2)));
    }

    /// 5 年窗口始终是整段序列的总收益
    #[test]
    fn test_full_series_window() {
        let series = PriceSeries::from_closes(&[20.0, 35.0, 18.0, 30.0]);
        let metrics = compute_metrics(&series);
        let five_year = metrics.window("5-yr").unwrap();
        assert_eq!(five_year.days, 4);
        assert_eq!(five_year.change, WindowChange::Percent(50.0));
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(12.345), 12.3);
        assert_eq!(round1(-7.25), -7.2);
        assert_eq!(round1(0.25), 0.2);
        assert_eq!(round1(-0.25), -0.2);
        assert_eq!(round1(0.35), 0.3);
        assert_eq!(round1(0.05), 0.1);
        assert_eq!(round1(-0.04), 0.0);
        assert!(round1(-0.04).is_sign_positive());
    }

    #[test]
    fn test_compute_record() {
        let entry = TickerEntry::new("MICROSOFT CORPORATION", "MSFT");
        let record = compute_record(&entry, &PriceSeries::from_closes(&[10.0, 9.0]));
        assert_eq!(record.symbol, "MSFT");
        assert!(!record.is_failed());
        assert!(record.error.is_none());
    }
}
