//! Yahoo Finance 日K线接口实现
//!
//! 对接 https://query1.finance.yahoo.com/v8/finance/chart/<symbol>

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use reqwest::Client;
use serde::Deserialize;

use super::QuoteSource;
use crate::config::ProviderConfig;
use crate::error::FetchError;
use crate::models::{PricePoint, PriceSeries};

/// Yahoo 日K线数据源
pub struct YahooChartSource {
    client: Client,
    config: ProviderConfig,
}

impl YahooChartSource {
    /// 按配置构造 HTTP 客户端（超时、User-Agent）
    pub fn new(config: ProviderConfig) -> reqwest::Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()?;
        Ok(Self { client, config })
    }

    fn chart_url(&self, symbol: &str) -> String {
        format!(
            "{}/v8/finance/chart/{}",
            self.config.base_url.trim_end_matches('/'),
            symbol
        )
    }
}

#[async_trait]
impl QuoteSource for YahooChartSource {
    async fn fetch_history(&self, symbol: &str) -> Result<PriceSeries, FetchError> {
        let url = self.chart_url(symbol);
        log::debug!("请求日K线数据 URL: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("range", self.config.range.as_str()),
                ("interval", self.config.interval.as_str()),
            ])
            .send()
            .await
            .map_err(|e| FetchError::new(symbol, e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| FetchError::new(symbol, e))?;

        match parse_chart_response(&text, symbol) {
            Ok(series) => {
                log::debug!("{} 解析到 {} 条日K线数据", symbol, series.len());
                Ok(series)
            }
            // 接口出错时响应体通常带有 chart.error，优先使用其描述
            Err(e) if status.is_success() => Err(e),
            Err(e) if e.reason.starts_with(CHART_ERROR_PREFIX) => Err(e),
            Err(_) => Err(FetchError::new(symbol, format!("HTTP {}", status))),
        }
    }
}

const CHART_ERROR_PREFIX: &str = "provider error";

// `chart` 响应结构
#[derive(Deserialize, Debug)]
struct ChartEnvelope {
    chart: ChartBody,
}

#[derive(Deserialize, Debug)]
struct ChartBody {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Deserialize, Debug)]
struct ChartError {
    code: String,
    description: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ChartResult {
    #[serde(default)]
    meta: ChartMeta,
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Deserialize, Debug, Default)]
struct ChartMeta {
    /// 交易所相对 UTC 的偏移（秒）
    gmtoffset: Option<i32>,
}

#[derive(Deserialize, Debug)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteBlock>,
    #[serde(default)]
    adjclose: Vec<AdjCloseBlock>,
}

#[derive(Deserialize, Debug)]
struct QuoteBlock {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

#[derive(Deserialize, Debug)]
struct AdjCloseBlock {
    #[serde(default)]
    adjclose: Vec<Option<f64>>,
}

/// 解析 chart 接口响应
///
/// 优先使用复权收盘价，缺失时退回原始收盘价；收盘价为 null 的交易日被丢弃
pub fn parse_chart_response(body: &str, symbol: &str) -> Result<PriceSeries, FetchError> {
    let envelope: ChartEnvelope = serde_json::from_str(body)
        .map_err(|e| FetchError::new(symbol, format!("invalid chart response: {}", e)))?;

    if let Some(err) = envelope.chart.error {
        let description = err.description.unwrap_or_default();
        return Err(FetchError::new(
            symbol,
            format!("{} {}: {}", CHART_ERROR_PREFIX, err.code, description),
        ));
    }

    let result = envelope
        .chart
        .result
        .and_then(|r| r.into_iter().next())
        .ok_or_else(|| FetchError::new(symbol, "no chart data returned"))?;

    let closes = match result.indicators.adjclose.into_iter().next() {
        Some(block) if !block.adjclose.is_empty() => block.adjclose,
        _ => result
            .indicators
            .quote
            .into_iter()
            .next()
            .map(|q| q.close)
            .unwrap_or_default(),
    };

    if closes.len() != result.timestamp.len() {
        return Err(FetchError::new(
            symbol,
            format!(
                "{} timestamps but {} closing prices",
                result.timestamp.len(),
                closes.len()
            ),
        ));
    }

    let offset = result
        .meta
        .gmtoffset
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Utc.fix());

    let mut points = Vec::with_capacity(closes.len());
    for (ts, close) in result.timestamp.iter().zip(closes) {
        let Some(close) = close else { continue };
        let date = timestamp_to_date(*ts, offset)
            .ok_or_else(|| FetchError::new(symbol, format!("invalid timestamp {}", ts)))?;
        points.push(PricePoint { date, close });
    }

    Ok(PriceSeries::new(points))
}

/// Unix 时间戳转换为交易所当地日期
fn timestamp_to_date(ts: i64, offset: FixedOffset) -> Option<NaiveDate> {
    DateTime::from_timestamp(ts, 0).map(|dt| dt.with_timezone(&offset).date_naive())
}
