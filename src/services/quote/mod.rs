//! 行情数据源
//!
//! 输入股票代码，输出按日期升序的日收盘价序列

pub mod yahoo;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::PriceSeries;

pub use yahoo::YahooChartSource;

/// 历史收盘价数据源
///
/// 不做本地校验，不缓存，不重试；所有失败统一为 `FetchError`
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch_history(&self, symbol: &str) -> Result<PriceSeries, FetchError>;
}
