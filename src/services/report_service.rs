//! 报表生成
//!
//! 按配置顺序逐只获取行情并计算涨跌幅。单只失败不影响其余股票。
//! 同一次生成过程中，相同代码只请求一次（例如 Watchlist 与 Portfolio 重叠的股票）。

use std::collections::HashMap;

use crate::error::FetchError;
use crate::models::{
    get_market_time, DashboardReport, GroupReport, PriceSeries, QuoteRecord, TickerEntry,
    TickerGroup, TickerGroups,
};
use crate::services::metrics::compute_record;
use crate::services::quote::QuoteSource;

/// 单次报表生成器，缓存只在本对象生命周期内有效
pub struct ReportBuilder<'a> {
    source: &'a dyn QuoteSource,
    fetched: HashMap<String, Result<PriceSeries, FetchError>>,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(source: &'a dyn QuoteSource) -> Self {
        Self {
            source,
            fetched: HashMap::new(),
        }
    }

    /// 获取行情；已请求过的代码直接复用结果（失败也复用，不重试）
    async fn history(&mut self, symbol: &str) -> Result<PriceSeries, FetchError> {
        if let Some(result) = self.fetched.get(symbol) {
            log::debug!("{} 复用本次已获取的数据", symbol);
            return result.clone();
        }

        let result = self.source.fetch_history(symbol).await;
        self.fetched.insert(symbol.to_string(), result.clone());
        result
    }

    /// 处理单只股票
    pub async fn build_record(&mut self, entry: &TickerEntry) -> QuoteRecord {
        match self.history(&entry.symbol).await {
            Ok(series) => compute_record(entry, &series),
            Err(e) => QuoteRecord::failed(&entry.symbol, &entry.name, e.reason),
        }
    }

    /// 生成单个分组的报表，按配置顺序逐只处理
    pub async fn build_group(&mut self, group: &TickerGroup) -> GroupReport {
        let mut records = Vec::with_capacity(group.entries.len());
        let mut warnings = Vec::new();

        for entry in &group.entries {
            let record = self.build_record(entry).await;
            if let Some(reason) = &record.error {
                log::warn!("[{}] 获取 {} 行情失败: {}", group.name, entry.symbol, reason);
                warnings.push(format!(
                    "Failed to fetch data for {}: {}",
                    entry.symbol, reason
                ));
            }
            records.push(record);
        }

        log::info!(
            "{} 报表生成完成: {} 只股票，{} 只失败",
            group.name,
            records.len(),
            warnings.len()
        );

        GroupReport {
            name: group.name.clone(),
            records,
            warnings,
        }
    }

    /// 生成所有分组的报表
    pub async fn build_all(&mut self, groups: &TickerGroups) -> DashboardReport {
        let mut reports = Vec::with_capacity(groups.groups.len());
        for group in groups.iter() {
            reports.push(self.build_group(group).await);
        }

        DashboardReport {
            generated_at: get_market_time().to_rfc3339(),
            groups: reports,
        }
    }

    /// 本次生成过程中实际请求数据源的次数
    pub fn fetch_count(&self) -> usize {
        self.fetched.len()
    }
}
