//! 错误类型

use thiserror::Error;

/// 获取行情失败
///
/// 不区分失败原因（代码无效、网络异常、限流等），只携带描述文本
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{symbol}: {reason}")]
pub struct FetchError {
    pub symbol: String,
    pub reason: String,
}

impl FetchError {
    pub fn new(symbol: &str, reason: impl ToString) -> Self {
        Self {
            symbol: symbol.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// 涨跌幅计算错误
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricsError {
    /// 窗口起始价为 0
    #[error("start price of the {window}-point window is zero")]
    ZeroStartPrice { window: usize },
}
