//! 业务逻辑服务模块
//!
//! 封装行情获取、涨跌幅计算、报表生成与展示格式化

pub mod dashboard;       // 看板页面渲染
pub mod format;          // 单元格格式化
pub mod metrics;         // 涨跌幅计算
pub mod quote;           // 行情数据源
pub mod report_service;  // 报表生成
