//! 自选股配置
//!
//! 股票列表为内置常量，启动时构造一次，之后只读共享

use serde::Serialize;

/// 单只股票：展示名称 + 代码
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickerEntry {
    pub name: String,
    pub symbol: String,
}

impl TickerEntry {
    pub fn new(name: &str, symbol: &str) -> Self {
        Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
        }
    }
}

/// 命名的股票分组（如 Portfolio、Watchlist）
#[derive(Debug, Clone, Serialize)]
pub struct TickerGroup {
    pub name: String,
    pub entries: Vec<TickerEntry>,
}

impl TickerGroup {
    pub fn new(name: &str, entries: &[(&str, &str)]) -> Self {
        Self {
            name: name.to_string(),
            entries: entries
                .iter()
                .map(|(name, symbol)| TickerEntry::new(name, symbol))
                .collect(),
        }
    }
}

/// 全部分组，按展示顺序排列
#[derive(Debug, Clone, Serialize)]
pub struct TickerGroups {
    pub groups: Vec<TickerGroup>,
}

impl TickerGroups {
    pub fn new(groups: Vec<TickerGroup>) -> Self {
        Self { groups }
    }

    /// 按名称查找分组（忽略大小写）
    pub fn find(&self, name: &str) -> Option<&TickerGroup> {
        self.groups
            .iter()
            .find(|g| g.name.eq_ignore_ascii_case(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TickerGroup> {
        self.groups.iter()
    }
}

/// 持仓列表
const PORTFOLIO: &[(&str, &str)] = &[
    ("ADR ON CEMEX S.A.B DE C.V.", "CX"),
    ("ADR ON COMPAÑÍA CERVECERÍAS UNIDAS", "CCU"),
    ("ADR ON PETRÓLEO BRASILEIRO S.A.-", "PBR"),
    ("ADR ON RIO TINTO PLC", "RIO"),
    ("ADR ON SOCIEDAD QUIMICA Y MINERA", "SQM"),
    ("ADR ON VALE", "VALE"),
    ("ALIBABA GROUP HOLDING LTD", "BABA"),
    ("AT&T INC.", "T"),
    ("CANADIAN NATIONAL RAIL", "CNI"),
    ("FRANKLIN FTSE CHINA UCITS ETF", "FLCH"),
    ("INTEL CORPORATION", "INTC"),
    ("KAZATOMPROM  GDR REGS 1/1", "KAP.IL"),
    ("LIBERTY MEDIA A SIRIUSXM", "LSXMA"),
    ("LUMEN TECHNOLOGIES", "LUMN"),
    ("MICROSOFT CORPORATION", "MSFT"),
    ("NEW FOUND GOLD CORP COMMON SHARES", "NFG.V"),
    ("OCI", "OCI.AS"),
    ("PROSUS", "PRX.AS"),
    ("TAKEAWAY", "TKWY.AS"),
    ("VANECK JUNIOR GOLD MINERS UCITS ETF", "GDXJ"),
    ("ZIM INTEGRATED SHIPPING SERVICES", "ZIM"),
    ("SOCIEDAD QUIMICA Y MINERA", "SQM"),
    ("PPL", "PPL"),
    ("AEM", "AEM"),
    ("DV.V", "DV.V"),
    ("DG", "DG"),
];

/// 观察列表（均已包含在持仓列表中）
const WATCHLIST: &[(&str, &str)] = &[
    ("PPL", "PPL"),
    ("AEM", "AEM"),
    ("DV.V", "DV.V"),
    ("DG", "DG"),
];

/// 内置的 Portfolio + Watchlist 分组
pub fn default_groups() -> TickerGroups {
    TickerGroups::new(vec![
        TickerGroup::new("Portfolio", PORTFOLIO),
        TickerGroup::new("Watchlist", WATCHLIST),
    ])
}
