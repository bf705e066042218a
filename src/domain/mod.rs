// ==========================================
// 经营驾驶舱 - 领域模型层
// ==========================================
// 职责: 定义快照、KPI、告警、目标进度等领域实体与类型
// 红线: 不含计算逻辑,不含 I/O
// ==========================================

pub mod alert;
pub mod error;
pub mod kpi;
pub mod progress;
pub mod snapshot;
pub mod types;

// 重导出核心类型
pub use alert::{Alert, AlertCounts};
pub use error::SnapshotError;
pub use kpi::{find_kpi, KpiRecord};
pub use progress::{TargetGauge, TargetKind};
pub use snapshot::{CashFlowMetrics, OperationsMetrics, ProfitMetrics, RevenueMetrics, Snapshot};
pub use types::{AlertRule, AlertSeverity, KpiName, KpiStatus, Trend};
