// ==========================================
// 经营驾驶舱 - 引擎层
// ==========================================
// 职责: 实现 KPI 计算与告警规则
// 红线: 引擎为纯函数,不做 I/O,不持有跨周期状态
// 数据流: Snapshot → KpiEngine → KpiRecord → AlertEvaluator → Alert
// ==========================================

pub mod alert;
pub mod error;
pub mod kpi;
pub mod progress;
pub mod thresholds;

// 重导出核心引擎
pub use alert::{evaluate_alerts, evaluate_alerts_localized, AlertEvaluator};
pub use error::{EngineError, EngineResult};
pub use kpi::{compute_kpis, KpiEngine};
pub use progress::ProgressEngine;
