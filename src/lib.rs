// ==========================================
// 经营驾驶舱 KPI 引擎 - 核心库
// ==========================================
// 系统定位: 经营驾驶舱的指标计算与业务告警内核
// 数据流: Snapshot → KPI 引擎 → KPI 记录 → 告警评估 → 告警 → 展示适配器
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - KPI 与告警规则
pub mod engine;

// 配置层 - 运行配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// 展示格式化 (金额/百分比)
pub mod format;

// API 层 - 宿主接口
pub mod api;

// 应用层 - 装配与定时刷新
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{AlertRule, AlertSeverity, KpiName, KpiStatus, Trend};

// 领域实体
pub use domain::{Alert, AlertCounts, KpiRecord, Snapshot, SnapshotError, TargetGauge, TargetKind};

// 引擎
pub use engine::{
    compute_kpis, evaluate_alerts, evaluate_alerts_localized, AlertEvaluator, EngineError,
    KpiEngine, ProgressEngine,
};

// API
pub use api::{ApiError, ApiResult, DashboardApi, DashboardView, ExecutiveSummary};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Executive KPI Dashboard";
