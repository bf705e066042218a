// ==========================================
// 经营驾驶舱 - API 层
// ==========================================
// 职责: 面向宿主应用的接口 (刷新周期、状态容器、展示适配、导出)
// ==========================================

pub mod dashboard_api;
pub mod error;
pub mod presentation;
pub mod provider;
pub mod summary;

// 重导出核心 API
pub use dashboard_api::{DashboardApi, DashboardView};
pub use error::{ApiError, ApiResult};
pub use presentation::{kpi_card_lines, kpi_insights, PresentationAdapter, TracingPresentationAdapter};
pub use provider::{FileSnapshotProvider, ProviderError, SnapshotProvider, StaticSnapshotProvider};
pub use summary::ExecutiveSummary;
