// ==========================================
// 经营驾驶舱 - 应用状态
// ==========================================
// 职责: 按配置装配快照提供者、展示适配器与驾驶舱 API
// ==========================================

use std::sync::Arc;

use crate::api::{
    DashboardApi, FileSnapshotProvider, PresentationAdapter, SnapshotProvider,
    StaticSnapshotProvider, TracingPresentationAdapter,
};
use crate::config::DashboardConfig;

/// 应用状态
///
/// 包含配置与 API 实例
pub struct AppState {
    /// 运行配置
    pub config: DashboardConfig,

    /// 驾驶舱API
    pub dashboard_api: Arc<DashboardApi>,
}

impl AppState {
    /// 按配置创建 (日志展示适配器)
    pub fn new(config: DashboardConfig) -> Self {
        Self::with_presenter(config, Arc::new(TracingPresentationAdapter))
    }

    /// 按配置创建,指定展示适配器
    pub fn with_presenter(
        config: DashboardConfig,
        presenter: Arc<dyn PresentationAdapter>,
    ) -> Self {
        let provider: Arc<dyn SnapshotProvider> = match &config.snapshot_path {
            Some(path) => Arc::new(FileSnapshotProvider::new(path.clone())),
            None => Arc::new(StaticSnapshotProvider::baseline()),
        };

        tracing::info!(
            source = %provider.describe(),
            locale = %config.locale,
            refresh_interval_secs = config.refresh_interval_secs,
            "AppState 初始化"
        );

        let dashboard_api = Arc::new(DashboardApi::new(provider, presenter, &config.locale));

        Self {
            config,
            dashboard_api,
        }
    }
}
