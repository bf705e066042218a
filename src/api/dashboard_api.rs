// ==========================================
// 经营驾驶舱 - 驾驶舱 API
// ==========================================
// 职责: 执行一个刷新周期并保留最新结果
// 流程: 快照提供者 → KpiEngine → AlertEvaluator → ProgressEngine
//       → DashboardView → 展示适配器
// 架构: API 层持有状态容器,引擎层保持纯函数
// ==========================================

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::api::error::{ApiError, ApiResult};
use crate::api::presentation::PresentationAdapter;
use crate::api::provider::SnapshotProvider;
use crate::api::summary::ExecutiveSummary;
use crate::domain::alert::{Alert, AlertCounts};
use crate::domain::kpi::KpiRecord;
use crate::domain::progress::TargetGauge;
use crate::domain::snapshot::Snapshot;
use crate::domain::types::KpiName;
use crate::engine::{AlertEvaluator, KpiEngine, ProgressEngine};

// ==========================================
// DashboardView - 单周期结果
// ==========================================
// 生成后不可变,下一周期整体替换
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub cycle_id: Uuid,              // 刷新周期ID
    pub generated_at: DateTime<Utc>, // 生成时间
    pub snapshot: Snapshot,          // 输入快照
    pub kpis: Vec<KpiRecord>,        // KPI 记录
    pub alerts: Vec<Alert>,          // 告警 (规则顺序)
    pub gauges: Vec<TargetGauge>,    // 目标进度
}

impl DashboardView {
    /// 告警总数 (告警角标)
    pub fn alert_count(&self) -> usize {
        self.alerts.len()
    }

    /// 各级别告警数量
    pub fn alert_counts(&self) -> AlertCounts {
        AlertCounts::tally(&self.alerts)
    }

    /// 数值非有限的 KPI (除零产生)
    pub fn non_finite_kpis(&self) -> Vec<KpiName> {
        self.kpis
            .iter()
            .filter(|k| !k.is_finite())
            .map(|k| k.name)
            .collect()
    }
}

// ==========================================
// DashboardApi - 驾驶舱 API
// ==========================================

/// 驾驶舱API
///
/// 职责：
/// 1. 拉取快照并驱动 KPI / 告警 / 目标进度计算
/// 2. 保留最新一次结果，供展示层与导出使用
/// 3. 将结果交给展示适配器
pub struct DashboardApi {
    /// 快照来源
    provider: Arc<dyn SnapshotProvider>,
    /// 展示适配器
    presenter: Arc<dyn PresentationAdapter>,
    kpi_engine: KpiEngine,
    alert_evaluator: AlertEvaluator,
    progress_engine: ProgressEngine,
    /// 最新结果
    latest: RwLock<Option<Arc<DashboardView>>>,
}

impl DashboardApi {
    /// 创建新的DashboardApi实例
    ///
    /// # 参数
    /// - provider: 快照提供者
    /// - presenter: 展示适配器
    /// - locale: 告警文案语言
    pub fn new(
        provider: Arc<dyn SnapshotProvider>,
        presenter: Arc<dyn PresentationAdapter>,
        locale: &str,
    ) -> Self {
        Self {
            provider,
            presenter,
            kpi_engine: KpiEngine::new(),
            alert_evaluator: AlertEvaluator::with_locale(locale),
            progress_engine: ProgressEngine::new(),
            latest: RwLock::new(None),
        }
    }

    // ==========================================
    // 刷新周期
    // ==========================================

    /// 执行一个刷新周期
    ///
    /// # 返回
    /// - Ok(Arc<DashboardView>): 本周期结果 (同时成为最新结果)
    /// - Err(ApiError): 快照获取或计算失败;此时保留上一周期结果
    pub async fn refresh(&self) -> ApiResult<Arc<DashboardView>> {
        let snapshot = self.provider.fetch().await.map_err(|e| {
            tracing::error!(source = %self.provider.describe(), "快照获取失败: {}", e);
            ApiError::from(e)
        })?;

        let view = Arc::new(self.evaluate(snapshot)?);

        let non_finite = view.non_finite_kpis();
        if !non_finite.is_empty() {
            tracing::warn!(
                cycle_id = %view.cycle_id,
                kpis = ?non_finite,
                "KPI 数值非有限 (上期值为 0)"
            );
        }

        self.presenter.render(&view);

        {
            let mut latest = self
                .latest
                .write()
                .map_err(|e| ApiError::InternalError(format!("锁获取失败: {}", e)))?;
            *latest = Some(Arc::clone(&view));
        }

        let counts = view.alert_counts();
        tracing::info!(
            cycle_id = %view.cycle_id,
            source = %self.provider.describe(),
            kpis = view.kpis.len(),
            alerts = counts.total(),
            critical = counts.critical,
            warning = counts.warning,
            "驾驶舱刷新完成"
        );

        Ok(view)
    }

    /// 对给定快照计算一个周期的结果 (不改变最新结果)
    pub fn evaluate(&self, snapshot: Snapshot) -> ApiResult<DashboardView> {
        let kpis = self.kpi_engine.compute(&snapshot);
        let alerts = self.alert_evaluator.evaluate(&snapshot, &kpis)?;
        let gauges = self.progress_engine.target_gauges(&snapshot);

        Ok(DashboardView {
            cycle_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            snapshot,
            kpis,
            alerts,
            gauges,
        })
    }

    // ==========================================
    // 查询接口
    // ==========================================

    /// 最新一次刷新结果
    pub fn latest(&self) -> ApiResult<Option<Arc<DashboardView>>> {
        let latest = self
            .latest
            .read()
            .map_err(|e| ApiError::InternalError(format!("锁获取失败: {}", e)))?;
        Ok(latest.clone())
    }

    /// 基于最新结果生成经营摘要
    pub fn export_summary(&self) -> ApiResult<ExecutiveSummary> {
        let view = self
            .latest()?
            .ok_or_else(|| ApiError::NotFound("尚未完成任何刷新周期".to_string()))?;
        Ok(ExecutiveSummary::from_view(&view))
    }

    /// 告警文案语言
    pub fn locale(&self) -> &str {
        self.alert_evaluator.locale()
    }
}
