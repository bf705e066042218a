// ==========================================
// 经营驾驶舱 - 经营摘要导出
// ==========================================
// 职责: 将一个刷新周期的结果整理为可导出的 JSON 文档
// 文件名: executive-summary-YYYY-MM-DD.json
// ==========================================

use crate::api::dashboard_api::DashboardView;
use crate::api::error::{ApiError, ApiResult};
use crate::domain::alert::Alert;
use crate::domain::kpi::KpiRecord;
use crate::domain::progress::TargetGauge;
use crate::domain::snapshot::Snapshot;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use uuid::Uuid;

// ==========================================
// ExecutiveSummary - 经营摘要
// ==========================================
// 仅用于导出: 非有限 KPI 数值写为 null,不支持反序列化回读
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutiveSummary {
    pub cycle_id: Uuid,                  // 刷新周期ID
    #[serde(rename = "timestamp")]
    pub generated_at: DateTime<Utc>,     // 生成时间
    pub kpis: Vec<KpiRecord>,            // KPI 记录
    pub alerts: Vec<Alert>,              // 告警
    pub target_gauges: Vec<TargetGauge>, // 目标进度
    pub financial_data: Snapshot,        // 原始快照
}

impl ExecutiveSummary {
    /// 由刷新结果生成摘要
    pub fn from_view(view: &DashboardView) -> Self {
        Self {
            cycle_id: view.cycle_id,
            generated_at: view.generated_at,
            kpis: view.kpis.clone(),
            alerts: view.alerts.clone(),
            target_gauges: view.gauges.clone(),
            financial_data: view.snapshot.clone(),
        }
    }

    /// 导出文件名
    pub fn file_name(&self) -> String {
        format!(
            "executive-summary-{}.json",
            self.generated_at.format("%Y-%m-%d")
        )
    }

    /// 格式化 JSON
    pub fn to_json_pretty(&self) -> ApiResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ApiError::ExportError(e.to_string()))
    }

    /// 写入目录 (同日多次导出会覆盖)
    ///
    /// # 返回
    /// 写入的文件路径
    pub async fn write_to_dir(&self, dir: &Path) -> ApiResult<PathBuf> {
        tokio::fs::create_dir_all(dir).await.map_err(|e| {
            ApiError::ExportError(format!("创建目录失败 ({}): {}", dir.display(), e))
        })?;

        let path = dir.join(self.file_name());
        let body = self.to_json_pretty()?;
        tokio::fs::write(&path, body).await.map_err(|e| {
            ApiError::ExportError(format!("写入文件失败 ({}): {}", path.display(), e))
        })?;

        Ok(path)
    }
}
