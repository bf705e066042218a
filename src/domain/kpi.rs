// ==========================================
// 经营驾驶舱 - KPI 记录领域模型
// ==========================================
// 生命周期: 每个刷新周期重新生成,生成后不可变
// ==========================================

use crate::domain::types::{KpiName, KpiStatus, Trend};
use serde::Serialize;

// ==========================================
// KpiRecord - KPI 记录
// ==========================================
// value 为带符号百分比;previous 为 0 时可能为 inf/NaN
// (JSON 序列化时非有限值输出为 null,因此只序列化不反序列化)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KpiRecord {
    pub name: KpiName,     // KPI 名称
    pub value: f64,        // 百分比数值
    pub trend: Trend,      // 趋势
    pub status: KpiStatus, // 状态
}

impl KpiRecord {
    /// 数值是否有限 (除零时为 false)
    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }
}

/// 按名称查找 KPI 记录
pub fn find_kpi(kpis: &[KpiRecord], name: KpiName) -> Option<&KpiRecord> {
    kpis.iter().find(|k| k.name == name)
}
