// ==========================================
// 经营驾驶舱 - 数据快照领域模型
// ==========================================
// 职责: 单个刷新周期的只读输入
// 分组: 营收 / 利润 / 现金流 / 运营
// ==========================================
// 说明: previous 为 0 不视为输入错误,增长率按浮点语义
//       传播 inf/NaN (由 KPI 引擎负责记录)
// ==========================================

use crate::domain::error::SnapshotError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ==========================================
// Snapshot - 数据快照
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub revenue: RevenueMetrics,
    pub profit: ProfitMetrics,
    pub cash_flow: CashFlowMetrics,
    pub operations: OperationsMetrics,
}

// ===== 营收 =====
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenueMetrics {
    pub current: f64,  // 本月营收
    pub previous: f64, // 上月营收
    pub ytd: f64,      // 年初至今
    pub target: f64,   // 年度目标
}

// ===== 利润 =====
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitMetrics {
    pub current: f64,  // 本月利润
    pub previous: f64, // 上月利润
    pub ytd: f64,      // 年初至今
    pub target: f64,   // 年度目标
    pub margin: f64,   // 利润率 (0-100)
}

// ===== 现金流 =====
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlowMetrics {
    pub current: f64,   // 本月现金流
    pub previous: f64,  // 上月现金流
    pub projected: f64, // 下月预测 (静态输入)
    pub runway: u32,    // 资金可支撑月数
}

// ===== 运营 =====
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationsMetrics {
    pub efficiency: f64, // 运营效率 (%)
    #[serde(alias = "customerSat")]
    pub customer_satisfaction: f64, // 客户满意度 (0-5)
    #[serde(alias = "employeeRet")]
    pub employee_retention: f64, // 员工留存率 (%)
    pub market_share: f64, // 市场份额 (%)
}

impl Snapshot {
    /// 基准快照 (经营驾驶舱默认展示数据)
    pub fn baseline() -> Self {
        Self {
            revenue: RevenueMetrics {
                current: 12_500_000.0,
                previous: 11_800_000.0,
                ytd: 142_000_000.0,
                target: 150_000_000.0,
            },
            profit: ProfitMetrics {
                current: 2_100_000.0,
                previous: 1_950_000.0,
                ytd: 24_500_000.0,
                target: 30_000_000.0,
                margin: 16.8,
            },
            cash_flow: CashFlowMetrics {
                current: 8_500_000.0,
                previous: 7_200_000.0,
                projected: 9_200_000.0,
                runway: 18,
            },
            operations: OperationsMetrics {
                efficiency: 94.2,
                customer_satisfaction: 4.7,
                employee_retention: 92.5,
                market_share: 23.8,
            },
        }
    }

    // ==========================================
    // 解析 (带字段路径的错误)
    // ==========================================

    /// 从 JSON 文本解析快照
    ///
    /// # 返回
    /// - Ok(Snapshot): 解析成功
    /// - Err(SnapshotError::Parse): 不是合法 JSON
    /// - Err(SnapshotError::MissingField / Malformed): 字段缺失或类型错误
    pub fn from_json_str(raw: &str) -> Result<Self, SnapshotError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| SnapshotError::Parse(e.to_string()))?;
        Self::from_json_value(&value)
    }

    /// 从 JSON 值解析快照
    ///
    /// 与 serde 反序列化不同,缺失字段会报出完整路径 (如 `revenue.previous`)
    pub fn from_json_value(value: &Value) -> Result<Self, SnapshotError> {
        Ok(Self {
            revenue: RevenueMetrics {
                current: require_number(value, &["revenue.current"])?,
                previous: require_number(value, &["revenue.previous"])?,
                ytd: require_number(value, &["revenue.ytd"])?,
                target: require_number(value, &["revenue.target"])?,
            },
            profit: ProfitMetrics {
                current: require_number(value, &["profit.current"])?,
                previous: require_number(value, &["profit.previous"])?,
                ytd: require_number(value, &["profit.ytd"])?,
                target: require_number(value, &["profit.target"])?,
                margin: require_number(value, &["profit.margin"])?,
            },
            cash_flow: CashFlowMetrics {
                current: require_number(value, &["cashFlow.current"])?,
                previous: require_number(value, &["cashFlow.previous"])?,
                projected: require_number(value, &["cashFlow.projected"])?,
                runway: require_months(value, "cashFlow.runway")?,
            },
            operations: OperationsMetrics {
                efficiency: require_number(value, &["operations.efficiency"])?,
                customer_satisfaction: require_number(
                    value,
                    &[
                        "operations.customerSatisfaction",
                        "operations.customerSat",
                    ],
                )?,
                employee_retention: require_number(
                    value,
                    &["operations.employeeRetention", "operations.employeeRet"],
                )?,
                market_share: require_number(value, &["operations.marketShare"])?,
            },
        })
    }
}

// ==========================================
// 字段读取辅助函数
// ==========================================

/// 按点分路径查找节点
fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(root, |node, key| node.get(key))
        .filter(|v| !v.is_null())
}

/// 读取数值字段
///
/// `paths` 第一个为规范路径,其余为兼容别名;报错时使用规范路径
fn require_number(root: &Value, paths: &[&str]) -> Result<f64, SnapshotError> {
    let canonical = paths.first().copied().unwrap_or_default();
    let node = paths
        .iter()
        .find_map(|p| lookup(root, p))
        .ok_or_else(|| SnapshotError::MissingField {
            field: canonical.to_string(),
        })?;

    node.as_f64().ok_or_else(|| SnapshotError::Malformed {
        field: canonical.to_string(),
        reason: format!("期望数值,实际为 {}", node),
    })
}

/// 读取月数字段 (非负整数)
fn require_months(root: &Value, path: &str) -> Result<u32, SnapshotError> {
    let raw = require_number(root, &[path])?;
    if raw < 0.0 || raw.fract() != 0.0 || raw > f64::from(u32::MAX) {
        return Err(SnapshotError::Malformed {
            field: path.to_string(),
            reason: format!("期望非负整数月数,实际为 {}", raw),
        });
    }
    Ok(raw as u32)
}
