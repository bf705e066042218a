// ==========================================
// 经营驾驶舱 - 业务告警评估器
// ==========================================
// 职责: KPI 记录 + 快照 → 告警列表
// 规则 (固定顺序评估,互不排斥):
//   1. 营收下滑:     RevenueGrowth < 0     → CRITICAL
//   2. 现金流关注:   runway < 12           → WARNING
//   3. 目标达成风险: TargetProgress < 75   → WARNING
//   4. 运营效率:     efficiency < 90       → WARNING
// ==========================================
// 红线: 输出顺序 = 规则顺序 (不按级别重排);未触发返回空列表
// 前置条件: kpis 由 KpiEngine 基于同一快照生成,不做交叉校验
// ==========================================

use crate::domain::alert::Alert;
use crate::domain::kpi::{find_kpi, KpiRecord};
use crate::domain::snapshot::Snapshot;
use crate::domain::types::{AlertRule, KpiName};
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::thresholds::*;
use crate::format::to_fixed;
use crate::i18n::{t_in, t_in_with_args, DEFAULT_LOCALE};

// ==========================================
// AlertEvaluator - 告警评估器
// ==========================================
#[derive(Debug, Clone)]
pub struct AlertEvaluator {
    /// 告警文案语言
    locale: String,
}

impl Default for AlertEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertEvaluator {
    /// 使用默认语言 (en) 构造
    pub fn new() -> Self {
        Self::with_locale(DEFAULT_LOCALE)
    }

    /// 指定告警文案语言
    pub fn with_locale(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// 评估全部告警规则
    ///
    /// # 返回
    /// - Ok(Vec<Alert>): 已触发的告警,按规则 1→4 顺序
    /// - Err(EngineError::MissingKpi): kpis 缺少规则所需的记录
    pub fn evaluate(&self, snapshot: &Snapshot, kpis: &[KpiRecord]) -> EngineResult<Vec<Alert>> {
        let revenue_growth = require_kpi(kpis, KpiName::RevenueGrowth)?;
        let target_progress = require_kpi(kpis, KpiName::TargetProgress)?;

        let mut alerts = Vec::new();

        // 规则1: 营收下滑
        if revenue_growth.value < ALERT_REVENUE_GROWTH_BELOW {
            let pct = to_fixed(revenue_growth.value.abs(), 1);
            alerts.push(self.build(AlertRule::RevenueDecline, &[("pct", pct.as_str())]));
        }

        // 规则2: 现金流关注
        if snapshot.cash_flow.runway < ALERT_RUNWAY_BELOW_MONTHS {
            let months = snapshot.cash_flow.runway.to_string();
            alerts.push(self.build(AlertRule::CashFlowAttention, &[("months", months.as_str())]));
        }

        // 规则3: 目标达成风险
        if target_progress.value < ALERT_TARGET_PROGRESS_BELOW {
            let pct = to_fixed(target_progress.value, 1);
            alerts.push(self.build(AlertRule::TargetAchievementRisk, &[("pct", pct.as_str())]));
        }

        // 规则4: 运营效率
        if snapshot.operations.efficiency < ALERT_EFFICIENCY_BELOW {
            let efficiency = snapshot.operations.efficiency.to_string();
            alerts.push(self.build(
                AlertRule::OperationalEfficiency,
                &[("efficiency", efficiency.as_str())],
            ));
        }

        Ok(alerts)
    }

    /// 构造告警 (文案来自 locales/*.yml)
    fn build(&self, rule: AlertRule, args: &[(&str, &str)]) -> Alert {
        let prefix = rule.message_key();
        Alert {
            rule,
            severity: rule.severity(),
            title: t_in(&self.locale, &format!("{}.title", prefix)),
            message: t_in_with_args(&self.locale, &format!("{}.message", prefix), args),
            recommended_action: t_in(&self.locale, &format!("{}.action", prefix)),
        }
    }
}

/// 评估告警 (英文文案)
pub fn evaluate_alerts(snapshot: &Snapshot, kpis: &[KpiRecord]) -> EngineResult<Vec<Alert>> {
    AlertEvaluator::new().evaluate(snapshot, kpis)
}

/// 评估告警 (指定语言)
pub fn evaluate_alerts_localized(
    snapshot: &Snapshot,
    kpis: &[KpiRecord],
    locale: &str,
) -> EngineResult<Vec<Alert>> {
    AlertEvaluator::with_locale(locale).evaluate(snapshot, kpis)
}

fn require_kpi(kpis: &[KpiRecord], name: KpiName) -> EngineResult<&KpiRecord> {
    find_kpi(kpis, name).ok_or(EngineError::MissingKpi(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::AlertSeverity;
    use crate::engine::kpi::compute_kpis;

    fn rules(alerts: &[Alert]) -> Vec<AlertRule> {
        alerts.iter().map(|a| a.rule).collect()
    }

    #[test]
    fn test_baseline_has_no_alerts() {
        let s = Snapshot::baseline();
        let alerts = evaluate_alerts(&s, &compute_kpis(&s)).unwrap();
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_all_rules_fire_in_order() {
        let mut s = Snapshot::baseline();
        s.revenue.current = 10_000_000.0; // 下滑
        s.revenue.ytd = 100_000_000.0; // 66.7%
        s.cash_flow.runway = 5;
        s.operations.efficiency = 80.0;

        let alerts = evaluate_alerts(&s, &compute_kpis(&s)).unwrap();
        assert_eq!(rules(&alerts), AlertRule::ALL.to_vec());
        assert_eq!(alerts[0].severity, AlertSeverity::Critical);
        assert!(alerts[1..].iter().all(|a| a.severity == AlertSeverity::Warning));
    }

    #[test]
    fn test_message_interpolation() {
        let mut s = Snapshot::baseline();
        s.cash_flow.runway = 8;
        s.revenue.ytd = 105_000_000.0; // 70.0%

        let alerts = evaluate_alerts(&s, &compute_kpis(&s)).unwrap();
        assert_eq!(
            rules(&alerts),
            vec![AlertRule::CashFlowAttention, AlertRule::TargetAchievementRisk]
        );
        assert_eq!(alerts[0].message, "Current runway: 8 months");
        assert_eq!(alerts[1].message, "Currently at 70.0% of annual target");
        assert_eq!(
            alerts[1].recommended_action,
            "Accelerate sales and marketing initiatives"
        );
    }

    #[test]
    fn test_missing_kpi_is_reported() {
        let s = Snapshot::baseline();
        let kpis: Vec<KpiRecord> = compute_kpis(&s)
            .into_iter()
            .filter(|k| k.name != KpiName::TargetProgress)
            .collect();

        assert_eq!(
            evaluate_alerts(&s, &kpis),
            Err(EngineError::MissingKpi(KpiName::TargetProgress))
        );
    }

    #[test]
    fn test_nan_growth_does_not_fire_revenue_decline() {
        let mut s = Snapshot::baseline();
        s.revenue.current = 0.0;
        s.revenue.previous = 0.0;

        let alerts = evaluate_alerts(&s, &compute_kpis(&s)).unwrap();
        assert!(!rules(&alerts).contains(&AlertRule::RevenueDecline));
    }

    #[test]
    fn test_localized_alerts() {
        let mut s = Snapshot::baseline();
        s.operations.efficiency = 85.0;

        let alerts = evaluate_alerts_localized(&s, &compute_kpis(&s), "zh-CN").unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].title, "运营效率");
        assert!(alerts[0].message.contains("85"));
    }
}
