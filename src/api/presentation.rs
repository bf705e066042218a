// ==========================================
// 经营驾驶舱 - 展示适配器
// ==========================================
// 职责: 将 DashboardView (KPI / 告警 / 目标进度) 交给展示层
// 说明: 图表、DOM、通知等具体渲染由宿主实现本 trait 完成;
//       目标控件缺失属于适配器自身的问题,不影响核心计算
// ==========================================

use crate::api::dashboard_api::DashboardView;
use crate::domain::kpi::{find_kpi, KpiRecord};
use crate::domain::snapshot::Snapshot;
use crate::domain::types::{AlertSeverity, KpiName};
use crate::format::{format_currency, format_percent, format_signed_percent, to_fixed};
use crate::i18n::t_in_with_args;

// ==========================================
// PresentationAdapter Trait
// ==========================================
pub trait PresentationAdapter: Send + Sync {
    /// 渲染一个刷新周期的结果
    fn render(&self, view: &DashboardView);
}

// ==========================================
// TracingPresentationAdapter - 日志输出
// ==========================================
// 用于无界面宿主 (命令行常驻进程)
#[derive(Debug, Clone, Default)]
pub struct TracingPresentationAdapter;

impl PresentationAdapter for TracingPresentationAdapter {
    fn render(&self, view: &DashboardView) {
        for line in kpi_card_lines(&view.snapshot, &view.kpis) {
            tracing::info!(cycle_id = %view.cycle_id, "{}", line);
        }

        for alert in &view.alerts {
            match alert.severity {
                AlertSeverity::Critical | AlertSeverity::Warning => tracing::warn!(
                    cycle_id = %view.cycle_id,
                    severity = %alert.severity,
                    "{}: {} (建议: {})",
                    alert.title,
                    alert.message,
                    alert.recommended_action
                ),
                AlertSeverity::Info => tracing::info!(
                    cycle_id = %view.cycle_id,
                    "{}: {}",
                    alert.title,
                    alert.message
                ),
            }
        }
    }
}

// ==========================================
// 文本卡片
// ==========================================

/// KPI 卡片文本 (每个 KPI 一行)
///
/// 格式与驾驶舱卡片一致:
/// - Revenue: $12,500,000 (+5.9%) vs. $11,800,000 last month
/// - Profit: $2,100,000 (+7.7%) 16.8% margin
/// - Cash Flow: $8,500,000 (+18.1%) 18 months runway
/// - Target Progress: 94.7% ($142,000,000 YTD) Target: $150,000,000
pub fn kpi_card_lines(snapshot: &Snapshot, kpis: &[KpiRecord]) -> Vec<String> {
    kpis.iter()
        .map(|kpi| match kpi.name {
            KpiName::RevenueGrowth => format!(
                "Revenue: {} ({}) vs. {} last month [{}]",
                format_currency(snapshot.revenue.current),
                format_signed_percent(kpi.value),
                format_currency(snapshot.revenue.previous),
                kpi.status
            ),
            KpiName::ProfitGrowth => format!(
                "Profit: {} ({}) {}% margin [{}]",
                format_currency(snapshot.profit.current),
                format_signed_percent(kpi.value),
                snapshot.profit.margin,
                kpi.status
            ),
            KpiName::CashFlowHealth => format!(
                "Cash Flow: {} ({}) {} months runway [{}]",
                format_currency(snapshot.cash_flow.current),
                format_signed_percent(kpi.value),
                snapshot.cash_flow.runway,
                kpi.status
            ),
            KpiName::TargetProgress => format!(
                "Target Progress: {} ({} YTD) Target: {} [{}]",
                format_percent(kpi.value, 1),
                format_currency(snapshot.revenue.ytd),
                format_currency(snapshot.revenue.target),
                kpi.status
            ),
        })
        .collect()
}

/// 营收详情卡片的关键洞察
pub fn kpi_insights(kpis: &[KpiRecord], locale: &str) -> Vec<String> {
    let mut insights = Vec::new();

    if let Some(kpi) = find_kpi(kpis, KpiName::RevenueGrowth) {
        let pct = to_fixed(kpi.value, 1);
        insights.push(t_in_with_args(
            locale,
            "insight.revenue_growth",
            &[("pct", pct.as_str())],
        ));
    }

    if let Some(kpi) = find_kpi(kpis, KpiName::TargetProgress) {
        let pct = to_fixed(kpi.value, 1);
        insights.push(t_in_with_args(
            locale,
            "insight.target_progress",
            &[("pct", pct.as_str())],
        ));
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::kpi::compute_kpis;

    #[test]
    fn test_kpi_card_lines_baseline() {
        let s = Snapshot::baseline();
        let lines = kpi_card_lines(&s, &compute_kpis(&s));

        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "Revenue: $12,500,000 (+5.9%) vs. $11,800,000 last month [excellent]"
        );
        assert!(lines[1].contains("16.8% margin"));
        assert!(lines[2].contains("18 months runway"));
        assert!(lines[3].starts_with("Target Progress: 94.7%"));
    }

    #[test]
    fn test_flat_negative_profit_card_has_unsigned_zero() {
        let mut s = Snapshot::baseline();
        s.profit.current = -100_000.0;
        s.profit.previous = -100_000.0;

        let lines = kpi_card_lines(&s, &compute_kpis(&s));
        assert!(lines[1].starts_with("Profit: -$100,000 (0.0%)"), "{}", lines[1]);
    }

    #[test]
    fn test_kpi_insights_round_half_up() {
        let mut s = Snapshot::baseline();
        s.revenue.ytd = 74.25;
        s.revenue.target = 100.0;

        let insights = kpi_insights(&compute_kpis(&s), "en");
        assert_eq!(insights[1], "Currently at 74.3% of annual target");
    }

    #[test]
    fn test_kpi_insights() {
        let s = Snapshot::baseline();
        let insights = kpi_insights(&compute_kpis(&s), "en");
        assert_eq!(
            insights,
            vec![
                "Revenue growth of 5.9% month-over-month".to_string(),
                "Currently at 94.7% of annual target".to_string(),
            ]
        );
    }
}
