// ==========================================
// 经营驾驶舱 - 年度目标进度引擎
// ==========================================
// 职责: 快照 → 年度营收/利润目标进度 (驾驶舱进度条)
// ==========================================

use crate::domain::progress::{TargetGauge, TargetKind};
use crate::domain::snapshot::Snapshot;
use crate::engine::thresholds::GAUGE_DISPLAY_MAX;

#[derive(Debug, Default, Clone, Copy)]
pub struct ProgressEngine;

impl ProgressEngine {
    pub fn new() -> Self {
        Self
    }

    /// 生成目标进度 (营收在前,利润在后)
    pub fn target_gauges(&self, snapshot: &Snapshot) -> Vec<TargetGauge> {
        vec![
            gauge(TargetKind::Revenue, snapshot.revenue.ytd, snapshot.revenue.target),
            gauge(TargetKind::Profit, snapshot.profit.ytd, snapshot.profit.target),
        ]
    }
}

fn gauge(kind: TargetKind, actual: f64, target: f64) -> TargetGauge {
    let percent = actual / target * 100.0;
    // NaN (0/0) 时进度条为空
    let display_percent = if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, GAUGE_DISPLAY_MAX)
    };

    TargetGauge {
        kind,
        actual,
        target,
        percent,
        display_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_gauges() {
        let gauges = ProgressEngine::new().target_gauges(&Snapshot::baseline());
        assert_eq!(gauges.len(), 2);

        assert_eq!(gauges[0].kind, TargetKind::Revenue);
        assert!((gauges[0].percent - 142.0 / 150.0 * 100.0).abs() < 1e-9);

        assert_eq!(gauges[1].kind, TargetKind::Profit);
        assert!((gauges[1].percent - 24.5 / 30.0 * 100.0).abs() < 1e-9);
        assert!(!gauges[1].is_achieved());
    }

    #[test]
    fn test_display_is_clamped() {
        let mut s = Snapshot::baseline();
        s.profit.ytd = 36_000_000.0;

        let gauges = ProgressEngine::new().target_gauges(&s);
        assert!((gauges[1].percent - 120.0).abs() < 1e-9);
        assert_eq!(gauges[1].display_percent, 100.0);
        assert!(gauges[1].is_achieved());

        s.profit.ytd = -1_000_000.0;
        assert_eq!(ProgressEngine::new().target_gauges(&s)[1].display_percent, 0.0);

        s.profit.ytd = 0.0;
        s.profit.target = 0.0;
        assert_eq!(ProgressEngine::new().target_gauges(&s)[1].display_percent, 0.0);
    }
}
