// ==========================================
// 测试数据构建器 - 快照
// ==========================================
// 默认值为"全部指标健康"的快照 (不触发任何告警)
// ==========================================

use executive_kpi::domain::snapshot::{
    CashFlowMetrics, OperationsMetrics, ProfitMetrics, RevenueMetrics, Snapshot,
};

pub struct SnapshotBuilder {
    snapshot: Snapshot,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self {
            snapshot: Snapshot {
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
            },
        }
    }

    pub fn revenue(mut self, current: f64, previous: f64) -> Self {
        self.snapshot.revenue.current = current;
        self.snapshot.revenue.previous = previous;
        self
    }

    pub fn revenue_ytd(mut self, ytd: f64, target: f64) -> Self {
        self.snapshot.revenue.ytd = ytd;
        self.snapshot.revenue.target = target;
        self
    }

    pub fn profit(mut self, current: f64, previous: f64) -> Self {
        self.snapshot.profit.current = current;
        self.snapshot.profit.previous = previous;
        self
    }

    pub fn cash_flow(mut self, current: f64, previous: f64) -> Self {
        self.snapshot.cash_flow.current = current;
        self.snapshot.cash_flow.previous = previous;
        self
    }

    pub fn runway(mut self, months: u32) -> Self {
        self.snapshot.cash_flow.runway = months;
        self
    }

    pub fn efficiency(mut self, efficiency: f64) -> Self {
        self.snapshot.operations.efficiency = efficiency;
        self
    }

    pub fn build(self) -> Snapshot {
        self.snapshot
    }
}
