// ==========================================
// 经营驾驶舱 - KPI / 告警阈值
// ==========================================
// 所有比较均为严格比较 (> / <),阈值本身不触发上一档
// ==========================================

// ===== 营收增长 (%) =====
pub const REVENUE_GROWTH_EXCELLENT: f64 = 5.0;
pub const REVENUE_GROWTH_GOOD: f64 = 0.0;

// ===== 利润增长 (%) =====
pub const PROFIT_GROWTH_EXCELLENT: f64 = 3.0;
pub const PROFIT_GROWTH_GOOD: f64 = 0.0;

// ===== 现金流健康度 (按 runway 月数判定状态) =====
pub const RUNWAY_EXCELLENT_MONTHS: u32 = 12;
pub const RUNWAY_GOOD_MONTHS: u32 = 6;

// ===== 年度目标达成 (%) =====
pub const TARGET_PROGRESS_POSITIVE: f64 = 80.0;
pub const TARGET_PROGRESS_EXCELLENT: f64 = 90.0;
pub const TARGET_PROGRESS_GOOD: f64 = 75.0;

// ===== 告警规则 =====
pub const ALERT_REVENUE_GROWTH_BELOW: f64 = 0.0;
pub const ALERT_RUNWAY_BELOW_MONTHS: u32 = 12;
pub const ALERT_TARGET_PROGRESS_BELOW: f64 = 75.0;
pub const ALERT_EFFICIENCY_BELOW: f64 = 90.0;

// ===== 进度条 =====
pub const GAUGE_DISPLAY_MAX: f64 = 100.0;
