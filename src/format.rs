// ==========================================
// 经营驾驶舱 - 展示格式化
// ==========================================
// 职责: 驾驶舱卡片与告警文案使用的金额/百分比格式 (美元, en-US 分组)
// ==========================================

/// 非有限数值的占位显示
const NOT_AVAILABLE: &str = "n/a";

/// 整数美元金额,千分位分组 (如 `$12,500,000`)
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(rounded.abs() as u128))
}

/// 紧凑美元金额,最多一位小数 (如 `$12.5M`, `$850K`, `$142M`)
pub fn format_compact_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    const UNITS: [(f64, &str); 4] = [(1e3, "K"), (1e6, "M"), (1e9, "B"), (1e12, "T")];

    let sign = if amount < 0.0 { "-" } else { "" };
    let abs = amount.abs();

    // 不超过金额的最大单位
    let mut unit = UNITS.iter().rposition(|(base, _)| abs >= *base);
    let mut scaled = match unit {
        Some(i) => round1(abs / UNITS[i].0),
        None => round1(abs),
    };

    // 四舍五入后满 1000 则进位 (999,950 → $1M)
    while scaled >= 1000.0 {
        let next = unit.map_or(0, |i| i + 1);
        if next >= UNITS.len() {
            break;
        }
        unit = Some(next);
        scaled = round1(abs / UNITS[next].0);
    }

    match unit {
        Some(i) => format!("{}${}{}", sign, trim_one_decimal(scaled), UNITS[i].1),
        None => format!("{}${}", sign, trim_one_decimal(scaled)),
    }
}

/// 定点小数文本 (驾驶舱所有百分比文案统一经此格式化)
///
/// - 正好落在中点时远离零舍入 (`0.25` → `0.3`, `74.25` → `74.3`)
/// - `-0.0` 不带负号
/// - 非有限值原样输出 (`NaN` / `inf`)
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return format!("{:.*}", decimals, value);
    }

    let factor = 10f64.powi(decimals as i32);
    let rounded = (value.abs() * factor).round() / factor;
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{:.*}", sign, decimals, rounded)
}

/// 带符号百分比,一位小数 (正数带 `+`,如 `+5.9%`, `-5.6%`, `0.0%`)
pub fn format_signed_percent(value: f64) -> String {
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{}{}%", sign, to_fixed(value, 1))
}

/// 百分比,指定小数位 (如 `94.7%`)
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{}%", to_fixed(value, decimals))
}

// ==========================================
// 辅助函数
// ==========================================

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// 一位小数,去掉多余的 `.0`
fn trim_one_decimal(value: f64) -> String {
    let text = format!("{:.1}", value);
    match text.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(12_500_000.0), "$12,500,000");
        assert_eq!(format_currency(1_950_000.4), "$1,950,000");
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(-45_000.0), "-$45,000");
        assert_eq!(format_currency(f64::NAN), "n/a");
    }

    #[test]
    fn test_format_compact_currency() {
        assert_eq!(format_compact_currency(12_500_000.0), "$12.5M");
        assert_eq!(format_compact_currency(142_000_000.0), "$142M");
        assert_eq!(format_compact_currency(850_000.0), "$850K");
        assert_eq!(format_compact_currency(45_000.0), "$45K");
        assert_eq!(format_compact_currency(999_950.0), "$1M");
        assert_eq!(format_compact_currency(1_500_000_000.0), "$1.5B");
        assert_eq!(format_compact_currency(640.0), "$640");
        assert_eq!(format_compact_currency(-8_200_000.0), "-$8.2M");
    }

    #[test]
    fn test_to_fixed_rounds_half_away_from_zero() {
        assert_eq!(to_fixed(0.25, 1), "0.3");
        assert_eq!(to_fixed(74.25, 1), "74.3");
        assert_eq!(to_fixed(-0.25, 1), "-0.3");
        assert_eq!(to_fixed(5.932203389830509, 1), "5.9");
        assert_eq!(to_fixed(16.8, 0), "17");
        assert_eq!(to_fixed(74.96, 1), "75.0");
    }

    #[test]
    fn test_to_fixed_negative_zero_and_non_finite() {
        assert_eq!(to_fixed(-0.0, 1), "0.0");
        assert_eq!(to_fixed(f64::NAN, 1), "NaN");
        assert_eq!(to_fixed(f64::INFINITY, 1), "inf");
    }

    #[test]
    fn test_format_signed_percent() {
        assert_eq!(format_signed_percent(5.932203389830509), "+5.9%");
        assert_eq!(format_signed_percent(-5.6000000000000005), "-5.6%");
        assert_eq!(format_signed_percent(0.0), "0.0%");
        assert_eq!(format_signed_percent(-0.0), "0.0%");
        assert_eq!(format_signed_percent(0.25), "+0.3%");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(94.66666666666667, 1), "94.7%");
        assert_eq!(format_percent(16.8, 0), "17%");
    }
}
