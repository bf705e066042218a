// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持英文（默认）和中文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// 注意: 所有翻译均显式传入 locale,不修改全局 locale,
//       多个刷新周期/测试可并行使用不同语言
// ==========================================

/// 默认语言
pub const DEFAULT_LOCALE: &str = "en";

/// 已提供文案的语言
pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "zh-CN"];

/// 是否为已支持的语言
pub fn is_supported(locale: &str) -> bool {
    SUPPORTED_LOCALES.contains(&locale)
}

/// 翻译消息（无参数）
///
/// 缺失的键回退到英文
///
/// # 示例
/// ```no_run
/// use executive_kpi::i18n::t_in;
/// let title = t_in("zh-CN", "alert.revenue_decline.title");
/// ```
pub fn t_in(locale: &str, key: &str) -> String {
    rust_i18n::t!(key, locale = locale).to_string()
}

/// 翻译消息（带参数）
///
/// 占位符格式: `%{name}`
///
/// # 示例
/// ```no_run
/// use executive_kpi::i18n::t_in_with_args;
/// let msg = t_in_with_args("en", "alert.cash_flow_attention.message", &[("months", "8")]);
/// ```
pub fn t_in_with_args(locale: &str, key: &str, args: &[(&str, &str)]) -> String {
    let mut result = t_in(locale, key);
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_locales() {
        assert!(is_supported("en"));
        assert!(is_supported("zh-CN"));
        assert!(!is_supported("fr"));
    }

    #[test]
    fn test_translate_simple() {
        assert_eq!(t_in("en", "alert.revenue_decline.title"), "Revenue Decline");
        assert_eq!(t_in("zh-CN", "alert.revenue_decline.title"), "营收下滑");
    }

    #[test]
    fn test_translate_with_args() {
        let msg = t_in_with_args("en", "alert.cash_flow_attention.message", &[("months", "8")]);
        assert_eq!(msg, "Current runway: 8 months");

        let msg = t_in_with_args("zh-CN", "alert.cash_flow_attention.message", &[("months", "8")]);
        assert!(msg.contains('8'));
        assert!(msg.contains("资金可支撑"));
    }

    #[test]
    fn test_unknown_locale_falls_back_to_english() {
        assert_eq!(t_in("fr", "alert.operational_efficiency.title"), "Operational Efficiency");
    }
}
