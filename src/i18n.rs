// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持俄文（默认）、英文、中文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 报表默认语言
pub const DEFAULT_LOCALE: &str = "ru";

/// 按指定语言翻译（不读写全局 locale,可并发调用）
///
/// # 示例
/// ```no_run
/// use bottling_overtime::i18n::t_in;
/// let header = t_in("report.totals", "en");
/// ```
pub fn t_in(key: &str, locale: &str) -> String {
    rust_i18n::t!(key, locale = locale).to_string()
}

/// 按指定语言翻译（带参数,占位符格式 `%{name}`）
pub fn t_in_with_args(key: &str, locale: &str, args: &[(&str, &str)]) -> String {
    let mut result = t_in(key, locale);
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}
