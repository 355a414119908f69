// ==========================================
// Internationalization (i18n)
// ==========================================
// Backed by rust-i18n
// Supports English (fallback) and Norwegian Bokmål
// ==========================================
// Note: the rust_i18n::i18n! macro is initialized in lib.rs.
// Helpers take an explicit locale so parallel imports never depend on the
// process-wide locale.
// ==========================================

/// Locale used when none is configured
pub const DEFAULT_LOCALE: &str = "en";

/// Locales with a file under `locales/`
pub const SUPPORTED_LOCALES: &[&str] = &["en", "nb"];

pub fn is_supported(locale: &str) -> bool {
    SUPPORTED_LOCALES.contains(&locale)
}

/// Translate a message without arguments
///
/// # Example
/// ```no_run
/// use pool_planner::i18n::t;
/// let msg = t("nb", "report.header_name");
/// ```
pub fn t(locale: &str, key: &str) -> String {
    rust_i18n::t!(key, locale = locale).to_string()
}

/// Translate a message with `%{name}` placeholders
///
/// Placeholders are resolved in one pass over the template; text coming
/// from an argument is never scanned again. Unknown names are kept as-is.
///
/// # Example
/// ```no_run
/// use pool_planner::i18n::t_with_args;
/// let msg = t_with_args("en", "reason.invalid_dob", &[("value", "31.02.2011")]);
/// ```
pub fn t_with_args(locale: &str, key: &str, args: &[(&str, &str)]) -> String {
    let template = t(locale, key);
    let mut result = String::with_capacity(template.len());
    let mut rest = template.as_str();

    while let Some(start) = rest.find("%{") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            result.push_str(&rest[start..]);
            return result;
        };
        let name = &after[..end];
        match args.iter().find(|(k, _)| *k == name) {
            Some((_, v)) => result.push_str(v),
            None => result.push_str(&rest[start..start + 2 + end + 1]),
        }
        rest = &after[end + 1..];
    }
    result.push_str(rest);
    result
}
