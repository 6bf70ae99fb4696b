use super::types::ThemePreference;
use crate::appearance::ColorScheme;

/// 由偏好和 OS 报告推导实际配色。
///
/// 跟随系统且 OS 未报告时回退为 `Light`。
pub fn resolve_scheme(preference: ThemePreference, os: Option<ColorScheme>) -> ColorScheme {
    match preference.explicit_scheme() {
        Some(scheme) => scheme,
        None => os.unwrap_or(ColorScheme::Light),
    }
}
