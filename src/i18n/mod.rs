//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (US)
    #[default]
    EnUS,
    /// Chinese (Simplified)
    ZhCN,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }

    /// Parse a language tag such as `en`, `zh-CN` or `zh_Hans`
    pub fn from_tag(tag: &str) -> Option<Self> {
        let lang = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "en" => Some(Locale::EnUS),
            "zh" => Some(Locale::ZhCN),
            _ => None,
        }
    }

    /// Locale from the configured tag, else the system locale, else English
    pub fn resolve(configured: Option<&str>) -> Self {
        configured
            .and_then(Self::from_tag)
            .or_else(|| Self::from_tag(&locale_config::Locale::current().to_string()))
            .unwrap_or_default()
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, zh))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("Infinite Scroll Products", "无限滚动商品"));

    // Catalog
    map.insert("catalog-loading", ("Loading...", "加载中..."));
    map.insert("catalog-empty", ("No products", "暂无商品"));
    map.insert("catalog-end", ("You have reached the end", "已经到底了"));
    map.insert("catalog-count", ("{count} products", "{count} 件商品"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, zh)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::ZhCN => SharedString::from(zh),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}

/// Translate a key, substituting `{count}`
pub fn t_count(locale: Locale, key: &str, count: usize) -> SharedString {
    t(locale, key).replace("{count}", &count.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_language_tags() {
        assert_eq!(Locale::from_tag("en-US"), Some(Locale::EnUS));
        assert_eq!(Locale::from_tag("zh_Hans"), Some(Locale::ZhCN));
        assert_eq!(Locale::from_tag("ZH"), Some(Locale::ZhCN));
        assert_eq!(Locale::from_tag("uz-UZ"), None);
    }

    #[test]
    fn configured_locale_wins() {
        assert_eq!(Locale::resolve(Some("zh")), Locale::ZhCN);
        assert_eq!(Locale::resolve(Some("en")), Locale::EnUS);
    }

    #[test]
    fn count_is_substituted() {
        assert_eq!(t_count(Locale::EnUS, "catalog-count", 30).as_ref(), "30 products");
        assert_eq!(t(Locale::EnUS, "missing-key").as_ref(), "missing-key");
    }
}
