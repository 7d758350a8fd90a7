//! Site configuration.
//!
//! Copy and contact details are kept in `site.toml`, embedded at compile time
//! so the wasm bundle needs no extra request. Missing keys take their
//! defaults; a file that fails to parse yields the full default config.

use serde::Deserialize;

/// The `site.toml` shipped with the crate.
pub const EMBEDDED_SITE_TOML: &str = include_str!("../site.toml");

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Hero headline
    pub brand: String,
    /// Name used in the footer
    pub short_brand: String,
    pub tagline: String,
    pub hero_lead: String,
    /// Background image of the hero section
    pub hero_image: String,
    pub copyright: String,
    pub notice: NoticeConfig,
    pub contacts: ContactsConfig,
}

/// Confirmation shown after a lead form is accepted
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NoticeConfig {
    pub success: String,
    /// How long a toast stays on screen
    pub duration_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactsConfig {
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "ЧУПАЧУПС".into(),
            short_brand: "ЧупаЧупс Опт".into(),
            tagline: "Оптовые поставки леденцов с индивидуальным дизайном по всей России и СНГ"
                .into(),
            hero_lead: "Откройте для себя леденцы, которые отличаются высоким качеством и \
                        неповторимым вкусом. Рассчитайте заказ прямо сейчас!"
                .into(),
            hero_image: String::new(),
            copyright: "© 2024 ЧупаЧупс Опт. Все права защищены.".into(),
            notice: NoticeConfig::default(),
            contacts: ContactsConfig::default(),
        }
    }
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            success: "Заявка принята! Менеджер свяжется с вами в течение 30 минут".into(),
            duration_ms: 4000,
        }
    }
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self {
            phone: "+7 (495) 123-45-67".into(),
            email: "opt@chupachups.ru".into(),
            address: "Москва, ул. Производственная, 1".into(),
        }
    }
}

impl SiteConfig {
    /// Config compiled into the binary.
    pub fn embedded() -> Self {
        Self::from_toml_str(EMBEDDED_SITE_TOML)
    }

    /// Parse a TOML document, falling back to defaults if it is invalid.
    pub fn from_toml_str(content: &str) -> Self {
        match toml::from_str(content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("failed to parse site config: {e}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_config_parses() {
        let config = SiteConfig::embedded();
        assert_eq!(
            config.notice.success,
            "Заявка принята! Менеджер свяжется с вами в течение 30 минут"
        );
        assert_eq!(config.contacts.email, "opt@chupachups.ru");
        assert!(config.hero_image.starts_with("https://"));
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
            brand = "LOLLY"

            [notice]
            duration_ms = 1500
            "#,
        );
        assert_eq!(config.brand, "LOLLY");
        assert_eq!(config.notice.duration_ms, 1500);
        assert_eq!(config.notice.success, NoticeConfig::default().success);
        assert_eq!(config.contacts, ContactsConfig::default());
    }

    #[test]
    fn broken_config_falls_back_to_default() {
        let config = SiteConfig::from_toml_str("brand = [unterminated");
        assert_eq!(config, SiteConfig::default());
    }
}
