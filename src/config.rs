//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Configuration is
//! layered: stock defaults are overridden by the user's `config.toml` in the
//! site directory, and the canonical site URL can finally be overridden by
//! the `SITE_URL` environment variable.
//!
//! Configuration covers *how* the site is published (origin URL, form
//! endpoint, colors). *What* it says lives in `content.toml`; see
//! [`crate::content`].
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! url = "https://destinystransfer.com"   # canonical origin, SITE_URL overrides
//! locale = "en_US"
//! logo = "/DT_logo.png"
//! hero_image = "/main-hero-image.jpeg"
//!
//! [contact]
//! # endpoint = "https://forms.example.com/contact"
//! simulated_delay_ms = 1000
//!
//! [colors.light]
//! background = "#ffffff"
//! surface = "#f9fafb"
//! text = "#111827"
//! text_muted = "#4b5563"
//! border = "#e5e7eb"
//! accent = "#1d4ed8"
//! accent_text = "#ffffff"
//!
//! [colors.dark]
//! background = "#0b0f19"
//! ...
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Environment variable overriding `site.url`.
pub const SITE_URL_ENV: &str = "SITE_URL";

pub const DEFAULT_SITE_URL: &str = "https://destinystransfer.com";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Canonical origin and shared asset paths.
    pub site: SiteSettings,
    /// Contact form submission target.
    pub contact: ContactConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSettings {
    /// Canonical origin, without a trailing slash once loaded.
    pub url: String,
    /// Open Graph locale.
    pub locale: String,
    /// Logo path relative to the site root.
    pub logo: String,
    /// Home page hero image path relative to the site root.
    pub hero_image: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_SITE_URL.to_string(),
            locale: "en_US".to_string(),
            logo: "/DT_logo.png".to_string(),
            hero_image: "/main-hero-image.jpeg".to_string(),
        }
    }
}

impl SiteSettings {
    /// Absolute URL for a root-relative path: `/rates/` → `https://…/rates/`.
    pub fn absolute(&self, path: &str) -> String {
        if path == "/" {
            self.url.clone()
        } else {
            format!("{}{}", self.url, path)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    /// Where the browser posts the contact form. When absent, the page
    /// simulates a successful submission after `simulated_delay_ms`.
    pub endpoint: Option<String>,
    pub simulated_delay_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            simulated_delay_ms: 1000,
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    /// Alternate section background (service grid, FAQ band).
    pub surface: String,
    pub text: String,
    /// Secondary copy: descriptions, footers, table notes.
    pub text_muted: String,
    pub border: String,
    /// Buttons, links and the call-to-action bands.
    pub accent: String,
    /// Text drawn on top of `accent`.
    pub accent_text: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            surface: "#f9fafb".to_string(),
            text: "#111827".to_string(),
            text_muted: "#4b5563".to_string(),
            border: "#e5e7eb".to_string(),
            accent: "#1d4ed8".to_string(),
            accent_text: "#ffffff".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0b0f19".to_string(),
            surface: "#111827".to_string(),
            text: "#f3f4f6".to_string(),
            text_muted: "#9ca3af".to_string(),
            border: "#1f2937".to_string(),
            accent: "#60a5fa".to_string(),
            accent_text: "#0b0f19".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

impl SiteConfig {
    /// Validate and normalize config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.site.url;
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::Validation(format!(
                "site.url must start with http:// or https://, got \"{url}\""
            )));
        }
        if let Some(endpoint) = &self.contact.endpoint
            && endpoint.trim().is_empty()
        {
            return Err(ConfigError::Validation(
                "contact.endpoint must not be empty when set".into(),
            ));
        }
        Ok(())
    }

    /// Apply an override for the canonical URL, then strip trailing slashes
    /// so paths can be appended directly.
    pub fn with_site_url_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.site.url = url.trim().to_string();
        }
        let trimmed = self.site.url.trim_end_matches('/').len();
        self.site.url.truncate(trimmed);
        self
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto the stock defaults, apply the URL
/// override, then deserialize and validate.
pub fn resolve_config(
    overlay: Option<toml::Value>,
    site_url_override: Option<String>,
) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    let config = config.with_site_url_override(site_url_override);
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// applies `SITE_URL` from the environment, and validates the result.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let overlay = load_raw_config(dir)?;
    let env_url = std::env::var(SITE_URL_ENV).ok();
    let config = resolve_config(overlay, env_url)?;
    tracing::debug!(url = %config.site.url, "resolved site config");
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Freight Site Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Page content (company details, rates, FAQs) lives in content.toml.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site
# ---------------------------------------------------------------------------
[site]
# Canonical origin used in links, sitemap.xml, robots.txt and structured data.
# The SITE_URL environment variable takes precedence over this value.
url = "https://destinystransfer.com"

# Open Graph locale.
locale = "en_US"

# Paths relative to the site root. Files come from the assets/ directory.
logo = "/DT_logo.png"
hero_image = "/main-hero-image.jpeg"

# ---------------------------------------------------------------------------
# Contact form
# ---------------------------------------------------------------------------
[contact]
# URL the form posts to (JSON body: name, email, service, message).
# Leave unset to simulate a successful submission in the browser.
# endpoint = "https://forms.example.com/contact"

# Delay before the simulated submission reports success.
simulated_delay_ms = 1000

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
surface = "#f9fafb"       # Alternate section bands
text = "#111827"
text_muted = "#4b5563"    # Descriptions, table notes, footer
border = "#e5e7eb"
accent = "#1d4ed8"        # Buttons, links, call-to-action bands
accent_text = "#ffffff"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0b0f19"
surface = "#111827"
text = "#f3f4f6"
text_muted = "#9ca3af"
border = "#1f2937"
accent = "#60a5fa"
accent_text = "#0b0f19"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
{light}
}}

@media (prefers-color-scheme: dark) {{
    :root {{
{dark}
    }}
}}"#,
        light = scheme_properties(&colors.light, "    "),
        dark = scheme_properties(&colors.dark, "        "),
    )
}

fn scheme_properties(scheme: &ColorScheme, indent: &str) -> String {
    [
        ("bg", &scheme.background),
        ("surface", &scheme.surface),
        ("text", &scheme.text),
        ("text-muted", &scheme.text_muted),
        ("border", &scheme.border),
        ("accent", &scheme.accent),
        ("accent-text", &scheme.accent_text),
    ]
    .iter()
    .map(|(name, value)| format!("{indent}--color-{name}: {value};"))
    .collect::<Vec<_>>()
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::setup_fixture_site;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_production_url() {
        let config = SiteConfig::default();
        assert_eq!(config.site.url, "https://destinystransfer.com");
        assert_eq!(config.contact.endpoint, None);
        assert_eq!(config.contact.simulated_delay_ms, 1000);
    }

    #[test]
    fn stock_config_toml_matches_defaults() {
        let parsed: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(parsed.site.url, defaults.site.url);
        assert_eq!(parsed.colors.dark.accent, defaults.colors.dark.accent);
        assert_eq!(parsed.contact.endpoint, defaults.contact.endpoint);
    }

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = resolve_config(load_raw_config(tmp.path()).unwrap(), None).unwrap();
        assert_eq!(config.colors.light.background, "#ffffff");
        assert_eq!(config.site.url, DEFAULT_SITE_URL);
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r##"
[contact]
endpoint = "https://forms.example.com/contact"

[colors.light]
accent = "#123456"
"##,
        )
        .unwrap();

        let config = resolve_config(load_raw_config(tmp.path()).unwrap(), None).unwrap();
        assert_eq!(
            config.contact.endpoint.as_deref(),
            Some("https://forms.example.com/contact")
        );
        assert_eq!(config.colors.light.accent, "#123456");
        // Unspecified values should be defaults
        assert_eq!(config.colors.light.background, "#ffffff");
        assert_eq!(config.contact.simulated_delay_ms, 1000);
    }

    #[test]
    fn fixture_site_config_loads() {
        let tmp = setup_fixture_site();
        let config = resolve_config(load_raw_config(tmp.path()).unwrap(), None).unwrap();
        assert_eq!(config.site.url, "https://bluelinefreight.example");
        assert_eq!(config.site.logo, "/logo.svg");
        assert_eq!(config.contact.simulated_delay_ms, 250);
        assert_eq!(config.colors.light.accent, "#0f766e");
        assert_eq!(config.colors.dark.accent, "#60a5fa");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "this is not valid toml [[[").unwrap();
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn url_override_wins_and_is_trimmed() {
        let overlay: toml::Value = toml::from_str(
            r#"
[site]
url = "https://from-file.example"
"#,
        )
        .unwrap();
        let config =
            resolve_config(Some(overlay), Some("https://staging.example/".into())).unwrap();
        assert_eq!(config.site.url, "https://staging.example");
    }

    #[test]
    fn blank_url_override_is_ignored() {
        let config = resolve_config(None, Some("  ".into())).unwrap();
        assert_eq!(config.site.url, DEFAULT_SITE_URL);
    }

    #[test]
    fn url_without_scheme_is_rejected() {
        let result = resolve_config(None, Some("destinystransfer.com".into()));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn empty_endpoint_is_rejected() {
        let overlay: toml::Value = toml::from_str(
            r#"
[contact]
endpoint = " "
"#,
        )
        .unwrap();
        assert!(matches!(
            resolve_config(Some(overlay), None),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn absolute_urls() {
        let site = SiteSettings::default();
        assert_eq!(site.absolute("/"), "https://destinystransfer.com");
        assert_eq!(
            site.absolute("/rates/"),
            "https://destinystransfer.com/rates/"
        );
    }

    #[test]
    fn generate_css_includes_both_schemes() {
        let css = generate_color_css(&ColorConfig::default());
        assert!(css.contains("--color-bg: #ffffff;"));
        assert!(css.contains("--color-accent-text: #ffffff;"));
        assert!(css.contains("@media (prefers-color-scheme: dark)"));
        assert!(css.contains("--color-bg: #0b0f19;"));
    }

    #[test]
    fn merge_toml_preserves_base_keys() {
        let base: toml::Value = toml::from_str("a = 1\nb = 2").unwrap();
        let overlay: toml::Value = toml::from_str("a = 10").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("a").unwrap().as_integer(), Some(10));
        assert_eq!(merged.get("b").unwrap().as_integer(), Some(2));
    }

    #[test]
    fn merge_toml_deep_nested() {
        let base: toml::Value = toml::from_str(
            r##"
[colors.light]
background = "#fff"
text = "#000"
"##,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r##"
[colors.light]
background = "#fafafa"
"##,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let light = merged.get("colors").unwrap().get("light").unwrap();
        assert_eq!(light.get("background").unwrap().as_str(), Some("#fafafa"));
        assert_eq!(light.get("text").unwrap().as_str(), Some("#000"));
    }

    #[test]
    fn unknown_key_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[site]\nurl_ = \"x\"");
        assert!(result.unwrap_err().to_string().contains("unknown field"));
    }

    #[test]
    fn unknown_key_rejected_via_resolve() {
        let overlay: toml::Value = toml::from_str("[contact]\nendpont = \"x\"").unwrap();
        assert!(matches!(
            resolve_config(Some(overlay), None),
            Err(ConfigError::Toml(_))
        ));
    }
}
