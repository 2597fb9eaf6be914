//! `sitemap.xml` and `robots.txt`.
//!
//! Both are derived from fixed route tables and the canonical site URL. The
//! sitemap timestamp is passed in so repeated builds with the same inputs
//! are identical.

use crate::types::Route;
use chrono::{DateTime, SecondsFormat, Utc};
use maud::{PreEscaped, html};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

fn route_ranking(route: Route) -> (ChangeFrequency, f32) {
    match route {
        Route::Home => (ChangeFrequency::Weekly, 1.0),
        Route::Services | Route::Rates => (ChangeFrequency::Monthly, 0.9),
        Route::Contact => (ChangeFrequency::Monthly, 0.8),
    }
}

/// One entry per route, all stamped with `generated_at`.
pub fn sitemap_entries(site_url: &str, generated_at: DateTime<Utc>) -> Vec<SitemapEntry> {
    Route::ALL
        .iter()
        .map(|&route| {
            let (change_frequency, priority) = route_ranking(route);
            let url = match route {
                Route::Home => site_url.to_string(),
                other => format!("{site_url}{}", other.path()),
            };
            SitemapEntry {
                url,
                last_modified: generated_at,
                change_frequency,
                priority,
            }
        })
        .collect()
}

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Render the `<urlset>` document. URLs are escaped by maud.
pub fn render_sitemap_xml(entries: &[SitemapEntry]) -> String {
    let xml = html! {
        (PreEscaped(XML_DECLARATION))
        urlset xmlns=(SITEMAP_NAMESPACE) {
            @for entry in entries {
                url {
                    loc { (entry.url) }
                    lastmod {
                        (entry.last_modified.to_rfc3339_opts(SecondsFormat::Millis, true))
                    }
                    changefreq { (entry.change_frequency.as_str()) }
                    priority { (format!("{:.1}", entry.priority)) }
                }
            }
        }
    };
    let mut out = xml.into_string();
    out.push('\n');
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotsRule {
    pub user_agent: String,
    pub allow: Vec<String>,
    pub disallow: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotsPolicy {
    pub rules: Vec<RobotsRule>,
    pub sitemap: String,
}

const DISALLOWED: [&str; 2] = ["/api/", "/_next/"];

pub fn robots_policy(site_url: &str) -> RobotsPolicy {
    let rule = |agent: &str| RobotsRule {
        user_agent: agent.to_string(),
        allow: vec!["/".to_string()],
        disallow: DISALLOWED.iter().map(|p| p.to_string()).collect(),
    };
    RobotsPolicy {
        rules: vec![rule("*"), rule("Googlebot")],
        sitemap: format!("{site_url}/sitemap.xml"),
    }
}

pub fn render_robots_txt(policy: &RobotsPolicy) -> String {
    let mut lines = Vec::new();
    for rule in &policy.rules {
        lines.push(format!("User-Agent: {}", rule.user_agent));
        lines.extend(rule.allow.iter().map(|path| format!("Allow: {path}")));
        lines.extend(rule.disallow.iter().map(|path| format!("Disallow: {path}")));
        lines.push(String::new());
    }
    lines.push(format!("Sitemap: {}", policy.sitemap));
    lines.join("\n") + "\n"
}
