//! CLI output formatting for the `check` and `build` commands.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Each entity leads
//! with its positional index and name; counts, sources and output files are
//! indented context lines. The check output reads as a content inventory,
//! the build output as a list of what was written.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Company
//!     Destiny's Tranfer LLC (30 years)
//!     Phone: (407) 978-5088
//!     Address: , Orlando, Florida 32812
//!
//! Services
//! 001 Truckload (TL) Shipping (4 features)
//! 002 Less Than Truckload (LTL) Shipping (4 features)
//!
//! Rates from Orlando, FL
//!     TL Shipping Rates: 9 destinations
//!     LTL Shipping Rates: none listed
//!     Additional Services: 3
//!     Stops: 4 included, $100 each after
//!
//! FAQs
//!     Home: 3
//!
//! Config
//!     Site URL: https://destinystransfer.com
//!     Contact form: simulated (1000 ms)
//! ```
//!
//! ## Build
//!
//! ```text
//! 001 Home → index.html (24.1 KB)
//! 002 Services → services/index.html (21.7 KB)
//!
//! sitemap.xml (4 entries)
//! robots.txt
//! Copied 2 assets
//! Site generated at dist
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::config::SiteConfig;
use crate::content::{RateTable, ServiceKind, SiteContent};
use crate::format::{format_address, format_currency, format_phone};
use crate::generate::GenerateReport;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an entity header: positional index + name, with optional detail.
///
/// ```text
/// 001 Hot Shot Shipping (4 features)
/// 001 Home → index.html
/// ```
fn entity_header(index: usize, name: &str, detail: Option<&str>) -> String {
    match detail {
        Some(d) => format!("{} {} {}", format_index(index), name, d),
        None => format!("{} {}", format_index(index), name),
    }
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Human-readable byte size.
fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    }
}

// ============================================================================
// check
// ============================================================================

/// Inventory of the loaded content and config.
pub fn format_check_output(content: &SiteContent, config: &SiteConfig) -> Vec<String> {
    let mut lines = Vec::new();
    let company = &content.company;

    lines.push("Company".to_string());
    lines.push(format!(
        "{}{} ({} years)",
        indent(1),
        company.name,
        company.experience_years
    ));
    lines.push(format!("{}Phone: {}", indent(1), format_phone(&company.phone)));
    lines.push(format!("{}Address: {}", indent(1), format_address(&company.address)));
    if company.equipment.is_empty() {
        lines.push(format!("{}Equipment: none listed", indent(1)));
    }

    lines.push(String::new());
    lines.push("Services".to_string());
    for (i, kind) in ServiceKind::ALL.iter().enumerate() {
        let service = content.services.get(*kind);
        let detail = format!("({})", plural(service.features.len(), "feature", "features"));
        lines.push(entity_header(i + 1, &service.title, Some(&detail)));
    }

    let rates = &content.rates;
    lines.push(String::new());
    lines.push(format!("Rates from {}", rates.terms.origin));
    for table in [RateTable::Truckload, RateTable::LessThanTruckload] {
        let rows = rates.table(table);
        let count = if rows.is_empty() {
            "none listed".to_string()
        } else {
            plural(rows.len(), "destination", "destinations")
        };
        lines.push(format!("{}{}: {}", indent(1), table.heading(), count));
    }
    lines.push(format!(
        "{}Additional Services: {}",
        indent(1),
        rates.services.len()
    ));
    lines.push(format!(
        "{}Stops: {} included, {} each after",
        indent(1),
        rates.terms.included_stops,
        format_currency(rates.terms.additional_stop_charge)
    ));

    lines.push(String::new());
    lines.push("FAQs".to_string());
    for (label, faqs) in [
        ("Home", &content.faqs.home),
        ("Services", &content.faqs.services),
        ("Rates", &content.faqs.rates),
    ] {
        lines.push(format!("{}{}: {}", indent(1), label, faqs.len()));
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    lines.push(format!("{}Site URL: {}", indent(1), config.site.url));
    let contact = match &config.contact.endpoint {
        Some(endpoint) => endpoint.clone(),
        None => format!("simulated ({} ms)", config.contact.simulated_delay_ms),
    };
    lines.push(format!("{}Contact form: {}", indent(1), contact));

    lines
}

pub fn print_check_output(content: &SiteContent, config: &SiteConfig) {
    for line in format_check_output(content, config) {
        println!("{}", line);
    }
}

// ============================================================================
// build
// ============================================================================

/// What a build wrote, page by page.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, page) in report.pages.iter().enumerate() {
        let detail = format!("→ {} ({})", page.route.file(), format_size(page.bytes));
        lines.push(entity_header(
            i + 1,
            page.route.breadcrumb_name(),
            Some(&detail),
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "sitemap.xml ({})",
        plural(report.sitemap_entries, "entry", "entries")
    ));
    lines.push("robots.txt".to_string());
    if report.assets_copied > 0 {
        lines.push(format!(
            "Copied {}",
            plural(report.assets_copied, "asset", "assets")
        ));
    }
    lines.push(format!(
        "Site generated at {}",
        report.output_dir.display()
    ));

    lines
}

pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::WrittenPage;
    use crate::test_helpers::fixture_content;
    use crate::types::Route;
    use std::path::PathBuf;

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
    }

    #[test]
    fn format_size_units() {
        assert_eq!(format_size(900), "900 B");
        assert_eq!(format_size(2048), "2.0 KB");
    }

    #[test]
    fn check_output_inventory() {
        let lines = format_check_output(&fixture_content(), &SiteConfig::default());
        assert_eq!(lines[0], "Company");
        assert_eq!(lines[1], "    Destiny's Tranfer LLC (30 years)");
        assert!(lines.contains(&"    Phone: (407) 978-5088".to_string()));
        assert!(lines.contains(&"    Address: , Orlando, Florida 32812".to_string()));
        assert!(lines.contains(&"001 Truckload (TL) Shipping (4 features)".to_string()));
        assert!(lines.contains(&"Rates from Orlando, FL".to_string()));
        assert!(lines.contains(&"    TL Shipping Rates: 9 destinations".to_string()));
        assert!(lines.contains(&"    LTL Shipping Rates: none listed".to_string()));
        assert!(lines.contains(&"    Stops: 4 included, $100 each after".to_string()));
        assert!(lines.contains(&"    Services: 6".to_string()));
        assert!(lines.contains(&"    Contact form: simulated (1000 ms)".to_string()));
    }

    #[test]
    fn check_output_shows_endpoint() {
        let mut config = SiteConfig::default();
        config.contact.endpoint = Some("https://forms.example.com".into());
        let lines = format_check_output(&fixture_content(), &config);
        assert!(lines.contains(&"    Contact form: https://forms.example.com".to_string()));
    }

    #[test]
    fn generate_output_lists_pages() {
        let report = GenerateReport {
            output_dir: PathBuf::from("dist"),
            pages: vec![
                WrittenPage {
                    route: Route::Home,
                    path: PathBuf::from("dist/index.html"),
                    bytes: 2048,
                },
                WrittenPage {
                    route: Route::Rates,
                    path: PathBuf::from("dist/rates/index.html"),
                    bytes: 512,
                },
            ],
            sitemap_entries: 4,
            assets_copied: 1,
        };
        let lines = format_generate_output(&report);
        assert_eq!(
            lines,
            [
                "001 Home → index.html (2.0 KB)",
                "002 Rates → rates/index.html (512 B)",
                "",
                "sitemap.xml (4 entries)",
                "robots.txt",
                "Copied 1 asset",
                "Site generated at dist",
            ]
        );
    }

    #[test]
    fn generate_output_omits_zero_assets() {
        let report = GenerateReport {
            output_dir: PathBuf::from("out"),
            pages: vec![],
            sitemap_entries: 4,
            assets_copied: 0,
        };
        let lines = format_generate_output(&report);
        assert!(!lines.iter().any(|l| l.starts_with("Copied")));
    }
}
