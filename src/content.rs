//! The site's content model.
//!
//! Everything the pages say lives in a single `content.toml`: company facts,
//! service descriptions, rate tables, rate terms, FAQs and per-page copy.
//! The file is parsed once at startup into a [`SiteContent`], validated, and
//! then only ever borrowed. Nothing mutates it afterwards.
//!
//! ## Stock Content
//!
//! The binary embeds a complete `content.toml` (see [`stock_content_toml`]).
//! When no content file exists the stock content is used as-is, and
//! `freight-site gen-content` prints it as a starting point.
//!
//! ## Layout
//!
//! ```toml
//! [company]                  # CompanyInfo
//! [company.address]
//! [geo]                      # coordinates for the LocalBusiness record
//! [services.truckload]       # one table per ServiceKind
//! [[rates.truckload]]        # Rate rows, free-text destinations
//! [[rates.less_than_truckload]]
//! [[rates.services]]         # ServiceRate add-ons
//! [rates.terms]              # RateTerms
//! [[faqs.home]]              # FaqItem lists per page
//! [[service_areas]]          # coverage regions on the home page
//! [pages.home]               # PageCopy per route
//! ```
//!
//! Rate policy (included stops, stop overage, liftgate charge) is data, not
//! code: the content owner decides which numbers are current.
//!
//! Unknown keys are rejected to catch typos early.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Content validation error: {0}")]
    Validation(String),
}

const STOCK_CONTENT: &str = include_str!("../static/content.toml");

/// Everything rendered on the site.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteContent {
    pub company: CompanyInfo,
    pub geo: GeoPoint,
    pub services: ServiceCatalog,
    pub rates: RateSheet,
    pub faqs: FaqSets,
    #[serde(default)]
    pub service_areas: Vec<ServiceArea>,
    pub pages: PageCopies,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompanyInfo {
    pub name: String,
    pub owner: String,
    pub address: Address,
    /// Ten digits once punctuation is stripped.
    pub phone: String,
    pub email: String,
    pub experience_years: u32,
    #[serde(default)]
    pub equipment: Vec<String>,
    /// Free-text labels; each one becomes a Service structured-data record.
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub licensed: bool,
    #[serde(default)]
    pub insured: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// Fixed coordinates published in the LocalBusiness record.
///
/// Kept as strings so they round-trip into JSON-LD exactly as written.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeoPoint {
    pub latitude: String,
    pub longitude: String,
}

/// The four offered service variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Truckload,
    LessThanTruckload,
    ShortHaul,
    HotShot,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 4] = [
        ServiceKind::Truckload,
        ServiceKind::LessThanTruckload,
        ServiceKind::ShortHaul,
        ServiceKind::HotShot,
    ];
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceDescription {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceCatalog {
    pub truckload: ServiceDescription,
    pub less_than_truckload: ServiceDescription,
    pub short_haul: ServiceDescription,
    pub hot_shot: ServiceDescription,
}

impl ServiceCatalog {
    pub fn get(&self, kind: ServiceKind) -> &ServiceDescription {
        match kind {
            ServiceKind::Truckload => &self.truckload,
            ServiceKind::LessThanTruckload => &self.less_than_truckload,
            ServiceKind::ShortHaul => &self.short_haul,
            ServiceKind::HotShot => &self.hot_shot,
        }
    }
}

/// One row of a destination rate table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rate {
    pub destination: String,
    pub rate: f64,
    #[serde(default)]
    pub note: Option<String>,
}

/// Which destination table a set of [`Rate`]s belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateTable {
    Truckload,
    LessThanTruckload,
}

impl RateTable {
    pub fn heading(self) -> &'static str {
        match self {
            RateTable::Truckload => "TL Shipping Rates",
            RateTable::LessThanTruckload => "LTL Shipping Rates",
        }
    }

    pub fn subheading(self) -> &'static str {
        match self {
            RateTable::Truckload => "Truckload shipping rates",
            RateTable::LessThanTruckload => "Less-than-truckload shipping rates",
        }
    }
}

/// Price of an add-on service: a number, or the literal "call for quote".
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "RawPrice")]
pub enum ServicePrice {
    Amount(f64),
    CallForQuote,
}

pub const CALL_FOR_QUOTE: &str = "call for quote";

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(f64),
    Text(String),
}

impl TryFrom<RawPrice> for ServicePrice {
    type Error = String;

    fn try_from(raw: RawPrice) -> Result<Self, Self::Error> {
        match raw {
            RawPrice::Number(n) => Ok(ServicePrice::Amount(n)),
            RawPrice::Text(s) if s.trim().eq_ignore_ascii_case(CALL_FOR_QUOTE) => {
                Ok(ServicePrice::CallForQuote)
            }
            RawPrice::Text(s) => Err(format!(
                "price must be a number or \"{CALL_FOR_QUOTE}\", got \"{s}\""
            )),
        }
    }
}

/// A named add-on such as short-haul, hot-shot or trailer spotting.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceRate {
    /// Stable identifier, e.g. `"short-haul"`.
    pub name: String,
    /// Display label, e.g. `"Short Haul (50-mile radius)"`.
    pub label: String,
    pub price: ServicePrice,
    #[serde(default)]
    pub includes: Vec<String>,
}

/// Policy constants that apply across all rate tables.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RateTerms {
    #[serde(default)]
    pub included: Vec<String>,
    pub included_stops: u32,
    pub additional_stop_charge: f64,
    #[serde(default)]
    pub liftgate_inside_delivery_charge: Option<f64>,
    #[serde(default)]
    pub liftgate_inside_delivery_note: Option<String>,
    pub origin: String,
    pub coverage_radius_miles: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RateSheet {
    #[serde(default)]
    pub truckload: Vec<Rate>,
    #[serde(default)]
    pub less_than_truckload: Vec<Rate>,
    #[serde(default)]
    pub services: Vec<ServiceRate>,
    pub terms: RateTerms,
}

impl RateSheet {
    pub fn table(&self, table: RateTable) -> &[Rate] {
        match table {
            RateTable::Truckload => &self.truckload,
            RateTable::LessThanTruckload => &self.less_than_truckload,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FaqSets {
    pub home: Vec<FaqItem>,
    pub services: Vec<FaqItem>,
    pub rates: Vec<FaqItem>,
}

/// A named group of cities shown in the home page coverage section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceArea {
    pub region: String,
    pub cities: Vec<String>,
}

/// Copy and search metadata for one page.
///
/// `title`, `description`, `headline` and `intro` may contain the
/// placeholders `{company}`, `{experience}`, `{phone}` and `{origin}`;
/// see [`SiteContent::interpolate`]. `intro` is markdown.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageCopy {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub headline: String,
    pub intro: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageCopies {
    pub home: PageCopy,
    pub services: PageCopy,
    pub rates: PageCopy,
    pub contact: PageCopy,
}

impl SiteContent {
    /// The content embedded in the binary.
    pub fn stock() -> Result<Self, ContentError> {
        let content: SiteContent = toml::from_str(STOCK_CONTENT)?;
        content.validate()?;
        Ok(content)
    }

    /// Check the load-time invariants.
    ///
    /// Rendering tolerates violations (formatters fall back), but a content
    /// file that breaks them is almost certainly a typo.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.company.name.trim().is_empty() {
            return Err(ContentError::Validation(
                "company.name must not be empty".into(),
            ));
        }
        let digits = self
            .company
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit())
            .count();
        if digits != 10 {
            return Err(ContentError::Validation(format!(
                "company.phone must contain 10 digits, found {digits}"
            )));
        }
        for table in [RateTable::Truckload, RateTable::LessThanTruckload] {
            for rate in self.rates.table(table) {
                check_amount(&rate.rate, || {
                    format!("{} rate for {}", table.heading(), rate.destination)
                })?;
            }
        }
        for service in &self.rates.services {
            if let ServicePrice::Amount(n) = service.price {
                check_amount(&n, || format!("price for {}", service.name))?;
            }
        }
        let terms = &self.rates.terms;
        check_amount(&terms.additional_stop_charge, || {
            "rates.terms.additional_stop_charge".to_string()
        })?;
        if let Some(charge) = terms.liftgate_inside_delivery_charge {
            check_amount(&charge, || {
                "rates.terms.liftgate_inside_delivery_charge".to_string()
            })?;
        }
        Ok(())
    }

    /// Substitute the `{company}`, `{experience}`, `{phone}` and `{origin}`
    /// placeholders in a piece of copy.
    pub fn interpolate(&self, text: &str) -> String {
        text.replace("{company}", &self.company.name)
            .replace("{experience}", &self.company.experience_years.to_string())
            .replace("{phone}", &self.company.phone)
            .replace("{origin}", &self.rates.terms.origin)
    }
}

fn check_amount(value: &f64, what: impl FnOnce() -> String) -> Result<(), ContentError> {
    if value.is_finite() && *value >= 0.0 {
        Ok(())
    } else {
        Err(ContentError::Validation(format!(
            "{} must be a non-negative number, got {value}",
            what()
        )))
    }
}

/// Load content from `path`, falling back to the stock content when the
/// file does not exist.
pub fn load_content(path: &Path) -> Result<SiteContent, ContentError> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "no content file, using stock content");
        return SiteContent::stock();
    }
    let text = fs::read_to_string(path)?;
    let content: SiteContent = toml::from_str(&text)?;
    content.validate()?;
    Ok(content)
}

/// Returns the fully-commented stock `content.toml`.
///
/// Used by the `gen-content` CLI command.
pub fn stock_content_toml() -> &'static str {
    STOCK_CONTENT
}
