//! Page composition.
//!
//! One composer per [`Route`]. Each assembles components into the page body,
//! picks the page's search metadata ([`PageMeta`]) and structured data, and
//! wraps everything in [`base_document`].
//!
//! Every page gets the same head: title (through [`TITLE_TEMPLATE`]),
//! description, keywords, canonical link, Open Graph and Twitter card tags,
//! and the site-wide JSON-LD (LocalBusiness, one Service per listed service,
//! Organization). Pages add a BreadcrumbList, plus an FAQPage when they show
//! FAQs.

use crate::components::{
    MAIN_CONTENT_ID, company_services_list, contact_details, contact_form, coverage_map,
    credential_badges, credentials_summary, equipment_list, faq_section, json_ld, markdown,
    phone_link, rate_destinations, rate_information, rate_table, service_areas, service_card,
    service_rates_table, site_footer, site_header, skip_link,
};
use crate::config::{SiteConfig, generate_color_css};
use crate::contact::ContactForm;
use crate::content::{FaqItem, PageCopy, RateTable, ServiceKind, SiteContent};
use crate::faq::FaqAccordion;
use crate::schema;
use crate::types::{MenuState, Route};
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// `%s` is the page title, `{company}` the company name.
pub const TITLE_TEMPLATE: &str = "%s | {company}";

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/site.js");

/// Logo dimensions advertised to social previews.
const OG_IMAGE_SIZE: u32 = 768;

/// Everything a page composer reads.
#[derive(Debug, Clone, Copy)]
pub struct SiteContext<'a> {
    pub content: &'a SiteContent,
    pub config: &'a SiteConfig,
    /// Footer copyright and Organization founding date.
    pub current_year: i32,
}

/// Search and social metadata for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMeta {
    pub route: Route,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

impl PageMeta {
    /// Metadata from a page's copy, placeholders filled in.
    pub fn from_copy(route: Route, copy: &PageCopy, content: &SiteContent) -> Self {
        Self {
            route,
            title: content.interpolate(&copy.title),
            description: content.interpolate(&copy.description),
            keywords: copy.keywords.clone(),
        }
    }

    /// `<title>` text with the company suffix.
    pub fn document_title(&self, company: &str) -> String {
        TITLE_TEMPLATE
            .replace("{company}", company)
            .replace("%s", &self.title)
    }
}

fn page_copy(route: Route, content: &SiteContent) -> &PageCopy {
    match route {
        Route::Home => &content.pages.home,
        Route::Services => &content.pages.services,
        Route::Rates => &content.pages.rates,
        Route::Contact => &content.pages.contact,
    }
}

fn page_faqs(route: Route, content: &SiteContent) -> &[FaqItem] {
    match route {
        Route::Home => &content.faqs.home,
        Route::Services => &content.faqs.services,
        Route::Rates => &content.faqs.rates,
        Route::Contact => &[],
    }
}

/// Inline stylesheet: configured colors followed by the static rules.
pub fn stylesheet(config: &SiteConfig) -> String {
    format!("{}\n\n{}", generate_color_css(&config.colors), CSS_STATIC)
}

/// JSON-LD blocks for a page.
pub fn structured_data(route: Route, ctx: &SiteContext) -> Result<Markup, serde_json::Error> {
    let company = &ctx.content.company;
    let site = &ctx.config.site;
    let mut blocks = vec![json_ld(schema::local_business(ctx.content, site))?];
    for service in schema::service_records(company) {
        blocks.push(json_ld(service)?);
    }
    blocks.push(json_ld(schema::organization(company, site, ctx.current_year))?);
    let faqs = page_faqs(route, ctx.content);
    if !faqs.is_empty() {
        blocks.push(json_ld(schema::faq_page(faqs))?);
    }
    blocks.push(json_ld(schema::breadcrumbs(&schema::route_crumbs(route, site)))?);

    Ok(html! {
        @for block in blocks {
            (block)
        }
    })
}

pub fn base_document(meta: &PageMeta, ctx: &SiteContext, head_extra: Markup, body: Markup) -> Markup {
    let company = &ctx.content.company;
    let site = &ctx.config.site;
    let title = meta.document_title(&company.name);
    let canonical = site.absolute(meta.route.path());
    let image = site.absolute(&site.logo);
    let image_alt = format!("{} brand logo", company.name);

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                meta name="description" content=(meta.description);
                @if !meta.keywords.is_empty() {
                    meta name="keywords" content=(meta.keywords.join(", "));
                }
                meta name="author" content=(company.owner);
                meta name="creator" content=(company.owner);
                meta name="publisher" content=(company.name);
                meta name="format-detection" content="telephone=no, email=no, address=no";
                meta name="robots" content="index, follow";
                meta name="googlebot" content="index, follow, max-video-preview:-1, max-image-preview:large, max-snippet:-1";
                link rel="canonical" href=(canonical);
                meta property="og:type" content="website";
                meta property="og:locale" content=(site.locale);
                meta property="og:url" content=(canonical);
                meta property="og:site_name" content=(company.name);
                meta property="og:title" content=(meta.title);
                meta property="og:description" content=(meta.description);
                meta property="og:image" content=(image);
                meta property="og:image:width" content=(OG_IMAGE_SIZE);
                meta property="og:image:height" content=(OG_IMAGE_SIZE);
                meta property="og:image:alt" content=(image_alt);
                meta name="twitter:card" content="summary_large_image";
                meta name="twitter:title" content=(meta.title);
                meta name="twitter:description" content=(meta.description);
                meta name="twitter:image" content=(image);
                link rel="icon" href=(site.logo);
                style { (PreEscaped(stylesheet(ctx.config))) }
                (head_extra)
            }
            body {
                (skip_link())
                (site_header(company, site, meta.route, MenuState::default()))
                main id=(MAIN_CONTENT_ID) role="main" {
                    (body)
                }
                (site_footer(company, ctx.current_year))
                script { (PreEscaped(JS)) }
            }
        }
    }
}

fn page_hero(copy: &PageCopy, content: &SiteContent) -> Markup {
    html! {
        section.page-hero {
            h1 { (content.interpolate(&copy.headline)) }
            div.lead { (markdown(&content.interpolate(&copy.intro))) }
        }
    }
}

fn call_to_action(content: &SiteContent) -> Markup {
    html! {
        section.cta-band {
            h2 { "Ready to Ship?" }
            p { "Contact us today for a custom quote tailored to your shipping needs." }
            div.actions {
                a.button href=(Route::Contact.path()) { "Get a Quote" }
                span.cta-phone { "or call " (phone_link(&content.company.phone)) }
            }
        }
    }
}

fn why_choose_us(content: &SiteContent) -> Markup {
    let years = content.company.experience_years;
    let mut reasons = vec![(
        "On-Time Delivery".to_string(),
        format!("{years} years of reliable service with consistent on-time delivery"),
    )];
    if content.company.insured {
        reasons.push((
            "Fully Insured".to_string(),
            "Comprehensive cargo insurance for peace of mind upon request".to_string(),
        ));
    }
    reasons.push((
        "24/7 Support".to_string(),
        "Round-the-clock customer service and dispatch".to_string(),
    ));
    reasons.push((
        "Competitive Pricing".to_string(),
        "Best rates without compromising quality service".to_string(),
    ));
    html! {
        section.why-us {
            h2 { "Why Choose " (content.company.name) }
            div.card-grid {
                @for (title, text) in &reasons {
                    div.reason {
                        h3 { (title) }
                        p.muted { (text) }
                    }
                }
            }
        }
    }
}

fn home_body(ctx: &SiteContext) -> Markup {
    let content = ctx.content;
    let company = &content.company;
    let copy = &content.pages.home;
    let terms = &content.rates.terms;
    let destinations = rate_destinations(content);

    html! {
        section.hero {
            div.hero-text {
                p.eyebrow { (company.experience_years) "+ Years of Excellence" }
                h1 { (content.interpolate(&copy.headline)) }
                div.lead { (markdown(&content.interpolate(&copy.intro))) }
                div.actions {
                    a.button href=(Route::Contact.path()) { "Request Quote" }
                    a.button.button-secondary href=(Route::Rates.path()) { "View Rates" }
                }
                dl.stats {
                    div { dt { (company.experience_years) "+" } dd { "Years Experience" } }
                    div { dt { (terms.coverage_radius_miles) " mi" } dd { "Coverage Radius" } }
                    div { dt { "24/7" } dd { "Dispatch" } }
                }
            }
            img.hero-image src=(ctx.config.site.hero_image) alt={ (company.name) " truck on the road" };
        }
        section.band id="services" {
            h2 { "LTL & TL Shipping Services" }
            p.muted {
                "Less than truckload (LTL) and full truckload shipping throughout Florida. "
                a href=(Route::Rates.path()) { "View our competitive rates" }
                " or "
                a href=(Route::Contact.path()) { "request a custom quote" }
                "."
            }
            div.card-grid {
                (service_card(content.services.get(ServiceKind::LessThanTruckload)))
                (service_card(content.services.get(ServiceKind::Truckload)))
            }
        }
        section id="locations" {
            h2 { "Service Areas" }
            p.muted {
                "Our trucking services cover all major Florida cities from our " (terms.origin) " hub. See "
                a href=(Route::Rates.path()) { "shipping rates by destination" }
                "."
            }
            (service_areas(&content.service_areas))
            (coverage_map(terms, &destinations))
        }
        (why_choose_us(content))
        (faq_section("Frequently Asked Questions", "home-faq", &content.faqs.home, &FaqAccordion::new()))
        section.band id="contact" {
            div.split {
                div {
                    h2 { "Get Your Free Quote" }
                    p.muted { "Tell us about your shipment and we'll get back to you quickly." }
                    (contact_details(company))
                }
                (contact_form(&ContactForm::new(), &ctx.config.contact))
            }
        }
    }
}

fn services_body(ctx: &SiteContext) -> Markup {
    let content = ctx.content;
    html! {
        (page_hero(&content.pages.services, content))
        section.band {
            h2 { "Our Services" }
            div.card-grid {
                @for kind in ServiceKind::ALL {
                    (service_card(content.services.get(kind)))
                }
            }
        }
        section {
            h2 { "Our Equipment" }
            div.card-grid {
                div.card {
                    h3 { "Trailer" }
                    (equipment_list(&content.company.equipment))
                }
                div.card {
                    h3 { "Service Features" }
                    (company_services_list(&content.rates.terms.included))
                }
            }
        }
        (faq_section("Services FAQ", "services-faq", &content.faqs.services, &FaqAccordion::new()))
        (call_to_action(content))
    }
}

fn rates_body(ctx: &SiteContext) -> Markup {
    let content = ctx.content;
    let rates = &content.rates;
    let destinations = rate_destinations(content);
    html! {
        (page_hero(&content.pages.rates, content))
        section {
            h2 { "Rates from " (rates.terms.origin) }
            div.card-grid {
                (rate_table(RateTable::Truckload, rates.table(RateTable::Truckload)))
                (rate_table(RateTable::LessThanTruckload, rates.table(RateTable::LessThanTruckload)))
                (service_rates_table(&rates.services))
            }
            (rate_information(&rates.terms))
        }
        section.band {
            (coverage_map(&rates.terms, &destinations))
        }
        (faq_section("Rates FAQ", "rates-faq", &content.faqs.rates, &FaqAccordion::new()))
        (call_to_action(content))
    }
}

fn contact_body(ctx: &SiteContext) -> Markup {
    let content = ctx.content;
    let company = &content.company;
    html! {
        (page_hero(&content.pages.contact, content))
        section {
            h2 { "Business Information" }
            div.card-grid {
                div.card {
                    h3 { "Experience" }
                    p { (company.experience_years) " years of safe driving experience" }
                }
                div.card {
                    h3 { "Equipment" }
                    (equipment_list(&company.equipment))
                }
                div.card {
                    h3 { "Services" }
                    (company_services_list(&company.services))
                }
            }
        }
        @if let Some(credentials) = credentials_summary(company) {
            section.band {
                h2 { (credentials) }
                (credential_badges(company))
                p.muted { "Documentation is available upon request." }
            }
        }
        section {
            div.split {
                div {
                    h2 { "Get in Touch" }
                    p { strong { "Owner: " } (company.owner) }
                    (contact_details(company))
                }
                (contact_form(&ContactForm::new(), &ctx.config.contact))
            }
        }
    }
}

/// Compose the full document for `route`.
pub fn render_page(route: Route, ctx: &SiteContext) -> Result<Markup, serde_json::Error> {
    let meta = PageMeta::from_copy(route, page_copy(route, ctx.content), ctx.content);
    let body = match route {
        Route::Home => home_body(ctx),
        Route::Services => services_body(ctx),
        Route::Rates => rates_body(ctx),
        Route::Contact => contact_body(ctx),
    };
    let head_extra = structured_data(route, ctx)?;
    Ok(base_document(&meta, ctx, head_extra, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{assert_contains_all, fixture_content};

    fn render(route: Route) -> String {
        let content = fixture_content();
        let config = SiteConfig::default();
        let ctx = SiteContext {
            content: &content,
            config: &config,
            current_year: 2025,
        };
        render_page(route, &ctx).unwrap().into_string()
    }

    #[test]
    fn title_template_applies_company() {
        let meta = PageMeta {
            route: Route::Rates,
            title: "Shipping Rates".into(),
            description: String::new(),
            keywords: vec![],
        };
        assert_eq!(meta.document_title("Acme"), "Shipping Rates | Acme");
    }

    #[test]
    fn meta_placeholders_are_filled() {
        let content = fixture_content();
        let meta = PageMeta::from_copy(Route::Contact, &content.pages.contact, &content);
        assert!(meta.description.contains("30 years of experience"));
        assert!(meta.description.contains("407-978-5088"));
        assert!(!meta.description.contains('{'));
    }

    #[test]
    fn every_page_is_a_complete_document() {
        for route in Route::ALL {
            let html = render(route);
            assert!(html.starts_with("<!DOCTYPE html>"), "{route:?}");
            assert!(html.contains(r##"<a class="skip-link" href="#main-content">"##));
            assert!(html.contains(r#"<main id="main-content" role="main">"#));
            assert!(html.contains("site-footer"));
            assert!(html.contains("--color-bg"));
        }
    }

    #[test]
    fn canonical_and_social_tags() {
        let html = render(Route::Services);
        assert!(html.contains(r#"<link rel="canonical" href="https://destinystransfer.com/services/">"#));
        assert!(html.contains(r#"<meta property="og:url" content="https://destinystransfer.com/services/">"#));
        assert!(html.contains(r#"<meta property="og:image" content="https://destinystransfer.com/DT_logo.png">"#));
        assert!(html.contains(r#"<meta name="twitter:card" content="summary_large_image">"#));
        assert!(html.contains(
            "<title>Shipping &amp; Transfer Services - LTL, TL, Short Haul &amp; Hot Shot | Destiny's Tranfer LLC</title>"
        ));
    }

    #[test]
    fn structured_data_per_page() {
        let home = render(Route::Home);
        assert_eq!(home.matches("application/ld+json").count(), 1 + 2 + 1 + 1 + 1);
        assert!(home.contains(r#""@type":"FAQPage""#));
        assert!(home.contains(r#""@type":"BreadcrumbList""#));

        let contact = render(Route::Contact);
        assert!(!contact.contains(r#""@type":"FAQPage""#));
        assert!(contact.contains(r#""position":2"#));
        assert!(contact.contains(r#""foundingDate":"1995""#));
    }

    #[test]
    fn faqs_start_closed() {
        let html = render(Route::Services);
        assert!(html.contains(r#"name="services-faq""#));
        assert!(!html.contains(r#"aria-expanded="true""#));
    }

    #[test]
    fn rates_page_sections() {
        let html = render(Route::Rates);
        assert_contains_all(
            &html,
            &[
                "TL Shipping Rates",
                "LTL Shipping Rates",
                "Call for pricing",
                "Additional Services",
                "Rate Information",
                "<h1>Locations &amp; Rates</h1>",
            ],
        );
    }

    #[test]
    fn home_intro_links_are_rendered() {
        let html = render(Route::Home);
        assert!(html.contains(r#"<a href="/services/">LTL and TL trucking services</a>"#));
        assert!(html.contains(r#"id="contact-form""#));
    }

    #[test]
    fn credential_claims_follow_company_flags() {
        let contact = render(Route::Contact);
        assert!(contact.contains("<h2>Licensed &amp; Insured</h2>"));
        assert!(render(Route::Home).contains("<h3>Fully Insured</h3>"));

        let mut content = fixture_content();
        content.company.licensed = false;
        content.company.insured = false;
        let config = SiteConfig::default();
        let ctx = SiteContext {
            content: &content,
            config: &config,
            current_year: 2025,
        };
        let contact = render_page(Route::Contact, &ctx).unwrap().into_string();
        assert!(!contact.contains("<h2>Licensed"));
        assert!(!contact.contains("documentation upon request"));
        assert!(!contact.contains("Documentation is available upon request."));
        let home = render_page(Route::Home, &ctx).unwrap().into_string();
        assert!(!home.contains("Fully Insured"));
        assert!(home.contains("<h3>24/7 Support</h3>"));
    }

    #[test]
    fn contact_page_placeholders_for_empty_lists() {
        let mut content = fixture_content();
        content.company.equipment.clear();
        content.company.services.clear();
        let config = SiteConfig::default();
        let ctx = SiteContext {
            content: &content,
            config: &config,
            current_year: 2025,
        };
        let html = render_page(Route::Contact, &ctx).unwrap().into_string();
        assert!(html.contains("Equipment details available upon request"));
        assert!(html.contains("Service details available upon request"));
        // Without services there are no Service records.
        assert_eq!(html.matches(r#""@type":"Service","serviceType""#).count(), 0);
    }
}
