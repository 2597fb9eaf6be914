//! Presentational components.
//!
//! Each function maps borrowed content records to maud [`Markup`]. They hold
//! no state of their own: interactive pieces (menu, FAQ accordion, contact
//! form) take their state as an argument and render it, so a page always
//! reflects the state it was rendered with.
//!
//! Empty lists never render as a bare heading. Equipment, services and rate
//! tables fall back to a short placeholder line instead.

use crate::config::{ContactConfig, SiteSettings};
use crate::contact::{ContactForm, ServiceChoice, SubmitStatus};
use crate::content::{
    CompanyInfo, FaqItem, Rate, RateTable, RateTerms, ServiceArea, ServiceDescription,
    ServicePrice, ServiceRate, SiteContent,
};
use crate::faq::FaqAccordion;
use crate::format::{format_address, format_currency, format_phone};
use crate::naming::company_initials;
use crate::schema::JsonLd;
use crate::types::{MenuState, Route};
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use serde::Serialize;

pub const MAIN_CONTENT_ID: &str = "main-content";

const ICON_BOXES: &str = "M20 7l-8-4-8 4m16 0l-8 4m8-4v10l-8 4m0-10L4 7m8 4v10M4 7v10l8 4";
const ICON_ARROWS: &str = "M8 7h12m0 0l-4-4m4 4l-4 4m0 6H4m0 0l4 4m-4-4l4-4";
const ICON_CHECK: &str = "M5 13l4 4L19 7";
const ICON_CHEVRON: &str = "M19 9l-7 7-7-7";
const ICON_INFO: &str = "M13 16h-1v-4h-1m1-4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z";

fn icon(d: &str, class: &str) -> Markup {
    html! {
        svg class=(class) viewBox="0 0 24 24" fill="none" stroke="currentColor" aria-hidden="true" {
            path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=(d) {}
        }
    }
}

/// Render a markdown snippet (page intros) to HTML.
pub fn markdown(text: &str) -> Markup {
    let parser = Parser::new(text);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    PreEscaped(out)
}

/// A `<script type="application/ld+json">` block for one record.
pub fn json_ld<T: Serialize>(record: T) -> Result<Markup, serde_json::Error> {
    let json = JsonLd::new(record).to_json()?;
    Ok(html! {
        script type="application/ld+json" { (PreEscaped(json)) }
    })
}

pub fn skip_link() -> Markup {
    html! {
        a.skip-link href={ "#" (MAIN_CONTENT_ID) } { "Skip to main content" }
    }
}

pub fn brand_logo(site: &SiteSettings, company_name: &str, size: u32) -> Markup {
    html! {
        img.brand-logo src=(site.logo) alt={ (company_name) " logo" } width=(size) height=(size);
    }
}

fn nav_links(current: Route) -> Markup {
    html! {
        @for route in Route::ALL {
            @if let Some(label) = route.nav_label() {
                li {
                    a href=(route.path()) aria-current=[(route == current).then_some("page")] {
                        (label)
                    }
                }
            }
        }
        li.nav-cta {
            a.button href=(Route::Contact.path()) { "Get a Quote" }
        }
    }
}

/// Header with brand mark and navigation.
///
/// The mobile menu is a checkbox toggle; `menu` decides whether it starts
/// checked. Every link is a full page load, so the menu is closed again on
/// the next page.
pub fn site_header(company: &CompanyInfo, site: &SiteSettings, current: Route, menu: MenuState) -> Markup {
    html! {
        header.site-header {
            nav.site-nav aria-label="Main" {
                a.brand href="/" {
                    (brand_logo(site, &company.name, 48))
                    span.brand-initials { (company_initials(&company.name)) }
                    span.brand-name { (company.name) }
                }
                input.nav-toggle type="checkbox" id="nav-toggle" checked[menu.open];
                label.nav-hamburger for="nav-toggle" aria-label="Toggle menu" {
                    span.hamburger-line {}
                    span.hamburger-line {}
                    span.hamburger-line {}
                }
                ul.nav-links {
                    (nav_links(current))
                }
            }
        }
    }
}

pub fn site_footer(company: &CompanyInfo, current_year: i32) -> Markup {
    html! {
        footer.site-footer {
            div.footer-grid {
                div {
                    div.brand-initials { (company_initials(&company.name)) }
                    p.muted { "Professional freight and logistics solutions you can trust." }
                }
                div {
                    h4 { "Services" }
                    ul {
                        @for label in ["LTL Shipping", "TL Shipping", "Short Haul", "Hot Shot"] {
                            li { a href=(Route::Services.path()) { (label) } }
                        }
                    }
                }
                div {
                    h4 { "Company" }
                    ul {
                        li { strong { "Owner:" } " " (company.owner) }
                        li { strong { "Phone:" } " " (phone_link(&company.phone)) }
                        li { strong { "Email:" } " " a href={ "mailto:" (company.email) } { (company.email) } }
                    }
                }
                div {
                    h4 { "Legal" }
                    ul {
                        li { strong { "Address:" } " " (format_address(&company.address)) }
                        @if let Some(credentials) = credentials_summary(company) {
                            li { strong { (credentials) ", documentation upon request" } }
                        }
                    }
                }
            }
            p.footer-bottom {
                "© " (current_year) " " (company.name) ". All rights reserved. "
                (company.experience_years) " years of safe driving experience."
            }
        }
    }
}

pub fn phone_link(phone: &str) -> Markup {
    html! {
        a href={ "tel:" (phone) } { (format_phone(phone)) }
    }
}

fn feature_list(features: &[String]) -> Markup {
    html! {
        ul.feature-list {
            @for feature in features {
                li { (icon(ICON_CHECK, "icon-check")) span { (feature) } }
            }
        }
    }
}

pub fn service_card(service: &ServiceDescription) -> Markup {
    let glyph = if service.title.to_lowercase().contains("ltl") {
        ICON_BOXES
    } else {
        ICON_ARROWS
    };
    html! {
        article.card.service-card {
            div.card-icon { (icon(glyph, "icon")) }
            h3 { (service.title) }
            p.muted { (service.description) }
            (feature_list(&service.features))
        }
    }
}

/// A destination rate table. Empty tables say so instead of rendering rows.
pub fn rate_table(table: RateTable, rates: &[Rate]) -> Markup {
    html! {
        div.card.rate-table {
            div.card-header {
                h3 { (table.heading()) }
                p.muted { (table.subheading()) }
            }
            @if rates.is_empty() {
                p.placeholder { "Rates available on request. Call for pricing." }
            } @else {
                ul.rate-rows {
                    @for rate in rates {
                        li.rate-row {
                            div {
                                div.destination { (rate.destination) }
                                @if let Some(note) = &rate.note {
                                    div.muted { (note) }
                                }
                            }
                            div.amount { (format_currency(rate.rate)) }
                        }
                    }
                }
            }
        }
    }
}

fn service_price(price: ServicePrice) -> String {
    match price {
        ServicePrice::Amount(n) => format_currency(n),
        ServicePrice::CallForQuote => "Call for quote".to_string(),
    }
}

pub fn service_rates_table(services: &[ServiceRate]) -> Markup {
    html! {
        div.card.rate-table {
            div.card-header {
                h3 { "Additional Services" }
                p.muted { "Specialized shipping options" }
            }
            @if services.is_empty() {
                p.placeholder { "No service rates available" }
            } @else {
                ul.rate-rows {
                    @for service in services {
                        li.rate-row data-service=(service.name) {
                            div {
                                div.destination { (service.label) }
                                @if !service.includes.is_empty() {
                                    (feature_list(&service.includes))
                                }
                            }
                            div.amount { (service_price(service.price)) }
                        }
                    }
                }
            }
        }
    }
}

/// The rate policy box. The liftgate line only appears when a charge is set.
pub fn rate_information(terms: &RateTerms) -> Markup {
    html! {
        aside.rate-info {
            (icon(ICON_INFO, "icon"))
            div {
                h4 { "Rate Information" }
                p.muted {
                    "Rates are estimates and may vary based on freight class, weight, dimensions, "
                    "special handling requirements, and seasonal demand. Volume discounts available "
                    "for regular customers. Contact us for an accurate quote tailored to your specific needs."
                }
                ul {
                    @if !terms.included.is_empty() {
                        li { strong { "Included in rates:" } " " (terms.included.join(", ")) }
                    }
                    li {
                        strong { "Additional stops:" } " "
                        (format_currency(terms.additional_stop_charge))
                        " per stop after " (terms.included_stops) " stops"
                    }
                    @if let Some(charge) = terms.liftgate_inside_delivery_charge {
                        li {
                            strong { "Liftgate & Inside Delivery:" } " " (format_currency(charge))
                            @if let Some(note) = &terms.liftgate_inside_delivery_note {
                                " - " (note)
                            }
                        }
                    }
                }
            }
        }
    }
}

/// FAQ list driven by `accordion`.
///
/// Items in one group share a `<details name>` so the browser keeps at most
/// one open, matching [`FaqAccordion::toggle`]. Renders nothing for an empty
/// list.
pub fn faq_section(title: &str, group: &str, faqs: &[FaqItem], accordion: &FaqAccordion) -> Markup {
    html! {
        @if !faqs.is_empty() {
            section.faq-section aria-labelledby={ (group) "-title" } {
                h2 id={ (group) "-title" } { (title) }
                div.faq-list {
                    @for (i, faq) in faqs.iter().enumerate() {
                        @let open = accordion.is_open(i);
                        details.faq-item name=(group) open[open] {
                            summary aria-expanded=(if open { "true" } else { "false" }) {
                                span { (faq.question) }
                                (icon(ICON_CHEVRON, if open { "chevron rotated" } else { "chevron" }))
                            }
                            div.faq-answer {
                                p { (faq.answer) }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// The contact form as it looks in `form`'s current state.
///
/// Both banners are always present so the browser script can reveal them;
/// only the one matching the status starts visible.
pub fn contact_form(form: &ContactForm, contact: &ContactConfig) -> Markup {
    let fields = form.fields();
    let status = form.status();
    html! {
        form.contact-form id="contact-form" method="post" action=[contact.endpoint.as_deref()]
            data-simulated-delay=(contact.simulated_delay_ms) {
            div.field {
                label for="name" { "Name " span.required { "*" } }
                input id="name" name="name" type="text" required placeholder="John Doe" value=(fields.name);
            }
            div.field {
                label for="email" { "Email " span.required { "*" } }
                input id="email" name="email" type="email" required placeholder="john@company.com" value=(fields.email);
            }
            div.field {
                label for="service" { "Service Type " span.required { "*" } }
                select id="service" name="service" required {
                    @for choice in ServiceChoice::OPTIONS {
                        option value=(choice.value()) selected[choice == fields.service] { (choice.label()) }
                    }
                }
            }
            div.field {
                label for="message" { "Message " span.required { "*" } }
                textarea id="message" name="message" rows="4" required
                    placeholder="Tell us about your shipping needs, including pickup/delivery locations, cargo details, and timing..." {
                    (fields.message)
                }
            }
            div.banner.banner-success role="status" hidden[status != SubmitStatus::Succeeded] {
                "Thank you! Your message has been sent. We'll get back to you soon."
            }
            div.banner.banner-error role="alert" hidden[status != SubmitStatus::Failed] {
                "Something went wrong. Please try again or contact us directly."
            }
            button.button type="submit" disabled[!form.submit_enabled()] {
                @if status == SubmitStatus::Submitting { "Submitting..." } @else { "Submit Request" }
            }
        }
    }
}

/// A bulleted list, or `placeholder` when there is nothing to list.
pub fn listing(items: &[String], placeholder: &str) -> Markup {
    html! {
        @if items.is_empty() {
            p.placeholder { (placeholder) }
        } @else {
            ul.listing {
                @for item in items {
                    li { (item) }
                }
            }
        }
    }
}

pub fn equipment_list(equipment: &[String]) -> Markup {
    listing(equipment, "Equipment details available upon request")
}

pub fn company_services_list(services: &[String]) -> Markup {
    listing(services, "Service details available upon request")
}

/// Destinations named in the rate tables, first occurrence order.
pub fn rate_destinations(content: &SiteContent) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for rate in content.rates.truckload.iter().chain(&content.rates.less_than_truckload) {
        if !seen.contains(&rate.destination.as_str()) {
            seen.push(&rate.destination);
        }
    }
    seen
}

/// Radius around the origin with the destinations served.
pub fn coverage_map(terms: &RateTerms, destinations: &[&str]) -> Markup {
    html! {
        div.card.coverage-map {
            h3 { (terms.coverage_radius_miles) " Mile Radius Coverage" }
            div.coverage-circle {
                div.coverage-origin { (terms.origin) }
                div.muted { "Service Center" }
            }
            p.muted {
                "Service coverage extends " (terms.coverage_radius_miles) " miles from " (terms.origin)
            }
            @if !destinations.is_empty() {
                ul.coverage-destinations {
                    @for dest in destinations {
                        li { (dest) }
                    }
                }
            }
        }
    }
}

pub fn service_areas(areas: &[ServiceArea]) -> Markup {
    html! {
        div.area-grid {
            @for area in areas {
                div.card {
                    h3 { (area.region) }
                    ul.listing {
                        @for city in &area.cities {
                            li { (city) }
                        }
                    }
                }
            }
        }
    }
}

/// Phone, email and address block used beside the contact form.
pub fn contact_details(company: &CompanyInfo) -> Markup {
    html! {
        dl.contact-details {
            dt { "Phone" }
            dd { (phone_link(&company.phone)) }
            dt { "Email" }
            dd { a href={ "mailto:" (company.email) } { (company.email) } }
            dt { "Location" }
            dd {
                @if !company.address.street.is_empty() {
                    (company.address.street) br;
                }
                (company.address.city) ", " (company.address.state) " " (company.address.zip)
            }
        }
    }
}

/// `"Licensed & Insured"`, `"Licensed"` or `"Insured"`, following the
/// company flags; `None` when neither is set.
pub fn credentials_summary(company: &CompanyInfo) -> Option<&'static str> {
    match (company.licensed, company.insured) {
        (true, true) => Some("Licensed & Insured"),
        (true, false) => Some("Licensed"),
        (false, true) => Some("Insured"),
        (false, false) => None,
    }
}

/// Licensed/insured badges. Nothing is shown for a flag that is off.
pub fn credential_badges(company: &CompanyInfo) -> Markup {
    html! {
        ul.badges {
            @if company.licensed {
                li.badge { (icon(ICON_CHECK, "icon-check")) "Licensed" }
            }
            @if company.insured {
                li.badge { (icon(ICON_CHECK, "icon-check")) "Insured" }
            }
        }
    }
}
