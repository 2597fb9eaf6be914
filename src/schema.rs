//! JSON-LD structured data.
//!
//! Each schema.org record is a plain serde struct tagged with its `@type`.
//! Builders are pure functions of the content model and config: anything
//! time-dependent (the founding year) is an explicit argument, so the same
//! inputs always produce byte-identical JSON.
//!
//! Records are wrapped in [`JsonLd`] when emitted, which adds the
//! `@context` key. Every page carries the [`LocalBusiness`], one
//! [`ServiceRecord`] per listed company service, and the [`Organization`];
//! pages add a [`BreadcrumbList`] and, where FAQs are shown, a [`FaqPage`].

use crate::config::SiteSettings;
use crate::content::{Address, CompanyInfo, FaqItem, SiteContent};
use crate::types::Route;
use serde::Serialize;
use std::collections::HashSet;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

const ALL_WEEK: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// A top-level record with its `@context`.
#[derive(Debug, Serialize)]
pub struct JsonLd<T> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(flatten)]
    record: T,
}

impl<T: Serialize> JsonLd<T> {
    pub fn new(record: T) -> Self {
        Self {
            context: SCHEMA_CONTEXT,
            record,
        }
    }

    pub fn record(&self) -> &T {
        &self.record
    }

    /// Compact JSON, safe to inline in a `<script>` element.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        // "</" would end the script element early.
        Ok(serde_json::to_string(self)?.replace("</", "<\\/"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename = "PostalAddress", rename_all = "camelCase")]
pub struct PostalAddress {
    pub street_address: String,
    pub address_locality: String,
    pub address_region: String,
    pub postal_code: String,
    pub address_country: String,
}

impl From<&Address> for PostalAddress {
    fn from(address: &Address) -> Self {
        Self {
            street_address: address.street.clone(),
            address_locality: address.city.clone(),
            address_region: address.state.clone(),
            postal_code: address.zip.clone(),
            address_country: "US".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename = "GeoCoordinates")]
pub struct GeoCoordinates {
    pub latitude: String,
    pub longitude: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type")]
pub enum Place {
    State { name: String },
    City { name: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename = "OpeningHoursSpecification", rename_all = "camelCase")]
pub struct OpeningHours {
    pub day_of_week: Vec<String>,
    pub opens: String,
    pub closes: String,
}

impl OpeningHours {
    pub fn always_open() -> Self {
        Self {
            day_of_week: ALL_WEEK.iter().map(|d| d.to_string()).collect(),
            opens: "00:00".to_string(),
            closes: "23:59".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename = "Service")]
pub struct OfferedService {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename = "Offer", rename_all = "camelCase")]
pub struct Offer {
    pub item_offered: OfferedService,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename = "OfferCatalog", rename_all = "camelCase")]
pub struct OfferCatalog {
    pub name: String,
    pub item_list_element: Vec<Offer>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename = "LocalBusiness", rename_all = "camelCase")]
pub struct LocalBusiness {
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub image: String,
    pub logo: String,
    pub description: String,
    pub url: String,
    pub telephone: String,
    pub email: String,
    pub address: PostalAddress,
    pub geo: GeoCoordinates,
    pub area_served: Vec<Place>,
    pub price_range: String,
    pub opening_hours_specification: OpeningHours,
    pub has_offer_catalog: OfferCatalog,
}

/// Reference to the business from a Service record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename = "LocalBusiness")]
pub struct Provider {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename = "Service", rename_all = "camelCase")]
pub struct ServiceRecord {
    pub service_type: String,
    pub provider: Provider,
    pub area_served: Place,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename = "ContactPoint", rename_all = "camelCase")]
pub struct ContactPoint {
    pub telephone: String,
    pub contact_type: String,
    pub area_served: String,
    pub available_language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename = "Organization", rename_all = "camelCase")]
pub struct Organization {
    pub name: String,
    pub legal_name: String,
    pub url: String,
    pub logo: String,
    pub founding_date: String,
    pub description: String,
    pub contact_point: ContactPoint,
    pub address: PostalAddress,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename = "Answer")]
pub struct Answer {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename = "Question", rename_all = "camelCase")]
pub struct Question {
    pub name: String,
    pub accepted_answer: Answer,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename = "FAQPage", rename_all = "camelCase")]
pub struct FaqPage {
    pub main_entity: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename = "ListItem")]
pub struct ListItem {
    pub position: usize,
    pub name: String,
    pub item: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename = "BreadcrumbList", rename_all = "camelCase")]
pub struct BreadcrumbList {
    pub item_list_element: Vec<ListItem>,
}

/// A breadcrumb before it is numbered.
#[derive(Debug, Clone, PartialEq)]
pub struct Crumb {
    pub name: String,
    pub url: String,
}

pub fn local_business(content: &SiteContent, site: &SiteSettings) -> LocalBusiness {
    let company = &content.company;
    let city = &company.address.city;
    let state = &company.address.state;
    let logo = site.absolute(&site.logo);

    // State first, then every service-area city once, in content order.
    let mut area_served = vec![Place::State {
        name: state.clone(),
    }];
    let mut seen = HashSet::new();
    for city in content.service_areas.iter().flat_map(|area| &area.cities) {
        if seen.insert(city.as_str()) {
            area_served.push(Place::City { name: city.clone() });
        }
    }

    let offers = company
        .services
        .iter()
        .map(|service| Offer {
            item_offered: OfferedService {
                name: format!("{service} Services {city}"),
                description: format!("{service} shipping services across {state}"),
            },
        })
        .collect();

    LocalBusiness {
        id: format!("{}#organization", site.url),
        name: company.name.clone(),
        image: logo.clone(),
        logo,
        description: format!(
            "{} provides professional LTL and TL trucking services to and from {city}, {state}, \
             with {} years of safe driving experience. {} serving routes between {city} and \
             all major {state} cities.",
            company.name,
            company.experience_years,
            carrier_label(company)
        ),
        url: site.url.clone(),
        telephone: company.phone.clone(),
        email: company.email.clone(),
        address: PostalAddress::from(&company.address),
        geo: GeoCoordinates {
            latitude: content.geo.latitude.clone(),
            longitude: content.geo.longitude.clone(),
        },
        area_served,
        price_range: "$$".to_string(),
        opening_hours_specification: OpeningHours::always_open(),
        has_offer_catalog: OfferCatalog {
            name: "Trucking Services".to_string(),
            item_list_element: offers,
        },
    }
}

fn carrier_label(company: &CompanyInfo) -> &'static str {
    match (company.licensed, company.insured) {
        (true, true) => "Licensed and insured carrier",
        (true, false) => "Licensed carrier",
        (false, true) => "Insured carrier",
        (false, false) => "Carrier",
    }
}

/// One Service record per entry of `company.services`, in order, each
/// serving the company's home state.
pub fn service_records(company: &CompanyInfo) -> Vec<ServiceRecord> {
    company
        .services
        .iter()
        .map(|service| ServiceRecord {
            service_type: service.clone(),
            provider: Provider {
                name: company.name.clone(),
            },
            area_served: Place::State {
                name: company.address.state.clone(),
            },
            description: format!(
                "{service} shipping and transfer services provided by {}. {}",
                company.name,
                if company.insured {
                    "Professional, reliable, and insured."
                } else {
                    "Professional and reliable."
                }
            ),
        })
        .collect()
}

/// The Organization record. `founding_date` is `current_year` minus the
/// years of experience, and may be negative for implausible experience.
pub fn organization(company: &CompanyInfo, site: &SiteSettings, current_year: i32) -> Organization {
    let founded = i64::from(current_year) - i64::from(company.experience_years);
    Organization {
        name: company.name.clone(),
        legal_name: company.name.clone(),
        url: site.url.clone(),
        logo: site.absolute(&site.logo),
        founding_date: founded.to_string(),
        description: format!(
            "Professional LTL and TL trucking company serving {} and all of {} with {} years of experience",
            company.address.city, company.address.state, company.experience_years
        ),
        contact_point: ContactPoint {
            telephone: company.phone.clone(),
            contact_type: "customer service".to_string(),
            area_served: "US".to_string(),
            available_language: "English".to_string(),
        },
        address: PostalAddress::from(&company.address),
    }
}

/// One Question per FAQ item, in input order. Duplicates are kept.
pub fn faq_page(faqs: &[FaqItem]) -> FaqPage {
    FaqPage {
        main_entity: faqs
            .iter()
            .map(|faq| Question {
                name: faq.question.clone(),
                accepted_answer: Answer {
                    text: faq.answer.clone(),
                },
            })
            .collect(),
    }
}

/// Number the crumbs from 1.
pub fn breadcrumbs(items: &[Crumb]) -> BreadcrumbList {
    BreadcrumbList {
        item_list_element: items
            .iter()
            .enumerate()
            .map(|(i, crumb)| ListItem {
                position: i + 1,
                name: crumb.name.clone(),
                item: crumb.url.clone(),
            })
            .collect(),
    }
}

/// The crumbs from the home page down to `route`.
pub fn route_crumbs(route: Route, site: &SiteSettings) -> Vec<Crumb> {
    route
        .trail()
        .into_iter()
        .map(|r| Crumb {
            name: r.breadcrumb_name().to_string(),
            url: site.absolute(r.path()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ServiceArea;
    use crate::test_helpers::fixture_content;
    use serde_json::{Value, json};

    fn to_value<T: Serialize>(record: T) -> Value {
        serde_json::from_str(&JsonLd::new(record).to_json().unwrap()).unwrap()
    }

    #[test]
    fn local_business_shape() {
        let content = fixture_content();
        let site = SiteSettings::default();
        let v = to_value(local_business(&content, &site));

        assert_eq!(v["@context"], "https://schema.org");
        assert_eq!(v["@type"], "LocalBusiness");
        assert_eq!(v["@id"], "https://destinystransfer.com#organization");
        assert_eq!(v["logo"], "https://destinystransfer.com/DT_logo.png");
        assert_eq!(v["priceRange"], "$$");
        assert_eq!(v["address"]["@type"], "PostalAddress");
        assert_eq!(v["address"]["addressCountry"], "US");
        assert_eq!(v["geo"]["latitude"], "28.5383");
        assert_eq!(v["areaServed"][0], json!({"@type": "State", "name": "Florida"}));
        assert_eq!(v["areaServed"][1], json!({"@type": "City", "name": "Jacksonville"}));
        assert_eq!(v["areaServed"].as_array().unwrap().len(), 14);
        assert_eq!(
            v["openingHoursSpecification"]["dayOfWeek"]
                .as_array()
                .unwrap()
                .len(),
            7
        );
        assert_eq!(v["openingHoursSpecification"]["closes"], "23:59");
        assert_eq!(
            v["hasOfferCatalog"]["itemListElement"][0]["itemOffered"]["@type"],
            "Service"
        );
    }

    #[test]
    fn area_served_follows_content() {
        let mut content = fixture_content();
        content.company.address.state = "Georgia".into();
        content.service_areas = vec![
            ServiceArea {
                region: "Metro".into(),
                cities: vec!["Atlanta".into(), "Marietta".into()],
            },
            ServiceArea {
                region: "South".into(),
                cities: vec!["Macon".into(), "Atlanta".into()],
            },
        ];
        let business = local_business(&content, &SiteSettings::default());
        assert_eq!(
            business.area_served,
            vec![
                Place::State { name: "Georgia".into() },
                Place::City { name: "Atlanta".into() },
                Place::City { name: "Marietta".into() },
                Place::City { name: "Macon".into() },
            ]
        );
        for record in service_records(&content.company) {
            assert_eq!(record.area_served, Place::State { name: "Georgia".into() });
        }

        content.service_areas.clear();
        let business = local_business(&content, &SiteSettings::default());
        assert_eq!(business.area_served.len(), 1);
    }

    #[test]
    fn service_records_are_pure_and_ordered() {
        let content = fixture_content();
        let first = service_records(&content.company);
        let second = service_records(&content.company);
        assert_eq!(first, second);
        assert_eq!(first.len(), content.company.services.len());
        assert_eq!(first[0].service_type, "Truckload (TL)");
        assert_eq!(
            first[1].description,
            "Less Than Truckload (LTL) shipping and transfer services provided by \
             Destiny's Tranfer LLC. Professional, reliable, and insured."
        );
    }

    #[test]
    fn descriptions_follow_credential_flags() {
        let mut content = fixture_content();
        let site = SiteSettings::default();
        assert!(local_business(&content, &site)
            .description
            .contains("experience. Licensed and insured carrier serving"));

        content.company.insured = false;
        assert!(local_business(&content, &site)
            .description
            .contains("experience. Licensed carrier serving"));
        let records = service_records(&content.company);
        assert!(records[0].description.ends_with("Professional and reliable."));

        content.company.licensed = false;
        let description = local_business(&content, &site).description;
        assert!(description.contains("experience. Carrier serving"));
        assert!(!description.to_lowercase().contains("insured"));
    }

    #[test]
    fn no_services_means_no_records() {
        let mut content = fixture_content();
        content.company.services.clear();
        assert!(service_records(&content.company).is_empty());
    }

    #[test]
    fn organization_founding_year_is_an_input() {
        let content = fixture_content();
        let site = SiteSettings::default();
        let org = organization(&content.company, &site, 2025);
        assert_eq!(org.founding_date, "1995");
        assert_eq!(org, organization(&content.company, &site, 2025));
        let v = to_value(org);
        assert_eq!(v["@type"], "Organization");
        assert_eq!(v["contactPoint"]["contactType"], "customer service");
    }

    #[test]
    fn organization_survives_huge_experience() {
        let mut content = fixture_content();
        content.company.experience_years = 2_147_483_649;
        assert!(content.validate().is_ok());
        let org = organization(&content.company, &SiteSettings::default(), 2025);
        assert_eq!(org.founding_date, "-2147481624");

        content.company.experience_years = u32::MAX;
        let org = organization(&content.company, &SiteSettings::default(), i32::MIN);
        assert_eq!(org.founding_date, (i64::from(i32::MIN) - i64::from(u32::MAX)).to_string());
    }

    #[test]
    fn faq_page_preserves_order_and_duplicates() {
        let faqs = vec![
            FaqItem {
                question: "Q1".into(),
                answer: "A1".into(),
            },
            FaqItem {
                question: "Q2".into(),
                answer: "A2".into(),
            },
            FaqItem {
                question: "Q1".into(),
                answer: "A1".into(),
            },
        ];
        let v = to_value(faq_page(&faqs));
        let entities = v["mainEntity"].as_array().unwrap();
        assert_eq!(entities.len(), 3);
        assert_eq!(entities[1]["name"], "Q2");
        assert_eq!(entities[2]["acceptedAnswer"], json!({"@type": "Answer", "text": "A1"}));
    }

    #[test]
    fn faq_page_empty() {
        assert!(faq_page(&[]).main_entity.is_empty());
    }

    #[test]
    fn breadcrumb_positions_start_at_one() {
        let site = SiteSettings::default();
        let list = breadcrumbs(&route_crumbs(Route::Contact, &site));
        let positions: Vec<_> = list.item_list_element.iter().map(|i| i.position).collect();
        assert_eq!(positions, [1, 2]);
        assert_eq!(list.item_list_element[0].item, "https://destinystransfer.com");
        assert_eq!(
            list.item_list_element[1].item,
            "https://destinystransfer.com/contact/"
        );
    }

    #[test]
    fn script_terminator_is_escaped() {
        let faqs = [FaqItem {
            question: "</script><b>".into(),
            answer: "ok".into(),
        }];
        let json = JsonLd::new(faq_page(&faqs)).to_json().unwrap();
        assert!(!json.contains("</script>"));
        let v: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["mainEntity"][0]["name"], "</script><b>");
    }
}
