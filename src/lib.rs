//! # Freight Site
//!
//! A static site generator for a regional freight-trucking business. One
//! `content.toml` describes the company, its services, rate tables and FAQs;
//! the generator renders four pages (Home, Services, Rates, Contact) plus
//! `sitemap.xml` and `robots.txt`.
//!
//! # Architecture
//!
//! ```text
//! site/content.toml ─┐
//! site/config.toml  ─┼─→  SiteContent + SiteConfig  ─→  pages  ─→  dist/
//! site/assets/      ─┘                                  schema
//!                                                       seo
//! ```
//!
//! Loading is strict: unknown keys, negative prices and empty required
//! fields are rejected before anything is written. Rendering is pure: given
//! the same content, config and build timestamp the output is byte-identical.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Business content model, loading and validation of `content.toml` |
//! | [`config`] | Layered `config.toml` loading, `SITE_URL` override, color CSS |
//! | [`format`] | Phone, currency and address display formatting |
//! | [`types`] | Routes and navigation menu state |
//! | [`faq`] | Single-open FAQ accordion state |
//! | [`contact`] | Contact form state machine and submission port |
//! | [`schema`] | schema.org JSON-LD records |
//! | [`seo`] | Sitemap entries and robots policy |
//! | [`naming`] | Company initials for the brand mark |
//! | [`components`] | Reusable Maud fragments: header, footer, tables, form |
//! | [`pages`] | Full page documents for each route |
//! | [`generate`] | Writes pages, sitemap, robots and assets to disk |
//! | [`output`] | CLI output formatting for `check` and `build` |
//!
//! # Design Decisions
//!
//! ## Content Over Code
//!
//! Every business fact lives in `content.toml`, including the rate policy
//! (included stops, per-stop charge, liftgate charge). Copy on the pages and
//! answers in the FAQ are interpolated from the same values, so a price
//! change is made in one place.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed markup is a build error and all interpolation
//! is auto-escaped.
//!
//! ## No Client Framework
//!
//! The mobile menu is a CSS checkbox toggle and the FAQ accordion uses
//! exclusive `<details name>` groups. The only script handles contact form
//! submission.

pub mod components;
pub mod config;
pub mod contact;
pub mod content;
pub mod faq;
pub mod format;
pub mod generate;
pub mod naming;
pub mod output;
pub mod pages;
pub mod schema;
pub mod seo;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
