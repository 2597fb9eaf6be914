//! Static site generation.
//!
//! Takes the loaded content and config and writes the finished site.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html             # Home
//! ├── services/index.html
//! ├── rates/index.html
//! ├── contact/index.html
//! ├── sitemap.xml
//! ├── robots.txt
//! └── DT_logo.png ...        # assets/ copied verbatim
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time and inlined into every page:
//! - `static/style.css`: Base styles (colors injected from config)
//! - `static/site.js`: Contact form submission, menu close-on-navigate
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.
//!
//! Generation is deterministic for a given `generated_at`: the sitemap
//! timestamp and the footer/Organization year both derive from it.

use crate::config::SiteConfig;
use crate::content::SiteContent;
use crate::pages::{SiteContext, render_page};
use crate::seo;
use crate::types::Route;
use chrono::{DateTime, Datelike, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Asset copy error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// One written page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenPage {
    pub route: Route,
    pub path: PathBuf,
    pub bytes: usize,
}

/// What a build produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    pub pages: Vec<WrittenPage>,
    pub sitemap_entries: usize,
    pub assets_copied: usize,
}

/// Write the site into `output_dir`.
///
/// `assets_dir`, when it exists, is copied over the output root as-is.
pub fn generate(
    content: &SiteContent,
    config: &SiteConfig,
    assets_dir: &Path,
    output_dir: &Path,
    generated_at: DateTime<Utc>,
) -> Result<GenerateReport, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let assets_copied = if assets_dir.is_dir() {
        copy_assets(assets_dir, output_dir)?
    } else {
        tracing::debug!(dir = %assets_dir.display(), "no assets directory");
        0
    };

    let ctx = SiteContext {
        content,
        config,
        current_year: generated_at.year(),
    };

    let mut pages = Vec::with_capacity(Route::ALL.len());
    for route in Route::ALL {
        let html = render_page(route, &ctx)?.into_string();
        let path = output_dir.join(route.file());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &html)?;
        tracing::debug!(file = route.file(), bytes = html.len(), "wrote page");
        pages.push(WrittenPage {
            route,
            path,
            bytes: html.len(),
        });
    }

    let site_url = &config.site.url;
    let entries = seo::sitemap_entries(site_url, generated_at);
    fs::write(output_dir.join("sitemap.xml"), seo::render_sitemap_xml(&entries))?;
    fs::write(
        output_dir.join("robots.txt"),
        seo::render_robots_txt(&seo::robots_policy(site_url)),
    )?;

    tracing::info!(
        pages = pages.len(),
        assets = assets_copied,
        output = %output_dir.display(),
        "site generated"
    );

    Ok(GenerateReport {
        output_dir: output_dir.to_path_buf(),
        pages,
        sitemap_entries: entries.len(),
        assets_copied,
    })
}

/// Copy every file under `src` into `dst`, keeping relative paths.
/// Returns the number of files copied.
fn copy_assets(src: &Path, dst: &Path) -> Result<usize, GenerateError> {
    let mut copied = 0;
    for entry in WalkDir::new(src).min_depth(1).follow_links(true) {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
            tracing::trace!(asset = %relative.display(), "copied");
            copied += 1;
        }
    }
    Ok(copied)
}
