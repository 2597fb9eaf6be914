//! Shared test utilities.
//!
//! Two kinds of fixture:
//! - [`fixture_content`]: the embedded stock content, parsed. Most render
//!   tests use it and assert against its known values.
//! - [`setup_fixture_site`]: an isolated copy of `fixtures/site/` (a second
//!   company with its own config, LTL rates and assets) for load tests.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixture_site();
//! let content = load_content(&tmp.path().join("content.toml")).unwrap();
//! assert_eq!(find_rate(&content.rates.less_than_truckload, "Tampa").rate, 450.0);
//! ```

use std::path::Path;
use tempfile::TempDir;
use walkdir::WalkDir;

use crate::content::{Rate, SiteContent};

// =========================================================================
// Fixture setup
// =========================================================================

pub fn fixture_content() -> SiteContent {
    SiteContent::stock().unwrap()
}

/// Copy `fixtures/site/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixture_site() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/site");
    for entry in WalkDir::new(&fixtures).min_depth(1) {
        let entry = entry.unwrap();
        let target = tmp.path().join(entry.path().strip_prefix(&fixtures).unwrap());
        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target).unwrap();
        } else {
            std::fs::copy(entry.path(), &target).unwrap();
        }
    }
    tmp
}

// =========================================================================
// Lookups: panic with a clear message on miss
// =========================================================================

/// Find a rate row by destination. Panics if not found.
pub fn find_rate<'a>(rates: &'a [Rate], destination: &str) -> &'a Rate {
    rates
        .iter()
        .find(|r| r.destination == destination)
        .unwrap_or_else(|| {
            let names: Vec<&str> = rates.iter().map(|r| r.destination.as_str()).collect();
            panic!("rate for '{destination}' not found. Available: {names:?}")
        })
}

/// Assert that `html` contains every needle, naming the first one missing.
pub fn assert_contains_all(html: &str, needles: &[&str]) {
    for needle in needles {
        assert!(html.contains(needle), "expected output to contain {needle:?}");
    }
}
