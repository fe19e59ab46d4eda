//! Shared test fixtures and utilities for integration tests.

use std::sync::Once;

use docsearch_index::{Category, IndexStore, SearchRecord};
use rstest::fixture;

static INIT: Once = Once::new();

/// Initialize tracing with a test writer. Safe to call multiple times.
#[allow(dead_code)] // Used from different integration test crates
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing::Level::DEBUG.into());
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Builds a record with the given fields; `location` is derived from the
/// page and title the way documentation generators derive anchors.
#[allow(dead_code)]
pub fn record(page: &str, title: &str, text: &str, category: Category) -> SearchRecord {
    let location = if title.is_empty() {
        format!("{}/", page.to_lowercase())
    } else {
        format!("{}/#{}", page.to_lowercase(), title.replace(' ', "-"))
    };
    SearchRecord {
        location,
        page: page.to_string(),
        title: title.to_string(),
        text: text.to_string(),
        category,
    }
}

/// A small store shaped like a real generator snapshot: landing pages,
/// prose sections, and symbol entries.
#[fixture]
#[allow(dead_code)]
pub fn sample_store() -> IndexStore {
    init_tracing();
    IndexStore::from_records(vec![
        record(
            "contributing",
            "Contributing",
            "",
            Category::Section,
        ),
        record(
            "contributing",
            "",
            "To contribute, fork the project and create a feature branch.",
            Category::Page,
        ),
        record(
            "full-index",
            "Index",
            "All structures and methods can be found in the Full Index.",
            Category::Section,
        ),
        record(
            "full-index",
            "RocketModule",
            "Structure containing a vector of rocket kernels.",
            Category::Type,
        ),
        record(
            "full-index",
            "apply_kernels",
            "Run a vector of rocket kernels along a sequence.",
            Category::Method,
        ),
        record(
            "guide",
            "Package Guide",
            "The package is built upon modules that contain all state.",
            Category::Section,
        ),
        record(
            "guide",
            "Installation",
            "The package can be installed using the package manager.",
            Category::Section,
        ),
        record(
            "home",
            "Home",
            "See the Index for the complete list of documented functions.",
            Category::Page,
        ),
    ])
}
