//! Shared test utilities for the showcase-portfolio test suite.
//!
//! Provides a sample work to build variations from, a populated gallery with a
//! mix of featured and regular works, and helpers for writing JSON sources to a
//! temp directory.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let work = Work {
//!     title: "Featured Art".into(),
//!     featured: true,
//!     ..sample_work()
//! };
//!
//! let (_tmp, path) = write_json(&json!({ "works": [{ "title": "Bare" }] }));
//! let gallery = collect_from_works_file(&path).unwrap();
//! assert_eq!(find_work(&gallery, "Bare").medium, Medium::Software);
//! ```

use std::path::PathBuf;
use tempfile::TempDir;

use crate::gallery::{Gallery, Medium, Work};

// =========================================================================
// Builders
// =========================================================================

/// Baseline work; override fields with struct update syntax.
pub fn sample_work() -> Work {
    Work {
        title: "Test Work".to_string(),
        description: "A test creative work for rendering".to_string(),
        medium: Medium::GenerativeArt,
        organ: "organvm-ii-poiesis".to_string(),
        repo: "test-repo".to_string(),
        ..Work::default()
    }
}

/// Four works: two featured (art, software), two regular (performance, musical).
pub fn populated_gallery() -> Gallery {
    let mut gallery = Gallery::new(
        "Test Portfolio",
        "A test portfolio for renderer validation",
    );
    gallery.add_work(Work {
        title: "Featured Art".to_string(),
        medium: Medium::GenerativeArt,
        organ: "organvm-ii-poiesis".to_string(),
        featured: true,
        tags: vec!["generative".to_string(), "art".to_string()],
        ..sample_work()
    });
    gallery.add_work(Work {
        title: "Featured Software".to_string(),
        medium: Medium::Software,
        organ: "organvm-i-theoria".to_string(),
        featured: true,
        tags: vec!["recursion".to_string()],
        ..sample_work()
    });
    gallery.add_work(Work {
        title: "Regular Performance".to_string(),
        medium: Medium::Performance,
        organ: "organvm-ii-poiesis".to_string(),
        tags: vec!["performance".to_string(), "live".to_string()],
        ..sample_work()
    });
    gallery.add_work(Work {
        title: "Musical Piece".to_string(),
        medium: Medium::Musical,
        organ: "organvm-ii-poiesis".to_string(),
        ..sample_work()
    });
    gallery
}

// =========================================================================
// Fixture files
// =========================================================================

/// Write `value` as `source.json` in a fresh temp directory.
///
/// Keep the returned `TempDir` alive for as long as the path is used.
pub fn write_json(value: &serde_json::Value) -> (TempDir, PathBuf) {
    write_raw(&serde_json::to_string_pretty(value).unwrap())
}

/// Write raw text (possibly invalid JSON) as `source.json` in a temp directory.
pub fn write_raw(content: &str) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("source.json");
    std::fs::write(&path, content).unwrap();
    (tmp, path)
}

// =========================================================================
// Lookups — panics with a clear message on miss
// =========================================================================

/// Find a work by title. Panics if not found.
pub fn find_work<'a>(gallery: &'a Gallery, title: &str) -> &'a Work {
    gallery
        .works()
        .iter()
        .find(|w| w.title == title)
        .unwrap_or_else(|| {
            let available = titles(gallery.works());
            panic!("work '{title}' not found. Available: {available:?}")
        })
}

/// Titles in iteration order.
pub fn titles<'a>(works: impl IntoIterator<Item = &'a Work>) -> Vec<&'a str> {
    works.into_iter().map(|w| w.title.as_str()).collect()
}
