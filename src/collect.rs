//! Collectors: normalize source documents into a [`Gallery`].
//!
//! Two independent pipelines produce the same [`Work`] model:
//!
//! ## Registry documents
//!
//! A repository registry lists repositories under `repositories` (or, as a
//! fallback, `repos`). Every repository becomes one work:
//!
//! ```text
//! name                 →  title and repo
//! description          →  description
//! org                  →  organ, and medium via ORGAN_MEDIUM_MAP (else software)
//! topics               →  tags
//! portfolio_relevance  →  featured when CRITICAL or HIGH
//! ```
//!
//! Registry collection never fails on missing fields.
//!
//! ## Curated works files
//!
//! A hand-maintained `works.json`:
//!
//! ```json
//! {
//!   "gallery_name": "Portfolio",
//!   "description": "...",
//!   "works": [
//!     { "title": "Recursive Engine", "medium": "software", "featured": true }
//!   ]
//! }
//! ```
//!
//! `title` is required. `medium` must be one of the seven medium identifiers
//! when present. Everything else falls back to an empty value.
//!
//! Both pipelines parse into typed documents first, so a field of the wrong
//! JSON type is reported as [`CollectError::MalformedInput`]. An explicit
//! `null` counts as absent.

use crate::gallery::{Gallery, Medium, Work};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum CollectError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed input: {0}")]
    MalformedInput(#[from] serde_json::Error),
    #[error("Work #{index} is missing required field '{field}'")]
    MissingRequiredField { index: usize, field: &'static str },
    #[error("Work #{index} has invalid {field} '{value}'")]
    InvalidEnumValue {
        index: usize,
        field: &'static str,
        value: String,
    },
    #[error("Work #{index} has invalid date_created '{value}': {source}")]
    InvalidDate {
        index: usize,
        value: String,
        source: chrono::ParseError,
    },
}

pub const REGISTRY_GALLERY_NAME: &str = "ORGAN System Portfolio";
pub const REGISTRY_GALLERY_DESCRIPTION: &str =
    "Complete portfolio of creative and technical works across all 8 organs";
pub const DEFAULT_GALLERY_NAME: &str = "Portfolio";

/// Default medium for each known organ. Organs not listed map to software.
pub const ORGAN_MEDIUM_MAP: [(&str, Medium); 7] = [
    ("organvm-i-theoria", Medium::Software),
    ("organvm-ii-poiesis", Medium::MixedMedia),
    ("organvm-iii-ergon", Medium::Software),
    ("organvm-iv-taxis", Medium::Software),
    ("organvm-v-logos", Medium::Literary),
    ("organvm-vi-koinonia", Medium::Interactive),
    ("organvm-vii-kerygma", Medium::MixedMedia),
];

/// Look up the medium for an organ, falling back to [`Medium::Software`].
pub fn medium_for_organ(organ: &str) -> Medium {
    ORGAN_MEDIUM_MAP
        .iter()
        .find(|(name, _)| *name == organ)
        .map(|(_, medium)| *medium)
        .unwrap_or_else(|| {
            debug!(organ, "unmapped organ, defaulting medium to software");
            Medium::Software
        })
}

fn read_source(path: &Path) -> Result<String, CollectError> {
    fs::read_to_string(path).map_err(|source| CollectError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ============================================================================
// Registry
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct RegistryDocument {
    #[serde(default)]
    pub repositories: Option<Vec<RegistryEntry>>,
    #[serde(default)]
    pub repos: Option<Vec<RegistryEntry>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RegistryEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub org: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub portfolio_relevance: Option<String>,
    #[serde(default)]
    pub topics: Option<Vec<String>>,
}

impl RegistryEntry {
    fn into_work(self) -> Work {
        let name = self.name.unwrap_or_default();
        let organ = self.org.unwrap_or_default();
        let relevance = self.portfolio_relevance.as_deref().unwrap_or("LOW");
        Work {
            medium: medium_for_organ(&organ),
            featured: matches!(relevance, "CRITICAL" | "HIGH"),
            repo: name.clone(),
            title: name,
            description: self.description.unwrap_or_default(),
            organ,
            tags: self.topics.unwrap_or_default(),
            ..Work::default()
        }
    }
}

/// Build the registry gallery from an already-parsed document.
pub fn gallery_from_registry(document: RegistryDocument) -> Gallery {
    let mut gallery = Gallery::new(REGISTRY_GALLERY_NAME, REGISTRY_GALLERY_DESCRIPTION);
    let entries = document
        .repositories
        .or(document.repos)
        .unwrap_or_default();
    for entry in entries {
        gallery.add_work(entry.into_work());
    }
    gallery
}

/// Parse registry JSON text into a gallery.
pub fn parse_registry(content: &str) -> Result<Gallery, CollectError> {
    let document: RegistryDocument = serde_json::from_str(content)?;
    let gallery = gallery_from_registry(document);
    debug!(works = gallery.len(), "collected registry");
    Ok(gallery)
}

/// Build a gallery from a registry JSON file.
pub fn collect_from_registry(path: &Path) -> Result<Gallery, CollectError> {
    let content = read_source(path)?;
    let gallery = parse_registry(&content)?;
    debug!(path = %path.display(), works = gallery.len(), "read registry file");
    Ok(gallery)
}

// ============================================================================
// Curated works file
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct WorksDocument {
    #[serde(default)]
    pub gallery_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub works: Option<Vec<WorkEntry>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WorkEntry {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub organ: Option<String>,
    #[serde(default)]
    pub repo: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub date_created: Option<String>,
}

impl WorkEntry {
    /// Convert the entry at position `index` (zero-based) into a work.
    fn into_work(self, index: usize) -> Result<Work, CollectError> {
        let title = self.title.ok_or(CollectError::MissingRequiredField {
            index,
            field: "title",
        })?;
        let medium = match self.medium {
            Some(value) => value
                .parse::<Medium>()
                .map_err(|_| CollectError::InvalidEnumValue {
                    index,
                    field: "medium",
                    value,
                })?,
            None => Medium::Software,
        };
        let date_created = self
            .date_created
            .map(|value| {
                NaiveDate::parse_from_str(&value, "%Y-%m-%d")
                    .map_err(|source| CollectError::InvalidDate { index, value, source })
            })
            .transpose()?;

        Ok(Work {
            title,
            description: self.description.unwrap_or_default(),
            medium,
            organ: self.organ.unwrap_or_default(),
            repo: self.repo.unwrap_or_default(),
            date_created,
            tags: self.tags.unwrap_or_default(),
            url: self.url.unwrap_or_default(),
            featured: self.featured.unwrap_or(false),
        })
    }
}

/// Build a gallery from an already-parsed works document.
///
/// The first bad entry aborts the whole collection.
pub fn gallery_from_works(document: WorksDocument) -> Result<Gallery, CollectError> {
    let mut gallery = Gallery::new(
        document
            .gallery_name
            .unwrap_or_else(|| DEFAULT_GALLERY_NAME.to_string()),
        document.description.unwrap_or_default(),
    );
    for (index, entry) in document.works.unwrap_or_default().into_iter().enumerate() {
        gallery.add_work(entry.into_work(index)?);
    }
    Ok(gallery)
}

/// Parse curated works JSON text into a gallery.
pub fn parse_works(content: &str) -> Result<Gallery, CollectError> {
    let document: WorksDocument = serde_json::from_str(content)?;
    let gallery = gallery_from_works(document)?;
    debug!(name = %gallery.name, works = gallery.len(), "collected works");
    Ok(gallery)
}

/// Build a gallery from a curated works JSON file.
pub fn collect_from_works_file(path: &Path) -> Result<Gallery, CollectError> {
    let content = read_source(path)?;
    let gallery = parse_works(&content)?;
    debug!(path = %path.display(), works = gallery.len(), "read works file");
    Ok(gallery)
}

// ============================================================================
// Tests
// ============================================================================
