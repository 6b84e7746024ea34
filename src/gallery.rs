//! Work and gallery data model.
//!
//! A [`Gallery`] is an ordered, named collection of [`Work`] values. Collectors
//! create it empty and grow it with [`Gallery::add_work`]; after that it is only
//! read — by the renderers and by the query helpers defined here.
//!
//! ## Medium
//!
//! Every work is classified into one of seven closed [`Medium`] categories.
//! The identifiers are stable, lowercase and hyphenated (`generative-art`,
//! `mixed-media`, ...) and are what appears in every rendered format:
//!
//! ```text
//! "generative-art"  →  Medium::GenerativeArt
//! "mixed-media"     →  Medium::MixedMedia
//! "Software"        →  error (matching is exact)
//! ```
//!
//! ## Queries
//!
//! All queries borrow the gallery and return matching works in insertion order.
//! Nothing here ever removes or reorders a work.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown medium '{0}' (expected one of: {expected})", expected = MEDIUM_IDENTIFIERS)]
pub struct UnknownMedium(pub String);

const MEDIUM_IDENTIFIERS: &str =
    "generative-art, performance, interactive, literary, musical, mixed-media, software";

/// Creative category of a work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Medium {
    GenerativeArt,
    Performance,
    Interactive,
    Literary,
    Musical,
    MixedMedia,
    #[default]
    Software,
}

impl Medium {
    /// Every medium, in declaration order.
    pub const ALL: [Medium; 7] = [
        Medium::GenerativeArt,
        Medium::Performance,
        Medium::Interactive,
        Medium::Literary,
        Medium::Musical,
        Medium::MixedMedia,
        Medium::Software,
    ];

    /// The stable identifier used in input files and rendered output.
    pub fn as_str(self) -> &'static str {
        match self {
            Medium::GenerativeArt => "generative-art",
            Medium::Performance => "performance",
            Medium::Interactive => "interactive",
            Medium::Literary => "literary",
            Medium::Musical => "musical",
            Medium::MixedMedia => "mixed-media",
            Medium::Software => "software",
        }
    }
}

impl fmt::Display for Medium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Medium {
    type Err = UnknownMedium;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Medium::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownMedium(s.to_string()))
    }
}

/// A single showcased work.
///
/// Optional fields default to empty values; build one with struct update syntax:
///
/// ```rust
/// use showcase_portfolio::gallery::{Medium, Work};
///
/// let work = Work {
///     featured: true,
///     ..Work::new("Recursive Engine", Medium::Software)
/// };
/// assert_eq!(work.slug(), "recursive-engine");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Work {
    pub title: String,
    pub description: String,
    pub medium: Medium,
    /// Originating subsystem; opaque beyond equality and table lookup.
    pub organ: String,
    pub repo: String,
    pub date_created: Option<NaiveDate>,
    /// Insertion order preserved, duplicates kept.
    pub tags: Vec<String>,
    pub url: String,
    pub featured: bool,
}

impl Work {
    pub fn new(title: impl Into<String>, medium: Medium) -> Self {
        Self {
            title: title.into(),
            medium,
            ..Self::default()
        }
    }

    /// URL-friendly identifier derived from the title.
    ///
    /// Lowercases, replaces spaces with `-` and drops apostrophes. Other
    /// punctuation is left alone and uniqueness is not guaranteed.
    pub fn slug(&self) -> String {
        self.title.to_lowercase().replace(' ', "-").replace('\'', "")
    }

    /// Case-insensitive substring match on title, description or any tag.
    ///
    /// `needle` must already be lowercased.
    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

/// A named, described, ordered collection of works.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Gallery {
    pub name: String,
    pub description: String,
    works: Vec<Work>,
}

impl Gallery {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            works: Vec::new(),
        }
    }

    pub fn add_work(&mut self, work: Work) {
        self.works.push(work);
    }

    /// All works in insertion order.
    pub fn works(&self) -> &[Work] {
        &self.works
    }

    pub fn len(&self) -> usize {
        self.works.len()
    }

    pub fn is_empty(&self) -> bool {
        self.works.is_empty()
    }

    pub fn featured_works(&self) -> Vec<&Work> {
        self.works.iter().filter(|w| w.featured).collect()
    }

    pub fn by_medium(&self, medium: Medium) -> Vec<&Work> {
        self.works.iter().filter(|w| w.medium == medium).collect()
    }

    /// Works whose organ equals `organ` exactly (case-sensitive).
    pub fn by_organ(&self, organ: &str) -> Vec<&Work> {
        self.works.iter().filter(|w| w.organ == organ).collect()
    }

    /// Case-insensitive keyword search over title, description and tags.
    ///
    /// An empty query matches every work.
    pub fn search(&self, query: &str) -> Vec<&Work> {
        let needle = query.to_lowercase();
        self.works.iter().filter(|w| w.matches(&needle)).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
