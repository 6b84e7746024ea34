//! JSON rendering.
//!
//! ```json
//! {
//!   "gallery": { "name": "...", "description": "...", "total_works": 4, "featured_count": 2 },
//!   "works": [
//!     {
//!       "title": "Featured Art",
//!       "description": "...",
//!       "medium": "generative-art",
//!       "organ": "organvm-ii-poiesis",
//!       "repo": "test-repo",
//!       "tags": ["generative", "art"],
//!       "featured": true,
//!       "slug": "featured-art",
//!       "date_created": "2024-03-15",
//!       "url": "https://..."
//!     }
//!   ]
//! }
//! ```
//!
//! `date_created` and `url` are only written when set. Field order follows the
//! struct declarations below. Output is 2-space indented and non-ASCII text is
//! written as-is.

use crate::gallery::{Gallery, Medium, Work};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Serialize)]
struct Document<'a> {
    gallery: GalleryHeader<'a>,
    works: Vec<WorkRecord<'a>>,
}

#[derive(Serialize)]
struct GalleryHeader<'a> {
    name: &'a str,
    description: &'a str,
    total_works: usize,
    featured_count: usize,
}

#[derive(Serialize)]
struct WorkRecord<'a> {
    title: &'a str,
    description: &'a str,
    medium: Medium,
    organ: &'a str,
    repo: &'a str,
    tags: &'a [String],
    featured: bool,
    slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_created: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
}

impl<'a> From<&'a Work> for WorkRecord<'a> {
    fn from(work: &'a Work) -> Self {
        Self {
            title: &work.title,
            description: &work.description,
            medium: work.medium,
            organ: &work.organ,
            repo: &work.repo,
            tags: &work.tags,
            featured: work.featured,
            slug: work.slug(),
            date_created: work.date_created,
            url: (!work.url.is_empty()).then_some(work.url.as_str()),
        }
    }
}

/// Serialize the gallery document.
///
/// Every field is a string, number, bool or list of strings, so this only
/// fails if serde_json itself does.
pub fn render_json(gallery: &Gallery) -> Result<String, serde_json::Error> {
    let document = Document {
        gallery: GalleryHeader {
            name: &gallery.name,
            description: &gallery.description,
            total_works: gallery.len(),
            featured_count: gallery.featured_works().len(),
        },
        works: gallery.works().iter().map(WorkRecord::from).collect(),
    };
    serde_json::to_string_pretty(&document)
}
