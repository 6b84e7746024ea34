//! Summary statistics.

use crate::gallery::Gallery;
use serde::Serialize;
use std::collections::BTreeMap;

/// Work counts for a gallery.
///
/// The maps only contain keys that actually occur; an empty organ string is
/// counted like any other organ.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    pub total_works: usize,
    pub featured_count: usize,
    /// Medium identifier → count.
    pub by_medium: BTreeMap<String, usize>,
    /// Organ → count.
    pub by_organ: BTreeMap<String, usize>,
}

pub fn render_summary(gallery: &Gallery) -> Summary {
    let mut by_medium: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_organ: BTreeMap<String, usize> = BTreeMap::new();

    for work in gallery.works() {
        *by_medium.entry(work.medium.as_str().to_string()).or_default() += 1;
        *by_organ.entry(work.organ.clone()).or_default() += 1;
    }

    Summary {
        total_works: gallery.len(),
        featured_count: gallery.featured_works().len(),
        by_medium,
        by_organ,
    }
}
