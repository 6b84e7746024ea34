//! # Showcase Portfolio
//!
//! Portfolio aggregation engine. Collects creative and technical works from a
//! repository registry or a curated works file into a single gallery model, then
//! renders that gallery as Markdown, HTML or JSON, or answers summary, search
//! and featured queries over it.
//!
//! # Architecture: Collect → Gallery → Render
//!
//! ```text
//! registry.json ─┐
//!                ├─ collect ─→ Gallery ─┬─ render_{markdown,html,json}
//! works.json ────┘                      ├─ render_summary
//!                                       └─ featured_works / by_medium / by_organ / search
//! ```
//!
//! Every stage after collection is a pure function over an in-memory
//! [`gallery::Gallery`], so unit tests exercise rendering and queries without
//! touching the filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`gallery`] | `Medium`, `Work` and `Gallery`, plus the query helpers |
//! | [`collect`] | Registry and curated-file collectors with typed errors |
//! | [`render`] | Markdown, HTML, JSON and summary renderers |
//! | [`config`] | `showcase.toml` loading, validation, merging and HTML color CSS |
//! | [`output`] | CLI output formatting for summary, search, featured and list views |
//!
//! # Design Decisions
//!
//! ## Closed Medium Set
//!
//! The medium is an enum rather than a string. Invalid values are rejected when
//! a curated file is collected, never at render time, and every renderer can
//! rely on the seven stable identifiers.
//!
//! ## Defaults Over Errors
//!
//! Portfolio data is often incomplete, so nearly every missing field falls back
//! to an empty value. The exceptions are a curated work without a title and a
//! medium that is not one of the known identifiers; both abort the load with a
//! [`collect::CollectError`] instead of silently producing a gallery.
//!
//! ## Maud Over Template Engines
//!
//! HTML is built with [Maud](https://maud.lambda.xyz/), a compile-time HTML
//! macro system. The page is self-contained (inline stylesheet, no scripts) and
//! all gallery text is escaped on interpolation.

pub mod collect;
pub mod config;
pub mod gallery;
pub mod output;
pub mod render;

#[cfg(test)]
pub(crate) mod test_helpers;
