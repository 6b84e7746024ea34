//! Gallery renderers.
//!
//! Four independent, pure functions turn a [`Gallery`] into output:
//!
//! | Function | Output |
//! |----------|--------|
//! | [`render_markdown`] | Markdown document |
//! | [`render_html`] | Self-contained HTML page (inline CSS, no external assets) |
//! | [`render_json`] | Pretty-printed JSON (`gallery` header + `works` array) |
//! | [`render_summary`] | [`Summary`] counts, consumed programmatically |
//!
//! All of them share one filtering policy: a featured section is emitted only
//! when at least one work is featured, and the full listing is always emitted,
//! even for an empty gallery (`Total: 0 works`).

mod html;
mod json;
mod markdown;
mod summary;

pub use html::{render_html, render_html_with_colors};
pub use json::render_json;
pub use markdown::render_markdown;
pub use summary::{Summary, render_summary};

use crate::config::ColorConfig;
use crate::gallery::Gallery;
use serde::{Deserialize, Serialize};

/// Document formats produced by `generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Html,
    Json,
}

/// Render a gallery in the requested format.
///
/// `colors` only affects HTML output; only JSON serialization can fail.
pub fn render(
    gallery: &Gallery,
    format: OutputFormat,
    colors: &ColorConfig,
) -> Result<String, serde_json::Error> {
    Ok(match format {
        OutputFormat::Markdown => render_markdown(gallery),
        OutputFormat::Html => render_html_with_colors(gallery, colors),
        OutputFormat::Json => render_json(gallery)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn render_dispatches_by_format() {
        let gallery = populated_gallery();
        let colors = ColorConfig::default();
        assert_eq!(
            render(&gallery, OutputFormat::Markdown, &colors).unwrap(),
            render_markdown(&gallery)
        );
        assert_eq!(
            render(&gallery, OutputFormat::Json, &colors).unwrap(),
            render_json(&gallery).unwrap()
        );
        assert_eq!(
            render(&gallery, OutputFormat::Html, &colors).unwrap(),
            render_html(&gallery)
        );
    }

    #[test]
    fn output_format_serde_is_lowercase() {
        let format: OutputFormat = serde_json::from_str(r#""html""#).unwrap();
        assert_eq!(format, OutputFormat::Html);
        assert_eq!(
            serde_json::to_string(&OutputFormat::Markdown).unwrap(),
            r#""markdown""#
        );
    }

    #[test]
    fn every_format_agrees_on_counts() {
        let gallery = populated_gallery();
        let summary = render_summary(&gallery);
        let rendered = render_json(&gallery).unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(json["gallery"]["total_works"], summary.total_works);
        assert_eq!(json["gallery"]["featured_count"], summary.featured_count);
        let total_line = format!("Total: {} works", summary.total_works);
        assert!(render_markdown(&gallery).contains(&total_line));
        assert!(render_html(&gallery).contains(&total_line));
    }
}
