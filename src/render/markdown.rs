//! Markdown rendering.
//!
//! ```text
//! # Test Portfolio
//!
//! A test portfolio for renderer validation
//!
//! ## Featured Works
//!
//! ### Featured Art
//! *generative-art* | organvm-ii-poiesis
//!
//! A test creative work for rendering
//!
//! Tags: generative, art
//!
//! ## All Works
//!
//! Total: 4 works
//!
//! - **Featured Art** (generative-art) — organvm-ii-poiesis
//! ```

use crate::gallery::Gallery;

pub fn render_markdown(gallery: &Gallery) -> String {
    let mut lines: Vec<String> = vec![
        format!("# {}", gallery.name),
        String::new(),
        gallery.description.clone(),
        String::new(),
    ];

    let featured = gallery.featured_works();
    if !featured.is_empty() {
        lines.push("## Featured Works".to_string());
        lines.push(String::new());
        for work in featured {
            lines.push(format!("### {}", work.title));
            lines.push(format!("*{}* | {}", work.medium, work.organ));
            lines.push(String::new());
            lines.push(work.description.clone());
            if !work.tags.is_empty() {
                lines.push(String::new());
                lines.push(format!("Tags: {}", work.tags.join(", ")));
            }
            lines.push(String::new());
        }
    }

    lines.push("## All Works".to_string());
    lines.push(String::new());
    lines.push(format!("Total: {} works", gallery.len()));
    lines.push(String::new());

    for work in gallery.works() {
        lines.push(format!(
            "- **{}** ({}) \u{2014} {}",
            work.title, work.medium, work.organ
        ));
    }

    lines.join("\n")
}
