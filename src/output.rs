//! CLI output formatting for the query commands.
//!
//! # Output Format
//!
//! ## Summary
//!
//! ```text
//! Portfolio: ORGAN System Portfolio
//! Total works: 4
//! Featured: 2
//!
//! By medium:
//!   generative-art: 1
//!   software: 3
//!
//! By organ:
//!   organvm-i-theoria: 3
//!   organvm-ii-poiesis: 1
//! ```
//!
//! ## Search
//!
//! ```text
//! Found 1 work(s) matching 'recursion':
//!
//!   Recursive Engine (software) — organvm-i-theoria [FEATURED]
//!     A self-referential engine for exploring recursion...
//! ```
//!
//! ## Featured
//!
//! ```text
//! Featured works (1):
//!
//!   Recursive Engine
//!     software | organvm-i-theoria | recursive-engine
//!     A self-referential engine for exploring recursion...
//! ```
//!
//! # Architecture
//!
//! Each view has a `format_*` function (returns `Vec<String>`) for testability;
//! [`print_lines`] writes them to stdout. Format functions are pure — no I/O,
//! no side effects.

use crate::gallery::Work;
use crate::render::Summary;

// ============================================================================
// Shared helpers
// ============================================================================

/// Truncate text to `max` characters, appending `...` if truncated.
///
/// Counts characters, not bytes, so multi-byte text is never split.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// `title (medium) — organ`, with a marker for featured works.
fn work_line(work: &Work) -> String {
    let featured_mark = if work.featured { " [FEATURED]" } else { "" };
    format!(
        "{} ({}) \u{2014} {}{}",
        work.title, work.medium, work.organ, featured_mark
    )
}

/// Indented description preview, or nothing for an empty description.
fn description_line(work: &Work, max: usize) -> Option<String> {
    let desc = work.description.trim();
    (!desc.is_empty()).then(|| format!("    {}", truncate_desc(desc, max)))
}

// ============================================================================
// Views
// ============================================================================

/// Format gallery statistics.
pub fn format_summary(gallery_name: &str, summary: &Summary) -> Vec<String> {
    let mut lines = vec![
        format!("Portfolio: {}", gallery_name),
        format!("Total works: {}", summary.total_works),
        format!("Featured: {}", summary.featured_count),
        String::new(),
        "By medium:".to_string(),
    ];
    for (medium, count) in &summary.by_medium {
        lines.push(format!("  {}: {}", medium, count));
    }
    lines.push(String::new());
    lines.push("By organ:".to_string());
    for (organ, count) in &summary.by_organ {
        lines.push(format!("  {}: {}", organ, count));
    }
    lines
}

/// Format keyword search hits.
pub fn format_search_results(query: &str, results: &[&Work], preview: usize) -> Vec<String> {
    if results.is_empty() {
        return vec![format!("No works found matching '{}'", query)];
    }

    let mut lines = vec![
        format!("Found {} work(s) matching '{}':", results.len(), query),
        String::new(),
    ];
    for work in results {
        lines.push(format!("  {}", work_line(work)));
        lines.extend(description_line(work, preview));
        lines.push(String::new());
    }
    lines
}

/// Format the featured works listing.
pub fn format_featured(works: &[&Work], preview: usize) -> Vec<String> {
    if works.is_empty() {
        return vec!["No featured works found.".to_string()];
    }

    let mut lines = vec![format!("Featured works ({}):", works.len()), String::new()];
    for work in works {
        lines.push(format!("  {}", work.title));
        lines.push(format!(
            "    {} | {} | {}",
            work.medium, work.organ, work.repo
        ));
        lines.extend(description_line(work, preview));
        lines.push(String::new());
    }
    lines
}

/// Format a filtered listing (one line per work).
pub fn format_listing(works: &[&Work]) -> Vec<String> {
    if works.is_empty() {
        return vec!["No works found.".to_string()];
    }

    let mut lines = vec![format!("Works ({}):", works.len())];
    lines.extend(works.iter().map(|w| format!("  - {}", work_line(w))));
    lines
}

/// Print formatted lines to stdout.
pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{Gallery, Medium};
    use crate::render::render_summary;
    use crate::test_helpers::*;

    // =========================================================================
    // Helper tests
    // =========================================================================

    #[test]
    fn truncate_desc_short() {
        assert_eq!(truncate_desc("Short text", 40), "Short text");
    }

    #[test]
    fn truncate_desc_exact() {
        let text = "a".repeat(40);
        assert_eq!(truncate_desc(&text, 40), text);
    }

    #[test]
    fn truncate_desc_long() {
        let text = "a".repeat(50);
        let expected = format!("{}...", "a".repeat(40));
        assert_eq!(truncate_desc(&text, 40), expected);
    }

    #[test]
    fn truncate_desc_multibyte() {
        assert_eq!(truncate_desc("ééééé", 3), "ééé...");
        assert_eq!(truncate_desc("日本語", 3), "日本語");
    }

    #[test]
    fn truncate_desc_empty() {
        assert_eq!(truncate_desc("", 40), "");
    }

    #[test]
    fn work_line_marks_featured() {
        let work = Work {
            organ: "organvm-i-theoria".into(),
            featured: true,
            ..Work::new("Engine", Medium::Software)
        };
        assert_eq!(
            work_line(&work),
            "Engine (software) — organvm-i-theoria [FEATURED]"
        );
    }

    // =========================================================================
    // View tests
    // =========================================================================

    #[test]
    fn summary_lines() {
        let gallery = populated_gallery();
        let lines = format_summary(&gallery.name, &render_summary(&gallery));
        assert_eq!(
            lines,
            vec![
                "Portfolio: Test Portfolio",
                "Total works: 4",
                "Featured: 2",
                "",
                "By medium:",
                "  generative-art: 1",
                "  musical: 1",
                "  performance: 1",
                "  software: 1",
                "",
                "By organ:",
                "  organvm-i-theoria: 1",
                "  organvm-ii-poiesis: 3",
            ]
        );
    }

    #[test]
    fn summary_lines_empty_gallery() {
        let gallery = Gallery::new("Empty", "");
        let lines = format_summary(&gallery.name, &render_summary(&gallery));
        assert_eq!(lines[1], "Total works: 0");
        assert_eq!(lines.last().unwrap(), "By organ:");
    }

    #[test]
    fn search_results_found() {
        let gallery = populated_gallery();
        let results = gallery.search("recursion");
        let lines = format_search_results("recursion", &results, 10);
        assert_eq!(lines[0], "Found 1 work(s) matching 'recursion':");
        assert_eq!(
            lines[2],
            "  Featured Software (software) — organvm-i-theoria [FEATURED]"
        );
        assert_eq!(lines[3], "    A test cre...");
    }

    #[test]
    fn search_results_none() {
        let lines = format_search_results("zzz", &[], 100);
        assert_eq!(lines, vec!["No works found matching 'zzz'"]);
    }

    #[test]
    fn featured_lines() {
        let gallery = populated_gallery();
        let lines = format_featured(&gallery.featured_works(), 120);
        assert_eq!(lines[0], "Featured works (2):");
        assert_eq!(lines[2], "  Featured Art");
        assert_eq!(lines[3], "    generative-art | organvm-ii-poiesis | test-repo");
        assert_eq!(lines[4], "    A test creative work for rendering");
    }

    #[test]
    fn featured_lines_none() {
        let lines = format_featured(&[], 120);
        assert_eq!(lines, vec!["No featured works found."]);
    }

    #[test]
    fn featured_skips_empty_description() {
        let work = Work {
            featured: true,
            ..Work::new("Quiet", Medium::Musical)
        };
        let lines = format_featured(&[&work], 120);
        assert_eq!(lines, vec!["Featured works (1):", "", "  Quiet", "    musical |  | ", ""]);
    }

    #[test]
    fn listing_lines() {
        let gallery = populated_gallery();
        let lines = format_listing(&gallery.by_organ("organvm-i-theoria"));
        assert_eq!(
            lines,
            vec![
                "Works (1):",
                "  - Featured Software (software) — organvm-i-theoria [FEATURED]",
            ]
        );
        assert_eq!(format_listing(&[]), vec!["No works found."]);
    }
}
