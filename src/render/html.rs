//! HTML rendering.
//!
//! Produces one self-contained page: the stylesheet is inlined in `<head>` and
//! there are no scripts or external assets. The structure mirrors the Markdown
//! output:
//!
//! ```text
//! <h1>  gallery name
//! <p>   description
//! <section class="featured-works">   only when something is featured
//!     <article class="work featured"> per featured work
//! <section class="all-works">
//!     <p class="total">Total: N works</p>
//!     <ul class="work-list"> one <li> per work, featured ones tagged `featured`
//! ```
//!
//! Markup is built with [maud](https://maud.lambda.xyz/), so every piece of
//! gallery text is HTML-escaped on the way out.

use crate::config::{self, ColorConfig};
use crate::gallery::{Gallery, Work};
use maud::{DOCTYPE, Markup, PreEscaped, html};

const CSS_STATIC: &str = include_str!("../../static/style.css");

/// Render with the stock color palette.
pub fn render_html(gallery: &Gallery) -> String {
    render_html_with_colors(gallery, &ColorConfig::default())
}

/// Render with a configured color palette.
pub fn render_html_with_colors(gallery: &Gallery, colors: &ColorConfig) -> String {
    let css = format!("{}\n\n{}", config::generate_color_css(colors), CSS_STATIC);
    let featured = gallery.featured_works();

    let content = html! {
        header.gallery-header {
            h1 { (gallery.name) }
            p.gallery-description { (gallery.description) }
        }
        main {
            @if !featured.is_empty() {
                section.featured-works {
                    h2 { "Featured Works" }
                    @for work in &featured {
                        (featured_card(work))
                    }
                }
            }
            section.all-works {
                h2 { "All Works" }
                p.total { "Total: " (gallery.len()) " works" }
                ul.work-list {
                    @for work in gallery.works() {
                        (work_item(work))
                    }
                }
            }
        }
    };

    base_document(&gallery.name, &css, content).into_string()
}

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Card for the featured section.
fn featured_card(work: &Work) -> Markup {
    html! {
        article.work.featured {
            h3 { (work.title) }
            p.meta {
                em { (work.medium.as_str()) }
                " | "
                (work.organ)
            }
            p.description { (work.description) }
            @if !work.tags.is_empty() {
                p.tags { "Tags: " (work.tags.join(", ")) }
            }
        }
    }
}

/// One line of the full listing.
fn work_item(work: &Work) -> Markup {
    html! {
        li class=[work.featured.then_some("featured")] {
            strong { (work.title) }
            " (" (work.medium.as_str()) ") \u{2014} " (work.organ)
        }
    }
}
