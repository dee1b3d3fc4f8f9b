//! # rta-landing
//!
//! Leptos SSR renderer for the Rank Tracker Alliance landing page.
//!
//! The crate is a pure, type-safe page definition: typed literal tables feed
//! `#[component]` view functions, and [`render_page`] serializes the composed
//! tree to a complete HTML document with
//! [Leptos](https://leptos.dev/) server-side rendering.
//!
//! ## Features
//!
//! - **Zero JavaScript Runtime** - pure SSR, no hydration needed
//! - **Deterministic** - the only dynamic value (the copyright year) comes
//!   through an injected [`Clock`](clock::Clock)
//! - **Two published variants** - the call-to-action panel and linked member
//!   logos toggle through [`PageOptions`]
//!
//! ## Quick Start
//!
//! ```rust
//! use rta_landing::{render_page, page_meta, clock::SystemClock, types::PageOptions};
//!
//! // Head metadata for hosts that inject their own head tags
//! let meta = page_meta();
//! assert_eq!(meta.title, "RTA - Common Crawl for Google SERPs");
//!
//! // Render the full document
//! let html = render_page(&PageOptions::default(), &SystemClock);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`meta`] - page metadata record and head fields
//! - [`types`] / [`data`] - data model and the literal tables
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constant
//! - [`clock`] - the injected year source
//!
//! ## Leptos 0.8 SSR
//!
//! This library uses Leptos 0.8's `RenderHtml` trait: the view is built once
//! per call and serialized with `to_html()`. No reactive runtime is involved.

#![doc(html_root_url = "https://docs.rs/rta-landing/0.1.0")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod clock;
pub mod components;
pub mod data;
pub mod meta;
pub mod styles;
pub mod types;

use clock::Clock;
use components::PageDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

pub use meta::{page_meta, PageMeta};
pub use types::PageOptions;

/// Render the complete landing page to an HTML string.
///
/// Pure apart from a single `clock.year()` read for the footer's copyright
/// line: identical options and a frozen clock yield byte-identical output.
///
/// # Example
///
/// ```rust
/// use rta_landing::{render_page, clock::FixedClock, types::PageOptions};
///
/// let options = PageOptions { include_cta_panel: true, ..Default::default() };
/// let html = render_page(&options, &FixedClock(2022));
/// assert!(html.contains("© 2022 Rank Tracker Alliance LLC"));
/// ```
pub fn render_page(options: &PageOptions, clock: &dyn Clock) -> String {
    let options = *options;
    let year = clock.year();
    let doc = view! { <PageDocument options=options year=year /> };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use pretty_assertions::assert_eq;

    fn render(options: PageOptions) -> String {
        render_page(&options, &FixedClock(2022))
    }

    /// The panel body between two headings (or to the end of the document).
    fn between<'a>(html: &'a str, start: &str, end: &str) -> &'a str {
        let from = html.find(start).unwrap_or_else(|| panic!("missing {start}"));
        let to = html[from..].find(end).map(|i| from + i).unwrap_or(html.len());
        &html[from..to]
    }

    #[test]
    fn renders_a_complete_document() {
        let html = render(PageOptions::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<title>RTA - Common Crawl for Google SERPs</title>"));
        assert!(html.contains("Common Crawl for Google SERPs"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let options = PageOptions {
            include_cta_panel: true,
            member_logos_linked: true,
        };
        assert_eq!(render(options), render(options));
        assert_eq!(render(PageOptions::default()), render(PageOptions::default()));
    }

    #[test]
    fn head_carries_the_social_card_tags() {
        let html = render(PageOptions::default());
        assert!(html.contains(
            r#"content="rank,tracker,keywords,serp,crawling,indexing,google,common,crawl""#
        ));
        assert!(html.contains(r#"property="og:title""#));
        assert!(html.contains(r#"property="og:image""#));
        assert!(html.contains(r#"property="og:type""#));
        assert!(html.contains(r#"content="RTA - Common Crawl for Google SERPs""#));
        assert!(html.contains(r#"content="https://ranktrackeralliance.com/favicon.png""#));
        assert!(html.contains(r#"name="twitter:card""#));
        assert!(html.contains(r#"content="summary_large_image""#));
    }

    #[test]
    fn nav_has_home_and_external_repository_links() {
        let html = render(PageOptions::default());
        assert!(html.contains(r#"href="/""#));
        let nav = between(&html, r#"class="nav""#, "hero-center");
        assert!(nav.contains("https://github.com/tannerlinsley"));
        assert!(nav.contains(r#"target="_blank""#));
        assert!(nav.contains("<svg"));
    }

    #[test]
    fn exactly_three_info_panels_in_content_order() {
        let html = render(PageOptions::default());
        assert_eq!(html.matches(r#"class="info-panel""#).count(), 3);

        let what = html.find("What is the RTA?").unwrap();
        let why = html.find("Why is the RTA important?").unwrap();
        let how = html.find("How does it work?").unwrap();
        assert!(what < why);
        assert!(why < how);
    }

    #[test]
    fn why_panel_lists_four_points() {
        let html = render(PageOptions::default());
        let panel = between(&html, "Why is the RTA important?", "How does it work?");
        assert_eq!(panel.matches("<li>").count(), 4);
    }

    #[test]
    fn how_panel_lists_five_pipeline_steps() {
        let html = render(PageOptions::default());
        let panel = between(&html, "How does it work?", "Who runs the RTA?");
        assert_eq!(panel.matches("<li>").count(), 5);
        let steps = [
            "requested and downloaded",
            "normalized",
            "diffed",
            "compressed and stored",
            "dispatched to subscribers",
        ];
        for step in steps {
            assert!(panel.contains(step), "missing pipeline step: {step}");
        }
    }

    #[test]
    fn member_panel_renders_two_plain_logos_by_default() {
        let html = render(PageOptions::default());
        assert_eq!(html.matches(r#"class="member-logo""#).count(), 2);
        assert!(!html.contains(r#"class="member-logo-link""#));
        assert!(html.contains("assets/logos/nozzle.svg"));
        assert!(html.contains("assets/logos/seoclarity.png"));
    }

    #[test]
    fn linked_variant_wraps_each_logo_in_its_member_anchor() {
        let html = render(PageOptions {
            member_logos_linked: true,
            ..Default::default()
        });
        assert_eq!(html.matches(r#"class="member-logo-link""#).count(), 2);

        // the first anchor points at nozzle.io and wraps the nozzle logo
        let class_at = html.find(r#"class="member-logo-link""#).unwrap();
        let open_at = html[..class_at].rfind("<a ").unwrap();
        let close_at = class_at + html[class_at..].find("</a>").unwrap();
        let anchor = &html[open_at..close_at];
        assert!(anchor.contains(r#"href="https://nozzle.io""#));
        assert!(anchor.contains("<img"));
        assert!(anchor.contains("assets/logos/nozzle.svg"));
    }

    #[test]
    fn cta_panel_is_gated_by_its_flag() {
        let without = render(PageOptions::default());
        assert!(!without.contains(r#"class="cta-panel""#));

        let with = render(PageOptions {
            include_cta_panel: true,
            ..Default::default()
        });
        assert_eq!(with.matches(r#"class="cta-panel""#).count(), 1);
        let panel = between(&with, "Interested in joining?", "<footer");
        assert!(panel.contains(r#"class="btn btn-primary""#));
        assert!(panel.contains("<svg"));
    }

    #[test]
    fn footer_lists_both_groups_and_the_frozen_year() {
        let html = render(PageOptions::default());
        let footer = between(&html, "<footer", "</footer>");
        assert!(footer.contains("mailto:rta@nozzle.io"));
        assert!(footer.contains("Members"));
        assert!(footer.contains(r#"class="footer-rule""#));
        assert!(footer.contains("© 2022 Rank Tracker Alliance LLC"));
    }

    #[test]
    fn copyright_follows_the_injected_clock() {
        let html = render_page(&PageOptions::default(), &FixedClock(2031));
        assert!(html.contains("© 2031 Rank Tracker Alliance LLC"));
        assert!(!html.contains("© 2022"));
    }
}
