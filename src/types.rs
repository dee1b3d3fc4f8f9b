//! Data model for the landing page.
//!
//! These types describe the literal tables the page is rendered from. They're
//! designed to be:
//!
//! - **Borrow-free** - everything is `'static`, so components take plain
//!   references without lifetime plumbing
//! - **Serializable** - tables can be exported as JSON for inspection
//! - **Const-friendly** - the tables in [`crate::data`] are `static` literals
//!
//! Nothing here is ever mutated: each render call reads the tables and builds
//! its own view tree.

use serde::{Deserialize, Serialize};

/// Where a hyperlink opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkTarget {
    /// Navigate in the current browsing context.
    SameTab,
    /// Open a new browsing context (`target="_blank"`).
    External,
}

impl LinkTarget {
    /// The `target` attribute value, or `None` when the default applies.
    pub fn attr(self) -> Option<&'static str> {
        match self {
            LinkTarget::SameTab => None,
            LinkTarget::External => Some("_blank"),
        }
    }
}

/// A single hyperlink row, used by both the top nav and the footer groups.
///
/// When `icon` is set the rendered label is an icon+text composite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Visible link text.
    pub label: &'static str,
    /// Destination URL (may be a `mailto:` link).
    pub href: &'static str,
    /// Whether the link opens a new browsing context.
    pub target: LinkTarget,
    /// Optional SVG path data rendered before the label.
    pub icon: Option<&'static str>,
}

/// One member organization's logo row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MemberLogo {
    /// Bundled asset path; resolution failures are build-time errors.
    pub image: &'static str,
    /// Alt text for the logo image.
    pub alt: &'static str,
    /// The member's site, used when logos render as links.
    pub href: Option<&'static str>,
}

/// An ordered group of footer links, optionally headed by a label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FooterLinkGroup {
    /// Group heading; labelled groups also render a thin separator rule.
    pub label: Option<&'static str>,
    /// Links in display order.
    pub links: &'static [NavLink],
}

/// Render-time configuration.
///
/// The page exists in two published variants; rather than two page
/// definitions, both are reachable through these flags. The default is the
/// variant without the call-to-action panel and with plain (unlinked) member
/// logos.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageOptions {
    /// Render the membership call-to-action panel before the footer.
    #[serde(default)]
    pub include_cta_panel: bool,
    /// Wrap member logos in anchors pointing at each member's site.
    #[serde(default)]
    pub member_logos_linked: bool,
}
