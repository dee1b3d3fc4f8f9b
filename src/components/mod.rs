//! Leptos UI components for the landing page.
//!
//! Each component is a `#[component]` function composed by [`PageDocument`].
//! The tree is fixed; rendering order is content order.
//!
//! ```text
//! PageDocument
//! ├── Hero
//! │   └── Nav (NAV_LINKS rows)
//! ├── WhatIs
//! ├── WhyItMatters
//! ├── HowItWorks
//! ├── MemberPanel (MEMBER_LOGOS rows)
//! ├── CtaPanel (optional)
//! └── Footer (FOOTER_GROUPS rows)
//! ```

mod cta;
mod document;
mod footer;
mod hero;
mod icons;
mod info;
mod members;

pub use cta::CtaPanel;
pub use document::PageDocument;
pub use footer::Footer;
pub use hero::Hero;
pub use icons::{Icon, ICON_GITHUB};
pub use info::{HowItWorks, InfoPanel, WhatIs, WhyItMatters};
pub use members::MemberPanel;
