//! The literal tables the page is rendered from.
//!
//! Keeping the tables out of the view code lets them be unit-tested on their
//! own and keeps each component a plain row-to-markup mapping.

use crate::components::ICON_GITHUB;
use crate::types::{FooterLinkGroup, LinkTarget, MemberLogo, NavLink};

/// Top navigation links, rendered next to the brand home link.
pub static NAV_LINKS: &[NavLink] = &[NavLink {
    label: "Github",
    href: "https://github.com/tannerlinsley",
    target: LinkTarget::External,
    icon: Some(ICON_GITHUB),
}];

/// Member organizations, in display order.
pub static MEMBER_LOGOS: &[MemberLogo] = &[
    MemberLogo {
        image: "assets/logos/nozzle.svg",
        alt: "Nozzle",
        href: Some("https://nozzle.io"),
    },
    MemberLogo {
        image: "assets/logos/seoclarity.png",
        alt: "SEO Clarity",
        href: Some("https://seoclarity.net"),
    },
];

/// Footer link groups: general links first, then the members listing.
pub static FOOTER_GROUPS: &[FooterLinkGroup] = &[
    FooterLinkGroup {
        label: None,
        links: &[
            NavLink {
                label: "Github",
                href: "https://github.com/tannerlinsley",
                target: LinkTarget::External,
                icon: Some(ICON_GITHUB),
            },
            NavLink {
                label: "Contact",
                href: "mailto:rta@nozzle.io",
                target: LinkTarget::SameTab,
                icon: None,
            },
        ],
    },
    FooterLinkGroup {
        label: Some("Members"),
        links: &[
            NavLink {
                label: "Nozzle.io",
                href: "https://nozzle.io",
                target: LinkTarget::SameTab,
                icon: None,
            },
            NavLink {
                label: "SEO Clarity",
                href: "https://seoclarity.net",
                target: LinkTarget::SameTab,
                icon: None,
            },
        ],
    },
];
