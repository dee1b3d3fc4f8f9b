//! Hero banner: the gradient header holding the nav bar, header image and
//! tagline.

use super::Icon;
use crate::data::NAV_LINKS;
use crate::types::NavLink;
use leptos::prelude::*;

/// The gradient banner at the top of the page.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <Nav />
            <div class="hero-center">
                <img src="assets/header.png" alt="Rank Tracker Alliance" class="hero-image" />
                <p class="hero-tagline">"Common Crawl for Google SERPs"</p>
            </div>
        </section>
    }
}

#[component]
fn Nav() -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand">"Rank Tracker Alliance"</a>
                <ul class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! { <NavItem link=link /> })
                        .collect_view()}
                </ul>
            </div>
        </nav>
    }
}

/// One nav table row rendered as a list item.
#[component]
fn NavItem(link: &'static NavLink) -> impl IntoView {
    view! {
        <li class="nav-item">
            <a href=link.href class="nav-link" target=link.target.attr()>
                {link.icon.map(|path| view! { <Icon path=path size="16" /> })}
                <span>{link.label}</span>
            </a>
        </li>
    }
}
