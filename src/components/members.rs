//! The member organizations panel.

use crate::data::MEMBER_LOGOS;
use crate::types::MemberLogo;
use leptos::prelude::*;

/// "Who runs the RTA?" - dark card listing the member logos.
#[component]
pub fn MemberPanel(
    /// Wrap each logo in an anchor to the member's site.
    linked: bool,
) -> impl IntoView {
    view! {
        <section class="member-panel">
            <h2 class="panel-title">"Who runs the RTA?"</h2>
            <p>
                "The RTA is a not-for profit LLC jointly operated by all "
                "members/parties. Current members include:"
            </p>
            <div class="member-logos">
                {MEMBER_LOGOS
                    .iter()
                    .map(|logo| view! { <LogoCell logo=logo linked=linked /> })
                    .collect_view()}
            </div>
        </section>
    }
}

/// One logo table row: a bare image, or an anchor-wrapped image when the
/// linked variant is active and the row carries an href.
#[component]
fn LogoCell(logo: &'static MemberLogo, linked: bool) -> impl IntoView {
    match (linked, logo.href) {
        (true, Some(href)) => view! {
            <a href=href target="_blank" class="member-logo-link">
                <img src=logo.image alt=logo.alt class="member-logo" />
            </a>
        }
        .into_any(),
        _ => view! { <img src=logo.image alt=logo.alt class="member-logo" /> }.into_any(),
    }
}
