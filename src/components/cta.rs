//! Optional membership call-to-action panel, gated by
//! [`crate::types::PageOptions::include_cta_panel`].

use super::{Icon, ICON_GITHUB};
use leptos::prelude::*;

/// Call-to-action card inviting new members to join the alliance.
#[component]
pub fn CtaPanel() -> impl IntoView {
    view! {
        <section class="cta-panel">
            <h2 class="panel-title">"Interested in joining?"</h2>
            <ul class="panel-list">
                <li>"Share retrieval costs instead of duplicating them"</li>
                <li>"Access the shared SERP archive from day one"</li>
                <li>"Help steer the keyword schedule and retention policy"</li>
            </ul>
            <a
                href="https://github.com/tannerlinsley"
                target="_blank"
                class="btn btn-primary"
            >
                <Icon path=ICON_GITHUB size="18" />
                <span>"Join us on Github"</span>
            </a>
        </section>
    }
}
