//! Page footer: link groups plus the clock-derived copyright line.

use super::Icon;
use crate::data::FOOTER_GROUPS;
use crate::types::FooterLinkGroup;
use leptos::prelude::*;

/// Dark footer band listing the link groups and the copyright line.
#[component]
pub fn Footer(
    /// Calendar year printed in the copyright line.
    year: i32,
) -> impl IntoView {
    let copyright = format!("© {} Rank Tracker Alliance LLC", year);
    view! {
        <footer class="footer">
            <div class="footer-inner">
                {FOOTER_GROUPS
                    .iter()
                    .map(|group| view! { <FooterLinks group=group /> })
                    .collect_view()}
            </div>
            <p class="footer-copyright">{copyright}</p>
        </footer>
    }
}

/// One footer group: optional heading and rule, then its links in order.
#[component]
fn FooterLinks(group: &'static FooterLinkGroup) -> impl IntoView {
    view! {
        <div class="footer-group">
            {group.label.map(|label| view! {
                <div class="footer-group-label">{label}</div>
                <div class="footer-rule"></div>
            })}
            {group
                .links
                .iter()
                .map(|link| view! {
                    <div class="footer-link-row">
                        <a href=link.href class="footer-link" target=link.target.attr()>
                            {link.icon.map(|path| view! { <Icon path=path size="16" /> })}
                            <span>{link.label}</span>
                        </a>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
