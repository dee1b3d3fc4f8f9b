//! Root document component: the complete HTML page.

use super::{CtaPanel, Footer, Hero, HowItWorks, MemberPanel, WhatIs, WhyItMatters};
use crate::meta::page_meta;
use crate::styles::PAGE_CSS;
use crate::types::PageOptions;
use leptos::prelude::*;

/// The complete HTML document for the landing page.
///
/// Head tags come from [`page_meta`]; body sections render in content order:
/// hero, the three info panels, members, the optional call-to-action, footer.
#[component]
pub fn PageDocument(options: PageOptions, year: i32) -> impl IntoView {
    let meta = page_meta();
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{meta.title}</title>
                {meta
                    .head_fields()
                    .into_iter()
                    .map(|(key, value)| {
                        // Open Graph uses `property`, everything else `name`
                        if key.starts_with("og:") {
                            leptos::html::meta()
                                .attr("property", key)
                                .attr("content", value)
                                .into_any()
                        } else {
                            view! { <meta name=key content=value /> }.into_any()
                        }
                    })
                    .collect_view()}
                <style>{PAGE_CSS}</style>
            </head>
            <body>
                <Hero />
                <main class="page-main">
                    <WhatIs />
                    <WhyItMatters />
                    <HowItWorks />
                    <MemberPanel linked=options.member_logos_linked />
                    {if options.include_cta_panel {
                        view! { <CtaPanel /> }.into_any()
                    } else {
                        view! { "" }.into_any()
                    }}
                </main>
                <Footer year=year />
            </body>
        </html>
    }
}
