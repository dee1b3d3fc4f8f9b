//! The three informational cards: what the alliance is, why it matters, and
//! how the crawl pipeline works. Order is content order; the page renders
//! them exactly as composed here.

use leptos::prelude::*;

/// Titled white card wrapping a panel's body.
#[component]
pub fn InfoPanel(
    /// Panel heading
    title: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="info-panel">
            <h2 class="panel-title">{title}</h2>
            {children()}
        </section>
    }
}

/// "What is the RTA?" - the one-paragraph mission panel.
#[component]
pub fn WhatIs() -> impl IntoView {
    view! {
        <InfoPanel title="What is the RTA?">
            <p>
                "The "
                <em>"Rank Tracker Alliance"</em>
                " is a joint effort by interested parties to share the responsibilities "
                "and cost of SERP retrieval for the most common keywords across the web."
            </p>
        </InfoPanel>
    }
}

/// "Why is the RTA important?" - the rationale panel with its four points.
#[component]
pub fn WhyItMatters() -> impl IntoView {
    view! {
        <InfoPanel title="Why is the RTA important?">
            <p>
                "Every rank tracker wanting to provide a global index of common SERP "
                "information is currently required to build their own keyword list and "
                "ultimately collect the same SERP HTML as every other rank tracker."
            </p>
            <ul class="panel-list">
                <li>"Google Search HTML is a commodity"</li>
                <li>"Collection is expensive and difficult at scale"</li>
                <li>"Storing the HTML is expensive"</li>
                <li>
                    "Product differentiation is generally not based on collection, but "
                    "instead parsing, querying and reporting"
                </li>
            </ul>
        </InfoPanel>
    }
}

/// "How does it work?" - the pipeline panel with the five scheduling steps.
#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <InfoPanel title="How does it work?">
            <p>
                "The RTA maintains a curated list of billions of keywords that are "
                "sorted by search volume each month. Depending on a keyword's search "
                "volume and various other factors, it is scheduled either daily, "
                "weekly, monthly or even at longer intervals for retrieval by an "
                "edge-distributed cloud function task queue."
            </p>
            <p>"When a keyword is scheduled:"</p>
            <ul class="panel-list">
                <li>"Its HTML is requested and downloaded via one of our SERP providers"</li>
                <li>"The HTML is normalized and processed for consistency and QA"</li>
                <li>"The previous entry's HTML is diffed as a list of delta changes"</li>
                <li>"The HTML is compressed and stored for cost-efficiency and high availability"</li>
                <li>"PubSub/SNS notifications are dispatched to subscribers"</li>
            </ul>
            <p>
                "All keyword data and HTML is stored long-term and made available to "
                "subscribers through a lightning fast edge-distributed API."
            </p>
        </InfoPanel>
    }
}
