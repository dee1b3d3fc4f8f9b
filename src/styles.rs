//! CSS for the landing page, inlined into the document head.
//!
//! Presentational only; nothing in the render contract depends on these
//! class definitions. To extend the stylesheet:
//!
//! ```rust
//! use rta_landing::styles::PAGE_CSS;
//!
//! let my_css = ".custom-class { color: red; }";
//! let combined = format!("{}\n{}", PAGE_CSS, my_css);
//! ```

/// Complete stylesheet: blue radial-gradient hero, white info cards,
/// dark member and footer bands, with a dark-mode variant for the cards.
pub const PAGE_CSS: &str = r#"
:root {
    --blue-deep: #0039C6;
    --blue-bright: #00A2FF;
    --card-bg: #ffffff;
    --card-bg-dark: #1f2937;
    --band-bg: #1f2937;
    --band-bg-dark: #374151;
    --text: #111827;
    --text-inverse: #ffffff;
}

* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    color: var(--text);
    line-height: 1.6;
}

.hero {
    position: relative;
    color: var(--text-inverse);
    background-color: var(--blue-deep);
    background-image: radial-gradient(50% 100%, var(--blue-bright) 0%, var(--blue-deep) 100%);
}

.nav {
    max-width: 768px;
    margin: 0 auto;
}

.nav-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 2rem;
}

.nav-brand {
    padding: 0.25rem 0.5rem;
    font-size: 1.25rem;
    font-weight: 700;
    color: inherit;
    text-decoration: none;
}

.nav-links {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    list-style: none;
}

.nav-item {
    display: inline-block;
}

.nav-link {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.25rem 0.5rem;
    border-radius: 0.375rem;
    color: inherit;
    text-decoration: none;
    transition: background-color 0.15s;
}

.nav-link:hover {
    background-color: rgba(17, 24, 39, 0.2);
}

.hero-center {
    margin-top: -5rem;
    padding: 5rem;
    text-align: center;
}

.hero-image {
    width: 300px;
    max-width: 100%;
    margin: 0 auto 2.5rem;
}

.hero-tagline {
    display: inline-block;
    padding: 0.5rem 1rem;
    font-size: 1.25rem;
    font-weight: 200;
    border-radius: 1rem;
    background-color: rgba(0, 0, 0, 0.4);
}

.page-main {
    padding-bottom: 5rem;
}

.info-panel,
.member-panel,
.cta-panel {
    position: relative;
    max-width: 768px;
    margin: 1rem 0.5rem 0;
    padding: 2rem;
    border-radius: 0.375rem;
    background-color: var(--card-bg);
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
}

.info-panel:first-child {
    margin-top: -2.5rem;
}

.member-panel,
.cta-panel {
    background-color: var(--band-bg);
    color: var(--text-inverse);
}

.panel-title {
    margin-bottom: 1rem;
    font-size: 1.875rem;
    font-weight: 400;
    text-align: center;
}

.panel-list {
    margin: 0.5rem 0 1rem;
    padding-left: 2rem;
    list-style: disc;
}

.member-logos {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: center;
    gap: 3rem;
    margin-top: 2rem;
}

.member-logo {
    width: 250px;
    max-width: 100%;
}

.btn {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    border-radius: 0.375rem;
    text-decoration: none;
}

.btn-primary {
    background-color: var(--blue-deep);
    color: var(--text-inverse);
}

.btn-primary:hover {
    background-color: var(--blue-bright);
}

.footer {
    margin-top: 5rem;
    padding-bottom: 2rem;
    background-color: var(--band-bg);
    color: var(--text-inverse);
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
}

.footer-inner {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
    max-width: 768px;
    margin: 0 auto;
    padding: 3rem 1rem;
}

.footer-group {
    flex: 1;
}

.footer-group-label {
    margin-bottom: 0.5rem;
    font-weight: 100;
}

.footer-rule {
    height: 1px;
    margin-bottom: 0.5rem;
    background-color: rgba(255, 255, 255, 0.3);
}

.footer-link {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    color: inherit;
    text-decoration: none;
}

.footer-link:hover {
    text-decoration: underline;
}

.footer-copyright {
    margin-top: 1rem;
    font-size: 0.875rem;
    text-align: center;
    opacity: 0.2;
}

@media (min-width: 768px) {
    .info-panel,
    .member-panel,
    .cta-panel {
        margin-left: auto;
        margin-right: auto;
    }
}

@media (prefers-color-scheme: dark) {
    body {
        background-color: #111827;
        color: #e5e7eb;
    }

    .info-panel {
        background-color: var(--card-bg-dark);
        color: var(--text-inverse);
    }

    .member-panel,
    .cta-panel {
        background-color: var(--band-bg-dark);
    }
}
"#;
