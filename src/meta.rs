//! Page metadata: title, description, keywords and social-card fields.
//!
//! [`page_meta`] is the single source of truth for everything that ends up in
//! the document `<head>`. It is pure and total: no I/O, no failure paths, the
//! same record on every call. Hosts that inject head tags themselves consume
//! [`PageMeta::head_fields`]; the built-in [`crate::components::PageDocument`]
//! reads the same record, so the two surfaces cannot disagree.

use serde::Serialize;

/// The page's head metadata record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// Document title, also the `og:title` / `twitter:title` value.
    pub title: &'static str,
    /// One-sentence mission statement, duplicated into the social cards.
    pub description: &'static str,
    /// Topical keywords in fixed order; joined with commas for the meta tag.
    pub keywords: &'static [&'static str],
    /// Social-card image URL.
    pub image: &'static str,
    /// Twitter card type.
    pub twitter_card: &'static str,
    /// Open Graph object type.
    pub og_type: &'static str,
}

impl PageMeta {
    /// Keywords joined as the single comma-separated meta value.
    pub fn keywords_joined(&self) -> String {
        self.keywords.join(",")
    }

    /// Every head field as an ordered, flat key/value mapping.
    ///
    /// The `og:*` and `twitter:*` title/description/image entries are derived
    /// duplicates of the top-level fields. The document title is not included
    /// here; it renders as the `<title>` element.
    pub fn head_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("description", self.description.to_string()),
            ("keywords", self.keywords_joined()),
            ("twitter:image", self.image.to_string()),
            ("twitter:card", self.twitter_card.to_string()),
            ("twitter:title", self.title.to_string()),
            ("twitter:description", self.description.to_string()),
            ("og:type", self.og_type.to_string()),
            ("og:title", self.title.to_string()),
            ("og:description", self.description.to_string()),
            ("og:image", self.image.to_string()),
        ]
    }
}

/// Build the landing page's metadata record.
///
/// # Example
///
/// ```rust
/// let meta = rta_landing::page_meta();
/// assert_eq!(meta.title, "RTA - Common Crawl for Google SERPs");
/// ```
pub fn page_meta() -> PageMeta {
    PageMeta {
        title: "RTA - Common Crawl for Google SERPs",
        description: "A central and shared platform for crawling and indexing google SERPs",
        keywords: &[
            "rank", "tracker", "keywords", "serp", "crawling", "indexing", "google", "common",
            "crawl",
        ],
        image: "https://ranktrackeralliance.com/favicon.png",
        twitter_card: "summary_large_image",
        og_type: "website",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn field<'a>(fields: &'a [(&'static str, String)], key: &str) -> &'a str {
        &fields
            .iter()
            .find(|(k, _)| *k == key)
            .unwrap_or_else(|| panic!("missing head field {key}"))
            .1
    }

    #[test]
    fn page_meta_is_idempotent() {
        assert_eq!(page_meta(), page_meta());
        assert_eq!(page_meta().head_fields(), page_meta().head_fields());
    }

    #[test]
    fn keywords_round_trip_in_fixed_order() {
        let meta = page_meta();
        let joined = meta.keywords_joined();
        let split: Vec<&str> = joined.split(',').collect();
        assert_eq!(
            split,
            vec![
                "rank", "tracker", "keywords", "serp", "crawling", "indexing", "google", "common",
                "crawl"
            ]
        );
    }

    #[test]
    fn social_card_fields_mirror_title_and_description() {
        let meta = page_meta();
        let fields = meta.head_fields();
        assert_eq!(field(&fields, "og:title"), meta.title);
        assert_eq!(field(&fields, "twitter:title"), meta.title);
        assert_eq!(field(&fields, "og:description"), meta.description);
        assert_eq!(field(&fields, "twitter:description"), meta.description);
        assert_eq!(field(&fields, "description"), meta.description);
        assert_eq!(field(&fields, "og:image"), meta.image);
        assert_eq!(field(&fields, "twitter:image"), meta.image);
    }

    #[test]
    fn head_field_order_is_fixed() {
        let keys: Vec<&str> = page_meta().head_fields().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![
                "description",
                "keywords",
                "twitter:image",
                "twitter:card",
                "twitter:title",
                "twitter:description",
                "og:type",
                "og:title",
                "og:description",
                "og:image",
            ]
        );
    }

    #[test]
    fn required_fields_are_non_empty() {
        let meta = page_meta();
        assert!(!meta.title.is_empty());
        assert!(!meta.description.is_empty());
        assert!(!meta.keywords.is_empty());
    }
}
