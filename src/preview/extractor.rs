use scraper::{Html, Selector};

use crate::preview::MetaItem;

/// Result of one extraction pass: the document title (if any) and every
/// `og:`-prefixed meta entry in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPage {
    pub title: Option<String>,
    pub items: Vec<MetaItem>,
}

/// Parses fetched markup and pulls out Open Graph metadata.
///
/// The parse is tolerant: malformed input yields a best-effort document
/// tree, never an error. Missing elements simply produce an empty result;
/// degradation is the card renderer's job.
#[derive(Clone)]
pub struct MetadataExtractor {
    title_selector: Selector,
    meta_selector: Selector,
}

impl Default for MetadataExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataExtractor {
    pub fn new() -> Self {
        Self {
            title_selector: Selector::parse("title").expect("static selector"),
            meta_selector: Selector::parse("meta").expect("static selector"),
        }
    }

    pub fn extract(&self, html: &str) -> ExtractedPage {
        let document = Html::parse_document(html);

        let title = document
            .select(&self.title_selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty());

        // Every meta element, in document order. The name attribute wins
        // over property when both are present; elements with neither are
        // skipped. Only keys carrying the og: namespace prefix are kept,
        // and that is a prefix match, not a full-key match.
        let mut items = Vec::new();
        for element in document.select(&self.meta_selector) {
            let key = match element.attr("name").or_else(|| element.attr("property")) {
                Some(key) => key,
                None => continue,
            };
            if !key.starts_with("og:") {
                continue;
            }
            let value = element.attr("content").unwrap_or_default();
            items.push(MetaItem::new(key, value));
        }

        ExtractedPage { title, items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> ExtractedPage {
        MetadataExtractor::new().extract(html)
    }

    #[test]
    fn test_extracts_title_and_items_in_document_order() {
        let page = extract(
            r#"<html><head>
                <title>Example Domain</title>
                <meta property="og:title" content="A">
                <meta name="og:title" content="B">
                <meta property="og:image" content="https://example.com/a.png">
            </head><body></body></html>"#,
        );

        assert_eq!(page.title.as_deref(), Some("Example Domain"));
        assert_eq!(
            page.items,
            vec![
                MetaItem::new("og:title", "A"),
                MetaItem::new("og:title", "B"),
                MetaItem::new("og:image", "https://example.com/a.png"),
            ]
        );
    }

    #[test]
    fn test_name_attribute_wins_over_property() {
        let page = extract(r#"<meta name="og:title" property="og:description" content="x">"#);
        assert_eq!(page.items, vec![MetaItem::new("og:title", "x")]);
    }

    #[test]
    fn test_non_og_and_keyless_meta_are_skipped() {
        let page = extract(
            r#"<head>
                <meta charset="utf-8">
                <meta name="viewport" content="width=device-width">
                <meta name="description" content="plain description">
                <meta content="orphan">
                <meta property="og:type" content="website">
            </head>"#,
        );
        assert_eq!(page.items, vec![MetaItem::new("og:type", "website")]);
    }

    #[test]
    fn test_prefix_match_is_broad() {
        // og:whatever passes the filter; it is a 3-byte prefix check.
        let page = extract(r#"<meta property="og:video:width" content="640">"#);
        assert_eq!(page.items, vec![MetaItem::new("og:video:width", "640")]);
    }

    #[test]
    fn test_missing_content_yields_empty_value() {
        let page = extract(r#"<meta property="og:title">"#);
        assert_eq!(page.items, vec![MetaItem::new("og:title", "")]);
    }

    #[test]
    fn test_malformed_html_does_not_error() {
        let page =
            extract("<html><head><title>T</title><meta property=\"og:title\" content=\"A\"><div><p></html");
        assert_eq!(page.title.as_deref(), Some("T"));
        assert_eq!(page.items, vec![MetaItem::new("og:title", "A")]);
    }

    #[test]
    fn test_empty_input() {
        let page = extract("");
        assert_eq!(page.title, None);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_empty_title_element_is_none() {
        let page = extract("<title>   </title>");
        assert_eq!(page.title, None);
    }
}
