//! `<img>` reference extraction from search result markup.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use tracing::debug;

#[allow(clippy::expect_used)]
static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img").expect("static selector is valid"));

/// Extracts image references from an HTML payload.
///
/// Visits every `<img>` element in document order and collects its `src`
/// attribute when present and non-empty. Malformed or image-free input yields
/// an empty vector; this function never fails. References are returned as-is,
/// with no deduplication and no validation that they are reachable URLs.
#[must_use]
pub fn extract_image_refs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let refs: Vec<String> = document
        .select(&IMG_SELECTOR)
        .filter_map(|element| element.value().attr("src"))
        .filter(|src| !src.is_empty())
        .map(str::to_string)
        .collect();

    debug!(count = refs.len(), "extracted image references");
    refs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_src_attributes_in_document_order() {
        let html = r#"
            <html><body>
                <img src="https://example.com/a.jpg">
                <p>text</p>
                <img src="https://example.com/b.png" alt="b">
                <div><img src="https://example.com/c.gif"></div>
            </body></html>
        "#;
        let refs = extract_image_refs(html);
        assert_eq!(
            refs,
            vec![
                "https://example.com/a.jpg",
                "https://example.com/b.png",
                "https://example.com/c.gif",
            ]
        );
    }

    #[test]
    fn test_skips_img_without_src() {
        let html = r#"<img alt="no source"><img src="https://example.com/a.jpg">"#;
        let refs = extract_image_refs(html);
        assert_eq!(refs, vec!["https://example.com/a.jpg"]);
    }

    #[test]
    fn test_skips_empty_src() {
        let html = r#"<img src=""><img src="https://example.com/a.jpg">"#;
        let refs = extract_image_refs(html);
        assert_eq!(refs, vec!["https://example.com/a.jpg"]);
    }

    #[test]
    fn test_image_free_page_yields_empty() {
        let refs = extract_image_refs("<html><body><p>no images here</p></body></html>");
        assert!(refs.is_empty());
    }

    #[test]
    fn test_malformed_html_does_not_fail() {
        // html5ever recovers from unclosed tags; the img still parses
        let refs = extract_image_refs("<div><img src=\"x.jpg\"<p>broken");
        assert!(refs.len() <= 1);
    }

    #[test]
    fn test_empty_input_yields_empty() {
        assert!(extract_image_refs("").is_empty());
    }
}
