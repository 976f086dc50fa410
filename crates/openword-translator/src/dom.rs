//! Thin query layer over a parsed search-results page.
//!
//! Text is whitespace-normalized the way a browser renders it: runs of
//! whitespace collapse to one space and the ends are trimmed.

use scraper::{ElementRef, Html, Selector};

use crate::error::LookupError;

pub struct Page {
    html: Html,
}

impl Page {
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    /// Full text of every element matching `selector`, in document order
    pub fn texts(&self, selector: &str) -> Result<Vec<String>, LookupError> {
        let selector = parse_selector(selector)?;
        Ok(self.html.select(&selector).map(full_text).collect())
    }

    /// Like `texts`, but elements without any text are left out
    pub fn non_empty_texts(&self, selector: &str) -> Result<Vec<String>, LookupError> {
        let mut texts = self.texts(selector)?;
        texts.retain(|text| !text.is_empty());
        Ok(texts)
    }

    /// Text of each match's direct text children, ignoring nested elements
    pub fn own_texts(&self, selector: &str) -> Result<Vec<String>, LookupError> {
        let selector = parse_selector(selector)?;
        Ok(self.html.select(&selector).map(own_text).collect())
    }
}

fn parse_selector(selector: &str) -> Result<Selector, LookupError> {
    Selector::parse(selector).map_err(|e| LookupError::Selector {
        selector: selector.to_string(),
        reason: format!("{:?}", e),
    })
}

fn full_text(element: ElementRef<'_>) -> String {
    normalize_whitespace(&element.text().collect::<String>())
}

fn own_text(element: ElementRef<'_>) -> String {
    let own: String = element
        .children()
        .filter_map(|child| child.value().as_text())
        .map(|text| &**text)
        .collect();
    normalize_whitespace(&own)
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_own_text_skips_descendants() {
        let page = Page::parse(r#"<ul><li class="x synset">Hello<span>ignored</span></li></ul>"#);
        assert_eq!(page.own_texts("li[class$=synset]").unwrap(), ["Hello"]);
        assert_eq!(page.texts("li").unwrap(), ["Helloignored"]);
    }

    #[test]
    fn test_whitespace_is_collapsed() {
        let page = Page::parse("<p><b>  pt |\n   casa  </b><b> </b></p>");
        assert_eq!(page.texts("b").unwrap(), ["pt | casa", ""]);
        assert_eq!(page.non_empty_texts("b").unwrap(), ["pt | casa"]);
    }

    #[test]
    fn test_attribute_prefix_and_suffix() {
        let page = Page::parse(
            r#"<a href="synset-1">n</a><a href="/other">x</a><a href="synset-2">v</a>
               <li class="synset-no">a</li><li class="pos synset">b</li>"#,
        );
        assert_eq!(page.texts("a[href^=synset]").unwrap(), ["n", "v"]);
        assert_eq!(page.own_texts("li[class$=synset]").unwrap(), ["b"]);
    }

    #[test]
    fn test_bad_selector() {
        let page = Page::parse("<p></p>");
        assert!(matches!(
            page.texts("a[href^="),
            Err(LookupError::Selector { .. })
        ));
    }
}
