//! Single-page lookup over the plain `?term=` results page.
//!
//! EN→PT entries are bold `xx|word` labels; PT→EN entries are synset list
//! items. Either way the i-th visited entry takes its part-of-speech tag from
//! the i-th synset anchor on the same page.

use openword_types::Direction;

use crate::accumulator::ResultAccumulator;
use crate::dom::Page;
use crate::error::LookupError;
use crate::fetch::PageFetcher;
use crate::modifier::locate_modifier;
use crate::query::{TranslationQuery, TranslationResult};
use crate::search_url::{SearchMode, UrlBuilder};

pub(crate) const MODIFIER_SELECTOR: &str = "a[href^=synset]";
pub(crate) const BOLD_SELECTOR: &str = "b";
pub(crate) const SYNSET_ITEM_SELECTOR: &str = "li[class$=synset]";

/// Length of the language token in front of a bold entry's `|`
const ENTRY_PREFIX_CHARS: usize = 2;

pub async fn vanilla_search<F: PageFetcher + ?Sized>(
    fetcher: &F,
    urls: &UrlBuilder,
    query: &TranslationQuery,
) -> Result<TranslationResult, LookupError> {
    let url = urls.build(SearchMode::Vanilla, query.text());
    tracing::debug!("Vanilla search request: {url}");

    let body = match fetcher.fetch(&url).await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("Vanilla search for '{}' failed: {e}", query.text());
            return Ok(TranslationResult::default());
        }
    };

    extract_vanilla(&body, query.direction())
}

/// Extract annotated candidates from one vanilla results page
pub fn extract_vanilla(body: &str, direction: Direction) -> Result<TranslationResult, LookupError> {
    let page = Page::parse(body);
    let modifiers = page.texts(MODIFIER_SELECTOR)?;
    let mut results = ResultAccumulator::new();

    match direction {
        Direction::EnToPt => {
            for (modifier_index, text) in page.non_empty_texts(BOLD_SELECTOR)?.iter().enumerate() {
                if !text.contains('|') {
                    continue;
                }
                let word = entry_word(text);
                if word.chars().count() >= 2 {
                    tracing::debug!("Translation: {text}");
                    let modifier = locate_modifier(&modifiers, modifier_index)?;
                    if results.push(format!("{word} {modifier}")) {
                        break;
                    }
                }
            }
        }
        Direction::PtToEn => {
            for (modifier_index, text) in page.own_texts(SYNSET_ITEM_SELECTOR)?.iter().enumerate() {
                if text.chars().count() > 2 {
                    tracing::debug!("Translation: {text}");
                    let modifier = locate_modifier(&modifiers, modifier_index)?;
                    if results.push(format!("{text} {modifier}")) {
                        break;
                    }
                }
            }
        }
    }

    Ok(results.finish())
}

/// The word in a bold `xx|word` entry: the text after the two-character
/// prefix token, with the `|` delimiter and surrounding whitespace removed.
pub fn entry_word(text: &str) -> &str {
    let rest = match text.char_indices().nth(ENTRY_PREFIX_CHARS) {
        Some((offset, _)) => &text[offset..],
        None => "",
    };
    let rest = rest.trim_start();
    rest.strip_prefix('|').unwrap_or(rest).trim()
}
