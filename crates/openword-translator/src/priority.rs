//! Multi-page lookup: concept-scoped pages first, then word-count hinted
//! pages from the widest hint down.

use openword_types::PriorityPolicy;

use crate::accumulator::ResultAccumulator;
use crate::dom::Page;
use crate::error::LookupError;
use crate::fetch::PageFetcher;
use crate::query::{TranslationQuery, TranslationResult};
use crate::search_url::{CONCEPTS, SearchMode, UrlBuilder, WORD_COUNT_HINTS};
use crate::vanilla::{BOLD_SELECTOR, entry_word};

/// Direction is not consulted: every page is read as bold `xx|word` entries.
pub async fn priority_search<F: PageFetcher + ?Sized>(
    fetcher: &F,
    urls: &UrlBuilder,
    query: &TranslationQuery,
    policy: PriorityPolicy,
) -> Result<TranslationResult, LookupError> {
    let mut results = ResultAccumulator::new();

    let modes = CONCEPTS
        .iter()
        .copied()
        .map(SearchMode::Concept)
        .chain(WORD_COUNT_HINTS.iter().copied().map(SearchMode::WordCount));

    for mode in modes {
        let url = urls.build(mode, query.text());
        tracing::debug!("Priority search request ({mode}): {url}");

        let body = match fetcher.fetch(&url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Priority search page ({mode}) failed: {e}");
                continue;
            }
        };

        let Some(added) = collect_bold_entries(&body, &mut results)? else {
            tracing::debug!("No entries on {mode} page");
            continue;
        };

        if results.is_full() || (policy == PriorityPolicy::FirstMatch && added > 0) {
            tracing::debug!("Priority search settled on {mode} page with {added} entries");
            break;
        }
    }

    Ok(results.finish())
}

/// Push every pipe-delimited bold entry of `body`. Returns `None` when the
/// page has no bold elements at all, otherwise how many entries were added.
fn collect_bold_entries(
    body: &str,
    results: &mut ResultAccumulator,
) -> Result<Option<usize>, LookupError> {
    let page = Page::parse(body);
    let texts = page.non_empty_texts(BOLD_SELECTOR)?;
    if texts.is_empty() {
        return Ok(None);
    }

    let before = results.len();
    for text in texts.iter().filter(|text| text.contains('|')) {
        let word = entry_word(text);
        if word.is_empty() {
            continue;
        }
        if results.push(word) {
            break;
        }
    }

    Ok(Some(results.len() - before))
}
