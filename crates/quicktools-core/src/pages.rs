//! Page-range parsing for the PDF tools.
//!
//! The delete-pages and merge tools take a page selection like
//! `"1-3, 5, 8-10"`: comma-separated tokens, each either a single 1-based
//! page number or a hyphenated inclusive range. Parsing happens here; the
//! actual PDF mutation is done by the page's PDF library, which only needs
//! the resulting page lists.

use std::collections::BTreeSet;
use thiserror::Error;

/// Errors for page selection parsing and page-list computation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    /// A token was not a page number or `start-end` range.
    #[error("Invalid page token: {0:?}")]
    InvalidToken(String),

    /// A range ran backwards, like `5-3`.
    #[error("Invalid page range: start {start} > end {end}")]
    ReversedRange { start: u32, end: u32 },

    /// A page number exceeded the document's page count.
    #[error("Page {page} is out of bounds (document has {page_count} pages)")]
    OutOfBounds { page: u32, page_count: u32 },

    /// The selection contained no pages at all.
    #[error("No pages selected")]
    Empty,

    /// The operation would leave the document without any pages.
    #[error("Cannot delete all {page_count} pages")]
    WouldDeleteAllPages { page_count: u32 },
}

/// Parse a selection like `"1-3, 5, 8-10"` into sorted unique page numbers.
///
/// Pages are 1-based. Whitespace around tokens is ignored and duplicates
/// collapse. Every page must lie within `1..=page_count`.
pub fn parse_page_ranges(input: &str, page_count: u32) -> Result<Vec<u32>, PageError> {
    let mut pages = BTreeSet::new();

    for part in input.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        if let Some((start, end)) = part.split_once('-') {
            let start = parse_page(start)?;
            let end = parse_page(end)?;

            if start > end {
                return Err(PageError::ReversedRange { start, end });
            }
            check_bounds(end, page_count)?;

            for page in start..=end {
                pages.insert(page);
            }
        } else {
            let page = parse_page(part)?;
            check_bounds(page, page_count)?;
            pages.insert(page);
        }
    }

    if pages.is_empty() {
        return Err(PageError::Empty);
    }

    Ok(pages.into_iter().collect())
}

fn parse_page(token: &str) -> Result<u32, PageError> {
    let token = token.trim();
    match token.parse::<u32>() {
        Ok(page) if page >= 1 => Ok(page),
        _ => Err(PageError::InvalidToken(token.to_string())),
    }
}

fn check_bounds(page: u32, page_count: u32) -> Result<(), PageError> {
    if page > page_count {
        return Err(PageError::OutOfBounds { page, page_count });
    }
    Ok(())
}

/// Compute the pages that survive deleting `selection` from a document.
///
/// Returns the surviving 1-based page numbers in document order. Deleting
/// every page is refused; the tool never emits an empty document.
pub fn pages_after_delete(page_count: u32, selection: &str) -> Result<Vec<u32>, PageError> {
    let deleted = parse_page_ranges(selection, page_count)?;

    if deleted.len() as u32 == page_count {
        return Err(PageError::WouldDeleteAllPages { page_count });
    }

    // deleted is sorted, so a merge-style scan avoids a set lookup per page
    let mut survivors = Vec::with_capacity((page_count as usize) - deleted.len());
    let mut next_deleted = deleted.iter().copied().peekable();
    for page in 1..=page_count {
        if next_deleted.peek() == Some(&page) {
            next_deleted.next();
        } else {
            survivors.push(page);
        }
    }

    Ok(survivors)
}

/// Flatten per-document page counts into the merged page order.
///
/// Each entry is `(document index, 1-based page number)` in the order the
/// merged output should contain them. Empty documents contribute nothing.
pub fn merge_order(page_counts: &[u32]) -> Vec<(usize, u32)> {
    let total: usize = page_counts.iter().map(|&c| c as usize).sum();
    let mut order = Vec::with_capacity(total);
    for (doc, &count) in page_counts.iter().enumerate() {
        for page in 1..=count {
            order.push((doc, page));
        }
    }
    order
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: parsed selections are sorted, unique, and in bounds.
        #[test]
        fn prop_parsed_pages_sorted_unique_bounded(
            page_count in 1u32..=50,
            tokens in prop::collection::vec((1u32..=50, 1u32..=50), 1..8),
        ) {
            let input = tokens
                .iter()
                .map(|(a, b)| {
                    let (lo, hi) = (a.min(b), a.max(b));
                    format!("{}-{}", lo, hi)
                })
                .collect::<Vec<_>>()
                .join(",");

            match parse_page_ranges(&input, page_count) {
                Ok(pages) => {
                    prop_assert!(pages.windows(2).all(|w| w[0] < w[1]));
                    prop_assert!(pages.iter().all(|&p| p >= 1 && p <= page_count));
                }
                Err(PageError::OutOfBounds { page, .. }) => {
                    prop_assert!(page > page_count);
                }
                Err(e) => prop_assert!(false, "unexpected error: {e}"),
            }
        }

        /// Property: deleted and surviving pages partition the document.
        #[test]
        fn prop_delete_partitions_document(
            page_count in 2u32..=40,
            page in 1u32..=40,
        ) {
            prop_assume!(page <= page_count);

            let selection = page.to_string();
            // page_count >= 2, so deleting one page never empties the document
            let result = pages_after_delete(page_count, &selection);
            prop_assert!(result.is_ok(), "unexpected error: {:?}", result);
            let survivors = result.unwrap();

            prop_assert_eq!(survivors.len() as u32, page_count - 1);
            prop_assert!(!survivors.contains(&page));
            prop_assert!(survivors.windows(2).all(|w| w[0] < w[1]));
        }

        /// Property: merge order length is the sum of the page counts.
        #[test]
        fn prop_merge_order_length(
            counts in prop::collection::vec(0u32..=20, 0..6),
        ) {
            let order = merge_order(&counts);
            let total: usize = counts.iter().map(|&c| c as usize).sum();
            prop_assert_eq!(order.len(), total);
        }
    }
}
