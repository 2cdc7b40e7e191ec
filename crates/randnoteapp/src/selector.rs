//! # The Selector
//!
//! Turns a full page list plus a set of options into a bounded, optionally
//! filtered, optionally sorted, duplicate-free random subset.
//!
//! ## Pipeline
//!
//! 1. **Population check**: an empty input is reported as
//!    [`EmptySelection::NoPages`].
//! 2. **Filtering**: every dimension of [`PageFilters`] is applied as an
//!    independent predicate (`include` is a no-op). If nothing survives, that is
//!    reported as [`EmptySelection::NoneAfterFiltering`], a different condition
//!    from the first so callers can tell the user which one happened.
//! 3. **Sampling**: a population no larger than the requested count is returned
//!    whole. Otherwise `count` pages are drawn uniformly without replacement with
//!    a truncated partial shuffle over indexes, never by sorting with a random
//!    comparator.
//! 4. **Ordering**: with `sort` on, pages are ordered by lowercased display name
//!    (stable, so equal names keep their sampled order). Without it the sampled
//!    order is kept, which carries no meaning.
//!
//! ## Purity
//!
//! The selector borrows the caller's slice and returns references into it. It
//! never reorders or mutates the input; the only outside influence is the
//! injected random source, which makes runs reproducible with a seeded RNG.

use crate::attributes::PageFilters;
use crate::count::Count;
use crate::model::Page;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
use tracing::debug;

/// The two ways a selection can come out empty. Neither is a failure of the
/// program; both are worth telling the user about.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptySelection {
    #[error("No pages found")]
    NoPages,

    #[error("No pages found after filtering")]
    NoneAfterFiltering,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectOptions {
    pub count: Count,
    pub sort: bool,
    pub filters: PageFilters,
}

impl SelectOptions {
    pub fn new(count: Count) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    pub fn sorted(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_filters(mut self, filters: PageFilters) -> Self {
        self.filters = filters;
        self
    }
}

/// Pages that pass every active filter, in input order.
pub fn filter_pages<'a>(pages: &'a [Page], filters: &PageFilters) -> Vec<&'a Page> {
    pages.iter().filter(|page| filters.matches(page)).collect()
}

/// Run the full pipeline: filter, sample, order.
pub fn select<'a, R>(
    pages: &'a [Page],
    options: &SelectOptions,
    rng: &mut R,
) -> Result<Vec<&'a Page>, EmptySelection>
where
    R: Rng + ?Sized,
{
    if pages.is_empty() {
        return Err(EmptySelection::NoPages);
    }

    let population = filter_pages(pages, &options.filters);
    debug!(
        total = pages.len(),
        filtered = population.len(),
        "filtered page population"
    );
    if population.is_empty() {
        return Err(EmptySelection::NoneAfterFiltering);
    }

    let count = options.count.get();
    let mut selection: Vec<&Page> = if population.len() <= count {
        population
    } else {
        population.choose_multiple(rng, count).copied().collect()
    };

    if options.sort {
        sort_by_display_name(&mut selection);
    }

    debug!(selected = selection.len(), sorted = options.sort, "selection ready");
    Ok(selection)
}

/// Stable, case-insensitive sort by display name.
pub fn sort_by_display_name(pages: &mut [&Page]) {
    pages.sort_by_cached_key(|page| page.display_name().to_lowercase());
}
