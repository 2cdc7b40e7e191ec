//! # Attribute Filters
//!
//! Pages can be narrowed down along four boolean dimensions before sampling:
//!
//! | Dimension | Truthy when |
//! |-----------|-------------|
//! | `journal` | the page is a journal page |
//! | `dangling` | the page has no backing file |
//! | `namespace` | the page belongs to a namespace |
//! | `properties` | the page has page properties |
//!
//! The registry in [`spec`] is the single source of truth for the dimensions and
//! their predicates; [`filter`] holds the tri-state [`FilterMode`] and the
//! per-dimension [`PageFilters`] bundle.
//!
//! ```ignore
//! let filters = PageFilters::new().with(Dimension::Journal, FilterMode::None);
//! let kept: Vec<&Page> = pages.iter().filter(|p| filters.matches(p)).collect();
//! ```

mod filter;
mod spec;

pub use filter::{FilterMode, PageFilters};
pub use spec::{get_spec, AttributeSpec, Dimension, ATTRIBUTES};
