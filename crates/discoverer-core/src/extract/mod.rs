//! Metadata extraction from captured responses.
//!
//! Two independent extractors: one over the captured HTML (title and
//! description), one over the captured header JSON (the date the response was
//! saved).

mod page;
mod saved;

pub use page::{extract_page, PageMetadata};
pub use saved::{extract_saved_date, SaveTimestamp};
