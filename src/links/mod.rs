//! Link discovery and filtering
//!
//! `extract_links` pulls candidate URLs out of document text and `SkipFilter`
//! decides which of them are exempt from probing.

mod extractor;
mod skip;

pub use extractor::extract_links;
pub use skip::{SkipFilter, DEFAULT_SKIP_REASON};
