//! Result types produced by a checking run
//!
//! All of these are value objects assembled bottom-up: a `LinkResult` per probe,
//! a `ModuleResult` per document.

mod link_result;
mod module_result;

pub use link_result::{LinkResult, LinkStatus};
pub use module_result::ModuleResult;
