//! Link checking: probing single URLs and aggregating whole documents
//!
//! This module contains the checking pipeline, including:
//! - HTTP probing with retry and outcome classification
//! - Per-document aggregation with rate limiting
//! - The immutable run context shared by every component
//! - Sequential coordination across documents

mod context;
mod coordinator;
mod module;
mod prober;

pub use context::RunContext;
pub use coordinator::{discover_files, Coordinator};
pub use module::{check_module, module_name};
pub use prober::{build_http_client, Prober, ACCEPTED_STATUS_CODES};
