//! Pages system — one plain-text file per named page.
//!
//! The filesystem is the single source of truth: no cache, no index,
//! no metadata sidecar. Every operation here is a single filesystem call.

pub mod file_ops;
