//! Reconstruction of the human-readable project tree from a
//! `.unitypackage` archive.
//!
//! # Architecture
//!
//! - `resolve.rs` - container id -> real path resolution
//! - `build.rs` - output tree construction
//! - `extract.rs` - phase orchestration and staging lifecycle
//! - `options.rs` - caller-facing knobs and progress records
//!
//! Control flow is strictly linear: unpack, resolve every path, build
//! the tree, clean up staging. One run owns its staging directory for
//! its whole lifetime.

pub use error::{Error, Result};
pub use extract::extract;
pub use options::{ExtractOptions, Progress};
pub use resolve::{Container, ResolutionMap, resolve_staging};

mod build;
mod error;
mod extract;
mod options;
mod resolve;

#[cfg(test)]
pub(crate) mod testutil;
