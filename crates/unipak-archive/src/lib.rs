//! Gzip+tar container handling for `.unitypackage` archives.
//!
//! A unity package is a gzip-compressed tarball with a flat hierarchy of
//! opaque per-asset directories. This crate only gets the raw contents
//! onto disk; interpreting the per-asset metadata is the caller's job.

pub use error::{Error, Result};
pub use unpack::{is_package_header, unpack_package};

mod error;
mod unpack;
