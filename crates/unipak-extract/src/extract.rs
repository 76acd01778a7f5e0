use std::fs;
use std::path::{Path, PathBuf};

use crate::build::build_tree;
use crate::error::{Error, Result};
use crate::options::ExtractOptions;
use crate::resolve::resolve_staging;

const STAGING_PREFIX: &str = "unipak-";

/// Extract the package at `src`, returning the created output directory.
///
/// The output directory is `(output_base_dir | src's directory) / stem`,
/// where stem is the source filename without its extension. If it
/// already exists the run refuses up front unless `force` is set, in
/// which case it is removed first.
///
/// Phases run strictly in order: unpack into a per-run staging tempdir,
/// resolve container metadata, create the output root, move payloads
/// into place. Staging is always removed, on failure too.
pub fn extract(src: &Path, options: &ExtractOptions) -> Result<PathBuf> {
    let output_dir = output_dir_for(src, options.output_base_dir.as_deref());

    if output_dir.exists() {
        if !options.force {
            return Err(Error::DestinationExists { path: output_dir });
        }
        fs::remove_dir_all(&output_dir).map_err(|e| Error::Filesystem {
            action: "remove",
            path: output_dir.clone(),
            source: e,
        })?;
    }

    let staging = tempfile::Builder::new()
        .prefix(STAGING_PREFIX)
        .tempdir()
        .map_err(|e| Error::Filesystem {
            action: "create staging dir in",
            path: std::env::temp_dir(),
            source: e,
        })?;

    unipak_archive::unpack_package(src, staging.path())?;
    let map = resolve_staging(staging.path())?;

    fs::create_dir_all(&output_dir).map_err(|e| Error::Filesystem {
        action: "create",
        path: output_dir.clone(),
        source: e,
    })?;
    build_tree(&map, staging.path(), &output_dir, options)?;

    // Drop would remove it anyway; closing surfaces cleanup failures.
    let staging_path = staging.path().to_path_buf();
    staging.close().map_err(|e| Error::Filesystem {
        action: "remove staging dir",
        path: staging_path,
        source: e,
    })?;

    Ok(output_dir)
}

fn output_dir_for(src: &Path, base: Option<&Path>) -> PathBuf {
    match base {
        Some(base) => base.join(src.file_stem().unwrap_or(src.as_os_str())),
        None => src.with_extension(""),
    }
}
