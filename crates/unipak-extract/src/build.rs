use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::options::{ExtractOptions, Progress};
use crate::resolve::{PAYLOAD_MARKER, ResolutionMap};

/// The archive marks every payload executable; extracted files get
/// owner-rw, group/other-read instead.
#[cfg(unix)]
const OUTPUT_MODE: u32 = 0o644;

/// Replay the resolution map under `output_root`, moving each payload
/// out of staging into its real location.
///
/// A failure aborts the remaining moves; files already placed stay put.
pub fn build_tree(
    map: &ResolutionMap,
    staging: &Path,
    output_root: &Path,
    options: &ExtractOptions,
) -> Result<()> {
    for (id, real_path) in map.iter() {
        let dest = output_root.join(real_path);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::Filesystem {
                action: "create",
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let source = staging.join(id).join(PAYLOAD_MARKER);
        move_file(&source, &dest)?;
        normalize_permissions(&dest)?;

        if let Some(ref callback) = options.on_progress {
            callback(&Progress {
                id: id.to_string(),
                real_path: real_path.to_string(),
            });
        }
    }
    Ok(())
}

// Staging is a tempdir and may sit on a different filesystem than the
// destination, in which case rename fails and we fall back to copy.
fn move_file(source: &Path, dest: &Path) -> Result<()> {
    if fs::rename(source, dest).is_ok() {
        return Ok(());
    }
    fs::copy(source, dest).map_err(|e| Error::Filesystem {
        action: "move payload to",
        path: dest.to_path_buf(),
        source: e,
    })?;
    fs::remove_file(source).map_err(|e| Error::Filesystem {
        action: "remove",
        path: source.to_path_buf(),
        source: e,
    })?;
    Ok(())
}

fn normalize_permissions(_path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(_path, fs::Permissions::from_mode(OUTPUT_MODE)).map_err(|e| {
            Error::Filesystem {
                action: "set permissions on",
                path: _path.to_path_buf(),
                source: e,
            }
        })?;
    }
    Ok(())
}
