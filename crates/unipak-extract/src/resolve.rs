use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Metadata file naming the container's real destination path.
pub const PATHNAME_MARKER: &str = "pathname";

/// Payload file holding the raw asset bytes. Its absence means the
/// container describes a directory-only entry.
pub const PAYLOAD_MARKER: &str = "asset";

/// One opaque top-level directory from the unpacked archive.
#[derive(Clone, Debug)]
pub struct Container {
    pub id: String,
    pub real_path: String,
    pub has_payload: bool,
}

/// Map from container id to the real relative destination path.
///
/// Only containers carrying a payload are present. Two containers
/// claiming the same destination are rejected at insertion rather than
/// letting the last one silently win.
#[derive(Debug, Default)]
pub struct ResolutionMap {
    by_id: BTreeMap<String, String>,
    claimed: HashMap<String, String>,
}

impl ResolutionMap {
    pub fn insert(&mut self, container: Container) -> Result<()> {
        debug_assert!(container.has_payload);
        if let Some(first) = self.claimed.get(&container.real_path) {
            return Err(Error::DuplicateDestination {
                path: container.real_path,
                first: first.clone(),
                second: container.id,
            });
        }
        self.claimed
            .insert(container.real_path.clone(), container.id.clone());
        self.by_id.insert(container.id, container.real_path);
        Ok(())
    }

    /// Pairs in container-id order, so tree building is deterministic.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_id.iter().map(|(id, p)| (id.as_str(), p.as_str()))
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Scan the staging directory's immediate children and build the
/// resolution map.
///
/// Loose top-level files (the archive sometimes carries a `.icon.png`)
/// are ignored; only directories are containers. A container without a
/// `pathname` file is a malformed archive. Payload-less containers are
/// resolved and validated but excluded from the map.
pub fn resolve_staging(staging: &Path) -> Result<ResolutionMap> {
    let mut map = ResolutionMap::default();

    let entries = fs::read_dir(staging).map_err(|e| Error::Filesystem {
        action: "scan",
        path: staging.to_path_buf(),
        source: e,
    })?;
    for entry in entries {
        let entry = entry.map_err(|e| Error::Filesystem {
            action: "scan",
            path: staging.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let id = entry.file_name().to_string_lossy().into_owned();
        let container = read_container(&path, id)?;
        if container.has_payload {
            map.insert(container)?;
        }
    }

    Ok(map)
}

fn read_container(dir: &Path, id: String) -> Result<Container> {
    let pathname = dir.join(PATHNAME_MARKER);
    if !pathname.is_file() {
        return Err(Error::MissingPathMetadata { id });
    }
    let has_payload = dir.join(PAYLOAD_MARKER).is_file();

    // Only the first line is authoritative; trailing lines are an
    // undocumented corner of the format and are ignored.
    let file = fs::File::open(&pathname).map_err(|e| Error::Filesystem {
        action: "read",
        path: pathname.clone(),
        source: e,
    })?;
    let mut first_line = String::new();
    BufReader::new(file)
        .read_line(&mut first_line)
        .map_err(|e| Error::Filesystem {
            action: "read",
            path: pathname,
            source: e,
        })?;
    let real_path = normalize_real_path(&id, first_line.trim())?;

    Ok(Container {
        id,
        real_path,
        has_payload,
    })
}

/// A real path must stay inside the output root: relative, no `..`,
/// no filesystem prefix. `.` segments are dropped so that equivalent
/// spellings (`a/b.txt`, `./a/b.txt`) collapse to one destination and
/// cannot slip past the duplicate check.
fn normalize_real_path(id: &str, real_path: &str) -> Result<String> {
    let mut segments = Vec::new();
    for component in PathBuf::from(real_path).components() {
        match component {
            Component::Normal(segment) => {
                segments.push(segment.to_string_lossy().into_owned())
            }
            Component::CurDir => {}
            _ => {
                return Err(Error::UnresolvablePath {
                    id: id.to_string(),
                    path: real_path.to_string(),
                });
            }
        }
    }
    if segments.is_empty() {
        return Err(Error::UnresolvablePath {
            id: id.to_string(),
            path: real_path.to_string(),
        });
    }
    Ok(segments.join("/"))
}
