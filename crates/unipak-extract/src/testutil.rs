//! Fixture helpers shared by the module tests. Packages are synthesized
//! in memory so the tests carry no binary fixtures.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::resolve::{PATHNAME_MARKER, PAYLOAD_MARKER};

pub(crate) struct FixtureContainer {
    pub id: &'static str,
    pub pathname: Option<&'static str>,
    pub asset: Option<&'static [u8]>,
}

/// Lay out one container directly in a staging directory, bypassing the
/// archive round trip.
pub(crate) fn stage_container(
    staging: &Path,
    id: &str,
    pathname: Option<&str>,
    asset: Option<&[u8]>,
) {
    let dir = staging.join(id);
    fs::create_dir(&dir).unwrap();
    if let Some(pathname) = pathname {
        fs::write(dir.join(PATHNAME_MARKER), pathname).unwrap();
    }
    if let Some(asset) = asset {
        fs::write(dir.join(PAYLOAD_MARKER), asset).unwrap();
    }
}

/// Build a `.unitypackage` under `dir` with the given containers. Every
/// payload is marked executable, the way the real archive format does.
pub(crate) fn write_package(
    dir: &Path,
    name: &str,
    containers: &[FixtureContainer],
) -> PathBuf {
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);

    for container in containers {
        append_dir(&mut builder, &format!("{}/", container.id));
        if let Some(pathname) = container.pathname {
            append_file(
                &mut builder,
                &format!("{}/{PATHNAME_MARKER}", container.id),
                pathname.as_bytes(),
            );
        }
        if let Some(asset) = container.asset {
            append_file(
                &mut builder,
                &format!("{}/{PAYLOAD_MARKER}", container.id),
                asset,
            );
        }
    }

    let data = builder.into_inner().unwrap().finish().unwrap();
    let path = dir.join(name);
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(&data).unwrap();
    path
}

fn append_dir(builder: &mut tar::Builder<GzEncoder<Vec<u8>>>, path: &str) {
    let mut header = tar::Header::new_gnu();
    header.set_entry_type(tar::EntryType::Directory);
    header.set_size(0);
    header.set_mode(0o755);
    header.set_cksum();
    builder
        .append_data(&mut header, path, std::io::empty())
        .unwrap();
}

fn append_file(builder: &mut tar::Builder<GzEncoder<Vec<u8>>>, path: &str, data: &[u8]) {
    let mut header = tar::Header::new_gnu();
    header.set_size(data.len() as u64);
    header.set_mode(0o777);
    header.set_cksum();
    builder.append_data(&mut header, path, data).unwrap();
}
