use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use flate2::read::GzDecoder;
use tar::Archive;

use crate::error::{Error, Result};

const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// Check whether `data` starts with the gzip magic bytes.
pub fn is_package_header(data: &[u8]) -> bool {
    data.len() >= 2 && data[..2] == GZIP_MAGIC
}

/// Unpack the package at `src` into `staging`, preserving the archive's
/// internal member names exactly.
///
/// The source header is sniffed before any decompression so that a
/// mis-dropped file fails with a format error instead of a gzip one.
pub fn unpack_package(src: &Path, staging: &Path) -> Result<()> {
    let file = File::open(src).map_err(|e| Error::Open {
        path: src.to_path_buf(),
        source: e,
    })?;
    let mut reader = BufReader::with_capacity(0x10000, file);

    let mut header = [0u8; 2];
    reader.read_exact(&mut header).map_err(|_| Error::NotAPackage {
        path: src.to_path_buf(),
    })?;
    reader.rewind().map_err(|e| Error::Unpack { source: e })?;
    if !is_package_header(&header) {
        return Err(Error::NotAPackage {
            path: src.to_path_buf(),
        });
    }

    let mut archive = Archive::new(GzDecoder::new(reader));
    archive
        .unpack(staging)
        .map_err(|e| Error::Unpack { source: e })?;

    Ok(())
}
