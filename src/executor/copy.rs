//! Atomic file copy into the destination directory

use crate::types::{DepcopyError, Result};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Where `src` lands when copied flat into `dest_dir`
pub fn destination_for(src: &Path, dest_dir: &Path) -> Result<PathBuf> {
    let name = src.file_name().ok_or_else(|| DepcopyError::Copy {
        path: src.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
    })?;
    Ok(dest_dir.join(name))
}

/// Copy `src` into `dest_dir` under its own basename.
///
/// Data goes to a `<name>.part` sibling first, is synced, gets the source's
/// permissions and mtime, and is then renamed over the final name. An
/// existing file with the same name is replaced.
///
/// # Returns
/// * `Ok(u64)` - Number of bytes copied
/// * `Err(DepcopyError::Copy)` - any IO failure, tagged with `src`
pub fn copy_into_dir(src: &Path, dest_dir: &Path) -> Result<u64> {
    let dest = destination_for(src, dest_dir)?;
    copy_file_atomic(src, &dest).map_err(|source| DepcopyError::Copy {
        path: src.to_path_buf(),
        source,
    })
}

fn copy_file_atomic(src: &Path, dest: &Path) -> io::Result<u64> {
    let mut part_name = OsString::from(dest.file_name().unwrap_or_default());
    part_name.push(".part");
    let part_path = dest.with_file_name(part_name);

    let mut src_file = File::open(src)?;
    let result = write_part(&mut src_file, src, &part_path)
        .and_then(|total_bytes| fs::rename(&part_path, dest).map(|()| total_bytes));

    if result.is_err() {
        // A leftover (possibly read-only) .part would block the next run
        let _ = fs::remove_file(&part_path);
    }
    result
}

/// Stream `src_file` into `part_path`, sync it and copy metadata from `src`
fn write_part(src_file: &mut File, src: &Path, part_path: &Path) -> io::Result<u64> {
    let mut part_file = File::create(part_path)?;

    let mut buffer = vec![0u8; 128 * 1024];
    let mut total_bytes = 0u64;

    loop {
        let bytes_read = src_file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        part_file.write_all(&buffer[..bytes_read])?;
        total_bytes += bytes_read as u64;
    }

    part_file.sync_all()?;

    // Drop the handle before rename (required on Windows)
    drop(part_file);

    let src_metadata = fs::metadata(src)?;
    fs::set_permissions(part_path, src_metadata.permissions())?;
    let mtime = filetime::FileTime::from_last_modification_time(&src_metadata);
    filetime::set_file_mtime(part_path, mtime)?;

    Ok(total_bytes)
}
