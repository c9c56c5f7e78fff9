use crate::error::LookupError;
use crate::types::{EntryMetadata, EntryType};
use chrono::{DateTime, Utc};
use std::ffi::OsStr;
use std::fs::{self, FileType};
use std::io;
use std::os::unix::fs::{FileTypeExt, MetadataExt};
use std::path::Path;

/// Stats `entry_name` inside `dir`, following symlinks.
pub fn read_metadata(dir: &Path, entry_name: &OsStr) -> Result<EntryMetadata, LookupError> {
    // Path::join supplies the separator whether or not `dir` ends with one
    let path = dir.join(entry_name);

    let metadata = fs::metadata(&path).map_err(|source| LookupError {
        path: path.clone(),
        source,
    })?;

    let entry_type = classify(metadata.file_type());
    let size_bytes = size_from_raw(&path, metadata.size())?;
    // st_mtime only; sub-second precision is ignored like the age arithmetic
    let modified_at = mtime_from_raw(&path, metadata.mtime())?;

    Ok(EntryMetadata {
        name: entry_name.to_string_lossy().to_string(),
        is_directory: metadata.is_dir(),
        permission_bits: metadata.mode() & 0o777,
        entry_type,
        inode: metadata.ino(),
        size_bytes,
        modified_at,
        owner_id: metadata.uid(),
    })
}

fn out_of_range(path: &Path, what: &str) -> LookupError {
    LookupError {
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidData, format!("{what} out of range")),
    }
}

fn size_from_raw(path: &Path, raw: u64) -> Result<i64, LookupError> {
    i64::try_from(raw).map_err(|_| out_of_range(path, "file size"))
}

fn mtime_from_raw(path: &Path, secs: i64) -> Result<DateTime<Utc>, LookupError> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| out_of_range(path, "modification time"))
}

fn classify(file_type: FileType) -> EntryType {
    if file_type.is_file() {
        EntryType::Regular
    } else if file_type.is_dir() {
        EntryType::Directory
    } else if file_type.is_symlink() {
        EntryType::Symlink
    } else if file_type.is_char_device() {
        EntryType::CharDevice
    } else if file_type.is_block_device() {
        EntryType::BlockDevice
    } else if file_type.is_fifo() {
        EntryType::Fifo
    } else if file_type.is_socket() {
        EntryType::Socket
    } else {
        EntryType::Unknown
    }
}
