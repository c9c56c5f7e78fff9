use crate::error::{AppError, LookupError};
use crate::filter::Filter;
use crate::metadata::read_metadata;
use crate::report;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::iter::Peekable;
use std::path::{Path, PathBuf};
use walkdir::{DirEntryExt, WalkDir};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub listed: usize,
    pub filtered_out: usize,
    pub failed: usize,
}

/// Names of the immediate children of a directory, in the order the
/// filesystem returns them.
pub struct DirListing {
    root: PathBuf,
    entries: Peekable<walkdir::IntoIter>,
}

impl DirListing {
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Opens `path` for a one-level listing. Fails if the path is missing,
/// not a directory, or cannot be read.
pub fn open_directory(path: &Path) -> Result<DirListing, AppError> {
    let metadata = fs::metadata(path).map_err(|source| AppError::DirectoryOpen {
        path: path.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(AppError::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    let mut entries = WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .peekable();

    // walkdir reports a failed read of the root itself at depth 0
    if let Some(Err(err)) = entries.peek()
        && err.depth() == 0
    {
        let source = err
            .io_error()
            .map_or_else(|| std::io::Error::other(err.to_string()), |e| {
                std::io::Error::new(e.kind(), e.to_string())
            });
        return Err(AppError::DirectoryOpen {
            path: path.to_path_buf(),
            source,
        });
    }

    Ok(DirListing {
        root: path.to_path_buf(),
        entries,
    })
}

/// `.`, `..` and entries with inode 0 are never listed.
fn is_listable(name: &OsString, inode: u64) -> bool {
    inode != 0 && name != "." && name != ".."
}

impl Iterator for DirListing {
    type Item = Result<OsString, LookupError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.entries.next()? {
                Ok(entry) => {
                    let name = entry.file_name().to_os_string();
                    if is_listable(&name, entry.ino()) {
                        return Some(Ok(name));
                    }
                    log::debug!("skipping {:?}", entry.path());
                }
                Err(err) => {
                    let path = err.path().map_or_else(|| self.root.clone(), Path::to_path_buf);
                    let source = err
                        .into_io_error()
                        .unwrap_or_else(|| std::io::Error::other("directory read failed"));
                    return Some(Err(LookupError { path, source }));
                }
            }
        }
    }
}

/// `Ok(false)` when the reader of `out` has gone away, as with `| head`.
fn still_open(result: io::Result<()>) -> Result<bool, AppError> {
    match result {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Writes the header and one line per matching entry of `dir` to `out`.
/// Lookup failures go to `diag` and do not stop the listing. A closed
/// output pipe ends the listing early without an error.
pub fn list_directory<W: Write, E: Write>(
    dir: &Path,
    filter: &Filter,
    out: &mut W,
    diag: &mut E,
) -> Result<ScanSummary, AppError> {
    let listing = open_directory(dir)?;
    log::debug!("listing {} at {}", listing.root().display(), filter.now());

    let mut summary = ScanSummary::default();
    if !still_open(report::write_header(out))? {
        log::debug!("output closed before the header");
        return Ok(summary);
    }

    for item in listing {
        let name = match item {
            Ok(name) => name,
            Err(err) => {
                summary.failed += 1;
                writeln!(diag, "{err}")?;
                continue;
            }
        };

        match read_metadata(dir, &name) {
            Ok(entry) if filter.should_include(&entry) => {
                // the line is built in full before anything is written
                let line = report::format_line(&entry);
                if !still_open(writeln!(out, "{line}"))? {
                    log::debug!("output closed after {} entries", summary.listed);
                    return Ok(summary);
                }
                summary.listed += 1;
            }
            Ok(entry) => {
                let suffix = if entry.is_directory { "/" } else { "" };
                log::debug!("filtered out {}{suffix}", entry.name);
                summary.filtered_out += 1;
            }
            Err(err) => {
                summary.failed += 1;
                writeln!(diag, "{err}")?;
            }
        }
    }

    still_open(out.flush())?;
    Ok(summary)
}
