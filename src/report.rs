use crate::types::EntryMetadata;
use chrono::{Local, TimeZone};
use colored::Colorize;
use std::io::{self, Write};

pub const HEADER: &str = "PERMISSIONS: TYPE: I-NODE:   SIZE:   Last change:              UID:         FILE_NAME:";

/// `ctime(3)` layout without the trailing newline.
const CTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

const PERMISSION_BITS: [(u32, char); 9] = [
    (0o400, 'r'),
    (0o200, 'w'),
    (0o100, 'x'),
    (0o040, 'r'),
    (0o020, 'w'),
    (0o010, 'x'),
    (0o004, 'r'),
    (0o002, 'w'),
    (0o001, 'x'),
];

pub fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", HEADER.red())
}

/// Type glyph followed by the nine rwx flags, e.g. `drwxr-x---`.
#[must_use]
pub fn permission_string(entry: &EntryMetadata) -> String {
    let mut s = String::with_capacity(10);
    s.push(entry.entry_type.glyph());
    for (bit, flag) in PERMISSION_BITS {
        s.push(if entry.permission_bits & bit != 0 { flag } else { '-' });
    }
    s
}

/// Renders one listing line with times in the local time zone.
#[must_use]
pub fn format_line(entry: &EntryMetadata) -> String {
    format_line_in(entry, &Local)
}

#[must_use]
pub fn format_line_in<Tz>(entry: &EntryMetadata, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let modified = entry.modified_at.with_timezone(tz).format(CTIME_FORMAT);
    format!(
        "{}{:>7} {:>6}{:>10}  {:>24}{:>5} {:>20}",
        permission_string(entry),
        entry.entry_type.label(),
        entry.inode,
        entry.size_bytes,
        modified.to_string(),
        entry.owner_id,
        entry.name
    )
}
