use chrono::{DateTime, Utc};

/// Thresholds parsed from the command line. A `None` field is not checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterConfig {
    pub younger_than: Option<u64>,
    pub older_than: Option<u64>,
    pub larger_than: Option<u64>,
    pub smaller_than: Option<u64>,
}

impl FilterConfig {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.younger_than.is_none()
            && self.older_than.is_none()
            && self.larger_than.is_none()
            && self.smaller_than.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    Regular,
    Directory,
    CharDevice,
    BlockDevice,
    Symlink,
    Fifo,
    Socket,
    Unknown,
}

impl EntryType {
    /// Short label shown in the TYPE column.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            EntryType::Regular => "REG",
            EntryType::Directory => "DIR",
            EntryType::CharDevice => "CHD",
            EntryType::BlockDevice => "BD",
            EntryType::Symlink => "SL",
            EntryType::Fifo => "FIFO",
            EntryType::Socket => "SOCK",
            EntryType::Unknown => "??",
        }
    }

    /// First character of the permission string, as `ls -l` prints it.
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            EntryType::Regular => '-',
            EntryType::Directory => 'd',
            EntryType::CharDevice => 'c',
            EntryType::BlockDevice => 'b',
            EntryType::Symlink => 'l',
            EntryType::Fifo => 'p',
            EntryType::Socket => 's',
            EntryType::Unknown => '?',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMetadata {
    pub name: String,
    pub is_directory: bool,
    /// Lower nine mode bits (rwx for user, group, other).
    pub permission_bits: u32,
    pub entry_type: EntryType,
    pub inode: u64,
    pub size_bytes: i64,
    /// Whole-second modification time.
    pub modified_at: DateTime<Utc>,
    pub owner_id: u32,
}
