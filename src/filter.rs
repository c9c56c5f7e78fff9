use crate::types::{EntryMetadata, FilterConfig};
use chrono::{DateTime, Utc};

const SECONDS_PER_DAY: i64 = 86_400;

/// One configured threshold check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    YoungerThan(u64),
    OlderThan(u64),
    LargerThan(u64),
    SmallerThan(u64),
}

impl Predicate {
    #[must_use]
    pub fn matches(self, entry: &EntryMetadata, now: DateTime<Utc>) -> bool {
        let modified = entry.modified_at.timestamp();
        let size = i128::from(entry.size_bytes);
        match self {
            Predicate::YoungerThan(days) => modified > age_cutoff(now, days),
            Predicate::OlderThan(days) => modified < age_cutoff(now, days),
            Predicate::LargerThan(bytes) => size > i128::from(bytes),
            Predicate::SmallerThan(bytes) => size < i128::from(bytes),
        }
    }
}

/// Unix seconds `days` days before `now`, saturating for absurd day counts.
fn age_cutoff(now: DateTime<Utc>, days: u64) -> i64 {
    i64::try_from(days)
        .ok()
        .and_then(|d| d.checked_mul(SECONDS_PER_DAY))
        .map_or(i64::MIN, |secs| now.timestamp().saturating_sub(secs))
}

/// Current time truncated to whole seconds, captured once per scan.
#[must_use]
pub fn capture_now() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp(now.timestamp(), 0).unwrap_or(now)
}

/// Predicates enabled by `config`, in evaluation order.
pub fn predicates(config: &FilterConfig) -> impl Iterator<Item = Predicate> {
    [
        config.younger_than.map(Predicate::YoungerThan),
        config.older_than.map(Predicate::OlderThan),
        config.larger_than.map(Predicate::LargerThan),
        config.smaller_than.map(Predicate::SmallerThan),
    ]
    .into_iter()
    .flatten()
}

/// True when `entry` passes every predicate set in `config`.
#[must_use]
pub fn should_include(entry: &EntryMetadata, config: &FilterConfig, now: DateTime<Utc>) -> bool {
    predicates(config).all(|p| p.matches(entry, now))
}

/// A filter configuration bound to a fixed scan time.
#[derive(Debug, Clone, Copy)]
pub struct Filter {
    config: FilterConfig,
    now: DateTime<Utc>,
}

impl Filter {
    #[must_use]
    pub fn new(config: &FilterConfig, now: DateTime<Utc>) -> Self {
        Filter {
            config: *config,
            now,
        }
    }

    #[must_use]
    pub fn predicates(&self) -> Vec<Predicate> {
        predicates(&self.config).collect()
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    #[must_use]
    pub fn should_include(&self, entry: &EntryMetadata) -> bool {
        should_include(entry, &self.config, self.now)
    }
}
