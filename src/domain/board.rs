use chrono::{DateTime, Utc};
use log::info;

use crate::domain::models::{RankedEntry, SortKey};
use crate::domain::sorting::sorted_by;
use crate::domain::time_format::format_centiseconds;

/// Row of the rendered ranking table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingRow {
    pub rank: usize,
    pub name: String,
    pub single: i64,
    pub average: i64,
    pub single_display: String,
    pub average_display: String,
}

/// The ranking currently on display
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RankingBoard {
    /// Nothing fetched yet, or the fetch failed
    #[default]
    Empty,
    Populated {
        entries: Vec<RankedEntry>,
        sort_key: SortKey,
        fetched_at: DateTime<Utc>,
    },
}

impl RankingBoard {
    pub fn new() -> Self {
        Self::Empty
    }

    /// Hold freshly projected entries, ordered by `default_sort`
    pub fn populate(&mut self, entries: Vec<RankedEntry>, default_sort: SortKey) {
        info!("Populating ranking with {} entries", entries.len());
        *self = Self::Populated {
            entries: sorted_by(&entries, default_sort),
            sort_key: default_sort,
            fetched_at: Utc::now(),
        };
    }

    /// Re-order the held entries; does nothing while empty
    pub fn apply_sort(&mut self, key: SortKey) {
        if let Self::Populated {
            entries, sort_key, ..
        } = self
        {
            *entries = sorted_by(entries.as_slice(), key);
            *sort_key = key;
        }
    }

    pub fn is_populated(&self) -> bool {
        matches!(self, Self::Populated { .. })
    }

    pub fn entries(&self) -> &[RankedEntry] {
        match self {
            Self::Empty => &[],
            Self::Populated { entries, .. } => entries,
        }
    }

    pub fn sort_key(&self) -> Option<SortKey> {
        match self {
            Self::Empty => None,
            Self::Populated { sort_key, .. } => Some(*sort_key),
        }
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Empty => None,
            Self::Populated { fetched_at, .. } => Some(*fetched_at),
        }
    }

    pub fn rows(&self) -> Vec<RankingRow> {
        self.entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| RankingRow {
                rank: i + 1,
                name: entry.name.clone(),
                single: entry.single,
                average: entry.average,
                single_display: format_centiseconds(entry.single),
                average_display: format_centiseconds(entry.average),
            })
            .collect()
    }
}
