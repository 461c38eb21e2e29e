use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::UnknownSortKey;

// --- API Response Structures ---

/// One element of the WCA `/persons` response array
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub person: PersonInfo,
    #[serde(default)]
    pub personal_records: HashMap<String, EventRecords>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonInfo {
    pub name: String,
    pub wca_id: Option<String>,
}

/// Personal records for a single event
#[derive(Debug, Clone, Deserialize)]
pub struct EventRecords {
    pub single: Option<ResultStat>,
    pub average: Option<ResultStat>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResultStat {
    /// Best result in centiseconds
    pub best: i64,
}

// --- Domain ---

/// A competitor as shown in the ranking table. Times are in centiseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub name: String,
    pub single: i64,
    pub average: i64,
}

impl RankedEntry {
    pub fn new(name: impl Into<String>, single: i64, average: i64) -> Self {
        Self {
            name: name.into(),
            single,
            average,
        }
    }
}

/// Field of [`RankedEntry`] that drives the ranking order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Single,
    #[default]
    Average,
}

impl SortKey {
    pub fn value_of(self, entry: &RankedEntry) -> i64 {
        match self {
            SortKey::Single => entry.single,
            SortKey::Average => entry.average,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Single => "single",
            SortKey::Average => "average",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(SortKey::Single),
            "average" => Ok(SortKey::Average),
            other => Err(UnknownSortKey(other.to_string())),
        }
    }
}
