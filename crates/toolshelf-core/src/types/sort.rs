//! Sort keys for catalog listings

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Ordering applied to a filtered tool listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    /// Name, ascending
    NameAsc,
    /// Name, descending; the exact reverse of `NameAsc`
    NameDesc,
    /// No usage data exists in this layer yet, so this orders like `NameAsc`
    Popular,
    /// New tools first, then by name
    Recent,
}

impl SortBy {
    pub const ALL: [SortBy; 4] = [SortBy::NameAsc, SortBy::NameDesc, SortBy::Popular, SortBy::Recent];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::NameAsc => "name-asc",
            SortBy::NameDesc => "name-desc",
            SortBy::Popular => "popular",
            SortBy::Recent => "recent",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized sort key
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown sort key: {0}")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortBy {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortBy::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSortKey(s.to_string()))
    }
}
