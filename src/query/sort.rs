//! Sort specifications for listings

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field every listing falls back to, and the tiebreaker for other sorts
pub const ID_FIELD: &str = "id";

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(format!("sort_order must be 'asc' or 'desc', got '{}'", s)),
        }
    }
}

/// Resolved sort: a field and a direction, plus an ascending `id` tiebreak
/// applied by the stores whenever `field` is not `id` itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(field: &str, order: SortOrder) -> Self {
        Self {
            field: field.to_string(),
            order,
        }
    }

    /// Ascending by id
    pub fn by_id() -> Self {
        Self::new(ID_FIELD, SortOrder::Asc)
    }

    /// Whether the stores need to append the id tiebreak
    pub fn needs_tiebreak(&self) -> bool {
        self.field != ID_FIELD
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::by_id()
    }
}

/// Allow-listed startup sort keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StartupSortKey {
    /// Stored by upstream matching jobs; documents without it sort first
    /// ascending and last descending
    MatchPercentage,
    TeamSize,
    Founded,
}

impl StartupSortKey {
    pub fn field(self) -> &'static str {
        match self {
            Self::MatchPercentage => "matchPercentage",
            Self::TeamSize => "teamSize",
            Self::Founded => "founded",
        }
    }
}

impl FromStr for StartupSortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "matchPercentage" => Ok(Self::MatchPercentage),
            "teamSize" => Ok(Self::TeamSize),
            "founded" => Ok(Self::Founded),
            _ => Err(format!(
                "sort_by must be one of matchPercentage, teamSize, founded; got '{}'",
                s
            )),
        }
    }
}

/// Requested startup ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StartupSort {
    pub sort_by: Option<StartupSortKey>,
    pub sort_order: SortOrder,
}

impl StartupSort {
    pub fn to_spec(&self) -> SortSpec {
        match self.sort_by {
            Some(key) => SortSpec::new(key.field(), self.sort_order),
            None => SortSpec::by_id(),
        }
    }
}
