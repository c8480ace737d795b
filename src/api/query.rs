//! Query parameter structs for the list endpoints
//!
//! Query strings carry everything as text: numbers are parsed here and an
//! empty value (`?industry=`) counts as not supplied.

use crate::query::{
    InvestorFilters, Pagination, SortOrder, StartupFilters, StartupSort, StartupSortKey, MAX_LIMIT,
};
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

/// Helper to deserialize optional values from query string; empty means absent
fn deserialize_option_from_str<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    use serde::de::Error;
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.is_empty() => s.parse().map(Some).map_err(D::Error::custom),
        _ => Ok(None),
    }
}

const DEFAULT_PAGE: u64 = 1;
const DEFAULT_LIMIT: u64 = 10;

/// Page-based pagination parameters
#[derive(Debug, Deserialize, Default, Clone)]
pub struct PageParams {
    /// 1-based page number (default: 1)
    #[serde(default, deserialize_with = "deserialize_option_from_str")]
    pub page: Option<u64>,
    /// Records per page (default: 10, max: 100)
    #[serde(default, deserialize_with = "deserialize_option_from_str")]
    pub limit: Option<u64>,
}

impl PageParams {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    /// Validate pagination parameters, filling in defaults
    pub fn validate(&self) -> Result<Pagination, String> {
        let (page, limit) = (self.page(), self.limit());
        if page < 1 {
            return Err("page must be at least 1".to_string());
        }
        if limit < 1 {
            return Err("limit must be at least 1".to_string());
        }
        if limit > MAX_LIMIT {
            return Err(format!("limit cannot exceed {}", MAX_LIMIT));
        }
        Ok(Pagination::new(page, limit))
    }
}

/// Query parameters for `GET /api/investors`
#[derive(Debug, Deserialize, Default, Clone)]
pub struct InvestorListQuery {
    #[serde(flatten)]
    pub pagination: PageParams,
    #[serde(default, deserialize_with = "deserialize_option_from_str")]
    pub industry: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_from_str")]
    pub stage: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_from_str")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_from_str")]
    pub deal_size: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_from_str")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_from_str")]
    pub search: Option<String>,
}

impl InvestorListQuery {
    pub fn filters(&self) -> InvestorFilters {
        InvestorFilters {
            industry: self.industry.clone(),
            stage: self.stage.clone(),
            location: self.location.clone(),
            deal_size: self.deal_size.clone(),
            status: self.status.clone(),
            search: self.search.clone(),
        }
    }
}

/// Query parameters for `GET /api/startups`
#[derive(Debug, Deserialize, Default, Clone)]
pub struct StartupListQuery {
    #[serde(flatten)]
    pub pagination: PageParams,
    #[serde(default, deserialize_with = "deserialize_option_from_str")]
    pub industry: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_from_str")]
    pub funding_stage: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_from_str")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_from_str")]
    pub min_team_size: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_option_from_str")]
    pub max_team_size: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_option_from_str")]
    pub search: Option<String>,
    /// One of `matchPercentage`, `teamSize`, `founded`
    #[serde(default, deserialize_with = "deserialize_option_from_str")]
    pub sort_by: Option<String>,
    /// `asc` or `desc` (default: `desc`)
    #[serde(default, deserialize_with = "deserialize_option_from_str")]
    pub sort_order: Option<String>,
}

impl StartupListQuery {
    pub fn filters(&self) -> StartupFilters {
        StartupFilters {
            industry: self.industry.clone(),
            funding_stage: self.funding_stage.clone(),
            location: self.location.clone(),
            min_team_size: self.min_team_size,
            max_team_size: self.max_team_size,
            search: self.search.clone(),
        }
    }

    /// Parse the sort parameters against the allow-list
    pub fn sort(&self) -> Result<StartupSort, String> {
        let sort_by = self
            .sort_by
            .as_deref()
            .map(StartupSortKey::from_str)
            .transpose()?;
        let sort_order = self
            .sort_order
            .as_deref()
            .map(SortOrder::from_str)
            .transpose()?
            .unwrap_or_default();
        Ok(StartupSort {
            sort_by,
            sort_order,
        })
    }
}
