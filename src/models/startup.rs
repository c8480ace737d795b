//! Startup records and request DTOs

use super::lenient;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Activity marker written on every newly created startup
pub const JUST_CREATED: &str = "Just now";

/// A startup document from the `startups` collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Startup {
    #[serde(deserialize_with = "lenient::int")]
    pub id: i64,
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub logo: String,
    #[serde(deserialize_with = "lenient::text")]
    pub tagline: String,
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(deserialize_with = "lenient::text")]
    pub industry: String,
    #[serde(deserialize_with = "lenient::text")]
    pub funding_stage: String,
    #[serde(deserialize_with = "lenient::text")]
    pub location: String,
    #[serde(deserialize_with = "lenient::text")]
    pub funding: String,
    #[serde(deserialize_with = "lenient::int")]
    pub team_size: i64,
    #[serde(deserialize_with = "lenient::int")]
    pub founded: i64,
    #[serde(deserialize_with = "lenient::text")]
    pub growth: String,
    #[serde(deserialize_with = "lenient::text_list")]
    pub categories: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub founding_team: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub last_active: String,
    /// Stored fields without a typed counterpart (e.g. `matchPercentage`)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request to create a startup (id and activity marker are set by the directory)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStartupRequest {
    pub name: String,
    pub logo: String,
    pub tagline: String,
    pub description: String,
    pub industry: String,
    pub funding_stage: String,
    pub location: String,
    pub funding: String,
    pub team_size: i64,
    pub founded: i64,
    pub growth: String,
    pub categories: Vec<String>,
    #[serde(default)]
    pub founding_team: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Partial update of a startup; `None` fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStartupRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding_stage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founded: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founding_team: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}
