//! Investor records, incubator classification and request DTOs

use super::lenient;
use crate::query::Predicate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Field whose presence turns an investor into an incubator.
const INCUBATOR_MARKER: &str = "duration";

/// Ticket size bounds, kept as display strings (e.g. `"$500K"`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvestmentRange {
    #[serde(deserialize_with = "lenient::text")]
    pub min: String,
    #[serde(deserialize_with = "lenient::text")]
    pub max: String,
}

/// An investor document from the `investors` collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Investor {
    #[serde(deserialize_with = "lenient::int")]
    pub id: i64,
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "lenient::text")]
    pub investor_type: String,
    #[serde(deserialize_with = "lenient::text")]
    pub logo: String,
    #[serde(deserialize_with = "lenient::text")]
    pub location: String,
    #[serde(deserialize_with = "lenient::text")]
    pub status: String,
    #[serde(deserialize_with = "lenient::record")]
    pub investment_range: InvestmentRange,
    #[serde(deserialize_with = "lenient::text_list")]
    pub focus_industries: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub investment_stages: Vec<String>,
    #[serde(deserialize_with = "lenient::int")]
    pub portfolio_companies: i64,
    #[serde(deserialize_with = "lenient::int")]
    pub active_deals: i64,
    #[serde(deserialize_with = "lenient::text")]
    pub investment_thesis: String,
    #[serde(deserialize_with = "lenient::text")]
    pub deal_size: String,
    /// Incubator marker. The outer `Option` tracks whether the key is
    /// stored at all, so a stored `null` still marks an incubator.
    #[serde(
        deserialize_with = "lenient::present_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<Option<String>>,
    /// Stored fields without a typed counterpart
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Investor {
    pub fn kind(&self) -> InvestorKind {
        InvestorKind::of(self)
    }
}

/// Structural subtype of an investor record.
///
/// There is no discriminator in storage: a record is an incubator exactly
/// when it carries a `duration` field. Both the in-memory rule and the store
/// predicate live here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestorKind {
    Investor,
    Incubator,
}

impl InvestorKind {
    /// Classify a record read from the store
    pub fn of(investor: &Investor) -> Self {
        if investor.duration.is_some() {
            Self::Incubator
        } else {
            Self::Investor
        }
    }

    /// Store predicate selecting records of this kind
    pub fn predicate(self) -> Predicate {
        Predicate::Exists {
            field: INCUBATOR_MARKER.to_string(),
            exists: self == Self::Incubator,
        }
    }
}

impl fmt::Display for InvestorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Investor => write!(f, "investor"),
            Self::Incubator => write!(f, "incubator"),
        }
    }
}

fn default_status() -> String {
    "Active".to_string()
}

/// Request to create an investor (the id is assigned by the directory)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvestorRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub investor_type: String,
    pub logo: String,
    pub location: String,
    #[serde(default = "default_status")]
    pub status: String,
    pub investment_range: InvestmentRange,
    pub focus_industries: Vec<String>,
    pub investment_stages: Vec<String>,
    #[serde(default)]
    pub portfolio_companies: i64,
    #[serde(default)]
    pub active_deals: i64,
    pub investment_thesis: String,
    pub deal_size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

/// Partial update of an investor; `None` fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInvestorRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub investor_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investment_range: Option<InvestmentRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_industries: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investment_stages: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_companies: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_deals: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investment_thesis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deal_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}
