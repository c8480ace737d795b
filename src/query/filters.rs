//! Typed filter parameters per collection and their predicate translation

use super::predicate::{Predicate, PredicateBuilder};

/// Filters accepted by the investor listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvestorFilters {
    /// Must be one of the investor's focus industries
    pub industry: Option<String>,
    /// Must be one of the investor's investment stages
    pub stage: Option<String>,
    /// Case-insensitive substring of the location
    pub location: Option<String>,
    pub deal_size: Option<String>,
    pub status: Option<String>,
    /// Case-insensitive substring of the name or the investment thesis
    pub search: Option<String>,
}

impl InvestorFilters {
    pub fn to_predicate(&self) -> Predicate {
        let mut builder = PredicateBuilder::new();
        builder
            .add_eq("focusIndustries", self.industry.as_deref())
            .add_eq("investmentStages", self.stage.as_deref())
            .add_contains("location", self.location.as_deref())
            .add_eq("dealSize", self.deal_size.as_deref())
            .add_eq("status", self.status.as_deref())
            .add_any_contains(&["name", "investmentThesis"], self.search.as_deref());
        builder.build()
    }
}

/// Filters accepted by the startup listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupFilters {
    pub industry: Option<String>,
    pub funding_stage: Option<String>,
    /// Case-insensitive substring of the location
    pub location: Option<String>,
    /// Inclusive lower bound on team size
    pub min_team_size: Option<i64>,
    /// Inclusive upper bound on team size
    pub max_team_size: Option<i64>,
    /// Case-insensitive substring of the name, tagline or description
    pub search: Option<String>,
}

impl StartupFilters {
    pub fn to_predicate(&self) -> Predicate {
        let mut builder = PredicateBuilder::new();
        builder
            .add_eq("industry", self.industry.as_deref())
            .add_eq("fundingStage", self.funding_stage.as_deref())
            .add_contains("location", self.location.as_deref())
            .add_range("teamSize", self.min_team_size, self.max_team_size)
            .add_any_contains(
                &["name", "tagline", "description"],
                self.search.as_deref(),
            );
        builder.build()
    }
}
