//! Named count facets served by the directory

use crate::query::FacetSpec;

/// How many locations the dashboard lists
pub const TOP_LOCATIONS: usize = 10;

pub fn startup_industries() -> FacetSpec {
    FacetSpec::single("industry")
}

pub fn startup_funding_stages() -> FacetSpec {
    FacetSpec::single("fundingStage")
}

pub fn startup_categories() -> FacetSpec {
    FacetSpec::unwound("categories")
}

pub fn startup_tags() -> FacetSpec {
    FacetSpec::unwound("tags")
}

pub fn investor_stages() -> FacetSpec {
    FacetSpec::unwound("investmentStages")
}

/// Startup locations by number of startups, largest first
pub fn top_startup_locations() -> FacetSpec {
    FacetSpec::single("location").with_limit(TOP_LOCATIONS)
}
