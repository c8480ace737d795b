//! Platform and dashboard summaries composed from counts and facets

use super::facets;
use crate::models::InvestorKind;
use crate::query::{Facet, Predicate};
use crate::store::{Collection, DocumentStore};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Each active deal is credited with this much facilitated funding, in
/// billions of dollars
const FUNDING_PER_DEAL_BILLIONS: f64 = 5.2;

const ACTIVE: &str = "Active";

/// Headline numbers for the landing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    pub active_investors: u64,
    pub incubators: u64,
    /// Display string such as `"$15.6B"`
    pub funding_facilitated: String,
    pub active_connections: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub investors: u64,
    pub startups: u64,
    pub active_investors: u64,
}

/// Breakdown shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub totals: Totals,
    pub funding_stages: Vec<Facet>,
    pub industries: Vec<Facet>,
    pub investment_stages: Vec<Facet>,
    pub top_locations: Vec<Facet>,
}

/// Composes summaries from store aggregates
pub struct StatsComposer {
    store: Arc<dyn DocumentStore>,
}

impl StatsComposer {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Active non-incubator investors, the population every platform
    /// figure is computed over
    fn active_investors() -> Predicate {
        Predicate::all_of([
            Predicate::equals("status", ACTIVE),
            InvestorKind::Investor.predicate(),
        ])
    }

    pub async fn platform(&self) -> Result<PlatformStats> {
        let investors = Collection::Investors;
        let active = Self::active_investors();

        let active_investors = self
            .store
            .count(investors, &active)
            .await
            .context("Failed to count active investors")?;
        let incubators = self
            .store
            .count(investors, &InvestorKind::Incubator.predicate())
            .await
            .context("Failed to count incubators")?;
        let total_deals = self
            .store
            .sum(investors, &active, "activeDeals")
            .await
            .context("Failed to sum active deals")?;
        let connections = self
            .store
            .sum(investors, &active, "portfolioCompanies")
            .await
            .context("Failed to sum portfolio companies")?;

        Ok(PlatformStats {
            active_investors,
            incubators,
            funding_facilitated: format_billions(total_deals * FUNDING_PER_DEAL_BILLIONS),
            active_connections: connections.round() as i64,
        })
    }

    pub async fn dashboard(&self) -> Result<DashboardStats> {
        let investors = self
            .store
            .count(Collection::Investors, &Predicate::All)
            .await
            .context("Failed to count investors")?;
        let startups = self
            .store
            .count(Collection::Startups, &Predicate::All)
            .await
            .context("Failed to count startups")?;
        // Every record marked active, incubators included
        let active_investors = self
            .store
            .count(Collection::Investors, &Predicate::equals("status", ACTIVE))
            .await
            .context("Failed to count active investors")?;

        let funding_stages = self
            .store
            .group_count(Collection::Startups, &facets::startup_funding_stages())
            .await
            .context("Failed to group startups by funding stage")?;
        let industries = self
            .store
            .group_count(Collection::Startups, &facets::startup_industries())
            .await
            .context("Failed to group startups by industry")?;
        let investment_stages = self
            .store
            .group_count(Collection::Investors, &facets::investor_stages())
            .await
            .context("Failed to group investors by stage")?;
        let top_locations = self
            .store
            .group_count(Collection::Startups, &facets::top_startup_locations())
            .await
            .context("Failed to group startups by location")?;

        tracing::debug!(investors, startups, active_investors, "Composed dashboard stats");

        Ok(DashboardStats {
            totals: Totals {
                investors,
                startups,
                active_investors,
            },
            funding_stages,
            industries,
            investment_stages,
            top_locations,
        })
    }
}

/// One decimal place, e.g. `15.6` -> `"$15.6B"`
fn format_billions(amount: f64) -> String {
    // `+ 0.0` folds a negative zero into zero
    let rounded = (amount * 10.0).round() / 10.0 + 0.0;
    format!("${:.1}B", rounded)
}
