//! Test fixtures and mock state builders
//!
//! Provides a small seeded directory (three investors, three startups) and
//! helpers for wrapping it in an in-memory store, a `Directory` or the API
//! state.
#![allow(dead_code)]

use crate::api::handlers::{DirectoryState, ServerState};
use crate::directory::Directory;
use crate::store::{Collection, DocumentStore, MemoryStore};
use serde_json::{json, Value};
use std::sync::Arc;

// ============================================================================
// Fixtures
// ============================================================================

/// An active VC, an inactive VC and an active incubator
pub fn sample_investors() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "name": "Horizon Ventures",
            "type": "VC",
            "logo": "horizon.png",
            "location": "San Francisco, USA",
            "status": "Active",
            "investmentRange": {"min": "$500K", "max": "$5M"},
            "focusIndustries": ["AI", "Fintech"],
            "investmentStages": ["Seed", "Series A"],
            "portfolioCompanies": 10,
            "activeDeals": 3,
            "investmentThesis": "Early bets on applied AI",
            "dealSize": "Medium"
        }),
        json!({
            "id": 2,
            "name": "Greenfield Partners",
            "type": "VC",
            "logo": "greenfield.png",
            "location": "Amsterdam, Netherlands",
            "status": "Inactive",
            "investmentRange": {"min": "$5M", "max": "$25M"},
            "focusIndustries": ["Climate"],
            "investmentStages": ["Series A", "Series B"],
            "portfolioCompanies": 5,
            "activeDeals": 4,
            "investmentThesis": "Climate infrastructure at scale",
            "dealSize": "Large"
        }),
        json!({
            "id": 3,
            "name": "Launchpad Labs",
            "type": "Incubator",
            "logo": "launchpad.png",
            "location": "Berlin, Germany",
            "status": "Active",
            "investmentRange": {"min": "$50K", "max": "$150K"},
            "focusIndustries": ["Edtech"],
            "investmentStages": ["Pre-Seed"],
            "portfolioCompanies": 1,
            "activeDeals": 2,
            "investmentThesis": "Cohort program for first-time founders",
            "dealSize": "Small",
            "duration": "6 months"
        }),
    ]
}

/// Team sizes 5, 12 and 20; the last one has no match score
pub fn sample_startups() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "name": "Nova AI",
            "logo": "nova.png",
            "tagline": "Copilots for field engineers",
            "description": "Voice assistants for maintenance crews",
            "industry": "AI",
            "fundingStage": "Seed",
            "location": "Berlin, Germany",
            "funding": "$1.5M",
            "teamSize": 5,
            "founded": 2021,
            "growth": "+120%",
            "categories": ["Machine Learning"],
            "foundingTeam": ["Ada Park"],
            "tags": ["ai", "saas"],
            "lastActive": "2 hours ago",
            "matchPercentage": 85
        }),
        json!({
            "id": 2,
            "name": "PayFlow",
            "logo": "payflow.png",
            "tagline": "Payroll without borders",
            "description": "Cross-border payroll for remote teams",
            "industry": "Fintech",
            "fundingStage": "Series A",
            "location": "London, UK",
            "funding": "$8M",
            "teamSize": 12,
            "founded": 2019,
            "growth": "+60%",
            "categories": ["Payments"],
            "foundingTeam": ["Sam Osei", "Lin Wu"],
            "tags": ["ai"],
            "lastActive": "1 day ago",
            "matchPercentage": 92
        }),
        json!({
            "id": 3,
            "name": "EduSpark",
            "logo": "eduspark.png",
            "tagline": "Tutoring that adapts",
            "description": "Adaptive maths practice for schools",
            "industry": "Edtech",
            "fundingStage": "Seed",
            "location": "Berlin, Germany",
            "funding": "$900K",
            "teamSize": 20,
            "founded": 2020,
            "growth": "+35%",
            "categories": ["Learning"],
            "foundingTeam": [],
            "tags": [],
            "lastActive": "3 days ago"
        }),
    ]
}

// ============================================================================
// Mock state builders
// ============================================================================

/// In-memory store seeded with the given documents
pub async fn memory_store(investors: Vec<Value>, startups: Vec<Value>) -> Arc<dyn DocumentStore> {
    let store = MemoryStore::with_documents([
        (Collection::Investors, investors),
        (Collection::Startups, startups),
    ])
    .await
    .expect("seed memory store");
    Arc::new(store)
}

/// Directory over a seeded in-memory store
pub async fn mock_directory(investors: Vec<Value>, startups: Vec<Value>) -> Directory {
    Directory::new(memory_store(investors, startups).await)
}

/// API state over a seeded in-memory store
pub async fn mock_server_state(investors: Vec<Value>, startups: Vec<Value>) -> DirectoryState {
    Arc::new(ServerState {
        directory: mock_directory(investors, startups).await,
    })
}
