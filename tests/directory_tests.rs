//! Directory behaviour against the in-memory store
//!
//! Run with: cargo test --test directory_tests

use serde_json::{json, Value};
use std::sync::Arc;
use venture_directory::directory::Directory;
use venture_directory::models::{
    CreateInvestorRequest, CreateStartupRequest, InvestmentRange, InvestorKind,
    UpdateInvestorRequest, UpdateStartupRequest, JUST_CREATED,
};
use venture_directory::query::{
    Facet, InvestorFilters, Pagination, SortOrder, StartupFilters, StartupSort, StartupSortKey,
};
use venture_directory::store::{Collection, MemoryStore};

async fn directory(investors: Vec<Value>, startups: Vec<Value>) -> Directory {
    let store = MemoryStore::with_documents([
        (Collection::Investors, investors),
        (Collection::Startups, startups),
    ])
    .await
    .unwrap();
    Directory::new(Arc::new(store))
}

fn startup(id: i64, team_size: i64, tags: &[&str]) -> Value {
    json!({
        "id": id,
        "name": format!("Startup {}", id),
        "industry": if id % 2 == 0 { "AI" } else { "Fintech" },
        "fundingStage": "Seed",
        "location": format!("City {}", id % 3),
        "teamSize": team_size,
        "founded": 2010 + id,
        "tags": tags,
        "categories": ["B2B"]
    })
}

fn investor(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Fund {}", id),
        "type": "VC",
        "status": status,
        "focusIndustries": ["AI"],
        "investmentStages": ["Seed"],
        "portfolioCompanies": 2,
        "activeDeals": 1
    })
}

fn create_investor_request(name: &str, duration: Option<&str>) -> CreateInvestorRequest {
    CreateInvestorRequest {
        name: name.to_string(),
        investor_type: "VC".to_string(),
        logo: String::new(),
        location: "Lisbon, Portugal".to_string(),
        status: "Active".to_string(),
        investment_range: InvestmentRange {
            min: "$100K".to_string(),
            max: "$1M".to_string(),
        },
        focus_industries: vec!["SaaS".to_string()],
        investment_stages: vec!["Seed".to_string()],
        portfolio_companies: 0,
        active_deals: 0,
        investment_thesis: "B2B software".to_string(),
        deal_size: "Small".to_string(),
        duration: duration.map(str::to_string),
    }
}

fn create_startup_request(name: &str) -> CreateStartupRequest {
    CreateStartupRequest {
        name: name.to_string(),
        logo: String::new(),
        tagline: "Tagline".to_string(),
        description: "Description".to_string(),
        industry: "AI".to_string(),
        funding_stage: "Seed".to_string(),
        location: "Lisbon, Portugal".to_string(),
        funding: "$1M".to_string(),
        team_size: 4,
        founded: 2024,
        growth: "+10%".to_string(),
        categories: vec!["B2B".to_string()],
        founding_team: vec![],
        tags: vec!["ai".to_string()],
    }
}

// ============================================================================
// Pagination
// ============================================================================

#[tokio::test]
async fn test_window_never_exceeds_limit_and_total_is_stable() {
    let startups: Vec<Value> = (1..=23).map(|id| startup(id, id, &[])).collect();
    let dir = directory(vec![], startups).await;

    let mut seen = Vec::new();
    for page in 1..=3 {
        let result = dir
            .startups()
            .list(
                &StartupFilters::default(),
                &StartupSort::default(),
                Pagination::new(page, 10),
            )
            .await
            .unwrap();
        assert!(result.data.len() <= 10);
        assert_eq!(result.total, 23);
        assert_eq!(result.total_pages, 3);
        seen.extend(result.data.iter().map(|s| s.id));
    }
    assert_eq!(seen, (1..=23).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_page_past_the_end_is_empty() {
    let startups: Vec<Value> = (1..=5).map(|id| startup(id, id, &[])).collect();
    let dir = directory(vec![], startups).await;

    let result = dir
        .startups()
        .list(
            &StartupFilters::default(),
            &StartupSort::default(),
            Pagination::new(4, 2),
        )
        .await
        .unwrap();
    assert!(result.data.is_empty());
    assert_eq!(result.total, 5);
    assert_eq!(result.total_pages, 3);
}

#[tokio::test]
async fn test_empty_collection_has_zero_pages() {
    let dir = directory(vec![], vec![]).await;
    let result = dir
        .investors()
        .list(&InvestorFilters::default(), Pagination::default())
        .await
        .unwrap();
    assert_eq!(result.total, 0);
    assert_eq!(result.total_pages, 0);
}

#[tokio::test]
async fn test_sorted_windows_do_not_overlap_on_ties() {
    // All share one team size, so only the id tiebreak orders them
    let startups: Vec<Value> = (1..=6).map(|id| startup(id, 7, &[])).collect();
    let dir = directory(vec![], startups).await;
    let sort = StartupSort {
        sort_by: Some(StartupSortKey::TeamSize),
        sort_order: SortOrder::Desc,
    };

    let mut seen = Vec::new();
    for page in 1..=3 {
        let result = dir
            .startups()
            .list(&StartupFilters::default(), &sort, Pagination::new(page, 2))
            .await
            .unwrap();
        seen.extend(result.data.iter().map(|s| s.id));
    }
    assert_eq!(seen, vec![1, 2, 3, 4, 5, 6]);
}

// ============================================================================
// Filters
// ============================================================================

#[tokio::test]
async fn test_team_size_range_is_inclusive() {
    let startups = vec![startup(1, 5, &[]), startup(2, 12, &[]), startup(3, 20, &[])];
    let dir = directory(vec![], startups).await;
    let filters = StartupFilters {
        min_team_size: Some(10),
        max_team_size: Some(15),
        ..Default::default()
    };

    let result = dir
        .startups()
        .list(&filters, &StartupSort::default(), Pagination::default())
        .await
        .unwrap();
    assert_eq!(result.total, 1);
    assert_eq!(result.data[0].team_size, 12);
}

#[tokio::test]
async fn test_search_treats_needle_as_literal_text() {
    let startups = vec![
        json!({"id": 1, "name": "A.I. Labs", "tagline": "", "description": ""}),
        json!({"id": 2, "name": "AXI Labs", "tagline": "", "description": ""}),
    ];
    let dir = directory(vec![], startups).await;
    let filters = StartupFilters {
        search: Some("a.i.".to_string()),
        ..Default::default()
    };

    let result = dir
        .startups()
        .list(&filters, &StartupSort::default(), Pagination::default())
        .await
        .unwrap();
    assert_eq!(result.total, 1);
    assert_eq!(result.data[0].id, 1);
}

#[tokio::test]
async fn test_investor_filters_combine_with_and() {
    let investors = vec![
        investor(1, "Active"),
        investor(2, "Inactive"),
        json!({"id": 3, "name": "Fund 3", "status": "Active", "focusIndustries": ["Health"]}),
    ];
    let dir = directory(investors, vec![]).await;
    let filters = InvestorFilters {
        industry: Some("AI".to_string()),
        status: Some("Active".to_string()),
        ..Default::default()
    };

    let result = dir
        .investors()
        .list(&filters, Pagination::default())
        .await
        .unwrap();
    let ids: Vec<i64> = result.data.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![1]);
}

#[tokio::test]
async fn test_imported_float_team_size_is_listed() {
    let startups = vec![
        json!({"id": 1, "name": "Imported", "teamSize": 12.0}),
        startup(2, 30, &[]),
    ];
    let dir = directory(vec![], startups).await;
    let filters = StartupFilters {
        min_team_size: Some(10),
        ..Default::default()
    };

    let result = dir
        .startups()
        .list(&filters, &StartupSort::default(), Pagination::default())
        .await
        .unwrap();
    assert_eq!(result.total, 2);
    assert_eq!(result.data[0].team_size, 12);
    assert_eq!(result.data[1].team_size, 30);
}

#[tokio::test]
async fn test_off_type_fields_do_not_fail_a_page() {
    let investors = vec![
        investor(1, "Active"),
        json!({"id": 2, "name": 42, "activeDeals": "n/a", "focusIndustries": [1, "AI"]}),
    ];
    let dir = directory(investors, vec![]).await;
    let result = dir
        .investors()
        .list(&InvestorFilters::default(), Pagination::default())
        .await
        .unwrap();
    assert_eq!(result.total, 2);
    assert_eq!(result.data[1].name, "42");
    assert_eq!(result.data[1].active_deals, 0);
}

// ============================================================================
// Lifecycle
// ============================================================================

#[tokio::test]
async fn test_create_assigns_max_plus_one() {
    let dir = directory(vec![investor(3, "Active"), investor(8, "Active")], vec![]).await;
    let created = dir
        .investors()
        .create(create_investor_request("Tejo Capital", None))
        .await
        .unwrap();
    assert_eq!(created.id, 9);
}

#[tokio::test]
async fn test_create_on_empty_collection_starts_at_one() {
    let dir = directory(vec![], vec![]).await;
    let created = dir
        .startups()
        .create(create_startup_request("First"))
        .await
        .unwrap();
    assert_eq!(created.id, 1);
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let dir = directory(vec![], vec![]).await;
    let mut handles = Vec::new();
    for n in 0..20 {
        let dir = dir.clone();
        handles.push(tokio::spawn(async move {
            dir.startups()
                .create(create_startup_request(&format!("Startup {}", n)))
                .await
                .unwrap()
                .id
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort();
    assert_eq!(ids, (1..=20).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_deleted_ids_are_not_reused() {
    let dir = directory(vec![], vec![]).await;
    let first = dir.startups().create(create_startup_request("A")).await.unwrap();
    let second = dir.startups().create(create_startup_request("B")).await.unwrap();
    assert!(dir.startups().delete(second.id).await.unwrap());

    let third = dir.startups().create(create_startup_request("C")).await.unwrap();
    assert_eq!(first.id, 1);
    assert_eq!(third.id, 3);
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let dir = directory(vec![], vec![]).await;
    let created = dir
        .investors()
        .create(create_investor_request("Atlas Accelerator", Some("12 weeks")))
        .await
        .unwrap();
    assert_eq!(created.kind(), InvestorKind::Incubator);

    let fetched = dir.investors().get(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);

    let incubators = dir.investors().list_incubators().await.unwrap();
    assert_eq!(incubators, vec![created]);
}

#[tokio::test]
async fn test_created_startup_is_just_active() {
    let dir = directory(vec![], vec![]).await;
    let created = dir.startups().create(create_startup_request("Fresh")).await.unwrap();
    let fetched = dir.startups().get(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.last_active, JUST_CREATED);
}

#[tokio::test]
async fn test_null_fields_leave_record_unchanged() {
    let dir = directory(vec![investor(1, "Active")], vec![]).await;
    let before = dir.investors().get(1).await.unwrap().unwrap();

    let req: UpdateInvestorRequest =
        serde_json::from_value(json!({"name": null, "status": null, "dealSize": "Large"})).unwrap();
    let after = dir.investors().update(1, req).await.unwrap().unwrap();

    assert_eq!(after.name, before.name);
    assert_eq!(after.status, before.status);
    assert_eq!(after.deal_size, "Large");
}

#[tokio::test]
async fn test_update_missing_startup_is_none() {
    let dir = directory(vec![], vec![startup(1, 3, &[])]).await;
    let req = UpdateStartupRequest {
        team_size: Some(4),
        ..Default::default()
    };
    assert!(dir.startups().update(99, req).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_missing_id_returns_false() {
    let dir = directory(vec![investor(1, "Active")], vec![]).await;
    assert!(!dir.investors().delete(2).await.unwrap());
    assert!(dir.investors().get(1).await.unwrap().is_some());
}

#[tokio::test]
async fn test_float_id_is_reachable_by_integer_id() {
    let dir = directory(vec![], vec![json!({"id": 5.0, "name": "Imported"})]).await;
    let found = dir.startups().get(5).await.unwrap().unwrap();
    assert_eq!(found.id, 5);
    assert_eq!(found.name, "Imported");
}

#[tokio::test]
async fn test_null_duration_is_an_incubator_everywhere() {
    let investors = vec![
        investor(1, "Active"),
        json!({"id": 2, "name": "Cohort", "status": "Active", "duration": null}),
    ];
    let dir = directory(investors, vec![]).await;

    let incubators = dir.investors().list_incubators().await.unwrap();
    assert_eq!(incubators.len(), 1);
    assert_eq!(incubators[0].kind(), InvestorKind::Incubator);
    let json = serde_json::to_value(&incubators[0]).unwrap();
    assert!(json.get("duration").is_some_and(Value::is_null));

    let stats = dir.stats().platform().await.unwrap();
    assert_eq!(stats.incubators, 1);
    assert_eq!(stats.active_investors, 1);
}

// ============================================================================
// Facets and statistics
// ============================================================================

#[tokio::test]
async fn test_category_facet_counts_each_element() {
    let startups = vec![
        json!({"id": 1, "categories": ["B2B", "Payments"]}),
        json!({"id": 2, "categories": ["B2B"]}),
        json!({"id": 3, "categories": []}),
    ];
    let dir = directory(vec![], startups).await;
    let categories = dir.startups().categories().await.unwrap();
    assert_eq!(
        categories,
        vec![Facet::new("B2B", 2), Facet::new("Payments", 1)]
    );
}

#[tokio::test]
async fn test_location_options_are_alphabetical_and_distinct() {
    let investors = vec![
        json!({"id": 1, "location": "Paris, France"}),
        json!({"id": 2, "location": "Austin, TX"}),
        json!({"id": 3, "location": "Paris, France"}),
        json!({"id": 4, "location": ""}),
    ];
    let startups = vec![
        json!({"id": 1, "location": "Oslo, Norway"}),
        json!({"id": 2, "location": "Berlin, Germany"}),
        json!({"id": 3}),
    ];
    let dir = directory(investors, startups).await;

    assert_eq!(
        dir.investors().locations().await.unwrap(),
        vec!["Austin, TX", "Paris, France"]
    );
    assert_eq!(
        dir.startups().locations().await.unwrap(),
        vec!["Berlin, Germany", "Oslo, Norway"]
    );
}

#[tokio::test]
async fn test_tag_facet_counts_each_element() {
    let dir = directory(
        vec![],
        vec![startup(1, 3, &["ai", "saas"]), startup(2, 3, &["ai"])],
    )
    .await;
    let tags = dir.startups().tags().await.unwrap();
    assert_eq!(tags, vec![Facet::new("ai", 2), Facet::new("saas", 1)]);
}

#[tokio::test]
async fn test_top_locations_are_capped_at_ten() {
    let startups: Vec<Value> = (1..=15)
        .map(|id| json!({"id": id, "location": format!("City {}", id)}))
        .collect();
    let dir = directory(vec![], startups).await;
    let stats = dir.stats().dashboard().await.unwrap();
    assert_eq!(stats.top_locations.len(), 10);
}

#[tokio::test]
async fn test_platform_stats_example() {
    let investors = vec![
        json!({"id": 1, "status": "Active", "activeDeals": 3, "portfolioCompanies": 10}),
        json!({"id": 2, "status": "Active", "duration": "6mo", "activeDeals": 2, "portfolioCompanies": 1}),
    ];
    let dir = directory(investors, vec![]).await;
    let stats = dir.stats().platform().await.unwrap();

    assert_eq!(stats.active_investors, 1);
    assert_eq!(stats.incubators, 1);
    assert_eq!(stats.active_connections, 10);
    assert_eq!(stats.funding_facilitated, "$15.6B");
}

#[tokio::test]
async fn test_platform_stats_on_empty_directory() {
    let dir = directory(vec![], vec![]).await;
    let stats = dir.stats().platform().await.unwrap();
    assert_eq!(stats.active_investors, 0);
    assert_eq!(stats.funding_facilitated, "$0.0B");
    assert_eq!(stats.active_connections, 0);
}

#[tokio::test]
async fn test_dashboard_totals_and_facets() {
    let investors = vec![
        investor(1, "Active"),
        investor(2, "Inactive"),
        json!({"id": 3, "status": "Active", "duration": "3 months", "investmentStages": ["Pre-Seed"]}),
    ];
    let startups = vec![startup(1, 3, &[]), startup(2, 4, &[]), startup(3, 5, &[])];
    let dir = directory(investors, startups).await;

    let stats = dir.stats().dashboard().await.unwrap();
    assert_eq!(stats.totals.investors, 3);
    assert_eq!(stats.totals.startups, 3);
    assert_eq!(stats.totals.active_investors, 2);
    assert_eq!(stats.funding_stages, vec![Facet::new("Seed", 3)]);
    assert_eq!(
        stats.industries,
        vec![Facet::new("Fintech", 2), Facet::new("AI", 1)]
    );
    assert_eq!(
        stats.investment_stages,
        vec![Facet::new("Seed", 2), Facet::new("Pre-Seed", 1)]
    );
}

#[tokio::test]
async fn test_closed_store_surfaces_errors() {
    let dir = directory(vec![investor(1, "Active")], vec![]).await;
    dir.close().await.unwrap();
    assert!(dir.investors().get(1).await.is_err());
    assert!(dir.stats().platform().await.is_err());
}
