//! End-to-end tests for the listing flow: parameter snapshot in,
//! paginated filtered view out, with records supplied by a GroupStore.

use admin_listing::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn source(pairs: &[(&str, &str)]) -> ParamSource {
    pairs.iter().copied().collect()
}

fn record(name: &str, customer_count: usize) -> GroupRecord {
    let customers = (0..customer_count)
        .map(|_| CustomerRef::new(Uuid::new_v4()))
        .collect();
    GroupRecord::new(Some(GroupInfo::with_customers(name, customers)))
}

async fn seeded_store() -> InMemoryGroupStore {
    let store = InMemoryGroupStore::new();
    store.upsert(record("Wholesale", 3)).await.unwrap();
    store.upsert(record("VIP", 1)).await.unwrap();
    store.upsert(record("vip europe", 2)).await.unwrap();
    store.upsert(record("Retail", 0)).await.unwrap();
    store.upsert(GroupRecord::new(None)).await.unwrap();
    store
}

#[tokio::test]
async fn filter_and_sort_store_snapshot() {
    init_tracing();
    let store = seeded_store().await;
    let config = ListingConfig::default_config();
    let query = ListQuery::from_source(&config, &source(&[("q", "vip"), ("order", "customers")]));

    let snapshot = store.list().await.unwrap();
    let page = query.apply(&snapshot);

    let names: Vec<&str> = page.data.iter().map(|r| r.group_name()).collect();
    assert_eq!(names, vec!["VIP", "vip europe"]);
    assert_eq!(page.pagination.total, 2);
    assert!(!page.pagination.has_next);
}

#[tokio::test]
async fn unmaterialized_records_never_reach_the_view() {
    let store = seeded_store().await;
    let config = ListingConfig::default_config();
    let query = ListQuery::from_source(&config, &source(&[]));

    let snapshot = store.list().await.unwrap();
    assert_eq!(snapshot.len(), 5);

    let page = query.apply(&snapshot);
    assert_eq!(page.pagination.total, 4);
    assert!(page.data.iter().all(|r| r.group.is_some()));
}

#[tokio::test]
async fn pagination_follows_offset_and_limit_params() {
    let store = InMemoryGroupStore::new();
    for i in 0..5 {
        store.upsert(record(&format!("group-{}", i), i)).await.unwrap();
    }

    let config = ListingConfig::default_config();
    let query = ListQuery::from_source(
        &config,
        &source(&[("order", "name"), ("offset", "2"), ("limit", "2")]),
    );

    let snapshot = store.list().await.unwrap();
    let page = query.apply(&snapshot);

    let names: Vec<&str> = page.data.iter().map(|r| r.group_name()).collect();
    assert_eq!(names, vec!["group-2", "group-3"]);
    assert!(page.pagination.has_prev);
    assert!(page.pagination.has_next);
}

#[tokio::test]
async fn reapplying_query_on_new_snapshot_reflects_changes() {
    let store = InMemoryGroupStore::new();
    let config = ListingConfig::default_config();
    let query = ListQuery::from_source(&config, &source(&[("order", "-customers")]));

    store.upsert(record("small", 1)).await.unwrap();
    let first = query.apply(&store.list().await.unwrap());
    assert_eq!(first.pagination.total, 1);

    store.upsert(record("large", 9)).await.unwrap();
    let second = query.apply(&store.list().await.unwrap());
    assert_eq!(second.pagination.total, 2);
    assert_eq!(second.data[0].group_name(), "large");
}

#[tokio::test]
async fn prefixed_parameters_drive_the_query() {
    let store = seeded_store().await;
    let config = ListingConfig::from_yaml_str("prefix: groups").unwrap();
    let query = ListQuery::from_source(
        &config,
        &source(&[("groups_q", "retail"), ("q", "vip")]),
    );

    let page = query.apply(&store.list().await.unwrap());
    let names: Vec<&str> = page.data.iter().map(|r| r.group_name()).collect();
    assert_eq!(names, vec!["Retail"]);
}

#[tokio::test]
async fn unknown_order_field_is_a_silent_noop() {
    let store = InMemoryGroupStore::new();
    let config = ListingConfig::default_config();
    let query = ListQuery::from_source(&config, &source(&[("order", "created_at")]));

    store.upsert(record("b", 0)).await.unwrap();
    store.upsert(record("a", 0)).await.unwrap();

    let snapshot = store.list().await.unwrap();
    let page = query.apply(&snapshot);

    // No reordering relative to the snapshot, no error
    let snapshot_names: Vec<&str> = snapshot.iter().map(|r| r.group_name()).collect();
    let page_names: Vec<&str> = page.data.iter().map(|r| r.group_name()).collect();
    assert_eq!(page_names, snapshot_names);
}
