//! Live integration tests for adwatch-db using `#[sqlx::test]`.
//!
//! Each test gets a fresh, fully-migrated Postgres database spun up by the
//! sqlx test harness. The `migrations` path is relative to the crate root
//! (`crates/adwatch-db/`), so `"../../migrations"` resolves to the workspace
//! migration directory.

use rust_decimal::Decimal;

use adwatch_core::{Funder, RecordStore};
use adwatch_db::{
    complete_sync_log, create_sync_log, fail_sync_log, get_sync_log, group_by_platform,
    group_by_super_pac, list_recent_ads, seed_demo_data, sum_amount, DbError, PgRecordStore,
};

#[sqlx::test(migrations = "../../migrations")]
async fn seeded_aggregates_reconcile(pool: sqlx::PgPool) {
    let inserted = seed_demo_data(&pool).await.expect("seed");
    assert_eq!(inserted, 14);

    let total = sum_amount(&pool, None).await.expect("total");
    assert_eq!(total, Decimal::from(10_500_000));

    let open_ai = sum_amount(&pool, Some("OpenAI+a16z")).await.expect("open ai");
    assert_eq!(open_ai, Decimal::from(3_430_000));

    let meta = sum_amount(&pool, Some("Meta")).await.expect("meta");
    assert_eq!(meta, Decimal::from(7_070_000));

    let platforms = group_by_platform(&pool).await.expect("platform groups");
    assert_eq!(platforms.len(), 7);
    let platform_sum: Decimal = platforms.iter().map(|p| p.spend).sum();
    assert_eq!(platform_sum, total);

    let orgs = group_by_super_pac(&pool).await.expect("org groups");
    assert_eq!(orgs.len(), 3);
    let org_count: i64 = orgs.iter().map(|o| o.count).sum();
    assert_eq!(org_count, 14);
}

#[sqlx::test(migrations = "../../migrations")]
async fn recent_ads_are_window_ordered(pool: sqlx::PgPool) {
    seed_demo_data(&pool).await.expect("seed");

    let ads = list_recent_ads(&pool, 50).await.expect("list");
    assert_eq!(ads.len(), 14);
    assert!(ads
        .windows(2)
        .all(|pair| pair[0].start_date >= pair[1].start_date));

    let capped = list_recent_ads(&pool, 5).await.expect("list capped");
    assert_eq!(capped.len(), 5);
    assert_eq!(capped[0].title, "Protecting Our Digital Future");
}

#[sqlx::test(migrations = "../../migrations")]
async fn seeding_twice_inserts_nothing_new(pool: sqlx::PgPool) {
    assert_eq!(seed_demo_data(&pool).await.expect("first seed"), 14);
    assert_eq!(seed_demo_data(&pool).await.expect("second seed"), 0);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ads")
        .fetch_one(&pool)
        .await
        .expect("count");
    assert_eq!(count, 14);
}

#[sqlx::test(migrations = "../../migrations")]
async fn sync_log_transitions_are_guarded(pool: sqlx::PgPool) {
    let run = create_sync_log(&pool, "FACEBOOK").await.expect("create");
    assert_eq!(run.status, "RUNNING");
    assert!(run.started_at.is_some());

    complete_sync_log(&pool, run.id, 37).await.expect("complete");
    let fetched = get_sync_log(&pool, run.id).await.expect("get");
    assert_eq!(fetched.status, "COMPLETED");
    assert_eq!(fetched.records_fetched, 37);
    assert!(fetched.completed_at.is_some());

    // Completed runs cannot transition again.
    let again = complete_sync_log(&pool, run.id, 1).await;
    assert!(matches!(again, Err(DbError::InvalidSyncTransition { .. })));
    let failed = fail_sync_log(&pool, run.id, "boom").await;
    assert!(matches!(failed, Err(DbError::InvalidSyncTransition { .. })));
}

#[sqlx::test(migrations = "../../migrations")]
async fn pg_record_store_serves_the_engine_contract(pool: sqlx::PgPool) {
    seed_demo_data(&pool).await.expect("seed");
    let store = PgRecordStore::new(pool);

    store.probe_liveness().await.expect("probe");

    let window = store.load_recent_records(50).await.expect("window");
    assert_eq!(window.len(), 14);

    let total = store.sum_amount(None).await.expect("total");
    assert_eq!(total, Decimal::from(10_500_000));
    let open_ai = store
        .sum_amount(Some(Funder::OpenAiA16z))
        .await
        .expect("open ai");
    assert_eq!(open_ai, Decimal::from(3_430_000));

    let groups = store.group_by_organization().await.expect("org groups");
    let first = groups.first().expect("nonempty");
    let org = store
        .find_organization(first.organization_id)
        .await
        .expect("lookup")
        .expect("resolved");
    assert!(!org.name.is_empty());
}
