//! Offline unit tests for adwatch-db pool configuration and row types.
//! These tests do not require a live database connection.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use adwatch_core::{AppConfig, Environment};
use adwatch_db::{AdSyncLogRow, PoolConfig};

#[test]
fn pool_config_from_app_config_uses_core_values() {
    let app_config = AppConfig {
        database_url: "postgres://example".to_string(),
        env: Environment::Test,
        bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000),
        log_level: "info".to_string(),
        db_max_connections: 42,
        db_min_connections: 7,
        db_acquire_timeout_secs: 9,
        store_probe_timeout_secs: 5,
        sync_simulated_delay_ms: 1000,
    };

    let pool_config = PoolConfig::from_app_config(&app_config);
    assert_eq!(pool_config.max_connections, 42);
    assert_eq!(pool_config.min_connections, 7);
    assert_eq!(pool_config.acquire_timeout_secs, 9);
}

/// Compile-time smoke test: confirm that [`AdSyncLogRow`] has all expected
/// fields with the correct types. No database required.
#[test]
fn ad_sync_log_row_has_expected_fields() {
    use chrono::Utc;
    use uuid::Uuid;

    let row = AdSyncLogRow {
        id: 1_i64,
        public_id: Uuid::new_v4(),
        platform: "FACEBOOK".to_string(),
        status: "RUNNING".to_string(),
        records_fetched: 0,
        started_at: Some(Utc::now()),
        completed_at: None,
        error_message: None,
        created_at: Utc::now(),
    };

    assert_eq!(row.status, "RUNNING");
    assert_eq!(row.records_fetched, 0);
    assert!(row.completed_at.is_none());
}
