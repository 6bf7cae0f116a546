//! Query contract the aggregation engine consumes.
//!
//! The engine never talks to a database directly; it is handed an explicit
//! store at construction so tests can substitute an in-memory fake. The
//! Postgres implementation lives in `adwatch-db`.

use std::future::Future;

use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

use crate::model::{AdRecord, FundingOrganization};
use crate::platform::{Funder, Platform};

/// Failure tiers surfaced by a record store.
///
/// `Unreachable` is fatal for the whole request; `Query` is recoverable per
/// computation by falling back to the loaded record window.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record store unreachable: {0}")]
    Unreachable(String),
    #[error("aggregate query failed: {0}")]
    Query(String),
}

/// One group of a platform-dimension aggregate query.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformGroup {
    pub platform: Platform,
    pub spend: Decimal,
    pub count: i64,
}

/// One group of an organization-dimension aggregate query. The display
/// name/funder are resolved separately via [`RecordStore::find_organization`].
#[derive(Debug, Clone, PartialEq)]
pub struct OrganizationGroup {
    pub organization_id: Uuid,
    pub spend: Decimal,
    pub count: i64,
}

/// Read-only access to ad records and funding organizations.
///
/// All methods are independent pure reads and may be polled concurrently
/// against one handle.
pub trait RecordStore {
    /// Lightweight liveness probe; the single gate deciding whether a
    /// request does any real work.
    fn probe_liveness(&self) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// The most recent `limit` records ordered by start date descending,
    /// ties broken by store-native stable order, organizations resolved.
    fn load_recent_records(
        &self,
        limit: i64,
    ) -> impl Future<Output = Result<Vec<AdRecord>, StoreError>> + Send;

    /// Sum of `amount` over all records, optionally restricted to records
    /// whose organization carries the given funder label.
    fn sum_amount(
        &self,
        funder: Option<Funder>,
    ) -> impl Future<Output = Result<Decimal, StoreError>> + Send;

    /// Grouped sum/count of spend by platform, over all records.
    fn group_by_platform(
        &self,
    ) -> impl Future<Output = Result<Vec<PlatformGroup>, StoreError>> + Send;

    /// Grouped sum/count of spend by owning organization, over all records.
    fn group_by_organization(
        &self,
    ) -> impl Future<Output = Result<Vec<OrganizationGroup>, StoreError>> + Send;

    /// Point lookup of an organization; `Ok(None)` when it does not exist.
    fn find_organization(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<FundingOrganization>, StoreError>> + Send;
}
