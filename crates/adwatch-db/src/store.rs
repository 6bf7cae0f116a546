//! Postgres implementation of the engine's record-store contract.

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use adwatch_core::{
    AdRecord, Funder, FundingOrganization, OrganizationGroup, PlatformGroup, RecordStore,
    StoreError,
};

use crate::DbError;

/// A record store backed by a Postgres connection pool.
///
/// Holds only the pool handle; clones are cheap and every method is a pure
/// read, so one value can serve concurrent computations within a request.
#[derive(Debug, Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn query_error(e: DbError) -> StoreError {
    StoreError::Query(e.to_string())
}

impl RecordStore for PgRecordStore {
    async fn probe_liveness(&self) -> Result<(), StoreError> {
        crate::ping(&self.pool)
            .await
            .map_err(|e| StoreError::Unreachable(e.to_string()))
    }

    async fn load_recent_records(&self, limit: i64) -> Result<Vec<AdRecord>, StoreError> {
        crate::ads::list_recent_ads(&self.pool, limit)
            .await
            .map_err(query_error)
    }

    async fn sum_amount(&self, funder: Option<Funder>) -> Result<Decimal, StoreError> {
        crate::ads::sum_amount(&self.pool, funder.map(Funder::as_str))
            .await
            .map_err(query_error)
    }

    async fn group_by_platform(&self) -> Result<Vec<PlatformGroup>, StoreError> {
        let rows = crate::ads::group_by_platform(&self.pool)
            .await
            .map_err(query_error)?;

        rows.into_iter()
            .map(|row| {
                let platform = row
                    .platform
                    .parse()
                    .map_err(|e| StoreError::Query(format!("platform group: {e}")))?;
                Ok(PlatformGroup {
                    platform,
                    spend: row.spend,
                    count: row.count,
                })
            })
            .collect()
    }

    async fn group_by_organization(&self) -> Result<Vec<OrganizationGroup>, StoreError> {
        let rows = crate::ads::group_by_super_pac(&self.pool)
            .await
            .map_err(query_error)?;

        Ok(rows
            .into_iter()
            .map(|row| OrganizationGroup {
                organization_id: row.super_pac_public_id,
                spend: row.spend,
                count: row.count,
            })
            .collect())
    }

    async fn find_organization(
        &self,
        id: Uuid,
    ) -> Result<Option<FundingOrganization>, StoreError> {
        let row = crate::super_pacs::find_super_pac(&self.pool, id)
            .await
            .map_err(query_error)?;

        row.map(|r| r.into_organization().map_err(query_error))
            .transpose()
    }
}
