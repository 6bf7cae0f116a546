//! Database operations for the `ads` table and its aggregate queries.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use adwatch_core::{AdRecord, Funder, OrganizationRef, Platform};

use crate::DbError;

// ---------------------------------------------------------------------------
// Row types
// ---------------------------------------------------------------------------

/// A row from the `ads` table joined with its owning `super_pacs` row.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AdRow {
    pub ad_public_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub platform: String,
    pub platform_ad_id: Option<String>,
    pub amount: i64,
    pub target_audience: Option<String>,
    pub geographic_target: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub impressions: Option<i64>,
    pub ad_url: Option<String>,
    pub metadata: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub super_pac_public_id: Uuid,
    pub super_pac_name: String,
    pub super_pac_funder: String,
}

impl AdRow {
    /// Maps the row into the typed domain record.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::InvalidRow`] if the stored platform or funder
    /// token is not one of the enumerated values.
    pub fn into_record(self) -> Result<AdRecord, DbError> {
        let platform: Platform = self
            .platform
            .parse()
            .map_err(|e| DbError::InvalidRow(format!("ad {}: {e}", self.ad_public_id)))?;
        let funder: Funder = self
            .super_pac_funder
            .parse()
            .map_err(|e| DbError::InvalidRow(format!("ad {}: {e}", self.ad_public_id)))?;

        Ok(AdRecord {
            id: self.ad_public_id,
            title: self.title,
            description: self.description,
            platform,
            platform_ad_id: self.platform_ad_id,
            super_pac: OrganizationRef {
                id: self.super_pac_public_id,
                name: self.super_pac_name,
                funder,
            },
            amount: self.amount,
            target_audience: self.target_audience,
            geographic_target: self.geographic_target,
            start_date: self.start_date,
            end_date: self.end_date,
            impressions: self.impressions,
            ad_url: self.ad_url,
            metadata: self.metadata,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// One group of the platform aggregate query.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PlatformSumRow {
    pub platform: String,
    pub spend: Decimal,
    pub count: i64,
}

/// One group of the organization aggregate query.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SuperPacSumRow {
    pub super_pac_public_id: Uuid,
    pub spend: Decimal,
    pub count: i64,
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Returns the most recent `limit` ads ordered by start date descending
/// (ties broken by insertion order), organizations resolved, mapped into
/// domain records.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails, or [`DbError::InvalidRow`]
/// if a row carries an unknown platform or funder token.
pub async fn list_recent_ads(pool: &PgPool, limit: i64) -> Result<Vec<AdRecord>, DbError> {
    let rows = sqlx::query_as::<_, AdRow>(
        "SELECT \
             a.public_id AS ad_public_id, a.title, a.description, a.platform, \
             a.platform_ad_id, a.amount, a.target_audience, a.geographic_target, \
             a.start_date, a.end_date, a.impressions, a.ad_url, a.metadata, \
             a.created_at, a.updated_at, \
             p.public_id AS super_pac_public_id, \
             p.name AS super_pac_name, \
             p.funder AS super_pac_funder \
         FROM ads a \
         JOIN super_pacs p ON p.id = a.super_pac_id \
         ORDER BY a.start_date DESC, a.id DESC \
         LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(AdRow::into_record).collect()
}

/// Sum of `amount` over all ads, optionally restricted to one funder label.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn sum_amount(pool: &PgPool, funder: Option<&str>) -> Result<Decimal, DbError> {
    let sum = sqlx::query_scalar::<_, Decimal>(
        "SELECT COALESCE(SUM(a.amount), 0)::NUMERIC \
         FROM ads a \
         JOIN super_pacs p ON p.id = a.super_pac_id \
         WHERE ($1::TEXT IS NULL OR p.funder = $1)",
    )
    .bind(funder)
    .fetch_one(pool)
    .await?;

    Ok(sum)
}

/// Grouped sum/count of spend by platform, over all ads.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn group_by_platform(pool: &PgPool) -> Result<Vec<PlatformSumRow>, DbError> {
    let rows = sqlx::query_as::<_, PlatformSumRow>(
        "SELECT \
             a.platform, \
             COALESCE(SUM(a.amount), 0)::NUMERIC AS spend, \
             COUNT(*) AS count \
         FROM ads a \
         GROUP BY a.platform \
         ORDER BY spend DESC, a.platform",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Grouped sum/count of spend by owning organization, over all ads.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn group_by_super_pac(pool: &PgPool) -> Result<Vec<SuperPacSumRow>, DbError> {
    let rows = sqlx::query_as::<_, SuperPacSumRow>(
        "SELECT \
             p.public_id AS super_pac_public_id, \
             COALESCE(SUM(a.amount), 0)::NUMERIC AS spend, \
             COUNT(*) AS count \
         FROM ads a \
         JOIN super_pacs p ON p.id = a.super_pac_id \
         GROUP BY p.public_id \
         ORDER BY spend DESC, p.public_id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn row() -> AdRow {
        let now = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        AdRow {
            ad_public_id: Uuid::new_v4(),
            title: "Digital Privacy is a Fundamental Right".to_string(),
            description: None,
            platform: "FACEBOOK".to_string(),
            platform_ad_id: None,
            amount: 950_000,
            target_audience: None,
            geographic_target: None,
            start_date: now,
            end_date: None,
            impressions: Some(4_200_000),
            ad_url: None,
            metadata: None,
            created_at: now,
            updated_at: now,
            super_pac_public_id: Uuid::new_v4(),
            super_pac_name: "American Technology Excellence Project".to_string(),
            super_pac_funder: "Meta".to_string(),
        }
    }

    #[test]
    fn ad_row_maps_into_domain_record() {
        let record = row().into_record().expect("map");
        assert_eq!(record.platform, Platform::Facebook);
        assert_eq!(record.super_pac.funder, Funder::Meta);
        assert_eq!(record.amount, 950_000);
    }

    #[test]
    fn unknown_platform_token_is_an_invalid_row() {
        let mut bad = row();
        bad.platform = "MYSPACE".to_string();
        assert!(matches!(bad.into_record(), Err(DbError::InvalidRow(_))));
    }

    #[test]
    fn unknown_funder_token_is_an_invalid_row() {
        let mut bad = row();
        bad.super_pac_funder = "Altria".to_string();
        assert!(matches!(bad.into_record(), Err(DbError::InvalidRow(_))));
    }
}
