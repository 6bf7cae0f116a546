//! Wire-safe rendition of a loaded ad record.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use adwatch_core::{AdRecord, Platform};

/// Largest impression counter that survives an IEEE-754 double exactly
/// (2^53 - 1). Larger values fail closed rather than silently losing
/// precision in a JSON client.
pub const MAX_SAFE_COUNTER: i64 = 9_007_199_254_740_991;

/// Owning organization as embedded in a serialized ad.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganizationWire {
    pub id: Uuid,
    pub name: String,
    pub funder: String,
}

/// One ad record as rendered to dashboard clients.
///
/// Timestamps are RFC 3339 strings; absent optional fields are omitted
/// rather than rendered as null.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdWire {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub platform: Platform,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_ad_id: Option<String>,
    #[serde(rename = "superPAC")]
    pub super_pac: OrganizationWire,
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geographic_target: Option<String>,
    pub start_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impressions: Option<i64>,
    /// Set when the source counter exceeds [`MAX_SAFE_COUNTER`] and the
    /// numeric field was withheld.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impressions_unavailable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Maps one loaded record to its wire representation.
///
/// A malformed metadata blob is swallowed here: the field is omitted for
/// that record alone and is never counted as an aggregation failure.
#[must_use]
pub fn serialize_ad(record: &AdRecord) -> AdWire {
    let (impressions, impressions_unavailable) = match record.impressions {
        Some(v) if (0..=MAX_SAFE_COUNTER).contains(&v) => (Some(v), None),
        Some(v) => {
            tracing::warn!(ad_id = %record.id, impressions = v, "impression counter outside safe range, withholding field");
            (None, Some(true))
        }
        None => (None, None),
    };

    let metadata = record.metadata.as_deref().and_then(|raw| {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!(ad_id = %record.id, error = %e, "unparsable ad metadata, omitting field");
                None
            }
        }
    });

    AdWire {
        id: record.id,
        title: record.title.clone(),
        description: record.description.clone(),
        platform: record.platform,
        platform_ad_id: record.platform_ad_id.clone(),
        super_pac: OrganizationWire {
            id: record.super_pac.id,
            name: record.super_pac.name.clone(),
            funder: record.super_pac.funder.to_string(),
        },
        amount: record.amount,
        target_audience: record.target_audience.clone(),
        geographic_target: record.geographic_target.clone(),
        start_date: record.start_date,
        end_date: record.end_date,
        impressions,
        impressions_unavailable,
        ad_url: record.ad_url.clone(),
        metadata,
        created_at: record.created_at,
        updated_at: record.updated_at,
    }
}
