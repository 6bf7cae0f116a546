//! Domain model for ad placements and their funding organizations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::platform::{Funder, Platform};

/// The owning organization, as embedded in a loaded [`AdRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationRef {
    pub id: Uuid,
    pub name: String,
    pub funder: Funder,
}

/// An immutable fact about one advertisement placement, with its owning
/// organization resolved.
///
/// `amount` is whole dollars and is never negative (enforced by a database
/// CHECK constraint on the write path). `start_date` is always present;
/// everything optional here is genuinely optional in the source data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdRecord {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub platform: Platform,
    pub platform_ad_id: Option<String>,
    pub super_pac: OrganizationRef,
    pub amount: i64,
    pub target_audience: Option<String>,
    pub geographic_target: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub impressions: Option<i64>,
    pub ad_url: Option<String>,
    /// Opaque JSON-encoded metadata blob, decoded only at serialization time.
    pub metadata: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A named entity ("Super PAC") that funds one or more ad placements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingOrganization {
    pub id: Uuid,
    pub name: String,
    pub funder: Funder,
    pub description: Option<String>,
}
