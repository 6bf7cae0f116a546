//! Derived reporting types returned to dashboard clients.
//!
//! None of these values are persisted; each is a pure function of the record
//! snapshot at request time. Spend aggregates are `Decimal` internally and
//! plain JSON numbers on the wire.

use rust_decimal::Decimal;
use serde::Serialize;

use adwatch_core::Platform;

use crate::serialize::AdWire;

/// Measured spend/count for one platform.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformBreakdownEntry {
    pub platform: Platform,
    #[serde(with = "rust_decimal::serde::float")]
    pub spend: Decimal,
    pub count: i64,
}

/// Measured spend/count for one funding organization.
///
/// `super_pac` and `funder` are plain strings because a breakdown group whose
/// organization cannot be resolved renders as the literal `"Unknown"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuperPacBreakdownEntry {
    #[serde(rename = "superPAC")]
    pub super_pac: String,
    pub funder: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub spend: Decimal,
    pub count: i64,
}

/// One estimated (organization x platform) attribution cell.
///
/// These values are derived by proportional allocation from marginal shares,
/// not measured per-cell; they are only ever exposed under the distinct
/// `crossPlatformAnalysis` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossPlatformCell {
    pub platform: Platform,
    #[serde(rename = "superPAC")]
    pub super_pac: String,
    pub funder: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub spend: Decimal,
    pub count: i64,
}

/// The consolidated reporting snapshot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_spend: Decimal,
    /// Count of records in the loaded window, capped at
    /// [`crate::RECENT_WINDOW`].
    pub total_ads: i64,
    #[serde(rename = "openAISpend", with = "rust_decimal::serde::float")]
    pub open_ai_spend: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub meta_spend: Decimal,
    pub recent_ads: Vec<AdWire>,
    pub platform_breakdown: Vec<PlatformBreakdownEntry>,
    #[serde(rename = "superPACBreakdown")]
    pub super_pac_breakdown: Vec<SuperPacBreakdownEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_platform_analysis: Option<Vec<CrossPlatformCell>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_stats_uses_documented_field_names() {
        let stats = DashboardStats {
            total_spend: Decimal::from(100),
            total_ads: 2,
            open_ai_spend: Decimal::from(40),
            meta_spend: Decimal::from(60),
            recent_ads: vec![],
            platform_breakdown: vec![PlatformBreakdownEntry {
                platform: Platform::Facebook,
                spend: Decimal::from(100),
                count: 2,
            }],
            super_pac_breakdown: vec![SuperPacBreakdownEntry {
                super_pac: "Leading the Future".to_string(),
                funder: "OpenAI+a16z".to_string(),
                spend: Decimal::from(100),
                count: 2,
            }],
            cross_platform_analysis: None,
        };

        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&stats).expect("serialize"))
                .expect("parse");
        assert_eq!(json["totalSpend"].as_f64(), Some(100.0));
        assert_eq!(json["totalAds"].as_i64(), Some(2));
        assert_eq!(json["openAISpend"].as_f64(), Some(40.0));
        assert_eq!(json["metaSpend"].as_f64(), Some(60.0));
        assert!(json["recentAds"].is_array());
        assert_eq!(
            json["platformBreakdown"][0]["platform"].as_str(),
            Some("FACEBOOK")
        );
        assert_eq!(
            json["superPACBreakdown"][0]["superPAC"].as_str(),
            Some("Leading the Future")
        );
        // The estimate field is omitted entirely when absent, never null.
        assert!(json.get("crossPlatformAnalysis").is_none());
    }
}
