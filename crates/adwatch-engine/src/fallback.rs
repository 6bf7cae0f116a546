//! Baseline snapshot served when the record store is unreachable.

use rust_decimal::Decimal;

use adwatch_core::Platform;

use crate::stats::{DashboardStats, PlatformBreakdownEntry, SuperPacBreakdownEntry};

/// Returns the fixed baseline snapshot.
///
/// Served only when the liveness probe fails before any real work begins,
/// and always alongside an error status — callers never see it presented as
/// a successful aggregation. The figures mirror the documented demo dataset
/// so an unreachable store still renders a coherent dashboard.
#[must_use]
pub fn fallback_stats() -> DashboardStats {
    let platform_breakdown = vec![
        platform(Platform::Facebook, 2_520_000, 3),
        platform(Platform::Youtube, 1_700_000, 3),
        platform(Platform::TvAdArchive, 3_050_000, 2),
        platform(Platform::Fec, 1_200_000, 1),
        platform(Platform::Adimpact, 1_130_000, 2),
        platform(Platform::Opensecrets, 580_000, 2),
        platform(Platform::AcluWatch, 320_000, 1),
    ];

    let super_pac_breakdown = vec![
        super_pac("Leading the Future", "OpenAI+a16z", 3_430_000, 5),
        super_pac("American Technology Excellence Project", "Meta", 3_850_000, 4),
        super_pac(
            "Mobilising Economic Transformation Across America",
            "Meta",
            3_220_000,
            5,
        ),
    ];

    DashboardStats {
        total_spend: Decimal::from(10_500_000_i64),
        total_ads: 14,
        open_ai_spend: Decimal::from(3_430_000_i64),
        meta_spend: Decimal::from(7_070_000_i64),
        recent_ads: vec![],
        platform_breakdown,
        super_pac_breakdown,
        cross_platform_analysis: None,
    }
}

fn platform(platform: Platform, spend: i64, count: i64) -> PlatformBreakdownEntry {
    PlatformBreakdownEntry {
        platform,
        spend: Decimal::from(spend),
        count,
    }
}

fn super_pac(name: &str, funder: &str, spend: i64, count: i64) -> SuperPacBreakdownEntry {
    SuperPacBreakdownEntry {
        super_pac: name.to_string(),
        funder: funder.to_string(),
        spend: Decimal::from(spend),
        count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_matches_documented_constants() {
        let stats = fallback_stats();
        assert_eq!(stats.total_spend, Decimal::from(10_500_000_i64));
        assert_eq!(stats.total_ads, 14);
        assert_eq!(stats.open_ai_spend, Decimal::from(3_430_000_i64));
        assert_eq!(stats.meta_spend, Decimal::from(7_070_000_i64));
        assert_eq!(stats.platform_breakdown.len(), 7);
        assert_eq!(stats.super_pac_breakdown.len(), 3);
        assert!(stats.recent_ads.is_empty());
        assert!(stats.cross_platform_analysis.is_none());
    }

    #[test]
    fn baseline_breakdowns_reconcile_with_totals() {
        let stats = fallback_stats();

        let platform_sum: Decimal = stats.platform_breakdown.iter().map(|p| p.spend).sum();
        assert_eq!(platform_sum, stats.total_spend);
        let platform_count: i64 = stats.platform_breakdown.iter().map(|p| p.count).sum();
        assert_eq!(platform_count, stats.total_ads);

        let org_sum: Decimal = stats.super_pac_breakdown.iter().map(|o| o.spend).sum();
        assert_eq!(org_sum, stats.total_spend);
        let org_count: i64 = stats.super_pac_breakdown.iter().map(|o| o.count).sum();
        assert_eq!(org_count, stats.total_ads);

        assert_eq!(
            stats.open_ai_spend + stats.meta_spend,
            stats.total_spend,
            "every baseline record belongs to one of the two funders"
        );
    }
}
