//! Estimated cross-platform spend attribution.
//!
//! The source data carries no per-(organization, platform) cells, so this
//! module distributes each organization's measured total across platforms in
//! proportion to each platform's observed share of global spend and record
//! count. The result is an estimate and is only ever published under the
//! `crossPlatformAnalysis` field, distinct from the measured breakdowns.

use rust_decimal::Decimal;

use crate::stats::{CrossPlatformCell, PlatformBreakdownEntry, SuperPacBreakdownEntry};

/// Derives the estimated (organization x platform) attribution matrix.
///
/// Shares are 0 when their denominator is 0, so an empty dataset yields an
/// empty cell list rather than a division error. Cells that round down to a
/// non-positive spend or count are discarded.
#[must_use]
pub fn cross_platform_analysis(
    platforms: &[PlatformBreakdownEntry],
    organizations: &[SuperPacBreakdownEntry],
    total_spend: Decimal,
    windowed_count: i64,
) -> Vec<CrossPlatformCell> {
    let mut cells = Vec::with_capacity(platforms.len() * organizations.len());

    for org in organizations {
        for platform in platforms {
            let spend_share = if total_spend.is_zero() {
                Decimal::ZERO
            } else {
                platform.spend / total_spend
            };
            let count_share = if windowed_count == 0 {
                0.0
            } else {
                platform.count as f64 / windowed_count as f64
            };

            let spend = org.spend * spend_share;
            // Counts are rounded independently of the spend estimate.
            let count = (org.count as f64 * count_share).round() as i64;

            if spend > Decimal::ZERO && count > 0 {
                cells.push(CrossPlatformCell {
                    platform: platform.platform,
                    super_pac: org.super_pac.clone(),
                    funder: org.funder.clone(),
                    spend,
                    count,
                });
            }
        }
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use adwatch_core::Platform;

    fn platform_entry(platform: Platform, spend: i64, count: i64) -> PlatformBreakdownEntry {
        PlatformBreakdownEntry {
            platform,
            spend: Decimal::from(spend),
            count,
        }
    }

    fn org_entry(name: &str, funder: &str, spend: i64, count: i64) -> SuperPacBreakdownEntry {
        SuperPacBreakdownEntry {
            super_pac: name.to_string(),
            funder: funder.to_string(),
            spend: Decimal::from(spend),
            count,
        }
    }

    #[test]
    fn facebook_share_example() {
        // FACEBOOK holds 24% of a 10.5M total; the first organization spent
        // 3.43M, so its FACEBOOK cell lands at 3,430,000 * 0.24 = 823,200.
        let platforms = vec![
            platform_entry(Platform::Facebook, 2_520_000, 3),
            platform_entry(Platform::TvAdArchive, 7_980_000, 11),
        ];
        let organizations = vec![
            org_entry("Leading the Future", "OpenAI+a16z", 3_430_000, 5),
            org_entry("American Technology Excellence Project", "Meta", 7_070_000, 9),
        ];

        let cells =
            cross_platform_analysis(&platforms, &organizations, Decimal::from(10_500_000), 14);

        let facebook_cell = cells
            .iter()
            .find(|c| c.platform == Platform::Facebook && c.super_pac == "Leading the Future")
            .expect("facebook cell");
        assert_eq!(facebook_cell.spend, Decimal::from(823_200));
        // count share 3/14, 5 * 3/14 = 1.07 -> rounds to 1
        assert_eq!(facebook_cell.count, 1);
    }

    #[test]
    fn organization_row_sums_approximate_its_breakdown_spend() {
        let platforms = vec![
            platform_entry(Platform::Facebook, 2_520_000, 3),
            platform_entry(Platform::Youtube, 1_700_000, 3),
            platform_entry(Platform::TvAdArchive, 3_050_000, 2),
            platform_entry(Platform::Fec, 1_200_000, 1),
            platform_entry(Platform::Adimpact, 1_130_000, 2),
            platform_entry(Platform::Opensecrets, 580_000, 2),
            platform_entry(Platform::AcluWatch, 320_000, 1),
        ];
        let organizations = vec![org_entry("Leading the Future", "OpenAI+a16z", 3_430_000, 5)];

        let cells =
            cross_platform_analysis(&platforms, &organizations, Decimal::from(10_500_000), 14);

        // Platform shares sum to 1, so the surviving cells (all counts here
        // round to >= 1) reconstruct the organization total up to rounding.
        let row_sum: Decimal = cells.iter().map(|c| c.spend).sum();
        let diff = (row_sum - Decimal::from(3_430_000)).abs();
        assert!(diff < Decimal::ONE, "row sum {row_sum} too far from total");
        assert!(cells.iter().all(|c| c.spend > Decimal::ZERO));
    }

    #[test]
    fn empty_dataset_yields_empty_cells() {
        let platforms = vec![platform_entry(Platform::Facebook, 0, 0)];
        let organizations = vec![org_entry("Leading the Future", "OpenAI+a16z", 0, 0)];

        let cells = cross_platform_analysis(&platforms, &organizations, Decimal::ZERO, 0);
        assert!(cells.is_empty());
    }

    #[test]
    fn non_positive_cells_are_discarded() {
        // A platform with spend but a count share that rounds to zero for a
        // small organization produces no cell.
        let platforms = vec![
            platform_entry(Platform::Facebook, 9_900_000, 49),
            platform_entry(Platform::AcluWatch, 100_000, 1),
        ];
        let organizations = vec![org_entry("Tiny PAC", "Meta", 10_000, 1)];

        let cells =
            cross_platform_analysis(&platforms, &organizations, Decimal::from(10_000_000), 50);

        // 1 * (1/50) = 0.02 rounds to 0 -> ACLU_WATCH cell dropped.
        assert!(cells.iter().all(|c| c.platform != Platform::AcluWatch));
        assert!(cells.iter().all(|c| c.spend > Decimal::ZERO && c.count > 0));
    }

    #[test]
    fn cell_order_is_organization_major() {
        let platforms = vec![
            platform_entry(Platform::Facebook, 500, 1),
            platform_entry(Platform::Youtube, 500, 1),
        ];
        let organizations = vec![
            org_entry("A", "Meta", 1_000, 2),
            org_entry("B", "Meta", 1_000, 2),
        ];

        let cells = cross_platform_analysis(&platforms, &organizations, Decimal::from(1_000), 2);
        let names: Vec<&str> = cells.iter().map(|c| c.super_pac.as_str()).collect();
        assert_eq!(names, vec!["A", "A", "B", "B"]);
    }
}
