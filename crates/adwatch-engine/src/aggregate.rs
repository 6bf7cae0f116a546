//! Fault-tolerant computation of the dashboard snapshot.

use std::time::Duration;

use rust_decimal::Decimal;
use tokio::time::timeout;

use adwatch_core::{AdRecord, Funder, OrganizationGroup, RecordStore, StoreError};

use crate::attribution::cross_platform_analysis;
use crate::serialize::serialize_ad;
use crate::stats::{DashboardStats, PlatformBreakdownEntry, SuperPacBreakdownEntry};

/// Cap on the loaded record window. Bounds response size and fixes a
/// deterministic basis for every in-memory fallback computation.
pub const RECENT_WINDOW: i64 = 50;

const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Computes [`DashboardStats`] from an injected record store.
///
/// The store handle is passed in at construction so tests can substitute an
/// in-memory fake. One engine value is cheap and request-scoped; it holds no
/// state beyond the handle itself.
pub struct AggregationEngine<S> {
    store: S,
    probe_timeout: Duration,
}

impl<S: RecordStore> AggregationEngine<S> {
    pub fn new(store: S) -> Self {
        Self::with_probe_timeout(store, DEFAULT_PROBE_TIMEOUT)
    }

    pub fn with_probe_timeout(store: S, probe_timeout: Duration) -> Self {
        Self {
            store,
            probe_timeout,
        }
    }

    /// Produces the full snapshot.
    ///
    /// The liveness probe is the single gate: if it fails or times out the
    /// whole request is unreachable and the caller falls back to
    /// [`crate::fallback_stats`]. Past the gate, each aggregate query fails
    /// independently and degrades to a recomputation over the loaded window
    /// without aborting its siblings.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unreachable`] when the probe fails or times
    /// out, and [`StoreError::Query`] when the record window itself cannot
    /// be loaded — every fallback computation depends on the window, so a
    /// failed load is fatal for the request.
    pub async fn collect(&self) -> Result<DashboardStats, StoreError> {
        match timeout(self.probe_timeout, self.store.probe_liveness()).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                tracing::error!(error = %e, "record store liveness probe failed");
                return Err(StoreError::Unreachable(e.to_string()));
            }
            Err(_) => {
                tracing::error!(
                    timeout_secs = self.probe_timeout.as_secs(),
                    "record store liveness probe timed out"
                );
                return Err(StoreError::Unreachable(
                    "liveness probe timed out".to_string(),
                ));
            }
        }

        let window = self.store.load_recent_records(RECENT_WINDOW).await?;

        // Independent pure reads against one snapshot; a failure in any of
        // them must not cancel the others.
        let (total, open_ai, meta, platform_groups, organization_groups) = tokio::join!(
            self.store.sum_amount(None),
            self.store.sum_amount(Some(Funder::OpenAiA16z)),
            self.store.sum_amount(Some(Funder::Meta)),
            self.store.group_by_platform(),
            self.store.group_by_organization(),
        );

        let total_spend = total.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "total spend query failed, recomputing from window");
            windowed_total(&window)
        });
        let open_ai_spend = open_ai.unwrap_or_else(|e| {
            tracing::warn!(error = %e, funder = %Funder::OpenAiA16z, "funder spend query failed, recomputing from window");
            windowed_funder_total(&window, Funder::OpenAiA16z)
        });
        let meta_spend = meta.unwrap_or_else(|e| {
            tracing::warn!(error = %e, funder = %Funder::Meta, "funder spend query failed, recomputing from window");
            windowed_funder_total(&window, Funder::Meta)
        });

        let platform_breakdown = match platform_groups {
            Ok(groups) => groups
                .into_iter()
                .map(|g| PlatformBreakdownEntry {
                    platform: g.platform,
                    spend: g.spend,
                    count: g.count,
                })
                .collect(),
            Err(e) => {
                tracing::warn!(error = %e, "platform breakdown query failed, folding window");
                windowed_platform_breakdown(&window)
            }
        };

        let super_pac_breakdown = match organization_groups {
            Ok(groups) => self.resolve_organization_groups(groups).await,
            Err(e) => {
                tracing::warn!(error = %e, "organization breakdown query failed, folding window");
                windowed_super_pac_breakdown(&window)
            }
        };

        let total_ads = window.len() as i64;
        let cross_platform = cross_platform_analysis(
            &platform_breakdown,
            &super_pac_breakdown,
            total_spend,
            total_ads,
        );
        let recent_ads = window.iter().map(serialize_ad).collect();

        Ok(DashboardStats {
            total_spend,
            total_ads,
            open_ai_spend,
            meta_spend,
            recent_ads,
            platform_breakdown,
            super_pac_breakdown,
            cross_platform_analysis: Some(cross_platform),
        })
    }

    /// Attaches display name/funder to each organization group.
    ///
    /// A lookup that fails or finds nothing substitutes the literal
    /// `"Unknown"` for both fields; it never aborts the breakdown.
    async fn resolve_organization_groups(
        &self,
        groups: Vec<OrganizationGroup>,
    ) -> Vec<SuperPacBreakdownEntry> {
        let mut entries = Vec::with_capacity(groups.len());
        for group in groups {
            let organization = match self.store.find_organization(group.organization_id).await {
                Ok(found) => found,
                Err(e) => {
                    tracing::warn!(
                        organization_id = %group.organization_id,
                        error = %e,
                        "organization lookup failed, labeling group Unknown"
                    );
                    None
                }
            };

            let (name, funder) = organization.map_or_else(
                || ("Unknown".to_string(), "Unknown".to_string()),
                |org| (org.name, org.funder.to_string()),
            );

            entries.push(SuperPacBreakdownEntry {
                super_pac: name,
                funder,
                spend: group.spend,
                count: group.count,
            });
        }
        entries
    }
}

fn windowed_total(window: &[AdRecord]) -> Decimal {
    Decimal::from(window.iter().map(|ad| ad.amount).sum::<i64>())
}

fn windowed_funder_total(window: &[AdRecord], funder: Funder) -> Decimal {
    Decimal::from(
        window
            .iter()
            .filter(|ad| ad.super_pac.funder == funder)
            .map(|ad| ad.amount)
            .sum::<i64>(),
    )
}

/// Folds the window into per-platform sums, preserving first-seen order.
fn windowed_platform_breakdown(window: &[AdRecord]) -> Vec<PlatformBreakdownEntry> {
    let mut entries: Vec<PlatformBreakdownEntry> = Vec::new();
    for ad in window {
        match entries.iter_mut().find(|e| e.platform == ad.platform) {
            Some(entry) => {
                entry.spend += Decimal::from(ad.amount);
                entry.count += 1;
            }
            None => entries.push(PlatformBreakdownEntry {
                platform: ad.platform,
                spend: Decimal::from(ad.amount),
                count: 1,
            }),
        }
    }
    entries
}

/// Folds the window into per-organization sums. Each bucket is seeded with
/// the name/funder of the first record seen for that organization.
fn windowed_super_pac_breakdown(window: &[AdRecord]) -> Vec<SuperPacBreakdownEntry> {
    let mut buckets: Vec<(uuid::Uuid, SuperPacBreakdownEntry)> = Vec::new();
    for ad in window {
        match buckets.iter_mut().find(|(id, _)| *id == ad.super_pac.id) {
            Some((_, entry)) => {
                entry.spend += Decimal::from(ad.amount);
                entry.count += 1;
            }
            None => buckets.push((
                ad.super_pac.id,
                SuperPacBreakdownEntry {
                    super_pac: ad.super_pac.name.clone(),
                    funder: ad.super_pac.funder.to_string(),
                    spend: Decimal::from(ad.amount),
                    count: 1,
                },
            )),
        }
    }
    buckets.into_iter().map(|(_, entry)| entry).collect()
}
