//! Spend aggregation and breakdown engine.
//!
//! Computes the consolidated reporting snapshot (totals, per-funder totals,
//! per-platform and per-organization breakdowns, and the estimated
//! cross-platform attribution) from a [`adwatch_core::RecordStore`] handle.
//! Every derived value is recomputed per call from a fresh snapshot read;
//! nothing here holds mutable state.

pub mod aggregate;
pub mod attribution;
pub mod fallback;
pub mod serialize;
pub mod stats;

pub use aggregate::{AggregationEngine, RECENT_WINDOW};
pub use attribution::cross_platform_analysis;
pub use fallback::fallback_stats;
pub use serialize::{serialize_ad, AdWire, OrganizationWire};
pub use stats::{
    CrossPlatformCell, DashboardStats, PlatformBreakdownEntry, SuperPacBreakdownEntry,
};
