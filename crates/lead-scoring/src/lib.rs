//! Lead scoring: a deterministic, explainable priority score for sales leads.
//!
//! - `scoring`: the pure scoring engine (weight profiles, factor rules, AI adjustment).
//! - `leads`: repository-backed recalculation service and HTTP router.
//! - `config`, `telemetry`, `error`: ambient service plumbing.

pub mod config;
pub mod error;
pub mod leads;
pub mod scoring;
pub mod telemetry;
