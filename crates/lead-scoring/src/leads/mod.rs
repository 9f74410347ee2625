//! Caller-side plumbing around the scoring engine: fetch a lead's bundle from a
//! repository, score it, and write the result back.

pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use repository::{LeadBundle, LeadId, LeadRecord, LeadRepository, LeadStatusView, RepositoryError};
pub use router::lead_router;
pub use service::{LeadScoringService, LeadServiceError};
