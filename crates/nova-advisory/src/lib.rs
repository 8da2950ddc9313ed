//! Domain library for the study-abroad advisory platform.
//!
//! The interesting logic lives under [`workflows`]: readiness scoring for
//! German university admissions and the counsellor review lifecycle shared
//! by documents, APS forms, and university applications. Everything here is
//! synchronous and storage-free; persistence and notification adapters are
//! injected by the hosting service.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
