//! Core data models for the fee schedule engine.
//!
//! This module contains all the domain models used throughout the engine.

mod input;
mod result;
mod schedule;

pub use input::{
    CalculationInput, RawValue, SupervisoryRole, TaxReturnItem, TierIntensity,
};
pub use result::{
    ComplianceStatus, ComplianceVerdict, ComputationResult, ProfessionalProfile,
    RenderedDocument, TierBreakdown, TierRow,
};
pub use schedule::{ScheduleId, normative_reference_for};
