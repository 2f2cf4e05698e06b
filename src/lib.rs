//! Fee schedule engine for the statutory tariff of Dottori Commercialisti.
//!
//! This crate computes minimum/maximum fee ranges under the multi-schedule
//! tariff "Tabella C", compares an agreed fee against the chosen reference
//! value for compliance with Legge 49/2023, and renders the full computation
//! trail into a paginated PDF document.

#![warn(missing_docs)]

pub mod api;
pub mod compliance;
pub mod config;
pub mod document;
pub mod error;
pub mod models;
pub mod modifiers;
pub mod numeric;
pub mod render;
pub mod schedule;
