//! CarbonGuard - compliance risk and cost-benefit analysis service.
//!
//! This crate scores compliance documents across four weighted risk areas,
//! ranks mitigation strategies by ROI, and projects compliance costs under
//! what-if regulatory scenarios, all served over a small JSON API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
