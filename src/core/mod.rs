//! Core domain logic for labelgrade
//!
//! This module contains the scoring engine with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Task, Annotation, Audit, Tier, RatingPolicy)
//! - `services/` - Detector, classifier, aggregator and report assembly
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
