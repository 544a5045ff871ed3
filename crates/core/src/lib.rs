//! Core financial engine for Clinia.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types, validation rules, and calculations for the
//! commercial budget engine live here.
//!
//! # Modules
//!
//! - `budget` - Budget aggregate and pricing aggregation
//! - `payment` - Fee-adjusted payment plans and installment schedules
//! - `anticipation` - Receivables anticipation simulation
//! - `margin` - Profit margin analysis and the debounced recompute driver
//! - `approval` - Margin-gated budget approval state machine
//! - `summary` - Read-only financial view-models for the presentation layer

pub mod anticipation;
pub mod approval;
pub mod budget;
pub mod margin;
pub mod payment;
pub mod summary;
