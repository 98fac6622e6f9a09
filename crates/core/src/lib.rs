//! Core business logic for Changemaker.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `change` - Minimum-coin change making over unlimited denominations

pub mod change;
