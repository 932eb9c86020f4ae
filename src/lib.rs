//! Payroll calculators for Korean education-office administrative work.
//!
//! This crate covers contract-teacher wages (day classification, monthly
//! aggregation and wage calculation from the step schedule), vacation
//! training and weekend education stipends, travel expense calculation and
//! verification, and unused annual leave payouts. Every calculator is a pure
//! function over explicit inputs and the rule configuration; the [`api`]
//! module serves them over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
