//! Core business logic for Nexus.
//!
//! This crate contains pure business logic with ZERO web or storage dependencies.
//! All domain types, presence checks, and calculations live here. Every
//! mutating operation takes `&mut BusinessData` and the current instant, so
//! callers decide how state is shared and what "today" is.
//!
//! # Modules
//!
//! - `accounting` - Ledger, receivables, payables, holdings and reports
//! - `hr` - Employee directory, hiring pipeline and job proformas
//! - `dashboard` - Headline figures for the landing view
//! - `insight` - Financial summary and prompts for the AI collaborator

pub mod accounting;
pub mod business;
pub mod dashboard;
pub mod hr;
pub mod insight;
pub mod validation;

pub use business::BusinessData;
