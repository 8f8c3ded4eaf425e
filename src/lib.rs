//! Baby Budget - 5-year household cashflow projection engine
//!
//! This library provides:
//! - Geography-aware expense assumption resolution with multi-tier ZIP fallback
//! - A deterministic 60-month income/expense simulation (parental leave,
//!   stay-at-home override, age-gated childcare, one-time purchases)
//! - Yearly aggregation of the monthly series
//! - Rule-based risk warning analysis

pub mod profile;
pub mod assumptions;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use assumptions::{CostAssumptionResolver, ExpenseAssumptions, ReferenceData};
pub use profile::{ChildcarePreference, FinancialProfile, LeavePolicy};
pub use projection::{MonthlyProjectionEngine, MonthlyRecord, Warning, YearlyRecord};
pub use scenario::{FiveYearProjection, ProjectionRunner};
