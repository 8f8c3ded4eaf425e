//! Projection runner for single and batch calculations
//!
//! Loads reference data once, then runs any number of projections without
//! re-reading CSV files. Calculations are pure per-profile, so batches run
//! in parallel over read-only shared tables.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::assumptions::{
    CostAssumptionResolver, ExpenseAssumptions, ReferenceData, ReferenceDataError,
};
use crate::profile::FinancialProfile;
use crate::projection::{
    aggregate_yearly, analyze, MonthlyProjectionEngine, MonthlyRecord, Warning, YearlyRecord,
};

/// Complete projection output: the sole contract with the persistence,
/// prompt-construction, and PDF layers. Downstream readers must not
/// recompute or "correct" any numeric value in here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiveYearProjection {
    /// Assumptions the series was computed under
    pub assumptions: ExpenseAssumptions,

    /// The 60 monthly records, in month order
    pub monthly_projections: Vec<MonthlyRecord>,

    /// The 5 yearly summaries, in year order
    pub yearly_projections: Vec<YearlyRecord>,

    /// Total 5-year cost (sum of yearly total expenses)
    pub total_cost: f64,

    /// Risk warnings, in rule-evaluation order
    pub warnings: Vec<Warning>,

    /// When this projection was generated (cache-coherence anchor)
    pub generated_at: DateTime<Utc>,
}

/// Pre-loaded runner for efficient repeated projections
#[derive(Debug, Clone)]
pub struct ProjectionRunner {
    reference: ReferenceData,
}

impl ProjectionRunner {
    /// Create a runner with the built-in reference tables
    pub fn new() -> Self {
        Self { reference: ReferenceData::builtin() }
    }

    /// Create a runner by loading reference data from the default CSV location
    pub fn from_csv() -> Result<Self, ReferenceDataError> {
        Ok(Self { reference: ReferenceData::from_csv()? })
    }

    /// Create a runner from a specific reference data directory
    pub fn from_csv_path(path: &std::path::Path) -> Result<Self, ReferenceDataError> {
        Ok(Self { reference: ReferenceData::from_csv_path(path)? })
    }

    /// Create a runner with pre-built reference data (test fixtures)
    pub fn with_reference(reference: ReferenceData) -> Self {
        Self { reference }
    }

    /// Run a full projection for one profile
    pub fn run(&self, profile: &FinancialProfile) -> FiveYearProjection {
        let resolver = CostAssumptionResolver::new(&self.reference);
        let assumptions = resolver.resolve(&profile.zip_code, profile.childcare_preference);

        let engine = MonthlyProjectionEngine::new(self.reference.recurring_schedule());
        let monthly_projections = engine.simulate(profile, &assumptions);
        let yearly_projections = aggregate_yearly(&monthly_projections);

        let total_cost = yearly_projections.iter().map(|y| y.total_expenses).sum();
        let warnings = analyze(&monthly_projections, profile, &assumptions);

        log::debug!(
            "projection complete: zip={} band={} total_cost={:.2} warnings={}",
            profile.zip_code,
            assumptions.cost_band.as_str(),
            total_cost,
            warnings.len()
        );

        FiveYearProjection {
            assumptions,
            monthly_projections,
            yearly_projections,
            total_cost,
            warnings,
            generated_at: Utc::now(),
        }
    }

    /// Run projections for many profiles in parallel
    pub fn run_batch(&self, profiles: &[FinancialProfile]) -> Vec<FiveYearProjection> {
        profiles.par_iter().map(|profile| self.run(profile)).collect()
    }

    /// Reference data this runner projects against
    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }
}

impl Default for ProjectionRunner {
    fn default() -> Self {
        Self::new()
    }
}
