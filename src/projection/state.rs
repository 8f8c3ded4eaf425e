//! Projection state tracking for a single simulation run

use crate::profile::FinancialProfile;

/// State of a simulation at a point in time
///
/// The only carried quantity is the savings balance; each month's record
/// depends solely on the previous month's balance and the month index.
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Current projection month (1-indexed; 0 before the first advance)
    pub month: u32,

    /// Projection year (1-indexed)
    pub year: u32,

    /// Month within the projection year (1-12)
    pub month_of_year: u32,

    /// Baby age in months (month index - 1)
    pub baby_age_months: u32,

    /// Savings balance carried into the current month
    pub cumulative_savings: f64,
}

impl ProjectionState {
    /// Initialize state from a profile at projection start
    pub fn from_profile(profile: &FinancialProfile) -> Self {
        Self {
            month: 0,
            year: 1,
            month_of_year: 0,
            baby_age_months: 0,
            cumulative_savings: profile.current_savings,
        }
    }

    /// Advance to the next month
    pub fn advance_month(&mut self) {
        self.month += 1;
        self.year = (self.month - 1) / 12 + 1;
        self.month_of_year = (self.month - 1) % 12 + 1;
        self.baby_age_months = self.month - 1;
    }
}
