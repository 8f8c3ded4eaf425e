//! Monthly output structures for projections

use serde::{Deserialize, Serialize};

/// Per-partner and total income for one month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncomeBreakdown {
    pub partner1: f64,
    pub partner2: f64,
    pub total: f64,
}

impl IncomeBreakdown {
    pub fn new(partner1: f64, partner2: f64) -> Self {
        Self { partner1, partner2, total: partner1 + partner2 }
    }
}

/// Expense buckets for one month (or summed across a year)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ExpenseBreakdown {
    pub housing: f64,
    pub childcare: f64,
    pub diapers: f64,
    pub food: f64,
    pub clothing: f64,
    pub healthcare: f64,
    pub one_time: f64,
    pub miscellaneous: f64,
    pub total: f64,
}

impl ExpenseBreakdown {
    /// Recompute the total from the individual buckets
    pub fn finalize_total(&mut self) {
        self.total = self.housing
            + self.childcare
            + self.diapers
            + self.food
            + self.clothing
            + self.healthcare
            + self.one_time
            + self.miscellaneous;
    }

    /// Accumulate another breakdown into this one (yearly aggregation)
    pub fn accumulate(&mut self, other: &ExpenseBreakdown) {
        self.housing += other.housing;
        self.childcare += other.childcare;
        self.diapers += other.diapers;
        self.food += other.food;
        self.clothing += other.clothing;
        self.healthcare += other.healthcare;
        self.one_time += other.one_time;
        self.miscellaneous += other.miscellaneous;
        self.total += other.total;
    }
}

/// A single row of projection output for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// Projection month, 1-60
    pub month: u32,

    /// Projection year, 1-5
    pub year: u32,

    /// Month within the projection year, 1-12
    pub month_of_year: u32,

    /// Baby age in months (month 1 = a 0-month-old)
    pub baby_age_months: u32,

    pub income: IncomeBreakdown,
    pub expenses: ExpenseBreakdown,

    /// Total income minus total expenses for this month
    pub net_cashflow: f64,

    /// Savings balance after applying this month's net cashflow
    pub cumulative_savings: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_finalize_total() {
        let mut expenses = ExpenseBreakdown {
            housing: 2000.0,
            childcare: 1200.0,
            diapers: 80.0,
            food: 150.0,
            clothing: 25.0,
            healthcare: 15.0,
            one_time: 900.0,
            miscellaneous: 170.0,
            total: 0.0,
        };
        expenses.finalize_total();
        assert_relative_eq!(expenses.total, 4540.0);
    }

    #[test]
    fn test_accumulate() {
        let mut a = ExpenseBreakdown { housing: 2000.0, total: 2000.0, ..Default::default() };
        let b = ExpenseBreakdown { housing: 2000.0, childcare: 1200.0, total: 3200.0, ..Default::default() };
        a.accumulate(&b);
        assert_relative_eq!(a.housing, 4000.0);
        assert_relative_eq!(a.total, 5200.0);
    }
}
