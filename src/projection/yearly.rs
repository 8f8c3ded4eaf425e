//! Aggregation of the monthly series into yearly summaries

use serde::{Deserialize, Serialize};

use super::engine::PROJECTION_YEARS;
use super::records::{ExpenseBreakdown, MonthlyRecord};

/// Summary of one projection year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyRecord {
    /// Projection year, 1-5
    pub year: u32,

    pub total_income: f64,
    pub total_expenses: f64,
    pub net_cashflow: f64,

    /// Cumulative savings as of the year's final month
    pub ending_savings: f64,

    /// Expense buckets summed across the year's months
    pub expense_breakdown: ExpenseBreakdown,
}

/// Reduce the monthly series into one record per year
///
/// Each year is computed independently from its own 12-month slice;
/// `ending_savings` is read from the slice's last month, not re-summed.
pub fn aggregate_yearly(monthly_records: &[MonthlyRecord]) -> Vec<YearlyRecord> {
    let mut yearly = Vec::with_capacity(PROJECTION_YEARS as usize);

    for year in 1..=PROJECTION_YEARS {
        let months: Vec<&MonthlyRecord> =
            monthly_records.iter().filter(|m| m.year == year).collect();

        let total_income: f64 = months.iter().map(|m| m.income.total).sum();
        let total_expenses: f64 = months.iter().map(|m| m.expenses.total).sum();
        let ending_savings = months.last().map(|m| m.cumulative_savings).unwrap_or(0.0);

        let mut expense_breakdown = ExpenseBreakdown::default();
        for month in &months {
            expense_breakdown.accumulate(&month.expenses);
        }

        yearly.push(YearlyRecord {
            year,
            total_income,
            total_expenses,
            net_cashflow: total_income - total_expenses,
            ending_savings,
            expense_breakdown,
        });
    }

    yearly
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::{CostAssumptionResolver, ReferenceData};
    use crate::profile::{ChildcarePreference, FinancialProfile, LeavePolicy};
    use crate::projection::MonthlyProjectionEngine;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn monthly_records() -> Vec<MonthlyRecord> {
        let profile = FinancialProfile {
            partner1_income: 5000.0,
            partner2_income: 4500.0,
            zip_code: "10001".to_string(),
            due_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            current_savings: 10000.0,
            childcare_preference: ChildcarePreference::Daycare,
            partner1_leave: LeavePolicy::new(12.0, 100.0),
            partner2_leave: LeavePolicy::new(12.0, 60.0),
            monthly_housing_cost: 2000.0,
        };
        let reference = ReferenceData::builtin();
        let assumptions = CostAssumptionResolver::new(&reference)
            .resolve(&profile.zip_code, profile.childcare_preference);
        MonthlyProjectionEngine::new(reference.recurring_schedule()).simulate(&profile, &assumptions)
    }

    #[test]
    fn test_five_years_produced() {
        let yearly = aggregate_yearly(&monthly_records());
        assert_eq!(yearly.len(), 5);
        for (i, record) in yearly.iter().enumerate() {
            assert_eq!(record.year, i as u32 + 1);
        }
    }

    #[test]
    fn test_net_cashflow_conservation() {
        let monthly = monthly_records();
        let yearly = aggregate_yearly(&monthly);

        for record in &yearly {
            let month_sum: f64 = monthly
                .iter()
                .filter(|m| m.year == record.year)
                .map(|m| m.net_cashflow)
                .sum();
            assert_relative_eq!(record.net_cashflow, month_sum, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_ending_savings_matches_final_month() {
        let monthly = monthly_records();
        let yearly = aggregate_yearly(&monthly);

        for record in &yearly {
            let last_month = monthly
                .iter()
                .filter(|m| m.year == record.year)
                .last()
                .unwrap();
            assert_eq!(last_month.month_of_year, 12);
            assert_relative_eq!(record.ending_savings, last_month.cumulative_savings);
        }
    }

    #[test]
    fn test_breakdown_is_additive() {
        let monthly = monthly_records();
        let yearly = aggregate_yearly(&monthly);

        let year1 = &yearly[0];
        let housing_sum: f64 = monthly
            .iter()
            .filter(|m| m.year == 1)
            .map(|m| m.expenses.housing)
            .sum();
        assert_relative_eq!(year1.expense_breakdown.housing, housing_sum);
        assert_relative_eq!(year1.expense_breakdown.total, year1.total_expenses, epsilon = 1e-9);

        // One-time purchases only ever land in year 1
        assert!(year1.expense_breakdown.one_time > 0.0);
        for record in &yearly[1..] {
            assert_eq!(record.expense_breakdown.one_time, 0.0);
        }
    }
}
