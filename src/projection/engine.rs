//! Core engine for the 60-month income/expense simulation

use super::records::{ExpenseBreakdown, IncomeBreakdown, MonthlyRecord};
use super::state::ProjectionState;
use crate::assumptions::{ExpenseAssumptions, ExpenseBucket, RecurringCostSchedule};
use crate::profile::{ChildcarePreference, FinancialProfile, LeavePolicy, Partner};

/// Number of months in a full projection (5 years)
pub const PROJECTION_MONTHS: u32 = 60;

/// Number of years in a full projection
pub const PROJECTION_YEARS: u32 = 5;

/// Baby age (months) at which the childcare cost reduction begins
pub const CHILDCARE_REDUCTION_AGE_MONTHS: u32 = 36;

/// Childcare cost multiplier once the reduction applies (20% off)
pub const CHILDCARE_REDUCTION_FACTOR: f64 = 0.8;

/// Monthly projection engine
///
/// A pure function of (profile, assumptions): no I/O, no randomness, and
/// identical output for identical input on every run.
pub struct MonthlyProjectionEngine {
    schedule: RecurringCostSchedule,
}

impl MonthlyProjectionEngine {
    /// Create a new engine with the given recurring cost schedule
    pub fn new(schedule: RecurringCostSchedule) -> Self {
        Self { schedule }
    }

    /// Produce the ordered 60-month series for a profile
    pub fn simulate(
        &self,
        profile: &FinancialProfile,
        assumptions: &ExpenseAssumptions,
    ) -> Vec<MonthlyRecord> {
        let mut records = Vec::with_capacity(PROJECTION_MONTHS as usize);
        let mut state = ProjectionState::from_profile(profile);

        for _month in 1..=PROJECTION_MONTHS {
            state.advance_month();
            records.push(self.calculate_month(profile, assumptions, &mut state));
        }

        records
    }

    /// Compute income, expenses, and the savings roll-forward for one month
    fn calculate_month(
        &self,
        profile: &FinancialProfile,
        assumptions: &ExpenseAssumptions,
        state: &mut ProjectionState,
    ) -> MonthlyRecord {
        let baby_age_months = state.baby_age_months;

        let mut partner1_income =
            income_with_leave(profile.partner1_income, baby_age_months, &profile.partner1_leave);
        let mut partner2_income =
            income_with_leave(profile.partner2_income, baby_age_months, &profile.partner2_leave);

        // Stay-at-home: once the lower earner's own leave has run out, their
        // income drops to zero for the rest of the projection.
        if profile.childcare_preference == ChildcarePreference::StayAtHome {
            let stay_home = profile.lower_earner();
            let leave = profile.leave_for(stay_home);
            if (baby_age_months as f64) >= leave.leave_months() {
                match stay_home {
                    Partner::One => partner1_income = 0.0,
                    Partner::Two => partner2_income = 0.0,
                }
            }
        }

        let income = IncomeBreakdown::new(partner1_income, partner2_income);
        let expenses = self.monthly_expenses(baby_age_months, state.year, profile, assumptions);

        let net_cashflow = income.total - expenses.total;
        state.cumulative_savings += net_cashflow;

        MonthlyRecord {
            month: state.month,
            year: state.year,
            month_of_year: state.month_of_year,
            baby_age_months,
            income,
            expenses,
            net_cashflow,
            cumulative_savings: state.cumulative_savings,
        }
    }

    /// Expense buckets for a given baby age and projection year
    fn monthly_expenses(
        &self,
        baby_age_months: u32,
        year: u32,
        profile: &FinancialProfile,
        assumptions: &ExpenseAssumptions,
    ) -> ExpenseBreakdown {
        let mut expenses = ExpenseBreakdown {
            housing: profile.monthly_housing_cost,
            ..Default::default()
        };

        // One-time nursery purchases land entirely in the birth month
        if baby_age_months == 0 {
            expenses.one_time = assumptions.one_time_costs.total();
        }

        // Recurring items for this year, routed through the bucket mapping
        for (item, amount) in self.schedule.monthly_costs_for_year(year) {
            match item.bucket() {
                ExpenseBucket::Diapers => expenses.diapers += amount,
                ExpenseBucket::Food => expenses.food += amount,
                ExpenseBucket::Clothing => expenses.clothing += amount,
                ExpenseBucket::Healthcare => expenses.healthcare += amount,
                ExpenseBucket::Miscellaneous => expenses.miscellaneous += amount,
            }
        }

        // Childcare begins at the configured start age and drops 20% at 36 months
        if baby_age_months >= assumptions.childcare_start_month {
            let base_cost = assumptions
                .childcare_costs
                .for_preference(profile.childcare_preference);

            expenses.childcare = if baby_age_months >= CHILDCARE_REDUCTION_AGE_MONTHS {
                base_cost * CHILDCARE_REDUCTION_FACTOR
            } else {
                base_cost
            };
        }

        expenses.finalize_total();
        expenses
    }
}

/// Income for one partner in one month, scaled for parental leave
fn income_with_leave(base_income: f64, baby_age_months: u32, leave: &LeavePolicy) -> f64 {
    if (baby_age_months as f64) < leave.leave_months() {
        base_income * (leave.percent_paid / 100.0)
    } else {
        base_income
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::{CostAssumptionResolver, ReferenceData};
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn test_profile() -> FinancialProfile {
        FinancialProfile {
            partner1_income: 5000.0,
            partner2_income: 4500.0,
            zip_code: "10001".to_string(),
            due_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            current_savings: 10000.0,
            childcare_preference: ChildcarePreference::Daycare,
            partner1_leave: LeavePolicy::new(12.0, 100.0),
            partner2_leave: LeavePolicy::new(12.0, 60.0),
            monthly_housing_cost: 2000.0,
        }
    }

    fn simulate(profile: &FinancialProfile) -> (Vec<MonthlyRecord>, ExpenseAssumptions) {
        let reference = ReferenceData::builtin();
        let assumptions = CostAssumptionResolver::new(&reference)
            .resolve(&profile.zip_code, profile.childcare_preference);
        let engine = MonthlyProjectionEngine::new(reference.recurring_schedule());
        (engine.simulate(profile, &assumptions), assumptions)
    }

    #[test]
    fn test_simulation_produces_60_ordered_months() {
        let (records, _) = simulate(&test_profile());
        assert_eq!(records.len(), 60);

        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.month, i as u32 + 1);
            assert_eq!(record.baby_age_months, i as u32);
        }
        assert_eq!(records[59].year, 5);
        assert_eq!(records[59].month_of_year, 12);
    }

    #[test]
    fn test_determinism() {
        let profile = test_profile();
        let (first, _) = simulate(&profile);
        let (second, _) = simulate(&profile);
        assert_eq!(first, second);
    }

    #[test]
    fn test_one_time_costs_only_in_month_1() {
        let (records, assumptions) = simulate(&test_profile());

        assert_relative_eq!(records[0].expenses.one_time, assumptions.one_time_costs.total());
        for record in &records[1..] {
            assert_eq!(record.expenses.one_time, 0.0);
        }
    }

    #[test]
    fn test_childcare_gating_and_reduction() {
        let (records, assumptions) = simulate(&test_profile());
        let base_cost = assumptions.childcare_costs.daycare;

        // Zero before the start age (months 1-6 cover baby ages 0-5)
        for record in &records[..6] {
            assert_eq!(record.expenses.childcare, 0.0);
        }
        // Full cost from month 7 (age 6) through age 35
        for record in &records[6..36] {
            assert_relative_eq!(record.expenses.childcare, base_cost);
        }
        // 80% of base from month 37 (age 36) onward
        for record in &records[36..] {
            assert_relative_eq!(record.expenses.childcare, base_cost * 0.8);
        }
    }

    #[test]
    fn test_income_during_leave() {
        let (records, _) = simulate(&test_profile());

        // 12 weeks of leave is ~2.77 months: baby ages 0-2 are on leave
        for record in &records[..3] {
            assert_relative_eq!(record.income.partner1, 5000.0); // 100% paid
            assert_relative_eq!(record.income.partner2, 2700.0); // 60% paid
        }
        // Leave over from age 3 onward
        for record in &records[3..] {
            assert_relative_eq!(record.income.partner2, 4500.0);
        }
    }

    #[test]
    fn test_stay_at_home_override() {
        let mut profile = test_profile();
        profile.childcare_preference = ChildcarePreference::StayAtHome;
        let (records, _) = simulate(&profile);

        // Partner 2 is the lower earner: 60% pay during leave, then zero forever
        for record in &records[..3] {
            assert_relative_eq!(record.income.partner2, 2700.0);
        }
        for record in &records[3..] {
            assert_eq!(record.income.partner2, 0.0);
            assert_relative_eq!(record.income.partner1, 5000.0);
        }

        // No childcare expense in any month
        for record in &records {
            assert_eq!(record.expenses.childcare, 0.0);
        }
    }

    #[test]
    fn test_stay_at_home_tie_zeroes_partner1() {
        let mut profile = test_profile();
        profile.partner1_income = 4500.0;
        profile.partner2_income = 4500.0;
        profile.childcare_preference = ChildcarePreference::StayAtHome;
        let (records, _) = simulate(&profile);

        let last = records.last().unwrap();
        assert_eq!(last.income.partner1, 0.0);
        assert_relative_eq!(last.income.partner2, 4500.0);
    }

    #[test]
    fn test_cumulative_savings_chain() {
        let profile = test_profile();
        let (records, _) = simulate(&profile);

        let mut expected = profile.current_savings;
        for record in &records {
            expected += record.net_cashflow;
            assert_relative_eq!(record.cumulative_savings, expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_first_month_golden_values() {
        let (records, _) = simulate(&test_profile());
        let first = &records[0];

        // Income: 5000 + 4500 * 0.6
        assert_relative_eq!(first.income.total, 7700.0);
        // Housing 2000, recurring 270 + 170 misc, one-time 2300 (high band)
        assert_relative_eq!(first.expenses.housing, 2000.0);
        assert_relative_eq!(first.expenses.diapers, 80.0);
        assert_relative_eq!(first.expenses.food, 150.0);
        assert_relative_eq!(first.expenses.clothing, 25.0);
        assert_relative_eq!(first.expenses.healthcare, 15.0);
        assert_relative_eq!(first.expenses.miscellaneous, 170.0);
        assert_relative_eq!(first.expenses.one_time, 2300.0);
        assert_relative_eq!(first.expenses.total, 4740.0);
        assert_relative_eq!(first.net_cashflow, 2960.0);
        assert_relative_eq!(first.cumulative_savings, 12960.0);
    }

    #[test]
    fn test_miscellaneous_escalation_reaches_the_records() {
        let (records, _) = simulate(&test_profile());

        // Toys 20 + activities 150 * 1.2^(y-2) from year 3
        assert_relative_eq!(records[12].expenses.miscellaneous, 170.0, epsilon = 1e-9);
        assert_relative_eq!(records[24].expenses.miscellaneous, 200.0, epsilon = 1e-9);
        assert_relative_eq!(records[36].expenses.miscellaneous, 236.0, epsilon = 1e-9);
        assert_relative_eq!(records[48].expenses.miscellaneous, 279.2, epsilon = 1e-9);
    }
}
