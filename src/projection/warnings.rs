//! Rule-based risk warnings derived from a finished projection

use serde::{Deserialize, Serialize};

use super::records::MonthlyRecord;
use crate::assumptions::ExpenseAssumptions;
use crate::profile::FinancialProfile;

/// Months of combined income used as the emergency-fund proxy
pub const SAVINGS_BUFFER_MONTHS: f64 = 3.0;

/// Childcare-to-income ratio above which the cost warning fires (strict)
pub const CHILDCARE_INCOME_RATIO_LIMIT: f64 = 0.30;

/// Leave duration (months) beyond which reduced-pay leave is flagged
pub const EXTENDED_LEAVE_MONTHS: f64 = 3.0;

/// How serious a warning is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Important,
    Informational,
}

/// A structured risk warning attached to a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    pub severity: Severity,
    pub title: String,
    pub message: String,
    /// Month indices the warning points at; empty when it concerns the whole series
    pub months_affected: Vec<u32>,
    pub recommendation: String,
}

/// Format a dollar amount as `$1,234` (rounded to whole dollars)
fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let rounded = amount.abs().round() as u64;

    let digits = rounded.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Evaluate all warning rules against a finished monthly series
///
/// Rules are evaluated in a fixed order and do not feed each other; a rule
/// that does not fire contributes nothing.
pub fn analyze(
    monthly_records: &[MonthlyRecord],
    profile: &FinancialProfile,
    assumptions: &ExpenseAssumptions,
) -> Vec<Warning> {
    let mut warnings = Vec::new();

    if let Some(warning) = negative_cashflow_warning(monthly_records) {
        warnings.push(warning);
    }
    if let Some(warning) = savings_buffer_warning(monthly_records, profile) {
        warnings.push(warning);
    }
    if let Some(warning) = childcare_cost_warning(profile, assumptions) {
        warnings.push(warning);
    }
    if let Some(warning) = extended_leave_warning(profile) {
        warnings.push(warning);
    }

    warnings
}

/// Critical: any month where expenses exceed income
fn negative_cashflow_warning(monthly_records: &[MonthlyRecord]) -> Option<Warning> {
    let months_affected: Vec<u32> = monthly_records
        .iter()
        .filter(|m| m.net_cashflow < 0.0)
        .map(|m| m.month)
        .collect();

    if months_affected.is_empty() {
        return None;
    }

    Some(Warning {
        severity: Severity::Critical,
        title: "Negative Cashflow Detected".to_string(),
        message: format!(
            "Your expenses exceed income in {} month(s) over the 5-year period.",
            months_affected.len()
        ),
        months_affected,
        recommendation: "Consider building an emergency fund before baby arrives, or \
                         explore ways to reduce expenses or increase income during these \
                         periods."
            .to_string(),
    })
}

/// Important: savings dip below a 3-month combined-income buffer
fn savings_buffer_warning(
    monthly_records: &[MonthlyRecord],
    profile: &FinancialProfile,
) -> Option<Warning> {
    let min_savings = monthly_records
        .iter()
        .map(|m| m.cumulative_savings)
        .fold(f64::INFINITY, f64::min);
    let recommended_buffer = profile.combined_income() * SAVINGS_BUFFER_MONTHS;

    if min_savings >= recommended_buffer {
        return None;
    }

    Some(Warning {
        severity: Severity::Important,
        title: "Low Savings Buffer".to_string(),
        message: format!(
            "Your savings may drop below the recommended 3-month emergency fund ({}).",
            format_currency(recommended_buffer)
        ),
        months_affected: Vec::new(),
        recommendation: "Try to build up your emergency fund before baby arrives. Aim \
                         for at least 3-6 months of expenses."
            .to_string(),
    })
}

/// Important: chosen paid care consumes more than 30% of combined income
fn childcare_cost_warning(
    profile: &FinancialProfile,
    assumptions: &ExpenseAssumptions,
) -> Option<Warning> {
    if !profile.childcare_preference.is_paid_care() {
        return None;
    }

    let childcare_cost = assumptions
        .childcare_costs
        .for_preference(profile.childcare_preference);
    let total_income = profile.combined_income();

    // Guard the zero-income case rather than dividing by zero
    let ratio = if total_income > 0.0 {
        childcare_cost / total_income
    } else {
        0.0
    };

    if ratio <= CHILDCARE_INCOME_RATIO_LIMIT || childcare_cost <= 0.0 {
        return None;
    }

    Some(Warning {
        severity: Severity::Important,
        title: "High Childcare Costs".to_string(),
        message: format!(
            "Childcare represents {:.0}% of your monthly income ({}/month).",
            ratio * 100.0,
            format_currency(childcare_cost)
        ),
        months_affected: Vec::new(),
        recommendation: "Consider exploring alternative childcare options, flexible work \
                         arrangements, or whether one partner staying home might be \
                         financially comparable."
            .to_string(),
    })
}

/// Informational: leave runs past 3 months with either partner on reduced pay
fn extended_leave_warning(profile: &FinancialProfile) -> Option<Warning> {
    let longest_leave = profile
        .partner1_leave
        .leave_months()
        .max(profile.partner2_leave.leave_months());
    let reduced_pay =
        profile.partner1_leave.percent_paid < 100.0 || profile.partner2_leave.percent_paid < 100.0;

    if longest_leave <= EXTENDED_LEAVE_MONTHS || !reduced_pay {
        return None;
    }

    Some(Warning {
        severity: Severity::Informational,
        title: "Extended Parental Leave Period".to_string(),
        message: "Your parental leave extends beyond 3 months with reduced pay.".to_string(),
        months_affected: Vec::new(),
        recommendation: "Plan ahead for the income reduction during this period. Consider \
                         building extra savings or adjusting discretionary spending."
            .to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::{
        ChildcareCosts, CostBand, ExpenseAssumptions, MonthlyRecurring, OneTimeCosts,
        CHILDCARE_START_MONTH,
    };
    use crate::profile::{ChildcarePreference, LeavePolicy};
    use crate::projection::records::{ExpenseBreakdown, IncomeBreakdown};
    use chrono::NaiveDate;

    fn test_profile() -> FinancialProfile {
        FinancialProfile {
            partner1_income: 5000.0,
            partner2_income: 5000.0,
            zip_code: "10001".to_string(),
            due_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            current_savings: 50000.0,
            childcare_preference: ChildcarePreference::Daycare,
            partner1_leave: LeavePolicy::new(12.0, 100.0),
            partner2_leave: LeavePolicy::new(12.0, 100.0),
            monthly_housing_cost: 2000.0,
        }
    }

    fn assumptions_with_daycare(daycare: f64) -> ExpenseAssumptions {
        ExpenseAssumptions {
            cost_band: CostBand::Medium,
            one_time_costs: OneTimeCosts { crib: 300.0, stroller: 250.0, car_seat: 200.0, high_chair: 150.0 },
            monthly_recurring: MonthlyRecurring {
                diapers: 115.0,
                food: 150.0,
                clothing: 50.0,
                healthcare: 75.0,
                miscellaneous: 100.0,
            },
            childcare_costs: ChildcareCosts { daycare, nanny: daycare * 1.8, stay_at_home: 0.0 },
            childcare_start_month: CHILDCARE_START_MONTH,
            zip_code_found: true,
        }
    }

    /// Flat synthetic series: every month has the given net cashflow,
    /// savings chained from 50k
    fn flat_series(net_cashflow: f64) -> Vec<MonthlyRecord> {
        let mut savings = 50000.0;
        (1..=60)
            .map(|month| {
                savings += net_cashflow;
                MonthlyRecord {
                    month,
                    year: (month - 1) / 12 + 1,
                    month_of_year: (month - 1) % 12 + 1,
                    baby_age_months: month - 1,
                    income: IncomeBreakdown::new(5000.0, 5000.0),
                    expenses: ExpenseBreakdown::default(),
                    net_cashflow,
                    cumulative_savings: savings,
                }
            })
            .collect()
    }

    #[test]
    fn test_negative_cashflow_lists_months() {
        let mut series = flat_series(1000.0);
        series[4].net_cashflow = -200.0;
        series[17].net_cashflow = -50.0;

        let warnings = analyze(&series, &test_profile(), &assumptions_with_daycare(1200.0));
        let warning = warnings
            .iter()
            .find(|w| w.title == "Negative Cashflow Detected")
            .expect("should fire");

        assert_eq!(warning.severity, Severity::Critical);
        assert_eq!(warning.months_affected, vec![5, 18]);
        assert!(warning.message.contains("2 month(s)"));
    }

    #[test]
    fn test_no_negative_cashflow_warning_when_all_positive() {
        let warnings = analyze(&flat_series(1000.0), &test_profile(), &assumptions_with_daycare(1200.0));
        assert!(warnings.iter().all(|w| w.title != "Negative Cashflow Detected"));
    }

    #[test]
    fn test_savings_buffer_threshold() {
        // Buffer is 3 * 10000 = 30000; the flat series starts above it
        let mut series = flat_series(1000.0);
        let warnings = analyze(&series, &test_profile(), &assumptions_with_daycare(1200.0));
        assert!(warnings.iter().all(|w| w.title != "Low Savings Buffer"));

        series[0].cumulative_savings = 29999.0;
        let warnings = analyze(&series, &test_profile(), &assumptions_with_daycare(1200.0));
        let warning = warnings
            .iter()
            .find(|w| w.title == "Low Savings Buffer")
            .expect("should fire");
        assert_eq!(warning.severity, Severity::Important);
        assert!(warning.message.contains("$30,000"));
        assert!(warning.months_affected.is_empty());
    }

    #[test]
    fn test_childcare_ratio_fires_strictly_above_30_percent() {
        let series = flat_series(1000.0);
        let profile = test_profile();

        // Exactly 30% of 10000 does not fire
        let warnings = analyze(&series, &profile, &assumptions_with_daycare(3000.0));
        assert!(warnings.iter().all(|w| w.title != "High Childcare Costs"));

        let warnings = analyze(&series, &profile, &assumptions_with_daycare(3001.0));
        let warning = warnings
            .iter()
            .find(|w| w.title == "High Childcare Costs")
            .expect("should fire");
        assert!(warning.message.contains("30%"));
        assert!(warning.message.contains("$3,001/month"));
    }

    #[test]
    fn test_childcare_warning_skipped_for_stay_at_home() {
        let mut profile = test_profile();
        profile.childcare_preference = ChildcarePreference::StayAtHome;

        let warnings = analyze(&flat_series(1000.0), &profile, &assumptions_with_daycare(9000.0));
        assert!(warnings.iter().all(|w| w.title != "High Childcare Costs"));
    }

    #[test]
    fn test_zero_income_does_not_divide_by_zero() {
        let mut profile = test_profile();
        profile.partner1_income = 0.0;
        profile.partner2_income = 0.0;

        let warnings = analyze(&flat_series(0.0), &profile, &assumptions_with_daycare(1200.0));
        assert!(warnings.iter().all(|w| w.title != "High Childcare Costs"));
    }

    #[test]
    fn test_extended_leave_requires_duration_and_reduced_pay() {
        let series = flat_series(1000.0);
        let assumptions = assumptions_with_daycare(1200.0);

        // Long leave, full pay: no warning
        let mut profile = test_profile();
        profile.partner1_leave = LeavePolicy::new(16.0, 100.0);
        let warnings = analyze(&series, &profile, &assumptions);
        assert!(warnings.iter().all(|w| w.title != "Extended Parental Leave Period"));

        // Long leave, one partner on reduced pay: fires
        profile.partner2_leave = LeavePolicy::new(6.0, 80.0);
        let warnings = analyze(&series, &profile, &assumptions);
        let warning = warnings
            .iter()
            .find(|w| w.title == "Extended Parental Leave Period")
            .expect("should fire");
        assert_eq!(warning.severity, Severity::Informational);

        // Short leave, reduced pay: no warning (12 weeks is under 3 months)
        profile.partner1_leave = LeavePolicy::new(12.0, 80.0);
        profile.partner2_leave = LeavePolicy::new(12.0, 80.0);
        let warnings = analyze(&series, &profile, &assumptions);
        assert!(warnings.iter().all(|w| w.title != "Extended Parental Leave Period"));
    }

    #[test]
    fn test_rule_order_is_stable() {
        let mut series = flat_series(1000.0);
        series[0].net_cashflow = -1.0;
        series[0].cumulative_savings = 100.0;

        let mut profile = test_profile();
        profile.partner1_leave = LeavePolicy::new(20.0, 50.0);

        let warnings = analyze(&series, &profile, &assumptions_with_daycare(3100.0));
        let titles: Vec<&str> = warnings.iter().map(|w| w.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Negative Cashflow Detected",
                "Low Savings Buffer",
                "High Childcare Costs",
                "Extended Parental Leave Period",
            ]
        );
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(950.4), "$950");
        assert_eq!(format_currency(28500.0), "$28,500");
        assert_eq!(format_currency(1234567.0), "$1,234,567");
        assert_eq!(format_currency(-4200.0), "-$4,200");
    }
}
