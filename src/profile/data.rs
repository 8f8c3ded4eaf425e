//! Profile data structures matching the onboarding intake format

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Weeks per month used for all leave-duration conversions
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// Childcare arrangement chosen by the household
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChildcarePreference {
    Daycare,
    Nanny,
    StayAtHome,
}

impl ChildcarePreference {
    /// Whether this arrangement has a paid external provider
    pub fn is_paid_care(&self) -> bool {
        matches!(self, ChildcarePreference::Daycare | ChildcarePreference::Nanny)
    }
}

/// Which partner a per-partner computation refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Partner {
    One,
    Two,
}

/// Parental leave terms for one partner
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LeavePolicy {
    /// Leave duration in weeks
    pub duration_weeks: f64,

    /// Percent of salary paid during leave (0-100)
    pub percent_paid: f64,
}

impl LeavePolicy {
    pub fn new(duration_weeks: f64, percent_paid: f64) -> Self {
        Self { duration_weeks, percent_paid }
    }

    /// Leave duration converted to months
    pub fn leave_months(&self) -> f64 {
        self.duration_weeks / WEEKS_PER_MONTH
    }
}

/// A household financial profile, immutable for one calculation
///
/// Field validation (incomes and savings >= 0, percent paid 0-100, ZIP exactly
/// 5 digits) happens upstream; this core assumes ranges are already enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialProfile {
    /// Partner 1 gross monthly income
    pub partner1_income: f64,

    /// Partner 2 gross monthly income
    pub partner2_income: f64,

    /// 5-digit ZIP code used for cost-of-care lookup
    pub zip_code: String,

    /// Expected due date
    pub due_date: NaiveDate,

    /// Savings balance at the start of the projection
    pub current_savings: f64,

    /// Childcare arrangement
    pub childcare_preference: ChildcarePreference,

    /// Partner 1 parental leave terms
    pub partner1_leave: LeavePolicy,

    /// Partner 2 parental leave terms
    pub partner2_leave: LeavePolicy,

    /// Fixed monthly housing cost (rent or mortgage)
    pub monthly_housing_cost: f64,
}

impl FinancialProfile {
    /// Combined base monthly income of both partners
    pub fn combined_income(&self) -> f64 {
        self.partner1_income + self.partner2_income
    }

    /// The lower-earning partner; ties break toward partner 1
    pub fn lower_earner(&self) -> Partner {
        if self.partner1_income <= self.partner2_income {
            Partner::One
        } else {
            Partner::Two
        }
    }

    /// Leave terms for a given partner
    pub fn leave_for(&self, partner: Partner) -> &LeavePolicy {
        match partner {
            Partner::One => &self.partner1_leave,
            Partner::Two => &self.partner2_leave,
        }
    }
}
