//! Resolution of geography- and preference-dependent expense assumptions

use serde::{Deserialize, Serialize};

use super::tables::CostBand;
use super::ReferenceData;
use crate::profile::{ChildcarePreference, WEEKS_PER_MONTH};

/// Fixed baby age (months) at which childcare expense begins accruing
pub const CHILDCARE_START_MONTH: u32 = 6;

/// Nanny weekly cost as a multiple of daycare, when ZIP data is available
pub const NANNY_COST_MULTIPLIER: f64 = 1.8;

/// Default weekly infant cost when the ZIP is not in reference data
/// (approximately $1200/month center-based care)
pub const DEFAULT_WEEKLY_INFANT_COST: f64 = 277.0;

/// Default monthly daycare cost when the ZIP is not found
pub const DEFAULT_DAYCARE_MONTHLY: f64 = 1200.0;

/// Default monthly nanny cost when the ZIP is not found
pub const DEFAULT_NANNY_MONTHLY: f64 = 800.0;

/// One-time nursery purchases, charged entirely in month 1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OneTimeCosts {
    pub crib: f64,
    pub stroller: f64,
    pub car_seat: f64,
    pub high_chair: f64,
}

impl OneTimeCosts {
    pub fn total(&self) -> f64 {
        self.crib + self.stroller + self.car_seat + self.high_chair
    }
}

/// Representative newborn-month recurring bundle for downstream display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecurring {
    pub diapers: f64,
    pub food: f64,
    pub clothing: f64,
    pub healthcare: f64,
    pub miscellaneous: f64,
}

/// Monthly childcare cost per scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChildcareCosts {
    pub daycare: f64,
    pub nanny: f64,
    pub stay_at_home: f64,
}

impl ChildcareCosts {
    /// The monthly cost for a given preference
    pub fn for_preference(&self, preference: ChildcarePreference) -> f64 {
        match preference {
            ChildcarePreference::Daycare => self.daycare,
            ChildcarePreference::Nanny => self.nanny,
            ChildcarePreference::StayAtHome => self.stay_at_home,
        }
    }
}

/// Resolved expense assumptions for one calculation; never mutated afterward
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseAssumptions {
    pub cost_band: CostBand,
    pub one_time_costs: OneTimeCosts,
    pub monthly_recurring: MonthlyRecurring,
    pub childcare_costs: ChildcareCosts,
    pub childcare_start_month: u32,
    /// Whether ZIP-specific reference data backed the childcare figures
    pub zip_code_found: bool,
}

/// Convert a weekly cost to monthly, rounded to the nearest dollar
pub fn weekly_to_monthly_cost(weekly_cost: f64) -> f64 {
    (weekly_cost * WEEKS_PER_MONTH).round()
}

/// Maps a ZIP code and childcare preference to a bundle of expense assumptions
pub struct CostAssumptionResolver<'a> {
    reference: &'a ReferenceData,
}

impl<'a> CostAssumptionResolver<'a> {
    pub fn new(reference: &'a ReferenceData) -> Self {
        Self { reference }
    }

    /// Resolve assumptions for a ZIP code and childcare preference
    ///
    /// Never fails: a ZIP that is malformed or absent from reference data
    /// falls back to national defaults, surfaced via `zip_code_found = false`.
    pub fn resolve(
        &self,
        zip_code: &str,
        preference: ChildcarePreference,
    ) -> ExpenseAssumptions {
        let (weekly_infant_cost, zip_code_found) = match self.reference.childcare.lookup(zip_code)
        {
            Some(row) => (row.weekly_infant_cost, true),
            None => {
                log::debug!("ZIP {} not in childcare reference data, using defaults", zip_code);
                (DEFAULT_WEEKLY_INFANT_COST, false)
            }
        };

        let cost_band = CostBand::from_weekly_infant_cost(weekly_infant_cost);

        // KNOWN INCONSISTENCY, preserved from the reference rule set pending
        // product sign-off: the ZIP-found path prices a nanny at 1.8x daycare,
        // but the no-ZIP fallback prices the nanny ($800) below daycare ($1200).
        let (daycare_monthly, nanny_monthly) = if zip_code_found {
            (
                weekly_to_monthly_cost(weekly_infant_cost),
                weekly_to_monthly_cost(weekly_infant_cost * NANNY_COST_MULTIPLIER),
            )
        } else {
            (DEFAULT_DAYCARE_MONTHLY, DEFAULT_NANNY_MONTHLY)
        };

        let one_time = &self.reference.one_time;
        let newborn = &self.reference.newborn_recurring;

        ExpenseAssumptions {
            cost_band,
            one_time_costs: OneTimeCosts {
                crib: one_time.crib.for_band(cost_band),
                stroller: one_time.stroller.for_band(cost_band),
                car_seat: one_time.car_seat.for_band(cost_band),
                high_chair: one_time.high_chair.for_band(cost_band),
            },
            monthly_recurring: MonthlyRecurring {
                diapers: newborn.diapers.for_band(cost_band),
                food: newborn.food.for_band(cost_band),
                clothing: newborn.clothing.for_band(cost_band),
                healthcare: newborn.healthcare.for_band(cost_band),
                miscellaneous: newborn.miscellaneous.for_band(cost_band),
            },
            childcare_costs: ChildcareCosts {
                daycare: daycare_monthly,
                nanny: nanny_monthly,
                // Stay-at-home carries no direct childcare cost regardless of ZIP
                stay_at_home: 0.0,
            },
            childcare_start_month: CHILDCARE_START_MONTH,
            zip_code_found,
        }
    }
}

/// Human-readable explanations of resolved assumptions, consumed by the
/// narrative/summary layer
pub fn assumption_explanations(assumptions: &ExpenseAssumptions) -> Vec<String> {
    let daycare = assumptions.childcare_costs.daycare;
    let nanny = assumptions.childcare_costs.nanny;

    let childcare_explanation = if assumptions.zip_code_found {
        format!(
            "Childcare Costs (ZIP Code-Based): Center-based care (daycare) costs \
             ${:.0}/month in years 1-3 and ${:.0}/month in years 4-5 (20% reduction). \
             Home-based care (nanny) costs ${:.0}/month in years 1-3 and ${:.0}/month \
             in years 4-5. Stay-at-home has $0 childcare cost. Childcare starts at \
             month {}.",
            daycare,
            daycare * 0.8,
            nanny,
            nanny * 0.8,
            assumptions.childcare_start_month,
        )
    } else {
        format!(
            "Childcare Costs (Default Values): Your ZIP code was not found in our \
             reference data, so national defaults apply: center-based care \
             ${:.0}/month, home-based care ${:.0}/month, each reduced 20% in years \
             4-5. Stay-at-home has $0 childcare cost. Childcare starts at month {}.",
            daycare,
            nanny,
            assumptions.childcare_start_month,
        )
    };

    vec![
        format!(
            "Regional Cost Band: {} - childcare and one-time costs are adjusted to \
             your local market using reference data from childcare cost surveys.",
            assumptions.cost_band.as_str().to_uppercase(),
        ),
        format!(
            "One-Time Costs: Essential items purchased at birth include a crib \
             (${:.0}), stroller (${:.0}), car seat (${:.0}), and high chair (${:.0}). \
             Total: ${:.0}.",
            assumptions.one_time_costs.crib,
            assumptions.one_time_costs.stroller,
            assumptions.one_time_costs.car_seat,
            assumptions.one_time_costs.high_chair,
            assumptions.one_time_costs.total(),
        ),
        childcare_explanation,
        "Childcare Cost Reduction: childcare costs decrease by 20% once the child \
         reaches 36 months, as children typically transition to less intensive care."
            .to_string(),
        "Miscellaneous Cost Increase: discretionary activity costs increase by 20% \
         each year starting in year 3 to account for a growing child's needs."
            .to_string(),
        "Parental Leave: income adjustments follow your specified leave duration \
         and percentage paid."
            .to_string(),
    ]
}
