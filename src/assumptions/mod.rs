//! Cost reference data and expense assumption resolution

mod childcare;
mod recurring;
mod resolver;
mod tables;
pub mod loader;

pub use childcare::{ChildcareCostTable, ZipChildcareCost, TODDLER_COST_RATIO};
pub use loader::{ReferenceDataError, DEFAULT_REFERENCE_PATH};
pub use recurring::{
    ExpenseBucket, RecurringCostSchedule, RecurringCostTable, RecurringItem,
    MISC_ESCALATION_RATE, MISC_ESCALATION_START_YEAR,
};
pub use resolver::{
    assumption_explanations, weekly_to_monthly_cost, ChildcareCosts, CostAssumptionResolver,
    ExpenseAssumptions, MonthlyRecurring, OneTimeCosts, CHILDCARE_START_MONTH,
    DEFAULT_DAYCARE_MONTHLY, DEFAULT_NANNY_MONTHLY, NANNY_COST_MULTIPLIER,
};
pub use tables::{BandedCost, CostBand, NewbornRecurringTable, OneTimeCostTable};

use std::path::Path;

/// Container for all cost reference tables, loaded once and immutable for the
/// process lifetime. Constructed explicitly and passed into the resolver and
/// schedule so tests can inject fixtures.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub childcare: ChildcareCostTable,
    pub one_time: OneTimeCostTable,
    pub newborn_recurring: NewbornRecurringTable,
    pub recurring: RecurringCostTable,
}

impl ReferenceData {
    /// Create reference data from the built-in tables
    pub fn builtin() -> Self {
        Self {
            childcare: ChildcareCostTable::builtin(),
            one_time: OneTimeCostTable::builtin(),
            newborn_recurring: NewbornRecurringTable::builtin(),
            recurring: RecurringCostTable::builtin(),
        }
    }

    /// Load reference data from CSV files in the default location
    pub fn from_csv() -> Result<Self, ReferenceDataError> {
        Self::from_csv_path(Path::new(DEFAULT_REFERENCE_PATH))
    }

    /// Load reference data from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self, ReferenceDataError> {
        Ok(Self {
            childcare: loader::load_childcare_costs(path)?,
            one_time: loader::load_one_time_costs(path)?,
            newborn_recurring: loader::load_newborn_recurring(path)?,
            recurring: loader::load_recurring_costs(path)?,
        })
    }

    /// The per-year recurring cost schedule built from these tables
    pub fn recurring_schedule(&self) -> RecurringCostSchedule {
        RecurringCostSchedule::new(self.recurring.clone())
    }
}
