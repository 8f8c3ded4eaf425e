//! Monthly cashflow simulation, yearly aggregation, and warning analysis

mod engine;
mod records;
mod state;
mod warnings;
mod yearly;

pub use engine::{
    MonthlyProjectionEngine, CHILDCARE_REDUCTION_AGE_MONTHS, CHILDCARE_REDUCTION_FACTOR,
    PROJECTION_MONTHS, PROJECTION_YEARS,
};
pub use records::{ExpenseBreakdown, IncomeBreakdown, MonthlyRecord};
pub use warnings::{
    analyze, Severity, Warning, CHILDCARE_INCOME_RATIO_LIMIT, EXTENDED_LEAVE_MONTHS,
    SAVINGS_BUFFER_MONTHS,
};
pub use yearly::{aggregate_yearly, YearlyRecord};
