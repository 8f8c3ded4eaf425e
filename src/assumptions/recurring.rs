//! Recurring cost items and the per-year schedule the engine draws from

use serde::{Deserialize, Serialize};

/// Annual escalation applied to the miscellaneous-activities item
pub const MISC_ESCALATION_RATE: f64 = 1.2;

/// First projection year in which the escalation applies
pub const MISC_ESCALATION_START_YEAR: u32 = 3;

/// A fixed monthly recurring cost item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecurringItem {
    Diapers,
    Wipes,
    Food,
    Supplies,
    Toys,
    /// Activities, babysitter, and other discretionary spend
    MiscellaneousActivities,
}

/// Expense bucket a recurring item lands in on the monthly record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseBucket {
    Diapers,
    Food,
    Clothing,
    Healthcare,
    Miscellaneous,
}

impl RecurringItem {
    /// Parse the CSV item name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Diapers" => Some(RecurringItem::Diapers),
            "Wipes" => Some(RecurringItem::Wipes),
            "Food" => Some(RecurringItem::Food),
            "Supplies" => Some(RecurringItem::Supplies),
            "Toys" => Some(RecurringItem::Toys),
            "MiscellaneousActivities" => Some(RecurringItem::MiscellaneousActivities),
            _ => None,
        }
    }

    /// The one explicit category-to-bucket mapping; changing where an item is
    /// reported is a one-line edit here.
    pub fn bucket(&self) -> ExpenseBucket {
        match self {
            RecurringItem::Diapers => ExpenseBucket::Diapers,
            RecurringItem::Wipes => ExpenseBucket::Healthcare,
            RecurringItem::Food => ExpenseBucket::Food,
            RecurringItem::Supplies => ExpenseBucket::Clothing,
            RecurringItem::Toys => ExpenseBucket::Miscellaneous,
            RecurringItem::MiscellaneousActivities => ExpenseBucket::Miscellaneous,
        }
    }

    /// Whether the year-3+ escalation applies to this item
    pub fn escalates(&self) -> bool {
        matches!(self, RecurringItem::MiscellaneousActivities)
    }
}

/// Base monthly amounts per recurring item, in table order
#[derive(Debug, Clone)]
pub struct RecurringCostTable {
    items: Vec<(RecurringItem, f64)>,
}

impl RecurringCostTable {
    pub fn from_items(items: Vec<(RecurringItem, f64)>) -> Self {
        Self { items }
    }

    /// Built-in base amounts from the recurring cost reference sheet
    pub fn builtin() -> Self {
        Self {
            items: vec![
                (RecurringItem::Diapers, 80.0),
                (RecurringItem::Wipes, 15.0),
                (RecurringItem::Food, 150.0),
                (RecurringItem::Supplies, 25.0),
                (RecurringItem::Toys, 20.0),
                (RecurringItem::MiscellaneousActivities, 150.0),
            ],
        }
    }

    pub fn items(&self) -> &[(RecurringItem, f64)] {
        &self.items
    }
}

/// Supplies fixed monthly recurring costs for a given projection year
///
/// All items are flat across years except miscellaneous-activities, which
/// compounds 20% per year from year 3 onward (year 3 = 1.2x, year 4 = 1.44x,
/// year 5 = 1.728x). Essentials staying flat is a modeling simplification,
/// not an oversight.
#[derive(Debug, Clone)]
pub struct RecurringCostSchedule {
    table: RecurringCostTable,
}

impl RecurringCostSchedule {
    pub fn new(table: RecurringCostTable) -> Self {
        Self { table }
    }

    /// Monthly cost per item for the given projection year (1-5), in table order
    pub fn monthly_costs_for_year(&self, year: u32) -> Vec<(RecurringItem, f64)> {
        self.table
            .items()
            .iter()
            .map(|&(item, base)| {
                let amount = if item.escalates() && year >= MISC_ESCALATION_START_YEAR {
                    base * MISC_ESCALATION_RATE.powi((year - MISC_ESCALATION_START_YEAR + 1) as i32)
                } else {
                    base
                };
                (item, amount)
            })
            .collect()
    }
}
