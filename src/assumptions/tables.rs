//! Cost bands and the banded static cost tables they select from

use serde::{Deserialize, Serialize};

/// Weekly infant cost below which a geography is classified `low`
pub const LOW_BAND_CEILING: f64 = 280.0;

/// Weekly infant cost above which a geography is classified `high`
pub const HIGH_BAND_FLOOR: f64 = 400.0;

/// Coarse classification of a geography's childcare cost level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostBand {
    Low,
    Medium,
    High,
}

impl CostBand {
    /// Classify from the weekly infant childcare cost
    pub fn from_weekly_infant_cost(weekly_cost: f64) -> Self {
        if weekly_cost < LOW_BAND_CEILING {
            CostBand::Low
        } else if weekly_cost > HIGH_BAND_FLOOR {
            CostBand::High
        } else {
            CostBand::Medium
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CostBand::Low => "low",
            CostBand::Medium => "medium",
            CostBand::High => "high",
        }
    }
}

/// Low/medium/high dollar figures for a single cost item
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BandedCost {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl BandedCost {
    pub fn new(low: f64, medium: f64, high: f64) -> Self {
        Self { low, medium, high }
    }

    /// Select the figure for a band
    pub fn for_band(&self, band: CostBand) -> f64 {
        match band {
            CostBand::Low => self.low,
            CostBand::Medium => self.medium,
            CostBand::High => self.high,
        }
    }
}

/// One-time nursery purchase costs charged in the first projection month
#[derive(Debug, Clone)]
pub struct OneTimeCostTable {
    pub crib: BandedCost,
    pub stroller: BandedCost,
    pub car_seat: BandedCost,
    pub high_chair: BandedCost,
}

impl OneTimeCostTable {
    /// Built-in figures from the one-time expense reference table
    pub fn builtin() -> Self {
        Self {
            crib: BandedCost::new(150.0, 300.0, 800.0),
            stroller: BandedCost::new(100.0, 250.0, 800.0),
            car_seat: BandedCost::new(100.0, 200.0, 400.0),
            high_chair: BandedCost::new(50.0, 150.0, 300.0),
        }
    }
}

/// Representative newborn-month recurring bundle, by bucket
///
/// Informational only: the projection engine pulls its per-year recurring
/// items from [`crate::assumptions::RecurringCostSchedule`]. This bundle is
/// part of the resolved assumptions handed downstream for display.
#[derive(Debug, Clone)]
pub struct NewbornRecurringTable {
    pub diapers: BandedCost,
    pub food: BandedCost,
    pub clothing: BandedCost,
    pub healthcare: BandedCost,
    pub miscellaneous: BandedCost,
}

impl NewbornRecurringTable {
    /// Built-in figures: month-0 category sums from the recurring expense
    /// reference table (diapers bucket includes wipes and cream)
    pub fn builtin() -> Self {
        Self {
            diapers: BandedCost::new(80.0, 115.0, 180.0),
            food: BandedCost::new(100.0, 150.0, 250.0),
            clothing: BandedCost::new(30.0, 50.0, 100.0),
            healthcare: BandedCost::new(40.0, 75.0, 150.0),
            miscellaneous: BandedCost::new(50.0, 100.0, 200.0),
        }
    }
}
