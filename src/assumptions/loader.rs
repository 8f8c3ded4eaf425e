//! CSV-based reference data loader
//!
//! Loads cost reference tables from CSV files in data/reference/. The
//! built-in tables in each module mirror these files, so the library works
//! with or without the data directory present.

use std::fs::File;
use std::path::Path;

use thiserror::Error;

use super::childcare::{ChildcareCostTable, ZipChildcareCost};
use super::recurring::{RecurringCostTable, RecurringItem};
use super::tables::{BandedCost, NewbornRecurringTable, OneTimeCostTable};

/// Default path to the reference data directory
pub const DEFAULT_REFERENCE_PATH: &str = "data/reference";

/// Failures while reading reference data from disk
#[derive(Debug, Error)]
pub enum ReferenceDataError {
    #[error("failed to read reference data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed reference data CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("unknown item '{item}' in {file}")]
    UnknownItem { file: &'static str, item: String },

    #[error("missing required item '{item}' in {file}")]
    MissingItem { file: &'static str, item: &'static str },
}

#[derive(Debug, serde::Deserialize)]
struct ZipCsvRow {
    #[serde(rename = "ZipCode")]
    zip_code: String,
    #[serde(rename = "WeeklyInfantCost")]
    weekly_infant_cost: f64,
    #[serde(rename = "WeeklyToddlerCost")]
    weekly_toddler_cost: f64,
    #[serde(rename = "WeeklyPreschoolCost")]
    weekly_preschool_cost: f64,
    #[serde(rename = "State")]
    state: String,
    #[serde(rename = "City")]
    city: String,
}

#[derive(Debug, serde::Deserialize)]
struct BandedCsvRow {
    #[serde(rename = "Item")]
    item: String,
    #[serde(rename = "Low")]
    low: f64,
    #[serde(rename = "Medium")]
    medium: f64,
    #[serde(rename = "High")]
    high: f64,
}

#[derive(Debug, serde::Deserialize)]
struct RecurringCsvRow {
    #[serde(rename = "Item")]
    item: String,
    #[serde(rename = "MonthlyCost")]
    monthly_cost: f64,
}

/// Load the ZIP-indexed childcare cost table.
/// ZIP codes are kept as strings to preserve leading zeros.
pub fn load_childcare_costs(path: &Path) -> Result<ChildcareCostTable, ReferenceDataError> {
    let file = File::open(path.join("childcare_costs_by_zip.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: ZipCsvRow = result?;
        rows.push(ZipChildcareCost {
            zip_code: row.zip_code,
            weekly_infant_cost: row.weekly_infant_cost,
            weekly_toddler_cost: row.weekly_toddler_cost,
            weekly_preschool_cost: row.weekly_preschool_cost,
            state: row.state,
            city: row.city,
        });
    }

    log::info!("loaded childcare cost data for {} ZIP codes", rows.len());
    Ok(ChildcareCostTable::from_rows(rows))
}

fn load_banded_items(
    path: &Path,
    file_name: &'static str,
) -> Result<Vec<(String, BandedCost)>, ReferenceDataError> {
    let file = File::open(path.join(file_name))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut items = Vec::new();
    for result in reader.deserialize() {
        let row: BandedCsvRow = result?;
        items.push((row.item, BandedCost::new(row.low, row.medium, row.high)));
    }
    Ok(items)
}

fn banded_item(
    items: &[(String, BandedCost)],
    file: &'static str,
    name: &'static str,
) -> Result<BandedCost, ReferenceDataError> {
    items
        .iter()
        .find(|(item, _)| item == name)
        .map(|(_, cost)| *cost)
        .ok_or(ReferenceDataError::MissingItem { file, item: name })
}

/// Load the banded one-time cost table
pub fn load_one_time_costs(path: &Path) -> Result<OneTimeCostTable, ReferenceDataError> {
    const FILE: &str = "one_time_costs.csv";
    let items = load_banded_items(path, FILE)?;

    Ok(OneTimeCostTable {
        crib: banded_item(&items, FILE, "Crib")?,
        stroller: banded_item(&items, FILE, "Stroller")?,
        car_seat: banded_item(&items, FILE, "CarSeat")?,
        high_chair: banded_item(&items, FILE, "HighChair")?,
    })
}

/// Load the banded newborn recurring bundle table
pub fn load_newborn_recurring(path: &Path) -> Result<NewbornRecurringTable, ReferenceDataError> {
    const FILE: &str = "newborn_recurring_costs.csv";
    let items = load_banded_items(path, FILE)?;

    Ok(NewbornRecurringTable {
        diapers: banded_item(&items, FILE, "Diapers")?,
        food: banded_item(&items, FILE, "Food")?,
        clothing: banded_item(&items, FILE, "Clothing")?,
        healthcare: banded_item(&items, FILE, "Healthcare")?,
        miscellaneous: banded_item(&items, FILE, "Miscellaneous")?,
    })
}

/// Load the flat recurring cost table the projection schedule is built from
pub fn load_recurring_costs(path: &Path) -> Result<RecurringCostTable, ReferenceDataError> {
    const FILE: &str = "recurring_costs.csv";
    let file = File::open(path.join(FILE))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut items = Vec::new();
    for result in reader.deserialize() {
        let row: RecurringCsvRow = result?;
        let item = RecurringItem::from_name(&row.item).ok_or(ReferenceDataError::UnknownItem {
            file: FILE,
            item: row.item,
        })?;
        items.push((item, row.monthly_cost));
    }

    Ok(RecurringCostTable::from_items(items))
}
