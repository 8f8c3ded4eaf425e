//! Load financial profiles from CSV for batch runs

use super::{ChildcarePreference, FinancialProfile, LeavePolicy};
use chrono::NaiveDate;
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// Raw CSV row matching the batch intake columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Partner1Income")]
    partner1_income: f64,
    #[serde(rename = "Partner2Income")]
    partner2_income: f64,
    #[serde(rename = "ZipCode")]
    zip_code: String,
    #[serde(rename = "DueDate")]
    due_date: NaiveDate,
    #[serde(rename = "CurrentSavings")]
    current_savings: f64,
    #[serde(rename = "ChildcarePreference")]
    childcare_preference: String,
    #[serde(rename = "Partner1LeaveWeeks")]
    partner1_leave_weeks: f64,
    #[serde(rename = "Partner1LeavePercentPaid")]
    partner1_percent_paid: f64,
    #[serde(rename = "Partner2LeaveWeeks")]
    partner2_leave_weeks: f64,
    #[serde(rename = "Partner2LeavePercentPaid")]
    partner2_percent_paid: f64,
    #[serde(rename = "MonthlyHousingCost")]
    monthly_housing_cost: f64,
}

impl CsvRow {
    fn to_profile(self) -> Result<FinancialProfile, Box<dyn Error>> {
        let childcare_preference = match self.childcare_preference.as_str() {
            "daycare" => ChildcarePreference::Daycare,
            "nanny" => ChildcarePreference::Nanny,
            "stay-at-home" => ChildcarePreference::StayAtHome,
            other => return Err(format!("Unknown ChildcarePreference: {}", other).into()),
        };

        Ok(FinancialProfile {
            partner1_income: self.partner1_income,
            partner2_income: self.partner2_income,
            zip_code: self.zip_code,
            due_date: self.due_date,
            current_savings: self.current_savings,
            childcare_preference,
            partner1_leave: LeavePolicy::new(self.partner1_leave_weeks, self.partner1_percent_paid),
            partner2_leave: LeavePolicy::new(self.partner2_leave_weeks, self.partner2_percent_paid),
            monthly_housing_cost: self.monthly_housing_cost,
        })
    }
}

/// Load all profiles from a CSV file
pub fn load_profiles<P: AsRef<Path>>(path: P) -> Result<Vec<FinancialProfile>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut profiles = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        profiles.push(row.to_profile()?);
    }

    Ok(profiles)
}

/// Load profiles from any reader (e.g., string buffer, network stream)
pub fn load_profiles_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<FinancialProfile>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut profiles = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        profiles.push(row.to_profile()?);
    }

    Ok(profiles)
}
