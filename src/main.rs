//! Baby Budget CLI
//!
//! Runs a worked-example projection and writes the full series to CSV/JSON

use baby_budget::assumptions::assumption_explanations;
use baby_budget::{ChildcarePreference, FinancialProfile, LeavePolicy, ProjectionRunner};
use chrono::NaiveDate;
use std::fs::File;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Baby Budget v0.1.0");
    println!("==================\n");

    // Worked example: dual earners in Manhattan planning for daycare
    let profile = FinancialProfile {
        partner1_income: 5000.0,
        partner2_income: 4500.0,
        zip_code: "10001".to_string(),
        due_date: NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date"),
        current_savings: 10000.0,
        childcare_preference: ChildcarePreference::Daycare,
        partner1_leave: LeavePolicy::new(12.0, 100.0),
        partner2_leave: LeavePolicy::new(12.0, 60.0),
        monthly_housing_cost: 2000.0,
    };

    println!("Profile:");
    println!("  Incomes: ${:.0} / ${:.0} per month", profile.partner1_income, profile.partner2_income);
    println!("  ZIP: {}", profile.zip_code);
    println!("  Savings: ${:.0}", profile.current_savings);
    println!("  Childcare: {:?}", profile.childcare_preference);
    println!("  Housing: ${:.0}/month", profile.monthly_housing_cost);
    println!();

    // Load reference data from CSV, falling back to the built-in tables
    let runner = match ProjectionRunner::from_csv() {
        Ok(runner) => runner,
        Err(err) => {
            log::warn!("reference data CSVs unavailable ({}), using built-in tables", err);
            ProjectionRunner::new()
        }
    };

    if let Some(row) = runner.reference().childcare.lookup(&profile.zip_code) {
        println!(
            "Childcare market: {}, {} (infant ${}/wk, toddler ${}/wk)",
            row.city,
            row.state,
            row.weekly_infant_cost,
            row.weekly_toddler_or_default(),
        );
        println!();
    }

    let projection = runner.run(&profile);

    // Print header
    println!("Projection Results ({} months):", projection.monthly_projections.len());
    println!(
        "{:>5} {:>4} {:>4} {:>10} {:>10} {:>10} {:>10} {:>12}",
        "Month", "Yr", "Age", "Income", "Housing", "Childcare", "Net CF", "Savings"
    );
    println!("{}", "-".repeat(72));

    // Print first 24 months to console
    for row in projection.monthly_projections.iter().take(24) {
        println!(
            "{:>5} {:>4} {:>4} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>12.2}",
            row.month,
            row.year,
            row.baby_age_months,
            row.income.total,
            row.expenses.housing,
            row.expenses.childcare,
            row.net_cashflow,
            row.cumulative_savings,
        );
    }
    if projection.monthly_projections.len() > 24 {
        println!("... ({} more months)", projection.monthly_projections.len() - 24);
    }

    // Write full results to CSV
    let csv_path = "projection_output.csv";
    let mut file = File::create(csv_path)?;
    writeln!(
        file,
        "Month,Year,MonthOfYear,BabyAgeMonths,Partner1Income,Partner2Income,TotalIncome,\
         Housing,Childcare,Diapers,Food,Clothing,Healthcare,OneTime,Miscellaneous,\
         TotalExpenses,NetCashflow,CumulativeSavings"
    )?;
    for row in &projection.monthly_projections {
        writeln!(
            file,
            "{},{},{},{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            row.month,
            row.year,
            row.month_of_year,
            row.baby_age_months,
            row.income.partner1,
            row.income.partner2,
            row.income.total,
            row.expenses.housing,
            row.expenses.childcare,
            row.expenses.diapers,
            row.expenses.food,
            row.expenses.clothing,
            row.expenses.healthcare,
            row.expenses.one_time,
            row.expenses.miscellaneous,
            row.expenses.total,
            row.net_cashflow,
            row.cumulative_savings,
        )?;
    }
    println!("\nFull monthly series written to: {}", csv_path);

    // Write the complete projection record as JSON (downstream contract shape)
    let json_path = "projection_output.json";
    let json_file = File::create(json_path)?;
    serde_json::to_writer_pretty(json_file, &projection)?;
    println!("Projection record written to: {}", json_path);

    // Print yearly summary
    println!("\nYearly Summary:");
    println!(
        "{:>4} {:>12} {:>12} {:>12} {:>14}",
        "Year", "Income", "Expenses", "Net CF", "End Savings"
    );
    for year in &projection.yearly_projections {
        println!(
            "{:>4} {:>12.2} {:>12.2} {:>12.2} {:>14.2}",
            year.year, year.total_income, year.total_expenses, year.net_cashflow, year.ending_savings,
        );
    }
    println!("\nTotal 5-year cost: ${:.2}", projection.total_cost);

    // Print warnings
    if projection.warnings.is_empty() {
        println!("\nNo warnings.");
    } else {
        println!("\nWarnings ({}):", projection.warnings.len());
        for warning in &projection.warnings {
            println!("  [{:?}] {}: {}", warning.severity, warning.title, warning.message);
        }
    }

    // Print the assumption explanations handed to the narrative layer
    println!("\nAssumptions:");
    for line in assumption_explanations(&projection.assumptions) {
        println!("  - {}", line);
    }

    Ok(())
}
