//! Financial profile data structures and CSV intake

mod data;
pub mod loader;

pub use data::{ChildcarePreference, FinancialProfile, LeavePolicy, Partner, WEEKS_PER_MONTH};
pub use loader::load_profiles;
