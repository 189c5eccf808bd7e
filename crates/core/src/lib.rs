pub mod claims;
pub mod config;
pub mod ident;
pub mod intent;
pub mod models;
pub mod quotes;

pub use claims::{check_claim_status, file_claim};
pub use config::InsuranceConfig;
pub use ident::{fnv1a_64, pseudo_unique_id};
pub use intent::{handle_agent_launch, normalize_query, route_to_agent};
pub use models::*;
pub use quotes::{get_insurance_quotes, purchase_policy};
