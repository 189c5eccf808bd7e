use chrono::NaiveDate;

use crate::config::InsuranceConfig;
use crate::ident::pseudo_unique_id;
use crate::models::{
    CoverageType, CustomerProfile, PaymentInfo, Policy, PolicyPayload, PolicyStatus, Quote,
    QuotesPayload, ValidationError,
};

const BASE_PREMIUM_RATE: f64 = 0.05;
const YOUNG_DRIVER_FACTOR: f64 = 1.5;
const COASTAL_HOME_FACTOR: f64 = 1.2;
const PREMIUM_TIER_MARKUP: f64 = 1.2;
const STANDARD_DEDUCTIBLE_RATE: f64 = 0.01;
const PREMIUM_DEDUCTIBLE_RATE: f64 = 0.005;

/// Validates the request and produces two synthetic provider quotes. The
/// annual premium is 5% of the coverage amount, adjusted for young drivers
/// (auto) or coastal locations (home); health and life are unadjusted.
pub fn get_insurance_quotes(
    config: &InsuranceConfig,
    coverage_type: &str,
    coverage_amount: f64,
    customer: &CustomerProfile,
) -> Result<QuotesPayload, ValidationError> {
    let coverage = CoverageType::parse(coverage_type)
        .filter(|ty| config.supported_coverage_types.contains(ty))
        .ok_or_else(|| ValidationError::UnsupportedCoverageType {
            requested: coverage_type.to_string(),
            supported: config.supported_coverage_list(),
        })?;

    if coverage_amount <= 0.0 {
        return Err(ValidationError::NonPositiveCoverageAmount);
    }

    let age = customer.age.filter(|age| *age > 0);
    let location = customer
        .location
        .as_deref()
        .map(str::trim)
        .filter(|loc| !loc.is_empty());
    let (age, location) = match (age, location) {
        (Some(age), Some(location)) => (age, location),
        _ => return Err(ValidationError::IncompleteCustomerProfile),
    };

    let base_premium = coverage_amount * BASE_PREMIUM_RATE;
    let annual_premium = match coverage {
        CoverageType::Auto if age < 25 => base_premium * YOUNG_DRIVER_FACTOR,
        CoverageType::Home if location.eq_ignore_ascii_case("coastal") => {
            base_premium * COASTAL_HOME_FACTOR
        }
        _ => base_premium,
    };

    Ok(QuotesPayload {
        quotes: vec![
            provider_quote(
                "InsureCo Standard",
                annual_premium,
                coverage_amount,
                STANDARD_DEDUCTIBLE_RATE,
            ),
            provider_quote(
                "InsureCo Premium",
                annual_premium * PREMIUM_TIER_MARKUP,
                coverage_amount,
                PREMIUM_DEDUCTIBLE_RATE,
            ),
        ],
    })
}

/// Validates purchase details and issues an active policy starting today.
/// The policy number is derived from the quote id and customer name, so
/// repeating the same purchase yields the same number.
pub fn purchase_policy(
    config: &InsuranceConfig,
    quote_id: &str,
    payment: &PaymentInfo,
    customer: &CustomerProfile,
    today: NaiveDate,
) -> Result<PolicyPayload, ValidationError> {
    if quote_id.trim().is_empty() {
        return Err(ValidationError::MissingQuoteId);
    }

    let method = payment
        .method
        .as_deref()
        .map(str::trim)
        .filter(|method| !method.is_empty())
        .ok_or(ValidationError::MissingPaymentMethod)?;

    let name = customer.name.as_deref().map(str::trim).filter(|n| !n.is_empty());
    let email = customer.email.as_deref().map(str::trim).filter(|e| !e.is_empty());
    let (name, email) = match (name, email) {
        (Some(name), Some(email)) => (name, email),
        _ => return Err(ValidationError::IncompleteContactInfo),
    };

    let policy_number = pseudo_unique_id(&config.policy_prefix, &[quote_id, name]);

    Ok(PolicyPayload {
        policy: Policy {
            policy_number,
            status: PolicyStatus::Active,
            start_date: today,
            customer_name: name.to_string(),
            payment_method: method.to_string(),
            confirmation_email: format!("Confirmation sent to {email}"),
        },
    })
}

fn provider_quote(
    provider: &str,
    annual_premium: f64,
    coverage_amount: f64,
    deductible_rate: f64,
) -> Quote {
    Quote {
        provider: provider.to_string(),
        monthly_premium: round2(annual_premium / 12.0),
        annual_premium: round2(annual_premium),
        coverage_amount,
        deductible: round2(coverage_amount * deductible_rate),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
