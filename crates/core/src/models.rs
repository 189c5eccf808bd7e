use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageType {
    Auto,
    Home,
    Health,
    Life,
}

impl CoverageType {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "home" => Some(Self::Home),
            "health" => Some(Self::Health),
            "life" => Some(Self::Life),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Home => "home",
            Self::Health => "health",
            Self::Life => "life",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    UnderReview,
    AdditionalInfoNeeded,
    Approved,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyStatus {
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingAction {
    HandleQuery,
    ClarifyIntent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Low,
}

/// Customer fields arrive as a loose bag from the orchestration runtime;
/// each operation validates only the fields it needs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentInfo {
    pub method: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IncidentDetails {
    pub date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub provider: String,
    pub monthly_premium: f64,
    pub annual_premium: f64,
    pub coverage_amount: f64,
    pub deductible: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub policy_number: String,
    pub status: PolicyStatus,
    pub start_date: NaiveDate,
    pub customer_name: String,
    pub payment_method: String,
    pub confirmation_email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub claim_number: String,
    pub policy_number: String,
    pub status: ClaimStatus,
    pub submission_date: NaiveDate,
    pub incident_date: String,
    pub estimated_processing_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimStatusReport {
    pub claim_number: String,
    pub status: ClaimStatus,
    pub message: String,
    pub last_updated: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingDecision {
    pub target_agent: String,
    pub action: RoutingAction,
    pub confidence: Confidence,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentLaunch {
    pub agent: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotesPayload {
    pub quotes: Vec<Quote>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyPayload {
    pub policy: Policy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimPayload {
    pub claim: Claim,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimStatusPayload {
    pub claim_status: ClaimStatusReport,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingPayload {
    pub routing: RoutingDecision,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchPayload {
    pub launch: AgentLaunch,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Coverage type '{requested}' is not supported. Please choose from {supported}.")]
    UnsupportedCoverageType { requested: String, supported: String },
    #[error("Coverage amount must be greater than zero.")]
    NonPositiveCoverageAmount,
    #[error("Customer information must include age and location.")]
    IncompleteCustomerProfile,
    #[error("Quote ID is required.")]
    MissingQuoteId,
    #[error("Payment method is required.")]
    MissingPaymentMethod,
    #[error("Customer information must include name and email.")]
    IncompleteContactInfo,
    #[error("Valid policy number starting with '{prefix}' is required.")]
    InvalidPolicyNumber { prefix: String },
    #[error("Incident details must include date and description.")]
    IncompleteIncidentDetails,
    #[error("Valid claim number starting with '{prefix}' is required.")]
    InvalidClaimNumber { prefix: String },
    #[error("Unknown agent: {requested}. Valid agents are {valid}.")]
    UnknownAgent { requested: String, valid: String },
}

/// Uniform result wrapper returned by every tool operation. Serializes to
/// `{"status": "success", ...payload}` or
/// `{"status": "error", "error_message": "..."}` and nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Envelope<T> {
    Success(T),
    Error { error_message: String },
}

impl<T> Envelope<T> {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error_message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl<T> From<Result<T, ValidationError>> for Envelope<T> {
    fn from(result: Result<T, ValidationError>) -> Self {
        match result {
            Ok(payload) => Self::Success(payload),
            Err(err) => Self::error(err.to_string()),
        }
    }
}
