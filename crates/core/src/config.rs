use serde::{Deserialize, Serialize};

use crate::models::CoverageType;

/// Process-wide constants for the assistant: agent names, identifier
/// prefixes, the supported coverage set, and the routing keyword lists.
/// Built once at startup and passed explicitly; nothing mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsuranceConfig {
    pub root_agent: String,
    pub policy_agent: String,
    pub claims_agent: String,
    pub policy_prefix: String,
    pub claim_prefix: String,
    pub supported_coverage_types: Vec<CoverageType>,
    pub policy_keywords: Vec<String>,
    pub claim_keywords: Vec<String>,
    pub clarify_message: String,
    pub estimated_processing_time: String,
}

impl InsuranceConfig {
    pub fn supported_coverage_list(&self) -> String {
        self.supported_coverage_types
            .iter()
            .map(|ty| ty.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for InsuranceConfig {
    fn default() -> Self {
        Self {
            root_agent: "insurance_root_agent".to_string(),
            policy_agent: "insurance_policy_agent".to_string(),
            claims_agent: "insurance_claims_agent".to_string(),
            policy_prefix: "POL-".to_string(),
            claim_prefix: "CLM-".to_string(),
            supported_coverage_types: vec![
                CoverageType::Auto,
                CoverageType::Home,
                CoverageType::Health,
                CoverageType::Life,
            ],
            policy_keywords: [
                "quote",
                "quotes",
                "policy",
                "purchase",
                "buy",
                "coverage",
                "premium",
                "insurance plan",
                "sign up",
                "enroll",
                "new customer",
                "auto insurance",
                "home insurance",
                "life insurance",
                "health insurance",
            ]
            .map(str::to_string)
            .to_vec(),
            claim_keywords: [
                "claim",
                "file a claim",
                "report",
                "incident",
                "damage",
                "accident",
                "status",
                "check claim",
                "claim number",
                "reimbursement",
                "payment",
                "approved",
                "denied",
                "processing",
                "under review",
            ]
            .map(str::to_string)
            .to_vec(),
            clarify_message:
                "I'm not sure if you need help with insurance policies or claims. Could you please clarify?"
                    .to_string(),
            estimated_processing_time: "5-7 business days".to_string(),
        }
    }
}
