use crate::config::InsuranceConfig;
use crate::models::{
    AgentLaunch, Confidence, LaunchPayload, RoutingAction, RoutingDecision, RoutingPayload,
    ValidationError,
};

pub fn normalize_query(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// First-match keyword routing: the policy list is checked before the claims
/// list, and any substring hit wins with high confidence. No stemming or
/// scoring. An unmatched query stays with the root agent for clarification.
pub fn route_to_agent(config: &InsuranceConfig, user_query: &str) -> RoutingPayload {
    let query = user_query.to_lowercase();

    if contains_any(&query, &config.policy_keywords) {
        return RoutingPayload {
            routing: RoutingDecision {
                target_agent: config.policy_agent.clone(),
                action: RoutingAction::HandleQuery,
                confidence: Confidence::High,
                message: None,
            },
        };
    }

    if contains_any(&query, &config.claim_keywords) {
        return RoutingPayload {
            routing: RoutingDecision {
                target_agent: config.claims_agent.clone(),
                action: RoutingAction::HandleQuery,
                confidence: Confidence::High,
                message: None,
            },
        };
    }

    RoutingPayload {
        routing: RoutingDecision {
            target_agent: config.root_agent.clone(),
            action: RoutingAction::ClarifyIntent,
            confidence: Confidence::Low,
            message: Some(config.clarify_message.clone()),
        },
    }
}

pub fn handle_agent_launch(
    config: &InsuranceConfig,
    agent_name: &str,
) -> Result<LaunchPayload, ValidationError> {
    let message = if agent_name == config.policy_agent {
        "Launching the policy specialist to help you with quotes and coverage options."
    } else if agent_name == config.claims_agent {
        "Launching the claims specialist to assist with your insurance claim."
    } else {
        return Err(ValidationError::UnknownAgent {
            requested: agent_name.to_string(),
            valid: format!("'{}' and '{}'", config.policy_agent, config.claims_agent),
        });
    };

    Ok(LaunchPayload {
        launch: AgentLaunch {
            agent: agent_name.to_string(),
            message: message.to_string(),
        },
    })
}

fn contains_any(input: &str, needles: &[String]) -> bool {
    needles.iter().any(|needle| input.contains(needle.as_str()))
}
