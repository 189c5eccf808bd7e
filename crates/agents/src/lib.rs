//! Agent composition and tool dispatch.
//!
//! Three conversational roles (root, policy, claims) differ only in their
//! description, instruction, and permitted tool set, so they share one
//! record type built from `InsuranceConfig`. The hosting orchestration
//! runtime decides *when* to call a tool; this crate owns *what* the tools
//! do: deserialize the JSON arguments, run the deterministic core function,
//! and hand back the success/error envelope as JSON. No tool call ever
//! surfaces a fault to the runtime.

use std::sync::Arc;
use std::time::Instant;

use beacon_core::{
    check_claim_status, file_claim, get_insurance_quotes, handle_agent_launch, normalize_query,
    purchase_policy, route_to_agent, CustomerProfile, Envelope, IncidentDetails, InsuranceConfig,
    PaymentInfo, RoutingAction, ValidationError,
};
use beacon_observability::AppMetrics;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolName {
    GetInsuranceQuotes,
    PurchasePolicy,
    FileClaim,
    CheckClaimStatus,
    RouteToAgent,
    HandleAgentLaunch,
}

impl ToolName {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "get_insurance_quotes" => Some(Self::GetInsuranceQuotes),
            "purchase_policy" => Some(Self::PurchasePolicy),
            "file_claim" => Some(Self::FileClaim),
            "check_claim_status" => Some(Self::CheckClaimStatus),
            "route_to_agent" => Some(Self::RouteToAgent),
            "handle_agent_launch" => Some(Self::HandleAgentLaunch),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::GetInsuranceQuotes => "get_insurance_quotes",
            Self::PurchasePolicy => "purchase_policy",
            Self::FileClaim => "file_claim",
            Self::CheckClaimStatus => "check_claim_status",
            Self::RouteToAgent => "route_to_agent",
            Self::HandleAgentLaunch => "handle_agent_launch",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AgentRole {
    pub name: String,
    pub description: String,
    pub instruction: String,
    pub tools: Vec<ToolName>,
}

pub fn agent_roles(config: &InsuranceConfig) -> Vec<AgentRole> {
    vec![
        AgentRole {
            name: config.root_agent.clone(),
            description:
                "Main insurance agent that directs users to specialized agents for policies and claims"
                    .to_string(),
            instruction: format!(
                "Understand the user's request and route it with 'route_to_agent'. \
                 Quotes, purchases, and policy questions go to '{}'; filing claims, \
                 claim status, and incident reports go to '{}'. If the intent is \
                 unclear, ask for clarification and stay with '{}'.",
                config.policy_agent, config.claims_agent, config.root_agent
            ),
            tools: vec![ToolName::RouteToAgent, ToolName::HandleAgentLaunch],
        },
        AgentRole {
            name: config.policy_agent.clone(),
            description: "Agent to help customers get insurance quotes and purchase policies"
                .to_string(),
            instruction: format!(
                "I can help you get insurance quotes and purchase a policy. \
                 I can provide quotes for {} insurance.",
                config.supported_coverage_list()
            ),
            tools: vec![ToolName::GetInsuranceQuotes, ToolName::PurchasePolicy],
        },
        AgentRole {
            name: config.claims_agent.clone(),
            description: "Agent to help customers file and track insurance claims".to_string(),
            instruction:
                "I can help you file a new insurance claim or check the status of an existing claim."
                    .to_string(),
            tools: vec![ToolName::FileClaim, ToolName::CheckClaimStatus],
        },
    ]
}

#[derive(Debug, Deserialize)]
struct QuoteArgs {
    coverage_type: String,
    coverage_amount: f64,
    customer_info: CustomerProfile,
}

#[derive(Debug, Deserialize)]
struct PurchaseArgs {
    quote_id: String,
    payment_info: PaymentInfo,
    customer_info: CustomerProfile,
}

#[derive(Debug, Deserialize)]
struct FileClaimArgs {
    policy_number: String,
    incident_details: IncidentDetails,
}

#[derive(Debug, Deserialize)]
struct ClaimStatusArgs {
    claim_number: String,
}

#[derive(Debug, Deserialize)]
struct RouteArgs {
    user_query: String,
}

#[derive(Debug, Deserialize)]
struct LaunchArgs {
    agent_name: String,
}

#[derive(Clone)]
pub struct InsuranceAgent {
    config: Arc<InsuranceConfig>,
    metrics: Arc<AppMetrics>,
}

impl InsuranceAgent {
    pub fn new(config: Arc<InsuranceConfig>, metrics: Arc<AppMetrics>) -> Self {
        Self { config, metrics }
    }

    pub fn config(&self) -> &InsuranceConfig {
        &self.config
    }

    pub fn metrics(&self) -> &AppMetrics {
        &self.metrics
    }

    pub fn roles(&self) -> Vec<AgentRole> {
        agent_roles(&self.config)
    }

    /// Entry point for the orchestration runtime: tool name as a string,
    /// arguments as JSON. An unknown tool name still yields an envelope.
    pub fn dispatch_named(&self, tool: &str, args: Value) -> Value {
        match ToolName::parse(tool) {
            Some(tool) => self.dispatch(tool, args),
            None => {
                warn!(tool, "unknown tool requested");
                error_envelope(format!("Unknown tool '{tool}'."))
            }
        }
    }

    /// Dispatch restricted to a role's permitted tool set.
    pub fn dispatch_for_role(&self, role: &AgentRole, tool: ToolName, args: Value) -> Value {
        if !role.tools.contains(&tool) {
            warn!(role = %role.name, tool = tool.as_str(), "tool not permitted for role");
            return error_envelope(format!(
                "Tool '{}' is not available to agent '{}'.",
                tool.as_str(),
                role.name
            ));
        }
        self.dispatch(tool, args)
    }

    #[instrument(skip(self, args), fields(tool = tool.as_str()))]
    pub fn dispatch(&self, tool: ToolName, args: Value) -> Value {
        let started = Instant::now();
        self.metrics.inc_request();

        let reply = match tool {
            ToolName::GetInsuranceQuotes => self.quotes_reply(args),
            ToolName::PurchasePolicy => self.purchase_reply(args),
            ToolName::FileClaim => self.file_claim_reply(args),
            ToolName::CheckClaimStatus => self.claim_status_reply(args),
            ToolName::RouteToAgent => self.route_reply(args),
            ToolName::HandleAgentLaunch => self.launch_reply(args),
        };

        self.metrics.observe_latency(started.elapsed());
        reply
    }

    fn quotes_reply(&self, args: Value) -> Value {
        let args: QuoteArgs = match parse_args(ToolName::GetInsuranceQuotes, args) {
            Ok(args) => args,
            Err(reply) => return reply,
        };
        self.finish(get_insurance_quotes(
            &self.config,
            &args.coverage_type,
            args.coverage_amount,
            &args.customer_info,
        ))
    }

    fn purchase_reply(&self, args: Value) -> Value {
        let args: PurchaseArgs = match parse_args(ToolName::PurchasePolicy, args) {
            Ok(args) => args,
            Err(reply) => return reply,
        };
        self.finish(purchase_policy(
            &self.config,
            &args.quote_id,
            &args.payment_info,
            &args.customer_info,
            today(),
        ))
    }

    fn file_claim_reply(&self, args: Value) -> Value {
        let args: FileClaimArgs = match parse_args(ToolName::FileClaim, args) {
            Ok(args) => args,
            Err(reply) => return reply,
        };
        self.finish(file_claim(
            &self.config,
            &args.policy_number,
            &args.incident_details,
            today(),
        ))
    }

    fn claim_status_reply(&self, args: Value) -> Value {
        let args: ClaimStatusArgs = match parse_args(ToolName::CheckClaimStatus, args) {
            Ok(args) => args,
            Err(reply) => return reply,
        };
        self.finish(check_claim_status(&self.config, &args.claim_number, today()))
    }

    fn route_reply(&self, args: Value) -> Value {
        let args: RouteArgs = match parse_args(ToolName::RouteToAgent, args) {
            Ok(args) => args,
            Err(reply) => return reply,
        };

        let normalized = normalize_query(&args.user_query);
        let payload = route_to_agent(&self.config, &normalized);

        if payload.routing.action == RoutingAction::ClarifyIntent {
            self.metrics.inc_clarification();
        } else if payload.routing.target_agent == self.config.policy_agent {
            self.metrics.inc_routed_policy();
        } else {
            self.metrics.inc_routed_claims();
        }

        info!(
            target_agent = %payload.routing.target_agent,
            action = ?payload.routing.action,
            confidence = ?payload.routing.confidence,
            "query routed"
        );

        to_envelope_value(Envelope::Success(payload))
    }

    fn launch_reply(&self, args: Value) -> Value {
        let args: LaunchArgs = match parse_args(ToolName::HandleAgentLaunch, args) {
            Ok(args) => args,
            Err(reply) => return reply,
        };
        self.finish(handle_agent_launch(&self.config, &args.agent_name))
    }

    fn finish<T: Serialize>(&self, result: Result<T, ValidationError>) -> Value {
        if let Err(err) = &result {
            self.metrics.inc_validation_error();
            info!(error = %err, "tool input rejected");
        }
        to_envelope_value(Envelope::from(result))
    }
}

fn parse_args<T: for<'de> Deserialize<'de>>(tool: ToolName, args: Value) -> Result<T, Value> {
    serde_json::from_value(args).map_err(|err| {
        warn!(tool = tool.as_str(), %err, "malformed tool arguments");
        error_envelope(format!("Invalid arguments for '{}': {err}.", tool.as_str()))
    })
}

fn to_envelope_value<T: Serialize>(envelope: Envelope<T>) -> Value {
    serde_json::to_value(&envelope)
        .unwrap_or_else(|err| error_envelope(format!("Could not serialize response: {err}.")))
}

fn error_envelope(message: String) -> Value {
    json!({ "status": "error", "error_message": message })
}

fn today() -> chrono::NaiveDate {
    Utc::now().date_naive()
}
