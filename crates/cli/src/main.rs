use std::io::{self, Write};
use std::sync::Arc;

use anyhow::Result;
use beacon_agents::{InsuranceAgent, ToolName};
use beacon_core::InsuranceConfig;
use beacon_observability::{init_tracing, AppMetrics};
use clap::{Parser, Subcommand};
use serde_json::json;

#[derive(Debug, Parser)]
#[command(name = "beacon")]
#[command(about = "Beacon Insurance Assistant CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive routing demo: type queries, see where they land.
    Chat,
    /// Route a single query.
    Route { query: String },
    /// Get quotes for a coverage type and amount.
    Quote {
        #[arg(long)]
        coverage_type: String,
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        age: u32,
        #[arg(long)]
        location: String,
    },
    /// Purchase a policy from a quote.
    Purchase {
        #[arg(long)]
        quote_id: String,
        #[arg(long, default_value = "credit_card")]
        method: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// File a claim against a policy.
    FileClaim {
        #[arg(long)]
        policy_number: String,
        #[arg(long)]
        date: String,
        #[arg(long)]
        description: String,
    },
    /// Check the status of an existing claim.
    ClaimStatus { claim_number: String },
    /// Launch a specialized agent by name.
    Launch { agent_name: String },
    /// Show the agent roles and their permitted tools.
    Roles,
}

fn main() -> Result<()> {
    init_tracing("beacon_cli");
    let cli = Cli::parse();

    let agent = InsuranceAgent::new(Arc::new(InsuranceConfig::default()), AppMetrics::shared());

    match cli.command {
        Command::Chat => run_chat(&agent)?,
        Command::Route { query } => print_reply(
            &agent,
            ToolName::RouteToAgent,
            json!({ "user_query": query }),
        )?,
        Command::Quote {
            coverage_type,
            amount,
            age,
            location,
        } => print_reply(
            &agent,
            ToolName::GetInsuranceQuotes,
            json!({
                "coverage_type": coverage_type,
                "coverage_amount": amount,
                "customer_info": { "age": age, "location": location }
            }),
        )?,
        Command::Purchase {
            quote_id,
            method,
            name,
            email,
        } => print_reply(
            &agent,
            ToolName::PurchasePolicy,
            json!({
                "quote_id": quote_id,
                "payment_info": { "method": method },
                "customer_info": { "name": name, "email": email }
            }),
        )?,
        Command::FileClaim {
            policy_number,
            date,
            description,
        } => print_reply(
            &agent,
            ToolName::FileClaim,
            json!({
                "policy_number": policy_number,
                "incident_details": { "date": date, "description": description }
            }),
        )?,
        Command::ClaimStatus { claim_number } => print_reply(
            &agent,
            ToolName::CheckClaimStatus,
            json!({ "claim_number": claim_number }),
        )?,
        Command::Launch { agent_name } => print_reply(
            &agent,
            ToolName::HandleAgentLaunch,
            json!({ "agent_name": agent_name }),
        )?,
        Command::Roles => {
            println!("{}", serde_json::to_string_pretty(&agent.roles())?);
        }
    }

    Ok(())
}

fn print_reply(agent: &InsuranceAgent, tool: ToolName, args: serde_json::Value) -> Result<()> {
    let reply = agent.dispatch(tool, args);
    println!("{}", serde_json::to_string_pretty(&reply)?);
    Ok(())
}

fn run_chat(agent: &InsuranceAgent) -> Result<()> {
    println!("Beacon Insurance Assistant. type 'exit' to quit.");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let message = line.trim();
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }
        if message.is_empty() {
            continue;
        }

        let reply = agent.dispatch(ToolName::RouteToAgent, json!({ "user_query": message }));
        let routing = &reply["routing"];

        if let Some(clarify) = routing["message"].as_str() {
            println!("\n{clarify}\n");
            continue;
        }

        if let Some(target) = routing["target_agent"].as_str() {
            let launch = agent.dispatch(
                ToolName::HandleAgentLaunch,
                json!({ "agent_name": target }),
            );
            match launch["launch"]["message"].as_str() {
                Some(message) => println!("\n{message}\n"),
                None => println!("\nRouted to {target}.\n"),
            }
        }
    }

    let snapshot = agent.metrics().snapshot();
    println!("session summary: {}", serde_json::to_string(&snapshot)?);

    Ok(())
}
