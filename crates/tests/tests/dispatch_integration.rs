use beacon_agents::ToolName;
use beacon_tests::test_agent;
use serde_json::{json, Value};

fn assert_envelope(reply: &Value) {
    let status = reply["status"].as_str().expect("status field present");
    assert!(
        status == "success" || status == "error",
        "unexpected status: {status}"
    );
    if status == "error" {
        assert!(reply["error_message"].as_str().is_some());
    }
}

#[test]
fn quote_flow_matches_documented_figures() {
    let agent = test_agent();

    let reply = agent.dispatch(
        ToolName::GetInsuranceQuotes,
        json!({
            "coverage_type": "auto",
            "coverage_amount": 10000.0,
            "customer_info": { "age": 20, "location": "Austin" }
        }),
    );

    assert_envelope(&reply);
    assert_eq!(reply["status"], "success");

    let quotes = reply["quotes"].as_array().unwrap();
    assert_eq!(quotes.len(), 2);
    assert_eq!(quotes[0]["provider"], "InsureCo Standard");
    assert_eq!(quotes[0]["annual_premium"], 750.0);
    assert_eq!(quotes[1]["provider"], "InsureCo Premium");
    assert_eq!(quotes[1]["annual_premium"], 900.0);

    for quote in quotes {
        let monthly = quote["monthly_premium"].as_f64().unwrap();
        let annual = quote["annual_premium"].as_f64().unwrap();
        assert!((monthly * 12.0 - annual).abs() < 0.06);
    }
}

#[test]
fn coastal_home_factor_applies_regardless_of_case() {
    let agent = test_agent();

    let reply = agent.dispatch(
        ToolName::GetInsuranceQuotes,
        json!({
            "coverage_type": "home",
            "coverage_amount": 10000.0,
            "customer_info": { "age": 40, "location": "Coastal" }
        }),
    );

    assert_eq!(reply["status"], "success");
    assert_eq!(reply["quotes"][0]["annual_premium"], 600.0);
}

#[test]
fn invalid_quote_requests_return_error_envelopes() {
    let agent = test_agent();

    let bad_type = agent.dispatch(
        ToolName::GetInsuranceQuotes,
        json!({
            "coverage_type": "pet",
            "coverage_amount": 5000.0,
            "customer_info": { "age": 30, "location": "Austin" }
        }),
    );
    assert_envelope(&bad_type);
    assert_eq!(bad_type["status"], "error");

    let bad_amount = agent.dispatch(
        ToolName::GetInsuranceQuotes,
        json!({
            "coverage_type": "auto",
            "coverage_amount": -1.0,
            "customer_info": { "age": 30, "location": "Austin" }
        }),
    );
    assert_eq!(bad_amount["status"], "error");
    assert_eq!(
        bad_amount["error_message"],
        "Coverage amount must be greater than zero."
    );
}

#[test]
fn purchase_then_file_claim_then_check_status() {
    let agent = test_agent();

    let purchase = agent.dispatch(
        ToolName::PurchasePolicy,
        json!({
            "quote_id": "Q-2048",
            "payment_info": { "method": "credit_card" },
            "customer_info": { "name": "Jane Doe", "email": "jane@example.com" }
        }),
    );
    assert_envelope(&purchase);
    assert_eq!(purchase["status"], "success");
    assert_eq!(purchase["policy"]["status"], "active");

    let policy_number = purchase["policy"]["policy_number"].as_str().unwrap();
    assert!(policy_number.starts_with("POL-"));

    let claim = agent.dispatch(
        ToolName::FileClaim,
        json!({
            "policy_number": policy_number,
            "incident_details": { "date": "2026-08-20", "description": "Hail damage" }
        }),
    );
    assert_envelope(&claim);
    assert_eq!(claim["status"], "success");
    assert_eq!(claim["claim"]["status"], "under_review");
    assert_eq!(claim["claim"]["estimated_processing_time"], "5-7 business days");

    let claim_number = claim["claim"]["claim_number"].as_str().unwrap();
    assert!(claim_number.starts_with("CLM-"));

    let first = agent.dispatch(
        ToolName::CheckClaimStatus,
        json!({ "claim_number": claim_number }),
    );
    let second = agent.dispatch(
        ToolName::CheckClaimStatus,
        json!({ "claim_number": claim_number }),
    );
    assert_envelope(&first);
    assert_eq!(first["status"], "success");
    assert_eq!(first["claim_status"]["status"], second["claim_status"]["status"]);
}

#[test]
fn file_claim_rejects_foreign_policy_prefix() {
    let agent = test_agent();

    let reply = agent.dispatch(
        ToolName::FileClaim,
        json!({
            "policy_number": "ABC-000123",
            "incident_details": { "date": "2026-08-20", "description": "Hail damage" }
        }),
    );

    assert_eq!(reply["status"], "error");
    assert_eq!(
        reply["error_message"],
        "Valid policy number starting with 'POL-' is required."
    );
}

#[test]
fn routing_examples_from_the_three_destinations() {
    let agent = test_agent();

    let policy = agent.dispatch(
        ToolName::RouteToAgent,
        json!({ "user_query": "I want a quote for auto insurance" }),
    );
    assert_eq!(policy["routing"]["target_agent"], "insurance_policy_agent");
    assert_eq!(policy["routing"]["confidence"], "high");

    let claims = agent.dispatch(
        ToolName::RouteToAgent,
        json!({ "user_query": "I need to report an accident" }),
    );
    assert_eq!(claims["routing"]["target_agent"], "insurance_claims_agent");
    assert_eq!(claims["routing"]["action"], "handle_query");

    let unclear = agent.dispatch(ToolName::RouteToAgent, json!({ "user_query": "hello" }));
    assert_eq!(unclear["routing"]["target_agent"], "insurance_root_agent");
    assert_eq!(unclear["routing"]["confidence"], "low");
    assert!(unclear["routing"]["message"].as_str().is_some());
}

#[test]
fn every_operation_returns_a_well_formed_envelope() {
    let agent = test_agent();

    let calls = [
        (
            "get_insurance_quotes",
            json!({ "coverage_type": "life", "coverage_amount": 50000.0,
                    "customer_info": { "age": 45, "location": "Denver" } }),
        ),
        (
            "purchase_policy",
            json!({ "quote_id": "", "payment_info": {}, "customer_info": {} }),
        ),
        (
            "file_claim",
            json!({ "policy_number": "POL-000001", "incident_details": {} }),
        ),
        ("check_claim_status", json!({ "claim_number": "bogus" })),
        ("route_to_agent", json!({ "user_query": "premium question" })),
        ("handle_agent_launch", json!({ "agent_name": "nobody" })),
        ("not_a_tool", json!({})),
    ];

    for (tool, args) in calls {
        let reply = agent.dispatch_named(tool, args);
        assert_envelope(&reply);
    }
}
