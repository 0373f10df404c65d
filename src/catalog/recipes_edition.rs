use std::collections::BTreeMap;

use super::{
    capabilities, stats, strings, Catalog, Edition, OperationKind, Orchestration, Platform,
    Server, Tool,
};

pub(super) fn catalog() -> Catalog {
    Catalog {
        edition: Edition::Recipes,
        default_platform: "sierra".to_string(),
        fallback_tool: "get_customer_profile".to_string(),
        platforms: platforms(),
        tools: recipes(),
        servers: servers(),
        responses: responses(),
        quick_actions: strings(&["Why is my bill higher?", "What deals?", "Fix my receiver"]),
    }
}

fn platform(
    id: &str,
    name: &str,
    channel: &str,
    color: &str,
    tools: &[&str],
    description: &str,
) -> Platform {
    Platform {
        id: id.to_string(),
        name: name.to_string(),
        channel: channel.to_string(),
        color: color.to_string(),
        tools: strings(tools),
        description: description.to_string(),
        stats: Vec::new(),
    }
}

fn platforms() -> Vec<Platform> {
    vec![
        Platform {
            stats: stats(&[("daily", "18K"), ("containment", "70%")]),
            ..platform(
                "sierra",
                "Sierra",
                "Chat",
                "#00D4AA",
                &[
                    "get_customer_profile",
                    "get_bill_history",
                    "compare_bills",
                    "get_offers",
                    "apply_offer",
                    "diagnose_issue",
                    "escalate_to_agent",
                ],
                "Customer-facing chat with transactional capabilities",
            )
        },
        Platform {
            stats: stats(&[("daily", "All agents"), ("containment", "N/A")]),
            ..platform(
                "agentforce",
                "Agent Force",
                "DTV360",
                "#FF6B35",
                &[
                    "get_customer_profile",
                    "get_bill_history",
                    "compare_bills",
                    "get_offers",
                    "apply_offer",
                    "diagnose_issue",
                    "schedule_technician",
                    "issue_credit",
                ],
                "Full capabilities for human agents",
            )
        },
        Platform {
            stats: stats(&[("monthly", "3.5M"), ("containment", "22%")]),
            ..platform(
                "genesys",
                "Genesys",
                "Voice",
                "#7B68EE",
                &[
                    "get_customer_profile",
                    "get_bill_history",
                    "compare_bills",
                    "get_offers",
                    "diagnose_issue",
                    "escalate_to_agent",
                ],
                "Voice IVR - read-only until validated",
            )
        },
        Platform {
            stats: stats(&[("status", "Future")]),
            ..platform(
                "copilot",
                "Copilot",
                "Future",
                "#FFD93D",
                &[
                    "get_customer_profile",
                    "get_bill_history",
                    "compare_bills",
                    "get_offers",
                    "diagnose_issue",
                    "schedule_technician",
                ],
                "Future internal tools and dashboards",
            )
        },
    ]
}

struct RecipeRow<'a> {
    id: &'a str,
    description: &'a str,
    servers: &'a [&'a str],
    calls: &'a [&'a str],
    kind: OperationKind,
    latency: &'a str,
    triggers: &'a [&'a str],
    returns: &'a str,
}

impl From<RecipeRow<'_>> for Tool {
    fn from(row: RecipeRow<'_>) -> Self {
        Tool {
            id: row.id.to_string(),
            description: row.description.to_string(),
            servers: strings(row.servers),
            orchestration: Orchestration::Single,
            kind: row.kind,
            latency: row.latency.to_string(),
            triggers: strings(row.triggers),
            server_calls: strings(row.calls),
            returns: Some(row.returns.to_string()),
        }
    }
}

fn recipes() -> Vec<Tool> {
    [
        RecipeRow {
            id: "get_customer_profile",
            description: "Unified customer context - profile, services, account status",
            servers: &["VCG", "Biller"],
            calls: &["VCG.get_profile()", "Biller.get_balance()"],
            kind: OperationKind::Read,
            latency: "~100ms",
            triggers: &["who is this", "what services", "my account", "my plan", "what do i have", "my package"],
            returns: "Unified customer context combining VCG profile with real-time balance",
        },
        RecipeRow {
            id: "get_bill_history",
            description: "Retrieve 6-month billing history with line-item details",
            servers: &["VCG", "Biller"],
            calls: &["VCG.get_profile()", "Biller.get_bills()"],
            kind: OperationKind::Read,
            latency: "~100ms",
            triggers: &["bill history", "past bills", "billing statements", "payment history"],
            returns: "Historical billing data from correct biller system",
        },
        RecipeRow {
            id: "compare_bills",
            description: "Compare current bill to previous - promos, rate changes, usage, fees",
            servers: &["VCG", "Biller", "Offers"],
            calls: &["VCG.get_profile()", "Biller.get_bills()", "Offers.get_promo_history()"],
            kind: OperationKind::Read,
            latency: "~150ms",
            triggers: &["why is my bill", "bill higher", "what changed", "explain charges", "bill went up", "bill increased"],
            returns: "Itemized comparison with change reasons (promos, rates, fees)",
        },
        RecipeRow {
            id: "get_offers",
            description: "Get real-time eligible offers and promotions for customer",
            servers: &["VCG", "Offers"],
            calls: &["VCG.get_profile()", "Offers.get_offers()", "Offers.check_eligibility()"],
            kind: OperationKind::Read,
            latency: "~100ms",
            triggers: &["deals", "discounts", "promotions", "offers", "save money", "lower my bill"],
            returns: "Personalized offers based on customer profile and history",
        },
        RecipeRow {
            id: "apply_offer",
            description: "Apply an offer to customer account - transactional write-back",
            servers: &["VCG", "Offers"],
            calls: &["VCG.get_profile()", "Offers.apply_offer()"],
            kind: OperationKind::Write,
            latency: "~100ms",
            triggers: &["apply", "add that", "give me that", "accept offer", "take the deal", "yes apply"],
            returns: "Confirmation + updated account status + audit trail",
        },
        RecipeRow {
            id: "diagnose_issue",
            description: "Get guided diagnostic flow for equipment issues and error codes",
            servers: &["VCG", "WFE"],
            calls: &["VCG.get_equipment()", "WFE.get_careflow()", "WFE.get_error_codes()"],
            kind: OperationKind::Read,
            latency: "~100ms",
            triggers: &["not working", "error", "broken", "fix", "troubleshoot", "help with", "receiver", "771"],
            returns: "Equipment context + step-by-step diagnostic flow",
        },
        RecipeRow {
            id: "schedule_technician",
            description: "Book a service technician appointment",
            servers: &["VCG", "WFE"],
            calls: &["VCG.get_profile()", "WFE.schedule_appointment()"],
            kind: OperationKind::Write,
            latency: "~100ms",
            triggers: &["technician", "appointment", "send someone", "schedule visit"],
            returns: "Appointment confirmation with date, time, confirmation number",
        },
        RecipeRow {
            id: "issue_credit",
            description: "Apply account credit for service issues",
            servers: &["VCG", "Biller"],
            calls: &["VCG.get_profile()", "Biller.issue_credit()"],
            kind: OperationKind::Write,
            latency: "~100ms",
            triggers: &["credit", "refund", "compensation", "make it right"],
            returns: "Credit confirmation + updated balance",
        },
        RecipeRow {
            id: "escalate_to_agent",
            description: "Hand off conversation to human agent with full context",
            servers: &["Gateway"],
            calls: &["Gateway.package_context()", "Gateway.route_to_agent()"],
            kind: OperationKind::Action,
            latency: "~10ms",
            triggers: &["talk to someone", "human", "agent", "representative", "supervisor"],
            returns: "Context bundle transferred to agent queue",
        },
    ]
    .into_iter()
    .map(Tool::from)
    .collect()
}

fn servers() -> Vec<Server> {
    vec![
        Server {
            id: "VCG".to_string(),
            name: "VCG MCP Server".to_string(),
            full_name: "Video Customer Gateway".to_string(),
            description: "Wraps VCG API - customer profile, equipment, services".to_string(),
            color: "#00D4AA".to_string(),
            icon: None,
            capabilities: capabilities(&[
                ("get_profile", "customer_id", "Profile, packages, status"),
                ("get_equipment", "customer_id", "Device list, models, status"),
                ("get_services", "customer_id", "Active services, add-ons"),
            ]),
        },
        Server {
            id: "Biller".to_string(),
            name: "Biller MCP Server".to_string(),
            full_name: "3 Billing Systems".to_string(),
            description: "Wraps all 3 Biller APIs - handles routing to correct system".to_string(),
            color: "#FF6B35".to_string(),
            icon: None,
            capabilities: capabilities(&[
                ("get_bills", "customer_id, biller_system, months", "Bill history with line items"),
                ("get_balance", "customer_id, biller_system", "Current balance, due date"),
                ("get_payment_status", "customer_id", "Payment history, arrangements"),
                ("issue_credit", "customer_id, amount, reason", "Credit confirmation"),
            ]),
        },
        Server {
            id: "Offers".to_string(),
            name: "Offers MCP Server".to_string(),
            full_name: "Decisioning Engine".to_string(),
            description: "Wraps Decisioning API - offers, eligibility, write-back".to_string(),
            color: "#7B68EE".to_string(),
            icon: None,
            capabilities: capabilities(&[
                ("get_offers", "customer_id", "Available offers list"),
                ("check_eligibility", "customer_id, offer_id", "Eligibility + reasons"),
                ("apply_offer", "customer_id, offer_id", "Confirmation + audit trail"),
                ("get_promo_history", "customer_id", "Past promos, expirations"),
            ]),
        },
        Server {
            id: "WFE".to_string(),
            name: "WFE MCP Server".to_string(),
            full_name: "Workflow Engine".to_string(),
            description: "Wraps Workflow Engine API - careflows, troubleshooting".to_string(),
            color: "#FFD93D".to_string(),
            icon: None,
            capabilities: capabilities(&[
                ("get_careflow", "equipment_type, issue_type", "Step-by-step diagnostic"),
                ("get_error_codes", "error_code", "Error details, resolution"),
                ("run_diagnostic", "customer_id, equipment_id, action", "Diagnostic result"),
                ("schedule_appointment", "customer_id, issue_type", "Appointment confirmation"),
            ]),
        },
        Server {
            id: "Gateway".to_string(),
            name: "MCP Gateway".to_string(),
            full_name: "AWS Lambda".to_string(),
            description: "Orchestration layer - recipes, tool filtering, auth, observability".to_string(),
            color: "#E056FD".to_string(),
            icon: None,
            capabilities: capabilities(&[
                ("list_tools", "platform_id", "Filtered tool list for platform"),
                ("package_context", "conversation_id", "Context bundle for handoff"),
                ("route_to_agent", "context, queue", "Agent queue assignment"),
            ]),
        },
    ]
}

fn responses() -> BTreeMap<String, String> {
    [
        (
            "get_customer_profile",
            "**Customer Profile** _(via VCG + Biller)_\n\n• Account: Active (Satellite)\n• Package: Ultimate + Sports\n• Equipment: 3 Genie receivers\n• Customer since: March 2019\n• Current balance: $142.50\n• Status: Good standing",
        ),
        (
            "get_bill_history",
            "**Bill History** _(via VCG → Biller)_\n\n• Nov 2025: $142.50\n• Oct 2025: $142.50\n• Sep 2025: $142.50\n• Aug 2025: $127.50\n• Jul 2025: $127.50\n• Jun 2025: $127.50",
        ),
        (
            "compare_bills",
            "**Bill Comparison** _(via VCG → Biller → Offers)_\n\nCurrent: $142.50 → Previous: $127.50\n**Change: +$15.00**\n\n**What changed:**\n• HBO Max promo expired: +$15.99\n• Regional sports fee increase: +$2.00\n• Loyalty credit applied: -$2.99\n\n_Would you like to see available offers?_",
        ),
        (
            "get_offers",
            "**Available Offers** _(via VCG → Offers)_\n\n1. **HBO Max** — $10/mo (50% off)\n2. **Sports Pack** — Free for 3 months\n3. **Loyalty Discount** — $10/mo off for 12 months\n\n_Say \"apply\" + offer name to add to your account._",
        ),
        (
            "apply_offer",
            "**Offer Applied** _(via VCG → Offers write-back)_\n\nLoyalty Discount: -$10.00/mo\nEffective: Next billing cycle\nDuration: 12 months\n\n**New monthly total: $132.50**\n\n_Audit trail recorded._",
        ),
        (
            "diagnose_issue",
            "**Troubleshooting** _(via VCG → WFE)_\n\n**Device:** Genie HR54 (Living Room)\n\n**Step 1 of 4**\n\nPress and hold the red reset button on the side of your Genie for 10 seconds.\n\n• Is the receiver restarting? → Continue\n• No change? → We'll try another approach",
        ),
        (
            "schedule_technician",
            "**Technician Scheduled** _(via VCG → WFE)_\n\nDate: Tomorrow, Nov 29\nWindow: 2:00 PM - 4:00 PM\nConfirmation: #DTV-847291\n\n_You'll receive a text 30 min before arrival._",
        ),
        (
            "issue_credit",
            "**Credit Applied** _(via VCG → Biller)_\n\nAmount: $25.00\nReason: Service interruption\nApplied to: Next statement\n\n_Audit trail recorded._",
        ),
        (
            "escalate_to_agent",
            "**Connecting to agent...**\n\nContext transferred:\n• Account status\n• Conversation history\n• Bill comparison\n• Troubleshooting steps completed\n\nEstimated wait: ~2 minutes",
        ),
    ]
    .into_iter()
    .map(|(tool, text)| (tool.to_string(), text.to_string()))
    .collect()
}
