use std::collections::BTreeMap;

use super::{
    capabilities, stats, strings, Catalog, Edition, OperationKind, Orchestration, Platform,
    Server, Tool,
};

pub(super) fn catalog() -> Catalog {
    Catalog {
        edition: Edition::Servers,
        default_platform: "sierra".to_string(),
        fallback_tool: "get_customer_profile".to_string(),
        platforms: platforms(),
        tools: tools(),
        servers: servers(),
        responses: responses(),
        quick_actions: strings(&[
            "Why is my bill higher?",
            "What services do I have?",
            "My receiver isn't working",
            "What deals can you offer?",
        ]),
    }
}

fn platforms() -> Vec<Platform> {
    vec![
        Platform {
            id: "sierra".to_string(),
            name: "Sierra".to_string(),
            channel: "Chat".to_string(),
            color: "#00D4AA".to_string(),
            tools: strings(&[
                "get_customer_profile",
                "get_bill_history",
                "compare_bills",
                "get_offers",
                "apply_offer",
                "get_troubleshooting_flow",
                "escalate_to_agent",
            ]),
            description: "Customer-facing chat with transactional capabilities".to_string(),
            stats: stats(&[("daily", "18K"), ("containment", "70%")]),
        },
        Platform {
            id: "agentforce".to_string(),
            name: "Agent Force".to_string(),
            channel: "Agent Assist".to_string(),
            color: "#FF6B35".to_string(),
            tools: strings(&[
                "get_customer_profile",
                "get_bill_history",
                "compare_bills",
                "get_offers",
                "apply_offer",
                "get_troubleshooting_flow",
                "schedule_technician",
                "issue_credit",
            ]),
            description: "Full capabilities for human agents".to_string(),
            stats: stats(&[("daily", "All agents"), ("containment", "N/A")]),
        },
        Platform {
            id: "genesis".to_string(),
            name: "Genesis".to_string(),
            channel: "Voice".to_string(),
            color: "#7B68EE".to_string(),
            tools: strings(&[
                "get_customer_profile",
                "get_bill_history",
                "compare_bills",
                "get_offers",
                "get_troubleshooting_flow",
                "escalate_to_agent",
            ]),
            description: "Voice IVR - read-only until validated".to_string(),
            stats: stats(&[("monthly", "3.5M"), ("containment", "22%")]),
        },
        Platform {
            id: "copilot".to_string(),
            name: "Copilot".to_string(),
            channel: "Internal".to_string(),
            color: "#FFD93D".to_string(),
            tools: strings(&[
                "get_customer_profile",
                "get_bill_history",
                "compare_bills",
                "get_offers",
                "get_troubleshooting_flow",
                "schedule_technician",
            ]),
            description: "Future internal tools and dashboards".to_string(),
            stats: stats(&[("status", "Future")]),
        },
    ]
}

fn tool(
    id: &str,
    description: &str,
    servers: &[&str],
    kind: OperationKind,
    latency: &str,
    triggers: &[&str],
) -> Tool {
    Tool {
        id: id.to_string(),
        description: description.to_string(),
        servers: strings(servers),
        orchestration: Orchestration::Single,
        kind,
        latency: latency.to_string(),
        triggers: strings(triggers),
        server_calls: Vec::new(),
        returns: None,
    }
}

fn tools() -> Vec<Tool> {
    vec![
        tool(
            "get_customer_profile",
            "Retrieve customer info, services, packages, equipment, and account status",
            &["VCG"],
            OperationKind::Read,
            "~50ms",
            &["who is this", "what services", "my account", "my plan", "what do i have", "my package"],
        ),
        tool(
            "get_bill_history",
            "Retrieve 6-month billing history with line-item details",
            &["Biller"],
            OperationKind::Read,
            "~50ms",
            &["bill history", "past bills", "billing statements", "payment history"],
        ),
        Tool {
            orchestration: Orchestration::Parallel,
            ..tool(
                "compare_bills",
                "Compare current bill to previous - promos, rate changes, usage, fees",
                &["VCG", "Biller", "Offers"],
                OperationKind::Read,
                "~100ms",
                &["why is my bill", "bill higher", "what changed", "explain charges", "bill went up", "bill increased"],
            )
        },
        tool(
            "get_offers",
            "Get real-time eligible offers and promotions for customer",
            &["Offers"],
            OperationKind::Read,
            "~50ms",
            &["deals", "discounts", "promotions", "offers", "save money", "lower my bill"],
        ),
        tool(
            "apply_offer",
            "Apply an offer to customer account - transactional write-back",
            &["Offers"],
            OperationKind::Write,
            "~50ms",
            &["apply", "add that", "give me that", "accept offer", "take the deal", "yes apply"],
        ),
        tool(
            "get_troubleshooting_flow",
            "Get guided diagnostic flow for equipment issues and error codes",
            &["WFE"],
            OperationKind::Read,
            "~50ms",
            &["not working", "error", "broken", "fix", "troubleshoot", "help with", "receiver", "771"],
        ),
        tool(
            "schedule_technician",
            "Book a service technician appointment",
            &["WFE"],
            OperationKind::Write,
            "~50ms",
            &["technician", "appointment", "send someone", "schedule visit"],
        ),
        tool(
            "issue_credit",
            "Apply account credit for service issues",
            &["Biller"],
            OperationKind::Write,
            "~50ms",
            &["credit", "refund", "compensation", "make it right"],
        ),
        tool(
            "escalate_to_agent",
            "Hand off conversation to human agent with full context",
            &["Gateway"],
            OperationKind::Action,
            "~10ms",
            &["talk to someone", "human", "agent", "representative", "supervisor"],
        ),
    ]
}

fn servers() -> Vec<Server> {
    vec![
        Server {
            id: "VCG".to_string(),
            name: "VCG Server".to_string(),
            full_name: "Video Customer Gateway".to_string(),
            description: "Customer profile, packages, equipment, account status".to_string(),
            color: "#00D4AA".to_string(),
            icon: Some("👤".to_string()),
            capabilities: capabilities(&[
                ("get_profile", "customer_id", "Profile, packages, status"),
                ("get_equipment", "customer_id", "Device list, models, status"),
            ]),
        },
        Server {
            id: "Biller".to_string(),
            name: "Biller Server".to_string(),
            full_name: "3 Billing Systems".to_string(),
            description: "Bill history, comparisons, payment status, credits".to_string(),
            color: "#FF6B35".to_string(),
            icon: Some("💳".to_string()),
            capabilities: capabilities(&[
                ("get_bills", "customer_id, months", "Bill history with line items"),
                ("issue_credit", "customer_id, amount, reason", "Credit confirmation"),
            ]),
        },
        Server {
            id: "Offers".to_string(),
            name: "Offers Server".to_string(),
            full_name: "Decisioning Engine".to_string(),
            description: "Real-time eligibility, offer application".to_string(),
            color: "#7B68EE".to_string(),
            icon: Some("🎁".to_string()),
            capabilities: capabilities(&[
                ("get_offers", "customer_id", "Available offers list"),
                ("apply_offer", "customer_id, offer_id", "Confirmation"),
            ]),
        },
        Server {
            id: "WFE".to_string(),
            name: "WFE Server".to_string(),
            full_name: "Workflow Engine".to_string(),
            description: "Device troubleshooting, diagnostics".to_string(),
            color: "#FFD93D".to_string(),
            icon: Some("🔧".to_string()),
            capabilities: capabilities(&[
                ("get_careflow", "equipment_type, issue_type", "Step-by-step diagnostic"),
                ("schedule_appointment", "customer_id, issue_type", "Appointment confirmation"),
            ]),
        },
        Server {
            id: "Gateway".to_string(),
            name: "MCP Gateway".to_string(),
            full_name: "AWS-Hosted Gateway".to_string(),
            description: "Tool routing, platform filtering, orchestration".to_string(),
            color: "#E056FD".to_string(),
            icon: Some("⚡".to_string()),
            capabilities: capabilities(&[
                ("list_tools", "platform_id", "Filtered tool list for platform"),
                ("route_to_agent", "context, queue", "Agent queue assignment"),
            ]),
        },
    ]
}

fn responses() -> BTreeMap<String, String> {
    [
        (
            "get_customer_profile",
            "**Customer Profile**\n\n• Account: Active (Satellite)\n• Package: Ultimate + Sports\n• Equipment: 3 Genie receivers\n• Customer since: March 2019\n• Status: Good standing",
        ),
        (
            "get_bill_history",
            "**Bill History (6 months)**\n\n• Nov 2025: $142.50\n• Oct 2025: $142.50\n• Sep 2025: $142.50\n• Aug 2025: $127.50\n• Jul 2025: $127.50\n• Jun 2025: $127.50",
        ),
        (
            "compare_bills",
            "**Bill Comparison**\n\nCurrent: $142.50 → Previous: $127.50\n**Change: +$15.00**\n\n**What changed:**\n• HBO Max promo expired: +$15.99\n• Regional sports fee increase: +$2.00\n• Loyalty credit applied: -$2.99\n\n_Would you like to see available offers?_",
        ),
        (
            "get_offers",
            "**Available Offers**\n\n1. 🎬 **HBO Max** — $10/mo (50% off)\n2. 📺 **Sports Pack** — Free for 3 months\n3. 💰 **Loyalty Discount** — $10/mo off for 12 months\n\n_Say \"apply\" + offer name to add to your account._",
        ),
        (
            "apply_offer",
            "**✓ Offer Applied**\n\nLoyalty Discount: -$10.00/mo\nEffective: Next billing cycle\nDuration: 12 months\n\n**New monthly total: $132.50**",
        ),
        (
            "get_troubleshooting_flow",
            "**Troubleshooting: Receiver**\n\n**Step 1 of 4**\n\nPress and hold the red reset button on the side of your Genie for 10 seconds.\n\n• Is the receiver restarting? → Continue\n• No change? → We'll try another approach",
        ),
        (
            "schedule_technician",
            "**✓ Technician Scheduled**\n\nDate: Tomorrow, Nov 29\nWindow: 2:00 PM - 4:00 PM\nConfirmation: #DTV-847291\n\n_You'll receive a text 30 min before arrival._",
        ),
        (
            "issue_credit",
            "**✓ Credit Applied**\n\nAmount: $25.00\nReason: Service interruption\nApplied to: Next statement",
        ),
        (
            "escalate_to_agent",
            "**Connecting to agent...**\n\nContext transferred:\n• Account status\n• Conversation history\n• Bill comparison\n\nEstimated wait: ~2 minutes",
        ),
    ]
    .into_iter()
    .map(|(tool, text)| (tool.to_string(), text.to_string()))
    .collect()
}
