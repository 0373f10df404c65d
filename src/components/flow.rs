use crate::catalog::{Catalog, Edition, Tool, GATEWAY_SERVER};

/// Which part of the diagram a stage lights up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageTarget {
    Platform,
    Gateway,
    Server(String),
    /// MuleSoft API gateway in front of the source systems
    Legacy,
    Source,
}

impl StageTarget {
    pub fn is_server(&self, server_id: &str) -> bool {
        matches!(self, StageTarget::Server(id) if id == server_id)
    }
}

/// One step of the simulated request path
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    pub id: String,
    pub label: String,
    pub target: StageTarget,
}

impl Stage {
    fn new(id: impl Into<String>, label: impl Into<String>, target: StageTarget) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            target,
        }
    }
}

/// Build the ordered stage list a query travels through.
///
/// Two leading stages and a gateway stage, then the server stages, then the
/// legacy layer, the source systems and the response.
pub fn build_flow(catalog: &Catalog, tool: &Tool) -> Vec<Stage> {
    let mut flow = Vec::with_capacity(6 + tool.servers.len());

    flow.push(Stage::new("input", "Query received", StageTarget::Platform));
    match catalog.edition {
        Edition::Servers => {
            flow.push(Stage::new(
                "llm",
                format!("LLM → {}()", tool.id),
                StageTarget::Platform,
            ));
            flow.push(Stage::new("gateway", "MCP Gateway (AWS)", StageTarget::Gateway));
            push_owned_servers(&mut flow, tool);
        }
        Edition::Recipes => {
            flow.push(Stage::new(
                "llm",
                format!("LLM selects: {}()", tool.id),
                StageTarget::Platform,
            ));
            flow.push(Stage::new(
                "gateway",
                "MCP Gateway (AWS Lambda)",
                StageTarget::Gateway,
            ));
            push_recipe_servers(&mut flow, tool);
        }
    }

    flow.push(Stage::new("mulesoft", "MuleSoft API Gateway", StageTarget::Legacy));
    match catalog.edition {
        Edition::Servers => {
            flow.push(Stage::new("source", "Source Systems", StageTarget::Source));
            flow.push(Stage::new("response", "Response returned", StageTarget::Platform));
        }
        Edition::Recipes => {
            flow.push(Stage::new(
                "source",
                "Source Systems (Golden)",
                StageTarget::Source,
            ));
            flow.push(Stage::new(
                "response",
                format!("Response: {}", tool.latency),
                StageTarget::Platform,
            ));
        }
    }

    flow
}

fn push_owned_servers(flow: &mut Vec<Stage>, tool: &Tool) {
    if tool.is_orchestrated() {
        flow.push(Stage::new(
            "parallel",
            "Parallel orchestration",
            StageTarget::Gateway,
        ));
        for server in &tool.servers {
            flow.push(Stage::new(
                format!("server_{}", server),
                format!("{} Server", server),
                StageTarget::Server(server.clone()),
            ));
        }
    } else {
        let server = tool.primary_server();
        flow.push(Stage::new(
            "server",
            format!("{} Server", server),
            StageTarget::Server(server.to_string()),
        ));
    }
}

fn push_recipe_servers(flow: &mut Vec<Stage>, tool: &Tool) {
    flow.push(Stage::new(
        "recipe",
        format!("Recipe: {}", tool.servers.join(" + ")),
        StageTarget::Gateway,
    ));
    for server in tool.servers.iter().filter(|s| s.as_str() != GATEWAY_SERVER) {
        flow.push(Stage::new(
            format!("server_{}", server),
            format!("{} MCP Server", server),
            StageTarget::Server(server.clone()),
        ));
    }
}

/// Number of stages that hit a data source server
pub fn server_stage_count(flow: &[Stage]) -> usize {
    flow.iter()
        .filter(|s| matches!(s.target, StageTarget::Server(_)))
        .count()
}
