use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::{ExplorerError, Result};

pub mod comparison;
mod recipes_edition;
mod servers_edition;

/// Server id used for the orchestration layer itself.
pub const GATEWAY_SERVER: &str = "Gateway";

/// Text returned for tools without a canned response.
pub const GENERIC_RESPONSE: &str = "Request processed.";

/// Built-in catalog flavours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Edition {
    /// Tools talk to a single data source server, bill comparison fans out
    #[default]
    Servers,
    /// Gateway recipes that compose several data source servers
    Recipes,
}

impl Edition {
    pub fn label(&self) -> &'static str {
        match self {
            Edition::Servers => "Data Source Servers",
            Edition::Recipes => "Gateway Recipes",
        }
    }
}

/// What a tool does to the backing systems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Read,
    Write,
    Action,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Read => "read",
            OperationKind::Write => "write",
            OperationKind::Action => "action",
        }
    }
}

/// How a tool reaches its servers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Orchestration {
    #[default]
    Single,
    Parallel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformStat {
    pub label: String,
    pub value: String,
}

/// A client channel with its own allow-list of tools
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub id: String,
    pub name: String,
    pub channel: String,
    pub color: String,
    pub tools: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub stats: Vec<PlatformStat>,
}

impl Platform {
    pub fn allows(&self, tool_id: &str) -> bool {
        self.tools.iter().any(|t| t == tool_id)
    }
}

/// A tool (or gateway recipe) a platform can invoke
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub id: String,
    pub description: String,
    /// Owning servers in call order; the first one owns single-server tools
    pub servers: Vec<String>,
    #[serde(default)]
    pub orchestration: Orchestration,
    pub kind: OperationKind,
    pub latency: String,
    pub triggers: Vec<String>,
    #[serde(default)]
    pub server_calls: Vec<String>,
    #[serde(default)]
    pub returns: Option<String>,
}

impl Tool {
    pub fn primary_server(&self) -> &str {
        self.servers.first().map(String::as_str).unwrap_or(GATEWAY_SERVER)
    }

    pub fn is_orchestrated(&self) -> bool {
        self.orchestration == Orchestration::Parallel
    }

    pub fn uses_server(&self, server_id: &str) -> bool {
        self.servers.iter().any(|s| s == server_id)
    }

    /// Server label shown next to the tool, e.g. `VCG + Biller`
    pub fn server_summary(&self, separator: &str) -> String {
        if self.is_orchestrated() {
            "Multi".to_string()
        } else {
            self.servers.join(separator)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capability {
    pub name: String,
    pub params: String,
    pub returns: String,
}

/// A backend capability group the gateway delegates to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    pub id: String,
    pub name: String,
    pub full_name: String,
    pub description: String,
    pub color: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub capabilities: Vec<Capability>,
}

impl Server {
    pub fn is_gateway(&self) -> bool {
        self.id == GATEWAY_SERVER
    }
}

/// Every static table the explorer needs, in declaration order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub edition: Edition,
    pub default_platform: String,
    pub fallback_tool: String,
    pub platforms: Vec<Platform>,
    pub tools: Vec<Tool>,
    pub servers: Vec<Server>,
    #[serde(default)]
    pub responses: BTreeMap<String, String>,
    #[serde(default)]
    pub quick_actions: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin(Edition::default())
    }
}

impl Catalog {
    /// One of the catalogs shipped with the explorer
    pub fn builtin(edition: Edition) -> Self {
        match edition {
            Edition::Servers => servers_edition::catalog(),
            Edition::Recipes => recipes_edition::catalog(),
        }
    }

    /// Load and validate a catalog from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let catalog: Catalog = serde_json::from_str(&contents)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Save the catalog as pretty JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    /// Check cross references between platforms, tools and servers
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for platform in &self.platforms {
            if !seen.insert(platform.id.as_str()) {
                return Err(ExplorerError::DuplicateId {
                    kind: "platform",
                    id: platform.id.clone(),
                });
            }
        }

        let mut seen = HashSet::new();
        for tool in &self.tools {
            if !seen.insert(tool.id.as_str()) {
                return Err(ExplorerError::DuplicateId {
                    kind: "tool",
                    id: tool.id.clone(),
                });
            }
            if tool.servers.is_empty() {
                return Err(ExplorerError::OrphanTool(tool.id.clone()));
            }
            for server in &tool.servers {
                if self.server(server).is_none() {
                    return Err(ExplorerError::UnknownServer {
                        tool: tool.id.clone(),
                        server: server.clone(),
                    });
                }
            }
        }

        let mut seen = HashSet::new();
        for server in &self.servers {
            if !seen.insert(server.id.as_str()) {
                return Err(ExplorerError::DuplicateId {
                    kind: "server",
                    id: server.id.clone(),
                });
            }
        }

        for platform in &self.platforms {
            for tool in &platform.tools {
                if self.tool(tool).is_none() {
                    return Err(ExplorerError::UnknownTool {
                        platform: platform.id.clone(),
                        tool: tool.clone(),
                    });
                }
            }
        }

        if self.tool(&self.fallback_tool).is_none() {
            return Err(ExplorerError::MissingFallback(self.fallback_tool.clone()));
        }
        if self.platform(&self.default_platform).is_none() {
            return Err(ExplorerError::UnknownPlatform(self.default_platform.clone()));
        }

        Ok(())
    }

    pub fn platform(&self, id: &str) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.id == id)
    }

    pub fn tool(&self, id: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.id == id)
    }

    pub fn server(&self, id: &str) -> Option<&Server> {
        self.servers.iter().find(|s| s.id == id)
    }

    /// The tool returned when nothing matches.
    ///
    /// Falls back to the first declared tool if `fallback_tool` names no tool.
    ///
    /// # Panics
    ///
    /// Panics if the catalog declares no tools. Built-in and loaded catalogs
    /// always pass [`Catalog::validate`], which rules this out; hand-built
    /// catalogs should be validated before use.
    pub fn fallback(&self) -> &Tool {
        self.tool(&self.fallback_tool)
            .or_else(|| self.tools.first())
            .expect("catalog declares at least one tool")
    }

    /// The platform a session starts on.
    ///
    /// Falls back to the first declared platform if `default_platform` names
    /// no platform.
    ///
    /// # Panics
    ///
    /// Panics if the catalog declares no platforms, which
    /// [`Catalog::validate`] rules out.
    pub fn default_platform(&self) -> &Platform {
        self.platform(&self.default_platform)
            .or_else(|| self.platforms.first())
            .expect("catalog declares at least one platform")
    }

    /// Tools a platform may invoke, in catalog declaration order
    pub fn tools_for<'a>(&'a self, platform: &'a Platform) -> impl Iterator<Item = &'a Tool> + 'a {
        self.tools.iter().filter(move |t| platform.allows(&t.id))
    }

    /// Tools that call into a server
    pub fn tools_using<'a>(&'a self, server_id: &'a str) -> impl Iterator<Item = &'a Tool> + 'a {
        self.tools.iter().filter(move |t| t.uses_server(server_id))
    }

    /// Each platform paired with whether it may invoke the tool
    pub fn platforms_with_tool(&self, tool_id: &str) -> Vec<(&Platform, bool)> {
        self.platforms
            .iter()
            .map(|p| (p, p.allows(tool_id)))
            .collect()
    }

    /// Each platform paired with whether one of its tools reaches the server
    pub fn server_access(&self, server_id: &str) -> Vec<(&Platform, bool)> {
        self.platforms
            .iter()
            .map(|p| {
                let reaches = self.tools_for(p).any(|t| t.uses_server(server_id));
                (p, reaches)
            })
            .collect()
    }

    /// Data source servers shown in the diagram, without the gateway
    pub fn data_sources(&self) -> impl Iterator<Item = &Server> {
        self.servers.iter().filter(|s| !s.is_gateway())
    }
}

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn stats(items: &[(&str, &str)]) -> Vec<PlatformStat> {
    items
        .iter()
        .map(|(label, value)| PlatformStat {
            label: label.to_string(),
            value: value.to_string(),
        })
        .collect()
}

pub(crate) fn capabilities(items: &[(&str, &str, &str)]) -> Vec<Capability> {
    items
        .iter()
        .map(|(name, params, returns)| Capability {
            name: name.to_string(),
            params: params.to_string(),
            returns: returns.to_string(),
        })
        .collect()
}
