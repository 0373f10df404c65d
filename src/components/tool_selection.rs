use tracing::{debug, warn};

use crate::catalog::{Catalog, Platform, Tool};

/// Outcome of matching a user query against the trigger table
#[derive(Debug, Clone, PartialEq)]
pub struct Classification<'a> {
    pub tool: &'a Tool,
    /// Trigger phrase that selected the tool, `None` for the fallback
    pub trigger: Option<&'a str>,
}

impl<'a> Classification<'a> {
    pub fn is_fallback(&self) -> bool {
        self.trigger.is_none()
    }
}

/// Selects the tool a query should run on the given platform.
///
/// Tools are tried in catalog declaration order and only those on the
/// platform's allow-list are considered. When no trigger phrase matches,
/// the catalog's fallback tool is returned even if the platform does not
/// list it.
///
/// Total for any catalog that passes [`Catalog::validate`]; see
/// [`Catalog::fallback`] for the hand-built case.
pub fn classify<'a>(catalog: &'a Catalog, input: &str, platform: &Platform) -> &'a Tool {
    classify_detailed(catalog, input, platform).tool
}

/// Same as [`classify`], also reporting which trigger fired
pub fn classify_detailed<'a>(
    catalog: &'a Catalog,
    input: &str,
    platform: &Platform,
) -> Classification<'a> {
    let query = input.to_lowercase();

    let allowed = catalog.tools.iter().filter(|tool| platform.allows(&tool.id));
    for tool in allowed {
        if let Some(trigger) = tool
            .triggers
            .iter()
            .find(|trigger| query.contains(&trigger.to_lowercase()))
        {
            debug!(tool = %tool.id, trigger = %trigger, platform = %platform.id, "Matched trigger");
            return Classification {
                tool,
                trigger: Some(trigger.as_str()),
            };
        }
    }

    let fallback = catalog.fallback();
    if !platform.allows(&fallback.id) {
        warn!(
            tool = %fallback.id,
            platform = %platform.id,
            "Fallback tool is not on the platform allow-list"
        );
    }
    debug!(tool = %fallback.id, "No trigger matched, using fallback");

    Classification {
        tool: fallback,
        trigger: None,
    }
}
