use crate::catalog::{Catalog, Tool, GENERIC_RESPONSE};

/// Canned output for a tool, or the generic acknowledgement when none exists
pub fn synthesize<'a>(catalog: &'a Catalog, tool: &Tool) -> &'a str {
    catalog
        .responses
        .get(&tool.id)
        .map(String::as_str)
        .unwrap_or(GENERIC_RESPONSE)
}
