#[cfg(test)]
mod tests {
    use gateway_explorer::catalog::{Catalog, Edition};
    use gateway_explorer::components::flow::{build_flow, server_stage_count, StageTarget};

    fn ids(catalog: &Catalog, tool: &str) -> Vec<String> {
        let tool = catalog.tool(tool).unwrap();
        build_flow(catalog, tool).into_iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_bill_comparison_fans_out_to_three_servers() {
        let catalog = Catalog::builtin(Edition::Servers);
        let tool = catalog.tool("compare_bills").unwrap();
        let flow = build_flow(&catalog, tool);

        assert_eq!(server_stage_count(&flow), 3);

        let servers: Vec<&StageTarget> = flow
            .iter()
            .map(|s| &s.target)
            .filter(|t| matches!(t, StageTarget::Server(_)))
            .collect();
        assert_eq!(
            servers,
            vec![
                &StageTarget::Server("VCG".to_string()),
                &StageTarget::Server("Biller".to_string()),
                &StageTarget::Server("Offers".to_string()),
            ]
        );

        assert_eq!(
            ids(&catalog, "compare_bills"),
            vec![
                "input",
                "llm",
                "gateway",
                "parallel",
                "server_VCG",
                "server_Biller",
                "server_Offers",
                "mulesoft",
                "source",
                "response",
            ]
        );
    }

    #[test]
    fn test_single_server_tools_have_one_server_stage() {
        let catalog = Catalog::builtin(Edition::Servers);

        for tool in catalog.tools.iter().filter(|t| !t.is_orchestrated()) {
            let flow = build_flow(&catalog, tool);
            assert_eq!(server_stage_count(&flow), 1, "tool {}", tool.id);
            assert_eq!(flow.len(), 7, "tool {}", tool.id);
        }

        let flow = build_flow(&catalog, catalog.tool("get_troubleshooting_flow").unwrap());
        assert_eq!(flow[3].label, "WFE Server");
        assert!(flow[3].target.is_server("WFE"));
    }

    #[test]
    fn test_leading_and_trailing_stages() {
        let catalog = Catalog::builtin(Edition::Servers);
        let tool = catalog.tool("get_offers").unwrap();
        let flow = build_flow(&catalog, tool);

        assert_eq!(flow[0].label, "Query received");
        assert_eq!(flow[1].label, "LLM → get_offers()");
        assert_eq!(flow[2].target, StageTarget::Gateway);

        let tail: Vec<&StageTarget> = flow[flow.len() - 3..].iter().map(|s| &s.target).collect();
        assert_eq!(
            tail,
            vec![&StageTarget::Legacy, &StageTarget::Source, &StageTarget::Platform]
        );
        assert_eq!(flow.last().unwrap().label, "Response returned");
    }

    #[test]
    fn test_escalation_stops_at_the_gateway() {
        let catalog = Catalog::builtin(Edition::Servers);
        let flow = build_flow(&catalog, catalog.tool("escalate_to_agent").unwrap());

        assert_eq!(flow[3].label, "Gateway Server");
        assert!(flow[3].target.is_server("Gateway"));
    }

    #[test]
    fn test_recipe_flow_lists_every_composed_server() {
        let catalog = Catalog::builtin(Edition::Recipes);
        let tool = catalog.tool("diagnose_issue").unwrap();
        let flow = build_flow(&catalog, tool);

        assert_eq!(
            flow.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(),
            vec![
                "input",
                "llm",
                "gateway",
                "recipe",
                "server_VCG",
                "server_WFE",
                "mulesoft",
                "source",
                "response",
            ]
        );
        assert_eq!(flow[1].label, "LLM selects: diagnose_issue()");
        assert_eq!(flow[3].label, "Recipe: VCG + WFE");
        assert_eq!(flow[4].label, "VCG MCP Server");
        assert_eq!(flow.last().unwrap().label, "Response: ~100ms");
    }

    #[test]
    fn test_recipe_flow_skips_gateway_server_stage() {
        let catalog = Catalog::builtin(Edition::Recipes);
        let flow = build_flow(&catalog, catalog.tool("escalate_to_agent").unwrap());

        assert_eq!(server_stage_count(&flow), 0);
        assert_eq!(flow.len(), 7);
        assert_eq!(flow.last().unwrap().label, "Response: ~10ms");
    }

    #[test]
    fn test_recipe_flow_stages_per_composed_server() {
        let catalog = Catalog::builtin(Edition::Recipes);

        for tool in &catalog.tools {
            let flow = build_flow(&catalog, tool);
            let expected = tool.servers.iter().filter(|s| s.as_str() != "Gateway").count();
            assert_eq!(server_stage_count(&flow), expected, "tool {}", tool.id);
        }

        let profile = build_flow(&catalog, catalog.tool("get_customer_profile").unwrap());
        assert_eq!(server_stage_count(&profile), 2);
    }

    #[test]
    fn test_flow_building_is_deterministic() {
        let catalog = Catalog::builtin(Edition::Servers);
        let tool = catalog.tool("compare_bills").unwrap();

        assert_eq!(build_flow(&catalog, tool), build_flow(&catalog, tool));
    }
}
