#[cfg(test)]
mod tests {
    use gateway_explorer::catalog::{Catalog, Edition, OperationKind, Orchestration};
    use gateway_explorer::ExplorerError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_builtin_catalogs_are_valid() {
        for edition in [Edition::Servers, Edition::Recipes] {
            let catalog = Catalog::builtin(edition);
            assert!(catalog.validate().is_ok(), "{:?} catalog is invalid", edition);
            assert_eq!(catalog.edition, edition);
            assert_eq!(catalog.platforms.len(), 4);
            assert_eq!(catalog.tools.len(), 9);
            assert_eq!(catalog.fallback().id, "get_customer_profile");
            assert_eq!(catalog.default_platform().id, "sierra");
        }
    }

    #[test]
    fn test_servers_edition_tables() {
        let catalog = Catalog::default();
        assert_eq!(catalog.edition, Edition::Servers);

        let compare = catalog.tool("compare_bills").unwrap();
        assert_eq!(compare.orchestration, Orchestration::Parallel);
        assert_eq!(compare.servers, vec!["VCG", "Biller", "Offers"]);
        assert_eq!(compare.server_summary(" → "), "Multi");

        let apply = catalog.tool("apply_offer").unwrap();
        assert_eq!(apply.kind, OperationKind::Write);
        assert_eq!(apply.primary_server(), "Offers");

        assert_eq!(catalog.tool("escalate_to_agent").unwrap().kind, OperationKind::Action);
        assert!(catalog.server("Gateway").unwrap().is_gateway());
        assert_eq!(catalog.data_sources().count(), 4);
    }

    #[test]
    fn test_recipes_edition_tables() {
        let catalog = Catalog::builtin(Edition::Recipes);

        let diagnose = catalog.tool("diagnose_issue").unwrap();
        assert_eq!(diagnose.server_summary(" + "), "VCG + WFE");
        assert!(!diagnose.server_calls.is_empty());
        assert!(diagnose.returns.is_some());
        assert!(catalog.platform("genesys").is_some());
        assert!(catalog.tool("get_troubleshooting_flow").is_none());
    }

    #[test]
    fn test_access_queries() {
        let catalog = Catalog::default();

        let credit: Vec<(&str, bool)> = catalog
            .platforms_with_tool("issue_credit")
            .into_iter()
            .map(|(p, allowed)| (p.id.as_str(), allowed))
            .collect();
        assert_eq!(
            credit,
            vec![
                ("sierra", false),
                ("agentforce", true),
                ("genesis", false),
                ("copilot", false),
            ]
        );

        let wfe_tools: Vec<&str> = catalog.tools_using("WFE").map(|t| t.id.as_str()).collect();
        assert_eq!(wfe_tools, vec!["get_troubleshooting_flow", "schedule_technician"]);

        assert!(catalog.server_access("WFE").iter().all(|(_, reachable)| *reachable));

        let genesis = catalog.platform("genesis").unwrap();
        assert!(catalog.tools_for(genesis).all(|t| t.kind != OperationKind::Write));
    }

    #[test]
    fn test_validate_rejects_unknown_tool() {
        let mut catalog = Catalog::default();
        catalog.platforms[2].tools.push("teleport".to_string());

        match catalog.validate() {
            Err(ExplorerError::UnknownTool { platform, tool }) => {
                assert_eq!(platform, "genesis");
                assert_eq!(tool, "teleport");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_unknown_server() {
        let mut catalog = Catalog::default();
        catalog.tools[0].servers.push("Mainframe".to_string());

        assert!(matches!(
            catalog.validate(),
            Err(ExplorerError::UnknownServer { ref server, .. }) if server == "Mainframe"
        ));
    }

    #[test]
    fn test_validate_rejects_orphan_tool() {
        let mut catalog = Catalog::default();
        catalog.tools[1].servers.clear();

        assert!(matches!(
            catalog.validate(),
            Err(ExplorerError::OrphanTool(ref id)) if id == "get_bill_history"
        ));
    }

    #[test]
    fn test_validate_rejects_duplicates_and_missing_fallback() {
        let mut catalog = Catalog::default();
        let copy = catalog.servers[0].clone();
        catalog.servers.push(copy);
        assert!(matches!(
            catalog.validate(),
            Err(ExplorerError::DuplicateId { kind: "server", .. })
        ));

        let mut catalog = Catalog::default();
        catalog.fallback_tool = "small_talk".to_string();
        assert!(matches!(catalog.validate(), Err(ExplorerError::MissingFallback(_))));

        let mut catalog = Catalog::default();
        catalog.default_platform = "fax".to_string();
        assert!(matches!(catalog.validate(), Err(ExplorerError::UnknownPlatform(_))));
    }

    #[test]
    fn test_unvalidated_catalog_falls_back_to_first_entries() {
        let mut catalog = Catalog::default();
        catalog.fallback_tool = "small_talk".to_string();
        catalog.default_platform = "fax".to_string();

        assert_eq!(catalog.fallback().id, "get_customer_profile");
        assert_eq!(catalog.default_platform().id, "sierra");

        catalog.tools.rotate_left(1);
        assert_eq!(catalog.fallback().id, "get_bill_history");
    }

    #[test]
    fn test_validate_rejects_empty_catalog() {
        let mut catalog = Catalog::default();
        catalog.platforms.clear();
        catalog.tools.clear();

        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_save_and_load_catalog() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");

        let catalog = Catalog::builtin(Edition::Recipes);
        catalog.save_to_file(&path).unwrap();

        let loaded = Catalog::load_from_file(&path).unwrap();
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn test_load_rejects_bad_files() {
        let dir = tempdir().unwrap();

        let missing = Catalog::load_from_file(dir.path().join("nope.json"));
        assert!(matches!(missing, Err(ExplorerError::Io(_))));

        let garbled = dir.path().join("garbled.json");
        fs::write(&garbled, "{ \"edition\": ").unwrap();
        assert!(matches!(
            Catalog::load_from_file(&garbled),
            Err(ExplorerError::CatalogFormat(_))
        ));

        let mut invalid = Catalog::default();
        invalid.platforms[0].tools.push("teleport".to_string());
        let invalid_path = dir.path().join("invalid.json");
        invalid.save_to_file(&invalid_path).unwrap();
        assert!(matches!(
            Catalog::load_from_file(&invalid_path),
            Err(ExplorerError::UnknownTool { .. })
        ));
    }
}
