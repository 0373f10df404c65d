#[cfg(test)]
mod tests {
    use gateway_explorer::catalog::{Catalog, Edition};
    use gateway_explorer::components::tool_selection::{classify, classify_detailed};

    fn servers_catalog() -> Catalog {
        Catalog::builtin(Edition::Servers)
    }

    #[test]
    fn test_bill_question_selects_comparison() {
        let catalog = servers_catalog();
        let sierra = catalog.platform("sierra").unwrap();

        let tool = classify(&catalog, "why is my bill higher", sierra);
        assert_eq!(tool.id, "compare_bills");
    }

    #[test]
    fn test_receiver_problem_selects_troubleshooting() {
        let catalog = servers_catalog();
        let sierra = catalog.platform("sierra").unwrap();

        let result = classify_detailed(&catalog, "my receiver isn't working", sierra);
        assert_eq!(result.tool.id, "get_troubleshooting_flow");
        assert_eq!(result.trigger, Some("receiver"));
        assert!(!result.is_fallback());
    }

    #[test]
    fn test_unmatched_input_falls_back_to_profile() {
        let catalog = servers_catalog();
        let sierra = catalog.platform("sierra").unwrap();

        for input in ["hello", "", "   ", "good morning!"] {
            let result = classify_detailed(&catalog, input, sierra);
            assert_eq!(result.tool.id, "get_customer_profile", "input: {:?}", input);
            assert!(result.is_fallback());
        }
    }

    #[test]
    fn test_matching_ignores_case() {
        let catalog = servers_catalog();
        let sierra = catalog.platform("sierra").unwrap();

        assert_eq!(classify(&catalog, "WHY IS MY BILL HIGHER?", sierra).id, "compare_bills");
        assert_eq!(classify(&catalog, "What Deals can you offer", sierra).id, "get_offers");
    }

    #[test]
    fn test_declaration_order_wins_on_ties() {
        let catalog = servers_catalog();
        let sierra = catalog.platform("sierra").unwrap();

        // compare_bills is declared before get_offers
        let tool = classify(&catalog, "why is my bill higher? any deals?", sierra);
        assert_eq!(tool.id, "compare_bills");

        // get_customer_profile is declared before escalate_to_agent
        let tool = classify(&catalog, "let me talk to a human about my account", sierra);
        assert_eq!(tool.id, "get_customer_profile");
    }

    #[test]
    fn test_platform_allow_list_is_respected() {
        let catalog = servers_catalog();
        let sierra = catalog.platform("sierra").unwrap();
        let genesis = catalog.platform("genesis").unwrap();

        // apply_offer exists for chat but not for voice
        assert_eq!(classify(&catalog, "apply the discount", sierra).id, "apply_offer");
        let voice = classify_detailed(&catalog, "apply the discount", genesis);
        assert_eq!(voice.tool.id, "get_customer_profile");
        assert!(voice.is_fallback());

        // issue_credit only for agents
        let agentforce = catalog.platform("agentforce").unwrap();
        assert_eq!(classify(&catalog, "I want a refund", agentforce).id, "issue_credit");
        assert_ne!(classify(&catalog, "I want a refund", sierra).id, "issue_credit");
    }

    #[test]
    fn test_trigger_matches_stay_on_allow_list() {
        let catalog = servers_catalog();
        let queries = [
            "why is my bill higher",
            "what deals do you have",
            "yes apply that",
            "send someone to fix it",
            "I need a technician",
            "can I get a credit",
            "talk to someone please",
            "show me past bills",
        ];

        for platform in &catalog.platforms {
            for query in queries {
                let result = classify_detailed(&catalog, query, platform);
                if !result.is_fallback() {
                    assert!(
                        platform.allows(&result.tool.id),
                        "{} returned {} for {:?}",
                        platform.id,
                        result.tool.id,
                        query
                    );
                }
            }
        }
    }

    #[test]
    fn test_fallback_ignores_allow_list() {
        let mut catalog = servers_catalog();
        catalog.platforms[0].tools.retain(|t| t != "get_customer_profile");
        let restricted = catalog.platforms[0].clone();

        let result = classify_detailed(&catalog, "hello", &restricted);
        assert_eq!(result.tool.id, "get_customer_profile");
        assert!(!restricted.allows(&result.tool.id));
    }

    #[test]
    fn test_classification_outlives_the_platform_borrow() {
        let catalog = servers_catalog();

        let result = {
            let platform = catalog.platform("genesis").unwrap().clone();
            classify_detailed(&catalog, "what deals do you have", &platform)
        };

        assert_eq!(result.tool.id, "get_offers");
        assert_eq!(result.trigger, Some("deals"));
    }

    #[test]
    fn test_recipes_edition_uses_diagnose_issue() {
        let catalog = Catalog::builtin(Edition::Recipes);
        let sierra = catalog.platform("sierra").unwrap();

        assert_eq!(classify(&catalog, "Fix my receiver", sierra).id, "diagnose_issue");
        assert_eq!(classify(&catalog, "What deals?", sierra).id, "get_offers");
    }
}
