#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use gateway_explorer::catalog::{Catalog, Edition};
    use gateway_explorer::components::flow::StageTarget;
    use gateway_explorer::components::message::MessageRole;
    use gateway_explorer::components::session::{ExplorerSession, Selection, SessionEvent, ViewMode};

    fn new_session() -> ExplorerSession {
        ExplorerSession::new(Arc::new(Catalog::builtin(Edition::Servers)))
    }

    fn submit(session: ExplorerSession, text: &str) -> ExplorerSession {
        session.reduce(SessionEvent::Submit(text.to_string()))
    }

    #[test]
    fn test_new_session_starts_idle_on_default_platform() {
        let session = new_session();

        assert_eq!(session.platform().id, "sierra");
        assert!(session.conversation().is_empty());
        assert!(!session.is_processing());
        assert!(session.active_flow().is_none());
        assert!(session.selection().is_none());
        assert_eq!(session.view(), ViewMode::Architecture);
    }

    #[test]
    fn test_submit_starts_flow() {
        let session = submit(new_session(), "  why is my bill higher  ");

        assert!(session.is_processing());
        assert_eq!(session.conversation().len(), 1);
        assert_eq!(session.conversation()[0].role, MessageRole::User);
        assert_eq!(session.conversation()[0].content, "why is my bill higher");

        let flow = session.active_flow().unwrap();
        assert_eq!(flow.sequence, 1);
        assert_eq!(flow.tool, "compare_bills");
        assert_eq!(flow.trigger.as_deref(), Some("why is my bill"));
        assert_eq!(flow.step, 0);
        assert_eq!(flow.stages.len(), 10);
        assert_eq!(flow.current_stage().unwrap().label, "Query received");
    }

    #[test]
    fn test_submit_while_processing_is_ignored() {
        let busy = submit(new_session(), "why is my bill higher");
        let after = submit(busy.clone(), "what deals do you have");

        assert_eq!(after, busy);
        assert_eq!(after.conversation().len(), 1);
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let session = new_session();
        assert!(!session.accepts("   "));

        let after = submit(session.clone(), "   ");
        assert_eq!(after, session);
    }

    #[test]
    fn test_advance_stage_moves_highlight() {
        let session = submit(new_session(), "why is my bill higher")
            .reduce(SessionEvent::AdvanceStage { flow: 1, step: 4 });

        let flow = session.active_flow().unwrap();
        assert_eq!(flow.step, 4);
        assert!(flow.is_at(&StageTarget::Server("VCG".to_string())));
        assert!(flow.has_reached(&StageTarget::Gateway));
        assert!(!flow.has_reached(&StageTarget::Server("Offers".to_string())));
    }

    #[test]
    fn test_advance_stage_clamps_to_flow_length() {
        let session = submit(new_session(), "hello")
            .reduce(SessionEvent::AdvanceStage { flow: 1, step: 99 });

        let flow = session.active_flow().unwrap();
        assert_eq!(flow.step, flow.stages.len());
        assert!(flow.is_finished());
        assert!(flow.current_stage().is_none());
    }

    #[test]
    fn test_stale_ticks_are_ignored() {
        let session = submit(new_session(), "why is my bill higher");

        let after = session
            .clone()
            .reduce(SessionEvent::AdvanceStage { flow: 7, step: 3 })
            .reduce(SessionEvent::Respond { flow: 7 })
            .reduce(SessionEvent::ClearFlow { flow: 7 });
        assert_eq!(after, session);
    }

    #[test]
    fn test_respond_records_assistant_turn() {
        let session = submit(new_session(), "why is my bill higher").reduce(SessionEvent::Respond { flow: 1 });

        assert!(!session.is_processing());
        assert_eq!(session.conversation().len(), 2);

        let reply = &session.conversation()[1];
        assert_eq!(reply.role, MessageRole::Assistant);
        assert!(reply.content.contains("Bill Comparison"));

        let meta = reply.meta.as_ref().unwrap();
        assert_eq!(meta.tool, "compare_bills");
        assert_eq!(meta.servers, "Multi");
        assert_eq!(meta.latency, "~100ms");

        // highlight stays on the finished flow until it is cleared
        let flow = session.active_flow().unwrap();
        assert!(flow.is_finished());
    }

    #[test]
    fn test_single_server_meta_names_the_server() {
        let session = submit(new_session(), "my receiver isn't working").reduce(SessionEvent::Respond { flow: 1 });

        let meta = session.conversation()[1].meta.as_ref().unwrap();
        assert_eq!(meta.tool, "get_troubleshooting_flow");
        assert_eq!(meta.servers, "WFE");
        assert!(session.conversation()[1].content.contains("Troubleshooting"));
    }

    #[test]
    fn test_respond_twice_adds_one_turn() {
        let session = submit(new_session(), "hello")
            .reduce(SessionEvent::Respond { flow: 1 })
            .reduce(SessionEvent::Respond { flow: 1 });

        assert_eq!(session.conversation().len(), 2);
    }

    #[test]
    fn test_clear_flow_after_response() {
        let busy = submit(new_session(), "hello");

        // not cleared while the response is still pending
        let early = busy.clone().reduce(SessionEvent::ClearFlow { flow: 1 });
        assert!(early.active_flow().is_some());

        let done = busy
            .reduce(SessionEvent::Respond { flow: 1 })
            .reduce(SessionEvent::ClearFlow { flow: 1 });
        assert!(done.active_flow().is_none());
        assert_eq!(done.conversation().len(), 2);
    }

    #[test]
    fn test_old_clear_does_not_wipe_newer_flow() {
        let session = submit(new_session(), "hello").reduce(SessionEvent::Respond { flow: 1 });
        let session = submit(session, "what deals do you have");

        let session = session.reduce(SessionEvent::ClearFlow { flow: 1 });
        let flow = session.active_flow().unwrap();
        assert_eq!(flow.sequence, 2);
        assert_eq!(flow.tool, "get_offers");
    }

    #[test]
    fn test_platform_selection() {
        let session = new_session().reduce(SessionEvent::SelectPlatform("genesis".to_string()));
        assert_eq!(session.platform().id, "genesis");

        let unknown = session.clone().reduce(SessionEvent::SelectPlatform("pager".to_string()));
        assert_eq!(unknown.platform().id, "genesis");
    }

    #[test]
    fn test_platform_locked_while_processing() {
        let session = submit(new_session(), "hello")
            .reduce(SessionEvent::SelectPlatform("agentforce".to_string()));
        assert_eq!(session.platform().id, "sierra");

        let session = session
            .reduce(SessionEvent::Respond { flow: 1 })
            .reduce(SessionEvent::SelectPlatform("agentforce".to_string()));
        assert_eq!(session.platform().id, "agentforce");
    }

    #[test]
    fn test_classification_uses_current_platform() {
        let session = new_session().reduce(SessionEvent::SelectPlatform("genesis".to_string()));
        let session = submit(session, "apply the discount");

        assert_eq!(session.active_flow().unwrap().tool, "get_customer_profile");
        assert!(session.active_flow().unwrap().trigger.is_none());
    }

    #[test]
    fn test_detail_selection_and_view() {
        let session = new_session()
            .reduce(SessionEvent::SelectComponent(Selection::Server("VCG".to_string())))
            .reduce(SessionEvent::SetView(ViewMode::Comparison));

        assert_eq!(session.selection(), Some(&Selection::Server("VCG".to_string())));
        assert_eq!(session.view(), ViewMode::Comparison);

        let session = session.reduce(SessionEvent::CloseDetail);
        assert!(session.selection().is_none());
    }
}
