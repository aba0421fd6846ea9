//! # Durable Adapter Flows
//!
//! The same registry semantics running on the file-backed store and the
//! JSON-lines event log, across simulated host restarts.

#[cfg(test)]
mod tests {
    use quiz_registry::{
        CreateQuizRequest, FileBackedStateStore, FixedTimeSource, JsonLinesEventLog,
        QuizCreatedPayload, QuizDetails, QuizRegistryApi, QuizRegistryService,
        RegistryDependencies, RegistryError, RewardSettings, StatsAction,
    };
    use shared_types::{Address, Question, U256};
    use std::path::Path;

    const T0: u64 = 1_700_000_000;
    const HOST: Address = [0xC3; 20];

    type DurableRegistry =
        QuizRegistryService<FileBackedStateStore, FixedTimeSource, JsonLinesEventLog>;

    /// Open a registry over durable adapters rooted in `dir`.
    fn open_registry(dir: &Path, now: u64) -> DurableRegistry {
        let deps = RegistryDependencies {
            store: FileBackedStateStore::new(dir.join("state.bin")),
            time_source: FixedTimeSource::new(now),
            event_sink: JsonLinesEventLog::new(dir.join("events.jsonl")).unwrap(),
        };
        QuizRegistryService::new(deps)
    }

    fn make_request(title: &str, creator: Address) -> CreateQuizRequest {
        CreateQuizRequest {
            details: QuizDetails {
                title: title.to_string(),
                description: "A durable quiz".to_string(),
                category: "general".to_string(),
                visibility: true,
            },
            questions: vec![Question::new(
                "Still here after restart?",
                vec!["Yes".to_string(), "No".to_string()],
                0,
                50,
            )],
            reward_settings: RewardSettings::none(),
            default_duration_secs: 15,
            default_max_points: 50,
            custom_timing: false,
            declared_creator: creator,
        }
    }

    #[test]
    fn test_registry_state_survives_restart() {
        let dir = tempfile::tempdir().unwrap();

        let first_quiz = {
            let mut registry = open_registry(dir.path(), T0);
            assert!(registry.initialize_platform_config().unwrap());
            let quiz = registry
                .create_quiz(make_request("before restart", HOST), HOST)
                .unwrap();
            registry
                .update_creator_stats(HOST, StatsAction::GameHosted)
                .unwrap();
            quiz
        };

        // "Restart" the host: fresh service, same files.
        let mut registry = open_registry(dir.path(), T0 + 500);

        assert_eq!(
            registry.get_quiz(first_quiz.id).unwrap().unwrap(),
            first_quiz
        );
        assert_eq!(registry.total_quizzes().unwrap(), U256::from(1));

        let stats = registry.get_creator_stats(HOST).unwrap().unwrap();
        assert_eq!(stats.total_quizzes_created, 1);
        assert_eq!(stats.total_games_hosted, 1);

        // Configuration persisted, so init after restart is a no-op.
        assert!(!registry.initialize_platform_config().unwrap());

        // The allocator continues where it left off.
        let next = registry
            .create_quiz(make_request("after restart", HOST), HOST)
            .unwrap();
        assert_eq!(next.id, U256::from(2));
        assert_eq!(next.created_at, T0 + 500);
    }

    #[test]
    fn test_failed_creations_never_reach_the_disk() {
        let dir = tempfile::tempdir().unwrap();

        {
            let mut registry = open_registry(dir.path(), T0);
            registry
                .create_quiz(make_request("only one", HOST), HOST)
                .unwrap();

            let mut bad = make_request("spoofed", HOST);
            bad.declared_creator = [0xDD; 20];
            assert!(registry.create_quiz(bad, HOST).is_err());
        }

        let registry = open_registry(dir.path(), T0 + 1);
        assert_eq!(registry.total_quizzes().unwrap(), U256::from(1));
        assert!(registry.get_quiz(U256::from(2)).unwrap().is_none());

        // The event file carries exactly the one committed creation.
        let contents = std::fs::read_to_string(dir.path().join("events.jsonl")).unwrap();
        assert_eq!(contents.lines().count(), 1);
    }

    #[test]
    fn test_creation_aborted_by_a_failed_save_leaves_no_trace() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = open_registry(dir.path(), T0);

        registry
            .create_quiz(make_request("committed", HOST), HOST)
            .unwrap();

        // A directory squatting on the store's temp path fails the next save.
        let blocker = dir.path().join("state.tmp");
        std::fs::create_dir(&blocker).unwrap();

        let result = registry.create_quiz(make_request("doomed", HOST), HOST);
        assert!(matches!(result, Err(RegistryError::Store(_))));

        // The aborted creation is invisible: no id consumed, no record, no
        // stats movement, no event.
        assert_eq!(registry.total_quizzes().unwrap(), U256::from(1));
        assert!(registry.get_quiz(U256::from(2)).unwrap().is_none());
        let stats = registry.get_creator_stats(HOST).unwrap().unwrap();
        assert_eq!(stats.total_quizzes_created, 1);

        // The next acknowledged creation takes the very next id.
        std::fs::remove_dir(&blocker).unwrap();
        let next = registry
            .create_quiz(make_request("after the outage", HOST), HOST)
            .unwrap();
        assert_eq!(next.id, U256::from(2));

        // Nothing from the aborted attempt was durably flushed.
        let reopened = open_registry(dir.path(), T0 + 1);
        assert_eq!(reopened.total_quizzes().unwrap(), U256::from(2));
        assert_eq!(
            reopened
                .get_creator_stats(HOST)
                .unwrap()
                .unwrap()
                .total_quizzes_created,
            2
        );

        let contents = std::fs::read_to_string(dir.path().join("events.jsonl")).unwrap();
        let titles: Vec<String> = contents
            .lines()
            .map(|line| serde_json::from_str::<QuizCreatedPayload>(line).unwrap().title)
            .collect();
        assert_eq!(titles, vec!["committed", "after the outage"]);
    }

    #[test]
    fn test_event_log_is_tailable_json_lines() {
        let dir = tempfile::tempdir().unwrap();

        {
            let mut registry = open_registry(dir.path(), T0);
            registry
                .create_quiz(make_request("alpha", HOST), HOST)
                .unwrap();
            registry
                .create_quiz(make_request("beta", HOST), HOST)
                .unwrap();
        }
        {
            // Events appended after a restart extend the same file.
            let mut registry = open_registry(dir.path(), T0 + 100);
            registry
                .create_quiz(make_request("gamma", HOST), HOST)
                .unwrap();
        }

        let contents = std::fs::read_to_string(dir.path().join("events.jsonl")).unwrap();
        let events: Vec<QuizCreatedPayload> = contents
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(events.len(), 3);
        assert_eq!(events[0].title, "alpha");
        assert_eq!(events[1].title, "beta");
        assert_eq!(events[2].title, "gamma");
        assert_eq!(events[2].timestamp, T0 + 100);
        assert!(events.iter().all(|e| e.creator == HOST));
    }
}
