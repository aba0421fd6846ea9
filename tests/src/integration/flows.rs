//! # End-to-End Registry Flows
//!
//! Full transactions driven through the public API with in-memory adapters:
//! platform initialization, quiz creation, statistics accumulation, and the
//! visibility guarantees around rejected transactions.

#[cfg(test)]
mod tests {
    use quiz_registry::{
        CreateQuizRequest, FixedTimeSource, InMemoryEventLog, InMemoryStateStore,
        PrizeDistribution, QuizDetails, QuizRegistryApi, QuizRegistryService,
        RegistryDependencies, RegistryError, RewardSettings, StatsAction,
    };
    use shared_types::{Address, Question, U256};

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    const T0: u64 = 1_700_000_000;
    const ALICE: Address = [0xA1; 20];
    const BOB: Address = [0xB2; 20];

    type TestRegistry =
        QuizRegistryService<InMemoryStateStore, FixedTimeSource, InMemoryEventLog>;

    /// Build a registry on in-memory adapters plus a handle to its clock.
    fn build_registry() -> (TestRegistry, FixedTimeSource) {
        let clock = FixedTimeSource::new(T0);
        let deps = RegistryDependencies {
            store: InMemoryStateStore::new(),
            time_source: clock.clone(),
            event_sink: InMemoryEventLog::new(),
        };
        (QuizRegistryService::new(deps), clock)
    }

    fn make_questions(count: usize) -> Vec<Question> {
        (0..count)
            .map(|i| {
                Question::new(
                    format!("Question {}?", i),
                    vec!["A".to_string(), "B".to_string()],
                    0,
                    100,
                )
            })
            .collect()
    }

    fn make_request(title: &str, creator: Address) -> CreateQuizRequest {
        CreateQuizRequest {
            details: QuizDetails {
                title: title.to_string(),
                description: "An integration flow quiz".to_string(),
                category: "general".to_string(),
                visibility: true,
            },
            questions: make_questions(5),
            reward_settings: RewardSettings::none(),
            default_duration_secs: 20,
            default_max_points: 200,
            custom_timing: false,
            declared_creator: creator,
        }
    }

    // =========================================================================
    // FLOWS
    // =========================================================================

    #[test]
    fn test_full_platform_lifecycle() {
        let (mut registry, clock) = build_registry();

        // Host boots: initialize once, second call is a no-op.
        assert!(registry.initialize_platform_config().unwrap());
        assert!(!registry.initialize_platform_config().unwrap());

        // Alice creates two quizzes, Bob one, with time passing between.
        let q1 = registry
            .create_quiz(make_request("Alice I", ALICE), ALICE)
            .unwrap();
        clock.advance(60);
        let q2 = registry
            .create_quiz(make_request("Alice II", ALICE), ALICE)
            .unwrap();
        clock.advance(60);
        let q3 = registry
            .create_quiz(make_request("Bob I", BOB), BOB)
            .unwrap();

        assert_eq!(q1.id, U256::from(1));
        assert_eq!(q2.id, U256::from(2));
        assert_eq!(q3.id, U256::from(3));
        assert_eq!(registry.total_quizzes().unwrap(), U256::from(3));

        // Bob hosts two game sessions.
        clock.advance(60);
        registry
            .update_creator_stats(BOB, StatsAction::GameHosted)
            .unwrap();
        registry
            .update_creator_stats(BOB, StatsAction::GameHosted)
            .unwrap();

        // Per-creator counters.
        let alice = registry.get_creator_stats(ALICE).unwrap().unwrap();
        assert_eq!(alice.total_quizzes_created, 2);
        assert_eq!(alice.total_games_hosted, 0);
        assert_eq!(alice.last_activity, T0 + 60);

        let bob = registry.get_creator_stats(BOB).unwrap().unwrap();
        assert_eq!(bob.total_quizzes_created, 1);
        assert_eq!(bob.total_games_hosted, 2);
        assert_eq!(bob.last_activity, T0 + 180);

        // Platform-wide counters aggregate across creators.
        let platform = registry.get_platform_stats().unwrap().unwrap();
        assert_eq!(platform.total_quizzes_created, 3);
        assert_eq!(platform.total_game_sessions, 2);
        assert_eq!(platform.last_updated, T0 + 180);

        // Stored quizzes read back exactly as returned.
        assert_eq!(registry.get_quiz(q2.id).unwrap().unwrap(), q2);
        assert!(registry.quiz_exists(q3.id));
        assert!(!registry.quiz_exists(U256::from(4)));
    }

    #[test]
    fn test_event_stream_matches_commit_order() {
        let (mut registry, clock) = build_registry();

        for (i, title) in ["first", "second", "third"].iter().enumerate() {
            registry
                .create_quiz(make_request(title, ALICE), ALICE)
                .unwrap();
            clock.advance(10 * (i as u64 + 1));
        }

        let events = registry.event_sink().events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].title, "first");
        assert_eq!(events[0].timestamp, T0);
        assert_eq!(events[1].title, "second");
        assert_eq!(events[1].timestamp, T0 + 10);
        assert_eq!(events[2].title, "third");
        assert_eq!(events[2].timestamp, T0 + 30);
        assert!(events.iter().all(|e| e.creator == ALICE));
    }

    #[test]
    fn test_rejected_transactions_are_invisible_to_readers() {
        let (mut registry, _clock) = build_registry();

        registry
            .create_quiz(make_request("legit", ALICE), ALICE)
            .unwrap();

        // A burst of bad requests, one per rule.
        let spoofed = make_request("spoof", ALICE);
        assert!(matches!(
            registry.create_quiz(spoofed, BOB),
            Err(RegistryError::UnauthorizedCreator { .. })
        ));

        let mut empty = make_request("empty", ALICE);
        empty.questions = vec![];
        assert!(matches!(
            registry.create_quiz(empty, ALICE),
            Err(RegistryError::InvalidQuestionCount { .. })
        ));

        let mut unpaid = make_request("unpaid", ALICE);
        unpaid.reward_settings = RewardSettings {
            has_rewards: true,
            token: [0x01; 20],
            reward_amount: U256::zero(),
            distribution: PrizeDistribution::WinnerTakesAll,
            number_of_winners: 1,
            min_players: 2,
        };
        assert!(matches!(
            registry.create_quiz(unpaid, ALICE),
            Err(RegistryError::InvalidRewardAmount)
        ));

        let mut lopsided = make_request("lopsided", ALICE);
        lopsided.reward_settings = RewardSettings {
            has_rewards: true,
            token: [0x01; 20],
            reward_amount: U256::from(5_000),
            distribution: PrizeDistribution::Custom {
                prize_percentages: vec![60, 41],
            },
            number_of_winners: 2,
            min_players: 2,
        };
        assert!(matches!(
            registry.create_quiz(lopsided, ALICE),
            Err(RegistryError::InvalidPrizeDistribution { sum: 101 })
        ));

        // Readers see exactly one successful creation and nothing else.
        assert_eq!(registry.total_quizzes().unwrap(), U256::from(1));
        assert!(registry.get_quiz(U256::from(2)).unwrap().is_none());
        assert_eq!(registry.event_sink().len(), 1);

        let alice = registry.get_creator_stats(ALICE).unwrap().unwrap();
        assert_eq!(alice.total_quizzes_created, 1);

        // Bob never succeeded at anything, so he has no record at all.
        assert!(registry.get_creator_stats(BOB).unwrap().is_none());

        // The next legitimate creation picks up the very next id.
        let next = registry
            .create_quiz(make_request("legit II", ALICE), ALICE)
            .unwrap();
        assert_eq!(next.id, U256::from(2));
    }

    #[test]
    fn test_fresh_registry_reads_as_all_defaults() {
        let (registry, _clock) = build_registry();

        assert!(registry.get_platform_config().unwrap().is_none());
        assert!(registry.get_platform_stats().unwrap().is_none());
        assert!(registry.get_creator_stats(ALICE).unwrap().is_none());
        assert_eq!(registry.total_quizzes().unwrap(), U256::zero());
        assert!(registry.store().is_empty());
    }

    #[test]
    fn test_rewarded_quiz_round_trips_through_the_registry() {
        let (mut registry, _clock) = build_registry();

        let mut request = make_request("rewarded", ALICE);
        request.reward_settings = RewardSettings {
            has_rewards: true,
            token: [0x0F; 20],
            reward_amount: U256::from(1_000_000u64),
            distribution: PrizeDistribution::Custom {
                prize_percentages: vec![70, 20, 10],
            },
            number_of_winners: 3,
            min_players: 4,
        };

        let quiz = registry.create_quiz(request, ALICE).unwrap();
        let stored = registry.get_quiz(quiz.id).unwrap().unwrap();

        assert!(stored.reward_settings.has_rewards);
        assert_eq!(stored.reward_settings.reward_amount, U256::from(1_000_000u64));
        assert_eq!(
            stored.reward_settings.distribution,
            PrizeDistribution::Custom {
                prize_percentages: vec![70, 20, 10],
            }
        );
        assert_eq!(stored.reward_settings.min_players, 4);
    }
}
