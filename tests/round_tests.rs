//! Round-level behavior: draws, banking, free spins and scoring.
//!
//! These tests drive `RoundController` and `ActionResolver` through the
//! public API with scripted humans and fixed-personality bots.

use proptest::prelude::*;

use wheel_game::{
    Action, ActionResolver, ActionSource, DrawReason, Face, GameConfig, GameEvent, GameRng, Outcome, Participant,
    ParticipantId, Personality, RecordingObserver, ResolverContext, RoundController, ScriptedInput, Wheel,
};

fn human(id: u8, name: &str) -> Participant {
    Participant::new(ParticipantId::new(id), name, ActionSource::Human)
}

fn bot(id: u8, personality: Personality) -> Participant {
    Participant::new(
        ParticipantId::new(id),
        format!("Bot {}", id + 1),
        ActionSource::bot(personality),
    )
}

fn wheel_of(values: &[u8]) -> Wheel {
    Wheel::from_faces(values.iter().copied().map(Face), 10)
}

/// A banked participant is never asked again and their score stays put.
#[test]
fn test_banked_participant_is_skipped() {
    let config = GameConfig::default();
    let mut rng = GameRng::new(17);
    let mut participants = vec![
        human(0, "Ada"),
        bot(1, Personality::new(0.75, 0.75, 0.75, 0.75)),
    ];
    // Exactly two answers: asking Ada a third time would close the input
    let mut input = ScriptedInput::new().with_actions([Action::Higher, Action::Bank]);
    let mut observer = RecordingObserver::new();

    let summary = RoundController::new(1, &config)
        .run(&mut participants, &mut rng, &mut input, &mut observer)
        .unwrap();

    assert_eq!(input.requests, 2);
    assert!(participants[0].is_banked());

    let ada = ParticipantId::new(0);
    let ada_turns: Vec<_> = summary.records.iter().filter(|r| r.participant == ada).collect();
    assert_eq!(ada_turns.len(), 2);
    assert_eq!(ada_turns[1].action, Some(Action::Bank));

    // Final score is exactly what Ada earned before and at the bank
    let earned: u32 = observer
        .events
        .iter()
        .map(|e| match e {
            GameEvent::GuessResolved { participant, points, .. } if *participant == ada => *points,
            GameEvent::Banked { participant, payout, .. } if *participant == ada => *payout,
            _ => 0,
        })
        .sum();
    assert_eq!(participants[0].score(), earned);
    assert_eq!(summary.standings[0].score, earned);
}

/// The free spin works once per round and never draws.
#[test]
fn test_free_spin_once_per_round() {
    let config = GameConfig::default();
    let mut rng = GameRng::new(4);
    let mut participants = vec![human(0, "Ada")];
    let mut input = ScriptedInput::new().with_lines(["F", "f", "L"]);
    let mut observer = RecordingObserver::new();

    let mut round = RoundController::new(1, &config);
    assert!(round
        .run_spin_cycle(&mut participants, &mut rng, &mut input, &mut observer)
        .unwrap());
    assert_eq!(round.wheel().remaining_count(), 12);
    assert!(!participants[0].has_free_action());

    round
        .run_spin_cycle(&mut participants, &mut rng, &mut input, &mut observer)
        .unwrap();

    assert_eq!(input.requests, 3);
    assert_eq!(
        observer.count(|e| matches!(e, GameEvent::InvalidInput { .. })),
        1
    );
    assert_eq!(
        observer.count(|e| matches!(e, GameEvent::FreeSpinUsed { .. })),
        1
    );
    assert!(round.wheel().remaining_count() < 12);
}

/// A correct guess scores the face; a bank pays the current face times ten.
#[test]
fn test_guess_and_bank_payouts() {
    let mut rng = GameRng::new(23);
    let mut wheel = wheel_of(&[9, 10, 11, 12]);
    let mut ada = human(0, "Ada");
    let mut grace = human(1, "Grace");

    let mut ctx = ResolverContext::new(&mut wheel, &mut rng, 6);

    let guess = ActionResolver::resolve(&mut ctx, &mut ada, Action::Higher).unwrap();
    let Outcome::Guess {
        face,
        correct,
        points,
        bonus,
        ..
    } = guess
    else {
        panic!("expected a guess outcome, got {guess:?}");
    };
    assert!(correct);
    assert_eq!(points, face.value());
    assert_eq!(ada.score(), face.value());
    let bonus = bonus.unwrap();

    let banked = ActionResolver::resolve(&mut ctx, &mut grace, Action::Bank).unwrap();
    let Outcome::Banked { payout, follow_up } = banked else {
        panic!("expected a bank outcome, got {banked:?}");
    };
    assert_eq!(payout, bonus.value() * 10);
    assert_eq!(grace.score(), payout);
    assert!(grace.is_banked());
    assert!(follow_up.is_some());
    assert_eq!(ctx.wheel.remaining_count(), 1);
}

/// A wrong guess scores nothing and gives no bonus draw.
#[test]
fn test_wrong_guess_scores_nothing() {
    let mut rng = GameRng::new(2);
    let mut wheel = wheel_of(&[1, 2, 3]);
    let mut ada = human(0, "Ada");

    let mut ctx = ResolverContext::new(&mut wheel, &mut rng, 6);
    let outcome = ActionResolver::resolve(&mut ctx, &mut ada, Action::Higher).unwrap();

    assert!(matches!(
        outcome,
        Outcome::Guess {
            correct: false,
            points: 0,
            bonus: None,
            ..
        }
    ));
    assert_eq!(ada.score(), 0);
    assert_eq!(wheel.remaining_count(), 2);
}

/// Evaluating a bot's options never banks it; only resolving Bank does.
#[test]
fn test_bot_choosing_higher_stays_unbanked() {
    let config = GameConfig::default();
    let mut rng = GameRng::new(8);
    let eager = Personality::new(0.5, 1.0, 0.5, 0.5);
    let mut participants = vec![bot(0, eager)];

    let mut round = RoundController::new(1, &config);
    round
        .run_spin_cycle(
            &mut participants,
            &mut rng,
            &mut ScriptedInput::new(),
            &mut RecordingObserver::new(),
        )
        .unwrap();

    assert_eq!(round.records()[0].action, Some(Action::Higher));
    assert_eq!(participants[0].pending_action(), Some(Action::Higher));
    assert!(!participants[0].is_banked());
}

/// Bonus and post-bank draws are reported as unscored.
#[test]
fn test_unscored_draws_are_reported() {
    let config = GameConfig::default();
    let mut rng = GameRng::new(31);
    let mut participants = vec![human(0, "Ada")];
    let mut input = ScriptedInput::new().with_actions([Action::Higher, Action::Bank]);
    let mut observer = RecordingObserver::new();

    let summary = RoundController::with_wheel(1, &config, wheel_of(&[7, 8, 9]))
        .run(&mut participants, &mut rng, &mut input, &mut observer)
        .unwrap();

    assert_eq!(summary.draws.len(), 3);
    assert_eq!(
        observer.count(|e| matches!(e, GameEvent::UnscoredDraw { reason: DrawReason::Bonus, .. })),
        1
    );
    assert_eq!(
        observer.count(|e| matches!(e, GameEvent::UnscoredDraw { reason: DrawReason::AfterBank, .. })),
        1
    );
}

proptest! {
    /// Every round draws each face exactly once, whatever the seed or table.
    #[test]
    fn prop_round_draws_permutation(seed in any::<u64>(), bots in 1u8..=8) {
        let config = GameConfig::default();
        let mut rng = GameRng::new(seed);
        let mut participants: Vec<_> = (0..bots)
            .map(|i| bot(i, Personality::sample(&mut rng, &config)))
            .collect();

        let summary = RoundController::new(1, &config)
            .run(&mut participants, &mut rng, &mut ScriptedInput::new(), &mut RecordingObserver::new())
            .unwrap();

        let mut draws: Vec<u8> = summary.draws.iter().map(|f| f.0).collect();
        draws.sort_unstable();
        prop_assert_eq!(draws, (1..=12).collect::<Vec<u8>>());
        prop_assert_eq!(summary.standings.len(), usize::from(bots));
    }

    /// A fresh wheel yields a permutation of its faces, then refuses to draw.
    #[test]
    fn prop_wheel_draw_order_is_permutation(seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let mut wheel = Wheel::new(&GameConfig::default());

        let mut drawn = Vec::new();
        while let Some(face) = wheel.draw_if_available(&mut rng).unwrap() {
            prop_assert_eq!(wheel.current_face(), Some(face));
            drawn.push(face.0);
        }
        drawn.sort_unstable();

        prop_assert_eq!(drawn, (1..=12).collect::<Vec<u8>>());
        prop_assert!(wheel.is_exhausted());
        prop_assert!(wheel.draw(&mut rng).is_err());
    }
}
