//! Property-based tests over randomly shaped games and players.

use proptest::prelude::*;

use strictly_bowling::{
    ChanceCycle, Game, Gutter, History, Player, State, StateId, StateKind,
};

/// Strategy: a positive game shape, kept small enough to play quickly.
fn game_strategy() -> impl Strategy<Value = Game> {
    (1..=12u32, 1..=6u32, 1..=20u32).prop_map(|(frames, turns, pins)| {
        Game::new(frames, turns, pins).expect("Positive game shape")
    })
}

/// Strategy: a chance in `[0, 1]` with 1/16384 resolution.
fn chance_strategy() -> impl Strategy<Value = f64> {
    (0..=16384u32).prop_map(|i| 1.0 - f64::from(i) / 16384.0)
}

/// Strategy: a bowler cycling through one or more chances.
fn bowler_strategy() -> impl Strategy<Value = ChanceCycle> {
    prop::collection::vec(chance_strategy(), 1..8)
        .prop_map(|chances| ChanceCycle::new(chances).expect("Chances in range"))
}

fn played(game: Game, mut bowler: ChanceCycle) -> (History, StateId) {
    let mut history = History::new();
    let start = history.start(game);
    Player::play_out(&mut history, start, &mut bowler).expect("Game plays out");
    (history, start)
}

fn turns(history: &History) -> Vec<StateId> {
    history
        .iter()
        .filter(|(_, node)| node.state().kind() == StateKind::Turn)
        .map(|(id, _)| id)
        .collect()
}

proptest! {
    // 1. The first turn of every frame faces a full rack
    #[test]
    fn first_turn_has_full_rack(game in game_strategy(), bowler in bowler_strategy()) {
        let (history, _) = played(game, bowler);
        for id in turns(&history) {
            let turn = history.turn(id).unwrap();
            if turn.index() == 0 {
                prop_assert_eq!(turn.pins_left(), game.frame_size());
            }
        }
    }

    // 2. Successor turns start with what the previous roll left
    #[test]
    fn successor_pins_follow_history(game in game_strategy(), bowler in bowler_strategy()) {
        let (history, _) = played(game, bowler);
        for id in turns(&history) {
            let turn = history.turn(id).unwrap();
            if turn.index() == 0 {
                continue;
            }
            let result_id = history.prev(id).expect("Successor has prev");
            let result = history.state(result_id).unwrap().as_turn_result().copied().expect("Prev is a result");
            let previous = history.turn(history.prev(result_id).expect("Result has prev")).unwrap();
            prop_assert_eq!(turn.pins_left(), previous.pins_left() - result.hit_count());
        }
    }

    // 3. Knocking down every pin left closes the frame
    #[test]
    fn clearing_pins_closes_frame(
        game in game_strategy(),
        bowler in bowler_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        let (mut history, _) = played(game, bowler);
        let candidates = turns(&history);
        let turn = candidates[pick.index(candidates.len())];
        let pins = history.turn(turn).unwrap().pins_left();

        let rolled = history.roll(turn, pins).unwrap();
        let next = history.resume(rolled).unwrap();
        prop_assert_eq!(history.state(next).unwrap().kind(), StateKind::FrameResult);
    }

    // 4. Gutter balls use up every turn in every frame
    #[test]
    fn gutter_frames_use_every_turn(game in game_strategy()) {
        let mut history = History::new();
        let start = history.start(game);
        Player::play_out(&mut history, start, &mut Gutter).unwrap();

        let frames: Vec<StateId> = history
            .iter()
            .filter(|(_, node)| node.state().kind() == StateKind::Frame)
            .map(|(id, _)| id)
            .collect();
        prop_assert_eq!(frames.len() as u32, game.frame_count());

        for frame in frames {
            let played = turns(&history)
                .into_iter()
                .filter(|id| history.turn(*id).unwrap().frame() == frame)
                .count();
            prop_assert_eq!(played as u32, game.turn_count());
        }
    }

    // 5. Every game plays exactly frame_count frames, then ends once
    #[test]
    fn game_ends_after_frame_count(game in game_strategy(), bowler in bowler_strategy()) {
        let (history, _) = played(game, bowler);
        let count = |kind: StateKind| {
            history.iter().filter(|(_, node)| node.state().kind() == kind).count() as u32
        };
        prop_assert_eq!(count(StateKind::FrameResult), game.frame_count());
        prop_assert_eq!(count(StateKind::GameResult), 1);

        let last = history.iter().last().map(|(_, node)| *node.state());
        prop_assert!(matches!(last, Some(State::GameResult(r)) if r.frames_played() == game.frame_count()));
    }

    // 6. Frames copy the game's turn count
    #[test]
    fn frames_copy_turn_count(game in game_strategy(), bowler in bowler_strategy()) {
        let (history, start) = played(game, bowler);
        for (_, node) in history.iter() {
            if let State::Frame(frame) = node.state() {
                prop_assert_eq!(frame.game(), start);
                prop_assert_eq!(frame.turn_count(), game.turn_count());
            }
        }
    }

    // 7. The score is the sum of hits, whether played by script or bowler
    #[test]
    fn scripted_replay_matches_score(game in game_strategy(), bowler in bowler_strategy()) {
        let (history, start) = played(game, bowler);
        let hits: Vec<u32> = history
            .iter()
            .filter_map(|(_, node)| node.state().as_turn_result().map(|r| r.hit_count()))
            .collect();

        let mut replay = History::new();
        let replay_start = replay.start(game);
        let tally = Player::play(&mut replay, replay_start, hits.iter().copied()).unwrap();

        prop_assert_eq!(tally.score(), hits.iter().map(|h| u64::from(*h)).sum::<u64>());
        prop_assert_eq!(replay.len(), history.len());
        prop_assert_eq!(start, replay_start);
        prop_assert_eq!(replay.state(tally.state()).unwrap().kind(), StateKind::GameResult);
    }
}
