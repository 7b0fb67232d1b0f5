//! Tests for walking the bowling state machine by hand.

use strictly_bowling::{
    BowlingErrorKind, Game, History, Operation, Player, State, StateId, StateKind,
};

fn started(frames: u32, turns: u32, pins: u32) -> (History, StateId) {
    let mut history = History::new();
    let game = history.start(Game::new(frames, turns, pins).expect("Valid game"));
    (history, game)
}

fn kind(history: &History, id: StateId) -> StateKind {
    history.state(id).expect("Known state").kind()
}

#[test]
fn test_manual_walk_through_one_frame() {
    let (mut history, game) = started(1, 3, 10);

    let frame = history.begin(game).expect("Game begins");
    assert_eq!(kind(&history, frame), StateKind::Frame);

    let turn = history.begin(frame).expect("Frame begins");
    assert_eq!(history.turn(turn).unwrap().pins_left(), 10);

    let rolled = history.roll(turn, 6).expect("Turn rolls");
    let next = history.resume(rolled).expect("Result continues");
    assert_eq!(history.turn(next).unwrap().index(), 1);
    assert_eq!(history.turn(next).unwrap().pins_left(), 4);

    let rolled = history.roll(next, 4).expect("Turn rolls");
    let closed = history.resume(rolled).expect("Result continues");
    assert_eq!(kind(&history, closed), StateKind::FrameResult);

    let done = history.resume(closed).expect("Frame result continues");
    assert_eq!(kind(&history, done), StateKind::GameResult);
}

#[test]
fn test_frame_result_opens_next_frame() {
    let (mut history, game) = started(2, 1, 10);
    let frame = history.begin(game).unwrap();
    let turn = history.begin(frame).unwrap();
    let rolled = history.roll(turn, 0).unwrap();
    let closed = history.resume(rolled).unwrap();
    let second = history.resume(closed).unwrap();

    let frame = history.frame(second).expect("Second frame");
    assert_eq!(frame.index(), 1);
    assert_eq!(frame.game(), game);
    assert_eq!(history.prev(second), Some(closed));
}

#[test]
fn test_receive_directly_matches_continue() {
    let (mut history, game) = started(1, 2, 10);
    let frame = history.begin(game).unwrap();
    let turn = history.begin(frame).unwrap();
    let rolled = history.roll(turn, 2).unwrap();

    let next = history.receive(frame, rolled).expect("Frame accepts turn result");
    assert!(matches!(history.state(next).unwrap(), State::Turn(t) if t.pins_left() == 8));
}

#[test]
fn test_game_result_rejects_everything() {
    let (mut history, game) = started(1, 1, 3);
    let tally = Player::play(&mut history, game, [3]).unwrap();
    let done = tally.state();

    for (err, operation) in [
        (history.begin(done).unwrap_err(), Operation::Begin),
        (history.roll(done, 1).unwrap_err(), Operation::Roll),
        (history.resume(done).unwrap_err(), Operation::Continue),
        (history.receive(done, done).unwrap_err(), Operation::Receive),
    ] {
        assert_eq!(
            err.kind(),
            &BowlingErrorKind::ProtocolViolation {
                state: StateKind::GameResult,
                operation,
            }
        );
    }
}

#[test]
fn test_roll_on_frame_is_protocol_violation() {
    let (mut history, game) = started(1, 1, 10);
    let frame = history.begin(game).unwrap();
    let err = history.roll(frame, 1).unwrap_err();
    assert!(err.is_protocol_violation());
}

#[test]
fn test_resume_on_turn_is_protocol_violation() {
    let (mut history, game) = started(1, 1, 10);
    let frame = history.begin(game).unwrap();
    let turn = history.begin(frame).unwrap();
    let err = history.resume(turn).unwrap_err();
    assert!(err.is_protocol_violation());
}

#[test]
fn test_player_starting_mid_frame() {
    let (mut history, game) = started(2, 2, 10);
    let frame = history.begin(game).unwrap();
    let turn = history.begin(frame).unwrap();

    let tally = Player::play(&mut history, turn, [5, 5, 7, 1]).unwrap();
    assert_eq!(tally.score(), 18);
    assert_eq!(kind(&history, tally.state()), StateKind::GameResult);
}

#[test]
fn test_history_serializes_to_json() {
    let (mut history, game) = started(1, 1, 10);
    Player::play(&mut history, game, [4]).unwrap();

    let json = serde_json::to_string(&history).expect("Serializable");
    assert!(json.contains("\"kind\":\"turn_result\""), "{json}");

    let restored: History = serde_json::from_str(&json).expect("Deserializable");
    assert_eq!(restored, history);
}
