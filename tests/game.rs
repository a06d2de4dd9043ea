//! Game integration tests.

use golfrs::{
    BeginRoundError, Card, CardAction, DECK_SIZE, Deck, DrawAction, ErrorKind, Game, GolfOptions,
    HAND_SIZE, Rank, Round, RoundState, Slot, Suit, TurnError, TurnPhase,
};
use tracing_subscriber::{EnvFilter, fmt};

fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(|_| EnvFilter::new("warn"), EnvFilter::new);

    fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Builds a deck that deals `hands` in seat order, seeds the discard pile
/// with `discard`, then yields `rest` for turns.
fn stacked(hands: &[[Card; HAND_SIZE]], discard: Card, rest: &[Card]) -> Deck {
    let mut draws = Vec::new();
    for slot in 0..HAND_SIZE {
        for hand in hands {
            draws.push(hand[slot]);
        }
    }
    draws.push(discard);
    draws.extend_from_slice(rest);
    Deck::from_draws(&draws)
}

fn play(round: &mut Round, draw: DrawAction, action: CardAction) -> RoundState {
    round.draw_action(draw).unwrap();
    round.card_action(action).unwrap();
    round.end_turn().unwrap()
}

/// Player 0 ends up with kings in all four corners and a 2/3 middle row.
fn four_corners_deck() -> Deck {
    let corners = [
        card(Suit::Clubs, Rank::King),
        card(Suit::Diamonds, Rank::King),
        card(Suit::Clubs, Rank::Two),
        card(Suit::Clubs, Rank::Three),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Diamonds, Rank::Nine),
    ];
    let plain = [
        card(Suit::Clubs, Rank::Ace),
        card(Suit::Diamonds, Rank::Four),
        card(Suit::Diamonds, Rank::Five),
        card(Suit::Diamonds, Rank::Six),
        card(Suit::Diamonds, Rank::Seven),
        card(Suit::Diamonds, Rank::Eight),
    ];
    stacked(
        &[corners, plain],
        card(Suit::Hearts, Rank::Nine),
        &[
            card(Suit::Diamonds, Rank::Two),
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Diamonds, Rank::Three),
            card(Suit::Spades, Rank::Ten),
            card(Suit::Hearts, Rank::King),
            card(Suit::Hearts, Rank::Jack),
            card(Suit::Spades, Rank::King),
            card(Suit::Spades, Rank::Jack),
        ],
    )
}

#[test]
fn terminal_turn_gives_other_player_one_last_turn() {
    init_logging();
    let mut game = Game::new(["Ada", "Brian"], GolfOptions::default().with_rounds(1), 1);
    let round = game.begin_round_with_deck(four_corners_deck()).unwrap();

    round.flip_initial(0, [Slot::TOP_LEFT, Slot::TOP_RIGHT]).unwrap();
    round.flip_initial(1, [Slot::TOP_LEFT, Slot::TOP_RIGHT]).unwrap();
    assert_eq!(round.state(), RoundState::Active);

    for slot in [Slot::MIDDLE_LEFT, Slot::MIDDLE_RIGHT, Slot::BOTTOM_LEFT] {
        assert_eq!(
            play(round, DrawAction::Draw, CardAction::Replace(slot)),
            RoundState::Active
        );
        assert_eq!(
            play(round, DrawAction::Draw, CardAction::Discard),
            RoundState::Active
        );
    }

    // Player 0 turns up their sixth card.
    assert_eq!(
        play(
            round,
            DrawAction::Draw,
            CardAction::Replace(Slot::BOTTOM_RIGHT)
        ),
        RoundState::Terminal
    );
    assert!(round.is_terminal());
    assert_eq!(round.terminal_player(), Some(0));
    assert_eq!(round.current_player(), 1);

    assert_eq!(
        play(round, DrawAction::Draw, CardAction::Discard),
        RoundState::Finished
    );
    assert!(round.is_finished());
    assert_eq!(round.current_player(), 0);
    assert_eq!(
        round.draw_action(DrawAction::Draw).unwrap_err(),
        TurnError::InvalidState
    );
}

/// Plays the stacked four corners deal to the end of the round.
fn play_four_corners(round: &mut Round) {
    round.flip_initial(0, [Slot::TOP_LEFT, Slot::TOP_RIGHT]).unwrap();
    round.flip_initial(1, [Slot::TOP_LEFT, Slot::TOP_RIGHT]).unwrap();

    for slot in [
        Slot::MIDDLE_LEFT,
        Slot::MIDDLE_RIGHT,
        Slot::BOTTOM_LEFT,
        Slot::BOTTOM_RIGHT,
    ] {
        play(round, DrawAction::Draw, CardAction::Replace(slot));
        play(round, DrawAction::Draw, CardAction::Discard);
    }
}

#[test]
fn four_corners_penalizes_other_players() {
    init_logging();
    let mut game = Game::new(["Ada", "Brian"], GolfOptions::default().with_rounds(1), 1);
    let round = game.begin_round_with_deck(four_corners_deck()).unwrap();
    play_four_corners(round);
    assert!(round.is_finished());

    round.reveal_all();
    let hand = round.hand(0).unwrap();
    assert!(hand.is_four_corners());
    assert_eq!(hand.score(), 5);

    let result = round.result();
    assert_eq!(result.hand_scores, vec![5, 28]);
    assert_eq!(result.four_corners, vec![true, false]);
    assert_eq!(result.scores, vec![5, 58]);

    let standings = game.result();
    assert_eq!(standings.totals, vec![5, 58]);
    assert_eq!(standings.winners, vec![0]);
    assert!(game.is_over());
    assert_eq!(
        game.begin_round().unwrap_err(),
        BeginRoundError::RoundLimitReached
    );
}

#[test]
fn four_corners_penalty_is_configurable() {
    let options = GolfOptions::default()
        .with_rounds(1)
        .with_four_corners_penalty(0);
    let mut game = Game::new(["Ada", "Brian"], options, 1);
    let round = game.begin_round_with_deck(four_corners_deck()).unwrap();
    play_four_corners(round);
    assert_eq!(round.result().scores, vec![5, 28]);
}

#[test]
fn unfinished_round_does_not_count() {
    let mut game = Game::new(["Ada", "Brian"], GolfOptions::default(), 1);
    let round = game.begin_round_with_deck(four_corners_deck()).unwrap();
    round.flip_initial(0, [Slot::TOP_LEFT, Slot::TOP_RIGHT]).unwrap();

    assert_eq!(round.result().scores, vec![5, 28]);
    assert_eq!(game.result().totals, vec![0, 0]);
    assert_eq!(game.result().winners, vec![0, 1]);
    assert!(game.round_results().is_empty());
    assert_eq!(
        game.begin_round().unwrap_err(),
        BeginRoundError::RoundInProgress
    );
}

#[test]
fn rejected_move_leaves_round_unchanged() {
    let mut game = Game::new(["Ada", "Brian"], GolfOptions::default(), 1);
    let round = game.begin_round_with_deck(four_corners_deck()).unwrap();
    round.flip_initial(0, [Slot::TOP_LEFT, Slot::TOP_RIGHT]).unwrap();
    round.flip_initial(1, [Slot::TOP_LEFT, Slot::TOP_RIGHT]).unwrap();

    let top = round.last_discard();
    let hand = round.current_hand().clone();
    let taken = round.draw_action(DrawAction::Take).unwrap();
    assert_eq!(taken, top);

    let err = round.card_action(CardAction::Discard).unwrap_err();
    assert_eq!(err, TurnError::MustReplace);
    assert_eq!(err.kind(), ErrorKind::InvalidMove);
    assert_eq!(round.current_hand(), &hand);
    assert_eq!(round.last_discard(), top);
    assert_eq!(round.drawn_card(), Some(top));

    let err = CardAction::from_selector(9).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidMove);

    let action = CardAction::from_selector(5).unwrap();
    let outgoing = round.card_action(action).unwrap();
    assert_eq!(outgoing, card(Suit::Clubs, Rank::Nine));
    assert_eq!(round.current_hand().get(Slot::BOTTOM_LEFT).card, top);
    assert_eq!(round.phase(), TurnPhase::Played);
}

#[test]
fn round_limit_is_configurable() {
    let mut game = Game::new(["Ada"], GolfOptions::default().with_rounds(0), 3);
    assert_eq!(
        game.begin_round().unwrap_err(),
        BeginRoundError::RoundLimitReached
    );
    assert!(game.is_over());
}

/// Plays a whole round: draw from the deck while it lasts and swap into
/// the first face-down slot, so every hand is revealed within four laps.
fn play_round(round: &mut Round) {
    for player in 0..round.player_count() {
        round
            .flip_initial(player, [Slot::TOP_LEFT, Slot::BOTTOM_RIGHT])
            .unwrap();
    }

    while !round.is_finished() {
        let draw = if round.cards_remaining() > 0 {
            DrawAction::Draw
        } else {
            DrawAction::Take
        };
        let slot = Slot::ALL
            .into_iter()
            .find(|&slot| !round.current_hand().get(slot).is_face_up())
            .unwrap_or(Slot::MIDDLE_LEFT);
        play(round, draw, CardAction::Replace(slot));
    }
}

#[test]
fn seeded_game_plays_nine_rounds() {
    init_logging();
    let mut game = Game::new(["Ada", "Brian", "Chen", "Dana"], GolfOptions::default(), 2024);

    while !game.is_over() {
        let round = game.begin_round().unwrap();
        assert_eq!(round.cards_remaining(), DECK_SIZE - 4 * HAND_SIZE - 1);
        play_round(round);
    }

    assert_eq!(game.round_number(), 9);
    assert_eq!(
        game.begin_round().unwrap_err(),
        BeginRoundError::RoundLimitReached
    );

    let results = game.round_results();
    assert_eq!(results.len(), 9);

    let result = game.result();
    for (player, total) in result.totals.iter().enumerate() {
        let expected: i32 = results.iter().map(|round| round.scores[player]).sum();
        assert_eq!(*total, expected);
    }

    let best = result.totals.iter().min().copied().unwrap();
    assert!(!result.winners.is_empty());
    for (player, total) in result.totals.iter().enumerate() {
        assert_eq!(result.winners.contains(&player), *total == best);
    }
}

#[test]
fn same_seed_replays_the_same_game() {
    let mut first = Game::new(["Ada", "Brian"], GolfOptions::default(), 7);
    let mut second = Game::new(["Ada", "Brian"], GolfOptions::default(), 7);

    for _ in 0..3 {
        play_round(first.begin_round().unwrap());
        play_round(second.begin_round().unwrap());
    }

    assert_eq!(first.round_results(), second.round_results());
    assert_eq!(first.result(), second.result());
}
