use connect_four_mcts::board::{Board, GameStatus, Player};
use connect_four_mcts::position::Position;
use connect_four_mcts::random::{CustomNumberGenerator, SeededRandomGenerator};
use connect_four_mcts::report::{Report, Verbosity};
use connect_four_mcts::search::{SearchEngine, Strategy};
use connect_four_mcts::{Error, Result};

fn decide(text: &str, simulations: u32, seed: u64) -> Result<Option<usize>> {
    let position: Position = text.parse()?;
    let mut engine = SearchEngine::builder(position.board, position.player)
        .with_random_generator(SeededRandomGenerator::new(seed))
        .with_simulations(simulations)
        .build();
    Ok(engine.select_move(position.strategy)?.column)
}

const FULL_BOARD: &str = "RRYYRRY\nYYRRYYR\nRRYYRRY\nYYRRYYR\nRRYYRRY\nYYRRYYR";

#[test]
fn ur_on_empty_board_is_reproducible() {
    // arrange
    let text = "UR\nY\nOOOOOOO\nOOOOOOO\nOOOOOOO\nOOOOOOO\nOOOOOOO\nOOOOOOO";

    // act
    let first = decide(text, 1, 17).unwrap();
    let second = decide(text, 1, 17).unwrap();

    // assert
    assert!(first.is_some_and(|column| column < 7));
    assert_eq!(first, second);
}

#[test]
fn ur_on_empty_board_follows_the_custom_generator() {
    // The first draw of the default custom generator over 7 columns is 1.
    let mut engine = SearchEngine::builder(Board::empty(), Player::Yellow)
        .with_random_generator(CustomNumberGenerator::default())
        .build();

    let decision = engine.select_move(Strategy::Ur).unwrap();

    assert_eq!(decision.column, Some(1));
    assert_eq!(decision.display_column(), Some(2));
}

#[test]
fn ur_completes_four_in_a_row_for_any_seed() {
    let text = "UR\nY\nOOOOOOO\nOOOOOOO\nOOOOOOO\nOOOOOOO\nOOOOOOO\nYYYOOOO";
    for seed in 0..25 {
        assert_eq!(decide(text, 1, seed).unwrap(), Some(3));
    }
}

#[test]
fn full_board_has_no_move_for_any_strategy() {
    let board: Board = FULL_BOARD.parse().unwrap();
    for strategy in [Strategy::Ur, Strategy::Pmcgs, Strategy::Uct] {
        let mut engine = SearchEngine::builder(board, Player::Red)
            .with_random_generator(CustomNumberGenerator::default())
            .with_simulations(10)
            .build();

        let decision = engine.select_move(strategy).unwrap();

        assert_eq!(decision.column, None);
        assert!(decision.statistics.is_empty());
        assert_eq!(
            Report::new(&decision, Verbosity::Verbose).lines(),
            vec!["No move available"]
        );
    }
}

#[test]
fn pmcgs_is_deterministic_for_a_seed() {
    let text = "PMCGS\nR\nOOOOOOO\nOOOOOOO\nOOOOOOO\nOOOOOOO\nOOOYOOO\nORRYOOO";
    let position: Position = text.parse().unwrap();

    let run = || {
        let mut engine = SearchEngine::builder(position.board, position.player)
            .with_random_generator(SeededRandomGenerator::new(3))
            .with_simulations(40)
            .build();
        let decision = engine.select_move(position.strategy).unwrap();
        let report = Report::new(&decision, Verbosity::Verbose).to_string();
        (decision, report)
    };

    let (first, first_report) = run();
    let (second, second_report) = run();

    assert_eq!(first, second);
    assert_eq!(first_report, second_report);
    assert_eq!(first.statistics.len(), 7);
}

#[test]
fn uct_is_deterministic_for_a_seed() {
    let text = "UCT\nY\nOOOOOOO\nOOOOOOO\nOOOOOOO\nOOOOOOO\nOOOYOOO\nORRYOOO";
    assert_eq!(decide(text, 25, 8).unwrap(), decide(text, 25, 8).unwrap());
}

#[test]
fn simulation_strategies_take_an_immediate_win() {
    // Red has three on the bottom row and only column 4 completes them.
    let text = "PMCGS\nR\nOOOOOOO\nOOOOOOO\nOOOOOOO\nOOOOOOO\nOYYYOOO\nYRRROOO";
    assert_eq!(decide(text, 30, 1).unwrap(), Some(4));

    let text = text.replacen("PMCGS", "UCT", 1);
    assert_eq!(decide(&text, 30, 1).unwrap(), Some(4));
}

#[test]
fn unknown_strategy_is_an_error_not_a_panic() {
    let text = "ALPHABETA\nR\nOOOOOOO\nOOOOOOO\nOOOOOOO\nOOOOOOO\nOOOOOOO\nOOOOOOO";
    assert_eq!(
        decide(text, 10, 0),
        Err(Error::UnknownStrategy {
            name: "ALPHABETA".to_string()
        })
    );
}

#[test]
fn zero_simulations_is_an_error_for_simulation_strategies() {
    let text = "UCT\nR\nOOOOOOO\nOOOOOOO\nOOOOOOO\nOOOOOOO\nOOOOOOO\nOOOOOOO";
    assert_eq!(decide(text, 0, 0), Err(Error::InvalidSimulationCount));
}

#[test]
fn winning_move_ends_the_game() {
    let text = "PMCGS\nR\nOOOOOOO\nOOOOOOO\nOOOOOOO\nOOOOOOO\nOYYYOOO\nYRRROOO";
    let position: Position = text.parse().unwrap();
    assert_eq!(position.board.status(), None);

    let column = decide(text, 30, 1).unwrap().unwrap();
    let after = position.board.apply_move(column, position.player).unwrap();

    assert_eq!(after.status(), Some(GameStatus::Won(Player::Red)));
    assert_eq!(after.status().unwrap().to_string(), "Red wins!");
}
