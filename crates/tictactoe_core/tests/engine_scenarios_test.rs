//! End-to-end scenarios for the tic-tac-toe engine.

use tictactoe_core::rules::check_winner;
use tictactoe_core::{
    Board, EngineSnapshot, GameEngine, GameStatus, Line, MoveError, Player, Position, Score, Square,
};

fn play(engine: &mut GameEngine, positions: &[Position]) -> GameStatus {
    let mut status = engine.status();
    for pos in positions {
        status = engine.play(*pos).expect("legal move");
    }
    status
}

/// Three cells outside `line` that do not form a line themselves.
fn filler_outside(line: Line) -> [Position; 3] {
    let free: Vec<Position> = Position::ALL
        .into_iter()
        .filter(|pos| !line.contains(*pos))
        .collect();

    for i in 0..free.len() {
        for j in i + 1..free.len() {
            for k in j + 1..free.len() {
                let candidate = [free[i], free[j], free[k]];
                let board = Board::from_rows(rows_with(&candidate, Player::X));
                if check_winner(&board).is_none() {
                    return candidate;
                }
            }
        }
    }
    panic!("no non-winning filler for {line:?}");
}

fn rows_with(positions: &[Position], player: Player) -> [[Square; 3]; 3] {
    let mut rows = [[Square::Empty; 3]; 3];
    for pos in positions {
        rows[pos.row()][pos.col()] = Square::Occupied(player);
    }
    rows
}

#[test]
fn test_example_top_row_win() {
    let mut engine = GameEngine::new();
    for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2)] {
        assert_eq!(engine.apply_move(row, col), Ok(GameStatus::InProgress));
    }
    assert_eq!(engine.apply_move(0, 2), Ok(GameStatus::Won(Player::X)));

    let x = Square::Occupied(Player::X);
    assert_eq!(engine.board().rows()[0], [x, x, x]);
    assert_eq!(engine.winning_coords(), vec![(0, 0), (0, 1), (0, 2)]);
    assert_eq!(engine.score().get(Player::X), 1);
}

#[test]
fn test_example_draw() {
    let mut engine = GameEngine::new();
    let status = play(
        &mut engine,
        &[
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::Center,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomLeft,
            Position::BottomRight,
        ],
    );
    assert_eq!(status, GameStatus::Draw);

    let (x, o) = (Square::Occupied(Player::X), Square::Occupied(Player::O));
    assert_eq!(engine.board().rows(), [[x, o, x], [x, o, o], [o, x, x]]);
    assert!(engine.winning_coords().is_empty());
    assert_eq!(engine.score(), Score::new());
}

#[test]
fn test_every_line_wins_for_x() {
    for line in Line::ALL {
        let mut engine = GameEngine::new();
        let [a, b, c] = line.positions();
        let [o1, o2, _] = filler_outside(line);

        let status = play(&mut engine, &[a, o1, b, o2, c]);

        assert_eq!(status, GameStatus::Won(Player::X), "line {line:?}");
        assert_eq!(engine.winning_line(), Some(line));
        assert_eq!(engine.winning_coords(), line.coords().to_vec());
        assert_eq!(engine.score().get(Player::X), 1);
    }
}

#[test]
fn test_every_line_wins_for_o() {
    for line in Line::ALL {
        let mut engine = GameEngine::new();
        let [a, b, c] = line.positions();
        let [x1, x2, x3] = filler_outside(line);

        let status = play(&mut engine, &[x1, a, x2, b, x3, c]);

        assert_eq!(status, GameStatus::Won(Player::O), "line {line:?}");
        assert_eq!(engine.winning_coords(), line.coords().to_vec());
        assert_eq!(engine.score().get(Player::O), 1);
        assert_eq!(engine.score().get(Player::X), 0);
    }
}

#[test]
fn test_score_accumulates_across_rounds() {
    let mut engine = GameEngine::new();
    let x_top_row = [
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::BottomRight,
        Position::TopRight,
    ];
    let o_left_column = [
        Position::Center,
        Position::TopLeft,
        Position::TopRight,
        Position::MiddleLeft,
        Position::BottomRight,
        Position::BottomLeft,
    ];

    play(&mut engine, &x_top_row);
    engine.start_new_round();
    play(&mut engine, &x_top_row);
    engine.start_new_round();
    assert_eq!(play(&mut engine, &o_left_column), GameStatus::Won(Player::O));

    assert_eq!(engine.score().get(Player::X), 2);
    assert_eq!(engine.score().get(Player::O), 1);

    // Rejected moves on a finished round never add a second win
    for pos in Position::ALL {
        assert_eq!(engine.play(pos), Err(MoveError::GameOver));
    }
    assert_eq!(engine.score().get(Player::O), 1);

    engine.reset_score();
    assert_eq!(engine.score(), Score::new());
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(engine.current_player(), Player::X);
    assert!(Position::ALL.iter().all(|pos| engine.board().is_empty(*pos)));
}

#[test]
fn test_new_round_mid_game() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[Position::Center, Position::TopLeft, Position::BottomLeft]);
    assert_eq!(engine.current_player(), Player::O);
    assert!(!engine.can_start_new_round());

    engine.start_new_round();
    assert_eq!(engine.current_player(), Player::X);
    assert_eq!(engine.board(), &Board::new());
}

#[test]
fn test_snapshot_serializes() {
    let mut engine = GameEngine::new();
    play(
        &mut engine,
        &[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomRight,
            Position::TopRight,
        ],
    );

    let json = serde_json::to_value(engine.snapshot()).expect("serialize snapshot");
    assert_eq!(json["status"], serde_json::json!({ "Won": "X" }));
    assert_eq!(json["current_player"], "X");
    assert_eq!(json["winning_line"], serde_json::json!([[0, 0], [0, 1], [0, 2]]));
    assert_eq!(json["board"][1][1], serde_json::json!({ "Occupied": "O" }));
    assert_eq!(json["board"][2][0], "Empty");
    assert_eq!(json["can_start_new_round"], true);

    let decoded: EngineSnapshot = serde_json::from_value(json).expect("deserialize snapshot");
    assert_eq!(decoded, engine.snapshot());
}
