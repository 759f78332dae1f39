//! Optimal-play properties of the minimax searcher

use oxo::{Action, Board, Game, GameOutcome, SearchConfig, Searcher, minimax};

#[test]
fn empty_board_always_has_an_answer() {
    let action = minimax(&Board::new()).unwrap();
    assert_eq!(action, Some(Action::new(1, 1)));
}

#[test]
fn empty_board_without_the_shortcut() {
    let searcher = Searcher::new(SearchConfig::new().with_opening_shortcut(false));
    let outcome = searcher.search(&Board::new()).unwrap();

    // Perfect play from the start is a draw, and every opening holds it,
    // so the first action in enumeration order wins the tie
    assert_eq!(outcome.value, 0);
    assert_eq!(outcome.action, Some(Action::new(0, 0)));
}

#[test]
fn forced_block_holds_the_draw() {
    // O must block the column X is about to complete; anything else loses
    let board = Board::from_string("_XO OXX X_O").unwrap();
    let outcome = Searcher::default().search(&board).unwrap();

    assert_eq!(outcome.action, Some(Action::new(2, 1)));
    assert_eq!(outcome.value, 0);
}

#[test]
fn corner_opening_gets_the_center_reply() {
    // Center is the only reply to a corner that holds the draw
    let board = Board::from_string("X........").unwrap();
    assert_eq!(minimax(&board).unwrap(), Some(Action::new(1, 1)));
}

#[test]
fn winning_fork_is_found() {
    // Taking the center gives X two threats at once; everything else
    // lets O win on the anti-diagonal
    let board = Board::from_string("XXO ___ O__").unwrap();
    let outcome = Searcher::default().search(&board).unwrap();

    assert_eq!(outcome.action, Some(Action::new(1, 1)));
    assert_eq!(outcome.value, 1);
}

#[test]
fn double_threat_defense_is_found() {
    // O must take the corner: it blocks X's bottom row and forks the
    // right column with the main diagonal
    let board = Board::from_string("_XO _O_ XX_").unwrap();
    let outcome = Searcher::default().search(&board).unwrap();

    assert_eq!(outcome.action, Some(Action::new(2, 2)));
    assert_eq!(outcome.value, -1);
}

#[test]
fn decided_games_yield_no_action() {
    let full = Board::from_string("XOX OOX XXO").unwrap();
    assert_eq!(minimax(&full).unwrap(), None);

    let won = Board::from_string("XXX OO. ...").unwrap();
    assert_eq!(minimax(&won).unwrap(), None);
}

#[test]
fn repeated_searches_agree() {
    let boards = [
        Board::from_string("X........").unwrap(),
        Board::from_string("X...O....").unwrap(),
        Board::from_string("_XO _O_ XX_").unwrap(),
    ];

    let searcher = Searcher::default();
    for board in boards {
        let first = searcher.best_action(&board).unwrap();
        let second = searcher.best_action(&board).unwrap();
        assert_eq!(first, second, "two searches disagreed on {}", board.encode());
    }
}

fn play_out(searcher: &Searcher) -> GameOutcome {
    let mut game = Game::new();

    for _ in 0..9 {
        let board = game.current_state().unwrap();
        let Some(action) = searcher.best_action(&board).unwrap() else {
            break;
        };
        game.play(action).unwrap();

        if game.outcome.is_some() {
            break;
        }
    }

    game.outcome.expect("nine plies always decide the game")
}

#[test]
fn self_play_is_always_a_draw() {
    let outcome = play_out(&Searcher::default());
    assert_eq!(outcome, GameOutcome::Draw);
}

#[test]
fn self_play_is_a_draw_without_the_opening_shortcut() {
    let searcher = Searcher::new(SearchConfig::new().with_opening_shortcut(false));
    assert_eq!(play_out(&searcher), GameOutcome::Draw);
}
