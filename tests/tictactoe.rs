use grid_life::tictactoe::ai::winning_move;
use grid_life::tictactoe::{Mark, Outcome, TicTacToe, choose_move};
use rand::SeedableRng;
use rand::seq::IndexedRandom;

fn play_out(seed: u64, ai_mark: Mark) -> Outcome {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut board = TicTacToe::new();
    let mut player = Mark::X;

    loop {
        let cell = if player == ai_mark {
            let expected_win = winning_move(&board, player);
            let cell = choose_move(&board, player, &mut rng).unwrap();
            if let Some(win) = expected_win {
                assert_eq!(cell, win, "AI missed a winning move (seed {seed})");
            }
            cell
        } else {
            let free: Vec<usize> = board.free_cells().collect();
            *free.choose(&mut rng).unwrap()
        };
        board.play(cell, player).unwrap();
        if let Some(outcome) = board.outcome() {
            return outcome;
        }
        player = player.opponent();
    }
}

#[test]
fn games_against_random_player_always_finish() {
    for seed in 0..200u64 {
        for ai_mark in [Mark::X, Mark::O] {
            let outcome = play_out(seed, ai_mark);
            assert!(matches!(outcome, Outcome::Win(_) | Outcome::Draw));
        }
    }
}

#[test]
fn ai_opening_as_first_player_never_loses() {
    let mut losses = 0;
    for seed in 0..200u64 {
        if play_out(seed, Mark::X) == Outcome::Win(Mark::O) {
            losses += 1;
        }
    }
    // Centre opening plus blocking leaves random play no forced win.
    assert_eq!(losses, 0);
}

#[test]
fn ai_versus_ai_takes_the_centre_first() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(1);
    let mut board = TicTacToe::new();
    let first = choose_move(&board, Mark::X, &mut rng).unwrap();
    assert_eq!(first, 5);
    board.play(first, Mark::X).unwrap();
    let reply = choose_move(&board, Mark::O, &mut rng).unwrap();
    assert!([1, 3, 7, 9].contains(&reply));
}
