use armada::{AiPlayer, Game, ShotOutcome};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn run_game(seed: u64) -> (String, u32, Vec<((usize, usize), ShotOutcome)>) {
    let rng = SmallRng::seed_from_u64(seed);
    let mut game = Game::new(
        Box::new(AiPlayer::named("North")),
        Box::new(AiPlayer::named("South")),
        rng,
    );
    game.setup().unwrap();

    let mut transcript = Vec::new();
    loop {
        let report = game.play_turn().unwrap();
        transcript.push((report.coord, report.outcome));
        if let Some(winner) = game.winner() {
            return (winner.name().to_string(), game.round(), transcript);
        }
        game.switch_turn();
        assert!(game.round() < 400, "game did not terminate");
    }
}

#[test]
fn test_ai_vs_ai_game_reaches_a_winner() {
    for seed in [7u64, 23, 99] {
        let (winner, rounds, transcript) = run_game(seed);
        assert!(winner == "North" || winner == "South");
        // both fleets total 20 cells; sinking one takes at least 20 shots
        assert!(rounds >= 20);
        assert_eq!(transcript.len(), rounds as usize);
        // no AI ever wastes a turn
        assert!(transcript
            .iter()
            .all(|&(_, outcome)| outcome != ShotOutcome::Invalid && outcome != ShotOutcome::Repeat));
    }
}

#[test]
fn test_seeded_games_are_reproducible() {
    let first = run_game(1234);
    let second = run_game(1234);
    assert_eq!(first.0, second.0);
    assert_eq!(first.1, second.1);
    assert_eq!(first.2, second.2);
}

#[test]
fn test_winner_sank_the_whole_enemy_fleet() {
    let rng = SmallRng::seed_from_u64(5);
    let mut game = Game::new(
        Box::new(AiPlayer::new()),
        Box::new(AiPlayer::new()),
        rng,
    );
    game.setup().unwrap();
    loop {
        game.play_turn().unwrap();
        if game.winner().is_some() {
            break;
        }
        game.switch_turn();
    }
    let sunk_boards = (0..2)
        .filter(|&i| game.player(i).board().all_ships_sunk())
        .count();
    assert_eq!(sunk_boards, 1);
}
