use anyhow::Result;
use clap::Parser;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use armada::{
    format_label, init_logging, AiPlayer, CliPlayer, Game, Player,
};

#[derive(Parser)]
#[command(author, version, about = "Naval combat against a hunt/target AI on a 10x10 grid")]
struct Cli {
    /// Fix the RNG seed for a reproducible game (e.g. --seed 12345).
    #[arg(long)]
    seed: Option<u64>,
    /// Watch the computer play against itself.
    #[arg(long)]
    ai_only: bool,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    if cli.seed.is_some() {
        println!("Using fixed seed: {} (game will be reproducible)", seed);
    }
    let rng = SmallRng::seed_from_u64(seed);

    let (first, second): (Box<dyn Player>, Box<dyn Player>) = if cli.ai_only {
        (
            Box::new(AiPlayer::named("Computer 1")),
            Box::new(AiPlayer::named("Computer 2")),
        )
    } else {
        println!("Welcome to Armada! Sink the enemy fleet before yours goes down.");
        (Box::new(CliPlayer::new()), Box::new(AiPlayer::new()))
    };

    let mut game = Game::new(first, second, rng);
    game.setup()?;

    let winner = loop {
        let report = game.play_turn()?;
        let label = format_label(report.coord)
            .unwrap_or_else(|| format!("{:?}", report.coord));
        println!("{} fires at {} -> {}!", report.attacker, label, report.outcome);
        if let Some(winner) = game.winner() {
            break winner;
        }
        game.switch_turn();
    };

    println!("\nAnd the winner is... {}!", winner.name());
    println!("Thanks for playing!");
    Ok(())
}
