use blackjack::{generate_humans, generate_robots, Game, HandOutcome, Player};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

mod console;
use console::Console;

#[derive(Parser)]
#[command(name = "blackjack-cli", about = "Text-mode blackjack table")]
struct Cli {
    /// Seat a human player with this name (repeatable)
    #[arg(long = "player", value_name = "NAME")]
    players: Vec<String>,

    /// Number of robot players at the table
    #[arg(long, default_value_t = 2)]
    robots: usize,

    /// Shuffle seed, for replayable sessions
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(rand::random);
    log::debug!("shuffle seed: {seed}");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut players = generate_humans(&cli.players);
    players.extend(generate_robots(cli.robots));

    let mut game = Game::new(Player::robot("Dealer"), players)?;
    let mut console = Console::new();

    loop {
        for result in game.play_round(&mut rng, &mut console)? {
            let verdict = match result.outcome {
                HandOutcome::Win => "won",
                HandOutcome::Loss => "lost",
            };
            println!("{} {} with score {}", result.name, verdict, result.points);
        }

        if !console.confirm("Do you want to keep playing?") {
            break;
        }
    }

    Ok(())
}
