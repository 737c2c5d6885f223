use battlesalvo::{
    init_logging, ConsoleRenderer, FleetSpec, GameResult, Match, NullRenderer, Player,
    RandomPlayer, SalvoAi, ShipType,
};

use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Opponent {
    Ai,
    Random,
}

#[derive(Args, Clone, Debug)]
struct Setup {
    #[arg(long, default_value_t = 10, help = "Board height (6-15)")]
    height: usize,
    #[arg(long, default_value_t = 10, help = "Board width (6-15)")]
    width: usize,
    #[arg(long, default_value_t = 1)]
    carrier: usize,
    #[arg(long, default_value_t = 1)]
    battleship: usize,
    #[arg(long, default_value_t = 1)]
    destroyer: usize,
    #[arg(long, default_value_t = 1)]
    submarine: usize,
}

impl Setup {
    fn fleet(&self) -> FleetSpec {
        FleetSpec::new()
            .with(ShipType::Carrier, self.carrier)
            .with(ShipType::Battleship, self.battleship)
            .with(ShipType::Destroyer, self.destroyer)
            .with(ShipType::Submarine, self.submarine)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Watch the AI play a full match on the local machine.
    Play {
        #[command(flatten)]
        setup: Setup,
        #[arg(long, value_enum, default_value_t = Opponent::Ai)]
        opponent: Opponent,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Only print the final result")]
        quiet: bool,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            setup,
            opponent,
            seed,
            quiet,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let first = SalvoAi::new().with_name("Salvo AI");
            let first = if quiet {
                first.with_renderer(Box::new(NullRenderer))
            } else {
                first.with_renderer(Box::new(ConsoleRenderer::new()))
            };
            let second: Box<dyn Player> = match opponent {
                Opponent::Ai => Box::new(SalvoAi::new().with_name("Opponent AI")),
                Opponent::Random => Box::new(RandomPlayer::new().with_name("Random")),
            };

            let rng1 = make_rng(seed);
            let rng2 = make_rng(seed.map(|s| s.wrapping_add(1)));
            let mut game = Match::with_rngs(Box::new(first), second, rng1, rng2);
            let outcome = game.run(setup.height, setup.width, &setup.fleet())?;

            let [a, b] = game.players();
            println!(
                "\n{} rounds, {} fired {} ({} hits), {} fired {} ({} hits)",
                outcome.rounds,
                a.name(),
                outcome.shots[0],
                outcome.hits[0],
                b.name(),
                outcome.shots[1],
                outcome.hits[1]
            );
            match outcome.result {
                GameResult::Win => println!("Winner: {}", a.name()),
                GameResult::Lose => println!("Winner: {}", b.name()),
                GameResult::Draw => println!("Draw"),
            }
        }
    }
    Ok(())
}
