use battlesalvo::{init_logging, FleetSpec, Match, MatchReport, SalvoAi, ShipType};
use rand::{rngs::SmallRng, SeedableRng};

const HEIGHT: usize = 10;
const WIDTH: usize = 10;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let p1 = SalvoAi::new().with_name("player1");
    let p2 = SalvoAi::new().with_name("player2");
    let spec = FleetSpec::new()
        .with(ShipType::Carrier, 1)
        .with(ShipType::Battleship, 1)
        .with(ShipType::Destroyer, 1)
        .with(ShipType::Submarine, 1);

    let mut game = Match::with_rngs(
        Box::new(p1),
        Box::new(p2),
        SmallRng::seed_from_u64(seed1),
        SmallRng::seed_from_u64(seed2),
    );
    let outcome = game.run(HEIGHT, WIDTH, &spec)?;

    let report = MatchReport::new(HEIGHT, WIDTH, ["player1", "player2"], &outcome);
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
