use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use serde_json::json;
use sinkfleet::{init_logging, play_turn, Coordinate, MemorySession};

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut targets: Vec<Coordinate> = Coordinate::all().collect();
    targets.shuffle(&mut rng);

    let mut session = MemorySession::new();
    let (mut hits, mut misses, mut sunk) = (0u32, 0u32, 0u32);
    let mut final_turns = None;
    for coord in targets {
        let response = play_turn(&mut session, &mut rng, Some(&coord.to_string()))?;
        match response.message.as_deref() {
            Some("SHIP SUNK") => sunk += 1,
            Some(m) if m.starts_with("HIT") => hits += 1,
            Some(_) => misses += 1,
            None => {}
        }
        if response.game_over {
            final_turns = response.final_turns;
            break;
        }
    }

    let result = json!({
        "seed": seed,
        "turns": final_turns,
        "hits": hits,
        "misses": misses,
        "sunk": sunk,
        "finished": final_turns.is_some(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
