use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use sinkfleet::{
    init_logging, play_turn, FileSession, MemorySession, Response, SessionStore, DEFAULT_NAMESPACE,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a whole game interactively in this terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Take one turn against a game saved on disk, starting one if needed.
    Turn {
        /// Coordinate to fire at (e.g. A5), or SHOW to reveal the fleet.
        input: Option<String>,
        #[arg(long, default_value = ".")]
        session_dir: PathBuf,
        #[arg(long, default_value = DEFAULT_NAMESPACE)]
        namespace: String,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Discard a game saved on disk.
    Reset {
        #[arg(long, default_value = ".")]
        session_dir: PathBuf,
        #[arg(long, default_value = DEFAULT_NAMESPACE)]
        namespace: String,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

fn print_response(response: &Response) {
    if response.invalid_input {
        println!("\n *** ERROR *** \n");
    }
    if let Some(message) = &response.message {
        println!("\n {} \n", message);
    }
    if let Some(turns) = response.final_turns {
        println!("Well done! You completed the game in {} shots.", turns);
        return;
    }
    println!("{}", response.board);
}

fn run_interactive(seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let mut session = MemorySession::new();
    print_response(&play_turn(&mut session, &mut rng, None)?);

    let stdin = io::stdin();
    loop {
        print!("\nEnter coordinates (row, col), e.g. A5: ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") {
            break;
        }
        let response = play_turn(&mut session, &mut rng, Some(line))?;
        print_response(&response);
        if response.game_over {
            break;
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            run_interactive(seed)?;
        }
        Commands::Turn {
            input,
            session_dir,
            namespace,
            seed,
        } => {
            let mut session = FileSession::new(&session_dir, &namespace);
            let mut rng = make_rng(seed);
            let response = play_turn(&mut session, &mut rng, input.as_deref())?;
            print_response(&response);
        }
        Commands::Reset {
            session_dir,
            namespace,
        } => {
            let mut session = FileSession::new(&session_dir, &namespace);
            session.clear()?;
            println!("Cleared {}", session.path().display());
        }
    }
    Ok(())
}
