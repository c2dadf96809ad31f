use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use hatfield_core::{Coord, GameSession, RandomFieldGenerator};

mod console;
mod logging;

#[derive(Parser, Debug)]
#[command(version, about = "Find your hat without falling into a hole", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Width and height of the field
    #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(Coord).range(2..))]
    size: Coord,

    /// Force a seed instead of random
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose.tracing_level_filter());

    let seed = args.seed.unwrap_or_else(rand::random::<u64>);
    log::info!("seed: {seed}");

    let mut generator = RandomFieldGenerator::from_seed(seed);
    let mut session =
        GameSession::generate(&mut generator, args.size).context("Could not generate field")?;

    let state = console::play(&mut session, std::io::stdin().lock(), std::io::stdout().lock())?;
    log::info!("Finished {state:?} after {} moves", session.move_count());
    Ok(())
}
