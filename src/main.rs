use anyhow::{Context, Result};
use clap::Parser;
use video_player::{Console, Shell, ShellConfig};

#[derive(Parser, Debug)]
#[command(name = "video-player")]
#[command(about = "Interactive video catalog player", long_about = None)]
struct Args {
    /// Path to a catalog file (`title | id | tag, tag` per line); defaults to the bundled catalog
    #[arg(short = 'c', long)]
    catalog: Option<String>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Seed for PLAY_RANDOM (reproducible runs)
    #[arg(long)]
    seed: Option<u64>,

    /// Prompt shown before each command
    #[arg(long, default_value = "> ")]
    prompt: String,

    /// Echo each command line (useful when piping a script)
    #[arg(long)]
    echo: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (stderr, so it never mixes with command output)
    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = ShellConfig::new()
        .with_prompt(args.prompt)
        .with_echo(args.echo);
    if let Some(ref path) = args.catalog {
        config = config.with_catalog(path);
    }
    if let Some(seed) = args.seed {
        log::info!("Random playback seeded with {}", seed);
        config = config.with_seed(seed);
    }

    let player = config
        .build_player()
        .context("Failed to set up the video player")?;
    log::info!("Catalog ready: {} videos", player.catalog().video_count());

    let mut shell = Shell::new(config, player);
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let executed = shell.run(&mut input, &mut Console);

    log::info!("Session finished after {} commands", executed);
    Ok(())
}
