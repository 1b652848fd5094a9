use anyhow::Result;
use auto_snake::game::GameConfig;
use auto_snake::modes::{AutoMode, BenchConfig, BenchMode, HumanMode};
use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "auto_snake")]
#[command(version, about = "Self-playing Snake in the terminal")]
struct Cli {
    /// What drives the snake
    #[arg(long, default_value = "auto")]
    mode: Mode,

    /// Grid width
    #[arg(long, default_value = "30")]
    width: usize,

    /// Grid height
    #[arg(long, default_value = "20")]
    height: usize,

    /// Episodes to run in bench mode
    #[arg(long, default_value = "200")]
    episodes: usize,

    /// Seed for reproducible runs; random when omitted
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Watch the greedy autopilot play
    Auto,
    /// Steer the snake yourself
    Human,
    /// Run headless autopilot batches and print statistics
    Bench,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::new(cli.width, cli.height);

    match cli.mode {
        Mode::Auto => {
            let mut auto_mode = AutoMode::new(config, cli.seed);
            auto_mode.run().await?;
        }
        Mode::Human => {
            let mut human_mode = HumanMode::new(config);
            human_mode.run().await?;
        }
        Mode::Bench => {
            let mut bench_mode = BenchMode::new(BenchConfig::new(cli.episodes, config, cli.seed));
            bench_mode.run()?;
        }
    }

    Ok(())
}
