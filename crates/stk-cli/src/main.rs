use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "stk")]
#[command(about = "Longest positive streak over a numeric series", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a series and print its longest run of strictly positive values
    Streak(commands::streak::StreakArgs),

    /// Compute layered config hash + print canonical JSON
    ConfigHash {
        /// Paths in merge order (base -> overrides...)
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Streak(args) => commands::streak::run(args)?,

        Commands::ConfigHash { paths } => {
            commands::init_tracing(stk_config::DEFAULT_LOG_FILTER);
            let path_refs: Vec<&str> = paths.iter().map(|s| s.as_str()).collect();
            let loaded = stk_config::load_layered_yaml(&path_refs)?;
            println!("config_hash={}", loaded.config_hash);
            println!("{}", loaded.canonical_json);
        }
    }

    Ok(())
}
