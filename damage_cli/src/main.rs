//! Damage CLI - resolve an attack or an ordnance blast and print the result
//!
//! ```text
//! damage_cli resolve scenarios/marine_vs_elite.toml --seed 7
//! damage_cli ordnance scenarios/squad.toml --damage "4d10 + 24" --pierce 5
//! ```
//!
//! Set `RUST_LOG=damage_core=debug` to trace every resolved instance.

use clap::{Args, Parser, Subcommand};
use damage_cli::{load_scenario, load_targets, run_ordnance, CliError, DiceSource};
use damage_core::config::{load_ruleset, RuleSet};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "damage_cli")]
#[command(about = "Resolve wargame attacks against people and vehicles", long_about = None)]
#[command(version)]
struct Cli {
    /// Rule set TOML file; the bundled rules are used otherwise
    #[arg(long, global = true)]
    ruleset: Option<PathBuf>,

    /// Seed for the dice
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Dice results to use in order, e.g. --rolls 97,4
    #[arg(long, global = true, value_delimiter = ',')]
    rolls: Vec<u32>,

    /// Print JSON instead of result lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the attack in a scenario file
    Resolve(ResolveArgs),

    /// Apply one ordnance damage roll to every target in a file
    Ordnance(OrdnanceArgs),
}

#[derive(Args)]
struct ResolveArgs {
    scenario: PathBuf,

    /// Keep remaining shields, wounds and integrity out of the result lines
    #[arg(long)]
    hide_remaining: bool,
}

#[derive(Args)]
struct OrdnanceArgs {
    targets: PathBuf,

    /// Damage roll, e.g. "4d10 + 24"
    #[arg(long)]
    damage: String,

    #[arg(long, default_value_t = 0)]
    pierce: i32,

    #[arg(long, default_value_t = 1)]
    multiplier: i32,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let rules = match &cli.ruleset {
        Some(path) => load_ruleset(path)?,
        None => RuleSet::canonical(),
    };

    match cli.command {
        Command::Resolve(args) => {
            let scenario = load_scenario(&args.scenario)?;
            let rolls = if cli.rolls.is_empty() {
                scenario.rolls.clone()
            } else {
                cli.rolls
            };
            let mut dice = DiceSource::new(rolls, cli.seed);
            let outcome = scenario.resolve(&rules, &mut dice)?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("{}", outcome.report(!args.hide_remaining).join("\n\n"));
            }
        }
        Command::Ordnance(args) => {
            let targets = load_targets(&args.targets)?;
            let mut dice = DiceSource::new(cli.rolls, cli.seed);
            let (rolled, outcomes) =
                run_ordnance(&targets, &args.damage, args.pierce, args.multiplier, &mut dice)?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&outcomes)?);
            } else {
                println!("Damage roll: {}", rolled);
                for outcome in &outcomes {
                    println!("{}", outcome.report());
                }
            }
        }
    }

    Ok(())
}
