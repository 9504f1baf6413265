use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use combodex::api::BrowseSession;
use combodex::config::Config;
use combodex::rankings::loader::DatasetState;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse ranked two-card combinations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "data/rankings.json")]
    data: String,

    /// JSON file with query/display settings; CLI flags win over it
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Filter, sort and page through the rankings
    Browse(cmd::browse::BrowseArgs),
    /// Open one combination by rank
    Show(cmd::show::ShowArgs),
    /// Dataset summary and the top combinations
    Stats(cmd::stats::StatsArgs),
    /// The nine scoring metrics
    Metrics,
    /// Check the ranking file for broken invariants
    Validate(cmd::validate::ValidateArgs),
}

fn init_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// File config (when given) with explicit CLI flags merged on top.
fn resolve_config(cli_config: &Config, config_path: &Option<String>, sub: &ArgMatches) -> Config {
    let config = match config_path {
        Some(path) => {
            info!("⚙️  Loading Config from: {}", path);
            let mut file_config = Config::load_from_file(path).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            });
            file_config.merge_from_cli(cli_config, sub);
            file_config
        }
        None => cli_config.clone(),
    };

    if let Err(e) = config.validate() {
        error!("{}", e);
        process::exit(1);
    }
    config
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_tracing(cli.debug);

    let (cli_config, sub_name) = match &cli.command {
        Commands::Browse(args) => (Some(&args.config), "browse"),
        Commands::Show(args) => (Some(&args.config), "show"),
        Commands::Stats(args) => (Some(&args.config), "stats"),
        Commands::Metrics => {
            reports::metrics();
            return;
        }
        Commands::Validate(_) => (None, "validate"),
    };

    let config = match (cli_config, matches.subcommand_matches(sub_name)) {
        (Some(c), Some(sub)) => resolve_config(c, &cli.config, sub),
        _ => Config::default(),
    };

    let mut session = BrowseSession::with_config(&config).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    if let DatasetState::Unavailable(reason) = session.load_file(&cli.data) {
        error!("❌ Failed to load {}: {}", cli.data, reason);
        println!("\nRANKINGS UNAVAILABLE: {}", reason);
        process::exit(1);
    }

    let outcome = match cli.command {
        Commands::Browse(args) => cmd::browse::run(args, &config, &mut session).map(|_| 0),
        Commands::Show(args) => {
            cmd::show::run(args, &config, &session).map(|found| if found { 0 } else { 2 })
        }
        Commands::Stats(args) => {
            cmd::stats::run(args, &config, &session);
            Ok(0)
        }
        Commands::Validate(args) => cmd::validate::run(args, &session).map(|_| 0),
        Commands::Metrics => Ok(0),
    };

    match outcome {
        Ok(0) => {}
        Ok(code) => process::exit(code),
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}
