use crate::reports::{self, OutputFormat};
use clap::Args;
use combodex::api::BrowseSession;
use combodex::config::Config;
use combodex::error::CdResult;
use combodex::rankings::detail::RankLookup;
use std::io::{self, Write};
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Rank of the combination to open
    pub rank: u32,

    #[command(flatten)]
    pub config: Config,

    #[arg(short, long, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Returns `Ok(false)` when the rank does not exist.
pub fn run(args: ShowArgs, config: &Config, session: &BrowseSession) -> CdResult<bool> {
    match session.lookup(args.rank) {
        RankLookup::Found(view) => {
            match args.format {
                OutputFormat::Json => {
                    let stdout = io::stdout();
                    let mut handle = stdout.lock();
                    serde_json::to_writer_pretty(&mut handle, &view)?;
                    writeln!(handle)?;
                }
                // CSV has no sensible shape for a single record; fall back to the table
                OutputFormat::Table | OutputFormat::Csv => reports::detail(&view, &config.display),
            }
            Ok(true)
        }
        RankLookup::NotFound(rank) => {
            warn!("Rank #{} not found", rank);
            println!("\nCOMBINATION NOT FOUND: no entry with rank #{}.", rank);
            Ok(false)
        }
        RankLookup::Unavailable => {
            println!("\nRANKINGS UNAVAILABLE.");
            Ok(false)
        }
    }
}
