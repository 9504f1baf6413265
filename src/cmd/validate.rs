use crate::reports;
use clap::Args;
use combodex::api::BrowseSession;
use combodex::error::{CdResult, ComboError};
use combodex::rankings::integrity::check_dataset;

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Maximum number of issues to list
    #[arg(long, default_value_t = 50)]
    pub limit: usize,
}

pub fn run(args: ValidateArgs, session: &BrowseSession) -> CdResult<()> {
    let ds = session
        .dataset()
        .ok_or_else(|| ComboError::Validation("no rankings loaded".to_string()))?;

    println!("\n🔎 === RANKINGS AUDIT === 🔎");
    let report = check_dataset(ds);
    reports::integrity(&report, args.limit);
    report.ensure_no_errors()
}
