use crate::reports;
use clap::Args;
use combodex::api::BrowseSession;
use combodex::config::Config;
use combodex::rankings::engine::{self, SortKey};
use combodex::rankings::filter::FilterCriteria;

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub config: Config,
}

pub fn run(_args: StatsArgs, config: &Config, session: &BrowseSession) {
    let Some(ds) = session.dataset() else {
        println!("\nRANKINGS UNAVAILABLE.");
        return;
    };

    println!("\n📊 === DATASET OVERVIEW === 📊");
    reports::metadata(&ds.metadata, ds.len());

    if config.display.top_n == 0 || ds.is_empty() {
        return;
    }

    let top = engine::run_query(
        &ds.rankings,
        &FilterCriteria::default(),
        SortKey::Rank,
        1,
        config.display.top_n,
    );
    println!("\nTop {} Combinations:", top.items.len());
    reports::rankings(&top.items, &config.display);
}
