use crate::reports::{self, OutputFormat};
use clap::Args;
use combodex::api::BrowseSession;
use combodex::config::Config;
use combodex::error::CdResult;
use combodex::rankings::engine::QueryPage;
use combodex::rankings::filter::FilterCriteria;
use combodex::rankings::pages::{format_labels, PageLabel};
use serde::Serialize;
use std::io::{self, Write};
use tracing::info;

#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive substring of either card's name
    #[arg(long)]
    pub name: Option<String>,
    /// Monster, Spell or Trap
    #[arg(long)]
    pub card_type: Option<String>,
    #[arg(long)]
    pub monster_type: Option<String>,
    #[arg(long)]
    pub spell_type: Option<String>,
    #[arg(long)]
    pub trap_type: Option<String>,
    /// DARK, LIGHT, EARTH, WATER, FIRE, WIND or DIVINE
    #[arg(long)]
    pub attribute: Option<String>,
    /// e.g. "Monster + Spell" (order does not matter)
    #[arg(long)]
    pub combo_type: Option<String>,
    #[arg(long, default_value_t = 0.0)]
    pub min_score: f64,
}

impl From<FilterArgs> for FilterCriteria {
    fn from(a: FilterArgs) -> Self {
        FilterCriteria {
            card_name: a.name,
            card_type: a.card_type,
            monster_type: a.monster_type,
            spell_type: a.spell_type,
            trap_type: a.trap_type,
            attribute: a.attribute,
            combo_type: a.combo_type,
            min_score: a.min_score,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct BrowseArgs {
    #[command(flatten)]
    pub config: Config,

    #[command(flatten)]
    pub filters: FilterArgs,

    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    #[arg(short, long, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BrowseOutput<'a> {
    #[serde(flatten)]
    page: QueryPage<'a>,
    page_labels: Vec<PageLabel>,
}

pub fn run(args: BrowseArgs, config: &Config, session: &mut BrowseSession) -> CdResult<()> {
    session.set_filters(args.filters.into());
    session.go_to_page(args.page);

    let result = session.query();
    let labels = session.page_labels();

    info!(
        "🔎 {} matched, page {} of {}",
        result.total_matched, result.page, result.total_pages
    );

    match args.format {
        OutputFormat::Table => print_table(&result, &labels, config),
        OutputFormat::Json => {
            let out = BrowseOutput {
                page: result,
                page_labels: labels,
            };
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer_pretty(&mut handle, &out)?;
            writeln!(handle)?;
        }
        OutputFormat::Csv => write_csv(&result, io::stdout())?,
    }
    Ok(())
}

fn print_table(result: &QueryPage<'_>, labels: &[PageLabel], config: &Config) {
    println!("\nCOMBINATION DATABASE: {} pairs indexed", result.total_matched);

    if result.items.is_empty() {
        if result.total_matched == 0 {
            println!("\nNO DATA MATCH. Adjust filter parameters.");
        } else {
            println!(
                "\nPage {} is out of range (1..={}).",
                result.page, result.total_pages
            );
        }
        return;
    }

    reports::rankings(&result.items, &config.display);

    println!(
        "\nPage {} of {}:  {}",
        result.page,
        result.total_pages,
        format_labels(labels, result.page)
    );
}

pub fn write_csv<W: Write>(result: &QueryPage<'_>, out: W) -> CdResult<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record([
        "rank",
        "card1",
        "card1_type",
        "card2",
        "card2_type",
        "total_score",
        "synergy_multiplier",
    ])?;
    for c in &result.items {
        wtr.write_record([
            c.rank.to_string(),
            c.card1.name.clone(),
            c.card1.card_type.clone(),
            c.card2.name.clone(),
            c.card2.card_type.clone(),
            format!("{:.2}", c.total_score),
            format!("{:.2}", c.synergy_multiplier),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
