use crate::error::{CdResult, ComboError};
use crate::rankings::engine::{SortKey, DEFAULT_ITEMS_PER_PAGE};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub query: QueryParams,
    #[command(flatten)]
    pub display: DisplayParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct QueryParams {
    #[arg(long, default_value_t = DEFAULT_ITEMS_PER_PAGE)]
    pub per_page: usize,
    #[arg(long, default_value_t = SortKey::Rank)]
    pub sort: SortKey,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_ITEMS_PER_PAGE,
            sort: SortKey::Rank,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayParams {
    // Card names longer than this are cut in tables
    #[arg(long, default_value_t = 32)]
    pub name_width: usize,
    #[arg(long, default_value_t = 20)]
    pub bar_width: usize,
    // Rows in the stats "top" table
    #[arg(long, default_value_t = 5)]
    pub top_n: usize,
}

impl Default for DisplayParams {
    fn default() -> Self {
        Self {
            name_width: 32,
            bar_width: 20,
            top_n: 5,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CdResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ComboError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        debug!("Loaded config from {:?}: {:?}", path, config);
        Ok(config)
    }

    pub fn validate(&self) -> CdResult<()> {
        if self.query.per_page == 0 {
            return Err(ComboError::Config("per_page must be at least 1".to_string()));
        }
        if self.display.name_width < 4 {
            return Err(ComboError::Config("name_width must be at least 4".to_string()));
        }
        Ok(())
    }

    /// Copies every value the user typed on the command line over the
    /// file-provided config. Defaults filled in by clap are ignored.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(query.per_page, "per_page");
        update_if_present!(query.sort, "sort");

        update_if_present!(display.name_width, "name_width");
        update_if_present!(display.bar_width, "bar_width");
        update_if_present!(display.top_n, "top_n");
    }
}
