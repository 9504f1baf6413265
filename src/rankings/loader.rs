use super::types::Dataset;
use crate::error::CdResult;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

/// Lifecycle of the ranking payload within one browsing session.
#[derive(Debug, Clone, Default)]
pub enum DatasetState {
    #[default]
    Loading,
    Loaded(Dataset),
    /// Load failed. Terminal for the session; never retried automatically.
    Unavailable(String),
}

impl DatasetState {
    pub fn dataset(&self) -> Option<&Dataset> {
        match self {
            Self::Loaded(ds) => Some(ds),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

pub fn load_from_reader<R: Read>(reader: R) -> CdResult<Dataset> {
    let dataset: Dataset = serde_json::from_reader(reader)?;
    debug!(
        "Parsed {} rankings (metadata reports {} scored)",
        dataset.rankings.len(),
        dataset.metadata.scored_combinations
    );
    Ok(dataset)
}

pub fn load_from_str(content: &str) -> CdResult<Dataset> {
    load_from_reader(content.as_bytes())
}

pub fn load_from_file<P: AsRef<Path>>(path: P) -> CdResult<Dataset> {
    let path = path.as_ref();
    info!("📂 Loading Rankings: {}", path.display());
    let file = File::open(path)?;
    load_from_reader(BufReader::new(file))
}

/// Loads the payload once, folding any failure into `Unavailable`.
pub fn load_state<P: AsRef<Path>>(path: P) -> DatasetState {
    match load_from_file(&path) {
        Ok(ds) => DatasetState::Loaded(ds),
        Err(e) => {
            warn!("⚠️  Rankings unavailable: {}", e);
            DatasetState::Unavailable(e.to_string())
        }
    }
}
