use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Upper bound of every metric score.
pub const METRIC_FULL_MARK: f64 = 100.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    #[serde(rename = "type")]
    pub card_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    #[serde(default)]
    pub image_url_small: String,
}

/// The nine scoring dimensions, in the order the exporter writes them.
#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, IntoStaticStr, PartialEq, Eq, Hash,
    PartialOrd, Ord,
)]
#[strum(serialize_all = "camelCase")]
pub enum Metric {
    CardAdvantage,
    BoardPresence,
    Disruption,
    Protection,
    ComboExtender,
    SpellTrapSynergy,
    ExtraDeckAccess,
    Removal,
    ResourceGeneration,
}

impl Metric {
    /// JSON key, e.g. `cardAdvantage`.
    pub fn key(&self) -> &'static str {
        self.into()
    }

    /// Human label derived from the key: `spellTrapSynergy` -> `Spell Trap Synergy`.
    pub fn label(&self) -> String {
        let mut out = String::new();
        for (i, ch) in self.key().chars().enumerate() {
            if i == 0 {
                out.extend(ch.to_uppercase());
            } else if ch.is_ascii_uppercase() {
                out.push(' ');
                out.push(ch);
            } else {
                out.push(ch);
            }
        }
        out
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::CardAdvantage => {
                "Draw effects, search effects and deck thinning; cards that generate multiple cards or search combo pieces score higher."
            }
            Self::BoardPresence => {
                "Ability to establish and keep field presence through special summons, tokens and continuous effects."
            }
            Self::Disruption => {
                "Negation, destruction, banishment and hand disruption; Counter Traps get a priority bonus."
            }
            Self::Protection => {
                "Protection from targeting or destruction, graveyard recursion and self-revival."
            }
            Self::ComboExtender => {
                "Enables longer combo chains through searches, special summons from deck and multi-effect cards."
            }
            Self::SpellTrapSynergy => {
                "How well the pair supports or is supported by Spell and Trap cards."
            }
            Self::ExtraDeckAccess => {
                "Ease of reaching Fusion, Synchro, XYZ and Link monsters from the Extra Deck."
            }
            Self::Removal => "Direct answers to opposing cards: destruction, banishment, bounce.",
            Self::ResourceGeneration => {
                "Long-game value: recurring effects, material generation and graveyard fuel."
            }
        }
    }
}

/// Per-metric scores. Keys missing from the payload read as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MetricScores {
    pub card_advantage: f64,
    pub board_presence: f64,
    pub disruption: f64,
    pub protection: f64,
    pub combo_extender: f64,
    pub spell_trap_synergy: f64,
    pub extra_deck_access: f64,
    pub removal: f64,
    pub resource_generation: f64,
}

impl MetricScores {
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::CardAdvantage => self.card_advantage,
            Metric::BoardPresence => self.board_presence,
            Metric::Disruption => self.disruption,
            Metric::Protection => self.protection,
            Metric::ComboExtender => self.combo_extender,
            Metric::SpellTrapSynergy => self.spell_trap_synergy,
            Metric::ExtraDeckAccess => self.extra_deck_access,
            Metric::Removal => self.removal,
            Metric::ResourceGeneration => self.resource_generation,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        Metric::iter().map(move |m| (m, self.get(m)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Combination {
    pub rank: u32,
    pub card1: Card,
    pub card2: Card,
    pub total_score: f64,
    pub synergy_multiplier: f64,
    #[serde(default)]
    pub scores: MetricScores,
    #[serde(default)]
    pub explanation: String,
}

impl Combination {
    pub fn cards(&self) -> [&Card; 2] {
        [&self.card1, &self.card2]
    }

    /// "Card A + Card B"
    pub fn title(&self) -> String {
        format!("{} + {}", self.card1.name, self.card2.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DatasetMetadata {
    pub total_combinations: u64,
    pub scored_combinations: u64,
    #[serde(rename = "topN")]
    pub top_n: u64,

    // Written by the exporter; informational only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cards_analyzed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score_threshold: Option<f64>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub weights: BTreeMap<String, f64>,
}

/// The whole ranking payload. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub metadata: DatasetMetadata,
    pub rankings: Vec<Combination>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.rankings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rankings.is_empty()
    }

    /// Direct lookup by rank. Ranks are normally dense 1..N so the slot at
    /// `rank - 1` is tried before falling back to a scan.
    pub fn find_by_rank(&self, rank: u32) -> Option<&Combination> {
        if rank == 0 {
            return None;
        }
        match self.rankings.get(rank as usize - 1) {
            Some(c) if c.rank == rank => Some(c),
            _ => self.rankings.iter().find(|c| c.rank == rank),
        }
    }
}
