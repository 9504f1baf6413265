#![allow(dead_code)]

use combodex::rankings::types::{Card, Combination, Dataset, DatasetMetadata, MetricScores};

pub fn card(name: &str, card_type: &str) -> Card {
    Card {
        id: None,
        name: name.to_string(),
        card_type: card_type.to_string(),
        attribute: None,
        image_url_small: String::new(),
    }
}

pub fn monster(name: &str, attribute: &str) -> Card {
    Card {
        attribute: Some(attribute.to_string()),
        ..card(name, "Effect Monster")
    }
}

pub fn spell(name: &str) -> Card {
    card(name, "Spell Card")
}

pub fn trap(name: &str) -> Card {
    card(name, "Trap Card")
}

/// Builder for Combination to keep fixtures short
pub struct ComboBuilder {
    combo: Combination,
}

impl ComboBuilder {
    pub fn new(rank: u32) -> Self {
        Self {
            combo: Combination {
                rank,
                card1: monster(&format!("Monster {}", rank), "DARK"),
                card2: spell(&format!("Spell {}", rank)),
                total_score: 1000.0 - rank as f64,
                synergy_multiplier: 1.0,
                scores: MetricScores::default(),
                explanation: format!("Combination number {}", rank),
            },
        }
    }

    pub fn cards(mut self, card1: Card, card2: Card) -> Self {
        self.combo.card1 = card1;
        self.combo.card2 = card2;
        self
    }

    pub fn score(mut self, total: f64) -> Self {
        self.combo.total_score = total;
        self
    }

    pub fn synergy(mut self, s: f64) -> Self {
        self.combo.synergy_multiplier = s;
        self
    }

    pub fn metrics(mut self, scores: MetricScores) -> Self {
        self.combo.scores = scores;
        self
    }

    pub fn build(self) -> Combination {
        self.combo
    }
}

/// `n` combinations ranked 1..=n with strictly decreasing scores.
pub fn ranked(n: u32) -> Vec<Combination> {
    (1..=n).map(|r| ComboBuilder::new(r).build()).collect()
}

pub fn dataset(rankings: Vec<Combination>) -> Dataset {
    Dataset {
        metadata: DatasetMetadata {
            total_combinations: rankings.len() as u64 * 10,
            scored_combinations: rankings.len() as u64,
            top_n: rankings.len() as u64,
            ..Default::default()
        },
        rankings,
    }
}

pub fn ranks(items: &[&Combination]) -> Vec<u32> {
    items.iter().map(|c| c.rank).collect()
}

pub const SAMPLE_JSON: &str = r#"{
  "metadata": {
    "totalCombinations": 45150,
    "scoredCombinations": 3,
    "topN": 3,
    "generationDate": "2024-05-01 12:00:00",
    "cardsAnalyzed": 301,
    "minScoreThreshold": 100,
    "weights": { "cardAdvantage": 1.5, "disruption": 1.2 }
  },
  "rankings": [
    {
      "rank": 1,
      "card1": { "id": 14558127, "name": "Ash Blossom & Joyous Spring", "type": "Tuner Effect Monster", "attribute": "FIRE", "image_url_small": "https://img/1.jpg" },
      "card2": { "id": 24224830, "name": "Called by the Grave", "type": "Quick-Play Spell Card", "image_url_small": "https://img/2.jpg" },
      "totalScore": 412.5,
      "synergyMultiplier": 1.8,
      "scores": {
        "cardAdvantage": 40, "boardPresence": 10, "disruption": 95, "protection": 60,
        "comboExtender": 20, "spellTrapSynergy": 70, "extraDeckAccess": 0,
        "removal": 30, "resourceGeneration": 25
      },
      "explanation": "Hand trap backed by graveyard protection."
    },
    {
      "rank": 2,
      "card1": { "name": "Blue-Eyes White Dragon", "type": "Normal Monster", "attribute": "LIGHT", "image_url_small": "" },
      "card2": { "name": "Dragon Shrine", "type": "Spell Card", "image_url_small": "" },
      "totalScore": 380.0,
      "synergyMultiplier": 1.9,
      "scores": { "cardAdvantage": 55, "boardPresence": 70 },
      "explanation": "Dragon engine."
    },
    {
      "rank": 3,
      "card1": { "name": "Solemn Judgment", "type": "Counter Trap Card", "image_url_small": "" },
      "card2": { "name": "Infinite Impermanence", "type": "Normal Trap Card", "image_url_small": "" },
      "totalScore": 301.25,
      "synergyMultiplier": 1.2,
      "scores": { "disruption": 100 }
    }
  ]
}"#;
